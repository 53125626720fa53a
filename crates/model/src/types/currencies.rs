// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! The built-in currency catalog.
//!
//! Each currency is exposed as an associated function on [`Currency`] (e.g. `Currency::THB()`)
//! backed by a lazily initialized static. [`CURRENCY_MAP`] indexes the catalog by key for
//! string lookups and accepts custom registrations.

use std::sync::{LazyLock, Mutex};

use ahash::AHashMap;
use numisma_core::{
    DigitTable,
    digits::{ARABIC_INDIC, BENGALI, BURMESE, DEVANAGARI, KHMER, LAO, PERSIAN, TIBETAN},
};

use crate::types::currency::Currency;

macro_rules! catalog_currency {
    ($(#[$doc:meta])* $fn_name:ident, $lock:ident, $init:expr) => {
        static $lock: LazyLock<Currency> = LazyLock::new(|| $init);

        impl Currency {
            $(#[$doc])*
            #[allow(non_snake_case)]
            #[must_use]
            pub fn $fn_name() -> Self {
                *$lock
            }
        }
    };
}

catalog_currency!(
    /// United Arab Emirates dirham.
    AED,
    AED_LOCK,
    Currency::new("AED", "784", "AED", "د.إ", "UAE dirham", "2.,3%s\u{a0}%a", None)
);
catalog_currency!(
    /// Afghan afghani, rendered with Persian digits.
    AFN,
    AFN_LOCK,
    Currency::new(
        "AFN",
        "971",
        "؋",
        "؋",
        "Afghan afghani",
        "2.,3%a\u{a0}%s",
        Some(DigitTable::new(PERSIAN))
    )
);
catalog_currency!(
    ARS,
    ARS_LOCK,
    Currency::new("ARS", "032", "$", "ARS$", "Argentine peso", "2,.3%s\u{a0}%a", None)
);
catalog_currency!(
    AUD,
    AUD_LOCK,
    Currency::new("AUD", "036", "$", "A$", "Australian dollar", "2.,3%-%s%u", None)
);
catalog_currency!(
    /// Bangladeshi taka, rendered with Bengali digits.
    BDT,
    BDT_LOCK,
    Currency::new(
        "BDT",
        "050",
        "৳",
        "৳",
        "Bangladeshi taka",
        "2.,3%s%a",
        Some(DigitTable::new(BENGALI))
    )
);
catalog_currency!(
    BRL,
    BRL_LOCK,
    Currency::new("BRL", "986", "R$", "R$", "Brazilian real", "2,.3%s\u{a0}%a", None)
);
catalog_currency!(
    /// Bhutanese ngultrum, rendered with Tibetan digits.
    BTN,
    BTN_LOCK,
    Currency::new(
        "BTN",
        "064",
        "Nu.",
        "Nu.",
        "Bhutanese ngultrum",
        "2.,3%s\u{a0}%a",
        Some(DigitTable::new(TIBETAN))
    )
);
catalog_currency!(
    CAD,
    CAD_LOCK,
    Currency::new("CAD", "124", "$", "CA$", "Canadian dollar", "2.,3%-%s%u", None)
);
catalog_currency!(
    CHF,
    CHF_LOCK,
    Currency::new("CHF", "756", "CHF", "CHF", "Swiss franc", "2.'3%s\u{a0}%a", None)
);
catalog_currency!(
    CNY,
    CNY_LOCK,
    Currency::new("CNY", "156", "¥", "元", "Chinese yuan", "2.,3%-%s%u", None)
);
catalog_currency!(
    CZK,
    CZK_LOCK,
    Currency::new("CZK", "203", "Kč", "Kč", "Czech koruna", "2,\u{a0}3%a\u{a0}%s", None)
);
catalog_currency!(
    DKK,
    DKK_LOCK,
    Currency::new("DKK", "208", "kr.", "kr.", "Danish krone", "2,.3%a\u{a0}%s", None)
);
catalog_currency!(
    EGP,
    EGP_LOCK,
    Currency::new("EGP", "818", "E£", "ج.م.", "Egyptian pound", "2.,3%s\u{a0}%a", None)
);
catalog_currency!(
    EUR,
    EUR_LOCK,
    Currency::new("EUR", "978", "€", "€", "Euro", "2,.3%a\u{a0}%s", None)
);
catalog_currency!(
    GBP,
    GBP_LOCK,
    Currency::new("GBP", "826", "£", "£", "Pound sterling", "2.,3%-%s%u", None)
);
catalog_currency!(
    HKD,
    HKD_LOCK,
    Currency::new("HKD", "344", "$", "HK$", "Hong Kong dollar", "2.,3%-%s%u", None)
);
catalog_currency!(
    HUF,
    HUF_LOCK,
    Currency::new("HUF", "348", "Ft", "Ft", "Hungarian forint", "0,\u{a0}3%a\u{a0}%s", None)
);
catalog_currency!(
    IDR,
    IDR_LOCK,
    Currency::new("IDR", "360", "Rp", "Rp", "Indonesian rupiah", "0,.3%s%a", None)
);
catalog_currency!(
    /// Israeli new shekel as used in Israel.
    ILS,
    ILS_LOCK,
    Currency::new("ILS", "376", "₪", "₪", "Israeli new shekel", "2.,3%a\u{a0}%s", None)
);
catalog_currency!(
    /// Israeli new shekel as used in Palestine, rendered with Arabic-Indic digits.
    ILS_PS,
    ILS_PS_LOCK,
    Currency::new(
        "ILS",
        "376",
        "₪",
        "₪",
        "Israeli new shekel (Palestine)",
        "2.,3%s\u{a0}%a",
        Some(DigitTable::new(ARABIC_INDIC))
    )
    .with_variant("PS")
);
catalog_currency!(
    INR,
    INR_LOCK,
    Currency::new("INR", "356", "₹", "₹", "Indian rupee", "2.,3%-%s%u", None)
);
catalog_currency!(
    /// Iranian rial, rendered with Persian digits.
    IRR,
    IRR_LOCK,
    Currency::new(
        "IRR",
        "364",
        "﷼",
        "﷼",
        "Iranian rial",
        "0.,3%a\u{a0}%s",
        Some(DigitTable::new(PERSIAN))
    )
);
catalog_currency!(
    JPY,
    JPY_LOCK,
    Currency::new("JPY", "392", "¥", "￥", "Japanese yen", "0.,3%-%s%u", None)
);
catalog_currency!(
    /// Cambodian riel, rendered with Khmer digits.
    KHR,
    KHR_LOCK,
    Currency::new(
        "KHR",
        "116",
        "៛",
        "៛",
        "Cambodian riel",
        "2.,3%a%s",
        Some(DigitTable::new(KHMER))
    )
);
catalog_currency!(
    KRW,
    KRW_LOCK,
    Currency::new("KRW", "410", "₩", "₩", "South Korean won", "0.,3%-%s%u", None)
);
catalog_currency!(
    KWD,
    KWD_LOCK,
    Currency::new("KWD", "414", "KD", "د.ك", "Kuwaiti dinar", "3.,3%s\u{a0}%a", None)
);
catalog_currency!(
    /// Lao kip, rendered with Lao digits.
    LAK,
    LAK_LOCK,
    Currency::new("LAK", "418", "₭", "₭", "Lao kip", "2.,3%s%a", Some(DigitTable::new(LAO)))
);
catalog_currency!(
    /// Myanmar kyat, rendered with Burmese digits.
    MMK,
    MMK_LOCK,
    Currency::new(
        "MMK",
        "104",
        "K",
        "Ks",
        "Myanmar kyat",
        "2.,3%a\u{a0}%s",
        Some(DigitTable::new(BURMESE))
    )
);
catalog_currency!(
    MXN,
    MXN_LOCK,
    Currency::new("MXN", "484", "$", "MX$", "Mexican peso", "2.,3%-%s%u", None)
);
catalog_currency!(
    NGN,
    NGN_LOCK,
    Currency::new("NGN", "566", "₦", "₦", "Nigerian naira", "2.,3%-%s%u", None)
);
catalog_currency!(
    NOK,
    NOK_LOCK,
    Currency::new("NOK", "578", "kr", "kr", "Norwegian krone", "2,\u{a0}3%a\u{a0}%s", None)
);
catalog_currency!(
    /// Nepalese rupee, rendered with Devanagari digits.
    NPR,
    NPR_LOCK,
    Currency::new(
        "NPR",
        "524",
        "रू",
        "रू",
        "Nepalese rupee",
        "2.,3%s\u{a0}%a",
        Some(DigitTable::new(DEVANAGARI))
    )
);
catalog_currency!(
    NZD,
    NZD_LOCK,
    Currency::new("NZD", "554", "$", "NZ$", "New Zealand dollar", "2.,3%-%s%u", None)
);
catalog_currency!(
    PHP,
    PHP_LOCK,
    Currency::new("PHP", "608", "₱", "₱", "Philippine peso", "2.,3%-%s%u", None)
);
catalog_currency!(
    PKR,
    PKR_LOCK,
    Currency::new("PKR", "586", "Rs", "Rs", "Pakistani rupee", "2.,3%s\u{a0}%a", None)
);
catalog_currency!(
    PLN,
    PLN_LOCK,
    Currency::new("PLN", "985", "zł", "zł", "Polish złoty", "2,\u{a0}3%a\u{a0}%s", None)
);
catalog_currency!(
    /// Paraguayan guaraní, which has no minor unit in use.
    PYG,
    PYG_LOCK,
    Currency::new("PYG", "600", "₲", "₲", "Paraguayan guaraní", "0,.3%s\u{a0}%a", None)
);
catalog_currency!(
    RUB,
    RUB_LOCK,
    Currency::new("RUB", "643", "₽", "₽", "Russian ruble", "2,\u{a0}3%a\u{a0}%s", None)
);
catalog_currency!(
    SAR,
    SAR_LOCK,
    Currency::new("SAR", "682", "SR", "ر.س", "Saudi riyal", "2.,3%s\u{a0}%a", None)
);
catalog_currency!(
    SEK,
    SEK_LOCK,
    Currency::new("SEK", "752", "kr", "kr", "Swedish krona", "2,\u{a0}3%a\u{a0}%s", None)
);
catalog_currency!(
    SGD,
    SGD_LOCK,
    Currency::new("SGD", "702", "$", "S$", "Singapore dollar", "2.,3%-%s%u", None)
);
catalog_currency!(
    THB,
    THB_LOCK,
    Currency::new("THB", "764", "฿", "฿", "Thai baht", "2.,3%-%s%u", None)
);
catalog_currency!(
    TRY,
    TRY_LOCK,
    Currency::new("TRY", "949", "₺", "₺", "Turkish lira", "2,.3%s%a", None)
);
catalog_currency!(
    TWD,
    TWD_LOCK,
    Currency::new("TWD", "901", "$", "NT$", "New Taiwan dollar", "2.,3%-%s%u", None)
);
catalog_currency!(
    UAH,
    UAH_LOCK,
    Currency::new("UAH", "980", "₴", "₴", "Ukrainian hryvnia", "2,\u{a0}3%a\u{a0}%s", None)
);
catalog_currency!(
    USD,
    USD_LOCK,
    Currency::new("USD", "840", "$", "US$", "United States dollar", "2.,3%-%s%u", None)
);
catalog_currency!(
    VND,
    VND_LOCK,
    Currency::new("VND", "704", "₫", "₫", "Vietnamese đồng", "0,.3%a\u{a0}%s", None)
);
catalog_currency!(
    ZAR,
    ZAR_LOCK,
    Currency::new("ZAR", "710", "R", "R", "South African rand", "2,\u{a0}3%s\u{a0}%a", None)
);
catalog_currency!(
    /// Bitcoin. Has no ISO code and is keyed by its variant.
    BTC,
    BTC_LOCK,
    Currency::new("", "0", "₿", "₿", "Bitcoin", "8.,3%-%s%u", None).with_variant("BTC")
);
catalog_currency!(
    /// Ether. Has no ISO code and is keyed by its variant.
    ETH,
    ETH_LOCK,
    Currency::new("", "0", "Ξ", "Ξ", "Ether", "8.,3%-%s%u", None).with_variant("ETH")
);

const CATALOG: &[fn() -> Currency] = &[
    Currency::AED,
    Currency::AFN,
    Currency::ARS,
    Currency::AUD,
    Currency::BDT,
    Currency::BRL,
    Currency::BTN,
    Currency::CAD,
    Currency::CHF,
    Currency::CNY,
    Currency::CZK,
    Currency::DKK,
    Currency::EGP,
    Currency::EUR,
    Currency::GBP,
    Currency::HKD,
    Currency::HUF,
    Currency::IDR,
    Currency::ILS,
    Currency::ILS_PS,
    Currency::INR,
    Currency::IRR,
    Currency::JPY,
    Currency::KHR,
    Currency::KRW,
    Currency::KWD,
    Currency::LAK,
    Currency::MMK,
    Currency::MXN,
    Currency::NGN,
    Currency::NOK,
    Currency::NPR,
    Currency::NZD,
    Currency::PHP,
    Currency::PKR,
    Currency::PLN,
    Currency::PYG,
    Currency::RUB,
    Currency::SAR,
    Currency::SEK,
    Currency::SGD,
    Currency::THB,
    Currency::TRY,
    Currency::TWD,
    Currency::UAH,
    Currency::USD,
    Currency::VND,
    Currency::ZAR,
    Currency::BTC,
    Currency::ETH,
];

/// Returns every built-in currency.
pub fn catalog() -> impl Iterator<Item = Currency> {
    CATALOG.iter().map(|currency| currency())
}

/// The process-wide currency catalog, keyed by [`Currency::key`].
pub static CURRENCY_MAP: LazyLock<Mutex<AHashMap<String, Currency>>> = LazyLock::new(|| {
    let map = catalog()
        .map(|currency| (currency.key(), currency))
        .collect::<AHashMap<_, _>>();
    Mutex::new(map)
});
