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

//! Immutable currency values.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ops::{Add, Neg, Sub},
    str::FromStr,
    sync::Arc,
};

use bigdecimal::{BigDecimal, Zero};
use num_bigint::Sign;
use numisma_core::{DigitTable, FormatSpec, correctness::FAILED};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

use crate::{
    error::CurrencyError,
    types::{
        amount::{ToAmount, check_amount},
        currency::Currency,
        format::FormatParts,
    },
};

/// Represents an exact amount of a specific currency.
///
/// The amount is an arbitrary-precision decimal and is never rounded: rounding to the
/// currency's decimal places only happens when the value is rendered, using round-half-to-even.
/// Values are immutable. Every operation returns a new value.
///
/// ```
/// use numisma_model::types::{Currency, CurrencyValue};
///
/// let price = CurrencyValue::new(10, Currency::THB());
/// assert_eq!(price.to_string(), "฿10.00");
/// assert_eq!((-price).to_string(), "-฿10.00");
/// ```
///
/// Fields cannot be reassigned after construction:
///
/// ```compile_fail
/// use numisma_model::types::{Currency, CurrencyValue};
///
/// let mut price = CurrencyValue::new(10, Currency::THB());
/// price.amount = 20.into();
/// ```
///
/// Nor can new attributes be attached to a value:
///
/// ```compile_fail
/// use numisma_model::types::{Currency, CurrencyValue};
///
/// let mut price = CurrencyValue::new(10, Currency::THB());
/// price.note = "discounted";
/// ```
///
/// Only currency values can be added to currency values:
///
/// ```compile_fail
/// use numisma_model::types::{Currency, CurrencyValue};
///
/// let total = CurrencyValue::new(1, Currency::THB()) + 1;
/// ```
#[derive(Clone)]
pub struct CurrencyValue {
    amount: BigDecimal,
    currency: Currency,
    pattern: Ustr,
    spec: Arc<FormatSpec>,
    international: bool,
}

impl CurrencyValue {
    /// Creates a new [`CurrencyValue`] instance rendered with the currency's default pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` cannot be converted into an exact decimal.
    pub fn new_checked<T: ToAmount>(amount: T, currency: Currency) -> Result<Self, CurrencyError> {
        Self::with_pattern_checked(amount, currency, currency.pattern())
    }

    /// Creates a new [`CurrencyValue`] instance rendered with the currency's default pattern.
    ///
    /// # Panics
    ///
    /// Panics if `amount` cannot be converted into an exact decimal.
    pub fn new<T: ToAmount>(amount: T, currency: Currency) -> Self {
        Self::new_checked(amount, currency).expect(FAILED)
    }

    /// Creates a new [`CurrencyValue`] instance rendered with a custom pattern.
    ///
    /// The pattern replaces the currency's default pattern entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `pattern` is not a valid format pattern.
    /// - `amount` cannot be converted into an exact decimal.
    pub fn with_pattern_checked<T: ToAmount, P: AsRef<str>>(
        amount: T,
        currency: Currency,
        pattern: P,
    ) -> Result<Self, CurrencyError> {
        let pattern = Ustr::from(pattern.as_ref());
        let spec = FormatSpec::compile_cached(pattern)?;
        let amount = amount.to_amount()?;
        check_amount(&amount)?;

        Ok(Self {
            amount,
            currency,
            pattern,
            spec,
            international: false,
        })
    }

    /// Creates a new [`CurrencyValue`] instance rendered with a custom pattern.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` or `amount` is invalid.
    pub fn with_pattern<T: ToAmount, P: AsRef<str>>(
        amount: T,
        currency: Currency,
        pattern: P,
    ) -> Self {
        Self::with_pattern_checked(amount, currency, pattern).expect(FAILED)
    }

    /// Creates a new [`CurrencyValue`] instance rendered with explicit format parts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `parts` cannot be expressed as a pattern.
    /// - `amount` cannot be converted into an exact decimal.
    pub fn with_parts_checked<T: ToAmount>(
        amount: T,
        currency: Currency,
        parts: &FormatParts,
    ) -> Result<Self, CurrencyError> {
        let pattern = parts.to_pattern()?;
        let value = Self::with_pattern_checked(amount, currency, pattern)?;
        Ok(value.with_international(parts.international))
    }

    /// Creates a new [`CurrencyValue`] instance rendered with explicit format parts.
    ///
    /// # Panics
    ///
    /// Panics if `parts` or `amount` is invalid.
    pub fn with_parts<T: ToAmount>(amount: T, currency: Currency, parts: &FormatParts) -> Self {
        Self::with_parts_checked(amount, currency, parts).expect(FAILED)
    }

    /// Returns a new value with the same currency and format, holding `amount`.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` cannot be converted into an exact decimal.
    pub fn with_amount_checked<T: ToAmount>(&self, amount: T) -> Result<Self, CurrencyError> {
        let amount = amount.to_amount()?;
        check_amount(&amount)?;
        Ok(self.with_exact_amount(amount))
    }

    /// Returns a new value with the same currency and format, holding `amount`.
    ///
    /// # Panics
    ///
    /// Panics if `amount` cannot be converted into an exact decimal.
    #[must_use]
    pub fn with_amount<T: ToAmount>(&self, amount: T) -> Self {
        self.with_amount_checked(amount).expect(FAILED)
    }

    /// Returns a new value which renders in the international form by default, or not.
    #[must_use]
    pub fn with_international(&self, international: bool) -> Self {
        Self {
            international,
            ..self.clone()
        }
    }

    fn with_exact_amount(&self, amount: BigDecimal) -> Self {
        Self {
            amount,
            currency: self.currency,
            pattern: self.pattern,
            spec: Arc::clone(&self.spec),
            international: self.international,
        }
    }

    /// Returns the exact amount.
    #[must_use]
    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    #[must_use]
    pub fn code(&self) -> Ustr {
        self.currency.code()
    }

    #[must_use]
    pub fn numeric_code(&self) -> Ustr {
        self.currency.numeric_code()
    }

    #[must_use]
    pub fn symbol(&self) -> Ustr {
        self.currency.symbol()
    }

    #[must_use]
    pub fn localized_symbol(&self) -> Ustr {
        self.currency.localized_symbol()
    }

    #[must_use]
    pub fn digits(&self) -> Option<DigitTable> {
        self.currency.digits()
    }

    /// Returns the pattern this value renders with.
    #[must_use]
    pub fn pattern(&self) -> Ustr {
        self.pattern
    }

    /// Returns the compiled form of [`CurrencyValue::pattern`].
    #[must_use]
    pub fn spec(&self) -> &FormatSpec {
        &self.spec
    }

    /// Returns whether [`Display`] renders the international form.
    #[must_use]
    pub fn is_international(&self) -> bool {
        self.international
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.sign() == Sign::Minus
    }

    /// Returns a new value holding the magnitude of this value's amount.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.with_exact_amount(self.amount.abs())
    }

    /// Returns the amount as a [`Decimal`], if it fits without rounding.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        Decimal::from_str_exact(&self.amount.to_plain_string()).ok()
    }

    /// Renders this value with the currency symbol, in the international form when
    /// `international` is true.
    #[must_use]
    pub fn format(&self, international: bool) -> String {
        self.render(self.currency.symbol(), international)
    }

    /// Renders this value as `<code> <amount>`, e.g. `USD 1,000.00`.
    #[must_use]
    pub fn format_international(&self) -> String {
        self.format(true)
    }

    /// Renders this value with the currency's localized symbol.
    #[must_use]
    pub fn format_localized(&self) -> String {
        self.render(self.currency.localized_symbol(), self.international)
    }

    fn render(&self, symbol: Ustr, international: bool) -> String {
        let rendered = if international {
            self.spec
                .render_international(&self.amount, self.currency.international_label().as_str())
        } else {
            self.spec.render(&self.amount, symbol.as_str())
        };

        match self.currency.digits() {
            Some(table) => table.transliterate(&rendered),
            None => rendered,
        }
    }

    fn check_same_currency(&self, other: &Self) -> Result<(), CurrencyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(CurrencyError::CurrencyMismatch {
                left: self.currency.key(),
                right: other.currency.key(),
            })
        }
    }

    /// Adds two values of the same currency.
    ///
    /// The result keeps the format of `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if the currencies differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, CurrencyError> {
        self.check_same_currency(other)?;
        Ok(self.with_exact_amount(&self.amount + &other.amount))
    }

    /// Subtracts `other` from `self`, both of the same currency.
    ///
    /// The result keeps the format of `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if the currencies differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, CurrencyError> {
        self.check_same_currency(other)?;
        Ok(self.with_exact_amount(&self.amount - &other.amount))
    }
}

impl PartialEq for CurrencyValue {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.amount == other.amount
    }
}

impl Eq for CurrencyValue {}

impl Hash for CurrencyValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.currency.hash(state);
    }
}

impl PartialOrd for CurrencyValue {
    /// Compares amounts of the same currency; values of different currencies are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency == other.currency {
            Some(self.amount.cmp(&other.amount))
        } else {
            None
        }
    }
}

impl Add for CurrencyValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Add<&CurrencyValue> for &CurrencyValue {
    type Output = CurrencyValue;

    fn add(self, rhs: &CurrencyValue) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Sub for CurrencyValue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Sub<&CurrencyValue> for &CurrencyValue {
    type Output = CurrencyValue;

    fn sub(self, rhs: &CurrencyValue) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Neg for CurrencyValue {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            amount: -self.amount,
            ..self
        }
    }
}

impl Neg for &CurrencyValue {
    type Output = CurrencyValue;

    fn neg(self) -> Self::Output {
        self.with_exact_amount(-self.amount.clone())
    }
}

impl Debug for CurrencyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(amount={}, currency={}, pattern={:?}, international={})",
            stringify!(CurrencyValue),
            self.amount.to_plain_string(),
            self.currency.key(),
            self.pattern.as_str(),
            self.international,
        )
    }
}

impl Display for CurrencyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format(self.international))
    }
}

impl FromStr for CurrencyValue {
    type Err = CurrencyError;

    /// Parses `"<amount> <currency key>"`, e.g. `"10.50 THB"`, using the catalog currency's
    /// default pattern.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (amount, key) = s.trim().rsplit_once(' ').ok_or_else(|| {
            CurrencyError::InvalidAmount {
                input: s.to_string(),
                reason: "expected '<amount> <currency>'".to_string(),
            }
        })?;
        let currency = Currency::from_str(key)?;
        Self::new_checked(amount, currency)
    }
}

impl Serialize for CurrencyValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!(
            "{} {}",
            self.amount.to_plain_string(),
            self.currency.key()
        ))
    }
}

impl<'de> Deserialize<'de> for CurrencyValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use numisma_core::digits::BURMESE;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::types::{format::FormatPartsBuilder, stubs::*};

    fn hash_of(value: &CurrencyValue) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    #[case(10, "฿10.00")]
    #[case(-10, "-฿10.00")]
    #[case(0, "฿0.00")]
    #[case(1_234_567, "฿1,234,567.00")]
    fn test_baht_default_pattern(#[case] amount: i64, #[case] expected: &str) {
        assert_eq!(CurrencyValue::new(amount, Currency::THB()).to_string(), expected);
    }

    #[rstest]
    fn test_accessors(baht_10: CurrencyValue) {
        assert_eq!(baht_10.code(), "THB");
        assert_eq!(baht_10.numeric_code(), "764");
        assert_eq!(baht_10.symbol(), "฿");
        assert_eq!(baht_10.localized_symbol(), "฿");
        assert_eq!(baht_10.digits(), None);
        assert_eq!(baht_10.spec().decimal_places(), 2);
        assert_eq!(baht_10.pattern(), Currency::THB().pattern());
        assert!(!baht_10.is_international());
        assert!(!baht_10.is_zero());
        assert!(!baht_10.is_negative());
    }

    #[rstest]
    fn test_with_international(baht_10: CurrencyValue) {
        let international = baht_10.with_international(true);
        assert_eq!(international.to_string(), "THB 10.00");
        assert_eq!(international, baht_10);
        assert_eq!(baht_10.to_string(), "฿10.00");
    }

    #[rstest]
    #[case(1000, "฿10.00,00000")]
    #[case(-1000, "฿10.00,00000-")]
    fn test_baht_custom_pattern(#[case] amount: i64, #[case] expected: &str) {
        let value = CurrencyValue::with_pattern(amount, Currency::THB(), "5,.2%s%u%-");
        assert_eq!(value.to_string(), expected);
        assert_eq!(value.pattern(), "5,.2%s%u%-");
    }

    #[rstest]
    #[case(1000, "K၁၀.၀၀,၀၀၀၀၀")]
    #[case(-1000, "K၁၀.၀၀,၀၀၀၀၀-")]
    fn test_kyat_custom_pattern(#[case] amount: i64, #[case] expected: &str) {
        let value = CurrencyValue::with_pattern(amount, Currency::MMK(), "5,.2%s%u%-");
        assert_eq!(value.to_string(), expected);
        assert_eq!(value.format_localized(), expected.replacen('K', "Ks", 1));
        assert_eq!(value.digits(), Some(DigitTable::new(BURMESE)));
    }

    #[rstest]
    fn test_guarani_without_minor_unit(guarani_10: CurrencyValue) {
        assert_eq!(guarani_10.to_string(), "₲\u{a0}10");
    }

    #[rstest]
    fn test_kyat_native_digits(kyat_10: CurrencyValue) {
        assert_eq!(kyat_10.to_string(), "၁၀.၀၀\u{a0}K");
        assert_eq!(kyat_10.format_localized(), "၁၀.၀၀\u{a0}Ks");
        assert_eq!(kyat_10.format_international(), "MMK ၁၀.၀၀");
    }

    #[rstest]
    fn test_arabic_indic_separators() {
        let value = CurrencyValue::new("-1234.5", Currency::ILS_PS());
        assert_eq!(value.to_string(), "₪\u{a0}-١٬٢٣٤٫٥٠");
    }

    #[rstest]
    #[case("3.145", "฿3.14")]
    #[case("3.135", "฿3.14")]
    #[case("2.675", "฿2.68")]
    #[case("-2.675", "-฿2.68")]
    #[case("-0.001", "-฿0.00")]
    fn test_half_even_rounding(#[case] amount: &str, #[case] expected: &str) {
        assert_eq!(CurrencyValue::new(amount, Currency::THB()).to_string(), expected);
    }

    #[rstest]
    fn test_float_amount_keeps_binary_expansion() {
        let value = CurrencyValue::new(2.675_f64, Currency::THB());
        assert_eq!(
            value.amount().to_plain_string(),
            "2.67499999999999982236431605997495353221893310546875"
        );
        assert_eq!(value.to_string(), "฿2.67");
    }

    #[rstest]
    fn test_decimal_amount() {
        let value = CurrencyValue::new(dec!(19.99), Currency::EUR());
        assert_eq!(value.to_string(), "19,99\u{a0}€");
        assert_eq!(value.to_decimal(), Some(dec!(19.99)));
    }

    #[rstest]
    fn test_to_decimal_out_of_range() {
        let value = CurrencyValue::new(3.14_f64, Currency::USD());
        assert_eq!(value.to_decimal(), None);
    }

    #[rstest]
    #[case(1000, "USD 1,000.00000")]
    #[case(-1000, "USD -1,000.00000")]
    fn test_international_form(#[case] amount: i64, #[case] expected: &str) {
        let value = CurrencyValue::with_pattern(amount, Currency::USD(), "5,.2%s%u%-");
        assert_eq!(value.format(true), expected);
        assert_eq!(value.format_international(), expected);
    }

    #[rstest]
    fn test_international_form_without_code() {
        let value = CurrencyValue::new("0.5", Currency::BTC());
        assert_eq!(value.format_international(), "₿ 0.50000000");
    }

    #[rstest]
    fn test_with_parts() {
        let parts = FormatPartsBuilder::default()
            .decimal_places(5)
            .decimal_sign(',')
            .grouping_sign('.')
            .grouping_places(2)
            .international(true)
            .build()
            .unwrap();
        let value = CurrencyValue::with_parts(1000, Currency::USD(), &parts);
        assert!(value.is_international());
        assert_eq!(value.to_string(), "USD 1,000.00000");
        assert_eq!(value.format(false), "$10.00,00000");
    }

    #[rstest]
    fn test_with_parts_checked_rejects_reserved_separator() {
        let parts = FormatPartsBuilder::default()
            .symbol_separator("%s")
            .build()
            .unwrap();
        let result = CurrencyValue::with_parts_checked(1, Currency::USD(), &parts);
        assert!(matches!(result, Err(CurrencyError::InvalidFormat(_))));
    }

    #[rstest]
    #[case("")]
    #[case("x.,3%s%a")]
    #[case("2.,3%a")]
    #[case("2.,3%s%u")]
    fn test_with_pattern_checked_invalid_pattern(#[case] pattern: &str) {
        let result = CurrencyValue::with_pattern_checked(1, Currency::THB(), pattern);
        assert!(matches!(result, Err(CurrencyError::Pattern(_))));
    }

    #[rstest]
    fn test_new_checked_invalid_amount() {
        let result = CurrencyValue::new_checked("1O.00", Currency::THB());
        assert!(matches!(result, Err(CurrencyError::InvalidAmount { .. })));
    }

    #[rstest]
    fn test_new_checked_extreme_exponent() {
        let result = CurrencyValue::new_checked("1e9223372036854775807", Currency::USD());
        assert!(matches!(result, Err(CurrencyError::InvalidAmount { .. })));
    }

    #[rstest]
    fn test_new_checked_out_of_bounds_decimal() {
        let amount = BigDecimal::new(1.into(), -100_000);
        let result = CurrencyValue::new_checked(amount, Currency::USD());
        assert!(matches!(result, Err(CurrencyError::InvalidAmount { .. })));
    }

    #[rstest]
    #[case(f64::MAX)]
    #[case(f64::from_bits(1))]
    fn test_new_checked_accepts_extreme_floats(#[case] amount: f64) {
        let value = CurrencyValue::new_checked(amount, Currency::USD()).unwrap();
        assert!(value.to_string().starts_with('$'));
    }

    #[rstest]
    fn test_new_checked_unsupported_amount_type() {
        let amount = serde_json::json!([10]);
        let result = CurrencyValue::new_checked(&amount, Currency::THB());
        assert_eq!(
            result,
            Err(CurrencyError::UnsupportedAmountType { type_name: "array" })
        );
    }

    #[rstest]
    fn test_add_same_currency() {
        let sum = CurrencyValue::new(1, Currency::THB()) + CurrencyValue::new(2, Currency::THB());
        assert_eq!(sum, CurrencyValue::new(3, Currency::THB()));
        assert_eq!(sum.to_string(), "฿3.00");
    }

    #[rstest]
    fn test_add_keeps_left_format() {
        let left = CurrencyValue::with_pattern("1.5", Currency::THB(), "1,.3%s %a");
        let right = CurrencyValue::new("0.25", Currency::THB());
        let sum = &left + &right;
        assert_eq!(sum.amount(), &BigDecimal::from_str("1.75").unwrap());
        assert_eq!(sum.pattern(), left.pattern());
        assert_eq!(sum.to_string(), "฿ 1,8");
    }

    #[rstest]
    fn test_checked_add_currency_mismatch(baht_1: CurrencyValue, currency_zzz: Currency) {
        let other = CurrencyValue::new(1, currency_zzz);
        let result = baht_1.checked_add(&other);
        assert_eq!(
            result,
            Err(CurrencyError::CurrencyMismatch {
                left: "THB".to_string(),
                right: "ZZZ".to_string(),
            })
        );
    }

    #[rstest]
    fn test_checked_add_variant_mismatch() {
        let israel = CurrencyValue::new(1, Currency::ILS());
        let palestine = CurrencyValue::new(1, Currency::ILS_PS());
        let error = israel.checked_add(&palestine).unwrap_err();
        assert_eq!(
            error.to_string(),
            "currency mismatch: cannot combine ILS with ILS:PS"
        );
    }

    #[rstest]
    fn test_checked_add_symbol_mismatch_without_code() {
        let token_a = Currency::new("", "0", "A", "", "Token A", "2.,3%-%s%u", None);
        let token_b = Currency::new("", "0", "B", "", "Token B", "2.,3%-%s%u", None);
        let a = CurrencyValue::new(1, token_a);
        let b = CurrencyValue::new(1, token_b);
        let error = a.checked_add(&b).unwrap_err();
        assert_eq!(
            error,
            CurrencyError::CurrencyMismatch {
                left: "A".to_string(),
                right: "B".to_string(),
            }
        );
        assert!(a.checked_sub(&b).is_err());
    }

    #[rstest]
    #[should_panic(expected = "currency mismatch: cannot combine THB with ZZZ")]
    fn test_add_currency_mismatch_panics(baht_1: CurrencyValue, currency_zzz: Currency) {
        let _ = baht_1 + CurrencyValue::new(1, currency_zzz);
    }

    #[rstest]
    fn test_sub_and_neg(baht_1: CurrencyValue) {
        let difference = &baht_1 - &CurrencyValue::new("2.5", Currency::THB());
        assert!(difference.is_negative());
        assert_eq!(difference.to_string(), "-฿1.50");
        assert_eq!(-&difference, CurrencyValue::new("1.5", Currency::THB()));
        assert_eq!(difference.abs(), -difference.clone());
    }

    #[rstest]
    #[should_panic(expected = "currency mismatch")]
    fn test_sub_currency_mismatch_panics(baht_1: CurrencyValue) {
        let _ = baht_1 - CurrencyValue::new(1, Currency::USD());
    }

    #[rstest]
    fn test_is_zero() {
        assert!(CurrencyValue::new("0.000", Currency::THB()).is_zero());
        assert!(!CurrencyValue::new("-0.001", Currency::THB()).is_zero());
    }

    #[rstest]
    fn test_with_amount_keeps_metadata() {
        let original = CurrencyValue::with_pattern(10, Currency::THB(), "5,.2%s%u%-");
        let recreated = original.with_amount(-1000);
        assert_eq!(recreated, CurrencyValue::new(-1000, Currency::THB()));
        assert_eq!(recreated.pattern(), original.pattern());
        assert_eq!(recreated.to_string(), "฿10.00,00000-");
        assert_eq!(original.amount(), &BigDecimal::from(10));
    }

    #[rstest]
    fn test_with_amount_checked_invalid() {
        let original = CurrencyValue::new(10, Currency::THB());
        assert!(original.with_amount_checked("abc").is_err());
        assert!(original.with_amount_checked("1e-9223372036854775807").is_err());
        assert!(
            original
                .with_amount_checked(BigDecimal::new(1.into(), 100_000))
                .is_err()
        );
    }

    #[rstest]
    fn test_clone_is_equal_but_distinct(baht_1: CurrencyValue) {
        let copy = baht_1.clone();
        assert_eq!(copy, baht_1);
        assert!(!std::ptr::eq(&copy, &baht_1));
    }

    #[rstest]
    fn test_equality_is_numeric_and_ignores_format() {
        let plain = CurrencyValue::new(1, Currency::THB());
        let scaled = CurrencyValue::with_pattern("1.00", Currency::THB(), "0,.3%a %s");
        assert_eq!(plain, scaled);
        assert_eq!(hash_of(&plain), hash_of(&scaled));
        assert_ne!(plain, CurrencyValue::new(1, Currency::USD()));
    }

    #[rstest]
    fn test_partial_ord() {
        let one = CurrencyValue::new(1, Currency::THB());
        let two = CurrencyValue::new(2, Currency::THB());
        assert!(one < two);
        assert_eq!(one.partial_cmp(&CurrencyValue::new(1, Currency::USD())), None);
    }

    #[rstest]
    fn test_debug() {
        let value = CurrencyValue::new("10.50", Currency::THB());
        assert_eq!(
            format!("{value:?}"),
            "CurrencyValue(amount=10.50, currency=THB, pattern=\"2.,3%-%s%u\", international=false)"
        );
    }

    #[rstest]
    #[case("10.50 THB", "฿10.50")]
    #[case("  -3 USD ", "-$3.00")]
    #[case("1 ILS:PS", "₪\u{a0}١٫٠٠")]
    fn test_from_str(#[case] input: &str, #[case] expected: &str) {
        let value = CurrencyValue::from_str(input).unwrap();
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case("10.50")]
    #[case("10.50 QQQ")]
    #[case("ten THB")]
    fn test_from_str_invalid(#[case] input: &str) {
        assert!(CurrencyValue::from_str(input).is_err());
    }

    #[rstest]
    fn test_serde_json_round_trip() {
        let value = CurrencyValue::new(3.14_f64, Currency::USD());
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(
            json,
            "\"3.140000000000000124344978758017532527446746826171875 USD\""
        );
        let parsed: CurrencyValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);
    }

    proptest! {
        #[test]
        fn prop_add_is_exact(
            a in any::<i64>(),
            b in any::<i64>(),
            scale_a in 0_i64..12,
            scale_b in 0_i64..12,
        ) {
            let left = CurrencyValue::with_pattern(BigDecimal::new(a.into(), scale_a), Currency::USD(), "4.,3%s%a");
            let right = CurrencyValue::new(BigDecimal::new(b.into(), scale_b), Currency::USD());
            let sum = left.checked_add(&right).unwrap();
            prop_assert_eq!(sum.amount(), &(left.amount() + right.amount()));
            prop_assert_eq!(sum.pattern(), left.pattern());
            prop_assert_eq!(sum.currency(), left.currency());
        }

        #[test]
        fn prop_sub_undoes_add(a in any::<i32>(), b in any::<i32>()) {
            let left = CurrencyValue::new(BigDecimal::new(a.into(), 2), Currency::EUR());
            let right = CurrencyValue::new(BigDecimal::new(b.into(), 3), Currency::EUR());
            prop_assert_eq!(&(&left + &right) - &right, left);
        }

        #[test]
        fn prop_negation_mirrors_rendering(units in 1_i64..i64::MAX) {
            let value = CurrencyValue::new(BigDecimal::new(units.into(), 3), Currency::USD());
            let negated = -value.clone();
            prop_assert_eq!(negated.to_string(), format!("-{value}"));
        }
    }
}
