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

//! Currency metadata records.

use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    str::FromStr,
    sync::PoisonError,
};

use numisma_core::{
    DigitTable, FormatSpec,
    correctness::{
        FAILED, check_optional_string, check_predicate_true, check_valid_string_ascii,
    },
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

use crate::{error::CurrencyError, types::currencies::CURRENCY_MAP};

/// Represents a currency: its codes, symbols, name and default rendering.
///
/// Two currencies are equal when their alpha code, numeric code and variant match. The
/// variant distinguishes currencies which share an ISO code but render differently, such as
/// the shekel as used in Israel and in Palestine. A currency with neither a code nor a variant
/// is identified by its symbol as well, matching [`Currency::key`].
#[derive(Clone, Copy)]
pub struct Currency {
    code: Ustr,
    numeric_code: Ustr,
    symbol: Ustr,
    localized_symbol: Ustr,
    name: Ustr,
    pattern: Ustr,
    digits: Option<DigitTable>,
    variant: Option<Ustr>,
}

impl Currency {
    /// Creates a new [`Currency`] instance with correctness checking.
    ///
    /// An empty `localized_symbol` falls back to `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code` is neither empty nor three uppercase ASCII letters.
    /// - `numeric_code` is not a non-empty string of ASCII digits.
    /// - `symbol` or `name` is empty.
    /// - `pattern` is not a valid format pattern.
    pub fn new_checked<T: AsRef<str>>(
        code: T,
        numeric_code: T,
        symbol: T,
        localized_symbol: T,
        name: T,
        pattern: T,
        digits: Option<DigitTable>,
    ) -> Result<Self, CurrencyError> {
        let code = code.as_ref();
        let numeric_code = numeric_code.as_ref();
        let symbol = symbol.as_ref();
        let localized_symbol = localized_symbol.as_ref();
        let name = name.as_ref();

        check_metadata(code, numeric_code, symbol, localized_symbol, name)
            .map_err(|e| CurrencyError::InvalidCurrency(e.to_string()))?;

        let pattern = Ustr::from(pattern.as_ref());
        FormatSpec::compile_cached(pattern)?;

        let localized_symbol = if localized_symbol.is_empty() {
            symbol
        } else {
            localized_symbol
        };

        Ok(Self {
            code: Ustr::from(code),
            numeric_code: Ustr::from(numeric_code),
            symbol: Ustr::from(symbol),
            localized_symbol: Ustr::from(localized_symbol),
            name: Ustr::from(name),
            pattern,
            digits,
            variant: None,
        })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if any argument fails the checks of [`Currency::new_checked`].
    #[must_use]
    pub fn new<T: AsRef<str>>(
        code: T,
        numeric_code: T,
        symbol: T,
        localized_symbol: T,
        name: T,
        pattern: T,
        digits: Option<DigitTable>,
    ) -> Self {
        Self::new_checked(
            code,
            numeric_code,
            symbol,
            localized_symbol,
            name,
            pattern,
            digits,
        )
        .expect(FAILED)
    }

    /// Returns a copy of this currency tagged with the given variant.
    ///
    /// # Errors
    ///
    /// Returns an error if `variant` is not a valid ASCII string or contains whitespace.
    pub fn with_variant_checked<T: AsRef<str>>(self, variant: T) -> Result<Self, CurrencyError> {
        let variant = variant.as_ref();
        check_valid_string_ascii(variant, stringify!(variant))
            .and_then(|()| {
                check_predicate_true(
                    !variant.contains(char::is_whitespace),
                    "`variant` contained whitespace",
                )
            })
            .map_err(|e| CurrencyError::InvalidCurrency(e.to_string()))?;

        Ok(Self {
            variant: Some(Ustr::from(variant)),
            ..self
        })
    }

    /// Returns a copy of this currency tagged with the given variant.
    ///
    /// # Panics
    ///
    /// Panics if `variant` is not a valid variant string.
    #[must_use]
    pub fn with_variant<T: AsRef<str>>(self, variant: T) -> Self {
        self.with_variant_checked(variant).expect(FAILED)
    }

    /// Returns the three letter alpha code (empty for currencies without an ISO code).
    #[must_use]
    pub fn code(&self) -> Ustr {
        self.code
    }

    #[must_use]
    pub fn numeric_code(&self) -> Ustr {
        self.numeric_code
    }

    #[must_use]
    pub fn symbol(&self) -> Ustr {
        self.symbol
    }

    #[must_use]
    pub fn localized_symbol(&self) -> Ustr {
        self.localized_symbol
    }

    #[must_use]
    pub fn name(&self) -> Ustr {
        self.name
    }

    /// Returns the default format pattern.
    #[must_use]
    pub fn pattern(&self) -> Ustr {
        self.pattern
    }

    /// Returns the native numeral system, if amounts are transliterated.
    #[must_use]
    pub fn digits(&self) -> Option<DigitTable> {
        self.digits
    }

    #[must_use]
    pub fn variant(&self) -> Option<Ustr> {
        self.variant
    }

    /// Returns the label shown by the international form: the alpha code, or the symbol
    /// when there is no code.
    #[must_use]
    pub fn international_label(&self) -> Ustr {
        if self.code.is_empty() {
            self.symbol
        } else {
            self.code
        }
    }

    /// Returns the key identifying this currency in the catalog.
    ///
    /// The key is the alpha code, suffixed with `:<variant>` when a variant is set. A currency
    /// without a code is keyed by its variant, or failing that by its symbol.
    #[must_use]
    pub fn key(&self) -> String {
        match (self.code.is_empty(), self.variant) {
            (false, None) => self.code.to_string(),
            (false, Some(variant)) => format!("{}:{variant}", self.code),
            (true, Some(variant)) => variant.to_string(),
            (true, None) => self.symbol.to_string(),
        }
    }

    /// Looks up a currency in the catalog by its key.
    #[must_use]
    pub fn try_from_code(key: &str) -> Option<Self> {
        let map = CURRENCY_MAP.lock().unwrap_or_else(PoisonError::into_inner);
        map.get(key).copied()
    }

    /// Registers a currency in the catalog under its key.
    ///
    /// An existing entry with the same key is only replaced when `overwrite` is true.
    /// Returns whether the catalog changed.
    pub fn register(currency: Self, overwrite: bool) -> bool {
        let key = currency.key();
        let mut map = CURRENCY_MAP.lock().unwrap_or_else(PoisonError::into_inner);

        if map.contains_key(&key) {
            if !overwrite {
                log::debug!("Currency {key} already registered, skipping");
                return false;
            }
            log::warn!("Replacing registered currency {key}");
        } else {
            log::debug!("Registering currency {key}");
        }

        map.insert(key, currency);
        true
    }
}

fn check_metadata(
    code: &str,
    numeric_code: &str,
    symbol: &str,
    localized_symbol: &str,
    name: &str,
) -> anyhow::Result<()> {
    check_optional_string(code, stringify!(code))?;
    check_predicate_true(
        code.is_empty() || (code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())),
        &format!("invalid `code` '{code}', expected three uppercase ASCII letters or empty"),
    )?;
    check_valid_string_ascii(numeric_code, stringify!(numeric_code))?;
    check_predicate_true(
        numeric_code.bytes().all(|b| b.is_ascii_digit()),
        &format!("invalid `numeric_code` '{numeric_code}', expected ASCII digits"),
    )?;
    check_predicate_true(!symbol.trim().is_empty(), "`symbol` was empty")?;
    check_optional_string(localized_symbol, stringify!(localized_symbol))?;
    check_predicate_true(!name.trim().is_empty(), "`name` was empty")?;
    Ok(())
}

impl Currency {
    fn identity(&self) -> (Ustr, Ustr, Option<Ustr>, Option<Ustr>) {
        let symbol = (self.code.is_empty() && self.variant.is_none()).then_some(self.symbol);
        (self.code, self.numeric_code, self.variant, symbol)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl Debug for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(code={}, numeric_code={}, symbol={}, name={}, pattern={:?}, variant={:?})",
            stringify!(Currency),
            self.code,
            self.numeric_code,
            self.symbol,
            self.name,
            self.pattern.as_str(),
            self.variant.map(|v| v.to_string()),
        )
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_code(s).ok_or_else(|| CurrencyError::UnknownCurrency(s.to_string()))
    }
}

impl From<&str> for Currency {
    /// Looks up a catalog currency by key.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a registered currency key.
    fn from(value: &str) -> Self {
        Self::from_str(value).expect(FAILED)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.key())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Self::from_str(&key).map_err(serde::de::Error::custom)
    }
}
