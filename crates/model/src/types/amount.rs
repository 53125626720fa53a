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

//! Conversion of the supported amount inputs into exact decimals.
//!
//! Every input is converted without loss: text is parsed as written, integers and decimals are
//! carried over digit for digit, and binary floats are expanded to the exact decimal value of
//! their bits (so `3.14_f64` becomes `3.140000000000000124344978758017532527446746826171875`).

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use numisma_core::decimal::{check_decimal_bounds, f32_to_decimal_exact, f64_to_decimal_exact};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::CurrencyError;

/// A value which can be converted into an exact currency amount.
pub trait ToAmount {
    /// Converts `self` into an exact decimal amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not represent a finite number.
    fn to_amount(self) -> Result<BigDecimal, CurrencyError>;
}

/// Parses decimal text, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`CurrencyError::InvalidAmount`] if `input` is not a decimal number, or its exponent
/// or digit count is out of bounds.
pub fn parse_amount(input: &str) -> Result<BigDecimal, CurrencyError> {
    let invalid = |reason: String| CurrencyError::InvalidAmount {
        input: input.to_string(),
        reason,
    };

    let amount = BigDecimal::from_str(input.trim()).map_err(|e| invalid(e.to_string()))?;
    check_decimal_bounds(&amount, "amount").map_err(|e| invalid(e.to_string()))?;
    Ok(amount)
}

/// Checks the `amount` is within the bounds a currency value can round and render.
///
/// # Errors
///
/// Returns [`CurrencyError::InvalidAmount`] if the exponent or digit count is out of bounds.
pub fn check_amount(amount: &BigDecimal) -> Result<(), CurrencyError> {
    check_decimal_bounds(amount, "amount").map_err(|e| CurrencyError::InvalidAmount {
        input: format!(
            "{} digits at scale {}",
            amount.digits(),
            amount.fractional_digit_count()
        ),
        reason: e.to_string(),
    })
}

impl ToAmount for BigDecimal {
    fn to_amount(self) -> Result<BigDecimal, CurrencyError> {
        Ok(self)
    }
}

impl ToAmount for &BigDecimal {
    fn to_amount(self) -> Result<BigDecimal, CurrencyError> {
        Ok(self.clone())
    }
}

impl ToAmount for Decimal {
    fn to_amount(self) -> Result<BigDecimal, CurrencyError> {
        Ok(BigDecimal::new(
            BigInt::from(self.mantissa()),
            i64::from(self.scale()),
        ))
    }
}

impl ToAmount for &str {
    fn to_amount(self) -> Result<BigDecimal, CurrencyError> {
        parse_amount(self)
    }
}

impl ToAmount for String {
    fn to_amount(self) -> Result<BigDecimal, CurrencyError> {
        parse_amount(&self)
    }
}

impl ToAmount for &String {
    fn to_amount(self) -> Result<BigDecimal, CurrencyError> {
        parse_amount(self)
    }
}

impl ToAmount for f64 {
    fn to_amount(self) -> Result<BigDecimal, CurrencyError> {
        f64_to_decimal_exact(self).ok_or(CurrencyError::UnsupportedAmountType {
            type_name: "non-finite f64",
        })
    }
}

impl ToAmount for f32 {
    fn to_amount(self) -> Result<BigDecimal, CurrencyError> {
        f32_to_decimal_exact(self).ok_or(CurrencyError::UnsupportedAmountType {
            type_name: "non-finite f32",
        })
    }
}

macro_rules! impl_to_amount_for_int {
    ($($t:ty),*) => {
        $(
            impl ToAmount for $t {
                fn to_amount(self) -> Result<BigDecimal, CurrencyError> {
                    Ok(BigDecimal::new(BigInt::from(self), 0))
                }
            }
        )*
    };
}

impl_to_amount_for_int!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl ToAmount for &Value {
    fn to_amount(self) -> Result<BigDecimal, CurrencyError> {
        match self {
            Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    value.to_amount()
                } else if let Some(value) = number.as_u64() {
                    value.to_amount()
                } else if let Some(value) = number.as_f64() {
                    value.to_amount()
                } else {
                    Err(CurrencyError::InvalidAmount {
                        input: number.to_string(),
                        reason: "number is not representable".to_string(),
                    })
                }
            }
            Value::String(text) => parse_amount(text),
            Value::Null => Err(unsupported("null")),
            Value::Bool(_) => Err(unsupported("bool")),
            Value::Array(_) => Err(unsupported("array")),
            Value::Object(_) => Err(unsupported("object")),
        }
    }
}

impl ToAmount for Value {
    fn to_amount(self) -> Result<BigDecimal, CurrencyError> {
        (&self).to_amount()
    }
}

fn unsupported(type_name: &'static str) -> CurrencyError {
    CurrencyError::UnsupportedAmountType { type_name }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn big(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[rstest]
    #[case("10", "10")]
    #[case("  -1.50 ", "-1.50")]
    #[case("0.1", "0.1")]
    #[case("123456789012345678901234567890.123456789", "123456789012345678901234567890.123456789")]
    fn test_text_amounts(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(input.to_amount().unwrap(), big(expected));
        assert_eq!(input.to_string().to_amount().unwrap(), big(expected));
    }

    #[rstest]
    #[case("1e9223372036854775807")]
    #[case("-1E-9223372036854775807")]
    #[case("1e5000")]
    fn test_text_amounts_with_extreme_exponent(#[case] input: &str) {
        let err = input.to_amount().unwrap_err();
        assert!(matches!(
            err,
            CurrencyError::InvalidAmount { input: ref text, .. } if text == input
        ));
    }

    #[rstest]
    fn test_check_amount() {
        assert!(check_amount(&big("-1234.5678")).is_ok());
        assert!(check_amount(&f64::MAX.to_amount().unwrap()).is_ok());

        let err = check_amount(&BigDecimal::new(BigInt::from(1), -100_000)).unwrap_err();
        assert!(matches!(
            err,
            CurrencyError::InvalidAmount { ref input, .. } if input == "1 digits at scale -100000"
        ));
    }

    #[rstest]
    #[case("")]
    #[case("ten")]
    #[case("1.2.3")]
    #[case("1,000")]
    fn test_invalid_text_amounts(#[case] input: &str) {
        let result = input.to_amount();
        assert!(matches!(result, Err(CurrencyError::InvalidAmount { .. })));
    }

    #[rstest]
    fn test_integer_amounts() {
        assert_eq!(10_i32.to_amount().unwrap(), big("10"));
        assert_eq!((-7_i8).to_amount().unwrap(), big("-7"));
        assert_eq!(u128::MAX.to_amount().unwrap(), big(&u128::MAX.to_string()));
        assert_eq!(i64::MIN.to_amount().unwrap(), big(&i64::MIN.to_string()));
    }

    #[rstest]
    fn test_float_amounts_are_exact() {
        assert_eq!(
            3.14_f64.to_amount().unwrap(),
            big("3.140000000000000124344978758017532527446746826171875")
        );
        assert_eq!(0.5_f32.to_amount().unwrap(), big("0.5"));
        assert_eq!((-10.0_f64).to_amount().unwrap(), big("-10"));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_non_finite_floats(#[case] value: f64) {
        let result = value.to_amount();
        assert!(matches!(
            result,
            Err(CurrencyError::UnsupportedAmountType { .. })
        ));
    }

    #[rstest]
    fn test_decimal_amounts() {
        assert_eq!(dec!(1.10).to_amount().unwrap(), big("1.10"));
        assert_eq!(dec!(-0.0001).to_amount().unwrap(), big("-0.0001"));
        assert_eq!(big("2.5").to_amount().unwrap(), big("2.5"));
        assert_eq!((&big("2.5")).to_amount().unwrap(), big("2.5"));
    }

    #[rstest]
    #[case(json!(10), "10")]
    #[case(json!(-3), "-3")]
    #[case(json!(u64::MAX), "18446744073709551615")]
    #[case(json!(0.5), "0.5")]
    #[case(json!("12.345"), "12.345")]
    fn test_json_amounts(#[case] value: Value, #[case] expected: &str) {
        assert_eq!((&value).to_amount().unwrap(), big(expected));
    }

    #[rstest]
    #[case(json!(null), "null")]
    #[case(json!(true), "bool")]
    #[case(json!([1, 2]), "array")]
    #[case(json!({"amount": 1}), "object")]
    fn test_json_unsupported_kinds(#[case] value: Value, #[case] type_name: &str) {
        let result = value.to_amount();
        assert_eq!(
            result.unwrap_err().to_string(),
            format!("unsupported amount type '{type_name}', expected text, an integer or a decimal")
        );
    }
}
