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

//! Number formatting for currency amounts.
//!
//! Rendering an amount per a [`FormatSpec`] happens in three steps:
//!
//! 1. The magnitude is rounded half-to-even to `decimal_places` and split into integer and
//!    fractional digits.
//! 2. The integer digits are grouped from the right and joined to the fraction with the
//!    decimal sign.
//! 3. The number, the sign and the symbol are composed following the spec's layout.
//!
//! Transliteration into another numeral system is a separate pass, see [`crate::digits`].

use bigdecimal::BigDecimal;
use num_bigint::Sign;

use crate::{
    decimal::round_half_even_digits,
    pattern::{FormatSpec, LayoutToken},
};

/// The decimal sign used by the international form.
pub const INTERNATIONAL_DECIMAL_SIGN: char = '.';

/// The grouping sign used by the international form.
pub const INTERNATIONAL_GROUPING_SIGN: char = ',';

/// The digit group width used by the international form.
pub const INTERNATIONAL_GROUPING_PLACES: u8 = 3;

const MINUS_SIGN: &str = "-";

/// Groups a string of ASCII digits from the right.
///
/// No separator is inserted when `grouping_places` is zero or the digits fit in one group.
#[must_use]
pub fn group_digits(digits: &str, grouping_sign: char, grouping_places: u8) -> String {
    let width = usize::from(grouping_places);
    if width == 0 || digits.len() <= width {
        return digits.to_string();
    }

    let mut result = String::with_capacity(digits.len() + digits.len() / width * 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(width) {
            result.push(grouping_sign);
        }
        result.push(c);
    }

    result
}

/// Formats the magnitude of `amount`, rounded half-to-even, with the given punctuation.
///
/// The decimal sign and fraction are omitted entirely when `decimal_places` is zero.
#[must_use]
pub fn format_unsigned(
    amount: &BigDecimal,
    decimal_places: u8,
    decimal_sign: char,
    grouping_sign: char,
    grouping_places: u8,
) -> String {
    let (int_part, frac_part) = round_half_even_digits(amount, decimal_places);
    let mut result = group_digits(&int_part, grouping_sign, grouping_places);

    if decimal_places > 0 {
        result.push(decimal_sign);
        result.push_str(&frac_part);
    }

    result
}

/// Returns the minus sign for negative amounts, otherwise an empty string.
///
/// The sign follows the exact amount, so a small negative amount which rounds to zero still
/// renders with a sign.
#[must_use]
pub fn sign_of(amount: &BigDecimal) -> &'static str {
    if amount.sign() == Sign::Minus {
        MINUS_SIGN
    } else {
        ""
    }
}

impl FormatSpec {
    /// Formats the magnitude of `amount` with this spec's punctuation.
    #[must_use]
    pub fn format_number(&self, amount: &BigDecimal) -> String {
        format_unsigned(
            amount,
            self.decimal_places(),
            self.decimal_sign(),
            self.grouping_sign(),
            self.grouping_places(),
        )
    }

    /// Renders `amount` with `symbol` following this spec's layout.
    #[must_use]
    pub fn render(&self, amount: &BigDecimal, symbol: &str) -> String {
        let number = self.format_number(amount);
        let sign = sign_of(amount);

        let mut result = String::with_capacity(number.len() + symbol.len() + 4);
        for token in self.layout() {
            match token {
                LayoutToken::Symbol => result.push_str(symbol),
                LayoutToken::Amount => {
                    result.push_str(sign);
                    result.push_str(&number);
                }
                LayoutToken::UnsignedAmount => result.push_str(&number),
                LayoutToken::Sign => result.push_str(sign),
                LayoutToken::Literal(text) => result.push_str(text),
            }
        }

        result
    }

    /// Renders `amount` in the international form: `<code> <signed number>`.
    ///
    /// The layout and punctuation of this spec are ignored; only its decimal places are kept.
    /// Grouping is fixed at three digits with `,`, and the decimal sign is `.`.
    #[must_use]
    pub fn render_international(&self, amount: &BigDecimal, code: &str) -> String {
        let number = format_unsigned(
            amount,
            self.decimal_places(),
            INTERNATIONAL_DECIMAL_SIGN,
            INTERNATIONAL_GROUPING_SIGN,
            INTERNATIONAL_GROUPING_PLACES,
        );
        format!("{code} {}{number}", sign_of(amount))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[rstest]
    #[case("0", "0")]
    #[case("1", "1")]
    #[case("12", "12")]
    #[case("123", "123")]
    #[case("1234", "1,234")]
    #[case("12345", "12,345")]
    #[case("123456", "123,456")]
    #[case("1234567", "1,234,567")]
    fn test_group_digits_by_three(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(group_digits(input, ',', 3), expected);
    }

    #[rstest]
    #[case("1000", '.', 2, "10.00")]
    #[case("1234567", '\'', 2, "1'23'45'67")]
    #[case("1234567", ' ', 4, "123 4567")]
    #[case("1234567", ',', 0, "1234567")]
    #[case("1234567", ',', 1, "1,2,3,4,5,6,7")]
    fn test_group_digits_widths(
        #[case] input: &str,
        #[case] sign: char,
        #[case] width: u8,
        #[case] expected: &str,
    ) {
        assert_eq!(group_digits(input, sign, width), expected);
    }

    #[rstest]
    fn test_group_digits_multibyte_sign() {
        assert_eq!(group_digits("1234567", '\u{202f}', 3), "1\u{202f}234\u{202f}567");
    }

    #[rstest]
    #[case("1234.5", 2, '.', ',', 3, "1,234.50")]
    #[case("1234.5", 2, ',', '.', 3, "1.234,50")]
    #[case("-1234.5", 2, ',', '.', 3, "1.234,50")]
    #[case("10", 0, ',', '.', 3, "10")]
    #[case("2.5", 0, ',', '.', 3, "2")]
    #[case("3.145", 2, '.', ',', 3, "3.14")]
    #[case("1000", 5, ',', '.', 2, "10.00,00000")]
    #[case("0.001", 2, '.', ',', 3, "0.00")]
    fn test_format_unsigned(
        #[case] amount: &str,
        #[case] decimal_places: u8,
        #[case] decimal_sign: char,
        #[case] grouping_sign: char,
        #[case] grouping_places: u8,
        #[case] expected: &str,
    ) {
        let result = format_unsigned(
            &dec(amount),
            decimal_places,
            decimal_sign,
            grouping_sign,
            grouping_places,
        );
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case("2.,3%-%s%u", "10", "฿10.00")]
    #[case("2.,3%-%s%u", "-10", "-฿10.00")]
    #[case("5,.2%s%u%-", "1000", "฿10.00,00000")]
    #[case("5,.2%s%u%-", "-1000", "฿10.00,00000-")]
    #[case("2,.3%s %a", "-1234.5", "฿ -1.234,50")]
    #[case("0,.3%a\u{a0}%s", "-1234567", "-1.234.567\u{a0}฿")]
    #[case("2.,3%s %-%u", "-1", "฿ -1.00")]
    #[case("2.,3(%s) %a", "1", "(฿) 1.00")]
    fn test_render(#[case] pattern: &str, #[case] amount: &str, #[case] expected: &str) {
        let spec = FormatSpec::compile(pattern).unwrap();
        assert_eq!(spec.render(&dec(amount), "฿"), expected);
    }

    #[rstest]
    fn test_render_negative_amount_rounding_to_zero_keeps_sign() {
        let spec = FormatSpec::compile("2.,3%-%s%u").unwrap();
        assert_eq!(spec.render(&dec("-0.001"), "$"), "-$0.00");
    }

    #[rstest]
    #[case("5,.2%s%u%-", "1000", "USD 1,000.00000")]
    #[case("5,.2%s%u%-", "-1000", "USD -1,000.00000")]
    #[case("0,.3%a %s", "1234567.5", "USD 1,234,568")]
    #[case("2,.0%s %a", "1234567.891", "USD 1,234,567.89")]
    fn test_render_international(
        #[case] pattern: &str,
        #[case] amount: &str,
        #[case] expected: &str,
    ) {
        let spec = FormatSpec::compile(pattern).unwrap();
        assert_eq!(spec.render_international(&dec(amount), "USD"), expected);
    }

    #[rstest]
    fn test_render_is_deterministic() {
        let spec = FormatSpec::compile("2,.3%s %a").unwrap();
        let amount = dec("-98765.4321");
        assert_eq!(spec.render(&amount, "€"), spec.render(&amount, "€"));
    }

    proptest! {
        #[test]
        fn prop_grouping_separator_count(int_part in "[1-9][0-9]{0,30}", width in 1_u8..=9) {
            let grouped = group_digits(&int_part, ',', width);
            let len = int_part.len();
            let width = usize::from(width);
            let expected = len.div_ceil(width) - 1;
            prop_assert_eq!(grouped.matches(',').count(), expected);
            prop_assert_eq!(grouped.replace(',', ""), int_part);
        }

        #[test]
        fn prop_sign_never_changes_rounding(units in any::<i64>(), scale in 0_i64..8, places in 0_u8..6) {
            let positive = BigDecimal::new(i128::from(units).unsigned_abs().into(), scale);
            let negative = -positive.clone();
            prop_assert_eq!(
                format_unsigned(&positive, places, '.', ',', 3),
                format_unsigned(&negative, places, '.', ',', 3)
            );
        }

        #[test]
        fn prop_render_matches_integer_half_even(units in any::<i32>(), places in 0_u8..5) {
            let amount = BigDecimal::new(units.into(), 3);
            let spec = FormatSpec::new(places, '.', ',', 0, [LayoutToken::Amount, LayoutToken::Symbol]).unwrap();
            let rendered = spec.render(&amount, "");

            let magnitude = i64::from(units).abs();
            let rounded = if places >= 3 {
                magnitude * 10_i64.pow(u32::from(places - 3))
            } else {
                let divisor = 10_i64.pow(u32::from(3 - places));
                let (mut quotient, remainder) = (magnitude / divisor, magnitude % divisor);
                if 2 * remainder > divisor || (2 * remainder == divisor && quotient % 2 == 1) {
                    quotient += 1;
                }
                quotient
            };
            let signed = if units < 0 { -rounded } else { rounded };
            let expected = BigDecimal::new(signed.into(), i64::from(places));
            prop_assert_eq!(BigDecimal::from_str(&rendered).unwrap(), expected);
        }
    }
}
