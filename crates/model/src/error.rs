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

//! Errors raised by currency values and the currency catalog.

use numisma_core::PatternError;

/// An error raised when constructing, combining or looking up currency values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    /// The amount is of a kind which cannot represent a number.
    #[error("unsupported amount type '{type_name}', expected text, an integer or a decimal")]
    UnsupportedAmountType { type_name: &'static str },
    /// The amount text does not parse as a decimal number.
    #[error("invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },
    /// The operands of an arithmetic operation are of different currencies.
    #[error("currency mismatch: cannot combine {left} with {right}")]
    CurrencyMismatch { left: String, right: String },
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// The format parts cannot be expressed as a pattern.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("unknown currency '{0}'")]
    UnknownCurrency(String),
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_mismatch_message_names_both_codes() {
        let error = CurrencyError::CurrencyMismatch {
            left: "THB".to_string(),
            right: "ZZZ".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "currency mismatch: cannot combine THB with ZZZ"
        );
    }

    #[rstest]
    fn test_pattern_error_is_transparent() {
        let error = CurrencyError::from(PatternError::Empty);
        assert_eq!(error.to_string(), PatternError::Empty.to_string());
    }
}
