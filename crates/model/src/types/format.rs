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

//! Explicit format parts, an alternative to writing a pattern string by hand.

use derive_builder::Builder;
use numisma_core::{FormatSpec, LayoutToken};
use serde::{Deserialize, Serialize};

use crate::error::CurrencyError;

/// The individual settings of a format, convertible into the equivalent pattern.
///
/// The sign is always attached directly to the number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(default)]
pub struct FormatParts {
    /// The number of digits after the decimal sign.
    pub decimal_places: u8,
    /// The separator between the integer and fractional parts.
    pub decimal_sign: char,
    /// The separator between digit groups.
    pub grouping_sign: char,
    /// The digit group width (0 disables grouping).
    pub grouping_places: u8,
    /// Whether the symbol precedes the number.
    pub symbol_ahead: bool,
    /// The text between the symbol and the number.
    #[builder(setter(into))]
    pub symbol_separator: String,
    /// Whether values render in the international form by default.
    pub international: bool,
}

impl Default for FormatParts {
    /// Creates a new default [`FormatParts`] instance (`"2.,3%s%a"`).
    fn default() -> Self {
        Self {
            decimal_places: 2,
            decimal_sign: '.',
            grouping_sign: ',',
            grouping_places: 3,
            symbol_ahead: true,
            symbol_separator: String::new(),
            international: false,
        }
    }
}

impl FormatParts {
    /// Compiles these parts into a [`FormatSpec`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `symbol_separator` contains the reserved `%` character.
    /// - `decimal_places` or `grouping_places` cannot be expressed in a pattern.
    pub fn to_spec(&self) -> Result<FormatSpec, CurrencyError> {
        if self.symbol_separator.contains('%') {
            return Err(CurrencyError::InvalidFormat(format!(
                "symbol separator '{}' contains the reserved '%' character",
                self.symbol_separator
            )));
        }

        let mut layout = Vec::with_capacity(3);
        layout.push(LayoutToken::Symbol);
        if !self.symbol_separator.is_empty() {
            layout.push(LayoutToken::Literal(self.symbol_separator.clone()));
        }
        layout.push(LayoutToken::Amount);
        if !self.symbol_ahead {
            layout.reverse();
        }

        Ok(FormatSpec::new(
            self.decimal_places,
            self.decimal_sign,
            self.grouping_sign,
            self.grouping_places,
            layout,
        )?)
    }

    /// Returns the pattern string equivalent to these parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the parts cannot be expressed as a pattern, see
    /// [`FormatParts::to_spec`].
    pub fn to_pattern(&self) -> Result<String, CurrencyError> {
        Ok(self.to_spec()?.to_pattern())
    }

    /// Creates a new [`FormatParts`] instance describing the punctuation and symbol placement
    /// of `spec`.
    ///
    /// The sign placement of `spec` is not carried over.
    #[must_use]
    pub fn from_spec(spec: &FormatSpec, international: bool) -> Self {
        Self {
            decimal_places: spec.decimal_places(),
            decimal_sign: spec.decimal_sign(),
            grouping_sign: spec.grouping_sign(),
            grouping_places: spec.grouping_places(),
            symbol_ahead: spec.symbol_ahead(),
            symbol_separator: spec.symbol_separator(),
            international,
        }
    }
}
