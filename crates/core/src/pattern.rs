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

//! Compilation of compact currency format patterns.
//!
//! # Pattern grammar
//!
//! ```text
//! <decimal_places><decimal_sign><grouping_sign><grouping_places><layout>
//! ```
//!
//! The first four positions are single characters (compared as Unicode scalar values, so a
//! separator may be a multi-byte character such as a narrow no-break space). The layout is a
//! template built from the following tokens, with any other text copied literally:
//!
//! | Token | Meaning                                                  |
//! |-------|----------------------------------------------------------|
//! | `%s`  | The currency symbol.                                     |
//! | `%a`  | The amount, with the minus sign directly in front of it. |
//! | `%u`  | The unsigned amount (requires `%-`).                     |
//! | `%-`  | The minus sign for negative amounts, empty otherwise.    |
//!
//! # Examples
//!
//! | Pattern       | 1000       | -1000       |
//! |---------------|------------|-------------|
//! | `2.,3%-%s%u`  | `$1,000.00`| `-$1,000.00`|
//! | `2,.3%s %a`   | `€ 1.000,00`| `€ -1.000,00`|
//! | `0,.3%a %s`   | `1.000 ₲`  | `-1.000 ₲`  |
//! | `5,.2%s%u%-`  | `฿10.00,00000` | `฿10.00,00000-` |

use std::{
    fmt::{Debug, Display},
    str::FromStr,
    sync::{Arc, LazyLock},
};

use dashmap::DashMap;
use smallvec::SmallVec;
use ustr::Ustr;

/// The maximum number of decimal or grouping places a single pattern digit can express.
pub const PATTERN_MAX_PLACES: u8 = 9;

const TOKEN_SYMBOL: &str = "%s";
const TOKEN_AMOUNT: &str = "%a";
const TOKEN_UNSIGNED_AMOUNT: &str = "%u";
const TOKEN_SIGN: &str = "%-";

static SPEC_CACHE: LazyLock<DashMap<Ustr, Arc<FormatSpec>>> = LazyLock::new(DashMap::new);

/// Returns the number of compiled specs held by the process-wide cache.
#[must_use]
pub fn spec_cache_len() -> usize {
    SPEC_CACHE.len()
}

/// An error raised when a format pattern does not match the pattern grammar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("format pattern is empty")]
    Empty,
    #[error(
        "format pattern '{pattern}' is truncated, expected \
         <decimal places><decimal sign><grouping sign><grouping places><layout>"
    )]
    Truncated { pattern: String },
    #[error("format pattern '{pattern}' has invalid decimal places '{found}'")]
    InvalidDecimalPlaces { pattern: String, found: String },
    #[error("format pattern '{pattern}' has invalid grouping places '{found}'")]
    InvalidGroupingPlaces { pattern: String, found: String },
    #[error("format pattern '{pattern}' contains unknown token '{token}'")]
    UnknownToken { pattern: String, token: String },
    #[error("format pattern '{pattern}' contains literal '{literal}' with a reserved '%'")]
    InvalidLiteral { pattern: String, literal: String },
    #[error("format pattern '{pattern}' has no '%s' symbol token")]
    MissingSymbol { pattern: String },
    #[error("format pattern '{pattern}' has no '%a' or '%u' amount token")]
    MissingAmount { pattern: String },
    #[error("format pattern '{pattern}' uses '%u' without a '%-' sign token")]
    MissingSign { pattern: String },
    #[error("format pattern '{pattern}' repeats the '{token}' token")]
    DuplicateToken {
        pattern: String,
        token: &'static str,
    },
    #[error("format pattern '{pattern}' combines '%a' with '%-', the sign would render twice")]
    ConflictingSign { pattern: String },
}

/// A single element of a compiled pattern layout.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutToken {
    /// The currency symbol (or alpha code).
    Symbol,
    /// The formatted number with its sign attached.
    Amount,
    /// The formatted number without a sign.
    UnsignedAmount,
    /// The minus sign for negative amounts.
    Sign,
    /// Literal text copied into the output.
    Literal(String),
}

impl LayoutToken {
    fn as_pattern_str(&self) -> &str {
        match self {
            Self::Symbol => TOKEN_SYMBOL,
            Self::Amount => TOKEN_AMOUNT,
            Self::UnsignedAmount => TOKEN_UNSIGNED_AMOUNT,
            Self::Sign => TOKEN_SIGN,
            Self::Literal(text) => text,
        }
    }
}

/// Where the minus sign of a negative amount is placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SignPosition {
    /// Directly in front of the number (`%a`, or `%-` placed between symbol and number).
    Attached,
    /// In front of the whole symbol and number composition.
    Leading,
    /// After the whole symbol and number composition.
    Trailing,
}

/// The compiled, structured form of a format pattern.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    decimal_places: u8,
    decimal_sign: char,
    grouping_sign: char,
    grouping_places: u8,
    layout: SmallVec<[LayoutToken; 4]>,
    symbol_index: usize,
    amount_index: usize,
    sign_index: Option<usize>,
}

impl FormatSpec {
    /// Creates a new [`FormatSpec`] instance from its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `decimal_places` or `grouping_places` exceed [`PATTERN_MAX_PLACES`].
    /// - `layout` does not hold exactly one symbol token and exactly one amount token.
    /// - `layout` uses an unsigned amount without a sign token (or a signed amount with one).
    /// - A literal contains the reserved `%` character.
    pub fn new<I>(
        decimal_places: u8,
        decimal_sign: char,
        grouping_sign: char,
        grouping_places: u8,
        layout: I,
    ) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = LayoutToken>,
    {
        let layout: SmallVec<[LayoutToken; 4]> = layout.into_iter().collect();
        let pattern = || {
            layout_to_pattern(
                decimal_places,
                decimal_sign,
                grouping_sign,
                grouping_places,
                &layout,
            )
        };

        if decimal_places > PATTERN_MAX_PLACES {
            return Err(PatternError::InvalidDecimalPlaces {
                pattern: pattern(),
                found: decimal_places.to_string(),
            });
        }

        if grouping_places > PATTERN_MAX_PLACES {
            return Err(PatternError::InvalidGroupingPlaces {
                pattern: pattern(),
                found: grouping_places.to_string(),
            });
        }

        if let Some(LayoutToken::Literal(literal)) = layout
            .iter()
            .find(|t| matches!(t, LayoutToken::Literal(text) if text.contains('%')))
        {
            return Err(PatternError::InvalidLiteral {
                pattern: pattern(),
                literal: literal.clone(),
            });
        }

        let (symbol_index, amount_index, sign_index) = validate_layout(&layout, &pattern)?;

        Ok(Self {
            decimal_places,
            decimal_sign,
            grouping_sign,
            grouping_places,
            layout,
            symbol_index,
            amount_index,
            sign_index,
        })
    }

    /// Compiles a pattern string into a [`FormatSpec`].
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` does not match the pattern grammar.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let mut chars = pattern.chars();
        let truncated = || PatternError::Truncated {
            pattern: pattern.to_string(),
        };

        let decimal_places = match chars.next() {
            None => return Err(PatternError::Empty),
            Some(c) => parse_places(c).ok_or_else(|| PatternError::InvalidDecimalPlaces {
                pattern: pattern.to_string(),
                found: c.to_string(),
            })?,
        };
        let decimal_sign = chars.next().ok_or_else(truncated)?;
        let grouping_sign = chars.next().ok_or_else(truncated)?;
        let grouping_places = chars.next().ok_or_else(truncated)?;
        let grouping_places =
            parse_places(grouping_places).ok_or_else(|| PatternError::InvalidGroupingPlaces {
                pattern: pattern.to_string(),
                found: grouping_places.to_string(),
            })?;

        let layout = parse_layout(chars.as_str(), pattern)?;
        let (symbol_index, amount_index, sign_index) =
            validate_layout(&layout, &|| pattern.to_string())?;

        Ok(Self {
            decimal_places,
            decimal_sign,
            grouping_sign,
            grouping_places,
            layout,
            symbol_index,
            amount_index,
            sign_index,
        })
    }

    /// Compiles a pattern, reusing a previously compiled spec for the same pattern string.
    ///
    /// Compiled specs are kept in a process-wide concurrent map. Two threads compiling the same
    /// new pattern at once may both do the work; the last insert wins and both results are equal.
    /// Patterns which fail to compile are never cached.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` does not match the pattern grammar.
    pub fn compile_cached(pattern: Ustr) -> Result<Arc<Self>, PatternError> {
        if let Some(spec) = SPEC_CACHE.get(&pattern) {
            return Ok(Arc::clone(spec.value()));
        }

        let spec = Arc::new(Self::compile(pattern.as_str())?);
        log::trace!("Compiled format pattern '{pattern}'");
        SPEC_CACHE.insert(pattern, Arc::clone(&spec));
        Ok(spec)
    }

    /// Returns the number of digits rendered after the decimal sign.
    #[must_use]
    pub const fn decimal_places(&self) -> u8 {
        self.decimal_places
    }

    /// Returns the separator between the integer and fractional parts.
    #[must_use]
    pub const fn decimal_sign(&self) -> char {
        self.decimal_sign
    }

    /// Returns the separator between digit groups.
    #[must_use]
    pub const fn grouping_sign(&self) -> char {
        self.grouping_sign
    }

    /// Returns the digit group width (0 disables grouping).
    #[must_use]
    pub const fn grouping_places(&self) -> u8 {
        self.grouping_places
    }

    /// Returns the layout template.
    #[must_use]
    pub fn layout(&self) -> &[LayoutToken] {
        &self.layout
    }

    /// Returns whether the symbol precedes the number.
    #[must_use]
    pub const fn symbol_ahead(&self) -> bool {
        self.symbol_index < self.amount_index
    }

    /// Returns the literal text between the symbol and the number.
    #[must_use]
    pub fn symbol_separator(&self) -> String {
        let (start, end) = if self.symbol_ahead() {
            (self.symbol_index, self.amount_index)
        } else {
            (self.amount_index, self.symbol_index)
        };

        self.layout[start + 1..end]
            .iter()
            .filter_map(|token| match token {
                LayoutToken::Literal(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Returns where the minus sign of negative amounts is placed.
    #[must_use]
    pub fn sign_position(&self) -> SignPosition {
        match self.sign_index {
            Some(index) if index < self.symbol_index.min(self.amount_index) => {
                SignPosition::Leading
            }
            Some(index) if index > self.symbol_index.max(self.amount_index) => {
                SignPosition::Trailing
            }
            _ => SignPosition::Attached,
        }
    }

    /// Returns the pattern string which compiles to this spec.
    #[must_use]
    pub fn to_pattern(&self) -> String {
        layout_to_pattern(
            self.decimal_places,
            self.decimal_sign,
            self.grouping_sign,
            self.grouping_places,
            &self.layout,
        )
    }
}

impl FromStr for FormatSpec {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl Debug for FormatSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(decimal_places={}, decimal_sign={:?}, grouping_sign={:?}, grouping_places={}, symbol_ahead={}, symbol_separator={:?}, sign_position={})",
            stringify!(FormatSpec),
            self.decimal_places,
            self.decimal_sign,
            self.grouping_sign,
            self.grouping_places,
            self.symbol_ahead(),
            self.symbol_separator(),
            self.sign_position(),
        )
    }
}

impl Display for FormatSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_pattern())
    }
}

fn parse_places(c: char) -> Option<u8> {
    c.to_digit(10).map(|d| d as u8)
}

fn parse_layout(layout: &str, pattern: &str) -> Result<SmallVec<[LayoutToken; 4]>, PatternError> {
    let mut tokens = SmallVec::new();
    let mut literal = String::new();
    let mut chars = layout.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }

        let token = match chars.next() {
            Some('s') => LayoutToken::Symbol,
            Some('a') => LayoutToken::Amount,
            Some('u') => LayoutToken::UnsignedAmount,
            Some('-') => LayoutToken::Sign,
            other => {
                return Err(PatternError::UnknownToken {
                    pattern: pattern.to_string(),
                    token: other.map_or_else(|| "%".to_string(), |c| format!("%{c}")),
                });
            }
        };

        if !literal.is_empty() {
            tokens.push(LayoutToken::Literal(std::mem::take(&mut literal)));
        }
        tokens.push(token);
    }

    if !literal.is_empty() {
        tokens.push(LayoutToken::Literal(literal));
    }

    Ok(tokens)
}

/// Returns the indices of the symbol, amount and sign tokens.
fn validate_layout(
    layout: &[LayoutToken],
    pattern: &dyn Fn() -> String,
) -> Result<(usize, usize, Option<usize>), PatternError> {
    let mut symbol_index = None;
    let mut amount_index = None;
    let mut sign_index = None;
    let mut is_unsigned = false;

    for (index, token) in layout.iter().enumerate() {
        let (slot, name) = match token {
            LayoutToken::Symbol => (&mut symbol_index, TOKEN_SYMBOL),
            LayoutToken::Amount => (&mut amount_index, TOKEN_AMOUNT),
            LayoutToken::UnsignedAmount => {
                is_unsigned = true;
                (&mut amount_index, TOKEN_UNSIGNED_AMOUNT)
            }
            LayoutToken::Sign => (&mut sign_index, TOKEN_SIGN),
            LayoutToken::Literal(_) => continue,
        };

        if slot.replace(index).is_some() {
            return Err(PatternError::DuplicateToken {
                pattern: pattern(),
                token: name,
            });
        }
    }

    let symbol_index = symbol_index.ok_or_else(|| PatternError::MissingSymbol {
        pattern: pattern(),
    })?;
    let amount_index = amount_index.ok_or_else(|| PatternError::MissingAmount {
        pattern: pattern(),
    })?;

    match (is_unsigned, sign_index) {
        (true, None) => Err(PatternError::MissingSign { pattern: pattern() }),
        (false, Some(_)) => Err(PatternError::ConflictingSign { pattern: pattern() }),
        _ => Ok((symbol_index, amount_index, sign_index)),
    }
}

fn layout_to_pattern(
    decimal_places: u8,
    decimal_sign: char,
    grouping_sign: char,
    grouping_places: u8,
    layout: &[LayoutToken],
) -> String {
    let mut pattern = format!("{decimal_places}{decimal_sign}{grouping_sign}{grouping_places}");
    for token in layout {
        pattern.push_str(token.as_pattern_str());
    }
    pattern
}
