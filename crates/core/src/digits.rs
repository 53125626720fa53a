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

//! Native numeral systems for rendered amounts.
//!
//! A [`DigitTable`] maps the ASCII digits `0`-`9` (and optionally `-`, `,` and `.`) onto the
//! glyphs of another numeral system. It is applied as a final text pass over an already
//! rendered string, so it stays independent of rounding and grouping.

use std::fmt::{Debug, Display};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Eastern Arabic (Arabic-Indic) digits with Arabic decimal and thousands separators.
pub const ARABIC_INDIC: &str = "٠١٢٣٤٥٦٧٨٩-٬٫";

/// Extended Arabic-Indic (Persian) digits with Arabic decimal and thousands separators.
pub const PERSIAN: &str = "۰۱۲۳۴۵۶۷۸۹-٬٫";

/// Bengali digits.
pub const BENGALI: &str = "০১২৩৪৫৬৭৮৯";

/// Burmese (Myanmar) digits.
pub const BURMESE: &str = "၀၁၂၃၄၅၆၇၈၉";

/// Devanagari digits.
pub const DEVANAGARI: &str = "०१२३४५६७८९";

/// Khmer digits.
pub const KHMER: &str = "០១២៣៤៥៦៧៨៩";

/// Lao digits.
pub const LAO: &str = "໐໑໒໓໔໕໖໗໘໙";

/// Tibetan digits.
pub const TIBETAN: &str = "༠༡༢༣༤༥༦༧༨༩";

/// A character substitution table for rendering digits in a non-Latin numeral system.
///
/// The table is built from a string of 10 to 13 characters: the glyphs for `0` through `9`,
/// followed optionally by the glyphs replacing `-`, `,` and `.` (in that order).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitTable {
    digits: [char; 10],
    minus: Option<char>,
    comma: Option<char>,
    period: Option<char>,
}

impl DigitTable {
    /// Creates a new [`DigitTable`] instance from its glyph string.
    ///
    /// # Errors
    ///
    /// Returns an error if `glyphs` has fewer than 10 or more than 13 characters.
    pub fn new_checked(glyphs: &str) -> anyhow::Result<Self> {
        let chars: Vec<char> = glyphs.chars().collect();
        anyhow::ensure!(
            (10..=13).contains(&chars.len()),
            "invalid digit table '{glyphs}': expected 10 to 13 characters, was {}",
            chars.len()
        );

        let mut digits = ['0'; 10];
        digits.copy_from_slice(&chars[..10]);

        Ok(Self {
            digits,
            minus: chars.get(10).copied(),
            comma: chars.get(11).copied(),
            period: chars.get(12).copied(),
        })
    }

    /// Creates a new [`DigitTable`] instance from its glyph string.
    ///
    /// # Panics
    ///
    /// Panics if `glyphs` is not a valid digit table.
    #[must_use]
    pub fn new(glyphs: &str) -> Self {
        Self::new_checked(glyphs).expect(crate::correctness::FAILED)
    }

    /// Returns the glyph for the given ASCII digit value.
    #[must_use]
    pub fn digit(&self, value: u8) -> Option<char> {
        self.digits.get(usize::from(value)).copied()
    }

    /// Maps a single character, leaving anything without a replacement untouched.
    #[must_use]
    pub fn map_char(&self, c: char) -> char {
        match c {
            '0'..='9' => self.digits[(c as u8 - b'0') as usize],
            '-' => self.minus.unwrap_or(c),
            ',' => self.comma.unwrap_or(c),
            '.' => self.period.unwrap_or(c),
            _ => c,
        }
    }

    /// Rewrites every mapped ASCII character of `s` into this table's glyphs.
    #[must_use]
    pub fn transliterate(&self, s: &str) -> String {
        s.chars().map(|c| self.map_char(c)).collect()
    }

    /// Returns the glyph string this table was built from.
    #[must_use]
    pub fn glyphs(&self) -> String {
        let mut glyphs: String = self.digits.iter().collect();
        for c in [self.minus, self.comma, self.period].into_iter().flatten() {
            glyphs.push(c);
        }
        glyphs
    }
}

impl Debug for DigitTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(\"{}\")", stringify!(DigitTable), self.glyphs())
    }
}

impl Display for DigitTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyphs())
    }
}

impl Serialize for DigitTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.glyphs())
    }
}

impl<'de> Deserialize<'de> for DigitTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let glyphs = String::deserialize(deserializer)?;
        Self::new_checked(&glyphs).map_err(serde::de::Error::custom)
    }
}
