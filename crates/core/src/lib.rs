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

//! Core formatting engine for numisma currency values.
//!
//! This crate knows nothing about individual currencies. It provides:
//!
//! - [`pattern`]: compiles compact format patterns (e.g. `"2.,3%-%s%u"`) into a [`FormatSpec`].
//! - [`formatting`]: renders arbitrary-precision decimals per a [`FormatSpec`].
//! - [`digits`]: transliterates rendered output into native numeral systems.
//! - [`decimal`]: exact conversions and half-even rounding on `BigDecimal`.
//! - [`correctness`]: validation helpers shared by constructors.
//!
//! # Rounding
//!
//! Rendering uses a single rounding rule: round-half-to-even on the magnitude of the amount.
//! The sign never influences the rounding decision.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod correctness;
pub mod decimal;
pub mod digits;
pub mod formatting;
pub mod pattern;

pub use crate::{
    digits::DigitTable,
    pattern::{FormatSpec, LayoutToken, PatternError, SignPosition},
};
