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

//! Immutable currency values and the currency catalog for numisma.
//!
//! A [`CurrencyValue`](types::CurrencyValue) holds an exact decimal amount of a
//! [`Currency`](types::Currency) and renders it per a compact format pattern, optionally in
//! the international `<code> <amount>` form or in a native numeral system.
//!
//! # Feature flags
//!
//! - `stubs`: Enables rstest fixtures for testing in downstream crates.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod types;

pub use crate::{
    error::CurrencyError,
    types::{Currency, CurrencyValue, FormatParts, ToAmount},
};
