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

//! Value types for currency amounts.
//!
//! [`Currency`] is a `Copy` metadata record: codes, symbols, name, default pattern and an
//! optional native numeral system. [`CurrencyValue`] pairs an exact amount with a currency and
//! a compiled format.
//!
//! # Immutability
//!
//! All value types are **immutable**. Arithmetic and [`CurrencyValue::with_amount`] return
//! new instances rather than modifying existing ones.
//!
//! # Arithmetic operations
//!
//! | Operation                         | Result          | Notes                             |
//! |-----------------------------------|-----------------|-----------------------------------|
//! | `CurrencyValue + CurrencyValue`   | `CurrencyValue` | Panics if currencies don't match. |
//! | `CurrencyValue - CurrencyValue`   | `CurrencyValue` | Panics if currencies don't match. |
//! | `-CurrencyValue`                  | `CurrencyValue` |                                   |
//!
//! The `checked_*` methods return [`CurrencyError::CurrencyMismatch`](crate::error::CurrencyError)
//! instead of panicking. Results keep the format of the left operand and the exact sum or
//! difference of the amounts.
//!
//! # Precision
//!
//! Amounts are never rounded. Rounding to the format's decimal places (half-to-even) only
//! happens when a value is rendered.

pub mod amount;
pub mod currencies;
pub mod currency;
pub mod format;
pub mod money;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use amount::ToAmount;
pub use currencies::CURRENCY_MAP;
pub use currency::Currency;
pub use format::{FormatParts, FormatPartsBuilder};
pub use money::CurrencyValue;
