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

//! Fixtures for currencies and currency values in tests.

use rstest::fixture;

use super::{Currency, CurrencyValue};

/// A custom currency outside the catalog.
#[fixture]
pub fn currency_zzz() -> Currency {
    Currency::new("ZZZ", "999", "Z", "", "Test currency", "2.,3%-%s%u", None)
}

#[fixture]
pub fn baht_1() -> CurrencyValue {
    CurrencyValue::new(1, Currency::THB())
}

#[fixture]
pub fn baht_10() -> CurrencyValue {
    CurrencyValue::new(10, Currency::THB())
}

#[fixture]
pub fn guarani_10() -> CurrencyValue {
    CurrencyValue::new(10, Currency::PYG())
}

#[fixture]
pub fn kyat_10() -> CurrencyValue {
    CurrencyValue::new(10, Currency::MMK())
}
