// Copyright 2025 Forecasting Technologies LTD.
//
// This file is part of Sentinel.
//
// Sentinel is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Sentinel is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Sentinel. If not, see <https://www.gnu.org/licenses/>.

use crate::constants::BASIS_POINTS;
use sp_arithmetic::{helpers_128bit::multiply_by_rational_with_rounding, Rounding};

/// Calculates `floor(amount * numerator / denominator)` without intermediate overflow.
///
/// Returns `None` if `denominator` is zero or if the result doesn't fit into `u128`.
pub fn mul_div_floor(amount: u128, numerator: u128, denominator: u128) -> Option<u128> {
    multiply_by_rational_with_rounding(amount, numerator, denominator, Rounding::Down)
}

/// Calculates `floor(amount * bps / 10_000)`.
///
/// The result saturates at `u128::MAX`, which is only reachable for `bps > 10_000`.
pub fn bps_mul_floor(amount: u128, bps: u16) -> u128 {
    mul_div_floor(amount, bps.into(), BASIS_POINTS.into()).unwrap_or(u128::MAX)
}
