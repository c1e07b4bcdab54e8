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

#[cfg(feature = "mock")]
pub mod mock;

use crate::types::RoundId;
use frame_support::PalletId;

// Definitions for time
pub const MILLISECS_PER_SECOND: u64 = 1_000;

// Basis points
/// Denominator of every basis point value (`10_000` bps = 100%).
pub const BASIS_POINTS: u16 = 10_000;
/// Upper bound of the share of a losing voter's stake snapshot which may be slashed.
pub const MAX_PENALTY_BPS: u16 = 5_000;
/// Upper bound of the protocol fee taken from collected penalties.
pub const MAX_FINALIZATION_FEE_BPS: u16 = 1_000;
/// Upper bound of the finalizer reward, measured against collected penalties.
pub const MAX_FINALIZATION_REWARD_BPS: u16 = 1_000;

// Karma
/// Positive karma adds `stake * karma / KARMA_BONUS_DIVISOR`, i.e. 100 karma ~ +1%.
pub const KARMA_BONUS_DIVISOR: u128 = 10_000;
/// Negative karma removes `stake * karma^2 / KARMA_PENALTY_DIVISOR`.
pub const KARMA_PENALTY_DIVISOR: u128 = 100_000;
/// Absolute negative karma above which the square is capped.
pub const KARMA_SQUARE_THRESHOLD: u128 = 10_000;
/// Saturated value of the karma square.
pub const KARMA_SQUARE_CAP: u128 = 100_000_000;

// Court
/// Pallet identifier, used to derive the account holding committed stakes and fees.
pub const COURT_PALLET_ID: PalletId = PalletId(*b"snl/cout");
/// Round identifier recorded in a subject's history when a report was auto-marked. Valid
/// round identifiers start at `1`.
pub const AUTO_MARKED_ROUND_ID: RoundId = 0;
