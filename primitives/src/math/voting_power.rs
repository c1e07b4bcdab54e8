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

//! Voting power of a participant, derived from available stake and karma.
//!
//! Positive karma grants a linear bonus of `karma / 10_000` of the stake (100 karma ~ +1%).
//! Negative karma is punished quadratically: `stake * min(karma^2, 10^8) / 10^5` is removed
//! from the stake, so the power may become negative. Voting requires strictly positive power.

use crate::{
    constants::{
        KARMA_BONUS_DIVISOR, KARMA_PENALTY_DIVISOR, KARMA_SQUARE_CAP, KARMA_SQUARE_THRESHOLD,
    },
    math::basis_points::mul_div_floor,
    types::{Karma, VotingPower},
};

/// Returns the (signed) voting power of `available_stake` modulated by `karma`.
///
/// No-one can stake more than the total issuance, so the intermediate results saturate instead
/// of failing. All divisions round down.
pub fn voting_power(available_stake: u128, karma: Karma) -> VotingPower {
    let karma_abs = u128::from(karma.unsigned_abs());
    if karma >= 0 {
        let bonus =
            mul_div_floor(available_stake, karma_abs, KARMA_BONUS_DIVISOR).unwrap_or(u128::MAX);
        to_signed(available_stake.saturating_add(bonus))
    } else {
        let squared = if karma_abs > KARMA_SQUARE_THRESHOLD {
            KARMA_SQUARE_CAP
        } else {
            karma_abs.saturating_mul(karma_abs)
        };
        let penalty =
            mul_div_floor(available_stake, squared, KARMA_PENALTY_DIVISOR).unwrap_or(u128::MAX);
        to_signed(available_stake).saturating_sub(to_signed(penalty))
    }
}

fn to_signed(value: u128) -> VotingPower {
    VotingPower::try_from(value).unwrap_or(VotingPower::MAX)
}
