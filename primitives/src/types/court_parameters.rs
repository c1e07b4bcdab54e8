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

use crate::types::Karma;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// Economic and quorum parameters of the court.
///
/// The bounds of the individual fields are enforced by the court's setters, not by this type.
#[derive(Clone, Copy, Debug, Decode, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo)]
pub struct CourtParameters<Balance> {
    /// The stake a participant needs available to vote and which is locked per vote.
    pub minimum_stake: Balance,
    /// Duration of a voting round in seconds.
    pub voting_duration_secs: u64,
    /// Share of a losing voter's stake snapshot which is slashed, in basis points.
    pub penalty_bps: u16,
    /// Karma granted for voting with the consensus.
    pub karma_reward: u32,
    /// Karma removed for voting against the consensus.
    pub karma_penalty: u32,
    /// The lowest karma which is still allowed to vote (inclusive).
    pub minimum_karma_to_vote: Karma,
    /// Protocol fee taken from the collected penalties, in basis points.
    pub finalization_fee_bps: u16,
    /// Reward of the finalizer measured against the collected penalties, in basis points.
    pub finalization_reward_bps: u16,
    /// The minimum number of voters of a binding round.
    pub minimum_voters: u32,
    /// The minimum sum of voting power of a binding round.
    pub minimum_total_voting_power: Balance,
}
