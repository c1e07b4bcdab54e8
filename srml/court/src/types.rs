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

use crate::{AccountIdOf, BalanceOf, Config, MomentOf, ReportOf};
use frame_support::{
    pallet_prelude::{Decode, Encode, MaxEncodedLen, TypeInfo},
    BoundedVec, CloneNoBound, PartialEqNoBound, RuntimeDebugNoBound,
};
use sentinel_primitives::types::{Karma, RoundOutcome};
use sp_runtime::Saturating;

/// The ledger entry of a participant.
#[derive(Clone, Debug, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo)]
pub struct ParticipantInfo<Balance> {
    /// The total amount committed to the court, including locked funds.
    pub committed_stake: Balance,
    /// The part of `committed_stake` which is bound to open rounds.
    pub locked_stake: Balance,
    pub karma: Karma,
    pub total_votes: u32,
    pub correct_votes: u32,
}

impl<Balance: Copy + Saturating> ParticipantInfo<Balance> {
    /// The stake which is free to price new votes or to be withdrawn.
    pub fn available_stake(&self) -> Balance {
        self.committed_stake.saturating_sub(self.locked_stake)
    }
}

/// A single vote. Never mutated after it was cast.
#[derive(Clone, Debug, Decode, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo)]
pub struct Vote<Balance> {
    pub supports_suspicious: bool,
    /// The voting power at the time the vote was cast.
    pub power: Balance,
    /// The available stake which priced the vote. Penalties are measured against it.
    pub stake_snapshot: Balance,
    /// The amount locked by this vote.
    pub locked: Balance,
}

/// A vote on a single report.
///
/// The invariant `votes_for + votes_against == total_voting_power` holds at all times and
/// `voters` is kept in cast order.
#[derive(
    CloneNoBound,
    Decode,
    Encode,
    Eq,
    MaxEncodedLen,
    PartialEqNoBound,
    RuntimeDebugNoBound,
    TypeInfo,
)]
#[scale_info(skip_type_params(T))]
pub struct VotingRound<T: Config> {
    pub report: ReportOf<T>,
    pub opened_at: MomentOf<T>,
    pub closes_at: MomentOf<T>,
    pub votes_for: BalanceOf<T>,
    pub votes_against: BalanceOf<T>,
    pub total_voting_power: BalanceOf<T>,
    pub outcome: RoundOutcome,
    pub voters: BoundedVec<AccountIdOf<T>, T::MaxVotersPerRound>,
}

impl<T: Config> VotingRound<T> {
    pub fn is_open(&self, now: MomentOf<T>) -> bool {
        now < self.closes_at
    }
}

/// Accumulated result of the first settlement pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct SettlementTally<Balance> {
    pub(crate) correct_power: Balance,
    pub(crate) total_penalties: Balance,
}
