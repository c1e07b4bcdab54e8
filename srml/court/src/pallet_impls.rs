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

use crate::{
    types::SettlementTally, AccountIdOf, BalanceOf, CollectedFees, Config, CourtParametersOf,
    Event, HashOf, NextRoundId, Pallet, ParticipantInfoOf, Participants, ReportOf,
    VotingRoundOf, Votes, LOG_TARGET,
};
use alloc::vec::Vec;
use frame_support::{
    storage::with_storage_layer,
    traits::{Currency, ExistenceRequirement, Get},
};
use sentinel_primitives::{
    math::{
        basis_points::{bps_mul_floor, mul_div_floor},
        checked_ops_res::{CheckedAddRes, CheckedSubRes},
    },
    traits::ReportHandler,
    types::{Karma, ReportDisposition, RoundId, RoundOutcome},
};
use sp_runtime::{
    traits::{AccountIdConversion, Zero},
    ArithmeticError, DispatchError, DispatchResult, SaturatedConversion, Saturating,
};

impl<T: Config> Pallet<T> {
    /// The account which holds all committed stakes and collected fees.
    pub fn court_account() -> AccountIdOf<T> {
        T::PalletId::get().into_account_truncating()
    }

    pub(crate) fn next_round_id() -> Result<RoundId, DispatchError> {
        let round_id = NextRoundId::<T>::get();
        NextRoundId::<T>::put(round_id.checked_add_res(&1)?);
        Ok(round_id)
    }

    /// Checks whether enough participants with enough combined power voted on `round`.
    pub(crate) fn has_quorum(round: &VotingRoundOf<T>, params: &CourtParametersOf<T>) -> bool {
        let voter_count: u32 = round.voters.len().saturated_into();
        voter_count >= params.minimum_voters
            && round.total_voting_power >= params.minimum_total_voting_power
    }

    /// A non-zero finalizer reward must be strictly below the protocol fee.
    pub(crate) fn is_valid_reward_share(reward_bps: u16, fee_bps: u16) -> bool {
        reward_bps == 0 || reward_bps < fee_bps
    }

    fn unlock(info: &mut ParticipantInfoOf<T>, who: &AccountIdOf<T>, amount: BalanceOf<T>) {
        if info.locked_stake < amount {
            log::warn!(
                target: LOG_TARGET,
                "Locked stake of {:?} is lower than the amount to unlock. Clamping to zero.",
                who,
            );
            info.locked_stake = Zero::zero();
        } else {
            info.locked_stake = info.locked_stake.saturating_sub(amount);
        }
    }

    /// Releases the locks of all `voters` of an inconclusive round.
    pub(crate) fn release_locks(round_id: RoundId, voters: &[AccountIdOf<T>]) {
        for voter in voters.iter() {
            let Some(vote) = Votes::<T>::get(round_id, voter) else {
                log::warn!(target: LOG_TARGET, "No vote of {:?} in round {}.", voter, round_id);
                continue;
            };
            Participants::<T>::mutate(voter, |maybe_info| {
                if let Some(info) = maybe_info {
                    Self::unlock(info, voter, vote.locked);
                }
            });
        }
    }

    /// Settles a quorate round and returns the sum of all penalties.
    ///
    /// The first pass releases every lock, slashes the losing side and sums up the voting
    /// power of the winning side. The second pass distributes the penalties minus the protocol
    /// fee among the winners proportional to their voting power and updates everyone's karma.
    /// Remainders of the proportional distribution stay in the court account.
    pub(crate) fn settle(
        round_id: RoundId,
        voters: &[AccountIdOf<T>],
        outcome: RoundOutcome,
        params: &CourtParametersOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        let is_suspicious = outcome == RoundOutcome::Suspicious;
        let mut tally = SettlementTally::<BalanceOf<T>>::default();
        let mut settled = Vec::with_capacity(voters.len());

        for voter in voters.iter() {
            let Some(vote) = Votes::<T>::get(round_id, voter) else {
                log::warn!(target: LOG_TARGET, "No vote of {:?} in round {}.", voter, round_id);
                continue;
            };
            let is_correct = vote.supports_suspicious == is_suspicious;
            Participants::<T>::try_mutate(voter, |maybe_info| -> DispatchResult {
                let info = maybe_info.get_or_insert_with(Default::default);
                Self::unlock(info, voter, vote.locked);
                if is_correct {
                    tally.correct_power = tally.correct_power.checked_add_res(&vote.power)?;
                    return Ok(());
                }
                let penalty: BalanceOf<T> =
                    bps_mul_floor(vote.stake_snapshot.saturated_into(), params.penalty_bps)
                        .saturated_into();
                let penalty = penalty.min(info.committed_stake);
                info.committed_stake = info.committed_stake.checked_sub_res(&penalty)?;
                info.locked_stake = info.locked_stake.min(info.committed_stake);
                tally.total_penalties = tally.total_penalties.checked_add_res(&penalty)?;
                Self::deposit_event(Event::PenaltyApplied {
                    round_id,
                    voter: voter.clone(),
                    amount: penalty,
                });
                Ok(())
            })?;
            settled.push((voter, vote.power, is_correct));
        }

        let fee: BalanceOf<T> =
            bps_mul_floor(tally.total_penalties.saturated_into(), params.finalization_fee_bps)
                .saturated_into();
        let distributable = tally.total_penalties.checked_sub_res(&fee)?;
        CollectedFees::<T>::try_mutate(|fees| -> DispatchResult {
            *fees = fees.checked_add_res(&fee)?;
            Ok(())
        })?;

        for (voter, power, is_correct) in settled {
            Participants::<T>::try_mutate(voter, |maybe_info| -> DispatchResult {
                let info = maybe_info.get_or_insert_with(Default::default);
                if is_correct {
                    info.karma = info.karma.saturating_add(Karma::from(params.karma_reward));
                    info.correct_votes = info.correct_votes.saturating_add(1);
                    if !distributable.is_zero() && !tally.correct_power.is_zero() {
                        let amount: BalanceOf<T> = mul_div_floor(
                            distributable.saturated_into(),
                            power.saturated_into(),
                            tally.correct_power.saturated_into(),
                        )
                        .ok_or(ArithmeticError::Overflow)?
                        .saturated_into();
                        info.committed_stake = info.committed_stake.checked_add_res(&amount)?;
                        Self::deposit_event(Event::RewardPaid {
                            round_id,
                            voter: voter.clone(),
                            amount,
                        });
                    }
                } else {
                    info.karma = info.karma.saturating_sub(Karma::from(params.karma_penalty));
                }
                Self::deposit_event(Event::KarmaUpdated {
                    round_id,
                    voter: voter.clone(),
                    karma: info.karma,
                });
                Ok(())
            })?;
        }

        Ok(tally.total_penalties)
    }

    /// Pays the caller of `finalize` from the collected fees. The reward is capped by the pool.
    pub(crate) fn reward_finalizer(
        round_id: RoundId,
        finalizer: &AccountIdOf<T>,
        total_penalties: BalanceOf<T>,
        params: &CourtParametersOf<T>,
    ) -> DispatchResult {
        let reward: BalanceOf<T> =
            bps_mul_floor(total_penalties.saturated_into(), params.finalization_reward_bps)
                .saturated_into();
        let amount = CollectedFees::<T>::try_mutate(
            |fees| -> Result<BalanceOf<T>, DispatchError> {
                let amount = reward.min(*fees);
                *fees = fees.checked_sub_res(&amount)?;
                Ok(amount)
            },
        )?;
        if amount.is_zero() {
            return Ok(());
        }
        T::Currency::transfer(
            &Self::court_account(),
            finalizer,
            amount,
            ExistenceRequirement::AllowDeath,
        )?;
        Self::deposit_event(Event::FinalizerRewarded {
            round_id,
            finalizer: finalizer.clone(),
            amount,
        });
        Ok(())
    }
}

impl<T> ReportHandler for Pallet<T>
where
    T: Config,
{
    type AccountId = AccountIdOf<T>;
    type Hash = HashOf<T>;

    fn on_report(report: ReportOf<T>) -> Result<ReportDisposition, DispatchError> {
        with_storage_layer(|| Self::do_submit_report(report))
    }
}
