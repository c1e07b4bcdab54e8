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
    types::{Vote, VotingRound},
    AccountIdOf, BalanceOf, CollectedFees, Config, Error, Event, MomentOf, Pallet, Parameters,
    Participants, ReportOf, Rounds, Votes, LOG_TARGET,
};
use frame_support::{
    ensure, require_transactional,
    traits::{Currency, ExistenceRequirement},
};
use sentinel_primitives::{
    constants::{
        AUTO_MARKED_ROUND_ID, MAX_FINALIZATION_FEE_BPS, MAX_FINALIZATION_REWARD_BPS,
        MAX_PENALTY_BPS, MILLISECS_PER_SECOND,
    },
    math::{
        checked_ops_res::{CheckedAddRes, CheckedSubRes},
        voting_power::voting_power,
    },
    traits::VerdictCommonsPalletApi,
    types::{ReportDisposition, RoundId, RoundOutcome},
};
use sp_runtime::{
    traits::Zero, DispatchError, DispatchResult, SaturatedConversion, Saturating,
};

impl<T: Config> Pallet<T> {
    #[require_transactional]
    pub(crate) fn do_deposit(who: AccountIdOf<T>, amount: BalanceOf<T>) -> DispatchResult {
        ensure!(!amount.is_zero(), Error::<T>::InvalidAmount);

        T::Currency::transfer(
            &who,
            &Self::court_account(),
            amount,
            ExistenceRequirement::AllowDeath,
        )?;
        let committed_stake = Participants::<T>::try_mutate(
            &who,
            |maybe_info| -> Result<BalanceOf<T>, DispatchError> {
                let info = maybe_info.get_or_insert_with(Default::default);
                info.committed_stake = info.committed_stake.checked_add_res(&amount)?;
                Ok(info.committed_stake)
            },
        )?;

        Self::deposit_event(Event::StakeDeposited { who, amount, committed_stake });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_withdraw(who: AccountIdOf<T>, amount: BalanceOf<T>) -> DispatchResult {
        ensure!(!amount.is_zero(), Error::<T>::InvalidAmount);

        let committed_stake = Participants::<T>::try_mutate(
            &who,
            |maybe_info| -> Result<BalanceOf<T>, DispatchError> {
                let info = maybe_info.as_mut().ok_or(Error::<T>::InsufficientStake)?;
                ensure!(info.locked_stake.is_zero(), Error::<T>::StakeLocked);
                ensure!(amount <= info.available_stake(), Error::<T>::InsufficientStake);
                info.committed_stake = info.committed_stake.checked_sub_res(&amount)?;
                Ok(info.committed_stake)
            },
        )?;
        T::Currency::transfer(
            &Self::court_account(),
            &who,
            amount,
            ExistenceRequirement::AllowDeath,
        )?;

        Self::deposit_event(Event::StakeWithdrawn { who, amount, committed_stake });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_submit_report(
        report: ReportOf<T>,
    ) -> Result<ReportDisposition, DispatchError> {
        let subject = report.subject.clone();

        if T::VerdictCommons::is_flagged(&subject) {
            let index = T::VerdictCommons::log_incident(&subject, AUTO_MARKED_ROUND_ID)?;
            let total_incidents = index.saturating_add(1);
            log::debug!(
                target: LOG_TARGET,
                "Subject {:?} is flagged, auto-marked incident #{}.",
                subject,
                total_incidents,
            );
            Self::deposit_event(Event::AutoMarked { subject, total_incidents });
            return Ok(ReportDisposition::AutoMarked);
        }

        let params = Parameters::<T>::get();
        let round_id = Self::next_round_id()?;
        let opened_at = T::VerdictCommons::now();
        let duration: MomentOf<T> =
            params.voting_duration_secs.saturating_mul(MILLISECS_PER_SECOND).saturated_into();
        let closes_at = opened_at.saturating_add(duration);
        let detector = report.detector.clone();
        let round = VotingRound::<T> {
            report,
            opened_at,
            closes_at,
            votes_for: Zero::zero(),
            votes_against: Zero::zero(),
            total_voting_power: Zero::zero(),
            outcome: RoundOutcome::Pending,
            voters: Default::default(),
        };
        Rounds::<T>::insert(round_id, round);
        T::VerdictCommons::log_incident(&subject, round_id)?;

        log::debug!(target: LOG_TARGET, "Opened round {} for subject {:?}.", round_id, subject);
        Self::deposit_event(Event::RoundOpened { round_id, subject, detector, closes_at });

        Ok(ReportDisposition::RoundOpened(round_id))
    }

    #[require_transactional]
    pub(crate) fn do_cast_vote(
        who: AccountIdOf<T>,
        round_id: RoundId,
        supports_suspicious: bool,
    ) -> DispatchResult {
        let mut round = Rounds::<T>::get(round_id).ok_or(Error::<T>::InvalidRoundId)?;
        ensure!(!round.outcome.is_finalized(), Error::<T>::AlreadyFinalized);
        ensure!(round.is_open(T::VerdictCommons::now()), Error::<T>::VotingClosed);
        ensure!(!Votes::<T>::contains_key(round_id, &who), Error::<T>::AlreadyVoted);
        ensure!(who != round.report.subject, Error::<T>::SelfVote);

        let params = Parameters::<T>::get();
        let mut info = Participants::<T>::get(&who).unwrap_or_default();
        ensure!(info.karma >= params.minimum_karma_to_vote, Error::<T>::InsufficientKarma);
        let stake_snapshot = info.available_stake();
        ensure!(stake_snapshot >= params.minimum_stake, Error::<T>::InsufficientStake);
        let signed_power = voting_power(stake_snapshot.saturated_into(), info.karma);
        ensure!(signed_power > 0, Error::<T>::InsufficientVotingPower);
        let power: BalanceOf<T> = signed_power.unsigned_abs().saturated_into();

        round.voters.try_push(who.clone()).map_err(|_| Error::<T>::TooManyVoters)?;
        if supports_suspicious {
            round.votes_for = round.votes_for.checked_add_res(&power)?;
        } else {
            round.votes_against = round.votes_against.checked_add_res(&power)?;
        }
        round.total_voting_power = round.total_voting_power.checked_add_res(&power)?;

        let locked = params.minimum_stake;
        info.locked_stake = info.locked_stake.checked_add_res(&locked)?;
        info.total_votes = info.total_votes.saturating_add(1);

        Participants::<T>::insert(&who, info);
        Votes::<T>::insert(
            round_id,
            &who,
            Vote { supports_suspicious, power, stake_snapshot, locked },
        );
        Rounds::<T>::insert(round_id, round);

        Self::deposit_event(Event::VoteCast { round_id, voter: who, supports_suspicious, power });

        Ok(())
    }

    /// Returns the number of voters of the round.
    #[require_transactional]
    pub(crate) fn do_finalize(
        who: AccountIdOf<T>,
        round_id: RoundId,
    ) -> Result<u32, DispatchError> {
        let mut round = Rounds::<T>::get(round_id).ok_or(Error::<T>::InvalidRoundId)?;
        ensure!(!round.outcome.is_finalized(), Error::<T>::AlreadyFinalized);
        ensure!(!round.is_open(T::VerdictCommons::now()), Error::<T>::RoundStillOpen);

        let params = Parameters::<T>::get();
        let voter_count: u32 = round.voters.len().saturated_into();

        let total_penalties = if Self::has_quorum(&round, &params) {
            let outcome = RoundOutcome::from_tally(round.votes_for, round.votes_against);
            round.outcome = outcome;
            let total_penalties = Self::settle(round_id, &round.voters, outcome, &params)?;
            T::VerdictCommons::record_verdict(&round.report.subject, round_id, outcome)?;
            Some(total_penalties)
        } else {
            round.outcome = RoundOutcome::Inconclusive;
            Self::release_locks(round_id, &round.voters);
            None
        };

        log::debug!(
            target: LOG_TARGET,
            "Finalized round {} with {} voters as {:?}.",
            round_id,
            voter_count,
            round.outcome,
        );
        Self::deposit_event(Event::RoundFinalized {
            round_id,
            outcome: round.outcome,
            votes_for: round.votes_for,
            votes_against: round.votes_against,
            total_voting_power: round.total_voting_power,
        });
        Rounds::<T>::insert(round_id, round);

        if let Some(total_penalties) = total_penalties {
            Self::reward_finalizer(round_id, &who, total_penalties, &params)?;
        }

        Ok(voter_count)
    }

    #[require_transactional]
    pub(crate) fn do_withdraw_fees(
        beneficiary: AccountIdOf<T>,
        amount: BalanceOf<T>,
    ) -> DispatchResult {
        ensure!(!amount.is_zero(), Error::<T>::InvalidAmount);

        CollectedFees::<T>::try_mutate(|fees| -> DispatchResult {
            ensure!(amount <= *fees, Error::<T>::InsufficientFees);
            *fees = fees.checked_sub_res(&amount)?;
            Ok(())
        })?;
        T::Currency::transfer(
            &Self::court_account(),
            &beneficiary,
            amount,
            ExistenceRequirement::AllowDeath,
        )?;

        Self::deposit_event(Event::FeesWithdrawn { beneficiary, amount });

        Ok(())
    }

    pub(crate) fn do_set_minimum_stake(minimum_stake: BalanceOf<T>) -> DispatchResult {
        ensure!(!minimum_stake.is_zero(), Error::<T>::InvalidAmount);
        Parameters::<T>::mutate(|p| p.minimum_stake = minimum_stake);
        Self::deposit_event(Event::MinimumStakeSet { minimum_stake });
        Ok(())
    }

    pub(crate) fn do_set_voting_duration(duration_secs: u64) -> DispatchResult {
        ensure!(duration_secs > 0, Error::<T>::InvalidDuration);
        Parameters::<T>::mutate(|p| p.voting_duration_secs = duration_secs);
        Self::deposit_event(Event::VotingDurationSet { duration_secs });
        Ok(())
    }

    pub(crate) fn do_set_penalty_bps(penalty_bps: u16) -> DispatchResult {
        ensure!(penalty_bps <= MAX_PENALTY_BPS, Error::<T>::InvalidPercentage);
        Parameters::<T>::mutate(|p| p.penalty_bps = penalty_bps);
        Self::deposit_event(Event::PenaltyBpsSet { penalty_bps });
        Ok(())
    }

    pub(crate) fn do_set_minimum_voters(minimum_voters: u32) -> DispatchResult {
        ensure!(minimum_voters > 0, Error::<T>::InvalidQuorum);
        Parameters::<T>::mutate(|p| p.minimum_voters = minimum_voters);
        Self::deposit_event(Event::MinimumVotersSet { minimum_voters });
        Ok(())
    }

    pub(crate) fn do_set_minimum_total_voting_power(
        minimum_total_voting_power: BalanceOf<T>,
    ) -> DispatchResult {
        ensure!(!minimum_total_voting_power.is_zero(), Error::<T>::InvalidQuorum);
        Parameters::<T>::mutate(|p| p.minimum_total_voting_power = minimum_total_voting_power);
        Self::deposit_event(Event::MinimumTotalVotingPowerSet { minimum_total_voting_power });
        Ok(())
    }

    pub(crate) fn do_set_finalization_fee_bps(finalization_fee_bps: u16) -> DispatchResult {
        ensure!(finalization_fee_bps <= MAX_FINALIZATION_FEE_BPS, Error::<T>::InvalidPercentage);
        Parameters::<T>::try_mutate(|p| -> DispatchResult {
            ensure!(
                Self::is_valid_reward_share(p.finalization_reward_bps, finalization_fee_bps),
                Error::<T>::InvalidPercentage
            );
            p.finalization_fee_bps = finalization_fee_bps;
            Ok(())
        })?;
        Self::deposit_event(Event::FinalizationFeeBpsSet { finalization_fee_bps });
        Ok(())
    }

    pub(crate) fn do_set_finalization_reward_bps(finalization_reward_bps: u16) -> DispatchResult {
        ensure!(
            finalization_reward_bps <= MAX_FINALIZATION_REWARD_BPS,
            Error::<T>::InvalidPercentage
        );
        Parameters::<T>::try_mutate(|p| -> DispatchResult {
            ensure!(
                Self::is_valid_reward_share(finalization_reward_bps, p.finalization_fee_bps),
                Error::<T>::InvalidPercentage
            );
            p.finalization_reward_bps = finalization_reward_bps;
            Ok(())
        })?;
        Self::deposit_event(Event::FinalizationRewardBpsSet { finalization_reward_bps });
        Ok(())
    }
}
