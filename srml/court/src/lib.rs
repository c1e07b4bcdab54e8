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

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod benchmarks;
mod dispatchable_impls;
mod mock;
mod pallet_impls;
mod tests;
pub mod types;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{
        types::{ParticipantInfo, Vote, VotingRound},
        weights::WeightInfoSentinel,
    };
    use core::marker::PhantomData;
    use frame_support::{
        dispatch::DispatchResultWithPostInfo,
        pallet_prelude::{
            EnsureOrigin, IsType, OptionQuery, StorageDoubleMap, StorageMap, StorageValue,
            ValueQuery,
        },
        traits::{Currency, Get, StorageVersion},
        Blake2_128Concat, PalletId, Twox64Concat,
    };
    use frame_system::{ensure_signed, pallet_prelude::OriginFor};
    use sentinel_primitives::{
        traits::VerdictCommonsPalletApi,
        types::{CourtParameters, Karma, Report, RoundId, RoundOutcome},
    };
    use sp_runtime::DispatchResult;

    pub(crate) const LOG_TARGET: &str = "runtime::srml-court";

    /// The current storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub(crate) type BalanceOf<T> = <<T as Config>::Currency as Currency<AccountIdOf<T>>>::Balance;
    pub(crate) type CourtParametersOf<T> = CourtParameters<BalanceOf<T>>;
    pub(crate) type HashOf<T> = <T as frame_system::Config>::Hash;
    pub(crate) type MomentOf<T> =
        <<T as Config>::VerdictCommons as VerdictCommonsPalletApi>::Moment;
    pub(crate) type ParticipantInfoOf<T> = ParticipantInfo<BalanceOf<T>>;
    pub(crate) type ReportOf<T> = Report<AccountIdOf<T>, HashOf<T>>;
    pub(crate) type VoteOf<T> = Vote<BalanceOf<T>>;
    pub(crate) type VotingRoundOf<T> = VotingRound<T>;

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Commit `amount` of the caller's free balance to the court.
        ///
        /// # Arguments
        ///
        /// - `amount`: The amount to commit. Must not be zero.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::deposit())]
        #[frame_support::transactional]
        pub fn deposit(
            origin: OriginFor<T>,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_deposit(who, amount)
        }

        /// Withdraw `amount` of the caller's committed stake.
        ///
        /// Fails while any stake of the caller is locked in an open round.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::withdraw())]
        #[frame_support::transactional]
        pub fn withdraw(
            origin: OriginFor<T>,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_withdraw(who, amount)
        }

        /// Submit a report of a suspicious subject.
        ///
        /// Opens a new voting round, unless the subject already holds a standing suspicious
        /// verdict. In the latter case the report is auto-marked.
        ///
        /// # Arguments
        ///
        /// - `subject`: The reported address.
        /// - `origin_chain`: The chain the incident was observed on.
        /// - `origin_source`: The contract or source which produced the incident.
        /// - `magnitude`: The size of the incident in the smallest unit of the source.
        /// - `scale`: The number of decimals of `magnitude`.
        /// - `evidence`: The hash of the transaction which triggered the report.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::submit_report())]
        #[frame_support::transactional]
        pub fn submit_report(
            origin: OriginFor<T>,
            subject: AccountIdOf<T>,
            origin_chain: u64,
            origin_source: HashOf<T>,
            magnitude: u128,
            scale: u8,
            evidence: HashOf<T>,
        ) -> DispatchResult {
            let detector = T::ReportOrigin::ensure_origin(origin)?;
            let report = Report {
                subject,
                origin_chain,
                origin_source,
                magnitude,
                scale,
                evidence,
                detector,
            };
            Self::do_submit_report(report)?;
            Ok(())
        }

        /// Vote on the report of round `round_id`.
        ///
        /// Locks `minimum_stake` of the caller's stake until the round is finalized.
        ///
        /// # Arguments
        ///
        /// - `round_id`: The round to vote on.
        /// - `supports_suspicious`: `true` if the caller considers the subject suspicious.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::cast_vote(T::MaxVotersPerRound::get()))]
        #[frame_support::transactional]
        pub fn cast_vote(
            origin: OriginFor<T>,
            round_id: RoundId,
            supports_suspicious: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_cast_vote(who, round_id, supports_suspicious)
        }

        /// Settle round `round_id` after its voting period has ended.
        ///
        /// Can be called by anyone. The caller is rewarded from the collected protocol fees if
        /// the round reached quorum.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::finalize(T::MaxVotersPerRound::get()))]
        #[frame_support::transactional]
        pub fn finalize(origin: OriginFor<T>, round_id: RoundId) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let voter_count = Self::do_finalize(who, round_id)?;
            Ok(Some(T::WeightInfo::finalize(voter_count)).into())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::set_parameter())]
        #[frame_support::transactional]
        pub fn set_minimum_stake(
            origin: OriginFor<T>,
            #[pallet::compact] minimum_stake: BalanceOf<T>,
        ) -> DispatchResult {
            T::GovernanceOrigin::ensure_origin(origin)?;
            Self::do_set_minimum_stake(minimum_stake)
        }

        /// Set the length of the voting period in seconds.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::set_parameter())]
        #[frame_support::transactional]
        pub fn set_voting_duration(origin: OriginFor<T>, duration_secs: u64) -> DispatchResult {
            T::GovernanceOrigin::ensure_origin(origin)?;
            Self::do_set_voting_duration(duration_secs)
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::set_parameter())]
        #[frame_support::transactional]
        pub fn set_penalty_bps(origin: OriginFor<T>, penalty_bps: u16) -> DispatchResult {
            T::GovernanceOrigin::ensure_origin(origin)?;
            Self::do_set_penalty_bps(penalty_bps)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::set_parameter())]
        #[frame_support::transactional]
        pub fn set_minimum_voters(origin: OriginFor<T>, minimum_voters: u32) -> DispatchResult {
            T::GovernanceOrigin::ensure_origin(origin)?;
            Self::do_set_minimum_voters(minimum_voters)
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::set_parameter())]
        #[frame_support::transactional]
        pub fn set_minimum_total_voting_power(
            origin: OriginFor<T>,
            #[pallet::compact] minimum_total_voting_power: BalanceOf<T>,
        ) -> DispatchResult {
            T::GovernanceOrigin::ensure_origin(origin)?;
            Self::do_set_minimum_total_voting_power(minimum_total_voting_power)
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::set_parameter())]
        #[frame_support::transactional]
        pub fn set_karma_reward(origin: OriginFor<T>, karma_reward: u32) -> DispatchResult {
            T::TuningOrigin::ensure_origin(origin)?;
            Parameters::<T>::mutate(|p| p.karma_reward = karma_reward);
            Self::deposit_event(Event::KarmaRewardSet { karma_reward });
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::set_parameter())]
        #[frame_support::transactional]
        pub fn set_karma_penalty(origin: OriginFor<T>, karma_penalty: u32) -> DispatchResult {
            T::TuningOrigin::ensure_origin(origin)?;
            Parameters::<T>::mutate(|p| p.karma_penalty = karma_penalty);
            Self::deposit_event(Event::KarmaPenaltySet { karma_penalty });
            Ok(())
        }

        /// Set the karma a participant needs at least to vote. May be negative.
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::set_parameter())]
        #[frame_support::transactional]
        pub fn set_minimum_karma_to_vote(
            origin: OriginFor<T>,
            minimum_karma_to_vote: Karma,
        ) -> DispatchResult {
            T::TuningOrigin::ensure_origin(origin)?;
            Parameters::<T>::mutate(|p| p.minimum_karma_to_vote = minimum_karma_to_vote);
            Self::deposit_event(Event::MinimumKarmaToVoteSet { minimum_karma_to_vote });
            Ok(())
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::set_parameter())]
        #[frame_support::transactional]
        pub fn set_finalization_fee_bps(
            origin: OriginFor<T>,
            finalization_fee_bps: u16,
        ) -> DispatchResult {
            T::TreasuryOrigin::ensure_origin(origin)?;
            Self::do_set_finalization_fee_bps(finalization_fee_bps)
        }

        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::set_parameter())]
        #[frame_support::transactional]
        pub fn set_finalization_reward_bps(
            origin: OriginFor<T>,
            finalization_reward_bps: u16,
        ) -> DispatchResult {
            T::TreasuryOrigin::ensure_origin(origin)?;
            Self::do_set_finalization_reward_bps(finalization_reward_bps)
        }

        /// Transfer `amount` of the collected protocol fees to `beneficiary`.
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::withdraw_fees())]
        #[frame_support::transactional]
        pub fn withdraw_fees(
            origin: OriginFor<T>,
            beneficiary: AccountIdOf<T>,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            T::TreasuryOrigin::ensure_origin(origin)?;
            Self::do_withdraw_fees(beneficiary, amount)
        }
    }

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The currency which is committed to the court.
        type Currency: Currency<Self::AccountId>;

        /// The origin which sets minimum stake, voting duration, penalty and quorum.
        type GovernanceOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// The parameters in force until they are changed by the privileged origins.
        #[pallet::constant]
        type InitialParameters: Get<CourtParametersOf<Self>>;

        /// The maximum number of votes per round.
        #[pallet::constant]
        type MaxVotersPerRound: Get<u32>;

        /// Identifier of this pallet. The derived account holds all committed stakes and fees.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// The origin which submits reports. The returned account is recorded as detector.
        type ReportOrigin: EnsureOrigin<Self::RuntimeOrigin, Success = Self::AccountId>;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The origin which sets the protocol fee, the finalizer reward and withdraws fees.
        type TreasuryOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// The origin which tunes the karma parameters.
        type TuningOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Storage of subject verdicts. Also serves as time source.
        type VerdictCommons: VerdictCommonsPalletApi<AccountId = Self::AccountId>;

        /// Weights generated by benchmarks
        type WeightInfo: WeightInfoSentinel;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    #[pallet::type_value]
    pub fn DefaultParameters<T: Config>() -> CourtParametersOf<T> {
        T::InitialParameters::get()
    }

    #[pallet::type_value]
    pub fn DefaultNextRoundId() -> RoundId {
        1
    }

    /// The ledger of all participants.
    #[pallet::storage]
    pub type Participants<T: Config> =
        StorageMap<_, Blake2_128Concat, AccountIdOf<T>, ParticipantInfoOf<T>, OptionQuery>;

    /// The identifier of the next round. Round identifiers start at `1`.
    #[pallet::storage]
    pub type NextRoundId<T: Config> = StorageValue<_, RoundId, ValueQuery, DefaultNextRoundId>;

    #[pallet::storage]
    pub type Rounds<T: Config> =
        StorageMap<_, Twox64Concat, RoundId, VotingRoundOf<T>, OptionQuery>;

    /// The votes of every round, keyed by round and voter.
    #[pallet::storage]
    pub type Votes<T: Config> = StorageDoubleMap<
        _,
        Twox64Concat,
        RoundId,
        Blake2_128Concat,
        AccountIdOf<T>,
        VoteOf<T>,
        OptionQuery,
    >;

    /// Protocol fees which were collected and not yet paid out.
    #[pallet::storage]
    pub type CollectedFees<T: Config> = StorageValue<_, BalanceOf<T>, ValueQuery>;

    #[pallet::storage]
    pub type Parameters<T: Config> =
        StorageValue<_, CourtParametersOf<T>, ValueQuery, DefaultParameters<T>>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// A participant committed stake.
        StakeDeposited { who: AccountIdOf<T>, amount: BalanceOf<T>, committed_stake: BalanceOf<T> },
        /// A participant withdrew stake.
        StakeWithdrawn { who: AccountIdOf<T>, amount: BalanceOf<T>, committed_stake: BalanceOf<T> },
        /// A report opened a new voting round.
        RoundOpened {
            round_id: RoundId,
            subject: AccountIdOf<T>,
            detector: AccountIdOf<T>,
            closes_at: MomentOf<T>,
        },
        /// A report of a flagged subject was classified without a vote.
        AutoMarked { subject: AccountIdOf<T>, total_incidents: u32 },
        VoteCast {
            round_id: RoundId,
            voter: AccountIdOf<T>,
            supports_suspicious: bool,
            power: BalanceOf<T>,
        },
        RoundFinalized {
            round_id: RoundId,
            outcome: RoundOutcome,
            votes_for: BalanceOf<T>,
            votes_against: BalanceOf<T>,
            total_voting_power: BalanceOf<T>,
        },
        /// A voter on the losing side was slashed.
        PenaltyApplied { round_id: RoundId, voter: AccountIdOf<T>, amount: BalanceOf<T> },
        /// A voter on the winning side received a share of the penalties.
        RewardPaid { round_id: RoundId, voter: AccountIdOf<T>, amount: BalanceOf<T> },
        KarmaUpdated { round_id: RoundId, voter: AccountIdOf<T>, karma: Karma },
        /// The caller of `finalize` was rewarded from the collected fees.
        FinalizerRewarded { round_id: RoundId, finalizer: AccountIdOf<T>, amount: BalanceOf<T> },
        FeesWithdrawn { beneficiary: AccountIdOf<T>, amount: BalanceOf<T> },
        MinimumStakeSet { minimum_stake: BalanceOf<T> },
        VotingDurationSet { duration_secs: u64 },
        PenaltyBpsSet { penalty_bps: u16 },
        MinimumVotersSet { minimum_voters: u32 },
        MinimumTotalVotingPowerSet { minimum_total_voting_power: BalanceOf<T> },
        KarmaRewardSet { karma_reward: u32 },
        KarmaPenaltySet { karma_penalty: u32 },
        MinimumKarmaToVoteSet { minimum_karma_to_vote: Karma },
        FinalizationFeeBpsSet { finalization_fee_bps: u16 },
        FinalizationRewardBpsSet { finalization_reward_bps: u16 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The amount must not be zero.
        InvalidAmount,
        /// The available stake of the participant is too low.
        InsufficientStake,
        /// The participant has stake locked in open rounds.
        StakeLocked,
        /// There is no round with the specified identifier.
        InvalidRoundId,
        /// The voting period of the round is over.
        VotingClosed,
        /// The voting period of the round is not over yet.
        RoundStillOpen,
        /// The round was already finalized.
        AlreadyFinalized,
        /// The participant already voted on this round.
        AlreadyVoted,
        /// The subject of a report cannot vote on its own round.
        SelfVote,
        /// The karma of the participant is below `minimum_karma_to_vote`.
        InsufficientKarma,
        /// The karma of the participant reduces the voting power to zero.
        InsufficientVotingPower,
        /// The maximum number of votes for this round was reached.
        TooManyVoters,
        /// A basis point value is out of range.
        InvalidPercentage,
        /// Quorum parameters must not be zero.
        InvalidQuorum,
        /// The voting duration must not be zero.
        InvalidDuration,
        /// The collected fees are lower than the requested amount.
        InsufficientFees,
    }
}
