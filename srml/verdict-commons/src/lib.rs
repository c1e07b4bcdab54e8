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

mod benchmarks;
mod mock;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::weights::WeightInfoSentinel;
    use core::marker::PhantomData;
    use frame_support::{
        ensure,
        pallet_prelude::{
            EnsureOrigin, IsType, OptionQuery, StorageDoubleMap, StorageMap, ValueQuery,
        },
        traits::{StorageVersion, Time},
        Blake2_128Concat, Twox64Concat,
    };
    use frame_system::pallet_prelude::OriginFor;
    use sentinel_primitives::{
        math::checked_ops_res::CheckedIncRes,
        traits::VerdictCommonsPalletApi,
        types::{RoundId, RoundOutcome, SubjectVerdict},
    };
    use sp_runtime::{DispatchError, DispatchResult};

    pub(crate) const LOG_TARGET: &str = "runtime::srml-verdict-commons";

    /// The current storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub(crate) type MomentOf<T> = <<T as Config>::Timestamp as Time>::Moment;
    pub(crate) type SubjectVerdictOf<T> = SubjectVerdict<MomentOf<T>>;

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Remove the classification of `subject`.
        ///
        /// The next report of `subject` opens a new voting round instead of being auto-marked.
        /// The incident counter and history are preserved.
        ///
        /// # Arguments
        ///
        /// - `subject`: The address whose verdict is cleared.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::clear_verdict())]
        #[frame_support::transactional]
        pub fn clear_verdict(origin: OriginFor<T>, subject: AccountIdOf<T>) -> DispatchResult {
            T::ClearOrigin::ensure_origin(origin)?;
            <Self as VerdictCommonsPalletApi>::clear_verdict(&subject)
        }
    }

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The origin which is allowed to clear verdicts.
        type ClearOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Time tracker. Must return milliseconds.
        type Timestamp: Time;

        type WeightInfo: WeightInfoSentinel;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    /// The current classification of every subject which was ever reported.
    #[pallet::storage]
    pub type Verdicts<T: Config> =
        StorageMap<_, Blake2_128Concat, AccountIdOf<T>, SubjectVerdictOf<T>, ValueQuery>;

    /// Maps `(subject, incident index)` to the round which adjudicated the incident. Round id
    /// `0` marks an auto-classified incident.
    #[pallet::storage]
    pub type IncidentHistory<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        AccountIdOf<T>,
        Twox64Concat,
        u32,
        RoundId,
        OptionQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// An incident was appended to the history of a subject.
        IncidentLogged { subject: AccountIdOf<T>, index: u32, round_id: RoundId },
        /// A finalized round classified a subject.
        VerdictRecorded { subject: AccountIdOf<T>, round_id: RoundId, is_suspicious: bool },
        /// The classification of a subject was removed.
        VerdictCleared { subject: AccountIdOf<T> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The subject has no standing verdict.
        NoVerdictToClear,
    }

    impl<T> VerdictCommonsPalletApi for Pallet<T>
    where
        T: Config,
    {
        type AccountId = AccountIdOf<T>;
        type Moment = MomentOf<T>;

        fn verdict(subject: &Self::AccountId) -> SubjectVerdict<Self::Moment> {
            Verdicts::<T>::get(subject)
        }

        fn record_verdict(
            subject: &Self::AccountId,
            round_id: RoundId,
            outcome: RoundOutcome,
        ) -> DispatchResult {
            let Some(is_suspicious) = outcome.classification() else {
                log::debug!(
                    target: LOG_TARGET,
                    "Round {:?} is not binding ({:?}), verdict left untouched.",
                    round_id,
                    outcome,
                );
                return Ok(());
            };
            let recorded_at = Self::now();
            Verdicts::<T>::mutate(subject, |verdict| {
                verdict.has_verdict = true;
                verdict.is_suspicious = is_suspicious;
                verdict.last_round_id = round_id;
                verdict.recorded_at = recorded_at;
            });
            Self::deposit_event(Event::VerdictRecorded {
                subject: subject.clone(),
                round_id,
                is_suspicious,
            });
            Ok(())
        }

        fn clear_verdict(subject: &Self::AccountId) -> DispatchResult {
            Verdicts::<T>::try_mutate(subject, |verdict| -> DispatchResult {
                ensure!(verdict.has_verdict, Error::<T>::NoVerdictToClear);
                verdict.has_verdict = false;
                verdict.is_suspicious = false;
                Ok(())
            })?;
            Self::deposit_event(Event::VerdictCleared { subject: subject.clone() });
            Ok(())
        }

        fn log_incident(
            subject: &Self::AccountId,
            round_id: RoundId,
        ) -> Result<u32, DispatchError> {
            let index = Verdicts::<T>::try_mutate(subject, |verdict| {
                let index = verdict.total_incidents;
                verdict.total_incidents.checked_inc_res()?;
                Ok::<_, DispatchError>(index)
            })?;
            IncidentHistory::<T>::insert(subject, index, round_id);
            Self::deposit_event(Event::IncidentLogged {
                subject: subject.clone(),
                index,
                round_id,
            });
            Ok(index)
        }

        fn incident(subject: &Self::AccountId, index: u32) -> Option<RoundId> {
            IncidentHistory::<T>::get(subject, index)
        }

        fn now() -> Self::Moment {
            T::Timestamp::now()
        }
    }
}
