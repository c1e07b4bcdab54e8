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

#![allow(
    // Auto-generated code is a no man's land
    clippy::arithmetic_side_effects
)]
#![cfg(feature = "runtime-benchmarks")]

use crate::{Pallet as Court, *};
use frame_benchmarking::v2::*;
use frame_support::traits::{Currency, EnsureOrigin, Get};
use frame_system::RawOrigin;
use sentinel_primitives::types::RoundId;
use sp_runtime::{traits::Zero, SaturatedConversion, Saturating};

const SEED: u32 = 0;

fn funded_account<T: Config>(name: &'static str, index: u32) -> T::AccountId {
    let who: T::AccountId = account(name, index, SEED);
    let balance: BalanceOf<T> = 1_000_000_000_000u128.saturated_into();
    let _ = T::Currency::make_free_balance_be(&who, balance);
    who
}

fn stake<T: Config>() -> BalanceOf<T> {
    Parameters::<T>::get().minimum_stake.saturating_mul(10u128.saturated_into())
}

fn setup_participant<T: Config>(index: u32) -> T::AccountId {
    let who = funded_account::<T>("voter", index);
    Court::<T>::deposit(RawOrigin::Signed(who.clone()).into(), stake::<T>()).unwrap();
    who
}

fn setup_round<T: Config>() -> Result<RoundId, BenchmarkError> {
    let origin =
        T::ReportOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let subject: T::AccountId = account("subject", 0, SEED);
    let round_id = NextRoundId::<T>::get();
    Court::<T>::submit_report(
        origin,
        subject,
        1,
        Default::default(),
        1_000,
        18,
        Default::default(),
    )?;
    Ok(round_id)
}

fn fill_round<T: Config>(round_id: RoundId, voters: u32) {
    for index in 0..voters {
        let who = setup_participant::<T>(index);
        let supports_suspicious = index % 2 == 0;
        Court::<T>::cast_vote(RawOrigin::Signed(who).into(), round_id, supports_suspicious)
            .unwrap();
    }
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn deposit() {
        let who = funded_account::<T>("caller", 0);
        let amount = stake::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(who.clone()), amount);

        assert_eq!(Participants::<T>::get(&who).unwrap().committed_stake, amount);
    }

    #[benchmark]
    fn withdraw() {
        let who = setup_participant::<T>(0);
        let amount = stake::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(who.clone()), amount);

        assert!(Participants::<T>::get(&who).unwrap().committed_stake.is_zero());
    }

    #[benchmark]
    fn submit_report() -> Result<(), BenchmarkError> {
        let origin =
            T::ReportOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
        let subject: T::AccountId = account("subject", 0, SEED);

        #[extrinsic_call]
        _(
            origin as T::RuntimeOrigin,
            subject,
            1,
            Default::default(),
            1_000,
            18,
            Default::default(),
        );

        assert!(Rounds::<T>::contains_key(1));

        Ok(())
    }

    #[benchmark]
    fn cast_vote(
        v: Linear<0, { T::MaxVotersPerRound::get().saturating_sub(1) }>,
    ) -> Result<(), BenchmarkError> {
        let round_id = setup_round::<T>()?;
        fill_round::<T>(round_id, v);
        let who = setup_participant::<T>(v);

        #[extrinsic_call]
        _(RawOrigin::Signed(who.clone()), round_id, true);

        assert!(Votes::<T>::contains_key(round_id, &who));

        Ok(())
    }

    #[benchmark]
    fn finalize(v: Linear<1, { T::MaxVotersPerRound::get() }>) -> Result<(), BenchmarkError> {
        Parameters::<T>::mutate(|p| {
            p.minimum_voters = 1;
            p.minimum_total_voting_power = 1u128.saturated_into();
        });
        let round_id = setup_round::<T>()?;
        fill_round::<T>(round_id, v);
        Rounds::<T>::mutate(round_id, |maybe_round| {
            if let Some(round) = maybe_round {
                round.closes_at = Zero::zero();
            }
        });
        let caller = funded_account::<T>("caller", 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), round_id);

        assert!(Rounds::<T>::get(round_id).unwrap().outcome.is_finalized());

        Ok(())
    }

    #[benchmark]
    fn set_parameter() -> Result<(), BenchmarkError> {
        let origin =
            T::GovernanceOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;

        #[extrinsic_call]
        set_penalty_bps(origin as T::RuntimeOrigin, 2_000);

        assert_eq!(Parameters::<T>::get().penalty_bps, 2_000);

        Ok(())
    }

    #[benchmark]
    fn withdraw_fees() -> Result<(), BenchmarkError> {
        let origin =
            T::TreasuryOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
        let amount: BalanceOf<T> = 1_000u128.saturated_into();
        let _ = T::Currency::make_free_balance_be(
            &Court::<T>::court_account(),
            amount.saturating_mul(2u128.saturated_into()),
        );
        CollectedFees::<T>::put(amount);
        let beneficiary: T::AccountId = account("beneficiary", 0, SEED);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, beneficiary, amount);

        assert!(CollectedFees::<T>::get().is_zero());

        Ok(())
    }

    impl_benchmark_test_suite!(
        Court,
        crate::mock::ExtBuilder::default().build(),
        crate::mock::Runtime
    );
}
