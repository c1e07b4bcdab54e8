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

use crate::{Pallet as VerdictCommons, *};
use frame_benchmarking::v2::*;
use sentinel_primitives::{traits::VerdictCommonsPalletApi, types::RoundOutcome};

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn clear_verdict() -> Result<(), BenchmarkError> {
        let origin =
            T::ClearOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
        let subject: T::AccountId = account("subject", 0, 0);
        <VerdictCommons<T> as VerdictCommonsPalletApi>::log_incident(&subject, 1)?;
        <VerdictCommons<T> as VerdictCommonsPalletApi>::record_verdict(
            &subject,
            1,
            RoundOutcome::Suspicious,
        )?;

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, subject.clone());

        assert!(!Verdicts::<T>::get(&subject).has_verdict);

        Ok(())
    }

    impl_benchmark_test_suite!(
        VerdictCommons,
        crate::mock::ExtBuilder::default().build(),
        crate::mock::Runtime
    );
}
