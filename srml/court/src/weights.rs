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

//! Weights for srml_court
//!
//! These weights are hand-estimated from the storage accesses of each dispatchable and have
//! not been produced by a benchmark run yet. Replace them with the output of
//! `benchmark pallet --pallet=srml_court` once the pallet is part of a runtime.

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(clippy::unnecessary_cast)]

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

/// Trait containing the required functions for weight retrieval within srml_court
pub trait WeightInfoSentinel {
    fn deposit() -> Weight;
    fn withdraw() -> Weight;
    fn submit_report() -> Weight;
    fn cast_vote(v: u32) -> Weight;
    fn finalize(v: u32) -> Weight;
    fn set_parameter() -> Weight;
    fn withdraw_fees() -> Weight;
}

/// Weight functions for srml_court
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoSentinel for WeightInfo<T> {
    /// Storage: `System::Account` (r:2 w:2)
    /// Proof: `System::Account` (`max_values`: None, `max_size`: Some(132), added: 2607, mode: `MaxEncodedLen`)
    /// Storage: `Court::Participants` (r:1 w:1)
    /// Proof: `Court::Participants` (`max_values`: None, `max_size`: Some(100), added: 2575, mode: `MaxEncodedLen`)
    fn deposit() -> Weight {
        // Proof Size summary in bytes:
        //  Measured:  `210`
        //  Estimated: `6204`
        // Minimum execution time: 48_320 nanoseconds.
        Weight::from_parts(49_410_000, 6204)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    /// Storage: `Court::Participants` (r:1 w:1)
    /// Proof: `Court::Participants` (`max_values`: None, `max_size`: Some(100), added: 2575, mode: `MaxEncodedLen`)
    /// Storage: `System::Account` (r:2 w:2)
    /// Proof: `System::Account` (`max_values`: None, `max_size`: Some(132), added: 2607, mode: `MaxEncodedLen`)
    fn withdraw() -> Weight {
        // Proof Size summary in bytes:
        //  Measured:  `367`
        //  Estimated: `6204`
        // Minimum execution time: 50_100 nanoseconds.
        Weight::from_parts(51_230_000, 6204)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    /// Storage: `VerdictCommons::Verdicts` (r:1 w:1)
    /// Proof: `VerdictCommons::Verdicts` (`max_values`: None, `max_size`: Some(78), added: 2553, mode: `MaxEncodedLen`)
    /// Storage: `Court::NextRoundId` (r:1 w:1)
    /// Proof: `Court::NextRoundId` (`max_values`: Some(1), `max_size`: Some(8), added: 503, mode: `MaxEncodedLen`)
    /// Storage: `Court::Parameters` (r:1 w:0)
    /// Proof: `Court::Parameters` (`max_values`: Some(1), `max_size`: Some(82), added: 577, mode: `MaxEncodedLen`)
    /// Storage: `Timestamp::Now` (r:1 w:0)
    /// Proof: `Timestamp::Now` (`max_values`: Some(1), `max_size`: Some(8), added: 503, mode: `MaxEncodedLen`)
    /// Storage: `VerdictCommons::IncidentHistory` (r:0 w:1)
    /// Proof: `VerdictCommons::IncidentHistory` (`max_values`: None, `max_size`: Some(64), added: 2539, mode: `MaxEncodedLen`)
    /// Storage: `Court::Rounds` (r:0 w:1)
    /// Proof: `Court::Rounds` (`max_values`: None, `max_size`: Some(1016), added: 3491, mode: `MaxEncodedLen`)
    fn submit_report() -> Weight {
        // Proof Size summary in bytes:
        //  Measured:  `196`
        //  Estimated: `3543`
        // Minimum execution time: 27_890 nanoseconds.
        Weight::from_parts(28_620_000, 3543)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    /// Storage: `Court::Rounds` (r:1 w:1)
    /// Proof: `Court::Rounds` (`max_values`: None, `max_size`: Some(1016), added: 3491, mode: `MaxEncodedLen`)
    /// Storage: `Timestamp::Now` (r:1 w:0)
    /// Proof: `Timestamp::Now` (`max_values`: Some(1), `max_size`: Some(8), added: 503, mode: `MaxEncodedLen`)
    /// Storage: `Court::Votes` (r:1 w:1)
    /// Proof: `Court::Votes` (`max_values`: None, `max_size`: Some(113), added: 2588, mode: `MaxEncodedLen`)
    /// Storage: `Court::Parameters` (r:1 w:0)
    /// Proof: `Court::Parameters` (`max_values`: Some(1), `max_size`: Some(82), added: 577, mode: `MaxEncodedLen`)
    /// Storage: `Court::Participants` (r:1 w:1)
    /// Proof: `Court::Participants` (`max_values`: None, `max_size`: Some(100), added: 2575, mode: `MaxEncodedLen`)
    /// The range of component `v` is `[0, 15]`.
    fn cast_vote(v: u32) -> Weight {
        // Proof Size summary in bytes:
        //  Measured:  `562 + v * (16 ±0)`
        //  Estimated: `4481`
        // Minimum execution time: 36_240 nanoseconds.
        Weight::from_parts(37_812_000, 4481)
            // Standard Error: 3_318
            .saturating_add(Weight::from_parts(94_211, 0).saturating_mul(v.into()))
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    /// Storage: `Court::Rounds` (r:1 w:1)
    /// Proof: `Court::Rounds` (`max_values`: None, `max_size`: Some(1016), added: 3491, mode: `MaxEncodedLen`)
    /// Storage: `Timestamp::Now` (r:1 w:0)
    /// Proof: `Timestamp::Now` (`max_values`: Some(1), `max_size`: Some(8), added: 503, mode: `MaxEncodedLen`)
    /// Storage: `Court::Parameters` (r:1 w:0)
    /// Proof: `Court::Parameters` (`max_values`: Some(1), `max_size`: Some(82), added: 577, mode: `MaxEncodedLen`)
    /// Storage: `Court::Votes` (r:16 w:0)
    /// Proof: `Court::Votes` (`max_values`: None, `max_size`: Some(113), added: 2588, mode: `MaxEncodedLen`)
    /// Storage: `Court::Participants` (r:16 w:16)
    /// Proof: `Court::Participants` (`max_values`: None, `max_size`: Some(100), added: 2575, mode: `MaxEncodedLen`)
    /// Storage: `Court::CollectedFees` (r:1 w:1)
    /// Proof: `Court::CollectedFees` (`max_values`: Some(1), `max_size`: Some(16), added: 511, mode: `MaxEncodedLen`)
    /// Storage: `VerdictCommons::Verdicts` (r:1 w:1)
    /// Proof: `VerdictCommons::Verdicts` (`max_values`: None, `max_size`: Some(78), added: 2553, mode: `MaxEncodedLen`)
    /// Storage: `System::Account` (r:2 w:2)
    /// Proof: `System::Account` (`max_values`: None, `max_size`: Some(132), added: 2607, mode: `MaxEncodedLen`)
    /// The range of component `v` is `[1, 16]`.
    fn finalize(v: u32) -> Weight {
        // Proof Size summary in bytes:
        //  Measured:  `1131 + v * (243 ±0)`
        //  Estimated: `6204 + v * (2588 ±0)`
        // Minimum execution time: 71_530 nanoseconds.
        Weight::from_parts(58_406_279, 6204)
            // Standard Error: 21_771
            .saturating_add(Weight::from_parts(17_862_604, 0).saturating_mul(v.into()))
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(v.into())))
            .saturating_add(T::DbWeight::get().writes(4))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(v.into())))
            .saturating_add(Weight::from_parts(0, 2588).saturating_mul(v.into()))
    }
    /// Storage: `Court::Parameters` (r:1 w:1)
    /// Proof: `Court::Parameters` (`max_values`: Some(1), `max_size`: Some(82), added: 577, mode: `MaxEncodedLen`)
    fn set_parameter() -> Weight {
        // Proof Size summary in bytes:
        //  Measured:  `42`
        //  Estimated: `1567`
        // Minimum execution time: 9_870 nanoseconds.
        Weight::from_parts(10_310_000, 1567)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `Court::CollectedFees` (r:1 w:1)
    /// Proof: `Court::CollectedFees` (`max_values`: Some(1), `max_size`: Some(16), added: 511, mode: `MaxEncodedLen`)
    /// Storage: `System::Account` (r:2 w:2)
    /// Proof: `System::Account` (`max_values`: None, `max_size`: Some(132), added: 2607, mode: `MaxEncodedLen`)
    fn withdraw_fees() -> Weight {
        // Proof Size summary in bytes:
        //  Measured:  `312`
        //  Estimated: `6204`
        // Minimum execution time: 44_760 nanoseconds.
        Weight::from_parts(45_590_000, 6204)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(3))
    }
}
