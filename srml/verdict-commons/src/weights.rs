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

//! Weights for srml_verdict_commons
//!
//! These weights are hand-estimated from the storage accesses of each dispatchable and have
//! not been produced by a benchmark run yet. Replace them with the output of
//! `benchmark pallet --pallet=srml_verdict_commons` once the pallet is part of a runtime.

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(clippy::unnecessary_cast)]

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

/// Trait containing the required functions for weight retrieval within srml_verdict_commons
pub trait WeightInfoSentinel {
    fn clear_verdict() -> Weight;
}

/// Weight functions for srml_verdict_commons
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoSentinel for WeightInfo<T> {
    /// Storage: `VerdictCommons::Verdicts` (r:1 w:1)
    /// Proof: `VerdictCommons::Verdicts` (`max_values`: None, `max_size`: Some(78), added: 2553, mode: `MaxEncodedLen`)
    fn clear_verdict() -> Weight {
        // Proof Size summary in bytes:
        //  Measured:  `152`
        //  Estimated: `3543`
        // Minimum execution time: 11_160 nanoseconds.
        Weight::from_parts(11_660_000, 3543)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}
