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

#![cfg(feature = "mock")]

pub use super::*;
use crate::types::{Balance, CourtParameters};
use frame_support::parameter_types;

// Court
parameter_types! {
    pub const CourtPalletId: PalletId = COURT_PALLET_ID;
    pub const MaxVotersPerRound: u32 = 16;
    pub const InitialCourtParameters: CourtParameters<Balance> = CourtParameters {
        minimum_stake: 100,
        voting_duration_secs: 3_600,
        penalty_bps: 1_000,
        karma_reward: 10,
        karma_penalty: 5,
        minimum_karma_to_vote: -100,
        finalization_fee_bps: 100,
        finalization_reward_bps: 50,
        minimum_voters: 3,
        minimum_total_voting_power: 300,
    };
}

// Shared within tests
// Balance
parameter_types! {
    pub const ExistentialDeposit: u128 = 1;
    pub const MaxLocks: u32 = 50;
    pub const MaxReserves: u32 = 50;
}

// System
parameter_types! {
    pub const BlockHashCount: u64 = 250;
}

// Time
parameter_types! {
    pub const MinimumPeriod: u64 = 6_000;
}
