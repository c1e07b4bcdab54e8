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

#![cfg(test)]

use crate as srml_court;
use frame_support::{construct_runtime, ord_parameter_types, traits::Everything};
use frame_system::{mocking::MockBlock, EnsureRoot, EnsureSignedBy};
use sentinel_primitives::{
    constants::mock::{
        BlockHashCount, CourtPalletId, ExistentialDeposit, InitialCourtParameters, MaxLocks,
        MaxReserves, MaxVotersPerRound, MinimumPeriod,
    },
    types::{AccountIdTest, Balance, Hash, Moment},
};
use sp_runtime::{
    traits::{BlakeTwo256, ConstU32, Get, IdentityLookup},
    BuildStorage,
};

pub const ALICE: AccountIdTest = 0;
pub const BOB: AccountIdTest = 1;
pub const CHARLIE: AccountIdTest = 2;
pub const DAVE: AccountIdTest = 3;
pub const EVE: AccountIdTest = 4;
pub const DETECTOR: AccountIdTest = 10;
pub const TREASURER: AccountIdTest = 11;
pub const SUBJECT: AccountIdTest = 42;
/// Accounts `CROWD..CROWD + MaxVotersPerRound` are funded to fill up rounds.
pub const CROWD: AccountIdTest = 100;

pub const INITIAL_BALANCE: Balance = 1_000_000;

ord_parameter_types! {
    pub const Detector: AccountIdTest = DETECTOR;
    pub const Treasurer: AccountIdTest = TREASURER;
}

construct_runtime!(
    pub enum Runtime {
        Balances: pallet_balances,
        Court: srml_court,
        System: frame_system,
        Timestamp: pallet_timestamp,
        VerdictCommons: srml_verdict_commons,
    }
);

impl crate::Config for Runtime {
    type Currency = Balances;
    type GovernanceOrigin = EnsureRoot<AccountIdTest>;
    type InitialParameters = InitialCourtParameters;
    type MaxVotersPerRound = MaxVotersPerRound;
    type PalletId = CourtPalletId;
    type ReportOrigin = EnsureSignedBy<Detector, AccountIdTest>;
    type RuntimeEvent = RuntimeEvent;
    type TreasuryOrigin = EnsureSignedBy<Treasurer, AccountIdTest>;
    type TuningOrigin = EnsureRoot<AccountIdTest>;
    type VerdictCommons = VerdictCommons;
    type WeightInfo = srml_court::weights::WeightInfo<Runtime>;
}

impl srml_verdict_commons::Config for Runtime {
    type ClearOrigin = EnsureRoot<AccountIdTest>;
    type RuntimeEvent = RuntimeEvent;
    type Timestamp = Timestamp;
    type WeightInfo = srml_verdict_commons::weights::WeightInfo<Runtime>;
}

impl frame_system::Config for Runtime {
    type AccountData = pallet_balances::AccountData<Balance>;
    type AccountId = AccountIdTest;
    type BaseCallFilter = Everything;
    type Block = MockBlock<Runtime>;
    type BlockHashCount = BlockHashCount;
    type BlockLength = ();
    type BlockWeights = ();
    type RuntimeCall = RuntimeCall;
    type RuntimeTask = RuntimeTask;
    type DbWeight = ();
    type RuntimeEvent = RuntimeEvent;
    type Hash = Hash;
    type Hashing = BlakeTwo256;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Nonce = u64;
    type MaxConsumers = ConstU32<16>;
    type MultiBlockMigrator = ();
    type OnKilledAccount = ();
    type OnNewAccount = ();
    type RuntimeOrigin = RuntimeOrigin;
    type PalletInfo = PalletInfo;
    type PreInherents = ();
    type PostInherents = ();
    type PostTransactions = ();
    type SingleBlockMigrations = ();
    type SS58Prefix = ();
    type SystemWeightInfo = ();
    type Version = ();
    type OnSetCode = ();
}

impl pallet_balances::Config for Runtime {
    type AccountStore = System;
    type Balance = Balance;
    type DustRemoval = ();
    type FreezeIdentifier = ();
    type RuntimeHoldReason = ();
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposit = ExistentialDeposit;
    type MaxFreezes = ();
    type MaxLocks = MaxLocks;
    type MaxReserves = MaxReserves;
    type ReserveIdentifier = [u8; 8];
    type RuntimeFreezeReason = ();
    type WeightInfo = ();
}

impl pallet_timestamp::Config for Runtime {
    type MinimumPeriod = MinimumPeriod;
    type Moment = Moment;
    type OnTimestampSet = ();
    type WeightInfo = ();
}

pub struct ExtBuilder {
    balances: Vec<(AccountIdTest, Balance)>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        let crowd = (0..u128::from(MaxVotersPerRound::get()) + 1)
            .map(|offset| (CROWD + offset, INITIAL_BALANCE));
        Self {
            balances: [ALICE, BOB, CHARLIE, DAVE, EVE, DETECTOR, TREASURER, SUBJECT]
                .into_iter()
                .map(|account| (account, INITIAL_BALANCE))
                .chain(crowd)
                .collect(),
        }
    }
}

impl ExtBuilder {
    pub fn build(self) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();
        // see the logs in tests when using `RUST_LOG=debug cargo test -- --nocapture`
        let _ = env_logger::builder().is_test(true).try_init();
        pallet_balances::GenesisConfig::<Runtime> { balances: self.balances }
            .assimilate_storage(&mut t)
            .unwrap();
        let mut test_ext: sp_io::TestExternalities = t.into();
        test_ext.execute_with(|| System::set_block_number(1));
        test_ext
    }
}
