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

mod cast_vote;
mod finalize;

use crate::{
    mock::*, types::ParticipantInfo, CollectedFees, Error, Event, NextRoundId, Parameters,
    Participants, Rounds, Votes,
};
use frame_support::{assert_noop, assert_ok};
use sentinel_primitives::{
    constants::AUTO_MARKED_ROUND_ID,
    traits::{ReportHandler, VerdictCommonsPalletApi},
    types::{
        AccountIdTest, Balance, Hash, Karma, Report, ReportDisposition, RoundId, RoundOutcome,
    },
};
use sp_runtime::DispatchError;
use srml_verdict_commons::Event as VerdictCommonsEvent;
use test_case::test_case;

fn report(subject: AccountIdTest) -> Report<AccountIdTest, Hash> {
    Report {
        subject,
        origin_chain: 1,
        origin_source: Hash::repeat_byte(0xaa),
        magnitude: 250_000_000_000_000_000_000,
        scale: 18,
        evidence: Hash::repeat_byte(0xbb),
        detector: DETECTOR,
    }
}

/// Submits a report of `subject` and returns the opened round.
fn open_round(subject: AccountIdTest) -> RoundId {
    let round_id = NextRoundId::<Runtime>::get();
    let report = report(subject);
    assert_ok!(Court::submit_report(
        RuntimeOrigin::signed(DETECTOR),
        report.subject,
        report.origin_chain,
        report.origin_source,
        report.magnitude,
        report.scale,
        report.evidence,
    ));
    assert!(Rounds::<Runtime>::contains_key(round_id));
    round_id
}

fn deposit(who: AccountIdTest, amount: Balance) {
    assert_ok!(Court::deposit(RuntimeOrigin::signed(who), amount));
}

fn vote(who: AccountIdTest, round_id: RoundId, supports_suspicious: bool) {
    assert_ok!(Court::cast_vote(RuntimeOrigin::signed(who), round_id, supports_suspicious));
}

/// Moves the time to the end of the voting period of `round_id`.
fn close_round(round_id: RoundId) {
    let round = Rounds::<Runtime>::get(round_id).unwrap();
    Timestamp::set_timestamp(round.closes_at);
}

fn set_karma(who: AccountIdTest, karma: Karma) {
    Participants::<Runtime>::mutate(who, |maybe_info| {
        maybe_info.get_or_insert_with(Default::default).karma = karma;
    });
}

fn participant(who: AccountIdTest) -> ParticipantInfo<Balance> {
    Participants::<Runtime>::get(who).unwrap()
}

fn free_balance(who: AccountIdTest) -> Balance {
    Balances::free_balance(who)
}

fn total_committed(accounts: &[AccountIdTest]) -> Balance {
    accounts.iter().map(|who| participant(*who).committed_stake).sum()
}

/// A, B and C stake 500, 300 and 2_000. C carries enough negative karma that A and B outvote
/// it. Returns the round, which is closed but not finalized.
fn setup_consensus_scenario() -> RoundId {
    assert_ok!(Court::set_minimum_karma_to_vote(RuntimeOrigin::root(), -300));
    deposit(ALICE, 500);
    deposit(BOB, 300);
    deposit(CHARLIE, 2_000);
    set_karma(CHARLIE, -250);
    let round_id = open_round(SUBJECT);
    vote(ALICE, round_id, true);
    vote(BOB, round_id, true);
    vote(CHARLIE, round_id, false);
    close_round(round_id);
    round_id
}
