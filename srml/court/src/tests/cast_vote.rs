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

use super::*;
use crate::types::Vote;
use frame_support::traits::Get;

#[test]
fn cast_vote_works() {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 500);
        let round_id = open_round(SUBJECT);
        assert_ok!(Court::cast_vote(RuntimeOrigin::signed(ALICE), round_id, true));

        assert_eq!(
            Votes::<Runtime>::get(round_id, ALICE),
            Some(Vote { supports_suspicious: true, power: 500, stake_snapshot: 500, locked: 100 })
        );
        let round = Rounds::<Runtime>::get(round_id).unwrap();
        assert_eq!(round.votes_for, 500);
        assert_eq!(round.votes_against, 0);
        assert_eq!(round.total_voting_power, 500);
        assert_eq!(round.voters.into_inner(), vec![ALICE]);
        let info = participant(ALICE);
        assert_eq!(info.locked_stake, 100);
        assert_eq!(info.available_stake(), 400);
        assert_eq!(info.total_votes, 1);
        System::assert_last_event(
            Event::VoteCast { round_id, voter: ALICE, supports_suspicious: true, power: 500 }
                .into(),
        );
    });
}

#[test]
fn cast_vote_keeps_tallies_consistent() {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 500);
        deposit(BOB, 300);
        deposit(CHARLIE, 2_000);
        set_karma(BOB, 100);
        let round_id = open_round(SUBJECT);
        vote(ALICE, round_id, true);
        vote(BOB, round_id, false);
        vote(CHARLIE, round_id, false);
        let round = Rounds::<Runtime>::get(round_id).unwrap();
        assert_eq!(round.votes_for, 500);
        assert_eq!(round.votes_against, 303 + 2_000);
        assert_eq!(round.votes_for + round.votes_against, round.total_voting_power);
        assert_eq!(round.voters.into_inner(), vec![ALICE, BOB, CHARLIE]);
    });
}

#[test_case(100, 1_010; "positive karma adds a bonus")]
#[test_case(-100, 900; "negative karma is punished quadratically")]
#[test_case(0, 1_000; "neutral karma")]
fn cast_vote_prices_vote_with_karma(karma: Karma, expected_power: Balance) {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 1_000);
        set_karma(ALICE, karma);
        let round_id = open_round(SUBJECT);
        vote(ALICE, round_id, false);
        assert_eq!(Votes::<Runtime>::get(round_id, ALICE).unwrap().power, expected_power);
    });
}

#[test]
fn cast_vote_uses_available_stake() {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 250);
        let first = open_round(SUBJECT);
        let second = open_round(EVE);
        vote(ALICE, first, true);
        vote(ALICE, second, true);
        assert_eq!(Votes::<Runtime>::get(first, ALICE).unwrap().stake_snapshot, 250);
        assert_eq!(Votes::<Runtime>::get(second, ALICE).unwrap().stake_snapshot, 150);
        assert_eq!(Votes::<Runtime>::get(second, ALICE).unwrap().power, 150);
        assert_eq!(participant(ALICE).locked_stake, 200);

        let third = open_round(DAVE);
        assert_noop!(
            Court::cast_vote(RuntimeOrigin::signed(ALICE), third, true),
            Error::<Runtime>::InsufficientStake
        );
    });
}

#[test_case(0; "reserved id")]
#[test_case(2; "unknown id")]
fn cast_vote_fails_on_invalid_round(round_id: RoundId) {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 500);
        open_round(SUBJECT);
        assert_noop!(
            Court::cast_vote(RuntimeOrigin::signed(ALICE), round_id, true),
            Error::<Runtime>::InvalidRoundId
        );
    });
}

#[test]
fn cast_vote_fails_on_finalized_round() {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 500);
        let round_id = open_round(SUBJECT);
        close_round(round_id);
        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), round_id));
        assert_noop!(
            Court::cast_vote(RuntimeOrigin::signed(ALICE), round_id, true),
            Error::<Runtime>::AlreadyFinalized
        );
    });
}

#[test]
fn cast_vote_fails_after_voting_period() {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 500);
        deposit(BOB, 500);
        let round_id = open_round(SUBJECT);
        let closes_at = Rounds::<Runtime>::get(round_id).unwrap().closes_at;
        Timestamp::set_timestamp(closes_at - 1);
        vote(BOB, round_id, true);
        Timestamp::set_timestamp(closes_at);
        assert_noop!(
            Court::cast_vote(RuntimeOrigin::signed(ALICE), round_id, true),
            Error::<Runtime>::VotingClosed
        );
    });
}

#[test]
fn cast_vote_fails_on_second_vote() {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 500);
        let round_id = open_round(SUBJECT);
        vote(ALICE, round_id, true);
        assert_noop!(
            Court::cast_vote(RuntimeOrigin::signed(ALICE), round_id, false),
            Error::<Runtime>::AlreadyVoted
        );
    });
}

#[test]
fn cast_vote_rejects_self_vote() {
    ExtBuilder::default().build().execute_with(|| {
        deposit(SUBJECT, 500);
        deposit(ALICE, 500);
        let round_id = open_round(SUBJECT);
        assert_noop!(
            Court::cast_vote(RuntimeOrigin::signed(SUBJECT), round_id, false),
            Error::<Runtime>::SelfVote
        );
        vote(ALICE, round_id, true);
        assert_eq!(Rounds::<Runtime>::get(round_id).unwrap().voters.into_inner(), vec![ALICE]);
    });
}

#[test]
fn cast_vote_allows_karma_at_threshold() {
    ExtBuilder::default().build().execute_with(|| {
        let minimum_karma = Parameters::<Runtime>::get().minimum_karma_to_vote;
        deposit(ALICE, 500);
        deposit(BOB, 500);
        set_karma(ALICE, minimum_karma);
        set_karma(BOB, minimum_karma - 1);
        let round_id = open_round(SUBJECT);
        vote(ALICE, round_id, true);
        assert_noop!(
            Court::cast_vote(RuntimeOrigin::signed(BOB), round_id, true),
            Error::<Runtime>::InsufficientKarma
        );
    });
}

#[test]
fn cast_vote_checks_karma_before_stake() {
    ExtBuilder::default().build().execute_with(|| {
        set_karma(ALICE, -1_000);
        let round_id = open_round(SUBJECT);
        assert_noop!(
            Court::cast_vote(RuntimeOrigin::signed(ALICE), round_id, true),
            Error::<Runtime>::InsufficientKarma
        );
    });
}

#[test]
fn cast_vote_fails_on_unknown_participant() {
    ExtBuilder::default().build().execute_with(|| {
        let round_id = open_round(SUBJECT);
        assert_noop!(
            Court::cast_vote(RuntimeOrigin::signed(ALICE), round_id, true),
            Error::<Runtime>::InsufficientStake
        );
    });
}

#[test]
fn cast_vote_fails_below_minimum_stake() {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 99);
        let round_id = open_round(SUBJECT);
        assert_noop!(
            Court::cast_vote(RuntimeOrigin::signed(ALICE), round_id, true),
            Error::<Runtime>::InsufficientStake
        );
    });
}

#[test]
fn cast_vote_fails_on_non_positive_power() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(Court::set_minimum_karma_to_vote(RuntimeOrigin::root(), -1_000));
        deposit(ALICE, 1_000);
        deposit(BOB, 1_000);
        set_karma(ALICE, -317);
        set_karma(BOB, -316);
        let round_id = open_round(SUBJECT);
        assert_noop!(
            Court::cast_vote(RuntimeOrigin::signed(ALICE), round_id, true),
            Error::<Runtime>::InsufficientVotingPower
        );
        vote(BOB, round_id, true);
        assert_eq!(Votes::<Runtime>::get(round_id, BOB).unwrap().power, 2);
    });
}

#[test]
fn cast_vote_fails_if_round_is_full() {
    ExtBuilder::default().build().execute_with(|| {
        let max_voters = <Runtime as crate::Config>::MaxVotersPerRound::get() as u128;
        let round_id = open_round(SUBJECT);
        for voter in CROWD..CROWD + max_voters {
            deposit(voter, 100);
            vote(voter, round_id, true);
        }
        let latecomer = CROWD + max_voters;
        deposit(latecomer, 100);
        assert_noop!(
            Court::cast_vote(RuntimeOrigin::signed(latecomer), round_id, true),
            Error::<Runtime>::TooManyVoters
        );
    });
}

#[test]
fn cast_vote_fails_on_unsigned_origin() {
    ExtBuilder::default().build().execute_with(|| {
        let round_id = open_round(SUBJECT);
        assert_noop!(
            Court::cast_vote(RuntimeOrigin::none(), round_id, true),
            DispatchError::BadOrigin
        );
    });
}
