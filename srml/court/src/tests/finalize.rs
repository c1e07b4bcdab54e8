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

#[test]
fn finalize_settles_consensus_scenario() {
    ExtBuilder::default().build().execute_with(|| {
        let round_id = setup_consensus_scenario();
        let round = Rounds::<Runtime>::get(round_id).unwrap();
        assert_eq!(round.votes_for, 800);
        assert_eq!(round.votes_against, 750);

        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), round_id));

        assert_eq!(Rounds::<Runtime>::get(round_id).unwrap().outcome, RoundOutcome::Suspicious);
        let alice = participant(ALICE);
        assert_eq!(alice.committed_stake, 500 + 123);
        assert_eq!(alice.locked_stake, 0);
        assert_eq!(alice.karma, 10);
        assert_eq!(alice.correct_votes, 1);
        let bob = participant(BOB);
        assert_eq!(bob.committed_stake, 300 + 74);
        assert_eq!(bob.karma, 10);
        assert_eq!(bob.correct_votes, 1);
        let charlie = participant(CHARLIE);
        assert_eq!(charlie.committed_stake, 2_000 - 200);
        assert_eq!(charlie.locked_stake, 0);
        assert_eq!(charlie.karma, -255);
        assert_eq!(charlie.correct_votes, 0);
        assert_eq!(charlie.total_votes, 1);

        // Fee of 2, minus the finalizer reward of 1.
        assert_eq!(CollectedFees::<Runtime>::get(), 1);
        assert_eq!(free_balance(DAVE), INITIAL_BALANCE + 1);

        System::assert_has_event(
            Event::PenaltyApplied { round_id, voter: CHARLIE, amount: 200 }.into(),
        );
        System::assert_has_event(Event::RewardPaid { round_id, voter: ALICE, amount: 123 }.into());
        System::assert_has_event(Event::RewardPaid { round_id, voter: BOB, amount: 74 }.into());
        System::assert_has_event(Event::KarmaUpdated { round_id, voter: ALICE, karma: 10 }.into());
        System::assert_has_event(Event::KarmaUpdated { round_id, voter: BOB, karma: 10 }.into());
        System::assert_has_event(
            Event::KarmaUpdated { round_id, voter: CHARLIE, karma: -255 }.into(),
        );
        System::assert_has_event(
            VerdictCommonsEvent::VerdictRecorded { subject: SUBJECT, round_id, is_suspicious: true }
                .into(),
        );
        System::assert_has_event(
            Event::RoundFinalized {
                round_id,
                outcome: RoundOutcome::Suspicious,
                votes_for: 800,
                votes_against: 750,
                total_voting_power: 1_550,
            }
            .into(),
        );
        System::assert_last_event(
            Event::FinalizerRewarded { round_id, finalizer: DAVE, amount: 1 }.into(),
        );

        let verdict = VerdictCommons::verdict(&SUBJECT);
        assert!(verdict.has_verdict);
        assert!(verdict.is_suspicious);
        assert_eq!(verdict.last_round_id, round_id);
        assert_eq!(verdict.recorded_at, Rounds::<Runtime>::get(round_id).unwrap().closes_at);
    });
}

#[test]
fn finalize_conserves_committed_stake() {
    ExtBuilder::default().build().execute_with(|| {
        let voters = [ALICE, BOB, CHARLIE];
        let round_id = setup_consensus_scenario();
        let committed_before = total_committed(&voters);
        let court_balance_before = free_balance(Court::court_account());

        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), round_id));

        let fee = 2;
        let correct_voters = 2;
        let committed_after = total_committed(&voters);
        let residue = committed_before - fee - committed_after;
        assert!(residue < correct_voters);
        assert_eq!(residue, 1);
        // Everything which left the court account went to the finalizer.
        let finalizer_reward = court_balance_before - free_balance(Court::court_account());
        assert_eq!(
            committed_after + CollectedFees::<Runtime>::get() + residue + finalizer_reward,
            committed_before
        );
    });
}

#[test]
fn finalize_resolves_ties_as_clean() {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 500);
        deposit(BOB, 300);
        deposit(CHARLIE, 200);
        let round_id = open_round(SUBJECT);
        vote(ALICE, round_id, true);
        vote(BOB, round_id, false);
        vote(CHARLIE, round_id, false);
        close_round(round_id);

        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), round_id));

        assert_eq!(Rounds::<Runtime>::get(round_id).unwrap().outcome, RoundOutcome::Clean);
        // Penalty of 50, fee rounds down to zero.
        assert_eq!(participant(ALICE).committed_stake, 450);
        assert_eq!(participant(ALICE).karma, -5);
        assert_eq!(participant(BOB).committed_stake, 330);
        assert_eq!(participant(CHARLIE).committed_stake, 220);
        assert_eq!(CollectedFees::<Runtime>::get(), 0);
        assert_eq!(free_balance(DAVE), INITIAL_BALANCE);
        let verdict = VerdictCommons::verdict(&SUBJECT);
        assert!(verdict.has_verdict);
        assert!(!verdict.is_suspicious);
    });
}

#[test]
fn finalize_is_terminal() {
    ExtBuilder::default().build().execute_with(|| {
        let round_id = setup_consensus_scenario();
        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), round_id));
        let round = Rounds::<Runtime>::get(round_id).unwrap();
        assert_noop!(
            Court::finalize(RuntimeOrigin::signed(DAVE), round_id),
            Error::<Runtime>::AlreadyFinalized
        );
        assert_noop!(
            Court::finalize(RuntimeOrigin::signed(EVE), round_id),
            Error::<Runtime>::AlreadyFinalized
        );
        assert_eq!(Rounds::<Runtime>::get(round_id).unwrap(), round);
    });
}

#[test]
fn finalize_fails_on_invalid_round() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            Court::finalize(RuntimeOrigin::signed(DAVE), 1),
            Error::<Runtime>::InvalidRoundId
        );
    });
}

#[test]
fn finalize_fails_while_voting_period_is_running() {
    ExtBuilder::default().build().execute_with(|| {
        let round_id = open_round(SUBJECT);
        let closes_at = Rounds::<Runtime>::get(round_id).unwrap().closes_at;
        Timestamp::set_timestamp(closes_at - 1);
        assert_noop!(
            Court::finalize(RuntimeOrigin::signed(DAVE), round_id),
            Error::<Runtime>::RoundStillOpen
        );
        Timestamp::set_timestamp(closes_at);
        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), round_id));
    });
}

#[test]
fn finalize_is_inconclusive_with_too_few_voters() {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 500);
        deposit(BOB, 500);
        let round_id = open_round(SUBJECT);
        vote(ALICE, round_id, true);
        vote(BOB, round_id, true);
        close_round(round_id);

        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), round_id));

        assert_eq!(Rounds::<Runtime>::get(round_id).unwrap().outcome, RoundOutcome::Inconclusive);
        for who in [ALICE, BOB] {
            let info = participant(who);
            assert_eq!(info.committed_stake, 500);
            assert_eq!(info.locked_stake, 0);
            assert_eq!(info.karma, 0);
            assert_eq!(info.correct_votes, 0);
        }
        let verdict = VerdictCommons::verdict(&SUBJECT);
        assert!(!verdict.has_verdict);
        assert_eq!(verdict.total_incidents, 1);
        assert_eq!(free_balance(DAVE), INITIAL_BALANCE);
        System::assert_last_event(
            Event::RoundFinalized {
                round_id,
                outcome: RoundOutcome::Inconclusive,
                votes_for: 1_000,
                votes_against: 0,
                total_voting_power: 1_000,
            }
            .into(),
        );
    });
}

#[test]
fn finalize_is_inconclusive_with_too_little_power() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(Court::set_minimum_total_voting_power(RuntimeOrigin::root(), 10_000));
        deposit(ALICE, 500);
        deposit(BOB, 300);
        deposit(CHARLIE, 2_000);
        let round_id = open_round(SUBJECT);
        vote(ALICE, round_id, true);
        vote(BOB, round_id, true);
        vote(CHARLIE, round_id, false);
        close_round(round_id);

        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), round_id));

        assert_eq!(Rounds::<Runtime>::get(round_id).unwrap().outcome, RoundOutcome::Inconclusive);
        assert_eq!(participant(CHARLIE).committed_stake, 2_000);
        assert_eq!(participant(CHARLIE).locked_stake, 0);
        assert_eq!(participant(CHARLIE).karma, 0);
    });
}

#[test]
fn inconclusive_round_keeps_previous_verdict() {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 500);
        deposit(BOB, 500);
        deposit(CHARLIE, 500);
        let first = open_round(SUBJECT);
        vote(ALICE, first, false);
        vote(BOB, first, false);
        vote(CHARLIE, first, false);
        close_round(first);
        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), first));
        let verdict = VerdictCommons::verdict(&SUBJECT);
        assert!(verdict.has_verdict);

        let second = open_round(SUBJECT);
        vote(ALICE, second, true);
        close_round(second);
        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), second));

        let after = VerdictCommons::verdict(&SUBJECT);
        assert_eq!(after.last_round_id, first);
        assert_eq!(after.recorded_at, verdict.recorded_at);
        assert!(after.has_verdict);
        assert!(!after.is_suspicious);
        assert_eq!(after.total_incidents, 2);
    });
}

#[test]
fn finalize_releases_only_locks_of_the_round() {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 300);
        let first = open_round(SUBJECT);
        let second = open_round(EVE);
        vote(ALICE, first, true);
        vote(ALICE, second, true);
        assert_eq!(participant(ALICE).locked_stake, 200);

        close_round(first);
        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), first));
        assert_eq!(participant(ALICE).locked_stake, 100);
        assert_noop!(
            Court::withdraw(RuntimeOrigin::signed(ALICE), 100),
            Error::<Runtime>::StakeLocked
        );

        close_round(second);
        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), second));
        assert_eq!(participant(ALICE).locked_stake, 0);
        assert_ok!(Court::withdraw(RuntimeOrigin::signed(ALICE), 300));
    });
}

#[test]
fn finalize_penalty_is_measured_against_stake_snapshot() {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 1_000);
        deposit(BOB, 1_000);
        deposit(CHARLIE, 400);
        let round_id = open_round(SUBJECT);
        vote(ALICE, round_id, true);
        vote(BOB, round_id, true);
        vote(CHARLIE, round_id, false);
        // Deposits after the vote don't increase the penalty.
        deposit(CHARLIE, 600);
        close_round(round_id);

        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), round_id));

        assert_eq!(participant(CHARLIE).committed_stake, 1_000 - 40);
        // Fee of 0, 40 is split evenly.
        assert_eq!(participant(ALICE).committed_stake, 1_020);
        assert_eq!(participant(BOB).committed_stake, 1_020);
    });
}

#[test]
fn finalize_does_not_reward_without_penalties() {
    ExtBuilder::default().build().execute_with(|| {
        deposit(ALICE, 500);
        deposit(BOB, 500);
        deposit(CHARLIE, 500);
        let round_id = open_round(SUBJECT);
        vote(ALICE, round_id, true);
        vote(BOB, round_id, true);
        vote(CHARLIE, round_id, true);
        close_round(round_id);

        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), round_id));

        for who in [ALICE, BOB, CHARLIE] {
            assert_eq!(participant(who).committed_stake, 500);
            assert_eq!(participant(who).karma, 10);
        }
        assert_eq!(free_balance(DAVE), INITIAL_BALANCE);
        assert_eq!(CollectedFees::<Runtime>::get(), 0);
        assert!(VerdictCommons::is_flagged(&SUBJECT));
    });
}

#[test]
fn finalize_lets_karma_fall_below_zero() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(Court::set_minimum_karma_to_vote(RuntimeOrigin::root(), Karma::MIN));
        deposit(ALICE, 500);
        deposit(BOB, 500);
        deposit(CHARLIE, 500);
        set_karma(CHARLIE, -1);
        let round_id = open_round(SUBJECT);
        vote(ALICE, round_id, true);
        vote(BOB, round_id, true);
        vote(CHARLIE, round_id, false);
        close_round(round_id);

        assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), round_id));

        assert_eq!(participant(CHARLIE).karma, -6);
    });
}

#[test]
fn finalize_fails_on_unsigned_origin() {
    ExtBuilder::default().build().execute_with(|| {
        let round_id = open_round(SUBJECT);
        close_round(round_id);
        assert_noop!(Court::finalize(RuntimeOrigin::none(), round_id), DispatchError::BadOrigin);
    });
}

#[test]
fn finalize_clamps_locks_of_repeatedly_slashed_voter() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(Court::set_penalty_bps(RuntimeOrigin::root(), 5_000));
        deposit(ALICE, 300);
        deposit(BOB, 1_000);
        deposit(CHARLIE, 1_000);
        let rounds = [open_round(SUBJECT), open_round(SUBJECT), open_round(SUBJECT)];
        for round_id in rounds {
            vote(ALICE, round_id, false);
            vote(BOB, round_id, true);
            vote(CHARLIE, round_id, true);
        }
        // Stake snapshots shrink with every lock.
        let snapshots: Vec<Balance> = rounds
            .iter()
            .map(|round_id| Votes::<Runtime>::get(round_id, ALICE).unwrap().stake_snapshot)
            .collect();
        assert_eq!(snapshots, vec![300, 200, 100]);
        assert_eq!(participant(ALICE).locked_stake, 300);

        // The penalty of the first round leaves less committed than locked stake, the last
        // round unlocks more than is still locked.
        let expected = [(150, 150, 150), (100, 50, 50), (50, 0, 0)];
        for (round_id, (penalty, committed, locked)) in rounds.into_iter().zip(expected) {
            close_round(round_id);
            assert_ok!(Court::finalize(RuntimeOrigin::signed(DAVE), round_id));

            System::assert_has_event(
                Event::PenaltyApplied { round_id, voter: ALICE, amount: penalty }.into(),
            );
            let alice = participant(ALICE);
            assert_eq!(alice.committed_stake, committed);
            assert_eq!(alice.locked_stake, locked);
            assert!(alice.locked_stake <= alice.committed_stake);
            for who in [BOB, CHARLIE] {
                let info = participant(who);
                assert!(info.locked_stake <= info.committed_stake);
            }
        }

        assert_noop!(
            Court::withdraw(RuntimeOrigin::signed(ALICE), 1),
            Error::<Runtime>::InsufficientStake
        );
    });
}
