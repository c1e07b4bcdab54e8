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

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// The state of a voting round. Everything but `Pending` is terminal.
#[derive(Clone, Copy, Debug, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo)]
pub enum RoundOutcome {
    #[default]
    Pending,
    Suspicious,
    Clean,
    /// Quorum was not reached. Nobody is rewarded or punished.
    Inconclusive,
}

impl RoundOutcome {
    /// Decides a quorate round. Ties resolve to `Clean`.
    pub fn from_tally<Balance: PartialOrd>(votes_for: Balance, votes_against: Balance) -> Self {
        if votes_for > votes_against { RoundOutcome::Suspicious } else { RoundOutcome::Clean }
    }

    pub fn is_finalized(&self) -> bool {
        *self != RoundOutcome::Pending
    }

    /// Returns `Some(is_suspicious)` if the outcome classifies the subject.
    pub fn classification(&self) -> Option<bool> {
        match self {
            RoundOutcome::Suspicious => Some(true),
            RoundOutcome::Clean => Some(false),
            RoundOutcome::Pending | RoundOutcome::Inconclusive => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(3, 2, RoundOutcome::Suspicious)]
    #[test_case(2, 3, RoundOutcome::Clean)]
    #[test_case(2, 2, RoundOutcome::Clean; "ties are clean")]
    #[test_case(0, 0, RoundOutcome::Clean)]
    fn from_tally_works(votes_for: u128, votes_against: u128, expected: RoundOutcome) {
        assert_eq!(RoundOutcome::from_tally(votes_for, votes_against), expected);
    }

    #[test_case(RoundOutcome::Pending, None)]
    #[test_case(RoundOutcome::Suspicious, Some(true))]
    #[test_case(RoundOutcome::Clean, Some(false))]
    #[test_case(RoundOutcome::Inconclusive, None)]
    fn classification_works(outcome: RoundOutcome, expected: Option<bool>) {
        assert_eq!(outcome.classification(), expected);
    }
}
