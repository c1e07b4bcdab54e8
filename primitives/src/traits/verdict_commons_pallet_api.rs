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

use crate::types::{RoundId, RoundOutcome, SubjectVerdict};
use frame_support::Parameter;
use parity_scale_codec::MaxEncodedLen;
use sp_runtime::{traits::AtLeast32Bit, DispatchError, DispatchResult};

/// Abstraction over storage operations for subject verdicts.
pub trait VerdictCommonsPalletApi {
    type AccountId;
    type Moment: AtLeast32Bit + Copy + Default + Parameter + MaxEncodedLen;

    // Verdicts

    /// Returns the verdict of `subject`. Subjects which were never reported have a default
    /// verdict without classification and without incidents.
    fn verdict(subject: &Self::AccountId) -> SubjectVerdict<Self::Moment>;

    /// Returns `true` if `subject` holds a standing suspicious verdict.
    fn is_flagged(subject: &Self::AccountId) -> bool {
        Self::verdict(subject).is_flagged()
    }

    /// Records the outcome of a finalized round.
    ///
    /// Only `Suspicious` and `Clean` classify the subject; any other outcome leaves the verdict
    /// untouched.
    fn record_verdict(
        subject: &Self::AccountId,
        round_id: RoundId,
        outcome: RoundOutcome,
    ) -> DispatchResult;

    /// Removes the classification of `subject` but keeps its incident count.
    ///
    /// Returns `Err` if `subject` holds no verdict.
    fn clear_verdict(subject: &Self::AccountId) -> DispatchResult;

    // Incidents

    /// Counts a new incident of `subject` and appends `round_id` to its history. Auto-marked
    /// incidents use `AUTO_MARKED_ROUND_ID`.
    ///
    /// Returns the index of the new incident.
    fn log_incident(subject: &Self::AccountId, round_id: RoundId) -> Result<u32, DispatchError>;

    /// Returns the round of the incident at `index`, if any.
    fn incident(subject: &Self::AccountId, index: u32) -> Option<RoundId>;

    // Etc

    /// Current time in milliseconds.
    fn now() -> Self::Moment;
}
