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

use crate::types::RoundId;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// The historical classification of a subject.
///
/// `total_incidents` counts every report of the subject, including auto-marked ones, and is
/// never reset.
#[derive(Clone, Debug, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo)]
pub struct SubjectVerdict<Moment> {
    pub has_verdict: bool,
    pub is_suspicious: bool,
    pub last_round_id: RoundId,
    pub recorded_at: Moment,
    pub total_incidents: u32,
}

impl<Moment> SubjectVerdict<Moment> {
    /// A standing suspicious verdict causes new reports to be auto-marked.
    pub fn is_flagged(&self) -> bool {
        self.has_verdict && self.is_suspicious
    }
}
