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

use crate::{constants::AUTO_MARKED_ROUND_ID, types::RoundId};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// What happened to an incoming report.
#[derive(Clone, Copy, Debug, Decode, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo)]
pub enum ReportDisposition {
    /// A new voting round was opened.
    RoundOpened(RoundId),
    /// The subject holds a standing suspicious verdict and was classified without a vote.
    AutoMarked,
}

impl ReportDisposition {
    /// The opened round, or `AUTO_MARKED_ROUND_ID` if no round was opened.
    pub fn round_id(&self) -> RoundId {
        match self {
            ReportDisposition::RoundOpened(round_id) => *round_id,
            ReportDisposition::AutoMarked => AUTO_MARKED_ROUND_ID,
        }
    }
}
