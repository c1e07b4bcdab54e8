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

mod court_parameters;
mod report;
mod report_disposition;
mod round_outcome;
mod subject_verdict;

pub use court_parameters::CourtParameters;
pub use report::Report;
pub use report_disposition::ReportDisposition;
pub use round_outcome::RoundOutcome;
pub use subject_verdict::SubjectVerdict;

/// Balance of an account.
pub type Balance = u128;

/// A hash of some data used by the chain.
pub type Hash = sp_core::H256;

/// Signed reputation score of a participant. Unbounded below, saturating at the type bounds.
pub type Karma = i64;

/// Time in milliseconds.
pub type Moment = u64;

/// Identifier of a voting round. Starts at `1`; `0` marks auto-classified reports.
pub type RoundId = u64;

/// Signed voting power. Non-positive values are not allowed to vote.
pub type VotingPower = i128;

// Tests

pub type AccountIdTest = u128;
