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

use crate::types::{Report, ReportDisposition};
use sp_runtime::DispatchError;

/// Entry point for the detection layer.
///
/// The caller is expected to be authorized already; implementors only adjudicate.
pub trait ReportHandler {
    type AccountId;
    type Hash;

    /// Either opens a voting round for the reported subject or, if the subject holds a standing
    /// suspicious verdict, classifies it without a vote.
    fn on_report(
        report: Report<Self::AccountId, Self::Hash>,
    ) -> Result<ReportDisposition, DispatchError>;
}
