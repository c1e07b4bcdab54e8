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

/// A suspicious subject as reported by an authorized detector. Immutable once created.
#[derive(Clone, Debug, Decode, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo)]
pub struct Report<AccountId, Hash> {
    /// The reported address.
    pub subject: AccountId,
    /// Identifier of the chain on which the activity was observed.
    pub origin_chain: u64,
    /// Reference to the source (contract, pool, bridge) on the origin chain.
    pub origin_source: Hash,
    /// Size of the reported activity, denominated with `scale` decimals.
    pub magnitude: u128,
    /// Number of decimals of `magnitude`.
    pub scale: u8,
    /// Reference to the evidence, usually a transaction hash.
    pub evidence: Hash,
    /// The detector which submitted the report.
    pub detector: AccountId,
}
