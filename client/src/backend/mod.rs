// Charter
// Copyright (C) 2020 The Charter developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License version 3 as
// published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Backends implement the node interface a [crate::Client] runs against,
//! either a remote node over JSON-RPC or the in-process [Emulator].

use async_trait::async_trait;

use charter_core::{Address, BlockHash, BlockNumber, TxHash};

use crate::error::Error;
use crate::interface::ChainMetadata;
use crate::receipt::Receipt;

pub mod emulator;
pub mod remote_node;

pub use emulator::Emulator;
pub use remote_node::RemoteNode;

/// Identifies an installed block filter on a node.
pub type FilterId = u64;

/// Queue-admission verdicts a node answers a raw submission with.
pub mod status {
    pub const OK: &str = "OK";
    pub const BAD_SIGNATURE: &str = "BadSignature";
    pub const DUP: &str = "Dup";
    pub const INVALID_UNTIL_BLOCK: &str = "InvalidUntilBlock";
    pub const QUOTA_NOT_ENOUGH: &str = "QuotaNotEnough";
    pub const MALFORMED_TRANSACTION: &str = "MalformedTransaction";
    pub const INVALID_CHAIN_ID: &str = "InvalidChainId";
}

/// Backend for talking to a node.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Hand an encoded transaction to the node for queueing. Resolves
    /// with the transaction hash once the node has accepted it.
    async fn submit_raw(&self, raw: Vec<u8>) -> Result<TxHash, Error>;

    /// The receipt for an executed transaction, or `None` while it has
    /// not been executed.
    async fn receipt(&self, tx_hash: TxHash) -> Result<Option<Receipt>, Error>;

    /// Execute a read-only query against a system contract.
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, Error>;

    async fn block_number(&self) -> Result<BlockNumber, Error>;

    /// Install a filter that observes newly produced blocks.
    async fn new_block_filter(&self) -> Result<FilterId, Error>;

    /// Hashes of the blocks produced since this filter was last polled.
    async fn filter_changes(&self, filter_id: FilterId) -> Result<Vec<BlockHash>, Error>;

    async fn uninstall_filter(&self, filter_id: FilterId) -> Result<(), Error>;

    /// Chain identity, fetched once when the backend is created.
    fn chain_metadata(&self) -> ChainMetadata;
}
