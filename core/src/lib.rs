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

//! Basic types used in Charter.
//!
//! The chain manages accounts, permissions, roles, groups, quotas and
//! consensus nodes through a fixed set of system contracts living at
//! reserved addresses. This crate defines the entities stored by those
//! contracts, the messages that mutate them and the wire payloads
//! ([call::Call], [call::Query]) a client submits against them.

pub mod message;
pub mod state;

pub mod call;
pub mod ed25519;
pub mod hexfmt;
pub mod registry;

mod address;
pub use address::Address;

mod hash;
pub use hash::{keccak256, H256};

mod resource;
pub use resource::{selector, Resource, Selector};

pub mod error;
pub use error::TransactionError;

/// The hash of a transaction. Uniquely identifies a transaction.
pub type TxHash = H256;

/// The hash of a block. Uniquely identifies a block.
pub type BlockHash = H256;

/// Height of a block in the chain.
pub type BlockNumber = u64;

/// Resource bound declared by a transaction and accounted per block.
pub type Quota = u64;

/// Per-account transaction counter used for replay protection.
pub type Nonce = u64;

/// Version of the transaction encoding understood by the node.
pub const PROTOCOL_VERSION: u32 = 1;
