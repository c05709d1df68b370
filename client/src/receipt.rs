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

//! Transaction receipts and the logs they carry.
//!
//! A receipt becomes available some blocks after submission. Its
//! `errorMessage` is `null` for a successful execution and a diagnostic
//! string otherwise; the two must never be conflated, and an empty string
//! is an error like any other.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use charter_core::{hexfmt, keccak256, Address, BlockNumber, TransactionError, TxHash, H256};

/// Receipt status for a transaction that executed without error.
pub const STATUS_SUCCESS: &str = "0x1";
/// Receipt status for a transaction whose execution failed.
pub const STATUS_FAILURE: &str = "0x0";

lazy_static! {
    /// First topic of the log emitted when a permission is created.
    pub static ref PERMISSION_CREATED_TOPIC: H256 = keccak256(b"PermissionCreated(address)");
    /// First topic of the log emitted when a role is created.
    pub static ref ROLE_CREATED_TOPIC: H256 = keccak256(b"RoleCreated(address)");
    /// First topic of the log emitted when a group is created.
    pub static ref GROUP_CREATED_TOPIC: H256 = keccak256(b"GroupCreated(address)");
}

/// A log entry deposited by a contract during execution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    pub address: Address,
    pub topics: Vec<H256>,
    #[serde(with = "hexfmt::bytes")]
    pub data: Vec<u8>,
}

impl Log {
    /// The log announcing a created entity: the event topic followed by
    /// the new entity's address.
    pub fn created(contract: Address, event_topic: H256, created: Address) -> Self {
        Log {
            address: contract,
            topics: vec![event_topic, H256::from_address(&created)],
            data: Vec::new(),
        }
    }
}

/// The outcome of an executed transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub transaction_hash: TxHash,
    #[serde(with = "hexfmt::quantity")]
    pub block_number: BlockNumber,
    /// [STATUS_SUCCESS] or [STATUS_FAILURE].
    pub status: String,
    /// `None` on success. `Some` carries the diagnostic supplied by the
    /// execution layer, which may be empty.
    pub error_message: Option<String>,
    pub logs: Vec<Log>,
}

impl Receipt {
    pub fn success(transaction_hash: TxHash, block_number: BlockNumber, logs: Vec<Log>) -> Self {
        Receipt {
            transaction_hash,
            block_number,
            status: STATUS_SUCCESS.to_string(),
            error_message: None,
            logs,
        }
    }

    pub fn failure(transaction_hash: TxHash, block_number: BlockNumber, message: String) -> Self {
        Receipt {
            transaction_hash,
            block_number,
            status: STATUS_FAILURE.to_string(),
            error_message: Some(message),
            logs: Vec::new(),
        }
    }

    /// The execution failure, if any.
    pub fn transaction_error(&self) -> Option<TransactionError> {
        self.error_message
            .as_deref()
            .map(TransactionError::from_message)
    }

    /// The address announced by a creation log with the given event topic.
    pub fn created_address(&self, event_topic: &H256) -> Option<Address> {
        self.logs.iter().find_map(|log| {
            if log.topics.first() == Some(event_topic) {
                log.topics.get(1).map(H256::to_address)
            } else {
                None
            }
        })
    }
}

/// Failure to read an expected result out of a successful receipt.
///
/// This is an error: a successful creation must at least announce the
/// created entity's address.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReceiptExtractionError {
    #[error("creation log not found in receipt")]
    CreationLogMissing,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn null_and_empty_error_message_stay_distinct() {
        let json = r#"{
            "transactionHash": "0x0101010101010101010101010101010101010101010101010101010101010101",
            "blockNumber": "0x10",
            "status": "0x1",
            "errorMessage": null,
            "logs": []
        }"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.error_message, None);
        assert_eq!(receipt.transaction_error(), None);

        let json_empty = json.replace("null", "\"\"");
        let receipt: Receipt = serde_json::from_str(&json_empty).unwrap();
        assert_eq!(receipt.error_message, Some(String::new()));
        assert_eq!(
            receipt.transaction_error(),
            Some(TransactionError::Other(String::new()))
        );
    }

    #[test]
    fn receipt_serializes_error_message_as_null() {
        let receipt = Receipt::success(H256::zero(), 3, Vec::new());
        let json = serde_json::to_value(&receipt).unwrap();
        assert!(json.get("errorMessage").unwrap().is_null());
        assert_eq!(json.get("blockNumber").unwrap(), "0x3");
    }

    #[test]
    fn created_address_reads_the_matching_log() {
        let created: Address = "0x00000000000000000000000000000000000000aa"
            .parse()
            .unwrap();
        let receipt = Receipt::success(
            H256::zero(),
            1,
            vec![Log::created(
                charter_core::registry::PERMISSION_MANAGEMENT,
                *PERMISSION_CREATED_TOPIC,
                created,
            )],
        );
        assert_eq!(
            receipt.created_address(&PERMISSION_CREATED_TOPIC),
            Some(created)
        );
        assert_eq!(receipt.created_address(&ROLE_CREATED_TOPIC), None);
    }
}
