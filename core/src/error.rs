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

//! Execution failures reported through transaction receipts.
//!
//! A transaction that was included in a block but failed a business rule
//! carries a diagnostic string in the receipt's `errorMessage` field. The
//! absence of an error is `null`, which callers must keep distinct from an
//! empty string.

/// Receipt error for a call that was rejected by the target contract.
pub const EXECUTION_REVERTED: &str = "Reverted.";
/// Receipt error for a sender lacking the required permission.
pub const NO_PERMISSION: &str = "No permission.";
/// Receipt error for a declared quota below the execution cost.
pub const NOT_ENOUGH_QUOTA: &str = "Not enough quota.";

/// Failure of an executed transaction, parsed from the receipt's
/// `errorMessage`.
///
/// These are expected outcomes that calling code branches on; they are
/// never raised as transport errors.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TransactionError {
    /// The target contract rejected the call.
    #[error("{}", EXECUTION_REVERTED)]
    Reverted,
    /// The sender's effective permission set does not cover the call.
    #[error("{}", NO_PERMISSION)]
    NoPermission,
    /// The declared quota was below the computed execution cost.
    #[error("{}", NOT_ENOUGH_QUOTA)]
    NotEnoughQuota,
    /// A diagnostic this client has no special handling for.
    #[error("{0}")]
    Other(String),
}

impl TransactionError {
    /// Parse the receipt's `errorMessage`. The empty string is preserved
    /// as [TransactionError::Other].
    pub fn from_message(message: &str) -> Self {
        match message {
            EXECUTION_REVERTED => TransactionError::Reverted,
            NO_PERMISSION => TransactionError::NoPermission,
            NOT_ENOUGH_QUOTA => TransactionError::NotEnoughQuota,
            other => TransactionError::Other(other.to_string()),
        }
    }

    /// The canonical `errorMessage` string for this failure.
    pub fn message(&self) -> &str {
        match self {
            TransactionError::Reverted => EXECUTION_REVERTED,
            TransactionError::NoPermission => NO_PERMISSION,
            TransactionError::NotEnoughQuota => NOT_ENOUGH_QUOTA,
            TransactionError::Other(message) => message,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn canonical_messages_round_trip() {
        for error in [
            TransactionError::Reverted,
            TransactionError::NoPermission,
            TransactionError::NotEnoughQuota,
            TransactionError::Other("out of gas".to_string()),
        ] {
            assert_eq!(TransactionError::from_message(error.message()), error);
        }
    }

    #[test]
    fn empty_string_is_not_success() {
        assert_eq!(
            TransactionError::from_message(""),
            TransactionError::Other(String::new())
        );
    }
}
