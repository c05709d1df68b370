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

//! [Message] ties each submittable message type to the [Call] it becomes
//! on the wire and to the result a client extracts from its receipt.

use charter_core::call::Call;
use charter_core::{message, Address, TransactionError, H256};

use crate::receipt::{
    Receipt, ReceiptExtractionError, GROUP_CREATED_TOPIC, PERMISSION_CREATED_TOPIC,
    ROLE_CREATED_TOPIC,
};

/// A message that can be signed into a transaction and submitted.
pub trait Message: Send + 'static {
    /// Value a client hands back for a successfully executed message.
    type Output: Send + 'static;

    fn into_call(self) -> Call;

    /// Extract the execution outcome from an available receipt.
    ///
    /// The outer `Err` means a receipt that should carry a result does
    /// not, the inner `Err` that the execution layer rejected the
    /// transaction.
    fn result_from_receipt(
        receipt: &Receipt,
    ) -> Result<Result<Self::Output, TransactionError>, ReceiptExtractionError>;
}

fn unit_result(
    receipt: &Receipt,
) -> Result<Result<(), TransactionError>, ReceiptExtractionError> {
    match receipt.transaction_error() {
        None => Ok(Ok(())),
        Some(error) => Ok(Err(error)),
    }
}

fn created_result(
    receipt: &Receipt,
    event_topic: &H256,
) -> Result<Result<Address, TransactionError>, ReceiptExtractionError> {
    if let Some(error) = receipt.transaction_error() {
        return Ok(Err(error));
    }
    match receipt.created_address(event_topic) {
        Some(address) => Ok(Ok(address)),
        None => Err(ReceiptExtractionError::CreationLogMissing),
    }
}

macro_rules! unit_message {
    ($name:ident) => {
        impl Message for message::$name {
            type Output = ();

            fn into_call(self) -> Call {
                Call::$name(self)
            }

            fn result_from_receipt(
                receipt: &Receipt,
            ) -> Result<Result<Self::Output, TransactionError>, ReceiptExtractionError> {
                unit_result(receipt)
            }
        }
    };
}

macro_rules! created_message {
    ($name:ident, $topic:expr) => {
        impl Message for message::$name {
            type Output = Address;

            fn into_call(self) -> Call {
                Call::$name(self)
            }

            fn result_from_receipt(
                receipt: &Receipt,
            ) -> Result<Result<Self::Output, TransactionError>, ReceiptExtractionError> {
                created_result(receipt, &$topic)
            }
        }
    };
}

created_message!(NewPermission, PERMISSION_CREATED_TOPIC);
created_message!(NewRole, ROLE_CREATED_TOPIC);
created_message!(NewGroup, GROUP_CREATED_TOPIC);

unit_message!(DeletePermission);
unit_message!(UpdatePermissionName);
unit_message!(AddResources);
unit_message!(DeleteResources);
unit_message!(SetAuthorization);
unit_message!(CancelAuthorization);
unit_message!(ClearAuthorization);

unit_message!(DeleteRole);
unit_message!(UpdateRoleName);
unit_message!(AddPermissions);
unit_message!(DeletePermissions);
unit_message!(SetRole);
unit_message!(CancelRole);
unit_message!(ClearRole);

unit_message!(DeleteGroup);
unit_message!(UpdateGroupName);
unit_message!(AddAccounts);
unit_message!(DeleteAccounts);

unit_message!(SetBlockQuotaLimit);
unit_message!(SetDefaultAccountQuotaLimit);
unit_message!(SetAccountQuotaLimit);

unit_message!(ApproveNode);
unit_message!(DeleteNode);
unit_message!(SetStake);

unit_message!(UpdateAdmin);

#[cfg(test)]
mod test {
    use super::*;
    use crate::receipt::Log;
    use charter_core::registry;

    #[test]
    fn new_permission_result_is_the_created_address() {
        let created: Address = "0x00000000000000000000000000000000000000bb"
            .parse()
            .unwrap();
        let receipt = Receipt::success(
            H256::zero(),
            1,
            vec![Log::created(
                registry::PERMISSION_MANAGEMENT,
                *PERMISSION_CREATED_TOPIC,
                created,
            )],
        );
        let result = message::NewPermission::result_from_receipt(&receipt).unwrap();
        assert_eq!(result, Ok(created));
    }

    #[test]
    fn missing_creation_log_is_an_extraction_error() {
        let receipt = Receipt::success(H256::zero(), 1, Vec::new());
        assert_eq!(
            message::NewRole::result_from_receipt(&receipt),
            Err(ReceiptExtractionError::CreationLogMissing)
        );
    }

    #[test]
    fn failed_execution_yields_the_transaction_error() {
        let receipt = Receipt::failure(H256::zero(), 1, "No permission.".to_string());
        let result = message::NewGroup::result_from_receipt(&receipt).unwrap();
        assert_eq!(result, Err(TransactionError::NoPermission));
    }
}
