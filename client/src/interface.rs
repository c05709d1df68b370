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

//! Abstract client interface to interact with the chain.

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

pub use charter_core::*;

pub use crate::error::Error;
pub use crate::message_impls::Message;
pub use crate::receipt::Receipt;
pub use crate::session::Session;
pub use crate::transaction::{Transaction, TransactionExtra};

/// Chain identity as reported by the node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainMetadata {
    pub chain_id: u32,
    pub chain_name: String,
    pub version: u32,
}

/// Result of an asynchronous client call.
pub type Response<T> = BoxFuture<'static, Result<T, Error>>;

/// A transaction that has made it into a block, together with the
/// outcome of its execution.
pub struct TransactionIncluded<Message_: Message> {
    pub tx_hash: TxHash,
    pub receipt: Receipt,
    /// `Err` when the execution layer rejected the transaction. The
    /// transaction still occupies a place in the chain and its nonce
    /// is spent.
    pub result: Result<Message_::Output, TransactionError>,
}

impl<Message_: Message> std::fmt::Debug for TransactionIncluded<Message_>
where
    Message_::Output: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("TransactionIncluded")
            .field("tx_hash", &self.tx_hash)
            .field("receipt", &self.receipt)
            .field("result", &self.result)
            .finish()
    }
}

/// Trait for Charter clients.
///
/// Submissions are two-stage. The outer future resolves once the node has
/// accepted the transaction into its queue. The returned inner future
/// resolves once the transaction has been executed in a block and its
/// receipt is available.
#[async_trait]
pub trait ClientT: Send + Sync {
    /// Submit a signed transaction.
    async fn submit_transaction<Message_: Message>(
        &self,
        transaction: Transaction<Message_>,
    ) -> Result<Response<TransactionIncluded<Message_>>, Error>;

    /// Sign a message under the session's author, spending the session's
    /// next nonce, then submit it.
    async fn sign_and_submit_message<Message_: Message>(
        &self,
        session: &Session,
        message: Message_,
        quota: Quota,
    ) -> Result<Response<TransactionIncluded<Message_>>, Error>;

    /// Transaction parameters the client would use for the session's
    /// next submission. Calling this does not spend a nonce.
    async fn transaction_extra(&self, session: &Session) -> Result<TransactionExtra, Error>;

    async fn block_number(&self) -> Result<BlockNumber, Error>;

    fn chain_metadata(&self) -> ChainMetadata;

    async fn account_permissions(&self, account: Address) -> Result<Vec<Address>, Error>;

    async fn permission_accounts(&self, permission: Address) -> Result<Vec<Address>, Error>;

    async fn check_permission(&self, account: Address, permission: Address)
        -> Result<bool, Error>;

    async fn check_resource(&self, account: Address, resource: Resource) -> Result<bool, Error>;

    async fn all_accounts(&self) -> Result<Vec<Address>, Error>;

    async fn account_roles(&self, account: Address) -> Result<Vec<Address>, Error>;

    async fn get_permission(
        &self,
        permission: Address,
    ) -> Result<Option<state::PermissionData>, Error>;

    async fn get_role(&self, role: Address) -> Result<Option<state::RoleData>, Error>;

    async fn get_group(&self, group: Address) -> Result<Option<state::GroupData>, Error>;

    /// Whether `target` lies within the subtree rooted at `origin` in the
    /// group hierarchy.
    async fn check_scope(&self, origin: Address, target: Address) -> Result<bool, Error>;

    async fn block_quota_limit(&self) -> Result<Quota, Error>;

    async fn default_account_quota_limit(&self) -> Result<Quota, Error>;

    async fn account_quota_limit(&self, account: Address) -> Result<Quota, Error>;

    async fn quota_accounts(&self) -> Result<Vec<Address>, Error>;

    async fn quota_limits(&self) -> Result<Vec<Quota>, Error>;

    async fn list_nodes(&self) -> Result<Vec<Address>, Error>;

    async fn node_status(&self, node: Address) -> Result<state::NodeStatus, Error>;

    async fn node_stake(&self, node: Address) -> Result<u64, Error>;

    async fn admin_address(&self) -> Result<Address, Error>;
}
