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

//! Client for the Charter chain.
//!
//! This crate provides [Client] together with the [ClientT] trait it
//! implements. A client either talks JSON-RPC to a running node
//! ([Client::create]) or runs against an in-process emulator with the
//! same governance semantics ([Client::new_emulator]).
//!
//! Transaction submission is two-stage. [ClientT::sign_and_submit_message]
//! resolves once the node has accepted the transaction into its queue and
//! yields a second future. That inner future resolves once the
//! transaction has been executed and its receipt retrieved, with the
//! message's result extracted from the receipt.
//!
//! ```no_run
//! # use charter_client::*;
//! # async fn example() -> Result<(), Error> {
//! let client = Client::create("http://127.0.0.1:1337".parse().unwrap()).await?;
//! let session = Session::new(ed25519::Pair::from_string("//Admin"));
//! let included = client
//!     .sign_and_submit_message(
//!         &session,
//!         message::ApproveNode { node: Address::zero() },
//!         100_000,
//!     )
//!     .await?
//!     .await?;
//! included.result.expect("node approval failed");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::prelude::*;
use parity_scale_codec::{Decode, Encode};
use url::Url;

pub mod backend;
mod error;
mod interface;
mod message_impls;
mod poll;
mod receipt;
mod rpc;
mod session;
mod transaction;

pub use crate::backend::{Backend, Emulator, RemoteNode};
pub use crate::error::Error;
pub use crate::interface::*;
pub use crate::poll::RECEIPT_POLL_ATTEMPTS;
pub use crate::receipt::{Log, Receipt, ReceiptExtractionError};
pub use crate::session::{Session, DEFAULT_VALIDITY_WINDOW};
pub use crate::transaction::{TransactionBody, UnverifiedTransaction};

/// How often a remote node is polled for new blocks.
const REMOTE_POLL_INTERVAL: Duration = Duration::from_secs(1);
/// Emulator blocks appear instantly, so polling can be tight.
const EMULATOR_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// A [ClientT] implementation over a pluggable [Backend].
#[derive(Clone)]
pub struct Client {
    backend: Arc<dyn Backend>,
    poll_interval: Duration,
}

impl Client {
    /// Connect to the node listening at `endpoint`.
    pub async fn create(endpoint: Url) -> Result<Self, Error> {
        let backend = RemoteNode::create(endpoint).await?;
        Ok(Client {
            backend: Arc::new(backend),
            poll_interval: REMOTE_POLL_INTERVAL,
        })
    }

    /// A client against a fresh in-process chain whose genesis admin is
    /// `admin`, returned alongside the emulator for test inspection.
    pub fn new_emulator(admin: Address) -> (Self, Emulator) {
        let emulator = Emulator::new(admin);
        let client = Client {
            backend: Arc::new(emulator.clone()),
            poll_interval: EMULATOR_POLL_INTERVAL,
        };
        (client, emulator)
    }

    /// A client over an existing backend, polling at `poll_interval`.
    pub fn with_backend(backend: Arc<dyn Backend>, poll_interval: Duration) -> Self {
        Client {
            backend,
            poll_interval,
        }
    }

    async fn query<T: Decode>(&self, query: charter_core::call::Query) -> Result<T, Error> {
        let response = self
            .backend
            .call(query.target(), query.encode())
            .await?;
        T::decode(&mut response.as_slice()).map_err(Error::Codec)
    }
}

#[async_trait]
impl ClientT for Client {
    async fn submit_transaction<Message_: Message>(
        &self,
        transaction: Transaction<Message_>,
    ) -> Result<Response<TransactionIncluded<Message_>>, Error> {
        let tx_hash = self.backend.submit_raw(transaction.raw()).await?;
        let backend = Arc::clone(&self.backend);
        let poll_interval = self.poll_interval;
        Ok(async move {
            let receipt = poll::wait_for_receipt(&backend, tx_hash, poll_interval).await?;
            let result = Message_::result_from_receipt(&receipt)
                .map_err(|error| Error::ReceiptExtraction { error, tx_hash })?;
            Ok(TransactionIncluded {
                tx_hash,
                receipt,
                result,
            })
        }
        .boxed())
    }

    async fn sign_and_submit_message<Message_: Message>(
        &self,
        session: &Session,
        message: Message_,
        quota: Quota,
    ) -> Result<Response<TransactionIncluded<Message_>>, Error> {
        let mut extra = self.transaction_extra(session).await?;
        extra.nonce = session.next_nonce();
        extra.quota = quota;
        let transaction = Transaction::new_signed(session.author(), message, extra);
        self.submit_transaction(transaction).await
    }

    async fn transaction_extra(&self, session: &Session) -> Result<TransactionExtra, Error> {
        let block_number = self.backend.block_number().await?;
        Ok(TransactionExtra {
            nonce: 0,
            quota: 0,
            valid_until_block: block_number + session.validity_window(),
            chain_id: self.backend.chain_metadata().chain_id,
        })
    }

    async fn block_number(&self) -> Result<BlockNumber, Error> {
        self.backend.block_number().await
    }

    fn chain_metadata(&self) -> ChainMetadata {
        self.backend.chain_metadata()
    }

    async fn account_permissions(&self, account: Address) -> Result<Vec<Address>, Error> {
        self.query(call::Query::AccountPermissions(account)).await
    }

    async fn permission_accounts(&self, permission: Address) -> Result<Vec<Address>, Error> {
        self.query(call::Query::PermissionAccounts(permission)).await
    }

    async fn check_permission(
        &self,
        account: Address,
        permission: Address,
    ) -> Result<bool, Error> {
        self.query(call::Query::CheckPermission(account, permission))
            .await
    }

    async fn check_resource(&self, account: Address, resource: Resource) -> Result<bool, Error> {
        self.query(call::Query::CheckResource(account, resource))
            .await
    }

    async fn all_accounts(&self) -> Result<Vec<Address>, Error> {
        self.query(call::Query::AllAccounts).await
    }

    async fn account_roles(&self, account: Address) -> Result<Vec<Address>, Error> {
        self.query(call::Query::AccountRoles(account)).await
    }

    async fn get_permission(
        &self,
        permission: Address,
    ) -> Result<Option<state::PermissionData>, Error> {
        self.query(call::Query::PermissionInfo(permission)).await
    }

    async fn get_role(&self, role: Address) -> Result<Option<state::RoleData>, Error> {
        self.query(call::Query::RoleInfo(role)).await
    }

    async fn get_group(&self, group: Address) -> Result<Option<state::GroupData>, Error> {
        self.query(call::Query::GroupInfo(group)).await
    }

    async fn check_scope(&self, origin: Address, target: Address) -> Result<bool, Error> {
        self.query(call::Query::CheckScope(origin, target)).await
    }

    async fn block_quota_limit(&self) -> Result<Quota, Error> {
        self.query(call::Query::BlockQuotaLimit).await
    }

    async fn default_account_quota_limit(&self) -> Result<Quota, Error> {
        self.query(call::Query::DefaultAccountQuotaLimit).await
    }

    async fn account_quota_limit(&self, account: Address) -> Result<Quota, Error> {
        self.query(call::Query::AccountQuotaLimit(account)).await
    }

    async fn quota_accounts(&self) -> Result<Vec<Address>, Error> {
        self.query(call::Query::QuotaAccounts).await
    }

    async fn quota_limits(&self) -> Result<Vec<Quota>, Error> {
        self.query(call::Query::QuotaLimits).await
    }

    async fn list_nodes(&self) -> Result<Vec<Address>, Error> {
        self.query(call::Query::ListNodes).await
    }

    async fn node_status(&self, node: Address) -> Result<state::NodeStatus, Error> {
        // A node the chain has never seen behaves like a closed one.
        let status: Option<state::NodeStatus> =
            self.query(call::Query::NodeStatus(node)).await?;
        Ok(status.unwrap_or(state::NodeStatus::Close))
    }

    async fn node_stake(&self, node: Address) -> Result<u64, Error> {
        let stake: Option<u64> = self.query(call::Query::NodeStake(node)).await?;
        Ok(stake.unwrap_or(0))
    }

    async fn admin_address(&self) -> Result<Address, Error> {
        self.query(call::Query::AdminAddress).await
    }
}
