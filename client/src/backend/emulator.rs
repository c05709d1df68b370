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

//! In-process chain emulator.
//!
//! Implements the full governance semantics of the system contracts
//! against an in-memory state so clients can be exercised without a
//! node. A block is produced for every accepted submission and for
//! every filter poll, which keeps receipt polling live.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use parity_scale_codec::{Decode, Encode};

use charter_core::call::{Call, Query};
use charter_core::error as txerror;
use charter_core::state::{GroupData, NodeData, NodeStatus, PermissionData, QuotaState, RoleData};
use charter_core::{
    keccak256, registry, Address, BlockHash, BlockNumber, Nonce, Quota, Resource, TxHash,
};

use crate::backend::{status, Backend, FilterId};
use crate::error::Error;
use crate::interface::ChainMetadata;
use crate::receipt::{
    Log, Receipt, GROUP_CREATED_TOPIC, PERMISSION_CREATED_TOPIC, ROLE_CREATED_TOPIC,
};
use crate::transaction::UnverifiedTransaction;

/// Chain id the emulator reports and accepts.
pub const EMULATOR_CHAIN_ID: u32 = 1;

/// Fixed quota cost of any transaction.
pub const BASE_TX_QUOTA: Quota = 21_000;
/// Quota cost per byte of the raw transaction.
pub const QUOTA_PER_BYTE: Quota = 68;

/// Direct grants of a single account.
#[derive(Clone, Debug, Default)]
struct AccountAuth {
    permissions: Vec<Address>,
    roles: Vec<Address>,
}

/// The governance state of the emulated chain.
struct ChainState {
    admin: Address,
    permissions: BTreeMap<Address, PermissionData>,
    roles: BTreeMap<Address, RoleData>,
    groups: BTreeMap<Address, GroupData>,
    auth: BTreeMap<Address, AccountAuth>,
    quota: QuotaState,
    nodes: Vec<(Address, NodeData)>,
}

impl ChainState {
    fn genesis(admin: Address) -> Self {
        let permissions = registry::builtin_permissions().into_iter().collect();
        let mut auth = BTreeMap::new();
        auth.insert(
            admin,
            AccountAuth {
                permissions: registry::admin_permissions(),
                roles: Vec::new(),
            },
        );
        let mut groups = BTreeMap::new();
        groups.insert(
            registry::ROOT_GROUP,
            GroupData::new(None, "rootGroup".to_string(), vec![admin]),
        );
        ChainState {
            admin,
            permissions,
            roles: BTreeMap::new(),
            groups,
            auth,
            quota: QuotaState::default(),
            nodes: Vec::new(),
        }
    }

    /// Effective permission set of an account: direct grants united with
    /// the permissions of all of its roles, deduplicated.
    fn effective_permissions(&self, account: &Address) -> Vec<Address> {
        let mut effective = Vec::new();
        if let Some(auth) = self.auth.get(account) {
            for permission in &auth.permissions {
                if !effective.contains(permission) {
                    effective.push(*permission);
                }
            }
            for role in &auth.roles {
                if let Some(role_data) = self.roles.get(role) {
                    for permission in &role_data.permissions {
                        if !effective.contains(permission) {
                            effective.push(*permission);
                        }
                    }
                }
            }
        }
        effective
    }

    fn is_authorized(&self, account: &Address, resource: &Resource) -> bool {
        self.effective_permissions(account).iter().any(|p| {
            self.permissions
                .get(p)
                .map(|data| data.contains_resource(resource))
                .unwrap_or(false)
        })
    }

    /// Whether `target` is `origin` or one of its descendants, walking
    /// the parent chain upwards from `target`.
    fn in_scope(&self, origin: &Address, target: &Address) -> bool {
        let mut current = *target;
        loop {
            if current == *origin {
                return true;
            }
            match self.groups.get(&current).and_then(|g| g.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }
}

struct EmulatorState {
    block_number: BlockNumber,
    chain: ChainState,
    /// Receipts keyed by transaction hash, with the block height at
    /// which they become visible.
    receipts: HashMap<TxHash, (BlockNumber, Receipt)>,
    seen_nonces: HashSet<(Address, Nonce)>,
    /// Installed block filters and the last block each one has reported.
    filters: HashMap<FilterId, BlockNumber>,
    next_filter_id: FilterId,
    created_counter: u64,
    receipt_delay: u64,
}

/// Emulates a node with in-memory chain state.
///
/// Clones share the same state.
#[derive(Clone)]
pub struct Emulator {
    state: Arc<Mutex<EmulatorState>>,
}

impl Emulator {
    /// An emulated chain whose genesis admin is `admin`.
    pub fn new(admin: Address) -> Self {
        Emulator::with_receipt_delay(admin, 0)
    }

    /// An emulated chain that withholds each receipt until
    /// `receipt_delay_blocks` further blocks have been produced.
    pub fn with_receipt_delay(admin: Address, receipt_delay_blocks: u64) -> Self {
        Emulator {
            state: Arc::new(Mutex::new(EmulatorState {
                block_number: 0,
                chain: ChainState::genesis(admin),
                receipts: HashMap::new(),
                seen_nonces: HashSet::new(),
                filters: HashMap::new(),
                next_filter_id: 0,
                created_counter: 0,
                receipt_delay: receipt_delay_blocks,
            })),
        }
    }

    /// Number of filters currently installed.
    pub fn active_filters(&self) -> usize {
        self.lock().filters.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, EmulatorState> {
        self.state.lock().expect("emulator state lock poisoned; qed")
    }
}

fn block_hash(block_number: BlockNumber) -> BlockHash {
    keccak256(&block_number.to_le_bytes())
}

impl EmulatorState {
    /// Address assigned to a newly created entity.
    fn fresh_address(&mut self, kind: &str) -> Address {
        self.created_counter += 1;
        let hash = keccak256(format!("{}:{}", kind, self.created_counter).as_bytes());
        hash.to_address()
    }

    fn execute(&mut self, transaction: &UnverifiedTransaction, raw_len: usize) -> Receipt {
        let tx_hash = transaction.hash();
        let sender = transaction.sender();
        let body = &transaction.body;
        let block = self.block_number;

        let account_limit = self.chain.quota.account_limit(&sender);
        if body.quota > account_limit {
            return Receipt::failure(tx_hash, block, txerror::NOT_ENOUGH_QUOTA.to_string());
        }
        let cost = BASE_TX_QUOTA + raw_len as Quota * QUOTA_PER_BYTE;
        if body.quota < cost {
            return Receipt::failure(tx_hash, block, txerror::NOT_ENOUGH_QUOTA.to_string());
        }

        let call = match Call::decode(&mut body.data.as_slice()) {
            Ok(call) => call,
            Err(_) => {
                return Receipt::failure(tx_hash, block, txerror::EXECUTION_REVERTED.to_string())
            }
        };
        if !self.chain.is_authorized(&sender, &call.resource()) {
            return Receipt::failure(tx_hash, block, txerror::NO_PERMISSION.to_string());
        }
        match self.execute_call(call) {
            Ok(logs) => Receipt::success(tx_hash, block, logs),
            Err(message) => Receipt::failure(tx_hash, block, message),
        }
    }

    fn execute_call(&mut self, call: Call) -> Result<Vec<Log>, String> {
        let reverted = || txerror::EXECUTION_REVERTED.to_string();
        let chain = &mut self.chain;
        match call {
            Call::NewPermission(msg) => {
                let address = self.fresh_address("permission");
                self.chain
                    .permissions
                    .insert(address, PermissionData::new(msg.name, msg.resources));
                return Ok(vec![Log::created(
                    registry::PERMISSION_MANAGEMENT,
                    *PERMISSION_CREATED_TOPIC,
                    address,
                )]);
            }
            Call::DeletePermission(msg) => {
                if registry::is_builtin_permission(&msg.permission)
                    || chain.permissions.remove(&msg.permission).is_none()
                {
                    return Err(reverted());
                }
                // A deleted permission disappears from every grant that
                // referenced it.
                for auth in chain.auth.values_mut() {
                    auth.permissions.retain(|p| *p != msg.permission);
                }
                for role in chain.roles.values_mut() {
                    role.remove_permission(&msg.permission);
                }
            }
            Call::UpdatePermissionName(msg) => {
                if registry::is_builtin_permission(&msg.permission) {
                    return Err(reverted());
                }
                chain
                    .permissions
                    .get_mut(&msg.permission)
                    .ok_or_else(reverted)?
                    .name = msg.name;
            }
            Call::AddResources(msg) => {
                if registry::is_builtin_permission(&msg.permission) {
                    return Err(reverted());
                }
                let permission = chain
                    .permissions
                    .get_mut(&msg.permission)
                    .ok_or_else(reverted)?;
                for resource in msg.resources {
                    permission.add_resource(resource);
                }
            }
            Call::DeleteResources(msg) => {
                if registry::is_builtin_permission(&msg.permission) {
                    return Err(reverted());
                }
                let permission = chain
                    .permissions
                    .get_mut(&msg.permission)
                    .ok_or_else(reverted)?;
                for resource in &msg.resources {
                    permission.remove_resource(resource);
                }
            }
            Call::SetAuthorization(msg) => {
                if !chain.permissions.contains_key(&msg.permission) {
                    return Err(reverted());
                }
                let auth = chain.auth.entry(msg.account).or_default();
                if !auth.permissions.contains(&msg.permission) {
                    auth.permissions.push(msg.permission);
                }
            }
            Call::CancelAuthorization(msg) => {
                if let Some(auth) = chain.auth.get_mut(&msg.account) {
                    auth.permissions.retain(|p| *p != msg.permission);
                }
            }
            Call::ClearAuthorization(msg) => {
                if let Some(auth) = chain.auth.get_mut(&msg.account) {
                    auth.permissions.clear();
                }
            }

            Call::NewRole(msg) => {
                if msg
                    .permissions
                    .iter()
                    .any(|p| !chain.permissions.contains_key(p))
                {
                    return Err(reverted());
                }
                let address = self.fresh_address("role");
                self.chain
                    .roles
                    .insert(address, RoleData::new(msg.name, msg.permissions));
                return Ok(vec![Log::created(
                    registry::ROLE_MANAGEMENT,
                    *ROLE_CREATED_TOPIC,
                    address,
                )]);
            }
            Call::DeleteRole(msg) => {
                if chain.roles.remove(&msg.role).is_none() {
                    return Err(reverted());
                }
                for auth in chain.auth.values_mut() {
                    auth.roles.retain(|r| *r != msg.role);
                }
            }
            Call::UpdateRoleName(msg) => {
                chain.roles.get_mut(&msg.role).ok_or_else(reverted)?.name = msg.name;
            }
            Call::AddPermissions(msg) => {
                if msg
                    .permissions
                    .iter()
                    .any(|p| !chain.permissions.contains_key(p))
                {
                    return Err(reverted());
                }
                let role = chain.roles.get_mut(&msg.role).ok_or_else(reverted)?;
                for permission in msg.permissions {
                    role.add_permission(permission);
                }
            }
            Call::DeletePermissions(msg) => {
                let role = chain.roles.get_mut(&msg.role).ok_or_else(reverted)?;
                for permission in &msg.permissions {
                    role.remove_permission(permission);
                }
            }
            Call::SetRole(msg) => {
                if !chain.roles.contains_key(&msg.role) {
                    return Err(reverted());
                }
                let auth = chain.auth.entry(msg.account).or_default();
                if !auth.roles.contains(&msg.role) {
                    auth.roles.push(msg.role);
                }
            }
            Call::CancelRole(msg) => {
                if let Some(auth) = chain.auth.get_mut(&msg.account) {
                    auth.roles.retain(|r| *r != msg.role);
                }
            }
            Call::ClearRole(msg) => {
                if let Some(auth) = chain.auth.get_mut(&msg.account) {
                    auth.roles.clear();
                }
            }

            Call::NewGroup(msg) => {
                if !chain.groups.contains_key(&msg.origin) {
                    return Err(reverted());
                }
                let address = self.fresh_address("group");
                self.chain
                    .groups
                    .insert(address, GroupData::new(Some(msg.origin), msg.name, msg.accounts));
                self.chain
                    .groups
                    .get_mut(&msg.origin)
                    .expect("origin group checked above; qed")
                    .add_child(address);
                return Ok(vec![Log::created(
                    registry::GROUP_MANAGEMENT,
                    *GROUP_CREATED_TOPIC,
                    address,
                )]);
            }
            Call::DeleteGroup(msg) => {
                if msg.target == registry::ROOT_GROUP
                    || !chain.groups.contains_key(&msg.target)
                    || !chain.in_scope(&msg.origin, &msg.target)
                {
                    return Err(reverted());
                }
                let group = chain.groups.get(&msg.target).expect("checked above; qed");
                if !group.children.is_empty() {
                    return Err(reverted());
                }
                let parent = group.parent;
                chain.groups.remove(&msg.target);
                if let Some(parent) = parent.and_then(|p| chain.groups.get_mut(&p)) {
                    parent.remove_child(&msg.target);
                }
            }
            Call::UpdateGroupName(msg) => {
                if !chain.in_scope(&msg.origin, &msg.target) {
                    return Err(reverted());
                }
                chain.groups.get_mut(&msg.target).ok_or_else(reverted)?.name = msg.name;
            }
            Call::AddAccounts(msg) => {
                if !chain.in_scope(&msg.origin, &msg.target) {
                    return Err(reverted());
                }
                let group = chain.groups.get_mut(&msg.target).ok_or_else(reverted)?;
                for account in msg.accounts {
                    group.add_account(account);
                }
            }
            Call::DeleteAccounts(msg) => {
                if !chain.in_scope(&msg.origin, &msg.target) {
                    return Err(reverted());
                }
                let group = chain.groups.get_mut(&msg.target).ok_or_else(reverted)?;
                for account in &msg.accounts {
                    group.remove_account(account);
                }
            }

            Call::SetBlockQuotaLimit(msg) => {
                chain.quota.block_limit = msg.limit;
            }
            Call::SetDefaultAccountQuotaLimit(msg) => {
                chain.quota.default_account_limit = msg.limit;
            }
            Call::SetAccountQuotaLimit(msg) => {
                chain.quota.set_account_limit(msg.account, msg.limit);
            }

            Call::ApproveNode(msg) => {
                match chain.nodes.iter_mut().find(|(n, _)| *n == msg.node) {
                    Some((_, data)) => data.status = NodeStatus::Start,
                    None => chain.nodes.push((
                        msg.node,
                        NodeData {
                            status: NodeStatus::Start,
                            stake: 0,
                        },
                    )),
                }
            }
            Call::DeleteNode(msg) => {
                if let Some((_, data)) = chain.nodes.iter_mut().find(|(n, _)| *n == msg.node) {
                    data.status = NodeStatus::Close;
                }
            }
            Call::SetStake(msg) => {
                chain
                    .nodes
                    .iter_mut()
                    .find(|(n, _)| *n == msg.node)
                    .ok_or_else(reverted)?
                    .1
                    .stake = msg.stake;
            }

            Call::UpdateAdmin(msg) => {
                let old_admin = chain.admin;
                if old_admin == msg.admin {
                    return Ok(Vec::new());
                }
                let moved: Vec<Address> = match chain.auth.get_mut(&old_admin) {
                    Some(auth) => {
                        let builtin: Vec<Address> = auth
                            .permissions
                            .iter()
                            .copied()
                            .filter(registry::is_builtin_permission)
                            .collect();
                        auth.permissions
                            .retain(|p| !registry::is_builtin_permission(p));
                        builtin
                    }
                    None => Vec::new(),
                };
                let auth = chain.auth.entry(msg.admin).or_default();
                for permission in moved {
                    if !auth.permissions.contains(&permission) {
                        auth.permissions.push(permission);
                    }
                }
                chain.admin = msg.admin;
            }
        }
        Ok(Vec::new())
    }

    fn execute_query(&self, query: Query) -> Vec<u8> {
        let chain = &self.chain;
        match query {
            Query::AccountPermissions(account) => chain.effective_permissions(&account).encode(),
            Query::PermissionAccounts(permission) => chain
                .auth
                .keys()
                .filter(|account| chain.effective_permissions(account).contains(&permission))
                .collect::<Vec<_>>()
                .encode(),
            Query::CheckPermission(account, permission) => chain
                .effective_permissions(&account)
                .contains(&permission)
                .encode(),
            Query::CheckResource(account, resource) => {
                chain.is_authorized(&account, &resource).encode()
            }
            Query::AllAccounts => chain
                .auth
                .iter()
                .filter(|(_, auth)| !auth.permissions.is_empty() || !auth.roles.is_empty())
                .map(|(account, _)| account)
                .collect::<Vec<_>>()
                .encode(),
            Query::AccountRoles(account) => chain
                .auth
                .get(&account)
                .map(|auth| auth.roles.clone())
                .unwrap_or_default()
                .encode(),
            Query::PermissionInfo(permission) => chain.permissions.get(&permission).encode(),
            Query::RoleInfo(role) => chain.roles.get(&role).encode(),
            Query::GroupInfo(group) => chain.groups.get(&group).encode(),
            Query::CheckScope(origin, target) => chain.in_scope(&origin, &target).encode(),
            Query::BlockQuotaLimit => chain.quota.block_limit.encode(),
            Query::DefaultAccountQuotaLimit => chain.quota.default_account_limit.encode(),
            Query::AccountQuotaLimit(account) => chain.quota.account_limit(&account).encode(),
            Query::QuotaAccounts => chain.quota.accounts.encode(),
            Query::QuotaLimits => chain.quota.limits.encode(),
            Query::ListNodes => chain
                .nodes
                .iter()
                .filter(|(_, data)| data.status == NodeStatus::Start)
                .map(|(node, _)| node)
                .collect::<Vec<_>>()
                .encode(),
            Query::NodeStatus(node) => chain
                .nodes
                .iter()
                .find(|(n, _)| *n == node)
                .map(|(_, data)| data.status)
                .encode(),
            Query::NodeStake(node) => chain
                .nodes
                .iter()
                .find(|(n, _)| *n == node)
                .map(|(_, data)| data.stake)
                .encode(),
            Query::AdminAddress => chain.admin.encode(),
        }
    }
}

#[async_trait]
impl Backend for Emulator {
    async fn submit_raw(&self, raw: Vec<u8>) -> Result<TxHash, Error> {
        let mut state = self.lock();
        let transaction = UnverifiedTransaction::decode(&mut raw.as_slice()).map_err(|_| {
            Error::Submission {
                status: status::MALFORMED_TRANSACTION.to_string(),
            }
        })?;
        if transaction.body.version != charter_core::PROTOCOL_VERSION {
            return Err(Error::Submission {
                status: status::MALFORMED_TRANSACTION.to_string(),
            });
        }
        if !transaction.verify_signature() {
            return Err(Error::Submission {
                status: status::BAD_SIGNATURE.to_string(),
            });
        }
        if transaction.body.chain_id != EMULATOR_CHAIN_ID {
            return Err(Error::Submission {
                status: status::INVALID_CHAIN_ID.to_string(),
            });
        }
        if transaction.body.valid_until_block <= state.block_number {
            return Err(Error::Submission {
                status: status::INVALID_UNTIL_BLOCK.to_string(),
            });
        }
        let sender = transaction.sender();
        if state.seen_nonces.contains(&(sender, transaction.body.nonce)) {
            return Err(Error::Submission {
                status: status::DUP.to_string(),
            });
        }
        if transaction.body.quota > state.chain.quota.block_limit {
            return Err(Error::QuotaExceeded {
                reason: "declared quota exceeds the block quota limit".to_string(),
            });
        }
        // The nonce is marked spent only once the queue accepts the
        // transaction. A rejected submission can be retried as-is.
        state.seen_nonces.insert((sender, transaction.body.nonce));

        state.block_number += 1;
        let receipt = state.execute(&transaction, raw.len());
        let tx_hash = transaction.hash();
        let available_at = state.block_number + state.receipt_delay;
        state.receipts.insert(tx_hash, (available_at, receipt));
        Ok(tx_hash)
    }

    async fn receipt(&self, tx_hash: TxHash) -> Result<Option<Receipt>, Error> {
        let state = self.lock();
        Ok(state.receipts.get(&tx_hash).and_then(|(available_at, receipt)| {
            if state.block_number >= *available_at {
                Some(receipt.clone())
            } else {
                None
            }
        }))
    }

    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, Error> {
        let state = self.lock();
        let query = Query::decode(&mut data.as_slice())
            .map_err(|_| Error::BadResponse("malformed query payload".to_string()))?;
        if query.target() != to {
            return Err(Error::BadResponse(format!(
                "query addressed to {} but sent to {}",
                query.target(),
                to
            )));
        }
        Ok(state.execute_query(query))
    }

    async fn block_number(&self) -> Result<BlockNumber, Error> {
        Ok(self.lock().block_number)
    }

    async fn new_block_filter(&self) -> Result<FilterId, Error> {
        let mut state = self.lock();
        let id = state.next_filter_id;
        state.next_filter_id += 1;
        let block_number = state.block_number;
        state.filters.insert(id, block_number);
        Ok(id)
    }

    async fn filter_changes(&self, filter_id: FilterId) -> Result<Vec<BlockHash>, Error> {
        let mut state = self.lock();
        if !state.filters.contains_key(&filter_id) {
            return Err(Error::Other(format!("unknown filter {}", filter_id)));
        }
        // Polling drives block production so delayed receipts mature.
        state.block_number += 1;
        let current = state.block_number;
        let last_seen = state
            .filters
            .insert(filter_id, current)
            .expect("filter presence checked above; qed");
        Ok((last_seen + 1..=current).map(block_hash).collect())
    }

    async fn uninstall_filter(&self, filter_id: FilterId) -> Result<(), Error> {
        self.lock().filters.remove(&filter_id);
        Ok(())
    }

    fn chain_metadata(&self) -> ChainMetadata {
        ChainMetadata {
            chain_id: EMULATOR_CHAIN_ID,
            chain_name: "charter-emulator".to_string(),
            version: charter_core::PROTOCOL_VERSION,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use charter_core::state::DEFAULT_BLOCK_QUOTA_LIMIT;
    use charter_core::{ed25519, message};

    use crate::interface::TransactionExtra;
    use crate::transaction::Transaction;

    fn addr(tail: u8) -> Address {
        let mut data = [0u8; 20];
        data[19] = tail;
        Address(data)
    }

    fn admin_state() -> (Emulator, Address) {
        let admin = addr(0xad);
        (Emulator::new(admin), admin)
    }

    #[test]
    fn genesis_admin_is_authorized_for_governance() {
        let (emulator, admin) = admin_state();
        let state = emulator.lock();
        let call = Call::ApproveNode(message::ApproveNode { node: addr(1) });
        assert!(state.chain.is_authorized(&admin, &call.resource()));
        assert!(!state.chain.is_authorized(&addr(1), &call.resource()));
    }

    #[test]
    fn node_transitions_are_idempotent() {
        let (emulator, _) = admin_state();
        let mut state = emulator.lock();
        let node = addr(7);
        for _ in 0..2 {
            state
                .execute_call(Call::ApproveNode(message::ApproveNode { node }))
                .unwrap();
        }
        assert_eq!(state.chain.nodes.len(), 1);
        assert_eq!(state.chain.nodes[0].1.status, NodeStatus::Start);
        for _ in 0..2 {
            state
                .execute_call(Call::DeleteNode(message::DeleteNode { node }))
                .unwrap();
        }
        assert_eq!(state.chain.nodes.len(), 1);
        assert_eq!(state.chain.nodes[0].1.status, NodeStatus::Close);
    }

    #[test]
    fn deleting_a_permission_revokes_it_everywhere() {
        let (emulator, _) = admin_state();
        let mut state = emulator.lock();
        let logs = state
            .execute_call(Call::NewPermission(message::NewPermission {
                name: "ops".to_string(),
                resources: vec![Resource::new(registry::NODE_MANAGER, "setStake")],
            }))
            .unwrap();
        let permission = logs[0].topics[1].to_address();
        state
            .execute_call(Call::SetAuthorization(message::SetAuthorization {
                account: addr(1),
                permission,
            }))
            .unwrap();
        let role_logs = state
            .execute_call(Call::NewRole(message::NewRole {
                name: "operators".to_string(),
                permissions: vec![permission],
            }))
            .unwrap();
        let role = role_logs[0].topics[1].to_address();

        state
            .execute_call(Call::DeletePermission(message::DeletePermission {
                permission,
            }))
            .unwrap();
        assert!(state.chain.effective_permissions(&addr(1)).is_empty());
        assert!(state.chain.roles[&role].permissions.is_empty());
    }

    #[test]
    fn builtin_permissions_cannot_be_deleted() {
        let (emulator, _) = admin_state();
        let mut state = emulator.lock();
        let result = state.execute_call(Call::DeletePermission(message::DeletePermission {
            permission: registry::permission::SEND_TX,
        }));
        assert_eq!(result, Err(txerror::EXECUTION_REVERTED.to_string()));
    }

    #[test]
    fn scope_walks_the_parent_chain() {
        let (emulator, _) = admin_state();
        let mut state = emulator.lock();
        let logs = state
            .execute_call(Call::NewGroup(message::NewGroup {
                origin: registry::ROOT_GROUP,
                name: "team".to_string(),
                accounts: vec![addr(1)],
            }))
            .unwrap();
        let team = logs[0].topics[1].to_address();
        let logs = state
            .execute_call(Call::NewGroup(message::NewGroup {
                origin: team,
                name: "subteam".to_string(),
                accounts: vec![],
            }))
            .unwrap();
        let subteam = logs[0].topics[1].to_address();

        assert!(state.chain.in_scope(&registry::ROOT_GROUP, &subteam));
        assert!(state.chain.in_scope(&team, &subteam));
        assert!(!state.chain.in_scope(&subteam, &team));

        // A group with children cannot be deleted.
        let result = state.execute_call(Call::DeleteGroup(message::DeleteGroup {
            origin: registry::ROOT_GROUP,
            target: team,
        }));
        assert_eq!(result, Err(txerror::EXECUTION_REVERTED.to_string()));
        state
            .execute_call(Call::DeleteGroup(message::DeleteGroup {
                origin: registry::ROOT_GROUP,
                target: subteam,
            }))
            .unwrap();
        state
            .execute_call(Call::DeleteGroup(message::DeleteGroup {
                origin: registry::ROOT_GROUP,
                target: team,
            }))
            .unwrap();
    }

    #[test]
    fn root_group_cannot_be_deleted() {
        let (emulator, _) = admin_state();
        let mut state = emulator.lock();
        let result = state.execute_call(Call::DeleteGroup(message::DeleteGroup {
            origin: registry::ROOT_GROUP,
            target: registry::ROOT_GROUP,
        }));
        assert_eq!(result, Err(txerror::EXECUTION_REVERTED.to_string()));
    }

    #[tokio::test]
    async fn rejected_submission_leaves_the_nonce_unspent() {
        let author = ed25519::Pair::from_string("//Admin");
        let emulator = Emulator::new(author.address());
        emulator.lock().chain.quota.block_limit = BASE_TX_QUOTA;
        let transaction = Transaction::new_signed(
            &author,
            message::ApproveNode { node: addr(9) },
            TransactionExtra {
                nonce: 1,
                quota: 1 << 25,
                valid_until_block: 88,
                chain_id: EMULATOR_CHAIN_ID,
            },
        );

        match emulator.submit_raw(transaction.raw()).await {
            Err(Error::QuotaExceeded { .. }) => (),
            other => panic!("expected a quota rejection, got {:?}", other),
        }

        // The same transaction must go through once the limit allows it,
        // not bounce as a duplicate nonce.
        emulator.lock().chain.quota.block_limit = DEFAULT_BLOCK_QUOTA_LIMIT;
        emulator.submit_raw(transaction.raw()).await.unwrap();
    }

    #[test]
    fn update_admin_moves_builtin_grants() {
        let (emulator, admin) = admin_state();
        let mut state = emulator.lock();
        let new_admin = addr(0xbe);
        state
            .execute_call(Call::UpdateAdmin(message::UpdateAdmin { admin: new_admin }))
            .unwrap();
        assert_eq!(state.chain.admin, new_admin);
        assert!(state.chain.effective_permissions(&admin).is_empty());
        let call = Call::ApproveNode(message::ApproveNode { node: addr(1) });
        assert!(state.chain.is_authorized(&new_admin, &call.resource()));
    }
}
