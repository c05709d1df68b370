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

//! Type definitions for all entities stored by the governance contracts.
//!
//! Every collection-mutating method here follows the same discipline:
//! adding an element that is already present leaves the collection
//! unchanged, so duplicate writes never grow the backing storage.

use parity_scale_codec::{Decode, Encode};

use crate::{Address, Quota, Resource};

/// A named, ordered set of [Resource]s an account may be authorized for.
///
/// # Storage
///
/// Permissions are stored as a map keyed by their address. The address is
/// assigned at creation and immutable.
///
/// # Relevant messages
///
/// * [crate::message::NewPermission]
/// * [crate::message::UpdatePermissionName]
/// * [crate::message::AddResources]
/// * [crate::message::DeleteResources]
/// * [crate::message::DeletePermission]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct PermissionData {
    pub name: String,
    pub resources: Vec<Resource>,
}

impl PermissionData {
    /// Creates a permission, dropping duplicate resources.
    pub fn new(name: String, resources: Vec<Resource>) -> Self {
        let mut permission = PermissionData {
            name,
            resources: Vec::new(),
        };
        for resource in resources {
            permission.add_resource(resource);
        }
        permission
    }

    /// Add the given resource. Leaves the permission unchanged if the
    /// resource is already included.
    pub fn add_resource(&mut self, resource: Resource) {
        if !self.resources.contains(&resource) {
            self.resources.push(resource);
        }
    }

    pub fn remove_resource(&mut self, resource: &Resource) {
        self.resources.retain(|r| r != resource);
    }

    pub fn contains_resource(&self, resource: &Resource) -> bool {
        self.resources.contains(resource)
    }
}

/// A named set of permissions that can be granted to accounts as a unit.
///
/// Granting a role to an account grants all of the role's permissions
/// transitively; the account's effective permission set is resolved from
/// its direct grants and its roles on every query.
///
/// # Relevant messages
///
/// * [crate::message::NewRole]
/// * [crate::message::UpdateRoleName]
/// * [crate::message::AddPermissions]
/// * [crate::message::DeletePermissions]
/// * [crate::message::DeleteRole]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct RoleData {
    pub name: String,
    pub permissions: Vec<Address>,
}

impl RoleData {
    /// Creates a role, dropping duplicate permissions.
    pub fn new(name: String, permissions: Vec<Address>) -> Self {
        let mut role = RoleData {
            name,
            permissions: Vec::new(),
        };
        for permission in permissions {
            role.add_permission(permission);
        }
        role
    }

    /// Add the given permission. Leaves the role unchanged if the
    /// permission is already included.
    pub fn add_permission(&mut self, permission: Address) {
        if !self.permissions.contains(&permission) {
            self.permissions.push(permission);
        }
    }

    pub fn remove_permission(&mut self, permission: &Address) {
        self.permissions.retain(|p| p != permission);
    }
}

/// A node in the account-scoping tree.
///
/// The root group is a built-in with `parent == None` and cannot be
/// deleted. Scope checks walk the parent chain: a target group is in the
/// scope of an origin group if it is the origin itself or one of its
/// descendants.
///
/// # Relevant messages
///
/// * [crate::message::NewGroup]
/// * [crate::message::UpdateGroupName]
/// * [crate::message::AddAccounts]
/// * [crate::message::DeleteAccounts]
/// * [crate::message::DeleteGroup]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct GroupData {
    pub parent: Option<Address>,
    pub name: String,
    pub accounts: Vec<Address>,
    pub children: Vec<Address>,
}

impl GroupData {
    pub fn new(parent: Option<Address>, name: String, accounts: Vec<Address>) -> Self {
        let mut group = GroupData {
            parent,
            name,
            accounts: Vec::new(),
            children: Vec::new(),
        };
        for account in accounts {
            group.add_account(account);
        }
        group
    }

    /// Add the given account. Leaves the group unchanged if the account is
    /// already a member.
    pub fn add_account(&mut self, account: Address) {
        if !self.accounts.contains(&account) {
            self.accounts.push(account);
        }
    }

    pub fn remove_account(&mut self, account: &Address) {
        self.accounts.retain(|a| a != account);
    }

    pub fn add_child(&mut self, child: Address) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }

    pub fn remove_child(&mut self, child: &Address) {
        self.children.retain(|c| c != child);
    }
}

/// Default block quota limit (BQL) applied at genesis.
pub const DEFAULT_BLOCK_QUOTA_LIMIT: Quota = 1 << 30;

/// Default account quota limit (AQL) applied to accounts without an
/// explicit entry.
pub const DEFAULT_ACCOUNT_QUOTA_LIMIT: Quota = 1 << 28;

/// Quota limits: one chain-wide per-block limit and per-account limits.
///
/// # Invariants
///
/// * `accounts` and `limits` are always the same length and index-aligned.
/// * `accounts` holds no duplicates; setting a limit for an account that
///   already has an entry updates the entry in place.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct QuotaState {
    /// Upper bound on the quota consumed by all transactions in one block.
    pub block_limit: Quota,
    /// Limit applied to accounts with no entry in `accounts`.
    pub default_account_limit: Quota,
    /// Accounts with an explicit limit.
    pub accounts: Vec<Address>,
    /// Limits of `accounts`, index-aligned.
    pub limits: Vec<Quota>,
}

impl Default for QuotaState {
    fn default() -> Self {
        QuotaState {
            block_limit: DEFAULT_BLOCK_QUOTA_LIMIT,
            default_account_limit: DEFAULT_ACCOUNT_QUOTA_LIMIT,
            accounts: Vec::new(),
            limits: Vec::new(),
        }
    }
}

impl QuotaState {
    /// Set the explicit limit of an account, updating in place if the
    /// account already has an entry.
    pub fn set_account_limit(&mut self, account: Address, limit: Quota) {
        match self.accounts.iter().position(|a| *a == account) {
            Some(index) => self.limits[index] = limit,
            None => {
                self.accounts.push(account);
                self.limits.push(limit);
            }
        }
    }

    /// The limit that applies to an account: its explicit entry, or the
    /// default account limit.
    pub fn account_limit(&self, account: &Address) -> Quota {
        self.accounts
            .iter()
            .position(|a| a == account)
            .map(|index| self.limits[index])
            .unwrap_or(self.default_account_limit)
    }
}

/// Status of a consensus node.
///
/// Transitions are `Close --approve--> Start --delete--> Close`; applying
/// a transition to a node already in the target status is a no-op.
#[derive(Decode, Encode, Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeStatus {
    Close,
    Start,
}

impl NodeStatus {
    pub fn as_u8(self) -> u8 {
        match self {
            NodeStatus::Close => 0,
            NodeStatus::Start => 1,
        }
    }
}

/// A consensus participant with its status and stake weight.
///
/// # Relevant messages
///
/// * [crate::message::ApproveNode]
/// * [crate::message::DeleteNode]
/// * [crate::message::SetStake]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct NodeData {
    pub status: NodeStatus,
    pub stake: u64,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::registry;
    use crate::selector;

    fn addr(tail: u8) -> Address {
        let mut data = [0u8; 20];
        data[19] = tail;
        Address(data)
    }

    #[test]
    fn duplicate_resource_does_not_grow() {
        let resource = Resource {
            contract: registry::NODE_MANAGER,
            selector: selector("approveNode"),
        };
        let mut permission = PermissionData::new("nodes".to_string(), vec![resource, resource]);
        assert_eq!(permission.resources.len(), 1);
        permission.add_resource(resource);
        assert_eq!(permission.resources.len(), 1);
    }

    #[test]
    fn quota_entries_stay_aligned() {
        let mut quota = QuotaState::default();
        quota.set_account_limit(addr(1), 100);
        quota.set_account_limit(addr(2), 200);
        // Updating an existing account must not append.
        quota.set_account_limit(addr(1), 300);
        assert_eq!(quota.accounts.len(), quota.limits.len());
        assert_eq!(quota.accounts.len(), 2);
        assert_eq!(quota.account_limit(&addr(1)), 300);
        assert_eq!(quota.account_limit(&addr(2)), 200);
        assert_eq!(quota.account_limit(&addr(3)), DEFAULT_ACCOUNT_QUOTA_LIMIT);
    }

    #[test]
    fn group_membership_is_a_set() {
        let mut group = GroupData::new(None, "root".to_string(), vec![addr(1), addr(1)]);
        assert_eq!(group.accounts.len(), 1);
        group.add_account(addr(2));
        group.add_account(addr(2));
        assert_eq!(group.accounts.len(), 2);
        group.remove_account(&addr(1));
        assert_eq!(group.accounts, vec![addr(2)]);
    }
}
