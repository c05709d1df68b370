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

//! Parameters for all messages accepted by the governance contracts.
//!
//! Every mutation is idempotent under duplicate application: re-applying
//! a grant or add that already holds succeeds without growing any backing
//! collection.

use parity_scale_codec::{Decode, Encode};

use crate::{Address, Quota, Resource};

/// Create a permission. The new permission's address is returned through
/// the transaction receipt.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct NewPermission {
    pub name: String,
    pub resources: Vec<Resource>,
}

/// Delete a permission. Fails for built-in permissions. Accounts and roles
/// that hold the permission lose it.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct DeletePermission {
    pub permission: Address,
}

/// Rename a permission. Fails for built-in permissions.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct UpdatePermissionName {
    pub permission: Address,
    pub name: String,
}

/// Add resources to a permission. Fails for built-in permissions.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct AddResources {
    pub permission: Address,
    pub resources: Vec<Resource>,
}

/// Remove resources from a permission. Fails for built-in permissions.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct DeleteResources {
    pub permission: Address,
    pub resources: Vec<Resource>,
}

/// Grant a permission directly to an account.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct SetAuthorization {
    pub account: Address,
    pub permission: Address,
}

/// Revoke a directly granted permission from an account.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct CancelAuthorization {
    pub account: Address,
    pub permission: Address,
}

/// Revoke all directly granted permissions of an account.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct ClearAuthorization {
    pub account: Address,
}

/// Create a role. All referenced permissions must exist. The new role's
/// address is returned through the transaction receipt.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct NewRole {
    pub name: String,
    pub permissions: Vec<Address>,
}

/// Delete a role. Accounts that hold the role lose it; permissions they
/// hold through other roles or direct grants are unaffected.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct DeleteRole {
    pub role: Address,
}

/// Rename a role.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct UpdateRoleName {
    pub role: Address,
    pub name: String,
}

/// Add permissions to a role. All referenced permissions must exist.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct AddPermissions {
    pub role: Address,
    pub permissions: Vec<Address>,
}

/// Remove permissions from a role.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct DeletePermissions {
    pub role: Address,
    pub permissions: Vec<Address>,
}

/// Grant a role to an account.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct SetRole {
    pub account: Address,
    pub role: Address,
}

/// Revoke a role from an account.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct CancelRole {
    pub account: Address,
    pub role: Address,
}

/// Revoke all roles of an account.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct ClearRole {
    pub account: Address,
}

/// Create a group under `origin`. The new group's address is returned
/// through the transaction receipt.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct NewGroup {
    pub origin: Address,
    pub name: String,
    pub accounts: Vec<Address>,
}

/// Delete a group. Fails for the built-in root group, for groups outside
/// the scope of `origin` and for groups that still have children.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct DeleteGroup {
    pub origin: Address,
    pub target: Address,
}

/// Rename a group within the scope of `origin`.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct UpdateGroupName {
    pub origin: Address,
    pub target: Address,
    pub name: String,
}

/// Add member accounts to a group within the scope of `origin`.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct AddAccounts {
    pub origin: Address,
    pub target: Address,
    pub accounts: Vec<Address>,
}

/// Remove member accounts from a group within the scope of `origin`.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct DeleteAccounts {
    pub origin: Address,
    pub target: Address,
    pub accounts: Vec<Address>,
}

/// Set the block quota limit (BQL).
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct SetBlockQuotaLimit {
    pub limit: Quota,
}

/// Set the default account quota limit (AQL) applied to accounts without
/// an explicit entry.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct SetDefaultAccountQuotaLimit {
    pub limit: Quota,
}

/// Set the explicit account quota limit of one account. Setting an account
/// that already has an entry updates it in place.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct SetAccountQuotaLimit {
    pub account: Address,
    pub limit: Quota,
}

/// Start a consensus node, registering it first if unknown. Approving a
/// node that is already started is a no-op.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct ApproveNode {
    pub node: Address,
}

/// Stop a consensus node. Deleting a node that is already closed is a
/// no-op.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct DeleteNode {
    pub node: Address,
}

/// Set the stake weight of a registered node.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct SetStake {
    pub node: Address,
    pub stake: u64,
}

/// Hand the chain's admin account over, re-pointing the built-in
/// management permissions at the new admin.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct UpdateAdmin {
    pub admin: Address,
}
