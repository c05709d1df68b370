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

//! The wire payloads understood by the governance contracts.
//!
//! [Call] is the payload of a state-changing transaction: it knows the
//! system contract it targets, the method name it invokes and therefore
//! the [Resource] an account must be authorized for. [Query] is the
//! payload of a read-only `call` request; responses are SCALE-encoded
//! plain values.

use parity_scale_codec::{Decode, Encode};

use crate::{message, registry, selector, Address, Resource, Selector};

/// Method names of the governance contracts. Selectors are derived from
/// these, so they double as the authorization vocabulary.
pub mod method {
    pub const NEW_PERMISSION: &str = "newPermission";
    pub const DELETE_PERMISSION: &str = "deletePermission";
    pub const UPDATE_PERMISSION_NAME: &str = "updatePermissionName";
    pub const ADD_RESOURCES: &str = "addResources";
    pub const DELETE_RESOURCES: &str = "deleteResources";
    pub const SET_AUTHORIZATION: &str = "setAuthorization";
    pub const CANCEL_AUTHORIZATION: &str = "cancelAuthorization";
    pub const CLEAR_AUTHORIZATION: &str = "clearAuthorization";

    pub const NEW_ROLE: &str = "newRole";
    pub const DELETE_ROLE: &str = "deleteRole";
    pub const UPDATE_ROLE_NAME: &str = "updateRoleName";
    pub const ADD_PERMISSIONS: &str = "addPermissions";
    pub const DELETE_PERMISSIONS: &str = "deletePermissions";
    pub const SET_ROLE: &str = "setRole";
    pub const CANCEL_ROLE: &str = "cancelRole";
    pub const CLEAR_ROLE: &str = "clearRole";

    pub const NEW_GROUP: &str = "newGroup";
    pub const DELETE_GROUP: &str = "deleteGroup";
    pub const UPDATE_GROUP_NAME: &str = "updateGroupName";
    pub const ADD_ACCOUNTS: &str = "addAccounts";
    pub const DELETE_ACCOUNTS: &str = "deleteAccounts";

    pub const SET_BQL: &str = "setBQL";
    pub const SET_DEFAULT_AQL: &str = "setDefaultAQL";
    pub const SET_AQL: &str = "setAQL";

    pub const APPROVE_NODE: &str = "approveNode";
    pub const DELETE_NODE: &str = "deleteNode";
    pub const SET_STAKE: &str = "setStake";

    pub const UPDATE_ADMIN: &str = "updateAdmin";
}

/// A state-changing invocation of a governance contract.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Call {
    NewPermission(message::NewPermission),
    DeletePermission(message::DeletePermission),
    UpdatePermissionName(message::UpdatePermissionName),
    AddResources(message::AddResources),
    DeleteResources(message::DeleteResources),
    SetAuthorization(message::SetAuthorization),
    CancelAuthorization(message::CancelAuthorization),
    ClearAuthorization(message::ClearAuthorization),

    NewRole(message::NewRole),
    DeleteRole(message::DeleteRole),
    UpdateRoleName(message::UpdateRoleName),
    AddPermissions(message::AddPermissions),
    DeletePermissions(message::DeletePermissions),
    SetRole(message::SetRole),
    CancelRole(message::CancelRole),
    ClearRole(message::ClearRole),

    NewGroup(message::NewGroup),
    DeleteGroup(message::DeleteGroup),
    UpdateGroupName(message::UpdateGroupName),
    AddAccounts(message::AddAccounts),
    DeleteAccounts(message::DeleteAccounts),

    SetBlockQuotaLimit(message::SetBlockQuotaLimit),
    SetDefaultAccountQuotaLimit(message::SetDefaultAccountQuotaLimit),
    SetAccountQuotaLimit(message::SetAccountQuotaLimit),

    ApproveNode(message::ApproveNode),
    DeleteNode(message::DeleteNode),
    SetStake(message::SetStake),

    UpdateAdmin(message::UpdateAdmin),
}

impl Call {
    /// The system contract this call is addressed to.
    pub fn target(&self) -> Address {
        use Call::*;
        match self {
            NewPermission(_) | DeletePermission(_) | UpdatePermissionName(_) | AddResources(_)
            | DeleteResources(_) | SetAuthorization(_) | CancelAuthorization(_)
            | ClearAuthorization(_) => registry::PERMISSION_MANAGEMENT,

            NewRole(_) | DeleteRole(_) | UpdateRoleName(_) | AddPermissions(_)
            | DeletePermissions(_) | SetRole(_) | CancelRole(_) | ClearRole(_) => {
                registry::ROLE_MANAGEMENT
            }

            NewGroup(_) | DeleteGroup(_) | UpdateGroupName(_) | AddAccounts(_)
            | DeleteAccounts(_) => registry::GROUP_MANAGEMENT,

            SetBlockQuotaLimit(_) | SetDefaultAccountQuotaLimit(_) | SetAccountQuotaLimit(_) => {
                registry::QUOTA_MANAGER
            }

            ApproveNode(_) | DeleteNode(_) | SetStake(_) => registry::NODE_MANAGER,

            UpdateAdmin(_) => registry::ADMIN,
        }
    }

    /// The method name this call invokes on its target contract.
    pub fn method(&self) -> &'static str {
        use Call::*;
        match self {
            NewPermission(_) => method::NEW_PERMISSION,
            DeletePermission(_) => method::DELETE_PERMISSION,
            UpdatePermissionName(_) => method::UPDATE_PERMISSION_NAME,
            AddResources(_) => method::ADD_RESOURCES,
            DeleteResources(_) => method::DELETE_RESOURCES,
            SetAuthorization(_) => method::SET_AUTHORIZATION,
            CancelAuthorization(_) => method::CANCEL_AUTHORIZATION,
            ClearAuthorization(_) => method::CLEAR_AUTHORIZATION,

            NewRole(_) => method::NEW_ROLE,
            DeleteRole(_) => method::DELETE_ROLE,
            UpdateRoleName(_) => method::UPDATE_ROLE_NAME,
            AddPermissions(_) => method::ADD_PERMISSIONS,
            DeletePermissions(_) => method::DELETE_PERMISSIONS,
            SetRole(_) => method::SET_ROLE,
            CancelRole(_) => method::CANCEL_ROLE,
            ClearRole(_) => method::CLEAR_ROLE,

            NewGroup(_) => method::NEW_GROUP,
            DeleteGroup(_) => method::DELETE_GROUP,
            UpdateGroupName(_) => method::UPDATE_GROUP_NAME,
            AddAccounts(_) => method::ADD_ACCOUNTS,
            DeleteAccounts(_) => method::DELETE_ACCOUNTS,

            SetBlockQuotaLimit(_) => method::SET_BQL,
            SetDefaultAccountQuotaLimit(_) => method::SET_DEFAULT_AQL,
            SetAccountQuotaLimit(_) => method::SET_AQL,

            ApproveNode(_) => method::APPROVE_NODE,
            DeleteNode(_) => method::DELETE_NODE,
            SetStake(_) => method::SET_STAKE,

            UpdateAdmin(_) => method::UPDATE_ADMIN,
        }
    }

    pub fn selector(&self) -> Selector {
        selector(self.method())
    }

    /// The resource an account must be authorized for to run this call.
    pub fn resource(&self) -> Resource {
        Resource {
            contract: self.target(),
            selector: self.selector(),
        }
    }
}

/// A read-only lookup against the governance contracts.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Query {
    /// Effective permissions of an account: direct grants united with the
    /// permissions of all of its roles. Response: `Vec<Address>`.
    AccountPermissions(Address),
    /// Accounts whose effective set includes the permission.
    /// Response: `Vec<Address>`.
    PermissionAccounts(Address),
    /// Whether the account's effective set includes the permission.
    /// Response: `bool`.
    CheckPermission(Address, Address),
    /// Whether the permission authorizes the resource. Response: `bool`.
    CheckResource(Address, Resource),
    /// All accounts with any permission. Response: `Vec<Address>`.
    AllAccounts,
    /// Roles granted to an account. Response: `Vec<Address>`.
    AccountRoles(Address),
    /// Name and resources of a permission.
    /// Response: `Option<state::PermissionData>`.
    PermissionInfo(Address),
    /// Name and permissions of a role. Response: `Option<state::RoleData>`.
    RoleInfo(Address),
    /// Parent, name, members and children of a group.
    /// Response: `Option<state::GroupData>`.
    GroupInfo(Address),
    /// Whether `target` is `origin` or one of its descendants.
    /// Response: `bool`.
    CheckScope(Address, Address),
    /// The block quota limit. Response: `Quota`.
    BlockQuotaLimit,
    /// The default account quota limit. Response: `Quota`.
    DefaultAccountQuotaLimit,
    /// The limit that applies to the account. Response: `Quota`.
    AccountQuotaLimit(Address),
    /// Accounts with an explicit quota entry. Response: `Vec<Address>`.
    QuotaAccounts,
    /// Limits of the explicit entries, index-aligned with
    /// [Query::QuotaAccounts]. Response: `Vec<Quota>`.
    QuotaLimits,
    /// Started consensus nodes. Response: `Vec<Address>`.
    ListNodes,
    /// Status of a node. Response: `Option<state::NodeStatus>`.
    NodeStatus(Address),
    /// Stake weight of a node. Response: `Option<u64>`.
    NodeStake(Address),
    /// The current admin account. Response: `Address`.
    AdminAddress,
}

impl Query {
    /// The system contract answering this query.
    pub fn target(&self) -> Address {
        use Query::*;
        match self {
            AccountPermissions(_) | PermissionAccounts(_) | CheckPermission(_, _)
            | CheckResource(_, _) | AllAccounts | PermissionInfo(_) => registry::AUTHORIZATION,
            AccountRoles(_) | RoleInfo(_) => registry::ROLE_AUTHORIZATION,
            GroupInfo(_) | CheckScope(_, _) => registry::GROUP_MANAGEMENT,
            BlockQuotaLimit | DefaultAccountQuotaLimit | AccountQuotaLimit(_) | QuotaAccounts
            | QuotaLimits => registry::QUOTA_MANAGER,
            ListNodes | NodeStatus(_) | NodeStake(_) => registry::NODE_MANAGER,
            AdminAddress => registry::ADMIN,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn call_resource_pins_target_and_method() {
        let call = Call::ApproveNode(message::ApproveNode {
            node: Address::zero(),
        });
        let resource = call.resource();
        assert_eq!(resource.contract, registry::NODE_MANAGER);
        assert_eq!(resource.selector, selector(method::APPROVE_NODE));
    }

    #[test]
    fn payload_round_trip() {
        let call = Call::NewPermission(message::NewPermission {
            name: "ops".to_string(),
            resources: vec![Resource::new(registry::NODE_MANAGER, method::SET_STAKE)],
        });
        let encoded = call.encode();
        let decoded = Call::decode(&mut &encoded[..]).unwrap();
        assert_eq!(decoded, call);
    }
}
