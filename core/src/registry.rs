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

//! Well-known addresses of the built-in system contracts and permissions.
//!
//! The chain reserves the address space `0xffff…ff02____`: system
//! contracts occupy the `0x02 00__`/`0x02 000_` tail, built-in
//! permissions the `0x02 1___` tail. Built-ins exist from genesis and
//! cannot be deleted.

use crate::call::method;
use crate::state::PermissionData;
use crate::{Address, Resource};

const fn reserved(tag: u16) -> Address {
    let mut bytes = [0xffu8; 20];
    bytes[17] = 0x02;
    bytes[18] = (tag >> 8) as u8;
    bytes[19] = (tag & 0xff) as u8;
    Address(bytes)
}

// System contracts.
pub const NODE_MANAGER: Address = reserved(0x0001);
pub const CHAIN_MANAGER: Address = reserved(0x0002);
pub const QUOTA_MANAGER: Address = reserved(0x0003);
pub const PERMISSION_MANAGEMENT: Address = reserved(0x0004);
pub const AUTHORIZATION: Address = reserved(0x0006);
pub const ROLE_MANAGEMENT: Address = reserved(0x0007);
pub const ROLE_AUTHORIZATION: Address = reserved(0x0008);
pub const ROOT_GROUP: Address = reserved(0x0009);
pub const GROUP_MANAGEMENT: Address = reserved(0x000a);
pub const ADMIN: Address = reserved(0x000c);

/// Built-in permission addresses.
///
/// `SEND_TX` and `CREATE_CONTRACT` gate plain transactions; the remaining
/// ones each cover one family of governance methods and are granted to the
/// admin account at genesis.
pub mod permission {
    use super::{reserved, Address};

    pub const SEND_TX: Address = reserved(0x1000);
    pub const CREATE_CONTRACT: Address = reserved(0x1001);

    pub const NEW_PERMISSION: Address = reserved(0x1010);
    pub const DELETE_PERMISSION: Address = reserved(0x1011);
    pub const UPDATE_PERMISSION: Address = reserved(0x1012);
    pub const SET_AUTHORIZATION: Address = reserved(0x1013);
    pub const CANCEL_AUTHORIZATION: Address = reserved(0x1014);
    pub const NEW_ROLE: Address = reserved(0x1015);
    pub const DELETE_ROLE: Address = reserved(0x1016);
    pub const UPDATE_ROLE: Address = reserved(0x1017);
    pub const SET_ROLE: Address = reserved(0x1018);
    pub const CANCEL_ROLE: Address = reserved(0x1019);
    pub const NEW_GROUP: Address = reserved(0x101a);
    pub const DELETE_GROUP: Address = reserved(0x101b);
    pub const UPDATE_GROUP: Address = reserved(0x101c);
    pub const NODE_MANAGEMENT: Address = reserved(0x101d);
    pub const QUOTA_MANAGEMENT: Address = reserved(0x101e);
    pub const ADMIN_MANAGEMENT: Address = reserved(0x101f);
}

/// Whether the address belongs to a built-in permission.
pub fn is_builtin_permission(address: &Address) -> bool {
    let bytes = address.as_bytes();
    bytes[..17] == [0xffu8; 17][..] && bytes[17] == 0x02 && bytes[18] & 0xf0 == 0x10
}

/// Whether the address is reserved for a built-in entity of any kind.
pub fn is_builtin(address: &Address) -> bool {
    let bytes = address.as_bytes();
    bytes[..17] == [0xffu8; 17][..] && bytes[17] == 0x02
}

/// The built-in permission registry present in the genesis state.
pub fn builtin_permissions() -> Vec<(Address, PermissionData)> {
    let perm = |name: &str, resources: Vec<Resource>| PermissionData::new(name.to_string(), resources);
    vec![
        // Plain transactions target arbitrary contracts, represented by
        // the zero resource.
        (
            permission::SEND_TX,
            perm("sendTx", vec![Resource::new(Address::zero(), "sendTx")]),
        ),
        (
            permission::CREATE_CONTRACT,
            perm(
                "createContract",
                vec![Resource::new(Address::zero(), "createContract")],
            ),
        ),
        (
            permission::NEW_PERMISSION,
            perm(
                "newPermission",
                vec![Resource::new(PERMISSION_MANAGEMENT, method::NEW_PERMISSION)],
            ),
        ),
        (
            permission::DELETE_PERMISSION,
            perm(
                "deletePermission",
                vec![Resource::new(
                    PERMISSION_MANAGEMENT,
                    method::DELETE_PERMISSION,
                )],
            ),
        ),
        (
            permission::UPDATE_PERMISSION,
            perm(
                "updatePermission",
                vec![
                    Resource::new(PERMISSION_MANAGEMENT, method::UPDATE_PERMISSION_NAME),
                    Resource::new(PERMISSION_MANAGEMENT, method::ADD_RESOURCES),
                    Resource::new(PERMISSION_MANAGEMENT, method::DELETE_RESOURCES),
                ],
            ),
        ),
        (
            permission::SET_AUTHORIZATION,
            perm(
                "setAuth",
                vec![Resource::new(
                    PERMISSION_MANAGEMENT,
                    method::SET_AUTHORIZATION,
                )],
            ),
        ),
        (
            permission::CANCEL_AUTHORIZATION,
            perm(
                "cancelAuth",
                vec![
                    Resource::new(PERMISSION_MANAGEMENT, method::CANCEL_AUTHORIZATION),
                    Resource::new(PERMISSION_MANAGEMENT, method::CLEAR_AUTHORIZATION),
                ],
            ),
        ),
        (
            permission::NEW_ROLE,
            perm(
                "newRole",
                vec![Resource::new(ROLE_MANAGEMENT, method::NEW_ROLE)],
            ),
        ),
        (
            permission::DELETE_ROLE,
            perm(
                "deleteRole",
                vec![Resource::new(ROLE_MANAGEMENT, method::DELETE_ROLE)],
            ),
        ),
        (
            permission::UPDATE_ROLE,
            perm(
                "updateRole",
                vec![
                    Resource::new(ROLE_MANAGEMENT, method::UPDATE_ROLE_NAME),
                    Resource::new(ROLE_MANAGEMENT, method::ADD_PERMISSIONS),
                    Resource::new(ROLE_MANAGEMENT, method::DELETE_PERMISSIONS),
                ],
            ),
        ),
        (
            permission::SET_ROLE,
            perm("setRole", vec![Resource::new(ROLE_MANAGEMENT, method::SET_ROLE)]),
        ),
        (
            permission::CANCEL_ROLE,
            perm(
                "cancelRole",
                vec![
                    Resource::new(ROLE_MANAGEMENT, method::CANCEL_ROLE),
                    Resource::new(ROLE_MANAGEMENT, method::CLEAR_ROLE),
                ],
            ),
        ),
        (
            permission::NEW_GROUP,
            perm(
                "newGroup",
                vec![Resource::new(GROUP_MANAGEMENT, method::NEW_GROUP)],
            ),
        ),
        (
            permission::DELETE_GROUP,
            perm(
                "deleteGroup",
                vec![Resource::new(GROUP_MANAGEMENT, method::DELETE_GROUP)],
            ),
        ),
        (
            permission::UPDATE_GROUP,
            perm(
                "updateGroup",
                vec![
                    Resource::new(GROUP_MANAGEMENT, method::UPDATE_GROUP_NAME),
                    Resource::new(GROUP_MANAGEMENT, method::ADD_ACCOUNTS),
                    Resource::new(GROUP_MANAGEMENT, method::DELETE_ACCOUNTS),
                ],
            ),
        ),
        (
            permission::NODE_MANAGEMENT,
            perm(
                "nodeManagement",
                vec![
                    Resource::new(NODE_MANAGER, method::APPROVE_NODE),
                    Resource::new(NODE_MANAGER, method::DELETE_NODE),
                    Resource::new(NODE_MANAGER, method::SET_STAKE),
                ],
            ),
        ),
        (
            permission::QUOTA_MANAGEMENT,
            perm(
                "quotaManagement",
                vec![
                    Resource::new(QUOTA_MANAGER, method::SET_BQL),
                    Resource::new(QUOTA_MANAGER, method::SET_DEFAULT_AQL),
                    Resource::new(QUOTA_MANAGER, method::SET_AQL),
                ],
            ),
        ),
        (
            permission::ADMIN_MANAGEMENT,
            perm(
                "adminManagement",
                vec![Resource::new(ADMIN, method::UPDATE_ADMIN)],
            ),
        ),
    ]
}

/// The built-in permissions granted directly to the admin account at
/// genesis: everything except the plain-transaction gates.
pub fn admin_permissions() -> Vec<Address> {
    builtin_permissions()
        .into_iter()
        .map(|(address, _)| address)
        .filter(|address| {
            *address != permission::SEND_TX && *address != permission::CREATE_CONTRACT
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reserved_addresses_render_as_expected() {
        assert_eq!(
            NODE_MANAGER.to_string(),
            "0xffffffffffffffffffffffffffffffffff020001"
        );
        assert_eq!(
            permission::SEND_TX.to_string(),
            "0xffffffffffffffffffffffffffffffffff021000"
        );
    }

    #[test]
    fn builtin_classification() {
        assert!(is_builtin_permission(&permission::SEND_TX));
        assert!(is_builtin_permission(&permission::ADMIN_MANAGEMENT));
        assert!(!is_builtin_permission(&NODE_MANAGER));
        assert!(is_builtin(&NODE_MANAGER));
        assert!(is_builtin(&ROOT_GROUP));
        assert!(!is_builtin(&Address::zero()));
    }

    #[test]
    fn builtin_registry_has_unique_addresses() {
        let builtins = builtin_permissions();
        for (i, (a, _)) in builtins.iter().enumerate() {
            for (b, _) in &builtins[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
