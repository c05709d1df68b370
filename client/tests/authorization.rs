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

//! Test permission and role management against the emulator.

use charter_client::*;
use charter_test_utils::*;

#[tokio::test]
async fn fresh_account_has_no_permission() {
    let _ = env_logger::try_init();
    let (client, _admin, _emulator) = emulator_client();
    let eve = Session::new(key_pair_from_string("Eve"));

    let included = submit(
        &client,
        &eve,
        message::ApproveNode {
            node: random_address(),
        },
    )
    .await;
    assert_eq!(included.result, Err(TransactionError::NoPermission));
    assert!(client
        .account_permissions(eve.address())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn direct_grant_authorizes_the_resource() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let eve = Session::new(key_pair_from_string("Eve"));
    let resource = Resource::new(registry::NODE_MANAGER, "approveNode");

    let permission = create_permission(&client, &admin, vec![resource]).await;
    submit_ok(
        &client,
        &admin,
        message::SetAuthorization {
            account: eve.address(),
            permission,
        },
    )
    .await;

    assert!(client
        .check_permission(eve.address(), permission)
        .await
        .unwrap());
    assert!(client
        .check_resource(eve.address(), resource)
        .await
        .unwrap());

    let included = submit(
        &client,
        &eve,
        message::ApproveNode {
            node: random_address(),
        },
    )
    .await;
    assert_eq!(included.result, Ok(()));
}

#[tokio::test]
async fn duplicate_grant_does_not_grow_the_set() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let account = random_address();
    let permission = create_permission(
        &client,
        &admin,
        vec![Resource::new(registry::NODE_MANAGER, "setStake")],
    )
    .await;

    for _ in 0..2 {
        submit_ok(
            &client,
            &admin,
            message::SetAuthorization {
                account,
                permission,
            },
        )
        .await;
    }
    assert_eq!(
        client.account_permissions(account).await.unwrap(),
        vec![permission]
    );
}

#[tokio::test]
async fn role_grants_are_part_of_the_effective_set() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let account = random_address();
    let permission = create_permission(
        &client,
        &admin,
        vec![Resource::new(registry::QUOTA_MANAGER, "setBQL")],
    )
    .await;
    let role = create_role(&client, &admin, vec![permission]).await;

    submit_ok(&client, &admin, message::SetRole { account, role }).await;

    assert_eq!(client.account_roles(account).await.unwrap(), vec![role]);
    assert!(client.check_permission(account, permission).await.unwrap());
    assert!(client
        .permission_accounts(permission)
        .await
        .unwrap()
        .contains(&account));

    // Dropping the role drops the derived grant.
    submit_ok(&client, &admin, message::CancelRole { account, role }).await;
    assert!(!client.check_permission(account, permission).await.unwrap());
}

#[tokio::test]
async fn deleting_a_permission_revokes_it_from_accounts_and_roles() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let account = random_address();
    let permission = create_permission(
        &client,
        &admin,
        vec![Resource::new(registry::NODE_MANAGER, "deleteNode")],
    )
    .await;
    let role = create_role(&client, &admin, vec![permission]).await;
    submit_ok(
        &client,
        &admin,
        message::SetAuthorization {
            account,
            permission,
        },
    )
    .await;

    submit_ok(&client, &admin, message::DeletePermission { permission }).await;

    assert!(client.get_permission(permission).await.unwrap().is_none());
    assert!(client
        .account_permissions(account)
        .await
        .unwrap()
        .is_empty());
    let role_data = client.get_role(role).await.unwrap().unwrap();
    assert!(role_data.permissions.is_empty());
}

#[tokio::test]
async fn builtin_permissions_cannot_be_deleted() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let included = submit(
        &client,
        &admin,
        message::DeletePermission {
            permission: registry::permission::SEND_TX,
        },
    )
    .await;
    assert_eq!(included.result, Err(TransactionError::Reverted));
    assert!(client
        .get_permission(registry::permission::SEND_TX)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn clear_authorization_only_touches_direct_grants() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let account = random_address();
    let direct = create_permission(
        &client,
        &admin,
        vec![Resource::new(registry::NODE_MANAGER, "approveNode")],
    )
    .await;
    let via_role = create_permission(
        &client,
        &admin,
        vec![Resource::new(registry::NODE_MANAGER, "setStake")],
    )
    .await;
    let role = create_role(&client, &admin, vec![via_role]).await;
    submit_ok(
        &client,
        &admin,
        message::SetAuthorization {
            account,
            permission: direct,
        },
    )
    .await;
    submit_ok(&client, &admin, message::SetRole { account, role }).await;

    submit_ok(&client, &admin, message::ClearAuthorization { account }).await;

    let effective = client.account_permissions(account).await.unwrap();
    assert!(!effective.contains(&direct));
    assert!(effective.contains(&via_role));
}

#[tokio::test]
async fn permission_resources_can_be_updated() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let approve = Resource::new(registry::NODE_MANAGER, "approveNode");
    let stake = Resource::new(registry::NODE_MANAGER, "setStake");
    let permission = create_permission(&client, &admin, vec![approve]).await;

    // Adding an already covered resource must not duplicate it.
    submit_ok(
        &client,
        &admin,
        message::AddResources {
            permission,
            resources: vec![approve, stake],
        },
    )
    .await;
    let data = client.get_permission(permission).await.unwrap().unwrap();
    assert_eq!(data.resources, vec![approve, stake]);

    submit_ok(
        &client,
        &admin,
        message::DeleteResources {
            permission,
            resources: vec![approve],
        },
    )
    .await;
    let data = client.get_permission(permission).await.unwrap().unwrap();
    assert_eq!(data.resources, vec![stake]);
}

#[tokio::test]
async fn deleting_a_role_keeps_permissions_shared_with_another_role() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let account = random_address();
    let permission = create_permission(
        &client,
        &admin,
        vec![Resource::new(registry::NODE_MANAGER, "approveNode")],
    )
    .await;
    let doomed = create_role(&client, &admin, vec![permission]).await;
    let survivor = create_role(&client, &admin, vec![permission]).await;
    submit_ok(
        &client,
        &admin,
        message::SetRole {
            account,
            role: doomed,
        },
    )
    .await;
    submit_ok(
        &client,
        &admin,
        message::SetRole {
            account,
            role: survivor,
        },
    )
    .await;

    submit_ok(&client, &admin, message::DeleteRole { role: doomed }).await;

    assert!(client.get_role(doomed).await.unwrap().is_none());
    assert_eq!(
        client.account_roles(account).await.unwrap(),
        vec![survivor]
    );
    // The permission both roles carried stays effective through the
    // surviving one, and the permission itself is untouched.
    assert!(client.check_permission(account, permission).await.unwrap());
    assert!(client.get_permission(permission).await.unwrap().is_some());
}

#[tokio::test]
async fn role_permission_lists_can_be_updated() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let first = create_permission(
        &client,
        &admin,
        vec![Resource::new(registry::NODE_MANAGER, "approveNode")],
    )
    .await;
    let second = create_permission(
        &client,
        &admin,
        vec![Resource::new(registry::NODE_MANAGER, "setStake")],
    )
    .await;
    let role = create_role(&client, &admin, vec![first]).await;

    // Adding an already carried permission must not duplicate it.
    submit_ok(
        &client,
        &admin,
        message::AddPermissions {
            role,
            permissions: vec![first, second],
        },
    )
    .await;
    let data = client.get_role(role).await.unwrap().unwrap();
    assert_eq!(data.permissions, vec![first, second]);

    submit_ok(
        &client,
        &admin,
        message::DeletePermissions {
            role,
            permissions: vec![first],
        },
    )
    .await;
    submit_ok(
        &client,
        &admin,
        message::UpdateRoleName {
            role,
            name: "renamed".to_string(),
        },
    )
    .await;
    let data = client.get_role(role).await.unwrap().unwrap();
    assert_eq!(data.permissions, vec![second]);
    assert_eq!(data.name, "renamed");
}

#[tokio::test]
async fn clear_role_leaves_direct_grants_in_place() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let account = random_address();
    let direct = create_permission(
        &client,
        &admin,
        vec![Resource::new(registry::NODE_MANAGER, "approveNode")],
    )
    .await;
    let via_role = create_permission(
        &client,
        &admin,
        vec![Resource::new(registry::NODE_MANAGER, "setStake")],
    )
    .await;
    let role = create_role(&client, &admin, vec![via_role]).await;
    submit_ok(
        &client,
        &admin,
        message::SetAuthorization {
            account,
            permission: direct,
        },
    )
    .await;
    submit_ok(&client, &admin, message::SetRole { account, role }).await;

    submit_ok(&client, &admin, message::ClearRole { account }).await;

    assert!(client.account_roles(account).await.unwrap().is_empty());
    let effective = client.account_permissions(account).await.unwrap();
    assert_eq!(effective, vec![direct]);
}

#[tokio::test]
async fn granting_an_unknown_permission_reverts() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let included = submit(
        &client,
        &admin,
        message::SetAuthorization {
            account: random_address(),
            permission: random_address(),
        },
    )
    .await;
    assert_eq!(included.result, Err(TransactionError::Reverted));
}
