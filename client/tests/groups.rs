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

//! Test group management and scope checks against the emulator.

use charter_client::*;
use charter_test_utils::*;

#[tokio::test]
async fn root_group_exists_at_genesis() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let root = client
        .get_group(registry::ROOT_GROUP)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(root.parent, None);
    assert_eq!(root.accounts, vec![admin.address()]);
}

#[tokio::test]
async fn created_group_hangs_under_its_origin() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let member = random_address();
    let group = create_group(&client, &admin, registry::ROOT_GROUP, vec![member]).await;

    let data = client.get_group(group).await.unwrap().unwrap();
    assert_eq!(data.parent, Some(registry::ROOT_GROUP));
    assert_eq!(data.accounts, vec![member]);

    let root = client
        .get_group(registry::ROOT_GROUP)
        .await
        .unwrap()
        .unwrap();
    assert!(root.children.contains(&group));
}

#[tokio::test]
async fn scope_covers_descendants_only() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let team = create_group(&client, &admin, registry::ROOT_GROUP, vec![]).await;
    let subteam = create_group(&client, &admin, team, vec![]).await;

    assert!(client.check_scope(registry::ROOT_GROUP, subteam).await.unwrap());
    assert!(client.check_scope(team, subteam).await.unwrap());
    assert!(client.check_scope(team, team).await.unwrap());
    assert!(!client.check_scope(subteam, team).await.unwrap());
}

#[tokio::test]
async fn membership_changes_are_idempotent() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let group = create_group(&client, &admin, registry::ROOT_GROUP, vec![]).await;
    let account = random_address();

    for _ in 0..2 {
        submit_ok(
            &client,
            &admin,
            message::AddAccounts {
                origin: registry::ROOT_GROUP,
                target: group,
                accounts: vec![account],
            },
        )
        .await;
    }
    let data = client.get_group(group).await.unwrap().unwrap();
    assert_eq!(data.accounts, vec![account]);

    submit_ok(
        &client,
        &admin,
        message::DeleteAccounts {
            origin: registry::ROOT_GROUP,
            target: group,
            accounts: vec![account],
        },
    )
    .await;
    let data = client.get_group(group).await.unwrap().unwrap();
    assert!(data.accounts.is_empty());
}

#[tokio::test]
async fn groups_can_be_renamed() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let group = create_group(&client, &admin, registry::ROOT_GROUP, vec![]).await;

    submit_ok(
        &client,
        &admin,
        message::UpdateGroupName {
            origin: registry::ROOT_GROUP,
            target: group,
            name: "ops".to_string(),
        },
    )
    .await;
    let data = client.get_group(group).await.unwrap().unwrap();
    assert_eq!(data.name, "ops");
}

#[tokio::test]
async fn group_with_children_cannot_be_deleted() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let team = create_group(&client, &admin, registry::ROOT_GROUP, vec![]).await;
    let subteam = create_group(&client, &admin, team, vec![]).await;

    let included = submit(
        &client,
        &admin,
        message::DeleteGroup {
            origin: registry::ROOT_GROUP,
            target: team,
        },
    )
    .await;
    assert_eq!(included.result, Err(TransactionError::Reverted));

    // Deleting leaf first works, and detaches it from its parent.
    submit_ok(
        &client,
        &admin,
        message::DeleteGroup {
            origin: registry::ROOT_GROUP,
            target: subteam,
        },
    )
    .await;
    assert!(client.get_group(subteam).await.unwrap().is_none());
    let team_data = client.get_group(team).await.unwrap().unwrap();
    assert!(team_data.children.is_empty());

    submit_ok(
        &client,
        &admin,
        message::DeleteGroup {
            origin: registry::ROOT_GROUP,
            target: team,
        },
    )
    .await;
    assert!(client.get_group(team).await.unwrap().is_none());
}

#[tokio::test]
async fn root_group_cannot_be_deleted() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let included = submit(
        &client,
        &admin,
        message::DeleteGroup {
            origin: registry::ROOT_GROUP,
            target: registry::ROOT_GROUP,
        },
    )
    .await;
    assert_eq!(included.result, Err(TransactionError::Reverted));
    assert!(client
        .get_group(registry::ROOT_GROUP)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn operations_outside_the_origin_scope_revert() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let team_a = create_group(&client, &admin, registry::ROOT_GROUP, vec![]).await;
    let team_b = create_group(&client, &admin, registry::ROOT_GROUP, vec![]).await;

    let included = submit(
        &client,
        &admin,
        message::AddAccounts {
            origin: team_a,
            target: team_b,
            accounts: vec![random_address()],
        },
    )
    .await;
    assert_eq!(included.result, Err(TransactionError::Reverted));
}
