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

//! Test consensus node management against the emulator.

use charter_client::*;
use charter_core::state::NodeStatus;
use charter_test_utils::*;

#[tokio::test]
async fn approving_an_unknown_node_registers_and_starts_it() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let node = random_address();

    assert_eq!(
        client.node_status(node).await.unwrap(),
        NodeStatus::Close
    );
    submit_ok(&client, &admin, message::ApproveNode { node }).await;

    assert_eq!(client.node_status(node).await.unwrap(), NodeStatus::Start);
    assert_eq!(client.list_nodes().await.unwrap(), vec![node]);
}

#[tokio::test]
async fn node_transitions_are_idempotent() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let node = random_address();

    for _ in 0..2 {
        submit_ok(&client, &admin, message::ApproveNode { node }).await;
    }
    assert_eq!(client.list_nodes().await.unwrap(), vec![node]);

    for _ in 0..2 {
        submit_ok(&client, &admin, message::DeleteNode { node }).await;
    }
    assert_eq!(client.node_status(node).await.unwrap(), NodeStatus::Close);
    assert!(client.list_nodes().await.unwrap().is_empty());

    // A closed node can be started again.
    submit_ok(&client, &admin, message::ApproveNode { node }).await;
    assert_eq!(client.node_status(node).await.unwrap(), NodeStatus::Start);
}

#[tokio::test]
async fn deleting_an_unknown_node_is_a_no_op() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let node = random_address();

    submit_ok(&client, &admin, message::DeleteNode { node }).await;
    assert_eq!(client.node_status(node).await.unwrap(), NodeStatus::Close);
}

#[tokio::test]
async fn stake_can_be_set_on_registered_nodes() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let node = random_address();
    submit_ok(&client, &admin, message::ApproveNode { node }).await;

    assert_eq!(client.node_stake(node).await.unwrap(), 0);
    submit_ok(&client, &admin, message::SetStake { node, stake: 42 }).await;
    assert_eq!(client.node_stake(node).await.unwrap(), 42);

    // Closing the node keeps its stake.
    submit_ok(&client, &admin, message::DeleteNode { node }).await;
    assert_eq!(client.node_stake(node).await.unwrap(), 42);
}

#[tokio::test]
async fn setting_stake_on_an_unknown_node_reverts() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let included = submit(
        &client,
        &admin,
        message::SetStake {
            node: random_address(),
            stake: 5,
        },
    )
    .await;
    assert_eq!(included.result, Err(TransactionError::Reverted));
}
