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

//! Test admin hand-over against the emulator.

use charter_client::*;
use charter_test_utils::*;

#[tokio::test]
async fn admin_address_is_the_genesis_admin() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    assert_eq!(client.admin_address().await.unwrap(), admin.address());
}

#[tokio::test]
async fn update_admin_hands_over_the_builtin_grants() {
    let _ = env_logger::try_init();
    let (client, admin, _emulator) = emulator_client();
    let successor = Session::new(key_pair_from_string("Successor"));

    submit_ok(
        &client,
        &admin,
        message::UpdateAdmin {
            admin: successor.address(),
        },
    )
    .await;
    assert_eq!(client.admin_address().await.unwrap(), successor.address());

    // The old admin can no longer govern, the new one can.
    let included = submit(
        &client,
        &admin,
        message::ApproveNode {
            node: random_address(),
        },
    )
    .await;
    assert_eq!(included.result, Err(TransactionError::NoPermission));

    submit_ok(
        &client,
        &successor,
        message::ApproveNode {
            node: random_address(),
        },
    )
    .await;
}
