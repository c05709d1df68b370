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

//! Getting started with the client by creating a permission and granting
//! it to an account.
//!
//! The example runs against the in-process emulator so it needs no node.
//! To target a real node replace [Client::new_emulator] with
//! [Client::create].

use charter_client::*;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    // The admin key pair holds all governance permissions at genesis.
    let admin = ed25519::Pair::from_string("//Admin");
    println!("Authoring as //Admin ({})", admin.address());

    let (client, _emulator) = Client::new_emulator(admin.address());
    let session = Session::new(admin);

    // The account that will be allowed to manage node stakes.
    let operator = ed25519::Pair::from_string("//Operator").address();
    println!("Operator account: {}", operator);

    // Create a permission covering the setStake method. Submission
    // resolves once the transaction is queued; the returned future
    // resolves once it is executed and its receipt retrieved.
    print!("Creating permission... ");
    let created = client
        .sign_and_submit_message(
            &session,
            message::NewPermission {
                name: "stake-management".to_string(),
                resources: vec![Resource::new(registry::NODE_MANAGER, "setStake")],
            },
            1 << 20,
        )
        .await?
        .await?;
    let permission = created.result.expect("creating the permission failed");
    println!("done: {}", permission);

    print!("Granting it to the operator... ");
    client
        .sign_and_submit_message(
            &session,
            message::SetAuthorization {
                account: operator,
                permission,
            },
            1 << 20,
        )
        .await?
        .await?
        .result
        .expect("granting the permission failed");
    println!("done");

    let authorized = client
        .check_resource(operator, Resource::new(registry::NODE_MANAGER, "setStake"))
        .await?;
    println!("Operator may set stakes: {}", authorized);
    Ok(())
}
