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

//! Miscellaneous helpers used throughout Charter tests.

use rand::distributions::Alphanumeric;
use rand::Rng;

use charter_client::*;

/// Quota generously covering any governance transaction while staying
/// below the default account quota limit.
pub const TEST_QUOTA: Quota = 1 << 20;

pub fn key_pair_from_string(value: impl AsRef<str>) -> ed25519::Pair {
    ed25519::Pair::from_string(format!("//{}", value.as_ref()).as_str())
}

/// The key pair holding the admin grants on an emulated chain created
/// with [emulator_client].
pub fn admin_key_pair() -> ed25519::Pair {
    key_pair_from_string("Admin")
}

/// A client against a fresh emulated chain, with a session for the
/// chain's admin and the emulator itself for state inspection.
pub fn emulator_client() -> (Client, Session, backend::Emulator) {
    let admin = admin_key_pair();
    let (client, emulator) = Client::new_emulator(admin.address());
    (client, Session::new(admin), emulator)
}

/// Submit a message and wait for it to be included in a block.
///
/// Panics if submission errors. Execution failures are returned through
/// the [TransactionIncluded::result].
pub async fn submit<Message_: Message>(
    client: &Client,
    session: &Session,
    message: Message_,
) -> TransactionIncluded<Message_> {
    client
        .sign_and_submit_message(session, message, TEST_QUOTA)
        .await
        .unwrap()
        .await
        .unwrap()
}

/// Submit a message and wait for it to be successfully executed.
///
/// Panics if submission or execution errors.
pub async fn submit_ok<Message_: Message>(
    client: &Client,
    session: &Session,
    message: Message_,
) -> Message_::Output {
    submit(client, session, message).await.result.unwrap()
}

pub fn random_name(prefix: &str) -> String {
    format!("{}-{}", prefix, random_alnum_string(8))
}

pub fn random_address() -> Address {
    H256::random().to_address()
}

pub fn random_alnum_string(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

/// Create a permission authorizing the given resources and return its
/// assigned address.
pub async fn create_permission(
    client: &Client,
    session: &Session,
    resources: Vec<Resource>,
) -> Address {
    submit_ok(
        client,
        session,
        message::NewPermission {
            name: random_name("permission"),
            resources,
        },
    )
    .await
}

/// Create a role holding the given permissions and return its assigned
/// address.
pub async fn create_role(
    client: &Client,
    session: &Session,
    permissions: Vec<Address>,
) -> Address {
    submit_ok(
        client,
        session,
        message::NewRole {
            name: random_name("role"),
            permissions,
        },
    )
    .await
}

/// Create a group under the given origin and return its assigned address.
pub async fn create_group(
    client: &Client,
    session: &Session,
    origin: Address,
    accounts: Vec<Address>,
) -> Address {
    submit_ok(
        client,
        session,
        message::NewGroup {
            origin,
            name: random_name("group"),
            accounts,
        },
    )
    .await
}
