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

//! Define the command line parser and interface.

#![allow(clippy::large_enum_variant)]

use lazy_static::lazy_static;
use structopt::StructOpt;
use thiserror::Error as ThisError;

use charter_client::*;

pub mod key_pair_storage;

mod command;
use command::{group, key_pair, node, other, permission, quota, role};

/// The type that captures the command line.
#[derive(StructOpt, Clone)]
#[structopt(name = "charter", max_term_width = 80)]
pub struct CommandLine {
    #[structopt(subcommand)]
    pub command: Command,

    #[structopt(flatten)]
    pub network_options: NetworkOptions,

    #[structopt(flatten)]
    pub tx_options: TxOptions,
}

impl CommandLine {
    pub async fn run(self) -> Result<(), CommandError> {
        // Key pair management is local, no node or author needed.
        if let Command::KeyPair(cmd) = &self.command {
            return cmd.run().await;
        }
        let client = self.network_options.client().await?;
        let context = CommandContext {
            session: self.tx_options.author.map(Session::new),
            quota: self.tx_options.quota,
            client,
        };
        self.command.run(&context).await
    }
}

/// Network-related command-line options
#[derive(StructOpt, Clone, Debug)]
pub struct NetworkOptions {
    /// URL of the node's RPC API
    #[structopt(
        long,
        default_value = "http://127.0.0.1:1337",
        env = "CHARTER_NODE_URL",
        parse(try_from_str = url::Url::parse),
    )]
    pub node_url: url::Url,
}

impl NetworkOptions {
    pub async fn client(&self) -> Result<Client, Error> {
        Client::create(self.node_url.clone()).await
    }
}

/// Transaction-related command-line options
#[derive(StructOpt, Clone)]
pub struct TxOptions {
    /// The name of the local key pair used to sign transactions.
    /// Only needed by commands that submit transactions.
    #[structopt(
        long,
        env = "CHARTER_AUTHOR",
        value_name = "key_pair_name",
        parse(try_from_str = lookup_key_pair)
    )]
    pub author: Option<ed25519::Pair>,

    /// Quota declared for submitted transactions. Must cover the
    /// transaction's cost and stay within the chain's limits.
    #[structopt(long, default_value = &QUOTA_DEFAULT, env = "CHARTER_QUOTA", value_name = "quota")]
    pub quota: Quota,
}

lazy_static! {
    static ref QUOTA_DEFAULT: String = (1u64 << 20).to_string();
}

fn lookup_key_pair(name: &str) -> Result<ed25519::Pair, String> {
    key_pair_storage::get(name)
        .map(|data| ed25519::Pair::from_seed(&data.seed))
        .map_err(|e| format!("{}", e))
}

/// Everything a command needs to talk to the chain.
pub struct CommandContext {
    pub client: Client,
    pub session: Option<Session>,
    pub quota: Quota,
}

impl CommandContext {
    /// The signing session, present when `--author` was given.
    pub fn session(&self) -> Result<&Session, CommandError> {
        self.session.as_ref().ok_or(CommandError::NoAuthor)
    }
}

/// The supported [CommandLine] commands.
/// The commands are grouped by domain.
#[derive(StructOpt, Clone)]
pub enum Command {
    Permission(permission::Command),
    Role(role::Command),
    Group(group::Command),
    Quota(quota::Command),
    Node(node::Command),
    KeyPair(key_pair::Command),

    #[structopt(flatten)]
    Other(other::Command),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        match self {
            Command::Permission(cmd) => cmd.run(ctx).await,
            Command::Role(cmd) => cmd.run(ctx).await,
            Command::Group(cmd) => cmd.run(ctx).await,
            Command::Quota(cmd) => cmd.run(ctx).await,
            Command::Node(cmd) => cmd.run(ctx).await,
            Command::KeyPair(cmd) => cmd.run().await,
            Command::Other(cmd) => cmd.run(ctx).await,
        }
    }
}

/// The trait that every chain-facing command must implement.
#[async_trait::async_trait]
pub trait CommandT {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError>;
}

/// Error returned by [CommandT::run].
#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error("client error")]
    ClientError(#[from] Error),

    #[error(transparent)]
    FailedTransaction(#[from] TransactionError),

    #[error("no author given, pass --author or set CHARTER_AUTHOR")]
    NoAuthor,

    #[error("cannot find permission {permission}")]
    PermissionNotFound { permission: Address },

    #[error("cannot find role {role}")]
    RoleNotFound { role: Address },

    #[error("cannot find group {group}")]
    GroupNotFound { group: Address },

    #[error(transparent)]
    KeyPairStorageError(#[from] key_pair_storage::Error),
}
