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

//! Define the commands supported by the CLI that
//! are not related to any specific domain.

use super::*;

/// Other commands, not related to any specific domain.
#[derive(StructOpt, Debug, Clone)]
pub enum Command {
    Metadata(ShowMetadata),
    BlockNumber(ShowBlockNumber),
    Admin(ShowAdmin),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        match self {
            Command::Metadata(cmd) => cmd.run(ctx).await,
            Command::BlockNumber(cmd) => cmd.run(ctx).await,
            Command::Admin(cmd) => cmd.run(ctx).await,
        }
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the chain identity reported by the node
pub struct ShowMetadata {}

#[async_trait::async_trait]
impl CommandT for ShowMetadata {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let metadata = ctx.client.chain_metadata();
        println!("chain name: {}", metadata.chain_name);
        println!("chain id: {}", metadata.chain_id);
        println!("version: {}", metadata.version);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the current block number
pub struct ShowBlockNumber {}

#[async_trait::async_trait]
impl CommandT for ShowBlockNumber {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let block_number = ctx.client.block_number().await?;
        println!("{}", block_number);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the chain's admin account
pub struct ShowAdmin {}

#[async_trait::async_trait]
impl CommandT for ShowAdmin {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let admin = ctx.client.admin_address().await?;
        println!("{}", admin);
        Ok(())
    }
}
