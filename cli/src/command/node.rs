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

//! Define the commands supported by the CLI related to consensus nodes.

use super::*;

/// Node related commands
#[derive(StructOpt, Debug, Clone)]
pub enum Command {
    List(List),
    Approve(Approve),
    Delete(Delete),
    SetStake(SetStake),
    Show(Show),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        match self {
            Command::List(cmd) => cmd.run(ctx).await,
            Command::Approve(cmd) => cmd.run(ctx).await,
            Command::Delete(cmd) => cmd.run(ctx).await,
            Command::SetStake(cmd) => cmd.run(ctx).await,
            Command::Show(cmd) => cmd.run(ctx).await,
        }
    }
}

#[derive(StructOpt, Debug, Clone)]
/// List all started consensus nodes.
pub struct List {}

#[async_trait::async_trait]
impl CommandT for List {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let nodes = ctx.client.list_nodes().await?;
        println!("NODES ({})", nodes.len());
        for node in nodes {
            println!("{}", node)
        }
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Approve a node, starting it. Registers the node if the chain has
/// not seen it before.
pub struct Approve {
    /// Address of the node.
    node: Address,
}

#[async_trait::async_trait]
impl CommandT for Approve {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Approving node...");
        submit_ok(ctx, message::ApproveNode { node: self.node }).await?;
        println!("Node {} approved.", self.node);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Close a started node.
pub struct Delete {
    /// Address of the node.
    node: Address,
}

#[async_trait::async_trait]
impl CommandT for Delete {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Closing node...");
        submit_ok(ctx, message::DeleteNode { node: self.node }).await?;
        println!("Node {} closed.", self.node);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Set the stake weight of a registered node.
pub struct SetStake {
    /// Address of the node.
    node: Address,
    /// The new stake weight.
    stake: u64,
}

#[async_trait::async_trait]
impl CommandT for SetStake {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Setting stake...");
        submit_ok(
            ctx,
            message::SetStake {
                node: self.node,
                stake: self.stake,
            },
        )
        .await?;
        println!("Stake of node {} set to {}.", self.node, self.stake);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the status and stake of a node.
pub struct Show {
    /// Address of the node.
    node: Address,
}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let status = ctx.client.node_status(self.node).await?;
        let stake = ctx.client.node_stake(self.node).await?;
        println!("status: {:?}", status);
        println!("stake: {}", stake);
        Ok(())
    }
}
