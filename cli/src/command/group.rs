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

//! Define the commands supported by the CLI related to groups.

use super::*;

/// Group related commands
#[derive(StructOpt, Debug, Clone)]
pub enum Command {
    Create(Create),
    Delete(Delete),
    Rename(Rename),
    AddAccounts(AddAccounts),
    RemoveAccounts(RemoveAccounts),
    Show(Show),
    CheckScope(CheckScope),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        match self {
            Command::Create(cmd) => cmd.run(ctx).await,
            Command::Delete(cmd) => cmd.run(ctx).await,
            Command::Rename(cmd) => cmd.run(ctx).await,
            Command::AddAccounts(cmd) => cmd.run(ctx).await,
            Command::RemoveAccounts(cmd) => cmd.run(ctx).await,
            Command::Show(cmd) => cmd.run(ctx).await,
            Command::CheckScope(cmd) => cmd.run(ctx).await,
        }
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Create a new group under an origin group.
pub struct Create {
    /// The group the new group is created under. Use the root group
    /// address for top-level groups.
    origin: Address,
    /// Name of the group.
    name: String,
    /// Initial member accounts.
    accounts: Vec<Address>,
}

#[async_trait::async_trait]
impl CommandT for Create {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Creating group...");
        let group = submit_ok(
            ctx,
            message::NewGroup {
                origin: self.origin,
                name: self.name.clone(),
                accounts: self.accounts.clone(),
            },
        )
        .await?;
        println!("Group {} created: {}", self.name, group);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Delete a group. Fails for the root group and for groups that still
/// have child groups.
pub struct Delete {
    /// A group in whose scope the target lies.
    origin: Address,
    /// Address of the group to delete.
    target: Address,
}

#[async_trait::async_trait]
impl CommandT for Delete {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Deleting group...");
        submit_ok(
            ctx,
            message::DeleteGroup {
                origin: self.origin,
                target: self.target,
            },
        )
        .await?;
        println!("Group {} deleted.", self.target);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Rename a group.
pub struct Rename {
    /// A group in whose scope the target lies.
    origin: Address,
    /// Address of the group to rename.
    target: Address,
    /// The new name.
    name: String,
}

#[async_trait::async_trait]
impl CommandT for Rename {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Renaming group...");
        submit_ok(
            ctx,
            message::UpdateGroupName {
                origin: self.origin,
                target: self.target,
                name: self.name.clone(),
            },
        )
        .await?;
        println!("Group {} renamed to {}.", self.target, self.name);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Add member accounts to a group.
pub struct AddAccounts {
    /// A group in whose scope the target lies.
    origin: Address,
    /// Address of the group.
    target: Address,
    /// Accounts to add.
    accounts: Vec<Address>,
}

#[async_trait::async_trait]
impl CommandT for AddAccounts {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Adding accounts...");
        submit_ok(
            ctx,
            message::AddAccounts {
                origin: self.origin,
                target: self.target,
                accounts: self.accounts.clone(),
            },
        )
        .await?;
        println!("Accounts added to group {}.", self.target);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Remove member accounts from a group.
pub struct RemoveAccounts {
    /// A group in whose scope the target lies.
    origin: Address,
    /// Address of the group.
    target: Address,
    /// Accounts to remove.
    accounts: Vec<Address>,
}

#[async_trait::async_trait]
impl CommandT for RemoveAccounts {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Removing accounts...");
        submit_ok(
            ctx,
            message::DeleteAccounts {
                origin: self.origin,
                target: self.target,
                accounts: self.accounts.clone(),
            },
        )
        .await?;
        println!("Accounts removed from group {}.", self.target);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the parent, name, members and children of a group.
pub struct Show {
    /// Address of the group.
    group: Address,
}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let group = ctx
            .client
            .get_group(self.group)
            .await?
            .ok_or(CommandError::GroupNotFound { group: self.group })?;
        match group.parent {
            Some(parent) => println!("parent: {}", parent),
            None => println!("parent: none (root group)"),
        }
        println!("name: {}", group.name);
        println!("accounts ({}):", group.accounts.len());
        for account in group.accounts {
            println!("  {}", account);
        }
        println!("children ({}):", group.children.len());
        for child in group.children {
            println!("  {}", child);
        }
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Check whether a group lies within the scope of another.
pub struct CheckScope {
    /// The origin group.
    origin: Address,
    /// The group to check.
    target: Address,
}

#[async_trait::async_trait]
impl CommandT for CheckScope {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let in_scope = ctx.client.check_scope(self.origin, self.target).await?;
        if in_scope {
            println!("{} is in the scope of {}.", self.target, self.origin);
        } else {
            println!("{} is NOT in the scope of {}.", self.target, self.origin);
        }
        Ok(())
    }
}
