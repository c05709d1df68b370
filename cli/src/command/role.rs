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

//! Define the commands supported by the CLI related to roles.

use super::*;

/// Role related commands
#[derive(StructOpt, Debug, Clone)]
pub enum Command {
    Create(Create),
    Delete(Delete),
    Rename(Rename),
    AddPermissions(AddPermissions),
    RemovePermissions(RemovePermissions),
    Assign(Assign),
    Unassign(Unassign),
    UnassignAll(UnassignAll),
    Show(Show),
    OfAccount(OfAccount),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        match self {
            Command::Create(cmd) => cmd.run(ctx).await,
            Command::Delete(cmd) => cmd.run(ctx).await,
            Command::Rename(cmd) => cmd.run(ctx).await,
            Command::AddPermissions(cmd) => cmd.run(ctx).await,
            Command::RemovePermissions(cmd) => cmd.run(ctx).await,
            Command::Assign(cmd) => cmd.run(ctx).await,
            Command::Unassign(cmd) => cmd.run(ctx).await,
            Command::UnassignAll(cmd) => cmd.run(ctx).await,
            Command::Show(cmd) => cmd.run(ctx).await,
            Command::OfAccount(cmd) => cmd.run(ctx).await,
        }
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Create a new role holding the given permissions.
pub struct Create {
    /// Name of the role.
    name: String,
    /// Addresses of the permissions the role holds.
    permissions: Vec<Address>,
}

#[async_trait::async_trait]
impl CommandT for Create {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Creating role...");
        let role = submit_ok(
            ctx,
            message::NewRole {
                name: self.name.clone(),
                permissions: self.permissions.clone(),
            },
        )
        .await?;
        println!("Role {} created: {}", self.name, role);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Delete a role. Unassigns it from every account.
pub struct Delete {
    /// Address of the role.
    role: Address,
}

#[async_trait::async_trait]
impl CommandT for Delete {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Deleting role...");
        submit_ok(ctx, message::DeleteRole { role: self.role }).await?;
        println!("Role {} deleted.", self.role);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Rename a role.
pub struct Rename {
    /// Address of the role.
    role: Address,
    /// The new name.
    name: String,
}

#[async_trait::async_trait]
impl CommandT for Rename {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Renaming role...");
        submit_ok(
            ctx,
            message::UpdateRoleName {
                role: self.role,
                name: self.name.clone(),
            },
        )
        .await?;
        println!("Role {} renamed to {}.", self.role, self.name);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Add permissions to a role.
pub struct AddPermissions {
    /// Address of the role.
    role: Address,
    /// Addresses of the permissions to add.
    permissions: Vec<Address>,
}

#[async_trait::async_trait]
impl CommandT for AddPermissions {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Adding permissions...");
        submit_ok(
            ctx,
            message::AddPermissions {
                role: self.role,
                permissions: self.permissions.clone(),
            },
        )
        .await?;
        println!("Permissions added to role {}.", self.role);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Remove permissions from a role.
pub struct RemovePermissions {
    /// Address of the role.
    role: Address,
    /// Addresses of the permissions to remove.
    permissions: Vec<Address>,
}

#[async_trait::async_trait]
impl CommandT for RemovePermissions {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Removing permissions...");
        submit_ok(
            ctx,
            message::DeletePermissions {
                role: self.role,
                permissions: self.permissions.clone(),
            },
        )
        .await?;
        println!("Permissions removed from role {}.", self.role);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Assign a role to an account.
pub struct Assign {
    /// The account receiving the role.
    account: Address,
    /// Address of the role.
    role: Address,
}

#[async_trait::async_trait]
impl CommandT for Assign {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Assigning role...");
        submit_ok(
            ctx,
            message::SetRole {
                account: self.account,
                role: self.role,
            },
        )
        .await?;
        println!("Role {} assigned to account {}.", self.role, self.account);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Unassign a role from an account.
pub struct Unassign {
    /// The account losing the role.
    account: Address,
    /// Address of the role.
    role: Address,
}

#[async_trait::async_trait]
impl CommandT for Unassign {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Unassigning role...");
        submit_ok(
            ctx,
            message::CancelRole {
                account: self.account,
                role: self.role,
            },
        )
        .await?;
        println!("Role {} unassigned from account {}.", self.role, self.account);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Unassign all roles of an account.
pub struct UnassignAll {
    /// The account losing its roles.
    account: Address,
}

#[async_trait::async_trait]
impl CommandT for UnassignAll {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Unassigning all roles...");
        submit_ok(
            ctx,
            message::ClearRole {
                account: self.account,
            },
        )
        .await?;
        println!("All roles unassigned from account {}.", self.account);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the name and permissions of a role.
pub struct Show {
    /// Address of the role.
    role: Address,
}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let role = ctx
            .client
            .get_role(self.role)
            .await?
            .ok_or(CommandError::RoleNotFound { role: self.role })?;
        println!("name: {}", role.name);
        println!("permissions ({}):", role.permissions.len());
        for permission in role.permissions {
            println!("  {}", permission);
        }
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// List the roles assigned to an account.
pub struct OfAccount {
    /// The account to inspect.
    account: Address,
}

#[async_trait::async_trait]
impl CommandT for OfAccount {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let roles = ctx.client.account_roles(self.account).await?;
        println!("ROLES ({})", roles.len());
        for role in roles {
            println!("{}", role)
        }
        Ok(())
    }
}
