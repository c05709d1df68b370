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

//! Define the commands supported by the CLI related to permissions
//! and their authorization.

use super::*;

/// Permission related commands
#[derive(StructOpt, Debug, Clone)]
pub enum Command {
    Create(Create),
    Delete(Delete),
    Rename(Rename),
    AddResources(AddResources),
    RemoveResources(RemoveResources),
    Grant(Grant),
    Revoke(Revoke),
    RevokeAll(RevokeAll),
    Show(Show),
    Accounts(Accounts),
    OfAccount(OfAccount),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        match self {
            Command::Create(cmd) => cmd.run(ctx).await,
            Command::Delete(cmd) => cmd.run(ctx).await,
            Command::Rename(cmd) => cmd.run(ctx).await,
            Command::AddResources(cmd) => cmd.run(ctx).await,
            Command::RemoveResources(cmd) => cmd.run(ctx).await,
            Command::Grant(cmd) => cmd.run(ctx).await,
            Command::Revoke(cmd) => cmd.run(ctx).await,
            Command::RevokeAll(cmd) => cmd.run(ctx).await,
            Command::Show(cmd) => cmd.run(ctx).await,
            Command::Accounts(cmd) => cmd.run(ctx).await,
            Command::OfAccount(cmd) => cmd.run(ctx).await,
        }
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Create a new permission covering the given resources.
pub struct Create {
    /// Name of the permission.
    name: String,
    /// Resources the permission authorizes, given as
    /// `<contract_address>:<method>`.
    #[structopt(parse(try_from_str = parse_resource))]
    resources: Vec<Resource>,
}

#[async_trait::async_trait]
impl CommandT for Create {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Creating permission...");
        let permission = submit_ok(
            ctx,
            message::NewPermission {
                name: self.name.clone(),
                resources: self.resources.clone(),
            },
        )
        .await?;
        println!("Permission {} created: {}", self.name, permission);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Delete a permission. Revokes it from every account and role.
pub struct Delete {
    /// Address of the permission.
    permission: Address,
}

#[async_trait::async_trait]
impl CommandT for Delete {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Deleting permission...");
        submit_ok(
            ctx,
            message::DeletePermission {
                permission: self.permission,
            },
        )
        .await?;
        println!("Permission {} deleted.", self.permission);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Rename a permission.
pub struct Rename {
    /// Address of the permission.
    permission: Address,
    /// The new name.
    name: String,
}

#[async_trait::async_trait]
impl CommandT for Rename {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Renaming permission...");
        submit_ok(
            ctx,
            message::UpdatePermissionName {
                permission: self.permission,
                name: self.name.clone(),
            },
        )
        .await?;
        println!("Permission {} renamed to {}.", self.permission, self.name);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Add resources to a permission.
pub struct AddResources {
    /// Address of the permission.
    permission: Address,
    /// Resources to add, given as `<contract_address>:<method>`.
    #[structopt(parse(try_from_str = parse_resource))]
    resources: Vec<Resource>,
}

#[async_trait::async_trait]
impl CommandT for AddResources {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Adding resources...");
        submit_ok(
            ctx,
            message::AddResources {
                permission: self.permission,
                resources: self.resources.clone(),
            },
        )
        .await?;
        println!("Resources added to permission {}.", self.permission);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Remove resources from a permission.
pub struct RemoveResources {
    /// Address of the permission.
    permission: Address,
    /// Resources to remove, given as `<contract_address>:<method>`.
    #[structopt(parse(try_from_str = parse_resource))]
    resources: Vec<Resource>,
}

#[async_trait::async_trait]
impl CommandT for RemoveResources {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Removing resources...");
        submit_ok(
            ctx,
            message::DeleteResources {
                permission: self.permission,
                resources: self.resources.clone(),
            },
        )
        .await?;
        println!("Resources removed from permission {}.", self.permission);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Grant a permission directly to an account.
pub struct Grant {
    /// The account receiving the permission.
    account: Address,
    /// Address of the permission.
    permission: Address,
}

#[async_trait::async_trait]
impl CommandT for Grant {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Granting permission...");
        submit_ok(
            ctx,
            message::SetAuthorization {
                account: self.account,
                permission: self.permission,
            },
        )
        .await?;
        println!(
            "Permission {} granted to account {}.",
            self.permission, self.account
        );
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Revoke a directly granted permission from an account.
pub struct Revoke {
    /// The account losing the permission.
    account: Address,
    /// Address of the permission.
    permission: Address,
}

#[async_trait::async_trait]
impl CommandT for Revoke {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Revoking permission...");
        submit_ok(
            ctx,
            message::CancelAuthorization {
                account: self.account,
                permission: self.permission,
            },
        )
        .await?;
        println!(
            "Permission {} revoked from account {}.",
            self.permission, self.account
        );
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Revoke all directly granted permissions of an account.
pub struct RevokeAll {
    /// The account losing its permissions.
    account: Address,
}

#[async_trait::async_trait]
impl CommandT for RevokeAll {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Revoking all permissions...");
        submit_ok(
            ctx,
            message::ClearAuthorization {
                account: self.account,
            },
        )
        .await?;
        println!("All permissions revoked from account {}.", self.account);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the name and resources of a permission.
pub struct Show {
    /// Address of the permission.
    permission: Address,
}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let permission = ctx
            .client
            .get_permission(self.permission)
            .await?
            .ok_or(CommandError::PermissionNotFound {
                permission: self.permission,
            })?;
        println!("name: {}", permission.name);
        println!("resources ({}):", permission.resources.len());
        for resource in permission.resources {
            println!("  {} {}", resource.contract, hex::encode(resource.selector.0));
        }
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// List the accounts whose effective permission set includes the
/// given permission.
pub struct Accounts {
    /// Address of the permission.
    permission: Address,
}

#[async_trait::async_trait]
impl CommandT for Accounts {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let accounts = ctx.client.permission_accounts(self.permission).await?;
        println!("ACCOUNTS ({})", accounts.len());
        for account in accounts {
            println!("{}", account)
        }
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// List the effective permissions of an account.
pub struct OfAccount {
    /// The account to inspect.
    account: Address,
}

#[async_trait::async_trait]
impl CommandT for OfAccount {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let permissions = ctx.client.account_permissions(self.account).await?;
        println!("PERMISSIONS ({})", permissions.len());
        for permission in permissions {
            println!("{}", permission)
        }
        Ok(())
    }
}
