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

//! Define the commands supported by the CLI related to quota limits.

use super::*;

/// Quota related commands
#[derive(StructOpt, Debug, Clone)]
pub enum Command {
    Show(Show),
    SetBlockLimit(SetBlockLimit),
    SetDefaultAccountLimit(SetDefaultAccountLimit),
    SetAccountLimit(SetAccountLimit),
    AccountLimit(AccountLimit),
    ListEntries(ListEntries),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        match self {
            Command::Show(cmd) => cmd.run(ctx).await,
            Command::SetBlockLimit(cmd) => cmd.run(ctx).await,
            Command::SetDefaultAccountLimit(cmd) => cmd.run(ctx).await,
            Command::SetAccountLimit(cmd) => cmd.run(ctx).await,
            Command::AccountLimit(cmd) => cmd.run(ctx).await,
            Command::ListEntries(cmd) => cmd.run(ctx).await,
        }
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the chain-wide quota limits.
pub struct Show {}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let block_limit = ctx.client.block_quota_limit().await?;
        let default_account_limit = ctx.client.default_account_quota_limit().await?;
        println!("block quota limit: {}", block_limit);
        println!("default account quota limit: {}", default_account_limit);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Set the block quota limit.
pub struct SetBlockLimit {
    /// The new limit.
    limit: Quota,
}

#[async_trait::async_trait]
impl CommandT for SetBlockLimit {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Setting block quota limit...");
        submit_ok(ctx, message::SetBlockQuotaLimit { limit: self.limit }).await?;
        println!("Block quota limit set to {}.", self.limit);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Set the default account quota limit.
pub struct SetDefaultAccountLimit {
    /// The new limit.
    limit: Quota,
}

#[async_trait::async_trait]
impl CommandT for SetDefaultAccountLimit {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Setting default account quota limit...");
        submit_ok(
            ctx,
            message::SetDefaultAccountQuotaLimit { limit: self.limit },
        )
        .await?;
        println!("Default account quota limit set to {}.", self.limit);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Set the quota limit of a single account.
pub struct SetAccountLimit {
    /// The account the limit applies to.
    account: Address,
    /// The new limit.
    limit: Quota,
}

#[async_trait::async_trait]
impl CommandT for SetAccountLimit {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        announce_tx("Setting account quota limit...");
        submit_ok(
            ctx,
            message::SetAccountQuotaLimit {
                account: self.account,
                limit: self.limit,
            },
        )
        .await?;
        println!("Quota limit of account {} set to {}.", self.account, self.limit);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the quota limit that applies to an account.
pub struct AccountLimit {
    /// The account to inspect.
    account: Address,
}

#[async_trait::async_trait]
impl CommandT for AccountLimit {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let limit = ctx.client.account_quota_limit(self.account).await?;
        println!("{}", limit);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// List all accounts with an explicit quota limit.
pub struct ListEntries {}

#[async_trait::async_trait]
impl CommandT for ListEntries {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let accounts = ctx.client.quota_accounts().await?;
        let limits = ctx.client.quota_limits().await?;
        println!("QUOTA ENTRIES ({})", accounts.len());
        for (account, limit) in accounts.iter().zip(limits.iter()) {
            println!("{} {}", account, limit)
        }
        Ok(())
    }
}
