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

//! Define the commands supported by the CLI.

use crate::{CommandContext, CommandError, CommandT};
use charter_client::*;

use structopt::StructOpt;

pub mod group;
pub mod key_pair;
pub mod node;
pub mod other;
pub mod permission;
pub mod quota;
pub mod role;

/// Parse a resource given as `<contract_address>:<method>`.
fn parse_resource(data: &str) -> Result<Resource, String> {
    let (contract, method) = data
        .split_once(':')
        .ok_or_else(|| "expected <contract_address>:<method>".to_string())?;
    let contract: Address = contract.parse().map_err(|e| format!("{}", e))?;
    Ok(Resource::new(contract, method))
}

fn announce_tx(msg: &str) {
    println!("{}", msg);
    println!("⏳ Transactions might take a while to be processed. Please wait...");
}

/// Sign and submit a message under the context's session and wait for
/// its execution, failing on business-rule errors.
async fn submit_ok<Message_: Message>(
    ctx: &CommandContext,
    message: Message_,
) -> Result<Message_::Output, CommandError> {
    let included = ctx
        .client
        .sign_and_submit_message(ctx.session()?, message, ctx.quota)
        .await?
        .await?;
    Ok(included.result?)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resource_parsing() {
        let resource =
            parse_resource("0xffffffffffffffffffffffffffffffffff020001:approveNode").unwrap();
        assert_eq!(resource.contract, registry::NODE_MANAGER);
        assert_eq!(resource.selector, selector("approveNode"));

        assert!(parse_resource("approveNode").is_err());
        assert!(parse_resource("nonsense:approveNode").is_err());
    }
}
