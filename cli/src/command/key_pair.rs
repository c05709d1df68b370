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

//! Define the commands supported by the CLI related to key pairs.
//!
//! These commands only touch local storage and run without a node.

use super::*;
use crate::key_pair_storage;

/// Key pair related commands
#[derive(StructOpt, Clone)]
pub enum Command {
    /// Generate a random key pair identified by `name` and
    /// store it on disk. Fail if there is already a key pair
    /// with the given `name`.
    Generate(Generate),
    /// List all the local key pairs.
    List(List),
}

impl Command {
    pub async fn run(&self) -> Result<(), CommandError> {
        match self {
            Command::Generate(cmd) => cmd.run().await,
            Command::List(cmd) => cmd.run().await,
        }
    }
}

#[derive(StructOpt, Clone)]
pub struct Generate {
    /// The name that uniquely identifies the key pair locally.
    name: String,
}

impl Generate {
    async fn run(&self) -> Result<(), CommandError> {
        let key_pair = ed25519::Pair::generate();
        key_pair_storage::add(
            self.name.clone(),
            key_pair_storage::KeyPairData {
                seed: key_pair.seed(),
            },
        )?;
        println!("✓ Key pair generated successfully");
        println!("ⓘ Account address: {}", key_pair.address());
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
pub struct List {}

impl List {
    async fn run(&self) -> Result<(), CommandError> {
        let key_pairs = key_pair_storage::list()?;
        println!("Key pairs ({})\n", key_pairs.len());
        for (name, data) in key_pairs {
            println!("  '{}'", name);
            println!(
                "  address: {}\n",
                ed25519::Pair::from_seed(&data.seed).address()
            );
        }
        Ok(())
    }
}
