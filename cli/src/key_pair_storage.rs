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

//! On-disk storage for named key pairs.
//!
//! All key pairs live in a single JSON document under the user's data
//! directory. The document carries a version tag so its layout can
//! evolve without invalidating existing stores. A store that does not
//! exist yet reads as empty, so read-only commands never touch the
//! filesystem.

use std::collections::BTreeMap;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use charter_client::ed25519;

/// The stored record of a single key pair. The owning name is the key
/// under which the record is filed, so it is not repeated here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KeyPairData {
    pub seed: ed25519::Seed,
}

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("a key pair named '{name}' already exists")]
    AlreadyExists { name: String },

    #[error("no key pair named '{name}' in the store")]
    NotFound { name: String },

    #[error("cannot access the key pair store at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the key pair store at {path} is not a valid store document")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Store a new key pair under `name`.
///
/// Fails with [Error::AlreadyExists] when the name is taken.
pub fn add(name: String, data: KeyPairData) -> Result<(), Error> {
    let mut key_pairs = list()?;
    if key_pairs.contains_key(&name) {
        return Err(Error::AlreadyExists { name });
    }
    key_pairs.insert(name, data);
    save(key_pairs)
}

/// All stored key pairs, sorted by name.
pub fn list() -> Result<BTreeMap<String, KeyPairData>, Error> {
    let path = store_path();
    let contents = match std::fs::read(&path) {
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        other => other.map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?,
    };
    let StoreFile::V1 { key_pairs } =
        serde_json::from_slice(&contents).map_err(|source| Error::Malformed { path, source })?;
    Ok(key_pairs)
}

/// Look up a single key pair by name.
pub fn get(name: &str) -> Result<KeyPairData, Error> {
    list()?.remove(name).ok_or_else(|| Error::NotFound {
        name: name.to_string(),
    })
}

fn save(key_pairs: BTreeMap<String, KeyPairData>) -> Result<(), Error> {
    let path = store_path();
    let dir = path.parent().expect("store path always has a parent");
    std::fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let document = StoreFile::V1 { key_pairs };
    let contents = serde_json::to_string_pretty(&document).map_err(|source| Error::Malformed {
        path: path.clone(),
        source,
    })?;
    std::fs::write(&path, contents).map_err(|source| Error::Io { path, source })
}

fn store_path() -> PathBuf {
    BaseDirs::new()
        .expect("no home directory available")
        .data_dir()
        .join("charter-cli")
        .join("key-pairs.json")
}

/// The persisted document.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "version")]
enum StoreFile {
    #[serde(rename = "1")]
    V1 {
        key_pairs: BTreeMap<String, KeyPairData>,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn current_layout_parses() {
        let seed = [7u8; 32];
        let document = serde_json::json!({
            "version": "1",
            "key_pairs": { "alice": { "seed": seed.to_vec() } },
        });
        let StoreFile::V1 { key_pairs } = serde_json::from_value(document).unwrap();
        assert_eq!(key_pairs["alice"].seed, seed);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let document = serde_json::json!({ "version": "2", "key_pairs": {} });
        assert!(serde_json::from_value::<StoreFile>(document).is_err());
    }

    #[test]
    fn untagged_document_is_rejected() {
        assert!(serde_json::from_str::<StoreFile>("{}").is_err());
    }
}
