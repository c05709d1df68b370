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

//! 32-byte hashes: transaction hashes, block hashes and log topics.

use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;

use parity_scale_codec as codec;
use sha3::{Digest as _, Keccak256};

use crate::Address;

/// The hashing algorithm used throughout the chain.
pub fn keccak256(data: &[u8]) -> H256 {
    let mut output = [0u8; 32];
    output.copy_from_slice(Keccak256::digest(data).as_slice());
    H256(output)
}

/// A 32-byte Keccak-256 hash.
#[derive(codec::Encode, codec::Decode, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct H256(pub [u8; 32]);

impl H256 {
    pub const fn zero() -> Self {
        H256([0u8; 32])
    }

    pub fn random() -> Self {
        H256(rand::random())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Embed an address into a topic, left-padded with zeros. Creation
    /// events carry the new entity address this way.
    pub fn from_address(address: &Address) -> Self {
        let mut data = [0u8; 32];
        data[12..].copy_from_slice(address.as_bytes());
        H256(data)
    }

    /// The address embedded in a topic by [H256::from_address].
    pub fn to_address(&self) -> Address {
        Address::try_from(&self.0[12..]).expect("topic tail is exactly 20 bytes; qed")
    }
}

impl fmt::Display for H256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for H256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "H256({})", self)
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum InvalidHashError {
    #[error("hash must be 64 hex characters")]
    Length,
    #[error("hash must only include hex characters")]
    Digits,
}

impl FromStr for H256 {
    type Err = InvalidHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() != 64 {
            return Err(InvalidHashError::Length);
        }
        let bytes = hex::decode(s).map_err(|_| InvalidHashError::Digits)?;
        let mut data = [0u8; 32];
        data.copy_from_slice(&bytes);
        Ok(H256(data))
    }
}

impl serde::Serialize for H256 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for H256 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn topic_address_round_trip() {
        let address: Address = "0x00000000000000000000000000000000000000cd"
            .parse()
            .unwrap();
        let topic = H256::from_address(&address);
        assert_eq!(topic.to_address(), address);
        assert_eq!(&topic.0[..12], &[0u8; 12][..]);
    }

    #[test]
    fn keccak_is_stable() {
        // Well-known Keccak-256 of the empty input.
        assert_eq!(
            keccak256(b"").to_string(),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }
}
