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

//! `Address` identifies accounts, contracts, permissions, roles, groups and
//! nodes on the chain.
//!
//! Addresses are unique and immutable once an entity has been created.

use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;

use parity_scale_codec as codec;

/// A 20-byte chain address.
///
/// Rendered as a `0x`-prefixed lowercase hex string.
#[derive(codec::Encode, codec::Decode, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; 20]);

impl Address {
    pub const LEN: usize = 20;

    /// The all-zero address. Used as the resource target of the built-in
    /// send-transaction and create-contract permissions.
    pub const fn zero() -> Self {
        Address([0u8; 20])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum InvalidAddressError {
    #[error("address must be {} hex characters", 2 * Address::LEN)]
    Length,
    #[error("address must only include hex characters")]
    Digits,
}

impl FromStr for Address {
    type Err = InvalidAddressError;

    /// Parse an address from hex. A leading `0x` is accepted but not
    /// required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() != 2 * Address::LEN {
            return Err(InvalidAddressError::Length);
        }
        let bytes = hex::decode(s).map_err(|_| InvalidAddressError::Digits)?;
        let mut data = [0u8; 20];
        data.copy_from_slice(&bytes);
        Ok(Address(data))
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = InvalidAddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != Address::LEN {
            return Err(InvalidAddressError::Length);
        }
        let mut data = [0u8; 20];
        data.copy_from_slice(bytes);
        Ok(Address(data))
    }
}

impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_and_display_round_trip() {
        let addr: Address = "0xffffffffffffffffffffffffffffffffff020004"
            .parse()
            .unwrap();
        assert_eq!(
            addr.to_string(),
            "0xffffffffffffffffffffffffffffffffff020004"
        );
        // The prefix is optional.
        let bare: Address = "ffffffffffffffffffffffffffffffffff020004".parse().unwrap();
        assert_eq!(addr, bare);
    }

    #[test]
    fn reject_malformed() {
        assert_eq!(
            "0x1234".parse::<Address>(),
            Err(InvalidAddressError::Length)
        );
        assert_eq!(
            "zzffffffffffffffffffffffffffffffff020004".parse::<Address>(),
            Err(InvalidAddressError::Digits)
        );
    }

    #[test]
    fn serde_as_hex_string() {
        let addr: Address = "0x00000000000000000000000000000000000000ab"
            .parse()
            .unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x00000000000000000000000000000000000000ab\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
