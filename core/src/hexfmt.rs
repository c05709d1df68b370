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

//! Serde helpers for the `0x`-prefixed hex conventions of the JSON-RPC
//! boundary: quantities are hex numbers, blobs are hex byte strings.

/// `u64` as a `0x`-prefixed hex quantity, e.g. `"0x1a"`.
pub mod quantity {
    use serde::de::Error as _;
    use serde::{Deserialize as _, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{:x}", value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let s = String::deserialize(deserializer)?;
        let digits = s.strip_prefix("0x").unwrap_or(&s);
        u64::from_str_radix(digits, 16).map_err(D::Error::custom)
    }
}

/// `Vec<u8>` as a `0x`-prefixed hex string, e.g. `"0xdeadbeef"`.
pub mod bytes {
    use serde::de::Error as _;
    use serde::{Deserialize as _, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(value)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        let digits = s.strip_prefix("0x").unwrap_or(&s);
        hex::decode(digits).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Wire {
        #[serde(with = "super::quantity")]
        number: u64,
        #[serde(with = "super::bytes")]
        data: Vec<u8>,
    }

    #[test]
    fn hex_wire_round_trip() {
        let wire = Wire {
            number: 26,
            data: vec![0xde, 0xad, 0xbe, 0xef],
        };
        let json = serde_json::to_string(&wire).unwrap();
        assert_eq!(json, r#"{"number":"0x1a","data":"0xdeadbeef"}"#);
        assert_eq!(serde_json::from_str::<Wire>(&json).unwrap(), wire);
    }

    #[test]
    fn quantity_accepts_bare_digits() {
        let wire: Wire = serde_json::from_str(r#"{"number":"ff","data":"0x"}"#).unwrap();
        assert_eq!(wire.number, 255);
        assert!(wire.data.is_empty());
    }
}
