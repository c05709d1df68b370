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

//! A [Resource] is the unit of authorization: a contract address paired
//! with the selector of one of its methods. Permissions are ordered sets
//! of resources.

use core::fmt;

use parity_scale_codec as codec;

use crate::{keccak256, Address};

/// First four bytes of the Keccak-256 of a method name.
#[derive(codec::Encode, codec::Decode, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector(pub [u8; 4]);

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Selector({})", self)
    }
}

/// Compute the selector of a method name.
pub fn selector(method: &str) -> Selector {
    let hash = keccak256(method.as_bytes());
    let mut data = [0u8; 4];
    data.copy_from_slice(&hash.as_bytes()[..4]);
    Selector(data)
}

/// A method on a contract that a permission may authorize.
#[derive(codec::Encode, codec::Decode, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Resource {
    pub contract: Address,
    pub selector: Selector,
}

impl Resource {
    pub fn new(contract: Address, method: &str) -> Self {
        Resource {
            contract,
            selector: selector(method),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn selector_is_prefix_of_keccak() {
        let sel = selector("approveNode");
        let hash = keccak256(b"approveNode");
        assert_eq!(&sel.0[..], &hash.as_bytes()[..4]);
    }

    #[test]
    fn distinct_methods_distinct_selectors() {
        assert_ne!(selector("approveNode"), selector("deleteNode"));
    }
}
