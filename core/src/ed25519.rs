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

//! Ed25519 key pairs used to sign transactions.
//!
//! An account is identified by the address derived from its public key:
//! the last 20 bytes of the Keccak-256 of the key.

use core::convert::TryFrom as _;
use core::fmt;

use ed25519_dalek::{Signer as _, Verifier as _};
use parity_scale_codec as codec;

use crate::{keccak256, Address};

/// The seed from which a key pair can be deterministically generated.
pub type Seed = [u8; 32];

/// An Ed25519 public key.
#[derive(codec::Encode, codec::Decode, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Public(pub [u8; 32]);

impl Public {
    /// The account address of this key.
    pub fn address(&self) -> Address {
        let hash = keccak256(&self.0);
        Address::try_from(&hash.as_bytes()[12..]).expect("hash tail is exactly 20 bytes; qed")
    }
}

impl fmt::Display for Public {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Public {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Public({})", self)
    }
}

/// An Ed25519 key pair.
#[derive(Clone)]
pub struct Pair {
    signing: ed25519_dalek::SigningKey,
}

impl Pair {
    pub fn from_seed(seed: &Seed) -> Self {
        Pair {
            signing: ed25519_dalek::SigningKey::from_bytes(seed),
        }
    }

    /// Derive a key pair from a seed phrase. The seed is the Keccak-256 of
    /// the phrase, so `Pair::from_string("Admin")` is stable across runs.
    pub fn from_string(phrase: &str) -> Self {
        Pair::from_seed(&keccak256(phrase.as_bytes()).0)
    }

    pub fn generate() -> Self {
        Pair::from_seed(&rand::random())
    }

    pub fn seed(&self) -> Seed {
        self.signing.to_bytes()
    }

    pub fn public(&self) -> Public {
        Public(self.signing.verifying_key().to_bytes())
    }

    /// The account address controlled by this key pair.
    pub fn address(&self) -> Address {
        self.public().address()
    }

    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing.sign(message).to_bytes()
    }
}

impl fmt::Debug for Pair {
    // Never print the secret half.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pair({})", self.public())
    }
}

/// Check a signature produced by [Pair::sign].
pub fn verify(public: &Public, message: &[u8], signature: &[u8; 64]) -> bool {
    let key = match ed25519_dalek::VerifyingKey::from_bytes(&public.0) {
        Ok(key) => key,
        Err(_) => return false,
    };
    let signature = ed25519_dalek::Signature::from_bytes(signature);
    key.verify(message, &signature).is_ok()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sign_and_verify() {
        let pair = Pair::generate();
        let signature = pair.sign(b"payload");
        assert!(verify(&pair.public(), b"payload", &signature));
        assert!(!verify(&pair.public(), b"other payload", &signature));
    }

    #[test]
    fn seed_phrase_is_deterministic() {
        let a = Pair::from_string("Admin");
        let b = Pair::from_string("Admin");
        assert_eq!(a.public(), b.public());
        assert_eq!(a.address(), b.address());
        assert_ne!(a.address(), Pair::from_string("Alice").address());
    }
}
