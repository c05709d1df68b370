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

//! A signing session bundling an author key with its nonce sequence.

use std::sync::atomic::{AtomicU64, Ordering};

use charter_core::{ed25519, Address, Nonce};

/// How many blocks past the current head a transaction stays valid
/// unless the session overrides it.
pub const DEFAULT_VALIDITY_WINDOW: u64 = 88;

/// An author key together with the monotonic nonce sequence its
/// transactions draw from.
///
/// Nonces are handed out with [Session::next_nonce] and never reused,
/// so concurrent submissions from one session cannot collide.
pub struct Session {
    author: ed25519::Pair,
    nonce: AtomicU64,
    validity_window: u64,
}

impl Session {
    pub fn new(author: ed25519::Pair) -> Self {
        Session {
            author,
            nonce: AtomicU64::new(0),
            validity_window: DEFAULT_VALIDITY_WINDOW,
        }
    }

    pub fn with_validity_window(author: ed25519::Pair, validity_window: u64) -> Self {
        Session {
            author,
            nonce: AtomicU64::new(0),
            validity_window,
        }
    }

    pub fn author(&self) -> &ed25519::Pair {
        &self.author
    }

    pub fn address(&self) -> Address {
        self.author.address()
    }

    /// The next unused nonce. Spends it.
    pub fn next_nonce(&self) -> Nonce {
        self.nonce.fetch_add(1, Ordering::SeqCst)
    }

    pub fn validity_window(&self) -> u64 {
        self.validity_window
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nonces_are_strictly_increasing() {
        let session = Session::new(ed25519::Pair::generate());
        let nonces: Vec<_> = (0..5).map(|_| session.next_nonce()).collect();
        assert_eq!(nonces, vec![0, 1, 2, 3, 4]);
    }
}
