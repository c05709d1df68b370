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

//! Signed transactions and their wire encoding.

use std::marker::PhantomData;

use parity_scale_codec::{Decode, Encode};

use charter_core::{ed25519, keccak256, Address, BlockNumber, Nonce, Quota, TxHash};

use crate::message_impls::Message;

/// Parameters a signer fixes for a transaction besides the message
/// payload itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionExtra {
    pub nonce: Nonce,
    pub quota: Quota,
    /// Last block in which the transaction may still be included.
    pub valid_until_block: BlockNumber,
    pub chain_id: u32,
}

/// The signed content of a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct TransactionBody {
    pub to: Address,
    pub nonce: Nonce,
    pub quota: Quota,
    pub valid_until_block: BlockNumber,
    /// SCALE-encoded [charter_core::call::Call].
    pub data: Vec<u8>,
    pub value: u128,
    pub chain_id: u32,
    pub version: u32,
}

/// A transaction body with the signature that covers it.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct UnverifiedTransaction {
    pub body: TransactionBody,
    pub signature: [u8; 64],
    pub signer: ed25519::Public,
}

impl UnverifiedTransaction {
    /// Hash of the full signed envelope. Identifies the transaction.
    pub fn hash(&self) -> TxHash {
        keccak256(&self.encode())
    }

    pub fn sender(&self) -> Address {
        self.signer.address()
    }

    pub fn verify_signature(&self) -> bool {
        ed25519::verify(&self.signer, &self.body.encode(), &self.signature)
    }
}

/// A signed transaction carrying a `Message_` payload.
///
/// The type parameter only serves to tie the submission to the result
/// type extracted from the receipt. It has no bearing on the encoding.
#[derive(Clone, Debug)]
pub struct Transaction<Message_: Message> {
    _phantom_data: PhantomData<Message_>,
    unverified: UnverifiedTransaction,
}

impl<Message_: Message> Transaction<Message_> {
    pub fn new_signed(
        signer: &ed25519::Pair,
        message: Message_,
        extra: TransactionExtra,
    ) -> Self {
        let call = message.into_call();
        let body = TransactionBody {
            to: call.target(),
            nonce: extra.nonce,
            quota: extra.quota,
            valid_until_block: extra.valid_until_block,
            data: call.encode(),
            value: 0,
            chain_id: extra.chain_id,
            version: charter_core::PROTOCOL_VERSION,
        };
        let signature = signer.sign(&body.encode());
        let unverified = UnverifiedTransaction {
            body,
            signature,
            signer: signer.public(),
        };
        Transaction {
            _phantom_data: PhantomData,
            unverified,
        }
    }

    pub fn hash(&self) -> TxHash {
        self.unverified.hash()
    }

    /// The bytes handed to the node for submission.
    pub fn raw(&self) -> Vec<u8> {
        self.unverified.encode()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use charter_core::message;

    fn extra() -> TransactionExtra {
        TransactionExtra {
            nonce: 7,
            quota: 30_000,
            valid_until_block: 100,
            chain_id: 1,
        }
    }

    #[test]
    fn signed_transaction_verifies() {
        let author = ed25519::Pair::from_string("//Alice");
        let tx = Transaction::new_signed(
            &author,
            message::SetStake {
                node: Address::zero(),
                stake: 5,
            },
            extra(),
        );
        let unverified = UnverifiedTransaction::decode(&mut tx.raw().as_slice()).unwrap();
        assert!(unverified.verify_signature());
        assert_eq!(unverified.sender(), author.address());
        assert_eq!(unverified.hash(), tx.hash());
    }

    #[test]
    fn tampered_body_fails_verification() {
        let author = ed25519::Pair::from_string("//Alice");
        let tx = Transaction::new_signed(
            &author,
            message::SetStake {
                node: Address::zero(),
                stake: 5,
            },
            extra(),
        );
        let mut unverified = UnverifiedTransaction::decode(&mut tx.raw().as_slice()).unwrap();
        unverified.body.nonce += 1;
        assert!(!unverified.verify_signature());
    }
}
