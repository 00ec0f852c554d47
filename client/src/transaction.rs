// DevFunding Registry
// Copyright (C) 2019 Monadic GmbH <radicle@monadic.xyz>
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

//! Provides [Transaction].
use core::marker::PhantomData;
use parity_scale_codec::Encode;
use sha2::{Digest, Sha256};

use devfunding_registry_runtime::Extrinsic;

use crate::{message::Message, AccountId, TxHash};

#[derive(Clone, Debug)]
/// Transaction that can be submitted to the ledger.
///
/// A transaction includes
/// * the author
/// * the runtime message
///
/// The transaction type is generic over the runtime message parameter which must implement
/// [Message].
pub struct Transaction<Message_: Message> {
    _phantom_data: PhantomData<Message_>,
    pub(crate) extrinsic: Extrinsic,
}

impl<Message_: Message> Transaction<Message_> {
    /// Create a transaction for the given message authored by `author`.
    pub fn new(author: AccountId, message: Message_) -> Self {
        Transaction {
            _phantom_data: PhantomData,
            extrinsic: Extrinsic {
                author,
                call: message.into_runtime_call(),
            },
        }
    }

    pub fn author(&self) -> AccountId {
        self.extrinsic.author
    }

    pub fn hash(&self) -> TxHash {
        hash_extrinsic(&self.extrinsic)
    }
}

pub(crate) fn hash_extrinsic(extrinsic: &Extrinsic) -> TxHash {
    let digest = Sha256::digest(&extrinsic.encode());
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&digest);
    TxHash(hash)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::message;

    #[test]
    /// Check that a transaction's hash depends on the author and the message.
    fn check_transaction_hash() {
        let alice = AccountId::from_seed("Alice");
        let bob = AccountId::from_seed("Bob");
        let transfer = message::Transfer {
            recipient: bob,
            balance: 1000,
        };

        let tx = Transaction::new(alice, transfer.clone());
        assert_eq!(tx.hash(), hash_extrinsic(&tx.extrinsic));
        assert_eq!(tx.hash(), Transaction::new(alice, transfer.clone()).hash());
        assert_ne!(tx.hash(), Transaction::new(bob, transfer).hash());
        assert_eq!(tx.author(), alice);
    }
}
