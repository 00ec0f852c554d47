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

//! Provide the types shared by the client API.

pub use devfunding_registry_core::*;

pub use devfunding_registry_runtime::{
    event::Registry as RegistryEvent, Call as RuntimeCall, Event, GenesisConfig,
};

pub use crate::error::Error;
pub use crate::message::Message;
pub use crate::transaction::Transaction;

/// The hash of a transaction.
///
/// Computed from the encoded transaction. Two transactions with the same author and message
/// have the same hash.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TxHash(pub [u8; 32]);

impl core::fmt::Display for TxHash {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Result of a transaction being included in a block.
///
/// Returned after submitting an transaction to the ledger.
#[derive(Clone, Debug)]
pub struct TransactionIncluded<Message_: Message> {
    pub tx_hash: TxHash,
    /// The number of the block the transaction is included in.
    pub block: BlockNumber,
    /// Events emitted by this transaction
    pub events: Vec<Event>,
    /// The result of the runtime message.
    ///
    /// See [Message::result_from_events].
    pub result: Result<Message_::Output, RegistryError>,
}
