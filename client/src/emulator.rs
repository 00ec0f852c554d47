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

//! Provides [Emulator] to run the registry ledger in memory.

use parity_scale_codec::Encode as _;
use std::sync::{Arc, Mutex, MutexGuard};

use devfunding_registry_runtime::{Extrinsic, GenesisConfig, Runtime};

use crate::interface::*;
use crate::transaction::hash_extrinsic;

/// Runs the native runtime with in-memory state to emulate the ledger.
///
/// Every [Emulator::submit] call creates a new block that only contains the submitted
/// transaction. [Emulator::mine_blocks] creates empty blocks.
#[derive(Clone)]
pub struct Emulator {
    state: Arc<Mutex<EmulatorState>>,
}

/// Mutable state of the emulator.
struct EmulatorState {
    runtime: Runtime,
    /// Number of the last block.
    tip: BlockNumber,
}

/// Indicator that a transaction has been included in a block and has run in the runtime.
pub struct TransactionApplied {
    pub tx_hash: TxHash,
    pub block: BlockNumber,
    /// Events emitted by this transaction
    pub events: Vec<Event>,
}

impl Emulator {
    pub fn new(genesis_config: &GenesisConfig) -> Self {
        Emulator {
            state: Arc::new(Mutex::new(EmulatorState {
                runtime: Runtime::new(genesis_config),
                tip: 0,
            })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<EmulatorState>, Error> {
        self.state
            .lock()
            .map_err(|_| Error::from("Emulator state lock poisoned"))
    }

    /// Applies the extrinsic in a new block.
    pub fn submit(&self, extrinsic: &Extrinsic) -> Result<TransactionApplied, Error> {
        let tx_hash = hash_extrinsic(extrinsic);
        let mut state = self.lock()?;
        let block = state.tip + 1;
        state.runtime.initialize_block(block);
        let events = state.runtime.apply_extrinsic(&extrinsic.encode())?;
        state.tip = block;
        log::trace!("transaction {} included in block {}", tx_hash, block);
        Ok(TransactionApplied {
            tx_hash,
            block,
            events,
        })
    }

    /// Creates `count` empty blocks.
    pub fn mine_blocks(&self, count: BlockNumber) -> Result<BlockNumber, Error> {
        let mut state = self.lock()?;
        let tip = state
            .tip
            .checked_add(count)
            .ok_or_else(|| Error::from("Block number overflow"))?;
        state.runtime.initialize_block(tip);
        state.tip = tip;
        Ok(tip)
    }

    pub fn tip(&self) -> Result<BlockNumber, Error> {
        Ok(self.lock()?.tip)
    }

    /// Reads from the ledger state after the last block.
    pub fn read<T>(&self, f: impl FnOnce(&Runtime) -> T) -> Result<T, Error> {
        let state = self.lock()?;
        Ok(f(&state.runtime))
    }
}
