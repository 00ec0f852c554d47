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

//! Client for the DevFunding Registry ledger.
//!
//! The [Client] runs the ledger in memory with an [Emulator] that includes every submitted
//! transaction in a new block.
//!
//! ```
//! # use devfunding_registry_client::*;
//! # fn example() -> Result<(), Error> {
//! let client = Client::new_emulator();
//! let alice = AccountId::from_seed("Alice");
//! let bob = AccountId::from_seed("Bob");
//!
//! let transfer = client.submit(
//!     &alice,
//!     message::Transfer {
//!         recipient: bob,
//!         balance: 1000,
//!     },
//! )?;
//! assert_eq!(transfer.result, Ok(()));
//! assert_eq!(client.free_balance(&bob)?, (1 << 60) + 1000);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use devfunding_registry_runtime::Runtime;

mod emulator;
mod error;
mod interface;
pub mod logger;
pub mod message;
mod transaction;

pub use emulator::Emulator;
pub use interface::*;

/// Client to interact with the registry ledger.
#[derive(Clone)]
pub struct Client {
    emulator: Emulator,
}

impl Client {
    /// Create a client running the ledger configured with [GenesisConfig::dev].
    pub fn new_emulator() -> Self {
        Self::from_genesis(&GenesisConfig::dev())
    }

    pub fn from_genesis(genesis_config: &GenesisConfig) -> Self {
        Client {
            emulator: Emulator::new(genesis_config),
        }
    }

    /// Submit a ledger message authored by `author` as a transaction.
    ///
    /// Same as [Client::submit_transaction] but takes care of creating the transaction.
    pub fn submit<Message_: Message>(
        &self,
        author: &AccountId,
        message: Message_,
    ) -> Result<TransactionIncluded<Message_>, Error> {
        self.submit_transaction(Transaction::new(*author, message))
    }

    /// Submit a transaction and return when it has been included in a block.
    ///
    /// This does not fail if the transaction failed to apply. See [TransactionIncluded::result]
    /// for that.
    pub fn submit_transaction<Message_: Message>(
        &self,
        transaction: Transaction<Message_>,
    ) -> Result<TransactionIncluded<Message_>, Error> {
        let applied = self.emulator.submit(&transaction.extrinsic)?;
        let tx_hash = applied.tx_hash;
        let result = Message_::result_from_events(applied.events.clone())
            .map_err(|error| Error::EventExtraction { error, tx_hash })?;
        Ok(TransactionIncluded {
            tx_hash,
            block: applied.block,
            events: applied.events,
            result,
        })
    }

    /// Produce `count` empty blocks and return the new block number.
    pub fn mine_blocks(&self, count: BlockNumber) -> Result<BlockNumber, Error> {
        self.emulator.mine_blocks(count)
    }

    /// Number of the last block.
    pub fn block_number(&self) -> Result<BlockNumber, Error> {
        self.emulator.tip()
    }

    fn read<T>(&self, f: impl FnOnce(&Runtime) -> T) -> Result<T, Error> {
        self.emulator.read(f)
    }

    pub fn owner(&self) -> Result<AccountId, Error> {
        self.read(|runtime| runtime.owner())
    }

    pub fn free_balance(&self, account_id: &AccountId) -> Result<Balance, Error> {
        self.read(|runtime| runtime.free_balance(account_id))
    }

    pub fn total_issuance(&self) -> Result<Balance, Error> {
        self.read(|runtime| runtime.total_issuance())
    }

    pub fn get_escrow(&self, escrow_id: EscrowId) -> Result<Option<state::Escrow>, Error> {
        self.read(|runtime| runtime.get_escrow(escrow_id))
    }

    pub fn get_escrow_by_context(
        &self,
        context_id: ContextId,
        context_type: ContextType,
    ) -> Result<Option<state::Escrow>, Error> {
        self.read(|runtime| runtime.get_escrow_by_context(context_id, context_type))
    }

    pub fn escrow_count(&self) -> Result<EscrowId, Error> {
        self.read(|runtime| runtime.escrow_count())
    }

    pub fn is_escrow_active(&self, escrow_id: EscrowId) -> Result<bool, Error> {
        self.read(|runtime| runtime.is_escrow_active(escrow_id))
    }

    /// True if a refund submitted as the next transaction would pass the lock check.
    pub fn can_refund(&self, escrow_id: EscrowId) -> Result<bool, Error> {
        self.read(|runtime| runtime.can_refund(escrow_id))
    }

    pub fn lock_period(&self) -> Result<BlockNumber, Error> {
        self.read(|runtime| runtime.lock_period())
    }

    pub fn token_name(&self) -> Result<&'static str, Error> {
        self.read(|runtime| runtime.token_name())
    }

    pub fn token_symbol(&self) -> Result<&'static str, Error> {
        self.read(|runtime| runtime.token_symbol())
    }

    pub fn token_decimals(&self) -> Result<u8, Error> {
        self.read(|runtime| runtime.token_decimals())
    }

    pub fn total_supply(&self) -> Result<Balance, Error> {
        self.read(|runtime| runtime.total_supply())
    }

    pub fn token_balance(&self, account_id: &AccountId) -> Result<Balance, Error> {
        self.read(|runtime| runtime.token_balance(account_id))
    }

    pub fn token_balances_sum(&self) -> Result<Balance, Error> {
        self.read(|runtime| runtime.token_balances_sum())
    }

    pub fn token_uri(&self) -> Result<TokenUri, Error> {
        self.read(|runtime| runtime.token_uri())
    }

    pub fn get_profile(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<state::DeveloperProfile>, Error> {
        self.read(|runtime| runtime.get_profile(account_id))
    }

    pub fn profile_count(&self) -> Result<u64, Error> {
        self.read(|runtime| runtime.profile_count())
    }

    pub fn get_skill(
        &self,
        account_id: &AccountId,
        index: SkillIndex,
    ) -> Result<Option<Skill>, Error> {
        self.read(|runtime| runtime.get_skill(account_id, index))
    }

    pub fn skill_count(&self, account_id: &AccountId) -> Result<SkillIndex, Error> {
        self.read(|runtime| runtime.skill_count(account_id))
    }

    pub fn get_grant(&self, grant_id: GrantId) -> Result<Option<state::Grant>, Error> {
        self.read(|runtime| runtime.get_grant(grant_id))
    }

    pub fn grant_count(&self) -> Result<GrantId, Error> {
        self.read(|runtime| runtime.grant_count())
    }

    pub fn get_grant_application(
        &self,
        grant_id: GrantId,
        developer: &AccountId,
    ) -> Result<Option<state::GrantApplication>, Error> {
        self.read(|runtime| runtime.get_grant_application(grant_id, developer))
    }

    pub fn get_bounty(&self, bounty_id: BountyId) -> Result<Option<state::Bounty>, Error> {
        self.read(|runtime| runtime.get_bounty(bounty_id))
    }

    pub fn bounty_count(&self) -> Result<BountyId, Error> {
        self.read(|runtime| runtime.bounty_count())
    }

    /// True if the subscription is still active in the block of the next transaction.
    pub fn is_premium(&self, account_id: &AccountId) -> Result<bool, Error> {
        self.read(|runtime| runtime.is_premium(account_id))
    }

    pub fn premium_expiry(&self, account_id: &AccountId) -> Result<BlockNumber, Error> {
        self.read(|runtime| runtime.premium_expiry(account_id))
    }

    pub fn get_proposal(
        &self,
        proposal_id: ProposalId,
    ) -> Result<Option<state::Proposal>, Error> {
        self.read(|runtime| runtime.get_proposal(proposal_id))
    }

    pub fn proposal_count(&self) -> Result<ProposalId, Error> {
        self.read(|runtime| runtime.proposal_count())
    }

    pub fn has_voted(
        &self,
        proposal_id: ProposalId,
        account_id: &AccountId,
    ) -> Result<bool, Error> {
        self.read(|runtime| runtime.has_voted(proposal_id, account_id))
    }
}
