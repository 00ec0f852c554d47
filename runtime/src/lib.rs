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

//! State transition logic of the DevFunding Registry.
//!
//! [Runtime] owns the ledger [Store] and applies encoded [Extrinsic]s. Every call is dispatched
//! against the pending overlay of the store. The overlay is committed if the call succeeds and
//! discarded otherwise, so a failed call leaves the ledger unchanged.

pub use devfunding_registry_core::*;

use codec::DecodeAll as _;

/// Return early with the given error if the condition does not hold.
macro_rules! ensure {
    ($cond:expr, $error:expr $(,)?) => {
        if !$cond {
            return Err($error.into());
        }
    };
}

pub mod call;
pub mod event;
pub mod fees;
pub mod genesis;
pub mod storage;

mod currency;
mod directory;
mod escrow;
mod governance;
mod guard;
mod premium;
mod registry;
mod token;

pub use call::{Call, Extrinsic};
pub use event::Event;
pub use genesis::GenesisConfig;
pub use storage::{Store, Transactional};

pub use escrow::{custody_account as escrow_account, DEFAULT_LOCK_PERIOD};
pub use premium::{BLOCKS_PER_MONTH, PREMIUM_FEE_PER_MONTH};
pub use registry::{custody_account as grants_account, REPUTATION_PER_CLAIM};
pub use token::{
    DEFAULT_TOKEN_URI, INITIAL_SUPPLY, MAX_SUPPLY, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL,
};

use state::{Bounty, DeveloperProfile, Escrow, Grant, GrantApplication, Proposal};

/// Number of blocks produced per day. Used to convert day durations into block numbers.
pub const BLOCKS_PER_DAY: BlockNumber = 144;

/// Context a call is dispatched in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Origin {
    /// Account that authored the transaction.
    pub author: AccountId,
    /// Number of the block the transaction is included in.
    pub block_number: BlockNumber,
}

#[derive(Clone, Debug)]
pub struct Runtime {
    store: Store,
    block_number: BlockNumber,
}

impl Runtime {
    /// Creates a runtime at block zero with the state described by `genesis`.
    pub fn new(genesis: &GenesisConfig) -> Self {
        Runtime {
            store: genesis.build(),
            block_number: 0,
        }
    }

    /// Number of the last block that was initialized.
    pub fn block_number(&self) -> BlockNumber {
        self.block_number
    }

    /// Number of the block the next transaction is included in.
    ///
    /// Predicates that depend on the block number are evaluated against this block so that they
    /// agree with the outcome of a transaction submitted right after the read.
    pub fn next_block_number(&self) -> BlockNumber {
        self.block_number.saturating_add(1)
    }

    /// Starts a new block. Block numbers never decrease.
    pub fn initialize_block(&mut self, number: BlockNumber) {
        if number < self.block_number {
            log::warn!(
                "ignoring block {} that precedes the current block {}",
                number,
                self.block_number
            );
            return;
        }
        self.block_number = number;
    }

    /// Decodes an [Extrinsic] and dispatches it in the current block.
    ///
    /// Returns an error only if the data cannot be decoded. The result of the call is reported
    /// through the returned events.
    pub fn apply_extrinsic(&mut self, data: &[u8]) -> Result<Vec<Event>, codec::Error> {
        let Extrinsic { author, call } = Extrinsic::decode_all(&mut &data[..])?;
        Ok(self.dispatch(author, call))
    }

    /// Dispatches `call` authored by `author` in the current block.
    ///
    /// On success the call's event is followed by [event::System::ExtrinsicSuccess]. On failure
    /// the only event is [event::System::ExtrinsicFailed].
    pub fn dispatch(&mut self, author: AccountId, call: Call) -> Vec<Event> {
        let origin = Origin {
            author,
            block_number: self.block_number,
        };
        let call_name = call.name();
        match call.dispatch(&mut self.store, &origin) {
            Ok(event) => {
                self.store.commit();
                log::debug!(
                    "block {}: {} applied by {}",
                    origin.block_number,
                    call_name,
                    author
                );
                vec![event, Event::System(event::System::ExtrinsicSuccess)]
            }
            Err(error) => {
                self.store.rollback();
                log::warn!(
                    "block {}: {} by {} failed: {}",
                    origin.block_number,
                    call_name,
                    author,
                    error
                );
                vec![Event::System(event::System::ExtrinsicFailed(error))]
            }
        }
    }

    pub fn owner(&self) -> AccountId {
        self.store.owner.get()
    }

    pub fn free_balance(&self, account: &AccountId) -> Balance {
        currency::free_balance(&self.store, account)
    }

    /// Sum of all native currency balances.
    pub fn total_issuance(&self) -> Balance {
        self.store
            .balances
            .iter_committed()
            .fold(0, |sum: Balance, (_, balance)| sum.saturating_add(*balance))
    }

    pub fn get_escrow(&self, escrow_id: EscrowId) -> Option<Escrow> {
        self.store.escrows.get(&escrow_id)
    }

    pub fn get_escrow_by_context(
        &self,
        context_id: ContextId,
        context_type: ContextType,
    ) -> Option<Escrow> {
        escrow::get_escrow_by_context(&self.store, context_id, context_type)
    }

    pub fn escrow_count(&self) -> EscrowId {
        self.store.escrow_count.get()
    }

    /// True if the escrow exists and is neither released, refunded nor disputed.
    pub fn is_escrow_active(&self, escrow_id: EscrowId) -> bool {
        self.get_escrow(escrow_id)
            .map(|escrow| escrow.is_active())
            .unwrap_or(false)
    }

    /// True if the depositor could refund the escrow in the next block.
    pub fn can_refund(&self, escrow_id: EscrowId) -> bool {
        self.get_escrow(escrow_id)
            .map(|escrow| escrow::can_refund(&escrow, self.next_block_number()))
            .unwrap_or(false)
    }

    pub fn lock_period(&self) -> BlockNumber {
        self.store.lock_period.get()
    }

    pub fn token_name(&self) -> &'static str {
        TOKEN_NAME
    }

    pub fn token_symbol(&self) -> &'static str {
        TOKEN_SYMBOL
    }

    pub fn token_decimals(&self) -> u8 {
        TOKEN_DECIMALS
    }

    pub fn total_supply(&self) -> Balance {
        self.store.total_supply.get()
    }

    pub fn token_balance(&self, account: &AccountId) -> Balance {
        token::balance_of(&self.store, account)
    }

    /// Sum of all token balances. Equals [Runtime::total_supply].
    pub fn token_balances_sum(&self) -> Balance {
        self.store
            .token_balances
            .iter_committed()
            .fold(0, |sum: Balance, (_, balance)| sum.saturating_add(*balance))
    }

    pub fn token_uri(&self) -> TokenUri {
        self.store.token_uri.get()
    }

    pub fn get_profile(&self, account: &AccountId) -> Option<DeveloperProfile> {
        self.store.profiles.get(account)
    }

    /// Number of developer profiles created so far.
    pub fn profile_count(&self) -> u64 {
        self.store.profile_count.get()
    }

    pub fn get_skill(&self, account: &AccountId, index: SkillIndex) -> Option<Skill> {
        self.store.skills.get(&(*account, index))
    }

    pub fn skill_count(&self, account: &AccountId) -> SkillIndex {
        self.store.skill_counts.get(account).unwrap_or(0)
    }

    pub fn get_grant(&self, grant_id: GrantId) -> Option<Grant> {
        self.store.grants.get(&grant_id)
    }

    pub fn grant_count(&self) -> GrantId {
        self.store.grant_count.get()
    }

    pub fn get_grant_application(
        &self,
        grant_id: GrantId,
        developer: &AccountId,
    ) -> Option<GrantApplication> {
        self.store.applications.get(&(grant_id, *developer))
    }

    pub fn get_bounty(&self, bounty_id: BountyId) -> Option<Bounty> {
        self.store.bounties.get(&bounty_id)
    }

    pub fn bounty_count(&self) -> BountyId {
        self.store.bounty_count.get()
    }

    /// True if the account holds a subscription that is still active in the next block.
    pub fn is_premium(&self, account: &AccountId) -> bool {
        premium::is_premium(&self.store, account, self.next_block_number())
    }

    /// First block in which the subscription of the account is no longer active. Zero if the
    /// account never subscribed.
    pub fn premium_expiry(&self, account: &AccountId) -> BlockNumber {
        premium::expiry(&self.store, account)
    }

    pub fn get_proposal(&self, proposal_id: ProposalId) -> Option<Proposal> {
        self.store.proposals.get(&proposal_id)
    }

    pub fn proposal_count(&self) -> ProposalId {
        self.store.proposal_count.get()
    }

    pub fn has_voted(&self, proposal_id: ProposalId, account: &AccountId) -> bool {
        self.store.votes.contains_key(&(proposal_id, *account))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use codec::Encode as _;

    fn alice() -> AccountId {
        AccountId::from_seed("Alice")
    }

    fn transfer(recipient: AccountId, balance: Balance) -> Call {
        message::Transfer { recipient, balance }.into()
    }

    #[test]
    fn dispatch_commits_on_success() {
        let mut runtime = Runtime::new(&GenesisConfig::dev());
        let bob = AccountId::from_seed("Bob");
        let initial_balance = runtime.free_balance(&alice());

        let events = runtime.dispatch(alice(), transfer(bob, 10));

        assert_eq!(
            events,
            vec![
                Event::Balances(event::Balances::Transfer(alice(), bob, 10)),
                Event::System(event::System::ExtrinsicSuccess),
            ]
        );
        assert_eq!(runtime.free_balance(&alice()), initial_balance - 10);
        assert_eq!(runtime.free_balance(&bob), initial_balance + 10);
    }

    #[test]
    fn dispatch_rolls_back_on_failure() {
        let mut runtime = Runtime::new(&GenesisConfig::dev());
        let poor = AccountId::from_seed("Poor");
        let initial_issuance = runtime.total_issuance();

        let events = runtime.dispatch(poor, transfer(alice(), 1));

        assert_eq!(
            events,
            vec![Event::System(event::System::ExtrinsicFailed(
                RegistryError::InsufficientBalance
            ))]
        );
        assert_eq!(runtime.total_issuance(), initial_issuance);
        assert_eq!(runtime.free_balance(&poor), 0);
    }

    #[test]
    fn apply_extrinsic() {
        let mut runtime = Runtime::new(&GenesisConfig::dev());
        let extrinsic = Extrinsic {
            author: alice(),
            call: message::SetLockPeriod { period: 5 }.into(),
        };

        let events = runtime.apply_extrinsic(&extrinsic.encode()).unwrap();

        assert_eq!(
            events.last(),
            Some(&Event::System(event::System::ExtrinsicSuccess))
        );
        assert_eq!(runtime.lock_period(), 5);
        assert!(runtime.apply_extrinsic(&[0xff, 0x00, 0x01]).is_err());
    }

    #[test]
    fn module_accounts_are_not_authenticated() {
        let mut runtime = Runtime::new(&GenesisConfig::dev());
        let custody = escrow_account();
        runtime.dispatch(alice(), transfer(custody, 100));

        let events = runtime.dispatch(custody, transfer(alice(), 40));

        assert_eq!(
            events.last(),
            Some(&Event::System(event::System::ExtrinsicSuccess))
        );
        assert_eq!(runtime.free_balance(&custody), 60);
    }

    #[test]
    fn predicates_read_the_next_block() {
        let mut runtime = Runtime::new(&GenesisConfig::dev());
        runtime.initialize_block(7);

        assert_eq!(runtime.block_number(), 7);
        assert_eq!(runtime.next_block_number(), 8);

        runtime.initialize_block(BlockNumber::max_value());
        assert_eq!(runtime.next_block_number(), BlockNumber::max_value());
    }

    #[test]
    fn block_numbers_never_decrease() {
        let mut runtime = Runtime::new(&GenesisConfig::dev());

        runtime.initialize_block(10);
        runtime.initialize_block(3);

        assert_eq!(runtime.block_number(), 10);
    }
}
