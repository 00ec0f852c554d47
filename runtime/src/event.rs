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

//! Events emitted when transactions are applied.
//!
//! Every applied transaction emits either [System::ExtrinsicSuccess], preceded by the event of
//! the call, or [System::ExtrinsicFailed] carrying the error.

use codec::{Decode, Encode};

use crate::{
    AccountId, Balance, BlockNumber, BountyId, EscrowId, GrantId, Memo, ProposalId,
    RegistryError, SkillIndex, TokenUri,
};

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    System(System),
    Balances(Balances),
    Registry(Registry),
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum System {
    ExtrinsicSuccess,
    ExtrinsicFailed(RegistryError),
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Balances {
    /// Sender, recipient and amount of a native currency transfer.
    Transfer(AccountId, AccountId, Balance),
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Registry {
    /// Escrow id, depositor, beneficiary and amount.
    EscrowCreated(EscrowId, AccountId, AccountId, Balance),
    /// Escrow id, beneficiary and the amount paid to them.
    EscrowReleased(EscrowId, AccountId, Balance),
    /// Escrow id and the account that raised the dispute.
    EscrowDisputed(EscrowId, AccountId),
    /// Escrow id and whether the dispute was settled in favor of the beneficiary.
    DisputeResolved(EscrowId, bool),
    /// Escrow id, depositor and the amount paid back to them.
    EscrowRefunded(EscrowId, AccountId, Balance),
    LockPeriodSet(BlockNumber),

    /// Sender, recipient, amount and memo.
    TokensTransferred(AccountId, AccountId, Balance, Option<Memo>),
    TokensMinted(AccountId, Balance),
    TokensBurned(AccountId, Balance),
    TokenUriSet(TokenUri),

    ProfileCreated(AccountId),
    ProfileUpdated(AccountId),
    SkillAdded(AccountId, SkillIndex),
    /// Referee and referrer.
    ReferralRegistered(AccountId, AccountId),
    DeveloperVerified(AccountId),

    /// Grant id, creator and net amount.
    GrantCreated(GrantId, AccountId, Balance),
    GrantApplied(GrantId, AccountId),
    DeveloperSelected(GrantId, AccountId),
    /// Grant id, developer and the amount paid to them.
    GrantClaimed(GrantId, AccountId, Balance),

    /// Bounty id, creator and the amount put into escrow custody.
    BountyCreated(BountyId, AccountId, Balance),
    /// Bounty id, hunter and the escrow that pays the hunter.
    BountyAwarded(BountyId, AccountId, EscrowId),
    /// Bounty id, creator and the amount paid back to them.
    BountyCancelled(BountyId, AccountId, Balance),

    /// Subscriber and the new expiry.
    PremiumPurchased(AccountId, BlockNumber),

    ProposalCreated(ProposalId, AccountId),
    /// Proposal id, voter and whether the vote supports the proposal.
    VoteCast(ProposalId, AccountId, bool),
    ProposalClosed(ProposalId),
}

impl From<System> for Event {
    fn from(event: System) -> Self {
        Event::System(event)
    }
}

impl From<Balances> for Event {
    fn from(event: Balances) -> Self {
        Event::Balances(event)
    }
}

impl From<Registry> for Event {
    fn from(event: Registry) -> Self {
        Event::Registry(event)
    }
}

impl Event {
    /// Extracts the transaction result from the event.
    ///
    /// If the event is either [System::ExtrinsicSuccess] or [System::ExtrinsicFailed] it returns
    /// `Ok` or the `Err`, respectively. If the event is neither of those it returns `None`.
    pub fn extrinsic_result(&self) -> Option<Result<(), RegistryError>> {
        match self {
            Event::System(System::ExtrinsicSuccess) => Some(Ok(())),
            Event::System(System::ExtrinsicFailed(error)) => Some(Err(*error)),
            _ => None,
        }
    }

    /// Returns the inner registry event if the event is a registry event.
    pub fn registry(&self) -> Option<&Registry> {
        match self {
            Event::Registry(event) => Some(event),
            _ => None,
        }
    }
}
