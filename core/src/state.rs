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

//! Type definitions for all entities stored in the ledger state.
//!
//! Records are never removed from the state. Terminal states are expressed with flags.

use parity_scale_codec::{Decode, Encode};

use crate::{
    AccountId, Balance, BlockNumber, ContextId, ContextType, EscrowId, GithubHandle,
    GrantDescription, GrantRequirements, PortfolioUrl, ProposalDescription, RegistryError,
};

/// Funds held in custody on behalf of a depositor until they are released to the beneficiary
/// or refunded.
///
/// # Storage
///
/// Escrows are stored as a map keyed by a sequential [crate::EscrowId]. A second map from
/// `(ContextId, ContextType)` to the escrow id indexes escrows by their context.
///
/// # Invariants
///
/// * At most one of `is_released` and `is_refunded` is set and once set it never changes.
/// * `is_disputed` is only ever set while neither `is_released` nor `is_refunded` is set.
/// * `amount` is positive and `depositor` differs from `beneficiary`.
/// * While the escrow is neither released nor refunded, `amount` is held by the escrow custody
///   account.
///
/// # Relevant messages
///
/// * [crate::message::CreateEscrow]
/// * [crate::message::ReleaseEscrow]
/// * [crate::message::DisputeEscrow]
/// * [crate::message::ResolveDispute]
/// * [crate::message::RefundEscrow]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct Escrow {
    pub depositor: AccountId,
    pub beneficiary: AccountId,
    pub amount: Balance,
    pub context_id: ContextId,
    pub context_type: ContextType,
    pub created_at: BlockNumber,
    /// Block from which on the depositor may refund the escrow.
    pub release_after: BlockNumber,
    pub is_released: bool,
    pub is_disputed: bool,
    pub is_refunded: bool,
}

/// Lifecycle state of an [Escrow] derived from its flags.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EscrowStatus {
    Active,
    Disputed,
    Released,
    Refunded,
}

impl Escrow {
    pub fn status(&self) -> EscrowStatus {
        if self.is_released {
            EscrowStatus::Released
        } else if self.is_refunded {
            EscrowStatus::Refunded
        } else if self.is_disputed {
            EscrowStatus::Disputed
        } else {
            EscrowStatus::Active
        }
    }

    /// True if the escrow is neither released, refunded nor disputed.
    pub fn is_active(&self) -> bool {
        self.status() == EscrowStatus::Active
    }

    /// Marks the escrow as released and clears the dispute flag.
    pub fn release(mut self) -> Self {
        self.is_released = true;
        self.is_disputed = false;
        self
    }

    /// Marks the escrow as refunded and clears the dispute flag.
    pub fn refund(mut self) -> Self {
        self.is_refunded = true;
        self.is_disputed = false;
        self
    }

    pub fn dispute(mut self) -> Self {
        self.is_disputed = true;
        self
    }
}

/// A funded work item that developers apply for.
///
/// # Storage
///
/// Grants are stored as a map keyed by a sequential [crate::GrantId].
///
/// # Invariants
///
/// * `amount` is the net amount after fees and is held by the registry custody account until
///   the grant is claimed.
/// * `selected_dev` is set at most once and refers to an applicant.
/// * `is_claimed` implies `!is_active`.
///
/// # Relevant messages
///
/// * [crate::message::CreateGrant]
/// * [crate::message::CreateHighlightedGrant]
/// * [crate::message::SelectDeveloper]
/// * [crate::message::ClaimGrant]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct Grant {
    pub creator: AccountId,
    /// Amount paid out to the selected developer.
    pub amount: Balance,
    pub description: GrantDescription,
    pub requirements: GrantRequirements,
    /// Last block in which applications are accepted.
    pub deadline: BlockNumber,
    pub is_active: bool,
    pub applicants_count: u32,
    pub selected_dev: Option<AccountId>,
    pub is_claimed: bool,
    pub referrer: Option<AccountId>,
    pub is_highlighted: bool,
}

impl Grant {
    pub fn add_applicant(mut self) -> Result<Self, RegistryError> {
        self.applicants_count = self
            .applicants_count
            .checked_add(1)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        Ok(self)
    }

    pub fn select(mut self, developer: AccountId) -> Self {
        self.selected_dev = Some(developer);
        self
    }

    /// Marks the grant as claimed. A claimed grant is no longer active.
    pub fn claim(mut self) -> Self {
        self.is_claimed = true;
        self.is_active = false;
        self
    }
}

/// Application of a developer for a [Grant].
///
/// # Storage
///
/// Applications are stored as a map keyed by `(GrantId, AccountId)`.
///
/// # Relevant messages
///
/// * [crate::message::ApplyForGrant]
/// * [crate::message::SelectDeveloper]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct GrantApplication {
    pub applied_at: BlockNumber,
    pub is_selected: bool,
}

/// A bounty posted by a developer. Its amount is paid out through the escrow ledger.
///
/// # Storage
///
/// Bounties are stored as a map keyed by a sequential [crate::BountyId].
///
/// # Invariants
///
/// * While the bounty is active, `amount` is held by the escrow custody account.
/// * `hunter` and `escrow_id` are set together when the bounty is awarded and never change.
/// * An inactive bounty without a hunter has been cancelled.
///
/// # Relevant messages
///
/// * [crate::message::CreateBounty]
/// * [crate::message::AwardBounty]
/// * [crate::message::CancelBounty]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct Bounty {
    pub creator: AccountId,
    pub amount: Balance,
    pub description: GrantDescription,
    pub requirements: GrantRequirements,
    /// Last block in which the bounty can be awarded.
    pub deadline: BlockNumber,
    pub is_active: bool,
    pub hunter: Option<AccountId>,
    /// Escrow that pays the hunter.
    pub escrow_id: Option<EscrowId>,
}

impl Bounty {
    pub fn award(mut self, hunter: AccountId, escrow_id: EscrowId) -> Self {
        self.hunter = Some(hunter);
        self.escrow_id = Some(escrow_id);
        self.is_active = false;
        self
    }

    pub fn cancel(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Public profile of a developer.
///
/// # Storage
///
/// Profiles are stored as a map keyed by the owning [crate::AccountId]. Skills are stored
/// separately as a map keyed by `(AccountId, SkillIndex)` with a per account skill counter.
///
/// # Invariants
///
/// * `referred_by` is set at most once and never to the profile owner.
/// * Counters only ever increase.
///
/// # Relevant messages
///
/// * [crate::message::CreateProfile]
/// * [crate::message::UpdateProfile]
/// * [crate::message::AddSkill]
/// * [crate::message::RegisterReferral]
/// * [crate::message::VerifyDeveloper]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct DeveloperProfile {
    pub github_handle: GithubHandle,
    pub portfolio_url: PortfolioUrl,
    pub reputation: u32,
    pub completed_grants: u32,
    pub is_verified: bool,
    pub referral_count: u32,
    /// Referral fees earned from grants created with this developer as referrer.
    pub referral_earnings: Balance,
    pub referred_by: Option<AccountId>,
    pub grants_created: u32,
    pub grants_claimed: u32,
}

impl DeveloperProfile {
    /// Creates a fresh profile with all counters set to zero.
    pub fn new(github_handle: GithubHandle, portfolio_url: PortfolioUrl) -> Self {
        DeveloperProfile {
            github_handle,
            portfolio_url,
            reputation: 0,
            completed_grants: 0,
            is_verified: false,
            referral_count: 0,
            referral_earnings: 0,
            referred_by: None,
            grants_created: 0,
            grants_claimed: 0,
        }
    }
}

/// # Storage
///
/// Subscriptions are stored as a map keyed by the subscriber [crate::AccountId].
///
/// # Relevant messages
///
/// * [crate::message::PurchasePremium]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct PremiumSubscription {
    /// First block in which the subscription is no longer active.
    pub expiry: BlockNumber,
}

impl PremiumSubscription {
    pub fn is_active_at(&self, block: BlockNumber) -> bool {
        block < self.expiry
    }
}

/// A platform improvement proposal that accounts vote on.
///
/// # Storage
///
/// Proposals are stored as a map keyed by a sequential [crate::ProposalId]. Votes are recorded
/// in a map keyed by `(ProposalId, AccountId)`.
///
/// # Relevant messages
///
/// * [crate::message::ProposeImprovement]
/// * [crate::message::VoteOnProposal]
/// * [crate::message::CloseProposal]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub proposer: AccountId,
    pub description: ProposalDescription,
    pub yes_votes: u32,
    pub no_votes: u32,
    pub is_active: bool,
    pub created_at: BlockNumber,
}

#[cfg(test)]
mod test {
    use super::*;
    use core::convert::TryFrom;

    fn escrow() -> Escrow {
        Escrow {
            depositor: AccountId::from_seed("Alice"),
            beneficiary: AccountId::from_seed("Bob"),
            amount: 100,
            context_id: 1,
            context_type: ContextType::Grant,
            created_at: 1,
            release_after: 1009,
            is_released: false,
            is_disputed: false,
            is_refunded: false,
        }
    }

    #[test]
    fn escrow_status() {
        let escrow = escrow();
        assert_eq!(escrow.status(), EscrowStatus::Active);
        assert!(escrow.is_active());

        let disputed = escrow.clone().dispute();
        assert_eq!(disputed.status(), EscrowStatus::Disputed);
        assert!(!disputed.is_active());

        let released = disputed.clone().release();
        assert_eq!(released.status(), EscrowStatus::Released);
        assert!(!released.is_disputed);

        let refunded = disputed.refund();
        assert_eq!(refunded.status(), EscrowStatus::Refunded);
        assert!(!refunded.is_disputed);
    }

    fn grant() -> Grant {
        Grant {
            creator: AccountId::from_seed("Alice"),
            amount: 975_000,
            description: GrantDescription::try_from("Build a parser").unwrap(),
            requirements: GrantRequirements::try_from("Rust").unwrap(),
            deadline: 100,
            is_active: true,
            applicants_count: 0,
            selected_dev: None,
            is_claimed: false,
            referrer: None,
            is_highlighted: false,
        }
    }

    #[test]
    fn claim_deactivates_grant() {
        let claimed = grant()
            .add_applicant()
            .unwrap()
            .select(AccountId::from_seed("Bob"))
            .claim();
        assert!(claimed.is_claimed);
        assert!(!claimed.is_active);
        assert_eq!(claimed.applicants_count, 1);
    }

    #[test]
    fn award_bounty() {
        let bounty = Bounty {
            creator: AccountId::from_seed("Alice"),
            amount: 1_000_000,
            description: GrantDescription::try_from("Fix authentication bug").unwrap(),
            requirements: GrantRequirements::try_from("Token refresh").unwrap(),
            deadline: 1008,
            is_active: true,
            hunter: None,
            escrow_id: None,
        };

        let cancelled = bounty.clone().cancel();
        assert!(!cancelled.is_active);
        assert_eq!(cancelled.hunter, None);

        let awarded = bounty.award(AccountId::from_seed("Bob"), 3);
        assert!(!awarded.is_active);
        assert_eq!(awarded.hunter, Some(AccountId::from_seed("Bob")));
        assert_eq!(awarded.escrow_id, Some(3));
    }

    #[test]
    fn applicant_count_overflow() {
        let grant = Grant {
            applicants_count: u32::max_value(),
            ..grant()
        };
        assert_eq!(
            grant.add_applicant(),
            Err(RegistryError::ArithmeticOverflow)
        );
    }
}
