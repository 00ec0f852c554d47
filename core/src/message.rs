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

//! Transaction related types used in the DevFunding Registry.
//!
//! Every message is authored by the account that submits the transaction. Authorization rules
//! are enforced by the runtime.

use crate::{
    AccountId, Balance, BlockNumber, BountyId, ContextId, ContextType, EscrowId, GithubHandle,
    GrantDescription, GrantId, GrantRequirements, Memo, PortfolioUrl, ProposalDescription,
    ProposalId, Skill, TokenUri,
};
use parity_scale_codec::{Decode, Encode};

/// Transfer native currency from the author to `recipient`.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct Transfer {
    pub recipient: AccountId,
    pub balance: Balance,
}

/// Lock `amount` of the author's native currency for `beneficiary`.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct CreateEscrow {
    pub beneficiary: AccountId,
    pub context_id: ContextId,
    pub context_type: ContextType,
    pub amount: Balance,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct ReleaseEscrow {
    pub escrow_id: EscrowId,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct DisputeEscrow {
    pub escrow_id: EscrowId,
}

/// Settle a disputed escrow. Only the registry owner may resolve disputes.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct ResolveDispute {
    pub escrow_id: EscrowId,
    /// Pay the beneficiary if true, refund the depositor otherwise.
    pub favor_beneficiary: bool,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct RefundEscrow {
    pub escrow_id: EscrowId,
}

/// Set the lock period, in blocks, applied to escrows created afterwards.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct SetLockPeriod {
    pub period: BlockNumber,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct TransferTokens {
    pub amount: Balance,
    /// Must equal the transaction author.
    pub sender: AccountId,
    pub recipient: AccountId,
    pub memo: Option<Memo>,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct MintTokens {
    pub amount: Balance,
    pub recipient: AccountId,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct BurnTokens {
    pub amount: Balance,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct SetTokenUri {
    pub uri: TokenUri,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct CreateProfile {
    pub github_handle: GithubHandle,
    pub portfolio_url: PortfolioUrl,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct UpdateProfile {
    pub github_handle: GithubHandle,
    pub portfolio_url: PortfolioUrl,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct AddSkill {
    pub skill: Skill,
}

/// Record that the author was referred by `referrer`.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct RegisterReferral {
    pub referrer: AccountId,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct VerifyDeveloper {
    pub developer: AccountId,
}

/// Fund a new grant with `amount` of native currency.
///
/// Platform and referral fees are deducted from `amount`. The remainder is held in custody
/// until the selected developer claims it.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct CreateGrant {
    pub amount: Balance,
    pub description: GrantDescription,
    pub requirements: GrantRequirements,
    pub duration_days: u32,
    pub referrer: Option<AccountId>,
}

/// Same as [CreateGrant] but requires an active premium subscription and marks the grant as
/// highlighted.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct CreateHighlightedGrant {
    pub amount: Balance,
    pub description: GrantDescription,
    pub requirements: GrantRequirements,
    pub duration_days: u32,
    pub referrer: Option<AccountId>,
}

impl From<CreateHighlightedGrant> for CreateGrant {
    fn from(message: CreateHighlightedGrant) -> Self {
        CreateGrant {
            amount: message.amount,
            description: message.description,
            requirements: message.requirements,
            duration_days: message.duration_days,
            referrer: message.referrer,
        }
    }
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct ApplyForGrant {
    pub grant_id: GrantId,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct SelectDeveloper {
    pub grant_id: GrantId,
    pub developer: AccountId,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct ClaimGrant {
    pub grant_id: GrantId,
}

/// Post a bounty and put `amount` into escrow custody.
///
/// No fees are charged. The bounty stays open for `duration_days`.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct CreateBounty {
    pub amount: Balance,
    pub description: GrantDescription,
    pub requirements: GrantRequirements,
    pub duration_days: u32,
}

/// Award an open bounty to `hunter`.
///
/// The bounty amount becomes an escrow with the creator as depositor and the hunter as
/// beneficiary. The escrow is bound to the `(bounty_id, ContextType::Bounty)` context.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct AwardBounty {
    pub bounty_id: BountyId,
    pub hunter: AccountId,
}

/// Withdraw an open bounty and pay its amount back to the creator.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct CancelBounty {
    pub bounty_id: BountyId,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct PurchasePremium {
    pub months: u32,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct ProposeImprovement {
    pub description: ProposalDescription,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct VoteOnProposal {
    pub proposal_id: ProposalId,
    pub support: bool,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct CloseProposal {
    pub proposal_id: ProposalId,
}
