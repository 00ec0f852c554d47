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

//! Basic types used in the DevFunding Registry.

use parity_scale_codec::{Decode, Encode};

pub mod message;
pub mod state;

mod account_id;
pub use account_id::{AccountId, InvalidAccountIdError};

pub mod text;
pub use text::Text;

mod memo;
pub use memo::Memo;

mod error;
pub use error::{ErrorKind, RegistryError};

/// Balance of an account, both for the native currency and the utility token.
pub type Balance = u128;

/// Logical time. Every applied transaction is included in a new block.
pub type BlockNumber = u64;

pub type EscrowId = u64;

pub type GrantId = u64;

pub type BountyId = u64;

pub type ProposalId = u64;

/// Opaque identifier of the work item an escrow is bound to.
pub type ContextId = u64;

/// Position of a skill in the skill list of a developer.
pub type SkillIndex = u32;

pub type GithubHandle = Text<64>;

pub type PortfolioUrl = Text<256>;

pub type Skill = Text<64>;

pub type GrantDescription = Text<512>;

pub type GrantRequirements = Text<1024>;

pub type ProposalDescription = Text<512>;

pub type TokenUri = Text<256>;

/// The kind of work item an escrow funds.
///
/// Together with a [ContextId] it forms the escrow context. There is at most one escrow per
/// context.
#[derive(Decode, Encode, Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ContextType {
    Grant,
    Bounty,
}
