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

//! The calls a transaction can dispatch.

use codec::{Decode, Encode};

use crate::{currency, directory, escrow, governance, premium, registry, token};
use crate::{message, AccountId, Event, Origin, RegistryError, Store};

/// Declares [Call] with one variant per message and routes every variant to its handler.
macro_rules! decl_calls {
    ($( $variant:ident => $handler:path, )*) => {
        /// A runtime call. Wraps one of the messages in [crate::message].
        #[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
        pub enum Call {
            $( $variant(message::$variant), )*
        }

        impl Call {
            /// Name of the wrapped message.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Call::$variant(_) => stringify!($variant), )*
                }
            }

            pub(crate) fn dispatch(
                self,
                store: &mut Store,
                origin: &Origin,
            ) -> Result<Event, RegistryError> {
                match self {
                    $( Call::$variant(message) => $handler(store, origin, message), )*
                }
            }
        }

        $(
            impl From<message::$variant> for Call {
                fn from(message: message::$variant) -> Self {
                    Call::$variant(message)
                }
            }
        )*
    };
}

decl_calls! {
    Transfer => currency::transfer,

    CreateEscrow => escrow::create_escrow,
    ReleaseEscrow => escrow::release_escrow,
    DisputeEscrow => escrow::dispute_escrow,
    ResolveDispute => escrow::resolve_dispute,
    RefundEscrow => escrow::refund_escrow,
    SetLockPeriod => escrow::set_lock_period,

    TransferTokens => token::transfer_tokens,
    MintTokens => token::mint_tokens,
    BurnTokens => token::burn_tokens,
    SetTokenUri => token::set_token_uri,

    CreateProfile => directory::create_profile,
    UpdateProfile => directory::update_profile,
    AddSkill => directory::add_skill,
    RegisterReferral => directory::register_referral,
    VerifyDeveloper => directory::verify_developer,

    CreateGrant => registry::create_grant,
    CreateHighlightedGrant => registry::create_highlighted_grant,
    ApplyForGrant => registry::apply_for_grant,
    SelectDeveloper => registry::select_developer,
    ClaimGrant => registry::claim_grant,

    CreateBounty => registry::create_bounty,
    AwardBounty => registry::award_bounty,
    CancelBounty => registry::cancel_bounty,

    PurchasePremium => premium::purchase_premium,

    ProposeImprovement => governance::propose_improvement,
    VoteOnProposal => governance::vote_on_proposal,
    CloseProposal => governance::close_proposal,
}

/// A transaction as it is included in a block: the author and the call.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct Extrinsic {
    pub author: AccountId,
    pub call: Call,
}

#[cfg(test)]
mod test {
    use super::*;
    use codec::DecodeAll as _;

    #[test]
    fn extrinsic_encoding() {
        let extrinsic = Extrinsic {
            author: AccountId::from_seed("Alice"),
            call: message::ReleaseEscrow { escrow_id: 7 }.into(),
        };
        let decoded = Extrinsic::decode_all(&mut &extrinsic.encode()[..]).unwrap();
        assert_eq!(decoded, extrinsic);
        assert_eq!(decoded.call.name(), "ReleaseEscrow");
    }
}
