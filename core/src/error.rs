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

use core::convert::TryFrom;
use parity_scale_codec::{Decode, Encode, EncodeLike, Error as CodecError, Input, Output};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u16)]
/// Errors describing failed Registry transactions.
///
/// Codes in the 1xx range belong to the grant registry, the developer directory, premium
/// subscriptions and governance. 2xx codes belong to the escrow ledger and 3xx codes to the
/// fungible token.
pub enum RegistryError {
    Unauthorized = 100,
    InexistentGrant = 101,
    InexistentProfile = 102,
    InexistentApplication = 103,
    InexistentProposal = 104,
    GrantInactive = 105,
    GrantClaimed = 106,
    DeveloperAlreadySelected = 107,
    DeadlinePassed = 108,
    NoDeveloperSelected = 109,
    DuplicateApplication = 110,
    InsufficientBalance = 111,
    DuplicateProfile = 112,
    SelfReferral = 113,
    ReferralAlreadyRegistered = 114,
    PremiumRequired = 115,
    ProposalClosed = 116,
    AlreadyVoted = 117,
    InexistentBounty = 118,
    BountyInactive = 119,
    InvalidAmount = 121,
    EmptyString = 124,
    ArithmeticOverflow = 125,

    EscrowUnauthorized = 200,
    InexistentEscrow = 201,
    AlreadyReleased = 202,
    AlreadyRefunded = 203,
    EscrowDisputed = 204,
    EscrowNotDisputed = 205,
    LockActive = 206,
    InvalidEscrowAmount = 207,
    AlreadyDisputed = 208,
    SelfEscrow = 209,
    DuplicateEscrowContext = 210,

    TokenUnauthorized = 300,
    InvalidTokenAmount = 301,
    MaxSupplyExceeded = 302,
    NotTokenOwner = 303,
    InsufficientTokenBalance = 304,
    EmptyTokenUri = 305,
}

/// Coarse classification of [RegistryError]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    NotAuthorized,
    NotFound,
    AlreadyExists,
    InvalidAmount,
    InvalidState,
    DeadlinePassed,
    LockActive,
    SelfReference,
    SupplyExceeded,
    EmptyInput,
}

const ALL_ERRORS: [RegistryError; 40] = [
    RegistryError::Unauthorized,
    RegistryError::InexistentGrant,
    RegistryError::InexistentProfile,
    RegistryError::InexistentApplication,
    RegistryError::InexistentProposal,
    RegistryError::GrantInactive,
    RegistryError::GrantClaimed,
    RegistryError::DeveloperAlreadySelected,
    RegistryError::DeadlinePassed,
    RegistryError::NoDeveloperSelected,
    RegistryError::DuplicateApplication,
    RegistryError::InsufficientBalance,
    RegistryError::DuplicateProfile,
    RegistryError::SelfReferral,
    RegistryError::ReferralAlreadyRegistered,
    RegistryError::PremiumRequired,
    RegistryError::ProposalClosed,
    RegistryError::AlreadyVoted,
    RegistryError::InexistentBounty,
    RegistryError::BountyInactive,
    RegistryError::InvalidAmount,
    RegistryError::EmptyString,
    RegistryError::ArithmeticOverflow,
    RegistryError::EscrowUnauthorized,
    RegistryError::InexistentEscrow,
    RegistryError::AlreadyReleased,
    RegistryError::AlreadyRefunded,
    RegistryError::EscrowDisputed,
    RegistryError::EscrowNotDisputed,
    RegistryError::LockActive,
    RegistryError::InvalidEscrowAmount,
    RegistryError::AlreadyDisputed,
    RegistryError::SelfEscrow,
    RegistryError::DuplicateEscrowContext,
    RegistryError::TokenUnauthorized,
    RegistryError::InvalidTokenAmount,
    RegistryError::MaxSupplyExceeded,
    RegistryError::NotTokenOwner,
    RegistryError::InsufficientTokenBalance,
    RegistryError::EmptyTokenUri,
];

impl RegistryError {
    /// Numeric code of the error. Stable across releases.
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn kind(self) -> ErrorKind {
        use RegistryError::*;
        match self {
            Unauthorized | EscrowUnauthorized | TokenUnauthorized | NotTokenOwner => {
                ErrorKind::NotAuthorized
            }
            InexistentGrant | InexistentProfile | InexistentApplication | InexistentProposal
            | InexistentBounty | InexistentEscrow => ErrorKind::NotFound,
            DuplicateApplication | DuplicateProfile | ReferralAlreadyRegistered | AlreadyVoted
            | DuplicateEscrowContext => ErrorKind::AlreadyExists,
            InsufficientBalance | InvalidAmount | ArithmeticOverflow | InvalidEscrowAmount
            | InvalidTokenAmount | InsufficientTokenBalance => ErrorKind::InvalidAmount,
            GrantInactive | GrantClaimed | DeveloperAlreadySelected | NoDeveloperSelected
            | PremiumRequired | ProposalClosed | BountyInactive | AlreadyReleased
            | AlreadyRefunded | EscrowDisputed | EscrowNotDisputed | AlreadyDisputed => {
                ErrorKind::InvalidState
            }
            DeadlinePassed => ErrorKind::DeadlinePassed,
            LockActive => ErrorKind::LockActive,
            SelfReferral | SelfEscrow => ErrorKind::SelfReference,
            MaxSupplyExceeded => ErrorKind::SupplyExceeded,
            EmptyString | EmptyTokenUri => ErrorKind::EmptyInput,
        }
    }
}

impl From<RegistryError> for &'static str {
    fn from(error: RegistryError) -> &'static str {
        match error {
            RegistryError::Unauthorized => "The sender is not allowed to perform this action.",
            RegistryError::InexistentGrant => "The provided grant does not exist.",
            RegistryError::InexistentProfile => "The account has no developer profile.",
            RegistryError::InexistentApplication => {
                "The developer has not applied for the provided grant."
            }
            RegistryError::InexistentProposal => "The provided proposal does not exist.",
            RegistryError::GrantInactive => "The grant is no longer active.",
            RegistryError::GrantClaimed => "The grant has already been claimed.",
            RegistryError::DeveloperAlreadySelected => {
                "A developer has already been selected for the grant."
            }
            RegistryError::DeadlinePassed => "The grant deadline has passed.",
            RegistryError::NoDeveloperSelected => "No developer has been selected for the grant.",
            RegistryError::DuplicateApplication => "The developer already applied for the grant.",
            RegistryError::InsufficientBalance => "The sender balance is insufficient.",
            RegistryError::DuplicateProfile => "The account already has a developer profile.",
            RegistryError::SelfReferral => "An account cannot refer itself.",
            RegistryError::ReferralAlreadyRegistered => "The account has already been referred.",
            RegistryError::PremiumRequired => "An active premium subscription is required.",
            RegistryError::ProposalClosed => "The proposal is closed.",
            RegistryError::AlreadyVoted => "The account already voted on the proposal.",
            RegistryError::InexistentBounty => "The provided bounty does not exist.",
            RegistryError::BountyInactive => "The bounty has been awarded or cancelled.",
            RegistryError::InvalidAmount => "The provided amount is invalid.",
            RegistryError::EmptyString => "The provided text must not be empty.",
            RegistryError::ArithmeticOverflow => "The operation overflows a balance or counter.",
            RegistryError::EscrowUnauthorized => "The sender is not allowed to act on the escrow.",
            RegistryError::InexistentEscrow => "The provided escrow does not exist.",
            RegistryError::AlreadyReleased => "The escrow has already been released.",
            RegistryError::AlreadyRefunded => "The escrow has already been refunded.",
            RegistryError::EscrowDisputed => "The escrow is under dispute.",
            RegistryError::EscrowNotDisputed => "The escrow is not under dispute.",
            RegistryError::LockActive => "The escrow lock period has not elapsed.",
            RegistryError::InvalidEscrowAmount => "The provided escrow amount is invalid.",
            RegistryError::AlreadyDisputed => "The escrow is already under dispute.",
            RegistryError::SelfEscrow => "The beneficiary must differ from the depositor.",
            RegistryError::DuplicateEscrowContext => {
                "An escrow already exists for the provided context."
            }
            RegistryError::TokenUnauthorized => "Only the token owner can perform this action.",
            RegistryError::InvalidTokenAmount => "The provided token amount is invalid.",
            RegistryError::MaxSupplyExceeded => "The token maximum supply would be exceeded.",
            RegistryError::NotTokenOwner => "The sender does not own the tokens.",
            RegistryError::InsufficientTokenBalance => "The token balance is insufficient.",
            RegistryError::EmptyTokenUri => "The token URI must not be empty.",
        }
    }
}

impl TryFrom<u16> for RegistryError {
    type Error = u16;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        ALL_ERRORS
            .iter()
            .copied()
            .find(|error| error.code() == code)
            .ok_or(code)
    }
}

/// Errors are encoded as their numeric [RegistryError::code].
impl Encode for RegistryError {
    fn size_hint(&self) -> usize {
        2
    }

    fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
        self.code().encode_to(dest)
    }
}

impl EncodeLike for RegistryError {}

impl Decode for RegistryError {
    fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        let code = u16::decode(input)?;
        RegistryError::try_from(code).map_err(|_| CodecError::from("Unknown registry error code"))
    }
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let message: &'static str = (*self).into();
        write!(f, "{} (error {})", message, self.code())
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn codes_are_unique_and_roundtrip() {
        for error in ALL_ERRORS.iter() {
            assert_eq!(RegistryError::try_from(error.code()), Ok(*error));
        }
        let mut codes = ALL_ERRORS.iter().map(|e| e.code()).collect::<Vec<_>>();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL_ERRORS.len());
    }

    #[test]
    fn known_contract_codes() {
        assert_eq!(RegistryError::DeadlinePassed.code(), 108);
        assert_eq!(RegistryError::DuplicateProfile.code(), 112);
        assert_eq!(RegistryError::InvalidAmount.code(), 121);
        assert_eq!(RegistryError::EmptyString.code(), 124);
        assert_eq!(RegistryError::EscrowUnauthorized.code(), 200);
        assert_eq!(RegistryError::DuplicateEscrowContext.code(), 210);
        assert_eq!(RegistryError::NotTokenOwner.code(), 303);
        assert_eq!(RegistryError::InexistentBounty.code(), 118);
        assert_eq!(RegistryError::BountyInactive.code(), 119);
        assert_eq!(RegistryError::try_from(999), Err(999));
    }

    #[test]
    fn encoded_as_code() {
        let encoded = RegistryError::LockActive.encode();
        assert_eq!(encoded, 206u16.encode());
        assert_eq!(
            RegistryError::decode(&mut &encoded[..]).ok(),
            Some(RegistryError::LockActive)
        );
        assert!(RegistryError::decode(&mut &7u16.encode()[..]).is_err());
    }

    #[test]
    fn kinds() {
        assert_eq!(RegistryError::LockActive.kind(), ErrorKind::LockActive);
        assert_eq!(RegistryError::SelfEscrow.kind(), ErrorKind::SelfReference);
        assert_eq!(RegistryError::MaxSupplyExceeded.kind(), ErrorKind::SupplyExceeded);
        assert_eq!(RegistryError::InexistentEscrow.kind(), ErrorKind::NotFound);
        assert_eq!(RegistryError::InexistentBounty.kind(), ErrorKind::NotFound);
        assert_eq!(RegistryError::BountyInactive.kind(), ErrorKind::InvalidState);
    }

    /// An empty token URI has its own code so that it can be told apart from an invalid token
    /// amount. Both keep their kinds.
    #[test]
    fn empty_token_uri_code() {
        assert_eq!(RegistryError::EmptyTokenUri.code(), 305);
        assert_eq!(RegistryError::EmptyTokenUri.kind(), ErrorKind::EmptyInput);
        assert_eq!(RegistryError::EmptyString.kind(), ErrorKind::EmptyInput);
        assert_eq!(RegistryError::InvalidTokenAmount.code(), 301);
        assert_eq!(RegistryError::InvalidTokenAmount.kind(), ErrorKind::InvalidAmount);
        assert_ne!(
            RegistryError::try_from(301),
            Ok(RegistryError::EmptyTokenUri)
        );
    }
}
