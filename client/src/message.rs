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

//! Defines [Message] trait and implementations for all messages in
//! `devfunding_registry_core::message`.

pub use devfunding_registry_core::message::*;
use devfunding_registry_core::*;
use devfunding_registry_runtime::{event, Call as RuntimeCall, Event};

use event::Registry as RegistryEvent;

#[derive(thiserror::Error, Debug)]
pub enum EventExtractionError {
    #[error("ExtrinsicSuccess or ExtrinsicFailed event not found")]
    ExstrinsicStatusMissing,
    #[error("Required event is missing")]
    EventMissing,
}

/// Trait implemented for every runtime message
///
/// For every [RuntimeCall] that is exposed to the user we implement [Message] for the parameters
/// struct of the runtime message.
pub trait Message: Clone + core::fmt::Debug + Send + 'static {
    /// Output of a successfully applied message.
    ///
    /// This value is extracted from the events that are dispatched when the message is executed in
    /// a block.
    type Output: Clone + core::fmt::Debug + Send + 'static;

    /// Parse all runtime events emitted by the message and return the appropriate message result.
    ///
    /// Returns an error if the event list is not well formed. For example if an expected event is
    /// missing.
    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError>;

    fn into_runtime_call(self) -> RuntimeCall;
}

impl Message for message::Transfer {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        get_dispatch_result(&events)
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::Transfer(self)
    }
}

impl Message for message::CreateEscrow {
    type Output = EscrowId;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::EscrowCreated(escrow_id, _, _, _) => Some(*escrow_id),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::CreateEscrow(self)
    }
}

impl Message for message::ReleaseEscrow {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::EscrowReleased(_, _, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::ReleaseEscrow(self)
    }
}

impl Message for message::DisputeEscrow {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::EscrowDisputed(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::DisputeEscrow(self)
    }
}

impl Message for message::ResolveDispute {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::DisputeResolved(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::ResolveDispute(self)
    }
}

impl Message for message::RefundEscrow {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::EscrowRefunded(_, _, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::RefundEscrow(self)
    }
}

impl Message for message::SetLockPeriod {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::LockPeriodSet(_) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::SetLockPeriod(self)
    }
}

impl Message for message::TransferTokens {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::TokensTransferred(_, _, _, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::TransferTokens(self)
    }
}

impl Message for message::MintTokens {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::TokensMinted(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::MintTokens(self)
    }
}

impl Message for message::BurnTokens {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::TokensBurned(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::BurnTokens(self)
    }
}

impl Message for message::SetTokenUri {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::TokenUriSet(_) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::SetTokenUri(self)
    }
}

impl Message for message::CreateProfile {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::ProfileCreated(_) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::CreateProfile(self)
    }
}

impl Message for message::UpdateProfile {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::ProfileUpdated(_) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::UpdateProfile(self)
    }
}

impl Message for message::AddSkill {
    type Output = SkillIndex;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::SkillAdded(_, index) => Some(*index),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::AddSkill(self)
    }
}

impl Message for message::RegisterReferral {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::ReferralRegistered(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::RegisterReferral(self)
    }
}

impl Message for message::VerifyDeveloper {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::DeveloperVerified(_) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::VerifyDeveloper(self)
    }
}

impl Message for message::CreateGrant {
    type Output = GrantId;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::GrantCreated(grant_id, _, _) => Some(*grant_id),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::CreateGrant(self)
    }
}

impl Message for message::CreateHighlightedGrant {
    type Output = GrantId;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::GrantCreated(grant_id, _, _) => Some(*grant_id),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::CreateHighlightedGrant(self)
    }
}

impl Message for message::ApplyForGrant {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::GrantApplied(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::ApplyForGrant(self)
    }
}

impl Message for message::SelectDeveloper {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::DeveloperSelected(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::SelectDeveloper(self)
    }
}

impl Message for message::ClaimGrant {
    type Output = Balance;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::GrantClaimed(_, _, amount) => Some(*amount),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::ClaimGrant(self)
    }
}

impl Message for message::CreateBounty {
    type Output = BountyId;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::BountyCreated(bounty_id, _, _) => Some(*bounty_id),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::CreateBounty(self)
    }
}

impl Message for message::AwardBounty {
    type Output = EscrowId;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::BountyAwarded(_, _, escrow_id) => Some(*escrow_id),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::AwardBounty(self)
    }
}

impl Message for message::CancelBounty {
    type Output = Balance;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::BountyCancelled(_, _, amount) => Some(*amount),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::CancelBounty(self)
    }
}

impl Message for message::PurchasePremium {
    type Output = BlockNumber;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::PremiumPurchased(_, expiry) => Some(*expiry),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::PurchasePremium(self)
    }
}

impl Message for message::ProposeImprovement {
    type Output = ProposalId;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::ProposalCreated(proposal_id, _) => Some(*proposal_id),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::ProposeImprovement(self)
    }
}

impl Message for message::VoteOnProposal {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::VoteCast(_, _, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::VoteOnProposal(self)
    }
}

impl Message for message::CloseProposal {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::ProposalClosed(_) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        RuntimeCall::CloseProposal(self)
    }
}

/// Run `f` on all events to extract a potential output after [get_dispatch_result] is successful.
/// If `f` returns `None` for all events an [EventExtractionError::EventMissing] error is returned.
fn extract_registry_result<T>(
    events: &[Event],
    f: impl Fn(&RegistryEvent) -> Option<T>,
) -> Result<Result<T, RegistryError>, EventExtractionError> {
    let dispatch_result = get_dispatch_result(events)?;
    match dispatch_result {
        Ok(()) => {
            let output = events
                .iter()
                .find_map(|event| event.registry().and_then(|e| f(e)))
                .ok_or(EventExtractionError::EventMissing)?;
            Ok(Ok(output))
        }
        Err(error) => Ok(Err(error)),
    }
}

/// Looks for [event::System::ExtrinsicSuccess] and [event::System::ExtrinsicFailed] in the events
/// and constructs the inner result accordingly. Returns an
/// [EventExtractionError::ExstrinsicStatusMissing] error if none of these events is found.
fn get_dispatch_result(
    events: &[Event],
) -> Result<Result<(), RegistryError>, EventExtractionError> {
    events
        .iter()
        .find_map(|event| event.extrinsic_result())
        .ok_or(EventExtractionError::ExstrinsicStatusMissing)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn create_escrow_event_ok() {
        let alice = AccountId::from_seed("Alice");
        let bob = AccountId::from_seed("Bob");
        let events = vec![
            Event::Registry(RegistryEvent::EscrowCreated(3, alice, bob, 10)),
            Event::System(event::System::ExtrinsicSuccess),
        ];
        let result = message::CreateEscrow::result_from_events(events).unwrap();
        assert_eq!(result, Ok(3))
    }

    #[test]
    fn extrinsic_failed_error() {
        let events = vec![Event::System(event::System::ExtrinsicFailed(
            RegistryError::SelfEscrow,
        ))];
        let result = message::CreateEscrow::result_from_events(events).unwrap();
        assert_eq!(result, Err(RegistryError::SelfEscrow))
    }

    #[test]
    fn empty_events_error() {
        let result = message::Transfer::result_from_events(vec![]);
        assert!(matches!(
            result,
            Err(EventExtractionError::ExstrinsicStatusMissing)
        ));
    }

    #[test]
    fn missing_registry_event_error() {
        let events = vec![Event::System(event::System::ExtrinsicSuccess)];
        let result = message::CreateGrant::result_from_events(events);
        assert!(matches!(result, Err(EventExtractionError::EventMissing)));
    }
}
