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

//! Improvement proposals and votes.
//!
//! Every account can vote once on each active proposal.

use crate::event::Registry as RegistryEvent;
use crate::guard::{ensure_author_in, ensure_not_empty};
use crate::message;
use crate::state::Proposal;
use crate::{Event, Origin, ProposalId, RegistryError, Store};

fn get_proposal(store: &Store, proposal_id: ProposalId) -> Result<Proposal, RegistryError> {
    store
        .proposals
        .get(&proposal_id)
        .ok_or(RegistryError::InexistentProposal)
}

pub fn propose_improvement(
    store: &mut Store,
    origin: &Origin,
    message: message::ProposeImprovement,
) -> Result<Event, RegistryError> {
    ensure_not_empty(&message.description, RegistryError::EmptyString)?;

    let proposal_id = store.proposal_count.get();
    let next_id = proposal_id
        .checked_add(1)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    store.proposals.insert(
        proposal_id,
        Proposal {
            proposer: origin.author,
            description: message.description,
            yes_votes: 0,
            no_votes: 0,
            is_active: true,
            created_at: origin.block_number,
        },
    );
    store.proposal_count.put(next_id);
    Ok(Event::Registry(RegistryEvent::ProposalCreated(
        proposal_id,
        origin.author,
    )))
}

pub fn vote_on_proposal(
    store: &mut Store,
    origin: &Origin,
    message: message::VoteOnProposal,
) -> Result<Event, RegistryError> {
    let mut proposal = get_proposal(store, message.proposal_id)?;
    ensure!(proposal.is_active, RegistryError::ProposalClosed);
    let key = (message.proposal_id, origin.author);
    ensure!(
        !store.votes.contains_key(&key),
        RegistryError::AlreadyVoted
    );

    let counter = if message.support {
        &mut proposal.yes_votes
    } else {
        &mut proposal.no_votes
    };
    *counter = counter
        .checked_add(1)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    store.votes.insert(key, message.support);
    store.proposals.insert(message.proposal_id, proposal);
    Ok(Event::Registry(RegistryEvent::VoteCast(
        message.proposal_id,
        origin.author,
        message.support,
    )))
}

/// Closes a proposal for voting. Only the proposer and the registry owner may close it.
pub fn close_proposal(
    store: &mut Store,
    origin: &Origin,
    message: message::CloseProposal,
) -> Result<Event, RegistryError> {
    let mut proposal = get_proposal(store, message.proposal_id)?;
    ensure_author_in(
        origin,
        &[proposal.proposer, store.owner.get()],
        RegistryError::Unauthorized,
    )?;
    ensure!(proposal.is_active, RegistryError::ProposalClosed);

    proposal.is_active = false;
    store.proposals.insert(message.proposal_id, proposal);
    Ok(Event::Registry(RegistryEvent::ProposalClosed(
        message.proposal_id,
    )))
}
