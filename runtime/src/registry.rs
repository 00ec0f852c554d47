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

//! Grant and bounty registry.
//!
//! Creating a grant charges the gross amount to the creator. Fees are paid out immediately and
//! the net amount is held by the [custody_account] until the selected developer claims it.
//!
//! Bounties are fee free. Their amount is held by the escrow custody account. Awarding a bounty
//! turns it into an escrow for the hunter that is settled like any other escrow.

use crate::currency::{free_balance, transfer_funds};
use crate::event::Registry as RegistryEvent;
use crate::fees::{grant_fees, pay_fee, PlatformFee, ReferralFee, MINIMUM_GRANT_AMOUNT};
use crate::guard::{ensure_author, ensure_not_empty};
use crate::message;
use crate::state::{Bounty, Grant, GrantApplication};
use crate::{directory, escrow, premium};
use crate::{
    AccountId, BlockNumber, BountyId, ContextType, Event, GrantId, Origin, RegistryError, Store,
    BLOCKS_PER_DAY,
};

/// Reputation a developer gains for every claimed grant.
pub const REPUTATION_PER_CLAIM: u32 = 10;

/// Account that holds the net amount of all unclaimed grants.
pub fn custody_account() -> AccountId {
    AccountId::module(b"grants")
}

/// Last block of a period of `days` that starts at `now`.
fn deadline(now: BlockNumber, days: u32) -> Result<BlockNumber, RegistryError> {
    u64::from(days)
        .checked_mul(BLOCKS_PER_DAY)
        .and_then(|duration| now.checked_add(duration))
        .ok_or(RegistryError::ArithmeticOverflow)
}

fn get_grant(store: &Store, grant_id: GrantId) -> Result<Grant, RegistryError> {
    store
        .grants
        .get(&grant_id)
        .ok_or(RegistryError::InexistentGrant)
}

pub fn create_grant(
    store: &mut Store,
    origin: &Origin,
    message: message::CreateGrant,
) -> Result<Event, RegistryError> {
    create(store, origin, message, false)
}

pub fn create_highlighted_grant(
    store: &mut Store,
    origin: &Origin,
    message: message::CreateHighlightedGrant,
) -> Result<Event, RegistryError> {
    ensure!(
        premium::is_premium(store, &origin.author, origin.block_number),
        RegistryError::PremiumRequired
    );
    create(store, origin, message.into(), true)
}

fn create(
    store: &mut Store,
    origin: &Origin,
    message: message::CreateGrant,
    is_highlighted: bool,
) -> Result<Event, RegistryError> {
    let creator = origin.author;
    ensure!(
        message.amount >= MINIMUM_GRANT_AMOUNT,
        RegistryError::InvalidAmount
    );
    ensure_not_empty(&message.description, RegistryError::EmptyString)?;
    ensure_not_empty(&message.requirements, RegistryError::EmptyString)?;
    ensure!(message.duration_days > 0, RegistryError::InvalidAmount);
    let mut creator_profile = directory::get_profile(store, &creator)?;
    ensure!(
        message.referrer != Some(creator),
        RegistryError::SelfReferral
    );
    ensure!(
        free_balance(store, &creator) >= message.amount,
        RegistryError::InsufficientBalance
    );

    let deadline = deadline(origin.block_number, message.duration_days)?;
    let grant_id = store.grant_count.get();
    let next_id = grant_id
        .checked_add(1)
        .ok_or(RegistryError::ArithmeticOverflow)?;

    let fees = grant_fees(message.amount, message.referrer.is_some());
    pay_fee(store, PlatformFee(fees.platform_fee), &creator)?;
    if let Some(referrer) = message.referrer {
        pay_fee(
            store,
            ReferralFee {
                referrer,
                value: fees.referral_fee,
            },
            &creator,
        )?;
        if let Some(mut referrer_profile) = store.profiles.get(&referrer) {
            referrer_profile.referral_earnings = referrer_profile
                .referral_earnings
                .checked_add(fees.referral_fee)
                .ok_or(RegistryError::ArithmeticOverflow)?;
            store.profiles.insert(referrer, referrer_profile);
        }
    }
    transfer_funds(store, &creator, &custody_account(), fees.net_amount)?;

    store.grants.insert(
        grant_id,
        Grant {
            creator,
            amount: fees.net_amount,
            description: message.description,
            requirements: message.requirements,
            deadline,
            is_active: true,
            applicants_count: 0,
            selected_dev: None,
            is_claimed: false,
            referrer: message.referrer,
            is_highlighted,
        },
    );
    store.grant_count.put(next_id);

    creator_profile.grants_created = creator_profile
        .grants_created
        .checked_add(1)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    store.profiles.insert(creator, creator_profile);

    Ok(Event::Registry(RegistryEvent::GrantCreated(
        grant_id,
        creator,
        fees.net_amount,
    )))
}

pub fn apply_for_grant(
    store: &mut Store,
    origin: &Origin,
    message: message::ApplyForGrant,
) -> Result<Event, RegistryError> {
    let grant = get_grant(store, message.grant_id)?;
    ensure!(grant.is_active, RegistryError::GrantInactive);
    ensure!(
        origin.block_number <= grant.deadline,
        RegistryError::DeadlinePassed
    );
    let key = (message.grant_id, origin.author);
    ensure!(
        !store.applications.contains_key(&key),
        RegistryError::DuplicateApplication
    );

    store.applications.insert(
        key,
        GrantApplication {
            applied_at: origin.block_number,
            is_selected: false,
        },
    );
    store
        .grants
        .insert(message.grant_id, grant.add_applicant()?);
    Ok(Event::Registry(RegistryEvent::GrantApplied(
        message.grant_id,
        origin.author,
    )))
}

pub fn select_developer(
    store: &mut Store,
    origin: &Origin,
    message: message::SelectDeveloper,
) -> Result<Event, RegistryError> {
    let grant = get_grant(store, message.grant_id)?;
    ensure_author(origin, &grant.creator, RegistryError::Unauthorized)?;
    ensure!(grant.is_active, RegistryError::GrantInactive);
    ensure!(
        grant.selected_dev.is_none(),
        RegistryError::DeveloperAlreadySelected
    );
    let key = (message.grant_id, message.developer);
    let mut application = store
        .applications
        .get(&key)
        .ok_or(RegistryError::InexistentApplication)?;

    application.is_selected = true;
    store.applications.insert(key, application);
    store
        .grants
        .insert(message.grant_id, grant.select(message.developer));
    Ok(Event::Registry(RegistryEvent::DeveloperSelected(
        message.grant_id,
        message.developer,
    )))
}

/// Pays the net grant amount to the selected developer.
pub fn claim_grant(
    store: &mut Store,
    origin: &Origin,
    message: message::ClaimGrant,
) -> Result<Event, RegistryError> {
    let grant = get_grant(store, message.grant_id)?;
    ensure!(!grant.is_claimed, RegistryError::GrantClaimed);
    let developer = grant
        .selected_dev
        .ok_or(RegistryError::NoDeveloperSelected)?;
    ensure_author(origin, &developer, RegistryError::Unauthorized)?;

    transfer_funds(store, &custody_account(), &developer, grant.amount)?;
    let amount = grant.amount;
    store.grants.insert(message.grant_id, grant.claim());

    if let Some(mut profile) = store.profiles.get(&developer) {
        profile.grants_claimed = profile.grants_claimed.saturating_add(1);
        profile.completed_grants = profile.completed_grants.saturating_add(1);
        profile.reputation = profile.reputation.saturating_add(REPUTATION_PER_CLAIM);
        store.profiles.insert(developer, profile);
    }

    Ok(Event::Registry(RegistryEvent::GrantClaimed(
        message.grant_id,
        developer,
        amount,
    )))
}

fn get_bounty(store: &Store, bounty_id: BountyId) -> Result<Bounty, RegistryError> {
    store
        .bounties
        .get(&bounty_id)
        .ok_or(RegistryError::InexistentBounty)
}

pub fn create_bounty(
    store: &mut Store,
    origin: &Origin,
    message: message::CreateBounty,
) -> Result<Event, RegistryError> {
    let creator = origin.author;
    ensure!(
        message.amount >= MINIMUM_GRANT_AMOUNT,
        RegistryError::InvalidAmount
    );
    ensure_not_empty(&message.description, RegistryError::EmptyString)?;
    ensure_not_empty(&message.requirements, RegistryError::EmptyString)?;
    ensure!(message.duration_days > 0, RegistryError::InvalidAmount);
    directory::get_profile(store, &creator)?;

    let deadline = deadline(origin.block_number, message.duration_days)?;
    let bounty_id = store.bounty_count.get();
    let next_id = bounty_id
        .checked_add(1)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    transfer_funds(store, &creator, &escrow::custody_account(), message.amount)?;

    store.bounties.insert(
        bounty_id,
        Bounty {
            creator,
            amount: message.amount,
            description: message.description,
            requirements: message.requirements,
            deadline,
            is_active: true,
            hunter: None,
            escrow_id: None,
        },
    );
    store.bounty_count.put(next_id);
    Ok(Event::Registry(RegistryEvent::BountyCreated(
        bounty_id,
        creator,
        message.amount,
    )))
}

/// Opens an escrow from the bounty creator to the hunter. The funds already sit in escrow
/// custody.
pub fn award_bounty(
    store: &mut Store,
    origin: &Origin,
    message: message::AwardBounty,
) -> Result<Event, RegistryError> {
    let bounty = get_bounty(store, message.bounty_id)?;
    ensure_author(origin, &bounty.creator, RegistryError::Unauthorized)?;
    ensure!(bounty.is_active, RegistryError::BountyInactive);
    ensure!(
        origin.block_number <= bounty.deadline,
        RegistryError::DeadlinePassed
    );

    let escrow_id = escrow::open(
        store,
        bounty.creator,
        message.hunter,
        (message.bounty_id, ContextType::Bounty),
        bounty.amount,
        origin.block_number,
    )?;
    store
        .bounties
        .insert(message.bounty_id, bounty.award(message.hunter, escrow_id));
    Ok(Event::Registry(RegistryEvent::BountyAwarded(
        message.bounty_id,
        message.hunter,
        escrow_id,
    )))
}

pub fn cancel_bounty(
    store: &mut Store,
    origin: &Origin,
    message: message::CancelBounty,
) -> Result<Event, RegistryError> {
    let bounty = get_bounty(store, message.bounty_id)?;
    ensure_author(origin, &bounty.creator, RegistryError::Unauthorized)?;
    ensure!(bounty.is_active, RegistryError::BountyInactive);

    transfer_funds(
        store,
        &escrow::custody_account(),
        &bounty.creator,
        bounty.amount,
    )?;
    let event = RegistryEvent::BountyCancelled(message.bounty_id, bounty.creator, bounty.amount);
    store.bounties.insert(message.bounty_id, bounty.cancel());
    Ok(Event::Registry(event))
}
