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

//! Developer directory: profiles, skills and referrals.

use crate::event::Registry as RegistryEvent;
use crate::guard::{ensure_not_empty, ensure_owner};
use crate::message;
use crate::state::DeveloperProfile;
use crate::{AccountId, Event, Origin, RegistryError, Store};

pub fn get_profile(store: &Store, account: &AccountId) -> Result<DeveloperProfile, RegistryError> {
    store
        .profiles
        .get(account)
        .ok_or(RegistryError::InexistentProfile)
}

pub fn create_profile(
    store: &mut Store,
    origin: &Origin,
    message: message::CreateProfile,
) -> Result<Event, RegistryError> {
    ensure_not_empty(&message.github_handle, RegistryError::EmptyString)?;
    ensure_not_empty(&message.portfolio_url, RegistryError::EmptyString)?;
    ensure!(
        !store.profiles.contains_key(&origin.author),
        RegistryError::DuplicateProfile
    );
    let profile_count = store
        .profile_count
        .get()
        .checked_add(1)
        .ok_or(RegistryError::ArithmeticOverflow)?;

    store.profile_count.put(profile_count);
    store.profiles.insert(
        origin.author,
        DeveloperProfile::new(message.github_handle, message.portfolio_url),
    );
    Ok(Event::Registry(RegistryEvent::ProfileCreated(origin.author)))
}

/// Replaces the handle and portfolio of the author's profile. Counters are kept.
pub fn update_profile(
    store: &mut Store,
    origin: &Origin,
    message: message::UpdateProfile,
) -> Result<Event, RegistryError> {
    let mut profile = get_profile(store, &origin.author)?;
    ensure_not_empty(&message.github_handle, RegistryError::EmptyString)?;
    ensure_not_empty(&message.portfolio_url, RegistryError::EmptyString)?;

    profile.github_handle = message.github_handle;
    profile.portfolio_url = message.portfolio_url;
    store.profiles.insert(origin.author, profile);
    Ok(Event::Registry(RegistryEvent::ProfileUpdated(origin.author)))
}

pub fn add_skill(
    store: &mut Store,
    origin: &Origin,
    message: message::AddSkill,
) -> Result<Event, RegistryError> {
    get_profile(store, &origin.author)?;
    ensure_not_empty(&message.skill, RegistryError::EmptyString)?;

    let index = store.skill_counts.get(&origin.author).unwrap_or(0);
    let next_index = index
        .checked_add(1)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    store.skills.insert((origin.author, index), message.skill);
    store.skill_counts.insert(origin.author, next_index);
    Ok(Event::Registry(RegistryEvent::SkillAdded(
        origin.author,
        index,
    )))
}

/// Records that the author was referred by `referrer`.
pub fn register_referral(
    store: &mut Store,
    origin: &Origin,
    message: message::RegisterReferral,
) -> Result<Event, RegistryError> {
    ensure!(
        message.referrer != origin.author,
        RegistryError::SelfReferral
    );
    let mut referee = get_profile(store, &origin.author)?;
    let mut referrer = get_profile(store, &message.referrer)?;
    ensure!(
        referee.referred_by.is_none(),
        RegistryError::ReferralAlreadyRegistered
    );

    referee.referred_by = Some(message.referrer);
    referrer.referral_count = referrer
        .referral_count
        .checked_add(1)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    store.profiles.insert(origin.author, referee);
    store.profiles.insert(message.referrer, referrer);
    Ok(Event::Registry(RegistryEvent::ReferralRegistered(
        origin.author,
        message.referrer,
    )))
}

pub fn verify_developer(
    store: &mut Store,
    origin: &Origin,
    message: message::VerifyDeveloper,
) -> Result<Event, RegistryError> {
    ensure_owner(store, origin, RegistryError::Unauthorized)?;
    let mut profile = get_profile(store, &message.developer)?;

    profile.is_verified = true;
    store.profiles.insert(message.developer, profile);
    Ok(Event::Registry(RegistryEvent::DeveloperVerified(
        message.developer,
    )))
}
