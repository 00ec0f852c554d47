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

//! Premium subscriptions.

use crate::event::Registry as RegistryEvent;
use crate::fees::{pay_fee, PremiumFee};
use crate::message;
use crate::state::PremiumSubscription;
use crate::{AccountId, Balance, BlockNumber, Event, Origin, RegistryError, Store, BLOCKS_PER_DAY};

/// Price of one month of premium.
pub const PREMIUM_FEE_PER_MONTH: Balance = 10_000_000;

/// Thirty days.
pub const BLOCKS_PER_MONTH: BlockNumber = 30 * BLOCKS_PER_DAY;

pub fn expiry(store: &Store, account: &AccountId) -> BlockNumber {
    store
        .subscriptions
        .get(account)
        .map(|subscription| subscription.expiry)
        .unwrap_or(0)
}

pub fn is_premium(store: &Store, account: &AccountId, now: BlockNumber) -> bool {
    store
        .subscriptions
        .get(account)
        .map(|subscription| subscription.is_active_at(now))
        .unwrap_or(false)
}

/// Extends the author's subscription by `months`.
///
/// An active subscription is extended from its expiry, an expired one from the current block.
pub fn purchase_premium(
    store: &mut Store,
    origin: &Origin,
    message: message::PurchasePremium,
) -> Result<Event, RegistryError> {
    ensure!(message.months > 0, RegistryError::InvalidAmount);
    let months = u64::from(message.months);
    let fee = Balance::from(message.months)
        .checked_mul(PREMIUM_FEE_PER_MONTH)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    let start = expiry(store, &origin.author).max(origin.block_number);
    let expiry = months
        .checked_mul(BLOCKS_PER_MONTH)
        .and_then(|duration| start.checked_add(duration))
        .ok_or(RegistryError::ArithmeticOverflow)?;

    pay_fee(store, PremiumFee(fee), &origin.author)?;
    store
        .subscriptions
        .insert(origin.author, PremiumSubscription { expiry });
    Ok(Event::Registry(RegistryEvent::PremiumPurchased(
        origin.author,
        expiry,
    )))
}
