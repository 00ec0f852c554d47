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

//! Native currency balances.

use crate::event;
use crate::message::Transfer;
use crate::{AccountId, Balance, Event, Origin, RegistryError, Store};

pub fn free_balance(store: &Store, account: &AccountId) -> Balance {
    store.balances.get(account).unwrap_or(0)
}

/// Move `amount` from `from` to `to`.
///
/// Fails with [RegistryError::InsufficientBalance] if `from` does not hold `amount`. Total
/// issuance is unchanged.
pub fn transfer_funds(
    store: &mut Store,
    from: &AccountId,
    to: &AccountId,
    amount: Balance,
) -> Result<(), RegistryError> {
    let from_balance = free_balance(store, from);
    ensure!(from_balance >= amount, RegistryError::InsufficientBalance);
    if from == to || amount == 0 {
        return Ok(());
    }
    let to_balance = free_balance(store, to)
        .checked_add(amount)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    store.balances.insert(*from, from_balance - amount);
    store.balances.insert(*to, to_balance);
    log::trace!("moved {} from {} to {}", amount, from, to);
    Ok(())
}

pub fn transfer(
    store: &mut Store,
    origin: &Origin,
    message: Transfer,
) -> Result<Event, RegistryError> {
    transfer_funds(store, &origin.author, &message.recipient, message.balance)?;
    Ok(Event::Balances(event::Balances::Transfer(
        origin.author,
        message.recipient,
        message.balance,
    )))
}
