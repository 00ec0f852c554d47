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

//! Capped fungible utility token.
//!
//! # Invariants
//!
//! * The sum of all token balances equals the total supply.
//! * The total supply never exceeds [MAX_SUPPLY].

use crate::event::Registry as RegistryEvent;
use crate::guard::{ensure_author, ensure_not_empty, ensure_owner};
use crate::message;
use crate::{AccountId, Balance, Event, Origin, RegistryError, Store};

pub const TOKEN_NAME: &str = "DevFunding Token";

pub const TOKEN_SYMBOL: &str = "DFT";

pub const TOKEN_DECIMALS: u8 = 6;

/// One whole token in base units.
const UNIT: Balance = 1_000_000;

/// Supply minted at genesis.
pub const INITIAL_SUPPLY: Balance = 500_000_000 * UNIT;

pub const MAX_SUPPLY: Balance = 1_000_000_000 * UNIT;

pub const DEFAULT_TOKEN_URI: &str = "https://devfunding.xyz/token-metadata.json";

pub fn balance_of(store: &Store, account: &AccountId) -> Balance {
    store.token_balances.get(account).unwrap_or(0)
}

/// Credit newly minted tokens to `recipient`.
///
/// Used by genesis and [mint_tokens].
pub fn mint(
    store: &mut Store,
    recipient: &AccountId,
    amount: Balance,
) -> Result<(), RegistryError> {
    let total_supply = store
        .total_supply
        .get()
        .checked_add(amount)
        .filter(|supply| *supply <= MAX_SUPPLY)
        .ok_or(RegistryError::MaxSupplyExceeded)?;
    let balance = balance_of(store, recipient)
        .checked_add(amount)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    store.token_balances.insert(*recipient, balance);
    store.total_supply.put(total_supply);
    Ok(())
}

pub fn transfer_tokens(
    store: &mut Store,
    origin: &Origin,
    message: message::TransferTokens,
) -> Result<Event, RegistryError> {
    ensure_author(origin, &message.sender, RegistryError::NotTokenOwner)?;
    ensure!(message.amount > 0, RegistryError::InvalidTokenAmount);
    let sender_balance = balance_of(store, &message.sender);
    ensure!(
        sender_balance >= message.amount,
        RegistryError::InsufficientTokenBalance
    );

    if message.sender != message.recipient {
        let recipient_balance = balance_of(store, &message.recipient)
            .checked_add(message.amount)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        store
            .token_balances
            .insert(message.sender, sender_balance - message.amount);
        store
            .token_balances
            .insert(message.recipient, recipient_balance);
    }

    Ok(Event::Registry(RegistryEvent::TokensTransferred(
        message.sender,
        message.recipient,
        message.amount,
        message.memo,
    )))
}

pub fn mint_tokens(
    store: &mut Store,
    origin: &Origin,
    message: message::MintTokens,
) -> Result<Event, RegistryError> {
    ensure_owner(store, origin, RegistryError::TokenUnauthorized)?;
    ensure!(message.amount > 0, RegistryError::InvalidTokenAmount);

    mint(store, &message.recipient, message.amount)?;
    Ok(Event::Registry(RegistryEvent::TokensMinted(
        message.recipient,
        message.amount,
    )))
}

pub fn burn_tokens(
    store: &mut Store,
    origin: &Origin,
    message: message::BurnTokens,
) -> Result<Event, RegistryError> {
    ensure!(message.amount > 0, RegistryError::InvalidTokenAmount);
    let balance = balance_of(store, &origin.author);
    ensure!(
        balance >= message.amount,
        RegistryError::InsufficientTokenBalance
    );

    store
        .token_balances
        .insert(origin.author, balance - message.amount);
    // The supply is at least the balance of any single account.
    let total_supply = store.total_supply.get().saturating_sub(message.amount);
    store.total_supply.put(total_supply);
    Ok(Event::Registry(RegistryEvent::TokensBurned(
        origin.author,
        message.amount,
    )))
}

pub fn set_token_uri(
    store: &mut Store,
    origin: &Origin,
    message: message::SetTokenUri,
) -> Result<Event, RegistryError> {
    ensure_owner(store, origin, RegistryError::TokenUnauthorized)?;
    ensure_not_empty(&message.uri, RegistryError::EmptyTokenUri)?;

    store.token_uri.put(message.uri.clone());
    Ok(Event::Registry(RegistryEvent::TokenUriSet(message.uri)))
}
