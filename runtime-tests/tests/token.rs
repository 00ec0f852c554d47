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

//! Test the utility token.
use std::convert::TryFrom;

use devfunding_registry_client::*;
use devfunding_registry_runtime::{
    DEFAULT_TOKEN_URI, INITIAL_SUPPLY, MAX_SUPPLY, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL,
};
use devfunding_registry_test_utils::*;

fn assert_supply_matches_balances(client: &Client) {
    assert_eq!(
        client.token_balances_sum().unwrap(),
        client.total_supply().unwrap()
    );
}

#[test]
fn token_metadata() {
    let client = emulator();

    assert_eq!(client.token_name().unwrap(), TOKEN_NAME);
    assert_eq!(client.token_symbol().unwrap(), TOKEN_SYMBOL);
    assert_eq!(client.token_decimals().unwrap(), TOKEN_DECIMALS);
    assert_eq!(client.total_supply().unwrap(), INITIAL_SUPPLY);
    assert_eq!(client.token_balance(&alice()).unwrap(), INITIAL_SUPPLY);
    assert_eq!(client.token_uri().unwrap().as_str(), DEFAULT_TOKEN_URI);
    assert_supply_matches_balances(&client);
}

#[test]
fn transfer_tokens_with_memo() {
    let client = emulator();
    let owner = alice();
    let recipient = unfunded_random_account();
    let memo = Memo::try_from(&b"invoice 42"[..]).unwrap();

    let tx_included = submit_ok(
        &client,
        &owner,
        message::TransferTokens {
            amount: 1_000,
            sender: owner,
            recipient,
            memo: Some(memo.clone()),
        },
    );

    assert_eq!(tx_included.result, Ok(()));
    assert!(tx_included.events.contains(
        &RegistryEvent::TokensTransferred(owner, recipient, 1_000, Some(memo)).into()
    ));
    assert_eq!(client.token_balance(&recipient).unwrap(), 1_000);
    assert_eq!(
        client.token_balance(&owner).unwrap(),
        INITIAL_SUPPLY - 1_000
    );
    assert_supply_matches_balances(&client);
}

#[test]
fn transfer_tokens_to_self() {
    let client = emulator();
    let owner = alice();

    let tx_included = submit_ok(
        &client,
        &owner,
        message::TransferTokens {
            amount: 5,
            sender: owner,
            recipient: owner,
            memo: None,
        },
    );

    assert_eq!(tx_included.result, Ok(()));
    assert_eq!(client.token_balance(&owner).unwrap(), INITIAL_SUPPLY);
}

#[test]
fn transfer_tokens_invalid() {
    let client = emulator();
    let owner = alice();
    let holder = random_account(&client);
    let transfer = |author: &AccountId, sender: AccountId, amount: Balance| {
        submit_ok(
            &client,
            author,
            message::TransferTokens {
                amount,
                sender,
                recipient: unfunded_random_account(),
                memo: None,
            },
        )
        .result
    };

    assert_eq!(
        transfer(&holder, owner, 10),
        Err(RegistryError::NotTokenOwner)
    );
    assert_eq!(transfer(&owner, owner, 0), Err(RegistryError::InvalidTokenAmount));
    assert_eq!(
        transfer(&holder, holder, 1),
        Err(RegistryError::InsufficientTokenBalance)
    );
    assert_eq!(client.token_balance(&owner).unwrap(), INITIAL_SUPPLY);
    assert_supply_matches_balances(&client);
}

#[test]
fn mint_tokens() {
    let client = emulator();
    let owner = alice();
    let recipient = unfunded_random_account();

    let unauthorized = submit_ok(
        &client,
        &recipient,
        message::MintTokens {
            amount: 10,
            recipient,
        },
    );
    assert_eq!(unauthorized.result, Err(RegistryError::TokenUnauthorized));

    let tx_included = submit_ok(
        &client,
        &owner,
        message::MintTokens {
            amount: 10,
            recipient,
        },
    );
    assert_eq!(tx_included.result, Ok(()));
    assert!(tx_included
        .events
        .contains(&RegistryEvent::TokensMinted(recipient, 10).into()));
    assert_eq!(client.token_balance(&recipient).unwrap(), 10);
    assert_eq!(client.total_supply().unwrap(), INITIAL_SUPPLY + 10);
    assert_supply_matches_balances(&client);
}

#[test]
fn mint_tokens_up_to_max_supply() {
    let client = emulator();
    let owner = alice();
    let mint = |amount: Balance| {
        submit_ok(
            &client,
            &owner,
            message::MintTokens {
                amount,
                recipient: owner,
            },
        )
        .result
    };

    assert_eq!(mint(MAX_SUPPLY - INITIAL_SUPPLY + 1), Err(RegistryError::MaxSupplyExceeded));
    assert_eq!(mint(Balance::max_value()), Err(RegistryError::MaxSupplyExceeded));
    assert_eq!(client.total_supply().unwrap(), INITIAL_SUPPLY);

    assert_eq!(mint(MAX_SUPPLY - INITIAL_SUPPLY), Ok(()));
    assert_eq!(client.total_supply().unwrap(), MAX_SUPPLY);
    assert_eq!(mint(1), Err(RegistryError::MaxSupplyExceeded));
    assert_supply_matches_balances(&client);
}

#[test]
fn burn_tokens() {
    let client = emulator();
    let owner = alice();

    let tx_included = submit_ok(&client, &owner, message::BurnTokens { amount: 500 });
    assert_eq!(tx_included.result, Ok(()));
    assert!(tx_included
        .events
        .contains(&RegistryEvent::TokensBurned(owner, 500).into()));
    assert_eq!(client.total_supply().unwrap(), INITIAL_SUPPLY - 500);
    assert_eq!(client.token_balance(&owner).unwrap(), INITIAL_SUPPLY - 500);
    assert_supply_matches_balances(&client);

    let zero = submit_ok(&client, &owner, message::BurnTokens { amount: 0 });
    assert_eq!(zero.result, Err(RegistryError::InvalidTokenAmount));

    let exceeding = submit_ok(
        &client,
        &owner,
        message::BurnTokens {
            amount: INITIAL_SUPPLY,
        },
    );
    assert_eq!(exceeding.result, Err(RegistryError::InsufficientTokenBalance));
    assert_eq!(client.total_supply().unwrap(), INITIAL_SUPPLY - 500);
}

#[test]
fn set_token_uri() {
    let client = emulator();
    let owner = alice();
    let uri = TokenUri::try_from("ipfs://metadata").unwrap();

    let unauthorized = submit_ok(
        &client,
        &random_account(&client),
        message::SetTokenUri { uri: uri.clone() },
    );
    assert_eq!(unauthorized.result, Err(RegistryError::TokenUnauthorized));

    let empty = submit_ok(
        &client,
        &owner,
        message::SetTokenUri {
            uri: TokenUri::default(),
        },
    );
    assert_eq!(empty.result, Err(RegistryError::EmptyTokenUri));
    assert_eq!(client.token_uri().unwrap().as_str(), DEFAULT_TOKEN_URI);

    let tx_included = submit_ok(&client, &owner, message::SetTokenUri { uri: uri.clone() });
    assert_eq!(tx_included.result, Ok(()));
    assert_eq!(client.token_uri().unwrap(), uri);
}
