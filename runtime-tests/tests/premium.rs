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

//! Test premium subscriptions and highlighted grants.

use devfunding_registry_client::*;
use devfunding_registry_runtime::{BLOCKS_PER_MONTH, PREMIUM_FEE_PER_MONTH};
use devfunding_registry_test_utils::*;

fn purchase(
    client: &Client,
    author: &AccountId,
    months: u32,
) -> TransactionIncluded<message::PurchasePremium> {
    submit_ok(client, author, message::PurchasePremium { months })
}

#[test]
fn purchase_premium() {
    let client = emulator();
    let owner = alice();
    let subscriber = random_account(&client);
    let subscriber_balance = client.free_balance(&subscriber).unwrap();
    let owner_balance = client.free_balance(&owner).unwrap();
    assert!(!client.is_premium(&subscriber).unwrap());
    assert_eq!(client.premium_expiry(&subscriber).unwrap(), 0);

    let tx_included = purchase(&client, &subscriber, 3);

    let expiry = tx_included.block + 3 * BLOCKS_PER_MONTH;
    assert_eq!(tx_included.result, Ok(expiry));
    assert!(tx_included
        .events
        .contains(&RegistryEvent::PremiumPurchased(subscriber, expiry).into()));
    assert!(client.is_premium(&subscriber).unwrap());
    assert_eq!(client.premium_expiry(&subscriber).unwrap(), expiry);
    assert_eq!(
        client.free_balance(&subscriber).unwrap(),
        subscriber_balance - 3 * PREMIUM_FEE_PER_MONTH
    );
    assert_eq!(
        client.free_balance(&owner).unwrap(),
        owner_balance + 3 * PREMIUM_FEE_PER_MONTH
    );
}

#[test]
fn extend_active_premium() {
    let client = emulator();
    let subscriber = random_account(&client);
    let first_expiry = purchase(&client, &subscriber, 1).result.unwrap();

    client.mine_blocks(100).unwrap();
    let second_expiry = purchase(&client, &subscriber, 2).result.unwrap();

    assert_eq!(second_expiry, first_expiry + 2 * BLOCKS_PER_MONTH);
}

#[test]
fn premium_expires() {
    let client = emulator();
    let subscriber = random_account(&client);
    let expiry = purchase(&client, &subscriber, 1).result.unwrap();

    // The subscription is read for the block after the tip.
    let tip = client.block_number().unwrap();
    client.mine_blocks(expiry - tip - 2).unwrap();
    assert!(client.is_premium(&subscriber).unwrap());
    client.mine_blocks(1).unwrap();
    assert!(!client.is_premium(&subscriber).unwrap());

    // An expired subscription is renewed from the current block.
    client.mine_blocks(500).unwrap();
    let tx_included = purchase(&client, &subscriber, 1);
    assert_eq!(tx_included.result, Ok(tx_included.block + BLOCKS_PER_MONTH));
    assert!(client.is_premium(&subscriber).unwrap());
}

#[test]
fn purchase_premium_invalid() {
    let client = emulator();
    let subscriber = random_account(&client);

    let zero = purchase(&client, &subscriber, 0);
    assert_eq!(zero.result, Err(RegistryError::InvalidAmount));

    let poor = unfunded_random_account();
    let unaffordable = purchase(&client, &poor, 1);
    assert_eq!(unaffordable.result, Err(RegistryError::InsufficientBalance));
    assert!(!client.is_premium(&poor).unwrap());
    assert_eq!(client.premium_expiry(&poor).unwrap(), 0);
}

#[test]
fn create_highlighted_grant() {
    let client = emulator();
    let creator = random_developer(&client);
    let message = random_create_grant_message(10_000_000, None);
    let highlighted = message::CreateHighlightedGrant {
        amount: message.amount,
        description: message.description,
        requirements: message.requirements,
        duration_days: message.duration_days,
        referrer: message.referrer,
    };

    let without_premium = submit_ok(&client, &creator, highlighted.clone());
    assert_eq!(without_premium.result, Err(RegistryError::PremiumRequired));
    assert_eq!(client.grant_count().unwrap(), 0);

    purchase(&client, &creator, 1);
    let tx_included = submit_ok(&client, &creator, highlighted);
    assert_eq!(tx_included.result, Ok(0));

    let grant = client.get_grant(0).unwrap().unwrap();
    assert!(grant.is_highlighted);
    assert_eq!(grant.amount, 9_750_000);
}

#[test]
fn highlighted_grant_after_premium_expired() {
    let client = emulator();
    let creator = random_developer(&client);
    let expiry = purchase(&client, &creator, 1).result.unwrap();
    let tip = client.block_number().unwrap();
    client.mine_blocks(expiry - tip).unwrap();

    let message = random_create_grant_message(10_000_000, None);
    let tx_included = submit_ok(
        &client,
        &creator,
        message::CreateHighlightedGrant {
            amount: message.amount,
            description: message.description,
            requirements: message.requirements,
            duration_days: message.duration_days,
            referrer: message.referrer,
        },
    );

    assert_eq!(tx_included.result, Err(RegistryError::PremiumRequired));
}

/// `is_premium` predicts whether a highlighted grant submitted right after the read is accepted.
#[test]
fn is_premium_predicts_highlighted_grant() {
    for offset in 0..4 {
        let client = emulator();
        let creator = random_developer(&client);
        let expiry = purchase(&client, &creator, 1).result.unwrap();

        let tip = client.block_number().unwrap();
        client.mine_blocks(expiry - tip - 3 + offset).unwrap();
        let predicted = client.is_premium(&creator).unwrap();
        let message = random_create_grant_message(10_000_000, None);
        let tx_included = submit_ok(
            &client,
            &creator,
            message::CreateHighlightedGrant {
                amount: message.amount,
                description: message.description,
                requirements: message.requirements,
                duration_days: message.duration_days,
                referrer: message.referrer,
            },
        );

        assert_eq!(
            predicted,
            tx_included.result.is_ok(),
            "block {}",
            tx_included.block
        );
        assert_eq!(predicted, tx_included.block < expiry);
    }
}
