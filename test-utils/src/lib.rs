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

//! Miscellaneous helpers used throughout Registry tests.

use std::convert::TryFrom;

use rand::distributions::Alphanumeric;
use rand::Rng;

use devfunding_registry_client::*;

/// Balance every account created with [random_account] is endowed with.
pub const RANDOM_ACCOUNT_FUNDS: Balance = 1_000_000_000_000;

/// Create a client running the ledger with the development genesis configuration and install
/// the test logger.
pub fn emulator() -> Client {
    logger::init_for_tests();
    Client::new_emulator()
}

/// Submit a transaction and return it once it is included in a block.
///
/// Panics if submission errors. The transaction itself may still have failed to apply, see
/// [TransactionIncluded::result].
pub fn submit_ok<Message_: Message>(
    client: &Client,
    author: &AccountId,
    message: Message_,
) -> TransactionIncluded<Message_> {
    client.submit(author, message).unwrap()
}

pub fn account_from_string(value: impl AsRef<str>) -> AccountId {
    AccountId::from_seed(value.as_ref())
}

/// The account that owns the registry in the development genesis configuration.
pub fn alice() -> AccountId {
    account_from_string("Alice")
}

/// Create an account from a random string. Equips the account with [RANDOM_ACCOUNT_FUNDS].
pub fn random_account(client: &Client) -> AccountId {
    let account = unfunded_random_account();
    transfer(client, &alice(), account, RANDOM_ACCOUNT_FUNDS);
    account
}

/// Create an account from a random string without any funds.
pub fn unfunded_random_account() -> AccountId {
    account_from_string(random_alnum_string(12))
}

pub fn random_alnum_string(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .collect::<String>()
}

/// Create a random non-empty text that fits into `Text<MAX>`.
pub fn random_text<const MAX: usize>() -> Text<MAX> {
    let size = rand::thread_rng().gen_range(1, MAX.min(32) + 1);
    Text::try_from(random_alnum_string(size)).unwrap()
}

pub fn random_context_id() -> ContextId {
    rand::thread_rng().gen()
}

pub fn transfer(client: &Client, donator: &AccountId, recipient: AccountId, value: Balance) {
    let tx_included = submit_ok(
        client,
        donator,
        message::Transfer {
            recipient,
            balance: value,
        },
    );
    assert_eq!(
        tx_included.result,
        Ok(()),
        "Failed to grant funds to the recipient account."
    );
}

/// Create a [message::CreateProfile] with random parameters.
pub fn random_create_profile_message() -> message::CreateProfile {
    message::CreateProfile {
        github_handle: random_text(),
        portfolio_url: PortfolioUrl::try_from(format!(
            "https://{}.example.com",
            random_alnum_string(8)
        ))
        .unwrap(),
    }
}

/// Create a developer profile for `author` and return it.
pub fn create_random_profile(client: &Client, author: &AccountId) -> state::DeveloperProfile {
    let tx_included = submit_ok(client, author, random_create_profile_message());
    assert_eq!(tx_included.result, Ok(()), "Failed to create profile");
    client.get_profile(author).unwrap().unwrap()
}

/// Create a funded account with a developer profile.
pub fn random_developer(client: &Client) -> AccountId {
    let account = random_account(client);
    create_random_profile(client, &account);
    account
}

/// Create a [message::CreateGrant] with random texts and a thirty day duration.
pub fn random_create_grant_message(
    amount: Balance,
    referrer: Option<AccountId>,
) -> message::CreateGrant {
    message::CreateGrant {
        amount,
        description: random_text(),
        requirements: random_text(),
        duration_days: 30,
        referrer,
    }
}

/// Create a grant funded with `amount` by `creator` and return its id.
///
/// The creator must have a profile.
pub fn create_random_grant(client: &Client, creator: &AccountId, amount: Balance) -> GrantId {
    submit_ok(client, creator, random_create_grant_message(amount, None))
        .result
        .unwrap()
}

/// Create a grant, have `developer` apply and select them. Returns the grant id.
pub fn create_grant_with_selected_developer(
    client: &Client,
    creator: &AccountId,
    developer: &AccountId,
    amount: Balance,
) -> GrantId {
    let grant_id = create_random_grant(client, creator, amount);
    let applied = submit_ok(client, developer, message::ApplyForGrant { grant_id });
    assert_eq!(applied.result, Ok(()));
    let selected = submit_ok(
        client,
        creator,
        message::SelectDeveloper {
            grant_id,
            developer: *developer,
        },
    );
    assert_eq!(selected.result, Ok(()));
    grant_id
}

/// Create a [message::CreateBounty] with random texts and a seven day duration.
pub fn random_create_bounty_message(amount: Balance) -> message::CreateBounty {
    message::CreateBounty {
        amount,
        description: random_text(),
        requirements: random_text(),
        duration_days: 7,
    }
}

/// Post a bounty funded with `amount` by `creator` and return its id.
///
/// The creator must have a profile.
pub fn create_random_bounty(client: &Client, creator: &AccountId, amount: Balance) -> BountyId {
    submit_ok(client, creator, random_create_bounty_message(amount))
        .result
        .unwrap()
}

/// Create an escrow for a random grant context and return its id.
pub fn create_random_escrow(
    client: &Client,
    depositor: &AccountId,
    beneficiary: &AccountId,
    amount: Balance,
) -> EscrowId {
    submit_ok(
        client,
        depositor,
        message::CreateEscrow {
            beneficiary: *beneficiary,
            context_id: random_context_id(),
            context_type: ContextType::Grant,
            amount,
        },
    )
    .result
    .unwrap()
}
