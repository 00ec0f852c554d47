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

//! Getting started with the client by funding a grant.
//!
//! Alice funds a grant, Bob applies and is selected, and finally Bob claims the grant. The ledger
//! runs in memory.
//!
//! Run it with `RUST_LOG=debug` to see what the ledger does.

use std::convert::TryFrom;

use devfunding_registry_client::*;

fn main() -> Result<(), Error> {
    logger::init();

    let client = Client::new_emulator();
    let alice = AccountId::from_seed("Alice");
    let bob = AccountId::from_seed("Bob");
    println!("Grant creator: Alice ({})", alice);
    println!("Developer:     Bob ({})", bob);

    for (account, handle) in [(alice, "alice"), (bob, "bob")].iter() {
        let profile_created = client.submit(
            account,
            message::CreateProfile {
                github_handle: GithubHandle::try_from(*handle).unwrap(),
                portfolio_url: PortfolioUrl::try_from("https://devfunding.xyz").unwrap(),
            },
        )?;
        if let Err(error) = profile_created.result {
            println!("Failed to create profile: {}", error);
        }
    }

    print!("Submitting grant... ");
    let grant_created = client.submit(
        &alice,
        message::CreateGrant {
            amount: 10_000_000,
            description: GrantDescription::try_from("Write a SCALE codec fuzzer").unwrap(),
            requirements: GrantRequirements::try_from("Runs in CI").unwrap(),
            duration_days: 14,
            referrer: None,
        },
    )?;
    println!("included in block {}", grant_created.block);
    let grant_id = match grant_created.result {
        Ok(grant_id) => grant_id,
        Err(error) => {
            println!("Failed to create grant: {}", error);
            return Ok(());
        }
    };

    client.submit(&bob, message::ApplyForGrant { grant_id })?;
    client.submit(
        &alice,
        message::SelectDeveloper {
            grant_id,
            developer: bob,
        },
    )?;

    let balance_bob = client.free_balance(&bob)?;
    println!("Balance Bob: {}", balance_bob);

    // The result of a transaction is extracted from its events. Claiming a grant returns the
    // amount paid out.
    match client.submit(&bob, message::ClaimGrant { grant_id })?.result {
        Ok(amount) => println!("Bob claimed {}", amount),
        Err(error) => println!("Failed to claim grant: {}", error),
    }

    let balance_bob = client.free_balance(&bob)?;
    println!("Balance Bob: {}", balance_bob);
    if let Some(profile) = client.get_profile(&bob)? {
        println!("Reputation Bob: {}", profile.reputation);
    }

    Ok(())
}
