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

//! Test the client API against the emulated ledger.

use std::convert::TryFrom;

use devfunding_registry_client::*;
use devfunding_registry_runtime::event;
use devfunding_registry_test_utils::*;

#[test]
fn events_of_successful_transaction() {
    let client = emulator();
    let developer = random_account(&client);

    let tx_included = submit_ok(&client, &developer, random_create_profile_message());

    assert_eq!(
        tx_included.events,
        vec![
            Event::from(RegistryEvent::ProfileCreated(developer)),
            Event::from(event::System::ExtrinsicSuccess),
        ]
    );
}

#[test]
fn cloned_clients_share_the_ledger() {
    let client = emulator();
    let other_client = client.clone();
    let recipient = unfunded_random_account();

    transfer(&client, &alice(), recipient, 77);

    assert_eq!(other_client.free_balance(&recipient).unwrap(), 77);
    assert_eq!(
        other_client.block_number().unwrap(),
        client.block_number().unwrap()
    );
}

#[test]
fn client_from_json_genesis() {
    logger::init_for_tests();
    let owner = account_from_string("Owner");
    let genesis_config = GenesisConfig::from_json(&format!(
        r#"{{
            "owner": "{owner}",
            "balances": [["{owner}", 5000000]],
            "lockPeriod": 20,
            "tokenUri": "ipfs://token"
        }}"#,
        owner = owner,
    ))
    .unwrap();
    let client = Client::from_genesis(&genesis_config);

    assert_eq!(client.owner().unwrap(), owner);
    assert_eq!(client.free_balance(&owner).unwrap(), 5_000_000);
    assert_eq!(client.lock_period().unwrap(), 20);
    assert_eq!(client.token_uri().unwrap(), TokenUri::try_from("ipfs://token").unwrap());
    assert_eq!(
        client.token_balance(&owner).unwrap(),
        client.total_supply().unwrap()
    );
}
