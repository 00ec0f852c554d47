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

//! Test that failed transactions leave the ledger untouched.

use devfunding_registry_client::*;
use devfunding_registry_runtime::event;
use devfunding_registry_test_utils::*;

#[test]
fn failed_grant_creation_is_rolled_back() {
    logger::init_for_tests();
    let owner = alice();
    let creator = account_from_string("creator");
    let referrer = account_from_string("referrer");
    // Paying the referral fee overflows the referrer balance after the platform fee was already
    // paid.
    let client = Client::from_genesis(&GenesisConfig {
        balances: vec![
            (owner, 1 << 60),
            (creator, 1 << 60),
            (referrer, Balance::max_value() - 50_000),
        ],
        ..GenesisConfig::dev()
    });
    let profile = create_random_profile(&client, &creator);

    let tx_included = submit_ok(
        &client,
        &creator,
        random_create_grant_message(10_000_000, Some(referrer)),
    );

    assert_eq!(tx_included.result, Err(RegistryError::ArithmeticOverflow));
    assert_eq!(
        tx_included.events,
        vec![Event::from(event::System::ExtrinsicFailed(RegistryError::ArithmeticOverflow))]
    );
    assert_eq!(client.free_balance(&owner).unwrap(), 1 << 60);
    assert_eq!(client.free_balance(&creator).unwrap(), 1 << 60);
    assert_eq!(
        client.free_balance(&referrer).unwrap(),
        Balance::max_value() - 50_000
    );
    assert_eq!(client.grant_count().unwrap(), 0);
    assert_eq!(client.get_grant(0).unwrap(), None);
    assert_eq!(client.get_profile(&creator).unwrap(), Some(profile));
}

#[test]
fn ledger_continues_after_failed_transaction() {
    let client = emulator();
    let depositor = random_account(&client);
    let beneficiary = random_account(&client);
    let escrow_id = create_random_escrow(&client, &depositor, &beneficiary, 1_000);
    let escrow = client.get_escrow(escrow_id).unwrap().unwrap();

    let failed = submit_ok(
        &client,
        &depositor,
        message::CreateEscrow {
            beneficiary,
            context_id: escrow.context_id,
            context_type: ContextType::Grant,
            amount: 1_000,
        },
    );
    assert_eq!(failed.result, Err(RegistryError::DuplicateEscrowContext));
    assert_eq!(client.escrow_count().unwrap(), 1);
    assert_eq!(client.get_escrow(escrow_id).unwrap(), Some(escrow));

    let next_escrow_id = create_random_escrow(&client, &depositor, &beneficiary, 1_000);
    assert_eq!(next_escrow_id, escrow_id + 1);
}
