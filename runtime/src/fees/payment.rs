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

//! Payment of fees.

use crate::currency::transfer_funds;
use crate::{AccountId, Balance, RegistryError, Store};

/// A fee paid from the transaction author to a recipient determined by the fee.
pub trait Fee {
    fn value(&self) -> Balance;

    fn recipient(&self, store: &Store) -> AccountId;
}

/// Platform share of a grant. Paid to the registry owner.
pub struct PlatformFee(pub Balance);

impl Fee for PlatformFee {
    fn value(&self) -> Balance {
        self.0
    }

    fn recipient(&self, store: &Store) -> AccountId {
        store.owner.get()
    }
}

/// Referral share of a grant. Paid to the referrer named by the grant creator.
pub struct ReferralFee {
    pub referrer: AccountId,
    pub value: Balance,
}

impl Fee for ReferralFee {
    fn value(&self) -> Balance {
        self.value
    }

    fn recipient(&self, _store: &Store) -> AccountId {
        self.referrer
    }
}

/// Price of a premium subscription. Paid to the registry owner.
pub struct PremiumFee(pub Balance);

impl Fee for PremiumFee {
    fn value(&self) -> Balance {
        self.0
    }

    fn recipient(&self, store: &Store) -> AccountId {
        store.owner.get()
    }
}

/// Pay a given fee by transferring it from the `payer` account to the fee's recipient.
pub fn pay_fee(store: &mut Store, fee: impl Fee, payer: &AccountId) -> Result<(), RegistryError> {
    let recipient = fee.recipient(store);
    transfer_funds(store, payer, &recipient, fee.value())
}
