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

//! Fees charged by the registry.
//!
//! Grant creation is charged a platform fee and, if a referrer is named, a referral fee. Both are
//! computed in basis points of the gross grant amount with floor division. Premium subscriptions
//! are charged a flat fee per month. See [payment] for how fees are paid.

use crate::Balance;

pub mod payment;

pub use payment::{pay_fee, Fee, PlatformFee, PremiumFee, ReferralFee};

/// Denominator of fee rates.
pub const BASIS_POINTS: Balance = 10_000;

/// 2.5% of the gross grant amount.
pub const PLATFORM_FEE_BPS: Balance = 250;

/// 1% of the gross grant amount.
pub const REFERRAL_FEE_BPS: Balance = 100;

/// The smallest gross amount a grant can be created with.
pub const MINIMUM_GRANT_AMOUNT: Balance = 1_000_000;

/// Split of a gross grant amount into fees and the amount funding the grant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GrantFees {
    pub platform_fee: Balance,
    pub referral_fee: Balance,
    /// Amount the selected developer receives.
    pub net_amount: Balance,
}

/// Computes the fees for a grant funded with `gross_amount`.
///
/// `platform_fee + referral_fee + net_amount == gross_amount` always holds.
pub fn grant_fees(gross_amount: Balance, with_referrer: bool) -> GrantFees {
    let platform_fee = basis_points_of(gross_amount, PLATFORM_FEE_BPS);
    let referral_fee = if with_referrer {
        basis_points_of(gross_amount, REFERRAL_FEE_BPS)
    } else {
        0
    };
    GrantFees {
        platform_fee,
        referral_fee,
        net_amount: gross_amount - platform_fee - referral_fee,
    }
}

/// `floor(amount * bps / BASIS_POINTS)` without overflowing for any `amount`.
fn basis_points_of(amount: Balance, bps: Balance) -> Balance {
    let whole = amount / BASIS_POINTS;
    let rest = amount % BASIS_POINTS;
    whole * bps + rest * bps / BASIS_POINTS
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;

    #[test]
    fn ten_units_without_referrer() {
        let fees = grant_fees(10_000_000, false);
        assert_eq!(
            fees,
            GrantFees {
                platform_fee: 250_000,
                referral_fee: 0,
                net_amount: 9_750_000,
            }
        );
    }

    #[test]
    fn ten_units_with_referrer() {
        let fees = grant_fees(10_000_000, true);
        assert_eq!(
            fees,
            GrantFees {
                platform_fee: 250_000,
                referral_fee: 100_000,
                net_amount: 9_650_000,
            }
        );
    }

    #[test]
    fn floor_division() {
        let fees = grant_fees(1_000_039, true);
        assert_eq!(fees.platform_fee, 25_000);
        assert_eq!(fees.referral_fee, 10_000);
        assert_eq!(fees.net_amount, 965_039);
    }

    #[test]
    fn no_overflow_at_max_balance() {
        let fees = grant_fees(Balance::max_value(), true);
        assert_eq!(
            fees.platform_fee,
            Balance::max_value() / BASIS_POINTS * PLATFORM_FEE_BPS
                + Balance::max_value() % BASIS_POINTS * PLATFORM_FEE_BPS / BASIS_POINTS
        );
        assert!(fees.net_amount > 0);
    }

    #[test]
    fn fees_add_up() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let gross: Balance = rng.gen_range(MINIMUM_GRANT_AMOUNT, 1 << 80);
            let with_referrer = rng.gen::<bool>();
            let fees = grant_fees(gross, with_referrer);
            assert_eq!(fees.platform_fee + fees.referral_fee + fees.net_amount, gross);
            assert_eq!(fees.platform_fee, gross * PLATFORM_FEE_BPS / BASIS_POINTS);
            if with_referrer {
                assert_eq!(fees.referral_fee, gross * REFERRAL_FEE_BPS / BASIS_POINTS);
            } else {
                assert_eq!(fees.referral_fee, 0);
            }
        }
    }
}
