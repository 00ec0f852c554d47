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

//! Initial ledger state.
//!
//! A [GenesisConfig] can be written by hand, loaded from JSON with [GenesisConfig::from_json] or
//! obtained for local development with [GenesisConfig::dev].

use core::convert::TryFrom;
use serde::{Deserialize, Serialize};

use crate::escrow::DEFAULT_LOCK_PERIOD;
use crate::storage::{StorageValue, Store, Transactional};
use crate::token::{self, DEFAULT_TOKEN_URI, INITIAL_SUPPLY};
use crate::{AccountId, Balance, BlockNumber, TokenUri};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenesisConfig {
    /// Account that resolves disputes, administers the token and receives fees.
    pub owner: AccountId,
    /// Initial native currency balances.
    #[serde(default)]
    pub balances: Vec<(AccountId, Balance)>,
    /// Receives the initial token supply. Defaults to the owner.
    #[serde(default)]
    pub token_holder: Option<AccountId>,
    #[serde(default = "default_initial_token_supply")]
    pub initial_token_supply: Balance,
    #[serde(default = "default_lock_period")]
    pub lock_period: BlockNumber,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_initial_token_supply() -> Balance {
    INITIAL_SUPPLY
}

fn default_lock_period() -> BlockNumber {
    DEFAULT_LOCK_PERIOD
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

#[derive(thiserror::Error, Debug)]
pub enum GenesisError {
    #[error("invalid genesis configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("initial token supply {0} exceeds the maximum supply")]
    InitialSupplyExceeded(Balance),
    #[error("the lock period must be positive")]
    ZeroLockPeriod,
    #[error("invalid token URI {0:?}")]
    InvalidTokenUri(String),
}

impl GenesisConfig {
    /// Configuration for local development.
    ///
    /// Alice owns the registry. Alice, Bob, Charlie and Dave are endowed with `1 << 60`.
    pub fn dev() -> Self {
        let endowed_accounts = vec![
            AccountId::from_seed("Alice"),
            AccountId::from_seed("Bob"),
            AccountId::from_seed("Charlie"),
            AccountId::from_seed("Dave"),
        ];
        GenesisConfig {
            owner: AccountId::from_seed("Alice"),
            balances: endowed_accounts.into_iter().map(|k| (k, 1 << 60)).collect(),
            token_holder: None,
            initial_token_supply: INITIAL_SUPPLY,
            lock_period: DEFAULT_LOCK_PERIOD,
            token_uri: DEFAULT_TOKEN_URI.to_string(),
        }
    }

    /// Parses and validates a JSON genesis configuration.
    pub fn from_json(json: &str) -> Result<Self, GenesisError> {
        let config: GenesisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, GenesisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.initial_token_supply > token::MAX_SUPPLY {
            return Err(GenesisError::InitialSupplyExceeded(
                self.initial_token_supply,
            ));
        }
        if self.lock_period == 0 {
            return Err(GenesisError::ZeroLockPeriod);
        }
        self.parse_token_uri()?;
        Ok(())
    }

    fn parse_token_uri(&self) -> Result<TokenUri, GenesisError> {
        TokenUri::try_from(self.token_uri.as_str())
            .ok()
            .filter(|uri| !uri.is_empty())
            .ok_or_else(|| GenesisError::InvalidTokenUri(self.token_uri.clone()))
    }

    /// Builds the committed ledger state.
    ///
    /// Invalid values are replaced with their defaults. Use [GenesisConfig::validate] to reject
    /// them instead.
    pub fn build(&self) -> Store {
        let mut store = Store {
            owner: StorageValue::new(self.owner),
            lock_period: StorageValue::new(if self.lock_period == 0 {
                DEFAULT_LOCK_PERIOD
            } else {
                self.lock_period
            }),
            ..Store::default()
        };
        let token_uri = match self.parse_token_uri() {
            Ok(uri) => uri,
            Err(error) => {
                log::warn!("{}, using {}", error, DEFAULT_TOKEN_URI);
                TokenUri::try_from(DEFAULT_TOKEN_URI).unwrap_or_default()
            }
        };
        store.token_uri = StorageValue::new(token_uri);

        for (account, balance) in &self.balances {
            let total = store
                .balances
                .get(account)
                .unwrap_or(0)
                .saturating_add(*balance);
            store.balances.insert(*account, total);
        }

        let token_holder = self.token_holder.unwrap_or(self.owner);
        if let Err(error) = token::mint(&mut store, &token_holder, self.initial_token_supply) {
            log::warn!("initial token supply not minted: {}", error);
        }

        store.commit();
        store
    }
}
