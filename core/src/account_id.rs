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

use core::convert::TryFrom;
use parity_scale_codec::{Decode, Encode};
use sha2::{Digest, Sha256};

/// Identifier for accounts, 32 opaque bytes.
///
/// Each account has an associated native currency balance and token balance.
#[derive(Decode, Encode, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId([u8; 32]);

impl AccountId {
    pub const fn from_raw(bytes: [u8; 32]) -> Self {
        AccountId(bytes)
    }

    /// Derive a well-known development account from a seed, e.g. `"Alice"`.
    pub fn from_seed(seed: &str) -> Self {
        Self::hashed(format!("//{}", seed).as_bytes())
    }

    /// Account that holds the funds in custody of a runtime module.
    ///
    /// The runtime does not authenticate authors. Keeping transactions authored by a module
    /// account out of the ledger is up to the layer that submits them.
    pub fn module(name: &[u8]) -> Self {
        let mut input = b"modl/".to_vec();
        input.extend_from_slice(name);
        Self::hashed(&input)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    fn hashed(input: &[u8]) -> Self {
        let digest = Sha256::digest(input);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        AccountId(bytes)
    }
}

impl From<[u8; 32]> for AccountId {
    fn from(bytes: [u8; 32]) -> Self {
        AccountId(bytes)
    }
}

impl From<AccountId> for String {
    fn from(account_id: AccountId) -> Self {
        account_id.to_string()
    }
}

impl TryFrom<String> for AccountId {
    type Error = InvalidAccountIdError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        input.parse()
    }
}

impl core::str::FromStr for AccountId {
    type Err = InvalidAccountIdError;

    /// Parses 64 hex digits, optionally prefixed with `0x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| InvalidAccountIdError("must be 32 hex encoded bytes"))?;
        Ok(AccountId(bytes))
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl core::fmt::Debug for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "AccountId(0x{}..)", hex::encode(&self.0[..4]))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidAccountIdError(&'static str);

impl InvalidAccountIdError {
    /// Error description
    pub fn what(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for InvalidAccountIdError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> std::fmt::Result {
        write!(f, "InvalidAccountIdError({})", self.0)
    }
}

impl std::error::Error for InvalidAccountIdError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn seeds_are_deterministic() {
        assert_eq!(AccountId::from_seed("Alice"), AccountId::from_seed("Alice"));
        assert_ne!(AccountId::from_seed("Alice"), AccountId::from_seed("Bob"));
        assert_ne!(AccountId::module(b"escrow"), AccountId::module(b"grants"));
    }

    #[test]
    fn display_then_parse() {
        let account = AccountId::from_seed("Alice");
        let parsed: AccountId = account.to_string().parse().unwrap();
        assert_eq!(account, parsed);
    }

    #[test]
    fn parse_invalid() {
        assert!("0x1234".parse::<AccountId>().is_err());
        assert!("zz".repeat(32).parse::<AccountId>().is_err());
    }

    #[test]
    fn json_representation() {
        let account = AccountId::from_raw([1u8; 32]);
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "01".repeat(32)));
        let decoded: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, account);
    }
}
