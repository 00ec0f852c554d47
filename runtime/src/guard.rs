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

//! Authorization and input checks shared by all calls.

use crate::{AccountId, Origin, RegistryError, Store, Text};

/// Ensure that the author of the transaction is `account`.
pub fn ensure_author(
    origin: &Origin,
    account: &AccountId,
    error: RegistryError,
) -> Result<(), RegistryError> {
    ensure!(origin.author == *account, error);
    Ok(())
}

/// Ensure that the author of the transaction is one of `accounts`.
pub fn ensure_author_in(
    origin: &Origin,
    accounts: &[AccountId],
    error: RegistryError,
) -> Result<(), RegistryError> {
    ensure!(accounts.contains(&origin.author), error);
    Ok(())
}

/// Ensure that the author of the transaction is the registry owner.
pub fn ensure_owner(
    store: &Store,
    origin: &Origin,
    error: RegistryError,
) -> Result<(), RegistryError> {
    ensure_author(origin, &store.owner.get(), error)
}

pub fn ensure_not_empty<const MAX: usize>(
    text: &Text<MAX>,
    error: RegistryError,
) -> Result<(), RegistryError> {
    ensure!(!text.is_empty(), error);
    Ok(())
}
