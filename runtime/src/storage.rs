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

//! Transactional ledger state.
//!
//! Every storage item keeps its committed data and a pending overlay. Writes made while a call
//! is dispatched go to the overlay. [Transactional::commit] merges the overlay into the committed
//! data and [Transactional::rollback] discards it.

use std::collections::BTreeMap;

use crate::state::{
    Bounty, DeveloperProfile, Escrow, Grant, GrantApplication, PremiumSubscription, Proposal,
};
use crate::{
    AccountId, Balance, BlockNumber, BountyId, ContextId, ContextType, EscrowId, GrantId,
    ProposalId, Skill, SkillIndex, TokenUri,
};

/// Storage that buffers writes until they are committed.
pub trait Transactional {
    fn commit(&mut self);

    fn rollback(&mut self);
}

/// A map from keys to values.
#[derive(Clone, Debug)]
pub struct StorageMap<K: Ord, V> {
    committed: BTreeMap<K, V>,
    pending: BTreeMap<K, V>,
}

impl<K: Ord + Clone, V: Clone> StorageMap<K, V> {
    pub fn get(&self, key: &K) -> Option<V> {
        self.pending
            .get(key)
            .or_else(|| self.committed.get(key))
            .cloned()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.pending.contains_key(key) || self.committed.contains_key(key)
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.pending.insert(key, value);
    }

    /// Applies `f` to the value stored under `key` and writes the result back.
    ///
    /// Returns [None] without writing if there is no value for `key`.
    pub fn mutate<R>(&mut self, key: &K, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        let mut value = self.get(key)?;
        let result = f(&mut value);
        self.insert(key.clone(), value);
        Some(result)
    }

    /// Number of committed entries. Pending writes are not counted.
    pub fn committed_len(&self) -> usize {
        self.committed.len()
    }

    /// Iterates over the committed entries in key order.
    pub fn iter_committed(&self) -> impl Iterator<Item = (&K, &V)> {
        self.committed.iter()
    }
}

impl<K: Ord, V> Default for StorageMap<K, V> {
    fn default() -> Self {
        StorageMap {
            committed: BTreeMap::new(),
            pending: BTreeMap::new(),
        }
    }
}

impl<K: Ord, V> Transactional for StorageMap<K, V> {
    fn commit(&mut self) {
        self.committed.append(&mut self.pending);
    }

    fn rollback(&mut self) {
        self.pending.clear();
    }
}

/// A single value.
#[derive(Clone, Debug, Default)]
pub struct StorageValue<V> {
    committed: V,
    pending: Option<V>,
}

impl<V: Clone> StorageValue<V> {
    pub fn new(value: V) -> Self {
        StorageValue {
            committed: value,
            pending: None,
        }
    }

    pub fn get(&self) -> V {
        self.pending
            .as_ref()
            .unwrap_or(&self.committed)
            .clone()
    }

    pub fn put(&mut self, value: V) {
        self.pending = Some(value);
    }
}

impl<V> Transactional for StorageValue<V> {
    fn commit(&mut self) {
        if let Some(value) = self.pending.take() {
            self.committed = value;
        }
    }

    fn rollback(&mut self) {
        self.pending = None;
    }
}

/// Declares a struct of storage items that commits and rolls back all of its items together.
macro_rules! decl_store {
    (
        $(#[$attr:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_attr:meta])*
                pub $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Default)]
        pub struct $name {
            $(
                $(#[$field_attr])*
                pub $field: $ty,
            )*
        }

        impl Transactional for $name {
            fn commit(&mut self) {
                $( self.$field.commit(); )*
            }

            fn rollback(&mut self) {
                $( self.$field.rollback(); )*
            }
        }
    };
}

decl_store! {
    /// The complete ledger state.
    pub struct Store {
        /// Account that resolves disputes, mints tokens and receives platform fees.
        pub owner: StorageValue<AccountId>,
        /// Native currency balances.
        pub balances: StorageMap<AccountId, Balance>,

        pub escrows: StorageMap<EscrowId, Escrow>,
        pub escrow_contexts: StorageMap<(ContextId, ContextType), EscrowId>,
        /// Number of escrows created so far. Also the id of the next escrow.
        pub escrow_count: StorageValue<EscrowId>,
        pub lock_period: StorageValue<BlockNumber>,

        pub token_balances: StorageMap<AccountId, Balance>,
        pub total_supply: StorageValue<Balance>,
        pub token_uri: StorageValue<TokenUri>,

        pub profiles: StorageMap<AccountId, DeveloperProfile>,
        pub profile_count: StorageValue<u64>,
        pub skills: StorageMap<(AccountId, SkillIndex), Skill>,
        pub skill_counts: StorageMap<AccountId, SkillIndex>,

        pub grants: StorageMap<GrantId, Grant>,
        pub grant_count: StorageValue<GrantId>,
        pub applications: StorageMap<(GrantId, AccountId), GrantApplication>,

        pub bounties: StorageMap<BountyId, Bounty>,
        pub bounty_count: StorageValue<BountyId>,

        pub subscriptions: StorageMap<AccountId, PremiumSubscription>,

        pub proposals: StorageMap<ProposalId, Proposal>,
        pub proposal_count: StorageValue<ProposalId>,
        /// Votes cast, keyed by proposal and voter. The value is the vote.
        pub votes: StorageMap<(ProposalId, AccountId), bool>,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn map_commit_and_rollback() {
        let mut map = StorageMap::<u64, u64>::default();
        map.insert(1, 10);
        assert_eq!(map.get(&1), Some(10));
        map.commit();

        map.insert(1, 11);
        map.insert(2, 20);
        assert_eq!(map.get(&1), Some(11));
        assert!(map.contains_key(&2));
        map.rollback();

        assert_eq!(map.get(&1), Some(10));
        assert_eq!(map.get(&2), None);
        assert_eq!(map.committed_len(), 1);
    }

    #[test]
    fn map_mutate() {
        let mut map = StorageMap::<u64, u64>::default();
        assert_eq!(map.mutate(&1, |v| *v += 1), None);
        assert!(!map.contains_key(&1));

        map.insert(1, 1);
        map.commit();
        assert_eq!(
            map.mutate(&1, |v| {
                *v += 1;
                *v
            }),
            Some(2)
        );
        map.commit();
        assert_eq!(map.iter_committed().collect::<Vec<_>>(), vec![(&1, &2)]);
    }

    #[test]
    fn value_commit_and_rollback() {
        let mut value = StorageValue::new(5u64);
        value.put(6);
        assert_eq!(value.get(), 6);
        value.rollback();
        assert_eq!(value.get(), 5);
        value.put(7);
        value.commit();
        value.rollback();
        assert_eq!(value.get(), 7);
    }

    #[test]
    fn store_rolls_back_all_items() {
        let mut store = Store::default();
        let alice = AccountId::from_seed("Alice");
        store.balances.insert(alice, 100);
        store.escrow_count.put(3);
        store.commit();

        store.balances.insert(alice, 0);
        store.escrow_count.put(4);
        store.proposals.insert(
            0,
            Proposal {
                proposer: alice,
                description: Default::default(),
                yes_votes: 0,
                no_votes: 0,
                is_active: true,
                created_at: 1,
            },
        );
        store.rollback();

        assert_eq!(store.balances.get(&alice), Some(100));
        assert_eq!(store.escrow_count.get(), 3);
        assert_eq!(store.proposals.get(&0), None);
    }
}
