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

//! Escrow ledger.
//!
//! Escrowed funds are held by the [custody_account] from creation until the escrow is released
//! to the beneficiary or refunded to the depositor.

use crate::currency::transfer_funds;
use crate::event::Registry as RegistryEvent;
use crate::guard::{ensure_author, ensure_author_in, ensure_owner};
use crate::message;
use crate::state::Escrow;
use crate::{
    AccountId, Balance, BlockNumber, ContextId, ContextType, EscrowId, Event, Origin,
    RegistryError, Store, BLOCKS_PER_DAY,
};

/// Lock period applied to new escrows unless configured otherwise. Seven days.
pub const DEFAULT_LOCK_PERIOD: BlockNumber = 7 * BLOCKS_PER_DAY;

/// Account that holds the funds of all unsettled escrows.
pub fn custody_account() -> AccountId {
    AccountId::module(b"escrow")
}

pub fn get_escrow_by_context(
    store: &Store,
    context_id: ContextId,
    context_type: ContextType,
) -> Option<Escrow> {
    let escrow_id = store.escrow_contexts.get(&(context_id, context_type))?;
    store.escrows.get(&escrow_id)
}

/// True if the escrow is active and its lock period has elapsed at `now`.
pub fn can_refund(escrow: &Escrow, now: BlockNumber) -> bool {
    escrow.is_active() && now >= escrow.release_after
}

fn get_escrow(store: &Store, escrow_id: EscrowId) -> Result<Escrow, RegistryError> {
    store
        .escrows
        .get(&escrow_id)
        .ok_or(RegistryError::InexistentEscrow)
}

/// Ensure the escrow has not been settled yet.
fn ensure_unsettled(escrow: &Escrow) -> Result<(), RegistryError> {
    ensure!(!escrow.is_released, RegistryError::AlreadyReleased);
    ensure!(!escrow.is_refunded, RegistryError::AlreadyRefunded);
    Ok(())
}

/// Records a new escrow of `amount` from `depositor` to `beneficiary` bound to `context`.
///
/// Does not move any funds. The caller makes sure that `amount` is held by the
/// [custody_account].
pub fn open(
    store: &mut Store,
    depositor: AccountId,
    beneficiary: AccountId,
    context: (ContextId, ContextType),
    amount: Balance,
    now: BlockNumber,
) -> Result<EscrowId, RegistryError> {
    ensure!(amount > 0, RegistryError::InvalidEscrowAmount);
    ensure!(beneficiary != depositor, RegistryError::SelfEscrow);
    ensure!(
        !store.escrow_contexts.contains_key(&context),
        RegistryError::DuplicateEscrowContext
    );

    let escrow_id = store.escrow_count.get();
    let next_id = escrow_id
        .checked_add(1)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    let release_after = now
        .checked_add(store.lock_period.get())
        .ok_or(RegistryError::ArithmeticOverflow)?;
    let (context_id, context_type) = context;
    store.escrows.insert(
        escrow_id,
        Escrow {
            depositor,
            beneficiary,
            amount,
            context_id,
            context_type,
            created_at: now,
            release_after,
            is_released: false,
            is_disputed: false,
            is_refunded: false,
        },
    );
    store.escrow_contexts.insert(context, escrow_id);
    store.escrow_count.put(next_id);
    Ok(escrow_id)
}

pub fn create_escrow(
    store: &mut Store,
    origin: &Origin,
    message: message::CreateEscrow,
) -> Result<Event, RegistryError> {
    let depositor = origin.author;
    let escrow_id = open(
        store,
        depositor,
        message.beneficiary,
        (message.context_id, message.context_type),
        message.amount,
        origin.block_number,
    )?;
    // The context of a posted bounty is reserved for the escrow that pays its hunter.
    ensure!(
        message.context_type != ContextType::Bounty
            || !store.bounties.contains_key(&message.context_id),
        RegistryError::DuplicateEscrowContext
    );
    transfer_funds(store, &depositor, &custody_account(), message.amount)?;

    Ok(Event::Registry(RegistryEvent::EscrowCreated(
        escrow_id,
        depositor,
        message.beneficiary,
        message.amount,
    )))
}

pub fn release_escrow(
    store: &mut Store,
    origin: &Origin,
    message: message::ReleaseEscrow,
) -> Result<Event, RegistryError> {
    let escrow = get_escrow(store, message.escrow_id)?;
    ensure_author(origin, &escrow.depositor, RegistryError::EscrowUnauthorized)?;
    ensure_unsettled(&escrow)?;
    ensure!(!escrow.is_disputed, RegistryError::EscrowDisputed);

    transfer_funds(store, &custody_account(), &escrow.beneficiary, escrow.amount)?;
    let escrow = escrow.release();
    let event = RegistryEvent::EscrowReleased(message.escrow_id, escrow.beneficiary, escrow.amount);
    store.escrows.insert(message.escrow_id, escrow);
    Ok(Event::Registry(event))
}

pub fn dispute_escrow(
    store: &mut Store,
    origin: &Origin,
    message: message::DisputeEscrow,
) -> Result<Event, RegistryError> {
    let escrow = get_escrow(store, message.escrow_id)?;
    ensure_author_in(
        origin,
        &[escrow.depositor, escrow.beneficiary],
        RegistryError::EscrowUnauthorized,
    )?;
    ensure_unsettled(&escrow)?;
    ensure!(!escrow.is_disputed, RegistryError::AlreadyDisputed);

    store.escrows.insert(message.escrow_id, escrow.dispute());
    Ok(Event::Registry(RegistryEvent::EscrowDisputed(
        message.escrow_id,
        origin.author,
    )))
}

pub fn resolve_dispute(
    store: &mut Store,
    origin: &Origin,
    message: message::ResolveDispute,
) -> Result<Event, RegistryError> {
    let escrow = get_escrow(store, message.escrow_id)?;
    ensure_owner(store, origin, RegistryError::EscrowUnauthorized)?;
    ensure_unsettled(&escrow)?;
    ensure!(escrow.is_disputed, RegistryError::EscrowNotDisputed);

    let escrow = if message.favor_beneficiary {
        transfer_funds(store, &custody_account(), &escrow.beneficiary, escrow.amount)?;
        escrow.release()
    } else {
        transfer_funds(store, &custody_account(), &escrow.depositor, escrow.amount)?;
        escrow.refund()
    };
    store.escrows.insert(message.escrow_id, escrow);
    Ok(Event::Registry(RegistryEvent::DisputeResolved(
        message.escrow_id,
        message.favor_beneficiary,
    )))
}

pub fn refund_escrow(
    store: &mut Store,
    origin: &Origin,
    message: message::RefundEscrow,
) -> Result<Event, RegistryError> {
    let escrow = get_escrow(store, message.escrow_id)?;
    ensure_author(origin, &escrow.depositor, RegistryError::EscrowUnauthorized)?;
    ensure_unsettled(&escrow)?;
    ensure!(!escrow.is_disputed, RegistryError::EscrowDisputed);
    ensure!(
        origin.block_number >= escrow.release_after,
        RegistryError::LockActive
    );

    transfer_funds(store, &custody_account(), &escrow.depositor, escrow.amount)?;
    let escrow = escrow.refund();
    let event = RegistryEvent::EscrowRefunded(message.escrow_id, escrow.depositor, escrow.amount);
    store.escrows.insert(message.escrow_id, escrow);
    Ok(Event::Registry(event))
}

/// Sets the lock period for escrows created afterwards. Existing escrows are not affected.
pub fn set_lock_period(
    store: &mut Store,
    origin: &Origin,
    message: message::SetLockPeriod,
) -> Result<Event, RegistryError> {
    ensure_owner(store, origin, RegistryError::EscrowUnauthorized)?;
    ensure!(message.period > 0, RegistryError::InvalidEscrowAmount);

    store.lock_period.put(message.period);
    Ok(Event::Registry(RegistryEvent::LockPeriodSet(message.period)))
}
