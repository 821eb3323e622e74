use crate::{utils::ownable, PendingOwner};
use anchor_lang::prelude::*;

/// Returns true only if a transfer is pending and `pending_owner` is the nominee.
pub fn only_pending_owner<A>(acct: &A, pending_owner: &Pubkey) -> bool
where
    A: PendingOwner + ?Sized,
{
    acct.pending_owner().as_ref() == Some(pending_owner)
}

/// Nominates `new_owner`, replacing any earlier nominee. Returns the replaced nominee.
pub fn transfer_ownership<A>(acct: &mut A, new_owner: &Pubkey) -> Option<Pubkey>
where
    A: PendingOwner + ?Sized,
{
    acct.pending_owner_mut().replace(*new_owner)
}

/// Installs the pending owner as owner and clears the request. Returns false (and leaves the
/// account untouched) if nothing is pending.
pub fn accept_ownership<A>(acct: &mut A) -> bool
where
    A: PendingOwner + ?Sized,
{
    let Some(new_owner) = acct.pending_owner_mut().take() else {
        return false;
    };
    ownable::transfer_ownership(acct, &new_owner);

    true
}

pub fn cancel_transfer_ownership<A>(acct: &mut A) -> Option<Pubkey>
where
    A: PendingOwner + ?Sized,
{
    acct.pending_owner_mut().take()
}
