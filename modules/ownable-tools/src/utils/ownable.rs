use crate::Ownable;
use anchor_lang::prelude::*;

pub fn only_owner<A>(acct: &A, owner: &Pubkey) -> bool
where
    A: Ownable + ?Sized,
{
    *acct.owner() == *owner
}

pub fn transfer_ownership<A>(acct: &mut A, new_owner: &Pubkey)
where
    A: Ownable + ?Sized,
{
    *acct.owner_mut() = *new_owner;
}
