use crate::{
    events::OwnershipTransferred,
    state::OwnershipRecord,
    utils::admin::{handle_accept_ownership, require_pending_owner},
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct AcceptOwnership<'info> {
    #[account(
        mut,
        seeds = [OwnershipRecord::SEED_PREFIX],
        bump = ownership_record.bump,
    )]
    ownership_record: Account<'info, OwnershipRecord>,

    /// Must be the pending owner set in the [`OwnershipRecord`] account.
    #[account(constraint = require_pending_owner(&ownership_record, &pending_owner.key())?)]
    pending_owner: Signer<'info>,
}

pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
    let ownership_record = &mut ctx.accounts.ownership_record;
    let previous_owner = handle_accept_ownership(ownership_record)?;

    msg!(
        "Ownership transferred: {} -> {}",
        previous_owner,
        ownership_record.owner
    );
    emit!(OwnershipTransferred {
        previous_owner,
        new_owner: ownership_record.owner,
    });

    // Done.
    Ok(())
}
