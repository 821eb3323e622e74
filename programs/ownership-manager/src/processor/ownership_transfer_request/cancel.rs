use crate::{
    events::OwnershipTransferCancelled,
    state::OwnershipRecord,
    utils::admin::{handle_cancel_ownership_transfer, require_owner},
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CancelOwnershipTransfer<'info> {
    /// Ownership record, which can only be modified by the configured owner.
    #[account(
        mut,
        seeds = [OwnershipRecord::SEED_PREFIX],
        bump = ownership_record.bump,
    )]
    ownership_record: Account<'info, OwnershipRecord>,

    #[account(constraint = require_owner(&ownership_record, &owner.key())?)]
    owner: Signer<'info>,
}

pub fn cancel_ownership_transfer(ctx: Context<CancelOwnershipTransfer>) -> Result<()> {
    let ownership_record = &mut ctx.accounts.ownership_record;
    let cancelled_pending_owner = handle_cancel_ownership_transfer(ownership_record)?;

    msg!("Ownership transfer to {} cancelled", cancelled_pending_owner);
    emit!(OwnershipTransferCancelled {
        owner: ownership_record.owner,
        cancelled_pending_owner,
    });

    // Done.
    Ok(())
}
