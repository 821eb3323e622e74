use crate::{
    events::OwnershipTransferRequested,
    state::OwnershipRecord,
    utils::admin::{handle_transfer_ownership, require_owner},
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
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

pub fn transfer_ownership(ctx: Context<TransferOwnership>, proposed_owner: Pubkey) -> Result<()> {
    let ownership_record = &mut ctx.accounts.ownership_record;
    let previous_pending_owner = handle_transfer_ownership(ownership_record, &proposed_owner)?;

    msg!(
        "Ownership transfer requested: {} -> {}",
        ownership_record.owner,
        proposed_owner
    );
    emit!(OwnershipTransferRequested {
        owner: ownership_record.owner,
        pending_owner: proposed_owner,
        previous_pending_owner,
    });

    // Done.
    Ok(())
}
