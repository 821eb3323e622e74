use crate::{error::OwnershipManagerError, events::OwnershipInitialized, state::OwnershipRecord};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::bpf_loader_upgradeable;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Owner of the program, who must also be its upgrade authority.
    #[account(mut)]
    owner: Signer<'info>,

    /// Ownership record. Created once, so a second initialize fails because the PDA already
    /// exists.
    #[account(
        init,
        payer = owner,
        space = 8 + OwnershipRecord::INIT_SPACE,
        seeds = [OwnershipRecord::SEED_PREFIX],
        bump,
    )]
    ownership_record: Account<'info, OwnershipRecord>,

    /// BPF Loader Upgradeable program data for this program. We check this PDA address so that
    /// another program deployed by the same authority cannot be substituted.
    #[account(
        seeds = [crate::ID.as_ref()],
        bump,
        seeds::program = bpf_loader_upgradeable::id(),
        constraint = {
            program_data.upgrade_authority_address == Some(owner.key())
        } @ OwnershipManagerError::UpgradeAuthorityOnly,
    )]
    program_data: Account<'info, ProgramData>,

    system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.ownership_record.set_inner(OwnershipRecord {
        bump: ctx.bumps.ownership_record,
        owner,
        pending_owner: None,
    });

    msg!("Ownership record initialized, owner: {}", owner);
    emit!(OwnershipInitialized { owner });

    // Done.
    Ok(())
}
