use anchor_lang::prelude::*;

#[account]
#[derive(Debug, InitSpace, PartialEq, Eq)]
pub struct OwnershipRecord {
    pub bump: u8,

    /// Program's owner.
    pub owner: Pubkey,

    /// Owner nominated by the current owner, waiting to accept. `None` when no transfer is in
    /// progress. Never equal to `owner`.
    pub pending_owner: Option<Pubkey>,
}

impl OwnershipRecord {
    pub const SEED_PREFIX: &'static [u8] = b"ownership";

    /// Address of the program's single ownership record.
    pub fn address() -> Pubkey {
        Pubkey::find_program_address(&[Self::SEED_PREFIX], &crate::id()).0
    }
}

impl ownable_tools::Ownable for OwnershipRecord {
    fn owner(&self) -> &Pubkey {
        &self.owner
    }

    fn owner_mut(&mut self) -> &mut Pubkey {
        &mut self.owner
    }
}

impl ownable_tools::PendingOwner for OwnershipRecord {
    fn pending_owner(&self) -> &Option<Pubkey> {
        &self.pending_owner
    }

    fn pending_owner_mut(&mut self) -> &mut Option<Pubkey> {
        &mut self.pending_owner
    }
}
