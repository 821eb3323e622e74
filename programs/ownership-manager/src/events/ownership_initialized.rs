use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct OwnershipInitialized {
    pub owner: Pubkey,
}
