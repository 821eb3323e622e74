use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
