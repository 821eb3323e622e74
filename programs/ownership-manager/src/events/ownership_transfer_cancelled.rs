use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct OwnershipTransferCancelled {
    pub owner: Pubkey,
    pub cancelled_pending_owner: Pubkey,
}
