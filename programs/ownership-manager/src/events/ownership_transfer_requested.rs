use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct OwnershipTransferRequested {
    pub owner: Pubkey,
    pub pending_owner: Pubkey,

    /// Nominee replaced by this request, if one was still pending.
    pub previous_pending_owner: Option<Pubkey>,
}
