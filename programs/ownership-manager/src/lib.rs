#![doc = include_str!("../README.md")]
#![allow(clippy::result_large_err)]

pub mod error;

pub mod events;

mod processor;
pub(crate) use processor::*;

pub mod state;

pub mod utils;

use anchor_lang::{prelude::*, solana_program::bpf_loader_upgradeable};

cfg_if::cfg_if! {
    if #[cfg(feature = "mainnet")] {
        // Placeholder.
        declare_id!("AdminTransfer111111111111111111111111111111");
    } else if #[cfg(feature = "testnet")] {
        // Placeholder.
        declare_id!("AdminTransferDev111111111111111111111111111");
    } else {
        declare_id!("AdminTransfer111111111111111111111111111111");
    }
}

/// Address of this program's program data account, owned by the BPF Loader Upgradeable program.
pub fn program_data_address() -> Pubkey {
    Pubkey::find_program_address(&[crate::ID.as_ref()], &bpf_loader_upgradeable::id()).0
}

#[program]
pub mod ownership_manager {
    use super::*;

    /// This instruction creates the program's [OwnershipRecord](state::OwnershipRecord). Only the
    /// program's upgrade authority can call it, and it becomes the record's first owner.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        processor::initialize(ctx)
    }

    /// This instruction sets the `pending_owner` field in the `OwnershipRecord` account. This
    /// instruction is owner-only. Calling it again before the request is accepted replaces the
    /// previous pending owner.
    ///
    /// # Arguments
    ///
    /// * `ctx` - `TransferOwnership` context.
    /// * `proposed_owner` - Key of the account nominated to become owner.
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, proposed_owner: Pubkey) -> Result<()> {
        processor::transfer_ownership(ctx, proposed_owner)
    }

    /// This instruction confirms that the `pending_owner` is the signer of the transaction and
    /// moves it into the `owner` field, clearing the request. It takes no arguments.
    pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
        processor::accept_ownership(ctx)
    }

    /// This instruction cancels the ownership transfer request by setting the `pending_owner`
    /// field in the `OwnershipRecord` account to `None`. This instruction is owner-only.
    pub fn cancel_ownership_transfer(ctx: Context<CancelOwnershipTransfer>) -> Result<()> {
        processor::cancel_ownership_transfer(ctx)
    }
}
