//! Client-side builders for the Ownership Manager program's instructions.
//!
//! Each builder holds its account slots as options so that an incomplete instruction is caught
//! locally by [`build`](AcceptOwnership::build) instead of being rejected by the cluster.

pub mod error;

pub mod instructions;
pub use instructions::*;

use anchor_lang::prelude::Pubkey;

pub use ownership_manager::ID as PROGRAM_ID;

/// Address of the program's ownership record PDA.
pub fn ownership_record_address() -> Pubkey {
    ownership_manager::state::OwnershipRecord::address()
}
