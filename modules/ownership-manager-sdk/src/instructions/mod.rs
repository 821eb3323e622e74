mod accept_ownership;
pub use accept_ownership::*;

mod cancel_ownership_transfer;
pub use cancel_ownership_transfer::*;

mod initialize;
pub use initialize::*;

mod transfer_ownership;
pub use transfer_ownership::*;

use crate::error::{Result, SdkError};
use anchor_lang::prelude::Pubkey;
use solana_program::instruction::AccountMeta;
use std::fmt;

pub(crate) fn required(slot: Option<Pubkey>, name: &'static str) -> Result<Pubkey> {
    slot.ok_or(SdkError::MissingAccount(name))
}

/// One named account slot, as shown by the builders' `Display` impls. The flags given here are
/// only shown while the builder is incomplete.
pub(crate) struct AccountSlot {
    pub name: &'static str,
    pub key: Option<Pubkey>,
    pub is_writable: bool,
    pub is_signer: bool,
}

/// Overwrites the slots with the account metas the program expects. Slots are listed in the same
/// order as the program's accounts struct.
pub(crate) fn with_metas<const N: usize>(
    mut slots: [AccountSlot; N],
    metas: Option<Vec<AccountMeta>>,
) -> [AccountSlot; N] {
    if let Some(metas) = metas {
        for (slot, meta) in slots.iter_mut().zip(metas) {
            slot.key = Some(meta.pubkey);
            slot.is_writable = meta.is_writable;
            slot.is_signer = meta.is_signer;
        }
    }

    slots
}

/// Renders an instruction as a tree:
///
/// ```text
/// AcceptOwnership
/// ├── program: <program id>
/// ├── data: <hex>
/// ├── params
/// │   └── (none)
/// └── accounts
///     ├── ownership_record: <key> [writable]
///     └── pending_owner: <key> [signer]
/// ```
pub(crate) fn fmt_tree(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    data: Option<Vec<u8>>,
    params: &[(&str, Option<String>)],
    accounts: &[AccountSlot],
) -> fmt::Result {
    const UNSET: &str = "<unset>";

    writeln!(f, "{name}")?;
    writeln!(f, "├── program: {}", crate::PROGRAM_ID)?;
    match data {
        Some(data) => writeln!(f, "├── data: {}", hex::encode(data))?,
        None => writeln!(f, "├── data: {UNSET}")?,
    }

    writeln!(f, "├── params")?;
    if params.is_empty() {
        writeln!(f, "│   └── (none)")?;
    }
    let last = params.len().saturating_sub(1);
    for (i, (param, value)) in params.iter().enumerate() {
        let branch = if i == last { "└──" } else { "├──" };
        writeln!(f, "│   {branch} {param}: {}", value.as_deref().unwrap_or(UNSET))?;
    }

    writeln!(f, "└── accounts")?;
    let last = accounts.len().saturating_sub(1);
    for (i, slot) in accounts.iter().enumerate() {
        let branch = if i == last { "└──" } else { "├──" };
        let key = slot.key.map(|key| key.to_string());
        write!(f, "    {branch} {}: {}", slot.name, key.as_deref().unwrap_or(UNSET))?;
        match (slot.is_writable, slot.is_signer) {
            (true, true) => write!(f, " [writable, signer]")?,
            (true, false) => write!(f, " [writable]")?,
            (false, true) => write!(f, " [signer]")?,
            (false, false) => {}
        }
        writeln!(f)?;
    }

    Ok(())
}
