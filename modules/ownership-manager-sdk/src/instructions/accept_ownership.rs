use super::{fmt_tree, required, with_metas, AccountSlot};
use crate::error::Result;
use anchor_lang::{prelude::Pubkey, InstructionData, ToAccountMetas};
use ownership_manager::{accounts, instruction};
use solana_program::instruction::Instruction;
use std::fmt;

/// Builder for `accept_ownership`, signed by the pending owner. The instruction has no
/// parameters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AcceptOwnership {
    pub ownership_record: Option<Pubkey>,
    pub pending_owner: Option<Pubkey>,
}

impl AcceptOwnership {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ownership_record(mut self, ownership_record: Pubkey) -> Self {
        self.ownership_record = Some(ownership_record);
        self
    }

    /// Uses the program's ownership record PDA.
    pub fn with_default_ownership_record(self) -> Self {
        self.ownership_record(crate::ownership_record_address())
    }

    pub fn pending_owner(mut self, pending_owner: Pubkey) -> Self {
        self.pending_owner = Some(pending_owner);
        self
    }

    /// Checks that every account slot is populated.
    pub fn validate(&self) -> Result<()> {
        self.accounts().map(|_| ())
    }

    pub fn build(&self) -> Result<Instruction> {
        let accounts = self.accounts()?;

        Ok(Instruction {
            program_id: crate::PROGRAM_ID,
            accounts: accounts.to_account_metas(None),
            data: instruction::AcceptOwnership {}.data(),
        })
    }

    fn accounts(&self) -> Result<accounts::AcceptOwnership> {
        Ok(accounts::AcceptOwnership {
            ownership_record: required(self.ownership_record, "ownership_record")?,
            pending_owner: required(self.pending_owner, "pending_owner")?,
        })
    }
}

impl fmt::Display for AcceptOwnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = with_metas(
            [
                AccountSlot {
                    name: "ownership_record",
                    key: self.ownership_record,
                    is_writable: true,
                    is_signer: false,
                },
                AccountSlot {
                    name: "pending_owner",
                    key: self.pending_owner,
                    is_writable: false,
                    is_signer: true,
                },
            ],
            self.accounts().ok().map(|accounts| accounts.to_account_metas(None)),
        );

        fmt_tree(
            f,
            "AcceptOwnership",
            Some(instruction::AcceptOwnership {}.data()),
            &[],
            &slots,
        )
    }
}
