use super::{fmt_tree, required, with_metas, AccountSlot};
use crate::error::Result;
use anchor_lang::{prelude::Pubkey, InstructionData, ToAccountMetas};
use ownership_manager::{accounts, instruction};
use solana_program::instruction::Instruction;
use std::fmt;

/// Builder for `cancel_ownership_transfer`, signed by the current owner.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CancelOwnershipTransfer {
    pub ownership_record: Option<Pubkey>,
    pub owner: Option<Pubkey>,
}

impl CancelOwnershipTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ownership_record(mut self, ownership_record: Pubkey) -> Self {
        self.ownership_record = Some(ownership_record);
        self
    }

    pub fn with_default_ownership_record(self) -> Self {
        self.ownership_record(crate::ownership_record_address())
    }

    pub fn owner(mut self, owner: Pubkey) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.accounts().map(|_| ())
    }

    pub fn build(&self) -> Result<Instruction> {
        let accounts = self.accounts()?;

        Ok(Instruction {
            program_id: crate::PROGRAM_ID,
            accounts: accounts.to_account_metas(None),
            data: instruction::CancelOwnershipTransfer {}.data(),
        })
    }

    fn accounts(&self) -> Result<accounts::CancelOwnershipTransfer> {
        Ok(accounts::CancelOwnershipTransfer {
            ownership_record: required(self.ownership_record, "ownership_record")?,
            owner: required(self.owner, "owner")?,
        })
    }
}

impl fmt::Display for CancelOwnershipTransfer {
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
                    name: "owner",
                    key: self.owner,
                    is_writable: false,
                    is_signer: true,
                },
            ],
            self.accounts().ok().map(|accounts| accounts.to_account_metas(None)),
        );

        fmt_tree(
            f,
            "CancelOwnershipTransfer",
            Some(instruction::CancelOwnershipTransfer {}.data()),
            &[],
            &slots,
        )
    }
}
