use super::{fmt_tree, required, with_metas, AccountSlot};
use crate::error::Result;
use anchor_lang::{prelude::Pubkey, system_program, InstructionData, ToAccountMetas};
use ownership_manager::{accounts, instruction};
use solana_program::instruction::Instruction;
use std::fmt;

/// Builder for `initialize`, signed and paid for by the program's upgrade authority.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Initialize {
    pub owner: Option<Pubkey>,
    pub ownership_record: Option<Pubkey>,
    pub program_data: Option<Pubkey>,
}

impl Initialize {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(mut self, owner: Pubkey) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn ownership_record(mut self, ownership_record: Pubkey) -> Self {
        self.ownership_record = Some(ownership_record);
        self
    }

    pub fn program_data(mut self, program_data: Pubkey) -> Self {
        self.program_data = Some(program_data);
        self
    }

    /// Uses the program's ownership record PDA and its program data account.
    pub fn with_default_accounts(self) -> Self {
        self.ownership_record(crate::ownership_record_address())
            .program_data(ownership_manager::program_data_address())
    }

    pub fn validate(&self) -> Result<()> {
        self.accounts().map(|_| ())
    }

    pub fn build(&self) -> Result<Instruction> {
        let accounts = self.accounts()?;

        Ok(Instruction {
            program_id: crate::PROGRAM_ID,
            accounts: accounts.to_account_metas(None),
            data: instruction::Initialize {}.data(),
        })
    }

    fn accounts(&self) -> Result<accounts::Initialize> {
        Ok(accounts::Initialize {
            owner: required(self.owner, "owner")?,
            ownership_record: required(self.ownership_record, "ownership_record")?,
            program_data: required(self.program_data, "program_data")?,
            system_program: system_program::ID,
        })
    }
}

impl fmt::Display for Initialize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = with_metas(
            [
                AccountSlot {
                    name: "owner",
                    key: self.owner,
                    is_writable: true,
                    is_signer: true,
                },
                AccountSlot {
                    name: "ownership_record",
                    key: self.ownership_record,
                    is_writable: true,
                    is_signer: false,
                },
                AccountSlot {
                    name: "program_data",
                    key: self.program_data,
                    is_writable: false,
                    is_signer: false,
                },
                AccountSlot {
                    name: "system_program",
                    key: Some(system_program::ID),
                    is_writable: false,
                    is_signer: false,
                },
            ],
            self.accounts().ok().map(|accounts| accounts.to_account_metas(None)),
        );

        fmt_tree(
            f,
            "Initialize",
            Some(instruction::Initialize {}.data()),
            &[],
            &slots,
        )
    }
}
