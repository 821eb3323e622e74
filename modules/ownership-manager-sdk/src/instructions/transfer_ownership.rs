use super::{fmt_tree, required, with_metas, AccountSlot};
use crate::error::{Result, SdkError};
use anchor_lang::{prelude::Pubkey, InstructionData, ToAccountMetas};
use ownership_manager::{accounts, instruction};
use solana_program::instruction::Instruction;
use std::fmt;

/// Builder for `transfer_ownership`, signed by the current owner.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransferOwnership {
    pub ownership_record: Option<Pubkey>,
    pub owner: Option<Pubkey>,
    pub proposed_owner: Option<Pubkey>,
}

impl TransferOwnership {
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

    pub fn proposed_owner(mut self, proposed_owner: Pubkey) -> Self {
        self.proposed_owner = Some(proposed_owner);
        self
    }

    /// Checks that every account slot and the `proposed_owner` argument are populated. Accounts
    /// are checked first.
    pub fn validate(&self) -> Result<()> {
        self.accounts()?;
        self.args().map(|_| ())
    }

    pub fn build(&self) -> Result<Instruction> {
        let accounts = self.accounts()?;
        let args = self.args()?;

        Ok(Instruction {
            program_id: crate::PROGRAM_ID,
            accounts: accounts.to_account_metas(None),
            data: args.data(),
        })
    }

    fn accounts(&self) -> Result<accounts::TransferOwnership> {
        Ok(accounts::TransferOwnership {
            ownership_record: required(self.ownership_record, "ownership_record")?,
            owner: required(self.owner, "owner")?,
        })
    }

    fn args(&self) -> Result<instruction::TransferOwnership> {
        let proposed_owner = self
            .proposed_owner
            .ok_or(SdkError::MissingArgument("proposed_owner"))?;

        Ok(instruction::TransferOwnership { proposed_owner })
    }
}

impl fmt::Display for TransferOwnership {
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
            "TransferOwnership",
            self.args().ok().map(|args| args.data()),
            &[(
                "proposed_owner",
                self.proposed_owner.map(|key| key.to_string()),
            )],
            &slots,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anchor_lang::Discriminator;
    use solana_program::instruction::AccountMeta;

    #[test]
    fn build_transfer_ownership() {
        let owner = Pubkey::new_unique();
        let proposed_owner = Pubkey::new_unique();
        let ix = TransferOwnership::new()
            .with_default_ownership_record()
            .owner(owner)
            .proposed_owner(proposed_owner)
            .build()
            .unwrap();

        assert_eq!(
            ix.accounts,
            vec![
                AccountMeta::new(crate::ownership_record_address(), false),
                AccountMeta::new_readonly(owner, true),
            ]
        );

        let (discriminator, args) = ix.data.split_at(8);
        assert_eq!(
            discriminator,
            &instruction::TransferOwnership::DISCRIMINATOR[..]
        );
        assert_eq!(args, proposed_owner.as_ref());
    }

    #[test]
    fn proposed_owner_is_required() {
        let builder = TransferOwnership::new()
            .with_default_ownership_record()
            .owner(Pubkey::new_unique());

        assert_eq!(
            builder.validate(),
            Err(SdkError::MissingArgument("proposed_owner"))
        );

        let tree = builder.to_string();
        assert!(tree.contains("├── data: <unset>\n"));
        assert!(tree.contains("│   └── proposed_owner: <unset>\n"));
    }

    #[test]
    fn accounts_are_checked_before_args() {
        assert_eq!(
            TransferOwnership::new().build().unwrap_err(),
            SdkError::MissingAccount("ownership_record")
        );
    }
}
