use crate::{error::OwnershipManagerError, state::OwnershipRecord};
use anchor_lang::prelude::*;
use ownable_tools::utils::{ownable, pending_owner};

pub fn require_owner(record: &OwnershipRecord, owner: &Pubkey) -> Result<bool> {
    if ownable::only_owner(record, owner) {
        Ok(true)
    } else {
        Err(error!(OwnershipManagerError::OwnerOnly).with_pubkeys((record.owner, *owner)))
    }
}

/// Checks that a transfer is pending and that `pending_owner` is its nominee. A nominee replaced
/// by a later request fails here.
pub fn require_pending_owner(record: &OwnershipRecord, pending_owner: &Pubkey) -> Result<bool> {
    let expected = record
        .pending_owner
        .ok_or_else(|| error!(OwnershipManagerError::NoTransferOwnershipRequest))?;

    if pending_owner::only_pending_owner(record, pending_owner) {
        Ok(true)
    } else {
        Err(error!(OwnershipManagerError::NotPendingOwner).with_pubkeys((expected, *pending_owner)))
    }
}

pub fn require_valid_proposed_owner(
    record: &OwnershipRecord,
    proposed_owner: &Pubkey,
) -> Result<bool> {
    require_keys_neq!(
        *proposed_owner,
        Pubkey::default(),
        OwnershipManagerError::InvalidNewOwner
    );
    require_keys_neq!(
        *proposed_owner,
        record.owner,
        OwnershipManagerError::AlreadyOwner
    );

    Ok(true)
}

/// Nominates `proposed_owner`. Returns the nominee it replaced, if any.
pub(crate) fn handle_transfer_ownership(
    record: &mut OwnershipRecord,
    proposed_owner: &Pubkey,
) -> Result<Option<Pubkey>> {
    require_valid_proposed_owner(record, proposed_owner)?;

    Ok(pending_owner::transfer_ownership(record, proposed_owner))
}

/// Installs the pending owner. Returns the owner it replaced.
pub(crate) fn handle_accept_ownership(record: &mut OwnershipRecord) -> Result<Pubkey> {
    let previous_owner = record.owner;

    require!(
        pending_owner::accept_ownership(record),
        OwnershipManagerError::NoTransferOwnershipRequest
    );

    Ok(previous_owner)
}

/// Withdraws the pending request. Returns the nominee that was cancelled.
pub(crate) fn handle_cancel_ownership_transfer(record: &mut OwnershipRecord) -> Result<Pubkey> {
    pending_owner::cancel_transfer_ownership(record)
        .ok_or_else(|| error!(OwnershipManagerError::NoTransferOwnershipRequest))
}

#[cfg(test)]
mod test {
    use super::*;

    fn record(owner: Pubkey) -> OwnershipRecord {
        OwnershipRecord {
            bump: 255,
            owner,
            pending_owner: None,
        }
    }

    fn assert_error(result: Result<impl std::fmt::Debug>, expected: OwnershipManagerError) {
        let err = result.unwrap_err();
        assert_eq!(
            ProgramError::from(err),
            ProgramError::Custom(u32::from(expected))
        );
    }

    // Account constraints run before the handler, so mirror that order here.

    fn transfer(
        record: &mut OwnershipRecord,
        signer: &Pubkey,
        proposed_owner: &Pubkey,
    ) -> Result<Option<Pubkey>> {
        require_owner(record, signer)?;
        handle_transfer_ownership(record, proposed_owner)
    }

    fn accept(record: &mut OwnershipRecord, signer: &Pubkey) -> Result<Pubkey> {
        require_pending_owner(record, signer)?;
        handle_accept_ownership(record)
    }

    fn cancel(record: &mut OwnershipRecord, signer: &Pubkey) -> Result<Pubkey> {
        require_owner(record, signer)?;
        handle_cancel_ownership_transfer(record)
    }

    #[test]
    fn transfer_sets_pending_owner() {
        let owner = Pubkey::new_unique();
        let new_owner = Pubkey::new_unique();
        let mut record = record(owner);

        assert_eq!(transfer(&mut record, &owner, &new_owner).unwrap(), None);
        assert_eq!(record.owner, owner);
        assert_eq!(record.pending_owner, Some(new_owner));
    }

    #[test]
    fn transfer_by_non_owner_fails() {
        let owner = Pubkey::new_unique();
        let mut record = record(owner);

        assert_error(
            transfer(&mut record, &Pubkey::new_unique(), &Pubkey::new_unique()),
            OwnershipManagerError::OwnerOnly,
        );
        assert_eq!(record, self::record(owner));
    }

    #[test]
    fn transfer_to_current_owner_fails() {
        let owner = Pubkey::new_unique();
        let mut record = record(owner);

        assert_error(
            transfer(&mut record, &owner, &owner),
            OwnershipManagerError::AlreadyOwner,
        );
        assert_eq!(record.pending_owner, None);
    }

    #[test]
    fn transfer_to_zero_pubkey_fails() {
        let owner = Pubkey::new_unique();
        let mut record = record(owner);

        assert_error(
            transfer(&mut record, &owner, &Pubkey::default()),
            OwnershipManagerError::InvalidNewOwner,
        );
        assert_eq!(record.pending_owner, None);
    }

    #[test]
    fn accept_without_request_fails() {
        let owner = Pubkey::new_unique();
        let mut record = record(owner);

        assert_error(
            accept(&mut record, &owner),
            OwnershipManagerError::NoTransferOwnershipRequest,
        );
        assert_error(
            handle_accept_ownership(&mut record),
            OwnershipManagerError::NoTransferOwnershipRequest,
        );
        assert_eq!(record, self::record(owner));
    }

    #[test]
    fn accept_by_pending_owner() {
        let owner = Pubkey::new_unique();
        let new_owner = Pubkey::new_unique();
        let mut record = record(owner);
        transfer(&mut record, &owner, &new_owner).unwrap();

        assert_eq!(accept(&mut record, &new_owner).unwrap(), owner);
        assert_eq!(record.owner, new_owner);
        assert_eq!(record.pending_owner, None);

        // The previous owner has no rights left.
        assert_error(
            transfer(&mut record, &owner, &owner),
            OwnershipManagerError::OwnerOnly,
        );
    }

    #[test]
    fn accept_by_stranger_fails() {
        let (a, b, c) = (
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        );
        let mut record = record(a);

        transfer(&mut record, &a, &b).unwrap();
        let before = record.clone();

        assert_error(accept(&mut record, &c), OwnershipManagerError::NotPendingOwner);
        assert_error(accept(&mut record, &a), OwnershipManagerError::NotPendingOwner);
        assert_eq!(record, before);

        accept(&mut record, &b).unwrap();
        assert_eq!(
            record,
            OwnershipRecord {
                bump: 255,
                owner: b,
                pending_owner: None,
            }
        );
    }

    #[test]
    fn transfer_again_replaces_pending_owner() {
        let owner = Pubkey::new_unique();
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        let mut record = record(owner);

        transfer(&mut record, &owner, &first).unwrap();
        assert_eq!(transfer(&mut record, &owner, &second).unwrap(), Some(first));

        assert_error(
            accept(&mut record, &first),
            OwnershipManagerError::NotPendingOwner,
        );

        accept(&mut record, &second).unwrap();
        assert_eq!(record.owner, second);
        assert_eq!(record.pending_owner, None);
    }

    #[test]
    fn cancel_clears_request() {
        let owner = Pubkey::new_unique();
        let new_owner = Pubkey::new_unique();
        let mut record = record(owner);
        transfer(&mut record, &owner, &new_owner).unwrap();

        assert_eq!(cancel(&mut record, &owner).unwrap(), new_owner);
        assert_eq!(record, self::record(owner));

        assert_error(
            accept(&mut record, &new_owner),
            OwnershipManagerError::NoTransferOwnershipRequest,
        );
    }

    #[test]
    fn cancel_requires_owner_and_request() {
        let owner = Pubkey::new_unique();
        let new_owner = Pubkey::new_unique();
        let mut record = record(owner);

        assert_error(
            cancel(&mut record, &owner),
            OwnershipManagerError::NoTransferOwnershipRequest,
        );

        transfer(&mut record, &owner, &new_owner).unwrap();
        assert_error(
            cancel(&mut record, &new_owner),
            OwnershipManagerError::OwnerOnly,
        );
        assert_eq!(record.pending_owner, Some(new_owner));
    }
}
