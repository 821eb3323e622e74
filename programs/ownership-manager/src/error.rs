use anchor_lang::prelude::error_code;

#[error_code]
pub enum OwnershipManagerError {
    /// Only the program's owner is permitted.
    #[msg("OwnerOnly")]
    OwnerOnly = 0x2,

    /// Only the program's upgrade authority can create the ownership record.
    #[msg("UpgradeAuthorityOnly")]
    UpgradeAuthorityOnly = 0x4,

    #[msg("InvalidNewOwner")]
    InvalidNewOwner = 0x22,

    /// Specified key is already the program's owner.
    #[msg("AlreadyOwner")]
    AlreadyOwner = 0x24,

    #[msg("NoTransferOwnershipRequest")]
    NoTransferOwnershipRequest = 0x26,

    /// Only the program's pending owner is permitted.
    #[msg("NotPendingOwner")]
    NotPendingOwner = 0x2a,
}
