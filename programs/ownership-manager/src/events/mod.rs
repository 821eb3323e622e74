mod ownership_initialized;
pub use ownership_initialized::*;

mod ownership_transfer_cancelled;
pub use ownership_transfer_cancelled::*;

mod ownership_transfer_requested;
pub use ownership_transfer_requested::*;

mod ownership_transferred;
pub use ownership_transferred::*;
