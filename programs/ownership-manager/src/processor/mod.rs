mod initialize;
pub use initialize::*;

mod ownership_transfer_request;
pub use ownership_transfer_request::*;
