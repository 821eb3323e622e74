mod cancel;
pub use cancel::*;

mod confirm;
pub use confirm::*;

mod submit;
pub use submit::*;
