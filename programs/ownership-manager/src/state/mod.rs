mod ownership_record;
pub use ownership_record::*;
