pub mod error;
pub mod fallback;
pub mod filter;
pub mod model;
pub mod predicate;
pub mod session;
pub mod shape;
pub mod site;
pub mod source;
pub mod table;

// Re-export common error type
pub use error::{IropsError, Result};
