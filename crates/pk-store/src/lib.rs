//! Persistence layer: the `Store` trait is the only way the rest of the
//! system touches the relational database.

mod error;
mod mem;
mod pg;
mod records;
mod store;
pub mod tables;

pub use error::*;
pub use mem::*;
pub use pg::*;
pub use records::*;
pub use store::*;
