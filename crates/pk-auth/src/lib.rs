//! Password hashing and the per-connection identity distinction between
//! anonymous lurkers and authenticated members.

mod identity;
mod lurker;
mod member;
pub mod password;

pub use identity::*;
pub use lurker::*;
pub use member::*;
