//! Wire framing, the packet type catalogue, and the self-describing map
//! codec every packet payload is expressed in.

pub mod codes;
mod frame;
mod gamestate;
mod value;

pub use frame::*;
pub use gamestate::*;
pub use value::*;
