//! TCP poker server: per-connection dispatch, packet handlers, bot-driving,
//! and the advisory decision-timer sweep.

mod bot;
mod connection;
mod error;
mod handlers;
mod reply;
mod state;
mod timer;

pub use connection::handle;
pub use error::ServerError;
pub use state::AppState;
pub use state::SharedState;
pub use timer::run as run_timer_sweep;
