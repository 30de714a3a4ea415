use std::fmt::Display;
use std::fmt::Formatter;

/// Errors a handler can surface. `ProtocolError` and `IoError` close the
/// connection; everything else is reported back to the client and the
/// connection stays open, per the error-handling contract.
#[derive(Debug)]
pub enum ServerError {
    Protocol(pk_protocol::ProtocolError),
    Io,
    Auth(&'static str),
    Game(pk_gameplay::GameError),
    Store(pk_store::StoreError),
}

impl ServerError {
    pub fn wire_code(&self) -> u16 {
        match self {
            ServerError::Protocol(_) | ServerError::Io => pk_protocol::codes::RESULT_SERVER_ERROR,
            ServerError::Auth(_) => pk_protocol::codes::RESULT_UNAUTHORIZED,
            ServerError::Game(e) => e.wire_code(),
            ServerError::Store(_) => pk_protocol::codes::RESULT_SERVER_ERROR,
        }
    }

    pub fn closes_connection(&self) -> bool {
        matches!(self, ServerError::Protocol(_) | ServerError::Io)
    }
}

impl Display for ServerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::Protocol(e) => write!(f, "protocol error: {e}"),
            ServerError::Io => write!(f, "socket io failure"),
            ServerError::Auth(reason) => write!(f, "auth error: {reason}"),
            ServerError::Game(e) => write!(f, "game error: {e}"),
            ServerError::Store(e) => write!(f, "store error: {e}"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<pk_protocol::ProtocolError> for ServerError {
    fn from(e: pk_protocol::ProtocolError) -> Self {
        ServerError::Protocol(e)
    }
}

impl From<pk_gameplay::GameError> for ServerError {
    fn from(e: pk_gameplay::GameError) -> Self {
        ServerError::Game(e)
    }
}

impl From<pk_store::StoreError> for ServerError {
    fn from(e: pk_store::StoreError) -> Self {
        ServerError::Store(e)
    }
}
