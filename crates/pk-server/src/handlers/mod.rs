//! One handler per packet type. `dispatch` is the only thing the
//! connection loop calls; everything else is a plain `(state, conn,
//! payload) -> Result<(), ServerError>` function.

mod action;
mod auth;
mod lobby;
mod ping;
mod social;

use crate::state::SharedState;
use crate::ServerError;
use pk_conn::ConnectionData;
use pk_protocol::codes;
use pk_protocol::decode_map;
use pk_protocol::Frame;
use pk_store::Store;
use std::sync::Arc;
use tokio::sync::Mutex;

const LOGIN_REQUIRED_EXEMPT: &[u16] = &[codes::LOGIN, codes::SIGNUP, codes::PING];

/// Routes one decoded frame to its handler. Validates the auth precondition
/// (everything but LOGIN/SIGNUP/PING requires a logged-in connection)
/// before the handler ever sees the payload.
pub async fn dispatch<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    frame: Frame,
) -> Result<(), ServerError> {
    let packet_type = frame.packet_type;
    if !LOGIN_REQUIRED_EXEMPT.contains(&packet_type) {
        let authed = conn.lock().await.user().is_authenticated();
        if !authed {
            return Err(ServerError::Auth("login required"));
        }
    }

    let payload = decode_map(&frame.payload).unwrap_or_default();

    match packet_type {
        codes::PING => ping::ping(state, conn, &payload).await,
        codes::LOGIN => auth::login(state, conn, &payload).await,
        codes::SIGNUP => auth::signup(state, conn, &payload).await,
        codes::CREATE_TABLE => lobby::create_table(state, conn, &payload).await,
        codes::JOIN_TABLE => lobby::join_table(state, conn, &payload).await,
        codes::LEAVE_TABLE => lobby::leave_table(state, conn, &payload).await,
        codes::TABLES => lobby::tables(state, conn, &payload).await,
        codes::ACTION_REQUEST => action::action_request(state, conn, &payload).await,
        codes::RESYNC_REQUEST => action::resync(state, conn, &payload).await,
        codes::FRIENDLIST => social::friendlist(state, conn, &payload).await,
        codes::FRIEND_REQUEST => social::friend_request(state, conn, &payload).await,
        codes::FRIEND_ACCEPT => social::friend_accept(state, conn, &payload).await,
        codes::FRIEND_REMOVE => social::friend_remove(state, conn, &payload).await,
        codes::TABLE_INVITE => social::table_invite(state, conn, &payload).await,
        codes::TABLE_INVITE_ACCEPT => social::table_invite_accept(state, conn, &payload).await,
        codes::TABLE_INVITE_DECLINE => social::table_invite_decline(state, conn, &payload).await,
        codes::SCOREBOARD => social::scoreboard(state, conn, &payload).await,
        other => {
            log::debug!("[dispatch] unrecognized packet type {}", other);
            Ok(())
        }
    }
}
