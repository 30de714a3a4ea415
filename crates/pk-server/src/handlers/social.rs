use crate::reply::reply;
use crate::state::SharedState;
use crate::ServerError;
use pk_conn::ConnectionData;
use pk_core::Unique;
use pk_protocol::codes::FRIENDLIST;
use pk_protocol::codes::FRIEND_ACCEPT;
use pk_protocol::codes::FRIEND_ACCEPT_NOT_OK;
use pk_protocol::codes::FRIEND_ACCEPT_OK;
use pk_protocol::codes::FRIEND_REMOVE_NOT_OK;
use pk_protocol::codes::FRIEND_REMOVE_OK;
use pk_protocol::codes::FRIEND_REQUEST;
use pk_protocol::codes::FRIEND_REQUEST_NOT_OK;
use pk_protocol::codes::FRIEND_REQUEST_OK;
use pk_protocol::codes::SCOREBOARD;
use pk_protocol::codes::TABLE_INVITE;
use pk_protocol::codes::TABLE_INVITE_ACCEPT;
use pk_protocol::codes::TABLE_INVITE_ACCEPT_NOT_OK;
use pk_protocol::codes::TABLE_INVITE_ACCEPT_OK;
use pk_protocol::codes::TABLE_INVITE_DECLINE;
use pk_protocol::codes::TABLE_INVITE_DECLINE_NOT_OK;
use pk_protocol::codes::TABLE_INVITE_DECLINE_OK;
use pk_protocol::codes::TABLE_INVITE_NOT_OK;
use pk_protocol::codes::TABLE_INVITE_OK;
use pk_protocol::encode_frame;
use pk_protocol::encode_map;
use pk_protocol::Frame;
use pk_protocol::Map;
use pk_protocol::Value;
use pk_store::Store;
use std::sync::Arc;
use tokio::sync::Mutex;

async fn require_username(conn: &Arc<Mutex<ConnectionData>>) -> Option<String> {
    conn.lock().await.user().username().map(str::to_string)
}

/// Forwards a raw notification frame to `username`'s connection if they're
/// currently online. Returns whether delivery was attempted.
async fn notify<S: Store>(state: &SharedState<S>, username: &str, packet_type: u16, map: Map) -> bool {
    let Some(target) = state.conns.find_by_username(username).await else {
        return false;
    };
    let frame = encode_frame(&Frame::new(packet_type, encode_map(&map)));
    let outbox = target.lock().await.outbox().clone();
    let _ = outbox.try_send(frame);
    true
}

pub async fn friendlist<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    _payload: &Map,
) -> Result<(), ServerError> {
    let Some(member_id) = conn.lock().await.user().id() else {
        reply(conn, FRIENDLIST, Map::new().set("friends", Value::List(vec![]))).await;
        return Ok(());
    };
    let friends = state.store.list_friends(member_id).await?;
    let rows = friends
        .into_iter()
        .map(|m| {
            Value::Map(Map::new().set("username", Value::Str(m.username().to_string())))
        })
        .collect();
    reply(conn, FRIENDLIST, Map::new().set("friends", Value::List(rows))).await;
    Ok(())
}

pub async fn friend_request<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    payload: &Map,
) -> Result<(), ServerError> {
    let Some(from) = require_username(conn).await else {
        reply(conn, FRIEND_REQUEST_NOT_OK, Map::new().set("res", Value::Int(FRIEND_REQUEST_NOT_OK as i64))).await;
        return Ok(());
    };
    let target = payload.get_str("username").unwrap_or_default();
    let delivered = notify(state, target, FRIEND_REQUEST, Map::new().set("from", Value::Str(from))).await;
    let code = if delivered { FRIEND_REQUEST_OK } else { FRIEND_REQUEST_NOT_OK };
    reply(conn, code, Map::new().set("res", Value::Int(code as i64))).await;
    Ok(())
}

pub async fn friend_accept<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    payload: &Map,
) -> Result<(), ServerError> {
    let Some(me) = conn.lock().await.user().id() else {
        reply(conn, FRIEND_ACCEPT_NOT_OK, Map::new().set("res", Value::Int(FRIEND_ACCEPT_NOT_OK as i64))).await;
        return Ok(());
    };
    let username = payload.get_str("username").unwrap_or_default();
    let Some((other, _)) = state.store.find_user_by_username(username).await? else {
        reply(conn, FRIEND_ACCEPT_NOT_OK, Map::new().set("res", Value::Int(FRIEND_ACCEPT_NOT_OK as i64))).await;
        return Ok(());
    };
    state.store.add_friend(me, other.id()).await?;
    state.store.add_friend(other.id(), me).await?;
    reply(conn, FRIEND_ACCEPT_OK, Map::new().set("res", Value::Int(FRIEND_ACCEPT_OK as i64))).await;
    Ok(())
}

pub async fn friend_remove<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    payload: &Map,
) -> Result<(), ServerError> {
    let Some(me) = conn.lock().await.user().id() else {
        reply(conn, FRIEND_REMOVE_NOT_OK, Map::new().set("res", Value::Int(FRIEND_REMOVE_NOT_OK as i64))).await;
        return Ok(());
    };
    let username = payload.get_str("username").unwrap_or_default();
    let Some((other, _)) = state.store.find_user_by_username(username).await? else {
        reply(conn, FRIEND_REMOVE_NOT_OK, Map::new().set("res", Value::Int(FRIEND_REMOVE_NOT_OK as i64))).await;
        return Ok(());
    };
    state.store.remove_friend(me, other.id()).await?;
    state.store.remove_friend(other.id(), me).await?;
    reply(conn, FRIEND_REMOVE_OK, Map::new().set("res", Value::Int(FRIEND_REMOVE_OK as i64))).await;
    Ok(())
}

pub async fn table_invite<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    payload: &Map,
) -> Result<(), ServerError> {
    let Some(from) = require_username(conn).await else {
        reply(conn, TABLE_INVITE_NOT_OK, Map::new().set("res", Value::Int(TABLE_INVITE_NOT_OK as i64))).await;
        return Ok(());
    };
    let target = payload.get_str("username").unwrap_or_default();
    let table_id = payload.get_int("table_id").unwrap_or(-1);
    let delivered = notify(
        state,
        target,
        TABLE_INVITE,
        Map::new().set("from", Value::Str(from)).set("table_id", Value::Int(table_id)),
    )
    .await;
    let code = if delivered { TABLE_INVITE_OK } else { TABLE_INVITE_NOT_OK };
    reply(conn, code, Map::new().set("res", Value::Int(code as i64))).await;
    Ok(())
}

pub async fn table_invite_accept<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    payload: &Map,
) -> Result<(), ServerError> {
    let Some(from) = require_username(conn).await else {
        reply(conn, TABLE_INVITE_ACCEPT_NOT_OK, Map::new().set("res", Value::Int(TABLE_INVITE_ACCEPT_NOT_OK as i64))).await;
        return Ok(());
    };
    let inviter = payload.get_str("username").unwrap_or_default();
    let table_id = payload.get_int("table_id").unwrap_or(-1);
    notify(
        state,
        inviter,
        TABLE_INVITE_ACCEPT,
        Map::new().set("from", Value::Str(from)).set("table_id", Value::Int(table_id)),
    )
    .await;
    reply(
        conn,
        TABLE_INVITE_ACCEPT_OK,
        Map::new().set("res", Value::Int(TABLE_INVITE_ACCEPT_OK as i64)),
    )
    .await;
    Ok(())
}

pub async fn table_invite_decline<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    payload: &Map,
) -> Result<(), ServerError> {
    let Some(from) = require_username(conn).await else {
        reply(conn, TABLE_INVITE_DECLINE_NOT_OK, Map::new().set("res", Value::Int(TABLE_INVITE_DECLINE_NOT_OK as i64))).await;
        return Ok(());
    };
    let inviter = payload.get_str("username").unwrap_or_default();
    notify(
        state,
        inviter,
        TABLE_INVITE_DECLINE,
        Map::new().set("from", Value::Str(from)),
    )
    .await;
    reply(
        conn,
        TABLE_INVITE_DECLINE_OK,
        Map::new().set("res", Value::Int(TABLE_INVITE_DECLINE_OK as i64)),
    )
    .await;
    Ok(())
}

pub async fn scoreboard<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    _payload: &Map,
) -> Result<(), ServerError> {
    let board = state.store.leaderboard(50).await?;
    let rows = board
        .into_iter()
        .map(|(m, balance)| {
            Value::Map(
                Map::new()
                    .set("username", Value::Str(m.username().to_string()))
                    .set("balance", Value::Int(balance)),
            )
        })
        .collect();
    reply(conn, SCOREBOARD, Map::new().set("players", Value::List(rows))).await;
    Ok(())
}
