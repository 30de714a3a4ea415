use crate::handlers;
use crate::reply::reply;
use crate::state::SharedState;
use crate::ServerError;
use pk_conn::ConnectionData;
use pk_core::Unique;
use pk_protocol::read_frame;
use pk_protocol::read_handshake;
use pk_protocol::write_handshake_reply;
use pk_protocol::Map;
use pk_protocol::Value;
use pk_store::Store;
use pk_table::broadcast_game_state;
use pk_table::CONN_OUTBOX_CAPACITY;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::mpsc::channel;
use tokio::sync::Mutex;

/// One task per accepted socket: handshake, then read-frame/dispatch until
/// EOF or a protocol violation, then cleanup. A second task owns the write
/// half and just drains the outbox — handlers never touch the socket
/// directly, only the per-connection channel.
pub async fn handle<S: Store + 'static>(mut stream: TcpStream, state: SharedState<S>) {
    let peer = stream.peer_addr().ok();
    let version = match read_handshake(&mut stream).await {
        Ok(v) => v,
        Err(e) => {
            log::debug!("[conn {:?}] handshake failed: {}", peer, e);
            return;
        }
    };
    let accepted = version as u8 == pk_protocol::codes::PROTOCOL_VERSION;
    if write_handshake_reply(&mut stream, accepted).await.is_err() || !accepted {
        return;
    }

    let (mut read_half, mut write_half) = stream.into_split();
    let (outbox_tx, mut outbox_rx) = channel::<Vec<u8>>(CONN_OUTBOX_CAPACITY);
    let writer = tokio::spawn(async move {
        while let Some(bytes) = outbox_rx.recv().await {
            if write_half.write_all(&bytes).await.is_err() {
                break;
            }
        }
    });

    let conn = Arc::new(Mutex::new(ConnectionData::new(outbox_tx)));
    state.conns.insert(conn.clone()).await;
    let conn_id = conn.lock().await.id();

    loop {
        let frame = match read_frame(&mut read_half).await {
            Ok(frame) => frame,
            Err(e) => {
                log::debug!("[conn {:?}] closing: {}", peer, e);
                break;
            }
        };
        match handlers::dispatch(&state, &conn, frame).await {
            Ok(()) => {}
            Err(e) if e.closes_connection() => {
                log::warn!("[conn {:?}] protocol error: {}", peer, e);
                break;
            }
            Err(e) => {
                reply(
                    &conn,
                    pk_protocol::codes::ERROR,
                    Map::new()
                        .set("result", Value::Int(e.wire_code() as i64))
                        .set("reason", Value::Str(e.to_string())),
                )
                .await;
            }
        }
    }

    cleanup(&state, &conn).await;
    state.conns.remove(conn_id).await;
    writer.abort();
}

async fn cleanup<S: Store>(state: &SharedState<S>, conn: &Arc<Mutex<ConnectionData>>) {
    let (table_id, seat) = {
        let guard = conn.lock().await;
        (guard.table_id(), guard.seat())
    };
    let (Some(table_id), Some(seat)) = (table_id, seat) else {
        return;
    };
    let Some(table_lock) = state.tables.get(table_id).await else {
        return;
    };
    let mut table = table_lock.lock().await;
    if table.game.hand_in_progress {
        let _ = table.game.convert_to_bot(seat);
        table.disconnect(seat);
    } else {
        let _ = table.game.remove_player(seat);
        table.vacate(seat);
    }
    broadcast_game_state(&mut table).await;
    log::info!("[conn] seat {} left table {} on disconnect", seat, table_id);
}
