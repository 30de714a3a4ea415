use crate::bot::drive_bots;
use crate::reply::reply;
use crate::state::SharedState;
use crate::ServerError;
use pk_conn::ConnectionData;
use pk_gameplay::Action;
use pk_protocol::codes::ACTION_RESULT;
use pk_protocol::codes::RESULT_BAD_ACTION;
use pk_protocol::codes::RESULT_OK;
use pk_protocol::codes::RESYNC_RESPONSE;
use pk_protocol::encode_game_state;
use pk_protocol::Map;
use pk_protocol::Value;
use pk_store::Store;
use pk_table::broadcast_game_state;
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn action_request<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    payload: &Map,
) -> Result<(), ServerError> {
    let client_seq = payload.get_int("client_seq").unwrap_or(0);
    let (table_id, player_id) = {
        let guard = conn.lock().await;
        let Some(player_id) = guard.engine_player_id() else {
            drop(guard);
            reply_bad(conn, client_seq, "not authenticated").await;
            return Ok(());
        };
        match guard.table_id() {
            Some(table_id) => (table_id, player_id),
            None => {
                drop(guard);
                reply_bad(conn, client_seq, "not seated").await;
                return Ok(());
            }
        }
    };

    let Some(action_map) = payload.get_map("action") else {
        reply_bad(conn, client_seq, "missing action").await;
        return Ok(());
    };
    let label = action_map.get_str("type").unwrap_or("");
    let amount = action_map.get_int("amount").unwrap_or(0);
    let Some(action) = Action::from_label(label, amount) else {
        reply_bad(conn, client_seq, "unrecognized action type").await;
        return Ok(());
    };

    let Some(table_lock) = state.tables.get(table_id).await else {
        reply_bad(conn, client_seq, "table no longer exists").await;
        return Ok(());
    };

    let mut table = table_lock.lock().await;
    match table.game.process_action(player_id, action) {
        Ok(()) => {
            drive_bots(&mut table.game);
            if !table.game.hand_in_progress {
                let busted = table.game.sweep_busted_players();
                for seat in busted {
                    log::info!("[action] seat {} busted out at table {}", seat, table_id);
                }
            }
            broadcast_game_state(&mut table).await;
            drop(table);
            reply(
                conn,
                ACTION_RESULT,
                Map::new()
                    .set("result", Value::Int(RESULT_OK as i64))
                    .set("client_seq", Value::Int(client_seq)),
            )
            .await;
            Ok(())
        }
        Err(e) => {
            drop(table);
            reply(
                conn,
                ACTION_RESULT,
                Map::new()
                    .set("result", Value::Int(e.wire_code() as i64))
                    .set("client_seq", Value::Int(client_seq))
                    .set("reason", Value::Str(e.to_string())),
            )
            .await;
            Ok(())
        }
    }
}

async fn reply_bad(conn: &Arc<Mutex<ConnectionData>>, client_seq: i64, reason: &str) {
    reply(
        conn,
        ACTION_RESULT,
        Map::new()
            .set("result", Value::Int(RESULT_BAD_ACTION as i64))
            .set("client_seq", Value::Int(client_seq))
            .set("reason", Value::Str(reason.to_string())),
    )
    .await;
}

pub async fn resync<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    _payload: &Map,
) -> Result<(), ServerError> {
    let (table_id, player_id) = {
        let guard = conn.lock().await;
        (guard.table_id(), guard.engine_player_id())
    };
    let Some(table_id) = table_id else {
        reply(conn, RESYNC_RESPONSE, Map::new()).await;
        return Ok(());
    };
    let Some(table_lock) = state.tables.get(table_id).await else {
        reply(conn, RESYNC_RESPONSE, Map::new()).await;
        return Ok(());
    };
    let table = table_lock.lock().await;
    let view = encode_game_state(&table.game, player_id);
    drop(table);
    reply(conn, RESYNC_RESPONSE, view).await;
    Ok(())
}
