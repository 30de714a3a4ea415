use crate::reply::reply;
use crate::state::SharedState;
use crate::ServerError;
use pk_conn::ConnectionData;
use pk_core::Chips;
use pk_core::DEFAULT_BUY_IN_BB;
use pk_protocol::codes::CREATE_TABLE_NOT_OK;
use pk_protocol::codes::CREATE_TABLE_OK;
use pk_protocol::codes::JOIN_TABLE_FULL;
use pk_protocol::codes::JOIN_TABLE_NOT_OK;
use pk_protocol::codes::JOIN_TABLE_OK;
use pk_protocol::codes::LEAVE_TABLE_NOT_OK;
use pk_protocol::codes::LEAVE_TABLE_OK;
use pk_protocol::codes::TABLES;
use pk_protocol::encode_game_state;
use pk_protocol::Map;
use pk_protocol::Value;
use pk_store::Store;
use pk_table::broadcast_game_state;
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn create_table<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    payload: &Map,
) -> Result<(), ServerError> {
    let name = payload.get_str("name").unwrap_or("table").to_string();
    let max_player = payload.get_int("max_player").unwrap_or(6).clamp(2, pk_core::MAX_SEATS as i64) as usize;
    let min_bet = payload.get_int("min_bet").unwrap_or(20).max(2) as Chips;
    let big_blind = min_bet;
    let small_blind = (big_blind / 2).max(1);

    match state.tables.create(name, max_player, small_blind, big_blind).await {
        Ok(table_id) => {
            reply(
                conn,
                CREATE_TABLE_OK,
                Map::new()
                    .set("res", Value::Int(CREATE_TABLE_OK as i64))
                    .set("table_id", Value::Int(table_id)),
            )
            .await;
            log::info!("[lobby] created table {}", table_id);
        }
        Err(_) => {
            reply(
                conn,
                CREATE_TABLE_NOT_OK,
                Map::new().set("res", Value::Int(CREATE_TABLE_NOT_OK as i64)),
            )
            .await;
        }
    }
    Ok(())
}

pub async fn join_table<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    payload: &Map,
) -> Result<(), ServerError> {
    let table_id = payload.get_int("tableId").unwrap_or(-1);
    let Some(table_lock) = state.tables.get(table_id).await else {
        reply(
            conn,
            JOIN_TABLE_NOT_OK,
            Map::new().set("res", Value::Int(JOIN_TABLE_NOT_OK as i64)),
        )
        .await;
        return Ok(());
    };

    let (player_id, username, balance, outbox) = {
        let guard = conn.lock().await;
        let Some(player_id) = guard.engine_player_id() else {
            drop(guard);
            reply(conn, JOIN_TABLE_NOT_OK, Map::new().set("res", Value::Int(JOIN_TABLE_NOT_OK as i64))).await;
            return Ok(());
        };
        (
            player_id,
            guard.user().username().unwrap_or("player").to_string(),
            guard.balance(),
            guard.outbox().clone(),
        )
    };

    let mut table = table_lock.lock().await;
    let Some(seat) = table.first_empty_seat() else {
        drop(table);
        reply(conn, JOIN_TABLE_FULL, Map::new().set("res", Value::Int(JOIN_TABLE_FULL as i64))).await;
        return Ok(());
    };

    let buy_in = (table.game.big_blind * DEFAULT_BUY_IN_BB).min(balance).max(table.game.min_buy_in);
    if let Err(e) = table.game.add_player(player_id, username, seat, buy_in) {
        drop(table);
        reply(conn, JOIN_TABLE_NOT_OK, Map::new().set("res", Value::Int(JOIN_TABLE_NOT_OK as i64))).await;
        return Err(e.into());
    }
    table.sit(seat, outbox);
    let view = encode_game_state(&table.game, Some(player_id));
    broadcast_game_state(&mut table).await;
    drop(table);

    conn.lock().await.seat_at(table_id, seat);
    reply(conn, JOIN_TABLE_OK, view).await;
    log::info!("[lobby] seat {} joined table {}", seat, table_id);
    Ok(())
}

pub async fn leave_table<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    _payload: &Map,
) -> Result<(), ServerError> {
    let (table_id, seat) = {
        let guard = conn.lock().await;
        (guard.table_id(), guard.seat())
    };
    let (Some(table_id), Some(seat)) = (table_id, seat) else {
        reply(conn, LEAVE_TABLE_NOT_OK, Map::new().set("res", Value::Int(LEAVE_TABLE_NOT_OK as i64))).await;
        return Ok(());
    };
    if let Some(table_lock) = state.tables.get(table_id).await {
        let mut table = table_lock.lock().await;
        if table.game.hand_in_progress {
            let _ = table.game.convert_to_bot(seat);
            table.disconnect(seat);
        } else {
            let _ = table.game.remove_player(seat);
            table.vacate(seat);
        }
        broadcast_game_state(&mut table).await;
    }
    conn.lock().await.leave_table();
    reply(conn, LEAVE_TABLE_OK, Map::new().set("res", Value::Int(LEAVE_TABLE_OK as i64))).await;
    Ok(())
}

pub async fn tables<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    _payload: &Map,
) -> Result<(), ServerError> {
    let summaries = state.tables.summaries().await;
    let rows: Vec<Value> = summaries
        .iter()
        .map(|t| {
            Value::Map(
                Map::new()
                    .set("table_id", Value::Int(t.id))
                    .set("name", Value::Str(t.name.clone()))
                    .set("seated", Value::Int(t.seated as i64))
                    .set("max_players", Value::Int(t.max_players as i64))
                    .set("small_blind", Value::Int(t.small_blind))
                    .set("big_blind", Value::Int(t.big_blind)),
            )
        })
        .collect();
    let map = Map::new()
        .set("size", Value::Int(rows.len() as i64))
        .set("tables", Value::List(rows));
    reply(conn, TABLES, map).await;
    Ok(())
}
