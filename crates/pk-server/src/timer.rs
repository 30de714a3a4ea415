use crate::bot::drive_bots;
use crate::state::SharedState;
use pk_gameplay::Action;
use pk_gameplay::BettingRound;
use pk_store::Store;
use pk_table::broadcast_game_state;
use pk_table::Table;
use std::time::Duration;
use tokio::time::interval;

const SCAN_INTERVAL: Duration = Duration::from_secs(1);

/// Background task: once a second, scans every live table for an expired
/// decision deadline (synthesize Check-or-Fold) or an expired showdown
/// pause (deal the next hand). Runs for the life of the process.
pub async fn run<S: Store + 'static>(state: SharedState<S>) {
    let mut ticks = interval(SCAN_INTERVAL);
    loop {
        ticks.tick().await;
        let ids: Vec<i64> = state
            .tables
            .summaries()
            .await
            .into_iter()
            .map(|t| t.id)
            .collect();
        for id in ids {
            let Some(table_lock) = state.tables.get(id).await else {
                continue;
            };
            let mut table = table_lock.lock().await;
            scan_one(&mut table).await;
        }
        state.tables.sweep_empty().await;
    }
}

async fn scan_one(table: &mut Table) {
    if table.game.hand_in_progress {
        expire_decision(table).await;
    } else if table.game.betting_round == BettingRound::Complete {
        schedule_next_hand(table);
    }
}

async fn expire_decision(table: &mut Table) {
    let Some(seat) = table.game.active_seat else {
        return;
    };
    let Some(deadline) = table.game.seats[seat].timer_deadline else {
        return;
    };
    if now_ms() < deadline {
        return;
    }
    let player_id = table.game.seats[seat].player_id;
    let actions = table.game.available_actions(player_id);
    let action = if actions.iter().any(|a| a.label == "check") {
        Action::Check
    } else {
        Action::Fold
    };
    if table.game.process_action(player_id, action).is_err() {
        log::warn!("[timer] seat {} synthesized action rejected on table {}", seat, table.id);
        return;
    }
    log::info!("[timer] seat {} timed out at table {}, applied {}", seat, table.id, action);
    drive_bots(&mut table.game);
    if !table.game.hand_in_progress {
        table.game.sweep_busted_players();
    }
    broadcast_game_state(table).await;
}

fn schedule_next_hand(table: &mut Table) {
    if table.timer.deadline().is_none() {
        table.timer.start_showdown();
        return;
    }
    if !table.timer.expired() {
        return;
    }
    table.timer.clear();
    match table.game.start_hand() {
        Ok(()) => log::info!("[timer] table {} dealt a new hand", table.id),
        Err(e) => log::debug!("[timer] table {} not ready for a new hand: {}", table.id, e),
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
