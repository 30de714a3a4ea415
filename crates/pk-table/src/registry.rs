use crate::Table;
use pk_gameplay::GameState;
use pk_protocol::codes::UPDATE_GAMESTATE;
use pk_protocol::encode_frame;
use pk_protocol::encode_game_state;
use pk_protocol::encode_map;
use pk_protocol::Frame;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::RwLock;

/// Process-wide set of live tables. IDs are reused: a new table always gets
/// the smallest currently-unused id, matching the lobby's expectation that
/// table numbers stay low and dense rather than growing without bound.
pub struct TableRegistry {
    tables: RwLock<BTreeMap<i64, Arc<Mutex<Table>>>>,
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRegistry {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(BTreeMap::new()),
        }
    }

    fn next_id(tables: &BTreeMap<i64, Arc<Mutex<Table>>>) -> i64 {
        let mut id = 1;
        for &used in tables.keys() {
            if used != id {
                break;
            }
            id += 1;
        }
        id
    }

    pub async fn create(
        &self,
        name: String,
        max_players: usize,
        small_blind: pk_core::Chips,
        big_blind: pk_core::Chips,
    ) -> Result<i64, pk_gameplay::GameError> {
        let mut tables = self.tables.write().await;
        let id = Self::next_id(&tables);
        let game = GameState::create(id, max_players, small_blind, big_blind)?;
        tables.insert(id, Arc::new(Mutex::new(Table::new(id, name, game))));
        log::info!("[table-registry] opened table {}", id);
        Ok(id)
    }

    pub async fn remove(&self, id: i64) -> bool {
        let removed = self.tables.write().await.remove(&id).is_some();
        if removed {
            log::info!("[table-registry] closed table {}", id);
        }
        removed
    }

    pub async fn get(&self, id: i64) -> Option<Arc<Mutex<Table>>> {
        self.tables.read().await.get(&id).cloned()
    }

    /// Closes any table with no occupied seats. Intended for a periodic
    /// sweep, not called inline with every leave.
    pub async fn sweep_empty(&self) {
        let mut tables = self.tables.write().await;
        let mut dead = Vec::new();
        for (&id, table) in tables.iter() {
            if table.lock().await.connected_count() == 0 {
                dead.push(id);
            }
        }
        for id in dead {
            tables.remove(&id);
            log::info!("[table-registry] swept empty table {}", id);
        }
    }

    /// Summary rows for the lobby's table list (id, name, seated/max, stakes).
    pub async fn summaries(&self) -> Vec<TableSummary> {
        let tables = self.tables.read().await;
        let mut out = Vec::with_capacity(tables.len());
        for table in tables.values() {
            let table = table.lock().await;
            out.push(TableSummary {
                id: table.id,
                name: table.name.clone(),
                seated: table
                    .game
                    .seats
                    .iter()
                    .filter(|s| !s.is_empty())
                    .count(),
                max_players: table.seats(),
                small_blind: table.game.small_blind,
                big_blind: table.game.big_blind,
            });
        }
        out
    }
}

/// Broadcasts the current game state to every occupied seat of `table`,
/// redacted per-viewer via [`encode_game_state`].
pub async fn broadcast_game_state(table: &mut Table) {
    let occupied: Vec<(pk_core::Position, Option<i64>)> = table
        .game
        .seats
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| (s.seat, (s.player_id > 0).then_some(s.player_id)))
        .collect();
    for (pos, viewer) in occupied {
        let map = encode_game_state(&table.game, viewer);
        let payload = encode_map(&map);
        let frame = encode_frame(&Frame::new(UPDATE_GAMESTATE, payload));
        table.unicast(pos, frame);
    }
}

#[derive(Debug, Clone)]
pub struct TableSummary {
    pub id: i64,
    pub name: String,
    pub seated: usize,
    pub max_players: usize,
    pub small_blind: pk_core::Chips,
    pub big_blind: pk_core::Chips,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn created_tables_reuse_the_smallest_free_id() {
        let registry = TableRegistry::new();
        let a = registry.create("a".into(), 6, 10, 20).await.unwrap();
        let b = registry.create("b".into(), 6, 10, 20).await.unwrap();
        assert_eq!((a, b), (1, 2));
        registry.remove(a).await;
        let c = registry.create("c".into(), 6, 10, 20).await.unwrap();
        assert_eq!(c, 1);
    }

    #[tokio::test]
    async fn summaries_reflect_seating() {
        let registry = TableRegistry::new();
        registry.create("main".into(), 6, 10, 20).await.unwrap();
        let summaries = registry.summaries().await;
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].seated, 0);
        assert_eq!(summaries[0].max_players, 6);
    }
}
