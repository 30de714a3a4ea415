use crate::Timer;
use pk_core::Position;
use pk_gameplay::GameState;
use std::collections::HashSet;
use tokio::sync::mpsc::Sender;

/// Outbound frames queued per message, not per byte; bounded so a slow
/// reader backs up and gets evicted instead of stalling the table task.
pub const CONN_OUTBOX_CAPACITY: usize = 256;

/// A table's physical seating (who is connected and where to send their
/// bytes) plus the `GameState` it serializes every action through. Exactly
/// one task ever touches a given `Table`'s `game` field — the table
/// registry hands out messages, never references, across that boundary.
pub struct Table {
    pub id: i64,
    pub name: String,
    pub game: GameState,
    pub timer: Timer,
    senders: Vec<Option<Sender<Vec<u8>>>>,
    /// Seats whose socket dropped but whose hand is still live (bot-filled).
    disconnected: HashSet<Position>,
}

impl Table {
    pub fn new(id: i64, name: String, game: GameState) -> Self {
        let seats = game.max_players;
        Self {
            id,
            name,
            game,
            timer: Timer::with_defaults(),
            senders: vec![None; seats],
            disconnected: HashSet::new(),
        }
    }

    pub fn seats(&self) -> usize {
        self.senders.len()
    }

    /// The first seat with neither an occupant nor a pending sender.
    pub fn first_empty_seat(&self) -> Option<Position> {
        (0..self.senders.len()).find(|&pos| self.game.seats[pos].is_empty())
    }

    pub fn sit(&mut self, pos: Position, sender: Sender<Vec<u8>>) {
        if pos < self.senders.len() {
            self.senders[pos] = Some(sender);
            self.disconnected.remove(&pos);
        }
    }

    pub fn vacate(&mut self, pos: Position) {
        if pos < self.senders.len() {
            self.senders[pos] = None;
        }
        self.disconnected.remove(&pos);
    }

    pub fn disconnect(&mut self, pos: Position) {
        self.disconnected.insert(pos);
    }

    pub fn is_disconnected(&self, pos: Position) -> bool {
        self.disconnected.contains(&pos)
    }

    pub fn connected_count(&self) -> usize {
        self.senders
            .iter()
            .enumerate()
            .filter(|(i, s)| s.is_some() && !self.disconnected.contains(i))
            .count()
    }

    /// Queues `bytes` for seat `pos`. A full or closed outbox marks the seat
    /// disconnected rather than blocking — a slow client is evicted, it
    /// never stalls the table.
    pub fn unicast(&mut self, pos: Position, bytes: Vec<u8>) {
        let Some(inbox) = self.senders.get(pos).and_then(|s| s.as_ref()) else {
            log::debug!("[table {}] unicast to empty seat {}", self.id, pos);
            return;
        };
        if inbox.try_send(bytes).is_err() {
            log::warn!("[table {}] evicting slow/closed seat {}", self.id, pos);
            self.disconnected.insert(pos);
        }
    }

    /// Queues `bytes` on every occupied seat's outbound channel.
    pub fn broadcast(&mut self, bytes: &[u8]) {
        let stale: Vec<Position> = self
            .senders
            .iter()
            .enumerate()
            .filter_map(|(pos, sender)| {
                let inbox = sender.as_ref()?;
                inbox.try_send(bytes.to_vec()).err().map(|_| pos)
            })
            .collect();
        for pos in stale {
            log::warn!("[table {}] evicting slow/closed seat {}", self.id, pos);
            self.disconnected.insert(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::channel;

    #[test]
    fn new_table_has_no_connected_seats() {
        let game = GameState::create(1, 4, 10, 20).unwrap();
        let table = Table::new(1, "main".into(), game);
        assert_eq!(table.seats(), 4);
        assert_eq!(table.connected_count(), 0);
        assert_eq!(table.first_empty_seat(), Some(0));
    }

    #[test]
    fn sit_then_disconnect_updates_connected_count() {
        let game = GameState::create(1, 2, 10, 20).unwrap();
        let mut table = Table::new(1, "main".into(), game);
        let (tx, _rx) = channel(CONN_OUTBOX_CAPACITY);
        table.sit(0, tx);
        assert_eq!(table.connected_count(), 1);
        table.disconnect(0);
        assert!(table.is_disconnected(0));
        assert_eq!(table.connected_count(), 0);
    }
}
