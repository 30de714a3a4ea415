use pk_auth::User;
use pk_core::Chips;
use pk_core::Position;
use pk_core::Unique;
use pk_core::ID;
use std::time::Instant;
use tokio::sync::mpsc::Sender;

/// Per-socket session object. One instance per accepted connection, owned by
/// that connection's dispatch task and mirrored into the [`crate::ConnRegistry`]
/// only far enough to let other connections look it up by username.
pub struct ConnectionData {
    id: ID<ConnectionData>,
    outbox: Sender<Vec<u8>>,
    user: User,
    /// Cached balance so handlers don't round-trip to the store on every
    /// table-state broadcast; refreshed whenever the store is written.
    balance: Chips,
    table_id: Option<i64>,
    seat: Option<Position>,
    last_activity: Instant,
}

impl ConnectionData {
    pub fn new(outbox: Sender<Vec<u8>>) -> Self {
        Self {
            id: ID::default(),
            outbox,
            user: User::default(),
            balance: 0,
            table_id: None,
            seat: None,
            last_activity: Instant::now(),
        }
    }

    pub fn outbox(&self) -> &Sender<Vec<u8>> {
        &self.outbox
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// The game engine identifies seats by a plain `i64` (`-1` reserved for
    /// bots); this folds the connection's member UUID down to a positive
    /// `i64` so `GameState` never has to know about `ID<Member>`.
    pub fn engine_player_id(&self) -> Option<i64> {
        self.user.id().map(|id| {
            let low = (id.inner().as_u128() & (i64::MAX as u128)) as i64;
            low.max(1)
        })
    }

    pub fn authenticate(&mut self, user: User, balance: Chips) {
        self.user = user;
        self.balance = balance;
    }

    pub fn balance(&self) -> Chips {
        self.balance
    }

    pub fn set_balance(&mut self, balance: Chips) {
        self.balance = balance;
    }

    pub fn table_id(&self) -> Option<i64> {
        self.table_id
    }

    pub fn seat(&self) -> Option<Position> {
        self.seat
    }

    pub fn seat_at(&mut self, table_id: i64, seat: Position) {
        self.table_id = Some(table_id);
        self.seat = Some(seat);
    }

    pub fn leave_table(&mut self) {
        self.table_id = None;
        self.seat = None;
    }

    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }
}

impl Unique<ConnectionData> for ConnectionData {
    fn id(&self) -> ID<ConnectionData> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pk_auth::Member;
    use tokio::sync::mpsc::channel;

    #[test]
    fn new_connection_is_anonymous_and_seatless() {
        let (tx, _rx) = channel(8);
        let conn = ConnectionData::new(tx);
        assert!(!conn.user().is_authenticated());
        assert_eq!(conn.table_id(), None);
        assert_eq!(conn.seat(), None);
    }

    #[test]
    fn authenticate_then_seat_then_leave() {
        let (tx, _rx) = channel(8);
        let mut conn = ConnectionData::new(tx);
        let member = Member::new(ID::default(), "alice".into(), "alice@example.com".into());
        conn.authenticate(User::from(member), 1000);
        assert!(conn.user().is_authenticated());
        assert_eq!(conn.balance(), 1000);

        conn.seat_at(3, 2);
        assert_eq!(conn.table_id(), Some(3));
        assert_eq!(conn.seat(), Some(2));

        conn.leave_table();
        assert_eq!(conn.table_id(), None);
        assert_eq!(conn.seat(), None);
    }
}
