use pk_auth::Member;
use pk_core::Chips;
use pk_core::Position;
use pk_core::ID;

/// A completed hand, persisted for audit (retrieval of hand history is out
/// of scope for the engine itself, but the write path is kept live).
#[derive(Debug, Clone)]
pub struct HandRecord {
    pub id: ID<HandRecord>,
    pub table_id: i64,
    pub hand_id: u64,
    /// Wire-encoded community cards (`suit*13+(rank-2)`).
    pub community: Vec<i32>,
    pub pot: Chips,
    pub dealer_seat: Position,
}

/// One seat's participation in a hand.
#[derive(Debug, Clone)]
pub struct ParticipantRecord {
    pub hand_id: ID<HandRecord>,
    pub user_id: Option<ID<Member>>,
    pub seat: Position,
    /// Wire-encoded hole cards; `-1` for a seat that never showed.
    pub hole: [i32; 2],
    pub stack: Chips,
    pub showed: bool,
}

/// A single applied action, in the order it occurred.
#[derive(Debug, Clone)]
pub struct PlayRecord {
    pub hand_id: ID<HandRecord>,
    pub seq: u64,
    pub player_id: Option<ID<Member>>,
    pub label: String,
    pub amount: Chips,
}
