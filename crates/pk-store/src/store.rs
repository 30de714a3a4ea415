use crate::HandRecord;
use crate::ParticipantRecord;
use crate::PlayRecord;
use crate::StoreError;
use pk_auth::Member;
use pk_core::Chips;
use pk_core::ID;

/// The only path the rest of the system has into persistence. Handlers hold
/// a `Box<dyn Store>`-equivalent (or a concrete type, behind this trait)
/// and never touch SQL directly.
#[allow(async_fn_in_trait)]
pub trait Store: Send + Sync + 'static {
    async fn exists(&self, username: &str, email: &str) -> Result<bool, StoreError>;
    async fn create_user(&self, member: &Member, hashword: &str) -> Result<(), StoreError>;
    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<(Member, String)>, StoreError>;

    async fn get_balance(&self, user: ID<Member>) -> Result<Chips, StoreError>;
    /// Applies `delta` (positive or negative) to the user's balance and
    /// returns the resulting balance.
    async fn adjust_balance(&self, user: ID<Member>, delta: Chips) -> Result<Chips, StoreError>;

    async fn add_friend(&self, user: ID<Member>, friend: ID<Member>) -> Result<(), StoreError>;
    async fn remove_friend(&self, user: ID<Member>, friend: ID<Member>) -> Result<(), StoreError>;
    async fn list_friends(&self, user: ID<Member>) -> Result<Vec<Member>, StoreError>;

    async fn leaderboard(&self, limit: i64) -> Result<Vec<(Member, Chips)>, StoreError>;

    async fn record_hand(
        &self,
        hand: &HandRecord,
        participants: &[ParticipantRecord],
        plays: &[PlayRecord],
    ) -> Result<(), StoreError>;
}
