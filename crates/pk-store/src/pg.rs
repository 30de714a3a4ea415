use crate::tables::CREATE_ALL;
use crate::tables::CREATE_INDICES;
use crate::tables::FRIENDS;
use crate::tables::HANDS;
use crate::tables::PARTICIPANTS;
use crate::tables::PLAYS;
use crate::tables::USERS;
use crate::HandRecord;
use crate::ParticipantRecord;
use crate::PlayRecord;
use crate::Store;
use crate::StoreError;
use pk_auth::Member;
use pk_core::Chips;
use pk_core::Unique;
use pk_core::ID;
use std::sync::Arc;
use tokio_postgres::Client;

/// Postgres-backed store. Holds a shared client; every method is a single
/// round trip, `await`ed on the caller's own task.
#[derive(Clone)]
pub struct PgStore {
    client: Arc<Client>,
}

impl PgStore {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Connects using `DB_CONNINFO`, spawns the connection driver, and
    /// creates the schema if it doesn't already exist.
    pub async fn connect() -> Self {
        log::info!("connecting to database");
        let tls = tokio_postgres::tls::NoTls;
        let conninfo = std::env::var("DB_CONNINFO").expect("DB_CONNINFO must be set");
        let (client, connection) = tokio_postgres::connect(&conninfo, tls)
            .await
            .expect("database connection failed");
        tokio::spawn(connection);
        let store = Self::new(Arc::new(client));
        store.init_schema().await.expect("schema init failed");
        store
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        self.client.batch_execute(CREATE_ALL).await?;
        self.client.batch_execute(CREATE_INDICES).await?;
        Ok(())
    }
}

impl Store for PgStore {
    async fn exists(&self, username: &str, email: &str) -> Result<bool, StoreError> {
        let row = self
            .client
            .query_opt(
                const_format::concatcp!(
                    "SELECT 1 FROM ",
                    USERS,
                    " WHERE username = $1 OR email = $2"
                ),
                &[&username, &email],
            )
            .await?;
        Ok(row.is_some())
    }

    async fn create_user(&self, member: &Member, hashword: &str) -> Result<(), StoreError> {
        if self.exists(member.username(), member.email()).await? {
            return Err(StoreError::Conflict);
        }
        self.client
            .execute(
                const_format::concatcp!(
                    "INSERT INTO ",
                    USERS,
                    " (id, username, email, hashword, balance) VALUES ($1, $2, $3, $4, 0)"
                ),
                &[&member.id().inner(), &member.username(), &member.email(), &hashword],
            )
            .await?;
        Ok(())
    }

    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<(Member, String)>, StoreError> {
        let row = self
            .client
            .query_opt(
                const_format::concatcp!(
                    "SELECT id, username, email, hashword FROM ",
                    USERS,
                    " WHERE username = $1"
                ),
                &[&username],
            )
            .await?;
        Ok(row.map(|row| {
            (
                Member::new(
                    ID::from(row.get::<_, uuid::Uuid>(0)),
                    row.get::<_, String>(1),
                    row.get::<_, String>(2),
                ),
                row.get::<_, String>(3),
            )
        }))
    }

    async fn get_balance(&self, user: ID<Member>) -> Result<Chips, StoreError> {
        let row = self
            .client
            .query_opt(
                const_format::concatcp!("SELECT balance FROM ", USERS, " WHERE id = $1"),
                &[&user.inner()],
            )
            .await?
            .ok_or(StoreError::NotFound)?;
        Ok(row.get::<_, i64>(0))
    }

    async fn adjust_balance(&self, user: ID<Member>, delta: Chips) -> Result<Chips, StoreError> {
        let row = self
            .client
            .query_opt(
                const_format::concatcp!(
                    "UPDATE ",
                    USERS,
                    " SET balance = balance + $2 WHERE id = $1 RETURNING balance"
                ),
                &[&user.inner(), &delta],
            )
            .await?
            .ok_or(StoreError::NotFound)?;
        Ok(row.get::<_, i64>(0))
    }

    async fn add_friend(&self, user: ID<Member>, friend: ID<Member>) -> Result<(), StoreError> {
        self.client
            .execute(
                const_format::concatcp!(
                    "INSERT INTO ",
                    FRIENDS,
                    " (user_id, friend_id) VALUES ($1, $2) ON CONFLICT DO NOTHING"
                ),
                &[&user.inner(), &friend.inner()],
            )
            .await?;
        Ok(())
    }

    async fn remove_friend(&self, user: ID<Member>, friend: ID<Member>) -> Result<(), StoreError> {
        self.client
            .execute(
                const_format::concatcp!(
                    "DELETE FROM ",
                    FRIENDS,
                    " WHERE user_id = $1 AND friend_id = $2"
                ),
                &[&user.inner(), &friend.inner()],
            )
            .await?;
        Ok(())
    }

    async fn list_friends(&self, user: ID<Member>) -> Result<Vec<Member>, StoreError> {
        let rows = self
            .client
            .query(
                const_format::concatcp!(
                    "SELECT u.id, u.username, u.email FROM ",
                    USERS,
                    " u JOIN ",
                    FRIENDS,
                    " f ON f.friend_id = u.id WHERE f.user_id = $1"
                ),
                &[&user.inner()],
            )
            .await?;
        Ok(rows
            .iter()
            .map(|row| {
                Member::new(
                    ID::from(row.get::<_, uuid::Uuid>(0)),
                    row.get::<_, String>(1),
                    row.get::<_, String>(2),
                )
            })
            .collect())
    }

    async fn leaderboard(&self, limit: i64) -> Result<Vec<(Member, Chips)>, StoreError> {
        let rows = self
            .client
            .query(
                const_format::concatcp!(
                    "SELECT id, username, email, balance FROM ",
                    USERS,
                    " ORDER BY balance DESC LIMIT $1"
                ),
                &[&limit],
            )
            .await?;
        Ok(rows
            .iter()
            .map(|row| {
                (
                    Member::new(
                        ID::from(row.get::<_, uuid::Uuid>(0)),
                        row.get::<_, String>(1),
                        row.get::<_, String>(2),
                    ),
                    row.get::<_, i64>(3),
                )
            })
            .collect())
    }

    async fn record_hand(
        &self,
        hand: &HandRecord,
        participants: &[ParticipantRecord],
        plays: &[PlayRecord],
    ) -> Result<(), StoreError> {
        self.client
            .execute(
                const_format::concatcp!(
                    "INSERT INTO ",
                    HANDS,
                    " (id, table_id, hand_id, community, pot, dealer_seat) VALUES ($1, $2, $3, $4, $5, $6)"
                ),
                &[
                    &hand.id.inner(),
                    &hand.table_id,
                    &(hand.hand_id as i64),
                    &hand.community,
                    &hand.pot,
                    &(hand.dealer_seat as i16),
                ],
            )
            .await?;
        for p in participants {
            self.client
                .execute(
                    const_format::concatcp!(
                        "INSERT INTO ",
                        PARTICIPANTS,
                        " (hand_id, user_id, seat, hole_a, hole_b, stack, showed) VALUES ($1, $2, $3, $4, $5, $6, $7)"
                    ),
                    &[
                        &p.hand_id.inner(),
                        &p.user_id.map(|id| id.inner()),
                        &(p.seat as i16),
                        &p.hole[0],
                        &p.hole[1],
                        &p.stack,
                        &p.showed,
                    ],
                )
                .await?;
        }
        for a in plays {
            self.client
                .execute(
                    const_format::concatcp!(
                        "INSERT INTO ",
                        PLAYS,
                        " (hand_id, seq, player_id, label, amount) VALUES ($1, $2, $3, $4, $5)"
                    ),
                    &[
                        &a.hand_id.inner(),
                        &(a.seq as i64),
                        &a.player_id.map(|id| id.inner()),
                        &a.label,
                        &a.amount,
                    ],
                )
                .await?;
        }
        Ok(())
    }
}
