/// Registered users and their password hashes.
pub const USERS: &str = "users";
/// Undirected friend graph, stored as one row per ordered pair.
pub const FRIENDS: &str = "friends";
/// Completed hands, one row per hand.
pub const HANDS: &str = "hands";
/// One row per seat per hand.
pub const PARTICIPANTS: &str = "participants";
/// One row per applied action per hand.
pub const PLAYS: &str = "plays";

/// `CREATE TABLE IF NOT EXISTS` DDL for every table this store owns.
pub const CREATE_ALL: &str = const_format::concatcp!(
    "CREATE TABLE IF NOT EXISTS ",
    USERS,
    " (
        id          UUID PRIMARY KEY,
        username    VARCHAR(32) UNIQUE NOT NULL,
        email       VARCHAR(255) UNIQUE NOT NULL,
        hashword    TEXT NOT NULL,
        balance     BIGINT NOT NULL DEFAULT 0
    );
    CREATE TABLE IF NOT EXISTS ",
    FRIENDS,
    " (
        user_id     UUID NOT NULL REFERENCES ",
    USERS,
    " (id),
        friend_id   UUID NOT NULL REFERENCES ",
    USERS,
    " (id),
        PRIMARY KEY (user_id, friend_id)
    );
    CREATE TABLE IF NOT EXISTS ",
    HANDS,
    " (
        id          UUID PRIMARY KEY,
        table_id    BIGINT NOT NULL,
        hand_id     BIGINT NOT NULL,
        community   INTEGER[] NOT NULL,
        pot         BIGINT NOT NULL,
        dealer_seat SMALLINT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS ",
    PARTICIPANTS,
    " (
        hand_id     UUID NOT NULL REFERENCES ",
    HANDS,
    " (id),
        user_id     UUID REFERENCES ",
    USERS,
    " (id),
        seat        SMALLINT NOT NULL,
        hole_a      INTEGER NOT NULL,
        hole_b      INTEGER NOT NULL,
        stack       BIGINT NOT NULL,
        showed      BOOLEAN NOT NULL DEFAULT FALSE,
        PRIMARY KEY (hand_id, seat)
    );
    CREATE TABLE IF NOT EXISTS ",
    PLAYS,
    " (
        hand_id     UUID NOT NULL REFERENCES ",
    HANDS,
    " (id),
        seq         BIGINT NOT NULL,
        player_id   UUID REFERENCES ",
    USERS,
    " (id),
        label       TEXT NOT NULL,
        amount      BIGINT NOT NULL,
        PRIMARY KEY (hand_id, seq)
    );"
);

/// `CREATE INDEX IF NOT EXISTS` statements supporting the store's read paths.
pub const CREATE_INDICES: &str = const_format::concatcp!(
    "CREATE INDEX IF NOT EXISTS idx_users_username ON ",
    USERS,
    " (username);
    CREATE INDEX IF NOT EXISTS idx_users_balance ON ",
    USERS,
    " (balance DESC);
    CREATE INDEX IF NOT EXISTS idx_participants_user ON ",
    PARTICIPANTS,
    " (user_id);"
);
