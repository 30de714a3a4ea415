use crate::reply::reply;
use crate::state::SharedState;
use crate::ServerError;
use pk_conn::ConnectionData;
use pk_protocol::codes::PONG;
use pk_protocol::Map;
use pk_store::Store;
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn ping<S: Store>(
    _state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    _payload: &Map,
) -> Result<(), ServerError> {
    conn.lock().await.touch();
    reply(conn, PONG, Map::new()).await;
    Ok(())
}
