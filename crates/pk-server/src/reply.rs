use pk_conn::ConnectionData;
use pk_protocol::encode_frame;
use pk_protocol::encode_map;
use pk_protocol::Frame;
use pk_protocol::Map;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Queues one encoded response on `conn`'s own outbox. Used by every
/// handler that replies directly to its caller (as opposed to broadcasting
/// through a table).
pub async fn reply(conn: &Arc<Mutex<ConnectionData>>, packet_type: u16, map: Map) {
    let frame = encode_frame(&Frame::new(packet_type, encode_map(&map)));
    let outbox = conn.lock().await.outbox().clone();
    if outbox.try_send(frame).is_err() {
        log::warn!("[dispatch] reply dropped, outbox full or closed");
    }
}
