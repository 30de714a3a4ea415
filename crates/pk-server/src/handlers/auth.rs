use crate::reply::reply;
use crate::state::SharedState;
use crate::ServerError;
use pk_auth::password;
use pk_auth::Member;
use pk_auth::User;
use pk_conn::ConnectionData;
use pk_core::Unique;
use pk_core::ID;
use pk_protocol::codes::LOGIN_NOT_OK;
use pk_protocol::codes::LOGIN_OK;
use pk_protocol::codes::SIGNUP_NOT_OK;
use pk_protocol::codes::SIGNUP_OK;
use pk_protocol::Map;
use pk_protocol::Value;
use pk_store::Store;
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn login<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    payload: &Map,
) -> Result<(), ServerError> {
    let username = payload.get_str("user").unwrap_or_default();
    let pass = payload.get_str("pass").unwrap_or_default();

    let found = state.store.find_user_by_username(username).await?;
    let Some((member, hashword)) = found else {
        reply(conn, LOGIN_NOT_OK, Map::new().set("result", Value::Int(LOGIN_NOT_OK as i64))).await;
        return Ok(());
    };
    if !password::verify(pass, &hashword) {
        reply(conn, LOGIN_NOT_OK, Map::new().set("result", Value::Int(LOGIN_NOT_OK as i64))).await;
        return Ok(());
    }

    let balance = state.store.get_balance(member.id()).await?;
    {
        let mut guard = conn.lock().await;
        guard.authenticate(User::from(member.clone()), balance);
    }
    state.conns.bind_username(member.username(), conn.clone()).await;

    let map = Map::new()
        .set("result", Value::Int(LOGIN_OK as i64))
        .set("user_id", Value::Str(member.id().to_string()))
        .set("username", Value::Str(member.username().to_string()))
        .set("balance", Value::Int(balance));
    reply(conn, LOGIN_OK, map).await;
    log::info!("[auth] {} logged in", member.username());
    Ok(())
}

pub async fn signup<S: Store>(
    state: &SharedState<S>,
    conn: &Arc<Mutex<ConnectionData>>,
    payload: &Map,
) -> Result<(), ServerError> {
    let username = payload.get_str("user").unwrap_or_default();
    let pass = payload.get_str("pass").unwrap_or_default();
    let email = payload.get_str("email").unwrap_or_default();
    // fullname/phone/dob/country/gender are part of the wire contract but
    // this store's schema has no columns for them; accepted and dropped.

    if username.is_empty() || pass.is_empty() {
        reply(conn, SIGNUP_NOT_OK, Map::new().set("res", Value::Int(SIGNUP_NOT_OK as i64))).await;
        return Ok(());
    }
    if state.store.exists(username, email).await? {
        reply(conn, SIGNUP_NOT_OK, Map::new().set("res", Value::Int(SIGNUP_NOT_OK as i64))).await;
        return Ok(());
    }

    let member = Member::new(ID::default(), username.to_string(), email.to_string());
    let hashword = password::hash(pass).map_err(|_| ServerError::Auth("hash failure"))?;
    state.store.create_user(&member, &hashword).await?;
    state
        .store
        .adjust_balance(member.id(), pk_core::STARTING_BALANCE)
        .await?;

    reply(conn, SIGNUP_OK, Map::new().set("res", Value::Int(SIGNUP_OK as i64))).await;
    log::info!("[auth] {} signed up", username);
    Ok(())
}
