//! Packet type and result-code numeric assignments. These values are the
//! wire contract: they are never renumbered, only extended.

pub const PROTOCOL_VERSION: u8 = 0x01;

pub const PING: u16 = 10;
pub const PONG: u16 = 11;

pub const LOGIN: u16 = 100;
pub const LOGIN_OK: u16 = 101;
pub const LOGIN_NOT_OK: u16 = 102;

pub const SIGNUP: u16 = 200;
pub const SIGNUP_OK: u16 = 201;
pub const SIGNUP_NOT_OK: u16 = 202;

pub const CREATE_TABLE: u16 = 300;
pub const CREATE_TABLE_OK: u16 = 301;
pub const CREATE_TABLE_NOT_OK: u16 = 302;

pub const JOIN_TABLE: u16 = 400;
pub const JOIN_TABLE_OK: u16 = 401;
pub const JOIN_TABLE_NOT_OK: u16 = 402;
pub const JOIN_TABLE_FULL: u16 = 403;

pub const ACTION_REQUEST: u16 = 450;
pub const ACTION_RESULT: u16 = 451;

pub const UPDATE_BUNDLE: u16 = 460;

pub const RESYNC_REQUEST: u16 = 470;
pub const RESYNC_RESPONSE: u16 = 471;

pub const TABLES: u16 = 500;

pub const UPDATE_GAMESTATE: u16 = 600;

pub const LEAVE_TABLE: u16 = 700;
pub const LEAVE_TABLE_OK: u16 = 701;
pub const LEAVE_TABLE_NOT_OK: u16 = 702;

pub const SCOREBOARD: u16 = 800;
pub const SCOREBOARD_OK: u16 = 801;
pub const SCOREBOARD_NOT_OK: u16 = 802;

pub const FRIENDLIST: u16 = 900;
pub const FRIENDLIST_OK: u16 = 901;
pub const FRIENDLIST_NOT_OK: u16 = 902;

pub const FRIEND_REQUEST: u16 = 910;
pub const FRIEND_REQUEST_OK: u16 = 911;
pub const FRIEND_REQUEST_NOT_OK: u16 = 912;

pub const FRIEND_ACCEPT: u16 = 920;
pub const FRIEND_ACCEPT_OK: u16 = 921;
pub const FRIEND_ACCEPT_NOT_OK: u16 = 922;

pub const FRIEND_REMOVE: u16 = 930;
pub const FRIEND_REMOVE_OK: u16 = 931;
pub const FRIEND_REMOVE_NOT_OK: u16 = 932;

pub const TABLE_INVITE: u16 = 940;
pub const TABLE_INVITE_OK: u16 = 941;
pub const TABLE_INVITE_NOT_OK: u16 = 942;

pub const TABLE_INVITE_ACCEPT: u16 = 950;
pub const TABLE_INVITE_ACCEPT_OK: u16 = 951;
pub const TABLE_INVITE_ACCEPT_NOT_OK: u16 = 952;

pub const TABLE_INVITE_DECLINE: u16 = 960;
pub const TABLE_INVITE_DECLINE_OK: u16 = 961;
pub const TABLE_INVITE_DECLINE_NOT_OK: u16 = 962;

pub const BALANCE_UPDATE: u16 = 970;

/// Generic client-error / server-error result codes used across handlers
/// whose outcome isn't one of the dedicated `_OK`/`_NOT_OK` pairs above.
pub const RESULT_OK: u16 = 0;
pub const RESULT_BAD_ACTION: u16 = 400;
pub const RESULT_UNAUTHORIZED: u16 = 403;
pub const RESULT_INVALID_ACTION: u16 = 409;
pub const RESULT_SERVER_ERROR: u16 = 500;

/// Catch-all packet type for errors raised before a handler could send its
/// own typed `_NOT_OK`/`_RESULT` reply (e.g. the login-required gate).
pub const ERROR: u16 = 999;
