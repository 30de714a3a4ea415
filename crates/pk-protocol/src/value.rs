use byteorder::BigEndian;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::io::Cursor;
use std::io::Read;

/// A self-describing value: every packet payload is a `Map` of these.
/// The binary format is a tag byte followed by the tag's fixed or
/// length-prefixed representation; this is deliberately not a novel
/// format, just a compact one that honors the key names the wire
/// contract names.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<Value>),
    Map(Map),
}

/// An ordered key→value map, insertion order preserved (clients may rely
/// on it for display, though lookup is by key).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map(Vec<(String, Value)>);

impl Map {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.0.push((key.to_string(), value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.get(key) {
            Some(Value::Int(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(Value::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn get_list(&self, key: &str) -> Option<&[Value]> {
        match self.get(key) {
            Some(Value::List(l)) => Some(l.as_slice()),
            _ => None,
        }
    }

    pub fn get_map(&self, key: &str) -> Option<&Map> {
        match self.get(key) {
            Some(Value::Map(m)) => Some(m),
            _ => None,
        }
    }

    pub fn entries(&self) -> &[(String, Value)] {
        &self.0
    }
}

const TAG_NULL: u8 = 0;
const TAG_BOOL: u8 = 1;
const TAG_INT: u8 = 2;
const TAG_STR: u8 = 3;
const TAG_LIST: u8 = 4;
const TAG_MAP: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError;

pub fn encode_value(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Null => out.push(TAG_NULL),
        Value::Bool(b) => {
            out.push(TAG_BOOL);
            out.push(*b as u8);
        }
        Value::Int(i) => {
            out.push(TAG_INT);
            out.write_i64::<BigEndian>(*i).expect("int");
        }
        Value::Str(s) => {
            out.push(TAG_STR);
            let bytes = s.as_bytes();
            out.write_u32::<BigEndian>(bytes.len() as u32).expect("len");
            out.extend_from_slice(bytes);
        }
        Value::List(items) => {
            out.push(TAG_LIST);
            out.write_u32::<BigEndian>(items.len() as u32).expect("len");
            for item in items {
                encode_value(item, out);
            }
        }
        Value::Map(map) => {
            out.push(TAG_MAP);
            out.write_u32::<BigEndian>(map.0.len() as u32).expect("len");
            for (key, value) in &map.0 {
                let key_bytes = key.as_bytes();
                out.write_u32::<BigEndian>(key_bytes.len() as u32).expect("len");
                out.extend_from_slice(key_bytes);
                encode_value(value, out);
            }
        }
    }
}

pub fn encode_map(map: &Map) -> Vec<u8> {
    let mut out = Vec::new();
    encode_value(&Value::Map(map.clone()), &mut out);
    out
}

fn decode_value(cursor: &mut Cursor<&[u8]>) -> Result<Value, DecodeError> {
    let tag = cursor.read_u8().map_err(|_| DecodeError)?;
    match tag {
        TAG_NULL => Ok(Value::Null),
        TAG_BOOL => Ok(Value::Bool(cursor.read_u8().map_err(|_| DecodeError)? != 0)),
        TAG_INT => Ok(Value::Int(cursor.read_i64::<BigEndian>().map_err(|_| DecodeError)?)),
        TAG_STR => {
            let len = cursor.read_u32::<BigEndian>().map_err(|_| DecodeError)? as usize;
            let mut bytes = vec![0u8; len];
            cursor.read_exact(&mut bytes).map_err(|_| DecodeError)?;
            String::from_utf8(bytes).map(Value::Str).map_err(|_| DecodeError)
        }
        TAG_LIST => {
            let len = cursor.read_u32::<BigEndian>().map_err(|_| DecodeError)? as usize;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(decode_value(cursor)?);
            }
            Ok(Value::List(items))
        }
        TAG_MAP => {
            let len = cursor.read_u32::<BigEndian>().map_err(|_| DecodeError)? as usize;
            let mut entries = Vec::with_capacity(len);
            for _ in 0..len {
                let key_len = cursor.read_u32::<BigEndian>().map_err(|_| DecodeError)? as usize;
                let mut key_bytes = vec![0u8; key_len];
                cursor.read_exact(&mut key_bytes).map_err(|_| DecodeError)?;
                let key = String::from_utf8(key_bytes).map_err(|_| DecodeError)?;
                entries.push((key, decode_value(cursor)?));
            }
            Ok(Value::Map(Map(entries)))
        }
        _ => Err(DecodeError),
    }
}

pub fn decode_map(bytes: &[u8]) -> Result<Map, DecodeError> {
    let mut cursor = Cursor::new(bytes);
    match decode_value(&mut cursor)? {
        Value::Map(map) => Ok(map),
        _ => Err(DecodeError),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_round_trips_through_encode_and_decode() {
        let map = Map::new()
            .set("user", Value::Str("alice".into()))
            .set("balance", Value::Int(1500))
            .set("active", Value::Bool(true))
            .set("hole", Value::List(vec![Value::Int(13), Value::Int(-1)]))
            .set(
                "nested",
                Value::Map(Map::new().set("seat", Value::Int(2))),
            );

        let bytes = encode_map(&map);
        let decoded = decode_map(&bytes).unwrap();

        assert_eq!(decoded.get_str("user"), Some("alice"));
        assert_eq!(decoded.get_int("balance"), Some(1500));
        assert_eq!(decoded.get_bool("active"), Some(true));
        assert_eq!(decoded.get_list("hole").map(|l| l.len()), Some(2));
        assert_eq!(
            decoded.get_map("nested").and_then(|m| m.get_int("seat")),
            Some(2)
        );
    }

    #[test]
    fn truncated_payload_is_a_decode_error() {
        let map = Map::new().set("x", Value::Int(1));
        let mut bytes = encode_map(&map);
        bytes.truncate(bytes.len() - 2);
        assert_eq!(decode_map(&bytes), Err(DecodeError));
    }
}
