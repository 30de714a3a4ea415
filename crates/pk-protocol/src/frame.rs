use std::fmt::Display;
use std::fmt::Formatter;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;

use crate::codes::PROTOCOL_VERSION;

/// Largest payload this server will frame. Anything bigger is a malformed
/// or hostile packet, not a legitimate oversized request.
pub const MAX_PACKET_LEN: usize = 65535;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    OversizedPacket(usize),
    UnsupportedVersion(u8),
    Eof,
    Io,
}

impl Display for ProtocolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProtocolError::OversizedPacket(len) => write!(f, "packet of {len} bytes exceeds limit"),
            ProtocolError::UnsupportedVersion(v) => write!(f, "unsupported protocol version {v}"),
            ProtocolError::Eof => write!(f, "connection closed mid-frame"),
            ProtocolError::Io => write!(f, "socket read/write failure"),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// One decoded packet: a protocol version, a 16-bit packet type, and a raw
/// payload whose shape depends on that type.
#[derive(Debug, Clone)]
pub struct Frame {
    pub proto: u8,
    pub packet_type: u16,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(packet_type: u16, payload: Vec<u8>) -> Self {
        Self {
            proto: PROTOCOL_VERSION,
            packet_type,
            payload,
        }
    }
}

/// Reads the 4-byte pre-framing handshake (`[len=0x0002][version]`) and
/// returns the client's declared protocol version.
pub async fn read_handshake<R>(reader: &mut R) -> Result<u16, ProtocolError>
where
    R: tokio::io::AsyncRead + Unpin,
{
    use byteorder::BigEndian;
    use byteorder::ByteOrder;

    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf).await.map_err(|_| ProtocolError::Eof)?;
    let len = BigEndian::read_u16(&buf[0..2]);
    let version = BigEndian::read_u16(&buf[2..4]);
    if len != 2 {
        return Err(ProtocolError::UnsupportedVersion(version as u8));
    }
    Ok(version)
}

pub async fn write_handshake_reply<W>(writer: &mut W, accepted: bool) -> Result<(), ProtocolError>
where
    W: tokio::io::AsyncWrite + Unpin,
{
    use byteorder::BigEndian;
    use byteorder::WriteBytesExt;

    let mut buf = Vec::with_capacity(3);
    buf.write_u16::<BigEndian>(1).map_err(|_| ProtocolError::Io)?;
    buf.push(if accepted { 0x00 } else { 0x01 });
    writer.write_all(&buf).await.map_err(|_| ProtocolError::Io)?;
    Ok(())
}

/// Reads one `[len:u16 BE][proto:u8][type:u16 BE][payload]` frame. `len` is
/// the total frame length including the 5-byte header.
pub async fn read_frame<R>(reader: &mut R) -> Result<Frame, ProtocolError>
where
    R: tokio::io::AsyncRead + Unpin,
{
    use byteorder::BigEndian;
    use byteorder::ByteOrder;

    let mut header = [0u8; 5];
    reader
        .read_exact(&mut header)
        .await
        .map_err(|_| ProtocolError::Eof)?;
    let len = BigEndian::read_u16(&header[0..2]) as usize;
    let proto = header[2];
    let packet_type = BigEndian::read_u16(&header[3..5]);

    if len < 5 || len > MAX_PACKET_LEN {
        return Err(ProtocolError::OversizedPacket(len));
    }
    if proto != PROTOCOL_VERSION {
        return Err(ProtocolError::UnsupportedVersion(proto));
    }

    let mut payload = vec![0u8; len - 5];
    reader
        .read_exact(&mut payload)
        .await
        .map_err(|_| ProtocolError::Eof)?;

    Ok(Frame {
        proto,
        packet_type,
        payload,
    })
}

/// Serializes a frame for the wire, computing `len` from the payload.
pub fn encode_frame(frame: &Frame) -> Vec<u8> {
    use byteorder::BigEndian;
    use byteorder::WriteBytesExt;

    let total_len = 5 + frame.payload.len();
    let mut out = Vec::with_capacity(total_len);
    out.write_u16::<BigEndian>(total_len as u16).expect("len");
    out.push(frame.proto);
    out.write_u16::<BigEndian>(frame.packet_type).expect("type");
    out.extend_from_slice(&frame.payload);
    out
}

pub async fn write_frame<W>(writer: &mut W, frame: &Frame) -> Result<(), ProtocolError>
where
    W: tokio::io::AsyncWrite + Unpin,
{
    writer
        .write_all(&encode_frame(frame))
        .await
        .map_err(|_| ProtocolError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn frame_round_trips_through_encode_and_read() {
        let original = Frame::new(crate::codes::PING, vec![1, 2, 3, 4]);
        let bytes = encode_frame(&original);
        let mut cursor = std::io::Cursor::new(bytes);
        let decoded = read_frame(&mut cursor).await.unwrap();
        assert_eq!(decoded.packet_type, crate::codes::PING);
        assert_eq!(decoded.payload, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn oversized_declared_length_is_rejected() {
        let mut bytes = vec![0xFFu8, 0xFF, PROTOCOL_VERSION, 0, 10];
        bytes.extend_from_slice(&[0u8; 10]);
        let mut cursor = std::io::Cursor::new(bytes);
        assert_eq!(
            read_frame(&mut cursor).await,
            Err(ProtocolError::OversizedPacket(0xFFFF))
        );
    }

    #[tokio::test]
    async fn handshake_reply_accepts_version_one() {
        let version = {
            let mut cursor = std::io::Cursor::new(vec![0u8, 2, 0, 1]);
            read_handshake(&mut cursor).await.unwrap()
        };
        assert_eq!(version, 1);

        let mut out = Vec::new();
        write_handshake_reply(&mut out, version == 1).await.unwrap();
        assert_eq!(out, vec![0u8, 1, 0x00]);
    }
}
