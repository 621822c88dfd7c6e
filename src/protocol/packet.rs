//! Packet representation

use bytes::Bytes;

use super::{Flags, PAYLOAD_EMPTY, PacketType, arg};

/// One protocol packet: a 4-byte header plus an opaque payload.
///
/// The payload is a [`Bytes`] handle; a decoded packet's payload aliases the
/// source buffer without copying. Payloads are never empty on the wire — "no
/// data" is the single EMPTY sentinel byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    version: u8,
    packet_type: PacketType,
    arg: u8,
    flags: Flags,
    payload: Bytes,
}

impl Packet {
    /// Create a packet from raw parts.
    ///
    /// No validation happens here; the codec checks version, argument, and
    /// payload shape when the packet is encoded.
    pub fn new(
        version: u8,
        packet_type: PacketType,
        arg: u8,
        payload: impl Into<Bytes>,
    ) -> Self {
        Self {
            version,
            packet_type,
            arg,
            flags: Flags::new(),
            payload: payload.into(),
        }
    }

    /// Create an INIT handshake packet (offer or acceptance)
    #[must_use]
    pub fn init(version: u8, handshake_arg: u8) -> Self {
        Self::new(
            version,
            PacketType::Init,
            handshake_arg,
            Bytes::from_static(&[PAYLOAD_EMPTY]),
        )
    }

    /// Create a PING packet
    #[must_use]
    pub fn ping(version: u8) -> Self {
        Self::new(
            version,
            PacketType::Ping,
            arg::NONE,
            Bytes::from_static(&[PAYLOAD_EMPTY]),
        )
    }

    /// Create a SEND packet carrying data
    pub fn send(version: u8, payload: impl Into<Bytes>) -> Self {
        Self::new(version, PacketType::Send, arg::NONE, payload)
    }

    /// Create a TERM packet with a termination reason
    #[must_use]
    pub fn term(version: u8, reason: u8) -> Self {
        Self::new(
            version,
            PacketType::Term,
            reason,
            Bytes::from_static(&[PAYLOAD_EMPTY]),
        )
    }

    /// Create an INVALID packet reporting a failed protocol check
    #[must_use]
    pub fn invalid(version: u8, failed_check: u8) -> Self {
        Self::new(
            version,
            PacketType::Invalid,
            failed_check,
            Bytes::from_static(&[PAYLOAD_EMPTY]),
        )
    }

    pub(crate) fn from_parts(
        version: u8,
        packet_type: PacketType,
        arg: u8,
        flags: Flags,
        payload: Bytes,
    ) -> Self {
        Self {
            version,
            packet_type,
            arg,
            flags,
            payload,
        }
    }

    /// Get protocol version
    #[must_use]
    pub const fn version(&self) -> u8 {
        self.version
    }

    /// Get packet type
    #[must_use]
    pub const fn packet_type(&self) -> PacketType {
        self.packet_type
    }

    /// Get argument byte
    #[must_use]
    pub const fn arg(&self) -> u8 {
        self.arg
    }

    /// Get flags
    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Set flags
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    /// Get payload
    #[must_use]
    pub const fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Check whether the payload is the single EMPTY sentinel byte
    #[must_use]
    pub fn payload_is_empty_sentinel(&self) -> bool {
        self.payload.len() == 1 && self.payload[0] == PAYLOAD_EMPTY
    }

    /// Encode this packet to a freshly allocated frame
    pub fn encode(&self) -> super::Result<Vec<u8>> {
        super::encode(self)
    }

    /// Decode a packet from one complete frame
    pub fn decode(frame: Bytes) -> super::Result<Self> {
        super::decode(frame)
    }
}
