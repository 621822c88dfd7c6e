//! Packet types, per-type arguments, and flags

use std::fmt;

/// Argument byte values, grouped by the packet type they belong to.
///
/// Each packet type constrains its argument byte to a small set; the
/// authoritative mapping is [`PacketType::valid_arg`].
pub mod arg {
    /// No argument (PING, SEND)
    pub const NONE: u8 = 0x00;

    /// INIT: handshake offer
    pub const INIT_INIT: u8 = 0x01;
    /// INIT: handshake acceptance
    pub const INIT_ACCEPT: u8 = 0x02;

    /// TERM: orderly shutdown
    pub const TERM_CLEAN: u8 = 0x01;
    /// TERM: peer busy
    pub const TERM_BUSY: u8 = 0x02;

    /// INVALID: version check failed
    pub const INVALID_VERSION: u8 = 0x01;
    /// INVALID: type check failed
    pub const INVALID_TYPE: u8 = 0x02;
    /// INVALID: message malformed overall
    pub const INVALID_MESSAGE: u8 = 0x03;
    /// INVALID: argument check failed
    pub const INVALID_ARGUMENT: u8 = 0x04;
    /// INVALID: flags check failed
    pub const INVALID_FLAGS: u8 = 0x05;
    /// INVALID: payload check failed
    pub const INVALID_PAYLOAD: u8 = 0x06;
}

/// Packet types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PacketType {
    /// Handshake initiation/acceptance
    Init = 0x01,
    /// Liveness check
    Ping = 0x02,
    /// Data transfer
    Send = 0x03,
    /// Termination with reason
    Term = 0x04,
    /// Protocol-error report, naming which check failed
    Invalid = 0x05,
}

impl PacketType {
    /// Convert from byte
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(Self::Init),
            0x02 => Some(Self::Ping),
            0x03 => Some(Self::Send),
            0x04 => Some(Self::Term),
            0x05 => Some(Self::Invalid),
            _ => None,
        }
    }

    /// Convert to byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Check whether an argument byte is valid for this packet type.
    ///
    /// This is the shared compatibility table; the encoder and decoder both
    /// consult it so the two paths cannot drift apart.
    #[must_use]
    pub const fn valid_arg(self, arg: u8) -> bool {
        match self {
            Self::Init => arg >= arg::INIT_INIT && arg <= arg::INIT_ACCEPT,
            Self::Ping | Self::Send => arg == arg::NONE,
            Self::Term => arg >= arg::TERM_CLEAN && arg <= arg::TERM_BUSY,
            Self::Invalid => arg >= arg::INVALID_VERSION && arg <= arg::INVALID_PAYLOAD,
        }
    }

    /// Check whether this packet type carries only the single EMPTY
    /// sentinel byte as payload
    #[must_use]
    pub const fn requires_empty_payload(self) -> bool {
        matches!(self, Self::Init | Self::Invalid)
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "INIT",
            Self::Ping => "PING",
            Self::Send => "SEND",
            Self::Term => "TERM",
            Self::Invalid => "INVALID",
        };
        write!(f, "{name}")
    }
}

/// Packet flags
///
/// Only LOG and INCOGNITO are defined; the codec accepts unknown bits
/// unchecked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags(u8);

impl Flags {
    /// Peer should log this packet
    pub const LOG: u8 = 1 << 0;
    /// Peer should not record this packet
    pub const INCOGNITO: u8 = 1 << 1;

    /// Create empty flags
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create from byte
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        Self(value)
    }

    /// Convert to byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Set a flag
    #[must_use]
    pub const fn with(mut self, flag: u8) -> Self {
        self.0 |= flag;
        self
    }

    /// Check if flag is set
    #[must_use]
    pub const fn has(self, flag: u8) -> bool {
        (self.0 & flag) != 0
    }

    /// Check if the LOG bit is set
    #[must_use]
    pub const fn wants_log(self) -> bool {
        self.has(Self::LOG)
    }

    /// Check if the INCOGNITO bit is set
    #[must_use]
    pub const fn is_incognito(self) -> bool {
        self.has(Self::INCOGNITO)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.wants_log() {
            parts.push("LOG");
        }
        if self.is_incognito() {
            parts.push("INCOGNITO");
        }
        if parts.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", parts.join(" | "))
        }
    }
}
