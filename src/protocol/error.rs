//! Codec error types

use thiserror::Error;

use super::{MAX_FRAME_SIZE, MIN_FRAME_SIZE, PacketType, TERMINATOR};

/// Codec errors
///
/// Classifications are mutually exclusive; the encode and decode paths apply
/// their checks in a fixed order and report the first failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Frame size outside protocol bounds, or the destination buffer cannot
    /// hold the frame
    #[error(
        "bad frame size: {size} bytes (frames span {min}..={max} bytes and must fit the destination)",
        min = MIN_FRAME_SIZE,
        max = MAX_FRAME_SIZE
    )]
    BadSize {
        /// Offending total frame size
        size: usize,
    },

    /// Version byte not in the supported set
    #[error("unsupported protocol version: {found}")]
    BadVersion {
        /// Found version byte
        found: u8,
    },

    /// Type byte outside the packet type enumeration
    #[error("unknown packet type: {found:#04x}")]
    BadType {
        /// Found type byte
        found: u8,
    },

    /// Argument byte invalid for the given packet type
    #[error("argument {arg:#04x} not valid for {packet_type} packets")]
    BadArg {
        /// Packet type whose table was consulted
        packet_type: PacketType,
        /// Offending argument byte
        arg: u8,
    },

    /// Payload missing, wrong length, or wrong sentinel content for its type
    #[error("bad payload: {reason} (length {len})")]
    BadPayload {
        /// Which payload rule failed
        reason: &'static str,
        /// Observed payload length
        len: usize,
    },

    /// Terminator byte missing or wrong
    #[error("bad terminator: expected {expected:#04x}, found {found:#04x}", expected = TERMINATOR)]
    BadTerminate {
        /// Found trailing byte
        found: u8,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
