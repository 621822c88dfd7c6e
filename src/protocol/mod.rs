//! Wire protocol core implementation
//!
//! This module provides the wire format, packet types, and codec.

mod codec;
mod error;
mod packet;
mod types;

pub use codec::{DecodeOptions, decode, decode_with, encode, encode_into};
pub use error::{Error, Result};
pub use packet::Packet;
pub use types::{Flags, PacketType, arg};

/// Protocol versions this codec accepts
pub const SUPPORTED_VERSIONS: [u8; 2] = [1, 2];

/// Fixed header size in bytes: version, type, arg, flags
pub const HEADER_SIZE: usize = 4;

/// Minimum total frame size (header + terminator)
pub const MIN_FRAME_SIZE: usize = 5;

/// Maximum total frame size
pub const MAX_FRAME_SIZE: usize = 1500;

/// Trailing byte marking the end of every frame
pub const TERMINATOR: u8 = 0x7F;

/// Reserved payload sentinel meaning "no meaningful payload"
pub const PAYLOAD_EMPTY: u8 = 0x00;
