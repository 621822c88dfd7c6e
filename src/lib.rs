//! mwire - Minimal binary framing codec for middleware control messages
//!
//! This library implements the wire codec for a small control/data framing
//! protocol: a 4-byte header (version, type, argument, flags), an opaque
//! payload of at least one byte, and a fixed terminator byte. The codec
//! validates every field in both directions and reports a precise error
//! classification for each way a frame can be malformed.
//!
//! Transport I/O, session state machines, and retry policy live in the
//! calling layer; the codec works on one complete, already-delimited frame
//! per call.
//!
//! # Quick Start
//!
//! ```rust
//! use mwire::{Packet, PacketType};
//!
//! // Create a data packet
//! let packet = Packet::send(1, &b"hello, peer"[..]);
//!
//! // Encode to one wire frame
//! let frame = packet.encode()?;
//!
//! // Decode it back (payload is a zero-copy view of the frame)
//! let decoded = Packet::decode(frame.into())?;
//! assert_eq!(decoded.packet_type(), PacketType::Send);
//! # Ok::<(), mwire::Error>(())
//! ```
//!
//! # Features
//!
//! - **Zero-copy decoding** - Decoded payloads borrow the source buffer
//! - **Type-safe packet types** - Rust enums for protocol messages
//! - **Exhaustive validation** - Shared type/argument tables on both paths
//! - **Pure functions** - No I/O, no shared state, safe to call concurrently

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod protocol;

pub use protocol::{
    DecodeOptions, Error, Flags, HEADER_SIZE, MAX_FRAME_SIZE, MIN_FRAME_SIZE, PAYLOAD_EMPTY,
    Packet, PacketType, Result, SUPPORTED_VERSIONS, TERMINATOR, arg, decode, decode_with, encode,
    encode_into,
};
