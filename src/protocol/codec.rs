//! Frame codec (encode/decode)
//!
//! Two pure functions convert between [`Packet`] and its wire frame. Both
//! consult the same validation tables so an encoded frame always decodes and
//! a malformed frame is rejected with a precise classification.

use bytes::Bytes;
use tracing::trace;

use super::{
    Error, Flags, HEADER_SIZE, MAX_FRAME_SIZE, MIN_FRAME_SIZE, PAYLOAD_EMPTY, Packet, PacketType,
    Result, SUPPORTED_VERSIONS, TERMINATOR,
};

const REASON_MISSING: &str = "payload must be at least one byte";
const REASON_SENTINEL_ONLY: &str = "packet type carries exactly the EMPTY sentinel";
const REASON_SINGLETON: &str = "single-byte payloads must be the EMPTY sentinel";

/// Decoder knobs
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Reject any single-byte payload whose byte is not the EMPTY sentinel,
    /// regardless of packet type.
    ///
    /// Deployed encoders never emit such frames, so this is on by default.
    /// It also forbids legitimate one-byte SEND payloads; disable it when
    /// the peer is known to produce them.
    pub sentinel_only_singletons: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            sentinel_only_singletons: true,
        }
    }
}

impl DecodeOptions {
    /// Options that accept any single-byte payload content for data-bearing
    /// packet types
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            sentinel_only_singletons: false,
        }
    }
}

/// Encode a packet into a caller-supplied buffer
///
/// # Format
///
/// ```text
/// [VERSION (1)] [TYPE (1)] [ARG (1)] [FLAGS (1)] [PAYLOAD (>= 1)] [TERMINATOR (1)]
/// ```
///
/// Returns the number of bytes written. The buffer must hold the whole
/// frame, at most [`MAX_FRAME_SIZE`] bytes.
///
/// # Errors
///
/// Returns an error if:
/// - Payload is absent (zero length)
/// - Version is unsupported
/// - Argument is invalid for the packet type
/// - An INIT or INVALID packet carries anything but the EMPTY sentinel
/// - The frame exceeds protocol bounds or the destination capacity
///
/// Destination contents are unspecified after a failed call.
pub fn encode_into(packet: &Packet, dst: &mut [u8]) -> Result<usize> {
    let payload = packet.payload();
    if payload.is_empty() {
        return Err(Error::BadPayload {
            reason: REASON_MISSING,
            len: 0,
        });
    }

    if !SUPPORTED_VERSIONS.contains(&packet.version()) {
        return Err(Error::BadVersion {
            found: packet.version(),
        });
    }

    let packet_type = packet.packet_type();
    if !packet_type.valid_arg(packet.arg()) {
        return Err(Error::BadArg {
            packet_type,
            arg: packet.arg(),
        });
    }

    if packet_type.requires_empty_payload() && !packet.payload_is_empty_sentinel() {
        return Err(Error::BadPayload {
            reason: REASON_SENTINEL_ONLY,
            len: payload.len(),
        });
    }

    let total = HEADER_SIZE + payload.len() + 1;
    if !(MIN_FRAME_SIZE..=MAX_FRAME_SIZE).contains(&total) || dst.len() < total {
        return Err(Error::BadSize { size: total });
    }

    dst[0] = packet.version();
    dst[1] = packet_type.as_u8();
    dst[2] = packet.arg();
    dst[3] = packet.flags().as_u8();
    dst[HEADER_SIZE..HEADER_SIZE + payload.len()].copy_from_slice(payload);
    dst[HEADER_SIZE + payload.len()] = TERMINATOR;

    trace!(size = total, packet_type = %packet_type, "encoded frame");
    Ok(total)
}

/// Encode a packet into a freshly allocated frame
///
/// Convenience wrapper over [`encode_into`]; the returned vector is exactly
/// one frame.
pub fn encode(packet: &Packet) -> Result<Vec<u8>> {
    let total = HEADER_SIZE + packet.payload().len() + 1;
    let mut frame = vec![0u8; total.min(MAX_FRAME_SIZE)];
    let written = encode_into(packet, &mut frame)?;
    frame.truncate(written);
    Ok(frame)
}

/// Decode one complete frame with default options
///
/// The caller delivers exactly one delimited frame; the codec does not
/// reassemble partial reads.
pub fn decode(frame: Bytes) -> Result<Packet> {
    decode_with(frame, DecodeOptions::default())
}

/// Decode one complete frame
///
/// Checks run in order: size bounds, version, type, argument, terminator,
/// payload length, payload shape. The first failure is reported.
///
/// On success the packet's payload is a zero-copy slice of `frame`.
///
/// # Errors
///
/// Returns an error if:
/// - Frame size is outside `[MIN_FRAME_SIZE, MAX_FRAME_SIZE]`
/// - Version byte is unsupported
/// - Type byte is outside the enumeration
/// - Argument byte is invalid for the type
/// - The trailing byte is not the terminator
/// - The payload violates the length or sentinel rules
pub fn decode_with(frame: Bytes, options: DecodeOptions) -> Result<Packet> {
    let size = frame.len();
    if !(MIN_FRAME_SIZE..=MAX_FRAME_SIZE).contains(&size) {
        return Err(Error::BadSize { size });
    }

    let version = frame[0];
    if !SUPPORTED_VERSIONS.contains(&version) {
        return Err(Error::BadVersion { found: version });
    }

    let packet_type =
        PacketType::from_u8(frame[1]).ok_or(Error::BadType { found: frame[1] })?;

    let arg = frame[2];
    if !packet_type.valid_arg(arg) {
        return Err(Error::BadArg { packet_type, arg });
    }

    let last = frame[size - 1];
    if last != TERMINATOR {
        return Err(Error::BadTerminate { found: last });
    }

    let payload_len = size - HEADER_SIZE - 1;
    if payload_len < 1 {
        return Err(Error::BadPayload {
            reason: REASON_MISSING,
            len: payload_len,
        });
    }

    let first = frame[HEADER_SIZE];
    if packet_type.requires_empty_payload() && !(payload_len == 1 && first == PAYLOAD_EMPTY) {
        return Err(Error::BadPayload {
            reason: REASON_SENTINEL_ONLY,
            len: payload_len,
        });
    }

    if options.sentinel_only_singletons && payload_len == 1 && first != PAYLOAD_EMPTY {
        return Err(Error::BadPayload {
            reason: REASON_SINGLETON,
            len: payload_len,
        });
    }

    let flags = Flags::from_u8(frame[3]);
    let payload = frame.slice(HEADER_SIZE..size - 1);

    trace!(size, packet_type = %packet_type, "decoded frame");
    Ok(Packet::from_parts(version, packet_type, arg, flags, payload))
}
