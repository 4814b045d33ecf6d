//! Declarative byte-level pack/unpack for Golix protocol objects.
//!
//! This crate plays the role of the "separate declarative parser
//! library" described by the Golix object model: it knows nothing
//! about hashing, signing, or encryption. It only knows how to turn
//! typed field structs into bytes and back, with a single uniform
//! [`ParseError`] signal on malformed input.
//!
//! Every object kind is encoded as: a one-byte kind tag, a two-byte
//! `cipher`/`address_algo` header, the kind-specific fields, and
//! (except for GIDC) a length-prefixed trailer carrying the
//! signature or MAC. Callers are responsible for computing and
//! verifying that trailer; this crate only serializes it.

mod reader;
mod writer;

pub mod objects;

pub use reader::Reader;
pub use writer::Writer;

use core::fmt;

/// The one error signal this crate produces. All failures here are
/// format-class (spec.md §7) — malformed input, not a security
/// violation; this crate has no secrets to leak timing about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer bytes remained than the field required.
    UnexpectedEof,
    /// A length-prefixed field declared a length that doesn't fit the
    /// remaining buffer.
    LengthMismatch,
    /// The leading kind tag did not match the kind being decoded.
    WrongKind { expected: u8, found: u8 },
    /// Bytes remained after every expected field was consumed.
    TrailingData,
    /// A field (or a GUID list's count) exceeds what a `u16` length
    /// prefix can carry.
    FieldTooLong,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEof => write!(f, "unexpected end of input"),
            ParseError::LengthMismatch => write!(f, "declared length exceeds remaining input"),
            ParseError::WrongKind { expected, found } => {
                write!(f, "expected kind tag {expected}, found {found}")
            }
            ParseError::TrailingData => write!(f, "trailing bytes after parsed object"),
            ParseError::FieldTooLong => write!(f, "field exceeds u16::MAX bytes"),
        }
    }
}

impl std::error::Error for ParseError {}

/// A borrowed-free GUID: an algorithm id plus its address bytes.
///
/// This is the schema-layer's view of a GUID — it carries no notion
/// of which hash produced the address, only the bytes themselves.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WireGuid {
    pub algo: u8,
    pub address: Vec<u8>,
}

impl WireGuid {
    pub fn new(algo: u8, address: Vec<u8>) -> Self {
        Self { algo, address }
    }
}

/// One-byte kind tags prefixing every packed object, so
/// [`objects::decode_any_kind`]-style dispatch never has to guess.
pub mod kind {
    pub const GIDC: u8 = 1;
    pub const GEOC: u8 = 2;
    pub const GOBS: u8 = 3;
    pub const GOBD: u8 = 4;
    pub const GDXX: u8 = 5;
    pub const GARQ: u8 = 6;

    pub const INNER_HANDSHAKE: u8 = 0x01;
    pub const INNER_ACK: u8 = 0x02;
    pub const INNER_NAK: u8 = 0x03;
}
