//! The three roles a participant plays over a ciphersuite: the
//! private-key holder ([`FirstParty`]), the shareable public-key view
//! of someone else ([`SecondParty`]), and the stateless verifier with
//! no keys at all ([`third_party`]).

pub mod first_party;
pub mod second_party;
pub mod third_party;

pub use first_party::{FirstParty, SerializedIdentity};
pub use second_party::SecondParty;

use golix_schema::objects::{
    decode_ack, decode_handshake, decode_nak, encode_ack, encode_handshake, encode_nak, AckFields,
    HandshakeFields, NakFields,
};
use golix_schema::WireGuid;

use crate::address::Guid;
use crate::error::GolixError;
use crate::secret::Secret;

/// The three inner payload kinds a GARQ can carry, stripped of the
/// `author` field that's only meaningful on the wire (it's attached at
/// encode time from the sender's own GUID and recovered at decode time
/// into [`third_party::AnyObject`]'s caller-visible `author`, never
/// trusted before `receive_request` verifies it).
#[derive(Clone, Debug)]
pub enum Inner {
    Handshake { target: Guid, secret: Secret },
    Ack { target: Guid, status: u8 },
    Nak { target: Guid, status: u8 },
}

pub(crate) fn encode_inner(inner: &Inner, author: &Guid) -> Result<Vec<u8>, GolixError> {
    let author_wire: WireGuid = author.into();
    let encoded = match inner {
        Inner::Handshake { target, secret } => encode_handshake(&HandshakeFields {
            author: author_wire,
            target: target.into(),
            secret: secret.to_bytes(),
        }),
        Inner::Ack { target, status } => encode_ack(&AckFields {
            author: author_wire,
            target: target.into(),
            status: *status,
        }),
        Inner::Nak { target, status } => encode_nak(&NakFields {
            author: author_wire,
            target: target.into(),
            status: *status,
        }),
    };
    encoded.map_err(|_| GolixError::PayloadTooLarge)
}

/// Tries handshake, then ack, then nak, in that order — the same order
/// the wire's discriminant tags resolve unambiguously, since each
/// `decode_*` rejects any payload not carrying its own tag.
pub(crate) fn parse_inner(bytes: &[u8]) -> Option<(Inner, Guid)> {
    if let Ok(hs) = decode_handshake(bytes) {
        let secret = Secret::from_bytes(&hs.secret).ok()?;
        return Some((
            Inner::Handshake {
                target: (&hs.target).into(),
                secret,
            },
            (&hs.author).into(),
        ));
    }
    if let Ok(ack) = decode_ack(bytes) {
        return Some((
            Inner::Ack {
                target: (&ack.target).into(),
                status: ack.status,
            },
            (&ack.author).into(),
        ));
    }
    if let Ok(nak) = decode_nak(bytes) {
        return Some((
            Inner::Nak {
                target: (&nak.target).into(),
                status: nak.status,
            },
            (&nak.author).into(),
        ));
    }
    None
}
