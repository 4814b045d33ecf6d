//! Per-kind field structs and their pack/unpack functions.
//!
//! Every signed/MACed kind (GEOC, GOBS, GOBD, GDXX, GARQ) follows the
//! same two-phase shape: `encode_*_unsigned` serializes exactly the
//! bytes whose hash becomes the object's GUID address, and
//! `encode_*_sealed` appends the trailer (signature or MAC) after
//! that. `decode_*` parses a fully sealed object and hands back both
//! the typed fields and the trailer, so the caller can re-run
//! `encode_*_unsigned` on the fields to re-derive the address it
//! should verify against — the wire bytes themselves are never
//! trusted as "the signed quantity", only the re-encoding is.

use crate::{kind, ParseError, Reader, WireGuid, Writer};

// ---------------------------------------------------------------------------
// GIDC — identity container (never sealed; the GUID is the commitment)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GidcFields {
    pub cipher: u8,
    pub address_algo: u8,
    pub signature_pub: Vec<u8>,
    pub encryption_pub: Vec<u8>,
    pub exchange_pub: Vec<u8>,
}

pub fn encode_gidc(f: &GidcFields) -> Result<Vec<u8>, ParseError> {
    let mut w = Writer::new();
    w.push_u8(kind::GIDC);
    w.push_u8(f.cipher);
    w.push_u8(f.address_algo);
    w.push_tlv(&f.signature_pub)?;
    w.push_tlv(&f.encryption_pub)?;
    w.push_tlv(&f.exchange_pub)?;
    Ok(w.into_bytes())
}

pub fn decode_gidc(data: &[u8]) -> Result<GidcFields, ParseError> {
    let mut r = Reader::new(data);
    r.expect_kind(kind::GIDC)?;
    let cipher = r.read_u8()?;
    let address_algo = r.read_u8()?;
    let signature_pub = r.read_tlv()?.to_vec();
    let encryption_pub = r.read_tlv()?.to_vec();
    let exchange_pub = r.read_tlv()?.to_vec();
    r.expect_empty()?;
    Ok(GidcFields {
        cipher,
        address_algo,
        signature_pub,
        encryption_pub,
        exchange_pub,
    })
}

// ---------------------------------------------------------------------------
// GEOC — encrypted container
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeocFields {
    pub cipher: u8,
    pub address_algo: u8,
    pub author: WireGuid,
    pub payload: Vec<u8>,
}

pub fn encode_geoc_unsigned(f: &GeocFields) -> Result<Vec<u8>, ParseError> {
    let mut w = Writer::new();
    w.push_u8(kind::GEOC);
    w.push_u8(f.cipher);
    w.push_u8(f.address_algo);
    w.push_guid(&f.author)?;
    w.push_tlv(&f.payload)?;
    Ok(w.into_bytes())
}

/// Panics only if `f` was never run through [`encode_geoc_unsigned`]
/// successfully first — every caller in this crate seals fields that
/// already passed that check while computing the object's GUID.
pub fn encode_geoc_sealed(f: &GeocFields, signature: &[u8]) -> Vec<u8> {
    let mut out = encode_geoc_unsigned(f).expect("fields already validated by pack()");
    let mut w = Writer::new();
    w.push_tlv(signature)
        .expect("trailer length is a suite-fixed constant");
    out.extend_from_slice(&w.into_bytes());
    out
}

pub fn decode_geoc(data: &[u8]) -> Result<(GeocFields, Vec<u8>), ParseError> {
    let mut r = Reader::new(data);
    r.expect_kind(kind::GEOC)?;
    let cipher = r.read_u8()?;
    let address_algo = r.read_u8()?;
    let author = r.read_guid()?;
    let payload = r.read_tlv()?.to_vec();
    let signature = r.read_tlv()?.to_vec();
    r.expect_empty()?;
    Ok((
        GeocFields {
            cipher,
            address_algo,
            author,
            payload,
        },
        signature,
    ))
}

// ---------------------------------------------------------------------------
// GOBS — static binding
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GobsFields {
    pub cipher: u8,
    pub address_algo: u8,
    pub binder: WireGuid,
    pub target: WireGuid,
}

pub fn encode_gobs_unsigned(f: &GobsFields) -> Result<Vec<u8>, ParseError> {
    let mut w = Writer::new();
    w.push_u8(kind::GOBS);
    w.push_u8(f.cipher);
    w.push_u8(f.address_algo);
    w.push_guid(&f.binder)?;
    w.push_guid(&f.target)?;
    Ok(w.into_bytes())
}

/// See [`encode_geoc_sealed`]'s panic note — same invariant.
pub fn encode_gobs_sealed(f: &GobsFields, signature: &[u8]) -> Vec<u8> {
    let mut out = encode_gobs_unsigned(f).expect("fields already validated by pack()");
    let mut w = Writer::new();
    w.push_tlv(signature)
        .expect("trailer length is a suite-fixed constant");
    out.extend_from_slice(&w.into_bytes());
    out
}

pub fn decode_gobs(data: &[u8]) -> Result<(GobsFields, Vec<u8>), ParseError> {
    let mut r = Reader::new(data);
    r.expect_kind(kind::GOBS)?;
    let cipher = r.read_u8()?;
    let address_algo = r.read_u8()?;
    let binder = r.read_guid()?;
    let target = r.read_guid()?;
    let signature = r.read_tlv()?.to_vec();
    r.expect_empty()?;
    Ok((
        GobsFields {
            cipher,
            address_algo,
            binder,
            target,
        },
        signature,
    ))
}

// ---------------------------------------------------------------------------
// GOBD — dynamic binding
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GobdFields {
    pub cipher: u8,
    pub address_algo: u8,
    pub binder: WireGuid,
    pub targets: Vec<WireGuid>,
    pub dynamic_address: Option<WireGuid>,
    pub history: Vec<WireGuid>,
}

pub fn encode_gobd_unsigned(f: &GobdFields) -> Result<Vec<u8>, ParseError> {
    let mut w = Writer::new();
    w.push_u8(kind::GOBD);
    w.push_u8(f.cipher);
    w.push_u8(f.address_algo);
    w.push_guid(&f.binder)?;
    w.push_guid_list(&f.targets)?;
    w.push_optional_guid(f.dynamic_address.as_ref())?;
    w.push_guid_list(&f.history)?;
    Ok(w.into_bytes())
}

/// See [`encode_geoc_sealed`]'s panic note — same invariant.
pub fn encode_gobd_sealed(f: &GobdFields, signature: &[u8]) -> Vec<u8> {
    let mut out = encode_gobd_unsigned(f).expect("fields already validated by pack()");
    let mut w = Writer::new();
    w.push_tlv(signature)
        .expect("trailer length is a suite-fixed constant");
    out.extend_from_slice(&w.into_bytes());
    out
}

pub fn decode_gobd(data: &[u8]) -> Result<(GobdFields, Vec<u8>), ParseError> {
    let mut r = Reader::new(data);
    r.expect_kind(kind::GOBD)?;
    let cipher = r.read_u8()?;
    let address_algo = r.read_u8()?;
    let binder = r.read_guid()?;
    let targets = r.read_guid_list()?;
    let dynamic_address = r.read_optional_guid()?;
    let history = r.read_guid_list()?;
    let signature = r.read_tlv()?.to_vec();
    r.expect_empty()?;
    Ok((
        GobdFields {
            cipher,
            address_algo,
            binder,
            targets,
            dynamic_address,
            history,
        },
        signature,
    ))
}

// ---------------------------------------------------------------------------
// GDXX — debinding
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GdxxFields {
    pub cipher: u8,
    pub address_algo: u8,
    pub debinder: WireGuid,
    pub target: WireGuid,
}

pub fn encode_gdxx_unsigned(f: &GdxxFields) -> Result<Vec<u8>, ParseError> {
    let mut w = Writer::new();
    w.push_u8(kind::GDXX);
    w.push_u8(f.cipher);
    w.push_u8(f.address_algo);
    w.push_guid(&f.debinder)?;
    w.push_guid(&f.target)?;
    Ok(w.into_bytes())
}

/// See [`encode_geoc_sealed`]'s panic note — same invariant.
pub fn encode_gdxx_sealed(f: &GdxxFields, signature: &[u8]) -> Vec<u8> {
    let mut out = encode_gdxx_unsigned(f).expect("fields already validated by pack()");
    let mut w = Writer::new();
    w.push_tlv(signature)
        .expect("trailer length is a suite-fixed constant");
    out.extend_from_slice(&w.into_bytes());
    out
}

pub fn decode_gdxx(data: &[u8]) -> Result<(GdxxFields, Vec<u8>), ParseError> {
    let mut r = Reader::new(data);
    r.expect_kind(kind::GDXX)?;
    let cipher = r.read_u8()?;
    let address_algo = r.read_u8()?;
    let debinder = r.read_guid()?;
    let target = r.read_guid()?;
    let signature = r.read_tlv()?.to_vec();
    r.expect_empty()?;
    Ok((
        GdxxFields {
            cipher,
            address_algo,
            debinder,
            target,
        },
        signature,
    ))
}

// ---------------------------------------------------------------------------
// GARQ — asymmetric request envelope
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GarqFields {
    pub cipher: u8,
    pub address_algo: u8,
    pub recipient: WireGuid,
    pub payload: Vec<u8>,
}

pub fn encode_garq_unsigned(f: &GarqFields) -> Result<Vec<u8>, ParseError> {
    let mut w = Writer::new();
    w.push_u8(kind::GARQ);
    w.push_u8(f.cipher);
    w.push_u8(f.address_algo);
    w.push_guid(&f.recipient)?;
    w.push_tlv(&f.payload)?;
    Ok(w.into_bytes())
}

/// See [`encode_geoc_sealed`]'s panic note — same invariant.
pub fn encode_garq_sealed(f: &GarqFields, mac: &[u8]) -> Vec<u8> {
    let mut out = encode_garq_unsigned(f).expect("fields already validated by pack()");
    let mut w = Writer::new();
    w.push_tlv(mac)
        .expect("trailer length is a suite-fixed constant");
    out.extend_from_slice(&w.into_bytes());
    out
}

pub fn decode_garq(data: &[u8]) -> Result<(GarqFields, Vec<u8>), ParseError> {
    let mut r = Reader::new(data);
    r.expect_kind(kind::GARQ)?;
    let cipher = r.read_u8()?;
    let address_algo = r.read_u8()?;
    let recipient = r.read_guid()?;
    let payload = r.read_tlv()?.to_vec();
    let mac = r.read_tlv()?.to_vec();
    r.expect_empty()?;
    Ok((
        GarqFields {
            cipher,
            address_algo,
            recipient,
            payload,
        },
        mac,
    ))
}

/// The kind tag of a packed object, read without otherwise parsing it.
/// Used by `ThirdParty::unpack_object`/`FirstParty`-side dispatch to
/// pick which `decode_*` to call, rather than trying all six blind.
pub fn peek_kind(data: &[u8]) -> Result<u8, ParseError> {
    data.first().copied().ok_or(ParseError::UnexpectedEof)
}

// ---------------------------------------------------------------------------
// Inner asymmetric payloads — handshake / ack / nak
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandshakeFields {
    pub author: WireGuid,
    pub target: WireGuid,
    pub secret: Vec<u8>,
}

pub fn encode_handshake(f: &HandshakeFields) -> Result<Vec<u8>, ParseError> {
    let mut w = Writer::new();
    w.push_u8(kind::INNER_HANDSHAKE);
    w.push_guid(&f.author)?;
    w.push_guid(&f.target)?;
    w.push_tlv(&f.secret)?;
    Ok(w.into_bytes())
}

pub fn decode_handshake(data: &[u8]) -> Result<HandshakeFields, ParseError> {
    let mut r = Reader::new(data);
    r.expect_kind(kind::INNER_HANDSHAKE)?;
    let author = r.read_guid()?;
    let target = r.read_guid()?;
    let secret = r.read_tlv()?.to_vec();
    r.expect_empty()?;
    Ok(HandshakeFields {
        author,
        target,
        secret,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AckFields {
    pub author: WireGuid,
    pub target: WireGuid,
    pub status: u8,
}

pub fn encode_ack(f: &AckFields) -> Result<Vec<u8>, ParseError> {
    let mut w = Writer::new();
    w.push_u8(kind::INNER_ACK);
    w.push_guid(&f.author)?;
    w.push_guid(&f.target)?;
    w.push_u8(f.status);
    Ok(w.into_bytes())
}

pub fn decode_ack(data: &[u8]) -> Result<AckFields, ParseError> {
    let mut r = Reader::new(data);
    r.expect_kind(kind::INNER_ACK)?;
    let author = r.read_guid()?;
    let target = r.read_guid()?;
    let status = r.read_u8()?;
    r.expect_empty()?;
    Ok(AckFields {
        author,
        target,
        status,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NakFields {
    pub author: WireGuid,
    pub target: WireGuid,
    pub status: u8,
}

pub fn encode_nak(f: &NakFields) -> Result<Vec<u8>, ParseError> {
    let mut w = Writer::new();
    w.push_u8(kind::INNER_NAK);
    w.push_guid(&f.author)?;
    w.push_guid(&f.target)?;
    w.push_u8(f.status);
    Ok(w.into_bytes())
}

pub fn decode_nak(data: &[u8]) -> Result<NakFields, ParseError> {
    let mut r = Reader::new(data);
    r.expect_kind(kind::INNER_NAK)?;
    let author = r.read_guid()?;
    let target = r.read_guid()?;
    let status = r.read_u8()?;
    r.expect_empty()?;
    Ok(NakFields {
        author,
        target,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guid(algo: u8, addr: &[u8]) -> WireGuid {
        WireGuid::new(algo, addr.to_vec())
    }

    #[test]
    fn gidc_round_trips() {
        let f = GidcFields {
            cipher: 1,
            address_algo: 1,
            signature_pub: vec![1; 512],
            encryption_pub: vec![2; 512],
            exchange_pub: vec![3; 32],
        };
        let packed = encode_gidc(&f).unwrap();
        assert_eq!(decode_gidc(&packed).unwrap(), f);
    }

    #[test]
    fn geoc_unsigned_is_stable_under_reencoding() {
        let f = GeocFields {
            cipher: 1,
            address_algo: 1,
            author: guid(1, &[7; 64]),
            payload: b"hello".to_vec(),
        };
        let sealed = encode_geoc_sealed(&f, &[9; 64]);
        let (decoded, sig) = decode_geoc(&sealed).unwrap();
        assert_eq!(decoded, f);
        assert_eq!(sig, vec![9; 64]);
        assert_eq!(
            encode_geoc_unsigned(&decoded).unwrap(),
            encode_geoc_unsigned(&f).unwrap()
        );
    }

    #[test]
    fn gobd_round_trips_with_empty_history_and_no_dynamic_address() {
        let f = GobdFields {
            cipher: 1,
            address_algo: 1,
            binder: guid(1, &[1; 64]),
            targets: vec![guid(1, &[2; 64]), guid(1, &[3; 64])],
            dynamic_address: None,
            history: vec![],
        };
        let sealed = encode_gobd_sealed(&f, &[4; 64]);
        let (decoded, sig) = decode_gobd(&sealed).unwrap();
        assert_eq!(decoded, f);
        assert_eq!(sig, vec![4; 64]);
    }

    #[test]
    fn gobd_round_trips_with_dynamic_address_and_history() {
        let f = GobdFields {
            cipher: 1,
            address_algo: 1,
            binder: guid(1, &[1; 64]),
            targets: vec![guid(1, &[2; 64])],
            dynamic_address: Some(guid(1, &[5; 64])),
            history: vec![guid(1, &[6; 64]), guid(1, &[7; 64])],
        };
        let sealed = encode_gobd_sealed(&f, &[8; 64]);
        let (decoded, _) = decode_gobd(&sealed).unwrap();
        assert_eq!(decoded, f);
    }

    #[test]
    fn wrong_kind_tag_is_rejected() {
        let f = GobsFields {
            cipher: 1,
            address_algo: 1,
            binder: guid(1, &[1; 64]),
            target: guid(1, &[2; 64]),
        };
        let packed = encode_gobs_sealed(&f, &[0; 64]);
        let err = decode_gdxx(&packed).unwrap_err();
        assert_eq!(
            err,
            ParseError::WrongKind {
                expected: kind::GDXX,
                found: kind::GOBS
            }
        );
    }

    #[test]
    fn truncated_input_is_unexpected_eof() {
        let f = GdxxFields {
            cipher: 1,
            address_algo: 1,
            debinder: guid(1, &[1; 64]),
            target: guid(1, &[2; 64]),
        };
        let packed = encode_gdxx_sealed(&f, &[3; 64]);
        let truncated = &packed[..packed.len() - 5];
        assert!(decode_gdxx(truncated).is_err());
    }

    #[test]
    fn oversized_payload_is_rejected_not_panicked() {
        let f = GeocFields {
            cipher: 1,
            address_algo: 1,
            author: guid(1, &[7; 64]),
            payload: vec![0u8; u16::MAX as usize + 1],
        };
        assert_eq!(encode_geoc_unsigned(&f), Err(ParseError::FieldTooLong));
    }

    #[test]
    fn handshake_ack_nak_round_trip_and_reject_each_other() {
        let hs = HandshakeFields {
            author: guid(1, &[1; 64]),
            target: guid(1, &[2; 64]),
            secret: vec![9; 51],
        };
        let packed = encode_handshake(&hs).unwrap();
        assert_eq!(decode_handshake(&packed).unwrap(), hs);
        assert!(decode_ack(&packed).is_err());
        assert!(decode_nak(&packed).is_err());

        let ack = AckFields {
            author: guid(1, &[1; 64]),
            target: guid(1, &[2; 64]),
            status: 7,
        };
        let packed = encode_ack(&ack).unwrap();
        assert_eq!(decode_ack(&packed).unwrap(), ack);
        assert!(decode_handshake(&packed).is_err());
    }
}
