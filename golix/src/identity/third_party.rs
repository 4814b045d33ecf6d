//! A stateless verifier with neither private keys nor shared secrets —
//! typically a storage server that must check signatures without being
//! able to decrypt anything.

use golix_schema::{kind, objects::decode_gidc, objects::peek_kind, objects::GidcFields};
use tracing::warn;

use crate::address::{create_address, Guid};
use crate::error::GolixError;
use crate::identity::second_party::SecondParty;
use crate::objects::{self, Garq, Gdxx, Geoc, Gobd, Gobs, Object, Sealed};

/// Any of the six object kinds, parsed generically. GIDC carries no
/// trailer (it's never sealed); GARQ carries a MAC but can never be
/// verified by a `ThirdParty` since verification would require a
/// shared secret with one of the two parties.
pub enum AnyObject {
    Gidc { fields: GidcFields, guid: Guid },
    Geoc(Object<Geoc, Sealed>),
    Gobs(Object<Gobs, Sealed>),
    Gobd(Object<Gobd, Sealed>),
    Gdxx(Object<Gdxx, Sealed>),
    Garq(Object<Garq, Sealed>),
}

/// Parses `data` as whichever object kind its leading tag claims. This
/// resolves the wire format's "try every schema, first success wins"
/// contract deterministically via the tag rather than by attempting all
/// six decoders — see the schema crate's module docs for why that's
/// equivalent for well-formed input and strictly less ambiguous for
/// malformed input.
pub fn unpack_object(data: &[u8]) -> Result<AnyObject, GolixError> {
    let tag = peek_kind(data).map_err(|_| GolixError::UnknownObject)?;
    match tag {
        kind::GIDC => {
            let fields = decode_gidc(data).map_err(|_| GolixError::UnknownObject)?;
            let address = create_address(fields.address_algo, data)?;
            let guid = Guid::new(fields.address_algo, address);
            Ok(AnyObject::Gidc { fields, guid })
        }
        kind::GEOC => Ok(AnyObject::Geoc(Object::from_sealed_bytes(data)?)),
        kind::GOBS => Ok(AnyObject::Gobs(Object::from_sealed_bytes(data)?)),
        kind::GOBD => Ok(AnyObject::Gobd(Object::from_sealed_bytes(data)?)),
        kind::GDXX => Ok(AnyObject::Gdxx(Object::from_sealed_bytes(data)?)),
        kind::GARQ => Ok(AnyObject::Garq(Object::from_sealed_bytes(data)?)),
        _ => Err(GolixError::UnknownObject),
    }
}

/// Verifies a signed object against `second_party`'s signing key. GIDC
/// and GARQ are rejected by construction: a GIDC has nothing to verify
/// (it's the commitment itself) and a GARQ's trailer is a MAC only its
/// two endpoints can check.
pub fn verify_object(second_party: &SecondParty, obj: &AnyObject) -> Result<(), GolixError> {
    let (kind_name, result) = match obj {
        AnyObject::Gidc { .. } => return Err(GolixError::IdentityNotSignable),
        AnyObject::Garq(_) => return Err(GolixError::AsymmetricNotVerifiable),
        AnyObject::Geoc(o) => (
            "GEOC",
            objects::verify_signature(o, &second_party.signing_pub).map_err(|e| (o.guid().clone(), e)),
        ),
        AnyObject::Gobs(o) => (
            "GOBS",
            objects::verify_signature(o, &second_party.signing_pub).map_err(|e| (o.guid().clone(), e)),
        ),
        AnyObject::Gobd(o) => (
            "GOBD",
            objects::verify_signature(o, &second_party.signing_pub).map_err(|e| (o.guid().clone(), e)),
        ),
        AnyObject::Gdxx(o) => (
            "GDXX",
            objects::verify_signature(o, &second_party.signing_pub).map_err(|e| (o.guid().clone(), e)),
        ),
    };
    result.map_err(|(guid, e)| {
        warn!(kind = kind_name, ?guid, error = %e, "verification failed");
        e
    })
}
