//! Object construction/verification pipeline (§4.I): a linear typestate
//! builder so that reading a GUID before it's computed, or a signature
//! before the object is sealed, is a compile error rather than a
//! runtime one.
//!
//! ```text
//! Empty -> BodyFilled -> Packed(guid computed) -> Sealed(signature attached)
//! ```
//!
//! [`ObjectKind`] captures what differs per object kind (field shape,
//! unsigned/sealed encoding); [`Object`] supplies the shared state
//! machine around it. GIDC has no pipeline of its own — it is never
//! sealed, and its construction lives in [`crate::identity::second_party`].

mod geoc;
mod gobs;
mod gobd;
mod gdxx;
mod garq;

pub use geoc::Geoc;
pub use gobs::Gobs;
pub use gobd::Gobd;
pub use gdxx::Gdxx;
pub use garq::Garq;

use std::marker::PhantomData;

use crate::address::Guid;
use crate::error::GolixError;
use crate::suite;

/// What differs between GEOC/GOBS/GOBD/GDXX/GARQ: their field shape and
/// how those fields turn into the unsigned-then-sealed wire encoding.
/// The trailer is a signature for every kind except GARQ, where it's a
/// MAC — callers of [`Object::seal`] supply whichever their kind needs.
pub trait ObjectKind {
    type Fields: Clone;

    fn encode_unsigned(fields: &Self::Fields) -> Result<Vec<u8>, GolixError>;
    fn encode_sealed(fields: &Self::Fields, trailer: &[u8]) -> Vec<u8>;
    fn decode(data: &[u8]) -> Result<(Self::Fields, Vec<u8>), GolixError>;
    fn cipher(fields: &Self::Fields) -> u8;
    fn address_algo(fields: &Self::Fields) -> u8;
}

pub struct Empty;
pub struct BodyFilled;
pub struct Packed;
pub struct Sealed;

/// A GEOC/GOBS/GOBD/GDXX/GARQ object at some stage of the pipeline.
/// `K` picks the kind, `State` picks the stage; only the impl blocks
/// matching the current `State` are visible to callers.
pub struct Object<K: ObjectKind, State> {
    fields: K::Fields,
    guid: Option<Guid>,
    trailer: Option<Vec<u8>>,
    _state: PhantomData<State>,
}

impl<K: ObjectKind> Object<K, Empty> {
    pub fn new(fields: K::Fields) -> Object<K, BodyFilled> {
        Object {
            fields,
            guid: None,
            trailer: None,
            _state: PhantomData,
        }
    }
}

impl<K: ObjectKind> Object<K, BodyFilled> {
    /// Packs the unsigned body, hashes it under the fields' own cipher,
    /// and fixes the object's GUID. This is the step that can fail with
    /// a registry lookup error (`UnknownCipher`/`UnknownAddressAlgo`) or
    /// an oversized field (`PayloadTooLarge`) — the only two ways
    /// turning fields into bytes can go wrong.
    pub fn pack(self) -> Result<Object<K, Packed>, GolixError> {
        let unsigned = K::encode_unsigned(&self.fields)?;
        let algo = K::address_algo(&self.fields);
        let address = crate::address::create_address(algo, &unsigned)?;
        Ok(Object {
            fields: self.fields,
            guid: Some(Guid::new(algo, address)),
            trailer: None,
            _state: PhantomData,
        })
    }
}

impl<K: ObjectKind> Object<K, Packed> {
    pub fn guid(&self) -> &Guid {
        self.guid.as_ref().expect("Packed always carries a guid")
    }

    pub fn fields(&self) -> &K::Fields {
        &self.fields
    }

    /// Attaches the already-computed `trailer` (a signature or MAC over
    /// `guid.address`) and freezes the object.
    pub fn seal(self, trailer: Vec<u8>) -> Object<K, Sealed> {
        Object {
            fields: self.fields,
            guid: self.guid,
            trailer: Some(trailer),
            _state: PhantomData,
        }
    }
}

impl<K: ObjectKind> Object<K, Sealed> {
    pub fn guid(&self) -> &Guid {
        self.guid.as_ref().expect("Sealed always carries a guid")
    }

    pub fn fields(&self) -> &K::Fields {
        &self.fields
    }

    pub fn trailer(&self) -> &[u8] {
        self.trailer.as_deref().expect("Sealed always carries a trailer")
    }

    pub fn pack_bytes(&self) -> Vec<u8> {
        K::encode_sealed(&self.fields, self.trailer())
    }

    /// Re-derives the GUID from the fields and checks it against the
    /// one computed at packing time, then re-derives it once more from
    /// the supplied `expected_algo` — used by inbound verification,
    /// which trusts neither the wire bytes nor the cached guid as "the"
    /// signed quantity, only a fresh recomputation.
    pub fn verify_guid(&self) -> Result<(), GolixError> {
        let unsigned = K::encode_unsigned(&self.fields)?;
        crate::address::verify_address(self.guid().algo, &self.guid().address, &unsigned)
    }

    /// Attempts to re-parse a fully sealed object from `data`, already
    /// knowing which kind/cipher it claims. Re-derives the GUID from the
    /// re-encoded unsigned fields rather than trusting any address
    /// embedded in `data`.
    pub fn from_sealed_bytes(data: &[u8]) -> Result<Self, GolixError> {
        let (fields, trailer) = K::decode(data)?;
        let unsigned = K::encode_unsigned(&fields)?;
        let algo = K::address_algo(&fields);
        let address = crate::address::create_address(algo, &unsigned)?;
        Ok(Object {
            fields,
            guid: Some(Guid::new(algo, address)),
            trailer: Some(trailer),
            _state: PhantomData,
        })
    }
}

/// Signs `guid.address` with `signer` under `cipher` and seals.
/// Shared by every signed (non-GARQ) kind's `make_*` operation.
pub fn seal_with_signature<K: ObjectKind>(
    packed: Object<K, Packed>,
    signer: &suite::SigningPrivateKey,
) -> Result<Object<K, Sealed>, GolixError> {
    let signature = suite::sign(signer, &packed.guid().address)?;
    Ok(packed.seal(signature))
}

/// Verifies a sealed (non-GARQ) object's signature against `verifier`,
/// after independently re-deriving its GUID.
pub fn verify_signature<K: ObjectKind>(
    sealed: &Object<K, Sealed>,
    verifier: &suite::SigningPublicKey,
) -> Result<(), GolixError> {
    sealed.verify_guid()?;
    suite::verify(verifier, &sealed.guid().address, sealed.trailer())
}
