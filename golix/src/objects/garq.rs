use golix_schema::objects::{decode_garq, encode_garq_sealed, encode_garq_unsigned, GarqFields};

use crate::error::GolixError;
use super::ObjectKind;

/// Marker type selecting the GARQ (asymmetric request envelope) shape
/// for [`super::Object`]. Its trailer is a MAC, not a signature — GARQ
/// is sealed via [`crate::identity::first_party`]'s request path rather
/// than [`super::seal_with_signature`].
pub struct Garq;

impl ObjectKind for Garq {
    type Fields = GarqFields;

    fn encode_unsigned(fields: &Self::Fields) -> Result<Vec<u8>, GolixError> {
        encode_garq_unsigned(fields).map_err(|_| GolixError::PayloadTooLarge)
    }

    fn encode_sealed(fields: &Self::Fields, trailer: &[u8]) -> Vec<u8> {
        encode_garq_sealed(fields, trailer)
    }

    fn decode(data: &[u8]) -> Result<(Self::Fields, Vec<u8>), GolixError> {
        decode_garq(data).map_err(|_| GolixError::UnknownObject)
    }

    fn cipher(fields: &Self::Fields) -> u8 {
        fields.cipher
    }

    fn address_algo(fields: &Self::Fields) -> u8 {
        fields.address_algo
    }
}
