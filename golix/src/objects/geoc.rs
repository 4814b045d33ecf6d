use golix_schema::objects::{decode_geoc, encode_geoc_sealed, encode_geoc_unsigned, GeocFields};

use crate::error::GolixError;
use super::ObjectKind;

/// Marker type selecting the GEOC (encrypted container) shape for
/// [`super::Object`].
pub struct Geoc;

impl ObjectKind for Geoc {
    type Fields = GeocFields;

    fn encode_unsigned(fields: &Self::Fields) -> Result<Vec<u8>, GolixError> {
        encode_geoc_unsigned(fields).map_err(|_| GolixError::PayloadTooLarge)
    }

    fn encode_sealed(fields: &Self::Fields, trailer: &[u8]) -> Vec<u8> {
        encode_geoc_sealed(fields, trailer)
    }

    fn decode(data: &[u8]) -> Result<(Self::Fields, Vec<u8>), GolixError> {
        decode_geoc(data).map_err(|_| GolixError::UnknownObject)
    }

    fn cipher(fields: &Self::Fields) -> u8 {
        fields.cipher
    }

    fn address_algo(fields: &Self::Fields) -> u8 {
        fields.address_algo
    }
}
