use golix_schema::objects::{decode_gobd, encode_gobd_sealed, encode_gobd_unsigned, GobdFields};

use crate::error::GolixError;
use super::ObjectKind;

/// Marker type selecting the GOBD (dynamic binding) shape for
/// [`super::Object`]. Truncation of `history` over long update chains
/// is left to callers — this crate only encodes whatever list it's given.
pub struct Gobd;

impl ObjectKind for Gobd {
    type Fields = GobdFields;

    fn encode_unsigned(fields: &Self::Fields) -> Result<Vec<u8>, GolixError> {
        encode_gobd_unsigned(fields).map_err(|_| GolixError::PayloadTooLarge)
    }

    fn encode_sealed(fields: &Self::Fields, trailer: &[u8]) -> Vec<u8> {
        encode_gobd_sealed(fields, trailer)
    }

    fn decode(data: &[u8]) -> Result<(Self::Fields, Vec<u8>), GolixError> {
        decode_gobd(data).map_err(|_| GolixError::UnknownObject)
    }

    fn cipher(fields: &Self::Fields) -> u8 {
        fields.cipher
    }

    fn address_algo(fields: &Self::Fields) -> u8 {
        fields.address_algo
    }
}
