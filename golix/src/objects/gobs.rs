use golix_schema::objects::{decode_gobs, encode_gobs_sealed, encode_gobs_unsigned, GobsFields};

use crate::error::GolixError;
use super::ObjectKind;

/// Marker type selecting the GOBS (static binding) shape for
/// [`super::Object`].
pub struct Gobs;

impl ObjectKind for Gobs {
    type Fields = GobsFields;

    fn encode_unsigned(fields: &Self::Fields) -> Result<Vec<u8>, GolixError> {
        encode_gobs_unsigned(fields).map_err(|_| GolixError::PayloadTooLarge)
    }

    fn encode_sealed(fields: &Self::Fields, trailer: &[u8]) -> Vec<u8> {
        encode_gobs_sealed(fields, trailer)
    }

    fn decode(data: &[u8]) -> Result<(Self::Fields, Vec<u8>), GolixError> {
        decode_gobs(data).map_err(|_| GolixError::UnknownObject)
    }

    fn cipher(fields: &Self::Fields) -> u8 {
        fields.cipher
    }

    fn address_algo(fields: &Self::Fields) -> u8 {
        fields.address_algo
    }
}
