use golix_schema::objects::{decode_gdxx, encode_gdxx_sealed, encode_gdxx_unsigned, GdxxFields};

use crate::error::GolixError;
use super::ObjectKind;

/// Marker type selecting the GDXX (debinding) shape for [`super::Object`].
pub struct Gdxx;

impl ObjectKind for Gdxx {
    type Fields = GdxxFields;

    fn encode_unsigned(fields: &Self::Fields) -> Result<Vec<u8>, GolixError> {
        encode_gdxx_unsigned(fields).map_err(|_| GolixError::PayloadTooLarge)
    }

    fn encode_sealed(fields: &Self::Fields, trailer: &[u8]) -> Vec<u8> {
        encode_gdxx_sealed(fields, trailer)
    }

    fn decode(data: &[u8]) -> Result<(Self::Fields, Vec<u8>), GolixError> {
        decode_gdxx(data).map_err(|_| GolixError::UnknownObject)
    }

    fn cipher(fields: &Self::Fields) -> u8 {
        fields.cipher
    }

    fn address_algo(fields: &Self::Fields) -> u8 {
        fields.address_algo
    }
}
