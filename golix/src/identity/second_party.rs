//! Public-key view of a remote participant: verification and
//! encryption targets, loaded either from a freshly generated key
//! bundle or from a GIDC another participant published.

use golix_schema::objects::{decode_gidc, encode_gidc, GidcFields};

use crate::address::{create_address, Guid};
use crate::error::GolixError;
use crate::suite::{self, EncryptionPublicKey, ExchangePublicKey, KeyBundlePublic, SigningPublicKey};

#[derive(Clone)]
pub struct SecondParty {
    pub guid: Guid,
    pub cipher: u8,
    pub address_algo: u8,
    pub signing_pub: SigningPublicKey,
    pub encryption_pub: EncryptionPublicKey,
    pub exchange_pub: ExchangePublicKey,
    packed: Vec<u8>,
}

impl SecondParty {
    pub fn from_keys(keys: &KeyBundlePublic, address_algo: u8) -> Result<Self, GolixError> {
        let fields = GidcFields {
            cipher: keys.cipher,
            address_algo,
            signature_pub: suite::encode_signing_pub(&keys.signature),
            encryption_pub: suite::encode_encryption_pub(&keys.encryption),
            exchange_pub: suite::encode_exchange_pub(&keys.exchange),
        };
        Self::from_fields(fields)
    }

    pub fn from_packed(bytes: &[u8]) -> Result<Self, GolixError> {
        let fields = decode_gidc(bytes).map_err(|_| GolixError::InvalidIdentity)?;
        Self::from_fields(fields)
    }

    fn from_fields(fields: GidcFields) -> Result<Self, GolixError> {
        let signing_pub = suite::decode_signing_pub(fields.cipher, &fields.signature_pub)?;
        let encryption_pub = suite::decode_encryption_pub(fields.cipher, &fields.encryption_pub)?;
        let exchange_pub = suite::decode_exchange_pub(fields.cipher, &fields.exchange_pub)?;

        let packed = encode_gidc(&fields).map_err(|_| GolixError::InvalidIdentity)?;
        let address = create_address(fields.address_algo, &packed)?;
        let guid = Guid::new(fields.address_algo, address);

        Ok(Self {
            guid,
            cipher: fields.cipher,
            address_algo: fields.address_algo,
            signing_pub,
            encryption_pub,
            exchange_pub,
            packed,
        })
    }

    pub fn pack(&self) -> &[u8] {
        &self.packed
    }
}
