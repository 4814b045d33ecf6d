//! The [`Secret`] wire type: a versioned symmetric key plus the seed
//! material a ciphersuite needs alongside it (an IV, a counter seed,
//! ...). Used both as the GEOC payload key and as the handshake
//! deliverable in `make_request`/`receive_request`.

use golix_schema::{Reader, Writer};
use zeroize::Zeroize;

use crate::error::GolixError;

const MAGIC: &[u8; 2] = b"SH";
const VERSION: u16 = 2;

/// Per-cipher key/seed lengths, used both to validate a decoded
/// [`Secret`] and to size freshly generated ones.
#[derive(Debug, Clone, Copy)]
pub struct CipherLengths {
    pub key: usize,
    pub seed: usize,
    pub signature: usize,
    pub mac: usize,
    pub asym: usize,
}

pub fn cipher_lengths(cipher: u8) -> Result<CipherLengths, GolixError> {
    match cipher {
        1 => Ok(CipherLengths {
            key: 32,
            seed: 16,
            signature: 512,
            mac: 64,
            asym: 512,
        }),
        #[cfg(feature = "test-suite-0")]
        0 => Ok(CipherLengths {
            key: 32,
            seed: 0,
            signature: 64,
            mac: 64,
            asym: 64,
        }),
        other => Err(GolixError::UnknownCipher(other)),
    }
}

/// A symmetric key plus optional seed, both zeroed on drop. `version`
/// and `cipher` are plain metadata, not secret material, and are left
/// out of the zeroing.
#[derive(Clone)]
pub struct Secret {
    version: u16,
    cipher: u8,
    key: Vec<u8>,
    seed: Vec<u8>,
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.key.zeroize();
        self.seed.zeroize();
    }
}

impl Secret {
    pub fn new(cipher: u8, key: Vec<u8>, seed: Vec<u8>) -> Result<Self, GolixError> {
        let lengths = cipher_lengths(cipher)?;
        if key.len() != lengths.key || seed.len() != lengths.seed {
            return Err(GolixError::InvalidSecretEncoding);
        }
        Ok(Self {
            version: VERSION,
            cipher,
            key,
            seed,
        })
    }

    pub fn cipher(&self) -> u8 {
        self.cipher
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn seed(&self) -> &[u8] {
        &self.seed
    }

    /// `"SH" || version(u16 BE) || cipher(u8) || key || seed`. Unlike
    /// the TLV-framed object wire formats, key and seed are fixed-length
    /// per `cipher` and carry no length prefix of their own.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut w = Writer::new();
        w.push_bytes(MAGIC);
        w.push_u16(self.version);
        w.push_u8(self.cipher);
        w.push_bytes(&self.key);
        w.push_bytes(&self.seed);
        w.into_bytes()
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, GolixError> {
        if data.len() < 5 || &data[0..2] != MAGIC {
            return Err(GolixError::InvalidSecretEncoding);
        }
        let mut r = Reader::new(&data[2..]);
        let version = r
            .read_u16()
            .map_err(|_| GolixError::InvalidSecretEncoding)?;
        if version != VERSION {
            return Err(GolixError::InvalidSecretEncoding);
        }
        let cipher = r.read_u8().map_err(|_| GolixError::InvalidSecretEncoding)?;
        let lengths = cipher_lengths(cipher).map_err(|_| GolixError::InvalidSecretEncoding)?;
        let key = r
            .read_exact(lengths.key)
            .map_err(|_| GolixError::InvalidSecretEncoding)?
            .to_vec();
        let seed = r
            .read_exact(lengths.seed)
            .map_err(|_| GolixError::InvalidSecretEncoding)?
            .to_vec();
        r.expect_empty().map_err(|_| GolixError::InvalidSecretEncoding)?;
        Ok(Self {
            version,
            cipher,
            key,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_bytes() {
        let secret = Secret::new(1, vec![7u8; 32], vec![3u8; 16]).unwrap();
        let bytes = secret.to_bytes();
        let back = Secret::from_bytes(&bytes).unwrap();
        assert_eq!(back.cipher(), 1);
        assert_eq!(back.key(), secret.key());
        assert_eq!(back.seed(), secret.seed());
    }

    #[test]
    fn rejects_wrong_key_length() {
        assert!(Secret::new(1, vec![0u8; 31], vec![0u8; 16]).is_err());
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = Secret::new(1, vec![1u8; 32], vec![2u8; 16]).unwrap().to_bytes();
        bytes[0] = b'X';
        assert!(Secret::from_bytes(&bytes).is_err());
    }

    /// An unregistered cipher byte in a parsed blob is a parse failure
    /// (§4.C), not the policy-class `UnknownCipher` a caller would get
    /// from constructing a `Secret` with that cipher directly.
    #[test]
    fn unregistered_cipher_in_parsed_bytes_is_format_error() {
        let mut bytes = Secret::new(1, vec![1u8; 32], vec![2u8; 16]).unwrap().to_bytes();
        let cipher_byte_offset = 2 + 2; // "SH" + u16 version
        bytes[cipher_byte_offset] = 250;
        assert_eq!(
            Secret::from_bytes(&bytes),
            Err(GolixError::InvalidSecretEncoding)
        );
    }
}
