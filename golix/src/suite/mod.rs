//! Ciphersuite abstraction: a versioned table of primitive bundles,
//! dispatched on the `cipher: u8` every identity, secret, and object
//! carries. Each concrete suite lives in its own submodule; this module
//! only defines the shared key types and the dispatch functions that
//! pick a submodule by cipher id.

pub mod suite1;
#[cfg(feature = "test-suite-0")]
pub mod suite0;

use crate::error::GolixError;

#[derive(Clone)]
pub enum SigningPublicKey {
    Rsa4096(Box<rsa::RsaPublicKey>),
    #[cfg(feature = "test-suite-0")]
    Symbolic,
}

pub enum SigningPrivateKey {
    Rsa4096(Box<rsa::RsaPrivateKey>),
    #[cfg(feature = "test-suite-0")]
    Symbolic,
}

#[derive(Clone)]
pub enum EncryptionPublicKey {
    Rsa4096(Box<rsa::RsaPublicKey>),
    #[cfg(feature = "test-suite-0")]
    Symbolic,
}

pub enum EncryptionPrivateKey {
    Rsa4096(Box<rsa::RsaPrivateKey>),
    #[cfg(feature = "test-suite-0")]
    Symbolic,
}

#[derive(Clone)]
pub enum ExchangePublicKey {
    X25519(Box<x25519_dalek::PublicKey>),
    #[cfg(feature = "test-suite-0")]
    Symbolic,
}

pub enum ExchangePrivateKey {
    X25519(Box<x25519_dalek::StaticSecret>),
    #[cfg(feature = "test-suite-0")]
    Symbolic,
}

pub struct KeyBundlePublic {
    pub cipher: u8,
    pub signature: SigningPublicKey,
    pub encryption: EncryptionPublicKey,
    pub exchange: ExchangePublicKey,
}

pub struct KeyBundlePrivate {
    pub cipher: u8,
    pub signature: SigningPrivateKey,
    pub encryption: EncryptionPrivateKey,
    pub exchange: ExchangePrivateKey,
}

/// Generates a fresh key bundle under `cipher`. The only caller is
/// `FirstParty::generate` — nothing else mints identities.
pub fn keygen(cipher: u8) -> Result<(KeyBundlePublic, KeyBundlePrivate), GolixError> {
    match cipher {
        1 => Ok(suite1::keygen()),
        #[cfg(feature = "test-suite-0")]
        0 => Ok(suite0::keygen()),
        other => Err(GolixError::UnknownCipher(other)),
    }
}

pub fn hash(cipher: u8, data: &[u8]) -> Result<Vec<u8>, GolixError> {
    match cipher {
        1 => Ok(suite1::hash(data)),
        #[cfg(feature = "test-suite-0")]
        0 => Ok(suite0::hash(data)),
        other => Err(GolixError::UnknownCipher(other)),
    }
}

pub fn sign(key: &SigningPrivateKey, digest: &[u8]) -> Result<Vec<u8>, GolixError> {
    match key {
        SigningPrivateKey::Rsa4096(k) => suite1::sign(k, digest),
        #[cfg(feature = "test-suite-0")]
        SigningPrivateKey::Symbolic => Ok(suite0::sign(digest)),
    }
}

/// Verification is intentionally infallible-on-mismatch in its *type*:
/// callers get `Ok(())` or the single [`GolixError::BadSignature`]
/// variant, never detail about the padding/hash stage that rejected it.
pub fn verify(key: &SigningPublicKey, digest: &[u8], signature: &[u8]) -> Result<(), GolixError> {
    match key {
        SigningPublicKey::Rsa4096(k) => suite1::verify(k, digest, signature),
        #[cfg(feature = "test-suite-0")]
        SigningPublicKey::Symbolic => suite0::verify(digest, signature),
    }
}

/// Encrypts `plaintext` for `key`'s holder. Every plaintext this crate
/// ever passes here is an internal, size-bounded handshake payload, so
/// this cannot fail in practice; it still returns `Result` so a future
/// suite with a tighter message-size ceiling has somewhere to report
/// that without changing the signature.
pub fn encrypt_asym(key: &EncryptionPublicKey, plaintext: &[u8]) -> Result<Vec<u8>, GolixError> {
    match key {
        EncryptionPublicKey::Rsa4096(k) => suite1::encrypt_asym(k, plaintext),
        #[cfg(feature = "test-suite-0")]
        EncryptionPublicKey::Symbolic => Ok(suite0::encrypt_asym(plaintext)),
    }
}

pub fn decrypt_asym(key: &EncryptionPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>, GolixError> {
    match key {
        EncryptionPrivateKey::Rsa4096(k) => suite1::decrypt_asym(k, ciphertext),
        #[cfg(feature = "test-suite-0")]
        EncryptionPrivateKey::Symbolic => suite0::decrypt_asym(ciphertext),
    }
}

/// AES-256-CTR is its own inverse; this one function backs both the
/// encrypt and decrypt sides of a GEOC payload.
pub fn crypt_sym(cipher: u8, key: &[u8], seed: &[u8], data: &[u8]) -> Result<Vec<u8>, GolixError> {
    match cipher {
        1 => suite1::crypt_sym(key, seed, data),
        #[cfg(feature = "test-suite-0")]
        0 => Ok(suite0::crypt_sym(data)),
        other => Err(GolixError::UnknownCipher(other)),
    }
}

pub fn derive_shared(
    cipher: u8,
    own_priv: &ExchangePrivateKey,
    peer_pub: &ExchangePublicKey,
    own_address: &[u8],
    peer_address: &[u8],
) -> Result<Vec<u8>, GolixError> {
    match (cipher, own_priv, peer_pub) {
        (1, ExchangePrivateKey::X25519(sk), ExchangePublicKey::X25519(pk)) => {
            Ok(suite1::derive_shared(sk, pk, own_address, peer_address))
        }
        #[cfg(feature = "test-suite-0")]
        (0, ExchangePrivateKey::Symbolic, ExchangePublicKey::Symbolic) => {
            Ok(suite0::derive_shared())
        }
        (c, _, _) => Err(GolixError::UnknownCipher(c)),
    }
}

pub fn mac(cipher: u8, key: &[u8], data: &[u8]) -> Result<Vec<u8>, GolixError> {
    match cipher {
        1 => Ok(suite1::mac(key, data)),
        #[cfg(feature = "test-suite-0")]
        0 => Ok(suite0::mac(data)),
        other => Err(GolixError::UnknownCipher(other)),
    }
}

pub fn verify_mac(cipher: u8, key: &[u8], data: &[u8], tag: &[u8]) -> Result<(), GolixError> {
    match cipher {
        1 => suite1::verify_mac(key, data, tag),
        #[cfg(feature = "test-suite-0")]
        0 => suite0::verify_mac(data, tag),
        other => Err(GolixError::UnknownCipher(other)),
    }
}

pub fn encode_signing_pub(key: &SigningPublicKey) -> Vec<u8> {
    match key {
        SigningPublicKey::Rsa4096(k) => suite1::encode_rsa_pub(k),
        #[cfg(feature = "test-suite-0")]
        SigningPublicKey::Symbolic => suite0::encode_pub(),
    }
}

pub fn encode_encryption_pub(key: &EncryptionPublicKey) -> Vec<u8> {
    match key {
        EncryptionPublicKey::Rsa4096(k) => suite1::encode_rsa_pub(k),
        #[cfg(feature = "test-suite-0")]
        EncryptionPublicKey::Symbolic => suite0::encode_pub(),
    }
}

pub fn encode_exchange_pub(key: &ExchangePublicKey) -> Vec<u8> {
    match key {
        ExchangePublicKey::X25519(k) => k.as_bytes().to_vec(),
        #[cfg(feature = "test-suite-0")]
        ExchangePublicKey::Symbolic => suite0::encode_pub(),
    }
}

pub fn decode_signing_pub(cipher: u8, bytes: &[u8]) -> Result<SigningPublicKey, GolixError> {
    match cipher {
        1 => Ok(SigningPublicKey::Rsa4096(Box::new(suite1::decode_rsa_pub(bytes)?))),
        #[cfg(feature = "test-suite-0")]
        0 => Ok(SigningPublicKey::Symbolic),
        other => Err(GolixError::UnknownCipher(other)),
    }
}

pub fn decode_encryption_pub(cipher: u8, bytes: &[u8]) -> Result<EncryptionPublicKey, GolixError> {
    match cipher {
        1 => Ok(EncryptionPublicKey::Rsa4096(Box::new(suite1::decode_rsa_pub(bytes)?))),
        #[cfg(feature = "test-suite-0")]
        0 => Ok(EncryptionPublicKey::Symbolic),
        other => Err(GolixError::UnknownCipher(other)),
    }
}

pub fn decode_exchange_pub(cipher: u8, bytes: &[u8]) -> Result<ExchangePublicKey, GolixError> {
    match cipher {
        1 => {
            let arr: [u8; 32] = bytes
                .try_into()
                .map_err(|_| GolixError::MalformedIdentity)?;
            Ok(ExchangePublicKey::X25519(Box::new(x25519_dalek::PublicKey::from(arr))))
        }
        #[cfg(feature = "test-suite-0")]
        0 => Ok(ExchangePublicKey::Symbolic),
        other => Err(GolixError::UnknownCipher(other)),
    }
}
