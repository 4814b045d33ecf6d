//! Live suite 1: RSA-4096 (PSS signing, OAEP asymmetric encryption),
//! Curve25519 key agreement, AES-256-CTR, HMAC-SHA-512, SHA-512.
//!
//! Padding and hash choices mirror the upstream Golix ciphersuite
//! table: PSS and OAEP both hash with SHA-512, PSS's salt length is
//! left at its default (the digest size, 64 bytes).

use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};
use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use rand_core::OsRng;
use rsa::{BigUint, Oaep, Pss, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha512};

use super::{EncryptionPublicKey, ExchangePublicKey, KeyBundlePrivate, KeyBundlePublic};
use crate::error::GolixError;

type Aes256Ctr = ctr::Ctr128BE<Aes256>;
type HmacSha512 = Hmac<Sha512>;

const RSA_BITS: usize = 4096;
const RSA_PUBLIC_EXPONENT: u32 = 65537;

pub fn keygen() -> (KeyBundlePublic, KeyBundlePrivate) {
    let signing = RsaPrivateKey::new(&mut OsRng, RSA_BITS).expect("RSA-4096 keygen");
    let encryption = RsaPrivateKey::new(&mut OsRng, RSA_BITS).expect("RSA-4096 keygen");
    let exchange = x25519_dalek::StaticSecret::random_from_rng(OsRng);

    let signing_pub = RsaPublicKey::from(&signing);
    let encryption_pub = RsaPublicKey::from(&encryption);
    let exchange_pub = x25519_dalek::PublicKey::from(&exchange);

    let public = KeyBundlePublic {
        cipher: 1,
        signature: super::SigningPublicKey::Rsa4096(Box::new(signing_pub)),
        encryption: EncryptionPublicKey::Rsa4096(Box::new(encryption_pub)),
        exchange: ExchangePublicKey::X25519(Box::new(exchange_pub)),
    };
    let private = KeyBundlePrivate {
        cipher: 1,
        signature: super::SigningPrivateKey::Rsa4096(Box::new(signing)),
        encryption: super::EncryptionPrivateKey::Rsa4096(Box::new(encryption)),
        exchange: super::ExchangePrivateKey::X25519(Box::new(exchange)),
    };
    (public, private)
}

pub fn hash(data: &[u8]) -> Vec<u8> {
    Sha512::digest(data).to_vec()
}

/// Signs a pre-computed SHA-512 digest with RSA-PSS. PSS hashes its
/// input internally as part of the encoding, so this signs `digest`
/// itself rather than re-hashing it — the object's signable content is
/// always `hash(guid.address)` by the time it reaches here.
pub fn sign(key: &RsaPrivateKey, digest: &[u8]) -> Result<Vec<u8>, GolixError> {
    key.sign_with_rng(&mut OsRng, Pss::new::<Sha512>(), digest)
        .map_err(|_| GolixError::BadRequest)
}

pub fn verify(key: &RsaPublicKey, digest: &[u8], signature: &[u8]) -> Result<(), GolixError> {
    key.verify(Pss::new::<Sha512>(), digest, signature)
        .map_err(|_| GolixError::BadSignature)
}

pub fn encrypt_asym(key: &RsaPublicKey, plaintext: &[u8]) -> Result<Vec<u8>, GolixError> {
    key.encrypt(&mut OsRng, Oaep::new::<Sha512>(), plaintext)
        .map_err(|_| GolixError::BadRequest)
}

pub fn decrypt_asym(key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>, GolixError> {
    key.decrypt(Oaep::new::<Sha512>(), ciphertext)
        .map_err(|_| GolixError::BadRequest)
}

/// AES-256-CTR, initial counter block taken directly from the 16-byte
/// seed. Encrypt and decrypt are the same stream-cipher application.
pub fn crypt_sym(key: &[u8], seed: &[u8], data: &[u8]) -> Result<Vec<u8>, GolixError> {
    let key: &[u8; 32] = key.try_into().map_err(|_| GolixError::InvalidSecretEncoding)?;
    let seed: &[u8; 16] = seed.try_into().map_err(|_| GolixError::InvalidSecretEncoding)?;
    let mut buf = data.to_vec();
    let mut cipher = Aes256Ctr::new(key.into(), seed.into());
    cipher.apply_keystream(&mut buf);
    Ok(buf)
}

/// ECDH over Curve25519 followed by HKDF-SHA-512, salted with the XOR
/// of both parties' addresses and expanded with no `info` to 64 bytes.
/// Addresses of mismatched length are XORed up to their common prefix,
/// matching how the upstream reference implementation zips them.
pub fn derive_shared(
    own_priv: &x25519_dalek::StaticSecret,
    peer_pub: &x25519_dalek::PublicKey,
    own_address: &[u8],
    peer_address: &[u8],
) -> Vec<u8> {
    let shared = own_priv.diffie_hellman(peer_pub);
    let salt: Vec<u8> = own_address
        .iter()
        .zip(peer_address.iter())
        .map(|(a, b)| a ^ b)
        .collect();
    let hk = Hkdf::<Sha512>::new(Some(&salt), shared.as_bytes());
    let mut out = [0u8; 64];
    hk.expand(&[], &mut out)
        .expect("64 bytes is a valid HKDF-SHA512 output length");
    out.to_vec()
}

pub fn mac(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut m = HmacSha512::new_from_slice(key).expect("HMAC-SHA512 accepts any key length");
    m.update(data);
    m.finalize().into_bytes().to_vec()
}

pub fn verify_mac(key: &[u8], data: &[u8], tag: &[u8]) -> Result<(), GolixError> {
    let mut m = HmacSha512::new_from_slice(key).map_err(|_| GolixError::BadMac)?;
    m.update(data);
    m.verify_slice(tag).map_err(|_| GolixError::BadMac)
}

/// RSA public keys travel on the wire as a fixed-width big-endian
/// modulus; the public exponent is not carried and is assumed to be
/// the standard 65537 used by every key this crate mints.
pub fn encode_rsa_pub(key: &RsaPublicKey) -> Vec<u8> {
    let n = key.n().to_bytes_be();
    let mut out = vec![0u8; RSA_BITS / 8];
    let start = out.len() - n.len();
    out[start..].copy_from_slice(&n);
    out
}

pub fn decode_rsa_pub(bytes: &[u8]) -> Result<RsaPublicKey, GolixError> {
    let n = BigUint::from_bytes_be(bytes);
    let e = BigUint::from(RSA_PUBLIC_EXPONENT);
    RsaPublicKey::new(n, e).map_err(|_| GolixError::MalformedIdentity)
}
