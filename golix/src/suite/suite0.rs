//! Suite 0: the symbolic/inoperative test suite. Every primitive
//! returns a fixed sentinel rather than doing real cryptography, so it
//! can exercise the object/wire-format plumbing without the cost of
//! real key generation. Gated behind `test-suite-0`; never build this
//! into anything that talks to a real peer.

const SENTINEL_HASH: &[u8; 64] = &[0xAA; 64];
const SENTINEL_KEY: &[u8; 64] = &[0xBB; 64];
const SENTINEL_MAC: &[u8; 64] = &[0xCC; 64];
const SENTINEL_SIG: &[u8; 64] = &[0xDD; 64];
const SENTINEL_PUB: &[u8; 64] = &[0xEE; 64];

use super::{EncryptionPublicKey, ExchangePublicKey, KeyBundlePrivate, KeyBundlePublic};
use crate::error::GolixError;

pub fn keygen() -> (KeyBundlePublic, KeyBundlePrivate) {
    let public = KeyBundlePublic {
        cipher: 0,
        signature: super::SigningPublicKey::Symbolic,
        encryption: EncryptionPublicKey::Symbolic,
        exchange: ExchangePublicKey::Symbolic,
    };
    let private = KeyBundlePrivate {
        cipher: 0,
        signature: super::SigningPrivateKey::Symbolic,
        encryption: super::EncryptionPrivateKey::Symbolic,
        exchange: super::ExchangePrivateKey::Symbolic,
    };
    (public, private)
}

pub fn hash(_data: &[u8]) -> Vec<u8> {
    SENTINEL_HASH.to_vec()
}

pub fn sign(_digest: &[u8]) -> Vec<u8> {
    SENTINEL_SIG.to_vec()
}

/// Per spec §4.A, suite 0 "accepts any input" — it never rejects a
/// signature, sentinel or not. It exists to exercise wire formats, not
/// to exercise verification failure paths.
pub fn verify(_digest: &[u8], _signature: &[u8]) -> Result<(), GolixError> {
    Ok(())
}

pub fn encrypt_asym(plaintext: &[u8]) -> Vec<u8> {
    plaintext.to_vec()
}

pub fn decrypt_asym(ciphertext: &[u8]) -> Result<Vec<u8>, GolixError> {
    Ok(ciphertext.to_vec())
}

pub fn crypt_sym(data: &[u8]) -> Vec<u8> {
    data.to_vec()
}

pub fn derive_shared() -> Vec<u8> {
    SENTINEL_KEY.to_vec()
}

pub fn mac(_data: &[u8]) -> Vec<u8> {
    SENTINEL_MAC.to_vec()
}

/// Same "accepts any input" contract as [`verify`].
pub fn verify_mac(_data: &[u8], _tag: &[u8]) -> Result<(), GolixError> {
    Ok(())
}

pub fn encode_pub() -> Vec<u8> {
    SENTINEL_PUB.to_vec()
}
