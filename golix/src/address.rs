//! Content addresses and the [`Guid`] pair that names every object.

use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;

use crate::error::GolixError;

/// A sentinel address used by the inoperative test suite (algo 0). Every
/// object under that suite hashes to the same address regardless of
/// content — the suite exists only to exercise wire formats, never to
/// carry real content addressing.
#[cfg(feature = "test-suite-0")]
const SENTINEL_ADDRESS: &[u8; 64] = &[0u8; 64];

/// `(address_algo, address)` — the identifier of every Golix object and
/// every identity's public keys. Two GUIDs are equal iff both fields
/// match; the hash implementation mirrors that so `Guid` is usable as a
/// `HashMap`/`HashSet` key.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Guid {
    pub algo: u8,
    pub address: Vec<u8>,
}

impl Guid {
    pub fn new(algo: u8, address: Vec<u8>) -> Self {
        Self { algo, address }
    }
}

impl PartialEq for Guid {
    fn eq(&self, other: &Self) -> bool {
        self.algo == other.algo && self.address == other.address
    }
}
impl Eq for Guid {}

impl std::hash::Hash for Guid {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.algo.hash(state);
        self.address.hash(state);
    }
}

/// Computes the address of `data` under `algo`.
pub fn create_address(algo: u8, data: &[u8]) -> Result<Vec<u8>, GolixError> {
    match algo {
        1 => Ok(Sha512::digest(data).to_vec()),
        #[cfg(feature = "test-suite-0")]
        0 => Ok(SENTINEL_ADDRESS.to_vec()),
        other => Err(GolixError::UnknownAddressAlgo(other)),
    }
}

impl From<&Guid> for golix_schema::WireGuid {
    fn from(g: &Guid) -> Self {
        golix_schema::WireGuid::new(g.algo, g.address.clone())
    }
}

impl From<&golix_schema::WireGuid> for Guid {
    fn from(g: &golix_schema::WireGuid) -> Self {
        Guid::new(g.algo, g.address.clone())
    }
}

/// Recomputes `data`'s address under `algo` and compares it to `address`
/// in constant time. A mismatch is a [`GolixError::AddressMismatch`]
/// regardless of whether the recomputed digest or the supplied address
/// was shorter — length is leaked by `Vec` comparison semantics in no
/// case the caller can observe separately from a content mismatch.
pub fn verify_address(algo: u8, address: &[u8], data: &[u8]) -> Result<(), GolixError> {
    let expected = create_address(algo, data)?;
    if expected.len() == address.len() && bool::from(expected.ct_eq(address)) {
        Ok(())
    } else {
        Err(GolixError::AddressMismatch)
    }
}
