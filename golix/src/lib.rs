//! Cryptographic core of the Golix protocol: identities, the
//! ciphersuite registry, and the object construction/verification
//! pipeline for GIDC/GEOC/GOBS/GOBD/GDXX/GARQ.
//!
//! Three roles sit on top of a ciphersuite: [`identity::FirstParty`]
//! (private-key holder — mints and decrypts), [`identity::SecondParty`]
//! (shareable public-key view), and [`identity::third_party`]
//! (stateless verifier). All cryptographic primitives are dispatched
//! through [`suite`] on a `cipher: u8` carried by every identity,
//! secret, and object.

pub mod address;
pub mod error;
pub mod identity;
pub mod objects;
pub mod secret;
pub mod suite;

pub use address::Guid;
pub use error::{ErrorClass, GolixError};
pub use identity::{FirstParty, SecondParty, SerializedIdentity};
pub use secret::Secret;
