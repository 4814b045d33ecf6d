//! Error taxonomy (spec §7): every failure is either a [`Policy`],
//! [`Format`], or [`Security`] violation — callers branch on
//! [`GolixError::class`] to decide whether to alert/ban a peer rather
//! than matching every variant by hand.
//!
//! [`Policy`]: ErrorClass::Policy
//! [`Format`]: ErrorClass::Format
//! [`Security`]: ErrorClass::Security

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Policy,
    Format,
    Security,
}

/// Every operation in this crate fails with one of these variants.
/// None are internally retried (spec §7) — partial object construction
/// (the `Empty`/`BodyFilled`/`Packed` typestates, see [`crate::pipeline`])
/// is the only state a caller can discard and retry.
///
/// Security-class variants carry no detail about *which* check failed
/// (signature vs. MAC vs. address) when the input came from an
/// untrusted peer — their `Display` text is fixed regardless of cause,
/// and the comparisons backing them run in constant time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GolixError {
    // ---- Policy ----
    #[error("unknown cipher suite: {0}")]
    UnknownCipher(u8),
    #[error("unknown address algorithm: {0}")]
    UnknownAddressAlgo(u8),
    #[error("secret's declared cipher does not match the identity's ciphersuite")]
    IncompatibleSuite,
    #[error("asymmetric requests cannot be verified by a third party")]
    AsymmetricNotVerifiable,
    #[error("identity containers are inherently unsigned")]
    IdentityNotSignable,

    // ---- Format ----
    #[error("invalid secret encoding")]
    InvalidSecretEncoding,
    #[error("invalid identity container")]
    InvalidIdentity,
    #[error("packed data is not a recognized Golix object")]
    UnknownObject,
    #[error("object field read before its construction stage produced it")]
    IncompleteObject,
    #[error("object has already been sealed")]
    AlreadySealed,
    #[error("malformed identity serialization")]
    MalformedIdentity,
    #[error("object field exceeds the wire format's encodable length")]
    PayloadTooLarge,

    // ---- Security ----
    #[error("signature or MAC verification failed")]
    BadSignature,
    #[error("signature or MAC verification failed")]
    BadMac,
    #[error("address verification failed")]
    AddressMismatch,
    #[error("request payload could not be authenticated")]
    BadRequest,
}

impl GolixError {
    pub fn class(&self) -> ErrorClass {
        use GolixError::*;
        match self {
            UnknownCipher(_)
            | UnknownAddressAlgo(_)
            | IncompatibleSuite
            | AsymmetricNotVerifiable
            | IdentityNotSignable => ErrorClass::Policy,

            InvalidSecretEncoding
            | InvalidIdentity
            | UnknownObject
            | IncompleteObject
            | AlreadySealed
            | MalformedIdentity
            | PayloadTooLarge => ErrorClass::Format,

            BadSignature | BadMac | AddressMismatch | BadRequest => ErrorClass::Security,
        }
    }

    pub fn is_security(&self) -> bool {
        self.class() == ErrorClass::Security
    }
}
