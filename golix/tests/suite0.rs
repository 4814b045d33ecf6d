//! Wire-format plumbing exercised through the symbolic/inoperative
//! suite 0 — no real cryptography runs here, only the object
//! construction/verification pipeline and schema round-trips. Gated
//! behind the `test-suite-0` feature; this file compiles to nothing
//! otherwise.

#![cfg(feature = "test-suite-0")]

use golix::identity::third_party;
use golix::{FirstParty, Guid};

const CIPHER: u8 = 0;
const ADDR_ALGO: u8 = 0;

fn generate() -> FirstParty {
    FirstParty::generate(CIPHER, ADDR_ALGO).expect("suite-0 keygen")
}

#[test]
fn sentinel_address_is_fixed_regardless_of_content() {
    let fp = generate();
    let other = generate();
    // Every identity under algo 0 hashes to the same sentinel address —
    // the suite carries no real content addressing.
    assert_eq!(fp.guid.address, other.guid.address);
}

#[test]
fn container_round_trips_through_sentinel_crypto() {
    let fp = generate();
    let secret = fp.new_secret().unwrap();
    let geoc = fp.make_container(&secret, b"plumbing").unwrap();
    let recovered = fp
        .receive_container(&fp.second_party, &secret, &geoc)
        .unwrap();
    assert_eq!(recovered, b"plumbing");
}

#[test]
fn bind_chain_verifies_against_any_second_party() {
    let fp = generate();
    let unrelated = generate();
    let target = Guid::new(ADDR_ALGO, vec![0u8; 64]);

    let gobs = fp.make_bind_static(&target).unwrap();
    let parsed = third_party::unpack_object(&gobs.pack_bytes()).unwrap();

    // Suite 0 "accepts any input" (spec §4.A) — it never rejects a
    // signature, not even one from an unrelated identity.
    assert!(third_party::verify_object(&fp.second_party, &parsed).is_ok());
    assert!(third_party::verify_object(&unrelated.second_party, &parsed).is_ok());
}

#[test]
fn cross_suite_secret_is_incompatible() {
    // A live (cipher 1) identity handed a secret declared under the
    // symbolic test suite (cipher 0) must reject it before any crypto
    // runs — `make_container` checks `secret.cipher()` against its own
    // ciphersuite first.
    let live = FirstParty::generate(1, 1).unwrap();
    let sentinel_secret = generate().new_secret().unwrap();
    assert!(matches!(
        live.make_container(&sentinel_secret, b"plumbing"),
        Err(golix::GolixError::IncompatibleSuite)
    ));
}

#[test]
fn asymmetric_request_round_trips() {
    let a = generate();
    let b = generate();
    let secret = a.new_secret().unwrap();
    let target = Guid::new(ADDR_ALGO, vec![0u8; 64]);

    let req = a
        .make_request(&b.second_party, a.make_handshake(&secret, &target))
        .unwrap();
    let garq = b.unpack_request(&req.pack_bytes()).unwrap();
    let inner = b.receive_request(&a.second_party, garq).unwrap();
    match inner {
        golix::identity::Inner::Handshake { secret: recv, .. } => {
            assert_eq!(recv.key(), secret.key());
        }
        _ => panic!("expected handshake"),
    }
}
