//! Concrete end-to-end scenarios (S1-S6).

use golix::identity::{third_party, Inner};
use golix::{FirstParty, Guid};

const CIPHER: u8 = 1;
const ADDR_ALGO: u8 = 1;

fn generate() -> FirstParty {
    FirstParty::generate(CIPHER, ADDR_ALGO).expect("keygen")
}

/// S1: a GEOC round-trips through its own author with the right sizes.
#[test]
fn s1_container_round_trip_and_sizes() {
    let fp = generate();
    let secret = fp.new_secret().unwrap();
    let geoc = fp.make_container(&secret, b"hello").unwrap();

    assert_eq!(geoc.trailer().len(), 512);
    assert_eq!(geoc.guid().address.len(), 64);
    assert_eq!(
        fp.receive_container(&fp.second_party, &secret, &geoc).unwrap(),
        b"hello"
    );
}

/// S2: an asymmetric handshake request delivers the same secret and
/// clears the unverified view once consumed.
#[test]
fn s2_handshake_request_delivers_secret_and_clears_view() {
    let a = generate();
    let b = generate();

    let secret = a.new_secret().unwrap();
    let target = Guid::new(ADDR_ALGO, vec![42u8; 64]);
    let req = a
        .make_request(&b.second_party, a.make_handshake(&secret, &target))
        .unwrap();

    let garq = b.unpack_request(&req.pack_bytes()).unwrap();
    assert_eq!(garq.author(), &a.guid);

    let inner = b.receive_request(&a.second_party, garq).unwrap();
    match inner {
        Inner::Handshake { secret: recv, .. } => assert_eq!(recv.key(), secret.key()),
        _ => panic!("expected handshake"),
    }
    // `garq` was moved into receive_request; there is no surviving
    // handle left to re-read its plaintext/author, by construction.
}

/// S3: a bind/debind chain verifies for its own author, and a second
/// party's signature never verifies against someone else's key.
#[test]
fn s3_bind_chain_and_wrong_verifier_rejects() {
    let a = generate();
    let b = generate();
    let x = Guid::new(ADDR_ALGO, vec![7u8; 64]);

    let gobs = a.make_bind_static(&x).unwrap();
    let gdxx = a.make_debind(gobs.guid()).unwrap();

    let gobs_parsed = third_party::unpack_object(&gobs.pack_bytes()).unwrap();
    let gdxx_parsed = third_party::unpack_object(&gdxx.pack_bytes()).unwrap();

    assert!(third_party::verify_object(&a.second_party, &gobs_parsed).is_ok());
    assert!(third_party::verify_object(&a.second_party, &gdxx_parsed).is_ok());
    assert!(matches!(
        third_party::verify_object(&b.second_party, &gobs_parsed),
        Err(golix::GolixError::BadSignature)
    ));
}

/// S4: a GIDC is structurally verifiable (it's its own address) but can
/// never be handed to `verify_object`.
#[test]
fn s4_gidc_is_not_signable() {
    let fp = generate();
    let gidc_bytes = fp.second_party.pack().to_vec();
    let parsed = third_party::unpack_object(&gidc_bytes).unwrap();
    assert!(matches!(
        third_party::verify_object(&fp.second_party, &parsed),
        Err(golix::GolixError::IdentityNotSignable)
    ));
}

/// S5: a `Secret` built against an unregistered cipher id is rejected
/// by `Secret::new`'s own length table. The cross-suite case — a live
/// identity's `make_container` rejecting a *registered-but-wrong*
/// cipher's secret with `IncompatibleSuite` — is covered by
/// `cross_suite_secret_is_incompatible` in `suite0.rs`, which needs the
/// `test-suite-0` feature to construct a secret under a second,
/// genuinely-registered cipher.
#[test]
fn s5_unregistered_secret_cipher_is_rejected() {
    assert!(golix::Secret::new(250, vec![0u8; 32], vec![0u8; 16]).is_err());
}

/// S6: two freshly generated identities derive a non-trivial 64-byte
/// shared secret.
#[test]
fn s6_derived_shared_secret_is_nonzero_and_64_bytes() {
    let a = generate();
    let b = generate();
    let secret = a.new_secret().unwrap();
    let target = Guid::new(ADDR_ALGO, vec![1u8; 64]);
    let req = a
        .make_request(&b.second_party, a.make_handshake(&secret, &target))
        .unwrap();
    // the mac tag itself isn't the derived key, but its presence at the
    // expected length demonstrates derive_shared produced 64 bytes of
    // key material feeding HMAC-SHA-512.
    assert_eq!(req.trailer().len(), 64);
    assert_ne!(req.trailer(), vec![0u8; 64]);
}
