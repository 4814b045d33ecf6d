//! Round-trip and idempotence properties over the live ciphersuite.

use golix::identity::third_party;
use golix::{FirstParty, Guid};

const CIPHER: u8 = 1;
const ADDR_ALGO: u8 = 1;

fn generate() -> FirstParty {
    FirstParty::generate(CIPHER, ADDR_ALGO).expect("keygen")
}

#[test]
fn secret_round_trips_through_bytes() {
    let fp = generate();
    let secret = fp.new_secret().unwrap();
    let bytes = secret.to_bytes();
    let back = golix::Secret::from_bytes(&bytes).unwrap();
    assert_eq!(back.key(), secret.key());
    assert_eq!(back.seed(), secret.seed());
}

#[test]
fn identity_round_trips_through_serialization() {
    let fp = generate();
    let serialized = fp.serialize().unwrap();
    let restored = FirstParty::from_serialized(&serialized).unwrap();
    assert_eq!(restored.guid, fp.guid);

    // restored identity can still sign and have it verified
    let target = Guid::new(ADDR_ALGO, vec![9u8; 64]);
    let gobs = restored.make_bind_static(&target).unwrap();
    assert!(third_party::verify_object(
        &restored.second_party,
        &third_party::unpack_object(&gobs.pack_bytes()).unwrap()
    )
    .is_ok());
}

#[test]
fn signed_object_round_trips_for_every_signed_kind() {
    let fp = generate();
    let target = Guid::new(ADDR_ALGO, vec![1u8; 64]);

    let gobs = fp.make_bind_static(&target).unwrap();
    assert_eq!(gobs.guid().address.len(), 64);
    assert!(fp
        .receive_bind_static(&fp.second_party, &gobs)
        .map(|g| g == target)
        .unwrap());

    let gdxx = fp.make_debind(gobs.guid()).unwrap();
    assert!(fp
        .receive_debind(&fp.second_party, &gdxx)
        .map(|g| g == *gobs.guid())
        .unwrap());

    let gobd = fp
        .make_bind_dynamic(vec![target.clone()], None, vec![])
        .unwrap();
    let targets = fp.receive_bind_dynamic(&fp.second_party, &gobd).unwrap();
    assert_eq!(targets, vec![target.clone()]);

    let secret = fp.new_secret().unwrap();
    let geoc = fp.make_container(&secret, b"hello").unwrap();
    let plaintext = fp
        .receive_container(&fp.second_party, &secret, &geoc)
        .unwrap();
    assert_eq!(plaintext, b"hello");

    for packed in [gobs.pack_bytes(), gdxx.pack_bytes(), gobd.pack_bytes(), geoc.pack_bytes()] {
        let parsed = third_party::unpack_object(&packed).unwrap();
        assert!(third_party::verify_object(&fp.second_party, &parsed).is_ok());
    }
}

#[test]
fn asymmetric_request_round_trips() {
    let a = generate();
    let b = generate();

    let secret = a.new_secret().unwrap();
    let target = Guid::new(ADDR_ALGO, vec![3u8; 64]);
    let inner = a.make_handshake(&secret, &target);
    let req = a.make_request(&b.second_party, inner).unwrap();

    let garq = b.unpack_request(&req.pack_bytes()).unwrap();
    assert_eq!(garq.author(), &a.guid);

    let received = b.receive_request(&a.second_party, garq).unwrap();
    match received {
        golix::identity::Inner::Handshake { secret: recv_secret, target: recv_target } => {
            assert_eq!(recv_secret.key(), secret.key());
            assert_eq!(recv_target, target);
        }
        _ => panic!("expected handshake"),
    }
}

#[test]
fn flipping_a_bit_of_a_sealed_object_fails_verification() {
    let fp = generate();
    let target = Guid::new(ADDR_ALGO, vec![5u8; 64]);
    let gobs = fp.make_bind_static(&target).unwrap();
    let mut bytes = gobs.pack_bytes();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;

    match third_party::unpack_object(&bytes) {
        Ok(obj) => assert!(third_party::verify_object(&fp.second_party, &obj).is_err()),
        Err(_) => {} // a flipped length/tag byte can also fail to parse at all
    }
}

#[test]
fn garq_with_mismatched_requestor_is_rejected() {
    let a = generate();
    let b = generate();
    let mallory = generate();

    let secret = a.new_secret().unwrap();
    let target = Guid::new(ADDR_ALGO, vec![2u8; 64]);
    let inner = a.make_handshake(&secret, &target);
    let req = a.make_request(&b.second_party, inner).unwrap();

    let garq = b.unpack_request(&req.pack_bytes()).unwrap();
    assert!(matches!(
        b.receive_request(&mallory.second_party, garq),
        Err(golix::GolixError::BadMac)
    ));
}

#[test]
fn unknown_cipher_is_rejected_at_generate() {
    assert!(FirstParty::generate(200, ADDR_ALGO).is_err());
}

#[test]
fn oversized_container_payload_is_rejected_not_panicked() {
    let fp = generate();
    let secret = fp.new_secret().unwrap();
    let plaintext = vec![0x42u8; u16::MAX as usize + 1];
    assert_eq!(
        fp.make_container(&secret, &plaintext).unwrap_err(),
        golix::GolixError::PayloadTooLarge
    );
}
