//! Golix — End-to-End Walkthrough
//!
//! Run with: `cargo run --example end_to_end`
//!
//! Walks through the full role algebra over the live ciphersuite:
//! identity minting, an encrypted container round-trip, a bind/debind
//! chain verified by a third party, and an asymmetric handshake
//! exchange between two independently generated identities.

use std::time::Instant;

use golix::identity::third_party;
use golix::{FirstParty, Guid};

const CIPHER: u8 = 1;
const ADDR_ALGO: u8 = 1;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Golix protocol core — end-to-end walkthrough ===");

    demo_identity();
    demo_container();
    demo_bind_chain();
    demo_handshake();

    println!("\nAll demos passed.");
}

fn section(title: &str) {
    println!("\n--- {title} ---");
}

fn demo_identity() {
    section("1. Identity generation and serialization round-trip");

    let t = Instant::now();
    let fp = FirstParty::generate(CIPHER, ADDR_ALGO).expect("keygen");
    println!("generated identity in {:?}", t.elapsed());
    println!("guid: {} bytes (algo {})", fp.guid.address.len(), fp.guid.algo);

    let serialized = fp.serialize().expect("serialize");
    let restored = FirstParty::from_serialized(&serialized).expect("restore");
    assert_eq!(restored.guid, fp.guid);
    println!("serialize -> from_serialized round-trip: ok");
}

fn demo_container() {
    section("2. GEOC: encrypted container round-trip");

    let fp = FirstParty::generate(CIPHER, ADDR_ALGO).expect("keygen");
    let secret = fp.new_secret().expect("new_secret");
    let plaintext = b"hello, golix";

    let geoc = fp.make_container(&secret, plaintext).expect("make_container");
    println!("geoc guid address: {} bytes, signature: {} bytes", geoc.guid().address.len(), geoc.trailer().len());

    let recovered = fp
        .receive_container(&fp.second_party, &secret, &geoc)
        .expect("receive_container");
    assert_eq!(recovered, plaintext);
    println!("decrypted payload matches: ok");
}

fn demo_bind_chain() {
    section("3. GOBS/GDXX: bind/debind verified by a stateless third party");

    let fp = FirstParty::generate(CIPHER, ADDR_ALGO).expect("keygen");
    let other = FirstParty::generate(CIPHER, ADDR_ALGO).expect("keygen");
    let target = Guid::new(ADDR_ALGO, vec![7u8; 64]);

    let gobs = fp.make_bind_static(&target).expect("make_bind_static");
    let gdxx = fp.make_debind(gobs.guid()).expect("make_debind");

    let gobs_parsed = third_party::unpack_object(&gobs.pack_bytes()).expect("unpack gobs");
    let gdxx_parsed = third_party::unpack_object(&gdxx.pack_bytes()).expect("unpack gdxx");

    third_party::verify_object(&fp.second_party, &gobs_parsed).expect("verify gobs");
    third_party::verify_object(&fp.second_party, &gdxx_parsed).expect("verify gdxx");
    println!("third-party verification against the signer's public key: ok");

    let rejected = third_party::verify_object(&other.second_party, &gobs_parsed);
    assert!(rejected.is_err());
    println!("third-party verification against an unrelated identity: rejected, as expected");
}

fn demo_handshake() {
    section("4. GARQ: asymmetric handshake exchange");

    let alice = FirstParty::generate(CIPHER, ADDR_ALGO).expect("keygen");
    let bob = FirstParty::generate(CIPHER, ADDR_ALGO).expect("keygen");

    let secret = alice.new_secret().expect("new_secret");
    let target = Guid::new(ADDR_ALGO, vec![9u8; 64]);
    let inner = alice.make_handshake(&secret, &target);

    let request = alice
        .make_request(&bob.second_party, inner)
        .expect("make_request");
    println!("request packed to {} bytes", request.pack_bytes().len());

    let unpacked = bob.unpack_request(&request.pack_bytes()).expect("unpack_request");
    assert_eq!(unpacked.author(), &alice.guid);
    println!("decrypted author matches sender, prior to authentication: ok");

    let received = bob
        .receive_request(&alice.second_party, unpacked)
        .expect("receive_request");
    match received {
        golix::identity::Inner::Handshake { secret: recv, .. } => {
            assert_eq!(recv.key(), secret.key());
            println!("authenticated handshake delivers the same secret: ok");
        }
        _ => panic!("expected a handshake"),
    }
}
