//! Timing for the suite-1 hot path: sign, verify, asymmetric
//! encrypt/decrypt, and MAC. RSA-4096 dominates every number here —
//! these exist to catch an accidental regression (e.g. a dropped
//! blinding step) rather than to tune constants.
//!
//! Run with: `cargo bench --bench timing`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use golix::FirstParty;

const CIPHER: u8 = 1;
const ADDR_ALGO: u8 = 1;

fn bench_keygen(c: &mut Criterion) {
    c.bench_function("first_party_generate", |b| {
        b.iter(|| FirstParty::generate(CIPHER, ADDR_ALGO).unwrap());
    });
}

fn bench_sign_verify(c: &mut Criterion) {
    let fp = FirstParty::generate(CIPHER, ADDR_ALGO).unwrap();
    let target = golix::Guid::new(ADDR_ALGO, vec![1u8; 64]);

    let mut group = c.benchmark_group("sign_verify");
    group.bench_function("make_bind_static", |b| {
        b.iter(|| fp.make_bind_static(&target).unwrap());
    });

    let gobs = fp.make_bind_static(&target).unwrap();
    group.bench_function("receive_bind_static", |b| {
        b.iter(|| fp.receive_bind_static(&fp.second_party, &gobs).unwrap());
    });
    group.finish();
}

fn bench_container_sizes(c: &mut Criterion) {
    let fp = FirstParty::generate(CIPHER, ADDR_ALGO).unwrap();
    let secret = fp.new_secret().unwrap();

    // GEOC payloads are u16-length-prefixed on the wire, so 65_535 is
    // the largest size `make_container` can ever accept.
    let mut group = c.benchmark_group("make_container");
    for &size in &[64usize, 1024, 16_384, 65_535] {
        let plaintext = vec![0x42u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &plaintext, |b, pt| {
            b.iter(|| fp.make_container(&secret, pt).unwrap());
        });
    }
    group.finish();
}

fn bench_request_round_trip(c: &mut Criterion) {
    let a = FirstParty::generate(CIPHER, ADDR_ALGO).unwrap();
    let b_party = FirstParty::generate(CIPHER, ADDR_ALGO).unwrap();
    let secret = a.new_secret().unwrap();
    let target = golix::Guid::new(ADDR_ALGO, vec![2u8; 64]);

    let mut group = c.benchmark_group("garq");
    group.bench_function("make_request", |b| {
        b.iter(|| {
            a.make_request(&b_party.second_party, a.make_handshake(&secret, &target))
                .unwrap()
        });
    });

    let req = a
        .make_request(&b_party.second_party, a.make_handshake(&secret, &target))
        .unwrap();
    let bytes = req.pack_bytes();
    group.bench_function("unpack_and_receive_request", |b| {
        b.iter(|| {
            let garq = b_party.unpack_request(&bytes).unwrap();
            b_party.receive_request(&a.second_party, garq).unwrap();
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_keygen,
    bench_sign_verify,
    bench_container_sizes,
    bench_request_round_trip
);
criterion_main!(benches);
