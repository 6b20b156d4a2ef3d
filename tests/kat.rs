//! Known-answer tests against the FIPS 180-2 / NIST vectors, fed single-shot
//! and through several chunking patterns.

use sha2::{Digest, Sha256 as Original};
use sha_stream::{sha1, sha256, Sha1, Sha256};

const SHA256_VECTORS: &[(&[u8], &str)] = &[
    (
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    ),
    (
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    ),
    (
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    ),
    (
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
          ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    ),
];

#[test]
fn sha256_single_shot() {
    for (input, expected) in SHA256_VECTORS {
        assert_eq!(&hex::encode(sha256(input)), expected);
    }
}

#[test]
fn sha256_two_way_splits() {
    for (input, expected) in SHA256_VECTORS {
        for i in 0..=input.len() {
            let mut sha = Sha256::new();
            sha.update(&input[..i]).update(&input[i..]);
            assert_eq!(&sha.digest_hex(), expected, "split at {}", i);
        }
    }
}

#[test]
fn sha256_three_way_splits() {
    for (input, expected) in SHA256_VECTORS {
        for i in 0..=input.len() {
            for j in i..=input.len() {
                let mut sha = Sha256::new();
                sha.update(&input[..i])
                    .update(&input[i..j])
                    .update(&input[j..]);
                assert_eq!(&sha.digest_hex(), expected, "split at {}/{}", i, j);
            }
        }
    }
}

#[test]
fn sha256_million_a() {
    let chunk = [b'a'; 1_000];
    let mut sha = Sha256::new();
    for _ in 0..1_000 {
        sha.update(&chunk[..]);
    }
    assert_eq!(
        sha.digest_hex(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
fn sha1_vectors() {
    assert_eq!(
        hex::encode(sha1(b"")),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
    assert_eq!(
        hex::encode(sha1(b"abc")),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );

    let chunk = [b'a'; 1_000];
    let mut sha = Sha1::new();
    for _ in 0..1_000 {
        sha.update(&chunk[..]);
    }
    assert_eq!(
        sha.digest_hex(),
        "34aa973cd4c4daa4f61eeb2bdbad27316534016f"
    );
}

// Ensures the bit-length field is encoded as a full 64-bit quantity. Slow;
// run with `cargo test -- --ignored`.
#[test]
#[ignore]
fn sha256_longer_than_u32_bits() {
    const MIB: usize = 1024 * 1024;
    let chunk = vec![0u8; MIB];

    // 513 MiB is 4_303_355_904 bits, just past 2^32
    let mut sha = Sha256::new();
    let mut reference = Original::new();
    for _ in 0..513 {
        sha.update(&chunk);
        reference.update(&chunk);
    }

    let expected: [u8; 32] = reference.finalize().into();
    assert_eq!(sha.digest(), expected);
}
