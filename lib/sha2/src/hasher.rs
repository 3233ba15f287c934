//! Public hasher facade.

use core::fmt;

use crate::engine::Engine;
use crate::{DigestBytes, Hash, Variant};

/// Incremental hasher for SHA-2 variant `V`.
///
/// Finalization takes `self`, so a finished hasher cannot be updated or
/// finalized again. Clone it first to hash several messages sharing a
/// prefix.
pub struct Hasher<V: Variant> {
    engine: Engine<V>,
}

impl<V: Variant> Hasher<V> {
    /// Create a new hasher.
    pub const fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }

    /// Update the hasher with input data.
    pub fn update(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        self.engine.update(data.as_ref());
        self
    }

    /// Finalize into a caller-provided digest buffer.
    pub fn finalize_into(mut self, out: &mut V::Output) {
        self.engine.finalize_buffer();
        self.engine.write_result_into(out);
    }

    /// Finalize and return the digest.
    pub fn finalize(self) -> V::Output {
        let mut out = V::Output::zeroed();
        self.finalize_into(&mut out);
        out
    }

    /// Bytes consumed so far, modulo 2^`length_field_bits`.
    pub fn size(&self) -> u128 {
        self.engine.total_length()
    }

    /// One-shot hash function.
    pub fn hash_bytes(data: impl AsRef<[u8]>) -> V::Output {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl<V: Variant> Default for Hasher<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> Clone for Hasher<V> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }
}

// Chaining state stays out of debug output.
impl<V: Variant> fmt::Debug for Hasher<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("variant", &V::NAME)
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}

impl<V: Variant> Hash for Hasher<V> {
    const OUTPUT_SIZE: usize = V::PARAMS.digest_length;

    type Output = V::Output;

    fn new() -> Self {
        Hasher::new()
    }

    fn update(&mut self, data: &[u8]) {
        Hasher::update(self, data);
    }

    fn finalize(self) -> V::Output {
        Hasher::finalize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
    use std::format;
    use std::vec::Vec;

    const ABC: &[u8] = b"abc";

    fn digest_bytes<H: Hash>(data: &[u8]) -> Vec<u8>
    where
        H::Output: AsRef<[u8]>,
    {
        H::hash_to_array(data).as_ref().to_vec()
    }

    #[test]
    fn test_sha256_empty() {
        let hash = Sha256::hash_bytes(b"");
        let expected = [
            0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14,
            0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9, 0x24,
            0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c,
            0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52, 0xb8, 0x55,
        ];
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_sha256_hello() {
        let hash = Sha256::hash_bytes(b"hello");
        let expected = [
            0x2c, 0xf2, 0x4d, 0xba, 0x5f, 0xb0, 0xa3, 0x0e,
            0x26, 0xe8, 0x3b, 0x2a, 0xc5, 0xb9, 0xe2, 0x9e,
            0x1b, 0x16, 0x1e, 0x5c, 0x1f, 0xa7, 0x42, 0x5e,
            0x73, 0x04, 0x33, 0x62, 0x93, 0x8b, 0x98, 0x24,
        ];
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_abc_vectors_all_variants() {
        let cases: [(Vec<u8>, &str); 6] = [
            (digest_bytes::<Sha224>(ABC), "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"),
            (digest_bytes::<Sha256>(ABC), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
            (
                digest_bytes::<Sha384>(ABC),
                "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded163\
                 1a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
            ),
            (
                digest_bytes::<Sha512>(ABC),
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                 2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
            ),
            (digest_bytes::<Sha512_224>(ABC), "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa"),
            (
                digest_bytes::<Sha512_256>(ABC),
                "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23",
            ),
        ];

        for (digest, expected) in cases {
            assert_eq!(hex::encode(digest), expected);
        }
    }

    #[test]
    fn test_empty_vectors() {
        assert_eq!(
            hex::encode(Sha224::hash_bytes(b"")),
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
        );
        assert_eq!(
            hex::encode(Sha384::hash_bytes(b"")),
            "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da\
             274edebfe76f65fbd51ad2f14898b95b"
        );
        assert_eq!(
            hex::encode(Sha512::hash_bytes(b"")),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
        assert_eq!(
            hex::encode(Sha512_224::hash_bytes(b"")),
            "6ed0dd02806fa89e25de060c19d3ac86cabb87d6a0ddd05c333b84f4"
        );
        assert_eq!(
            hex::encode(Sha512_256::hash_bytes(b"")),
            "c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a"
        );
    }

    #[test]
    fn test_multi_block_vectors() {
        let two_block_256 = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        assert_eq!(
            hex::encode(Sha256::hash_bytes(two_block_256)),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );

        let two_block_512: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
                                     hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
        assert_eq!(two_block_512.len(), 112);
        assert_eq!(
            hex::encode(Sha384::hash_bytes(two_block_512)),
            "09330c33f71147e83d192fc782cd1b4753111b173b3b05d2\
             2fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039"
        );
        assert_eq!(
            hex::encode(Sha512::hash_bytes(two_block_512)),
            "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
             501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
        );
    }

    #[test]
    fn test_million_a() {
        let chunk = [b'a'; 1000];
        let mut hasher = Sha256::new();
        for _ in 0..1000 {
            hasher.update(chunk);
        }
        assert_eq!(hasher.size(), 1_000_000);
        assert_eq!(
            hex::encode(hasher.finalize()),
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
        );
    }

    #[test]
    fn test_chained_updates() {
        let mut hasher = Sha256::new();
        hasher.update("a").update(b"b").update(b"c".to_vec());
        assert_eq!(hasher.finalize(), Sha256::hash_bytes(ABC));
    }

    #[test]
    fn test_finalize_into_matches_finalize() {
        let mut hasher = Sha384::new();
        hasher.update(ABC);
        let mut out = [0u8; 48];
        hasher.clone().finalize_into(&mut out);
        assert_eq!(out, hasher.finalize());
    }

    #[test]
    fn test_output_sizes() {
        assert_eq!(<Sha224 as Hash>::OUTPUT_SIZE, 28);
        assert_eq!(<Sha256 as Hash>::OUTPUT_SIZE, 32);
        assert_eq!(<Sha384 as Hash>::OUTPUT_SIZE, 48);
        assert_eq!(<Sha512 as Hash>::OUTPUT_SIZE, 64);
        assert_eq!(<Sha512_224 as Hash>::OUTPUT_SIZE, 28);
        assert_eq!(<Sha512_256 as Hash>::OUTPUT_SIZE, 32);
        assert_eq!(Sha512_224::hash_bytes(ABC).len(), 28);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_hash_to_vec() {
        let digest = <Sha256 as Hash>::hash(ABC);
        assert_eq!(digest.len(), 32);
        assert_eq!(digest[..], Sha256::hash_bytes(ABC)[..]);
    }

    #[test]
    fn test_debug_hides_state() {
        let mut hasher = Sha512::new();
        hasher.update(b"secret");
        let rendered = format!("{:?}", hasher);
        assert_eq!(rendered, "Hasher { variant: \"SHA-512\", size: 6, .. }");
    }
}
