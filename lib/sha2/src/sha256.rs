//! SHA-224 and SHA-256
//!
//! 32-bit word family of FIPS 180-4: 64-byte blocks, 64 rounds, 64-bit
//! length field.

use crate::hasher::Hasher;
use crate::params::Params;
use crate::Variant;

/// Round constants (first 32 bits of fractional parts of cube roots of first 64 primes).
const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5,
    0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3,
    0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc,
    0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7,
    0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
    0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3,
    0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5,
    0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208,
    0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// SHA-256 initial hash values (first 32 bits of fractional parts of square roots of first 8 primes).
const H256: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
    0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-224 initial hash values (second 32 bits of fractional parts of square roots of 9th..16th primes).
const H224: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939,
    0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

/// SHA-256 parameter set.
pub const SHA256_PARAMS: Params<u32> = Params {
    word_bits: 32,
    block_bits: 512,
    rounds_number: 64,
    round_constants: K,
    initial_state: H256,
    schedule_constants: [7, 18, 3, 17, 19, 10],
    compression_constants: [6, 11, 25, 2, 13, 22],
    digest_length: 32,
    output_words: 8,
    length_field_bits: 64,
};

/// SHA-224 parameter set: SHA-256 rounds, own IV, seven output words.
pub const SHA224_PARAMS: Params<u32> = Params {
    initial_state: H224,
    digest_length: 28,
    output_words: 7,
    ..SHA256_PARAMS
};

#[derive(Debug, Clone, Copy)]
pub struct Sha256Variant;

impl Variant for Sha256Variant {
    type Word = u32;
    type Output = [u8; 32];
    const NAME: &'static str = "SHA-256";
    const PARAMS: Params<u32> = SHA256_PARAMS;
}

#[derive(Debug, Clone, Copy)]
pub struct Sha224Variant;

impl Variant for Sha224Variant {
    type Word = u32;
    type Output = [u8; 28];
    const NAME: &'static str = "SHA-224";
    const PARAMS: Params<u32> = SHA224_PARAMS;
}

/// SHA-256 hasher.
pub type Sha256 = Hasher<Sha256Variant>;

/// SHA-224 hasher.
pub type Sha224 = Hasher<Sha224Variant>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha224_is_truncated_sha256_core() {
        // Same rounds, different IV: the first 28 bytes must not coincide.
        let short = Sha224::hash_bytes(b"abc");
        let long = Sha256::hash_bytes(b"abc");
        assert_eq!(short.len(), 28);
        assert_ne!(short[..], long[..28]);
    }

    #[test]
    fn test_sha224_padding_boundary() {
        let hash = Sha224::hash_bytes([0x61u8; 56]);
        assert_eq!(
            hex::encode(hash),
            "d40854fc9caf172067136f2e29e1380b14626bf6f0dd06779f820dcd"
        );
    }

    #[test]
    fn test_sha256_exact_block() {
        let hash = Sha256::hash_bytes([0x61u8; 64]);
        assert_eq!(
            hex::encode(hash),
            "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb"
        );
    }

    #[test]
    fn test_sha256_bit_flip_changes_digest() {
        let mut message = *b"The quick brown fox jumps over the lazy dog";
        let before = Sha256::hash_bytes(message);
        message[10] ^= 0x01;
        assert_ne!(Sha256::hash_bytes(message), before);
    }
}
