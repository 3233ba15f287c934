//! # Splax SHA-2 Engine
//!
//! One generic SHA-2 core that instantiates every FIPS 180-4 family member
//! from a parameter set. Works in both kernel (no_std) and userspace (std)
//! environments.
//!
//! ## Algorithms
//!
//! - **SHA-224 / SHA-256**: 32-bit words, 64-byte blocks, 64 rounds
//! - **SHA-384 / SHA-512**: 64-bit words, 128-byte blocks, 80 rounds
//! - **SHA-512/224 / SHA-512/256**: SHA-512 core with their own IVs
//!
//! ## Design
//!
//! - [`Params`] describes a variant: word width, round table, IV, rotate
//!   amounts, digest size and length-field width
//! - [`Variant`] binds a parameter set to a word type and an output array;
//!   the engine is monomorphized per variant
//! - Invalid parameter sets fail to compile when first instantiated
//! - Finalization consumes the hasher, so it cannot be updated afterwards
//! - Control flow depends on input length only, never on input values
//! - No dynamic allocation in core operations
//!
//! ```
//! use splax_sha2::Sha256;
//!
//! let mut hasher = Sha256::new();
//! hasher.update(b"a").update(b"bc");
//! let digest = hasher.finalize();
//! assert_eq!(digest[..4], [0xba, 0x78, 0x16, 0xbf]);
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use core::fmt::Debug;

pub mod compress;
pub mod engine;
pub mod hasher;
pub mod params;
pub mod schedule;
pub mod sha256;
pub mod sha512;
pub mod word;

pub use hasher::Hasher;
pub use params::{Params, ParamsError};
pub use sha256::{Sha224, Sha256};
pub use sha512::{Sha384, Sha512, Sha512_224, Sha512_256};
pub use word::{bytes_to_word_be, word_to_bytes_be, Word};

/// Fixed-size digest buffer.
pub trait DigestBytes: Copy + Eq + Debug + AsRef<[u8]> + AsMut<[u8]> {
    fn zeroed() -> Self;
}

impl<const N: usize> DigestBytes for [u8; N] {
    fn zeroed() -> Self {
        [0u8; N]
    }
}

/// One concrete SHA-2 family member.
///
/// Implementations are zero-sized markers; everything the engine needs is
/// in [`Variant::PARAMS`]. A parameter set that fails
/// [`Params::validate`], or whose `digest_length` differs from the size of
/// [`Variant::Output`], is rejected at compile time by the first
/// [`Hasher`] built from it.
///
/// ```compile_fail
/// use splax_sha2::sha256::SHA256_PARAMS;
/// use splax_sha2::{Hasher, Params, Variant};
///
/// struct NineWords;
///
/// impl Variant for NineWords {
///     type Word = u32;
///     type Output = [u8; 36];
///     const NAME: &'static str = "nine-words";
///     const PARAMS: Params<u32> = Params {
///         output_words: 9,
///         digest_length: 36,
///         ..SHA256_PARAMS
///     };
/// }
///
/// let _ = Hasher::<NineWords>::new();
/// ```
///
/// The same definition with `output_words: 8` and a 32-byte output
/// compiles:
///
/// ```
/// use splax_sha2::sha256::SHA256_PARAMS;
/// use splax_sha2::{Hasher, Params, Variant};
///
/// struct EightWords;
///
/// impl Variant for EightWords {
///     type Word = u32;
///     type Output = [u8; 32];
///     const NAME: &'static str = "eight-words";
///     const PARAMS: Params<u32> = Params {
///         output_words: 8,
///         digest_length: 32,
///         ..SHA256_PARAMS
///     };
/// }
///
/// assert_eq!(Hasher::<EightWords>::hash_bytes(b"abc"), splax_sha2::Sha256::hash_bytes(b"abc"));
/// ```
pub trait Variant: 'static {
    /// Word type, selecting block and schedule sizes.
    type Word: Word;
    /// Digest array, `PARAMS.digest_length` bytes.
    type Output: DigestBytes;
    /// Display name, e.g. `"SHA-256"`.
    const NAME: &'static str;
    const PARAMS: Params<Self::Word>;
}

/// Hash trait for consistent interface.
pub trait Hash {
    /// Output size in bytes.
    const OUTPUT_SIZE: usize;

    /// Digest type.
    type Output;

    /// Create a new hasher.
    fn new() -> Self;

    /// Update the hasher with data.
    fn update(&mut self, data: &[u8]);

    /// Finalize and return the digest.
    fn finalize(self) -> Self::Output;

    /// One-shot hash to fixed array.
    fn hash_to_array(data: &[u8]) -> Self::Output
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// One-shot hash to Vec.
    #[cfg(feature = "alloc")]
    fn hash(data: &[u8]) -> Vec<u8>
    where
        Self: Sized,
        Self::Output: AsRef<[u8]>,
    {
        Self::hash_to_array(data).as_ref().to_vec()
    }
}
