//! Word abstraction and big-endian codec.
//!
//! SHA-2 comes in two word widths. `u32` drives SHA-224/256 with 64-byte
//! blocks and 64 rounds, `u64` drives SHA-384/512 with 128-byte blocks and
//! 80 rounds. Everything width-specific the engine needs hangs off [`Word`].

use core::fmt::Debug;
use core::ops::{BitAnd, BitXor, Not, Shr};

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Unsigned machine word of a SHA-2 family member.
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Debug
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<u32, Output = Self>
    + 'static
{
    /// Width in bits.
    const BITS: u32;
    /// Width in bytes.
    const BYTES: usize;
    /// Length of the message schedule (and of the round constant table).
    const ROUNDS: usize;

    /// One input block, `16 * BYTES` bytes.
    type Block: Copy + Debug + AsRef<[u8]> + AsMut<[u8]>;
    /// Expanded message schedule, `ROUNDS` words.
    type Schedule: Copy + Debug + AsRef<[Self]> + AsMut<[Self]>;
    /// Big-endian byte image of one word.
    type Bytes: Copy + Default + Debug + AsRef<[u8]> + AsMut<[u8]>;

    const EMPTY_BLOCK: Self::Block;
    const EMPTY_SCHEDULE: Self::Schedule;

    fn rotr(self, n: u32) -> Self;
    fn wrapping_add(self, rhs: Self) -> Self;
    fn from_be_array(bytes: Self::Bytes) -> Self;
    fn to_be_array(self) -> Self::Bytes;
}

macro_rules! impl_word {
    ($ty:ty, $rounds:expr) => {
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const BYTES: usize = core::mem::size_of::<$ty>();
            const ROUNDS: usize = $rounds;

            type Block = [u8; 16 * core::mem::size_of::<$ty>()];
            type Schedule = [$ty; $rounds];
            type Bytes = [u8; core::mem::size_of::<$ty>()];

            const EMPTY_BLOCK: Self::Block = [0u8; 16 * core::mem::size_of::<$ty>()];
            const EMPTY_SCHEDULE: Self::Schedule = [0; $rounds];

            #[inline(always)]
            fn rotr(self, n: u32) -> Self {
                self.rotate_right(n)
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn from_be_array(bytes: Self::Bytes) -> Self {
                <$ty>::from_be_bytes(bytes)
            }

            #[inline(always)]
            fn to_be_array(self) -> Self::Bytes {
                self.to_be_bytes()
            }
        }
    };
}

impl_word!(u32, 64);
impl_word!(u64, 80);

/// Read one big-endian word from exactly `W::BYTES` bytes.
///
/// # Panics
///
/// If `bytes.len() != W::BYTES`. Callers slice blocks on word boundaries.
#[inline]
pub fn bytes_to_word_be<W: Word>(bytes: &[u8]) -> W {
    let mut image = W::Bytes::default();
    image.as_mut().copy_from_slice(bytes);
    W::from_be_array(image)
}

/// Write the `out.len()` most significant bytes of `word` in big-endian
/// order. A full word needs `out.len() == W::BYTES`; shorter outputs keep
/// only the leading bytes (used by truncated digests).
///
/// # Panics
///
/// If `out.len() > W::BYTES`.
#[inline]
pub fn word_to_bytes_be<W: Word>(word: W, out: &mut [u8]) {
    let image = word.to_be_array();
    out.copy_from_slice(&image.as_ref()[..out.len()]);
}
