//! Algorithm parameters.
//!
//! A [`Params`] value fully describes one SHA-2 family member. The engine
//! never hardcodes a constant: word width, round table, IV, rotate amounts,
//! digest size and length-field width all come from here.

use thiserror::Error;

use crate::word::Word;

/// Constant description of one SHA-2 variant.
#[derive(Debug, Clone, Copy)]
pub struct Params<W: Word> {
    /// Word width in bits (32 or 64).
    pub word_bits: u32,
    /// Block width in bits, always `16 * word_bits`.
    pub block_bits: usize,
    /// Number of rounds per block.
    pub rounds_number: usize,
    /// One constant per round.
    pub round_constants: W::Schedule,
    /// Initial chaining value.
    pub initial_state: [W; 8],
    /// Schedule diffusion amounts: σ0 rotr, rotr, shr then σ1 rotr, rotr, shr.
    pub schedule_constants: [u32; 6],
    /// Round rotate amounts: Σ1 then Σ0, three each.
    pub compression_constants: [u32; 6],
    /// Digest size in bytes. May end partway through the last output word
    /// (SHA-512/224 keeps half of its fourth word), which goes beyond the
    /// whole-word truncation of SHA-224 and SHA-384.
    pub digest_length: usize,
    /// Number of state words serialized into the digest.
    pub output_words: usize,
    /// Width of the trailing message-length field in bits.
    pub length_field_bits: u32,
}

/// Parameter set that cannot drive the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamsError {
    /// `word_bits` differs from the width of the word type
    #[error("{}", self.as_str())]
    WordWidth,
    /// Block is not sixteen words wide
    #[error("{}", self.as_str())]
    BlockSize,
    /// Round count differs from the schedule length of the word type
    #[error("{}", self.as_str())]
    RoundCount,
    /// A rotate or shift amount is not smaller than the word width
    #[error("{}", self.as_str())]
    RotateAmount,
    /// Zero output words or more than the eight state words
    #[error("{}", self.as_str())]
    OutputWords,
    /// Digest length does not fit the selected output words
    #[error("{}", self.as_str())]
    DigestLength,
    /// Length field is not a whole number of bytes up to 128 bits
    #[error("{}", self.as_str())]
    LengthField,
}

impl ParamsError {
    /// Static message, usable from `const` contexts.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WordWidth => "word_bits does not match the word type",
            Self::BlockSize => "block_bits must be 16 * word_bits",
            Self::RoundCount => "rounds_number does not match the schedule length",
            Self::RotateAmount => "rotate/shift amount must be smaller than word_bits",
            Self::OutputWords => "output_words must be between 1 and 8",
            Self::DigestLength => "digest_length inconsistent with output_words",
            Self::LengthField => "length_field_bits must be a non-zero multiple of 8, at most 128",
        }
    }
}

impl<W: Word> Params<W> {
    /// Block size in bytes.
    pub const fn block_bytes(&self) -> usize {
        self.block_bits / 8
    }

    /// Length field size in bytes.
    pub const fn length_field_bytes(&self) -> usize {
        (self.length_field_bits / 8) as usize
    }

    /// Mask reducing a byte counter modulo 2^`length_field_bits`.
    pub const fn length_mask(&self) -> u128 {
        if self.length_field_bits >= 128 {
            u128::MAX
        } else {
            (1u128 << self.length_field_bits) - 1
        }
    }

    /// Check every structural invariant of the parameter set.
    ///
    /// `const` so that variants are rejected at compile time, see
    /// [`Variant`](crate::Variant).
    pub const fn validate(&self) -> Result<(), ParamsError> {
        if self.word_bits != W::BITS {
            return Err(ParamsError::WordWidth);
        }
        if self.block_bits != 16 * self.word_bits as usize {
            return Err(ParamsError::BlockSize);
        }
        if self.rounds_number != W::ROUNDS {
            return Err(ParamsError::RoundCount);
        }

        let mut i = 0;
        while i < 6 {
            if self.schedule_constants[i] >= self.word_bits
                || self.compression_constants[i] >= self.word_bits
            {
                return Err(ParamsError::RotateAmount);
            }
            i += 1;
        }

        if self.output_words == 0 || self.output_words > 8 {
            return Err(ParamsError::OutputWords);
        }
        // Every output word contributes at least one byte.
        if self.digest_length > self.output_words * W::BYTES
            || self.digest_length <= (self.output_words - 1) * W::BYTES
        {
            return Err(ParamsError::DigestLength);
        }

        if self.length_field_bits == 0
            || self.length_field_bits % 8 != 0
            || self.length_field_bits > 128
        {
            return Err(ParamsError::LengthField);
        }
        // A 16-word block is at least 512 bits, so marker byte plus a
        // length field of up to 128 bits always fits.

        Ok(())
    }
}
