//! Incremental buffer engine, finalizer and digest extraction.

use core::marker::PhantomData;

use crate::compress::compress;
use crate::schedule::build_schedule;
use crate::word::{word_to_bytes_be, Word};
use crate::Variant;

/// First padding byte: a single 1 bit right after the message.
const PADDING_MARKER: u8 = 0b1000_0000;

/// Hashing state for one message of variant `V`.
pub struct Engine<V: Variant> {
    state: [V::Word; 8],
    /// Bytes consumed, modulo 2^`length_field_bits`.
    total_length: u128,
    block: <V::Word as Word>::Block,
    block_used: usize,
    _variant: PhantomData<fn() -> V>,
}

impl<V: Variant> Engine<V> {
    /// Post-monomorphization check of the variant's parameter set.
    const CHECKED: () = {
        if let Err(err) = V::PARAMS.validate() {
            panic!("{}", err.as_str());
        }
        if core::mem::size_of::<V::Output>() != V::PARAMS.digest_length {
            panic!("digest_length does not match the output array");
        }
    };

    pub const fn new() -> Self {
        let () = Self::CHECKED;

        Self {
            state: V::PARAMS.initial_state,
            total_length: 0,
            block: <V::Word as Word>::EMPTY_BLOCK,
            block_used: 0,
            _variant: PhantomData,
        }
    }

    /// Bytes consumed so far.
    pub fn total_length(&self) -> u128 {
        self.total_length
    }

    fn process_block(&mut self) {
        let w = build_schedule(&V::PARAMS, self.block.as_ref());
        self.state = compress(&V::PARAMS, w.as_ref(), &self.state);
    }

    /// Append `input` to the message, compressing every block that fills up.
    pub fn update(&mut self, mut input: &[u8]) {
        let mask = V::PARAMS.length_mask();

        loop {
            let free = &mut self.block.as_mut()[self.block_used..];
            let to_copy = input.len().min(free.len());
            free[..to_copy].copy_from_slice(&input[..to_copy]);

            self.total_length = self.total_length.wrapping_add(to_copy as u128) & mask;

            if to_copy < free.len() {
                self.block_used += to_copy;
                return;
            }

            // Block is full.
            self.block_used = 0;
            self.process_block();
            input = &input[to_copy..];
        }
    }

    /// Apply padding and the length field, compressing the final block(s).
    pub fn finalize_buffer(&mut self) {
        let length_bytes = V::PARAMS.length_field_bytes();
        debug_assert!(self.block_used < self.block.as_ref().len());

        let block = self.block.as_mut();
        block[self.block_used] = PADDING_MARKER;
        block[self.block_used + 1..].fill(0);

        let free_after_marker = block.len() - self.block_used - 1;
        let extra_block = free_after_marker < length_bytes;
        if extra_block {
            // Length does not fit; this block carries padding only.
            self.process_block();
            self.block = <V::Word as Word>::EMPTY_BLOCK;
        }

        log::trace!(
            "{}: finalizing {} bytes, {} padding block(s)",
            V::NAME,
            self.total_length,
            if extra_block { 2 } else { 1 }
        );

        let bit_length = self.total_length.wrapping_mul(8) & V::PARAMS.length_mask();
        let encoded = bit_length.to_be_bytes();
        let block = self.block.as_mut();
        let tail = block.len() - length_bytes;
        block[tail..].copy_from_slice(&encoded[encoded.len() - length_bytes..]);

        self.process_block();
        self.block_used = 0;
    }

    /// Serialize the leading `output_words` state words into `out`.
    pub fn write_result_into(&self, out: &mut V::Output) {
        let out = out.as_mut();
        debug_assert_eq!(out.len(), V::PARAMS.digest_length);

        let words = self.state.iter().take(V::PARAMS.output_words);
        for (chunk, &word) in out.chunks_mut(<V::Word as Word>::BYTES).zip(words) {
            word_to_bytes_be(word, chunk);
        }
    }
}

impl<V: Variant> Clone for Engine<V> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            total_length: self.total_length,
            block: self.block,
            block_used: self.block_used,
            _variant: PhantomData,
        }
    }
}
