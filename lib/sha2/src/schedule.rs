//! Message schedule expansion.

use crate::params::Params;
use crate::word::{bytes_to_word_be, Word};

/// Expand one block into the per-round schedule.
///
/// The first sixteen entries are the block read as big-endian words; the
/// rest follow the σ0/σ1 recurrence with the variant's diffusion amounts.
/// `block` must be exactly one block long.
pub fn build_schedule<W: Word>(params: &Params<W>, block: &[u8]) -> W::Schedule {
    debug_assert_eq!(block.len(), params.block_bytes());

    let [c0, c1, c2, c3, c4, c5] = params.schedule_constants;
    let mut schedule = W::EMPTY_SCHEDULE;
    let w = schedule.as_mut();

    let first_part = params.block_bits / params.word_bits as usize;
    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(W::BYTES)) {
        *slot = bytes_to_word_be(chunk);
    }

    for i in first_part..params.rounds_number {
        let s0 = w[i - 15].rotr(c0) ^ w[i - 15].rotr(c1) ^ (w[i - 15] >> c2);
        let s1 = w[i - 2].rotr(c3) ^ w[i - 2].rotr(c4) ^ (w[i - 2] >> c5);
        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1);
    }

    schedule
}
