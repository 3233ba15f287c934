//! Round function.

use crate::params::Params;
use crate::word::Word;

/// Run every round over `schedule` starting from `state` and return the
/// next chaining value.
///
/// Works on a copy of the state and folds it back with the feed-forward
/// addition at the end, so `state` itself is only read.
pub fn compress<W: Word>(params: &Params<W>, schedule: &[W], state: &[W; 8]) -> [W; 8] {
    let [k0, k1, k2, k3, k4, k5] = params.compression_constants;
    let k = params.round_constants.as_ref();

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..params.rounds_number {
        let s1 = e.rotr(k0) ^ e.rotr(k1) ^ e.rotr(k2);
        let ch = (e & f) ^ (!e & g);
        let temp1 = h
            .wrapping_add(s1)
            .wrapping_add(ch)
            .wrapping_add(k[i])
            .wrapping_add(schedule[i]);
        let s0 = a.rotr(k3) ^ a.rotr(k4) ^ a.rotr(k5);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let temp2 = s0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    let working = [a, b, c, d, e, f, g, h];

    let mut next = *state;
    for (word, working) in next.iter_mut().zip(working) {
        *word = word.wrapping_add(working);
    }
    next
}
