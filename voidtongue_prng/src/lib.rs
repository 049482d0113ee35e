// Seedable random source for language generation.
//
// xoshiro256++ (Blackman & Vigna) with the 256-bit state filled from a
// single `u64` seed by SplitMix64. No external RNG crate is involved, so a
// seed yields the same language on every platform and toolchain.
//
// `voidtongue_lang` never reaches for an ambient generator: every phoneme
// pick, syllable count, affix roll, and slot draw takes a `&mut LangRng`.
// A `Session` owns one; tests build their own from a literal seed.
//
// Integer paths only touch integer arithmetic. `next_f64` is the one
// floating-point conversion and is exact (53 bits into the mantissa).

use serde::{Deserialize, Serialize};

/// xoshiro256++ state. Serializable so a session can be snapshotted and
/// resumed mid-stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangRng {
    s: [u64; 4],
}

impl LangRng {
    pub fn new(seed: u64) -> Self {
        let mut state = seed;
        let mut s = [0u64; 4];
        for word in &mut s {
            *word = splitmix64(&mut state);
        }
        LangRng { s }
    }

    pub fn next_u64(&mut self) -> u64 {
        let [s0, s1, s2, s3] = self.s;
        let out = s0.wrapping_add(s3).rotate_left(23).wrapping_add(s0);

        let t = s1 << 17;
        let s2 = s2 ^ s0;
        let s3 = s3 ^ s1;
        let s1 = s1 ^ s2;
        let s0 = s0 ^ s3;
        self.s = [s0, s1, s2 ^ t, s3.rotate_left(45)];

        out
    }

    /// Uniform in `[0, 1)`, built from the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
        (self.next_u64() >> 11) as f64 * SCALE
    }

    /// Uniform in `[0, bound)` without modulo bias. `bound` must be non-zero.
    fn below(&mut self, bound: u64) -> u64 {
        if bound & (bound - 1) == 0 {
            return self.next_u64() & (bound - 1);
        }
        // Reject the low sliver that would make some residues more likely.
        let reject_below = bound.wrapping_neg() % bound;
        loop {
            let x = self.next_u64();
            if x >= reject_below {
                return x % bound;
            }
        }
    }

    /// Uniform in `[low, high)`. Panics on an empty range.
    pub fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: empty range {low}..{high}");
        low + self.below(high - low)
    }

    /// Uniform in `[low, high)`. Panics on an empty range.
    pub fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }

    /// Uniform in `[low, high]`. Panics if `low > high`.
    pub fn range_usize_inclusive(&mut self, low: usize, high: usize) -> usize {
        assert!(low <= high, "range_usize_inclusive: empty range {low}..={high}");
        low + self.below((high - low) as u64 + 1) as usize
    }

    /// `true` with probability `p`. Values at or below 0 never fire, values
    /// at or above 1 always do.
    pub fn random_bool(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform element of `items`, or `None` for an empty slice.
    ///
    /// An empty slice draws nothing, so skipping an empty phoneme class
    /// leaves the stream where it was.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.range_usize(0, items.len()))
        }
    }
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
