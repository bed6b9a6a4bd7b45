use wrapping_arithmetic::wrappit;
use super::{Engine, TWO32, seed_or};
use crate::codec::{StateReader, StateWriter};

// Mersenne Twister MT19937 by Matsumoto and Nishimura (1998).
// -32-bit output, 19937-bit state, period 2**19937 - 1
// -623-dimensional equidistribution
// Three seeding procedures exist: the 2002 one (current), and two superseded
// ones from 1999 and 1998 kept for reproducing old streams.

const N: usize = 624;
const M: usize = 397;
const UPPER_MASK: u32 = 0x80000000;
const LOWER_MASK: u32 = 0x7fffffff;

pub(crate) const DEFAULT_SEED: u32 = 4357;

/// Mersenne Twister. `VERSION` selects the seeding procedure: 2002, 1999 or 1998.
#[derive(Clone)]
pub(crate) struct Mt<const VERSION: u16> {
    mt: Vec<u32>,
    mti: usize,
}

pub(crate) type Mt19937 = Mt<2002>;
pub(crate) type Mt19937_1999 = Mt<1999>;
pub(crate) type Mt19937_1998 = Mt<1998>;

impl<const VERSION: u16> Default for Mt<VERSION> {
    fn default() -> Self {
        Mt { mt: vec![0; N], mti: N }
    }
}

#[inline] fn magic(y: u32) -> u32 {
    if y & 1 == 1 { 0x9908b0df } else { 0 }
}

#[inline] fn twist(a: u32, b: u32, c: u32) -> u32 {
    let y = (a & UPPER_MASK) | (b & LOWER_MASK);
    c ^ (y >> 1) ^ magic(y)
}

/// Knuth's multiplier seeding from the 2002 reference code.
#[wrappit] #[inline] fn init_2002(prev: u32, i: u32) -> u32 {
    (prev ^ (prev >> 30)) * 1812433253 + i
}

#[wrappit] #[inline] fn lcg_1999(s: u32) -> u32 {
    s * 69069 + 1
}

#[wrappit] #[inline] fn lcg_1998(s: u32) -> u32 {
    s * 69069
}

impl<const VERSION: u16> Mt<VERSION> {
    pub const SIZE: usize = 4 * N + 4;

    /// Regenerates the whole block of N words.
    fn generate(&mut self) {
        let mt = &mut self.mt;
        for kk in 0 .. N - M {
            mt[kk] = twist(mt[kk], mt[kk + 1], mt[kk + M]);
        }
        for kk in N - M .. N - 1 {
            mt[kk] = twist(mt[kk], mt[kk + 1], mt[kk + M - N]);
        }
        mt[N - 1] = twist(mt[N - 1], mt[0], mt[M - 1]);
        self.mti = 0;
    }
}

impl<const VERSION: u16> Engine for Mt<VERSION> {
    fn set(&mut self, seed: u64) {
        let mut s = seed_or(seed, DEFAULT_SEED);
        match VERSION {
            1999 => {
                for i in 0 .. N {
                    let high = s & 0xffff0000;
                    s = lcg_1999(s);
                    self.mt[i] = high | ((s & 0xffff0000) >> 16);
                    s = lcg_1999(s);
                }
            }
            1998 => {
                self.mt[0] = s;
                for i in 1 .. N {
                    self.mt[i] = lcg_1998(self.mt[i - 1]);
                }
            }
            _ => {
                self.mt[0] = s;
                for i in 1 .. N {
                    self.mt[i] = init_2002(self.mt[i - 1], i as u32);
                }
            }
        }
        self.mti = N;
    }

    fn get(&mut self) -> u64 {
        if self.mti >= N {
            self.generate();
        }
        let mut k = self.mt[self.mti];
        k ^= k >> 11;
        k ^= (k << 7) & 0x9d2c5680;
        k ^= (k << 15) & 0xefc60000;
        k ^= k >> 18;
        self.mti += 1;
        k as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO32
    }

    fn save(&self, w: &mut StateWriter) {
        w.words(&self.mt);
        w.index(self.mti);
    }

    fn load(&mut self, r: &mut StateReader) {
        r.words(&mut self.mt);
        // mti == N is a legal value meaning "block exhausted".
        self.mti = r.index(N + 1);
    }
}
