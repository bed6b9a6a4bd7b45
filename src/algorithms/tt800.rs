use super::{Engine, lcg, TWO32, seed32};
use crate::codec::{StateReader, StateWriter};

// TT800, the twisted GFSR of Matsumoto and Kurita (1994), a small
// predecessor of the Mersenne Twister with period 2**800 - 1.

const N: usize = 25;
const M: usize = 7;

/// The initial table published with TT800, used for seed 0.
const INITIAL: [u32; N] = [
    0x95f24dab, 0x0b685215, 0xe76ccae7, 0xaf3ec239, 0x715fad23,
    0x24a590ad, 0x69e4b5ef, 0xbf456141, 0x96bc1b7b, 0xa7bdf825,
    0xc1de75b7, 0x8858a9c9, 0x2da87693, 0xb657f9dd, 0xffdc8a9f,
    0x8121da71, 0x8b823ecb, 0x885d05f5, 0x4e20cd47, 0x5a9ad5d9,
    0x512c0c03, 0xea857ccd, 0x4cc1d30f, 0x8891a8a1, 0xa6b7aadb,
];

#[inline] fn twist(x: u32) -> u32 {
    (x >> 1) ^ if x & 1 == 1 { 0x8ebfd028 } else { 0 }
}

#[derive(Clone)]
pub(crate) struct Tt800 {
    n: usize,
    x: [u32; N],
}

impl Default for Tt800 {
    fn default() -> Self {
        Tt800 { n: 0, x: INITIAL }
    }
}

impl Tt800 {
    pub const SIZE: usize = 4 + 4 * N;
}

impl Engine for Tt800 {
    fn set(&mut self, seed: u64) {
        let s = seed32(seed);
        self.n = 0;
        if s == 0 {
            self.x = INITIAL;
            return;
        }
        self.x[0] = s;
        for i in 1 .. N {
            self.x[i] = lcg(self.x[i - 1]);
        }
    }

    fn get(&mut self) -> u64 {
        if self.n >= N {
            let x = &mut self.x;
            for i in 0 .. N - M {
                x[i] = x[i + M] ^ twist(x[i]);
            }
            for i in N - M .. N {
                x[i] = x[i + M - N] ^ twist(x[i]);
            }
            self.n = 0;
        }
        let mut y = self.x[self.n];
        y ^= (y << 7) & 0x2b5b2500;
        y ^= (y << 15) & 0xdb8b0000;
        y ^= y >> 16;
        self.n += 1;
        y as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO32
    }

    fn save(&self, w: &mut StateWriter) {
        w.index(self.n);
        w.words(&self.x);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.n = r.index(N + 1);
        r.words(&mut self.x);
    }
}
