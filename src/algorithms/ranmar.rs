use super::{Engine, TWO24, seed32};
use crate::codec::{StateReader, StateWriter};

// RANMAR by Marsaglia, Zaman and Tsang (1990): a lagged Fibonacci
// subtraction x[n] = x[n-97] - x[n-33] mod 2**24, combined with a
// simple arithmetic sequence. Period about 2**144.

const LEN: usize = 97;
const TWO24_INT: i32 = 16777216;
const CD: i32 = 7654321;
const CM: i32 = 16777213;

#[derive(Clone)]
pub(crate) struct Ranmar {
    i: usize,
    j: usize,
    carry: i32,
    u: [i32; LEN],
}

impl Default for Ranmar {
    fn default() -> Self {
        Ranmar { i: 96, j: 32, carry: 0, u: [0; LEN] }
    }
}

impl Ranmar {
    pub const SIZE: usize = 12 + 4 * LEN;
}

/// Marsaglia's combined Fibonacci and congruential bit source shared with zuf.
/// Produces 24-bit words, most significant bit first.
pub(crate) struct MarsagliaBits {
    i: u32,
    j: u32,
    k: u32,
    l: u32,
}

impl MarsagliaBits {
    pub fn new(ij: u32, kl: u32) -> Self {
        MarsagliaBits {
            i: (ij / 177) % 177 + 2,
            j: ij % 177 + 2,
            k: (kl / 169) % 178 + 1,
            l: kl % 169,
        }
    }

    pub fn word24(&mut self) -> u32 {
        let mut sum = 0;
        let mut t = 1 << 24;
        for _ in 0 .. 24 {
            let m = ((self.i * self.j) % 179 * self.k) % 179;
            self.i = self.j;
            self.j = self.k;
            self.k = m;
            self.l = (53 * self.l + 1) % 169;
            t >>= 1;
            if (self.l * m) % 64 >= 32 {
                sum += t;
            }
        }
        sum
    }
}

impl Engine for Ranmar {
    fn set(&mut self, seed: u64) {
        let s = seed32(seed);
        let mut bits = MarsagliaBits::new(s / 30082, s % 30082);
        for u in self.u.iter_mut() {
            *u = bits.word24() as i32;
        }
        self.i = 96;
        self.j = 32;
        self.carry = 362436;
    }

    fn get(&mut self) -> u64 {
        let (i, j) = (self.i, self.j);
        let mut delta = self.u[i] - self.u[j];
        if delta < 0 {
            delta += TWO24_INT;
        }
        self.u[i] = delta;
        self.i = if i == 0 { LEN - 1 } else { i - 1 };
        self.j = if j == 0 { LEN - 1 } else { j - 1 };

        self.carry -= CD;
        if self.carry < 0 {
            self.carry += CM;
        }
        delta -= self.carry;
        if delta < 0 {
            delta += TWO24_INT;
        }
        delta as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO24
    }

    fn save(&self, w: &mut StateWriter) {
        w.index(self.i);
        w.index(self.j);
        w.u32(self.carry as u32);
        self.u.iter().for_each(|&u| w.u32(u as u32));
    }

    fn load(&mut self, r: &mut StateReader) {
        self.i = r.index(LEN);
        // The lags always sit 33 apart.
        r.index(LEN);
        self.j = (self.i + 33) % LEN;
        self.carry = (r.u32() % CM as u32) as i32;
        self.u.iter_mut().for_each(|u| *u = (r.u32() & 0xffffff) as i32);
    }
}
