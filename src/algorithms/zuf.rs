use super::{Engine, TWO24, seed_or};
use super::ranmar::MarsagliaBits;
use crate::codec::{StateReader, StateWriter};

// ZUFALL by W. Petersen: the lagged Fibonacci sum u[n] = u[n-273] + u[n-607] mod 1
// on 24-bit fractions, seeded from Marsaglia's bit source.

const LEN: usize = 607;
const LAG: usize = 273;
const TWO24_INT: u32 = 1 << 24;

#[derive(Clone)]
pub(crate) struct Zuf {
    n: usize,
    u: Vec<u32>,
}

impl Default for Zuf {
    fn default() -> Self {
        Zuf { n: 0, u: vec![0; LEN] }
    }
}

impl Zuf {
    pub const SIZE: usize = 4 + 4 * LEN;
}

impl Engine for Zuf {
    fn set(&mut self, seed: u64) {
        let mut bits = MarsagliaBits::new(seed_or(seed, 1802), 9373);
        for u in self.u.iter_mut() {
            *u = bits.word24();
        }
        self.n = 0;
    }

    fn get(&mut self) -> u64 {
        let n = self.n;
        let m = (n + LEN - LAG) % LEN;
        let mut t = self.u[n] + self.u[m];
        if t >= TWO24_INT {
            t -= TWO24_INT;
        }
        self.u[n] = t;
        self.n = if n + 1 == LEN { 0 } else { n + 1 };
        t as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO24
    }

    fn save(&self, w: &mut StateWriter) {
        w.index(self.n);
        w.words(&self.u);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.n = r.index(LEN);
        r.words(&mut self.u);
        for u in self.u.iter_mut() {
            *u &= TWO24_INT - 1;
        }
    }
}
