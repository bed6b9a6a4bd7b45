use super::{Engine, seed_or};
use crate::codec::{StateReader, StateWriter};

// Second order multiple recursive generator from Knuth, Seminumerical
// Algorithms, 3rd ed., section 3.2.2:
// x[n] = (a1 x[n-1] + a2 x[n-2]) mod (2**31 - 1).

const M: u64 = 2147483647;
const A1: u64 = 271828183;
const A2: u64 = 1833324378;

#[derive(Clone)]
pub(crate) struct Knuthran2 {
    x0: u32,
    x1: u32,
}

impl Default for Knuthran2 {
    fn default() -> Self {
        Knuthran2 { x0: 1, x1: 1 }
    }
}

impl Knuthran2 {
    pub const SIZE: usize = 8;
}

impl Engine for Knuthran2 {
    fn set(&mut self, seed: u64) {
        let s = match seed_or(seed, 1) as u64 % M {
            0 => 1,
            s => s as u32,
        };
        self.x0 = s;
        self.x1 = s;
    }

    fn get(&mut self) -> u64 {
        // Both products stay below 2**62, so the sum cannot overflow.
        let xn = (A1 * self.x1 as u64 + A2 * self.x0 as u64) % M;
        self.x0 = self.x1;
        self.x1 = xn as u32;
        xn
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / M as f64
    }

    fn save(&self, w: &mut StateWriter) {
        w.u32(self.x0);
        w.u32(self.x1);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.x0 = (r.u32() as u64 % M) as u32;
        self.x1 = (r.u32() as u64 % M) as u32;
    }
}
