use wrapping_arithmetic::wrappit;
use super::{Engine, seed32};
use crate::codec::{StateReader, StateWriter};

// The Unix drand48 family: x -> (0x5DEECE66D x + 0xB) mod 2**48.
// Integer output is the top 32 bits, and get_double takes all 48.

const MASK48: u64 = (1 << 48) - 1;
const TWO48: f64 = 281474976710656.0;

/// State before the first `srand48` call.
const UNSEEDED: u64 = 0x1234_ABCD_330E;

#[derive(Clone)]
pub(crate) struct Rand48 {
    x: u64,
}

impl Default for Rand48 {
    fn default() -> Self {
        Rand48 { x: UNSEEDED }
    }
}

impl Rand48 {
    pub const SIZE: usize = 6;

    #[wrappit]
    fn advance(&mut self) -> u64 {
        self.x = (self.x * 0x5DEECE66D + 0xB) & MASK48;
        self.x
    }
}

impl Engine for Rand48 {
    fn set(&mut self, seed: u64) {
        self.x = match seed32(seed) {
            0 => UNSEEDED,
            // srand48 puts the seed in the high 32 bits.
            s => ((s as u64) << 16) | 0x330E,
        };
    }

    fn get(&mut self) -> u64 {
        self.advance() >> 16
    }

    fn get_double(&mut self) -> f64 {
        self.advance() as f64 / TWO48
    }

    fn save(&self, w: &mut StateWriter) {
        w.u16(self.x as u16);
        w.u16((self.x >> 16) as u16);
        w.u16((self.x >> 32) as u16);
    }

    fn load(&mut self, r: &mut StateReader) {
        let x0 = r.u16() as u64;
        let x1 = r.u16() as u64;
        let x2 = r.u16() as u64;
        self.x = (x2 << 32) | (x1 << 16) | x0;
    }
}
