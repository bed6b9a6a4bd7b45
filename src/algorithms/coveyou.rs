use wrapping_arithmetic::wrappit;
use super::{Engine, TWO32, seed32};
use crate::codec::{StateReader, StateWriter};

// Coveyou's quadratic congruential generator x -> x (x + 1) mod 2**32.
// The state is kept congruent to 2 mod 4, which gives the full period 2**30.

#[derive(Clone, Default)]
pub(crate) struct Coveyou {
    x: u32,
}

impl Coveyou {
    pub const SIZE: usize = 4;
}

/// Replaces the low two bits of `s` with 0b10: residues 0 and 1 move up, 3 moves down.
#[wrappit] #[inline] fn align(s: u32) -> u32 {
    let diff = (s % 4) - 2;
    if diff != 0 { s - diff } else { s }
}

#[wrappit] #[inline] fn square_step(x: u32) -> u32 {
    x * (x + 1)
}

impl Engine for Coveyou {
    fn set(&mut self, seed: u64) {
        self.x = align(seed32(seed));
    }

    fn get(&mut self) -> u64 {
        self.x = square_step(self.x);
        self.x as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO32
    }

    fn save(&self, w: &mut StateWriter) {
        w.u32(self.x);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.x = align(r.u32());
    }
}
