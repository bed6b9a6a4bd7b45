use wrapping_arithmetic::wrappit;
use super::{Engine, seed32};
use crate::codec::{StateReader, StateWriter};

// The CRAY RANF generator: x -> 44485709377909 x mod 2**48.
// Seeding runs the congruence one step backwards, so that the first output
// is the seed itself multiplied forward.

const MASK48: u64 = (1 << 48) - 1;
const TWO48: f64 = 281474976710656.0;
const A: u64 = 0x2875_A2E7_B175;
/// Multiplicative inverse of A mod 2**48.
const A_INV: u64 = 0x5CEE_B894_D6DD;
/// The CRAY default starting value.
const DEFAULT: u64 = 0x9482_53FC_9CD1;

#[derive(Clone, Default)]
pub(crate) struct Ranf {
    x: u64,
}

impl Ranf {
    pub const SIZE: usize = 6;

    #[wrappit]
    fn advance(&mut self) -> u64 {
        self.x = (self.x * A) & MASK48;
        self.x
    }
}

impl Engine for Ranf {
    #[wrappit]
    fn set(&mut self, seed: u64) {
        // Only odd states lie on the full period.
        let x0 = match seed32(seed) {
            0 => DEFAULT,
            s => (s | 1) as u64,
        };
        self.x = (x0 * A_INV) & MASK48;
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
        self.x = (x2 << 32) | (x1 << 16) | x0 | 1;
    }
}
