use super::{Engine, seed32};
use crate::codec::{StateReader, StateWriter};

// Marsaglia's subtractive generator as used by the SLATEC UNI routine:
// m[n] = m[n-17] - m[n-5] mod (2**(MDIG-1) - 1) on a table of 17 integers.

const TABLE: usize = 17;
const MULTIPLIER: u64 = 9069;

/// Subtractive table generator for an integer word of `MDIG` bits.
#[derive(Clone)]
pub(crate) struct Uni<const MDIG: u32> {
    i: usize,
    j: usize,
    m: [u32; TABLE],
}

/// 16-bit words, the original UNI.
pub(crate) type Uni16 = Uni<16>;
/// 32-bit words.
pub(crate) type Uni32 = Uni<32>;

impl<const MDIG: u32> Default for Uni<MDIG> {
    fn default() -> Self {
        Uni { i: 4, j: 16, m: [0; TABLE] }
    }
}

impl<const MDIG: u32> Uni<MDIG> {
    pub const SIZE: usize = 8 + 4 * TABLE;

    /// Modulus of the subtraction.
    const M1: u64 = (1 << (MDIG - 1)) - 1;
    /// Half-word base used to split the seeding multiplication.
    const M2: u64 = 1 << (MDIG / 2);
}

impl<const MDIG: u32> Engine for Uni<MDIG> {
    fn set(&mut self, seed: u64) {
        let (m1, m2) = (Self::M1, Self::M2);
        // Force an odd seed no larger than the modulus.
        let s = (2 * seed32(seed) as u64 + 1).min(m1);
        let (k0, k1) = (MULTIPLIER % m2, MULTIPLIER / m2);
        let (mut j0, mut j1) = (s % m2, s / m2);
        for m in self.m.iter_mut() {
            let t = j0 * k0;
            j1 = (t / m2 + j0 * k1 + j1 * k0) % (m2 / 2);
            j0 = t % m2;
            *m = (j0 + m2 * j1) as u32;
        }
        self.i = 4;
        self.j = 16;
    }

    fn get(&mut self) -> u64 {
        let (i, j) = (self.i, self.j);
        let mut k = self.m[i] as i64 - self.m[j] as i64;
        if k < 0 {
            k += Self::M1 as i64;
        }
        self.m[j] = k as u32;
        self.i = if i == 0 { TABLE - 1 } else { i - 1 };
        self.j = if j == 0 { TABLE - 1 } else { j - 1 };
        k as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / Self::M1 as f64
    }

    fn save(&self, w: &mut StateWriter) {
        w.index(self.i);
        w.index(self.j);
        w.words(&self.m);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.i = r.index(TABLE);
        r.index(TABLE);
        self.j = (self.i + 12) % TABLE;
        r.words(&mut self.m);
        for m in self.m.iter_mut() {
            *m = (*m as u64 % Self::M1) as u32;
        }
    }
}
