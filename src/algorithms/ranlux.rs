use super::{Engine, TWO24, seed_or};
use crate::codec::{StateReader, StateWriter};

// RANLUX by Lüscher (1994), in the integer formulation of F. James.
// A 24-bit subtract-with-borrow generator, x[n] = x[n-10] - x[n-24] - carry,
// that uses 24 values out of every p and throws the rest away. Larger p
// decorrelates the output at the cost of speed.

const MASK_LO: i64 = 0x00ffffff;
const MASK_HI: i64 = !MASK_LO;
const TWO24_INT: i64 = 16777216;

pub(crate) const DEFAULT_SEED: u32 = 314159265;

#[derive(Clone)]
pub(crate) struct Ranlux<const P: u32> {
    i: usize,
    j: usize,
    n: u32,
    carry: u32,
    u: [u32; 24],
}

/// Luxury level 3, p = 223.
pub(crate) type Ranlux223 = Ranlux<223>;
/// Luxury level 4, p = 389.
pub(crate) type Ranlux389 = Ranlux<389>;

impl<const P: u32> Default for Ranlux<P> {
    fn default() -> Self {
        Ranlux { i: 23, j: 9, n: 0, carry: 0, u: [0; 24] }
    }
}

impl<const P: u32> Ranlux<P> {
    pub const SIZE: usize = 16 + 4 * 24;

    /// Number of values skipped after each run of 24.
    const SKIP: u32 = P - 24;

    fn increment_state(&mut self) -> u32 {
        let (i, j) = (self.i, self.j);
        let mut delta = self.u[j] as i64 - self.u[i] as i64 - self.carry as i64;
        if delta & MASK_HI != 0 {
            self.carry = 1;
            delta &= MASK_LO;
        } else {
            self.carry = 0;
        }
        self.u[i] = delta as u32;
        self.i = if i == 0 { 23 } else { i - 1 };
        self.j = if j == 0 { 23 } else { j - 1 };
        delta as u32
    }
}

impl<const P: u32> Engine for Ranlux<P> {
    fn set(&mut self, seed: u64) {
        // James' seeding LCG, x -> 40014 x mod 2147483563 via Schrage.
        let mut seed = seed_or(seed, DEFAULT_SEED) as i64;
        for u in self.u.iter_mut() {
            let k = seed / 53668;
            seed = 40014 * (seed - k * 53668) - k * 12211;
            if seed < 0 {
                seed += 2147483563;
            }
            *u = (seed % TWO24_INT) as u32;
        }
        self.i = 23;
        self.j = 9;
        self.n = 0;
        self.carry = 0;
    }

    fn get(&mut self) -> u64 {
        let r = self.increment_state();
        self.n += 1;
        if self.n == 24 {
            self.n = 0;
            for _ in 0 .. Self::SKIP {
                self.increment_state();
            }
        }
        r as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO24
    }

    fn save(&self, w: &mut StateWriter) {
        w.index(self.i);
        w.index(self.j);
        w.u32(self.n);
        w.u32(self.carry);
        w.words(&self.u);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.i = r.index(24);
        // The stored j is implied by i: the lags always sit 14 apart.
        r.index(24);
        self.j = (self.i + 10) % 24;
        self.n = r.index(24) as u32;
        self.carry = r.u32() & 1;
        r.words(&mut self.u);
        for u in self.u.iter_mut() {
            *u &= MASK_LO as u32;
        }
        // All ones with a borrow reproduces itself forever.
        if self.carry == 1 && self.u.iter().all(|&u| u == MASK_LO as u32) {
            self.carry = 0;
        }
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::algorithms::{nth, saved_len};

    #[test] fn reference_values() {
        assert_eq!(nth::<Ranlux223>(314159265, 10000), 12077992);
        assert_eq!(nth::<Ranlux389>(314159265, 10000), 165942);
    }

    #[test] fn zero_selects_james_default() {
        assert_eq!(nth::<Ranlux223>(0, 500), nth::<Ranlux223>(DEFAULT_SEED as u64, 500));
    }

    #[test] fn restored_lags_stay_14_apart() {
        let mut e = Ranlux223::default();
        e.set(5);
        for _ in 0 .. 37 { e.get(); }
        let mut w = StateWriter::with_capacity(Ranlux223::SIZE);
        e.save(&mut w);
        let mut bytes = w.into_bytes();
        // Corrupt the stored j.
        bytes[4 .. 8].copy_from_slice(&3u32.to_ne_bytes());
        let mut f = Ranlux223::default();
        f.load(&mut StateReader::new(&bytes));
        assert!((0 .. 500).all(|_| e.get() == f.get()));
    }

    #[test] fn all_ones_with_borrow_does_not_stick() {
        let bytes = vec![0xff; Ranlux389::SIZE];
        let mut e = Ranlux389::default();
        e.load(&mut StateReader::new(&bytes));
        let first = e.get();
        assert!((0 .. 100).any(|_| e.get() != first));
    }

    #[test] fn layout() {
        assert_eq!(saved_len::<Ranlux389>(), Ranlux389::SIZE);
    }
}
