use super::{Engine, lcg, TWO32, seed_or};
use crate::codec::{StateReader, StateWriter};

// Ziff's four-tap generalized feedback shift register (1998).
// r[n] = r[n-A] ^ r[n-B] ^ r[n-C] ^ r[n-D] with taps from the primitive
// trinomial family, period 2**9689 - 1.

const A: usize = 471;
const B: usize = 1586;
const C: usize = 6988;
const D: usize = 9689;
const M: usize = 16383;

#[derive(Clone)]
pub(crate) struct Gfsr4 {
    nd: usize,
    ra: Vec<u32>,
}

impl Default for Gfsr4 {
    fn default() -> Self {
        Gfsr4 { nd: 0, ra: vec![0; M + 1] }
    }
}

impl Gfsr4 {
    pub const SIZE: usize = 4 + 4 * (M + 1);
}

impl Engine for Gfsr4 {
    fn set(&mut self, seed: u64) {
        let mut s = seed_or(seed, 4357);

        // Fill each word from the top bits of successive LCG outputs,
        // avoiding the correlated low-order bits of the congruence.
        for word in self.ra.iter_mut() {
            let mut t = 0;
            let mut bit = 0x80000000u32;
            for _ in 0 .. 32 {
                s = lcg(s);
                if s & 0x80000000 != 0 { t |= bit; }
                bit >>= 1;
            }
            *word = t;
        }

        // Make 32 words linearly independent by forcing a diagonal.
        let mut msb = 0x80000000u32;
        let mut mask = 0xffffffffu32;
        for i in 0 .. 32 {
            let k = 7 + i * 3;
            self.ra[k] &= mask;
            self.ra[k] |= msb;
            mask >>= 1;
            msb >>= 1;
        }
        self.nd = 32;
    }

    fn get(&mut self) -> u64 {
        self.nd = (self.nd + 1) & M;
        let nd = self.nd;
        let ra = &mut self.ra;
        let x = ra[(nd + M + 1 - A) & M] ^ ra[(nd + M + 1 - B) & M] ^ ra[(nd + M + 1 - C) & M] ^ ra[(nd + M + 1 - D) & M];
        ra[nd] = x;
        x as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO32
    }

    fn save(&self, w: &mut StateWriter) {
        w.index(self.nd);
        w.words(&self.ra);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.nd = r.index(M + 1);
        r.words(&mut self.ra);
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::algorithms::{nth, saved_len};

    #[test] fn default_seed_is_4357() {
        assert_eq!(nth::<Gfsr4>(0, 20000), nth::<Gfsr4>(4357, 20000));
        assert_ne!(nth::<Gfsr4>(1, 20000), nth::<Gfsr4>(2, 20000));
    }

    #[test] fn recurrence_holds_across_wraparound() {
        let mut e = Gfsr4::default();
        e.set(17);
        let history: Vec<u64> = (0 .. 3 * (M + 1)).map(|_| e.get()).collect();
        for n in D .. history.len() {
            assert_eq!(history[n], history[n - A] ^ history[n - B] ^ history[n - C] ^ history[n - D]);
        }
    }

    #[test] fn layout() {
        assert_eq!(saved_len::<Gfsr4>(), Gfsr4::SIZE);
    }
}
