use super::{Engine, lcg, seed_or};
use crate::codec::{StateReader, StateWriter};

// Fifth-order multiple recursive generator by L'Ecuyer, Blouin and Coutre (1993).
// x[n] = (a1 x[n-1] + a5 x[n-5]) mod m, period about 2**155.

const M: i64 = 2147483647;
const A1: i64 = 107374182;
const A5: i64 = 104480;

#[derive(Clone, Default)]
pub(crate) struct Mrg {
    /// x[0] is the most recent value.
    x: [u32; 5],
}

impl Mrg {
    pub const SIZE: usize = 20;
}

impl Engine for Mrg {
    fn set(&mut self, seed: u64) {
        let mut s = seed_or(seed, 1);
        for x in self.x.iter_mut() {
            s = lcg(s);
            *x = (s as i64 % M) as u32;
        }
        for _ in 0 .. 6 { self.get(); }
    }

    fn get(&mut self) -> u64 {
        let p = (A1 * self.x[0] as i64 + A5 * self.x[4] as i64) % M;
        self.x.rotate_right(1);
        self.x[0] = p as u32;
        p as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / M as f64
    }

    fn save(&self, w: &mut StateWriter) {
        w.words(&self.x);
    }

    fn load(&mut self, r: &mut StateReader) {
        r.words(&mut self.x);
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::algorithms::{nth, saved_len};

    #[test] fn reference_value() {
        assert_eq!(nth::<Mrg>(1, 10000), 2064828650);
    }

    #[test] fn layout() {
        assert_eq!(saved_len::<Mrg>(), Mrg::SIZE);
    }
}
