use super::{Engine, seed32};
use crate::codec::{StateReader, StateWriter};

// The SLATEC RAND routine: x -> (1536 * 2048 + 1029) x + 1731 mod 2**22,
// evaluated on two 11-bit halves so it fits in small integers.

const P: u32 = 4194304;
const HALF: u32 = 2048;

#[derive(Clone, Default)]
pub(crate) struct Slatec {
    x0: u32,
    x1: u32,
}

impl Slatec {
    pub const SIZE: usize = 8;
}

impl Engine for Slatec {
    fn set(&mut self, seed: u64) {
        // Only eight starting points are available.
        let s = (seed32(seed) % 8) * (P / 8);
        self.x0 = s % HALF;
        self.x1 = s / HALF;
    }

    fn get(&mut self) -> u64 {
        let (x0, x1) = (self.x0, self.x1);
        let mut y0 = 1029 * x0;
        // 1536 x1 + 507 (x0 - x1) + y0, rearranged to stay unsigned.
        let mut y1 = 1029 * x1 + 507 * x0 + y0;
        y0 += 1731;
        self.x0 = y0 % HALF;
        y1 += (y0 - self.x0) / HALF;
        self.x1 = y1 % HALF;
        (self.x1 * HALF + self.x0) as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / P as f64
    }

    fn save(&self, w: &mut StateWriter) {
        w.u32(self.x0);
        w.u32(self.x1);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.x0 = r.u32() % HALF;
        self.x1 = r.u32() % HALF;
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::algorithms::{nth, saved_len};

    #[test] fn reference_value() {
        assert_eq!(nth::<Slatec>(1, 10000), 45776);
    }

    #[test] fn seeds_repeat_modulo_8() {
        assert_eq!(nth::<Slatec>(3, 100), nth::<Slatec>(11, 100));
        assert_ne!(nth::<Slatec>(3, 100), nth::<Slatec>(4, 100));
    }

    #[test] fn layout() {
        assert_eq!(saved_len::<Slatec>(), Slatec::SIZE);
    }
}
