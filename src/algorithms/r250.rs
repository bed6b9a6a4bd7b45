use super::{Engine, lcg, TWO32, seed_or};
use crate::codec::{StateReader, StateWriter};

// Kirkpatrick and Stoll's shift register generator, x[n] = x[n-103] ^ x[n-250].
// Period about 2**250.

const LEN: usize = 250;
const LAG: usize = 103;

#[derive(Clone)]
pub(crate) struct R250 {
    i: usize,
    x: [u32; LEN],
}

impl Default for R250 {
    fn default() -> Self {
        R250 { i: 0, x: [0; LEN] }
    }
}

impl R250 {
    pub const SIZE: usize = 4 + 4 * LEN;
}

impl Engine for R250 {
    fn set(&mut self, seed: u64) {
        let mut s = seed_or(seed, 1);
        for x in self.x.iter_mut() {
            s = lcg(s);
            *x = s;
        }

        // Force 32 of the words onto a diagonal so they are linearly independent.
        let mut msb = 0x80000000u32;
        let mut mask = 0xffffffffu32;
        for i in 0 .. 32 {
            let k = 7 * i + 3;
            self.x[k] &= mask;
            self.x[k] |= msb;
            mask >>= 1;
            msb >>= 1;
        }
        self.i = 0;
    }

    fn get(&mut self) -> u64 {
        let i = self.i;
        let j = if i >= LEN - LAG { i - (LEN - LAG) } else { i + LAG };
        let k = self.x[i] ^ self.x[j];
        self.x[i] = k;
        self.i = if i + 1 == LEN { 0 } else { i + 1 };
        k as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO32
    }

    fn save(&self, w: &mut StateWriter) {
        w.index(self.i);
        w.words(&self.x);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.i = r.index(LEN);
        r.words(&mut self.x);
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::algorithms::{nth, saved_len};

    #[test] fn reference_value() {
        assert_eq!(nth::<R250>(1, 10000), 1100653588);
    }

    #[test] fn layout() {
        assert_eq!(saved_len::<R250>(), R250::SIZE);
    }
}
