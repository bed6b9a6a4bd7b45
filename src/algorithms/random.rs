use wrapping_arithmetic::wrappit;
use super::{Engine, seed_or};
use crate::codec::{StateReader, StateWriter};

// The Unix random() family: additive feedback x[i] += x[i - sep] on a table of
// `deg` words, returning the top 31 bits. The BSD, libc5 and glibc2 variants differ
// only in how they fill the table from the seed. random8 is the degenerate
// table-free case, a plain 31-bit congruence.

const TWO31: f64 = 2147483648.0;

/// Table filling procedure of a C library.
pub(crate) type Flavour = u8;
pub(crate) const BSD: Flavour = 0;
pub(crate) const LIBC5: Flavour = 1;
pub(crate) const GLIBC2: Flavour = 2;

#[wrappit] #[inline] fn bsd_step(x: u32) -> u32 {
    x * 1103515245 + 12345
}

/// libc5 shipped with a mistyped multiplier.
#[wrappit] #[inline] fn libc5_step(x: u32) -> u32 {
    x * 1103515145 + 12345
}

/// 16807 x mod (2**31 - 1) via Schrage's method.
#[inline] fn glibc2_step(x: u32) -> u32 {
    let s = x as i64;
    let h = s / 127773;
    let t = 16807 * (s - h * 127773) - h * 2836;
    (if t < 0 { t + 2147483647 } else { t }) as u32
}

/// random8: 31-bit congruential generator with no table.
#[derive(Clone, Default)]
pub(crate) struct Random8 {
    x: u32,
}

impl Random8 {
    pub const SIZE: usize = 4;
}

impl Engine for Random8 {
    fn set(&mut self, seed: u64) {
        self.x = seed_or(seed, 1) & 0x7fffffff;
    }

    fn get(&mut self) -> u64 {
        self.x = bsd_step(self.x) & 0x7fffffff;
        self.x as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO31
    }

    fn save(&self, w: &mut StateWriter) {
        w.u32(self.x);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.x = r.u32() & 0x7fffffff;
    }
}

/// Additive feedback table of `DEG` words with separation `SEP`.
#[derive(Clone)]
pub(crate) struct RandomTable<const DEG: usize, const SEP: usize, const FLAVOUR: Flavour> {
    i: usize,
    j: usize,
    x: [u32; DEG],
}

/// 32 bytes of state.
pub(crate) type Random32<const F: Flavour> = RandomTable<7, 3, F>;
/// 64 bytes of state.
pub(crate) type Random64<const F: Flavour> = RandomTable<15, 1, F>;
/// 128 bytes of state, the size `random()` uses by default.
pub(crate) type Random128<const F: Flavour> = RandomTable<31, 3, F>;
/// 256 bytes of state.
pub(crate) type Random256<const F: Flavour> = RandomTable<63, 1, F>;

impl<const DEG: usize, const SEP: usize, const FLAVOUR: Flavour> Default for RandomTable<DEG, SEP, FLAVOUR> {
    fn default() -> Self {
        RandomTable { i: SEP, j: 0, x: [0; DEG] }
    }
}

impl<const DEG: usize, const SEP: usize, const FLAVOUR: Flavour> RandomTable<DEG, SEP, FLAVOUR> {
    pub const SIZE: usize = 8 + 4 * DEG;
}

impl<const DEG: usize, const SEP: usize, const FLAVOUR: Flavour> Engine for RandomTable<DEG, SEP, FLAVOUR> {
    fn set(&mut self, seed: u64) {
        self.x[0] = seed_or(seed, 1);
        for i in 1 .. DEG {
            let prev = self.x[i - 1];
            self.x[i] = match FLAVOUR {
                BSD => bsd_step(prev),
                LIBC5 => libc5_step(prev),
                _ => glibc2_step(prev),
            };
        }
        self.i = SEP;
        self.j = 0;
        for _ in 0 .. 10 * DEG {
            self.get();
        }
    }

    fn get(&mut self) -> u64 {
        let (i, j) = (self.i, self.j);
        self.x[i] = self.x[i].wrapping_add(self.x[j]);
        let k = (self.x[i] >> 1) & 0x7fffffff;
        self.i = if i + 1 == DEG { 0 } else { i + 1 };
        self.j = if j + 1 == DEG { 0 } else { j + 1 };
        k as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO31
    }

    fn save(&self, w: &mut StateWriter) {
        w.index(self.i);
        w.index(self.j);
        w.words(&self.x);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.i = r.index(DEG);
        // j trails i by SEP.
        r.index(DEG);
        self.j = (self.i + DEG - SEP) % DEG;
        r.words(&mut self.x);
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::algorithms::{nth, saved_len};

    fn row<const F: Flavour>() -> [u64; 5] {
        [
            nth::<Random8>(0, 10000),
            nth::<Random32<F>>(0, 10000),
            nth::<Random64<F>>(0, 10000),
            nth::<Random128<F>>(0, 10000),
            nth::<Random256<F>>(0, 10000),
        ]
    }

    #[test] fn reference_values() {
        assert_eq!(row::<GLIBC2>(), [1910041713, 1587395585, 52848624, 1908609430, 179943260]);
        assert_eq!(row::<BSD>(), [1910041713, 1663114331, 864469165, 1457025928, 1216357476]);
        assert_eq!(row::<LIBC5>(), [1910041713, 1967452027, 2106639801, 428084942, 116367984]);
    }

    #[test] fn schrage_matches_direct_modulus() {
        for x in [1u32, 16807, 2147483646, 123456789] {
            assert_eq!(glibc2_step(x) as u64, x as u64 * 16807 % 2147483647);
        }
    }

    #[test] fn layouts() {
        assert_eq!(saved_len::<Random8>(), Random8::SIZE);
        assert_eq!(saved_len::<Random256<BSD>>(), Random256::<BSD>::SIZE);
    }
}
