use super::{Engine, seed_or};
use crate::codec::{StateReader, StateWriter};

// Knuth's lagged Fibonacci generator ran_array, x[n] = (x[n-100] - x[n-37]) mod 2**30,
// from Seminumerical Algorithms, 3rd ed., section 3.6.
// Values are produced in batches of 1009 and handed out one at a time.
// The 2002 revision changed the initialization to warm up the generator and
// to make nearby seeds produce unrelated streams.

const KK: usize = 100;
const LL: usize = 37;
const MM: u32 = 1 << 30;
const TT: u32 = 70;
const BUFLEN: usize = 1009;

pub(crate) const DEFAULT_SEED: u32 = 314159;

#[inline] fn mod_diff(x: u32, y: u32) -> u32 {
    x.wrapping_sub(y) & (MM - 1)
}

#[inline] fn evenize(x: u32) -> u32 {
    x & (MM - 2)
}

/// Fills `aa` with fresh values and advances the lag table `ran_x`.
fn ran_array(aa: &mut [u32], ran_x: &mut [u32; KK]) {
    let n = aa.len();
    aa[.. KK].copy_from_slice(&ran_x[..]);
    for j in KK .. n {
        aa[j] = mod_diff(aa[j - KK], aa[j - LL]);
    }
    let mut j = n;
    for i in 0 .. LL {
        ran_x[i] = mod_diff(aa[j - KK], aa[j - LL]);
        j += 1;
    }
    for i in LL .. KK {
        ran_x[i] = mod_diff(aa[j - KK], ran_x[i - LL]);
        j += 1;
    }
}

/// Fills the bootstrap buffer with a doubling sequence derived from `ss`.
fn bootstrap(x: &mut [u32; KK + KK - 1], mut ss: u32) {
    for xj in x[.. KK].iter_mut() {
        *xj = ss;
        ss <<= 1;
        if ss >= MM {
            ss -= MM - 2;
        }
    }
    x[1] += 1;
}

/// Splits the bootstrap buffer into the lag table.
fn unpack(x: &[u32; KK + KK - 1], ran_x: &mut [u32; KK]) {
    for j in 0 .. LL {
        ran_x[j + KK - LL] = x[j];
    }
    for j in LL .. KK {
        ran_x[j - LL] = x[j];
    }
}

fn ran_start_2002(seed: u32, ran_x: &mut [u32; KK]) {
    let mut x = [0u32; KK + KK - 1];
    bootstrap(&mut x, seed.wrapping_add(2) & (MM - 2));
    let mut ss = seed & (MM - 1);
    let mut t = TT - 1;
    while t > 0 {
        // Square.
        for j in (1 .. KK).rev() {
            x[j + j] = x[j];
            x[j + j - 1] = 0;
        }
        for j in (KK ..= KK + KK - 2).rev() {
            x[j - (KK - LL)] = mod_diff(x[j - (KK - LL)], x[j]);
            x[j - KK] = mod_diff(x[j - KK], x[j]);
        }
        // Multiply by z.
        if ss & 1 == 1 {
            for j in (1 ..= KK).rev() {
                x[j] = x[j - 1];
            }
            x[0] = x[KK];
            x[LL] = mod_diff(x[LL], x[KK]);
        }
        if ss != 0 { ss >>= 1; } else { t -= 1; }
    }
    unpack(&x, ran_x);
    for _ in 0 .. 10 {
        ran_array(&mut x, ran_x);
    }
}

fn ran_start_1997(seed: u32, ran_x: &mut [u32; KK]) {
    let mut x = [0u32; KK + KK - 1];
    bootstrap(&mut x, evenize(seed.wrapping_add(2)));
    let mut ss = seed & (MM - 1);
    let mut t = TT - 1;
    while t > 0 {
        for j in (1 .. KK).rev() {
            x[j + j] = x[j];
        }
        for j in (KK - LL + 1 ..= KK + KK - 2).rev().step_by(2) {
            x[KK + KK - 1 - j] = evenize(x[j]);
        }
        for j in (KK ..= KK + KK - 2).rev() {
            if x[j] & 1 == 1 {
                x[j - (KK - LL)] = mod_diff(x[j - (KK - LL)], x[j]);
                x[j - KK] = mod_diff(x[j - KK], x[j]);
            }
        }
        if ss & 1 == 1 {
            for j in (1 ..= KK).rev() {
                x[j] = x[j - 1];
            }
            x[0] = x[KK];
            if x[KK] & 1 == 1 {
                x[LL] = mod_diff(x[LL], x[KK]);
            }
        }
        if ss != 0 { ss >>= 1; } else { t -= 1; }
    }
    unpack(&x, ran_x);
}

/// ran_array generator. `VERSION` selects the 1997 or 2002 initialization.
#[derive(Clone)]
pub(crate) struct KnuthRan<const VERSION: u16> {
    i: usize,
    aa: Vec<u32>,
    ran_x: [u32; KK],
}

pub(crate) type Knuthran = KnuthRan<1997>;
pub(crate) type Knuthran2002 = KnuthRan<2002>;

impl<const VERSION: u16> Default for KnuthRan<VERSION> {
    fn default() -> Self {
        KnuthRan { i: 0, aa: vec![0; BUFLEN], ran_x: [0; KK] }
    }
}

impl<const VERSION: u16> KnuthRan<VERSION> {
    pub const SIZE: usize = 4 + 4 * BUFLEN + 4 * KK;
}

impl<const VERSION: u16> Engine for KnuthRan<VERSION> {
    fn set(&mut self, seed: u64) {
        let s = seed_or(seed, DEFAULT_SEED);
        if VERSION == 1997 {
            ran_start_1997(s, &mut self.ran_x);
        } else {
            ran_start_2002(s, &mut self.ran_x);
        }
        self.i = 0;
    }

    fn get(&mut self) -> u64 {
        if self.i == 0 {
            ran_array(&mut self.aa, &mut self.ran_x);
        }
        let v = self.aa[self.i];
        self.i = (self.i + 1) % BUFLEN;
        v as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / MM as f64
    }

    fn save(&self, w: &mut StateWriter) {
        w.index(self.i);
        w.words(&self.aa);
        w.words(&self.ran_x);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.i = r.index(BUFLEN);
        r.words(&mut self.aa);
        r.words(&mut self.ran_x);
        for x in self.aa.iter_mut().chain(self.ran_x.iter_mut()) {
            *x &= MM - 1;
        }
    }
}
