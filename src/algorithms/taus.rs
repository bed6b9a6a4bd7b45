use super::{Engine, lcg, TWO32, seed_or};
use crate::codec::{StateReader, StateWriter};

// Maximally equidistributed combined Tausworthe generators by L'Ecuyer.
// taus: three components, period 2**88 (1996).
// taus2: same recurrence with seeding that avoids the degenerate component states.
// taus113: four components, period 2**113 (1999).

#[inline] fn tausworthe(s: u32, a: u32, b: u32, c: u32, d: u32) -> u32 {
    ((s & c) << d) ^ (((s << a) ^ s) >> b)
}

/// Raises a component seed above the bound that would make it degenerate.
#[inline] fn lift(s: u32, bound: u32) -> u32 {
    if s < bound { s + bound } else { s }
}

/// Three-component Tausworthe generator. `TUNED` selects the taus2 seeding.
#[derive(Clone, Default)]
pub(crate) struct Taus<const TUNED: bool> {
    s1: u32,
    s2: u32,
    s3: u32,
}

pub(crate) type Taus88 = Taus<false>;
pub(crate) type Taus2 = Taus<true>;

impl<const TUNED: bool> Taus<TUNED> {
    pub const SIZE: usize = 12;
}

impl<const TUNED: bool> Engine for Taus<TUNED> {
    fn set(&mut self, seed: u64) {
        let s = seed_or(seed, 1);
        self.s1 = lcg(s);
        if TUNED { self.s1 = lift(self.s1, 2); }
        self.s2 = lcg(self.s1);
        if TUNED { self.s2 = lift(self.s2, 8); }
        self.s3 = lcg(self.s2);
        if TUNED { self.s3 = lift(self.s3, 16); }
        // Warm up.
        for _ in 0 .. 6 { self.get(); }
    }

    fn get(&mut self) -> u64 {
        self.s1 = tausworthe(self.s1, 13, 19, 4294967294, 12);
        self.s2 = tausworthe(self.s2, 2, 25, 4294967288, 4);
        self.s3 = tausworthe(self.s3, 3, 11, 4294967280, 17);
        (self.s1 ^ self.s2 ^ self.s3) as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO32
    }

    fn save(&self, w: &mut StateWriter) {
        w.words(&[self.s1, self.s2, self.s3]);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.s1 = r.u32();
        self.s2 = r.u32();
        self.s3 = r.u32();
    }
}

/// Four-component Tausworthe generator taus113.
#[derive(Clone, Default)]
pub(crate) struct Taus113 {
    z: [u32; 4],
}

impl Taus113 {
    pub const SIZE: usize = 16;
}

impl Engine for Taus113 {
    fn set(&mut self, seed: u64) {
        let s = seed_or(seed, 1);
        let z1 = lift(lcg(s), 2);
        let z2 = lift(lcg(z1), 8);
        let z3 = lift(lcg(z2), 16);
        let z4 = lift(lcg(z3), 128);
        self.z = [z1, z2, z3, z4];
        for _ in 0 .. 10 { self.get(); }
    }

    fn get(&mut self) -> u64 {
        let z = &mut self.z;
        z[0] = ((z[0] & 4294967294) << 18) ^ (((z[0] << 6) ^ z[0]) >> 13);
        z[1] = ((z[1] & 4294967288) << 2) ^ (((z[1] << 2) ^ z[1]) >> 27);
        z[2] = ((z[2] & 4294967280) << 7) ^ (((z[2] << 13) ^ z[2]) >> 21);
        z[3] = ((z[3] & 4294967168) << 13) ^ (((z[3] << 3) ^ z[3]) >> 12);
        (z[0] ^ z[1] ^ z[2] ^ z[3]) as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / TWO32
    }

    fn save(&self, w: &mut StateWriter) {
        w.words(&self.z);
    }

    fn load(&mut self, r: &mut StateReader) {
        r.words(&mut self.z);
    }
}
