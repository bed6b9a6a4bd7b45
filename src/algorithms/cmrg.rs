use super::{Engine, lcg, seed_or};
use crate::codec::{StateReader, StateWriter};

// Combined multiple recursive generator by L'Ecuyer (1996).
// x[n] = (a2 x[n-2] + a3 x[n-3]) mod m1
// y[n] = (b1 y[n-1] + b3 y[n-3]) mod m2
// z[n] = (x[n] - y[n]) mod m1, period about 2**185.

const M1: i64 = 2147483647;
const M2: i64 = 2145483479;
const A2: i64 = 63308;
const A3: i64 = -183326;
const B1: i64 = 86098;
const B3: i64 = -539608;

#[derive(Clone, Default)]
pub(crate) struct Cmrg {
    x: [u32; 3],
    y: [u32; 3],
}

impl Cmrg {
    pub const SIZE: usize = 24;
}

impl Engine for Cmrg {
    fn set(&mut self, seed: u64) {
        let mut s = seed_or(seed, 1);
        for x in self.x.iter_mut() {
            s = lcg(s);
            *x = (s as i64 % M1) as u32;
        }
        for y in self.y.iter_mut() {
            s = lcg(s);
            *y = (s as i64 % M2) as u32;
        }
        // Warm up until every lag holds a generated value.
        for _ in 0 .. 7 { self.get(); }
    }

    fn get(&mut self) -> u64 {
        let [x1, x2, x3] = self.x.map(i64::from);
        let xn = (A2 * x2 + A3 * x3).rem_euclid(M1);
        self.x = [xn as u32, x1 as u32, x2 as u32];

        let [y1, y2, y3] = self.y.map(i64::from);
        let yn = (B1 * y1 + B3 * y3).rem_euclid(M2);
        self.y = [yn as u32, y1 as u32, y2 as u32];

        (if xn < yn { xn - yn + M1 } else { xn - yn }) as u64
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / M1 as f64
    }

    fn save(&self, w: &mut StateWriter) {
        w.words(&self.x);
        w.words(&self.y);
    }

    fn load(&mut self, r: &mut StateReader) {
        r.words(&mut self.x);
        r.words(&mut self.y);
    }
}
