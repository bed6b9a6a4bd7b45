use super::{Engine, seed_or};
use crate::codec::{StateReader, StateWriter};

// Fishman and L'Ecuyer's combination of two multiplicative congruences
// (fishman20 and lecuyer21), period about 2**62.

const MF: u64 = 2147483647;
const AF: u64 = 48271;
const ML: u64 = 2147483399;
const AL: u64 = 40692;

#[derive(Clone)]
pub(crate) struct Fishman2x {
    x: u32,
    y: u32,
}

impl Default for Fishman2x {
    fn default() -> Self {
        Fishman2x { x: 1, y: 1 }
    }
}

impl Fishman2x {
    pub const SIZE: usize = 8;
}

/// Reduces into the multiplicative group, where zero is not allowed.
#[inline] fn nonzero_mod(s: u32, m: u64) -> u32 {
    match s as u64 % m {
        0 => 1,
        r => r as u32,
    }
}

impl Engine for Fishman2x {
    fn set(&mut self, seed: u64) {
        let s = seed_or(seed, 1);
        self.x = nonzero_mod(s, MF);
        self.y = nonzero_mod(s, ML);
    }

    fn get(&mut self) -> u64 {
        let x = AF * self.x as u64 % MF;
        let y = AL * self.y as u64 % ML;
        self.x = x as u32;
        self.y = y as u32;
        if x > y { x - y } else { MF + x - y }
    }

    fn get_double(&mut self) -> f64 {
        // The combination can reach MF itself.
        self.get() as f64 / (MF + 1) as f64
    }

    fn save(&self, w: &mut StateWriter) {
        w.u32(self.x);
        w.u32(self.y);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.x = nonzero_mod(r.u32(), MF);
        self.y = nonzero_mod(r.u32(), ML);
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::algorithms::{nth, saved_len};

    #[test] fn reference_value() {
        assert_eq!(nth::<Fishman2x>(1, 10000), 540133597);
    }

    #[test] fn seed_reducing_to_zero_is_lifted() {
        let mut e = Fishman2x::default();
        e.set(MF);
        assert_eq!((e.x, e.y), (1, (MF % ML) as u32));
        assert!((0 .. 1000).all(|_| e.get() >= 1));
    }

    #[test] fn layout() {
        assert_eq!(saved_len::<Fishman2x>(), Fishman2x::SIZE);
    }
}
