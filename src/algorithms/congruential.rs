use super::{Engine, seed32};
use crate::codec::{StateReader, StateWriter};

// Single linear congruential generators x -> (a x + c) mod m.
// Every modulus here fits in 33 bits and every multiplier in 31, so the
// product is exact in 64-bit arithmetic.

/// A linear congruential generator with compile time parameters.
/// Purely multiplicative ones (C = 0) never sit at zero.
#[derive(Clone, Default)]
pub(crate) struct Congruential<const A: u64, const C: u64, const M: u64> {
    x: u32,
}

/// BSD `rand()`.
pub(crate) type Rand = Congruential<1103515245, 12345, 2147483648>;
/// IBM RANDU. Badly correlated in three dimensions.
pub(crate) type Randu = Congruential<65539, 0, 2147483648>;
/// Park and Miller's minimal standard.
pub(crate) type Minstd = Congruential<16807, 0, 2147483647>;
/// VAX VMS `MTH$RANDOM`.
pub(crate) type Vax = Congruential<69069, 1, 4294967296>;
/// INMOS Transputer generator.
pub(crate) type Transputer = Congruential<1664525, 0, 4294967296>;
pub(crate) type Borosh13 = Congruential<1812433253, 0, 4294967296>;
pub(crate) type Fishman18 = Congruential<62089911, 0, 2147483647>;
pub(crate) type Fishman20 = Congruential<48271, 0, 2147483647>;
pub(crate) type Lecuyer21 = Congruential<40692, 0, 2147483399>;
pub(crate) type Waterman14 = Congruential<1566083941, 0, 4294967296>;

impl<const A: u64, const C: u64, const M: u64> Congruential<A, C, M> {
    pub const SIZE: usize = 4;
}

impl<const A: u64, const C: u64, const M: u64> Engine for Congruential<A, C, M> {
    fn set(&mut self, seed: u64) {
        let x = seed32(seed) as u64 % M;
        self.x = if C == 0 && x == 0 { 1 } else { x as u32 };
    }

    fn get(&mut self) -> u64 {
        let x = (A * self.x as u64 + C) % M;
        self.x = x as u32;
        x
    }

    fn get_double(&mut self) -> f64 {
        self.get() as f64 / M as f64
    }

    fn save(&self, w: &mut StateWriter) {
        w.u32(self.x);
    }

    fn load(&mut self, r: &mut StateReader) {
        let x = r.u32() as u64 % M;
        self.x = if C == 0 && x == 0 { 1 } else { x as u32 };
    }
}
