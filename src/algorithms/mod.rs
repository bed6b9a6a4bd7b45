// Native ports of the generator algorithms. Each one reproduces the
// output stream of the GSL generator of the same name.

use wrapping_arithmetic::wrappit;
use crate::codec::{StateReader, StateWriter};

pub mod cmrg;
pub mod congruential;
pub mod coveyou;
pub mod fishman2x;
pub mod gfsr4;
pub mod knuthran;
pub mod knuthran2;
pub mod mrg;
pub mod mt19937;
pub mod r250;
pub mod rand48;
pub mod random;
pub mod ranf;
pub mod ranlux;
pub mod ranlx;
pub mod ranmar;
pub mod slatec;
pub mod taus;
pub mod tt800;
pub mod uni;
pub mod zuf;

/// The primitive operations every generator algorithm provides.
pub(crate) trait Engine: EngineClone + Send {
    /// Reinitializes the state from a seed. Zero selects the algorithm's own default seed.
    fn set(&mut self, seed: u64);

    /// Advances the state and returns the next raw value.
    fn get(&mut self) -> u64;

    /// Advances the state and returns a double in [0, 1) via the algorithm's own transform.
    fn get_double(&mut self) -> f64;

    /// Appends the state in its flat serialized layout.
    fn save(&self, w: &mut StateWriter);

    /// Overwrites the state from its flat serialized layout.
    fn load(&mut self, r: &mut StateReader);
}

pub(crate) trait EngineClone {
    fn clone_box(&self) -> Box<dyn Engine>;
}

impl<T: Engine + Clone + 'static> EngineClone for T {
    fn clone_box(&self) -> Box<dyn Engine> {
        Box::new(self.clone())
    }
}

/// Allocates a fresh, unseeded engine.
pub(crate) fn boxed<E: Engine + Default + 'static>() -> Box<dyn Engine> {
    Box::new(E::default())
}

/// 2^32 as a double, the divisor for full-range 32-bit generators.
pub(crate) const TWO32: f64 = 4294967296.0;

/// 2^24 as a double, the divisor for 24-bit generators.
pub(crate) const TWO24: f64 = 16777216.0;

/// Reduces a seed to the 32-bit word every algorithm seeds from.
#[inline]
pub(crate) fn seed32(seed: u64) -> u32 {
    seed as u32
}

/// Reduces a seed to 32 bits and maps zero to `default`.
#[inline]
pub(crate) fn seed_or(seed: u64, default: u32) -> u32 {
    match seed32(seed) {
        0 => default,
        s => s,
    }
}

/// The 69069 congruence mod 2**32 that most generators seed their tables from.
#[wrappit] #[inline]
pub(crate) fn lcg(n: u32) -> u32 {
    n * 69069
}

/// Seeds a fresh engine and returns its `n`-th output (1-based).
#[cfg(test)]
pub(crate) fn nth<E: Engine + Default>(seed: u64, n: usize) -> u64 {
    let mut e = E::default();
    e.set(seed);
    for _ in 1 .. n {
        e.get();
    }
    e.get()
}

/// Serialized length of a freshly seeded engine.
#[cfg(test)]
pub(crate) fn saved_len<E: Engine + Default>() -> usize {
    let mut e = E::default();
    e.set(1);
    let mut w = StateWriter::with_capacity(0);
    e.save(&mut w);
    w.len()
}
