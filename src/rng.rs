use log::{debug, trace, warn};
use rand_core::{Error, RngCore};
use crate::algorithms::Engine;
use crate::catalog::{self, RngType, DEFAULT_SEED};
use crate::codec::{StateReader, StateWriter};
use crate::error::{Result, RngError};
use crate::sample::{check_range, scaled_int, word_bits};

/// An instantiated generator: the state of one algorithm from the catalog.
///
/// Each call advances the state, so a single `Rng` is used from one thread at a time.
/// Independent generators, including clones, share nothing and can run in parallel.
pub struct Rng {
    ty: &'static RngType,
    engine: Box<dyn Engine>,
}

// As recommended, this Debug implementation does not expose internal state.
impl core::fmt::Debug for Rng {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Rng {{ type: {} }}", self.ty.name())
    }
}

impl core::fmt::Display for Rng {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.ty.name())
    }
}

impl Rng {
    /// Allocates a generator of the given type, seeded with the default seed.
    pub fn new(ty: &'static RngType) -> Self {
        Rng::with_seed(ty, DEFAULT_SEED)
    }

    /// Allocates a generator of the given type and seeds it.
    pub fn with_seed(ty: &'static RngType, seed: u64) -> Self {
        let mut engine = ty.engine();
        engine.set(seed);
        debug!("allocated {} generator ({} bytes of state), seed {}", ty.name(), ty.size(), seed);
        Rng { ty, engine }
    }

    /// Allocates a generator by catalog name.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Rng::new(catalog::lookup(name)?))
    }

    /// Reinitializes the state from a seed. Seed 0 selects the algorithm's own default.
    pub fn set(&mut self, seed: u64) {
        debug!("seeding {} with {}", self.ty.name(), seed);
        self.engine.set(seed);
    }

    /// Returns the next raw value, in `min() ..= max()`.
    #[inline]
    pub fn get(&mut self) -> u64 {
        self.engine.get()
    }

    /// Returns a double uniformly distributed in [0, 1).
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.engine.get_double()
    }

    /// Returns a double uniformly distributed in (0, 1). Zeros are redrawn.
    pub fn uniform_pos(&mut self) -> f64 {
        loop {
            let x = self.uniform();
            if x != 0.0 {
                return x;
            }
        }
    }

    /// Returns an integer uniformly distributed in `0 .. n`, without modulo bias.
    /// Fails with `InvalidRange` if `n` is zero or exceeds the number of raw values.
    pub fn uniform_int(&mut self, n: u64) -> Result<u64> {
        if let Err(e) = check_range(n, self.ty.range()) {
            warn!("{}: uniform_int rejected: {}", self.ty.name(), e);
            return Err(e);
        }
        Ok(self.draw_int(n))
    }

    /// `uniform_int` after the range has been checked.
    fn draw_int(&mut self, n: u64) -> u64 {
        let (offset, range) = (self.ty.min(), self.ty.range());
        let engine = &mut self.engine;
        scaled_int(offset, range, n, || engine.get())
    }

    /// Returns `len` raw values.
    pub fn get_vec(&mut self, len: usize) -> Vec<u64> {
        (0 .. len).map(|_| self.get()).collect()
    }

    /// Returns `len` doubles in [0, 1).
    pub fn uniform_vec(&mut self, len: usize) -> Vec<f64> {
        (0 .. len).map(|_| self.uniform()).collect()
    }

    /// Returns `len` integers in `0 .. n`.
    pub fn uniform_int_vec(&mut self, n: u64, len: usize) -> Result<Vec<u64>> {
        self.uniform_int(n).map(|first| {
            let mut v = Vec::with_capacity(len);
            if len > 0 {
                v.push(first);
                v.extend((1 .. len).map(|_| self.draw_int(n)));
            }
            v
        })
    }

    /// Fills `dest` with raw values.
    pub fn fill(&mut self, dest: &mut [u64]) {
        dest.iter_mut().for_each(|x| *x = self.get());
    }

    /// Fills `dest` with doubles in [0, 1).
    pub fn fill_uniform(&mut self, dest: &mut [f64]) {
        dest.iter_mut().for_each(|x| *x = self.uniform());
    }

    pub fn rng_type(&self) -> &'static RngType {
        self.ty
    }

    pub fn name(&self) -> &'static str {
        self.ty.name()
    }

    pub fn min(&self) -> u64 {
        self.ty.min()
    }

    pub fn max(&self) -> u64 {
        self.ty.max()
    }

    /// Length of the serialized state in bytes.
    pub fn size(&self) -> usize {
        self.ty.size()
    }

    /// Overwrites this state with a copy of `src`. Both must be of the same type.
    pub fn copy_from(&mut self, src: &Rng) -> Result<()> {
        if self.ty != src.ty {
            return Err(RngError::TypeMismatch { expected: self.ty.name(), found: src.ty.name() });
        }
        debug!("copying {} state", self.ty.name());
        self.engine = src.engine.clone_box();
        Ok(())
    }

    /// Releases the generator now. Dropping it has the same effect at scope exit.
    pub fn release(self) {}

    /// Serialized form of the state, exactly `size()` bytes.
    pub(crate) fn save_state(&self) -> Vec<u8> {
        let mut w = StateWriter::with_capacity(self.size());
        self.engine.save(&mut w);
        debug_assert_eq!(w.len(), self.size());
        w.into_bytes()
    }

    /// Replaces the state from `size()` serialized bytes.
    pub(crate) fn load_state(&mut self, bytes: &[u8]) {
        self.engine.load(&mut StateReader::new(bytes));
    }

    /// Draws `bits` uniform bits, assembled from as many raw draws as needed.
    fn next_bits(&mut self, bits: u32) -> u64 {
        let word = word_bits(self.ty.range());
        let mut x = 0;
        let mut filled = 0;
        while filled < bits {
            let take = word.min(bits - filled);
            x |= self.draw_int(1 << take) << filled;
            filled += take;
        }
        x
    }
}

impl Clone for Rng {
    fn clone(&self) -> Self {
        debug!("cloning {} state", self.ty.name());
        Rng { ty: self.ty, engine: self.engine.clone_box() }
    }
}

impl Drop for Rng {
    fn drop(&mut self) {
        trace!("releasing {} generator", self.ty.name());
    }
}

impl RngCore for Rng {
    fn next_u32(&mut self) -> u32 {
        self.next_bits(32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_bits(64)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = dest.len();
        let mut i = 0;
        while i < bytes {
            let x = self.next_u64();
            let j = bytes.min(i + 8);
            // Always use Little-Endian.
            dest[i .. j].copy_from_slice(&x.to_le_bytes()[0 .. (j - i)]);
            i = j;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
