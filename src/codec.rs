// Flat state layout shared by all generators.
// Fields are packed back to back in native byte order with no padding,
// so a dump is only portable between machines of the same endianness.

/// Accumulates the serialized form of a generator state.
pub(crate) struct StateWriter {
    bytes: Vec<u8>,
}

impl StateWriter {
    pub fn with_capacity(size: usize) -> Self {
        StateWriter { bytes: Vec::with_capacity(size) }
    }

    pub fn u16(&mut self, x: u16) {
        self.bytes.extend_from_slice(&x.to_ne_bytes());
    }

    pub fn u32(&mut self, x: u32) {
        self.bytes.extend_from_slice(&x.to_ne_bytes());
    }

    /// Writes an index or counter as a 32-bit word.
    pub fn index(&mut self, x: usize) {
        self.u32(x as u32);
    }

    pub fn f32(&mut self, x: f32) {
        self.bytes.extend_from_slice(&x.to_ne_bytes());
    }

    pub fn f64(&mut self, x: f64) {
        self.bytes.extend_from_slice(&x.to_ne_bytes());
    }

    pub fn words(&mut self, xs: &[u32]) {
        for &x in xs {
            self.u32(x);
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Reads fields back in the order a `StateWriter` produced them.
/// Reading past the end yields zero bytes.
pub(crate) struct StateReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> StateReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        StateReader { bytes, position: 0 }
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut field = [0u8; N];
        let start = self.position.min(self.bytes.len());
        let end = (self.position + N).min(self.bytes.len());
        field[.. end - start].copy_from_slice(&self.bytes[start .. end]);
        self.position += N;
        field
    }

    pub fn u16(&mut self) -> u16 {
        u16::from_ne_bytes(self.take())
    }

    pub fn u32(&mut self) -> u32 {
        u32::from_ne_bytes(self.take())
    }

    /// Reads an index and reduces it into `0 .. bound` so that foreign bytes can never index out of bounds.
    pub fn index(&mut self, bound: usize) -> usize {
        self.u32() as usize % bound
    }

    pub fn f32(&mut self) -> f32 {
        f32::from_ne_bytes(self.take())
    }

    pub fn f64(&mut self) -> f64 {
        f64::from_ne_bytes(self.take())
    }

    pub fn words(&mut self, xs: &mut [u32]) {
        for x in xs.iter_mut() {
            *x = self.u32();
        }
    }
}
