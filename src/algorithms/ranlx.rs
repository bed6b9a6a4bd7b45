use super::{Engine, TWO24, TWO32, seed_or};
use crate::codec::{StateReader, StateWriter};

// Second generation RANLUX by Lüscher (1997): the subtract-with-borrow
// recurrence runs on twelve 48-bit fractions held in doubles.
// ranlxs splits every fraction into two 24-bit single precision outputs,
// ranlxd hands out the full 48-bit fractions.
// The luxury parameter is the number of recurrence steps per block of twelve.

const NEXT: [usize; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0];
const TWO48: f64 = 281474976710656.0;
const ONE_BIT: f64 = 1.0 / TWO48;
const SONE_BIT: f64 = 1.0 / 16777216.0;
/// Adding 2**28 rounds a fraction in [0, 1) to 24 bits.
const SHIFT: f64 = 268435456.0;

/// Builds the initial fractions from a seed with a 31-bit shift register.
/// ranlxd takes the complement of every register bit.
fn seed_fractions(seed: u64, complement: bool) -> [f64; 12] {
    let mut i = seed_or(seed, 1) as i32;
    let mut xbit = [0i32; 31];
    for bit in xbit.iter_mut() {
        *bit = i % 2;
        i /= 2;
    }
    let mut ibit = 0;
    let mut jbit = 18;
    let mut xdbl = [0.0; 12];
    for fraction in xdbl.iter_mut() {
        let mut x = 0.0;
        for _ in 0 .. 48 {
            let y = if complement { (xbit[ibit] + 1) % 2 } else { xbit[ibit] };
            x += x + y as f64;
            xbit[ibit] = (xbit[ibit] + xbit[jbit]) % 2;
            ibit = (ibit + 1) % 31;
            jbit = (jbit + 1) % 31;
        }
        *fraction = ONE_BIT * x;
    }
    xdbl
}

/// Maps a restored value onto the grid of `steps` equal fractions of [0, 1).
/// Values already on the grid are unchanged.
fn on_grid(x: f64, steps: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    (x.rem_euclid(1.0) * steps).floor().min(steps - 1.0) / steps
}

/// Brings restored fractions onto the 48-bit grid and the borrow to 0 or one bit.
fn restore_fractions(xdbl: &mut [f64; 12], carry: &mut f64) {
    xdbl.iter_mut().for_each(|x| *x = on_grid(*x, TWO48));
    *carry = if *carry > 0.0 { ONE_BIT } else { 0.0 };
    // Every fraction at its maximum with a borrow pending is a fixed point.
    if *carry > 0.0 && xdbl.iter().all(|&x| x == 1.0 - ONE_BIT) {
        *carry = 0.0;
    }
}

/// One subtract-with-borrow step at lags (ir, jr). Returns the new value.
#[inline] fn step(xdbl: &mut [f64; 12], carry: &mut f64, ir: usize, jr: usize) -> f64 {
    let mut y = xdbl[jr] - xdbl[ir] - *carry;
    if y < 0.0 {
        *carry = ONE_BIT;
        y += 1.0;
    } else {
        *carry = 0.0;
    }
    xdbl[ir] = y;
    y
}

/// Twelve steps starting from ir = 0, jr = 7, with the borrow threaded through.
#[inline] fn block(xdbl: &mut [f64; 12], carry: &mut f64) {
    let mut y = xdbl[7] - xdbl[0] - *carry;
    for t in 0 .. 11 {
        let mut next = xdbl[(t + 8) % 12] - xdbl[t + 1];
        if y < 0.0 {
            next -= ONE_BIT;
            y += 1.0;
        }
        xdbl[t] = y;
        y = next;
    }
    if y < 0.0 {
        *carry = ONE_BIT;
        y += 1.0;
    } else {
        *carry = 0.0;
    }
    xdbl[11] = y;
}

/// Runs `pr` recurrence steps from position (ir, jr). Calls `fresh` with
/// each value produced after the last full block. Returns the new (ir, jr).
fn advance(xdbl: &mut [f64; 12], carry: &mut f64, mut ir: usize, mut jr: usize, pr: usize, mut fresh: impl FnMut(usize, f64)) -> (usize, usize) {
    let mut k = 0;
    while ir > 0 {
        step(xdbl, carry, ir, jr);
        ir = NEXT[ir];
        jr = NEXT[jr];
        k += 1;
    }
    while k + 12 <= pr {
        block(xdbl, carry);
        k += 12;
    }
    while k < pr {
        let y = step(xdbl, carry, ir, jr);
        fresh(ir, y);
        ir = NEXT[ir];
        jr = NEXT[jr];
        k += 1;
    }
    (ir, jr)
}

/// Single precision RANLUX. 24-bit output.
#[derive(Clone)]
pub(crate) struct RanlxS<const P: usize> {
    xdbl: [f64; 12],
    ydbl: [f64; 12],
    carry: f64,
    xflt: [f32; 24],
    ir: usize,
    jr: usize,
    is: usize,
    is_old: usize,
}

pub(crate) type Ranlxs0 = RanlxS<109>;
pub(crate) type Ranlxs1 = RanlxS<202>;
pub(crate) type Ranlxs2 = RanlxS<397>;

impl<const P: usize> Default for RanlxS<P> {
    fn default() -> Self {
        RanlxS { xdbl: [0.0; 12], ydbl: [0.0; 12], carry: 0.0, xflt: [0.0; 24], ir: 0, jr: 7, is: 23, is_old: 0 }
    }
}

impl<const P: usize> RanlxS<P> {
    pub const SIZE: usize = 8 * 12 + 8 * 12 + 8 + 4 * 24 + 4 * 4;

    fn increment_state(&mut self) {
        let ydbl = &mut self.ydbl;
        let (ir, jr) = advance(&mut self.xdbl, &mut self.carry, self.ir, self.jr, P, |i, y| ydbl[i] = y + SHIFT);

        self.ydbl[ir] = self.xdbl[ir] + SHIFT;
        let mut k = NEXT[ir];
        while k > 0 {
            self.ydbl[k] = self.xdbl[k] + SHIFT;
            k = NEXT[k];
        }

        // Split each 48-bit fraction into its high and low 24 bits.
        for k in 0 .. 12 {
            let x = self.xdbl[k];
            let mut y2 = self.ydbl[k] - SHIFT;
            if y2 > x {
                y2 -= SONE_BIT;
            }
            let y1 = (x - y2) * TWO24;
            self.xflt[2 * k] = y1 as f32;
            self.xflt[2 * k + 1] = y2 as f32;
        }

        self.ir = ir;
        self.jr = jr;
        self.is = 2 * ir;
        self.is_old = 2 * ir;
    }
}

impl<const P: usize> Engine for RanlxS<P> {
    fn set(&mut self, seed: u64) {
        self.xdbl = seed_fractions(seed, false);
        self.carry = 0.0;
        self.ir = 0;
        self.jr = 7;
        self.is = 23;
        self.is_old = 0;
    }

    fn get(&mut self) -> u64 {
        (self.get_double() * TWO24) as u64
    }

    fn get_double(&mut self) -> f64 {
        self.is = (self.is + 1) % 24;
        if self.is == self.is_old {
            self.increment_state();
        }
        self.xflt[self.is] as f64
    }

    fn save(&self, w: &mut StateWriter) {
        self.xdbl.iter().for_each(|&x| w.f64(x));
        self.ydbl.iter().for_each(|&y| w.f64(y));
        w.f64(self.carry);
        self.xflt.iter().for_each(|&x| w.f32(x));
        w.index(self.ir);
        w.index(self.jr);
        w.index(self.is);
        w.index(self.is_old);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.xdbl.iter_mut().for_each(|x| *x = r.f64());
        // ydbl is scratch, rebuilt before it is read.
        self.ydbl.iter_mut().for_each(|y| *y = r.f64());
        self.carry = r.f64();
        restore_fractions(&mut self.xdbl, &mut self.carry);
        self.xflt.iter_mut().for_each(|x| *x = on_grid(r.f32() as f64, TWO24) as f32);
        self.ir = r.index(12);
        // The lags always sit 7 apart.
        r.index(12);
        self.jr = (self.ir + 7) % 12;
        self.is = r.index(24);
        self.is_old = r.index(24);
    }
}

/// Double precision RANLUX. 32-bit integer output, 48-bit `get_double`.
#[derive(Clone)]
pub(crate) struct RanlxD<const P: usize> {
    xdbl: [f64; 12],
    carry: f64,
    ir: usize,
    jr: usize,
    ir_old: usize,
}

pub(crate) type Ranlxd1 = RanlxD<202>;
pub(crate) type Ranlxd2 = RanlxD<397>;

impl<const P: usize> Default for RanlxD<P> {
    fn default() -> Self {
        RanlxD { xdbl: [0.0; 12], carry: 0.0, ir: 11, jr: 7, ir_old: 0 }
    }
}

impl<const P: usize> RanlxD<P> {
    pub const SIZE: usize = 8 * 12 + 8 + 4 * 3;

    fn increment_state(&mut self) {
        let (ir, jr) = advance(&mut self.xdbl, &mut self.carry, self.ir, self.jr, P, |_, _| ());
        self.ir = ir;
        self.ir_old = ir;
        self.jr = jr;
    }
}

impl<const P: usize> Engine for RanlxD<P> {
    fn set(&mut self, seed: u64) {
        self.xdbl = seed_fractions(seed, true);
        self.carry = 0.0;
        self.ir = 11;
        self.jr = 7;
        self.ir_old = 0;
    }

    fn get(&mut self) -> u64 {
        (self.get_double() * TWO32) as u64
    }

    fn get_double(&mut self) -> f64 {
        self.ir = NEXT[self.ir];
        if self.ir == self.ir_old {
            self.increment_state();
        }
        self.xdbl[self.ir]
    }

    fn save(&self, w: &mut StateWriter) {
        self.xdbl.iter().for_each(|&x| w.f64(x));
        w.f64(self.carry);
        w.index(self.ir);
        w.index(self.jr);
        w.index(self.ir_old);
    }

    fn load(&mut self, r: &mut StateReader) {
        self.xdbl.iter_mut().for_each(|x| *x = r.f64());
        self.carry = r.f64();
        restore_fractions(&mut self.xdbl, &mut self.carry);
        self.ir = r.index(12);
        r.index(12);
        self.ir_old = r.index(12);
        // The next block starts at ir_old, with its partner lag 7 ahead.
        self.jr = (self.ir_old + 7) % 12;
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::algorithms::{nth, saved_len};

    #[test] fn reference_values() {
        assert_eq!(nth::<Ranlxs0>(1, 10000), 11904320);
        assert_eq!(nth::<Ranlxs1>(1, 10000), 8734328);
        assert_eq!(nth::<Ranlxs2>(1, 10000), 6843140);
        assert_eq!(nth::<Ranlxd1>(1, 10000), 1998227290);
        assert_eq!(nth::<Ranlxd2>(1, 10000), 3949287736);
    }

    #[test] fn double_output_has_48_bit_resolution() {
        let mut e = Ranlxd1::default();
        e.set(7);
        for _ in 0 .. 1000 {
            let u = e.get_double();
            assert!((0.0 .. 1.0).contains(&u));
            assert_eq!((u * 281474976710656.0).fract(), 0.0);
        }
    }

    #[test] fn single_output_has_24_bit_resolution() {
        let mut e = Ranlxs0::default();
        e.set(7);
        for _ in 0 .. 1000 {
            let u = e.get_double();
            assert!((0.0 .. 1.0).contains(&u));
            assert_eq!((u * TWO24).fract(), 0.0);
        }
    }

    fn restored<E: Engine + Default>(bytes: &[u8]) -> E {
        let mut e = E::default();
        e.load(&mut StateReader::new(bytes));
        e
    }

    #[test] fn restored_state_stays_in_unit_interval() {
        for fill in [0x00, 0x7f, 0x80, 0xff] {
            let mut d: Ranlxd1 = restored(&vec![fill; Ranlxd1::SIZE]);
            let mut s: Ranlxs0 = restored(&vec![fill; Ranlxs0::SIZE]);
            for _ in 0 .. 1000 {
                assert!((0.0 .. 1.0).contains(&d.get_double()), "fill {:#x}", fill);
                assert!(d.get() < 1 << 32, "fill {:#x}", fill);
                assert!((0.0 .. 1.0).contains(&s.get_double()), "fill {:#x}", fill);
                assert!(s.get() < 1 << 24, "fill {:#x}", fill);
            }
        }
    }

    #[test] fn restore_keeps_genuine_states_exact() {
        let mut e = Ranlxs1::default();
        e.set(3);
        for _ in 0 .. 101 { e.get(); }
        let mut w = StateWriter::with_capacity(Ranlxs1::SIZE);
        e.save(&mut w);
        let mut f: Ranlxs1 = restored(&w.into_bytes());
        assert!((0 .. 1000).all(|_| e.get() == f.get()));

        let mut e = Ranlxd2::default();
        e.set(3);
        for _ in 0 .. 101 { e.get(); }
        let mut w = StateWriter::with_capacity(Ranlxd2::SIZE);
        e.save(&mut w);
        let mut f: Ranlxd2 = restored(&w.into_bytes());
        assert!((0 .. 1000).all(|_| e.get() == f.get()));
    }

    #[test] fn saturated_state_with_borrow_does_not_stick() {
        let mut w = StateWriter::with_capacity(Ranlxd1::SIZE);
        (0 .. 12).for_each(|_| w.f64(1.0 - ONE_BIT));
        w.f64(ONE_BIT);
        w.index(11);
        w.index(7);
        w.index(0);
        let mut e: Ranlxd1 = restored(&w.into_bytes());
        let first = e.get();
        assert!((0 .. 100).any(|_| e.get() != first));
    }

    #[test] fn layouts() {
        assert_eq!(saved_len::<Ranlxs2>(), Ranlxs2::SIZE);
        assert_eq!(saved_len::<Ranlxd2>(), Ranlxd2::SIZE);
    }
}
