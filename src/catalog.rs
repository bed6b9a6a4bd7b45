use std::collections::BTreeMap;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use crate::algorithms::{Engine, boxed};
use crate::algorithms::cmrg::Cmrg;
use crate::algorithms::congruential::*;
use crate::algorithms::coveyou::Coveyou;
use crate::algorithms::fishman2x::Fishman2x;
use crate::algorithms::gfsr4::Gfsr4;
use crate::algorithms::knuthran::{Knuthran, Knuthran2002};
use crate::algorithms::knuthran2::Knuthran2;
use crate::algorithms::mrg::Mrg;
use crate::algorithms::mt19937::{Mt19937, Mt19937_1998, Mt19937_1999};
use crate::algorithms::r250::R250;
use crate::algorithms::rand48::Rand48;
use crate::algorithms::random::*;
use crate::algorithms::ranf::Ranf;
use crate::algorithms::ranlux::{Ranlux223, Ranlux389};
use crate::algorithms::ranlx::{Ranlxd1, Ranlxd2, Ranlxs0, Ranlxs1, Ranlxs2};
use crate::algorithms::ranmar::Ranmar;
use crate::algorithms::slatec::Slatec;
use crate::algorithms::taus::{Taus113, Taus2, Taus88};
use crate::algorithms::tt800::Tt800;
use crate::algorithms::uni::{Uni16, Uni32};
use crate::algorithms::zuf::Zuf;
use crate::error::{Result, RngError};

/// Immutable descriptor of one generator algorithm.
/// Descriptors live in statics for the lifetime of the process.
pub struct RngType {
    name: &'static str,
    min: u64,
    max: u64,
    size: usize,
    create: fn() -> Box<dyn Engine>,
}

impl RngType {
    const fn new(name: &'static str, min: u64, max: u64, size: usize, create: fn() -> Box<dyn Engine>) -> Self {
        RngType { name, min, max, size, create }
    }

    /// Looks up a generator by its catalog name.
    pub fn lookup(name: &str) -> Result<&'static RngType> {
        TYPES.iter().copied().find(|t| t.name == name).ok_or_else(|| RngError::NotFound { name: name.into() })
    }

    /// Catalog name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Smallest raw value.
    pub fn min(&self) -> u64 {
        self.min
    }

    /// Largest raw value.
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Length of the serialized state in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of distinct raw values, `max - min + 1`.
    pub fn range(&self) -> u128 {
        (self.max - self.min) as u128 + 1
    }

    pub(crate) fn engine(&self) -> Box<dyn Engine> {
        (self.create)()
    }

    /// Serializable summary of this descriptor.
    pub fn info(&self) -> RngInfo {
        RngInfo { name: self.name.into(), min: self.min, max: self.max, size: self.size }
    }
}

impl PartialEq for RngType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for RngType {}

impl core::fmt::Debug for RngType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("RngType")
            .field("name", &self.name)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("size", &self.size)
            .finish()
    }
}

impl core::fmt::Display for RngType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name)
    }
}

/// Plain data summary of a catalog entry.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RngInfo {
    pub name: String,
    pub min: u64,
    pub max: u64,
    pub size: usize,
}

const U32: u64 = 0xffffffff;
const U31: u64 = 0x7fffffff;
const U24: u64 = 0xffffff;

pub static BOROSH13: RngType = RngType::new("borosh13", 1, U32, Borosh13::SIZE, boxed::<Borosh13>);
pub static CMRG: RngType = RngType::new("cmrg", 0, 2147483646, Cmrg::SIZE, boxed::<Cmrg>);
pub static COVEYOU: RngType = RngType::new("coveyou", 1, U32 - 1, Coveyou::SIZE, boxed::<Coveyou>);
pub static FISHMAN18: RngType = RngType::new("fishman18", 1, 2147483646, Fishman18::SIZE, boxed::<Fishman18>);
pub static FISHMAN20: RngType = RngType::new("fishman20", 1, 2147483646, Fishman20::SIZE, boxed::<Fishman20>);
pub static FISHMAN2X: RngType = RngType::new("fishman2x", 1, 2147483647, Fishman2x::SIZE, boxed::<Fishman2x>);
pub static GFSR4: RngType = RngType::new("gfsr4", 0, U32, Gfsr4::SIZE, boxed::<Gfsr4>);
pub static KNUTHRAN: RngType = RngType::new("knuthran", 0, 0x3fffffff, Knuthran::SIZE, boxed::<Knuthran>);
pub static KNUTHRAN2: RngType = RngType::new("knuthran2", 0, 2147483646, Knuthran2::SIZE, boxed::<Knuthran2>);
pub static KNUTHRAN2002: RngType = RngType::new("knuthran2002", 0, 0x3fffffff, Knuthran2002::SIZE, boxed::<Knuthran2002>);
pub static LECUYER21: RngType = RngType::new("lecuyer21", 1, 2147483398, Lecuyer21::SIZE, boxed::<Lecuyer21>);
pub static MINSTD: RngType = RngType::new("minstd", 1, 2147483646, Minstd::SIZE, boxed::<Minstd>);
pub static MRG: RngType = RngType::new("mrg", 0, 2147483646, Mrg::SIZE, boxed::<Mrg>);
pub static MT19937: RngType = RngType::new("mt19937", 0, U32, Mt19937::SIZE, boxed::<Mt19937>);
pub static MT19937_1999: RngType = RngType::new("mt19937_1999", 0, U32, Mt19937_1999::SIZE, boxed::<Mt19937_1999>);
pub static MT19937_1998: RngType = RngType::new("mt19937_1998", 0, U32, Mt19937_1998::SIZE, boxed::<Mt19937_1998>);
pub static R250: RngType = RngType::new("r250", 0, U32, R250::SIZE, boxed::<R250>);
pub static RAND: RngType = RngType::new("rand", 0, U31, Rand::SIZE, boxed::<Rand>);
pub static RAND48: RngType = RngType::new("rand48", 0, U32, Rand48::SIZE, boxed::<Rand48>);
pub static RANDOM_BSD: RngType = RngType::new("random-bsd", 0, U31, Random128::<BSD>::SIZE, boxed::<Random128<BSD>>);
pub static RANDOM_LIBC5: RngType = RngType::new("random-libc5", 0, U31, Random128::<LIBC5>::SIZE, boxed::<Random128<LIBC5>>);
pub static RANDOM_GLIBC2: RngType = RngType::new("random-glibc2", 0, U31, Random128::<GLIBC2>::SIZE, boxed::<Random128<GLIBC2>>);
pub static RANDOM8_BSD: RngType = RngType::new("random8-bsd", 0, U31, Random8::SIZE, boxed::<Random8>);
pub static RANDOM8_LIBC5: RngType = RngType::new("random8-libc5", 0, U31, Random8::SIZE, boxed::<Random8>);
pub static RANDOM8_GLIBC2: RngType = RngType::new("random8-glibc2", 0, U31, Random8::SIZE, boxed::<Random8>);
pub static RANDOM32_BSD: RngType = RngType::new("random32-bsd", 0, U31, Random32::<BSD>::SIZE, boxed::<Random32<BSD>>);
pub static RANDOM32_LIBC5: RngType = RngType::new("random32-libc5", 0, U31, Random32::<LIBC5>::SIZE, boxed::<Random32<LIBC5>>);
pub static RANDOM32_GLIBC2: RngType = RngType::new("random32-glibc2", 0, U31, Random32::<GLIBC2>::SIZE, boxed::<Random32<GLIBC2>>);
pub static RANDOM64_BSD: RngType = RngType::new("random64-bsd", 0, U31, Random64::<BSD>::SIZE, boxed::<Random64<BSD>>);
pub static RANDOM64_LIBC5: RngType = RngType::new("random64-libc5", 0, U31, Random64::<LIBC5>::SIZE, boxed::<Random64<LIBC5>>);
pub static RANDOM64_GLIBC2: RngType = RngType::new("random64-glibc2", 0, U31, Random64::<GLIBC2>::SIZE, boxed::<Random64<GLIBC2>>);
pub static RANDOM128_BSD: RngType = RngType::new("random128-bsd", 0, U31, Random128::<BSD>::SIZE, boxed::<Random128<BSD>>);
pub static RANDOM128_LIBC5: RngType = RngType::new("random128-libc5", 0, U31, Random128::<LIBC5>::SIZE, boxed::<Random128<LIBC5>>);
pub static RANDOM128_GLIBC2: RngType = RngType::new("random128-glibc2", 0, U31, Random128::<GLIBC2>::SIZE, boxed::<Random128<GLIBC2>>);
pub static RANDOM256_BSD: RngType = RngType::new("random256-bsd", 0, U31, Random256::<BSD>::SIZE, boxed::<Random256<BSD>>);
pub static RANDOM256_LIBC5: RngType = RngType::new("random256-libc5", 0, U31, Random256::<LIBC5>::SIZE, boxed::<Random256<LIBC5>>);
pub static RANDOM256_GLIBC2: RngType = RngType::new("random256-glibc2", 0, U31, Random256::<GLIBC2>::SIZE, boxed::<Random256<GLIBC2>>);
pub static RANDU: RngType = RngType::new("randu", 1, U31, Randu::SIZE, boxed::<Randu>);
pub static RANF: RngType = RngType::new("ranf", 0, U32, Ranf::SIZE, boxed::<Ranf>);
pub static RANLUX: RngType = RngType::new("ranlux", 0, U24, Ranlux223::SIZE, boxed::<Ranlux223>);
pub static RANLUX389: RngType = RngType::new("ranlux389", 0, U24, Ranlux389::SIZE, boxed::<Ranlux389>);
pub static RANLXD1: RngType = RngType::new("ranlxd1", 0, U32, Ranlxd1::SIZE, boxed::<Ranlxd1>);
pub static RANLXD2: RngType = RngType::new("ranlxd2", 0, U32, Ranlxd2::SIZE, boxed::<Ranlxd2>);
pub static RANLXS0: RngType = RngType::new("ranlxs0", 0, U24, Ranlxs0::SIZE, boxed::<Ranlxs0>);
pub static RANLXS1: RngType = RngType::new("ranlxs1", 0, U24, Ranlxs1::SIZE, boxed::<Ranlxs1>);
pub static RANLXS2: RngType = RngType::new("ranlxs2", 0, U24, Ranlxs2::SIZE, boxed::<Ranlxs2>);
pub static RANMAR: RngType = RngType::new("ranmar", 0, U24, Ranmar::SIZE, boxed::<Ranmar>);
pub static SLATEC: RngType = RngType::new("slatec", 0, 4194303, Slatec::SIZE, boxed::<Slatec>);
pub static TAUS: RngType = RngType::new("taus", 0, U32, Taus88::SIZE, boxed::<Taus88>);
pub static TAUS2: RngType = RngType::new("taus2", 0, U32, Taus2::SIZE, boxed::<Taus2>);
pub static TAUS113: RngType = RngType::new("taus113", 0, U32, Taus113::SIZE, boxed::<Taus113>);
pub static TRANSPUTER: RngType = RngType::new("transputer", 1, U32, Transputer::SIZE, boxed::<Transputer>);
pub static TT800: RngType = RngType::new("tt800", 0, U32, Tt800::SIZE, boxed::<Tt800>);
pub static UNI: RngType = RngType::new("uni", 0, 32766, Uni16::SIZE, boxed::<Uni16>);
pub static UNI32: RngType = RngType::new("uni32", 0, 2147483646, Uni32::SIZE, boxed::<Uni32>);
pub static VAX: RngType = RngType::new("vax", 0, U32, Vax::SIZE, boxed::<Vax>);
pub static WATERMAN14: RngType = RngType::new("waterman14", 1, U32, Waterman14::SIZE, boxed::<Waterman14>);
pub static ZUF: RngType = RngType::new("zuf", 0, U24, Zuf::SIZE, boxed::<Zuf>);

static TYPES: [&RngType; 58] = [
    &BOROSH13, &CMRG, &COVEYOU, &FISHMAN18, &FISHMAN20, &FISHMAN2X, &GFSR4,
    &KNUTHRAN, &KNUTHRAN2, &KNUTHRAN2002, &LECUYER21, &MINSTD, &MRG,
    &MT19937, &MT19937_1999, &MT19937_1998, &R250, &RAND, &RAND48,
    &RANDOM_BSD, &RANDOM_LIBC5, &RANDOM_GLIBC2,
    &RANDOM8_BSD, &RANDOM8_LIBC5, &RANDOM8_GLIBC2,
    &RANDOM32_BSD, &RANDOM32_LIBC5, &RANDOM32_GLIBC2,
    &RANDOM64_BSD, &RANDOM64_LIBC5, &RANDOM64_GLIBC2,
    &RANDOM128_BSD, &RANDOM128_LIBC5, &RANDOM128_GLIBC2,
    &RANDOM256_BSD, &RANDOM256_LIBC5, &RANDOM256_GLIBC2,
    &RANDU, &RANF, &RANLUX, &RANLUX389, &RANLXD1, &RANLXD2,
    &RANLXS0, &RANLXS1, &RANLXS2, &RANMAR, &SLATEC,
    &TAUS, &TAUS2, &TAUS113, &TRANSPUTER, &TT800,
    &UNI, &UNI32, &VAX, &WATERMAN14, &ZUF,
];

/// Seed that selects each algorithm's own default.
pub const DEFAULT_SEED: u64 = 0;

/// Every generator in catalog order.
pub fn types() -> &'static [&'static RngType] {
    &TYPES
}

/// Mapping from catalog name to descriptor.
pub fn type_map() -> BTreeMap<&'static str, &'static RngType> {
    TYPES.iter().map(|t| (t.name, *t)).collect()
}

/// Looks up a generator by its catalog name.
pub fn lookup(name: &str) -> Result<&'static RngType> {
    RngType::lookup(name)
}

/// The general purpose default, MT19937.
pub fn default_type() -> &'static RngType {
    &MT19937
}

/// Summaries of every generator in catalog order.
pub fn infos() -> Vec<RngInfo> {
    TYPES.iter().map(|t| t.info()).collect()
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] fn names_are_unique() {
        assert_eq!(type_map().len(), types().len());
    }

    #[test] fn lookup_finds_every_entry() {
        for t in types() {
            assert_eq!(lookup(t.name()).map(|found| found.name()).ok(), Some(t.name()));
        }
        assert!(matches!(lookup("mt19938"), Err(RngError::NotFound { name }) if name == "mt19938"));
        assert!(lookup("").is_err());
    }

    #[test] fn descriptors_are_consistent() {
        for t in types() {
            assert!(t.min() <= t.max(), "{}", t);
            assert!(t.max() <= U32, "{}", t);
            assert!(t.size() > 0, "{}", t);
        }
    }

    #[test] fn default_is_mt19937() {
        assert_eq!(default_type().name(), "mt19937");
        assert_eq!(default_type().range(), 1 << 32);
        assert_eq!(DEFAULT_SEED, 0);
    }

    #[test] fn infos_follow_catalog_order() {
        let infos = infos();
        assert_eq!(infos.len(), 58);
        assert_eq!(infos[0], BOROSH13.info());
        assert_eq!(infos.iter().find(|i| i.name == "ranlxs0").map(|i| (i.min, i.max)), Some((0, U24)));
        assert_eq!(format!("{}", UNI32), "uni32");
    }
}
