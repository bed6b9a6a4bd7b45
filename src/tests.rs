// Properties every generator in the catalog must satisfy.

use super::*;
use crate::catalog::{self, types};

/// Seeds that exercise literal, default and wide inputs.
const SEEDS: [u64; 4] = [0, 1, 4357, 0x1_2345_6789];

#[test] fn reseeding_reproduces_the_stream() {
    for t in types() {
        for seed in SEEDS {
            let mut a = Rng::with_seed(t, seed);
            let first = a.get_vec(200);
            a.set(seed);
            assert_eq!(a.get_vec(200), first, "{} seed {}", t, seed);
        }
    }
}

#[test] fn seeds_are_reduced_mod_2_32() {
    for t in types() {
        let mut a = Rng::with_seed(t, 0x1_0000_0007);
        let mut b = Rng::with_seed(t, 7);
        assert_eq!(a.get_vec(50), b.get_vec(50), "{}", t);
    }
}

#[test] fn seed_0_is_the_default_seed() {
    for t in types() {
        let mut a = Rng::new(t);
        let mut b = Rng::with_seed(t, catalog::DEFAULT_SEED);
        let mut c = Rng::with_seed(t, 99);
        c.set(0);
        let reference = a.get_vec(100);
        assert_eq!(b.get_vec(100), reference, "{}", t);
        assert_eq!(c.get_vec(100), reference, "{}", t);
    }
}

#[test] fn raw_values_stay_in_range() {
    for t in types() {
        for seed in SEEDS {
            let mut r = Rng::with_seed(t, seed);
            for _ in 0 .. 10000 {
                let x = r.get();
                assert!(x >= t.min() && x <= t.max(), "{} seed {} produced {}", t, seed, x);
            }
        }
    }
}

#[test] fn uniform_is_in_unit_interval_with_mean_one_half() {
    for t in types() {
        let mut r = Rng::with_seed(t, 1);
        let n = 100000;
        let mut sum = 0.0;
        for _ in 0 .. n {
            let u = r.uniform();
            assert!((0.0 .. 1.0).contains(&u), "{} produced {}", t, u);
            sum += u;
        }
        let mean = sum / n as f64;
        assert!((mean - 0.5).abs() < 0.01, "{} mean {}", t, mean);
    }
}

/// Pearson's statistic for `counts` against equal expected frequencies.
fn chi_square(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts.iter().map(|&c| (c as f64 - expected).powi(2) / expected).sum()
}

#[test] fn uniform_passes_chi_square() {
    // 99 degrees of freedom. The 0.9999 quantile is about 157.
    for t in types() {
        let mut r = Rng::with_seed(t, 12345);
        let mut counts = [0u64; 100];
        for _ in 0 .. 200000 {
            counts[(r.uniform() * 100.0) as usize] += 1;
        }
        let x2 = chi_square(&counts);
        assert!(x2 < 157.0, "{} chi-square {}", t, x2);
    }
}

#[test] fn uniform_pos_never_returns_zero() {
    for t in types() {
        let mut r = Rng::with_seed(t, 2);
        for _ in 0 .. 10000 {
            let u = r.uniform_pos();
            assert!(u > 0.0 && u < 1.0, "{} produced {}", t, u);
        }
    }
    let mut r = Rng::new(&catalog::MT19937);
    assert!((0 .. 1000000).all(|_| r.uniform_pos() > 0.0));
}

#[test] fn uniform_int_has_no_modulo_bias() {
    // 7 does not divide 2**32. Six degrees of freedom, 0.9999 quantile about 27.9.
    let mut r = Rng::with_seed(&catalog::MT19937, 2024);
    let mut counts = [0u64; 7];
    for _ in 0 .. 700000 {
        counts[r.uniform_int(7).unwrap() as usize] += 1;
    }
    assert!(chi_square(&counts) < 27.9, "{:?}", counts);

    // Three quarters of the range: naive modulo would hit the lowest third twice as often.
    let n = 3u64 << 30;
    let mut low = 0;
    for _ in 0 .. 100000 {
        if r.uniform_int(n).unwrap() < n / 2 {
            low += 1;
        }
    }
    assert!((low as f64 / 100000.0 - 0.5).abs() < 0.01, "low fraction {}", low);
}

#[test] fn uniform_int_stays_below_n_everywhere() {
    for t in types() {
        let mut r = Rng::with_seed(t, 3);
        for n in [1, 2, 3, 10, 1000, 32767] {
            assert!((0 .. 200).all(|_| r.uniform_int(n).unwrap() < n), "{} n {}", t, n);
        }
        let full = t.range() as u64;
        assert!(r.uniform_int(full).unwrap() < full, "{}", t);
        assert!(matches!(r.uniform_int(full + 1), Err(RngError::InvalidRange { .. })), "{}", t);
    }
}

#[test] fn clones_are_values_not_aliases() {
    for t in types() {
        let mut original = Rng::with_seed(t, 11);
        original.get_vec(17);
        let mut copy = original.clone();
        let expected = original.get_vec(50);
        assert_eq!(copy.get_vec(50), expected, "{}", t);

        // Advancing one leaves the other where it was.
        let mut twin = copy.clone();
        copy.get_vec(10);
        assert_eq!(twin.get_vec(10), original.clone().get_vec(10), "{}", t);
    }
}

#[test] fn saved_state_round_trips() {
    for t in types() {
        let mut a = Rng::with_seed(t, 8);
        a.get_vec(1234);
        let mut bytes = Vec::new();
        a.write(&mut bytes).unwrap();
        assert_eq!(bytes.len(), t.size(), "{}", t);

        let mut b = Rng::with_seed(t, 9);
        b.read(&bytes[..]).unwrap();
        assert_eq!(a.get_vec(300), b.get_vec(300), "{}", t);
        assert_eq!(a.uniform_vec(30), b.uniform_vec(30), "{}", t);
    }
}

#[test] fn foreign_bytes_load_without_panicking() {
    for t in types() {
        let mut r = Rng::new(t);
        let junk: Vec<u8> = (0 .. t.size()).map(|i| (i * 37 + 11) as u8).collect();
        r.read(&junk[..]).unwrap();
        r.get_vec(2000);
    }
}

#[test] fn foreign_bytes_give_in_range_values() {
    for t in types() {
        for fill in [0x7f, 0xff] {
            let mut r = Rng::new(t);
            r.read(&vec![fill; t.size()][..]).unwrap();
            for _ in 0 .. 2000 {
                let x = r.get();
                assert!(x >= t.min() && x <= t.max(), "{} fill {:#x} produced {}", t, fill, x);
                let u = r.uniform();
                assert!((0.0 .. 1.0).contains(&u), "{} fill {:#x} produced {}", t, fill, u);
            }
            // Bounded draws must terminate.
            r.uniform_int_vec(3, 200).unwrap();
        }
    }
}

#[test] fn copy_between_types_fails() {
    let mut a = Rng::new(&catalog::RANDOM_BSD);
    let b = Rng::new(&catalog::RANDOM128_BSD);
    assert!(matches!(a.copy_from(&b), Err(RngError::TypeMismatch { .. })));
}

#[test] fn generators_run_in_parallel() {
    let handles: Vec<_> = ["mt19937", "ranlxd1", "taus", "gfsr4"]
        .iter()
        .map(|&name| {
            std::thread::spawn(move || -> Result<Vec<u64>> {
                let mut r = Rng::from_name(name)?;
                Ok(r.get_vec(1000))
            })
        })
        .collect();
    for (handle, name) in handles.into_iter().zip(["mt19937", "ranlxd1", "taus", "gfsr4"]) {
        let values = handle.join().unwrap().unwrap();
        assert_eq!(values, Rng::from_name(name).unwrap().get_vec(1000));
    }
}
