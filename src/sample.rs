use crate::error::{Result, RngError};

// Range reduction from a raw generator stream to bounded integers.

/// Checks that `n` outcomes can be drawn from a raw range of `range` values.
pub(crate) fn check_range(n: u64, range: u128) -> Result<()> {
    if n == 0 || n as u128 > range {
        return Err(RngError::InvalidRange { n, size: range });
    }
    Ok(())
}

/// Draws an integer uniformly from `0 .. n` out of raw draws uniform on
/// `offset ..= offset + range - 1`. Requires `1 <= n <= range`.
///
/// The raw range is cut into `n` buckets of `range / n` values each.
/// Draws that land in the leftover band above the last bucket are rejected,
/// so every outcome has exactly the same number of raw preimages.
pub(crate) fn scaled_int(offset: u64, range: u128, n: u64, mut draw: impl FnMut() -> u64) -> u64 {
    let scale = range / n as u128;
    loop {
        let k = (draw() - offset) as u128 / scale;
        if k < n as u128 {
            return k as u64;
        }
    }
}

/// Number of uniform bits in one raw draw, the largest `k` with `2**k <= range`.
pub(crate) fn word_bits(range: u128) -> u32 {
    (127 - range.leading_zeros()).min(64)
}

#[cfg(test)] mod tests {
    use super::*;

    /// Replays a fixed script of raw values.
    fn script(values: &[u64]) -> impl FnMut() -> u64 + '_ {
        let mut i = 0;
        move || {
            let x = values[i];
            i += 1;
            x
        }
    }

    #[test] fn leftover_band_is_rejected() {
        // Range 10 into 3 buckets of 3: raw 9 falls in the leftover band.
        assert_eq!(scaled_int(0, 10, 3, script(&[9, 9, 7])), 2);
        assert_eq!(scaled_int(0, 10, 3, script(&[0])), 0);
        assert_eq!(scaled_int(0, 10, 3, script(&[5])), 1);
    }

    #[test] fn offset_is_removed_first() {
        // Raw values 1 ..= 10 as produced by a generator with min 1.
        assert_eq!(scaled_int(1, 10, 2, script(&[1])), 0);
        assert_eq!(scaled_int(1, 10, 2, script(&[10])), 1);
        assert_eq!(scaled_int(1, 10, 5, script(&[6])), 2);
    }

    #[test] fn every_outcome_has_equal_preimages() {
        let range = 1000u128;
        for n in [1, 3, 7, 10, 333, 999, 1000] {
            let mut counts = vec![0u32; n as usize];
            let mut rejected = 0;
            for raw in 0 .. range as u64 {
                let k = raw as u128 / (range / n as u128);
                if k < n as u128 { counts[k as usize] += 1; } else { rejected += 1; }
            }
            assert!(counts.iter().all(|&c| c == counts[0]), "n = {}", n);
            assert_eq!(rejected, (range % n as u128) as u32);
            // The scaled draw agrees with the bucket arithmetic.
            assert_eq!(scaled_int(0, range, n, script(&[0])), 0);
        }
    }

    #[test] fn full_range_needs_no_rejection() {
        let range = 1u128 << 32;
        assert_eq!(scaled_int(0, range, u32::MAX as u64 + 1, script(&[u32::MAX as u64])), u32::MAX as u64);
    }

    #[test] fn range_checks() {
        assert!(check_range(1, 1).is_ok());
        assert!(check_range(32767, 32767).is_ok());
        assert!(matches!(check_range(32768, 32767), Err(RngError::InvalidRange { n: 32768, size: 32767 })));
        assert!(matches!(check_range(0, 100), Err(RngError::InvalidRange { n: 0, .. })));
    }

    #[test] fn bits_per_word() {
        assert_eq!(word_bits(1 << 32), 32);
        assert_eq!(word_bits((1 << 32) - 1), 31);
        assert_eq!(word_bits(32767), 14);
        assert_eq!(word_bits(1 << 24), 24);
    }
}
