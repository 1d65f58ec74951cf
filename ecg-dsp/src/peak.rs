use ndarray::Array1;

/// Given any sample index on a wave, returns the index of that wave's
/// peak: walks in the direction of initial ascent until the next sample
/// stops rising.
///
/// `positive` selects whether the wave is a positive or negative-going
/// deflection; for a negative wave the sign is inverted before walking.
pub fn local_peak(samples: &Array1<f64>, index: usize, positive: bool) -> usize {
    let n = samples.len();
    debug_assert!(index < n);

    let wave = |i: usize| -> f64 {
        if positive {
            samples[i]
        } else {
            -samples[i]
        }
    };

    let direction: isize = if index > 0 {
        if wave(index) >= wave(index - 1) { 1 } else { -1 }
    } else if wave(index + 1) >= wave(index) {
        1
    } else {
        -1
    };

    let mut peak = index;
    let mut i = index as isize + direction;
    while i >= 0 && (i as usize) < n {
        let iu = i as usize;
        let prev = (iu as isize - direction) as usize;
        if wave(iu) < wave(prev) {
            break;
        }
        peak = iu;
        i += direction;
    }
    peak
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_single_peak_from_either_side() {
        let s = Array1::from(vec![0.0, 1.0, 2.0, 5.0, 3.0, 1.0, 0.0]);
        assert_eq!(local_peak(&s, 1, true), 3);
        assert_eq!(local_peak(&s, 5, true), 3);
        assert_eq!(local_peak(&s, 3, true), 3);
    }

    #[test]
    fn is_idempotent() {
        let s = Array1::from(vec![0.0, 1.0, 2.0, 5.0, 3.0, 1.0, 0.0]);
        let p = local_peak(&s, 1, true);
        assert_eq!(local_peak(&s, p, true), p);
    }

    #[test]
    fn negative_wave_inverts_sign() {
        let s = Array1::from(vec![0.0, -1.0, -2.0, -5.0, -3.0, -1.0, 0.0]);
        assert_eq!(local_peak(&s, 1, false), 3);
    }

    #[test]
    fn handles_boundary_start_index() {
        let s = Array1::from(vec![5.0, 3.0, 1.0]);
        assert_eq!(local_peak(&s, 0, true), 0);
    }
}
