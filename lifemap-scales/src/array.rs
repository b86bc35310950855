//! Tick generation following the d3-array `ticks` / `tickIncrement` algorithms

const E10: f32 = 7.071_068; // sqrt(50)
const E5: f32 = 3.162_277_7; // sqrt(10)
const E2: f32 = 1.414_213_5; // sqrt(2)

/// Generate approximately `count` nicely rounded ticks between `start` and `stop` inclusive
pub fn ticks(start: f32, stop: f32, count: f32) -> Vec<f32> {
    if count <= 0.0 || count.is_nan() {
        return vec![];
    }

    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };

    if !(i2 >= i1) {
        return vec![];
    }

    let n = (i2 - i1 + 1.0) as usize;
    let tick_at = |i: f32| if inc < 0.0 { i / -inc } else { i * inc };

    if reverse {
        (0..n).map(|i| tick_at(i2 - i as f32)).collect()
    } else {
        (0..n).map(|i| tick_at(i1 + i as f32)).collect()
    }
}

/// Returns (first index, last index, increment). A negative increment means
/// ticks are produced by dividing by `-inc`, which keeps fractional steps exact.
fn tick_spec(start: f32, stop: f32, count: f32) -> (f32, f32, f32) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10.0_f32.powf(power);
    let factor = step_factor(error);

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let temp_inc = 10.0_f32.powf(-power) / factor;
        i1 = (start * temp_inc).round();
        i2 = (stop * temp_inc).round();
        if i1 / temp_inc < start {
            i1 += 1.0;
        }
        if i2 / temp_inc > stop {
            i2 -= 1.0;
        }
        inc = -temp_inc;
    } else {
        inc = 10.0_f32.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && 0.5 <= count && count < 2.0 {
        return tick_spec(start, stop, count * 2.0);
    }

    (i1, i2, inc)
}

fn step_factor(error: f32) -> f32 {
    if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    }
}

/// Step between ticks for the given interval and count
pub fn tick_increment(start: f32, stop: f32, count: f32) -> f32 {
    if !(count > 0.0) {
        return f32::NAN;
    }

    if start == stop {
        return f32::NEG_INFINITY;
    }

    let step = (stop - start) / count;
    if step == 0.0 {
        return f32::NAN;
    }

    let power = step.log10().floor();
    let error = step / 10.0_f32.powf(power);
    10.0_f32.powf(power) * step_factor(error)
}

/// Min and max of the finite values, `None` when there are none
pub fn extent(values: &[f32]) -> Option<(f32, f32)> {
    values
        .iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks() {
        assert_eq!(
            ticks(0.0, 1.0, 10.0),
            vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
        );
        assert_eq!(ticks(0.0, 1.0, 5.0), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(ticks(0.0, 1.0, 2.0), vec![0.0, 0.5, 1.0]);
        assert_eq!(ticks(0.0, 1.0, 1.0), vec![0.0, 1.0]);
    }

    #[test]
    fn test_ticks_life_expectancy_domain() {
        assert_eq!(
            ticks(12.0, 86.0, 10.0),
            vec![20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]
        );
    }

    #[test]
    fn test_ticks_reversed() {
        assert_eq!(ticks(10.0, 0.0, 2.0), vec![10.0, 5.0, 0.0]);
    }

    #[test]
    fn test_ticks_edge_cases() {
        assert_eq!(ticks(f32::NAN, 1.0, 1.0), Vec::<f32>::new());
        assert_eq!(ticks(0.0, 1.0, 0.0), Vec::<f32>::new());
        assert_eq!(ticks(0.0, 1.0, -1.0), Vec::<f32>::new());
        assert_eq!(ticks(1.0, 1.0, 10.0), vec![1.0]);
    }

    #[test]
    fn test_tick_increment() {
        assert_eq!(tick_increment(0.0, 1.0, 10.0), 0.1);
        assert_eq!(tick_increment(0.0, 1.0, 5.0), 0.2);
        assert_eq!(tick_increment(0.0, 1.0, 2.0), 0.5);
        assert_eq!(tick_increment(0.0, 100.0, 10.0), 10.0);
        assert!(tick_increment(0.0, 1.0, 0.0).is_nan());
        assert!(tick_increment(1.0, 1.0, 1.0).is_infinite());
    }

    #[test]
    fn test_extent() {
        assert_eq!(extent(&[3.0, f32::NAN, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(extent(&[f32::NAN]), None);
        assert_eq!(extent(&[]), None);
    }
}
