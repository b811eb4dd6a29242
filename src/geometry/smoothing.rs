//! Moving-average smoothing for sampled curves

use crate::core::Point;

/// Centered moving average with `radius` samples on each side
///
/// Windows are truncated at the ends rather than padded, so the output has
/// the same length as the input and the end values stay anchored to real data.
pub fn moving_average(values: &[f64], radius: usize) -> Vec<f64> {
    if radius == 0 || values.len() < 2 {
        return values.to_vec();
    }

    // Prefix sums keep the wide sigmoid window linear in the sample count
    let mut prefix = Vec::with_capacity(values.len() + 1);
    prefix.push(0.0);
    for &v in values {
        let last = prefix[prefix.len() - 1];
        prefix.push(last + v);
    }

    (0..values.len())
        .map(|i| {
            let start = i.saturating_sub(radius);
            let end = (i + radius + 1).min(values.len());
            (prefix[end] - prefix[start]) / (end - start) as f64
        })
        .collect()
}

/// Smooth the y coordinates of a polyline, leaving x untouched
pub fn smooth_curve(curve: &[Point], radius: usize) -> Vec<Point> {
    let ys: Vec<f64> = curve.iter().map(|p| p.y).collect();
    curve
        .iter()
        .zip(moving_average(&ys, radius))
        .map(|(p, y)| Point::new(p.x, y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_moving_average_window_three() {
        let smoothed = moving_average(&[0.0, 3.0, 0.0, 3.0], 1);
        assert_relative_eq!(smoothed[0], 1.5);
        assert_relative_eq!(smoothed[1], 1.0);
        assert_relative_eq!(smoothed[2], 2.0);
        assert_relative_eq!(smoothed[3], 1.5);
    }

    #[test]
    fn test_moving_average_constant_is_unchanged() {
        let values = vec![2.5; 40];
        for v in moving_average(&values, 25) {
            assert_relative_eq!(v, 2.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_moving_average_degenerate_inputs() {
        assert!(moving_average(&[], 3).is_empty());
        assert_eq!(moving_average(&[4.0], 3), vec![4.0]);
        assert_eq!(moving_average(&[1.0, 2.0], 0), vec![1.0, 2.0]);
    }

    #[test]
    fn test_smooth_curve_keeps_x() {
        let curve = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 6.0),
            Point::new(2.0, 0.0),
        ];
        let smoothed = smooth_curve(&curve, 1);
        assert_eq!(smoothed.len(), 3);
        assert_eq!(smoothed[1].x, 1.0);
        assert_relative_eq!(smoothed[1].y, 2.0);
    }
}
