//! Axis-aligned bounding boxes and evenly spaced sampling

use crate::core::Point;

/// Ranges narrower than this are treated as zero-width
const MIN_RANGE: f64 = 1e-9;

/// Axis-aligned bounding box of a point set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Smallest box containing every point, `None` for an empty input
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in iter {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    /// Width of the box, 1.0 when the points share one x value
    pub fn x_range(&self) -> f64 {
        effective_range(self.max_x - self.min_x)
    }

    /// Height of the box, 1.0 when the points share one y value
    pub fn y_range(&self) -> f64 {
        effective_range(self.max_y - self.min_y)
    }

    /// Grow every side by `fraction` of the corresponding range
    pub fn padded(&self, fraction: f64) -> Bounds {
        let pad_x = self.x_range() * fraction;
        let pad_y = self.y_range() * fraction;
        Bounds {
            min_x: self.min_x - pad_x,
            max_x: self.max_x + pad_x,
            min_y: self.min_y - pad_y,
            max_y: self.max_y + pad_y,
        }
    }

    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.min_y && y <= self.max_y
    }
}

fn effective_range(range: f64) -> f64 {
    if range > MIN_RANGE {
        range
    } else {
        1.0
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let bounds = Bounds::from_points(vec![
            Point::new(1.0, 5.0),
            Point::new(-2.0, 3.0),
            Point::new(4.0, -1.0),
        ])
        .unwrap();

        assert_eq!(bounds.min_x, -2.0);
        assert_eq!(bounds.max_x, 4.0);
        assert_eq!(bounds.min_y, -1.0);
        assert_eq!(bounds.max_y, 5.0);
        assert_eq!(bounds.x_range(), 6.0);
        assert_eq!(bounds.y_range(), 6.0);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(Bounds::from_points(Vec::<Point>::new()).is_none());
    }

    #[test]
    fn test_degenerate_range_falls_back_to_one() {
        let bounds = Bounds::from_points(vec![Point::new(2.0, 1.0), Point::new(2.0, 3.0)]).unwrap();
        assert_eq!(bounds.x_range(), 1.0);
        assert_eq!(bounds.y_range(), 2.0);
    }

    #[test]
    fn test_padded() {
        let bounds = Bounds {
            min_x: 0.0,
            max_x: 10.0,
            min_y: 0.0,
            max_y: 20.0,
        };
        let padded = bounds.padded(0.1);
        assert_eq!(padded.min_x, -1.0);
        assert_eq!(padded.max_x, 11.0);
        assert_eq!(padded.min_y, -2.0);
        assert_eq!(padded.max_y, 22.0);
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
