//! The small value types shared by every generator.

use core::ops::{Add, Mul, Sub};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// The horizontal coordinate.
    pub x: f64,
    /// The vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new `Point`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `(0, 0)`.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Euclidean distance between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_datasets::Point;
    ///
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    ///
    /// assert!((a.distance_to(&b) - 5.0).abs() <= f64::EPSILON);
    /// ```
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        distances::vectors::euclidean::<f64, f64>(&[self.x, self.y], &[other.x, other.y])
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A `Point` with a scalar label.
///
/// Classification generators only ever produce the labels `-1.0` and `1.0`.
/// Regression generators produce any real label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Example {
    /// Where the example lies.
    pub point: Point,
    /// The target value.
    pub label: f64,
}

impl Example {
    /// Creates a new `Example`.
    #[must_use]
    pub const fn new(x: f64, y: f64, label: f64) -> Self {
        Self {
            point: Point::new(x, y),
            label,
        }
    }

    /// The horizontal coordinate of the example.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.point.x
    }

    /// The vertical coordinate of the example.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.point.y
    }
}

/// A weighted, labeled line segment.
///
/// The line-based generator places a share of its points along each
/// descriptor's segment, in proportion to the descriptor's `ratio`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineDescriptor {
    /// The label given to every point sampled on this segment.
    pub label: f64,
    /// The relative weight of this segment.
    pub ratio: f64,
    /// One end of the segment.
    pub start: Point,
    /// The other end of the segment.
    pub end: Point,
}

impl LineDescriptor {
    /// Creates a new `LineDescriptor`.
    #[must_use]
    pub const fn new(label: f64, ratio: f64, start: (f64, f64), end: (f64, f64)) -> Self {
        Self {
            label,
            ratio,
            start: Point::new(start.0, start.1),
            end: Point::new(end.0, end.1),
        }
    }

    /// The length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}
