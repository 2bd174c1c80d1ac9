//! Hand-authored stroke lists for the glyph-silhouette datasets.
//!
//! Each list draws two letters side by side, one per class, inside the
//! `[-6, 6]²` viewport. Ratios follow the stroke lengths so that points are
//! spread evenly along each letter.

use crate::types::LineDescriptor;

/// An "A" (positive) on the left and a "V" (negative) on the right.
pub const A_AND_V: [LineDescriptor; 5] = [
    LineDescriptor::new(1.0, 8.0, (-5.0, -4.0), (-3.0, 4.0)),
    LineDescriptor::new(1.0, 8.0, (-3.0, 4.0), (-1.0, -4.0)),
    LineDescriptor::new(1.0, 2.0, (-4.0, 0.0), (-2.0, 0.0)),
    LineDescriptor::new(-1.0, 8.0, (1.0, 4.0), (3.0, -4.0)),
    LineDescriptor::new(-1.0, 8.0, (3.0, -4.0), (5.0, 4.0)),
];

/// A "T" (positive) on the left and an "L" (negative) on the right.
pub const T_AND_L: [LineDescriptor; 4] = [
    LineDescriptor::new(1.0, 4.0, (-5.0, 4.0), (-1.0, 4.0)),
    LineDescriptor::new(1.0, 8.0, (-3.0, 4.0), (-3.0, -4.0)),
    LineDescriptor::new(-1.0, 8.0, (1.0, 4.0), (1.0, -4.0)),
    LineDescriptor::new(-1.0, 4.0, (1.0, -4.0), (5.0, -4.0)),
];
