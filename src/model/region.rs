//! Spatial regions used to select particles near a cell.
//!
//! The CPM coupling code asks for the particles inside some area of the
//! dish, typically the lattice pixel involved in a copy attempt or a zone
//! around a cell. Anything that can answer a point-membership test can act
//! as a region.

/// A membership test over the simulation plane.
pub trait Region {
    fn contains(&self, point: [f64; 2]) -> bool;
}

/// Axis-aligned box, closed at `min` and open at `max` on each axis.
///
/// Half-open bounds let adjacent lattice pixels tile the plane without any
/// particle belonging to two of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl BoundingBox {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Self { min, max }
    }

    /// The unit square covering lattice pixel `(x, y)`.
    pub fn pixel(x: i64, y: i64) -> Self {
        let (x, y) = (x as f64, y as f64);
        Self {
            min: [x, y],
            max: [x + 1.0, y + 1.0],
        }
    }
}

impl Region for BoundingBox {
    #[inline]
    fn contains(&self, point: [f64; 2]) -> bool {
        (0..2).all(|d| point[d] >= self.min[d] && point[d] < self.max[d])
    }
}

/// Closed disc around a centre point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: [f64; 2],
    pub radius: f64,
}

impl Disc {
    pub fn new(center: [f64; 2], radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Region for Disc {
    #[inline]
    fn contains(&self, point: [f64; 2]) -> bool {
        let dx = point[0] - self.center[0];
        let dy = point[1] - self.center[1];
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

impl<F> Region for F
where
    F: Fn([f64; 2]) -> bool,
{
    #[inline]
    fn contains(&self, point: [f64; 2]) -> bool {
        self(point)
    }
}
