//! Narrow view of a spatial-weights structure.
//!
//! Layout checking only needs the number of cross-sectional units, so this
//! crate depends on that single capability rather than on any concrete
//! weights representation (contiguity matrix, kernel weights, ...).

/// Exposes the number of cross-sectional units of a spatial-weights object.
pub trait SpatialWeights {
    fn unit_count(&self) -> usize;
}

/// A bare unit count can stand in for a full weights object.
impl SpatialWeights for usize {
    fn unit_count(&self) -> usize {
        *self
    }
}
