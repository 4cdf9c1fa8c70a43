//! Common utilities and types for the objects controller

/// Common types used across the codebase
pub mod types {
    use nalgebra::Point3;

    /// A position in the simulator world frame (m)
    pub type Position = Point3<f64>;

    /// Inclusive bounds of a coordinate (min, max)
    pub type Bounds = (f64, f64);
}
