//! Dense 3D grid storage for finite-difference and finite-volume codes.
//!
//! Provides a contiguous `nx × ny × nz` container with:
//! - Bounds-checked element access (x fastest, then y, then z)
//! - Classification of points into the six boundary faces or the interior
//! - Ordered traversal of a single face for applying boundary conditions
//! - Snapshot copies of axis-aligned 2D slices
//!
//! # Example
//!
//! ```
//! use phyz_grid::{Boundary, Grid};
//!
//! let mut temperature: Grid<f64> = Grid::new(16, 16, 16)?;
//!
//! // Dirichlet walls: hot lid, cold floor, linear profile on the sides
//! temperature.set_boundary_value(Boundary::Top, 100.0);
//! temperature.set_boundary_value(Boundary::Bottom, 0.0);
//! temperature.apply_to_boundary(Boundary::Left, |_, _, k| 100.0 * k as f64 / 15.0);
//!
//! assert_eq!(temperature.classify(8, 8, 15)?, Boundary::Top);
//! assert_eq!(*temperature.get(8, 8, 15)?, 100.0);
//!
//! // Mid-height XY plane
//! let plane = temperature.get_slice(2, 8)?;
//! assert_eq!(plane.len(), 16 * 16);
//! # Ok::<(), phyz_grid::GridError>(())
//! ```

pub mod boundary;
pub mod error;
pub mod grid;
pub mod slice;
pub mod traversal;

pub use boundary::Boundary;
pub use error::{GridError, Result};
pub use grid::Grid;
pub use slice::Axis;
pub use traversal::BoundaryTraversal;
