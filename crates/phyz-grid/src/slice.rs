//! Axis-aligned 2D slices copied out of a grid.

use crate::error::{GridError, Result};
use crate::grid::Grid;

/// Grid axis. Used as the plane normal when slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// i, extent nx
    X,
    /// j, extent ny
    Y,
    /// k, extent nz
    Z,
}

impl Axis {
    /// Numeric selector accepted by [`Grid::get_slice`].
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Extent of this axis in a grid of size `dims`.
    pub fn extent(self, (nx, ny, nz): (usize, usize, usize)) -> usize {
        match self {
            Axis::X => nx,
            Axis::Y => ny,
            Axis::Z => nz,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = GridError;

    fn try_from(axis: usize) -> Result<Self> {
        match axis {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(GridError::InvalidArgument(format!(
                "axis must be 0, 1 or 2, got {axis}"
            ))),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Copy the plane `axis = index` into a flat vector.
    ///
    /// `axis` 0 gives the YZ plane laid out `j + ny * k`, 1 the XZ plane
    /// laid out `i + nx * k`, and 2 the XY plane laid out `i + nx * j`.
    pub fn get_slice(&self, axis: usize, index: usize) -> Result<Vec<T>> {
        self.slice(Axis::try_from(axis)?, index)
    }

    /// Typed form of [`Grid::get_slice`].
    ///
    /// The result is a snapshot; later writes to the grid do not show up in it.
    pub fn slice(&self, axis: Axis, index: usize) -> Result<Vec<T>> {
        let dims = self.dimensions();
        let bound = axis.extent(dims);
        if index >= bound {
            return Err(GridError::OutOfRange(format!(
                "slice index {index} outside axis {} of length {bound}",
                axis.index()
            )));
        }

        let (nx, ny, nz) = dims;
        let data = self.as_slice();
        let out: Vec<T> = match axis {
            Axis::X => (0..nz)
                .flat_map(|k| (0..ny).map(move |j| (index, j, k)))
                .map(|(i, j, k)| data[self.linear(i, j, k)].clone())
                .collect(),
            Axis::Y => (0..nz)
                .flat_map(|k| (0..nx).map(move |i| (i, index, k)))
                .map(|(i, j, k)| data[self.linear(i, j, k)].clone())
                .collect(),
            Axis::Z => (0..ny)
                .flat_map(|j| (0..nx).map(move |i| (i, j, index)))
                .map(|(i, j, k)| data[self.linear(i, j, k)].clone())
                .collect(),
        };
        Ok(out)
    }
}
