//! Dense 3D storage with x-fastest flat indexing.

use crate::error::{GridError, Result};

/// Dense 3D grid owning one contiguous buffer of `nx * ny * nz` elements.
///
/// Element `(i, j, k)` lives at offset `i + nx * (j + ny * k)`: x varies
/// fastest, then y, then z. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    nx: usize,
    ny: usize,
    nz: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid with every element set to `T::default()`.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self> {
        Self::filled(nx, ny, nz, T::default())
    }

    /// Create a grid with every element set to `value`.
    pub fn filled(nx: usize, ny: usize, nz: usize, value: T) -> Result<Self> {
        check_dims(nx, ny, nz)?;
        Ok(Self {
            nx,
            ny,
            nz,
            data: vec![value; nx * ny * nz],
        })
    }

    /// Wrap an existing buffer laid out in grid offset order.
    pub fn from_vec(nx: usize, ny: usize, nz: usize, data: Vec<T>) -> Result<Self> {
        check_dims(nx, ny, nz)?;
        if data.len() != nx * ny * nz {
            return Err(GridError::InvalidArgument(format!(
                "buffer length {} does not match {nx}x{ny}x{nz} grid",
                data.len()
            )));
        }
        Ok(Self { nx, ny, nz, data })
    }

    /// Overwrite every element with `value`.
    ///
    /// Cannot fail, so the grid is never left partially reset.
    pub fn reset(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Reset every element to `T::default()`.
    pub fn clear(&mut self) {
        self.reset(T::default());
    }

    /// Write `value` at `(i, j, k)`.
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: T) -> Result<()> {
        *self.get_mut(i, j, k)? = value;
        Ok(())
    }
}

impl<T> Grid<T> {
    /// Grid size as `(nx, ny, nz)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: every dimension is at least 1.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether `(i, j, k)` is inside the grid.
    #[inline]
    pub fn contains(&self, i: usize, j: usize, k: usize) -> bool {
        i < self.nx && j < self.ny && k < self.nz
    }

    /// Flat buffer offset of `(i, j, k)`.
    #[inline]
    pub fn offset(&self, i: usize, j: usize, k: usize) -> Result<usize> {
        if !self.contains(i, j, k) {
            return Err(self.out_of_range(i, j, k));
        }
        Ok(self.linear(i, j, k))
    }

    pub(crate) fn out_of_range(&self, i: usize, j: usize, k: usize) -> GridError {
        GridError::OutOfRange(format!(
            "index ({i}, {j}, {k}) outside {}x{}x{} grid",
            self.nx, self.ny, self.nz
        ))
    }

    /// Offset of a coordinate already known to be in bounds.
    #[inline]
    pub(crate) fn linear(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(self.contains(i, j, k));
        i + self.nx * (j + self.ny * k)
    }

    /// Read the element at `(i, j, k)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Result<&T> {
        let idx = self.offset(i, j, k)?;
        Ok(&self.data[idx])
    }

    /// Mutable reference to the element at `(i, j, k)`.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize, k: usize) -> Result<&mut T> {
        let idx = self.offset(i, j, k)?;
        Ok(&mut self.data[idx])
    }

    /// Storage in offset order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable storage in offset order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Coordinates on none of the six faces, in storage order.
    ///
    /// Empty whenever any dimension is smaller than 3.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize, usize)> + use<T> {
        let (nx, ny, nz) = self.dimensions();
        (1..nz.saturating_sub(1)).flat_map(move |k| {
            (1..ny.saturating_sub(1))
                .flat_map(move |j| (1..nx.saturating_sub(1)).map(move |i| (i, j, k)))
        })
    }
}

fn check_dims(nx: usize, ny: usize, nz: usize) -> Result<()> {
    if nx == 0 || ny == 0 || nz == 0 {
        return Err(GridError::InvalidArgument(format!(
            "grid dimensions must be positive, got {nx}x{ny}x{nz}"
        )));
    }
    Ok(())
}
