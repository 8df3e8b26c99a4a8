//! Single-pass cursor over the points of one boundary face.

use std::iter::FusedIterator;

use crate::boundary::Boundary;

/// Ordered walk over one face of a grid.
///
/// The face's normal axis is held at its fixed value while the two free
/// axes are visited row-major, outer axis slowest:
///
/// | Face | Fixed | Outer | Inner |
/// |---|---|---|---|
/// | Top / Bottom | k | j | i |
/// | Left / Right | i | k | j |
/// | Front / Back | j | k | i |
///
/// `Interior` yields nothing. The cursor only moves forward and cannot be
/// restarted; ask the grid for a new one instead. It copies the grid
/// dimensions rather than borrowing the grid, which is sound because
/// dimensions never change after construction.
#[derive(Debug, Clone)]
pub struct BoundaryTraversal {
    face: Boundary,
    fixed: usize,
    outer: usize,
    inner: usize,
    outer_len: usize,
    inner_len: usize,
    done: bool,
}

impl BoundaryTraversal {
    pub(crate) fn new(face: Boundary, (nx, ny, nz): (usize, usize, usize)) -> Self {
        let (outer_len, inner_len) = match face {
            Boundary::Top | Boundary::Bottom => (ny, nx),
            Boundary::Left | Boundary::Right => (nz, ny),
            Boundary::Front | Boundary::Back => (nz, nx),
            Boundary::Interior => (0, 0),
        };
        let fixed = face.fixed_index((nx, ny, nz)).unwrap_or(0);

        Self {
            face,
            fixed,
            outer: 0,
            inner: 0,
            outer_len,
            inner_len,
            done: outer_len == 0 || inner_len == 0,
        }
    }

    /// Face being walked.
    pub fn face(&self) -> Boundary {
        self.face
    }

    /// True once every point has been yielded.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Points left to visit.
    pub fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            (self.outer_len - self.outer) * self.inner_len - self.inner
        }
    }

    /// Advance the cursor, returning the next `(i, j, k)` or `None` once
    /// the face is exhausted.
    pub fn next_point(&mut self) -> Option<(usize, usize, usize)> {
        if self.done {
            return None;
        }

        let (a, b, c) = (self.inner, self.outer, self.fixed);
        let point = match self.face {
            Boundary::Top | Boundary::Bottom => (a, b, c),
            Boundary::Left | Boundary::Right => (c, a, b),
            Boundary::Front | Boundary::Back => (a, c, b),
            Boundary::Interior => return None,
        };

        self.inner += 1;
        if self.inner == self.inner_len {
            self.inner = 0;
            self.outer += 1;
            if self.outer == self.outer_len {
                self.done = true;
            }
        }

        Some(point)
    }
}

impl Iterator for BoundaryTraversal {
    type Item = (usize, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_point()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for BoundaryTraversal {}

impl FusedIterator for BoundaryTraversal {}
