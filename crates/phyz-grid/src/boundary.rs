//! Boundary faces of a grid: classification and bulk assignment.

use crate::error::Result;
use crate::grid::Grid;
use crate::slice::Axis;
use crate::traversal::BoundaryTraversal;

/// Face of the cuboid a grid point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// k = nz - 1
    Top,
    /// k = 0
    Bottom,
    /// i = 0
    Left,
    /// i = nx - 1
    Right,
    /// j = ny - 1
    Front,
    /// j = 0
    Back,
    /// On none of the six faces.
    Interior,
}

impl Boundary {
    /// The six faces, in classification precedence order.
    pub const FACES: [Boundary; 6] = [
        Boundary::Top,
        Boundary::Bottom,
        Boundary::Left,
        Boundary::Right,
        Boundary::Front,
        Boundary::Back,
    ];

    /// True for every variant except `Interior`.
    pub fn is_face(self) -> bool {
        self != Boundary::Interior
    }

    /// Face on the other side of the same axis.
    pub fn opposite(self) -> Boundary {
        match self {
            Boundary::Top => Boundary::Bottom,
            Boundary::Bottom => Boundary::Top,
            Boundary::Left => Boundary::Right,
            Boundary::Right => Boundary::Left,
            Boundary::Front => Boundary::Back,
            Boundary::Back => Boundary::Front,
            Boundary::Interior => Boundary::Interior,
        }
    }

    /// Axis held fixed on this face.
    pub fn normal_axis(self) -> Option<Axis> {
        match self {
            Boundary::Left | Boundary::Right => Some(Axis::X),
            Boundary::Front | Boundary::Back => Some(Axis::Y),
            Boundary::Top | Boundary::Bottom => Some(Axis::Z),
            Boundary::Interior => None,
        }
    }

    /// Value of the fixed axis on this face for a grid of size `dims`.
    ///
    /// `None` for `Interior` or when the face's axis has zero extent.
    pub(crate) fn fixed_index(self, (nx, ny, nz): (usize, usize, usize)) -> Option<usize> {
        match self {
            Boundary::Top => nz.checked_sub(1),
            Boundary::Bottom => (nz > 0).then_some(0),
            Boundary::Left => (nx > 0).then_some(0),
            Boundary::Back => (ny > 0).then_some(0),
            Boundary::Right => nx.checked_sub(1),
            Boundary::Front => ny.checked_sub(1),
            Boundary::Interior => None,
        }
    }

    /// Whether `(i, j, k)` satisfies this face's predicate, ignoring
    /// precedence. Always false for `Interior`.
    pub fn matches(self, dims: (usize, usize, usize), i: usize, j: usize, k: usize) -> bool {
        let coord = match self.normal_axis() {
            Some(Axis::X) => i,
            Some(Axis::Y) => j,
            Some(Axis::Z) => k,
            None => return false,
        };
        self.fixed_index(dims) == Some(coord)
    }

    /// Number of points a traversal of this face yields.
    pub fn face_len(self, (nx, ny, nz): (usize, usize, usize)) -> usize {
        match self.normal_axis() {
            Some(Axis::X) => ny * nz,
            Some(Axis::Y) => nx * nz,
            Some(Axis::Z) => nx * ny,
            None => 0,
        }
    }
}

impl<T> Grid<T> {
    /// Classify `(i, j, k)` as one face or `Interior`.
    ///
    /// Edges and corners resolve by precedence: z faces, then x faces, then
    /// y faces (Top, Bottom, Left, Right, Front, Back). With `nz == 1` every
    /// point is `Top`.
    pub fn classify(&self, i: usize, j: usize, k: usize) -> Result<Boundary> {
        if !self.contains(i, j, k) {
            return Err(self.out_of_range(i, j, k));
        }
        let dims = self.dimensions();
        Ok(Boundary::FACES
            .into_iter()
            .find(|face| face.matches(dims, i, j, k))
            .unwrap_or(Boundary::Interior))
    }

    /// Start a traversal over the points of `face`.
    pub fn boundary(&self, face: Boundary) -> BoundaryTraversal {
        BoundaryTraversal::new(face, self.dimensions())
    }

    /// Write `f(i, j, k)` to every point of `face`.
    ///
    /// `f` must depend on position only; it is called in traversal order,
    /// interleaved with the writes.
    pub fn apply_to_boundary<F>(&mut self, face: Boundary, mut f: F)
    where
        F: FnMut(usize, usize, usize) -> T,
    {
        let mut cursor = self.boundary(face);
        while let Some((i, j, k)) = cursor.next_point() {
            let idx = self.linear(i, j, k);
            self.as_mut_slice()[idx] = f(i, j, k);
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Write `value` to every point of `face`. No-op for `Interior`.
    pub fn set_boundary_value(&mut self, face: Boundary, value: T) {
        self.apply_to_boundary(face, |_, _, _| value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_faces() {
        let grid: Grid<f64> = Grid::new(3, 3, 3).unwrap();
        assert_eq!(grid.classify(0, 1, 1).unwrap(), Boundary::Left);
        assert_eq!(grid.classify(2, 1, 1).unwrap(), Boundary::Right);
        assert_eq!(grid.classify(1, 0, 1).unwrap(), Boundary::Back);
        assert_eq!(grid.classify(1, 2, 1).unwrap(), Boundary::Front);
        assert_eq!(grid.classify(1, 1, 0).unwrap(), Boundary::Bottom);
        assert_eq!(grid.classify(1, 1, 2).unwrap(), Boundary::Top);
        assert_eq!(grid.classify(1, 1, 1).unwrap(), Boundary::Interior);
    }

    #[test]
    fn test_classify_edge_precedence() {
        let grid: Grid<f64> = Grid::new(3, 3, 3).unwrap();
        // z faces win over x and y faces
        assert_eq!(grid.classify(0, 0, 0).unwrap(), Boundary::Bottom);
        assert_eq!(grid.classify(2, 2, 2).unwrap(), Boundary::Top);
        // x faces win over y faces
        assert_eq!(grid.classify(0, 0, 1).unwrap(), Boundary::Left);
        assert_eq!(grid.classify(2, 2, 1).unwrap(), Boundary::Right);
    }

    #[test]
    fn test_classify_degenerate_axis() {
        let grid: Grid<u8> = Grid::new(4, 4, 1).unwrap();
        for j in 0..4 {
            for i in 0..4 {
                assert_eq!(grid.classify(i, j, 0).unwrap(), Boundary::Top);
            }
        }

        let column: Grid<u8> = Grid::new(1, 3, 3).unwrap();
        assert_eq!(column.classify(0, 1, 1).unwrap(), Boundary::Left);
    }

    #[test]
    fn test_classify_out_of_range() {
        let grid: Grid<u8> = Grid::new(3, 3, 3).unwrap();
        assert!(matches!(
            grid.classify(3, 0, 0),
            Err(crate::GridError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_face_helpers() {
        for face in Boundary::FACES {
            assert!(face.is_face());
            assert_eq!(face.opposite().opposite(), face);
            assert_ne!(face.opposite(), face);
            assert_eq!(face.opposite().normal_axis(), face.normal_axis());
        }
        assert!(!Boundary::Interior.is_face());
        assert_eq!(Boundary::Interior.normal_axis(), None);

        let dims = (2, 3, 4);
        assert_eq!(Boundary::Top.face_len(dims), 6);
        assert_eq!(Boundary::Left.face_len(dims), 12);
        assert_eq!(Boundary::Back.face_len(dims), 8);
        assert_eq!(Boundary::Interior.face_len(dims), 0);
    }

    #[test]
    fn test_matches_zero_extent_dims() {
        for face in Boundary::FACES {
            assert!(!face.matches((0, 0, 0), 0, 0, 0));
        }
        assert!(!Boundary::Front.matches((3, 0, 3), 0, 0, 0));
        assert!(!Boundary::Back.matches((3, 0, 3), 0, 0, 0));
        assert!(!Boundary::Right.matches((0, 2, 2), 0, 0, 0));
        assert!(Boundary::Left.matches((3, 0, 3), 0, 0, 0));
        assert_eq!(Boundary::Top.face_len((0, 4, 4)), 0);
    }

    #[test]
    fn test_set_boundary_value() {
        let mut grid: Grid<i32> = Grid::new(5, 5, 5).unwrap();
        grid.set_boundary_value(Boundary::Top, 1);
        grid.set_boundary_value(Boundary::Bottom, 2);
        grid.set_boundary_value(Boundary::Left, 3);
        grid.set_boundary_value(Boundary::Right, 4);

        assert_eq!(*grid.get(2, 2, 4).unwrap(), 1);
        assert_eq!(*grid.get(2, 2, 0).unwrap(), 2);
        assert_eq!(*grid.get(0, 2, 2).unwrap(), 3);
        assert_eq!(*grid.get(4, 2, 2).unwrap(), 4);
        // later writes overwrite shared edges
        assert_eq!(*grid.get(0, 2, 4).unwrap(), 3);
        assert_eq!(*grid.get(2, 2, 2).unwrap(), 0);
    }

    #[test]
    fn test_set_interior_is_noop() {
        let mut grid = Grid::filled(3, 3, 3, 7u8).unwrap();
        grid.set_boundary_value(Boundary::Interior, 0);
        assert!(grid.as_slice().iter().all(|&v| v == 7));
    }

    #[test]
    fn test_apply_to_boundary() {
        let mut grid: Grid<usize> = Grid::new(4, 4, 4).unwrap();
        grid.apply_to_boundary(Boundary::Top, |i, j, k| i + j + k);
        assert_eq!(*grid.get(1, 2, 3).unwrap(), 6);
        assert_eq!(*grid.get(3, 3, 3).unwrap(), 9);
        assert_eq!(*grid.get(1, 2, 2).unwrap(), 0);
    }

    #[test]
    fn test_apply_touches_only_face() {
        let mut grid = Grid::filled(3, 4, 5, -1.0).unwrap();
        grid.apply_to_boundary(Boundary::Front, |i, _, k| (i * 10 + k) as f64);
        let dims = grid.dimensions();
        for k in 0..5 {
            for j in 0..4 {
                for i in 0..3 {
                    let v = *grid.get(i, j, k).unwrap();
                    if Boundary::Front.matches(dims, i, j, k) {
                        assert_eq!(v, (i * 10 + k) as f64);
                    } else {
                        assert_eq!(v, -1.0);
                    }
                }
            }
        }
    }
}
