//! Boundary condition demo.
//!
//! Builds a small temperature field, applies fixed and position-dependent
//! walls, then prints the face classification and a mid-plane slice.

use phyz_grid::{Boundary, Grid, GridError};

fn main() {
    if let Err(e) = run() {
        eprintln!("Grid error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GridError> {
    println!("=== Grid Boundary Demo ===\n");

    let (nx, ny, nz) = (6, 4, 5);
    let mut grid: Grid<f64> = Grid::new(nx, ny, nz)?;
    println!("Grid: {}x{}x{} ({} cells)", nx, ny, nz, grid.len());

    grid.set_boundary_value(Boundary::Top, 1.0);
    grid.set_boundary_value(Boundary::Bottom, 2.0);
    grid.set_boundary_value(Boundary::Left, 3.0);
    grid.set_boundary_value(Boundary::Right, 4.0);
    // Sinusoidal inflow profile on the front wall
    grid.apply_to_boundary(Boundary::Front, |i, _, k| {
        let x = i as f64 / (nx - 1) as f64;
        let z = k as f64 / (nz - 1) as f64;
        (std::f64::consts::PI * x).sin() * (std::f64::consts::PI * z).sin()
    });

    println!("\nClassification of the j = 1 plane (k rows, top first):");
    for k in (0..nz).rev() {
        let row: Vec<String> = (0..nx)
            .map(|i| grid.classify(i, 1, k).map(|b| format!("{:>8}", format!("{b:?}"))))
            .collect::<Result<_, _>>()?;
        println!("  k={k}: {}", row.join(""));
    }

    println!("\nValues on the y = {} slice:", ny - 1);
    let slice = grid.get_slice(1, ny - 1)?;
    for k in (0..nz).rev() {
        let row: Vec<String> = slice[k * nx..(k + 1) * nx]
            .iter()
            .map(|v| format!("{v:6.3}"))
            .collect();
        println!("  k={k}: {}", row.join(" "));
    }

    println!("\nInterior cells: {}", grid.interior().count());
    for face in Boundary::FACES {
        println!("{:>9}: {} points", format!("{face:?}"), grid.boundary(face).len());
    }

    // Invalid requests are reported, not clamped
    if let Err(e) = grid.get(nx, 0, 0) {
        println!("\nExpected failure: {}", e);
    }

    Ok(())
}
