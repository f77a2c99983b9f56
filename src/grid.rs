// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drives the escape-time kernel over every pixel of an image-sized
//! grid.  Pixels are mutually independent, so the grid is split into
//! bands of whole rows, one scoped thread per band, writing into
//! disjoint slices of a single allocation.  No locks, no shared
//! mutable state, and the result is bit-identical no matter how many
//! threads did the work.

extern crate crossbeam;

use std::time::{Duration, Instant};

use errors::FractalError;
use kernel::FractalKind;
use params::ViewParameters;
use planes::{PlaneBounds, PlaneMapper};

/// A height×width matrix of escape iteration counts, row-major, with
/// row 0 on the y_min (bottom) edge of the plane.  Every cell is in
/// the range 0..=max_iter.  Built once per generation call and
/// immutable afterward.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationGrid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl IterationGrid {
    /// Width of the grid in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The count at one cell.  Row 0 is the bottom of the plane.
    pub fn get(&self, row: usize, column: usize) -> u32 {
        self.cells[row * self.width + column]
    }

    /// The raw row-major cell buffer, for renderers that want to walk
    /// it linearly.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// The largest count anywhere in the grid.  Renderers use this to
    /// normalize counts into a color range.
    pub fn max_count(&self) -> u32 {
        self.cells.iter().cloned().max().unwrap_or(0)
    }
}

/// Timing observations from one generation call.  Purely diagnostic;
/// the numbers have no effect on the grid.
#[derive(Copy, Clone, Debug)]
pub struct RenderStats {
    /// Wall-clock time the generation took.
    pub elapsed: Duration,
    /// Pixels computed per second of wall-clock time.
    pub pixels_per_second: f64,
}

/// Takes a logical view and a fractal family, and produces iteration
/// grids from them.  Validation happens at construction; a built
/// renderer cannot fail.
#[derive(Copy, Clone, Debug)]
pub struct GridRenderer {
    plane: PlaneMapper,
    kind: FractalKind,
    max_iter: usize,
}

impl GridRenderer {
    /// Requires the logical view (pixel size, center, zoom, iteration
    /// bound) and the fractal family.  Rejects zero-sized dimensions
    /// and a zero iteration bound before doing any work.
    pub fn new(view: &ViewParameters, kind: FractalKind) -> Result<GridRenderer, FractalError> {
        if view.width == 0 || view.height == 0 {
            return Err(FractalError::InvalidDimension {
                width: view.width,
                height: view.height,
            });
        }
        if view.max_iter == 0 {
            return Err(FractalError::InvalidIterationBound(view.max_iter));
        }
        let bounds = PlaneBounds::from_view(view.center, view.zoom, view.width, view.height);
        Ok(GridRenderer {
            plane: PlaneMapper::new(view.width, view.height, bounds),
            kind,
            max_iter: view.max_iter,
        })
    }

    /// The complex rectangle this renderer covers.
    pub fn bounds(&self) -> PlaneBounds {
        self.plane.bounds
    }

    /// Fill a band of whole rows, starting at `first_row` of the full
    /// grid.  Each worker gets a disjoint band, so this needs no
    /// synchronization at all.
    fn render_rows(&self, band: &mut [u32], first_row: usize) {
        let width = self.plane.width;
        let rows = band.len() / width;
        for (row, column) in iproduct!(0..rows, 0..width) {
            let point = self.plane.pixel_to_point(column, first_row + row);
            band[row * width + column] = self.kind.escape_time_at(point, self.max_iter) as u32;
        }
    }

    /// The main function for single-threaded generation.
    pub fn render_single(&self) -> (IterationGrid, RenderStats) {
        let start = Instant::now();
        let mut cells = vec![0u32; self.plane.len()];
        self.render_rows(&mut cells, 0);
        let stats = self.stats_since(start);
        (self.finish(cells), stats)
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count.  The grid buffer is chunked into row bands, one
    /// scoped thread per band; the scope join is the only barrier.  A
    /// thread count of zero is treated as one.
    pub fn render(&self, threads: usize) -> (IterationGrid, RenderStats) {
        let threads = if threads == 0 { 1 } else { threads };
        let start = Instant::now();
        let mut cells = vec![0u32; self.plane.len()];
        let band_rows = (self.plane.height + threads - 1) / threads;
        crossbeam::scope(|spawner| {
            for (i, band) in cells.chunks_mut(band_rows * self.plane.width).enumerate() {
                spawner.spawn(move |_| self.render_rows(band, i * band_rows));
            }
        })
        .unwrap();
        let stats = self.stats_since(start);
        (self.finish(cells), stats)
    }

    fn stats_since(&self, start: Instant) -> RenderStats {
        let elapsed = start.elapsed();
        let seconds = elapsed.as_secs() as f64 + f64::from(elapsed.subsec_nanos()) * 1e-9;
        RenderStats {
            elapsed,
            pixels_per_second: (self.plane.len() as f64) / seconds,
        }
    }

    fn finish(&self, cells: Vec<u32>) -> IterationGrid {
        IterationGrid {
            width: self.plane.width,
            height: self.plane.height,
            cells,
        }
    }
}
