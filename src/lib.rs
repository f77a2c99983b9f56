#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time fractal generator
//!
//! The Mandelbrot and Julia sets are the two classic escape-time
//! fractals.  Both iterate z = z² + c over points of the complex
//! plane and count how many steps it takes for z to "escape" past
//! magnitude 2.  They differ only in which operand is fixed: the
//! Mandelbrot starts z at zero and takes c from the pixel's location,
//! while a Julia set starts z at the pixel's location and holds c
//! constant across the whole image.  That count-per-pixel grid is the
//! raw material for rendering; this crate computes the grid and stays
//! out of the image business.
//!
//! The pipeline: a [`ViewParameters`] record (center, zoom, pixel
//! size, iteration cap) is mapped to a rectangle of the complex plane
//! by [`planes::PlaneMapper`], then [`grid::GridRenderer`] runs the
//! escape-time kernel over every pixel, in parallel, and hands back
//! the iteration grid plus timing numbers.
//!
//! [`ViewParameters`]: params/struct.ViewParameters.html
//! [`planes::PlaneMapper`]: planes/struct.PlaneMapper.html
//! [`grid::GridRenderer`]: grid/struct.GridRenderer.html

extern crate crossbeam;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate itertools;
extern crate num;

pub mod constants;
pub mod errors;
pub mod grid;
pub mod kernel;
pub mod params;
pub mod planes;

pub use constants::ConstantSpec;
pub use errors::FractalError;
pub use grid::{GridRenderer, IterationGrid, RenderStats};
pub use kernel::FractalKind;
pub use params::ViewParameters;
