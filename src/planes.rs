// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane derived from a center point
//! and a zoom factor.  Row 0 of the integral plane corresponds to the
//! *bottom* of the complex rectangle (the y_min edge), which is the
//! convention downstream renderers expect.

use num::Complex;

/// The rectangle of the complex plane visible in one image.  The real
/// axis spans x_min..x_max and the imaginary axis spans y_min..y_max.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneBounds {
    /// Left edge on the real axis.
    pub x_min: f64,
    /// Right edge on the real axis.
    pub x_max: f64,
    /// Bottom edge on the imaginary axis.
    pub y_min: f64,
    /// Top edge on the imaginary axis.
    pub y_max: f64,
}

impl PlaneBounds {
    /// Derive the visible rectangle from a logical view: a center
    /// point, a zoom factor, and the pixel dimensions of the target
    /// image.  The classical Mandelbrot set fits within about four
    /// units on each axis, so the base extent at zoom 1.0 is 4.0, and
    /// larger zoom factors shrink the rectangle around the center.
    /// The horizontal extent is stretched by width/height so the
    /// rectangle's aspect ratio always matches the pixel grid's.
    pub fn from_view(center: Complex<f64>, zoom: f64, width: usize, height: usize) -> PlaneBounds {
        let aspect_ratio = (width as f64) / (height as f64);
        let base_extent = 4.0 / zoom;

        let x_extent = base_extent * aspect_ratio / 2.0;
        let y_extent = base_extent / 2.0;

        PlaneBounds {
            x_min: center.re - x_extent,
            x_max: center.re + x_extent,
            y_min: center.im - y_extent,
            y_max: center.im + y_extent,
        }
    }

    /// Width of the rectangle along the real axis.
    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the rectangle along the imaginary axis.
    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Contains the definitions of two planes: an integral cartesian
/// plane whose left-lower corner is assumed to be at 0,0, and a
/// rectangle of the complex plane.  Maps pixels from one to points on
/// the other.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// Width of the integral plane in pixels.
    pub width: usize,
    /// Height of the integral plane in pixels.
    pub height: usize,
    /// The complex rectangle the pixels are spread across.
    pub bounds: PlaneBounds,
    // Plane units per pixel along each axis.  Precomputed so the
    // per-pixel mapping is two multiply-adds.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the pixel dimensions and the complex
    /// rectangle they cover.  The caller is responsible for having
    /// validated that the dimensions are non-zero.
    pub fn new(width: usize, height: usize, bounds: PlaneBounds) -> PlaneMapper {
        let steps = (
            bounds.x_span() / (width as f64),
            bounds.y_span() / (height as f64),
        );
        PlaneMapper {
            width,
            height,
            bounds,
            steps,
        }
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// complex number at the equivalent location on the complex
    /// rectangle.  Column 0 sits on the x_min edge and row 0 sits on
    /// the y_min edge, so increasing rows climb the imaginary axis.
    pub fn pixel_to_point(&self, column: usize, row: usize) -> Complex<f64> {
        Complex::new(
            self.bounds.x_min + (column as f64) * self.steps.0,
            self.bounds.y_min + (row as f64) * self.steps.1,
        )
    }
}
