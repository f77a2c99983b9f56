// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time iteration itself.  One kernel serves both fractal
//! families, because the Mandelbrot and Julia recurrences are the
//! same z = z² + c; the families differ only in which of z0 and c is
//! taken from the pixel and which is held fixed.

use num::Complex;

/// Count the iterations before z escapes the radius-2 disk.
///
/// The escape test runs *before* each squaring step, against the
/// value entering that step, so iteration 0 tests z0 itself before
/// any update has happened.  A point that never escapes within the
/// bound reports `max_iter`.  This ordering shifts reported counts by
/// one at escape boundaries relative to the test-after-update
/// convention some references use; it is deliberate and the tests
/// pin it down.
///
/// The test is the strict inequality |z| > 2, evaluated as
/// re² + im² > 4 to avoid the square root.  The loop works on plain
/// f64 pairs and allocates nothing.
#[inline]
pub fn escape_time(z0: Complex<f64>, c: Complex<f64>, max_iter: usize) -> usize {
    let mut re = z0.re;
    let mut im = z0.im;
    for i in 0..max_iter {
        let re2 = re * re;
        let im2 = im * im;
        if re2 + im2 > 4.0 {
            return i;
        }
        im = 2.0 * re * im + c.im;
        re = re2 - im2 + c.re;
    }
    max_iter
}

/// Which escape-time family is being generated, along with the fixed
/// operand the family needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FractalKind {
    /// z0 = 0, c = the pixel's plane coordinate.
    Mandelbrot,
    /// z0 = the pixel's plane coordinate, c = the carried constant.
    Julia(Complex<f64>),
}

impl FractalKind {
    /// Run the kernel for one pixel, plugging the pixel's plane
    /// coordinate into whichever operand this family varies.
    #[inline]
    pub fn escape_time_at(&self, point: Complex<f64>, max_iter: usize) -> usize {
        match *self {
            FractalKind::Mandelbrot => escape_time(Complex::new(0.0, 0.0), point, max_iter),
            FractalKind::Julia(c) => escape_time(point, c, max_iter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO: Complex<f64> = Complex { re: 0.0, im: 0.0 };

    #[test]
    fn origin_never_escapes_the_mandelbrot() {
        assert_eq!(escape_time(ZERO, ZERO, 500), 500);
    }

    #[test]
    fn mandelbrot_far_point_escapes_on_the_first_update() {
        // z0 is 0, so iteration 0 sees a magnitude of 0; the huge c
        // only becomes visible at iteration 1.
        assert_eq!(escape_time(ZERO, Complex::new(3.0, 3.0), 100), 1);
    }

    #[test]
    fn julia_far_point_escapes_immediately() {
        // Here the pixel is z0, so iteration 0 already sees it.
        assert_eq!(escape_time(Complex::new(3.0, 3.0), ZERO, 100), 0);
    }

    #[test]
    fn escape_test_is_strictly_greater_than_two() {
        // |z0| is exactly 2: not an escape at iteration 0.  Squaring
        // carries it to 4, which escapes at iteration 1.
        assert_eq!(escape_time(Complex::new(2.0, 0.0), ZERO, 100), 1);
    }

    #[test]
    fn unit_magnitude_is_a_fixed_point_when_c_is_zero() {
        assert_eq!(escape_time(Complex::new(1.0, 0.0), ZERO, 1000), 1000);
        assert_eq!(escape_time(Complex::new(0.0, 1.0), ZERO, 1000), 1000);
    }

    #[test]
    fn small_magnitude_never_escapes_when_c_is_zero() {
        assert_eq!(escape_time(Complex::new(0.5, 0.5), ZERO, 1000), 1000);
    }

    #[test]
    fn magnitude_between_one_and_two_escapes_by_squaring() {
        // 1.5 → 2.25, over the radius on the very next test.
        assert_eq!(escape_time(Complex::new(1.5, 0.0), ZERO, 100), 1);
        // 1.1 takes a few doublings of its exponent to pass 2.
        let n = escape_time(Complex::new(1.1, 0.0), ZERO, 100);
        assert!(n > 1 && n < 10, "unexpected escape count {}", n);
    }

    #[test]
    fn counts_are_capped_at_the_bound() {
        // A point near the boundary of the set, given a tiny cap.
        assert_eq!(escape_time(ZERO, Complex::new(-0.75, 0.1), 3), 3);
    }

    #[test]
    fn kind_selects_the_varying_operand() {
        let p = Complex::new(3.0, 3.0);
        assert_eq!(FractalKind::Mandelbrot.escape_time_at(p, 100), 1);
        assert_eq!(FractalKind::Julia(ZERO).escape_time_at(p, 100), 0);
    }

    #[test]
    fn known_julia_interior_point_reaches_the_cap() {
        let c = Complex::new(-0.7, 0.27015);
        let p = Complex::new(0.3, 0.2);
        assert_eq!(FractalKind::Julia(c).escape_time_at(p, 150), 150);
    }
}
