//! The logical view of a generation run: what part of the plane to
//! look at, at what pixel resolution, and how hard to iterate.  These
//! are assembled by the caller (a CLI, a config layer, a test) and
//! are read-only once handed to the renderer.

use num::Complex;

/// Everything the generator needs to know about one image, minus the
/// fractal family itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewParameters {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// The plane point at the center of the image.
    pub center: Complex<f64>,
    /// Magnification.  1.0 shows the classical four-unit extent;
    /// larger values show a smaller region around the center.
    pub zoom: f64,
    /// Upper bound on the per-pixel iteration count.
    pub max_iter: usize,
    /// Color scheme name, carried through untouched for whatever
    /// renders the grid.  The generator never interprets it.
    pub colormap: String,
}

impl ViewParameters {
    /// Default view for the Mandelbrot set.  The set sits mostly to
    /// the left of the origin, so the default center is -0.5+0i.
    pub fn mandelbrot_defaults() -> ViewParameters {
        ViewParameters {
            width: 800,
            height: 600,
            center: Complex::new(-0.5, 0.0),
            zoom: 1.0,
            max_iter: 100,
            colormap: "hot".to_string(),
        }
    }

    /// Default view for Julia sets, which are symmetric about the
    /// origin.
    pub fn julia_defaults() -> ViewParameters {
        ViewParameters {
            width: 800,
            height: 600,
            center: Complex::new(0.0, 0.0),
            zoom: 1.0,
            max_iter: 100,
            colormap: "plasma".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_differ_only_where_the_families_do() {
        let m = ViewParameters::mandelbrot_defaults();
        let j = ViewParameters::julia_defaults();
        assert_eq!((m.width, m.height), (j.width, j.height));
        assert_eq!(m.max_iter, j.max_iter);
        assert_eq!(m.center, Complex::new(-0.5, 0.0));
        assert_eq!(j.center, Complex::new(0.0, 0.0));
    }
}
