//! The errors the generator can produce.  All of them are detected
//! up-front, before any pixel is computed; the iteration kernel
//! itself is total and cannot fail once its inputs pass these checks.

/// Everything that can go wrong while setting up a generation run.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum FractalError {
    /// The requested pixel grid has a zero-sized axis.
    #[fail(
        display = "invalid dimensions {}x{}: width and height must both be positive",
        width, height
    )]
    InvalidDimension {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// The iteration cap is zero, which would make every cell
    /// meaningless.
    #[fail(display = "invalid iteration bound {}: must be positive", _0)]
    InvalidIterationBound(usize),

    /// A Julia constant string matched neither a known preset name
    /// nor a complex literal.
    #[fail(
        display = "invalid Julia constant {:?}: expected a preset name such as \"classic\" or a complex literal such as \"0.3+0.5i\"",
        _0
    )]
    InvalidConstantFormat(String),
}
