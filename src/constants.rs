//! Resolution of the Julia constant c.  Callers can hand us an
//! already-built complex number, a (re, im) pair, or a string; a
//! string is first tried against the table of famous named constants
//! and otherwise parsed as a complex literal like "0.3+0.5i".  The
//! constant is resolved exactly once, before generation starts, and
//! never re-parsed on the hot path.

use errors::FractalError;
use num::Complex;

/// The named Julia constants everybody asks for, by reputation.  The
/// table is fixed at compile time and shared read-only; lookups
/// ignore ASCII case.
pub static FAMOUS_CONSTANTS: [(&str, f64, f64); 10] = [
    ("classic", -0.7, 0.27015),
    ("dragon", -0.8, 0.156),
    ("spiral", -0.7, -0.3),
    ("lightning", -0.54, 0.54),
    ("dendrite", -0.235, 0.85),
    ("rabbit", -0.123, 0.745),
    ("airplane", -0.75, 0.1),
    ("galaxy", 0.285, 0.01),
    ("flower", -0.4, 0.6),
    ("seahorse", -0.75, 0.11),
];

/// Look a preset name up in the famous-constant table, ignoring ASCII
/// case.
pub fn lookup_famous(name: &str) -> Option<Complex<f64>> {
    FAMOUS_CONSTANTS
        .iter()
        .find(|&&(known, _, _)| known.eq_ignore_ascii_case(name))
        .map(|&(_, re, im)| Complex::new(re, im))
}

/// The three shapes a caller can supply the constant in.  A tagged
/// variant at the boundary; `resolve` collapses it to one concrete
/// complex number before any pixel work happens.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstantSpec {
    /// An already-resolved complex value, passed through unchanged.
    Value(Complex<f64>),
    /// Explicit real and imaginary components.
    Parts(f64, f64),
    /// A preset name or a complex literal, resolved in that order.
    Text(String),
}

impl ConstantSpec {
    /// Collapse the spec to a concrete constant.  Strings that match
    /// neither a preset name nor a complex literal fail with
    /// `InvalidConstantFormat` carrying the offending text.
    pub fn resolve(&self) -> Result<Complex<f64>, FractalError> {
        match *self {
            ConstantSpec::Value(c) => Ok(c),
            ConstantSpec::Parts(re, im) => Ok(Complex::new(re, im)),
            ConstantSpec::Text(ref s) => match lookup_famous(s) {
                Some(c) => Ok(c),
                None => parse_literal(s).ok_or_else(|| FractalError::InvalidConstantFormat(s.to_string())),
            },
        }
    }
}

/// Parse a complex literal of the form `<real><sign><imag>i`.  The
/// imaginary-unit suffix may be `i` or `j` (the original tooling
/// around this format wrote `j`), and whitespace anywhere in the
/// string is ignored.  Both components must be present; exponent
/// notation inside either component is fine.
fn parse_literal(s: &str) -> Option<Complex<f64>> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let body = match compact.chars().last() {
        Some('i') | Some('I') | Some('j') | Some('J') => &compact[..compact.len() - 1],
        _ => return None,
    };

    // The separator is the last +/- that isn't a leading sign and
    // isn't part of an exponent.
    let bytes = body.as_bytes();
    let mut split = None;
    for i in (1..bytes.len()).rev() {
        if (bytes[i] == b'+' || bytes[i] == b'-')
            && bytes[i - 1] != b'e'
            && bytes[i - 1] != b'E'
        {
            split = Some(i);
            break;
        }
    }
    let split = split?;

    let re = body[..split].parse::<f64>().ok()?;
    let im = body[split..].parse::<f64>().ok()?;
    Some(Complex::new(re, im))
}
