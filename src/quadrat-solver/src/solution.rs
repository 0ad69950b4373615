use std::fmt;

use crate::Coefficients;

/// The roots of one equation, or the reason there are none to report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Roots {
    /// At least one coefficient was missing or malformed.
    Invalid,
    /// The degenerate `0 = 0` equation; every x is a root.
    All,
    /// No real roots exist.
    None,
    /// The linear case; a single root.
    One(f64),
    /// Two real roots, possibly coinciding.
    Two(f64, f64),
}

/// The outcome of solving one equation.
///
/// Displays as a single output line in the form
/// `(a,b,c) => (r1, r2) Xmin=x`, with missing coefficients rendered
/// as empty fields and floats printed to six decimal places.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub coefficients: Coefficients,
    pub roots: Roots,
    /// Abscissa of the parabola's extremum; absent for degenerate
    /// and linear equations.
    pub xmin: Option<f64>,
}

fn write_coefficient(f: &mut fmt::Formatter<'_>, value: Option<i64>) -> fmt::Result {
    match value {
        Some(value) => write!(f, "{value}"),
        None => Ok(()),
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.coefficients;

        write!(f, "(")?;
        write_coefficient(f, a)?;
        write!(f, ",")?;
        write_coefficient(f, b)?;
        write!(f, ",")?;
        write_coefficient(f, c)?;
        write!(f, ") => ")?;

        match self.roots {
            Roots::Invalid => return write!(f, "invalid input"),
            Roots::All => write!(f, "All roots")?,
            Roots::None => write!(f, "No roots")?,
            Roots::One(r) => write!(f, "({r:.6})")?,
            Roots::Two(r1, r2) => write!(f, "({r1:.6}, {r2:.6})")?,
        }

        match self.xmin {
            Some(xmin) => write!(f, " Xmin={xmin:.6}"),
            None => write!(f, " No Xmin"),
        }
    }
}
