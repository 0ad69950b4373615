use std::array;

use crate::{Coefficients, Equation, Roots, Solution};

fn parse_coefficients(equation: &Equation) -> Coefficients {
    // str::parse rejects trailing garbage and out-of-range values,
    // which is exactly the lenience we want: bad tokens simply
    // become missing coefficients.
    array::from_fn(|i| equation[i].as_deref().and_then(|token| token.parse().ok()))
}

fn solve_linear(coefficients: Coefficients, b: i64, c: i64) -> Solution {
    let roots = if b == 0 {
        if c == 0 {
            Roots::All
        } else {
            Roots::None
        }
    } else {
        Roots::One(-(c as f64) / b as f64)
    };

    Solution {
        coefficients,
        roots,
        xmin: None,
    }
}

/// Solves one equation record.
///
/// Pure and stateless; safe to call from any number of threads
/// simultaneously.
pub fn solve(equation: &Equation) -> Solution {
    let coefficients = parse_coefficients(equation);

    let [Some(a), Some(b), Some(c)] = coefficients else {
        return Solution {
            coefficients,
            roots: Roots::Invalid,
            xmin: None,
        };
    };

    if a == 0 {
        return solve_linear(coefficients, b, c);
    }

    // Work with the root sum and product instead of raw coefficients
    // so that large i64 values stay well inside f64 range.
    let sum = -(b as f64) / a as f64;
    let product = c as f64 / a as f64;
    let xmin = sum / 2.0;

    let discriminant = sum * sum - 4.0 * product;
    if discriminant < 0.0 {
        return Solution {
            coefficients,
            roots: Roots::None,
            xmin: Some(xmin),
        };
    }

    let sqrt_d = discriminant.sqrt();
    Solution {
        coefficients,
        roots: Roots::Two((sum + sqrt_d) / 2.0, (sum - sqrt_d) / 2.0),
        xmin: Some(xmin),
    }
}
