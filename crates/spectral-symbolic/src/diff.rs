//! Structural differentiation.

use crate::expr::{cos, sin, Expr};

impl Expr {
    /// Derivative with respect to the variable `by`, without simplification.
    pub fn diff(&self, by: &str) -> Expr {
        match self {
            Expr::Constant(_) => Expr::Constant(0.0),
            Expr::Variable(name) => {
                if name == by {
                    Expr::Constant(1.0)
                } else {
                    Expr::Constant(0.0)
                }
            }
            Expr::Sum(a, b) => a.diff(by) + b.diff(by),
            Expr::Product(a, b) => {
                a.diff(by) * b.as_ref().clone() + a.as_ref().clone() * b.diff(by)
            }
            Expr::Power(base, exponent) => diff_power(base, exponent, by),
            Expr::Ln(a) => a.as_ref().clone().reciprocal() * a.diff(by),
            Expr::Sin(a) => cos(a.as_ref().clone()) * a.diff(by),
            Expr::Cos(a) => -sin(a.as_ref().clone()) * a.diff(by),
        }
    }

    /// `diff(by)` followed by one `simplify` pass.
    pub fn derivative(&self, by: &str) -> Expr {
        log::trace!("Differentiating {} by {}", self, by);
        self.diff(by).simplify()
    }
}

fn diff_power(base: &Expr, exponent: &Expr, by: &str) -> Expr {
    match (base.as_constant(), exponent.as_constant()) {
        (Some(_), Some(_)) => Expr::Constant(0.0),
        // c^g: c^g * ln(c) * g'
        (Some(_), None) => {
            Expr::power(base.clone(), exponent.clone()) * base.clone().ln() * exponent.diff(by)
        }
        // f^c: c * f^(c-1) * f'
        (None, Some(c)) => {
            Expr::Constant(c) * base.clone().pow(c - 1.0) * base.diff(by)
        }
        // f^g: g * f^(g-1) * f' + f^g * ln(f) * g'
        (None, None) => {
            exponent.clone() * base.clone().pow(exponent.clone() - Expr::Constant(1.0))
                * base.diff(by)
                + Expr::power(base.clone(), exponent.clone()) * base.clone().ln() * exponent.diff(by)
        }
    }
}
