//! Bottom-up rewriting with identity, annihilator and constant-folding rules.

use std::f64::consts::{E, PI};

use crate::expr::Expr;

/// Value of a constant that may be folded; `PI` stays symbolic.
fn foldable(expr: &Expr) -> Option<f64> {
    expr.as_constant().filter(|&value| value != PI)
}

impl Expr {
    /// One simplification pass, children first.
    ///
    /// Rules: `x + 0 -> x`, `x * 0 -> 0`, `x * 1 -> x`, `0 ^ x -> 0`,
    /// `x ^ 0 -> 1`, `x ^ 1 -> x`, `ln(1) -> 0`, `ln(E) -> 1`, and folding of
    /// sums, products and powers whose operands are both constants other than `PI`.
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Constant(_) | Expr::Variable(_) => self.clone(),
            Expr::Sum(a, b) => {
                let (a, b) = (a.simplify(), b.simplify());
                if a.is_value(0.0) {
                    b
                } else if b.is_value(0.0) {
                    a
                } else if let (Some(x), Some(y)) = (foldable(&a), foldable(&b)) {
                    Expr::Constant(x + y)
                } else {
                    Expr::sum(a, b)
                }
            }
            Expr::Product(a, b) => {
                let (a, b) = (a.simplify(), b.simplify());
                if a.is_value(0.0) || b.is_value(0.0) {
                    Expr::Constant(0.0)
                } else if a.is_value(1.0) {
                    b
                } else if b.is_value(1.0) {
                    a
                } else if let (Some(x), Some(y)) = (foldable(&a), foldable(&b)) {
                    Expr::Constant(x * y)
                } else {
                    Expr::product(a, b)
                }
            }
            Expr::Power(base, exponent) => {
                let (base, exponent) = (base.simplify(), exponent.simplify());
                if base.is_value(0.0) {
                    Expr::Constant(0.0)
                } else if exponent.is_value(0.0) {
                    Expr::Constant(1.0)
                } else if exponent.is_value(1.0) {
                    base
                } else if let (Some(x), Some(y)) = (foldable(&base), foldable(&exponent)) {
                    Expr::Constant(x.powf(y))
                } else {
                    Expr::power(base, exponent)
                }
            }
            Expr::Ln(a) => {
                let a = a.simplify();
                if a.is_value(1.0) {
                    Expr::Constant(0.0)
                } else if a.is_value(E) {
                    Expr::Constant(1.0)
                } else {
                    a.ln()
                }
            }
            Expr::Sin(a) => Expr::Sin(Box::new(a.simplify())),
            Expr::Cos(a) => Expr::Cos(Box::new(a.simplify())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::sin;

    #[test]
    fn test_identities() {
        let x = Expr::var("x");
        assert_eq!((x.clone() + Expr::from(0)).simplify(), x);
        assert_eq!((Expr::from(0) + x.clone()).simplify(), x);
        assert_eq!((x.clone() * Expr::from(0)).simplify(), Expr::Constant(0.0));
        assert_eq!((Expr::from(1) * x.clone()).simplify(), x);
        assert_eq!(x.clone().pow(0).simplify(), Expr::Constant(1.0));
        assert_eq!(x.clone().pow(1).simplify(), x);
        assert_eq!(Expr::from(0).pow(x.clone()).simplify(), Expr::Constant(0.0));
        assert_eq!(Expr::from(1).ln().simplify(), Expr::Constant(0.0));
        assert_eq!(Expr::e().ln().simplify(), Expr::Constant(1.0));
    }

    #[test]
    fn test_constant_folding() {
        assert_eq!((Expr::from(2) + Expr::from(3)).simplify(), Expr::Constant(5.0));
        assert_eq!((Expr::from(2) * Expr::from(3)).simplify(), Expr::Constant(6.0));
        assert_eq!(Expr::from(2).pow(3).simplify(), Expr::Constant(8.0));
        assert_eq!(
            sin(Expr::from(2) * Expr::from(4)).simplify(),
            sin(Expr::Constant(8.0))
        );
    }

    #[test]
    fn test_pi_is_not_folded() {
        let expr = Expr::pi() * Expr::from(2);
        assert_eq!(expr.simplify(), expr);
        let expr = Expr::pi() + Expr::from(1);
        assert_eq!(expr.simplify().to_string(), "(PI + 1)");
        let expr = Expr::pi().pow(2);
        assert_eq!(expr.simplify(), expr);
    }
}
