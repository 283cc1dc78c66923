//! Full and partial evaluation against variable bindings.

use std::collections::HashMap;
use std::convert::Infallible;

use crate::error::SymbolicError;
use crate::expr::Expr;

/// Variable name to value.
pub type Bindings = HashMap<String, f64>;

/// Builds [`Bindings`] from `(name, value)` pairs.
pub fn bindings(pairs: &[(&str, f64)]) -> Bindings {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

impl Expr {
    /// Evaluates the tree, failing on the first variable without a binding.
    pub fn eval(&self, values: &Bindings) -> Result<f64, SymbolicError> {
        self.evaluate(&mut |name| {
            values
                .get(name)
                .copied()
                .ok_or_else(|| SymbolicError::UnboundVariable(name.to_string()))
        })
    }

    /// Replaces bound variables by constants and keeps the rest symbolic.
    pub fn partial_eval(&self, values: &Bindings) -> Expr {
        match self {
            Expr::Constant(_) => self.clone(),
            Expr::Variable(name) => match values.get(name) {
                Some(value) => Expr::Constant(*value),
                None => self.clone(),
            },
            Expr::Sum(a, b) => Expr::sum(a.partial_eval(values), b.partial_eval(values)),
            Expr::Product(a, b) => Expr::product(a.partial_eval(values), b.partial_eval(values)),
            Expr::Power(a, b) => Expr::power(a.partial_eval(values), b.partial_eval(values)),
            Expr::Ln(a) => Expr::Ln(Box::new(a.partial_eval(values))),
            Expr::Sin(a) => Expr::Sin(Box::new(a.partial_eval(values))),
            Expr::Cos(a) => Expr::Cos(Box::new(a.partial_eval(values))),
        }
    }

    /// A `Constant` when every variable is bound, the partially evaluated tree otherwise.
    pub fn eval_or_partial(&self, values: &Bindings) -> Expr {
        match self.eval(values) {
            Ok(value) => Expr::Constant(value),
            Err(err) => {
                log::trace!("Falling back to partial evaluation: {}", err);
                self.partial_eval(values)
            }
        }
    }

    /// Evaluates with every free variable set to `value`.
    pub fn eval_all_at(&self, value: f64) -> f64 {
        match self.evaluate::<Infallible>(&mut |_| Ok(value)) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    fn evaluate<E>(&self, lookup: &mut dyn FnMut(&str) -> Result<f64, E>) -> Result<f64, E> {
        Ok(match self {
            Expr::Constant(value) => *value,
            Expr::Variable(name) => lookup(name.as_str())?,
            Expr::Sum(a, b) => a.evaluate(lookup)? + b.evaluate(lookup)?,
            Expr::Product(a, b) => a.evaluate(lookup)? * b.evaluate(lookup)?,
            Expr::Power(a, b) => a.evaluate(lookup)?.powf(b.evaluate(lookup)?),
            Expr::Ln(a) => a.evaluate(lookup)?.ln(),
            Expr::Sin(a) => a.evaluate(lookup)?.sin(),
            Expr::Cos(a) => a.evaluate(lookup)?.cos(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_reports_unbound_variable() {
        let expr = Expr::var("x") + Expr::var("y");
        let err = expr.eval(&bindings(&[("x", 1.0)])).unwrap_err();
        assert_eq!(err, SymbolicError::UnboundVariable("y".to_string()));
        assert_eq!(err.to_string(), "no value for variable y");
    }

    #[test]
    fn test_eval_all_at() {
        let expr = Expr::var("x") * Expr::var("y") + Expr::from(1);
        assert_eq!(expr.eval_all_at(3.0), 10.0);
    }
}
