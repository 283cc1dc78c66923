use std::collections::BTreeSet;
use std::f64::consts::{E, PI};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A node of a symbolic expression tree.
///
/// Trees are plain values: every operation returns a new tree and never
/// mutates its input.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Constant(f64),
    Variable(String),
    Sum(Box<Expr>, Box<Expr>),
    Product(Box<Expr>, Box<Expr>),
    /// `base ^ exponent`
    Power(Box<Expr>, Box<Expr>),
    Ln(Box<Expr>),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
}

impl Expr {
    pub fn constant(value: f64) -> Self {
        Expr::Constant(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn pi() -> Self {
        Expr::Constant(PI)
    }

    pub fn e() -> Self {
        Expr::Constant(E)
    }

    pub fn sum(a: Expr, b: Expr) -> Self {
        Expr::Sum(Box::new(a), Box::new(b))
    }

    pub fn product(a: Expr, b: Expr) -> Self {
        Expr::Product(Box::new(a), Box::new(b))
    }

    pub fn power(base: Expr, exponent: Expr) -> Self {
        Expr::Power(Box::new(base), Box::new(exponent))
    }

    pub fn pow(self, exponent: impl Into<Expr>) -> Self {
        Expr::power(self, exponent.into())
    }

    /// `E ^ self`
    pub fn exp(self) -> Self {
        Expr::power(Expr::e(), self)
    }

    /// `self ^ -1`
    pub fn reciprocal(self) -> Self {
        Expr::power(self, Expr::Constant(-1.0))
    }

    pub fn ln(self) -> Self {
        Expr::Ln(Box::new(self))
    }

    /// The value of a `Constant` node.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Expr::Constant(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Expr::Constant(_))
    }

    /// True for a `Constant` node holding exactly `value`.
    pub(crate) fn is_value(&self, value: f64) -> bool {
        self.as_constant() == Some(value)
    }

    /// Names of all free variables, sorted.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut BTreeSet<String>) {
        match self {
            Expr::Constant(_) => {}
            Expr::Variable(name) => {
                names.insert(name.clone());
            }
            Expr::Sum(a, b) | Expr::Product(a, b) | Expr::Power(a, b) => {
                a.collect_variables(names);
                b.collect_variables(names);
            }
            Expr::Ln(a) | Expr::Sin(a) | Expr::Cos(a) => a.collect_variables(names),
        }
    }
}

pub fn sin(x: Expr) -> Expr {
    Expr::Sin(Box::new(x))
}

pub fn cos(x: Expr) -> Expr {
    Expr::Cos(Box::new(x))
}

pub fn tan(x: Expr) -> Expr {
    sin(x.clone()) / cos(x)
}

pub fn csc(x: Expr) -> Expr {
    sin(x).reciprocal()
}

pub fn sec(x: Expr) -> Expr {
    cos(x).reciprocal()
}

pub fn cot(x: Expr) -> Expr {
    tan(x).reciprocal()
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Constant(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Constant(f64::from(value))
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::var(name)
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::sum(self, rhs)
    }
}

impl Sub for Expr {
    type Output = Expr;

    /// `a + (-1 * b)`
    fn sub(self, rhs: Expr) -> Expr {
        Expr::sum(self, -rhs)
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::product(self, rhs)
    }
}

impl Div for Expr {
    type Output = Expr;

    /// `a * b^-1`
    fn div(self, rhs: Expr) -> Expr {
        Expr::product(self, rhs.reciprocal())
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::product(Expr::Constant(-1.0), self)
    }
}

fn fmt_constant(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value == PI {
        return write!(f, "PI");
    }
    if value == E {
        return write!(f, "E");
    }
    let rounded = value.round();
    if value.is_finite() && (rounded - value).abs() < 1e-6 && rounded.abs() < i64::MAX as f64 {
        write!(f, "{}", rounded as i64)
    } else {
        write!(f, "{}", value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => fmt_constant(*value, f),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Sum(a, b) => write!(f, "({} + {})", a, b),
            Expr::Product(a, b) => write!(f, "({} * {})", a, b),
            Expr::Power(a, b) => write!(f, "({} ^ {})", a, b),
            Expr::Ln(a) => write!(f, "ln({})", a),
            Expr::Sin(a) => write!(f, "sin({})", a),
            Expr::Cos(a) => write!(f, "cos({})", a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_display() {
        assert_eq!(Expr::pi().to_string(), "PI");
        assert_eq!(Expr::e().to_string(), "E");
        assert_eq!(Expr::from(3).to_string(), "3");
        assert_eq!(Expr::from(-1.0).to_string(), "-1");
        assert_eq!(Expr::from(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_operator_shapes() {
        let x = Expr::var("x");
        let y = Expr::var("y");
        assert_eq!((x.clone() - y.clone()).to_string(), "(x + (-1 * y))");
        assert_eq!((x.clone() / y.clone()).to_string(), "(x * (y ^ -1))");
        assert_eq!(x.exp().to_string(), "(E ^ x)");
        assert_eq!(tan(y).to_string(), "(sin(y) * (cos(y) ^ -1))");
    }

    #[test]
    fn test_variables_are_collected_once() {
        let expr = Expr::var("y") * sin(Expr::var("x")) + Expr::var("x").pow(2);
        let names: Vec<String> = expr.variables().into_iter().collect();
        assert_eq!(names, vec!["x".to_string(), "y".to_string()]);
        assert!(Expr::pi().variables().is_empty());
    }
}
