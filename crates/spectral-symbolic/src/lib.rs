//! spectral-symbolic: a small symbolic expression engine.
//!
//! Expressions are trees of constants, variables, sums, products, powers,
//! natural logarithms, sines and cosines. They can be differentiated by any
//! variable, simplified with local rewrite rules and evaluated either fully
//! or partially against a set of variable bindings.
//!
//! ```
//! use spectral_symbolic::{bindings, Expr};
//!
//! let x = Expr::var("x");
//! let d = x.pow(3).derivative("x");
//! assert_eq!(d.to_string(), "(3 * (x ^ 2))");
//! assert_eq!(d.eval(&bindings(&[("x", 2.0)])).unwrap(), 12.0);
//! ```
pub mod diff;
pub mod error;
pub mod eval;
pub mod expr;
pub mod simplify;

pub use error::SymbolicError;
pub use eval::{bindings, Bindings};
pub use expr::{cos, cot, csc, sec, sin, tan, Expr};
