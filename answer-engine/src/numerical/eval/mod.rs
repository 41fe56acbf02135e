mod binary;
mod unary;

use answer_error::Error;
use answer_parser::parser::ast::{Expr, LitNum, Paren};

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number. Evaluation fails on division by zero and on
    /// results that are not finite.
    fn eval(&self) -> Result<f64, Error>;
}

impl Eval for Expr {
    fn eval(&self) -> Result<f64, Error> {
        match self {
            Expr::Literal(literal) => literal.eval(),
            Expr::Paren(paren) => paren.eval(),
            Expr::Unary(unary) => unary.eval(),
            Expr::Binary(binary) => binary.eval(),
        }
    }
}

impl Eval for LitNum {
    fn eval(&self) -> Result<f64, Error> {
        super::finite(self.value, self.span.clone())
    }
}

impl Eval for Paren {
    fn eval(&self) -> Result<f64, Error> {
        self.expr.eval()
    }
}
