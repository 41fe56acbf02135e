use answer_error::Error;
use answer_parser::parser::{ast::Binary, token::op::BinOpKind};
use crate::numerical::{error::DivisionByZero, eval::Eval, finite};

impl Eval for Binary {
    fn eval(&self) -> Result<f64, Error> {
        let left = self.lhs.eval()?;
        let right = self.rhs.eval()?;
        let value = match self.op.kind {
            BinOpKind::Mul => left * right,
            BinOpKind::Div => {
                if right == 0.0 {
                    return Err(Error::new(
                        vec![self.lhs.span(), self.op.span.clone(), self.rhs.span()],
                        DivisionByZero,
                    ));
                }
                left / right
            },
            BinOpKind::Add => left + right,
            BinOpKind::Sub => left - right,
        };
        finite(value, self.span())
    }
}
