use answer_error::Error;
use answer_parser::parser::{ast::Unary, token::op::UnaryOpKind};
use crate::numerical::eval::Eval;

impl Eval for Unary {
    fn eval(&self) -> Result<f64, Error> {
        let operand = self.operand.eval()?;
        Ok(match self.op.kind {
            UnaryOpKind::Pos => operand,
            UnaryOpKind::Neg => -operand,
        })
    }
}
