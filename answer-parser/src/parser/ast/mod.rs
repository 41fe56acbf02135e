pub mod binary;
pub mod condition;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod unary;

pub use binary::Binary;
pub use condition::Condition;
pub use expr::{Expr, Primary};
pub use literal::{LitNum, LitSym};
pub use paren::Paren;
pub use unary::Unary;
