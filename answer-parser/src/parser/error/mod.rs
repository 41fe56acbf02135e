pub mod kind;

pub use answer_error::Error;
