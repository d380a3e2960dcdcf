pub mod evaluator;
pub mod validator;

pub use evaluator::Evaluator;
pub use validator::Validator;
