pub mod estimate;
pub use estimate::*;

pub mod evaluator;
pub use evaluator::*;
