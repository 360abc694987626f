mod bracket;
mod candidate;
mod step;

pub use bracket::{Bracket, Direction};
pub use candidate::Candidate;
pub use step::{Step, StepError};
