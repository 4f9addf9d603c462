//! Input and outcome models.

pub mod input_set;
pub mod outcome;

pub use input_set::{InputField, InputSet};
pub use outcome::{json_text, PredictionOutcome, TransportFailure};
