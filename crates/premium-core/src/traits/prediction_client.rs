use crate::models::{InputSet, PredictionOutcome};

/// Issues one prediction request for a complete input set.
///
/// Implementations never retry and never return `Err`: every failure is
/// folded into the outcome. Callers check [`InputSet::is_complete`] first;
/// an incomplete set is not a precondition violation the client enforces.
pub trait IPredictionClient: Send + Sync {
    fn predict(&self, inputs: &InputSet) -> PredictionOutcome;
}

impl<T: IPredictionClient + ?Sized> IPredictionClient for std::sync::Arc<T> {
    fn predict(&self, inputs: &InputSet) -> PredictionOutcome {
        (**self).predict(inputs)
    }
}
