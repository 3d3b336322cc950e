//! Recording error types
//!
//! Recorders are total over validated input, so the only ways a recording
//! can fail are an input that does not fit the algorithm, or a run that would
//! outgrow the step budget.

use crate::input::InputError;
use crate::step::BudgetExceeded;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error(transparent)]
    StepBudgetExceeded(#[from] BudgetExceeded),
}
