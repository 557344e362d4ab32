pub mod error;
pub mod models;
pub mod validation;
pub mod quiz_flow;
pub mod preorder;
pub mod landing;

pub use error::{Error, ErrorCode, Result};
pub use models::*;
pub use validation::*;
pub use quiz_flow::{QuizError, QuizFlow, QuizView};
pub use preorder::{PreorderForm, SubmissionTicket};
pub use landing::LandingState;

#[cfg(test)]
mod tests;
