//! Candidate pool generation and hiring.

pub mod data;
pub mod generation;
pub mod logic;
pub mod types;

pub use generation::{expected_salary, generate_candidates, CandidateRequest};
pub use logic::{assign_employee, hire_candidate, HireError};
pub use types::Candidate;
