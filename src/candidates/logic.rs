//! Turning candidates into employees.

use super::types::Candidate;
use crate::company::types::{Assignment, Company, Employee};
use crate::core::balance::CandidateBalance;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HireError {
    #[error("the team is full ({max} employees)")]
    TeamFull { max: usize },
    #[error("employee id {0} is already taken")]
    DuplicateId(String),
}

/// Hires `candidate` as `employee_id`.
///
/// The new employee keeps the candidate's quality, role and traits, starts at
/// the configured morale, is paid the expected salary and is unassigned.
pub fn hire_candidate(
    company: &Company,
    candidate: &Candidate,
    employee_id: &str,
    balance: &CandidateBalance,
) -> Result<Company, HireError> {
    let max = balance.max_employees;
    if company.employees.len() >= max {
        return Err(HireError::TeamFull { max });
    }
    if company.employee(employee_id).is_some() {
        return Err(HireError::DuplicateId(employee_id.to_string()));
    }
    let mut next = company.clone();
    next.employees.push(Employee {
        id: employee_id.to_string(),
        name: candidate.name.clone(),
        role: candidate.role,
        quality: candidate.quality,
        morale: balance.starting_morale,
        traits: candidate.traits.clone(),
        assignment: Assignment::Unassigned,
        salary: candidate.expected_salary,
    });
    tracing::debug!(
        employee = employee_id,
        role = candidate.role.name(),
        salary = candidate.expected_salary,
        "candidate hired"
    );
    Ok(next)
}

/// Moves an employee to another assignment. Unknown ids leave the company as is.
pub fn assign_employee(company: &Company, employee_id: &str, assignment: Assignment) -> Company {
    let mut next = company.clone();
    if let Some(employee) = next.employees.iter_mut().find(|e| e.id == employee_id) {
        employee.assignment = assignment;
    }
    next
}
