//! Careersim - deterministic simulation core of a developer career game.
//!
//! Every operation is a pure function of its inputs and a string seed: the
//! company tick, contract and candidate pools, incidents, exam sessions and
//! grading, endings and achievements. Rendering, content loading and
//! persistence belong to the host.

pub mod achievements;
pub mod candidates;
pub mod company;
pub mod contracts;
pub mod core;
pub mod ending;
pub mod events;
pub mod exam;
pub mod incidents;

pub use crate::core::{BalanceConfig, CareerStage, ConfigError, SeedRng};
pub use events::{DomainEvent, DomainEventKind};
