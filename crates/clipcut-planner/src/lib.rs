//! Clip suggestion heuristics.
//!
//! This crate provides:
//! - Duration-banded cut planning (`plan`)
//! - Role-based narration script selection (`pick_script`)
//!
//! Everything here is pure and synchronous: no I/O, no clock, no randomness.

pub mod planner;
pub mod script;

pub use planner::{plan, CutStrategy};
pub use script::{pick_script, NARRATION_TEMPLATES};
