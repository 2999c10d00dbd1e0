//! Deterministic course eligibility and recommendation engine.
//!
//! `advisor-core` filters a course catalog against a student's completion
//! history and institutional policy, ranks the eligible courses, and packs
//! them into a GPA-derived credit budget, producing a human-readable
//! justification for every inclusion and exclusion. All operations are
//! deterministic — identical snapshots and student context always produce
//! identical outputs, byte-for-byte.
//!
//! Storage, presentation, and session handling live in external
//! collaborators; this crate only consumes already-parsed snapshots.

pub mod advising;
pub mod catalog;
pub mod policy;
pub mod types;
