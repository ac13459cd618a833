//! Core library for the AutoApply job-application assistant.
//!
//! The crate hosts the logic behind the product surface: a deterministic
//! fit-score heuristic ([`scoring`]), the lifecycle manager that owns a
//! user's tracked job applications and their status board ([`tracker`]),
//! the candidate profile that feeds the scorer ([`profile`]), and a
//! local-only cache for generated resume and cover-letter text
//! ([`documents`]).
//!
//! Identity, durable storage, and entitlement checks are external
//! collaborators. They are consumed through the capability traits in
//! [`identity`], [`tracker::repository`], and [`profile`]; concrete
//! backend adapters live outside this crate. A [`session::SessionContext`]
//! scopes every manager to one signed-in owner for the lifetime of a user
//! session.

pub mod config;
pub mod documents;
pub mod identity;
pub mod profile;
pub mod scoring;
pub mod session;
pub mod storage;
pub mod telemetry;
pub mod tracker;
