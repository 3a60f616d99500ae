//! Decision Ranker - Multi-criteria decision analysis
//!
//! Derives criterion weights from pairwise judgments with the Analytic
//! Hierarchy Process, then ranks alternatives by their distance from an
//! ideal profile.
//!
//! # Modules
//!
//! - [`domain`] - Value objects, catalog entities, and the pure analysis engines
//! - [`application`] - Handlers that feed catalog data through the engines
//! - [`adapters`] - Request file loading
//! - [`config`] - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
