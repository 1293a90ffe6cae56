//! Hearing Scheduling Engine for consumer complaint intake.
//!
//! This crate provides functionality for distributing a backlog of consumer
//! complaints across hearing slots on business days, following a configurable
//! calendar policy (holiday exclusions, weekend rule, ordered daily time
//! slots, and a fixed capacity per slot).

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod scheduling;
