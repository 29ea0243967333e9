//! # Time Zone Meeting Scheduler
//!
//! A session-scoped meeting planner: pick a meeting time and organizer
//! time zone, add named participants each with their own zone, and see
//! the meeting in everyone's local wall-clock time.
//!
//! ## Features
//! - DST-aware conversion against the bundled IANA time zone database
//! - Offsets resolved per calendar date on both ends of the conversion
//! - Ordered, index-addressable participant list (add / remove / list)
//! - Fixed display format (`"14 Jun, 09:30 AM"`) shared with the UI
//! - Nothing persisted; all state lives for the session only

/// Interactive terminal commands and session loop
pub mod cli;
/// Configuration management and environment variables
pub mod config;
/// Typed errors shared across the crate
pub mod error;
/// Meeting spec, participants, and the derived schedule
pub mod planner;
/// Time zone registry and the conversion core
pub mod services;
/// Utility functions for datetime, validation, and formatting
pub mod utils;
