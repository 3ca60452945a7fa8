//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate eligibility, the re-basing engine, and directory commits
//!   into caller-facing operations.
//! - Keep CLI and future transport layers decoupled from storage details.

pub mod directory_service;
