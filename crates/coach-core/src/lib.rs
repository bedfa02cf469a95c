// ABOUTME: Core types for the coaching insight engine
// ABOUTME: Foundation crate with error handling, domain records and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Core
//!
//! Foundation crate providing shared types for the coaching insight engine.
//! It changes infrequently so the analytical crate and the facade can build
//! against a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Engine-wide constants organized by domain
//! - **models**: Client, log, exercise, progression, goal and achievement records

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Domain records supplied by the persistence collaborator
pub mod models;
