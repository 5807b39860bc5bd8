// ABOUTME: Core types and constants for the nutriplan meal-plan engine
// ABOUTME: Foundation crate with error handling, profile and day-plan models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing shared types and constants for the nutriplan
//! meal-plan engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Plan-shape constants (plan length, rotation cycle, meal slots)
//! - **models**: User profile inputs and the day-plan records produced for them

/// Unified error handling system with standard error codes
pub mod errors;

/// Plan-shape constants shared by the generator and its consumers
pub mod constants;

/// Profile and day-plan data models
pub mod models;
