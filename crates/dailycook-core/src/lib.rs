// ABOUTME: Core types and constants for the DailyCook recipe engine
// ABOUTME: Foundation crate with error handling, thresholds, and dataset models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

#![deny(unsafe_code)]

//! # DailyCook Core
//!
//! Foundation crate providing shared types and constants for the DailyCook
//! recipe engine. It carries no matching logic of its own, so it changes
//! rarely and keeps incremental builds of the workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: `EngineError`, `ErrorCode`, and the `EngineResult` alias
//! - **constants**: matching, ranking, and daily-selection thresholds
//! - **models**: recipe, drink, and dataset records with their strict serde schema

/// Unified error handling with error codes for the surrounding API layer
pub mod errors;

/// Engine constants organized by component
pub mod constants;

/// Recipe, drink, fitness, and dataset models
pub mod models;

pub use errors::{EngineError, EngineResult, ErrorCode};
