// ABOUTME: Error types for the recipe engine with codes for API-layer translation
// ABOUTME: Covers dataset loading, dataset validation, invalid input, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

//! # Engine Error Handling
//!
//! The engine prefers total functions: unknown ingredients pass through,
//! lookups return `Option`, and an unreadable dataset degrades to an empty
//! catalog. `EngineError` is reserved for the few places where a caller has
//! to make a decision, such as a dataset that fails validation when loaded
//! strictly, or a fallback recipe requested without ingredients.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the engine crates
pub type EngineResult<T> = Result<T, EngineError>;

/// Error classification used by request handlers to pick a response status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Caller supplied input the engine cannot act on
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Resource Management (4000-4999)
    /// Requested record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Engine configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Dataset could not be read from storage
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Dataset could not be decoded
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
    /// Dataset decoded but violates an invariant
    #[serde(rename = "DATASET_INVALID")]
    DatasetInvalid = 9004,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ResourceNotFound => 404,
            Self::ConfigInvalid
            | Self::StorageError
            | Self::SerializationError
            | Self::DatasetInvalid => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "The engine configuration is invalid",
            Self::StorageError => "The recipe dataset could not be read",
            Self::SerializationError => "The recipe dataset is not well-formed",
            Self::DatasetInvalid => "The recipe dataset contains invalid records",
        }
    }
}

/// Errors raised by the recipe engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Dataset file could not be opened or read
    #[error("failed to read dataset {path}: {source}")]
    DatasetIo {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Dataset document does not match the expected schema
    #[error("failed to parse dataset: {0}")]
    DatasetParse(#[from] serde_json::Error),

    /// Dataset decoded but a record violates an invariant
    #[error("invalid dataset: {0}")]
    DatasetInvalid(String),

    /// Caller supplied input the operation cannot act on
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Requested record does not exist
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Kind of record (recipe, drink)
        resource: &'static str,
        /// Identifier that was looked up
        id: String,
    },

    /// Engine configuration is invalid
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a dataset validation error
    #[must_use]
    pub fn dataset_invalid(message: impl Into<String>) -> Self {
        Self::DatasetInvalid(message.into())
    }

    /// Create a not-found error for handlers that translate `None` into an error
    #[must_use]
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Classify this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::DatasetIo { .. } => ErrorCode::StorageError,
            Self::DatasetParse(_) => ErrorCode::SerializationError,
            Self::DatasetInvalid(_) => ErrorCode::DatasetInvalid,
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::NotFound { .. } => ErrorCode::ResourceNotFound,
            Self::Config(_) => ErrorCode::ConfigInvalid,
        }
    }

    /// HTTP status the API layer should answer with
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code().http_status()
    }
}
