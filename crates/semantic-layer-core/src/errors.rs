/*
Copyright 2024, Zep Software, Inc.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use thiserror::Error;

use crate::database::DatabaseError;

/// Base error type for semantic layer operations
#[derive(Debug, Error)]
pub enum SemanticLayerError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Unknown entity type '{entity_type}', expected one of: person, movie")]
    InvalidEntityType { entity_type: String },

    #[error("Candidate limit must be a positive integer, got {limit}")]
    InvalidLimit { limit: usize },

    #[error("No searchable words left in {input:?} after removing Lucene special characters")]
    EmptyQuery { input: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SemanticLayerError {
    /// True for failures caused by caller-supplied arguments rather than the database
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SemanticLayerError::InvalidEntityType { .. }
                | SemanticLayerError::InvalidLimit { .. }
                | SemanticLayerError::EmptyQuery { .. }
        )
    }
}

/// Result type alias for semantic layer operations
pub type SemanticLayerResult<T> = Result<T, SemanticLayerError>;
