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

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SemanticLayerError;

/// Suffix appended to an entity type tag to name its full-text index
pub const FULLTEXT_INDEX_SUFFIX: &str = "Fulltext";

/// Kinds of entities that can be looked up by full-text search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Person,
    Movie,
}

impl EntityType {
    /// Lowercase tag used by callers and in index names
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Person => "person",
            EntityType::Movie => "movie",
        }
    }

    /// Node property the full-text clauses target
    pub fn property(&self) -> &'static str {
        match self {
            EntityType::Person => "name",
            EntityType::Movie => "title",
        }
    }

    /// Name of the full-text index, e.g. `personFulltext`
    pub fn fulltext_index(&self) -> String {
        format!("{}{}", self.as_str(), FULLTEXT_INDEX_SUFFIX)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = SemanticLayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "person" => Ok(EntityType::Person),
            "movie" => Ok(EntityType::Movie),
            _ => Err(SemanticLayerError::InvalidEntityType {
                entity_type: s.to_string(),
            }),
        }
    }
}
