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

use tracing::debug;

use crate::errors::{SemanticLayerError, SemanticLayerResult};
use crate::types::EntityType;

/// Fuzzy similarity appended to every term of a generated query
pub const FUZZY_SIMILARITY: f64 = 0.8;

/// Characters with special meaning in Lucene query syntax
pub const LUCENE_SPECIAL_CHARS: [char; 18] = [
    '+', '-', '&', '|', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '\\',
];

fn is_lucene_special(c: char) -> bool {
    LUCENE_SPECIAL_CHARS.contains(&c)
}

/// Replace every Lucene special character with a space and trim the result
pub fn remove_lucene_chars(text: &str) -> String {
    text.chars()
        .map(|c| if is_lucene_special(c) { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Build a fuzzy full-text query matching every word of `input` against the
/// property of `entity_type`.
///
/// `"Tom Hanks"` for [`EntityType::Person`] becomes
/// `name:Tom~0.8 AND name:Hanks~0.8`. Words keep their input order.
///
/// Returns [`SemanticLayerError::EmptyQuery`] when nothing but special
/// characters and whitespace is left to search for.
pub fn generate_fulltext_query(input: &str, entity_type: EntityType) -> SemanticLayerResult<String> {
    let property = entity_type.property();
    let sanitized = remove_lucene_chars(input);
    let words: Vec<&str> = sanitized.split_whitespace().collect();

    let (last, rest) = words.split_last().ok_or_else(|| SemanticLayerError::EmptyQuery {
        input: input.to_string(),
    })?;

    let mut fulltext_query = String::new();
    for word in rest {
        fulltext_query.push_str(&format!(" {}:{}~{} AND", property, word, FUZZY_SIMILARITY));
    }
    fulltext_query.push_str(&format!(" {}:{}~{}", property, last, FUZZY_SIMILARITY));

    let fulltext_query = fulltext_query.trim().to_string();
    debug!(%entity_type, %fulltext_query, "generated full-text query");
    Ok(fulltext_query)
}
