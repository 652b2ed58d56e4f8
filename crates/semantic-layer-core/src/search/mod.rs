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

//! Full-text candidate search
//!
//! - Lucene query sanitization
//! - Fuzzy full-text query generation per entity type
//! - Candidate lookup through the `<type>Fulltext` indexes

pub mod candidates;
pub mod fulltext;


pub use candidates::{Candidate, CandidateFetcher, CANDIDATE_QUERY, DEFAULT_CANDIDATE_LIMIT};
pub use fulltext::{
    generate_fulltext_query, remove_lucene_chars, FUZZY_SIMILARITY, LUCENE_SPECIAL_CHARS,
};
