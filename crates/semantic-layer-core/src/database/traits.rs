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

//! Database abstraction traits

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::types::{DatabaseError, DatabaseResult};

/// Represents a query parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryParameter {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
    List(Vec<QueryParameter>),
    Map(HashMap<String, QueryParameter>),
}

impl From<&str> for QueryParameter {
    fn from(value: &str) -> Self {
        QueryParameter::String(value.to_string())
    }
}

impl From<String> for QueryParameter {
    fn from(value: String) -> Self {
        QueryParameter::String(value)
    }
}

impl From<i64> for QueryParameter {
    fn from(value: i64) -> Self {
        QueryParameter::Integer(value)
    }
}

/// Represents a query result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<HashMap<String, QueryParameter>>,
}

impl QueryResult {
    /// Build a result from rows, collecting column names from the first row
    pub fn from_rows(rows: Vec<HashMap<String, QueryParameter>>) -> Self {
        let mut columns: Vec<String> = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        columns.sort();
        Self { columns, rows }
    }

    /// Read a string column from a row. Missing columns and nulls are `None`.
    pub fn optional_string(
        row: &HashMap<String, QueryParameter>,
        column: &str,
    ) -> DatabaseResult<Option<String>> {
        match row.get(column) {
            None | Some(QueryParameter::Null) => Ok(None),
            Some(QueryParameter::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(DatabaseError::Serialization(format!(
                "column '{}' is not a string: {:?}",
                column, other
            ))),
        }
    }
}

/// Read-only graph query engine
#[async_trait]
pub trait GraphDatabase: Send + Sync {
    /// Execute a query with bound parameters and return every row
    async fn execute(
        &self,
        query: &str,
        parameters: HashMap<String, QueryParameter>,
    ) -> DatabaseResult<QueryResult>;

    /// Check if the database connection is healthy
    async fn health_check(&self) -> DatabaseResult<bool>;

    /// Close the database connection
    async fn close(&self) -> DatabaseResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, QueryParameter)]) -> HashMap<String, QueryParameter> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_from_rows_collects_sorted_columns() {
        let result = QueryResult::from_rows(vec![row(&[
            ("label", "Person".into()),
            ("candidate", "Keanu Reeves".into()),
        ])]);
        assert_eq!(result.columns, vec!["candidate", "label"]);
        assert_eq!(result.rows.len(), 1);
    }

    #[test]
    fn test_from_rows_empty() {
        let result = QueryResult::from_rows(Vec::new());
        assert!(result.columns.is_empty());
        assert!(result.rows.is_empty());
    }

    #[test]
    fn test_optional_string() {
        let r = row(&[
            ("candidate", "The Matrix".into()),
            ("label", QueryParameter::Null),
            ("count", QueryParameter::Integer(3)),
        ]);
        assert_eq!(
            QueryResult::optional_string(&r, "candidate").unwrap(),
            Some("The Matrix".to_string())
        );
        assert_eq!(QueryResult::optional_string(&r, "label").unwrap(), None);
        assert_eq!(QueryResult::optional_string(&r, "missing").unwrap(), None);
        assert!(matches!(
            QueryResult::optional_string(&r, "count"),
            Err(DatabaseError::Serialization(_))
        ));
    }
}
