//! Aggregate counts over the full practice table.
//!
//! Computed in memory from every row on each request. Fine for the low volume
//! this service sees; a large table would want a database-side aggregate with
//! identical distinct-count semantics.

use std::collections::HashSet;

use serde::Serialize;

/// Summary payload returned by `GET /api/practices/stats/summary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSummary {
    pub total_practices: usize,
    /// Distinct submitter `name` values.
    pub unique_users: usize,
    /// Distinct `management` values.
    pub unique_managements: usize,
}

impl PracticeSummary {
    /// Build the summary from `(name, management)` pairs, one per record.
    ///
    /// Values are compared exactly: no trimming, no case folding. An empty
    /// string is a distinct value like any other.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut total = 0;
        let mut names = HashSet::new();
        let mut managements = HashSet::new();

        for (name, management) in records {
            total += 1;
            names.insert(name);
            managements.insert(management);
        }

        Self {
            total_practices: total,
            unique_users: names.len(),
            unique_managements: managements.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_distinct_names_and_managements() {
        let summary = PracticeSummary::from_records([("A", "X"), ("A", "Y"), ("B", "X")]);
        assert_eq!(
            summary,
            PracticeSummary {
                total_practices: 3,
                unique_users: 2,
                unique_managements: 2,
            }
        );
    }

    #[test]
    fn empty_table_is_all_zero() {
        let summary = PracticeSummary::from_records(std::iter::empty());
        assert_eq!(summary.total_practices, 0);
        assert_eq!(summary.unique_users, 0);
        assert_eq!(summary.unique_managements, 0);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let summary = PracticeSummary::from_records([("ana", "X"), ("Ana", "x")]);
        assert_eq!(summary.unique_users, 2);
        assert_eq!(summary.unique_managements, 2);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let summary = PracticeSummary::from_records([("A", "X")]);
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["totalPractices"], 1);
        assert_eq!(json["uniqueUsers"], 1);
        assert_eq!(json["uniqueManagements"], 1);
    }
}
