use serde::{Deserialize, Serialize};

/// Reported as the most common roof type when no quote matches.
pub const NO_ROOF_TYPE: &str = "N/A";

/// Key used for grouped statistics when the grouped column is NULL.
///
/// A stored value equal to this key falls into the same group.
pub const NULL_GROUP_KEY: &str = "null";

/// Response of `GET /api/stats/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_projects: i64,
    pub average_roof_size: f64,
    /// `None` only when the winning group is the NULL roof type.
    pub common_roof_type: Option<String>,
}

impl SummaryStats {
    /// Builds a summary from raw aggregate results.
    ///
    /// `most_common` is `None` when the grouping query returned no row at all,
    /// and `Some(None)` when the top group has a NULL roof type.
    pub fn from_aggregates(
        total: i64,
        average: Option<f64>,
        most_common: Option<Option<String>>,
    ) -> Self {
        Self {
            total_projects: total,
            average_roof_size: round_to_cents(average.unwrap_or(0.0)),
            common_roof_type: most_common.unwrap_or_else(|| Some(NO_ROOF_TYPE.to_string())),
        }
    }
}

/// Response of `GET /api/filters`. NULL column values are reported as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub states: Vec<Option<String>>,
    pub roof_types: Vec<Option<String>>,
    pub dates: Vec<Option<String>>,
}

/// Rounds to two decimal places. Exact ties go to the even neighbour.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(200.0), 200.0);
        assert_eq!(round_to_cents(1234.5678), 1234.57);
        assert_eq!(round_to_cents(0.004), 0.0);
        assert_eq!(round_to_cents(166.666_666), 166.67);
    }

    #[test]
    fn test_round_to_cents_ties_to_even() {
        assert_eq!(round_to_cents(801.0 / 8.0), 100.12);
        assert_eq!(round_to_cents(803.0 / 8.0), 100.38);
        assert_eq!(round_to_cents(0.125), 0.12);
    }

    #[test]
    fn test_summary_without_rows() {
        let summary = SummaryStats::from_aggregates(0, None, None);

        assert_eq!(summary.total_projects, 0);
        assert_eq!(summary.average_roof_size, 0.0);
        assert_eq!(summary.common_roof_type.as_deref(), Some(NO_ROOF_TYPE));
    }

    #[test]
    fn test_summary_with_null_top_group() {
        let summary = SummaryStats::from_aggregates(2, Some(150.0), Some(None));
        assert!(summary.common_roof_type.is_none());
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = SummaryStats::from_aggregates(3, Some(200.0), Some(Some("Metal".into())));
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["totalProjects"], 3);
        assert_eq!(json["averageRoofSize"], 200.0);
        assert_eq!(json["commonRoofType"], "Metal");
    }
}
