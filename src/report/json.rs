use crate::cards::CardRow;
use crate::types::report::ScoringReport;

pub fn to_json(report: &ScoringReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn ranking_to_json(rows: &[CardRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{PlayerFailure, PlayerScore};
    use std::collections::BTreeMap;

    #[test]
    fn json_report_contains_overall_score() {
        let report = ScoringReport {
            version: "0.1.0".to_string(),
            generated_at: "2024-01-01T00:00:00+00:00".to_string(),
            clamp_sub_scores: false,
            players: vec![PlayerScore {
                id: "p1".to_string(),
                name: None,
                profile: "attacker".to_string(),
                overall: 87.5,
                per_stat_score: BTreeMap::from([("gol".to_string(), 87.5)]),
            }],
            failures: vec![PlayerFailure {
                id: "p2".to_string(),
                error: "missing statistic: gol".to_string(),
            }],
        };

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"overall\": 87.5"));
        assert!(rendered.contains("\"clamp_sub_scores\": false"));
        assert!(rendered.contains("missing statistic: gol"));
    }
}
