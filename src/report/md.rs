use crate::cards::{CardRow, RankKey};
use crate::types::report::ScoringReport;

pub fn to_markdown(report: &ScoringReport) -> String {
    let mut output = String::new();
    output.push_str("# Rating Report\n\n");
    output.push_str(&format!(
        "Generated: {} (v{})\n\n",
        report.generated_at, report.version
    ));
    output.push_str(&format!(
        "Sub-scores clamped: {}\n\n",
        if report.clamp_sub_scores { "yes" } else { "no" }
    ));

    output.push_str("## Players\n\n");
    if report.players.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for player in &report.players {
            let breakdown = player
                .per_stat_score
                .iter()
                .map(|(key, score)| format!("{key} {score:.1}"))
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!(
                "- {} ({}): overall {:.1} [{}]\n",
                player.name.as_deref().unwrap_or(&player.id),
                player.profile,
                player.overall,
                breakdown
            ));
        }
        output.push('\n');
    }

    output.push_str("## Failures\n\n");
    if report.failures.is_empty() {
        output.push_str("- none\n");
    } else {
        for failure in &report.failures {
            output.push_str(&format!("- {}: {}\n", failure.id, failure.error));
        }
    }

    output
}

pub fn ranking_to_markdown(rows: &[CardRow], key: RankKey) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# Ranking: {} ({}) - Top {}\n\n",
        key.label(),
        key.column(),
        rows.len()
    ));
    if rows.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str("| # | Player | Season | Club | Country | Score |\n");
    output.push_str("|---|--------|--------|------|---------|-------|\n");
    for (position, row) in rows.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {:.0} |\n",
            position + 1,
            row.player_name,
            row.season_text.as_deref().unwrap_or("-"),
            row.club.as_deref().unwrap_or("-"),
            row.country.as_deref().unwrap_or("-"),
            key.value(row)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::tests::card;
    use crate::types::report::PlayerScore;
    use std::collections::BTreeMap;

    #[test]
    fn markdown_report_contains_sections() {
        let report = ScoringReport {
            version: "0.1.0".to_string(),
            generated_at: "now".to_string(),
            clamp_sub_scores: true,
            players: vec![PlayerScore {
                id: "p1".to_string(),
                name: Some("Riquelme".to_string()),
                profile: "midfielder".to_string(),
                overall: 91.04,
                per_stat_score: BTreeMap::from([("pase".to_string(), 91.04)]),
            }],
            failures: vec![],
        };

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Rating Report"));
        assert!(rendered.contains("Sub-scores clamped: yes"));
        assert!(rendered.contains("- Riquelme (midfielder): overall 91.0 [pase 91.0]"));
        assert!(rendered.contains("## Failures\n\n- none"));
    }

    #[test]
    fn ranking_markdown_lists_rows_in_order() {
        let rows = vec![card("Messi", 95.0, Some(2023)), card("Alvarez", 84.0, None)];
        let rendered = ranking_to_markdown(&rows, RankKey::Gol);
        assert!(rendered.contains("# Ranking: Definición (gol) - Top 2"));
        assert!(rendered.contains("| 1 | Messi | 2022-2023 | River | Argentina | 94 |"));
        assert!(rendered.contains("| 2 | Alvarez | - | River | Argentina | 83 |"));
    }
}
