//! Dashboard statistics command.

use talentgate_client::TalentGateClient;
use talentgate_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Show dashboard statistics
pub async fn execute(client: &TalentGateClient, format: OutputFormat) -> Result<(), AppError> {
    super::guard(client, "/hr/statistics")?;
    let stats = client.statistics().dashboard().await?;

    let mut fields = vec![
        (
            "Positions",
            format!("{} ({} open)", stats.total_positions, stats.open_positions),
        ),
        ("Applications", stats.total_applications.to_string()),
        ("Candidates", stats.total_candidates.to_string()),
        ("Tests taken", stats.tests_taken.to_string()),
        (
            "Average score",
            stats
                .average_score
                .map(|s| format!("{s:.1}%"))
                .unwrap_or_else(|| "-".to_string()),
        ),
        (
            "Offer rate",
            stats
                .offer_rate()
                .map(|r| format!("{r:.1}%"))
                .unwrap_or_else(|| "-".to_string()),
        ),
    ];
    for (status, count) in &stats.applications_by_status {
        fields.push((status.as_str(), count.to_string()));
    }

    output::print_item(&stats, &fields, format);
    Ok(())
}
