use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::dto::response::{
        AnalyticsSummaryDto, LeaderboardDto, ModuleAverageDto, ModuleCompletionDto,
        StudentAverageDto,
    },
    repositories::ScoreRepository,
};

const LEADERBOARD_SIZE: usize = 3;

pub struct AnalyticsService {
    scores: Arc<dyn ScoreRepository>,
}

impl AnalyticsService {
    pub fn new(scores: Arc<dyn ScoreRepository>) -> Self {
        Self { scores }
    }

    /// Average score per module, rounded to two decimals.
    pub async fn average_scores(&self) -> AppResult<Vec<ModuleAverageDto>> {
        let rows = self.scores.module_aggregates().await?;

        Ok(rows
            .into_iter()
            .map(|row| ModuleAverageDto {
                module: row.module,
                average_score: round2(row.average_score),
            })
            .collect())
    }

    /// Completion rate per module (completed / total * 100).
    pub async fn completion_rates(&self) -> AppResult<Vec<ModuleCompletionDto>> {
        let rows = self.scores.module_aggregates().await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let rate = if row.total > 0 {
                    round2(row.completed as f64 / row.total as f64 * 100.0)
                } else {
                    0.0
                };
                ModuleCompletionDto {
                    module: row.module,
                    completion_rate: rate,
                }
            })
            .collect())
    }

    /// Top and bottom performing students by average score. Both slices keep
    /// descending order; with fewer students than the leaderboard size the
    /// same students appear in both lists.
    pub async fn top_and_bottom_students(&self) -> AppResult<LeaderboardDto> {
        let rows = self.scores.student_averages().await?;

        let averages: Vec<StudentAverageDto> = rows
            .into_iter()
            .map(|row| StudentAverageDto {
                student: row.student,
                average_score: round2(row.average_score),
            })
            .collect();

        let top = averages.len().min(LEADERBOARD_SIZE);
        let bottom_start = averages.len().saturating_sub(LEADERBOARD_SIZE);

        Ok(LeaderboardDto {
            top_students: averages[..top].to_vec(),
            bottom_students: averages[bottom_start..].to_vec(),
        })
    }

    pub async fn combined_analytics(&self) -> AppResult<AnalyticsSummaryDto> {
        let averages = self.average_scores().await?;
        let completion_rates = self.completion_rates().await?;
        let leaders = self.top_and_bottom_students().await?;

        Ok(AnalyticsSummaryDto {
            averages,
            completion_rates,
            top_students: leaders.top_students,
            bottom_students: leaders.bottom_students,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
