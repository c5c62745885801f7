use async_trait::async_trait;
use mongodb::{bson::doc, Collection};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{ModuleScoreAggregate, Score, StudentScoreAverage},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    async fn create(&self, score: Score) -> AppResult<Score>;
    async fn create_many(&self, scores: Vec<Score>) -> AppResult<usize>;
    /// Per-module totals: average score, row count, completed count,
    /// ordered by module name.
    async fn module_aggregates(&self) -> AppResult<Vec<ModuleScoreAggregate>>;
    /// Per-student average across all modules, joined with the student's
    /// full name, ordered by average descending.
    async fn student_averages(&self) -> AppResult<Vec<StudentScoreAverage>>;
}

pub struct MongoScoreRepository {
    collection: Collection<Score>,
}

impl MongoScoreRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("scores");
        Self { collection }
    }
}

#[async_trait]
impl ScoreRepository for MongoScoreRepository {
    async fn create(&self, score: Score) -> AppResult<Score> {
        self.collection.insert_one(&score).await?;
        Ok(score)
    }

    async fn create_many(&self, scores: Vec<Score>) -> AppResult<usize> {
        if scores.is_empty() {
            return Ok(0);
        }
        let result = self.collection.insert_many(&scores).await?;
        Ok(result.inserted_ids.len())
    }

    async fn module_aggregates(&self) -> AppResult<Vec<ModuleScoreAggregate>> {
        use futures::TryStreamExt;

        let pipeline = vec![
            doc! {
                "$group": {
                    "_id": "$module",
                    "average_score": { "$avg": "$score" },
                    "total": { "$sum": 1 },
                    "completed": { "$sum": { "$cond": ["$completed", 1, 0] } },
                }
            },
            doc! { "$sort": { "_id": 1 } },
            doc! {
                "$project": {
                    "_id": 0,
                    "module": "$_id",
                    "average_score": 1,
                    "total": 1,
                    "completed": 1,
                }
            },
        ];

        let cursor = self
            .collection
            .aggregate(pipeline)
            .await?
            .with_type::<ModuleScoreAggregate>();
        let rows: Vec<ModuleScoreAggregate> = cursor.try_collect().await?;
        Ok(rows)
    }

    async fn student_averages(&self) -> AppResult<Vec<StudentScoreAverage>> {
        use futures::TryStreamExt;

        let pipeline = vec![
            doc! {
                "$group": {
                    "_id": "$student_id",
                    "average_score": { "$avg": "$score" },
                }
            },
            doc! {
                "$lookup": {
                    "from": "students",
                    "localField": "_id",
                    "foreignField": "id",
                    "as": "student",
                }
            },
            doc! { "$unwind": "$student" },
            doc! {
                "$project": {
                    "_id": 0,
                    "student": {
                        "$concat": ["$student.first_name", " ", "$student.last_name"]
                    },
                    "average_score": 1,
                }
            },
            doc! { "$sort": { "average_score": -1 } },
        ];

        let cursor = self
            .collection
            .aggregate(pipeline)
            .await?
            .with_type::<StudentScoreAverage>();
        let rows: Vec<StudentScoreAverage> = cursor.try_collect().await?;
        Ok(rows)
    }
}
