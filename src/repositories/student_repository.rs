use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Student};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create(&self, student: Student) -> AppResult<Student>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Student>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>>;
    async fn list(&self) -> AppResult<Vec<Student>>;
}

pub struct MongoStudentRepository {
    collection: Collection<Student>,
}

impl MongoStudentRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("students");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for students collection");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(email_index).await?;

        log::info!("Successfully created indexes for students collection");
        Ok(())
    }
}

#[async_trait]
impl StudentRepository for MongoStudentRepository {
    async fn create(&self, student: Student) -> AppResult<Student> {
        self.collection.insert_one(&student).await?;
        Ok(student)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Student>> {
        let student = self.collection.find_one(doc! { "id": id }).await?;
        Ok(student)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        let student = self.collection.find_one(doc! { "email": email }).await?;
        Ok(student)
    }

    async fn list(&self) -> AppResult<Vec<Student>> {
        use futures::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let students: Vec<Student> = cursor.try_collect().await?;
        Ok(students)
    }
}
