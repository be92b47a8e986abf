use crate::{
    config::DbConfig,
    data::{
        StudentStore,
        student::{Student, StudentId, ValidStudent},
    },
    error::{GetDatabaseConnectionSnafu, MakeQuerySnafu, MigrateSnafu, OpenDatabaseSnafu, RosterResult},
};
use async_trait::async_trait;
use futures::TryStreamExt;
use snafu::ResultExt;
use sqlx::{
    Pool, Postgres,
    pool::PoolConnection,
    postgres::PgPoolOptions,
};

#[derive(Debug, Clone)]
pub struct PostgresStudentStore {
    pool: Pool<Postgres>,
}

impl PostgresStudentStore {
    pub async fn connect(options: PgPoolOptions, db_config: &DbConfig) -> RosterResult<Self> {
        let pool = options
            .max_connections(db_config.max_connections())
            .connect(db_config.get_db_url())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self { pool })
    }

    async fn get_connection(&self) -> RosterResult<PoolConnection<Postgres>> {
        self.pool
            .acquire()
            .await
            .context(GetDatabaseConnectionSnafu)
    }
}

#[async_trait]
impl StudentStore for PostgresStudentStore {
    async fn find_all(&self) -> RosterResult<Vec<Student>> {
        let mut conn = self.get_connection().await?;

        sqlx::query_as::<_, Student>("SELECT id, name, age, course FROM public.students")
            .fetch(&mut *conn)
            .try_collect()
            .await
            .context(MakeQuerySnafu)
    }

    async fn find_by_id(&self, id: StudentId) -> RosterResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT id, name, age, course FROM public.students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.get_connection().await?)
        .await
        .context(MakeQuerySnafu)
    }

    async fn insert_one(&self, student: ValidStudent) -> RosterResult<StudentId> {
        let ValidStudent { name, age, course } = student;

        sqlx::query_scalar::<_, StudentId>(
            "INSERT INTO public.students (name, age, course) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(name)
        .bind(age)
        .bind(course)
        .fetch_one(&mut *self.get_connection().await?)
        .await
        .context(MakeQuerySnafu)
    }

    async fn update_one(&self, id: StudentId, student: ValidStudent) -> RosterResult<bool> {
        let ValidStudent { name, age, course } = student;

        let result = sqlx::query(
            "UPDATE public.students SET name = $2, age = $3, course = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(name)
        .bind(age)
        .bind(course)
        .execute(&mut *self.get_connection().await?)
        .await
        .context(MakeQuerySnafu)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_one(&self, id: StudentId) -> RosterResult<bool> {
        let result = sqlx::query("DELETE FROM public.students WHERE id = $1")
            .bind(id)
            .execute(&mut *self.get_connection().await?)
            .await
            .context(MakeQuerySnafu)?;

        Ok(result.rows_affected() > 0)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
