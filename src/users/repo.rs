use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::users::repo_types::{NewUser, User, UserRow};

#[derive(Debug, Error)]
pub enum RepoError {
    /// The `users.email` unique constraint rejected the row.
    #[error("email already registered")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Exact, case-sensitive match on both email and password.
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, RepoError>;

    async fn create(&self, user: NewUser) -> Result<User, RepoError>;
}

/// Postgres-backed users. Every call checks one connection out of the pool
/// and returns it when the call finishes, whatever the outcome.
#[derive(Clone)]
pub struct PgUserRepository {
    db: PgPool,
}

impl PgUserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let mut conn = self.db.acquire().await?;
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password, name, role, department, gender, birth_date
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(row.map(User::from))
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, RepoError> {
        let mut conn = self.db.acquire().await?;
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password, name, role, department, gender, birth_date
            FROM users
            WHERE email = $1 AND password = $2
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(row.map(User::from))
    }

    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        let mut conn = self.db.acquire().await?;
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, email, password, name, role, department, gender, birth_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, email, password, name, role, department, gender, birth_date
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.name)
        .bind(&user.role)
        .bind(&user.department)
        .bind(&user.gender)
        .bind(&user.birth_date)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                RepoError::DuplicateEmail
            }
            other => RepoError::Database(other),
        })?;
        Ok(row.into())
    }
}
