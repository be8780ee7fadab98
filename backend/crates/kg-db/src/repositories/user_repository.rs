use crate::Result as DbErrorResult;

use kg_core::User;

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct UserRow {
    uname: String,
    email: String,
    age: i64,
    gender: String,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        Self {
            username: r.uname,
            email: r.email,
            age: r.age,
            gender: r.gender,
            password_hash: r.password_hash,
        }
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user. A taken username surfaces as `DbError::UniqueViolation`
    /// from the `users.uname` constraint; no lookup precedes the insert.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let created_at = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (uname, email, age, gender, password_hash, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.age)
        .bind(&user.gender)
        .bind(&user.password_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT uname, email, age, gender, password_hash
                FROM users
                WHERE uname = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
