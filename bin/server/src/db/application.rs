//! Repository for job applications.

use chrono::{DateTime, NaiveDate, Utc};
use interview_tracker_core::ApplicationId;
use interview_tracker_tracking::{Application, ApplicationDraft, ApplicationStatus};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;

use super::decode_error;

/// Row type for application queries.
#[derive(FromRow)]
struct ApplicationRow {
    id: String,
    user_id: String,
    company_name: String,
    job_title: String,
    url: Option<String>,
    date_applied: NaiveDate,
    application_status: String,
    salary: Option<String>,
    location: Option<String>,
    created_at: DateTime<Utc>,
}

impl ApplicationRow {
    fn try_into_application(self) -> Result<Application, sqlx::Error> {
        let id = ApplicationId::from_str(&self.id)
            .map_err(|e| decode_error(format!("invalid application id '{}': {}", self.id, e)))?;
        let status = ApplicationStatus::from_str(&self.application_status)
            .map_err(|e| decode_error(e.to_string()))?;

        Ok(Application {
            id,
            user_id: self.user_id,
            company_name: self.company_name,
            job_title: self.job_title,
            url: self.url,
            date_applied: self.date_applied,
            status,
            salary: self.salary,
            location: self.location,
            created_at: self.created_at,
        })
    }
}

/// Repository for application operations.
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    /// Creates a new application repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists a user's applications, most recently applied first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Application>, sqlx::Error> {
        let rows: Vec<ApplicationRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, company_name, job_title, url, date_applied,
                   application_status, salary, location, created_at
            FROM applications
            WHERE user_id = $1
            ORDER BY date_applied DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(ApplicationRow::try_into_application)
            .collect()
    }

    /// Finds one of the user's applications.
    pub async fn find(
        &self,
        id: &ApplicationId,
        user_id: &str,
    ) -> Result<Option<Application>, sqlx::Error> {
        let row: Option<ApplicationRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, company_name, job_title, url, date_applied,
                   application_status, salary, location, created_at
            FROM applications
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.to_string())
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ApplicationRow::try_into_application).transpose()
    }

    /// Inserts a new application.
    pub async fn create(&self, application: &Application) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO applications
                (id, user_id, company_name, job_title, url, date_applied,
                 application_status, salary, location, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(application.id.to_string())
        .bind(&application.user_id)
        .bind(&application.company_name)
        .bind(&application.job_title)
        .bind(&application.url)
        .bind(application.date_applied)
        .bind(application.status.as_str())
        .bind(&application.salary)
        .bind(&application.location)
        .bind(application.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Replaces an application's fields. Returns false if the user has no such row.
    pub async fn update(
        &self,
        id: &ApplicationId,
        user_id: &str,
        draft: &ApplicationDraft,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE applications
            SET company_name = $3, job_title = $4, url = $5, date_applied = $6,
                application_status = $7, salary = $8, location = $9
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.to_string())
        .bind(user_id)
        .bind(&draft.company_name)
        .bind(&draft.job_title)
        .bind(&draft.url)
        .bind(draft.date_applied)
        .bind(draft.status.as_str())
        .bind(&draft.salary)
        .bind(&draft.location)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Changes only the status. Returns false if the user has no such row.
    pub async fn update_status(
        &self,
        id: &ApplicationId,
        user_id: &str,
        status: ApplicationStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE applications
            SET application_status = $3
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.to_string())
        .bind(user_id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
