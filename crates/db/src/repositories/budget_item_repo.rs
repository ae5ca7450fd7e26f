//! Repository for the `budget_items` table.

use atrium_core::budget::{self, BudgetItemType, BudgetSummary};
use atrium_core::types::{Date, DbId};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::budget_item::{BudgetItem, CreateBudgetItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, description, amount, item_type, category, \
                        date, created_by, created_at, updated_at";

/// Provides CRUD and aggregation operations for budget items.
pub struct BudgetItemRepo;

impl BudgetItemRepo {
    /// Insert a new budget item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBudgetItem,
    ) -> Result<BudgetItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO budget_items (project_id, description, amount, item_type, category, date, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(input.project_id)
            .bind(&input.description)
            .bind(input.amount)
            .bind(input.item_type)
            .bind(input.category)
            .bind(input.date)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// List a project's budget items, optionally bounded to a date window.
    ///
    /// Bounds are inclusive and applied independently, so a single bound
    /// yields a half-open range.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
        start_date: Option<Date>,
        end_date: Option<Date>,
    ) -> Result<Vec<BudgetItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM budget_items
             WHERE project_id = $1
               AND ($2::date IS NULL OR date >= $2)
               AND ($3::date IS NULL OR date <= $3)
             ORDER BY date, id"
        );
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(project_id)
            .bind(start_date)
            .bind(end_date)
            .fetch_all(pool)
            .await
    }

    /// Compute allocated/spent totals for a project across all its items.
    ///
    /// Fetches only the `(item_type, amount)` pairs and reduces them with the
    /// pure aggregator, so the sum is exact decimal arithmetic end to end.
    pub async fn project_summary(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<BudgetSummary, sqlx::Error> {
        let entries: Vec<(BudgetItemType, Decimal)> =
            sqlx::query_as("SELECT item_type, amount FROM budget_items WHERE project_id = $1")
                .bind(project_id)
                .fetch_all(pool)
                .await?;
        Ok(budget::summarize(entries))
    }
}
