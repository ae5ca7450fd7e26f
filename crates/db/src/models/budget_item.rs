//! Budget item entity model and DTOs.

use atrium_core::budget::{BudgetCategory, BudgetItemType};
use atrium_core::types::{Date, DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A budget item row from the `budget_items` table.
///
/// `item_type` decides the aggregation bucket: income -> allocated,
/// expense -> spent.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BudgetItem {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub amount: Decimal,
    pub item_type: BudgetItemType,
    pub category: BudgetCategory,
    pub date: Date,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a budget item. `project_id` is bound from the request
/// path and `created_by` from the authenticated principal.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBudgetItem {
    #[serde(skip)]
    pub project_id: DbId,
    pub description: String,
    /// Must be non-negative.
    pub amount: Decimal,
    pub item_type: BudgetItemType,
    pub category: BudgetCategory,
    pub date: Date,
    #[serde(skip)]
    pub created_by: DbId,
}
