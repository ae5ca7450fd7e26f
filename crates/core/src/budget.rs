//! Income/expense aggregation over a project's budget items.
//!
//! Amounts are [`Decimal`] throughout (NUMERIC(10,2) in the database), so
//! two-decimal-digit sums are exact: 10.10 + 20.20 is 30.30, never
//! 30.299999...

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a budget item adds to the allocated or the spent bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "budget_item_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BudgetItemType {
    Income,
    Expense,
}

/// Spending category of a budget item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "budget_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    Salary,
    Equipment,
    Travel,
    Supplies,
    Other,
}

/// Allocated (income) and spent (expense) totals for one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub allocated: Decimal,
    pub spent: Decimal,
}

impl BudgetSummary {
    /// The zero summary, identity element of [`BudgetSummary::merge`].
    pub const ZERO: BudgetSummary = BudgetSummary {
        allocated: Decimal::ZERO,
        spent: Decimal::ZERO,
    };

    /// Elementwise sum of two summaries.
    ///
    /// `summarize(a ++ b) == summarize(a).merge(summarize(b))`, so partitions
    /// may be reduced independently and merged.
    pub fn merge(self, other: BudgetSummary) -> BudgetSummary {
        BudgetSummary {
            allocated: self.allocated + other.allocated,
            spent: self.spent + other.spent,
        }
    }
}

/// Reduce budget entries into allocated/spent totals.
///
/// Income amounts accumulate into `allocated`, expense amounts into `spent`.
/// A pure, order-independent sum; the empty input yields [`BudgetSummary::ZERO`].
pub fn summarize<I>(entries: I) -> BudgetSummary
where
    I: IntoIterator<Item = (BudgetItemType, Decimal)>,
{
    entries
        .into_iter()
        .fold(BudgetSummary::ZERO, |acc, (item_type, amount)| {
            match item_type {
                BudgetItemType::Income => BudgetSummary {
                    allocated: acc.allocated + amount,
                    ..acc
                },
                BudgetItemType::Expense => BudgetSummary {
                    spent: acc.spent + amount,
                    ..acc
                },
            }
        })
}
