//! Budget item persistence: date-window filtering and the summary reduction.

use atrium_core::budget::{BudgetCategory, BudgetItemType};
use atrium_core::roles::Role;
use atrium_db::models::budget_item::CreateBudgetItem;
use atrium_db::models::project::CreateProject;
use atrium_db::models::user::CreateUser;
use atrium_db::repositories::{BudgetItemRepo, ProjectRepo, UserRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_project_and_officer(pool: &PgPool) -> (i64, i64) {
    let project = ProjectRepo::create(
        pool,
        &CreateProject {
            name: "Reef".to_string(),
            description: "d".to_string(),
            budget: Some(Decimal::from(1000)),
            status: None,
            manager_id: None,
        },
    )
    .await
    .unwrap();

    let officer = UserRepo::create(
        pool,
        &CreateUser {
            username: "officer".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            role: Some(Role::ProjectOfficer),
            name: "Officer".to_string(),
        },
    )
    .await
    .unwrap();

    (project.id, officer.id)
}

fn item(
    project_id: i64,
    created_by: i64,
    amount: &str,
    item_type: BudgetItemType,
    date: &str,
) -> CreateBudgetItem {
    CreateBudgetItem {
        project_id,
        description: "entry".to_string(),
        amount: amount.parse().unwrap(),
        item_type,
        category: BudgetCategory::Other,
        date: date.parse().unwrap(),
        created_by,
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_splits_income_and_expense(pool: PgPool) {
    let (project_id, officer_id) = seed_project_and_officer(&pool).await;

    BudgetItemRepo::create(
        &pool,
        &item(project_id, officer_id, "400", BudgetItemType::Income, "2026-03-01"),
    )
    .await
    .unwrap();
    BudgetItemRepo::create(
        &pool,
        &item(project_id, officer_id, "150", BudgetItemType::Expense, "2026-03-02"),
    )
    .await
    .unwrap();

    let summary = BudgetItemRepo::project_summary(&pool, project_id)
        .await
        .unwrap();
    assert_eq!(summary.allocated, dec("400"));
    assert_eq!(summary.spent, dec("150"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_of_empty_project_is_zero(pool: PgPool) {
    let (project_id, _) = seed_project_and_officer(&pool).await;

    let summary = BudgetItemRepo::project_summary(&pool, project_id)
        .await
        .unwrap();
    assert_eq!(summary.allocated, Decimal::ZERO);
    assert_eq!(summary.spent, Decimal::ZERO);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_sums_exact_two_decimal_amounts(pool: PgPool) {
    let (project_id, officer_id) = seed_project_and_officer(&pool).await;

    BudgetItemRepo::create(
        &pool,
        &item(project_id, officer_id, "10.10", BudgetItemType::Income, "2026-03-01"),
    )
    .await
    .unwrap();
    BudgetItemRepo::create(
        &pool,
        &item(project_id, officer_id, "20.20", BudgetItemType::Income, "2026-03-02"),
    )
    .await
    .unwrap();

    let summary = BudgetItemRepo::project_summary(&pool, project_id)
        .await
        .unwrap();
    // Exactly 30.30 -- NUMERIC in, Decimal out, no float drift.
    assert_eq!(summary.allocated, dec("30.30"));
}

// ---------------------------------------------------------------------------
// Date-window filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_to_inclusive_date_window(pool: PgPool) {
    let (project_id, officer_id) = seed_project_and_officer(&pool).await;

    for day in ["2026-03-01", "2026-03-10", "2026-03-20"] {
        BudgetItemRepo::create(
            &pool,
            &item(project_id, officer_id, "5", BudgetItemType::Expense, day),
        )
        .await
        .unwrap();
    }

    let window = BudgetItemRepo::list_by_project(
        &pool,
        project_id,
        Some("2026-03-01".parse().unwrap()),
        Some("2026-03-10".parse().unwrap()),
    )
    .await
    .unwrap();
    // Both bounds are inclusive.
    assert_eq!(window.len(), 2);

    let unbounded = BudgetItemRepo::list_by_project(&pool, project_id, None, None)
        .await
        .unwrap();
    assert_eq!(unbounded.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_single_bound_yields_half_open_range(pool: PgPool) {
    let (project_id, officer_id) = seed_project_and_officer(&pool).await;

    for day in ["2026-03-01", "2026-03-10", "2026-03-20"] {
        BudgetItemRepo::create(
            &pool,
            &item(project_id, officer_id, "5", BudgetItemType::Income, day),
        )
        .await
        .unwrap();
    }

    let from = BudgetItemRepo::list_by_project(
        &pool,
        project_id,
        Some("2026-03-10".parse().unwrap()),
        None,
    )
    .await
    .unwrap();
    assert_eq!(from.len(), 2);

    let until = BudgetItemRepo::list_by_project(
        &pool,
        project_id,
        None,
        Some("2026-03-10".parse().unwrap()),
    )
    .await
    .unwrap();
    assert_eq!(until.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_scoped_to_project(pool: PgPool) {
    let (project_id, officer_id) = seed_project_and_officer(&pool).await;
    let other = ProjectRepo::create(
        &pool,
        &CreateProject {
            name: "Other".to_string(),
            description: "d".to_string(),
            budget: None,
            status: None,
            manager_id: None,
        },
    )
    .await
    .unwrap();

    BudgetItemRepo::create(
        &pool,
        &item(project_id, officer_id, "9", BudgetItemType::Income, "2026-04-01"),
    )
    .await
    .unwrap();
    BudgetItemRepo::create(
        &pool,
        &item(other.id, officer_id, "7", BudgetItemType::Income, "2026-04-01"),
    )
    .await
    .unwrap();

    let items = BudgetItemRepo::list_by_project(&pool, project_id, None, None)
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].amount, dec("9"));
}
