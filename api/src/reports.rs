//! Read-only query and reporting operations over the record store.
//!
//! Every function here is a pure read: filters, ordering and aggregation are
//! composed explicitly (lower() + LIKE, COUNT/SUM statements) so behavior is
//! identical on Postgres and the SQLite databases used in tests. The dashboard
//! takes the reporting instant as an argument instead of reading the wall
//! clock, so month-boundary counts are deterministic under test.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use entity::{client, engineer_handoff, handover, progress_log, project};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, Func, IntoColumnRef};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Statement,
};
use tracing::info_span;

use crate::error::RecordError;

/// Statuses counted as "in flight" on the dashboard.
pub const ACTIVE_STATUSES: [project::Status; 6] = [
    project::Status::Hearing,
    project::Status::Proposal,
    project::Status::Quotation,
    project::Status::Negotiation,
    project::Status::Handover,
    project::Status::InProgress,
];

/// Statuses whose estimates count toward the pipeline total.
pub const FORECAST_STATUSES: [project::Status; 4] = [
    project::Status::Quotation,
    project::Status::Negotiation,
    project::Status::Handover,
    project::Status::InProgress,
];

const RECENT_PROJECTS_LIMIT: u64 = 10;
const PENDING_HANDOFFS_LIMIT: u64 = 5;
const RECENT_ACTIVITIES_LIMIT: u64 = 10;

pub async fn list_projects(
    db: &DatabaseConnection,
    status: Option<project::Status>,
    search: Option<&str>,
) -> Result<Vec<(project::Model, Option<client::Model>)>, RecordError> {
    let span = info_span!(
        "records.projects.list",
        has_status = status.is_some(),
        has_q = search.is_some()
    );
    let _guard = span.enter();

    let mut query = project::Entity::find().find_also_related(client::Entity);
    if let Some(status) = status {
        query = query.filter(project::Column::Status.eq(status));
    }
    if let Some(term) = sanitize_search(search) {
        let pattern = like_pattern(&term);
        query = query.filter(
            Condition::any()
                .add(lowered((project::Entity, project::Column::Title)).like(pattern.clone()))
                .add(lowered((client::Entity, client::Column::CompanyName)).like(pattern.clone()))
                .add(
                    lowered((project::Entity, project::Column::ConsultationContent)).like(pattern),
                ),
        );
    }
    let rows = query
        .order_by_desc(project::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows)
}

/// A client row annotated with its live project count.
#[derive(Clone, Debug, FromQueryResult)]
pub struct ClientWithProjects {
    pub id: i32,
    pub company_name: String,
    pub contact_person: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub project_count: i64,
}

pub async fn list_clients(
    db: &DatabaseConnection,
    search: Option<&str>,
) -> Result<Vec<ClientWithProjects>, RecordError> {
    let mut query = client::Entity::find()
        .left_join(project::Entity)
        .column_as(project::Column::Id.count(), "project_count")
        .group_by(client::Column::Id);
    if let Some(term) = sanitize_search(search) {
        let pattern = like_pattern(&term);
        query = query.filter(
            Condition::any()
                .add(lowered((client::Entity, client::Column::CompanyName)).like(pattern.clone()))
                .add(
                    lowered((client::Entity, client::Column::ContactPerson)).like(pattern.clone()),
                )
                .add(lowered((client::Entity, client::Column::Industry)).like(pattern)),
        );
    }
    let rows = query
        .order_by_desc(client::Column::CreatedAt)
        .into_model::<ClientWithProjects>()
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn list_handovers(
    db: &DatabaseConnection,
    kind: Option<handover::Kind>,
    status: Option<&str>,
) -> Result<Vec<(handover::Model, Option<project::Model>)>, RecordError> {
    let completed = parse_state_filter(status, "completed")?;
    let mut query = handover::Entity::find().find_also_related(project::Entity);
    if let Some(kind) = kind {
        query = query.filter(handover::Column::HandoverType.eq(kind));
    }
    if let Some(flag) = completed {
        query = query.filter(handover::Column::IsCompleted.eq(flag));
    }
    let rows = query
        .order_by_desc(handover::Column::HandoverDate)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn list_engineer_handoffs(
    db: &DatabaseConnection,
    status: Option<&str>,
) -> Result<Vec<(engineer_handoff::Model, Option<project::Model>)>, RecordError> {
    let accepted = parse_state_filter(status, "accepted")?;
    let mut query = engineer_handoff::Entity::find().find_also_related(project::Entity);
    if let Some(flag) = accepted {
        query = query.filter(engineer_handoff::Column::IsAccepted.eq(flag));
    }
    let rows = query
        .order_by_desc(engineer_handoff::Column::HandoffDate)
        .all(db)
        .await?;
    Ok(rows)
}

/// A project together with everything recorded against it, each child list in
/// its default newest-first order.
#[derive(Clone, Debug)]
pub struct ProjectDetail {
    pub project: project::Model,
    pub client: Option<client::Model>,
    pub handovers: Vec<handover::Model>,
    pub progress_logs: Vec<progress_log::Model>,
    pub engineer_handoffs: Vec<engineer_handoff::Model>,
}

pub async fn project_detail(db: &DatabaseConnection, id: i32) -> Result<ProjectDetail, RecordError> {
    let Some((project, client)) = project::Entity::find_by_id(id)
        .find_also_related(client::Entity)
        .one(db)
        .await?
    else {
        return Err(RecordError::NotFound {
            entity: "project",
            id,
        });
    };
    let handovers = handover::Entity::find()
        .filter(handover::Column::ProjectId.eq(id))
        .order_by_desc(handover::Column::HandoverDate)
        .all(db)
        .await?;
    let progress_logs = progress_log::Entity::find()
        .filter(progress_log::Column::ProjectId.eq(id))
        .order_by_desc(progress_log::Column::LogDate)
        .all(db)
        .await?;
    let engineer_handoffs = engineer_handoff::Entity::find()
        .filter(engineer_handoff::Column::ProjectId.eq(id))
        .order_by_desc(engineer_handoff::Column::HandoffDate)
        .all(db)
        .await?;
    Ok(ProjectDetail {
        project,
        client,
        handovers,
        progress_logs,
        engineer_handoffs,
    })
}

#[derive(Clone, Debug)]
pub struct StatusCount {
    pub status: project::Status,
    pub count: i64,
}

#[derive(Clone, Debug)]
pub struct DashboardSummary {
    pub status_counts: Vec<StatusCount>,
    pub new_projects_count: u64,
    pub active_projects_count: u64,
    pub total_estimated: i64,
    pub recent_projects: Vec<(project::Model, Option<client::Model>)>,
    pub pending_handoffs: Vec<(engineer_handoff::Model, Option<project::Model>)>,
    pub recent_activities: Vec<(progress_log::Model, Option<project::Model>)>,
}

#[derive(Debug, FromQueryResult)]
struct StatusCountRow {
    status: project::Status,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct EstimateTotalRow {
    total: i64,
}

pub async fn dashboard_summary(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<DashboardSummary, RecordError> {
    let span = info_span!("records.dashboard");
    let _guard = span.enter();
    let backend = db.get_database_backend();

    let status_counts = StatusCountRow::find_by_statement(Statement::from_string(
        backend,
        "SELECT CAST(status AS TEXT) AS status, COUNT(*) AS count FROM project GROUP BY status",
    ))
    .all(db)
    .await?
    .into_iter()
    .map(|row| StatusCount {
        status: row.status,
        count: row.count,
    })
    .collect();

    let since: DateTimeWithTimeZone = month_start(now).into();
    let new_projects_count = project::Entity::find()
        .filter(project::Column::CreatedAt.gte(since))
        .count(db)
        .await?;

    let active_projects_count = project::Entity::find()
        .filter(project::Column::Status.is_in(ACTIVE_STATUSES))
        .count(db)
        .await?;

    let forecast_list = FORECAST_STATUSES
        .iter()
        .map(|status| format!("'{}'", status.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    let total_sql = format!(
        "SELECT CAST(COALESCE(SUM(COALESCE(estimated_amount, 0)), 0) AS BIGINT) AS total \
         FROM project WHERE CAST(status AS TEXT) IN ({forecast_list})"
    );
    let total_estimated = EstimateTotalRow::find_by_statement(Statement::from_string(
        backend, total_sql,
    ))
    .one(db)
    .await?
    .map(|row| row.total)
    .unwrap_or(0);

    let recent_projects = project::Entity::find()
        .find_also_related(client::Entity)
        .order_by_desc(project::Column::CreatedAt)
        .limit(RECENT_PROJECTS_LIMIT)
        .all(db)
        .await?;

    let pending_handoffs = engineer_handoff::Entity::find()
        .find_also_related(project::Entity)
        .filter(engineer_handoff::Column::IsAccepted.eq(false))
        .order_by_desc(engineer_handoff::Column::HandoffDate)
        .limit(PENDING_HANDOFFS_LIMIT)
        .all(db)
        .await?;

    let recent_activities = progress_log::Entity::find()
        .find_also_related(project::Entity)
        .order_by_desc(progress_log::Column::LogDate)
        .limit(RECENT_ACTIVITIES_LIMIT)
        .all(db)
        .await?;

    Ok(DashboardSummary {
        status_counts,
        new_projects_count,
        active_projects_count,
        total_estimated,
        recent_projects,
        pending_handoffs,
        recent_activities,
    })
}

/// Midnight on the first day of `now`'s calendar month, in UTC.
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let first_day = now
        .date_naive()
        .with_day(1)
        .expect("every month has a first day");
    let midnight = first_day
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time");
    Utc.from_utc_datetime(&midnight)
}

fn parse_state_filter(
    status: Option<&str>,
    done_value: &'static str,
) -> Result<Option<bool>, RecordError> {
    match status.map(str::trim) {
        None | Some("") => Ok(None),
        Some("pending") => Ok(Some(false)),
        Some(value) if value == done_value => Ok(Some(true)),
        Some(other) => Err(RecordError::InvalidEnumValue {
            field: "status",
            value: other.to_string(),
        }),
    }
}

fn sanitize_search(value: Option<&str>) -> Option<String> {
    value.and_then(|input| {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn like_pattern(term: &str) -> String {
    format!("%{}%", term.to_lowercase())
}

fn lowered<C>(col: C) -> Expr
where
    C: IntoColumnRef,
{
    Expr::expr(Func::lower(Expr::col(col)))
}
