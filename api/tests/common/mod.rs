#![allow(dead_code)]

use std::sync::Arc;

use api::schema::{build_schema, AppSchema};
use async_graphql::{Request, Response, Variables};
use chrono::{DateTime, Utc};
use entity::{client, engineer_handoff, handover, progress_log, project};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use serde_json::Value;

pub struct TestEnv {
    pub db: Arc<DatabaseConnection>,
    pub schema: async_graphql::Schema<
        api::schema::QueryRoot,
        api::schema::MutationRoot,
        async_graphql::EmptySubscription,
    >,
}

pub async fn setup() -> TestEnv {
    let conn = Database::connect("sqlite::memory:").await.unwrap();
    let db = Arc::new(conn);
    bootstrap_sqlite(db.as_ref()).await;
    let AppSchema(schema) = build_schema(db.clone());
    TestEnv { db, schema }
}

pub async fn exec(env: &TestEnv, query: &str, vars: Value) -> Response {
    env.schema
        .execute(Request::new(query).variables(Variables::from_json(vars)))
        .await
}

pub fn error_code(resp: &Response) -> Option<String> {
    let json = serde_json::to_value(&resp.errors).ok()?;
    json.get(0)?
        .get("extensions")?
        .get("code")?
        .as_str()
        .map(|code| code.to_string())
}

pub async fn insert_client(
    db: &DatabaseConnection,
    company_name: &str,
    contact_person: &str,
    industry: Option<&str>,
    created_at: DateTime<Utc>,
) -> client::Model {
    client::ActiveModel {
        id: NotSet,
        company_name: Set(company_name.into()),
        contact_person: Set(contact_person.into()),
        email: Set(None),
        phone: Set(None),
        industry: Set(industry.map(Into::into)),
        company_size: Set(None),
        created_at: Set(created_at.into()),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_project(
    db: &DatabaseConnection,
    client_id: i32,
    title: &str,
    status: project::Status,
    estimated_amount: Option<i64>,
    consultation_content: Option<&str>,
    created_at: DateTime<Utc>,
) -> project::Model {
    project::ActiveModel {
        id: NotSet,
        client_id: Set(client_id),
        title: Set(title.into()),
        status: Set(status),
        consultation_content: Set(consultation_content.map(Into::into)),
        proposal_content: Set(None),
        estimated_amount: Set(estimated_amount),
        start_date: Set(None),
        end_date: Set(None),
        created_at: Set(created_at.into()),
        updated_at: Set(created_at.into()),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_handover(
    db: &DatabaseConnection,
    project_id: i32,
    kind: handover::Kind,
    is_completed: bool,
    handover_date: DateTime<Utc>,
) -> handover::Model {
    handover::ActiveModel {
        id: NotSet,
        project_id: Set(project_id),
        handover_type: Set(kind),
        handover_to: Set("スタッフA".into()),
        handover_date: Set(handover_date.into()),
        handover_content: Set("引継ぎ内容".into()),
        technical_requirements: Set(None),
        notes: Set(None),
        is_completed: Set(is_completed),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_handoff(
    db: &DatabaseConnection,
    project_id: i32,
    engineer_name: &str,
    is_accepted: bool,
    handoff_date: DateTime<Utc>,
) -> engineer_handoff::Model {
    engineer_handoff::ActiveModel {
        id: NotSet,
        project_id: Set(project_id),
        engineer_name: Set(engineer_name.into()),
        handoff_date: Set(handoff_date.into()),
        technical_scope: Set("技術的な対応範囲".into()),
        current_status: Set("現在の状況".into()),
        client_requirements: Set("顧客要件".into()),
        timeline: Set(None),
        budget: Set(None),
        special_notes: Set(None),
        is_accepted: Set(is_accepted),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_log(
    db: &DatabaseConnection,
    project_id: i32,
    activity_type: progress_log::ActivityType,
    content: &str,
    log_date: DateTime<Utc>,
) -> progress_log::Model {
    progress_log::ActiveModel {
        id: NotSet,
        project_id: Set(project_id),
        log_date: Set(log_date.into()),
        activity_type: Set(activity_type),
        content: Set(content.into()),
        next_action: Set(None),
        created_by: Set("営業担当".into()),
    }
    .insert(db)
    .await
    .unwrap()
}

async fn bootstrap_sqlite(db: &DatabaseConnection) {
    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        "PRAGMA foreign_keys = ON;",
    ))
    .await
    .unwrap();

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE client (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            company_name TEXT NOT NULL,
            contact_person TEXT NOT NULL,
            email TEXT,
            phone TEXT,
            industry TEXT,
            company_size TEXT,
            created_at TEXT NOT NULL
        );
        "#,
    ))
    .await
    .unwrap();

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE project (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            client_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'inquiry',
            consultation_content TEXT,
            proposal_content TEXT,
            estimated_amount INTEGER,
            start_date TEXT,
            end_date TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY(client_id) REFERENCES client(id) ON DELETE CASCADE
        );
        "#,
    ))
    .await
    .unwrap();

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE handover (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id INTEGER NOT NULL,
            handover_type TEXT NOT NULL,
            handover_to TEXT NOT NULL,
            handover_date TEXT NOT NULL,
            handover_content TEXT NOT NULL,
            technical_requirements TEXT,
            notes TEXT,
            is_completed INTEGER NOT NULL DEFAULT 0,
            FOREIGN KEY(project_id) REFERENCES project(id) ON DELETE CASCADE
        );
        "#,
    ))
    .await
    .unwrap();

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE progress_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id INTEGER NOT NULL,
            log_date TEXT NOT NULL,
            activity_type TEXT NOT NULL,
            content TEXT NOT NULL,
            next_action TEXT,
            created_by TEXT NOT NULL DEFAULT '担当者',
            FOREIGN KEY(project_id) REFERENCES project(id) ON DELETE CASCADE
        );
        "#,
    ))
    .await
    .unwrap();

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE engineer_handoff (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id INTEGER NOT NULL,
            engineer_name TEXT NOT NULL,
            handoff_date TEXT NOT NULL,
            technical_scope TEXT NOT NULL,
            current_status TEXT NOT NULL,
            client_requirements TEXT NOT NULL,
            timeline TEXT,
            budget INTEGER,
            special_notes TEXT,
            is_accepted INTEGER NOT NULL DEFAULT 0,
            FOREIGN KEY(project_id) REFERENCES project(id) ON DELETE CASCADE
        );
        "#,
    ))
    .await
    .unwrap();
}
