mod common;

use chrono::{Duration, Utc};
use common::{exec, insert_client, insert_project, setup};
use entity::project;
use serde_json::json;

#[tokio::test]
async fn clients_carry_live_project_counts() {
    let env = setup().await;
    let now = Utc::now();
    let busy = insert_client(env.db.as_ref(), "Busy Co", "Jane Doe", None, now - Duration::days(2))
        .await;
    insert_client(env.db.as_ref(), "Idle Co", "John Roe", None, now).await;
    insert_project(
        env.db.as_ref(),
        busy.id,
        "First",
        project::Status::Inquiry,
        None,
        None,
        now - Duration::days(1),
    )
    .await;
    insert_project(
        env.db.as_ref(),
        busy.id,
        "Second",
        project::Status::Proposal,
        None,
        None,
        now,
    )
    .await;

    let query = r#"
        query { crm { clients { companyName projectCount } } }
    "#;
    let resp = exec(&env, query, json!({})).await;
    assert!(
        resp.errors.is_empty(),
        "unexpected errors: {:?}",
        resp.errors
    );
    let data = resp.data.into_json().unwrap();
    let clients = data["crm"]["clients"].as_array().unwrap();
    assert_eq!(clients.len(), 2);
    // newest client first
    assert_eq!(clients[0]["companyName"], "Idle Co");
    assert_eq!(clients[0]["projectCount"], 0);
    assert_eq!(clients[1]["companyName"], "Busy Co");
    assert_eq!(clients[1]["projectCount"], 2);
}

#[tokio::test]
async fn client_search_spans_name_contact_and_industry() {
    let env = setup().await;
    let now = Utc::now();
    insert_client(
        env.db.as_ref(),
        "製造テック株式会社",
        "山本",
        Some("小売"),
        now - Duration::days(3),
    )
    .await;
    insert_client(
        env.db.as_ref(),
        "北海道物産",
        "製造部 高橋",
        None,
        now - Duration::days(2),
    )
    .await;
    insert_client(
        env.db.as_ref(),
        "九州エナジー",
        "井上",
        Some("製造業"),
        now - Duration::days(1),
    )
    .await;
    insert_client(env.db.as_ref(), "東京商事", "佐藤", Some("卸売"), now).await;

    let query = r#"
        query Search($search: String) {
            crm { clients(search: $search) { companyName } }
        }
    "#;
    let resp = exec(&env, query, json!({ "search": "製造" })).await;
    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    let names: Vec<&str> = data["crm"]["clients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["companyName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["九州エナジー", "北海道物産", "製造テック株式会社"]);
}
