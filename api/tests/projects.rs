mod common;

use chrono::{Duration, Utc};
use common::{error_code, exec, insert_client, insert_handoff, insert_handover, insert_log,
    insert_project, setup};
use entity::{handover, progress_log, project};
use serde_json::json;

#[tokio::test]
async fn project_status_defaults_to_inquiry() {
    let env = setup().await;
    let acme = insert_client(env.db.as_ref(), "Acme Co", "Jane Doe", None, Utc::now()).await;

    let mutation = r#"
        mutation Create($input: NewProjectInput!) {
            crm { createProject(input: $input) { id status statusLabel } }
        }
    "#;
    let resp = exec(
        &env,
        mutation,
        json!({ "input": { "clientId": acme.id, "title": "New Engagement" } }),
    )
    .await;
    assert!(
        resp.errors.is_empty(),
        "unexpected errors: {:?}",
        resp.errors
    );
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["crm"]["createProject"]["status"], "INQUIRY");
    assert_eq!(data["crm"]["createProject"]["statusLabel"], "初回相談");
}

#[tokio::test]
async fn search_matches_title_company_and_consultation() {
    let env = setup().await;
    let now = Utc::now();
    let cloud_partners = insert_client(
        env.db.as_ref(),
        "クラウドパートナーズ株式会社",
        "田中",
        None,
        now,
    )
    .await;
    let tokyo = insert_client(env.db.as_ref(), "東京商事", "佐藤", None, now).await;

    // company-name match
    insert_project(
        env.db.as_ref(),
        cloud_partners.id,
        "ERP刷新",
        project::Status::Inquiry,
        None,
        None,
        now - Duration::days(4),
    )
    .await;
    // title match
    insert_project(
        env.db.as_ref(),
        tokyo.id,
        "クラウド移行支援",
        project::Status::Proposal,
        None,
        None,
        now - Duration::days(3),
    )
    .await;
    // consultation-content match
    insert_project(
        env.db.as_ref(),
        tokyo.id,
        "社内システム導入",
        project::Status::Hearing,
        None,
        Some("既存システムをクラウド環境へ載せ替えたい"),
        now - Duration::days(2),
    )
    .await;
    // no match anywhere
    insert_project(
        env.db.as_ref(),
        tokyo.id,
        "人事制度改定",
        project::Status::Inquiry,
        None,
        Some("評価制度の見直し"),
        now - Duration::days(1),
    )
    .await;

    let query = r#"
        query Search($search: String) {
            crm { projects(search: $search) { title } }
        }
    "#;
    let resp = exec(&env, query, json!({ "search": "クラウド" })).await;
    assert!(
        resp.errors.is_empty(),
        "unexpected errors: {:?}",
        resp.errors
    );
    let data = resp.data.into_json().unwrap();
    let titles: Vec<&str> = data["crm"]["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["社内システム導入", "クラウド移行支援", "ERP刷新"]);
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let env = setup().await;
    let now = Utc::now();
    let acme = insert_client(env.db.as_ref(), "Acme Co", "Jane Doe", None, now).await;
    insert_project(
        env.db.as_ref(),
        acme.id,
        "AWS Cloud Migration",
        project::Status::Proposal,
        None,
        None,
        now,
    )
    .await;

    let query = r#"
        query Search($search: String) {
            crm { projects(search: $search) { title } }
        }
    "#;
    let resp = exec(&env, query, json!({ "search": "CLOUD" })).await;
    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["crm"]["projects"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn status_filter_limits_results() {
    let env = setup().await;
    let now = Utc::now();
    let acme = insert_client(env.db.as_ref(), "Acme Co", "Jane Doe", None, now).await;
    insert_project(
        env.db.as_ref(),
        acme.id,
        "In Negotiation",
        project::Status::Negotiation,
        None,
        None,
        now - Duration::days(1),
    )
    .await;
    insert_project(
        env.db.as_ref(),
        acme.id,
        "Delivered",
        project::Status::Completed,
        None,
        None,
        now,
    )
    .await;

    let query = r#"
        query ByStatus($status: ProjectStatus) {
            crm { projects(status: $status) { title status } }
        }
    "#;
    let resp = exec(&env, query, json!({ "status": "NEGOTIATION" })).await;
    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    let projects = data["crm"]["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["title"], "In Negotiation");
}

#[tokio::test]
async fn projects_list_is_newest_first_with_client_names() {
    let env = setup().await;
    let now = Utc::now();
    let acme = insert_client(env.db.as_ref(), "Acme Co", "Jane Doe", None, now).await;
    for (title, age) in [("Oldest", 3i64), ("Middle", 2), ("Newest", 1)] {
        insert_project(
            env.db.as_ref(),
            acme.id,
            title,
            project::Status::Inquiry,
            None,
            None,
            now - Duration::days(age),
        )
        .await;
    }

    let query = r#"
        query { crm { projects { title clientName } } }
    "#;
    let resp = exec(&env, query, json!({})).await;
    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    let projects = data["crm"]["projects"].as_array().unwrap();
    let titles: Vec<&str> = projects
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
    assert!(projects
        .iter()
        .all(|p| p["clientName"] == "Acme Co"));
}

#[tokio::test]
async fn project_detail_returns_children_in_default_order() {
    let env = setup().await;
    let now = Utc::now();
    let acme = insert_client(env.db.as_ref(), "Acme Co", "Jane Doe", None, now).await;
    let proj = insert_project(
        env.db.as_ref(),
        acme.id,
        "Cloud Migration",
        project::Status::InProgress,
        Some(1_000_000),
        None,
        now - Duration::days(10),
    )
    .await;
    insert_handover(
        env.db.as_ref(),
        proj.id,
        handover::Kind::StaffA,
        false,
        now - Duration::days(5),
    )
    .await;
    insert_handover(
        env.db.as_ref(),
        proj.id,
        handover::Kind::StaffB,
        true,
        now - Duration::days(1),
    )
    .await;
    insert_log(
        env.db.as_ref(),
        proj.id,
        progress_log::ActivityType::Meeting,
        "キックオフ",
        now - Duration::days(4),
    )
    .await;
    insert_handoff(
        env.db.as_ref(),
        proj.id,
        "田中エンジニア",
        false,
        now - Duration::days(2),
    )
    .await;

    let query = r#"
        query Detail($id: Int!) {
            crm {
                project(id: $id) {
                    project { title clientName }
                    handovers { type isCompleted }
                    progressLogs { content }
                    engineerHandoffs { engineerName }
                }
            }
        }
    "#;
    let resp = exec(&env, query, json!({ "id": proj.id })).await;
    assert!(
        resp.errors.is_empty(),
        "unexpected errors: {:?}",
        resp.errors
    );
    let data = resp.data.into_json().unwrap();
    let detail = &data["crm"]["project"];
    assert_eq!(detail["project"]["title"], "Cloud Migration");
    assert_eq!(detail["project"]["clientName"], "Acme Co");
    let handovers = detail["handovers"].as_array().unwrap();
    assert_eq!(handovers.len(), 2);
    // newest handover first
    assert_eq!(handovers[0]["type"], "STAFF_B");
    assert_eq!(detail["progressLogs"].as_array().unwrap().len(), 1);
    assert_eq!(detail["engineerHandoffs"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn project_detail_missing_id_is_not_found() {
    let env = setup().await;
    let query = r#"
        query Detail($id: Int!) {
            crm { project(id: $id) { project { title } } }
        }
    "#;
    let resp = exec(&env, query, json!({ "id": 999_999 })).await;
    assert!(!resp.errors.is_empty(), "expected not-found error");
    assert_eq!(error_code(&resp).as_deref(), Some("NOT_FOUND"));
}
