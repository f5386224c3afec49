mod common;

use api::seed::seed_demo;
use common::{exec, setup};
use entity::project;
use serde_json::json;

#[tokio::test]
async fn seed_loads_the_demo_data_set() {
    let env = setup().await;
    let seeded = seed_demo(env.db.as_ref()).await.unwrap();
    assert_eq!(seeded.clients.len(), 3);
    assert_eq!(seeded.projects.len(), 4);
    assert_eq!(seeded.handovers.len(), 2);
    assert_eq!(seeded.engineer_handoffs.len(), 2);
    assert_eq!(seeded.progress_logs.len(), 5);

    let cloud = seeded
        .project_titled("業務システムのクラウド移行支援")
        .unwrap();
    assert_eq!(cloud.status, project::Status::Proposal);
    assert_eq!(cloud.estimated_amount, Some(35_000_000));
    let owner = seeded
        .client_named("株式会社テックソリューションズ")
        .unwrap();
    assert_eq!(cloud.client_id, owner.id);
}

#[tokio::test]
async fn reseeding_replaces_rather_than_duplicates() {
    let env = setup().await;
    seed_demo(env.db.as_ref()).await.unwrap();
    let seeded = seed_demo(env.db.as_ref()).await.unwrap();
    assert_eq!(seeded.projects.len(), 4);

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
    assert_eq!(clients.len(), 3);
    let total_projects: i64 = clients
        .iter()
        .map(|c| c["projectCount"].as_i64().unwrap())
        .sum();
    assert_eq!(total_projects, 4);
}
