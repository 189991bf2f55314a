mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use taskboard::db::dao::DaoContext;

use common::spawn_app;

#[tokio::test]
async fn create_task_list_and_reject_duplicate_name() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;
    let (member_id, _) = app.member("Mia", "mia@example.com").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/tasklists",
            Some(&admin),
            Some(json!({ "name": "  Sprint 1 ", "user_id": member_id })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "Sprint 1");

    let notes = DaoContext::new(&app.state.db)
        .notification()
        .list_for_user(member_id)
        .await
        .expect("list notifications");
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].task_id, None);
    assert_eq!(notes[0].message, "A new task list \"Sprint 1\" has been created.");

    let (status, body) = app
        .send(
            Method::POST,
            "/tasklists",
            Some(&admin),
            Some(json!({ "name": "sprint 1", "user_id": member_id })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "A task list with that name already exists.");

    // same name for another owner is fine
    let (status, _) = app
        .send(
            Method::POST,
            "/tasklists",
            Some(&admin),
            Some(json!({ "name": "Sprint 1", "user_id": 1 })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn create_task_list_validates_input() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;

    let (status, body) = app
        .send(Method::POST, "/tasklists", Some(&admin), Some(json!({ "name": "x" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing name or user_id");

    let (status, body) = app
        .send(
            Method::POST,
            "/tasklists",
            Some(&admin),
            Some(json!({ "name": "x", "user_id": 55 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User ID 55 does not exist.");
}

#[tokio::test]
async fn members_see_lists_holding_their_tasks() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;
    let (member_id, member) = app.member("Mia", "mia@example.com").await;

    let mut list_ids = Vec::new();
    for name in ["Backlog", "Release"] {
        let (_, body) = app
            .send(
                Method::POST,
                "/tasklists",
                Some(&admin),
                Some(json!({ "name": name, "user_id": 1 })),
            )
            .await;
        list_ids.push(body["data"]["tasklist_id"].as_i64().expect("list id"));
    }

    let (status, _) = app
        .send(
            Method::POST,
            "/group_admin",
            Some(&admin),
            Some(json!({
                "title": "In release",
                "deadline": "2026-11-01",
                "priority": "High",
                "status": "Pending",
                "user_id": member_id,
                "tasklist_id": list_ids[1],
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .send(
            Method::POST,
            "/group_admin",
            Some(&admin),
            Some(json!({
                "title": "Nowhere",
                "deadline": "2026-11-01",
                "priority": "High",
                "status": "Pending",
                "user_id": member_id,
                "tasklist_id": 999,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Task list ID 999 does not exist.");

    let (_, body) = app.send(Method::GET, "/tasklists", Some(&member), None).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|list| list["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Release"]);

    let (_, body) = app.send(Method::GET, "/tasklists", Some(&admin), None).await;
    assert_eq!(body["data"].as_array().expect("array").len(), 2);
}
