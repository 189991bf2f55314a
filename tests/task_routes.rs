mod common;

use axum::http::{Method, StatusCode};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use taskboard::db::{
    dao::{DaoBase, DaoContext},
    entities::{
        enums::TaskStatus,
        prelude::{Comment, Notification, Task},
    },
};

use common::spawn_app;

#[tokio::test]
async fn create_task_for_existing_user_records_notification() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/group_admin",
            Some(&admin),
            Some(json!({
                "title": "Write docs",
                "description": "API reference",
                "deadline": "2026-12-31",
                "priority": "High",
                "status": "Pending",
                "user_id": 1,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Task added successfully");
    assert_eq!(body["data"]["deadline"], "2026-12-31");
    assert_eq!(body["data"]["owner_name"], "Group Admin");
    assert_eq!(body["data"]["comments"], json!([]));
    let task_id = body["data"]["task_id"].as_i64().expect("task id") as i32;
    assert!(task_id > 0);

    let notes = DaoContext::new(&app.state.db)
        .notification()
        .list_all()
        .await
        .expect("list notifications");
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].task_id, Some(task_id));
    assert_eq!(notes[0].user_id, Some(1));
    assert_eq!(
        notes[0].message,
        "Task \"Write docs\" was added and assigned to US#01."
    );
}

#[tokio::test]
async fn create_task_for_missing_user_inserts_nothing() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/group_admin",
            Some(&admin),
            Some(json!({
                "title": "Orphan",
                "deadline": "2026-12-31",
                "priority": "Low",
                "status": "Pending",
                "user_id": 999,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User ID 999 does not exist.");

    assert_eq!(Task::find().count(&app.state.db).await.expect("count"), 0);
    assert_eq!(
        Notification::find().count(&app.state.db).await.expect("count"),
        0
    );
}

#[tokio::test]
async fn create_task_requires_fields_and_valid_deadline() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/group_admin",
            Some(&admin),
            Some(json!({ "title": "No deadline", "priority": "Low", "status": "Pending", "user_id": 1 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields");

    let (status, body) = app
        .send(
            Method::POST,
            "/group_admin",
            Some(&admin),
            Some(json!({
                "title": "Bad date",
                "deadline": "31-12-2026",
                "priority": "Low",
                "status": "Pending",
                "user_id": 1,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid deadline");
}

#[tokio::test]
async fn edit_with_invalid_status_leaves_row_unchanged() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;
    let task_id = app.create_task(&admin, "Stable", 1).await;
    let tasks = DaoContext::new(&app.state.db).task();
    let before = tasks.find_by_id(task_id).await.expect("task exists");

    let (status, body) = app
        .send(
            Method::PUT,
            &format!("/group_admin/{task_id}"),
            Some(&admin),
            Some(json!({
                "title": "Changed",
                "status": "Finished",
                "priority": "High",
                "deadline": "2027-01-01",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status value");

    let after = tasks.find_by_id(task_id).await.expect("task exists");
    assert_eq!(before, after);
}

#[tokio::test]
async fn edit_updates_fields_and_notifies_assignee() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;
    let (member_id, _) = app.member("Mia", "mia@example.com").await;
    let task_id = app.create_task(&admin, "Draft", member_id).await;

    let (status, body) = app
        .send(
            Method::PUT,
            &format!("/group_admin/{task_id}"),
            Some(&admin),
            Some(json!({
                "title": "Final",
                "description": "Ready for review",
                "status": "In Progress",
                "priority": "High",
                "deadline": "2027-01-15",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task updated successfully");
    assert_eq!(body["data"]["title"], "Final");
    assert_eq!(body["data"]["status"], "In Progress");
    assert_eq!(body["data"]["description"], "Ready for review");

    let notes = DaoContext::new(&app.state.db)
        .notification()
        .list_for_user(member_id)
        .await
        .expect("list notifications");
    assert_eq!(notes[0].message, format!("Task ID {task_id} was edited."));
}

#[tokio::test]
async fn edit_rejects_bad_ids() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;
    let body = json!({
        "title": "Any",
        "status": "Pending",
        "priority": "Low",
        "deadline": "2027-01-01",
    });

    let (status, res) = app
        .send(Method::PUT, "/group_admin/abc", Some(&admin), Some(body.clone()))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "Invalid task ID");

    let (status, res) = app
        .send(Method::PUT, "/group_admin/404", Some(&admin), Some(body))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(res["message"], "Task not found");
}

#[tokio::test]
async fn delete_missing_task_leaves_notifications_alone() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;
    app.create_task(&admin, "Keep me", 1).await;
    let before = Notification::find().count(&app.state.db).await.expect("count");

    let (status, body) = app
        .send(Method::DELETE, "/group_admin/9999", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Task not found");

    let after = Notification::find().count(&app.state.db).await.expect("count");
    assert_eq!(before, after);
}

#[tokio::test]
async fn delete_task_notifies_former_assignee_and_keeps_comments() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;
    let (member_id, member) = app.member("Mia", "mia@example.com").await;
    let task_id = app.create_task(&admin, "Short lived", member_id).await;
    app.send(
        Method::PUT,
        &format!("/tasks/{task_id}"),
        Some(&member),
        Some(json!({ "status": "In Progress", "comment": "started" })),
    )
    .await;

    let (status, body) = app
        .send(Method::DELETE, &format!("/group_admin/{task_id}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task deleted successfully");

    assert_eq!(Task::find().count(&app.state.db).await.expect("count"), 0);
    assert_eq!(Comment::find().count(&app.state.db).await.expect("count"), 1);
    let notes = DaoContext::new(&app.state.db)
        .notification()
        .list_for_user(member_id)
        .await
        .expect("list notifications");
    assert!(
        notes
            .iter()
            .any(|note| note.message
                == format!("Task \"Short lived\" (ID {task_id}) was deleted."))
    );
}

#[tokio::test]
async fn reassign_moves_task_and_notifies() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;
    let (member_id, _) = app.member("Mia", "mia@example.com").await;
    let task_id = app.create_task(&admin, "Handover", 1).await;

    let (status, body) = app
        .send(
            Method::PATCH,
            "/group_admin",
            Some(&admin),
            Some(json!({ "task_id": task_id, "user_id": member_id })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task reassigned successfully");
    assert_eq!(body["data"]["user_id"], member_id);
    assert_eq!(body["data"]["owner_name"], "Mia Tester");

    let notes = DaoContext::new(&app.state.db)
        .notification()
        .list_for_user(member_id)
        .await
        .expect("list notifications");
    assert_eq!(
        notes[0].message,
        format!("Task ID {task_id} has been assigned to US#{member_id:02}.")
    );

    let (status, body) = app
        .send(
            Method::PATCH,
            "/group_admin",
            Some(&admin),
            Some(json!({ "task_id": task_id, "user_id": 777 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User ID does not exist");

    let (status, body) = app
        .send(
            Method::PATCH,
            "/group_admin",
            Some(&admin),
            Some(json!({ "task_id": task_id })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing task_id or user_id");
}

#[tokio::test]
async fn member_completes_task_with_comment() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;
    let (member_id, member) = app.member("Mia", "mia@example.com").await;
    let task_id = app.create_task(&admin, "Finish me", member_id).await;

    let (status, body) = app
        .send(
            Method::PUT,
            &format!("/tasks/{task_id}"),
            Some(&member),
            Some(json!({ "status": "Completed", "comment": "  done  " })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task updated successfully");
    assert_eq!(body["data"]["status"], "Completed");
    assert_eq!(body["data"]["comments"][0]["content"], "done");
    assert_eq!(body["data"]["comments"][0]["user_id"], member_id);

    let daos = DaoContext::new(&app.state.db);
    let stored = daos.task().find_by_id(task_id).await.expect("task exists");
    assert_eq!(stored.status, TaskStatus::Completed);
    let comments = daos
        .comment()
        .list_for_tasks(&[task_id])
        .await
        .expect("list comments");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "done");
}

#[tokio::test]
async fn member_status_update_rules() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;
    let (_, member) = app.member("Mia", "mia@example.com").await;
    let admins_task = app.create_task(&admin, "Admin only", 1).await;

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/tasks/{admins_task}"),
            Some(&member),
            Some(json!({ "status": "Completed" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .send(
            Method::PUT,
            &format!("/tasks/{admins_task}"),
            Some(&admin),
            Some(json!({ "status": "done" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status value");

    let (status, _) = app
        .send(
            Method::PUT,
            "/tasks/4242",
            Some(&admin),
            Some(json!({ "status": "Completed" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/tasks/{admins_task}"),
            Some(&admin),
            Some(json!({ "status": "Completed", "comment": "   " })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(Comment::find().count(&app.state.db).await.expect("count"), 0);
}

#[tokio::test]
async fn task_listing_is_scoped_to_the_caller() {
    let app = spawn_app().await;
    let admin = app.admin_auth().await;
    let (mia_id, mia) = app.member("Mia", "mia@example.com").await;
    let (leo_id, _) = app.member("Leo", "leo@example.com").await;
    app.create_task(&admin, "For Mia", mia_id).await;
    app.create_task(&admin, "For Leo", leo_id).await;

    let (status, body) = app.send(Method::GET, "/tasks", Some(&mia), None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body["data"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|task| task["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["For Mia"]);

    let (status, body) = app.send(Method::GET, "/group_admin", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().expect("array").len(), 2);
}
