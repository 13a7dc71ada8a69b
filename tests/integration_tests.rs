use hiring_list::app::render;
use hiring_list::{
    Candidate, Controller, Group, HttpCandidateSource, OutputFormat, PageState,
    PresentationModel,
};
use httpmock::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

async fn wait_for_settled(
    updates: &mut UnboundedReceiver<Arc<PresentationModel>>,
) -> Arc<PresentationModel> {
    loop {
        let state = tokio::time::timeout(Duration::from_secs(10), updates.recv())
            .await
            .expect("timed out waiting for controller")
            .expect("state stream closed");
        if state.status != PageState::Loading {
            return state;
        }
    }
}

fn item(num: i64) -> Candidate {
    Candidate::new(num, num, Some(&format!("Item {}", num)))
}

#[tokio::test]
async fn test_end_to_end_grouped_list() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/hiring.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"id": 3, "listId": 3, "name": "Item 300"},
                    {"id": 1, "listId": 1, "name": "Item 1"},
                    {"id": 3, "listId": 3, "name": "Item 3"},
                    {"id": 2, "listId": 2, "name": "Item 2"},
                    {"id": 7, "listId": 2, "name": null},
                    {"id": 8, "listId": 4, "name": ""},
                    {"id": 9, "listId": 4}
                ]));
        })
        .await;

    let source =
        HttpCandidateSource::new(server.url("/hiring.json"), Duration::from_secs(5)).unwrap();
    let controller = Controller::new(source);
    assert_eq!(controller.current_state().status, PageState::Loading);

    let mut updates = controller.updates();
    let state = wait_for_settled(&mut updates).await;

    api_mock.assert_async().await;
    assert_eq!(state.status, PageState::Success);
    assert_eq!(
        state.groups,
        vec![
            Group {
                list_id: 1,
                candidates: vec![item(1)]
            },
            Group {
                list_id: 2,
                candidates: vec![item(2)]
            },
            Group {
                list_id: 3,
                candidates: vec![item(3), Candidate::new(3, 3, Some("Item 300"))]
            },
        ]
    );

    let csv = render::render(&state, OutputFormat::Csv).unwrap();
    assert_eq!(
        csv,
        "listId,id,name\n1,1,Item 1\n2,2,Item 2\n3,3,Item 3\n3,3,Item 300\n"
    );
}

#[tokio::test]
async fn test_end_to_end_empty_array() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/hiring.json");
            then.status(200).body("[]");
        })
        .await;

    let source =
        HttpCandidateSource::new(server.url("/hiring.json"), Duration::from_secs(5)).unwrap();
    let controller = Controller::new(source);
    let mut updates = controller.updates();
    let state = wait_for_settled(&mut updates).await;

    assert_eq!(state.status, PageState::Success);
    assert!(state.groups.is_empty());
}

#[tokio::test]
async fn test_end_to_end_failure_and_retry() {
    let server = MockServer::start_async().await;
    let mut failing = server
        .mock_async(|when, then| {
            when.method(GET).path("/hiring.json");
            then.status(500);
        })
        .await;

    let source =
        HttpCandidateSource::new(server.url("/hiring.json"), Duration::from_secs(5)).unwrap();
    let controller = Controller::new(source);
    let mut updates = controller.updates();

    let state = wait_for_settled(&mut updates).await;
    assert_eq!(state.status, PageState::Failed);
    assert!(state.groups.is_empty());
    assert!(!state.error_message.is_empty());
    failing.assert_hits_async(1).await;

    failing.delete_async().await;
    let healthy = server
        .mock_async(|when, then| {
            when.method(GET).path("/hiring.json");
            then.status(200)
                .json_body(serde_json::json!([{"id": 1, "listId": 1, "name": "Item 1"}]));
        })
        .await;

    controller.retry();
    assert_eq!(controller.current_state().status, PageState::Loading);
    assert_eq!(
        updates.recv().await.map(|s| s.status),
        Some(PageState::Loading)
    );

    let state = wait_for_settled(&mut updates).await;
    healthy.assert_async().await;
    assert_eq!(state.status, PageState::Success);
    assert_eq!(state.candidate_count(), 1);
}

#[tokio::test]
async fn test_end_to_end_null_body_fails() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/hiring.json");
            then.status(200).body("null");
        })
        .await;

    let source =
        HttpCandidateSource::new(server.url("/hiring.json"), Duration::from_secs(5)).unwrap();
    let controller = Controller::new(source);
    let mut updates = controller.updates();
    let state = wait_for_settled(&mut updates).await;

    assert_eq!(state.status, PageState::Failed);
    let text = render::render_text(&state);
    assert!(text.contains("could not be read"));
}
