//! HTTP-level tests for the store gateway
//!
//! A mock store stands in for the remote API so error classification, header
//! handling, and fan-out behavior can be observed on the wire.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use notegate::store::types::{CreateNoteParams, NoteKind};
use notegate::{NotegateError, StoreClient, StoreConfig};

fn client_for(server: &MockServer) -> StoreClient {
    StoreClient::new(StoreConfig::new(server.uri(), "test-token").unwrap())
}

fn note_json(id: &str, title: &str, kind: &str, children: &[&str]) -> serde_json::Value {
    json!({
        "noteId": id,
        "title": title,
        "type": kind,
        "mime": "",
        "isProtected": false,
        "dateCreated": "2024-01-01 00:00:00.000+0000",
        "dateModified": "2024-01-02 00:00:00.000+0000",
        "utcDateCreated": "2024-01-01 00:00:00.000Z",
        "utcDateModified": "2024-01-02 00:00:00.000Z",
        "parentNoteIds": ["root"],
        "childNoteIds": children,
        "parentBranchIds": [],
        "childBranchIds": [],
        "attributes": [],
    })
}

#[tokio::test]
async fn test_get_note_sends_token_and_parses_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/etapi/notes/abc123"))
        .and(header("authorization", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(note_json(
            "abc123",
            "Inbox",
            "text",
            &["child1"],
        )))
        .mount(&server)
        .await;

    let note = client_for(&server).get_note("abc123").await.unwrap();
    assert_eq!(note.note_id, "abc123");
    assert_eq!(note.title, "Inbox");
    assert_eq!(note.kind, NoteKind::Text);
    assert_eq!(note.child_note_ids, vec!["child1"]);
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/etapi/notes/abc123"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": 401,
            "code": "NOT_AUTHENTICATED",
            "message": "invalid token",
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_note("abc123").await.unwrap_err();
    assert!(matches!(err, NotegateError::Auth(_)));
    assert!(err.to_string().contains("NOTEGATE_TOKEN"));
    assert!(err.to_string().contains("invalid token"));
}

#[tokio::test]
async fn test_missing_note_maps_to_not_found_with_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/etapi/notes/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "code": "NOTE_NOT_FOUND",
            "message": "Note 'missing' not found.",
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_note("missing").await.unwrap_err();
    match &err {
        NotegateError::NotFound { endpoint, message } => {
            assert_eq!(endpoint, "/notes/missing");
            assert_eq!(message, "Note 'missing' not found.");
        }
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_other_failures_carry_status_and_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/etapi/notes/abc123"))
        .respond_with(ResponseTemplate::new(500).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_note("abc123").await.unwrap_err();
    match &err {
        NotegateError::Api { status, .. } => assert_eq!(*status, 500),
        other => panic!("expected Api, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_treats_empty_body_as_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/etapi/notes/abc123"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client_for(&server).delete_note("abc123").await.unwrap();
}

#[tokio::test]
async fn test_search_sends_query_and_limit_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/etapi/notes"))
        .and(query_param("search", "#tag=recipe"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"noteId": "n1", "title": "Soup", "type": "text", "isProtected": false},
                {"noteId": "n2", "title": "Bread", "type": "text", "isProtected": false},
            ],
        })))
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search_notes("#tag=recipe", 5)
        .await
        .unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].note_id, "n1");
    assert_eq!(results[1].title, "Bread");
}

#[tokio::test]
async fn test_search_tolerates_missing_results_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/etapi/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let results = client_for(&server).search_notes("anything", 10).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_note_with_content_merges_both_fetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/etapi/notes/n1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(note_json("n1", "Doc", "text", &[])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/etapi/notes/n1/content"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>hello</p>"))
        .mount(&server)
        .await;

    let fetched = client_for(&server).get_note_with_content("n1").await.unwrap();
    assert_eq!(fetched.note.title, "Doc");
    assert_eq!(fetched.content, "<p>hello</p>");
}

#[tokio::test]
async fn test_children_are_assembled_in_store_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/etapi/notes/root"))
        .respond_with(ResponseTemplate::new(200).set_body_json(note_json(
            "root",
            "Root",
            "book",
            &["a", "b", "c"],
        )))
        .mount(&server)
        .await;
    for (id, title) in [("a", "Alpha"), ("b", "Beta"), ("c", "Gamma")] {
        Mock::given(method("GET"))
            .and(path(format!("/etapi/notes/{id}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(note_json(id, title, "text", &[])),
            )
            .mount(&server)
            .await;
    }

    let children = client_for(&server).get_note_children("root").await.unwrap();
    let titles: Vec<_> = children.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
}

#[tokio::test]
async fn test_create_note_posts_wire_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/etapi/create-note"))
        .and(body_json(json!({
            "parentNoteId": "root",
            "title": "New",
            "type": "text",
            "content": "<p>hi</p>",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "note": note_json("n9", "New", "text", &[]),
            "branch": {
                "branchId": "br1",
                "noteId": "n9",
                "parentNoteId": "root",
                "notePosition": 10,
                "prefix": null,
                "isExpanded": false,
            },
        })))
        .mount(&server)
        .await;

    let created = client_for(&server)
        .create_note(&CreateNoteParams {
            parent_note_id: "root".to_string(),
            title: "New".to_string(),
            kind: NoteKind::Text,
            content: "<p>hi</p>".to_string(),
            mime: None,
        })
        .await
        .unwrap();

    assert_eq!(created.note.note_id, "n9");
    assert_eq!(created.branch.parent_note_id, "root");
}

#[tokio::test]
async fn test_content_update_is_plain_text_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/etapi/notes/n1/content"))
        .and(header("content-type", "text/plain"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client_for(&server)
        .update_note_content("n1", "<p>new</p>")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_attribute_value_update_patches_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/etapi/attributes/attr1"))
        .and(body_json(json!({"value": "high"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attributeId": "attr1",
            "noteId": "n1",
            "type": "label",
            "name": "priority",
            "value": "high",
            "position": 10,
            "isInheritable": false,
        })))
        .mount(&server)
        .await;

    let attr = client_for(&server)
        .update_attribute_value("attr1", "high")
        .await
        .unwrap();
    assert_eq!(attr.value, "high");
    assert_eq!(attr.attribute_id, "attr1");
}
