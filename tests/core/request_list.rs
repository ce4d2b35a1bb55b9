use engagement_helpers::error::CoreError;
use engagement_helpers::request_list::flatten_request_list;
use serde_json::json;

#[test]
fn test_flattens_requests_across_clients_and_projects() {
    let data = vec![json!({
        "id": "ep-1",
        "name": "Acme Group",
        "Client": [
            {
                "id": "c-1",
                "Project": [
                    { "id": "p-1", "Request": [ { "id": "r-1" }, { "id": "r-2" } ] },
                    { "id": "p-2", "Request": [] }
                ]
            },
            {
                "id": "c-2",
                "Project": [
                    { "id": "p-3", "Request": [
                        { "id": "r-3", "Project": { "id": "p-3", "Client": { "id": "c-2" } } }
                    ] }
                ]
            }
        ]
    })];

    let flat = flatten_request_list(data).unwrap();
    assert_eq!(
        flat,
        vec![json!({
            "id": "ep-1",
            "name": "Acme Group",
            "Request": [
                { "id": "r-1" },
                { "id": "r-2" },
                { "id": "r-3", "Project": { "id": "p-3", "Client": { "id": "c-2" } } }
            ]
        })]
    );
}

#[test]
fn test_party_without_clients_gets_empty_requests() {
    let flat = flatten_request_list(vec![
        json!({ "id": "ep-2" }),
        json!({ "id": "ep-3", "Client": null }),
    ])
    .unwrap();
    assert_eq!(
        flat,
        vec![
            json!({ "id": "ep-2", "Request": [] }),
            json!({ "id": "ep-3", "Request": [] })
        ]
    );
}

#[test]
fn test_non_object_party_is_an_error() {
    let err = flatten_request_list(vec![json!({ "id": "ok" }), json!(42)]).unwrap_err();
    assert!(matches!(err, CoreError::Shape(msg) if msg.contains("#1")));
}
