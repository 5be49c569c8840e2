use larder::LarderError;
use larder::secrets::KeyVaultClient;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server_uri: &str) -> KeyVaultClient {
    KeyVaultClient::new(server_uri, reqwest::Client::new()).expect("valid vault url")
}

#[tokio::test]
async fn fetches_and_parses_connection_parameters() {
    let server = MockServer::start().await;
    let secret_value =
        r#"{"DB_HOST":"db.internal","DB_USER":"app","DB_PASSWORD":"hunter2","DB_NAME":"larder"}"#;

    Mock::given(method("GET"))
        .and(path("/secrets/db-credentials"))
        .and(query_param("api-version", "7.4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": secret_value,
            "id": format!("{}/secrets/db-credentials/0123", server.uri()),
        })))
        .mount(&server)
        .await;

    let db = client_for(&server.uri())
        .fetch_db_config("token", "db-credentials")
        .await
        .expect("secret fetch succeeds");

    assert_eq!(db.host, "db.internal");
    assert_eq!(db.user, "app");
    assert_eq!(db.password, "hunter2");
    assert_eq!(db.database, "larder");
}

#[tokio::test]
async fn missing_secret_maps_to_secret_unavailable() {
    // No mock mounted: the server answers 404 for every request.
    let server = MockServer::start().await;

    let err = client_for(&server.uri())
        .fetch_db_config("token", "absent")
        .await
        .expect_err("404 must fail the load");

    assert!(matches!(err, LarderError::SecretUnavailable(_)));
}

#[tokio::test]
async fn malformed_secret_value_maps_to_secret_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secrets/db-credentials"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "value": "definitely not json" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .fetch_db_config("token", "db-credentials")
        .await
        .expect_err("malformed payload must fail the load");

    assert!(matches!(err, LarderError::SecretUnavailable(_)));
    // The secret value must never leak into the error.
    assert!(!err.to_string().contains("definitely not json"));
}

#[tokio::test]
async fn unreachable_store_maps_to_secret_unavailable() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let err = client_for(&uri)
        .fetch_db_config("token", "db-credentials")
        .await
        .expect_err("closed port must fail the load");

    assert!(matches!(err, LarderError::SecretUnavailable(_)));
}
