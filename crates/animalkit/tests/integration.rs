//! Integration tests for AnimalKit using wiremock

use animalkit::{AnimalClient, AnimalError, Subject, DEFAULT_USER_AGENT, DOG_FACT_UNAVAILABLE};
use serde_json::json;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOG_PATH: &str = "/api/breeds/image/random";
const CAT_PATH: &str = "/v1/images/search";
const FACT_PATH: &str = "/";

/// Client with every endpoint pointed at the mock server
fn client_for(mock_server: &MockServer) -> AnimalClient {
    AnimalClient::builder()
        .dog_picture_url(format!("{}{}", mock_server.uri(), DOG_PATH))
        .cat_picture_url(format!("{}{}", mock_server.uri(), CAT_PATH))
        .cat_fact_url(format!("{}{}", mock_server.uri(), FACT_PATH))
        .build()
        .unwrap()
}

/// Address with nothing listening on it
fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

async fn mount_json(mock_server: &MockServer, at: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_dog_picture() {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        DOG_PATH,
        json!({"status": "success", "message": "http://x/d.jpg"}),
    )
    .await;

    let client = client_for(&mock_server);
    assert_eq!(client.picture("dog").await.unwrap(), "http://x/d.jpg");
}

#[tokio::test]
async fn test_picture_is_case_insensitive() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOG_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "message": "http://x/d.jpg"})),
        )
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    for name in ["dog", "DOG", "Dog"] {
        assert_eq!(client.picture(name).await.unwrap(), "http://x/d.jpg");
    }
}

#[tokio::test]
async fn test_dog_picture_missing_message() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, DOG_PATH, json!({"status": "success"})).await;

    let err = client_for(&mock_server).picture("dog").await.unwrap_err();
    assert!(matches!(
        err,
        AnimalError::ParseFailed {
            subject: Subject::DogPicture,
            ..
        }
    ));
    assert!(err
        .to_string()
        .contains("Failed to parse dog picture API response"));
}

#[tokio::test]
async fn test_dog_picture_status_not_success() {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        DOG_PATH,
        json!({"status": "error", "message": "Breed not found"}),
    )
    .await;

    let err = client_for(&mock_server).picture("dog").await.unwrap_err();
    assert!(matches!(err, AnimalError::ParseFailed { .. }));
    assert!(err
        .to_string()
        .contains("Dog API did not return a successful response"));
}

#[tokio::test]
async fn test_cat_picture() {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        CAT_PATH,
        json!([
            {"id": "a1", "url": "http://x/c1.jpg", "width": 640, "height": 480},
            {"id": "a2", "url": "http://x/c2.jpg"}
        ]),
    )
    .await;

    let client = client_for(&mock_server);
    assert_eq!(client.picture("CAT").await.unwrap(), "http://x/c1.jpg");
}

#[tokio::test]
async fn test_cat_picture_empty_list() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, CAT_PATH, json!([])).await;

    let err = client_for(&mock_server).picture("cat").await.unwrap_err();
    assert!(matches!(
        err,
        AnimalError::ParseFailed {
            subject: Subject::CatPicture,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "Failed to parse cat picture API response: Invalid cat picture API response format."
    );
}

#[tokio::test]
async fn test_cat_picture_not_a_list() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, CAT_PATH, json!({"url": "http://x/c.jpg"})).await;

    let err = client_for(&mock_server).picture("cat").await.unwrap_err();
    assert!(matches!(err, AnimalError::ParseFailed { .. }));
    assert!(err
        .to_string()
        .contains("Failed to parse cat picture API response"));
}

#[tokio::test]
async fn test_cat_picture_missing_url() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, CAT_PATH, json!([{"id": "123"}])).await;

    let err = client_for(&mock_server).picture("cat").await.unwrap_err();
    assert!(matches!(err, AnimalError::ParseFailed { .. }));
    assert!(err.to_string().contains("missing field `url`"));
}

#[tokio::test]
async fn test_cat_fact() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, FACT_PATH, json!({"data": ["x"]})).await;

    let client = client_for(&mock_server);
    assert_eq!(client.fact("cat").await.unwrap(), "x");
}

#[tokio::test]
async fn test_cat_fact_empty_data() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, FACT_PATH, json!({"data": []})).await;

    let err = client_for(&mock_server).fact("Cat").await.unwrap_err();
    assert!(matches!(
        err,
        AnimalError::ParseFailed {
            subject: Subject::CatFact,
            ..
        }
    ));
}

#[tokio::test]
async fn test_cat_fact_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FACT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>Error</html>", "text/html"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).fact("cat").await.unwrap_err();
    assert!(matches!(err, AnimalError::ParseFailed { .. }));
    // Decoder text is preserved
    assert_eq!(
        err.to_string(),
        "Failed to parse cat fact API response: expected value at line 1 column 1"
    );
}

#[tokio::test]
async fn test_fact_dog_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    for name in ["dog", "DOG", "Dog"] {
        assert_eq!(client.fact(name).await.unwrap(), DOG_FACT_UNAVAILABLE);
    }
}

#[tokio::test]
async fn test_unsupported_animal_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = client.picture("raccoon").await.unwrap_err();
    assert!(matches!(err, AnimalError::UnsupportedAnimal { .. }));
    assert!(err.to_string().contains("raccoon"));

    let err = client.fact("PANDA").await.unwrap_err();
    assert_eq!(err.to_string(), "Facts for 'PANDA' are not supported yet.");
}

#[tokio::test]
async fn test_5xx_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOG_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).picture("dog").await.unwrap_err();
    assert!(matches!(
        err,
        AnimalError::FetchFailed {
            subject: Subject::DogPicture,
            ..
        }
    ));
    let message = err.to_string();
    assert!(message.starts_with("Failed to fetch dog picture: "));
    assert!(message.contains("500"));
}

#[tokio::test]
async fn test_4xx_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FACT_PATH))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).fact("cat").await.unwrap_err();
    assert!(matches!(err, AnimalError::FetchFailed { .. }));
    let message = err.to_string();
    assert!(message.starts_with("Failed to fetch cat fact: "));
    assert!(message.contains("403"));
}

#[tokio::test]
async fn test_connection_refused() {
    let url = refused_url();
    let client = AnimalClient::builder()
        .dog_picture_url(url.clone())
        .cat_picture_url(url.clone())
        .cat_fact_url(url)
        .build()
        .unwrap();

    let cases = [
        (client.picture("dog").await, "Failed to fetch dog picture: "),
        (client.picture("cat").await, "Failed to fetch cat picture: "),
        (client.fact("cat").await, "Failed to fetch cat fact: "),
    ];

    for (result, prefix) in cases {
        let err = result.unwrap_err();
        assert!(matches!(err, AnimalError::FetchFailed { .. }));
        let message = err.to_string();
        assert!(message.starts_with(prefix), "unexpected message: {}", message);
        // Cause chain reaches the OS-level connect error
        assert!(
            message.to_lowercase().contains("refused"),
            "unexpected message: {}",
            message
        );
    }
}

#[tokio::test]
async fn test_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FACT_PATH))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": ["ok"]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert_eq!(client_for(&mock_server).fact("cat").await.unwrap(), "ok");
}

#[tokio::test]
async fn test_custom_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CAT_PATH))
        .and(header("user-agent", "CustomBot/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"url": "http://x/c.jpg"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AnimalClient::builder()
        .user_agent("CustomBot/1.0")
        .cat_picture_url(format!("{}{}", mock_server.uri(), CAT_PATH))
        .build()
        .unwrap();

    assert_eq!(client.picture("cat").await.unwrap(), "http://x/c.jpg");
}
