//! Integration tests for DocumentSubmitter against a mock registration API

use crpt_core::{
    Document, DocumentSubmitter, Product, RateLimitConfig, SignaturePlacement, SubmitError,
    SubmitterConfig,
};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CREATE_PATH: &str = "/api/v3/lk/documents/create";

fn sample_product() -> Product {
    Product {
        certificate_document: "CONFORMITY_CERTIFICATE".to_string(),
        certificate_document_date: "2024-08-12".to_string(),
        certificate_document_number: "RU-123".to_string(),
        owner_inn: "7700000000".to_string(),
        producer_inn: "7800000000".to_string(),
        production_date: "2024-08-12".to_string(),
        tnved_code: "6401100000".to_string(),
        uit_code: "010460043993125621JgXJ5.T".to_string(),
        uitu_code: "".to_string(),
    }
}

fn sample_document(products: Vec<Product>) -> Document {
    Document {
        doc_id: "doc-1".to_string(),
        doc_status: "DRAFT".to_string(),
        doc_type: "LP_INTRODUCE_GOODS".to_string(),
        import_request: true,
        owner_inn: "7700000000".to_string(),
        participant_inn: "7700000001".to_string(),
        producer_inn: "7800000000".to_string(),
        production_date: "2024-08-12".to_string(),
        production_type: "OWN_PRODUCTION".to_string(),
        products,
        reg_date: "2024-08-12".to_string(),
        reg_number: "reg-42".to_string(),
    }
}

fn create_test_submitter(endpoint: String, window: Duration, request_limit: u32) -> DocumentSubmitter {
    let config = SubmitterConfig::default()
        .with_endpoint(endpoint)
        .with_rate_limit(RateLimitConfig::new(window, request_limit));
    let http_client = Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to create HTTP client");
    DocumentSubmitter::with_client(config, http_client).expect("Failed to create submitter")
}

fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), CREATE_PATH)
}

#[tokio::test]
async fn test_submit_sends_headers_and_body() {
    let mock_server = MockServer::start().await;
    let document = sample_document(vec![sample_product()]);

    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .and(header("content-type", "application/json"))
        .and(header("Signature", "c2lnbmF0dXJl"))
        .and(body_json(json!({
            "doc_id": "doc-1",
            "doc_status": "DRAFT",
            "doc_type": "LP_INTRODUCE_GOODS",
            "importRequest": true,
            "owner_inn": "7700000000",
            "participant_inn": "7700000001",
            "producer_inn": "7800000000",
            "production_date": "2024-08-12",
            "production_type": "OWN_PRODUCTION",
            "products": [{
                "certificate_document": "CONFORMITY_CERTIFICATE",
                "certificate_document_date": "2024-08-12",
                "certificate_document_number": "RU-123",
                "owner_inn": "7700000000",
                "producer_inn": "7800000000",
                "production_date": "2024-08-12",
                "tnved_code": "6401100000",
                "uit_code": "010460043993125621JgXJ5.T",
                "uitu_code": ""
            }],
            "reg_date": "2024-08-12",
            "reg_number": "reg-42"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value":"accepted"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let submitter = create_test_submitter(endpoint(&mock_server), Duration::from_secs(60), 10);
    let body = submitter.submit(&document, "c2lnbmF0dXJl").await.unwrap();

    assert_eq!(body, r#"{"value":"accepted"}"#);
    assert_eq!(submitter.rate_limiter().available_permits(), 9);
}

#[tokio::test]
async fn test_error_status_body_is_returned_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("signature is not valid"))
        .mount(&mock_server)
        .await;

    let submitter = create_test_submitter(endpoint(&mock_server), Duration::from_secs(60), 1);
    let body = submitter
        .submit(&sample_document(vec![]), "bad")
        .await
        .unwrap();

    assert_eq!(body, "signature is not valid");
}

#[tokio::test]
async fn test_empty_products_sent_as_empty_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let submitter = create_test_submitter(endpoint(&mock_server), Duration::from_secs(60), 1);
    submitter
        .submit(&sample_document(vec![]), "sig")
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(body.contains(r#""products":[]"#));
}

#[tokio::test]
async fn test_body_signature_placement() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let config = SubmitterConfig::default()
        .with_endpoint(endpoint(&mock_server))
        .with_rate_limit(RateLimitConfig::per_minute(5))
        .with_signature_placement(SignaturePlacement::Body);
    let http_client = Client::builder().no_proxy().build().unwrap();
    let submitter = DocumentSubmitter::with_client(config, http_client).unwrap();

    submitter
        .submit(&sample_document(vec![sample_product()]), "sig-in-body")
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("signature").is_none());
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["signature"], "sig-in-body");
    assert_eq!(body["document"]["doc_id"], "doc-1");
    assert_eq!(body["document"]["products"][0]["tnved_code"], "6401100000");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error_and_permit_is_kept() {
    // Bind and release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let submitter = create_test_submitter(
        format!("http://127.0.0.1:{}{}", port, CREATE_PATH),
        Duration::from_secs(60),
        2,
    );

    let err = submitter
        .submit(&sample_document(vec![]), "sig")
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Transport { .. }));
    assert_eq!(err.error_code(), "CRPT_TRANSPORT");
    assert_eq!(submitter.rate_limiter().available_permits(), 1);
}

#[tokio::test]
async fn test_invalid_signature_is_encoding_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let submitter = create_test_submitter(endpoint(&mock_server), Duration::from_secs(60), 1);
    let err = submitter
        .submit(&sample_document(vec![]), "line\nbreak")
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "CRPT_ENCODING");
    assert_eq!(submitter.rate_limiter().available_permits(), 0);
}

#[tokio::test]
async fn test_submissions_are_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let submitter = create_test_submitter(endpoint(&mock_server), Duration::from_millis(300), 2);
    let start = Instant::now();

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let submitter = submitter.clone();
            tokio::spawn(async move {
                submitter
                    .submit(&sample_document(vec![]), "sig")
                    .await
                    .unwrap();
                start.elapsed()
            })
        })
        .collect();

    let mut elapsed = Vec::new();
    for handle in handles {
        elapsed.push(handle.await.unwrap());
    }
    elapsed.sort();

    assert!(elapsed[1] < Duration::from_millis(250));
    assert!(elapsed[2] >= Duration::from_millis(250));
}

#[tokio::test]
async fn test_interrupt_fails_waiting_submission() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let submitter = create_test_submitter(endpoint(&mock_server), Duration::from_secs(60), 1);
    submitter
        .submit(&sample_document(vec![]), "sig")
        .await
        .unwrap();

    let waiting = {
        let submitter = submitter.clone();
        tokio::spawn(async move { submitter.submit(&sample_document(vec![]), "sig").await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    submitter.interrupt();

    let err = waiting.await.unwrap().unwrap_err();
    assert!(err.is_interrupted());
}

#[tokio::test]
async fn test_submit_cancellable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let submitter = create_test_submitter(endpoint(&mock_server), Duration::from_secs(60), 1);
    let token = CancellationToken::new();

    let body = submitter
        .submit_cancellable(&sample_document(vec![]), "sig", &token)
        .await
        .unwrap();
    assert_eq!(body, "ok");

    token.cancel();
    let err = submitter
        .submit_cancellable(&sample_document(vec![]), "sig", &token)
        .await
        .unwrap_err();
    assert!(err.is_interrupted());
}

#[tokio::test]
async fn test_shutdown_is_a_soft_stop() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let submitter = create_test_submitter(endpoint(&mock_server), Duration::from_millis(100), 1);
    submitter
        .submit(&sample_document(vec![]), "sig")
        .await
        .unwrap();
    submitter.shutdown();

    let blocked = tokio::time::timeout(
        Duration::from_millis(400),
        submitter.submit(&sample_document(vec![]), "sig"),
    )
    .await;
    assert!(blocked.is_err());
}

#[tokio::test]
async fn test_zero_request_limit_is_configuration_error() {
    let err = DocumentSubmitter::new(Duration::from_secs(60), 0).unwrap_err();
    assert!(matches!(err, SubmitError::Configuration { .. }));
}

#[tokio::test]
async fn test_default_endpoint() {
    let submitter = DocumentSubmitter::new(Duration::from_secs(60), 10).unwrap();
    assert_eq!(
        submitter.endpoint(),
        "https://ismp.crpt.ru/api/v3/lk/documents/create"
    );
    assert_eq!(submitter.config().rate_limit.request_limit, 10);
    submitter.shutdown();
    assert!(submitter.rate_limiter().is_shutdown());
}
