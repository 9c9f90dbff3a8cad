//! End-to-end tests for the HTTP surface over a real socket.

use sum_service::ServiceConfig;

mod common;

#[tokio::test]
async fn test_home_greeting() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    for path in ["/", "/?foo=bar", "/?x=1&y=2"] {
        let res = client.get(service.url(path)).send().await.expect("service unreachable");
        assert_eq!(res.status(), 200);
        assert_eq!(res.text().await.unwrap(), "Hello, World!\n");
    }

    service.stop().await.unwrap();
}

#[tokio::test]
async fn test_sum_list_table() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    let cases = [
        ("[1,2,3]", "6\n"),
        ("[]", "0\n"),
        ("[-1, 1]", "0\n"),
        ("[1.5, 2.5]", "4.0\n"),
        ("[1, 0.5]", "1.5\n"),
        (" [10, 20]\n", "30\n"),
    ];

    for (body, expected) in cases {
        let res = client
            .post(service.url("/sum_list"))
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200, "status for {body:?}");
        assert_eq!(res.text().await.unwrap(), expected, "body for {body:?}");
    }

    service.stop().await.unwrap();
}

#[tokio::test]
async fn test_sum_list_test_agrees_with_sum_list() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    let payloads = [
        "[1,2,3]",
        "[0.1, 0.2, 0.3]",
        "[-5, 2.25, 1000000]",
        "[9223372036854775807, 9223372036854775807]",
        "[]",
    ];

    for payload in payloads {
        let primary = client
            .post(service.url("/sum_list"))
            .body(payload)
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        let res = client
            .post(service.url("/sum_list_test"))
            .body(payload)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
        assert_eq!(res.text().await.unwrap(), primary, "divergence on {payload}");
    }

    service.stop().await.unwrap();
}

#[tokio::test]
async fn test_json_client_body() {
    let service = common::start_service(ServiceConfig::default()).await;

    let res = common::client()
        .post(service.url("/sum_list"))
        .json(&serde_json::json!([4, 5, 6]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.text().await.unwrap(), "15\n");

    service.stop().await.unwrap();
}
