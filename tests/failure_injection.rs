//! Bad-input tests: the service rejects hostile bodies and keeps serving.

use std::time::{Duration, Instant};

use sum_service::ServiceConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

mod common;

#[tokio::test]
async fn test_rejects_bad_bodies() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    let bad_bodies = [
        "hello",
        "\"hello\"",
        "",
        "{\"values\": [1, 2]}",
        "[1, 2",
        "[1, \"2\"]",
        "[true, false]",
        "[null]",
        "__import__('os').system('echo pwned')",
        "sum([1, 2, 3])",
        "(1, 2, 3)",
    ];

    for body in bad_bodies {
        for path in ["/sum_list", "/sum_list_test"] {
            let res = client.post(service.url(path)).body(body).send().await.unwrap();
            assert_eq!(res.status(), 400, "{path} accepted {body:?}");
            let text = res.text().await.unwrap();
            assert!(!text.is_empty(), "no error message for {body:?}");
        }
    }

    service.stop().await.unwrap();
}

#[tokio::test]
async fn test_stays_available_after_repeated_failures() {
    let service = common::start_service(ServiceConfig::default()).await;
    let client = common::client();

    for _ in 0..200 {
        let res = client
            .post(service.url("/sum_list"))
            .body("not a list")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 400);
    }

    let res = client
        .post(service.url("/sum_list"))
        .body("[1,2,3]")
        .send()
        .await
        .expect("service should still be up");
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "6\n");

    service.stop().await.unwrap();
}

#[tokio::test]
async fn test_oversized_body() {
    let mut config = ServiceConfig::default();
    config.security.max_body_size = 1024;
    let service = common::start_service(config).await;

    let body = format!("[{}]", vec!["12345"; 1000].join(","));
    let res = common::client()
        .post(service.url("/sum_list"))
        .body(body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 413);

    service.stop().await.unwrap();
}

#[tokio::test]
async fn test_stalled_body_times_out() {
    let mut config = ServiceConfig::default();
    config.timeouts.request_secs = 1;
    let service = common::start_service(config).await;

    // Promise ten bytes of body, send three, then go quiet.
    let mut stream = TcpStream::connect(service.addr).await.unwrap();
    stream
        .write_all(b"POST /sum_list HTTP/1.1\r\nHost: localhost\r\nContent-Length: 10\r\n\r\n[1,")
        .await
        .unwrap();

    let start = Instant::now();
    let mut buf = vec![0u8; 1024];
    let n = tokio::time::timeout(Duration::from_secs(5), stream.read(&mut buf))
        .await
        .expect("no response to a stalled body")
        .unwrap();
    let elapsed = start.elapsed();

    let response = String::from_utf8_lossy(&buf[..n]);
    assert!(
        response.starts_with("HTTP/1.1 408"),
        "unexpected response: {response}"
    );
    assert!(elapsed >= Duration::from_millis(900), "timed out too early: {elapsed:?}");

    // The service keeps answering after the timeout.
    let res = common::client()
        .post(service.url("/sum_list"))
        .body("[1,2,3]")
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "6\n");

    service.stop().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_stops_accepting() {
    let service = common::start_service(ServiceConfig::default()).await;
    let url = service.url("/");
    let client = common::client();

    assert_eq!(client.get(&url).send().await.unwrap().status(), 200);

    service.stop().await.unwrap();

    assert!(client.get(&url).send().await.is_err(), "server still accepting after shutdown");
}
