//! End-to-end tests for the remote pipeline against a stubbed HTTP server

mod common;

use common::{body_script_texts, count_reference_nodes, create_test_html, head_style_texts};
use pagefuse::{FuseConfig, FuseError, combine_from_url};

#[tokio::test]
async fn inlines_stylesheet_and_script_and_removes_references() {
    let mut server = mockito::Server::new_async().await;
    let html = create_test_html(
        r#"<link rel="stylesheet" href="a.css">"#,
        r#"<script src="app.js"></script>"#,
    );

    let _doc = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(&html)
        .create_async()
        .await;
    let _css = server
        .mock("GET", "/a.css")
        .with_status(200)
        .with_header("content-type", "text/css")
        .with_body("body{color:red}")
        .create_async()
        .await;
    let _js = server
        .mock("GET", "/app.js")
        .with_status(200)
        .with_header("content-type", "application/javascript")
        .with_body("console.log(1);")
        .create_async()
        .await;

    let report = combine_from_url(&server.url(), &FuseConfig::default())
        .await
        .unwrap();

    assert_eq!(report.successes, 2);
    assert!(!report.has_failures());
    assert_eq!(head_style_texts(&report.html), vec!["body{color:red}"]);
    assert_eq!(body_script_texts(&report.html), vec!["console.log(1);"]);
    assert_eq!(count_reference_nodes(&report.html), (0, 0));
}

#[tokio::test]
async fn failed_asset_is_isolated_and_reference_survives() {
    let mut server = mockito::Server::new_async().await;
    let html = create_test_html(
        r#"<link rel="stylesheet" href="good.css">
           <link rel="stylesheet" href="bad.css">"#,
        "",
    );

    let _doc = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(&html)
        .create_async()
        .await;
    let _good = server
        .mock("GET", "/good.css")
        .with_status(200)
        .with_body(".good{}")
        .create_async()
        .await;
    let _bad = server
        .mock("GET", "/bad.css")
        .with_status(500)
        .with_body("Error")
        .create_async()
        .await;

    let report = combine_from_url(&server.url(), &FuseConfig::default())
        .await
        .unwrap();

    // The request still succeeds: one asset inlined, one failure recorded,
    // and the failed reference node is untouched in the output.
    assert_eq!(report.successes, 1);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].url.ends_with("/bad.css"));
    assert_eq!(head_style_texts(&report.html), vec![".good{}"]);
    assert_eq!(count_reference_nodes(&report.html), (1, 0));
    assert!(report.html.contains("bad.css"));
}

#[tokio::test]
async fn unreachable_asset_is_isolated() {
    let mut server = mockito::Server::new_async().await;
    // Nothing listens on port 9; the connection is refused immediately
    let html = create_test_html(
        r#"<link rel="stylesheet" href="http://127.0.0.1:9/style.css">"#,
        r#"<script src="ok.js"></script>"#,
    );

    let _doc = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(&html)
        .create_async()
        .await;
    let _js = server
        .mock("GET", "/ok.js")
        .with_status(200)
        .with_body("var ok = true;")
        .create_async()
        .await;

    let report = combine_from_url(&server.url(), &FuseConfig::default())
        .await
        .unwrap();

    assert_eq!(report.successes, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(body_script_texts(&report.html), vec!["var ok = true;"]);
    assert_eq!(count_reference_nodes(&report.html), (1, 0));
}

#[tokio::test]
async fn primary_fetch_failure_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    let _doc = server
        .mock("GET", "/")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let err = combine_from_url(&server.url(), &FuseConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FuseError::PrimaryFetchFailed { .. }));
}

#[tokio::test]
async fn relative_references_resolve_against_request_url() {
    let mut server = mockito::Server::new_async().await;
    let html = create_test_html(r#"<link rel="stylesheet" href="../shared/site.css">"#, "");

    let _doc = server
        .mock("GET", "/docs/guide/")
        .with_status(200)
        .with_body(&html)
        .create_async()
        .await;
    let _css = server
        .mock("GET", "/docs/shared/site.css")
        .with_status(200)
        .with_body(".shared{}")
        .create_async()
        .await;

    let url = format!("{}/docs/guide/", server.url());
    let report = combine_from_url(&url, &FuseConfig::default()).await.unwrap();

    assert_eq!(report.successes, 1);
    assert_eq!(head_style_texts(&report.html), vec![".shared{}"]);
}

#[tokio::test]
async fn stubbed_fetches_are_deterministic() {
    let mut server = mockito::Server::new_async().await;
    let html = create_test_html(
        r#"<link rel="stylesheet" href="a.css">"#,
        r#"<script src="b.js"></script>"#,
    );

    let _doc = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(&html)
        .create_async()
        .await;
    let _css = server
        .mock("GET", "/a.css")
        .with_status(200)
        .with_body(".a{}")
        .create_async()
        .await;
    let _js = server
        .mock("GET", "/b.js")
        .with_status(200)
        .with_body("var b;")
        .create_async()
        .await;

    let config = FuseConfig::default();
    let first = combine_from_url(&server.url(), &config).await.unwrap();
    let second = combine_from_url(&server.url(), &config).await.unwrap();

    assert_eq!(first.html, second.html);
}

#[tokio::test]
async fn duplicate_references_are_fetched_and_inlined_per_occurrence() {
    let mut server = mockito::Server::new_async().await;
    let html = create_test_html(
        r#"<link rel="stylesheet" href="dup.css">
           <link rel="stylesheet" href="dup.css">"#,
        "",
    );

    let _doc = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(&html)
        .create_async()
        .await;
    let _css = server
        .mock("GET", "/dup.css")
        .with_status(200)
        .with_body(".d{}")
        .create_async()
        .await;

    let report = combine_from_url(&server.url(), &FuseConfig::default())
        .await
        .unwrap();

    // No deduplication: both reference nodes become inline blocks
    assert_eq!(report.successes, 2);
    assert_eq!(head_style_texts(&report.html), vec![".d{}", ".d{}"]);
    assert_eq!(count_reference_nodes(&report.html), (0, 0));
}

#[tokio::test]
async fn non_http_and_malformed_urls_are_rejected() {
    let config = FuseConfig::default();

    let err = combine_from_url("ftp://example.com/page", &config)
        .await
        .unwrap_err();
    assert!(matches!(err, FuseError::InvalidUrl(_)));

    let err = combine_from_url("definitely not a url", &config)
        .await
        .unwrap_err();
    assert!(matches!(err, FuseError::InvalidUrl(_)));
}
