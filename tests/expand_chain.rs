//! Integration tests for redirect resolution and metadata extraction.
//!
//! These use an httptest mock server, so no real network access is needed.

use httptest::{matchers::*, responders::*, Expectation, Server};

use url_expander::{Expander, ExpanderConfig};

fn expander() -> Expander {
    Expander::new(ExpanderConfig::default()).expect("expander should build")
}

/// Zero redirects: the first response is terminal, the chain has one hop and
/// the final URL equals the original.
#[tokio::test]
async fn test_zero_redirects_single_hop() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/final"))
            .times(2) // once for the chain, once for the metadata fetch
            .respond_with(status_code(200).body("<html><title>Landed</title></html>")),
    );

    let url = server.url_str("/final");
    let result = expander().expand(&url).await.expect("expand should succeed");

    assert_eq!(result.original_url, url);
    assert_eq!(result.final_url, url);
    assert_eq!(result.redirect_chain.len(), 1);
    assert_eq!(result.redirect_chain[0].status_code, 200);
    assert!(result.redirect_chain[0].is_final);
    assert_eq!(result.metadata.title.as_deref(), Some("Landed"));
    // The mock response carries no Content-Type header: a successful fetch
    // records an empty string, not an absent value
    assert_eq!(result.metadata.content_type.as_deref(), Some(""));
}

/// A two-redirect chain ending in a 200 yields three hops with the observed
/// statuses, only the last marked final.
#[tokio::test]
async fn test_two_redirect_chain() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/r1"))
            .respond_with(status_code(301).append_header("Location", "/r2")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/r2"))
            .respond_with(status_code(302).append_header("Location", "/final")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/final"))
            .times(2)
            .respond_with(status_code(200).body("done")),
    );

    let url = server.url_str("/r1");
    let result = expander().expand(&url).await.expect("expand should succeed");

    assert_eq!(result.redirect_chain.len(), 3);
    assert_eq!(result.redirect_chain[0].status_code, 301);
    assert_eq!(result.redirect_chain[1].status_code, 302);
    assert_eq!(result.redirect_chain[2].status_code, 200);
    assert!(!result.redirect_chain[0].is_final);
    assert!(!result.redirect_chain[1].is_final);
    assert!(result.redirect_chain[2].is_final);
    assert_eq!(result.final_url, server.url_str("/final"));
    assert_eq!(
        result.redirect_chain.iter().filter(|h| h.is_final).count(),
        1
    );
}

/// A root-relative Location is combined with the current scheme and
/// authority.
#[tokio::test]
async fn test_root_relative_location_resolution() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/start"))
            .respond_with(status_code(302).append_header("Location", "/next")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/next"))
            .times(2)
            .respond_with(status_code(200).body("ok")),
    );

    let url = server.url_str("/start");
    let result = expander().expand(&url).await.expect("expand should succeed");

    assert_eq!(result.final_url, server.url_str("/next"));
}

/// A redirect loop is cut off at the hop ceiling: exactly 10 hops, the last
/// forced final even though its status was a redirect.
#[tokio::test]
async fn test_redirect_loop_hits_ceiling() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/loop"))
            .times(10..)
            .respond_with(status_code(302).append_header("Location", "/loop")),
    );

    let url = server.url_str("/loop");
    let result = expander().expand(&url).await.expect("expand should succeed");

    assert_eq!(result.redirect_chain.len(), 10);
    let last = result.redirect_chain.last().unwrap();
    assert!(last.is_final);
    assert_eq!(last.status_code, 302);
    assert!(result.redirect_chain[..9].iter().all(|h| !h.is_final));
}

/// A transport failure on the very first request yields a one-hop chain with
/// status 0.
#[tokio::test]
async fn test_first_request_transport_failure() {
    // Bind then drop a listener so the port is free and connections are
    // refused immediately
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };

    let url = format!("http://127.0.0.1:{port}/");
    let result = expander().expand(&url).await.expect("expand should succeed");

    assert_eq!(result.redirect_chain.len(), 1);
    assert_eq!(result.redirect_chain[0].status_code, 0);
    assert!(result.redirect_chain[0].is_final);
    assert_eq!(result.final_url, url);
    // metadata fetch also fails; scraped fields absent, safety still present
    assert_eq!(result.metadata.title, None);
    assert_eq!(result.metadata.content_type, None);
    assert!(!result.metadata.is_safe.is_https);
    assert_eq!(result.metadata.is_safe.domain, "127.0.0.1");
}

/// A transport failure mid-chain terminates at that hop: its URL becomes the
/// final URL even though it never responded.
#[tokio::test]
async fn test_transport_failure_mid_chain() {
    let dead_port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };
    let dead_url = format!("http://127.0.0.1:{dead_port}/gone");

    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/start"))
            .respond_with(status_code(301).append_header("Location", dead_url.clone())),
    );

    let url = server.url_str("/start");
    let result = expander().expand(&url).await.expect("expand should succeed");

    assert_eq!(result.redirect_chain.len(), 2);
    assert_eq!(result.redirect_chain[0].status_code, 301);
    assert!(!result.redirect_chain[0].is_final);
    assert_eq!(result.redirect_chain[1].status_code, 0);
    assert!(result.redirect_chain[1].is_final);
    assert_eq!(result.final_url, dead_url);
}

/// A redirect status without a Location header terminates the chain at that
/// hop with its status recorded.
#[tokio::test]
async fn test_redirect_without_location_is_terminal() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/odd"))
            .times(2)
            .respond_with(status_code(302)),
    );

    let url = server.url_str("/odd");
    let result = expander().expand(&url).await.expect("expand should succeed");

    assert_eq!(result.redirect_chain.len(), 1);
    assert_eq!(result.redirect_chain[0].status_code, 302);
    assert!(result.redirect_chain[0].is_final);
}

/// A non-redirect failure status is terminal and recorded as-is.
#[tokio::test]
async fn test_failure_status_is_terminal() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/missing"))
            .times(2)
            .respond_with(status_code(404).body("not here")),
    );

    let url = server.url_str("/missing");
    let result = expander().expand(&url).await.expect("expand should succeed");

    assert_eq!(result.redirect_chain.len(), 1);
    assert_eq!(result.redirect_chain[0].status_code, 404);
    assert!(result.redirect_chain[0].is_final);
}

/// Metadata extraction honors tag precedence and normalizes a root-relative
/// og:image against the page origin.
#[tokio::test]
async fn test_metadata_extraction_from_final_page() {
    let html = concat!(
        "<html><head>",
        r#"<meta property="og:title" content="Social Title">"#,
        r#"<meta property="og:description" content="Social description">"#,
        r#"<meta property="og:image" content="/img/cover.png">"#,
        r#"<meta property="og:site_name" content="Example Site">"#,
        "<title>Fallback Title</title>",
        "</head><body></body></html>"
    );

    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/page"))
            .times(2)
            .respond_with(
                status_code(200)
                    .append_header("Content-Type", "text/html; charset=utf-8")
                    .body(html),
            ),
    );

    let url = server.url_str("/page");
    let result = expander().expand(&url).await.expect("expand should succeed");

    let metadata = &result.metadata;
    assert_eq!(metadata.title.as_deref(), Some("Social Title"));
    assert_eq!(metadata.description.as_deref(), Some("Social description"));
    assert_eq!(metadata.site_name.as_deref(), Some("Example Site"));
    assert_eq!(
        metadata.content_type.as_deref(),
        Some("text/html; charset=utf-8")
    );

    // http://127.0.0.1:{port}/img/cover.png
    let expected_image = {
        let base = url.trim_end_matches("/page");
        format!("{base}/img/cover.png")
    };
    assert_eq!(metadata.image.as_deref(), Some(expected_image.as_str()));
}

/// Invalid input is rejected before any request is made.
#[tokio::test]
async fn test_invalid_input_rejected() {
    let result = expander().expand("ftp://example.com").await;
    assert!(result.is_err());
}
