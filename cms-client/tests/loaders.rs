/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Loader behaviour against a throwaway HTTP listener.

use std::sync::{Arc, Mutex};

use dbl_cms_client::dbl_cms_types::Block;
use dbl_cms_client::{CmsClient, CmsConfig, FallbackReason, Origin};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve `body` with `status` to every connection, recording request lines.
async fn serve(status: &'static str, body: String) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
            }
            let head = String::from_utf8_lossy(&buf).to_string();
            seen.lock()
                .unwrap()
                .push(head.lines().next().unwrap_or_default().to_string());

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{addr}"), requests)
}

fn client(base: &str) -> CmsClient {
    let mut config = CmsConfig::new(base);
    config.media_url = "https://media.example.com".to_string();
    CmsClient::new(config).unwrap()
}

const HOME_PAGE: &str = r#"{
    "data": {
        "id": 1,
        "documentId": "home",
        "blocks": [
            {
                "__component": "layout.hero-section",
                "id": 3,
                "heading": "Modernize",
                "subHeading": "with DBL ISTS",
                "image": {"id": 9, "url": "/uploads/hero.jpg", "alternativeText": null},
                "link": {"id": 1, "text": "Contact", "url": "/contact", "isExternal": false}
            },
            {"__component": "layout.feature-section", "id": 4, "title": "Benefits", "feature": []}
        ]
    },
    "meta": {}
}"#;

#[tokio::test]
async fn non_2xx_returns_the_fallback_shape() {
    let (base, _) = serve("500 Internal Server Error", r#"{"error":"boom"}"#.to_string()).await;
    let loaded = client(&base).home_page().await;

    assert!(loaded.data.blocks.is_empty());
    match loaded.origin {
        Origin::Fallback(FallbackReason::Error(message)) => assert!(message.contains("500")),
        other => panic!("expected error fallback, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_returns_the_fallback_shape() {
    let (base, _) = serve("200 OK", "<html>not json</html>".to_string()).await;
    let loaded = client(&base).global_data().await;

    assert!(loaded.is_fallback());
    assert_eq!(loaded.data.footer().logo_text.text, "DBL ISTS Inc.");
}

#[tokio::test]
async fn unreachable_api_returns_the_fallback_shape() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let loaded = client(&base).portfolio_items().await;
    assert!(loaded.is_fallback());
    assert!(loaded.data.is_empty());
}

#[tokio::test]
async fn page_blocks_are_parsed_and_media_resolved() {
    let (base, requests) = serve("200 OK", HOME_PAGE.to_string()).await;
    let loaded = client(&base).home_page().await;

    assert_eq!(loaded.origin, Origin::Network);
    let ids: Vec<_> = loaded.data.blocks.iter().map(Block::id).collect();
    assert_eq!(ids, vec![Some(3), Some(4)]);
    match &loaded.data.blocks[0] {
        Block::HeroSection(hero) => {
            let image = hero.image.as_ref().unwrap();
            assert_eq!(image.url, "https://media.example.com/uploads/hero.jpg");
        }
        other => panic!("expected hero, got {other:?}"),
    }

    let requests = requests.lock().unwrap();
    assert!(requests[0].starts_with("GET /api/home-page?populate%5Bblocks%5D%5Bon%5D"));
}

#[tokio::test]
async fn responses_are_cached_until_the_tag_is_revalidated() {
    let (base, requests) = serve("200 OK", HOME_PAGE.to_string()).await;
    let client = client(&base);

    assert_eq!(client.home_page().await.origin, Origin::Network);
    assert_eq!(client.home_page().await.origin, Origin::Cache);
    assert_eq!(requests.lock().unwrap().len(), 1);

    assert_eq!(client.revalidate_tag("strapi-data").unwrap(), 1);
    assert_eq!(client.home_page().await.origin, Origin::Network);
    assert_eq!(requests.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn portfolio_query_sorts_newest_first() {
    let (base, requests) = serve("200 OK", r#"{"data": [], "meta": {}}"#.to_string()).await;
    let loaded = client(&base).portfolio_items().await;

    assert_eq!(loaded.origin, Origin::Network);
    let requests = requests.lock().unwrap();
    assert!(requests[0].contains("/api/portfolios?sort[0]=date%3Adesc&populate[image][fields][0]=url"));
}

#[tokio::test]
async fn item_ids_cannot_leave_their_path_segment() {
    let (base, requests) = serve("200 OK", r#"{"data": {"id": 1}, "meta": {}}"#.to_string()).await;
    let client = client(&base);

    for id in ["../global", "1?populate=secret&x=", "1?x=0", "1?x=1", "1/../../global"] {
        let loaded = client.portfolio_item(id).await;
        match loaded.origin {
            Origin::Fallback(FallbackReason::Error(message)) => {
                assert!(message.contains("Invalid content id"), "{message}")
            }
            other => panic!("{id:?} should fall back, got {other:?}"),
        }
    }
    assert!(requests.lock().unwrap().is_empty());
    assert_eq!(client.revalidate_tag("strapi-data").unwrap(), 0);

    assert_eq!(client.portfolio_item("1").await.origin, Origin::Network);
    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("GET /api/portfolios/1?populate[image]"));
}
