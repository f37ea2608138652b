//! Integration tests against the live bible-api.com service.

// Ensure this test only runs when integration tests are explicitly enabled
#![cfg(feature = "integration_test")]
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::time::Instant;

use verselink::config::Config;
use verselink::services::scripture::VerseFetcher;
use verselink::services::BibleApiClient;

fn setup_client() -> BibleApiClient {
    let config = Config::load().unwrap_or_default();
    BibleApiClient::new(&config)
}

#[tokio::test]
async fn test_fetch_john_3_16() {
    let client = setup_client();
    let start = Instant::now();

    match client.fetch_verse("JHN", "3:16").await {
        Ok(verse) => {
            println!("Fetched John 3:16 in {:.2?}: {}", start.elapsed(), verse.text.trim());
            assert_eq!(verse.chapter, 3);
            assert_eq!(verse.verse, 16);
            assert!(verse.text.contains("God"));
        }
        Err(e) => panic!("fetch_verse failed: {e}"),
    }
}

#[tokio::test]
async fn test_fetch_numbered_book_range() {
    let client = setup_client();

    match client.fetch_verse("1CO", "13:4-7").await {
        Ok(verse) => {
            assert_eq!(verse.chapter, 13);
            assert_eq!(verse.verse, 4);
        }
        Err(e) => panic!("fetch_verse failed for 1CO 13:4: {e}"),
    }
}
