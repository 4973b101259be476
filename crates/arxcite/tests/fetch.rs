//! End-to-end fetch tests against a local mock of the arXiv API.

use arxcite::{render, ArxivClient, CiteError, Style};
use mockito::{Matcher, Server};
use tracing_test::traced_test;

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <link href="http://arxiv.org/api/query?search_query%3D%26id_list%3D1706.03762" rel="self" type="application/atom+xml"/>
  <title type="html">ArXiv Query: search_query=&amp;id_list=1706.03762</title>
  <entry>
    <id>http://arxiv.org/abs/1706.03762v7</id>
    <updated>2023-08-02T17:54:37Z</updated>
    <published>2017-06-12T17:57:40Z</published>
    <title>Attention Is All You Need</title>
    <summary>The dominant sequence transduction models...</summary>
    <author><name>Ashish Vaswani</name></author>
    <author><name>Noam Shazeer</name></author>
    <link href="http://arxiv.org/abs/1706.03762v7" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/1706.03762v7" rel="related" type="application/pdf"/>
  </entry>
</feed>"#;

#[traced_test]
#[tokio::test]
async fn test_fetch_citation_from_mock_api() -> anyhow::Result<()> {
  let mut server = Server::new_async().await;
  let mock = server
    .mock("GET", "/api/query")
    .match_query(Matcher::UrlEncoded("id_list".to_string(), "1706.03762".to_string()))
    .with_status(200)
    .with_header("content-type", "application/atom+xml")
    .with_body(FEED)
    .expect(1)
    .create_async()
    .await;

  let client = ArxivClient::with_base_url(server.url());
  let citation = client.fetch_citation("1706.03762").await?;

  assert_eq!(citation.authors, vec!["Ashish Vaswani", "Noam Shazeer"]);
  assert_eq!(citation.title, "Attention Is All You Need");
  assert_eq!(citation.year, "2017");
  assert_eq!(citation.link, "https://arxiv.org/abs/1706.03762");
  assert_eq!(citation.key(), "VS17");

  let entry = render(&citation, "1706.03762", Style::Spires);
  assert!(entry.contains("\teprint = {1706.03762},"));
  assert!(entry.contains("\tarchivePrefix = \"arXiv\""));

  mock.assert_async().await;
  Ok(())
}

#[tokio::test]
async fn test_fetch_citation_reports_url_on_server_error() {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("GET", "/api/query")
    .match_query(Matcher::Any)
    .with_status(500)
    .create_async()
    .await;

  let client = ArxivClient::with_base_url(server.url());
  let err = client.fetch_citation("1706.03762").await.unwrap_err();

  match err {
    CiteError::Network { url, .. } => {
      assert_eq!(url, format!("{}/api/query?id_list=1706.03762", server.url()));
    },
    other => panic!("expected a network error, got: {other}"),
  }
}

#[tokio::test]
async fn test_fetch_citation_empty_feed_is_missing_entry() {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("GET", "/api/query")
    .match_query(Matcher::Any)
    .with_status(200)
    .with_body(r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>ArXiv Query</title></feed>"#)
    .create_async()
    .await;

  let client = ArxivClient::with_base_url(server.url());
  let err = client.fetch_citation("0000.00000").await.unwrap_err();
  assert!(matches!(err, CiteError::MissingEntry));
}

#[tokio::test]
async fn test_fetch_citation_rejects_non_utf8_body() {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("GET", "/api/query")
    .match_query(Matcher::Any)
    .with_status(200)
    .with_body(&[0xff, 0xfe, 0x3c, 0x66][..])
    .create_async()
    .await;

  let client = ArxivClient::with_base_url(server.url());
  let err = client.fetch_citation("1706.03762").await.unwrap_err();
  assert!(matches!(err, CiteError::Decode(_)));
}

// Hits the real arXiv API; kept out of the default run so tests pass
// offline. Run with `cargo test -- --ignored` when online.
#[ignore]
#[tokio::test]
async fn test_fetch_citation_live() {
  let citation = ArxivClient::new().fetch_citation("1312.7188").await.unwrap();
  assert!(!citation.title.is_empty());
  assert!(!citation.authors.is_empty());
  assert_eq!(citation.year, "2013");
  assert_eq!(citation.link, "https://arxiv.org/abs/1312.7188");
}
