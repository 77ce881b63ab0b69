use ds_core::{Error, FeedSource, Result};

const USER_AGENT: &str = "RSS Reader App/1.0";

/// Fetch the raw feed document for one source.
pub async fn fetch_raw(client: &reqwest::Client, source: FeedSource) -> Result<String> {
    let response = client
        .get(source.feed_url())
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Feed(format!(
            "HTTP {} when fetching {}",
            status,
            source.feed_url()
        )));
    }

    Ok(response.text().await?)
}

/// Fetch and normalize one source, degrading to an empty list on failure so
/// one broken source never takes down the aggregate view.
pub async fn fetch_articles(
    client: &reqwest::Client,
    source: FeedSource,
) -> Vec<ds_core::Article> {
    match fetch_raw(client, source).await {
        Ok(xml) => ds_feed::normalize_feed(&xml, source),
        Err(e) => {
            tracing::warn!("failed to fetch {} feed: {}", source, e);
            Vec::new()
        }
    }
}
