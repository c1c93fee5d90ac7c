use crate::core::BubbleError;

/// Send a request and fail with `BubbleError::Status` on any non-2xx response.
pub(crate) async fn send_checked(
    req: reqwest::RequestBuilder,
    url: &url::Url,
) -> Result<reqwest::Response, BubbleError> {
    let resp = req.send().await?;
    if !resp.status().is_success() {
        return Err(BubbleError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }
    Ok(resp)
}

/// Read the response body as text, tracing its size under the given endpoint label.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    endpoint: &str,
    symbol: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;
    tracing::debug!(endpoint, symbol, bytes = text.len(), "upstream body received");
    Ok(text)
}
