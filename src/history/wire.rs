use serde::Deserialize;

/// Envelope shared by the intraday and end-of-day aggregates endpoints.
#[derive(Deserialize)]
pub(crate) struct AggsEnvelope {
    #[serde(default)]
    pub(crate) status: Option<String>,
    #[serde(default)]
    pub(crate) results: Option<Vec<AggBar>>,
    #[serde(default)]
    pub(crate) next_url: Option<String>,
    #[serde(default)]
    pub(crate) error: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct AggBar {
    /// Bar start, epoch milliseconds.
    #[serde(default)]
    pub(crate) t: Option<i64>,
    /// Close.
    #[serde(default)]
    pub(crate) c: Option<f64>,
}
