use serde::Deserialize;
use trendscope_types::TrendRecord;

/// Success envelope of both trends endpoints. A body without a `trends`
/// key decodes to an empty list.
#[derive(Debug, Default, Deserialize)]
pub struct TrendsResponse {
    #[serde(default)]
    pub trends: Vec<TrendRecord>,

    #[serde(default)]
    pub count: Option<usize>,
}

/// Failure envelope of the refresh endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
