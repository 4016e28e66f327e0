use crate::error::DatagenError;
use crate::geojson::{parse_feature_collection, FeatureCollection};

/// Single unauthenticated GET of the county FeatureCollection. No retries.
pub async fn fetch_feature_collection(url: &str) -> Result<FeatureCollection, DatagenError> {
    let fetch_error = |source| DatagenError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(fetch_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(DatagenError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(fetch_error)?;
    tracing::debug!(bytes = body.len(), "downloaded feature collection");

    parse_feature_collection(&body)
}
