use fleetwatch_core::Mmsi;
use futures::{StreamExt, TryStreamExt};
use reqwest::{Client, Url};
use serde::Serialize;
use snafu::{OptionExt, ResultExt};
use tokio::io::AsyncRead;

use crate::{
    error::{
        Result,
        error::{FailedRequestSnafu, MissingCredentialSnafu, RequestSnafu},
    },
    settings::Config,
};

/// Covers the full coordinate space. Used when no narrower region is
/// configured.
const FULL_BOUNDING_BOX: [[f64; 2]; 2] = [[-90.0, -180.0], [90.0, 180.0]];

#[derive(Debug)]
pub struct AisStreamClient {
    api_key: String,
    api_address: Url,
    bounding_box: [[f64; 2]; 2],
    vessel_filter: Vec<String>,
    client: Client,
}

/// Subscription sent to the feed once per successful connect.
#[derive(Serialize)]
struct SubscribeRequest<'a> {
    #[serde(rename = "APIKey")]
    api_key: &'a str,
    #[serde(rename = "BoundingBoxes")]
    bounding_boxes: [[[f64; 2]; 2]; 1],
    #[serde(rename = "FiltersShipMMSI")]
    vessel_filter: &'a [String],
}

impl AisStreamClient {
    pub fn new(settings: &Config, api_address: Url, fleet: &[Mmsi]) -> Result<AisStreamClient> {
        let api_key = settings.api_key.clone().context(MissingCredentialSnafu)?;

        Ok(AisStreamClient {
            api_key,
            api_address,
            bounding_box: settings.bounding_box.unwrap_or(FULL_BOUNDING_BOX),
            vessel_filter: fleet.iter().map(|m| m.to_string()).collect(),
            client: Client::new(),
        })
    }

    /// Returns the ais source as a stream which will continuously receive
    /// data from the feed for the lifetime of the subscription.
    pub async fn streamer(&self) -> Result<impl AsyncRead> {
        let subscription = SubscribeRequest {
            api_key: &self.api_key,
            bounding_boxes: [self.bounding_box],
            vessel_filter: &self.vessel_filter,
        };

        let response = self
            .client
            .post(self.api_address.clone())
            .json(&subscription)
            .send()
            .await
            .context(RequestSnafu)?;

        let status = response.status();
        if !status.is_success() {
            return FailedRequestSnafu {
                url: self.api_address.to_string(),
                status,
                body: response.text().await.context(RequestSnafu)?,
            }
            .fail();
        }

        let stream = response
            .bytes_stream()
            .map(|result| result.map_err(|e| std::io::Error::other(format!("{e:?}"))))
            .into_async_read();

        let compat = tokio_util::compat::FuturesAsyncReadCompatExt::compat(stream);

        Ok(compat)
    }
}
