use std::time::Duration;

use reqwest::StatusCode;
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("AIS stream closed unexpectedly"))]
    StreamClosed {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("AIS stream produced no frames for {idle:?}"))]
    StreamStale {
        #[snafu(implicit)]
        location: Location,
        idle: Duration,
    },
    #[snafu(display("Internal data channel closed unexpectedly"))]
    InternalChannelClosed {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Request to the AIS endpoint failed"))]
    Request {
        #[snafu(implicit)]
        location: Location,
        source: reqwest::Error,
    },
    #[snafu(display("Subscription rejected, status: '{status}', url: '{url}', body: '{body}'"))]
    FailedRequest {
        #[snafu(implicit)]
        location: Location,
        url: String,
        status: StatusCode,
        body: String,
    },
    #[snafu(display("No AIS credential is configured"))]
    MissingCredential {
        #[snafu(implicit)]
        location: Location,
    },
}
