use std::time::Duration;

use async_channel::Sender;
use chrono::Utc;
use fleetwatch_core::DataMessage;
use futures::StreamExt;
use snafu::ensure;
use tokio::{io::AsyncRead, time::Instant};
use tokio_util::codec::{FramedRead, LinesCodec, LinesCodecError};
use tracing::{Level, event, instrument};

use crate::{
    error::{
        Result,
        error::{InternalChannelClosedSnafu, StreamClosedSnafu, StreamStaleSnafu},
    },
    models::{AisMessage, AisMessageType, AisPosition, AisStatic, MessageType},
};

pub struct Consumer {
    commit_interval: Duration,
    watchdog_interval: Duration,
    stale_threshold: Duration,
}

impl Consumer {
    pub fn new(
        commit_interval: Duration,
        watchdog_interval: Duration,
        stale_threshold: Duration,
    ) -> Consumer {
        Consumer {
            commit_interval,
            watchdog_interval,
            stale_threshold,
        }
    }

    /// Drives a single subscription until the stream closes or the watchdog
    /// declares it stale. Returning drops `source`, which forcibly
    /// terminates the transport.
    pub async fn run(
        &self,
        source: impl AsyncRead + Unpin,
        sender: Sender<DataMessage>,
    ) -> Result<()> {
        let codec = LinesCodec::new_with_max_length(16_384);
        let mut framed_read = FramedRead::new(source, codec);

        // This vector is never deallocated and will match the size of the
        // highest amount of messages received during a commit interval.
        let mut buffer = Vec::new();

        let mut commit = tokio::time::interval(self.commit_interval);
        let mut watchdog = tokio::time::interval(self.watchdog_interval);

        // Stamped at open time so a cold connection is not declared stale
        // before the feed has had a chance to emit anything.
        let mut last_message_at = Instant::now();

        loop {
            tokio::select! {
                message = framed_read.next() => {
                    match message {
                        Some(message) => {
                            // Any frame is proof of liveness, parseable or not.
                            last_message_at = Instant::now();
                            buffer.push(message);
                        }
                        None => return StreamClosedSnafu.fail(),
                    }
                }
                _ = commit.tick() => {
                    if !buffer.is_empty() {
                        process_messages(buffer.drain(..), &sender).await?;
                    }
                }
                _ = watchdog.tick() => {
                    let idle = last_message_at.elapsed();
                    ensure!(idle <= self.stale_threshold, StreamStaleSnafu { idle });
                }
            }
        }
    }
}

#[instrument(skip(messages, sender), fields(app.num_messages))]
async fn process_messages<T>(messages: T, sender: &Sender<DataMessage>) -> Result<()>
where
    T: IntoIterator<Item = std::result::Result<String, LinesCodecError>>,
{
    let mut data_message = DataMessage::default();
    let mut num_messages: u64 = 0;
    let now = Utc::now();

    for message in messages {
        num_messages += 1;
        match message {
            Err(e) => event!(Level::ERROR, "failed to consume ais frame: {e:?}"),
            Ok(message) => match parse_message(&message) {
                Err(e) => event!(Level::ERROR, "failed to parse ais message: {e:?}"),
                Ok(None) => {}
                Ok(Some(AisMessage::Position(m))) => {
                    data_message.positions.push(m.into_new_position(now))
                }
                Ok(Some(AisMessage::Static(m))) => {
                    data_message.static_messages.push(m.into_new_static(now))
                }
            },
        }
    }

    // Can only fail if the channel is closed.
    sender
        .send(data_message)
        .await
        .map_err(|_| InternalChannelClosedSnafu.build())?;

    tracing::Span::current().record("app.num_messages", num_messages);

    Ok(())
}

fn parse_message(message: &str) -> std::result::Result<Option<AisMessage>, serde_json::Error> {
    let message_type: MessageType = serde_json::from_str(message)?;

    match message_type.message_type {
        AisMessageType::PositionReport => {
            let val: AisPosition = serde_json::from_str(message)?;
            Ok(Some(AisMessage::Position(val)))
        }
        AisMessageType::ShipStaticData => {
            let val: AisStatic = serde_json::from_str(message)?;
            Ok(Some(AisMessage::Static(val)))
        }
        AisMessageType::Unsupported => Ok(None),
    }
}
