// crates/pulse-terminal/src/gateway.rs

//! Order submission.
//!
//! The UI thread never waits on HTTP. It pushes [`Submission`]s into an
//! unbounded channel; [`OrderGateway::run`] posts each one and sends a
//! [`SubmissionResult`] back to the app.

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use pulse_core::OrderRequest;

/// Identifier the app uses to match results with pending orders.
pub type SubmissionId = u64;

#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub request: OrderRequest,
}

#[derive(Debug)]
pub struct SubmissionResult {
    pub id: SubmissionId,
    pub outcome: Result<(), GatewayError>,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The API answered with something other than 200.
    #[error("order API returned HTTP {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub struct OrderGateway {
    http: Client,
    base_url: Option<String>,
    tx: UnboundedSender<SubmissionResult>,
}

impl OrderGateway {
    /// `base_url = None` acknowledges every order locally.
    pub fn new(base_url: Option<String>, tx: UnboundedSender<SubmissionResult>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            tx,
        }
    }

    pub fn endpoint(&self, request: &OrderRequest) -> Option<String> {
        self.base_url.as_deref().map(|base| {
            format!("{}/{}", base.trim_end_matches('/'), request.endpoint_path())
        })
    }

    pub async fn submit(&self, request: &OrderRequest) -> Result<(), GatewayError> {
        let Some(url) = self.endpoint(request) else {
            info!(symbol = %request.symbol, qty = request.qty, "dry run: order acknowledged locally");
            return Ok(());
        };

        debug!(%url, body = ?serde_json::to_string(request).ok(), "posting order");
        let resp = self.http.post(&url).json(request).send().await?;

        if resp.status() != StatusCode::OK {
            return Err(GatewayError::Status(resp.status().as_u16()));
        }
        Ok(())
    }

    pub async fn run(self, mut rx: UnboundedReceiver<Submission>) {
        while let Some(submission) = rx.recv().await {
            let outcome = self.submit(&submission.request).await;
            match &outcome {
                Ok(()) => info!(id = submission.id, "order accepted"),
                Err(e) => warn!(id = submission.id, "order failed: {}", e),
            }

            let result = SubmissionResult {
                id: submission.id,
                outcome,
            };
            if self.tx.send(result).is_err() {
                // App is gone.
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::{Preset, Side, Stock};
    use rust_decimal::Decimal;
    use tokio::sync::mpsc;

    fn request() -> OrderRequest {
        let stock = Stock {
            id: "aapl".into(),
            symbol: "AAPL".into(),
            last_price: Decimal::from(187),
        };
        OrderRequest::from_preset(&stock, &Preset::new(Side::Sell, 5, Decimal::from(190)), "1")
    }

    #[test]
    fn endpoint_joins_base_and_action() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let gateway = OrderGateway::new(Some("http://localhost:4000/".into()), tx);
        assert_eq!(
            gateway.endpoint(&request()).as_deref(),
            Some("http://localhost:4000/stock/sell")
        );
    }

    #[tokio::test]
    async fn dry_run_acknowledges_every_submission() {
        let (result_tx, mut result_rx) = mpsc::unbounded_channel();
        let (submit_tx, submit_rx) = mpsc::unbounded_channel();
        let gateway = OrderGateway::new(None, result_tx);

        submit_tx.send(Submission { id: 7, request: request() }).unwrap();
        drop(submit_tx);
        gateway.run(submit_rx).await;

        let result = result_rx.recv().await.unwrap();
        assert_eq!(result.id, 7);
        assert!(result.outcome.is_ok());
    }
}
