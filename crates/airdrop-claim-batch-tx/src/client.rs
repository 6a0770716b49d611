use crate::{GatewayConfig, SubmissionError, SubmissionGateway, SubmissionResult};
use async_trait::async_trait;
use backoff::future::retry;
use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    nonblocking::rpc_client::RpcClient,
    rpc_config::RpcSendTransactionConfig,
};
use solana_sdk::{hash::Hash, signature::Signature, transaction::Transaction};
use std::sync::Arc;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

/// [`SubmissionGateway`] backed by a JSON-RPC node
pub struct RpcSubmissionGateway {
    rpc_client: Arc<RpcClient>,
    config: GatewayConfig,
}

impl RpcSubmissionGateway {
    /// Create a new gateway with default configuration
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self::with_config(rpc_client, GatewayConfig::default())
    }

    /// Create a new gateway with custom configuration
    pub fn with_config(rpc_client: Arc<RpcClient>, config: GatewayConfig) -> Self {
        Self { rpc_client, config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Broadcast with retry on transport errors; does not wait for confirmation
    async fn broadcast_with_retry(&self, transaction: &Transaction) -> SubmissionResult<Signature> {
        let rpc_client = &self.rpc_client;
        let max_retries = self.config.max_retries;
        let send_config = RpcSendTransactionConfig {
            skip_preflight: self.config.skip_preflight,
            preflight_commitment: Some(self.config.confirmation_commitment.commitment),
            // resend is handled here, not by the node
            max_retries: Some(0),
            ..Default::default()
        };

        let mut attempt = 0usize;
        retry(self.config.retry_backoff.clone(), || {
            attempt += 1;
            let attempt = attempt;
            let send_config = send_config.clone();

            async move {
                match rpc_client
                    .send_transaction_with_config(transaction, send_config)
                    .await
                {
                    Ok(signature) => {
                        debug!("Broadcast {} on attempt {}", signature, attempt);
                        Ok(signature)
                    }
                    Err(e) => {
                        warn!("Broadcast attempt {} failed: {}", attempt, e);
                        Err(classify_send_error(e, attempt, max_retries))
                    }
                }
            }
        })
        .await
    }

    /// Poll the signature until it reaches the configured commitment or times out
    async fn await_confirmation(&self, signature: Signature) -> SubmissionResult<Signature> {
        let deadline = Instant::now() + self.config.confirmation_timeout;

        loop {
            match self
                .rpc_client
                .get_signature_status_with_commitment(
                    &signature,
                    self.config.confirmation_commitment,
                )
                .await
            {
                Ok(Some(Ok(()))) => {
                    info!("Transaction {} confirmed", signature);
                    return Ok(signature);
                }
                Ok(Some(Err(e))) => {
                    return Err(SubmissionError::Rejected {
                        reason: e.to_string(),
                    });
                }
                Ok(None) => {}
                Err(e) => warn!("Status poll for {} failed: {}", signature, e),
            }

            if Instant::now() >= deadline {
                warn!(
                    "Transaction {} not confirmed within {:?}",
                    signature, self.config.confirmation_timeout
                );
                return Err(SubmissionError::Unconfirmed { signature });
            }

            sleep(self.config.poll_interval).await;
        }
    }
}

#[async_trait]
impl SubmissionGateway for RpcSubmissionGateway {
    async fn latest_blockhash(&self) -> SubmissionResult<Hash> {
        Ok(self.rpc_client.get_latest_blockhash().await?)
    }

    async fn submit(&self, transaction: &Transaction) -> SubmissionResult<Signature> {
        let signature = self.broadcast_with_retry(transaction).await?;
        self.await_confirmation(signature).await
    }
}

fn is_transient(err: &ClientError) -> bool {
    matches!(
        err.kind(),
        ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_)
    )
}

fn classify_send_error(
    err: ClientError,
    attempt: usize,
    max_retries: usize,
) -> backoff::Error<SubmissionError> {
    if let Some(tx_err) = err.get_transaction_error() {
        return backoff::Error::Permanent(SubmissionError::Rejected {
            reason: tx_err.to_string(),
        });
    }

    if is_transient(&err) {
        let exhausted = SubmissionError::RetriesExhausted {
            retries: attempt,
            last_error: err.to_string(),
        };
        return if attempt > max_retries {
            backoff::Error::Permanent(exhausted)
        } else {
            backoff::Error::Transient {
                err: exhausted,
                retry_after: None,
            }
        };
    }

    backoff::Error::Permanent(SubmissionError::RpcClient(err))
}
