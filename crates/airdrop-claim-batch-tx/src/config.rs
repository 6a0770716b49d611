use backoff::ExponentialBackoff;
use solana_sdk::commitment_config::CommitmentConfig;
use std::time::Duration;

/// Configuration for broadcasting and confirming claim transactions
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Maximum number of broadcast attempts on transient transport errors
    pub max_retries: usize,

    /// Backoff strategy between broadcast attempts
    pub retry_backoff: ExponentialBackoff,

    /// Commitment level a transaction must reach to count as confirmed
    pub confirmation_commitment: CommitmentConfig,

    /// Whether to skip preflight checks (simulation before sending)
    pub skip_preflight: bool,

    /// Delay between signature status polls
    pub poll_interval: Duration,

    /// How long to wait for confirmation before reporting the outcome as unknown
    pub confirmation_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            retry_backoff: ExponentialBackoff {
                initial_interval: Duration::from_millis(500),
                max_interval: Duration::from_secs(10),
                max_elapsed_time: Some(Duration::from_secs(60)),
                multiplier: 2.0,
                ..Default::default()
            },
            confirmation_commitment: CommitmentConfig::confirmed(),
            skip_preflight: false,
            poll_interval: Duration::from_millis(500),
            // roughly the lifetime of a recent blockhash
            confirmation_timeout: Duration::from_secs(90),
        }
    }
}
