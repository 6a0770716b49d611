use crate::error::CliResult;
use airdrop_claim_sdk::ClaimBatch;
use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use url::Url;

/// Allocation summary returned by the eligibility API for one address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponse {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub total_unclaimed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    NotEligible,
    AlreadyClaimed,
}

impl EligibilityResponse {
    pub fn classify(&self) -> Eligibility {
        if self.total == 0.0 {
            Eligibility::NotEligible
        } else if self.total_unclaimed == 0.0 {
            Eligibility::AlreadyClaimed
        } else {
            Eligibility::Eligible
        }
    }
}

pub struct EligibilityChecker {
    http: reqwest::Client,
    endpoint: Url,
}

impl EligibilityChecker {
    pub fn new(endpoint: &str) -> CliResult<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: Url::parse(endpoint)?,
        })
    }

    pub async fn check(&self, address: &Pubkey) -> CliResult<EligibilityResponse> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&[address.to_string()])
            .send()
            .await?
            .error_for_status()?
            .json::<EligibilityResponse>()
            .await?;

        debug!(%address, ?response, "Eligibility response");
        Ok(response)
    }

    /// Drops ineligible and already-claimed identities from the batch.
    /// Addresses whose lookup fails are kept.
    pub async fn filter_batch(&self, batch: &mut ClaimBatch) -> usize {
        let mut dropped = HashSet::new();

        for address in batch.claimant_addresses() {
            match self.check(&address).await {
                Ok(response) => match response.classify() {
                    Eligibility::Eligible => {
                        info!(%address, unclaimed = response.total_unclaimed, "Wallet eligible");
                    }
                    Eligibility::NotEligible => {
                        info!(%address, "Wallet not eligible, removing from batch");
                        dropped.insert(address);
                    }
                    Eligibility::AlreadyClaimed => {
                        info!(%address, "Wallet already claimed, removing from batch");
                        dropped.insert(address);
                    }
                },
                Err(e) => {
                    warn!(%address, error = %e, "Eligibility check failed, keeping wallet");
                }
            }
        }

        batch.retain_claimants(|address| !dropped.contains(address));
        dropped.len()
    }
}
