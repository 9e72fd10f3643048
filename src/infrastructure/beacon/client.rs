//! # Beacon Client
//!
//! Implements `ChainProvider` against the standard Beacon Node REST API.
//! Every request is bounded by the client-wide timeout.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::types::{
    CommitteeData, Envelope, FinalityData, GenesisData, HeaderData, SignedBlock, ValidatorData,
};
use crate::domain::chain::{BlockInfo, Committee, FinalityInfo, HeadInfo, ValidatorInfo};
use crate::domain::traits::ChainProvider;
use crate::domain::types::ChainError;

pub struct BeaconClient {
    http: Client,
    base_url: String,
}

impl BeaconClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ChainError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChainError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ChainError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ChainError::Transport(e.to_string()))?;

        check_status(response.status())?;

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| ChainError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}

/// Nodes answer unknown or not-yet-reached slots with 404 or 400.
fn check_status(status: StatusCode) -> Result<(), ChainError> {
    if status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST {
        Err(ChainError::NotFound)
    } else if !status.is_success() {
        Err(ChainError::Status(status.as_u16()))
    } else {
        Ok(())
    }
}

#[async_trait]
impl ChainProvider for BeaconClient {
    async fn head(&self) -> Result<HeadInfo, ChainError> {
        let data: HeaderData = self.get("/eth/v1/beacon/headers/head").await?;
        Ok(data.into())
    }

    async fn finality(&self, state_id: &str) -> Result<FinalityInfo, ChainError> {
        let path = format!("/eth/v1/beacon/states/{state_id}/finality_checkpoints");
        let data: FinalityData = self.get(&path).await?;
        Ok(data.into())
    }

    async fn block(&self, slot: u64) -> Result<BlockInfo, ChainError> {
        let data: SignedBlock = self.get(&format!("/eth/v2/beacon/blocks/{slot}")).await?;
        BlockInfo::try_from(data)
    }

    async fn genesis_time(&self) -> Result<u64, ChainError> {
        let data: GenesisData = self.get("/eth/v1/beacon/genesis").await?;
        Ok(data.genesis_time)
    }

    async fn committees(&self, slot: u64) -> Result<Vec<Committee>, ChainError> {
        let path = format!("/eth/v1/beacon/states/{slot}/committees?slot={slot}");
        let data: Vec<CommitteeData> = self.get(&path).await?;
        Ok(data.into_iter().map(Committee::from).collect())
    }

    async fn validator(&self, index: u64) -> Result<ValidatorInfo, ChainError> {
        let path = format!("/eth/v1/beacon/states/head/validators/{index}");
        let data: ValidatorData = self.get(&path).await?;
        Ok(data.into())
    }
}
