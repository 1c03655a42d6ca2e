//! Resolves what a FundMe deployment needs on a given network: the price feed
//! account, the init arguments and whether the contract source is published
//! to the block explorer afterwards.
use std::collections::HashMap;

use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::serde_json;
use near_sdk::AccountId;
use thiserror::Error;

/// Networks where the price feed is a locally deployed mock.
pub const DEVELOPMENT_NETWORKS: [&str; 2] = ["localnet", "sandbox"];
pub const DEFAULT_BLOCK_CONFIRMATIONS: u32 = 1;
pub const MOCK_PRICE_FEED_NAME: &str = "mock-v3-aggregator";

#[derive(Debug, Error, PartialEq)]
pub enum DeployError {
    #[error("unknown network {0}")]
    UnknownNetwork(String),
    #[error("no price feed configured for network {0}")]
    MissingPriceFeed(String),
    #[error("development network {0} needs a deployed mock price feed")]
    MissingMock(String),
    #[error("invalid account id {0}")]
    InvalidAccountId(String),
    #[error("invalid network table: {0}")]
    InvalidTable(String),
    #[error("cannot encode init arguments: {0}")]
    InvalidInitArgs(String),
}

pub type Result<T> = std::result::Result<T, DeployError>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct NetworkConfig {
    pub name: String,
    #[serde(default)]
    pub price_feed: Option<AccountId>,
    #[serde(default)]
    pub block_confirmations: Option<u32>,
}

/// Per-network settings, keyed by network name.
#[derive(Clone, Debug)]
pub struct NetworkTable {
    networks: HashMap<String, NetworkConfig>,
}

impl Default for NetworkTable {
    fn default() -> Self {
        Self::new(vec![
            NetworkConfig {
                name: "mainnet".to_string(),
                price_feed: Some("priceoracle.near".to_string()),
                block_confirmations: Some(6),
            },
            NetworkConfig {
                name: "testnet".to_string(),
                price_feed: Some("priceoracle.testnet".to_string()),
                block_confirmations: Some(6),
            },
        ])
    }
}

impl NetworkTable {
    pub fn new(networks: Vec<NetworkConfig>) -> Self {
        Self {
            networks: networks.into_iter().map(|n| (n.name.clone(), n)).collect(),
        }
    }

    /// Parse a JSON array of `NetworkConfig`.
    pub fn from_json(json: &str) -> Result<Self> {
        let networks: Vec<NetworkConfig> =
            serde_json::from_str(json).map_err(|e| DeployError::InvalidTable(e.to_string()))?;
        for network in networks.iter() {
            if let Some(price_feed) = &network.price_feed {
                check_account_id(price_feed)?;
            }
        }
        Ok(Self::new(networks))
    }

    pub fn get(&self, network: &str) -> Option<&NetworkConfig> {
        self.networks.get(network)
    }
}

pub fn is_development(network: &str) -> bool {
    DEVELOPMENT_NETWORKS.contains(&network)
}

fn check_account_id(account_id: &str) -> Result<AccountId> {
    if near_sdk::env::is_valid_account_id(account_id.as_bytes()) {
        Ok(account_id.to_string())
    } else {
        Err(DeployError::InvalidAccountId(account_id.to_string()))
    }
}

/// The mock on development networks, the configured feed elsewhere.
pub fn resolve_price_feed(
    table: &NetworkTable,
    network: &str,
    mock: Option<&AccountId>,
) -> Result<AccountId> {
    if is_development(network) {
        let mock = mock.ok_or_else(|| DeployError::MissingMock(network.to_string()))?;
        return check_account_id(mock);
    }
    table
        .get(network)
        .ok_or_else(|| DeployError::UnknownNetwork(network.to_string()))?
        .price_feed
        .clone()
        .ok_or_else(|| DeployError::MissingPriceFeed(network.to_string()))
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct InitArgs {
    pub price_feed: AccountId,
}

#[derive(Debug, PartialEq)]
pub struct DeployPlan {
    pub network: String,
    /// Signs the deployment. The contract owner is the predecessor of `new`,
    /// so the deployer must send the `new` call itself to own the contract;
    /// a deploy-and-init batch signed by the contract account makes the
    /// contract its own owner.
    pub deployer: AccountId,
    pub price_feed: AccountId,
    pub block_confirmations: u32,
    /// Publish the source to the explorer once deployed.
    pub verify: bool,
}

impl DeployPlan {
    pub fn resolve(
        table: &NetworkTable,
        network: &str,
        deployer: &str,
        mock: Option<&AccountId>,
        explorer_api_key: Option<&str>,
    ) -> Result<Self> {
        let deployer = check_account_id(deployer)?;
        let price_feed = resolve_price_feed(table, network, mock)?;
        let block_confirmations = table
            .get(network)
            .and_then(|n| n.block_confirmations)
            .unwrap_or(DEFAULT_BLOCK_CONFIRMATIONS);
        let verify = !is_development(network)
            && explorer_api_key.map_or(false, |key| !key.trim().is_empty());
        Ok(Self {
            network: network.to_string(),
            deployer,
            price_feed,
            block_confirmations,
            verify,
        })
    }

    /// Arguments of the `new` call, as JSON.
    pub fn init_args(&self) -> Result<String> {
        serde_json::to_string(&InitArgs {
            price_feed: self.price_feed.clone(),
        })
        .map_err(|e| DeployError::InvalidInitArgs(e.to_string()))
    }
}
