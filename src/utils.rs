use anyhow::Result;
use sui_sdk::types::base_types::SuiAddress;
use sui_sdk::wallet_context::WalletContext;
use sui_sdk::SuiClient;
use sui_sdk::SuiClientBuilder;

use crate::constants::{NETWORKS, RPC_URL_ENV, SUI_DECIMALS};

pub fn shorten_id(id: &str) -> String {
    if id.len() > 16 && id.is_char_boundary(10) && id.is_char_boundary(id.len() - 8) {
        // 0x598928d17a9a...4d73ffbd style: first 10 chars, last 8 chars
        format!("{}...{}", &id[..10], &id[id.len() - 8..])
    } else {
        id.to_string()
    }
}

pub fn format_sui_balance(amount: u128) -> String {
    format!("{:.2} SUI", amount as f64 / SUI_DECIMALS)
}

/// Explorer link for a submitted transaction, for user-facing hyperlinking only.
pub fn explorer_tx_url(explorer_host: &str, digest: &str, network: &str) -> String {
    format!("{}/txblock/{}?network={}", explorer_host, digest, network)
}

#[derive(Clone)]
pub struct NetworkState {
    pub current_network: usize,
    pub custom_rpc: Option<String>,
}

impl NetworkState {
    pub fn new(custom_rpc: Option<String>) -> Self {
        let custom_rpc = std::env::var(RPC_URL_ENV).ok().or(custom_rpc);
        NetworkState {
            current_network: 1, // Default to testnet
            custom_rpc,
        }
    }

    pub fn get_current_network(&self) -> &str {
        NETWORKS[self.current_network].0
    }

    pub fn get_current_rpc(&self) -> &str {
        match &self.custom_rpc {
            Some(url) => url,
            None => NETWORKS[self.current_network].1,
        }
    }
}

/// Build an RPC client and resolve the active address from the local Sui
/// client config. A missing or broken config is the "not connected" state,
/// handled by the caller.
pub async fn setup_for_read(network_state: &NetworkState) -> Result<(SuiClient, SuiAddress)> {
    let sui = SuiClientBuilder::default()
        .build(network_state.get_current_rpc())
        .await?;

    let config_path = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Failed to get home directory"))?
        .join(".sui")
        .join("sui_config")
        .join("client.yaml");

    let mut context = WalletContext::new(&config_path)?;
    let active_address = context.active_address()?;

    Ok((sui, active_address))
}
