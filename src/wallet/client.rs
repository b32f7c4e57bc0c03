use std::sync::Arc;

use sui_sdk::{
    rpc_types::{SuiTransactionBlockResponseQuery, TransactionFilter},
    types::base_types::SuiAddress,
    SuiClient,
};

/// Connected wallet session: the RPC client plus the active address from the
/// local Sui config. Both reads here are advisory display data and fail soft.
#[derive(Clone)]
pub struct Wallet {
    pub client: Arc<SuiClient>,
    pub address: SuiAddress,
}

impl Wallet {
    pub fn new(client: Arc<SuiClient>, address: SuiAddress) -> Self {
        Wallet { client, address }
    }

    pub fn active_address(&self) -> SuiAddress {
        self.address
    }

    /// Total SUI balance in MIST; None when the read fails.
    pub async fn get_sui_balance(&self, address: SuiAddress) -> Option<u128> {
        self.client
            .coin_read_api()
            .get_balance(address, None)
            .await
            .ok()
            .map(|balance| balance.total_balance)
    }

    /// Digests of the most recent transactions sent by the address, newest
    /// first; empty when the read fails.
    pub async fn get_recent_transactions(&self, address: SuiAddress, limit: usize) -> Vec<String> {
        let query =
            SuiTransactionBlockResponseQuery::new_with_filter(TransactionFilter::FromAddress(
                address,
            ));

        match self
            .client
            .read_api()
            .query_transaction_blocks(query, None, Some(limit), true)
            .await
        {
            Ok(page) => page
                .data
                .into_iter()
                .map(|tx| tx.digest.base58_encode())
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}
