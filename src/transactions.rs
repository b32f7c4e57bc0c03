use anyhow::{anyhow, Result};
use shared_crypto::intent::Intent;
use std::str::FromStr;
use std::sync::Arc;
use sui_keys::keystore::{AccountKeystore, FileBasedKeystore};
use sui_sdk::{
    rpc_types::{
        SuiObjectRef, SuiTransactionBlockEffectsAPI, SuiTransactionBlockResponse,
        SuiTransactionBlockResponseOptions,
    },
    types::{
        base_types::{ObjectID, SuiAddress},
        programmable_transaction_builder::ProgrammableTransactionBuilder,
        transaction::{Transaction, TransactionData},
        Identifier, TypeTag,
    },
    SuiClient,
};
use sui_types::{
    quorum_driver_types::ExecuteTransactionRequestType,
    transaction::{Argument, CallArg, Command},
};

use crate::app::form::MintRequest;
use crate::app::mint::MintSigner;
use crate::constants::GAS_BUDGET;

/// Gas configuration for transactions
pub struct GasConfig {
    pub budget: u64,
    pub price: Option<u64>,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            budget: GAS_BUDGET,
            price: None,
        }
    }
}

/// Handles transaction signing and execution
pub struct TransactionExecutor {
    sui_client: Arc<SuiClient>,
    sender: SuiAddress,
}

impl TransactionExecutor {
    pub fn new(sui_client: Arc<SuiClient>, sender: SuiAddress) -> Self {
        Self { sui_client, sender }
    }

    /// Get a gas coin for transaction
    async fn get_gas_coin(&self) -> Result<SuiObjectRef> {
        let coins = self
            .sui_client
            .coin_read_api()
            .get_coins(self.sender, None, None, None)
            .await?;

        coins
            .data
            .into_iter()
            .next()
            .map(|coin| SuiObjectRef {
                object_id: coin.coin_object_id,
                version: coin.version,
                digest: coin.digest,
            })
            .ok_or_else(|| anyhow!("No available coins found"))
    }

    /// Build a transaction from a programmable transaction builder
    async fn build_transaction(
        &self,
        ptb: ProgrammableTransactionBuilder,
        gas_coin: SuiObjectRef,
        gas_config: GasConfig,
    ) -> Result<TransactionData> {
        let builder = ptb.finish();

        let gas_price = match gas_config.price {
            Some(price) => price,
            None => self.sui_client.read_api().get_reference_gas_price().await?,
        };

        let tx_data = TransactionData::new_programmable(
            self.sender,
            vec![(gas_coin.object_id, gas_coin.version, gas_coin.digest)],
            builder,
            gas_config.budget,
            gas_price,
        );

        Ok(tx_data)
    }

    /// Sign with the local keystore and execute, waiting for local execution
    async fn sign_and_execute(&self, tx_data: TransactionData) -> Result<SuiTransactionBlockResponse> {
        let keystore_path = dirs::home_dir()
            .ok_or_else(|| anyhow!("Failed to get home directory"))?
            .join(".sui")
            .join("sui_config")
            .join("sui.keystore");
        let keystore = FileBasedKeystore::new(&keystore_path)?;
        let signature = keystore.sign_secure(&self.sender, &tx_data, Intent::sui_transaction())?;

        let transaction_response = self
            .sui_client
            .quorum_driver_api()
            .execute_transaction_block(
                Transaction::from_data(tx_data, vec![signature]),
                SuiTransactionBlockResponseOptions::full_content(),
                Some(ExecuteTransactionRequestType::WaitForLocalExecution),
            )
            .await?;

        Ok(transaction_response)
    }

    /// Execute a move call built from pure arguments
    pub async fn execute_move_call(
        &self,
        package_id: ObjectID,
        module: &str,
        function: &str,
        type_args: Vec<TypeTag>,
        args: Vec<CallArg>,
        gas_config: Option<GasConfig>,
    ) -> Result<String> {
        let gas_config = gas_config.unwrap_or_default();
        let coin = self.get_gas_coin().await?;

        let mut ptb = ProgrammableTransactionBuilder::new();
        for arg in &args {
            ptb.input(arg.clone())?;
        }

        let args_len = args.len();
        let arg_indices: Vec<Argument> = (0..args_len).map(|i| Argument::Input(i as u16)).collect();

        let module = Identifier::new(module)?;
        let function = Identifier::new(function)?;
        ptb.command(Command::move_call(
            package_id,
            module,
            function,
            type_args,
            arg_indices,
        ));

        let tx_data = self.build_transaction(ptb, coin, gas_config).await?;
        let tx_response = self.sign_and_execute(tx_data).await?;

        if let Some(effects) = &tx_response.effects {
            if !effects.status().is_ok() {
                let error_detail = format!("{:?}", effects.status());
                return Err(anyhow!("Transaction failed: {}", error_detail));
            }
        }

        Ok(tx_response.digest.base58_encode())
    }
}

/// Builds the one call description this client submits:
/// `{package}::{module}::{function}(address, string, string, string)`.
pub struct MintTransactionBuilder {
    executor: TransactionExecutor,
}

impl MintTransactionBuilder {
    pub fn new(sui_client: Arc<SuiClient>, sender: SuiAddress) -> Self {
        Self {
            executor: TransactionExecutor::new(sui_client, sender),
        }
    }

    /// Positional arguments in fixed order: recipient, image, name, description.
    fn build_args(request: &MintRequest) -> Result<Vec<CallArg>> {
        let recipient = SuiAddress::from_str(&request.recipient_address)
            .map_err(|e| anyhow!("Invalid recipient address: {}", e))?;

        Ok(vec![
            CallArg::Pure(bcs::to_bytes(&recipient)?),
            CallArg::Pure(bcs::to_bytes(&request.image_reference)?),
            CallArg::Pure(bcs::to_bytes(&request.name)?),
            CallArg::Pure(bcs::to_bytes(&request.description)?),
        ])
    }

    pub async fn mint_loyalty(&self, request: &MintRequest) -> Result<String> {
        let package_id = ObjectID::from_hex_literal(&request.target_package)
            .map_err(|e| anyhow!("Invalid package ID: {}", e))?;
        let args = Self::build_args(request)?;

        self.executor
            .execute_move_call(
                package_id,
                &request.target_module,
                &request.target_function,
                vec![],
                args,
                None,
            )
            .await
    }
}

impl MintSigner for MintTransactionBuilder {
    async fn sign_and_submit(&self, request: &MintRequest) -> Result<String> {
        self.mint_loyalty(request).await
    }
}
