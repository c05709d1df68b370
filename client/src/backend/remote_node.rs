// Charter
// Copyright (C) 2020 The Charter developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License version 3 as
// published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Client backend that talks to a node over JSON-RPC.

use async_trait::async_trait;
use serde_json::json;
use url::Url;

use charter_core::{Address, BlockHash, BlockNumber, TxHash};

use crate::backend::{status, Backend, FilterId};
use crate::error::Error;
use crate::interface::ChainMetadata;
use crate::receipt::Receipt;
use crate::rpc::{parse_quantity, RpcClient, SendTransactionResult};

pub struct RemoteNode {
    rpc: RpcClient,
    metadata: ChainMetadata,
}

impl RemoteNode {
    /// Connect to the node at `endpoint` and fetch its chain identity.
    pub async fn create(endpoint: Url) -> Result<Self, Error> {
        let rpc = RpcClient::new(endpoint);
        let metadata: ChainMetadata = rpc.request("getMetaData", json!(["latest"])).await?;
        log::debug!(
            "connected to chain {} (id {})",
            metadata.chain_name,
            metadata.chain_id
        );
        Ok(RemoteNode { rpc, metadata })
    }
}

#[async_trait]
impl Backend for RemoteNode {
    async fn submit_raw(&self, raw: Vec<u8>) -> Result<TxHash, Error> {
        let result: SendTransactionResult = self
            .rpc
            .request(
                "sendRawTransaction",
                json!([format!("0x{}", hex::encode(&raw))]),
            )
            .await?;
        if result.status != status::OK {
            if result.status == status::QUOTA_NOT_ENOUGH {
                return Err(Error::QuotaExceeded {
                    reason: "declared quota exceeds the block quota limit".to_string(),
                });
            }
            return Err(Error::Submission {
                status: result.status,
            });
        }
        result
            .hash
            .ok_or_else(|| Error::BadResponse("accepted submission without a hash".to_string()))
    }

    async fn receipt(&self, tx_hash: TxHash) -> Result<Option<Receipt>, Error> {
        self.rpc
            .request("getTransactionReceipt", json!([tx_hash]))
            .await
    }

    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, Error> {
        let result: String = self
            .rpc
            .request(
                "call",
                json!([
                    {
                        "to": to,
                        "data": format!("0x{}", hex::encode(&data)),
                    },
                    "latest"
                ]),
            )
            .await?;
        let digits = result
            .strip_prefix("0x")
            .ok_or_else(|| Error::BadResponse("call result without 0x prefix".to_string()))?;
        hex::decode(digits).map_err(|_| Error::BadResponse("malformed call result".to_string()))
    }

    async fn block_number(&self) -> Result<BlockNumber, Error> {
        let result: String = self.rpc.request("blockNumber", json!([])).await?;
        parse_quantity(&result)
    }

    async fn new_block_filter(&self) -> Result<FilterId, Error> {
        let result: String = self.rpc.request("newBlockFilter", json!([])).await?;
        parse_quantity(&result)
    }

    async fn filter_changes(&self, filter_id: FilterId) -> Result<Vec<BlockHash>, Error> {
        self.rpc
            .request(
                "getFilterChanges",
                json!([format!("0x{:x}", filter_id)]),
            )
            .await
    }

    async fn uninstall_filter(&self, filter_id: FilterId) -> Result<(), Error> {
        let _removed: bool = self
            .rpc
            .request("uninstallFilter", json!([format!("0x{:x}", filter_id)]))
            .await?;
        Ok(())
    }

    fn chain_metadata(&self) -> ChainMetadata {
        self.metadata.clone()
    }
}
