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

//! Minimal JSON-RPC 2.0 transport over HTTP.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use charter_core::TxHash;

use crate::error::Error;

/// `status` value of a submission the node accepted into its queue.
pub const STATUS_OK: &str = "OK";

#[derive(Serialize)]
struct Request<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<serde_json::Value>,
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// Result of `sendRawTransaction`.
#[derive(Clone, Debug, Deserialize)]
pub struct SendTransactionResult {
    pub status: String,
    pub hash: Option<TxHash>,
}

/// JSON-RPC client for a single node endpoint.
pub struct RpcClient {
    http: reqwest::Client,
    endpoint: Url,
    id: AtomicU64,
}

impl RpcClient {
    pub fn new(endpoint: Url) -> Self {
        RpcClient {
            http: reqwest::Client::new(),
            endpoint,
            id: AtomicU64::new(0),
        }
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, Error> {
        let request = Request {
            jsonrpc: "2.0",
            id: self.id.fetch_add(1, Ordering::SeqCst),
            method,
            params,
        };
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let response: RpcResponse = response.json().await?;
        if let Some(error) = response.error {
            return Err(Error::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        // `result` may legitimately be `null`, e.g. `getTransactionReceipt`
        // for a transaction that is not yet in a block.
        let value = response.result.unwrap_or(serde_json::Value::Null);
        serde_json::from_value(value)
            .map_err(|e| Error::BadResponse(format!("{}: {}", method, e)))
    }
}

/// Parse a `0x`-prefixed hexadecimal quantity.
pub fn parse_quantity(value: &str) -> Result<u64, Error> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| Error::BadResponse(format!("quantity without 0x prefix: {}", value)))?;
    u64::from_str_radix(digits, 16)
        .map_err(|_| Error::BadResponse(format!("malformed quantity: {}", value)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_quantity_requires_prefix() {
        assert_eq!(parse_quantity("0x2a").unwrap(), 42);
        assert!(parse_quantity("2a").is_err());
        assert!(parse_quantity("0xzz").is_err());
    }

    #[test]
    fn send_transaction_result_parses_with_and_without_hash() {
        let ok: SendTransactionResult = serde_json::from_str(
            r#"{"status": "OK", "hash": "0x0101010101010101010101010101010101010101010101010101010101010101"}"#,
        )
        .unwrap();
        assert_eq!(ok.status, STATUS_OK);
        assert!(ok.hash.is_some());

        let rejected: SendTransactionResult =
            serde_json::from_str(r#"{"status": "BadSignature", "hash": null}"#).unwrap();
        assert_ne!(rejected.status, STATUS_OK);
        assert!(rejected.hash.is_none());
    }
}
