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

use charter_core::TxHash;

use crate::receipt::ReceiptExtractionError;

/// Error that may be returned by any of the [crate::ClientT] methods.
///
/// Business-rule failures of executed transactions are not errors; they
/// are reported through [crate::TransactionIncluded::result].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The node is unreachable or the HTTP exchange failed
    #[error("RPC transport error")]
    Network(#[from] reqwest::Error),

    /// The node answered with an RPC-level error object
    #[error("node returned RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The node's response did not have the expected shape
    #[error("malformed node response: {0}")]
    BadResponse(String),

    /// Decoding the received data failed
    #[error("decoding the received data failed")]
    Codec(#[from] parity_scale_codec::Error),

    /// The client was built from an unusable configuration
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The node rejected the transaction before execution
    #[error("transaction rejected on submission: {status}")]
    Submission { status: String },

    /// The declared quota is above what the node accepts
    #[error("declared quota rejected: {reason}")]
    QuotaExceeded { reason: String },

    /// The retry budget of the receipt poller was exhausted
    #[error("no receipt for transaction {tx_hash} after {attempts} polling attempts")]
    ReceiptTimeout { tx_hash: TxHash, attempts: u32 },

    /// A receipt was obtained but the expected result could not be read
    /// from it
    #[error("failed to extract the result of transaction {tx_hash}")]
    ReceiptExtraction {
        #[source]
        error: ReceiptExtractionError,
        tx_hash: TxHash,
    },

    /// Other error
    #[error("other error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Other(error)
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        Error::Other(error.into())
    }
}
