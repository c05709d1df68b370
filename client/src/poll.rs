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

//! Bounded polling for transaction receipts.

use std::sync::Arc;
use std::time::Duration;

use charter_core::TxHash;

use crate::backend::Backend;
use crate::error::Error;
use crate::receipt::Receipt;

/// Number of filter polls after which waiting for a receipt is abandoned.
pub const RECEIPT_POLL_ATTEMPTS: u32 = 20;

/// Wait until the transaction's receipt is available.
///
/// Installs a block filter, asks for the receipt whenever new blocks
/// have appeared and gives up with [Error::ReceiptTimeout] after
/// [RECEIPT_POLL_ATTEMPTS] polls. Every poll consumes an attempt, with
/// or without new blocks, so the wait is always bounded. The filter is
/// uninstalled on every exit path, including errors.
pub async fn wait_for_receipt(
    backend: &Arc<dyn Backend>,
    tx_hash: TxHash,
    poll_interval: Duration,
) -> Result<Receipt, Error> {
    let filter_id = backend.new_block_filter().await?;
    let result = poll_for_receipt(backend, tx_hash, poll_interval, filter_id).await;
    let uninstall_result = backend.uninstall_filter(filter_id).await;
    let receipt = result?;
    uninstall_result?;
    Ok(receipt)
}

async fn poll_for_receipt(
    backend: &Arc<dyn Backend>,
    tx_hash: TxHash,
    poll_interval: Duration,
    filter_id: u64,
) -> Result<Receipt, Error> {
    for attempt in 1..=RECEIPT_POLL_ATTEMPTS {
        tokio::time::sleep(poll_interval).await;
        let new_blocks = backend.filter_changes(filter_id).await?;
        if new_blocks.is_empty() {
            continue;
        }
        log::trace!(
            "polling receipt for {}: {} new block(s), attempt {}",
            tx_hash,
            new_blocks.len(),
            attempt
        );
        if let Some(receipt) = backend.receipt(tx_hash).await? {
            return Ok(receipt);
        }
    }
    Err(Error::ReceiptTimeout {
        tx_hash,
        attempts: RECEIPT_POLL_ATTEMPTS,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::backend::Emulator;
    use charter_core::{Address, H256};

    fn backend(emulator: &Emulator) -> Arc<dyn Backend> {
        Arc::new(emulator.clone())
    }

    #[tokio::test]
    async fn unknown_transaction_times_out_and_releases_the_filter() {
        let emulator = Emulator::new(Address::zero());
        let result =
            wait_for_receipt(&backend(&emulator), H256::random(), Duration::from_millis(1)).await;
        match result {
            Err(Error::ReceiptTimeout { attempts, .. }) => {
                assert_eq!(attempts, RECEIPT_POLL_ATTEMPTS)
            }
            other => panic!("expected timeout, got {:?}", other.map(|_| ())),
        }
        assert_eq!(emulator.active_filters(), 0);
    }

    #[tokio::test]
    async fn delayed_receipt_is_found_before_the_attempt_limit() {
        let admin = charter_core::ed25519::Pair::from_string("//Admin");
        let emulator = Emulator::with_receipt_delay(admin.address(), 3);
        let backend = backend(&emulator);

        let transaction = crate::transaction::Transaction::new_signed(
            &admin,
            charter_core::message::SetBlockQuotaLimit { limit: 1 << 29 },
            crate::transaction::TransactionExtra {
                nonce: 0,
                quota: 1 << 25,
                valid_until_block: 88,
                chain_id: crate::backend::emulator::EMULATOR_CHAIN_ID,
            },
        );
        let tx_hash = backend.submit_raw(transaction.raw()).await.unwrap();

        let receipt = wait_for_receipt(&backend, tx_hash, Duration::from_millis(1))
            .await
            .unwrap();
        assert_eq!(receipt.transaction_hash, tx_hash);
        assert_eq!(receipt.error_message, None);
        assert_eq!(emulator.active_filters(), 0);
    }
}
