mod common;

use common::*;
use paylike_gateway::domain::id::{OrderId, TransactionId};
use paylike_gateway::domain::money::{Currency, MoneyAmount};
use paylike_gateway::domain::payment::NewPayment;
use paylike_gateway::domain::ports::PaymentStore;
use paylike_gateway::services::webhook_processor::DispatchOutcome;
use std::sync::Arc;

// ── concurrent_deliveries_single_payment ───────────────────────────────────
// 10 tasks deliver the same transaction id at once. Exactly one gets
// Completed; the payment store ends with a single record for the reference.

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_deliveries_single_payment() {
    let h = harness(MockClient::new().with_transaction(authorized_txn("T_race", 5000)));
    h.orders.insert(make_order("O_race", 5000)).await;
    let processor = Arc::new(h.processor);

    let mut handles = Vec::new();
    for _ in 0..10 {
        let processor = processor.clone();
        handles.push(tokio::spawn(async move {
            // Test-flagged so the duplicate guard never short-circuits a
            // task in verify; every task races to the insert instead.
            let verified = processor
                .verify(make_test_event("T_race", "O_race"))
                .await
                .unwrap();
            processor.dispatch(verified).await.unwrap()
        }));
    }

    let mut completed = 0;
    let mut payment_errors = 0;
    for handle in handles {
        match handle.await.unwrap() {
            DispatchOutcome::Completed => completed += 1,
            DispatchOutcome::PaymentError(_) => payment_errors += 1,
        }
    }

    assert_eq!(completed, 1, "exactly 1 Completed");
    assert_eq!(payment_errors, 9, "9 PaymentErrors");
    assert_eq!(h.payments.count().await, 1, "exactly 1 payment row");
    assert!(
        h.payments
            .get_by_reference(&TransactionId::new("T_race"))
            .await
            .is_some()
    );
}

// ── concurrent_insert_unique_single_record ─────────────────────────────────
// The store-level guarantee on its own: 10 tasks insert the same reference,
// one wins, the rest see the existing record.

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_insert_unique_single_record() {
    let payments = harness(MockClient::new()).payments;

    let mut handles = Vec::new();
    for i in 0..10 {
        let payments = payments.clone();
        handles.push(tokio::spawn(async move {
            let payment = NewPayment {
                reference: TransactionId::new("T_store_race"),
                order_id: OrderId::new("O1"),
                amount: MoneyAmount::new(5000).unwrap(),
                currency: Currency::Usd,
                gateway: "paylike".to_string(),
                method: "paylike".to_string(),
                comment: format!("Webhook T_store_race #{i}"),
            };
            payments.insert_unique(payment).await.is_some()
        }));
    }

    let mut inserted = 0;
    let mut rejected = 0;
    for handle in handles {
        if handle.await.unwrap() {
            inserted += 1;
        } else {
            rejected += 1;
        }
    }

    assert_eq!(inserted, 1, "exactly 1 insert");
    assert_eq!(rejected, 9, "9 rejected as existing");
    assert_eq!(payments.count().await, 1);
}
