//! Orchestrator Integration Tests
//!
//! Full runs against mock HTTP servers standing in for the Aptos node and the DEX.
//! No real network calls.

use httpmock::{Method, MockServer};
use serde_json::json;

use aptos_sniper::adapters::aptos::verify_signed_transaction;
use aptos_sniper::adapters::http::HttpConfig;
use aptos_sniper::adapters::{AptosClient, DexClient, LocalSigner};
use aptos_sniper::application::{RunPlan, SniperOrchestrator};
use aptos_sniper::ports::{BotError, SignedTransaction, SwapRequest};

// ============================================================================
// Test Fixtures
// ============================================================================

const TEST_KEY: &str = "0x9bf49a6a0755f953811fce125f2683d50429c3bb49e074147e0089a52eae155f";
const WALLET: &str = "0xwallet";

struct Harness {
    node: MockServer,
    dex: MockServer,
}

impl Harness {
    async fn start() -> Self {
        Self {
            node: MockServer::start_async().await,
            dex: MockServer::start_async().await,
        }
    }

    async fn mock_reads(&self) {
        self.node
            .mock_async(|when, then| {
                when.method(Method::GET)
                    .path(format!("/api/accounts/{}/balance", WALLET));
                then.status(200).json_body(json!({"balance": 500}));
            })
            .await;
        self.node
            .mock_async(|when, then| {
                when.method(Method::GET).path("/api/gas-estimate");
                then.status(200).json_body(json!({"fee": 10}));
            })
            .await;
        self.dex
            .mock_async(|when, then| {
                when.method(Method::POST).path("/swap");
                then.status(200).json_body(json!({"swapped": 100}));
            })
            .await;
    }

    fn orchestrator(&self) -> SniperOrchestrator<AptosClient, DexClient, LocalSigner> {
        let aptos = AptosClient::new(HttpConfig::new(self.node.base_url())).unwrap();
        let dex = DexClient::new(HttpConfig::new(self.dex.url("/swap"))).unwrap();
        let signer = LocalSigner::from_hex(TEST_KEY).unwrap();

        let plan = RunPlan {
            wallet_address: WALLET.to_string(),
            swap: SwapRequest::new("0x...abc", "0x...def", 100, WALLET),
            recipient: "0xrecipient".to_string(),
            amount: 100,
        };

        SniperOrchestrator::new(aptos, dex, signer, plan)
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_happy_path_surfaces_all_results() {
    let harness = Harness::start().await;
    harness.mock_reads().await;
    let tx_mock = harness
        .node
        .mock_async(|when, then| {
            when.method(Method::POST).path("/api/transactions");
            then.status(200).json_body(json!({"txId": "abc123"}));
        })
        .await;

    let report = harness.orchestrator().run().await;

    assert!(report.is_success(), "unexpected failures: {:?}", report.failures());
    assert_eq!(report.balance.unwrap().balance, 500);
    assert_eq!(report.gas_fee.unwrap().fee, 10);
    assert_eq!(report.swap.unwrap().swapped, 100);
    assert_eq!(report.transaction.unwrap().tx_id, "abc123");
    // exactly one attempt, no retries
    tx_mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_transaction_rejection_reports_exact_body() {
    let harness = Harness::start().await;
    harness.mock_reads().await;
    let tx_mock = harness
        .node
        .mock_async(|when, then| {
            when.method(Method::POST).path("/api/transactions");
            then.status(500).body("insufficient funds");
        })
        .await;

    let report = harness.orchestrator().run().await;

    assert!(report.balance.is_ok());
    assert!(report.gas_fee.is_ok());
    assert!(report.swap.is_ok());
    match report.transaction {
        Err(BotError::Rejected { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "insufficient funds");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
    tx_mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_every_endpoint_rejecting() {
    let harness = Harness::start().await;
    harness
        .node
        .mock_async(|when, then| {
            when.any_request();
            then.status(502).body("bad gateway");
        })
        .await;
    harness
        .dex
        .mock_async(|when, then| {
            when.any_request();
            then.status(503).body("dex down");
        })
        .await;

    let report = harness.orchestrator().run().await;

    let failures = report.failures();
    assert_eq!(failures.len(), 4);
    for (step, err) in failures {
        assert!(err.is_rejected(), "{} should be rejected, got {:?}", step, err);
    }
    assert_eq!(report.swap.unwrap_err().rejection_body(), Some("dex down"));
}

#[tokio::test]
async fn test_unreachable_node_is_network_error() {
    let harness = Harness::start().await;
    harness.mock_reads().await;

    let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead = format!("http://{}", probe.local_addr().unwrap());
    drop(probe);

    let aptos = AptosClient::new(HttpConfig::new(dead)).unwrap();
    let dex = DexClient::new(HttpConfig::new(harness.dex.url("/swap"))).unwrap();
    let signer = LocalSigner::from_hex(TEST_KEY).unwrap();
    let plan = RunPlan {
        wallet_address: WALLET.to_string(),
        swap: SwapRequest::new("0x...abc", "0x...def", 100, WALLET),
        recipient: "0xrecipient".to_string(),
        amount: 100,
    };

    let report = SniperOrchestrator::new(aptos, dex, signer, plan).run().await;

    assert!(report.balance.as_ref().unwrap_err().is_network());
    assert!(report.gas_fee.as_ref().unwrap_err().is_network());
    assert!(report.transaction.as_ref().unwrap_err().is_network());
    assert!(report.swap.is_ok());
}

#[tokio::test]
async fn test_submitted_payload_verifies_against_signer() {
    let harness = Harness::start().await;
    harness.mock_reads().await;
    let signer = LocalSigner::from_hex(TEST_KEY).unwrap();
    let expected_hex = {
        use aptos_sniper::ports::{TransactionRequest, TransactionSigner};
        let tx = TransactionRequest::new(signer.address(), "0xrecipient", 100);
        signer.sign(&tx).unwrap().to_hex().unwrap()
    };

    assert!(verify_signed_transaction(&expected_hex).is_ok());
    let decoded = SignedTransaction::from_hex(&expected_hex).unwrap();
    assert_eq!(decoded.transaction.amount, 100);

    // Deterministic signing: the node receives exactly the payload computed above
    let tx_mock = harness
        .node
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/api/transactions")
                .json_body_partial(json!({"signedTransaction": expected_hex}).to_string());
            then.status(200).json_body(json!({"txId": "abc123"}));
        })
        .await;

    let report = harness.orchestrator().run().await;

    assert_eq!(report.transaction.unwrap().tx_id, "abc123");
    tx_mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_key_still_runs_read_steps() {
    let harness = Harness::start().await;
    harness.mock_reads().await;
    let tx_mock = harness
        .node
        .mock_async(|when, then| {
            when.method(Method::POST).path("/api/transactions");
            then.status(200).json_body(json!({"txId": "abc123"}));
        })
        .await;

    let aptos = AptosClient::new(HttpConfig::new(harness.node.base_url())).unwrap();
    let dex = DexClient::new(HttpConfig::new(harness.dex.url("/swap"))).unwrap();
    let plan = RunPlan {
        wallet_address: WALLET.to_string(),
        swap: SwapRequest::new("0x...abc", "0x...def", 100, WALLET),
        recipient: "0xrecipient".to_string(),
        amount: 100,
    };

    let signer = LocalSigner::from_hex("0xnot-a-key");
    let report = SniperOrchestrator::with_signer_result(aptos, dex, signer, plan)
        .run()
        .await;

    assert_eq!(report.balance.unwrap().balance, 500);
    assert_eq!(report.gas_fee.unwrap().fee, 10);
    assert_eq!(report.swap.unwrap().swapped, 100);
    assert!(matches!(report.transaction, Err(BotError::Signing(_))));
    tx_mock.assert_hits_async(0).await;
}
