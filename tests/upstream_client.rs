//! DexScreener client tests against a local stub upstream

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;

use poolscreener::{apis::DexScreenerClient, errors::UpstreamError};

/// Stub upstream: the token address selects the behaviour
async fn token_pairs(Path((chain, address)): Path<(String, String)>) -> Response {
    match address.as_str() {
        "rate-limited" => StatusCode::TOO_MANY_REQUESTS.into_response(),
        "broken" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "missing" => StatusCode::NOT_FOUND.into_response(),
        "not-a-list" => axum::Json(json!({"pairs": []})).into_response(),
        "not-json" => (StatusCode::OK, "<html>oops</html>").into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            axum::Json(json!([])).into_response()
        }
        _ => axum::Json(json!([
            {
                "chainId": chain,
                "pairAddress": "P1",
                "liquidity": {"usd": 1200.5},
                "baseToken": {"address": address}
            },
            {"chainId": chain, "pairAddress": "P2"}
        ]))
        .into_response(),
    }
}

async fn spawn_upstream() -> SocketAddr {
    let app = Router::new().route("/token-pairs/v1/:chain/:address", get(token_pairs));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn client(timeout: Duration) -> DexScreenerClient {
    let addr = spawn_upstream().await;
    DexScreenerClient::with_timeout(&format!("http://{}/token-pairs/v1", addr), timeout).unwrap()
}

#[tokio::test]
async fn returns_pool_records_in_upstream_order() {
    let client = client(Duration::from_secs(5)).await;

    let pools = client.fetch_token_pools("solana", "So111").await.unwrap();

    assert_eq!(pools.len(), 2);
    assert_eq!(pools[0].pair_address(), Some("P1"));
    assert_eq!(pools[0].liquidity_usd().unwrap(), 1200.5);
    assert_eq!(pools[0].base_token().get("address"), Some(&json!("So111")));
    assert_eq!(pools[1].pair_address(), Some("P2"));
    assert_eq!(pools[1].liquidity_usd().unwrap(), 0.0);
}

#[tokio::test]
async fn non_success_statuses_are_reported_verbatim() {
    let client = client(Duration::from_secs(5)).await;

    for (address, status) in [("rate-limited", 429), ("broken", 500), ("missing", 404)] {
        let err = client.fetch_token_pools("solana", address).await.unwrap_err();
        assert_eq!(err, UpstreamError::Status { status }, "for {}", address);
    }
}

#[tokio::test]
async fn unexpected_bodies_are_malformed_payloads() {
    let client = client(Duration::from_secs(5)).await;

    for address in ["not-a-list", "not-json"] {
        let err = client.fetch_token_pools("solana", address).await.unwrap_err();
        assert!(
            matches!(err, UpstreamError::MalformedPayload(_)),
            "for {}: {:?}",
            address,
            err
        );
    }
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let client = client(Duration::from_millis(200)).await;

    let err = client.fetch_token_pools("solana", "slow").await.unwrap_err();

    assert_eq!(err, UpstreamError::Timeout { timeout_ms: 200 });
}

#[tokio::test]
async fn refused_connection_is_unreachable() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        DexScreenerClient::with_timeout(&format!("http://{}/v1", addr), Duration::from_secs(2))
            .unwrap();

    let err = client.fetch_token_pools("solana", "X").await.unwrap_err();

    assert!(err.is_transport());
    assert!(matches!(err, UpstreamError::Unreachable(_)), "{:?}", err);
}
