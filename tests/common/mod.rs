#![allow(dead_code)]

use httpmock::{Mock, prelude::*};
use serde_json::json;

pub const SYMBOL: &str = "BTC/USDT:USDT";
pub const T0: i64 = 1638230400000;
pub const EIGHT_HOURS_MS: i64 = 8 * 60 * 60 * 1000;

pub async fn mock_binance_history<'s>(server: &'s MockServer, times: &[i64]) -> Mock<'s> {
    let body: Vec<_> = times
        .iter()
        .map(|t| {
            json!({
                "symbol": "BTCUSDT",
                "fundingTime": t,
                "fundingRate": "0.00010000",
                "markPrice": "57000.12000000",
            })
        })
        .collect();

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/fapi/v1/fundingRate")
                .query_param("symbol", "BTCUSDT");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!(body));
        })
        .await
}

pub async fn mock_binance_error(server: &MockServer) -> Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/fapi/v1/fundingRate");
            then.status(400)
                .header("content-type", "application/json")
                .json_body(json!({ "code": -1121, "msg": "Invalid symbol." }));
        })
        .await
}

/// Bybit lists newest first, so `times` is expected in descending order.
pub async fn mock_bybit_history<'s>(server: &'s MockServer, times: &[i64]) -> Mock<'s> {
    let list: Vec<_> = times
        .iter()
        .map(|t| {
            json!({
                "symbol": "BTCUSDT",
                "fundingRate": "-0.000025",
                "fundingRateTimestamp": t.to_string(),
            })
        })
        .collect();

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v5/market/funding/history")
                .query_param("category", "linear")
                .query_param("symbol", "BTCUSDT");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "retCode": 0,
                    "retMsg": "OK",
                    "result": { "category": "linear", "list": list },
                }));
        })
        .await
}

pub async fn mock_bybit_ret_code<'s>(server: &'s MockServer, code: i32, msg: &str) -> Mock<'s> {
    let msg = msg.to_string();
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v5/market/funding/history");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "retCode": code, "retMsg": msg, "result": {} }));
        })
        .await
}

/// Non-2xx with an HTML body, as served by the CDN in front of the API.
pub async fn mock_bybit_http_error<'s>(server: &'s MockServer, status: u16, body: &str) -> Mock<'s> {
    let body = body.to_string();
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v5/market/funding/history");
            then.status(status)
                .header("content-type", "text/html")
                .body(body);
        })
        .await
}
