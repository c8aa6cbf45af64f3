//! JSON-RPC connection loader.
//!
//! Resolves the network id with `net_version` and the node's accounts with `eth_accounts`.
//! Transient HTTP failures are retried with exponential backoff.

use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, Jitter, RetryTransientMiddleware};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::{
	models::{Connection, NetworkId},
	services::connection::{ConnectionError, ConnectionLoader},
};

const DEFAULT_MAX_RETRIES: u32 = 3;

/// Connection loader backed by an Ethereum JSON-RPC HTTP endpoint
#[derive(Clone, Debug)]
pub struct HttpConnectionLoader {
	client: ClientWithMiddleware,
	url: Url,
}

impl HttpConnectionLoader {
	/// Creates a loader for `rpc_url` with the default retry policy
	pub fn new(rpc_url: &str) -> Result<Self, ConnectionError> {
		Self::with_max_retries(rpc_url, DEFAULT_MAX_RETRIES)
	}

	/// Creates a loader for `rpc_url` retrying transient failures at most `max_retries` times
	pub fn with_max_retries(rpc_url: &str, max_retries: u32) -> Result<Self, ConnectionError> {
		let url = Url::parse(rpc_url)
			.map_err(|e| ConnectionError::invalid_url(format!("{}: {}", rpc_url, e)))?;

		if !matches!(url.scheme(), "http" | "https") {
			return Err(ConnectionError::invalid_url(format!(
				"{}: scheme must be http or https",
				rpc_url
			)));
		}

		let retry_policy = ExponentialBackoff::builder()
			.base(2)
			.retry_bounds(Duration::from_millis(250), Duration::from_secs(10))
			.jitter(Jitter::Full)
			.build_with_max_retries(max_retries);

		let http_client = reqwest::ClientBuilder::new()
			.pool_idle_timeout(Duration::from_secs(90))
			.timeout(Duration::from_secs(30))
			.connect_timeout(Duration::from_secs(20))
			.build()?;

		let client = ClientBuilder::new(http_client)
			.with(RetryTransientMiddleware::new_with_policy(retry_policy))
			.build();

		Ok(Self { client, url })
	}

	/// Sends a JSON-RPC 2.0 request and returns its `result` member
	async fn send_raw_request(
		&self,
		method: &str,
		params: Value,
	) -> Result<Value, ConnectionError> {
		let request = json!({
			"jsonrpc": "2.0",
			"id": 1,
			"method": method,
			"params": params,
		});

		debug!(method, url = %self.url, "Sending JSON-RPC request");

		let response = self
			.client
			.post(self.url.clone())
			.json(&request)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			return Err(ConnectionError::request_error(format!(
				"{} returned HTTP {}",
				method, status
			)));
		}

		let mut body: Value = response.json().await?;

		if let Some(error) = body.get("error") {
			let message = error
				.get("message")
				.and_then(Value::as_str)
				.unwrap_or("unknown error");
			return Err(ConnectionError::response_error(format!(
				"{} failed: {}",
				method, message
			)));
		}

		body.get_mut("result").map(Value::take).ok_or_else(|| {
			ConnectionError::response_error(format!("{} returned no result", method))
		})
	}

	async fn network_id(&self) -> Result<NetworkId, ConnectionError> {
		let result = self.send_raw_request("net_version", json!([])).await?;
		let raw = result.as_str().ok_or_else(|| {
			ConnectionError::response_error(format!("net_version is not a string: {}", result))
		})?;

		raw.trim().parse::<NetworkId>().map_err(|e| {
			ConnectionError::response_error(format!("invalid network id '{}': {}", raw, e))
		})
	}

	async fn accounts(&self) -> Result<Vec<String>, ConnectionError> {
		let result = self.send_raw_request("eth_accounts", json!([])).await?;

		serde_json::from_value(result).map_err(|e| {
			ConnectionError::response_error(format!("invalid eth_accounts result: {}", e))
		})
	}
}

#[async_trait]
impl ConnectionLoader for HttpConnectionLoader {
	async fn load(&self) -> Result<Connection, ConnectionError> {
		let network_id = self.network_id().await?;
		let accounts = self.accounts().await?;

		Ok(Connection {
			network_id,
			accounts,
		})
	}

	fn describe(&self) -> String {
		format!("JSON-RPC endpoint {}", self.url)
	}
}
