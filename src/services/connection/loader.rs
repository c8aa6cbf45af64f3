use async_trait::async_trait;

use crate::{models::Connection, services::connection::ConnectionError};

/// Source of a blockchain connection.
///
/// Implementations are shared between the facade and the tasks spawned by the store, so
/// they must be `Send + Sync`.
#[async_trait]
pub trait ConnectionLoader: Send + Sync {
	/// Resolves the connection, querying the node if needed
	async fn load(&self) -> Result<Connection, ConnectionError>;

	/// Human readable description used in logs
	fn describe(&self) -> String {
		"connection loader".to_string()
	}
}

/// Loader that always resolves to the same connection
#[derive(Debug, Clone)]
pub struct StaticConnectionLoader {
	connection: Connection,
}

impl StaticConnectionLoader {
	pub fn new(connection: Connection) -> Self {
		Self { connection }
	}
}

#[async_trait]
impl ConnectionLoader for StaticConnectionLoader {
	async fn load(&self) -> Result<Connection, ConnectionError> {
		Ok(self.connection.clone())
	}

	fn describe(&self) -> String {
		format!("static connection on network {}", self.connection.network_id)
	}
}
