use serde::{Deserialize, Serialize};

use crate::models::NetworkId;

/// Result of a successful connection load
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Connection {
	pub network_id: NetworkId,
	pub accounts: Vec<String>,
}
