//! Built-in reducers and the reducer map used for custom state slices.

use std::{
	collections::{BTreeMap, HashMap},
	sync::Arc,
};

use serde_json::Value;

use crate::{
	models::{ConnectionState, ConnectionStatus, ContractInstance, FeedEntry, State},
	services::store::Action,
};

/// Reducer of a custom state slice: maps the current slice and an action to the next slice
pub type Reducer = Arc<dyn Fn(&Value, &Action) -> Value + Send + Sync>;

/// Custom reducers keyed by the name of the slice they own
pub type ReducerMap = HashMap<String, Reducer>;

/// Wraps a closure into a [`Reducer`]
pub fn reducer<F>(f: F) -> Reducer
where
	F: Fn(&Value, &Action) -> Value + Send + Sync + 'static,
{
	Arc::new(f)
}

fn reduce_connection(connection: &mut ConnectionState, action: &Action) {
	match action {
		Action::ConnectionLoad(_) => {
			connection.status = ConnectionStatus::Loading;
			connection.error = None;
		}
		Action::ConnectionLoaded(loaded) => {
			connection.status = ConnectionStatus::Loaded;
			connection.network_id = Some(loaded.network_id);
			connection.accounts = loaded.accounts.clone();
			connection.error = None;
		}
		Action::ConnectionRejected {
			network_id,
			whitelist,
		} => {
			connection.status = ConnectionStatus::NetworkRejected;
			connection.network_id = Some(*network_id);
			connection.accounts.clear();
			connection.error = Some(rejection_message(*network_id, whitelist));
		}
		Action::ConnectionFailed { message } => {
			connection.status = ConnectionStatus::Failed;
			connection.accounts.clear();
			connection.error = Some(message.clone());
		}
		Action::Init | Action::ContractLoad { .. } => {}
	}
}

// Runs after the connection reducer so the instance picks up the current network.
fn reduce_contracts(
	contracts: &mut BTreeMap<String, ContractInstance>,
	connection: &ConnectionState,
	action: &Action,
) {
	if let Action::ContractLoad { name, address } = action {
		let network_id = match connection.status {
			ConnectionStatus::Loaded => connection.network_id,
			_ => None,
		};
		contracts.insert(
			address.clone(),
			ContractInstance {
				name: name.clone(),
				address: address.clone(),
				network_id,
			},
		);
	}
}

fn reduce_feed(feed: &mut Vec<FeedEntry>, action: &Action) {
	let entry = match action {
		Action::ConnectionLoaded(connection) => FeedEntry::ConnectionLoaded {
			network_id: connection.network_id,
		},
		Action::ContractLoad { name, address } => FeedEntry::ContractLoaded {
			name: name.clone(),
			address: address.clone(),
		},
		Action::ConnectionRejected {
			network_id,
			whitelist,
		} => FeedEntry::Error {
			message: rejection_message(*network_id, whitelist),
		},
		Action::ConnectionFailed { message } => FeedEntry::Error {
			message: message.clone(),
		},
		Action::Init | Action::ConnectionLoad(_) => return,
	};
	feed.push(entry);
}

fn rejection_message(network_id: u64, whitelist: &[u64]) -> String {
	format!(
		"network {} is not whitelisted (allowed: {:?})",
		network_id, whitelist
	)
}

/// Applies `action` to every built-in slice, then to each custom slice
pub(crate) fn reduce(state: &mut State, action: &Action, reducers: &ReducerMap) {
	reduce_connection(&mut state.connection, action);
	reduce_contracts(&mut state.contracts, &state.connection, action);
	reduce_feed(&mut state.feed, action);

	for (field, reducer) in reducers {
		let next = match state.custom.get(field) {
			Some(current) => reducer(current, action),
			None => reducer(&Value::Null, action),
		};
		state.custom.insert(field.clone(), next);
	}
}
