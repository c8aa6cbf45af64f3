//! Logging setup.
//!
//! Log output goes through `tracing_subscriber` with a compact formatter. The filter comes
//! from `RUST_LOG` when set, otherwise from the default directive passed by the caller
//! (`info`, or `debug` when running verbose).

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

type SetupResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Filter from `RUST_LOG`, falling back to `default_directive`
pub fn build_filter(default_directive: &str) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Setup logging to stdout
pub fn setup_logging(verbose: bool) -> SetupResult {
	let default_directive = if verbose { "debug" } else { "info" };
	setup_logging_with_writer(std::io::stdout, build_filter(default_directive))
}

/// Setup logging with a custom writer and filter as the global default
pub fn setup_logging_with_writer<W>(writer: W, filter: EnvFilter) -> SetupResult
where
	W: for<'writer> fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	build_subscriber(writer, filter).try_init()?;
	Ok(())
}

fn build_subscriber<W>(
	writer: W,
	filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
	W: for<'writer> fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry().with(filter).with(
		fmt::layer()
			.with_writer(writer)
			.event_format(
				fmt::format()
					.with_level(true)
					.with_target(true)
					.with_thread_ids(false)
					.with_thread_names(false)
					.with_ansi(false)
					.compact(),
			)
			.fmt_fields(fmt::format::PrettyFields::new()),
	)
}
