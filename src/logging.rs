use flexi_logger::{Logger, LoggerHandle};
use log::info;

use crate::error::{AgendaError, AgendaResult};

const DEFAULT_LEVEL: &str = "warn";

/// Starts stderr logging. An explicit `level` wins over `RUST_LOG`, which
/// wins over the default. Keep the returned handle alive until exit.
pub fn init(level: Option<&str>) -> AgendaResult<LoggerHandle> {
    let logger = match level {
        Some(spec) => Logger::try_with_str(spec),
        None => Logger::try_with_env_or_str(DEFAULT_LEVEL),
    }
    .map_err(|e| AgendaError::Other(format!("invalid log level: {}", e)))?;

    let handle = logger
        .log_to_stderr()
        .start()
        .map_err(|e| AgendaError::Other(format!("failed to start logger: {}", e)))?;

    info!(
        "event=app_start module=logging status=ok version={}",
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}
