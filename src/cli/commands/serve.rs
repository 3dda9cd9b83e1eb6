//! `quickadd serve` implementation.

use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::error::QuickAddError;
use crate::server::serve_until_shutdown;

/// Run the parse endpoint in the foreground until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the runtime cannot start or the server fails to bind.
pub fn serve(args: ServeArgs, config: &Config) -> Result<String, QuickAddError> {
    let mut server = config.server.clone();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve_until_shutdown(&server, config.parser.clone()))?;
    Ok(String::new())
}
