mod protocol;
mod server;

pub use protocol::{WireContent, WireMessage};
pub use server::AdapterServer;

use std::io;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::executor::Pacing;

/// Serve the adapter protocol over stdin/stdout until disconnect or EOF.
pub fn run_adapter_mode(pacing: Pacing) -> Result<()> {
    info!("adapter server starting");

    let mut server = AdapterServer::new(pacing);
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        let msg = match AdapterServer::read_message(&mut reader) {
            Ok(Some(msg)) => msg,
            Ok(None) => break,
            Err(Error::Io(err)) => return Err(err.into()),
            Err(err) => {
                // Framing survived (headers and body were consumed), so the
                // stream is still aligned; drop the message and keep serving.
                warn!(%err, "dropping malformed message");
                continue;
            }
        };

        match msg.content {
            WireContent::Request { command, arguments } => {
                if !server.handle_request(msg.seq, command, arguments)? {
                    break;
                }
            }
            _ => warn!("ignoring non-request message"),
        }
    }

    info!("adapter server exiting");
    Ok(())
}
