use tracing::{debug, info, warn};

use crate::resources::CommandLog;
use crate::simulator::Simulator;
use crate::transport::ActuatorLink;
use crate::utils::SimError;

/// Re-executes `log` against `sim` in order.
///
/// Stops at the first failing record and returns its error. Records applied
/// before the failure stay applied; callers wanting a clean slate must reset.
pub fn replay(sim: &mut Simulator, log: &CommandLog) -> Result<usize, SimError> {
    for (index, record) in log.iter().enumerate() {
        if let Err(e) = sim.execute(&record.command, &record.arguments) {
            warn!(index, record = %record, error = %e, "Replay aborted");
            return Err(e);
        }
    }
    info!(records = log.len(), "Replay complete");
    Ok(log.len())
}

/// Sends the canonical form of every record to the linked actuator, in order.
///
/// Opens the link on first use. A transport failure aborts the remaining
/// records; nothing already sent is retried.
pub fn deploy(log: &CommandLog, link: &mut ActuatorLink) -> Result<usize, SimError> {
    let actuator = link.actuator()?;
    for record in log {
        let line = record.to_string();
        let reply = actuator.send(&line)?;
        debug!(command = %line, %reply, "Deployed");
    }
    info!(records = log.len(), "Deploy complete");
    Ok(log.len())
}
