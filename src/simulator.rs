use glam::DVec2;
use std::{path::Path, thread};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::components::{CommandArg, CommandRecord, FlightHistory, FlightState, FlipDirection};
use crate::events::{FlightEvent, FlightObserver, StateSnapshot};
use crate::rendering::PlotSink;
use crate::resources::{CommandLog, SimulatorConfig};
use crate::systems::{self, CommandRegistry};
use crate::transport::{ActuatorConnector, ActuatorLink, UdpConnector};
use crate::utils::SimError;

/// One simulated flight session.
///
/// Owns the flight state, its telemetry history, the command log, the
/// observers notified on every change and the link to the real drone.
/// Commands run to completion one at a time: validate, mutate, log, notify.
pub struct Simulator {
    session_id: Uuid,
    config: SimulatorConfig,
    state: FlightState,
    history: FlightHistory,
    log: CommandLog,
    registry: CommandRegistry,
    observers: Vec<Box<dyn FlightObserver>>,
    link: ActuatorLink,
}

impl Simulator {
    /// New session talking to the drone configured in `config.actuator`.
    pub fn new(config: SimulatorConfig) -> Self {
        let connector = UdpConnector::new(config.actuator.clone());
        Self::with_connector(config, connector)
    }

    /// New session deploying through `connector`. Enters command mode immediately.
    pub fn with_connector(config: SimulatorConfig, connector: impl ActuatorConnector + 'static) -> Self {
        let mut sim = Self {
            session_id: Uuid::new_v4(),
            state: FlightState::default(),
            history: FlightHistory::default(),
            log: CommandLog::new(),
            registry: CommandRegistry::default(),
            observers: Vec::new(),
            link: ActuatorLink::new(connector),
            config,
        };

        if sim.config.plot.enabled {
            match PlotSink::new(sim.config.plot.clone()) {
                Ok(sink) => sim.add_observer(sink),
                Err(e) => warn!(error = %e, "Static plots disabled"),
            }
        }

        info!(session = %sim.session_id, "Simulator session started");
        sim.command();
        sim
    }

    pub fn add_observer(&mut self, observer: impl FlightObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn history(&self) -> &FlightHistory {
        &self.history
    }

    pub fn command_log(&self) -> &CommandLog {
        &self.log
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn is_airborne(&self) -> bool {
        self.state.airborne
    }

    pub fn altitude(&self) -> i64 {
        self.state.altitude
    }

    pub fn position(&self) -> DVec2 {
        self.state.position
    }

    pub fn bearing(&self) -> i64 {
        self.state.bearing
    }

    pub fn is_deploy_link_open(&self) -> bool {
        self.link.is_connected()
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::capture(&self.state, &self.history)
    }

    /// Altitude history after a centered moving average.
    pub fn smoothed_altitude(&self) -> Vec<Option<f64>> {
        systems::centered_moving_average(&self.history.altitude_data, self.config.smoothing_window)
    }

    /// Fails with `NotAirborne` unless the drone is flying. Does not log.
    pub fn check_airborne(&self, command: &str) -> Result<(), SimError> {
        if self.state.airborne {
            Ok(())
        } else {
            Err(SimError::NotAirborne(command.to_string()))
        }
    }

    /// Runs a registered command by name.
    pub fn execute(&mut self, name: &str, args: &[CommandArg]) -> Result<(), SimError> {
        let handler = self.registry.lookup(name)?;
        handler(self, args)
    }

    // Control commands

    /// Enters command mode. Always accepted and logged.
    pub fn command(&mut self) {
        self.send_command("command", Vec::new());
    }

    /// Takes off to the configured altitude.
    ///
    /// Taking off while already airborne is a harmless repeat: it is reported
    /// and ignored, not logged. Returns whether the drone took off.
    pub fn takeoff(&mut self) -> bool {
        if self.state.airborne {
            warn!(
                "My current altitude is {} centimeters, so I can't takeoff again!",
                self.state.altitude
            );
            return false;
        }

        info!("Get ready for takeoff!");
        self.state.airborne = true;
        self.history.record_altitude(0);
        self.state.altitude = self.config.takeoff_altitude;
        self.history.record_altitude(self.state.altitude);
        self.send_command("takeoff", Vec::new());
        info!(
            "My estimated takeoff altitude is {} centimeters",
            self.state.altitude
        );
        self.notify(FlightEvent::Takeoff);
        true
    }

    pub fn land(&mut self) -> Result<(), SimError> {
        self.ensure_airborne("land")?;
        info!("Get ready for landing!");
        self.state.airborne = false;
        self.state.altitude = 0;
        self.history.record_altitude(0);
        self.send_command("land", Vec::new());
        self.notify(FlightEvent::Landed);
        Ok(())
    }

    // Movement commands

    pub fn up(&mut self, dist: i64) -> Result<(), SimError> {
        self.ensure_airborne("up")?;
        let altitude = self
            .state
            .altitude
            .checked_add(dist)
            .ok_or_else(|| SimError::invalid_argument("up", "altitude out of range"))?;
        self.climb_to("up", dist, altitude);
        Ok(())
    }

    pub fn down(&mut self, dist: i64) -> Result<(), SimError> {
        self.ensure_airborne("down")?;
        let altitude = self
            .state
            .altitude
            .checked_sub(dist)
            .ok_or_else(|| SimError::invalid_argument("down", "altitude out of range"))?;
        self.climb_to("down", dist, altitude);
        Ok(())
    }

    pub fn forward(&mut self, dist: i64) -> Result<(), SimError> {
        self.move_relative("forward", 0, dist)
    }

    pub fn back(&mut self, dist: i64) -> Result<(), SimError> {
        self.move_relative("back", 180, dist)
    }

    pub fn left(&mut self, dist: i64) -> Result<(), SimError> {
        self.move_relative("left", -90, dist)
    }

    pub fn right(&mut self, dist: i64) -> Result<(), SimError> {
        self.move_relative("right", 90, dist)
    }

    /// Rotates clockwise.
    pub fn cw(&mut self, degrees: i64) -> Result<(), SimError> {
        self.ensure_airborne("cw")?;
        info!("My current bearing is {} degrees.", self.state.bearing);
        self.state.rotate_cw(degrees);
        self.send_command("cw", vec![degrees.into()]);
        info!("My new bearing is {} degrees.", self.state.bearing);
        self.notify(FlightEvent::Rotated);
        Ok(())
    }

    /// Rotates counter-clockwise.
    pub fn ccw(&mut self, degrees: i64) -> Result<(), SimError> {
        self.ensure_airborne("ccw")?;
        info!("My current bearing is {} degrees.", self.state.bearing);
        self.state.rotate_ccw(degrees);
        self.send_command("ccw", vec![degrees.into()]);
        info!("My new bearing is {} degrees.", self.state.bearing);
        self.notify(FlightEvent::Rotated);
        Ok(())
    }

    pub fn flip(&mut self, direction: FlipDirection) -> Result<(), SimError> {
        self.ensure_airborne("flip")?;
        self.send_command("flip", vec![direction.into()]);
        self.history.record_flip(self.state.position);
        self.notify(FlightEvent::Flipped);
        Ok(())
    }

    // Session commands

    /// Back to the landed initial state with a fresh log, then command mode.
    pub fn reset(&mut self) {
        info!(session = %self.session_id, "Resetting simulator state...");
        self.clear_state();
        self.notify(FlightEvent::Reset);
        self.command();
    }

    /// Writes the command log as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let path = path.as_ref();
        info!("Saving commands to {}", path.display());
        self.log.save(path)
    }

    /// Replaces the session with the commands stored at `path`, replayed in order.
    ///
    /// The file is read before anything is touched. If a record fails, replay
    /// stops there and the records before it remain applied.
    pub fn load_commands(&mut self, path: impl AsRef<Path>) -> Result<usize, SimError> {
        let path = path.as_ref();
        let log = CommandLog::load(path)?;
        info!(records = log.len(), "Loading commands from {}", path.display());

        self.clear_state();
        self.notify(FlightEvent::Reset);
        systems::replay(self, &log)
    }

    /// Sends every logged command to the real drone.
    pub fn deploy(&mut self) -> Result<usize, SimError> {
        info!("Deploying your commands to a real Tello drone!");
        systems::deploy(&self.log, &mut self.link)
    }

    fn ensure_airborne(&self, command: &str) -> Result<(), SimError> {
        self.check_airborne(command)?;
        info!(
            "I am flying at {} centimeters above my takeoff altitude.",
            self.state.altitude
        );
        Ok(())
    }

    fn clear_state(&mut self) {
        self.state = FlightState::default();
        self.history = FlightHistory::default();
        self.log.clear();
    }

    fn climb_to(&mut self, name: &'static str, dist: i64, altitude: i64) {
        info!("My current bearing is {} degrees.", self.state.bearing);
        self.state.altitude = altitude;
        self.history.record_altitude(altitude);
        self.send_command(name, vec![dist.into()]);
        self.notify(FlightEvent::AltitudeChanged);
    }

    fn move_relative(
        &mut self,
        name: &'static str,
        relative_bearing: i64,
        dist: i64,
    ) -> Result<(), SimError> {
        self.ensure_airborne(name)?;
        info!("My current bearing is {} degrees.", self.state.bearing);
        let position = self.state.offset_position(relative_bearing, dist);
        self.state.position = position;
        self.history.record_position(position);
        debug!(x = position.x, y = position.y, "new position");
        self.send_command(name, vec![dist.into()]);
        self.notify(FlightEvent::Moved);
        Ok(())
    }

    fn send_command(&mut self, name: &str, arguments: Vec<CommandArg>) {
        let record = CommandRecord::new(name, arguments);
        info!(session = %self.session_id, "I am running your \"{}\" command.", record);
        self.log.push(record);

        let delay = self.config.command_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    fn notify(&mut self, event: FlightEvent) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            if let Err(e) = observer.on_state_change(event, &snapshot) {
                warn!(?event, error = %e, "Observer failed");
            }
        }
    }
}

impl std::fmt::Debug for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("session_id", &self.session_id)
            .field("state", &self.state)
            .field("log_len", &self.log.len())
            .field("observers", &self.observers.len())
            .field("link", &self.link)
            .finish()
    }
}
