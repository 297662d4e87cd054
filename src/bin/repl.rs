use std::{
    env,
    io::{self, BufRead, Write},
    path::PathBuf,
    thread,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tello_sim::{
    console::{self, ConsoleInput},
    rendering::PlotSink,
    ChannelSink, FlightObserver, SimError, Simulator, SimulatorConfig,
};

struct Options {
    config: Option<PathBuf>,
    live: bool,
}

fn parse_options() -> Result<Options, String> {
    let mut options = Options {
        config: None,
        live: false,
    };
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--live" => options.live = true,
            other => return Err(format!("unknown option '{}'", other)),
        }
    }
    Ok(options)
}

fn load_config(explicit: Option<PathBuf>) -> Result<SimulatorConfig, Box<dyn std::error::Error>> {
    if let Some(path) = explicit {
        return Ok(SimulatorConfig::load(path)?);
    }
    match SimulatorConfig::default_path() {
        Some(path) if path.exists() => {
            info!("Using config {}", path.display());
            Ok(SimulatorConfig::load(path)?)
        }
        _ => Ok(SimulatorConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = parse_options().map_err(|e| {
        eprintln!("usage: tello_repl [--config PATH] [--live]");
        e
    })?;
    let mut config = load_config(options.config)?;

    // In live mode plots are drawn on their own thread instead of by the session.
    let mut display = None;
    let plot_config = config.plot.clone();
    if options.live {
        config.plot.enabled = false;
    }

    let mut sim = Simulator::new(config);
    if options.live {
        let (sink, updates) = ChannelSink::unbounded();
        let mut plots = PlotSink::new(plot_config)?;
        sim.add_observer(sink);
        display = Some(thread::spawn(move || {
            for (event, snapshot) in updates {
                if let Err(e) = plots.on_state_change(event, &snapshot) {
                    warn!(?event, error = %e, "Live plot update failed");
                }
            }
        }));
    }

    println!("Tello Drone Simulator Ready!");
    println!("{}", console::help_text(&sim.registry().names()));
    println!("Type 'exit' to quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter command (e.g., 'forward 100'): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;

        match console::parse_line(&line) {
            Ok(ConsoleInput::Exit) => break,
            Ok(input) => {
                if let Err(e) = dispatch(&mut sim, input) {
                    println!("Error executing command: {}", e);
                }
            }
            Err(e) => println!("Error executing command: {}", e),
        }
    }

    // Dropping the session closes the channel and lets the display drain.
    drop(sim);
    if let Some(handle) = display {
        if handle.join().is_err() {
            warn!("Live display thread panicked");
        }
    }
    Ok(())
}

fn dispatch(sim: &mut Simulator, input: ConsoleInput) -> Result<(), SimError> {
    match input {
        ConsoleInput::Empty | ConsoleInput::Exit => {}
        ConsoleInput::Help => println!("{}", console::help_text(&sim.registry().names())),
        ConsoleInput::Status => println!("{}", serde_json::to_string_pretty(&sim.snapshot())?),
        ConsoleInput::Reset => sim.reset(),
        ConsoleInput::Deploy => {
            let sent = sim.deploy()?;
            println!("Sent {} commands", sent);
        }
        ConsoleInput::Smooth => {
            let smoothed: Vec<String> = sim
                .smoothed_altitude()
                .iter()
                .map(|v| v.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v)))
                .collect();
            println!("[{}]", smoothed.join(", "));
        }
        ConsoleInput::Save(path) => sim.save(path)?,
        ConsoleInput::Load(path) => {
            let replayed = sim.load_commands(path)?;
            println!("Replayed {} commands", replayed);
        }
        ConsoleInput::Flight { name, args } => sim.execute(&name, &args)?,
    }
    Ok(())
}
