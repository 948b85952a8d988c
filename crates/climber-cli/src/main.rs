use climber_core::{Catalog, Engine};
use futures::executor::block_on;
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Catalog(climber_core::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Catalog(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<climber_core::Error> for CliError {
    fn from(value: climber_core::Error) -> Self {
        Self::Catalog(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Edges,
    Layout,
    Search,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    catalog: Option<String>,
    target: Option<String>,
    expand: Vec<String>,
    show_all: bool,
    center: Option<String>,
    canvas_width: f64,
    canvas_height: f64,
    pretty: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutOut {
    center: String,
    visible: Vec<String>,
    nodes: Vec<climber_layout::LayoutNode>,
    edges: Vec<climber_core::ScoredEdge>,
}

fn usage() -> &'static str {
    "climber-cli\n\
\n\
USAGE:\n\
  climber-cli edges  [--catalog <path>|-] [--pretty] <center-id>\n\
  climber-cli layout [--catalog <path>|-] [--expand <id>]... [--show-all] [--width <w>] [--height <h>] [--pretty] <start-id>\n\
  climber-cli search [--catalog <path>|-] [--center <id>] [--pretty] <term>\n\
\n\
NOTES:\n\
  - The catalog is a JSON object mapping position id to its record.\n\
  - If --catalog is omitted or '-', the catalog is read from stdin.\n\
  - edges prints the scored transition edges of <center-id>.\n\
  - layout starts an exploration at <start-id>, applies each --expand in\n\
    order (then --show-all), and prints the laid-out visible set.\n\
  - search prints matching positions; with --center they are ranked by\n\
    compatibility with that position.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        canvas_width: 1000.0,
        canvas_height: 700.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    let Some(command) = it.next() else {
        return Err(CliError::Usage(usage()));
    };
    args.command = match command.as_str() {
        "--help" | "-h" => return Err(CliError::Usage(usage())),
        "edges" => Command::Edges,
        "layout" => Command::Layout,
        "search" => Command::Search,
        _ => return Err(CliError::Usage(usage())),
    };

    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--show-all" => args.show_all = true,
            "--catalog" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.catalog = Some(path.clone());
            }
            "--expand" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.expand.push(id.clone());
            }
            "--center" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.center = Some(id.clone());
            }
            "--width" => {
                let Some(w) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.canvas_width = w.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.canvas_width.is_finite() && args.canvas_width > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--height" => {
                let Some(h) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.canvas_height = h.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.canvas_height.is_finite() && args.canvas_height > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            value => {
                if args.target.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.target = Some(value.to_string());
            }
        }
    }

    if args.target.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn read_catalog(input: Option<&str>) -> Result<Catalog, CliError> {
    let text = match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)?,
    };
    let catalog = Catalog::from_json_str(&text)?;
    if catalog.is_empty() {
        return Err(climber_core::Error::EmptyCatalog.into());
    }
    Ok(catalog)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let catalog = read_catalog(args.catalog.as_deref())?;
    let engine = Engine::new(catalog);
    let target = args.target.as_deref().unwrap_or_default();

    match args.command {
        Command::Edges => {
            let edges = block_on(engine.scored_edges(target));
            write_json(&edges, args.pretty)
        }
        Command::Search => {
            let hits = block_on(engine.search(target, args.center.as_deref()));
            write_json(&hits, args.pretty)
        }
        Command::Layout => {
            let mut exploration = engine.start_exploration(target);
            engine.expand(&mut exploration, target);
            for id in &args.expand {
                engine.expand(&mut exploration, id);
            }
            if args.show_all {
                engine.show_all(&mut exploration);
            }

            let snapshot = exploration.snapshot();
            let edges = block_on(engine.scored_edges(&snapshot.center));
            let options = climber_layout::LayoutOptions {
                canvas_width: args.canvas_width,
                canvas_height: args.canvas_height,
                ..Default::default()
            };
            let nodes = climber_layout::layout(
                engine.catalog(),
                &snapshot.center,
                &snapshot.visible,
                &edges,
                &options,
            );
            write_json(
                &LayoutOut {
                    center: snapshot.center,
                    visible: snapshot.visible,
                    nodes,
                    edges,
                },
                args.pretty,
            )
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
