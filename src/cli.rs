use std::env;
use std::path::PathBuf;

/// Default API server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    /// Raw unit cost; coerced like form input.
    pub unit_cost: Option<String>,
    /// Raw billing days; coerced like form input.
    pub days: Option<String>,
    /// `--enable`/`--disable` requests in command-line order.
    pub toggles: Vec<(String, bool)>,
    pub csv_out: Option<PathBuf>,
    pub list: bool,
    pub tui: bool,
    pub serve: bool,
    pub port: u16,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            config: None,
            unit_cost: None,
            days: None,
            toggles: Vec::new(),
            csv_out: None,
            list: false,
            tui: false,
            serve: false,
            port: DEFAULT_PORT,
        }
    }
}

pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(args)
}

fn parse_args_from(args: Vec<String>) -> Result<CliOptions, String> {
    if args.len() == 1 && (args[0] == "--help" || args[0] == "-h") {
        print_usage();
        std::process::exit(0);
    }
    parse_options(&args)
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut opts = CliOptions::default();

    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --config (expected a TOML file path)",
                )?;
                if opts.config.replace(PathBuf::from(path)).is_some() {
                    return Err("--config provided more than once".to_string());
                }
            }
            "--unit-cost" => {
                i += 1;
                let value = args.next_or_err(
                    i,
                    "missing value for --unit-cost (expected a price per Wh)",
                )?;
                opts.unit_cost = Some(value.to_string());
            }
            "--days" => {
                i += 1;
                let value = args.next_or_err(
                    i,
                    "missing value for --days (expected billing days per month)",
                )?;
                opts.days = Some(value.to_string());
            }
            "--enable" | "--disable" => {
                let enabled = args[i] == "--enable";
                let flag = args[i].clone();
                i += 1;
                let id = args
                    .get(i)
                    .ok_or_else(|| format!("missing value for {flag} (expected a device id)"))?;
                opts.toggles.push((id.clone(), enabled));
            }
            "--csv-out" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --csv-out (expected a file path)",
                )?;
                if opts.csv_out.replace(PathBuf::from(path)).is_some() {
                    return Err("--csv-out provided more than once".to_string());
                }
            }
            "--list" => opts.list = true,
            #[cfg(feature = "tui")]
            "--tui" => opts.tui = true,
            #[cfg(feature = "api")]
            "--serve" => opts.serve = true,
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                let raw = args.next_or_err(i, "missing value for --port (expected a u16)")?;
                opts.port = raw
                    .parse::<u16>()
                    .map_err(|_| format!("--port value \"{raw}\" is not a valid u16"))?;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if opts.tui && (opts.serve || opts.list || opts.csv_out.is_some()) {
        return Err(
            "`--tui` cannot be combined with `--serve`, `--list` or `--csv-out`".to_string(),
        );
    }

    Ok(opts)
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("energy-calc: household electricity consumption and cost calculator");
    eprintln!();
    eprintln!("Usage: energy-calc [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>       Load pricing and device overrides from TOML");
    eprintln!("  --unit-cost <value>   Price per Wh (invalid input means 0)");
    eprintln!("  --days <value>        Billing days per month (invalid or 0 means 30)");
    eprintln!("  --enable <id>         Include a device (repeatable)");
    eprintln!("  --disable <id>        Exclude a device (repeatable)");
    eprintln!("  --csv-out <path>      Write the per-device breakdown to CSV");
    eprintln!("  --list                Print the device list and exit");
    #[cfg(feature = "tui")]
    eprintln!("  --tui                 Interactive terminal UI");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve               Start REST API server after calculating");
        eprintln!("  --port <u16>          API server port (default: {DEFAULT_PORT})");
    }
    eprintln!("  --help                Show this help message");
}
