use zipranges::{config, inputs, Config, EnablementLevel, PartialConfig};

mod outputs;

#[derive(clap::Parser, Debug)]
/// zipranges: Collapse ZIP code ranges into the fewest equivalent ranges.
///
/// Example: `zipranges 94133,94133 94200,94299 94226,94399` prints
/// `[94133,94133] [94200,94399]`.
struct Cli {
    /// Ranges to collapse, each formatted #####,##### (both ends included).
    ranges: Vec<String>,

    /// Config file path (default: ~/.config/zipranges/zipranges.yml)
    #[arg(
        short,
        long,
        required = false,
        help = format!("Config file path (default: {:?})", config::default_config_path())
    )]
    config: Option<std::path::PathBuf>,

    #[arg(long, value_enum)]
    color: Option<EnablementLevel>,

    /// Printed between collapsed ranges (default: a single space).
    #[arg(long)]
    separator: Option<String>,

    /// Also read whitespace-separated ranges from standard input
    /// (implied when no ranges are given and stdin isn't a terminal).
    #[arg(long)]
    stdin: bool,
}

fn main() -> std::io::Result<std::process::ExitCode> {
    use clap::Parser;
    use std::io::IsTerminal;

    env_logger::init();

    // grab cli args
    let cli = Cli::parse();

    // load config; flags win over the file, the file wins over built-ins
    let custom_config = PartialConfig::load(cli.config.as_deref()).map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidData, format!("{}", e))
    })?;
    let default_config = Config::load_default();
    let merged_config = match custom_config {
        None => default_config,
        Some(custom_config) => default_config.merge(custom_config),
    }
    .merge(PartialConfig {
        separator: cli.separator.clone(),
        color: cli.color,
    });
    let use_color = match merged_config.color {
        EnablementLevel::Auto => console::colors_enabled(),
        EnablementLevel::Never => false,
        EnablementLevel::Always => true,
    };

    // gather specs
    let mut specs = cli.ranges.clone();
    if cli.stdin || (specs.is_empty() && !std::io::stdin().is_terminal()) {
        let stdin_specs = inputs::load_stdin().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{}", e))
        })?;
        specs.extend(stdin_specs);
    }
    log::debug!("specs = {:#?}", &specs);

    let collapsed = match zipranges::collapse(&specs) {
        Ok(collapsed) => collapsed,
        Err(e) => {
            eprintln!("zipranges: {}", e);
            return Ok(std::process::ExitCode::FAILURE);
        }
    };
    log::debug!("collapsed {} ranges into {}", specs.len(), collapsed.len());

    let options = outputs::OutputOptions {
        separator: merged_config.separator,
        use_color,
    };
    let result = outputs::write_ranges(&mut std::io::stdout().lock(), &collapsed, &options);
    if outputs::is_broken_pipe(&result) {
        // stdout is gone so let's just leave quietly
        return Ok(std::process::ExitCode::SUCCESS);
    }
    result?;
    Ok(std::process::ExitCode::SUCCESS)
}
