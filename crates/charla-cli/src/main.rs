//! charla CLI: terminal chat with a simulated assistant

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use charla_core::{ChatConfig, IconPreference, ThemeName, CHARLA_DIR, CONFIG_FILE};

/// Terminal chat with a simulated assistant
#[derive(Parser)]
#[command(name = "charla")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Icon rendering mode
    #[arg(long, value_enum)]
    icons: Option<IconsArg>,

    /// Simulated reply delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (stderr belongs to the TUI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the chat TUI (default when no command specified)
    Chat,

    /// Write a default config file
    Init,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    HighContrast,
}

impl From<ThemeArg> for ThemeName {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Self::Dark,
            ThemeArg::HighContrast => Self::HighContrast,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IconsArg {
    Nerd,
    Unicode,
    Ascii,
}

impl From<IconsArg> for IconPreference {
    fn from(arg: IconsArg) -> Self {
        match arg {
            IconsArg::Nerd => Self::Nerd,
            IconsArg::Unicode => Self::Unicode,
            IconsArg::Ascii => Self::Ascii,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref path) = cli.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Failed to set up logging: {e}");
            std::process::exit(1);
        }
    }

    match cli.command {
        Some(Commands::Init) => cmd_init(&cli),
        None | Some(Commands::Chat) => cmd_chat(&cli),
    }
}

/// Install a tracing subscriber writing to a file.
fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::EnvFilter;

    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .clone()
        .unwrap_or_else(|| Path::new(CHARLA_DIR).join(CONFIG_FILE))
}

/// Load config and apply CLI/environment overrides.
fn resolve_config(cli: &Cli) -> Result<ChatConfig, charla_core::ConfigError> {
    let mut config = ChatConfig::load(&config_path(cli))?;

    // NO_COLOR implies maximum-compatibility rendering
    if std::env::var_os("NO_COLOR").is_some() {
        config.theme = ThemeName::HighContrast;
        config.icons = IconPreference::Ascii;
    }

    if let Some(theme) = cli.theme {
        config.theme = theme.into();
    }
    if let Some(icons) = cli.icons {
        config.icons = icons.into();
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.reply_delay_ms = delay_ms;
    }

    Ok(config)
}

fn cmd_init(cli: &Cli) {
    let path = config_path(cli);
    if path.exists() {
        eprintln!("Config already exists at {}", path.display());
        std::process::exit(1);
    }
    if let Err(e) = ChatConfig::default().save(&path) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    println!("Wrote {}", path.display());
}

fn cmd_chat(cli: &Cli) {
    let config = match resolve_config(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(theme = ?config.theme, delay_ms = config.reply_delay_ms, "starting chat TUI");

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(charla_tui::run_tui(&config)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_applied() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "charla",
            "--theme",
            "high-contrast",
            "--icons",
            "ascii",
            "--delay-ms",
            "10",
            "--config",
            dir.path().join("config.json").to_str().unwrap(),
        ]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.theme, ThemeName::HighContrast);
        assert_eq!(config.icons, IconPreference::Ascii);
        assert_eq!(config.reply_delay_ms, 10);
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::parse_from(["charla"]);
        assert_eq!(
            config_path(&cli),
            Path::new(CHARLA_DIR).join(CONFIG_FILE)
        );
    }
}
