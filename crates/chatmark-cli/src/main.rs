use anyhow::{Context, Result, bail};
use chatmark_config::Config;
use chatmark_engine::{FormatOptions, MessageFormatter, io, to_html, to_plain_text};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{Read, stdout},
    path::{Path, PathBuf},
    process,
};

mod browser;
mod tui_render;

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(about = "Format chat messages into headers, bullets and links")]
struct Cli {
    /// Config file (defaults to ~/.config/chatmark/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a config file with default formatting options
    Init {
        /// Directory holding message files
        messages_dir: PathBuf,

        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Format one message and print it
    Render {
        /// Message file, or `-` for stdin
        input: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Styling class passed through to the HTML wrapper
        #[arg(long)]
        class: Option<String>,
    },
    /// Browse a directory of messages in the terminal
    Browse {
        /// Messages directory (defaults to `messages_path` from the config file)
        dir: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Html,
    Text,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;

    match cli.command {
        Command::Init {
            messages_dir,
            force,
        } => {
            let target = config_path.unwrap_or_else(Config::config_path);
            init(&target, &messages_dir, force)
        }
        Command::Render {
            input,
            format,
            class,
        } => {
            let config = load_config(config_path.as_deref())?;
            render(&input, format, class.as_deref(), format_options(config.as_ref()))
        }
        Command::Browse { dir } => {
            let config = load_config(config_path.as_deref())?;
            let options = format_options(config.as_ref());
            let messages_path = match (dir, config) {
                (Some(dir), _) => dir,
                (None, Some(config)) => config.messages_path,
                (None, None) => bail!(
                    "no messages directory given and no config file found at {} (run `chatmark init <DIR>`)",
                    config_path.unwrap_or_else(Config::config_path).display()
                ),
            };
            browse(messages_path, options)
        }
    }
}

fn format_options(config: Option<&Config>) -> FormatOptions {
    config.map(|c| c.format.clone()).unwrap_or_default()
}

fn init(target: &Path, messages_dir: &Path, force: bool) -> Result<()> {
    if target.exists() && !force {
        bail!(
            "config file {} already exists (use --force to replace it)",
            target.display()
        );
    }
    Config::new(messages_dir.to_path_buf())
        .save_to_path(target)
        .with_context(|| format!("writing {}", target.display()))?;
    info!("wrote {}", target.display());
    println!("Wrote {}", target.display());
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file {} does not exist", path.display()))
            .map(Some)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn render(
    input: &Path,
    format: OutputFormat,
    class: Option<&str>,
    options: FormatOptions,
) -> Result<()> {
    let text = if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading message from stdin")?;
        text
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("reading {}", input.display()))?
    };

    let message = MessageFormatter::new(options).format(&text, class);
    info!("formatted {} blocks", message.blocks.len());

    match format {
        OutputFormat::Html => println!("{}", to_html(&message)),
        OutputFormat::Text => println!("{}", to_plain_text(&message)),
    }
    Ok(())
}

fn browse(messages_path: PathBuf, options: FormatOptions) -> Result<()> {
    io::validate_messages_dir(&messages_path)
        .with_context(|| format!("messages path '{}'", messages_path.display()))?;

    let mut app = browser::App::new(messages_path, MessageFormatter::new(options))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = browser::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
