//! prvbin: encrypted PrivateBin pastes from the command line
//!
//! Commands:
//!   create        - encrypt text, a file, or an editor session and upload it
//!   config show   - display the effective configuration
//!
//! The share link is the only thing written to stdout; logs go to stderr.

mod editor;
mod input;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use secrecy::SecretString;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use prvbin_core::config::{PrvbinConfig, DEFAULT_CONFIG_PATH};
use prvbin_core::{Expire, Formatter};
use prvbin_paste::{Client, ContentSource, PasteOptions};

// ── CLI structure ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "prvbin",
    version,
    about = "yet another PrivateBin CLI",
    long_about = "prvbin: encrypt pastes locally and upload them to a PrivateBin instance"
)]
struct Cli {
    /// Path to the prvbin configuration file
    #[arg(long, env = "PRVBIN_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// PrivateBin instance URL (overrides the config file)
    #[arg(long, short = 'u', env = "PRVBIN_URL")]
    url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PRVBIN_LOG")]
    log: Option<String>,

    /// Log format (json, text)
    #[arg(long, env = "PRVBIN_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new paste
    Create(CreateArgs),

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the active configuration (merged defaults + config file)
    Show,
}

#[derive(Args, Debug)]
struct CreateArgs {
    /// Text to upload
    #[arg(long, short = 't')]
    text: Option<String>,

    /// File to upload (ignored when --text is given)
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// Password to protect the paste
    #[arg(long, short = 'p', conflicts_with = "password_prompt")]
    password: Option<String>,

    /// Read the password from the terminal without echo
    #[arg(long, short = 'P')]
    password_prompt: bool,

    /// Expire time: 5min, 10min, 1hour, 1day, 1week, 1month, 1year, never
    #[arg(long, short = 'e')]
    expire: Option<Expire>,

    /// Use source code highlighting
    #[arg(long, short = 's')]
    sourcecode: bool,

    /// Use markdown formatting (wins over --sourcecode)
    #[arg(long, short = 'm')]
    markdown: bool,

    /// Burn after reading
    #[arg(long, short = 'b')]
    burn: bool,

    /// Allow discussion for the paste
    #[arg(long, short = 'd')]
    opendiscussion: bool,

    /// Attachment file
    #[arg(long, short = 'a')]
    attachment: Option<PathBuf>,

    /// Compress the paste before encryption (true/false)
    #[arg(long, short = 'c')]
    compress: Option<bool>,

    /// Also print the link that deletes the paste
    #[arg(long)]
    delete_link: bool,
}

#[derive(Clone, Debug, ValueEnum)]
enum LogFormat {
    Json,
    Text,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = PrvbinConfig::load(&cli.config)
        .with_context(|| format!("loading config: {}", cli.config.display()))?;

    let level = cli.log.clone().unwrap_or_else(|| config.log.level.clone());
    let format = cli.log_format.clone().unwrap_or_else(|| {
        if config.log.format.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    });
    init_logging(&level, &format);

    if let Some(url) = cli.url {
        config.server.url = url;
    }

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        server = %config.server.url,
        "prvbin starting"
    );

    match cli.command {
        Commands::Create(args) => cmd_create(&config, args).await,
        Commands::Config { action: ConfigAction::Show } => cmd_config_show(&config),
    }
}

fn init_logging(level: &str, format: &LogFormat) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

// ── `prvbin create` ───────────────────────────────────────────────────────────

/// Overlay the create flags on the configured defaults.
fn paste_options(config: &PrvbinConfig, args: &CreateArgs) -> Result<PasteOptions> {
    let mut opts = PasteOptions::from_config(config);

    opts.source = match (&args.text, &args.file) {
        (Some(text), _) => ContentSource::Text(text.clone()),
        (None, Some(file)) => ContentSource::File(file.clone()),
        (None, None) => ContentSource::Editor,
    };

    if args.markdown {
        opts.formatter = Formatter::Markdown;
    } else if args.sourcecode {
        opts.formatter = Formatter::SyntaxHighlighting;
    }

    if let Some(expire) = args.expire {
        opts.expire = expire;
    }
    if let Some(compress) = args.compress {
        opts.compress = compress;
    }
    opts.burn |= args.burn;
    opts.open_discussion |= args.opendiscussion;
    opts.attachment = args.attachment.clone();

    let password = if args.password_prompt {
        Some(rpassword::prompt_password("Password: ").context("reading password")?)
    } else {
        args.password.clone()
    };
    opts.password = password.filter(|p| !p.is_empty()).map(SecretString::from);

    Ok(opts)
}

async fn cmd_create(config: &PrvbinConfig, args: CreateArgs) -> Result<()> {
    let opts = paste_options(config, &args)?;

    let content = input::read_content(&opts.source)?;
    let attachment = opts
        .attachment
        .as_deref()
        .map(input::read_attachment)
        .transpose()?;

    let client = Client::new(opts.server_url.clone()).context("creating HTTP client")?;
    let paste = opts.into_paste(content, attachment)?;

    let spinner = std::io::stderr().is_terminal().then(|| make_spinner("upload"));
    let result = client.send(&paste).await;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }
    let sent = result.with_context(|| format!("uploading paste to {}", client.server_url()))?;

    println!("{}", sent.share_url());
    if args.delete_link {
        println!("{}", sent.delete_url());
    }
    Ok(())
}

fn make_spinner(prefix: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{prefix:.bold} {spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_prefix(prefix.to_string());
    pb.set_message("encrypting and sending...");
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

// ── `prvbin config show` ──────────────────────────────────────────────────────

fn cmd_config_show(config: &PrvbinConfig) -> Result<()> {
    print!("{}", config.to_toml().context("serializing config")?);
    Ok(())
}
