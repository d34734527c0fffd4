use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use kindraw::canvas::CanvasError;
use kindraw::config::Config;
use kindraw::export::save_png;
use kindraw::panel::{CommentForm, DrawPanel, PanelAction};
use kindraw::script::Session;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "kindraw")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("KINDRAW_GIT_HASH"), ")"),
    about = "Drawing canvas widget with replayable undo/redo history"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a recorded drawing session and upload the result as PNG
    Render {
        /// Session script (JSON list of input events and panel actions)
        #[arg(long, short = 's', value_name = "FILE")]
        script: PathBuf,

        /// Output file (defaults to the configured filename template)
        #[arg(long, short = 'o', value_name = "FILE")]
        out: Option<PathBuf>,

        /// Config file to use instead of ~/.config/kindraw/config.toml
        #[arg(long, short = 'c', value_name = "FILE")]
        config: Option<PathBuf>,

        /// Pixel density written into the PNG
        #[arg(long, value_name = "DPI", value_parser = clap::value_parser!(u32).range(1..=1200))]
        dpi: Option<u32>,
    },

    /// Write the default configuration file
    InitConfig {
        /// Where to write it (defaults to ~/.config/kindraw/config.toml)
        #[arg(long, short = 'c', value_name = "FILE")]
        config: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Comment form stand-in that writes uploads to disk.
struct FileForm {
    width: u32,
    out: Option<PathBuf>,
    saved: Option<PathBuf>,
}

impl CommentForm for FileForm {
    fn width(&self) -> Option<u32> {
        Some(self.width)
    }

    fn set_hidden(&mut self, hidden: bool) {
        log::debug!("Comment form {}", if hidden { "hidden" } else { "shown" });
    }

    fn attach(&mut self, filename: &str, png: &[u8]) -> Result<(), CanvasError> {
        let path = self
            .out
            .clone()
            .unwrap_or_else(|| PathBuf::from(filename));
        self.saved = Some(save_png(png, &path)?);
        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn render(script: &Path, out: Option<PathBuf>, config: Option<&Path>, dpi: Option<u32>) -> Result<()> {
    let mut config = load_config(config)?;
    if let Some(dpi) = dpi {
        config.export.dpi = dpi;
    }

    let session = Session::load(script)?;
    let form = FileForm {
        width: session.form_width,
        out,
        saved: None,
    };

    let mut panel = DrawPanel::open(form, &config).context("Failed to open drawing panel")?;
    let applied = session
        .play(&mut panel)
        .with_context(|| format!("Session {} failed", script.display()))?;
    log::info!("Applied {} session steps", applied);

    if panel.is_open() {
        panel
            .apply(&PanelAction::Upload)
            .context("Failed to upload drawing")?;
    }

    match panel.into_form().saved {
        Some(path) => println!("Saved drawing to {}", path.display()),
        None => println!("Drawing cancelled, nothing saved"),
    }
    Ok(())
}

fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => Config::get_config_path()?,
    };
    if target.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            target.display()
        );
    }

    let config = Config::default();
    match path {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    println!("Wrote default configuration to {}", target.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            script,
            out,
            config,
            dpi,
        } => render(&script, out, config.as_deref(), dpi),
        Command::InitConfig { config, force } => init_config(config.as_deref(), force),
    }
}
