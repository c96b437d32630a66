use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;

use theminator::core::telemetry::logging::init_logging;
use theminator::services::catppuccin::{self, Flavour};
use theminator::services::codec::{decode_theme, encode_palette, encode_theme};
use theminator::services::toolkit::ToolkitRegistry;
use theminator::{ColorGroup, Theme};

#[derive(Parser)]
#[command(
    name = "theminator",
    about = "Palette and theme tooling for toolkit color configuration"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate builtin Catppuccin theme files.
    Generate {
        /// Flavour to generate (latte, frappe, macchiato, mocha).
        flavour: Option<Flavour>,
        /// Generate every flavour.
        #[arg(long)]
        all: bool,
        /// Output directory.
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Write a flavour's palette as JSON.
    Palette {
        flavour: Flavour,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Write a blank theme with every slot fully transparent.
    Blank {
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Decode a theme file and print a summary.
    Show { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            flavour,
            all,
            out_dir,
        } => generate(flavour, all, &out_dir),
        Command::Palette { flavour, out } => {
            let bytes = encode_palette(&catppuccin::palette(flavour))?;
            write_output(&bytes, out.as_deref())
        }
        Command::Blank { out } => {
            let bytes = encode_theme(&Theme::blank())?;
            write_output(&bytes, out.as_deref())
        }
        Command::Show { path } => show(&path),
    }
}

fn generate(flavour: Option<Flavour>, all: bool, out_dir: &std::path::Path) -> anyhow::Result<()> {
    let flavours: Vec<Flavour> = if all {
        Flavour::ALL.to_vec()
    } else {
        match flavour {
            Some(flavour) => vec![flavour],
            None => bail!("pass a flavour or --all"),
        }
    };
    for flavour in flavours {
        let theme = catppuccin::theme(flavour)?;
        let path = out_dir.join(format!("catppuccin_{flavour}.json"));
        fs::write(&path, encode_theme(&theme)?)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote theme");
    }
    Ok(())
}

fn show(path: &std::path::Path) -> anyhow::Result<()> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let theme = decode_theme(&bytes)?;
    println!("{}", path.display());
    println!("  components: {}", theme.components.len());
    for (i, component) in theme.components.iter().enumerate() {
        println!("  component {i} (target {}):", component.component);
        for group in component.groups() {
            println!(
                "    {:<6} {}/{} slots set",
                group.category().as_str(),
                group.set_count(),
                group.slot_names().len()
            );
        }
    }
    let config = theme.emit(ToolkitRegistry::builtin());
    println!("  directives: {}", config.directive_count());
    println!("  colormaps: {}", theme.colormaps.len());
    Ok(())
}

fn write_output(bytes: &[u8], out: Option<&std::path::Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote file");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
