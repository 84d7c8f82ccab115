use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use swatch_core::color::BLACK;
use swatch_core::command::{ApplyStatus, try_apply_line};
use swatch_core::export::{default_file_name, export_png};
use swatch_core::settings::DEFAULT_SETTINGS_FILE;
use swatch_core::{PaletteType, Session, Settings, Theme, contrast_text, sanitize_hex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Derive a palette of related colors from one base color
#[derive(Parser, Debug)]
#[command(name = "swatch", version, about, long_about = None)]
struct Cli {
    /// Settings file that supplies defaults (and that `save` writes)
    #[arg(short, long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the palette, one color per line
    Generate {
        #[command(flatten)]
        palette: PaletteArgs,

        /// Print uppercase labels instead of canonical lowercase hex
        #[arg(long)]
        upper: bool,
    },
    /// Write the palette as a PNG swatch grid
    Export {
        #[command(flatten)]
        palette: PaletteArgs,

        /// light or dark background
        #[arg(long)]
        theme: Option<Theme>,

        /// Output file (defaults to "<type>-palette.png")
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Interactive session (the default)
    Repl,
}

#[derive(Args, Debug)]
struct PaletteArgs {
    /// Base color, e.g. "#6366F1"
    base: Option<String>,

    /// Number of colors (3..=50)
    #[arg(short, long)]
    count: Option<usize>,

    /// monochromatic, shades, tints or tones
    #[arg(short = 't', long = "type")]
    palette_type: Option<PaletteType>,
}

impl PaletteArgs {
    fn apply(&self, settings: &mut Settings) {
        if let Some(base) = &self.base {
            settings.base = base.clone();
        }
        if let Some(count) = self.count {
            settings.count = count;
        }
        if let Some(t) = self.palette_type {
            settings.palette_type = t;
        }
    }
}

fn help_text() -> &'static str {
    r##"Commands:
            <quick entry>      any of: <#hex> <count> <type>, e.g. "#e11d48 12 tints"
            show               print the current palette
            base <hex>         set the base color
            size <3..50>       set the palette size
            type <name>        monochromatic | shades | tints | tones
            random             pick a random base color
            theme [light|dark] toggle or set the export theme
            export [file.png]  write the swatch grid
            save               write settings to the settings file
            help
            quit
            "##
}

fn print_help() {
    println!("{}", help_text());
}

fn print_palette(session: &Session) {
    let palette = session.palette();
    println!(
        "{} | base {} | {} colors | theme {}",
        palette.title(),
        session.base(),
        palette.len(),
        session.theme()
    );

    let base_at = palette.base_position();
    for (i, color) in palette.colors().iter().enumerate() {
        let hsl = color.to_hsl();
        let text = if contrast_text(*color) == BLACK { "dark" } else { "light" };
        println!(
            "  {:>2} | {} | rgb({:>3},{:>3},{:>3}) | l={:.3} | {:<5} text{}",
            i,
            color,
            color.r,
            color.g,
            color.b,
            hsl.l,
            text,
            if i == base_at { "  <- base" } else { "" }
        );
    }
}

fn export(session: &Session, out: Option<&Path>) -> anyhow::Result<()> {
    let path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default_file_name(session.palette_type())));
    export_png(session.palette(), session.theme(), &path)
        .with_context(|| format!("export palette to {}", path.display()))?;
    println!("Exported: {}", path.display());
    Ok(())
}

fn save(session: &Session, settings_path: &Path) -> anyhow::Result<()> {
    session.settings().save_json_file(settings_path)?;
    println!("Saved settings: {}", settings_path.display());
    Ok(())
}

fn repl(session: &mut Session, settings_path: &Path) -> anyhow::Result<()> {
    let mut rng = rand::rng();

    println!("Type 'help' for commands. 'quit' to exit.");
    print_palette(session);

    loop {
        print!("sw> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // EOF (Ctrl+D)
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match try_apply_line(line, session) {
            ApplyStatus::Applied => {
                print_palette(session);
                continue;
            }
            ApplyStatus::Incomplete => {
                println!("(incomplete color, expected six hex digits)");
                continue;
            }
            ApplyStatus::NotQuickEntry => {
                // fall through to named commands
            }
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "help" => print_help(),
            "quit" | "exit" => break,

            "show" | "list" => print_palette(session),

            "base" | "color" => {
                if parts.len() < 2 {
                    println!("Usage: base <hex>");
                    continue;
                }
                let cleaned = sanitize_hex(&parts[1..].join(""));
                match session.set_base(&cleaned) {
                    Ok(()) => print_palette(session),
                    Err(e) => println!("Error: {e}"),
                }
            }

            "size" | "count" => {
                let Some(n) = parts.get(1).and_then(|s| s.parse::<usize>().ok()) else {
                    println!("Usage: size <3..50>");
                    continue;
                };
                let used = session.set_count(n);
                if used != n {
                    println!("(clamped to {used})");
                }
                print_palette(session);
            }

            "type" => match parts.get(1).map(|s| s.parse::<PaletteType>()) {
                Some(Ok(t)) => {
                    session.set_palette_type(t);
                    print_palette(session);
                }
                Some(Err(e)) => println!("Error: {e}"),
                None => println!("Usage: type monochromatic|shades|tints|tones"),
            },

            "random" => {
                let picked = session.randomize(&mut rng);
                println!("Random base: {picked}");
                print_palette(session);
            }

            "theme" => match parts.get(1).map(|s| s.parse::<Theme>()) {
                Some(Ok(theme)) => {
                    session.set_theme(theme);
                    println!("Theme: {theme}");
                }
                Some(Err(e)) => println!("Error: {e}"),
                None => println!("Theme: {}", session.toggle_theme()),
            },

            "export" => {
                if let Err(e) = export(session, parts.get(1).map(|p| Path::new(*p))) {
                    println!("Error: {e:#}");
                }
            }

            "save" => {
                if let Err(e) = save(session, settings_path) {
                    println!("Error: {e:#}");
                }
            }

            _ => println!("Unknown command '{cmd}'. Type 'help'."),
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::load_or_default(&cli.settings)?;
    tracing::debug!(?settings, path = %cli.settings.display(), "settings loaded");

    match cli.command.unwrap_or(Command::Repl) {
        Command::Generate { palette, upper } => {
            palette.apply(&mut settings);
            let session = Session::new(settings).context("invalid palette arguments")?;
            let colors = if upper {
                session.palette().labels()
            } else {
                session.palette().hex_strings()
            };
            for c in colors {
                println!("{c}");
            }
        }
        Command::Export {
            palette,
            theme,
            out,
        } => {
            palette.apply(&mut settings);
            if let Some(theme) = theme {
                settings.theme = theme;
            }
            let session = Session::new(settings).context("invalid palette arguments")?;
            export(&session, out.as_deref())?;
        }
        Command::Repl => {
            let mut session = Session::new(settings)
                .with_context(|| format!("bad base color in {}", cli.settings.display()))?;
            repl(&mut session, &cli.settings)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_args_override_settings() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["swatch", "generate", "#ff0000", "-c", "4", "-t", "shades"])?;
        let Some(Command::Generate { palette, upper }) = cli.command else {
            anyhow::bail!("expected generate");
        };
        assert!(!upper);

        let mut settings = Settings::default();
        palette.apply(&mut settings);
        let session = Session::new(settings)?;
        assert_eq!(
            session.palette().hex_strings(),
            ["#ff0000", "#bf0000", "#800000", "#400000"]
        );
        Ok(())
    }

    #[test]
    fn export_parses_theme_and_rejects_unknown_type() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["swatch", "export", "--theme", "dark", "-o", "x.png"])?;
        let Some(Command::Export { theme, out, .. }) = cli.command else {
            anyhow::bail!("expected export");
        };
        assert_eq!(theme, Some(Theme::Dark));
        assert_eq!(out, Some(PathBuf::from("x.png")));

        assert!(Cli::try_parse_from(["swatch", "generate", "-t", "pastel"]).is_err());
        Ok(())
    }

    #[test]
    fn help_lists_every_named_command() {
        let help = help_text();
        assert!(help.contains(r##""#e11d48 12 tints""##));
        for cmd in ["show", "base", "size", "type", "random", "theme", "export", "save", "quit"] {
            assert!(help.contains(cmd), "help is missing {cmd}");
        }
        print_help();
    }

    #[test]
    fn failed_save_reports_instead_of_exiting() -> anyhow::Result<()> {
        let session = Session::new(Settings::default())?;
        let dir = std::env::temp_dir().join(format!("swatch-cli-{}-missing", std::process::id()));
        let err = save(&session, &dir.join("nested").join("swatch.json"));
        assert!(err.is_err());

        let path = std::env::temp_dir().join(format!("swatch-cli-{}.json", std::process::id()));
        save(&session, &path)?;
        assert_eq!(Settings::load_json_file(&path)?.base, session.settings().base);
        std::fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn no_subcommand_means_repl() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["swatch", "--settings", "other.json"])?;
        assert!(cli.command.is_none());
        assert_eq!(cli.settings, PathBuf::from("other.json"));
        Ok(())
    }
}
