//! Command-line interface.
//!
//! With no subcommand the binary starts the TUI. The subcommands work on the
//! same catalog and launch simulator without opening a terminal UI.

mod common;
pub mod completions;

pub use common::{print_error, print_info, print_success, CliContext};

use crate::catalog::{self, Game, GameSource};
use crate::launch::LaunchSimulator;
use crate::state::SessionState;
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use indoc::indoc;
use std::fmt::Write as _;
use std::path::PathBuf;
use tokio::runtime::{Handle, Runtime};
use tracing::info;

const AFTER_HELP: &str = indoc! {"
    Keys in the TUI:
      1-4 / Tab     switch screens
      /             search the current library
      Enter         play the selected game
      e             end the stream
      q             quit

    Logs are written to the gamehub directory under your cache dir.
    Set RUST_LOG=debug for navigation details.
"};

/// Browse your Steam and local PC games and stream them from your gaming PC
#[derive(Parser, Debug)]
#[command(name = "gamehub", version, long_about = None, disable_help_subcommand = true, after_help = AFTER_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of ~/.config/gamehub/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List games in the libraries
    List {
        /// Only show one library
        #[arg(short, long, value_enum)]
        source: Option<SourceArg>,
        /// Only show games whose title contains this text (case-insensitive)
        #[arg(short = 'q', long)]
        search: Option<String>,
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
    /// Launch a game by title and wait until it is streaming
    Launch {
        /// Exact game title, case-insensitive (e.g. "Dota 2")
        title: String,
    },
    /// Print shell completions
    Completions {
        /// Shell to generate for; detected from $SHELL when omitted
        #[arg(value_enum)]
        shell: Option<Shell>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Steam,
    Local,
}

impl From<SourceArg> for GameSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Steam => GameSource::Steam,
            SourceArg::Local => GameSource::Local,
        }
    }
}

impl Cli {
    /// Whether the TUI should start instead of a subcommand.
    pub fn wants_tui(&self) -> bool {
        self.command.is_none()
    }

    /// Execute the subcommand. Does nothing without one.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::List {
                source,
                search,
                json,
            }) => {
                let output = list_output(source.map(Into::into), search.as_deref(), json)?;
                print!("{}", output);
                Ok(())
            }
            Some(Commands::Launch { title }) => {
                let ctx = CliContext::load(self.config.as_deref())?;
                cmd_launch(&ctx, &title)
            }
            Some(Commands::Completions { shell }) => completions::generate(shell),
            None => Ok(()),
        }
    }
}

/// Text printed by `gamehub list`.
pub fn list_output(source: Option<GameSource>, search: Option<&str>, json: bool) -> Result<String> {
    let sources = match source {
        Some(source) => vec![source],
        None => vec![GameSource::Steam, GameSource::Local],
    };
    let query = search.unwrap_or("");
    let groups: Vec<(GameSource, Vec<&Game>)> = sources
        .into_iter()
        .map(|source| (source, catalog::filter_games(query, catalog::games_for(source))))
        .collect();

    if json {
        let games: Vec<&Game> = groups.iter().flat_map(|(_, g)| g.iter().copied()).collect();
        let mut out = serde_json::to_string_pretty(&games).context("Failed to serialize games")?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for (source, games) in &groups {
        writeln!(out, "{} ({}):", source.library_name(), games.len())?;
        if games.is_empty() {
            writeln!(out, "  No games found or library is empty.")?;
        }
        for game in games {
            writeln!(out, "  {:<26} {:<10} {}", game.title, game.genre, game.detail_line())?;
        }
    }
    Ok(out)
}

fn cmd_launch(ctx: &CliContext, title: &str) -> Result<()> {
    let game = catalog::find_by_title(title).ok_or_else(|| {
        anyhow!(
            "No game titled '{}'. Run `gamehub list` to see the libraries.",
            title
        )
    })?;

    let mut session = SessionState::new();
    session.begin_launch(game.title);
    info!("CLI: launching {}", game.title);
    print_info(&format!(
        "Connecting to PC at {} to launch {}...",
        ctx.config.companion.address, game.title
    ));

    let runtime = Runtime::new().context("Failed to create tokio runtime")?;
    let delay = ctx.config.launch_delay();
    let event = runtime.block_on(async {
        let mut launcher = LaunchSimulator::new(Handle::current(), delay);
        launcher.start(game.title);
        launcher.next_event().await
    });

    let event = event.ok_or_else(|| anyhow!("Launch timer stopped before completing"))?;
    event.apply(&mut session);
    print_success(&format!("Successfully launched and streaming: {}", game.title));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_flags() {
        let cli = Cli::try_parse_from(["gamehub", "list", "--source", "local", "-q", "witch"])
            .unwrap();
        match cli.command {
            Some(Commands::List {
                source,
                search,
                json,
            }) => {
                assert_eq!(source, Some(SourceArg::Local));
                assert_eq!(search.as_deref(), Some("witch"));
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_starts_tui() {
        let cli = Cli::try_parse_from(["gamehub", "--no-colors"]).unwrap();
        assert!(cli.wants_tui());
        assert!(cli.no_colors);
    }

    #[test]
    fn test_list_output_filters() {
        let out = list_output(Some(GameSource::Local), Some("witch"), false).unwrap();
        assert!(out.contains("Local PC Games (1):"));
        assert!(out.contains("The Witcher 3 (Local)"));
        assert!(!out.contains("Hades"));
    }

    #[test]
    fn test_list_output_json() {
        let out = list_output(None, Some("dota"), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let games = value.as_array().unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0]["title"], "Dota 2");
        assert_eq!(games[0]["source"], "steam");
    }

    #[test]
    fn test_list_output_empty_library() {
        let out = list_output(Some(GameSource::Steam), Some("zzz"), false).unwrap();
        assert!(out.contains("Steam (0):"));
        assert!(out.contains("No games found"));
    }

    #[test]
    fn test_launch_unknown_title_fails() {
        let ctx = CliContext {
            config: crate::config::Config::default(),
            config_path: PathBuf::from("unused.toml"),
        };
        let err = cmd_launch(&ctx, "Half-Life 3").unwrap_err();
        assert!(err.to_string().contains("Half-Life 3"));
    }

    #[test]
    fn test_launch_known_title_completes() {
        let mut config = crate::config::Config::default();
        config.launch_delay_ms = 10;
        let ctx = CliContext {
            config,
            config_path: PathBuf::from("unused.toml"),
        };
        cmd_launch(&ctx, "terraria").unwrap();
    }
}
