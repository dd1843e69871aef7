use anyhow::{Context, Result};
use clap::Parser;
use gamehub::cli::{print_error, Cli, CliContext};
use gamehub::styles::{init_theme, ThemeType};
use gamehub::tui::Tui;
use gamehub::App;
use tokio::runtime::Runtime;
use tracing::info;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore the terminal before the message is printed
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn main() {
    if let Err(e) = run() {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if !cli.wants_tui() {
        return cli.execute();
    }

    setup_panic_hook();

    let log_dir = gamehub::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join("gamehub.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "gamehub.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Visible briefly before the alternate screen takes over
    eprintln!("Logs are being written to: {:?}", log_file);

    let ctx = CliContext::load(cli.config.as_deref())?;
    let no_colors = cli.no_colors || std::env::var_os("NO_COLOR").is_some();
    let theme_type = if no_colors {
        ThemeType::NoColor
    } else {
        ctx.config.theme.parse().unwrap_or_default()
    };
    init_theme(theme_type);
    info!(
        "Config loaded from {:?}, theme {}, keymap {}",
        ctx.config_path,
        theme_type.name(),
        ctx.config.keymap.preset.name()
    );

    let runtime = Runtime::new().context("Failed to create tokio runtime")?;
    let mut tui = Tui::new()?;
    let mut app = App::new(ctx.config, Some(ctx.config_path), runtime.handle().clone())
        .with_no_colors(no_colors);
    let result = app.run(&mut tui);

    drop(tui);
    drop(guard);
    result
}
