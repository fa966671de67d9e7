use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::path::PathBuf;
use treexp::config::Config;
use treexp::ui::{input, render, App};
use treexp::utils::{format_json, format_tree};
use treexp::{logging, ExplorerError, Result};

#[derive(Debug, Parser)]
#[command(name = "treexp", about = "In-memory folder and file explorer")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the initial tree and exit
    #[arg(long)]
    dump: bool,

    /// With --dump, print JSON instead of an outline
    #[arg(long, requires = "dump")]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    if cli.dump {
        logging::init_stderr(&config)?;
        let tree = config.seed_tree();
        let out = if cli.json { format_json(&tree)? } else { format_tree(&tree, config.show_extensions) };
        print!("{}", out);
        return Ok(());
    }

    logging::init_file(&config)?;
    tracing::info!(scope = ?config.duplicate_scope, "starting explorer");
    run_tui(App::from_config(&config))
}

fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let result = execute!(std::io::stdout(), EnterAlternateScreen)
        .map_err(ExplorerError::from)
        .and_then(|_| event_loop(&mut app));
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    result
}

fn event_loop(app: &mut App) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    terminal.clear()?;

    while !app.should_quit {
        terminal.draw(|f| render::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if let Some(action) = input::map_key(app.mode, key) {
                app.update(action);
            }
        }
    }

    Ok(())
}
