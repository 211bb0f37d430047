use crate::application::{
    Config, DateSetApp, Notice, StorageBackend, Theme, WindowView, today_anchor,
};
use crate::domain::DateWindow;
use crate::infrastructure::{FileLogger, level_from_verbosity};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "edition-dates")]
#[command(about = "Calculate, save and export the dates around an edition's day 1")]
#[command(version)]
pub struct Cli {
    /// Directory holding saved date sets and the log file
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage backend for saved date sets
    #[arg(long, value_enum, global = true)]
    pub backend: Option<StorageBackend>,

    /// Log more to the log file (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the dates around day 1
    Calc {
        /// Day 1 (YYYY-MM-DD format, defaults to today)
        date: Option<String>,
    },
    /// Calculate the dates and save them
    Save {
        /// Day 1 (YYYY-MM-DD format, defaults to today)
        date: Option<String>,
    },
    /// List saved date sets, most recently saved first
    List,
    /// Print a saved date set
    Show {
        /// Saved date set id (its day 1 date)
        id: String,
    },
    /// Delete a saved date set
    Delete {
        /// Saved date set id (its day 1 date)
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Export the dates to a spreadsheet
    Export {
        /// Day 1 (YYYY-MM-DD format, defaults to today)
        date: Option<String>,
        /// Export a saved date set instead of calculating
        #[arg(long, conflicts_with = "date")]
        saved: Option<String>,
        /// Output file (defaults to the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Start the interactive view
    Tui {
        /// Day 1 to start with (YYYY-MM-DD format, defaults to today)
        date: Option<String>,
    },
}

fn anchor_or_today(date: Option<String>) -> String {
    date.unwrap_or_else(today_anchor)
}

fn init_logging(config: &Config, verbosity: u8) {
    let level = config
        .log_level
        .as_deref()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or_else(|| level_from_verbosity(verbosity));

    let result = FileLogger::open(&config.log_path(), level).and_then(FileLogger::install);
    if let Err(e) = result {
        eprintln!("Warning: logging disabled: {e:#}");
    }
}

/// Print the window as an aligned table, day 1 in bold.
pub fn print_window(out: &mut impl Write, window: &DateWindow, theme: &Theme) -> io::Result<()> {
    let header = format!("{:<8} {:<12} {}", "Day", "Date", "Weekday");
    writeln!(out, "{}", theme.colors.header.colorize_bold(&header))?;

    for entry in window.entries() {
        let line = format!(
            "{:<8} {:<12} {}",
            entry.day_label(),
            entry.formatted_date(),
            entry.weekday_name()
        );
        let line = if entry.is_day_one() {
            theme.colors.day_one.colorize_bold(&line)
        } else if entry.is_before_start() {
            theme.colors.before_start.colorize(&line)
        } else {
            line
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn print_notice(out: &mut impl Write, notice: &Notice, theme: &Theme) -> io::Result<()> {
    let text = notice.to_string();
    writeln!(out, "{}", theme.colors.notice(notice.severity).colorize(&text))
}

fn confirm(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> io::Result<bool> {
    write!(out, "{prompt} [y/N] ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

impl Cli {
    pub fn run() -> anyhow::Result<()> {
        let cli = Self::parse();
        let config = Config::from_env().with_overrides(cli.data_dir.clone(), cli.backend);
        init_logging(&config, cli.verbose);

        let app = DateSetApp::new(&config)?;
        let theme = Theme::by_name(&config.theme);

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        cli.execute(&app, &theme, &mut stdin.lock(), &mut stdout)
    }

    pub fn execute(
        self,
        app: &DateSetApp,
        theme: &Theme,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        match self.command.unwrap_or(Commands::Tui { date: None }) {
            Commands::Calc { date } => {
                let window = app.calculate(&anchor_or_today(date))?;
                print_window(out, &window, theme)?;
            }
            Commands::Save { date } => {
                let window = app.calculate(&anchor_or_today(date))?;
                let notice = app.save(Some(&window))?;
                print_notice(out, &notice, theme)?;
            }
            Commands::List => {
                let sets = app.saved_sets()?;
                if sets.is_empty() {
                    writeln!(out, "No saved date sets")?;
                }
                for set in sets {
                    writeln!(out, "{:<12} {}", set.id, set.display_label())?;
                }
            }
            Commands::Show { id } => {
                let (window, notice) = app.load(Some(&id))?;
                print_window(out, &window, theme)?;
                print_notice(out, &notice, theme)?;
            }
            Commands::Delete { id, yes } => {
                if !app.saved_sets()?.iter().any(|set| set.id == id) {
                    writeln!(out, "No saved date set `{id}`")?;
                    return Ok(());
                }

                let prompt = format!("Delete saved date set `{id}`?");
                if !yes && !confirm(input, out, &prompt)? {
                    writeln!(out, "Cancelled")?;
                    return Ok(());
                }

                let notice = app.delete(Some(&id))?;
                print_notice(out, &notice, theme)?;
            }
            Commands::Export {
                date,
                saved,
                output,
            } => {
                let window = match saved {
                    Some(id) => app.load(Some(&id))?.0,
                    None => app.calculate(&anchor_or_today(date))?,
                };
                let (path, notice) = app.export(Some(&window), output.as_deref())?;
                print_notice(out, &notice, theme)?;
                writeln!(out, "{}", path.display())?;
            }
            Commands::Tui { date } => {
                let mut view = WindowView::new(anchor_or_today(date), app, theme.clone())?;
                view.run()?;
            }
        }
        Ok(())
    }
}
