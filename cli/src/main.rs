//! sheetview CLI - spreadsheet first-sheet viewer
//!
//! A command-line tool for rendering the first sheet of XLSX, XLS, XLSB and
//! ODS workbooks as an HTML table, a text table, or JSON.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use sheetview::render::{JsonFormat, RenderOptions};
use sheetview::{
    DisplayGrid, DisplayTarget, FilePicker, FileSelection, HtmlView, UploadController,
    UploadOutcome, ViewerOptions,
};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Render the first sheet of a workbook as an HTML table
#[derive(Parser)]
#[command(
    name = "sheetview",
    author = "iyulab",
    version,
    about = "Render the first sheet of a spreadsheet as an HTML table",
    long_about = "sheetview - spreadsheet first-sheet viewer.\n\n\
                  Decodes XLSX, XLS, XLSB and ODS workbooks, adds an AgeGroup column \
                  when an Age column is present, and renders the rows."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the viewer page for a file selection
    View {
        /// Selected files; only the first one is loaded
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page title
        #[arg(long)]
        title: Option<String>,

        /// Sample file link shown under the table
        #[arg(long, conflicts_with = "no_sample_link")]
        sample_link: Option<String>,

        /// Omit the sample file link
        #[arg(long)]
        no_sample_link: bool,

        /// Do not derive the AgeGroup column
        #[arg(long)]
        no_derive: bool,
    },

    /// Print the first sheet as an aligned text table
    #[command(visible_alias = "t")]
    Table {
        /// Input file path
        input: PathBuf,

        /// Do not derive the AgeGroup column
        #[arg(long)]
        no_derive: bool,
    },

    /// Convert the first sheet to JSON records
    Json {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,

        /// Do not derive the AgeGroup column
        #[arg(long)]
        no_derive: bool,
    },

    /// Show workbook information
    Info {
        /// Input file path
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Page display whose loading indicator is a terminal spinner.
struct SpinnerView {
    page: HtmlView,
    spinner: Option<ProgressBar>,
    loading_text: String,
}

impl SpinnerView {
    fn new(loading_text: &str) -> Self {
        Self {
            page: HtmlView::new(),
            spinner: None,
            loading_text: loading_text.to_string(),
        }
    }
}

impl DisplayTarget for SpinnerView {
    fn set_loading(&mut self, visible: bool) {
        self.page.set_loading(visible);
        match (visible, self.spinner.take()) {
            (true, None) => self.spinner = Some(create_spinner(&self.loading_text)),
            (true, Some(pb)) => self.spinner = Some(pb),
            (false, Some(pb)) => pb.finish_and_clear(),
            (false, None) => {}
        }
    }

    fn clear(&mut self) {
        self.page.clear();
    }

    fn show_table(&mut self, grid: &DisplayGrid) {
        self.page.show_table(grid);
    }

    fn show_error(&mut self, message: &str) {
        self.page.show_error(message);
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn viewer_options(no_derive: bool) -> ViewerOptions {
    ViewerOptions::new().with_derive(!no_derive)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::View {
            files,
            output,
            title,
            sample_link,
            no_sample_link,
            no_derive,
        } => {
            let mut render_options = RenderOptions::new();
            if let Some(title) = title {
                render_options = render_options.with_title(title);
            }
            if let Some(href) = sample_link {
                render_options = render_options.with_sample_link(href);
            }
            if no_sample_link {
                render_options = render_options.without_sample_link();
            }

            let picker = FilePicker::default();
            if let Some(first) = files.first() {
                if !picker.accepts(first) {
                    eprintln!(
                        "{} {} does not match {}",
                        "!".yellow().bold(),
                        first.display(),
                        picker.accept_attribute()
                    );
                }
            }

            let controller = UploadController::new(
                SpinnerView::new(&render_options.loading_text),
                viewer_options(no_derive),
            );
            let selection = FileSelection::from_paths(files);

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let outcome = runtime.block_on(controller.handle_selection(&selection));

            let view = controller.into_view();
            let page = sheetview::render::to_html_page(&view.page, &render_options);
            write_output(output.as_ref(), &page)?;

            match outcome {
                UploadOutcome::Failed(e) => return Err(e.into()),
                UploadOutcome::Rendered { rows, columns } => {
                    if let Some(path) = output {
                        println!(
                            "{} Rendered {} rows x {} columns: {}",
                            "✓".green().bold(),
                            rows,
                            columns,
                            path.display()
                        );
                    }
                }
                UploadOutcome::NoFile | UploadOutcome::Superseded => {}
            }
        }

        Commands::Table { input, no_derive } => {
            let pb = create_spinner("Loading data...");
            let records = sheetview::load_file(&input, &viewer_options(no_derive))?;
            let grid = DisplayGrid::from_records(&records);
            pb.finish_and_clear();

            write_output(None, &sheetview::render::to_text_table(&grid))?;
        }

        Commands::Json {
            input,
            output,
            compact,
            no_derive,
        } => {
            let pb = create_spinner("Loading data...");
            let records = sheetview::load_file(&input, &viewer_options(no_derive))?;
            pb.set_message("Rendering to JSON...");

            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = sheetview::render::to_json(&records, format)?;

            pb.finish_and_clear();
            write_output(output.as_ref(), &json)?;

            if let Some(path) = output {
                println!(
                    "{} Converted to JSON: {}",
                    "✓".green().bold(),
                    path.display()
                );
            }
        }

        Commands::Info { input } => {
            let pb = create_spinner("Analyzing workbook...");

            let data = sheetview::acquire::read_path(&input)?;
            let sheet = sheetview::decode_workbook(&data)?;

            pb.finish_and_clear();

            println!("{}", "Workbook Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            println!("{}: {}", "Format".bold(), sheet.summary.format);
            println!("{}: {}", "Sheets".bold(), sheet.summary.sheet_count);
            println!("{}: {}", "First sheet".bold(), sheet.summary.sheet_name);
            println!("{}: {}", "Rows".bold(), sheet.records.len());
            println!(
                "{}: {}",
                "Columns".bold(),
                sheet.records.column_names().join(", ")
            );
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "sheetview".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Spreadsheet first-sheet viewer");
    println!();
    println!("Supported formats: XLSX, XLSM, XLSB, XLS, ODS");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_view_requires_a_file() {
        assert!(Cli::try_parse_from(["sheetview", "view"]).is_err());
        assert!(Cli::try_parse_from(["sheetview", "view", "a.xlsx", "b.xlsx"]).is_ok());
    }

    #[test]
    fn test_spinner_view_tracks_loading() {
        let mut view = SpinnerView::new("Loading data...");
        view.set_loading(true);
        assert!(view.page.is_loading());
        assert!(view.spinner.is_some());
        view.set_loading(false);
        assert!(!view.page.is_loading());
        assert!(view.spinner.is_none());
    }
}
