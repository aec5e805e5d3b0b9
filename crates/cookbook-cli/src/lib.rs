use clap::{Parser, Subcommand};
use cookbook_core::{
    Catalog, CategoryFilter, MemoryHandoff, Query, filter, filter_by_category,
};
use cookbook_web::{CONFIG_FILE_NAME, Layout, PageRuntime, SiteConfig, UiEvent};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "cookbook", about = "Render and search the cookbook site")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Render a page to HTML
    Render {
        #[command(subcommand)]
        page: RenderPage,
    },

    /// Print the names of popular recipes matching TERM
    Search {
        term: String,

        /// Catalog JSON file
        #[arg(long)]
        data: PathBuf,

        /// Restrict to a category id
        #[arg(long)]
        category: Option<u32>,
    },
}

#[derive(Debug, Subcommand)]
enum RenderPage {
    /// Home page with featured, categories and popular recipes
    Home {
        #[arg(long)]
        data: PathBuf,

        /// Site config; defaults to site.json next to the data file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Search term applied after the page is ready
        #[arg(long)]
        search: Option<String>,

        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Recipe detail page
    Recipe {
        #[arg(long)]
        data: PathBuf,

        #[arg(long)]
        id: Option<u32>,

        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        out: Option<PathBuf>,
    },
}

pub async fn run_from_env() -> Result<(), String> {
    run_from_args(env::args().collect()).await
}

/// `args` includes the program name, as `env::args()` does.
pub async fn run_from_args(args: Vec<String>) -> Result<(), String> {
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match cli.command {
        CliCommand::Render { page } => {
            let (html, out) = match page {
                RenderPage::Home {
                    data,
                    config,
                    search,
                    out,
                } => (
                    render_home(&data, config.as_deref(), search).await?,
                    out,
                ),
                RenderPage::Recipe {
                    data,
                    id,
                    config,
                    out,
                } => (render_recipe(&data, config.as_deref(), id)?, out),
            };
            write_output(&html, out.as_deref())
        }
        CliCommand::Search {
            term,
            data,
            category,
        } => {
            for name in search_names(&data, &term, category)? {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn load_catalog(path: &Path) -> Result<Arc<Catalog>, String> {
    Catalog::load(path)
        .map(Arc::new)
        .map_err(|e| e.to_string())
}

fn load_site_config(data: &Path, explicit: Option<&Path>) -> Result<SiteConfig, String> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(format!("config file not found: {}", path.display()));
            }
            path.to_path_buf()
        }
        None => data
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME),
    };
    SiteConfig::load_or_default(&path).map_err(|e| e.to_string())
}

async fn render_home(
    data: &Path,
    config: Option<&Path>,
    search: Option<String>,
) -> Result<String, String> {
    let catalog = load_catalog(data)?;
    let config = load_site_config(data, config)?;
    let mut runtime = PageRuntime::new(
        Layout::home(),
        catalog,
        config,
        Box::new(MemoryHandoff::new()),
    );
    runtime.init_home(Instant::now());

    if let Some(term) = search {
        let (tx, rx) = mpsc::unbounded_channel();
        let events = [
            UiEvent::SearchInput { value: term },
            UiEvent::SearchKey {
                key: "Enter".to_string(),
            },
        ];
        for event in events {
            tx.send(event)
                .map_err(|_| "page event loop stopped".to_string())?;
        }
        drop(tx);
        runtime = runtime.run(rx).await;
    }

    runtime.drain();
    Ok(runtime.document().render())
}

fn render_recipe(data: &Path, config: Option<&Path>, id: Option<u32>) -> Result<String, String> {
    let catalog = load_catalog(data)?;
    let config = load_site_config(data, config)?;
    let mut runtime = PageRuntime::new(
        Layout::recipe(),
        catalog,
        config,
        Box::new(MemoryHandoff::new()),
    );

    let query = id
        .map(|id| Query::parse(&format!("?id={id}")))
        .unwrap_or_default();
    runtime.init_detail(&query, Instant::now());
    runtime.drain();
    Ok(runtime.document().render())
}

fn search_names(data: &Path, term: &str, category: Option<u32>) -> Result<Vec<String>, String> {
    let catalog = load_catalog(data)?;
    let selected = category.map_or(CategoryFilter::All, CategoryFilter::Id);
    let popular = catalog.popular();
    let scoped = filter_by_category(selected, &catalog.categories, &popular);
    Ok(filter(term, &scoped)
        .into_iter()
        .map(|recipe| recipe.name.clone())
        .collect())
}

fn write_output(html: &str, out: Option<&Path>) -> Result<(), String> {
    match out {
        Some(path) => {
            fs::write(path, html).map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = html.len(), "page written");
            Ok(())
        }
        None => {
            println!("{html}");
            Ok(())
        }
    }
}
