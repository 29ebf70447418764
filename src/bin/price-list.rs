//! Price list CLI tool
//!
//! A command-line tool for turning a JSON price catalog into a printable price list.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use price_list::catalog::{load_catalog, sample_catalog};
use price_list::config::{Config, PaginationConfig};
use price_list::pipeline::{generate, InputChange, PriceList};
use price_list::present::{HtmlOptions, HtmlPresenter};
use price_list::theme::{preset_names, resolve_shades};

/// Catalog read when no input file is given
const DEFAULT_CATALOG: &str = "BackUpFactoryPricingList.json";

/// Price List - Paginate a price catalog into print-ready pages
#[derive(Parser)]
#[command(name = "price-list")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Build a price list with the default theme
    price-list build prices.json -o price-list.html

    # Fit more rows per page and use a custom primary colour
    price-list build prices.json -o out.html --first-page-capacity 20 --page-capacity 22 --primary \"#1b365d\"

    # Show how the catalog would be split into pages
    price-list check prices.json

    # Without an input file, BackUpFactoryPricingList.json is used
    price-list build -o price-list.html

    # Write a small example catalog to start from
    price-list sample -o prices.json")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by commands that paginate
#[derive(Args)]
struct PaginationArgs {
    /// JSON config file (pagination, layout, document, company, theme)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rows on the first page, which also carries the title
    #[arg(long)]
    first_page_capacity: Option<usize>,

    /// Rows on every page after the first
    #[arg(long)]
    page_capacity: Option<usize>,
}

impl PaginationArgs {
    /// Config file (or defaults) with command-line overrides applied
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        let mut pagination = config.effective_pagination();
        if let Some(first) = self.first_page_capacity {
            pagination.first_page_capacity = first;
        }
        if let Some(regular) = self.page_capacity {
            pagination.regular_page_capacity = regular;
        }
        config.pagination = pagination;
        config.layout = None;

        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the HTML price list
    Build {
        /// Catalog JSON file: brand name → [{ "name", "price" }]
        #[arg(default_value = DEFAULT_CATALOG)]
        input: PathBuf,

        /// Output HTML file path
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        pagination: PaginationArgs,

        /// Title text (displayed centered on the first page)
        #[arg(long)]
        title: Option<String>,

        /// Valid-from date for the footer (e.g., "today", "2025-03", "March 2025")
        #[arg(long)]
        valid_from: Option<String>,

        /// Primary colour: preset name or #rrggbb
        #[arg(long)]
        primary: Option<String>,

        /// Secondary colour: preset name or #rrggbb
        #[arg(long)]
        secondary: Option<String>,

        /// Open the output file after creation
        #[arg(long)]
        open: bool,
    },

    /// Validate a catalog and show its page breakdown
    Check {
        /// Catalog JSON file
        #[arg(default_value = DEFAULT_CATALOG)]
        input: PathBuf,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Write a sample catalog
    Sample {
        /// Output JSON file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show the light and dark shades derived from a colour
    Shades {
        /// Preset name or #rrggbb
        color: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            input, output, pagination, title, valid_from, primary, secondary, open,
        } => {
            cmd_build(input, output, pagination, title, valid_from, primary, secondary, open)
        }
        Commands::Check { input, pagination } => {
            cmd_check(input, pagination)
        }
        Commands::Sample { output } => {
            cmd_sample(output)
        }
        Commands::Shades { color } => {
            cmd_shades(&color)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Open a file with the system default application
fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()?;
    }
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.display().to_string()])
            .spawn()?;
    }
    Ok(())
}

/// Catalogs must be .json files
fn check_json_extension(path: &Path) -> Result<()> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if !is_json {
        bail!("Please provide a .json file: {}", path.display());
    }
    Ok(())
}

/// Generate the HTML price list
#[allow(clippy::too_many_arguments)]
fn cmd_build(
    input: PathBuf,
    output: PathBuf,
    pagination: PaginationArgs,
    title: Option<String>,
    valid_from: Option<String>,
    primary: Option<String>,
    secondary: Option<String>,
    open: bool,
) -> Result<()> {
    check_json_extension(&input)?;

    let mut config = pagination.load_config()?;
    if let Some(title) = title {
        config.document.title = title;
    }
    if let Some(valid_from) = valid_from {
        config.document.valid_from = valid_from;
    }
    if let Some(primary) = primary {
        config.theme.primary = primary;
    }
    if let Some(secondary) = secondary {
        config.theme.secondary = secondary;
    }

    let options = HtmlOptions::from_config(&config)?;
    let catalog = load_catalog(&input)
        .with_context(|| format!("Failed to load catalog {}", input.display()))?;

    let mut price_list = PriceList::new(config.pagination, HtmlPresenter::new(options));
    price_list.on_input_changed(InputChange::Catalog(catalog))?;
    price_list.presenter().save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    eprintln!("Output: {}", output.display());

    if open {
        open_file(&output)?;
    }

    Ok(())
}

/// Validate a catalog and print one line per page
fn cmd_check(input: PathBuf, pagination: PaginationArgs) -> Result<()> {
    check_json_extension(&input)?;

    let config = pagination.load_config()?;
    let catalog = load_catalog(&input)
        .with_context(|| format!("Failed to load catalog {}", input.display()))?;
    let pages = generate(&catalog, &config.pagination)?;

    let PaginationConfig { first_page_capacity, regular_page_capacity } = config.pagination;
    println!("File: {}", input.display());
    println!("Brands: {}", catalog.brands().len());
    println!("Items: {}", catalog.item_count());
    println!("Capacity: {} (first page), {} (other pages)", first_page_capacity, regular_page_capacity);
    println!("Pages: {}", pages.len());

    for page in &pages {
        let brands: Vec<&str> = page.brand_sections.iter().map(|s| s.brand.as_str()).collect();
        match page.end_serial() {
            Some(end) => println!(
                "  Page {}: {} ({} items, S.No. {}-{})",
                page.page_number,
                brands.join(", "),
                page.row_count(),
                page.start_serial,
                end
            ),
            None => println!("  Page {}: empty", page.page_number),
        }
    }

    Ok(())
}

/// Write the built-in sample catalog
fn cmd_sample(output: PathBuf) -> Result<()> {
    let json = serde_json::to_string_pretty(&sample_catalog().to_json()?)?;
    std::fs::write(&output, json)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    eprintln!("Sample catalog: {}", output.display());

    Ok(())
}

/// Print the shades for a colour
fn cmd_shades(color: &str) -> Result<()> {
    let shades = resolve_shades(color).with_context(|| {
        format!("Expected #rrggbb or one of: {}", preset_names().collect::<Vec<_>>().join(", "))
    })?;

    println!("main:  {}", shades.main);
    println!("light: {}", shades.light);
    println!("dark:  {}", shades.dark);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_extension() {
        assert!(check_json_extension(Path::new("prices.json")).is_ok());
        assert!(check_json_extension(Path::new("dir/Prices.JSON")).is_ok());
        assert!(check_json_extension(Path::new("prices.csv")).is_err());
        assert!(check_json_extension(Path::new("prices")).is_err());
        assert!(check_json_extension(Path::new("json")).is_err());
    }

    #[test]
    fn test_input_defaults_to_pricing_list() {
        let cli = Cli::try_parse_from(["price-list", "check"]).unwrap();
        match cli.command {
            Commands::Check { input, .. } => assert_eq!(input, PathBuf::from(DEFAULT_CATALOG)),
            _ => panic!("Expected Check"),
        }

        let cli = Cli::try_parse_from(["price-list", "build", "-o", "out.html"]).unwrap();
        match cli.command {
            Commands::Build { input, output, .. } => {
                assert_eq!(input, PathBuf::from(DEFAULT_CATALOG));
                assert_eq!(output, PathBuf::from("out.html"));
            }
            _ => panic!("Expected Build"),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["price-list", "check", "a.json", "--page-capacity", "20"]).unwrap();
        match cli.command {
            Commands::Check { pagination, .. } => {
                let config = pagination.load_config().unwrap();
                assert_eq!(config.pagination.first_page_capacity, 15);
                assert_eq!(config.pagination.regular_page_capacity, 20);
            }
            _ => panic!("Expected Check"),
        }
    }
}
