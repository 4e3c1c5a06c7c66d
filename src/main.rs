use clap::Parser;
use shopster::CategoryArg;
use shopster::core::catalog::Catalog;
use shopster::core::config::{self, CliOverrides, StartupLog};
use shopster::core::state::App;
use shopster::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shopster", about = "Grocery list with category filtering")]
struct Args {
    /// Catalog file to load (TOML, or JSON with a .json extension)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Category to filter by on startup
    #[arg(long, value_enum)]
    category: Option<CategoryArg>,

    /// Start in dark mode (`--dark=false` forces light over the config file)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    dark: Option<bool>,

    /// Print the list to stdout and exit instead of opening the UI
    #[arg(long)]
    print: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // The logger's file and level come from config, so config messages are
    // held until it is installed
    let mut startup = StartupLog::default();
    let file_config = config::load_config(&mut startup)?;
    let overrides = CliOverrides {
        catalog_file: args.catalog,
        category: args.category.map(Into::into),
        dark_mode: args.dark,
    };
    let resolved = config::resolve(&file_config, &overrides, &mut startup);

    // Initialize file logger; the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Shopster starting up with config: {:?}", resolved);
    startup.replay();

    let catalog = match &resolved.catalog_file {
        Some(path) => Catalog::load(path)?,
        None => Catalog::demo(),
    };

    if args.print {
        let app = App::from_config(catalog, &resolved);
        print!("{}", app.view.to_plain_text());
        return Ok(());
    }

    tui::run(catalog, &resolved)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_flag_forms() {
        assert_eq!(Args::try_parse_from(["shopster"]).unwrap().dark, None);
        assert_eq!(Args::try_parse_from(["shopster", "--dark"]).unwrap().dark, Some(true));
        assert_eq!(
            Args::try_parse_from(["shopster", "--dark=false"]).unwrap().dark,
            Some(false)
        );
    }

    #[test]
    fn test_dark_flag_leaves_following_args_alone() {
        let args = Args::try_parse_from(["shopster", "--dark", "--category", "dairy"]).unwrap();
        assert_eq!(args.dark, Some(true));
        assert!(matches!(args.category, Some(CategoryArg::Dairy)));
    }
}
