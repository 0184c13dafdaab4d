use crate::cli::{Cli, Commands};
use faqdash::catalog::{self, Catalog};
use faqdash::{config, ui};
use std::path::PathBuf;
use std::process;

fn load_catalog(cli_path: Option<&PathBuf>, config: &config::Config) -> Catalog {
    // Priority: CLI flag > config > built-in dataset
    let path = cli_path.or(config.catalog.path.as_ref());

    match path {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Error loading catalog: {:#}", e);
                process::exit(1);
            }
        },
        None => catalog::builtin_catalog(),
    }
}

pub fn run(cli: Cli) {
    let config = config::Config::load().unwrap_or_default();

    // Handle subcommands first
    if let Some(command) = cli.command {
        let catalog = load_catalog(cli.catalog.as_ref(), &config);
        match command {
            Commands::Categories => handle_categories(&catalog),
            Commands::Search { query, category } => handle_search(&catalog, &query, &category),
            Commands::Show { id } => handle_show(&catalog, id),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    let kiosk = if cli.kiosk {
        Some(true)
    } else if cli.no_kiosk {
        Some(false)
    } else {
        None // Use config default
    };

    let catalog = load_catalog(cli.catalog.as_ref(), &config);

    // Launch TUI (default behavior)
    if let Err(e) = ui::run_ui_with_options(catalog, kiosk, &config) {
        eprintln!("Error running UI: {}", e);
        process::exit(1);
    }
}

fn handle_categories(catalog: &Catalog) {
    let categories = catalog::derive_categories(&catalog.records);
    for category in &categories {
        let count = if category.id == catalog::ALL_CATEGORY {
            catalog.len()
        } else {
            catalog::filter(&catalog.records, &category.id, "").len()
        };
        println!("{} {} ({}): {} entries", category.icon, category.name, category.id, count);
    }
}

fn handle_search(catalog: &Catalog, query: &str, category: &str) {
    let results = catalog::filter(&catalog.records, category, query);

    for record in &results {
        println!("[{}] {} ({})", record.id, record.question, record.category);
    }
    println!(
        "{} {} for \"{}\" in category \"{}\"",
        results.len(),
        if results.len() == 1 { "result" } else { "results" },
        query,
        category
    );
}

fn handle_show(catalog: &Catalog, id: u32) {
    let Some(record) = catalog.find(id) else {
        eprintln!("No FAQ record with id {}", id);
        process::exit(1);
    };

    println!("{} {}", record.icon, record.question);
    println!("Category: {}", record.category);
    println!();

    match catalog::format_answer(&record.answer) {
        catalog::FormattedAnswer::Steps(steps) => {
            for (n, step) in steps.iter().enumerate() {
                println!("  {}. {}", n + 1, step);
            }
        }
        catalog::FormattedAnswer::Paragraphs(paragraphs) => {
            for paragraph in &paragraphs {
                println!("{}", paragraph);
                println!();
            }
        }
    }

    let related = catalog::related_for(&catalog.records, record);
    if !related.is_empty() {
        println!("Related questions:");
        for rel in &related {
            println!("  [{}] {}", rel.id, rel.question);
        }
    }
}

fn handle_init_config() {
    match config::Config::load() {
        Ok(cfg) => {
            match config::Config::config_path() {
                Ok(path) => println!("Config loaded successfully from {}", path.display()),
                Err(e) => println!("Config loaded, but config path unknown: {:#}", e),
            }
            println!("{:#?}", cfg);
        }
        Err(e) => {
            println!("Config missing or invalid: {:#}", e);
            println!("Creating default config...");

            let cfg = config::Config::default();
            if let Err(err) = cfg.save() {
                eprintln!("Failed to save default config: {:#}", err);
                process::exit(1);
            } else {
                match config::Config::config_path() {
                    Ok(path) => println!("Default config saved to {}", path.display()),
                    Err(e) => println!("Default config saved (path unknown): {:#}", e),
                }
            }
        }
    }
}
