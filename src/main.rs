//! Agenda - demo runner
//!
//! Fills a directory with a few contacts, edits it, prints a search and the
//! listing, then exports the listing to the configured file.

use agenda::{
    Config, Contact, ContactRenderer, ContactUpdate, Directory, ExportFormat, HtmlRenderer,
    JsonRenderer,
};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can drive the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Logs go to stderr; stdout carries the listing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut agenda = Directory::new();

    agenda.add(Contact::new("Ana", "600111111", "Calle Uno 1").with_email("ana@example.com"));
    agenda.add(Contact::new("Luis", "600222222", "Calle Dos 2"));
    agenda.add(
        Contact::new("María", "600333333", "Calle Tres 3").with_email("maria@example.com"),
    );

    agenda.update("Luis", ContactUpdate::new().phone("699999999"));
    agenda.remove("Ana");

    println!("Resultados de la búsqueda 'ar':");
    for contact in agenda.search("ar") {
        println!(" - {}", contact);
    }

    println!("\n--- Listado en HTML ---");
    println!("{}", agenda.list());

    let renderer: Box<dyn ContactRenderer> = match config.export_format {
        ExportFormat::Html => Box::new(HtmlRenderer),
        ExportFormat::Json => Box::new(JsonRenderer),
    };
    agenda
        .export_listing(&config.export_path, renderer.as_ref())
        .with_context(|| format!("exporting {} listing", config.export_format))?;

    println!(
        "\nSe ha guardado el listado en '{}'",
        config.export_path.display()
    );
    Ok(())
}
