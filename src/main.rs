use std::fs::File;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use gigbinder::paths::resolve_log_path;
use gigbinder::pdf_library::PdfLibrary;
use gigbinder::setlist_manager::SetlistManager;
use gigbinder::settings::Settings;

#[derive(Parser)]
#[command(name = "gigbinder", version, about = "Setlist organizer for PDF sheet music")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the PDF files found in a folder
    Scan { folder: String },
    /// Print the setlists stored in a setlists file
    Show {
        /// Path to the setlists file (defaults to the configured location)
        file: Option<PathBuf>,
    },
    /// Print the resolved configuration
    Config,
}

fn init_logging() {
    let Ok(path) = resolve_log_path() else {
        return;
    };
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Info, Config::default(), file);
    }
}

fn scan(folder: &str) -> Result<()> {
    let mut library = PdfLibrary::new();
    if !library.load_folder(folder) {
        anyhow::bail!("Not a readable directory: {folder}");
    }
    println!("{} ({} PDF files)", library.folder_name(), library.file_count());
    for entry in library.files() {
        println!("  {}", entry.filename);
    }
    Ok(())
}

fn show(file: Option<PathBuf>, settings: &Settings) -> Result<()> {
    let path = file.unwrap_or_else(|| settings.setlists_path());
    let mut manager = SetlistManager::new();
    if !manager.load_from_file(&path)? {
        println!("No setlists saved at {}", path.display());
        return Ok(());
    }
    for setlist in manager.setlists() {
        println!("{} ({} items)", setlist.name(), setlist.item_count());
        for item in setlist.items() {
            println!("  {}\t{}", item.name, item.full_path);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    info!("gigbinder starting");

    let cli = Cli::parse();
    let settings = Settings::load();

    match cli.command {
        Command::Scan { folder } => scan(&folder),
        Command::Show { file } => show(file, &settings),
        Command::Config => {
            println!("setlists file: {}", settings.setlists_path().display());
            println!(
                "library dir:   {}",
                settings.library_dir.as_deref().unwrap_or("(not set)")
            );
            println!("default zoom:  {}", settings.default_zoom);
            println!("autosave:      {}", settings.autosave_setlists);
            Ok(())
        }
    }
}
