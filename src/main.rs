//! Command-line front-end for the year-end archive workflow.

use std::env;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use config::Config;
use dotenvy::dotenv;

use rotaract_archive::api::http::HttpBackend;
use rotaract_archive::controller::ArchiveController;
use rotaract_archive::domain::types::RotaractYear;
use rotaract_archive::dto::year_state::DownloadedFile;
use rotaract_archive::forms::close_year::CloseYearChecklist;
use rotaract_archive::models::config::ClientConfig;

#[derive(Debug, Parser)]
#[command(
    name = "rotaract-archive",
    version,
    about = "Year-end archive workflow for the club management backend"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the effective current year, its metrics, and past archives.
    Status,
    /// Close the current financial year after confirming the checklist.
    CloseYear {
        /// Confirm that all financial reports were exported.
        #[arg(long)]
        export_data: bool,
        /// Confirm that all amounts were verified.
        #[arg(long)]
        verify_amounts: bool,
        /// Confirm that all members were notified about year-end.
        #[arg(long)]
        notify_members: bool,
        /// Confirm that data and bills were backed up.
        #[arg(long)]
        backup_complete: bool,
        /// Do not carry the member roster into the next year.
        #[arg(long)]
        no_carry_over: bool,
    },
    /// Start a new Rotaract year.
    StartYear {
        /// Year label, e.g. 2026-2027.
        year: String,
        /// Rotary International theme of the year.
        #[arg(long, default_value = "")]
        theme: String,
        /// Start with an empty roster instead of carrying members over.
        #[arg(long)]
        no_carry_over: bool,
    },
    /// List the archived files of a year.
    Files {
        /// Year to inspect; defaults to the effective current year.
        #[arg(long)]
        year: Option<String>,
    },
    /// Upload a file into a year's archive.
    Upload {
        /// Local file to upload.
        path: PathBuf,
        /// Target year; defaults to the effective current year.
        #[arg(long)]
        year: Option<String>,
    },
    /// Download a year's financial report PDF.
    DownloadReport {
        /// Year to export.
        year: String,
    },
    /// Download one archived file by name.
    DownloadFile {
        /// Name of the archived file.
        name: String,
        /// Year holding the file; defaults to the effective current year.
        #[arg(long)]
        year: Option<String>,
    },
}

fn load_config() -> Option<ClientConfig> {
    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default").required(false))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            return None;
        }
    };

    match settings.try_deserialize::<ClientConfig>() {
        Ok(client_config) => Some(client_config),
        Err(err) => {
            log::error!("Error loading client config: {err}");
            None
        }
    }
}

fn save_download(config: &ClientConfig, download: &DownloadedFile) -> std::io::Result<PathBuf> {
    let dir = config.download_dir.as_deref().unwrap_or(".");
    let path = Path::new(dir).join(&download.file_name);
    std::fs::write(&path, &download.bytes)?;
    Ok(path)
}

fn print_status(controller: &ArchiveController<HttpBackend>) {
    let Some(state) = controller.state() else {
        return;
    };
    let current = &state.current;

    println!("Current year: {} ({:?})", current.year, current.status);
    println!("  Contributions: {:.2}", current.total_contributions);
    println!("  Expenses:      {:.2}", current.total_expenses);
    println!("  Members:       {}", current.members);
    println!("  Events:        {}", current.events);
    if current.pending_approvals > 0 || current.pending_reimbursements > 0.0 {
        println!(
            "  Pending: {} approvals, {:.2} in reimbursements; resolve before closing the year",
            current.pending_approvals, current.pending_reimbursements
        );
    }

    println!("Past archives:");
    for archive in &state.archives {
        let closed = archive
            .closed_at
            .or(archive.created_at)
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "not available".to_string());
        println!(
            "  {} [{:?}] closed {}, {} files",
            archive.rotaract_year,
            archive.status,
            closed,
            archive.files.len()
        );
    }
}

fn print_files(controller: &ArchiveController<HttpBackend>) {
    let Some(state) = controller.state() else {
        return;
    };
    println!("Files for {}:", state.selected_year);
    if state.files.is_empty() {
        println!("  (none)");
    }
    for file in &state.files {
        println!("  {} [{}] {}", file.name, file.file_type.as_str(), file.url);
    }
}

async fn run(cli: Cli, config: ClientConfig) -> i32 {
    let backend = HttpBackend::from_config(&config);
    let mut controller = ArchiveController::new(backend);

    if controller.refresh().await.is_err() {
        if let Some(error) = controller.error() {
            eprintln!("Failed to load archive data: {error}");
        }
        return 1;
    }

    match cli.command {
        Commands::Status => {
            print_status(&controller);
        }
        Commands::CloseYear {
            export_data,
            verify_amounts,
            notify_members,
            backup_complete,
            no_carry_over,
        } => {
            controller.close_year_form.checklist = CloseYearChecklist {
                export_data,
                verify_amounts,
                notify_members,
                backup_complete,
            };
            controller.close_year_form.carry_over_members = !no_carry_over;

            if let Err(err) = controller.close_year().await {
                eprintln!("Failed to close year: {err}");
                return 1;
            }
            println!("Year closed.");
            print_status(&controller);
        }
        Commands::StartYear {
            year,
            theme,
            no_carry_over,
        } => {
            controller.new_year_form.new_year = year;
            controller.new_year_form.theme = theme;
            controller.new_year_form.carry_over_members = !no_carry_over;

            if let Err(err) = controller.start_new_year().await {
                eprintln!("Failed to start new year: {err}");
                return 1;
            }
            println!("New year started.");
            print_status(&controller);
        }
        Commands::Files { year } => {
            if let Some(year) = year {
                match RotaractYear::new(year) {
                    Ok(year) => controller.select_year(year).await,
                    Err(err) => {
                        eprintln!("Invalid year: {err}");
                        return 1;
                    }
                }
            }
            print_files(&controller);
        }
        Commands::Upload { path, year } => {
            if let Some(year) = year {
                match RotaractYear::new(year) {
                    Ok(year) => controller.select_year(year).await,
                    Err(err) => {
                        eprintln!("Invalid year: {err}");
                        return 1;
                    }
                }
            }
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                eprintln!("Invalid file path: {}", path.display());
                return 1;
            };
            let bytes = match std::fs::read(&path) {
                Ok(bytes) => bytes,
                Err(err) => {
                    eprintln!("Failed to read {}: {err}", path.display());
                    return 1;
                }
            };
            let file_name = file_name.to_string();

            if let Err(err) = controller.upload_file(&file_name, bytes).await {
                eprintln!("Failed to upload file: {err}");
                return 1;
            }
            print_files(&controller);
        }
        Commands::DownloadReport { year } => {
            let year = match RotaractYear::new(year) {
                Ok(year) => year,
                Err(err) => {
                    eprintln!("Invalid year: {err}");
                    return 1;
                }
            };
            match controller.download_report(&year).await {
                Ok(download) => match save_download(&config, &download) {
                    Ok(path) => println!("Saved {}", path.display()),
                    Err(err) => {
                        eprintln!("Failed to save report: {err}");
                        return 1;
                    }
                },
                Err(err) => {
                    eprintln!("Failed to download report: {err}");
                    return 1;
                }
            }
        }
        Commands::DownloadFile { name, year } => {
            if let Some(year) = year {
                match RotaractYear::new(year) {
                    Ok(year) => controller.select_year(year).await,
                    Err(err) => {
                        eprintln!("Invalid year: {err}");
                        return 1;
                    }
                }
            }
            let Some(file) = controller
                .state()
                .and_then(|state| state.files.iter().find(|file| file.name == name))
                .cloned()
            else {
                eprintln!("No archived file named {name}");
                return 1;
            };
            match controller.download_file(&file).await {
                Ok(download) => match save_download(&config, &download) {
                    Ok(path) => println!("Saved {}", path.display()),
                    Err(err) => {
                        eprintln!("Failed to save file: {err}");
                        return 1;
                    }
                },
                Err(err) => {
                    eprintln!("Failed to download file: {err}");
                    return 1;
                }
            }
        }
    }

    0
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let Some(config) = load_config() else {
        std::process::exit(1);
    };

    std::process::exit(run(cli, config).await);
}
