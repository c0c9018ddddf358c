//! Resume ranker: rank resumes against a job description and report skill gaps

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_ranker::cli::{self, Cli, Commands, ConfigAction};
use resume_ranker::config::{Config, OutputFormat};
use resume_ranker::input::InputManager;
use resume_ranker::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_ranker::output::report::{GapAnalysisReport, RankingReport};
use resume_ranker::{Result, ResumeRankerError, ScreeningEngine};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Execute command
    if let Err(e) = run_command(cli.command, cli.config.as_deref()).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Rank {
            description,
            job,
            role,
            output,
            save,
            detailed,
            resumes,
        } => {
            let config = load_config(config_path)?;
            let format = resolve_output_format(output.as_deref(), &config)?;
            let input_manager = InputManager::new();

            let description = match (description, job) {
                (Some(text), None) => text,
                (None, Some(path)) => {
                    cli::validate_file_extension(&path, &["txt", "md", "markdown", "pdf"])
                        .map_err(|e| ResumeRankerError::Validation(format!("Job description file: {}", e)))?;
                    input_manager.read_description(&path).await?
                }
                _ => {
                    return Err(ResumeRankerError::Validation(
                        "provide the job description with either --description or --job".to_string(),
                    ))
                }
            };

            let documents = read_resumes(&input_manager, &resumes).await?;

            let engine = ScreeningEngine::new(Arc::new(config.catalog.clone()), &config.pipeline);
            let batch = engine
                .rank_documents(&description, documents, role.as_deref())
                .await?;
            let report = RankingReport::new(batch);

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
            );
            let rendered = generator.generate_ranking(&report, format)?;
            emit(&rendered, save.as_deref(), format, "ranked_resumes")
        }

        Commands::Gap {
            resume,
            role,
            output,
            save,
        } => {
            let config = load_config(config_path)?;
            let format = resolve_output_format(output.as_deref(), &config)?;
            cli::validate_file_extension(&resume, &["pdf"])
                .map_err(|e| ResumeRankerError::Validation(format!("Resume file: {}", e)))?;

            let document = InputManager::new().read_document(&resume).await?;
            let engine = ScreeningEngine::new(Arc::new(config.catalog.clone()), &config.pipeline);
            let analysis = engine.analyze_gap(document, role.as_deref()).await?;
            let report = GapAnalysisReport::new(analysis);

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                config.output.detailed,
                true,
            );
            let rendered = generator.generate_gap(&report, format)?;
            emit(&rendered, save.as_deref(), format, "skill_gap")
        }

        Commands::Roles => {
            let config = load_config(config_path)?;
            let catalog = &config.catalog;
            for role in catalog.role_names() {
                let marker = if role == catalog.default_role { " (default)" } else { "" };
                println!("{}{}", role, marker);
                if let Some(skills) = catalog.required_skills(role) {
                    println!("  {}", skills.join(", "));
                }
            }
            Ok(())
        }

        Commands::Config { action } => {
            // Reset and path must work even when the file is missing or broken.
            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(Config::config_path);
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let config = load_config(config_path)?;
                    println!("{}", config.to_toml_string()?);
                }
                ConfigAction::Reset => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset to defaults: {}", path.display());
                }
                ConfigAction::Path => {
                    println!("{}", path.display());
                }
            }
            Ok(())
        }
    }
}

fn resolve_output_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(ResumeRankerError::Validation),
        None => Ok(config.output.format),
    }
}

/// Read every resume, showing progress. A missing file aborts before any
/// scoring starts; format problems are left to the per-document pipeline.
async fn read_resumes(input_manager: &InputManager, paths: &[PathBuf]) -> Result<Vec<resume_ranker::DocumentInput>> {
    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} resumes {msg}")
            .map_err(|e| ResumeRankerError::OutputFormatting(e.to_string()))?
            .progress_chars("#>-"),
    );

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        if cli::validate_file_extension(path, &["pdf"]).is_err() {
            warn!("{} does not have a .pdf extension", path.display());
        }
        pb.set_message(path.display().to_string());
        documents.push(input_manager.read_document(path).await?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!("Loaded {} resume(s)", documents.len());
    Ok(documents)
}

fn emit(rendered: &str, save: Option<&Path>, format: OutputFormat, default_name: &str) -> Result<()> {
    match save {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(suggest_filename(format, default_name, false))
            } else {
                path.to_path_buf()
            };
            save_report_to_file(rendered, &path)?;
            info!("Report saved to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
