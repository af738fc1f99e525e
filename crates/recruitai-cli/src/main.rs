use anyhow::Context;
use clap::{Parser, Subcommand};
use recruitai_api::ScreeningClient;
use recruitai_core::{
    models::{format_date, Candidate},
    pages::{JobForm, MatchBoard, Overview, Profile},
    score::ScoreBucket,
    search::filter_candidates,
    Config, Exporter, ScreeningBackend, ThemeMode,
};
use recruitai_tui::App;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "recruitai")]
#[command(version, about = "Terminal client for the RecruitAI resume screening service", long_about = None)]
struct Cli {
    /// Screening API base URL, including the /api prefix
    #[arg(long, global = true, env = "RECRUITAI_API_URL")]
    api_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Dashboard,
    /// List posted jobs
    Jobs,
    /// Post a new job
    AddJob {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Comma separated, e.g. "React, Node.js"
        #[arg(long, default_value = "")]
        skills: String,
    },
    /// List candidates
    Candidates {
        /// Filter by filename or skill
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one candidate profile
    Candidate { id: String },
    /// Show dashboard statistics
    Analytics,
    /// Upload a resume (PDF, DOCX or TXT)
    Upload { file: PathBuf },
    /// Rank candidates for a job
    Matches { job_id: String },
    /// Show or change local settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Export candidates to .json, .csv or .md
    Export {
        path: PathBuf,
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    Show,
    Set {
        /// dark, light or system
        #[arg(long)]
        theme: Option<ThemeMode>,
        /// Semantic weight in percent; the skill weight becomes the rest
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        semantic_weight: Option<u8>,
        /// Skill weight in percent; the semantic weight becomes the rest
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100), conflicts_with = "semantic_weight")]
        skill_weight: Option<u8>,
        #[arg(long)]
        auto_analyze: Option<bool>,
    },
}

/// The dashboard owns the terminal, so it only logs when RUST_LOG asks for it
fn init_logging(dashboard: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env();
    if dashboard && filter.is_err() {
        return;
    }

    tracing_subscriber::registry()
        .with(filter.unwrap_or_else(|_| "recruitai=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn bucket_marker(bucket: ScoreBucket) -> &'static str {
    match bucket {
        ScoreBucket::Good => "+",
        ScoreBucket::Warn => "~",
        ScoreBucket::Bad => "-",
    }
}

fn print_candidates(candidates: &[&Candidate]) {
    if candidates.is_empty() {
        println!("{}", recruitai_core::pages::candidates::NO_MATCHES);
        return;
    }
    for c in candidates {
        println!(
            "{:<26} {:<30} {:<12} {}",
            c.id,
            c.filename,
            format_date(c.upload_date),
            c.skills.join(", ")
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Dashboard);
    init_logging(matches!(command, Commands::Dashboard));

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?
        .with_api_url(cli.api_url);

    let client = ScreeningClient::with_options(config.client_options())?;
    tracing::debug!("Using screening API at {}", client.base_url());

    match command {
        Commands::Dashboard => {
            let backend: Arc<dyn ScreeningBackend> = Arc::new(client);
            let app = App::new(config, config_path);
            recruitai_tui::run_tui(app, backend).await?;
        }
        Commands::Jobs => {
            let jobs = client.jobs().await?;
            if cli.json {
                return print_json(&jobs);
            }
            if jobs.is_empty() {
                println!("{}", recruitai_core::pages::jobs::EMPTY);
            }
            for job in &jobs {
                println!("{:<26} {}", job.id, job.title);
                if !job.required_skills.is_empty() {
                    println!("{:<26} skills: {}", "", job.required_skills.join(", "));
                }
            }
        }
        Commands::AddJob {
            title,
            description,
            skills,
        } => {
            let job = JobForm::new(title, description, skills).to_new_job()?;
            let created = client.create_job(&job).await?;
            tracing::info!("Created job {}", created.id);
            if cli.json {
                return print_json(&created);
            }
            println!("Created job '{}' with id {}", job.title, created.id);
        }
        Commands::Candidates { search } => {
            let candidates = client.candidates().await?;
            let visible = filter_candidates(&candidates, search.as_deref().unwrap_or(""));
            if cli.json {
                return print_json(&visible);
            }
            print_candidates(&visible);
        }
        Commands::Candidate { id } => {
            let profile = Profile {
                candidate: client.get_candidate(&id).await?,
            };
            if cli.json {
                return print_json(&profile.candidate);
            }
            let c = &profile.candidate;
            println!("{} ({})", profile.display_name(), c.filename);
            println!("Uploaded: {}", profile.uploaded());
            if let Some(email) = profile.email() {
                println!("Email:    {}", email);
            }
            println!("Skills:   {}", c.skills.join(", "));
            for (heading, items) in [("Experience", &c.experience), ("Education", &c.education)] {
                println!("{}:", heading);
                for item in items {
                    println!("  - {}", item);
                }
            }
        }
        Commands::Analytics => {
            let overview = Overview {
                analytics: Some(client.analytics().await?),
                ..Default::default()
            };
            if cli.json {
                return print_json(&overview.analytics);
            }
            for card in overview.stat_cards() {
                println!("{:<18} {}", card.title, card.value);
            }
            match overview.skill_distribution() {
                Some(distribution) => {
                    println!();
                    for skill in distribution {
                        println!("{:<18} {}", skill.name, skill.value);
                    }
                }
                None => println!("{}", recruitai_core::pages::overview::NO_ANALYTICS),
            }
        }
        Commands::Upload { file } => {
            let receipt = client.upload_resume(&file).await?;
            if cli.json {
                return print_json(&receipt);
            }
            println!("{}", recruitai_core::pages::upload::SUCCESS);
            println!("Candidate id: {}", receipt.id);
            println!("Extracted skills: {}", receipt.extracted_skills.join(", "));
        }
        Commands::Matches { job_id } => {
            let matches = client.job_matches(&job_id).await?;
            if cli.json {
                return print_json(&matches);
            }
            let board = MatchBoard::new(matches);
            println!("{}", board.job_title);
            println!("{}", board.headline());
            for row in board.rows() {
                println!(
                    "{} #{:<3} {:<30} {:>3}%  semantic {:>3}%  skills {:>3}%",
                    bucket_marker(row.bucket),
                    row.rank,
                    row.entry.filename,
                    row.percent,
                    row.semantic_percent,
                    row.skill_percent
                );
            }
        }
        Commands::Settings { action } => {
            if let SettingsAction::Set {
                theme,
                semantic_weight,
                skill_weight,
                auto_analyze,
            } = action
            {
                if let Some(theme) = theme {
                    config.settings.theme = theme;
                }
                if let Some(value) = semantic_weight {
                    config.settings.set_semantic_weight(value);
                }
                if let Some(value) = skill_weight {
                    config.settings.set_skill_weight(value);
                }
                if let Some(value) = auto_analyze {
                    config.settings.auto_analyze = value;
                }
                config.save_to(&config_path)?;
            }

            if cli.json {
                return print_json(&config.settings);
            }
            let weights = config.settings.weights();
            println!("Theme:             {}", config.settings.theme.label());
            println!("Semantic weight:   {}%", weights.semantic());
            println!("Skill weight:      {}%", weights.skills());
            println!("Auto-analyze:      {}", config.settings.auto_analyze);
            println!("Config file:       {}", config_path.display());
        }
        Commands::Export { path, search } => {
            let candidates = client.candidates().await?;
            let visible: Vec<Candidate> =
                filter_candidates(&candidates, search.as_deref().unwrap_or(""))
                    .into_iter()
                    .cloned()
                    .collect();
            Exporter::export_to_file(&visible, &path)?;
            println!("Exported {} candidates to {}", visible.len(), path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_dashboard() {
        let cli = Cli::try_parse_from(["recruitai"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "recruitai",
            "candidates",
            "--search",
            "go",
            "--json",
            "--api-url",
            "http://backend:5000/api",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.api_url.as_deref(), Some("http://backend:5000/api"));
        assert!(matches!(
            cli.command,
            Some(Commands::Candidates { search: Some(ref q) }) if q == "go"
        ));
    }

    #[test]
    fn test_settings_set_validation() {
        let cli = Cli::try_parse_from([
            "recruitai",
            "settings",
            "set",
            "--theme",
            "light",
            "--semantic-weight",
            "40",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Settings {
                action:
                    SettingsAction::Set {
                        theme,
                        semantic_weight,
                        ..
                    },
            }) => {
                assert_eq!(theme, Some(ThemeMode::Light));
                assert_eq!(semantic_weight, Some(40));
            }
            _ => panic!("expected settings set"),
        }

        assert!(Cli::try_parse_from(["recruitai", "settings", "set", "--semantic-weight", "140"]).is_err());
        assert!(Cli::try_parse_from([
            "recruitai",
            "settings",
            "set",
            "--semantic-weight",
            "40",
            "--skill-weight",
            "60"
        ])
        .is_err());
    }
}
