//! EngiVerse CLI - browse and revive abandoned student projects

use clap::{Parser, Subcommand};
use engiverse_core::application::validators::ProjectSubmission;
use engiverse_core::catalog::{FixtureSource, JsonFileSource, ProjectCatalog, ProjectSource};
use engiverse_core::commands::discover::{self, DiscoveryPage};
use engiverse_core::commands::project::{self, HealthReport, PitchDeckView, ProjectCard};
use engiverse_core::commands::submit;
use engiverse_core::config::Config;
use engiverse_core::domain::discovery::FilterCriteria;
use engiverse_core::domain::projects::{Project, User};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "engiverse")]
#[command(author, version, about = "Discover and adopt abandoned engineering projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Project catalog JSON file (overrides catalog.path)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, filter and sort the project catalog
    Discover {
        /// Case-insensitive text matched against title, description and tech stack
        #[arg(short, long)]
        search: Option<String>,
        /// Exact domain, e.g. "IoT"
        #[arg(short, long)]
        domain: Option<String>,
        /// beginner, intermediate or advanced
        #[arg(long)]
        difficulty: Option<String>,
        /// abandoned, active or completed
        #[arg(long)]
        status: Option<String>,
        /// recent, popular, completion or health (defaults to discovery.default_sort)
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show project details
    Show { id: String },

    /// Show a project's AI health report
    Report { id: String },

    /// Show a project's pitch deck
    Pitch { id: String },

    /// List the values accepted by the discovery filters
    Options,

    /// Validate a new project and print the draft record
    Submit {
        #[arg(short, long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(short, long)]
        domain: String,
        #[arg(long, default_value = "")]
        difficulty: String,
        /// Tech stack entry (repeatable)
        #[arg(long = "tech")]
        tech_stack: Vec<String>,
        #[arg(long)]
        repo: Option<String>,
        #[arg(long)]
        demo: Option<String>,
        #[arg(long)]
        video: Option<String>,
        /// Author display name
        #[arg(long)]
        author: Option<String>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show config file path
    Path,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("engiverse=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli).await;
    if let Err(err) = &result {
        if let Some(hint) = err
            .downcast_ref::<engiverse_core::Error>()
            .and_then(|e| e.suggestion())
        {
            eprintln!("Hint: try `{}`", hint);
        }
    }
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Discover {
            search,
            domain,
            difficulty,
            status,
            sort,
        } => {
            let config = Config::load()?;
            let catalog = load_catalog(cli.catalog.as_ref(), &config).await?;
            let mut criteria = FilterCriteria::from_raw(
                search.as_deref(),
                domain.as_deref(),
                difficulty.as_deref(),
                status.as_deref(),
                sort.as_deref(),
            );
            if sort.as_deref().is_none_or(str::is_empty) {
                criteria.sort_key = Some(config.default_sort_key()?);
            }
            cmd_discover(&catalog, &criteria, &config, format, quiet)
        }

        Commands::Show { id } => {
            let config = Config::load()?;
            let catalog = load_catalog(cli.catalog.as_ref(), &config).await?;
            cmd_show(&catalog, &id, format)
        }

        Commands::Report { id } => {
            let config = Config::load()?;
            let catalog = load_catalog(cli.catalog.as_ref(), &config).await?;
            cmd_report(&catalog, &id, format)
        }

        Commands::Pitch { id } => {
            let config = Config::load()?;
            let catalog = load_catalog(cli.catalog.as_ref(), &config).await?;
            cmd_pitch(&catalog, &id, format)
        }

        Commands::Options => {
            let config = Config::load()?;
            let catalog = load_catalog(cli.catalog.as_ref(), &config).await?;
            cmd_options(&catalog, format)
        }

        Commands::Submit {
            title,
            description,
            domain,
            difficulty,
            tech_stack,
            repo,
            demo,
            video,
            author,
        } => {
            let submission = ProjectSubmission {
                title,
                description,
                tech_stack,
                domain,
                difficulty,
                repo_url: repo,
                demo_url: demo,
                video_url: video,
            };
            cmd_submit(&submission, author, format, quiet)
        }

        Commands::Config { action } => cmd_config(action, quiet),
    }
}

/// Pick the catalog source: `--catalog`, then `catalog.path`, then the sample data
async fn load_catalog(
    override_path: Option<&PathBuf>,
    config: &Config,
) -> anyhow::Result<ProjectCatalog> {
    let source: Box<dyn ProjectSource> = match override_path.or(config.catalog.path.as_ref()) {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(FixtureSource),
    };
    debug!(source = source.name(), "Resolved catalog source");
    Ok(ProjectCatalog::load(source.as_ref()).await?)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ============================================================================
// Command Implementations
// ============================================================================

fn cmd_discover(
    catalog: &ProjectCatalog,
    criteria: &FilterCriteria,
    config: &Config,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let page = discover::discover(catalog, criteria);

    if format == OutputFormat::Json {
        return print_json(&page);
    }

    if page.is_empty() {
        print_empty_state(&page, quiet);
        return Ok(());
    }

    if !quiet {
        println!("{}", page.summary());
        println!();
    }
    for project in &page.projects {
        print_card(
            &ProjectCard::from_project(project, config.display.max_tech_shown),
            quiet,
        );
    }
    Ok(())
}

fn print_empty_state(page: &DiscoveryPage, quiet: bool) {
    println!("No projects found");
    if quiet {
        return;
    }
    println!("Try adjusting your search terms or filters.");
    if page.filters_active {
        println!("\nClear filters with: engiverse discover");
    }
}

fn print_card(card: &ProjectCard, quiet: bool) {
    if quiet {
        println!("{}\t{}", card.id, card.title);
        return;
    }
    println!("  [{}] {}", card.id, card.title);
    println!(
        "      {} | {} | {} stars | {}% complete | {} contributors",
        card.status, card.difficulty, card.stars, card.completion_percentage, card.contributors
    );
    let tech = card.tech_line();
    if !tech.is_empty() {
        println!("      {}", tech);
    }
}

fn cmd_show(catalog: &ProjectCatalog, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let p = project::show(catalog, id)?;

    if format == OutputFormat::Json {
        return print_json(&p);
    }

    print_project(&p);
    Ok(())
}

fn print_project(p: &Project) {
    println!("Project: {}", p.title);
    println!("  ID: {}", p.id);
    println!("  Domain: {}", p.domain);
    println!("  Difficulty: {}", p.difficulty);
    println!("  Status: {}", p.status);
    println!("  Stars: {}", p.stars);
    println!("  Completion: {}%", p.completion_percentage);
    if !p.tech_stack.is_empty() {
        println!("  Tech stack: {}", p.tech_stack.join(", "));
    }
    for (label, url) in [
        ("Repository", &p.repo_url),
        ("Demo", &p.demo_url),
        ("Video", &p.video_url),
    ] {
        if let Some(url) = url {
            println!("  {}: {}", label, url);
        }
    }
    if let Some(author) = &p.original_author {
        println!("  Author: {}", author.name);
    }
    println!("  Contributors: {}", p.contributors.len());
    if !p.adoption_requests.is_empty() {
        println!("  Adoption requests: {}", p.adoption_requests.len());
    }
    match p.health_score() {
        Some(score) => println!("  Health score: {}", score),
        None => println!("  Health score: not analyzed"),
    }
    println!("  Updated: {}", p.last_updated.format("%Y-%m-%d"));
    println!("\n{}", p.description);
}

fn cmd_report(catalog: &ProjectCatalog, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let report = project::health_report(catalog, id)?;

    if format == OutputFormat::Json {
        return print_json(&report);
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &HealthReport) {
    println!("Health report: {}", report.title);
    println!(
        "  Health score: {} ({})",
        report.health_score,
        report.band.label()
    );
    println!("  Completion: {}%", report.completion_percentage);

    for (heading, items) in [
        ("Missing modules", &report.missing_modules),
        ("Predicted bugs", &report.bug_predictions),
        ("Recommendations", &report.recommendations),
        ("Team needs", &report.team_needs),
    ] {
        if items.is_empty() {
            continue;
        }
        println!("\n{}:", heading);
        for item in items {
            println!("  - {}", item);
        }
    }

    if !report.roadmap.is_empty() {
        println!("\nRoadmap:");
        for item in &report.roadmap {
            println!(
                "  [{}] {} ({})",
                item.priority.as_str(),
                item.title,
                item.estimated_time
            );
        }
    }

    println!(
        "\nGenerated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
}

fn cmd_pitch(catalog: &ProjectCatalog, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let deck = project::pitch_deck(catalog, id)?;

    if format == OutputFormat::Json {
        return print_json(&deck);
    }

    print_pitch(&deck);
    Ok(())
}

fn print_pitch(deck: &PitchDeckView) {
    println!("Pitch deck: {}", deck.title);
    for (n, slide) in deck.slides.iter().enumerate() {
        println!("\n{}. {}", n + 1, slide.heading);
        if slide.items.is_empty() {
            println!("  (not provided)");
        }
        for item in &slide.items {
            println!("  - {}", item);
        }
    }
}

fn cmd_options(catalog: &ProjectCatalog, format: OutputFormat) -> anyhow::Result<()> {
    let options = discover::filter_options(catalog);

    if format == OutputFormat::Json {
        return print_json(&options);
    }

    println!("Domains:");
    for domain in &options.domains {
        println!("  {}", domain);
    }
    println!("\nDifficulties: {}", options.difficulties.join(", "));
    println!("Statuses: {}", options.statuses.join(", "));
    println!("\nSort keys:");
    for (key, label) in &options.sort_keys {
        println!("  {:<12} {}", key, label);
    }
    Ok(())
}

fn cmd_submit(
    submission: &ProjectSubmission,
    author: Option<String>,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let draft = submit::prepare(submission, author.map(User::new))?;

    if format == OutputFormat::Json {
        return print_json(&draft);
    }

    if quiet {
        println!("{}", draft.id);
        return Ok(());
    }

    println!("Project draft ready.");
    print_project(&draft);
    Ok(())
}

fn cmd_config(action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key)?;
            println!("{}", value);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, value);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for (key, value) in config.list()? {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            if !quiet {
                println!("Configuration reset to defaults.");
            }
        }
        ConfigAction::Path => {
            let path = Config::config_path()?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
