use crate::cli::{Cli, Commands, OutputFormat};
use anyhow::{Context, Result};
use careerpath_domain::{EmployeeId, Recommendation, RecommendationId, SkillGapAnalysis};
use careerpath_engine::{
    CacheTtls, CachedRecommendations, Dataset, EnginePorts, InMemoryStore, RecommendationEngine,
    RecommendationService, ReferenceData, ScoringThresholds, TemplateChoice, TemplateReasoning,
};
use careerpath_state::{env_diag, load_settings, Settings};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// The main entry point for the `careerpath` binary.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = load_settings()?;
    if env_diag() {
        tracing::info!(?settings, "Loaded settings");
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(dispatch(cli, &settings))
}

async fn dispatch(cli: Cli, settings: &Settings) -> Result<()> {
    let data_path = cli
        .data
        .context("no dataset given; pass --data or set CAREERPATH_DATA")?;
    let session = Session::open(&data_path, settings)?;
    let format = cli.format;

    match cli.command {
        Commands::Recommend { employee, save } => {
            let cancel = cancel_on_ctrl_c();
            let recs = session
                .service
                .generate_recommendations(EmployeeId(employee), &cancel)
                .await?;
            if save {
                session.persist(&data_path).await?;
            }
            print_recommendations(&recs, format)
        }
        Commands::List { employee } => {
            let recs = session
                .service
                .employee_recommendations(EmployeeId(employee))
                .await?;
            print_recommendations(&recs, format)
        }
        Commands::Accept { recommendation } => {
            let accepted = session
                .service
                .accept_recommendation(RecommendationId(recommendation))
                .await?;
            session.persist(&data_path).await?;
            print_recommendations(std::slice::from_ref(&accepted), format)
        }
        Commands::Gaps { employee, target } => {
            let analysis = session
                .service
                .analyze_skill_gaps(EmployeeId(employee), &target)
                .await?;
            print_analysis(&analysis, format)
        }
    }
}

/// Engine wired to an in-memory copy of the dataset file.
struct Session {
    store: InMemoryStore,
    service: CachedRecommendations<RecommendationEngine>,
}

impl Session {
    fn open(data_path: &Path, settings: &Settings) -> Result<Self> {
        let dataset = Dataset::load(data_path)?;
        let reference = load_reference(settings.reference_data_path())?;
        let thresholds =
            ScoringThresholds::default().with_overrides(&settings.effective_thresholds());
        let reasoning = TemplateReasoning::new(TemplateChoice::from(settings.reasoning));

        let store = InMemoryStore::new(dataset);
        let engine = RecommendationEngine::new(
            EnginePorts::in_memory(store.clone(), Arc::new(reasoning)),
            Arc::new(reference),
        )
        .with_thresholds(thresholds);
        Ok(Self {
            store,
            service: CachedRecommendations::new(engine, CacheTtls::from(settings)),
        })
    }

    async fn persist(&self, data_path: &Path) -> Result<()> {
        self.store.dataset().await.save(data_path)?;
        tracing::debug!(path = %data_path.display(), "Dataset written");
        Ok(())
    }
}

fn load_reference(path: Option<PathBuf>) -> Result<ReferenceData> {
    match path {
        Some(path) => {
            let reference = ReferenceData::load(&path)
                .with_context(|| format!("failed to load reference data: {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                version = %reference.version,
                "Using reference data override"
            );
            Ok(reference)
        }
        None => Ok(ReferenceData::builtin()),
    }
}

fn cancel_on_ctrl_c() -> CancellationToken {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted; cancelling");
            trigger.cancel();
        }
    });
    cancel
}

fn print_recommendations(recs: &[Recommendation], format: OutputFormat) -> Result<()> {
    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(recs)?);
        return Ok(());
    }
    if recs.is_empty() {
        println!("No recommendations.");
        return Ok(());
    }
    for rec in recs {
        let id = rec.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into());
        let accepted = if rec.accepted { " (accepted)" } else { "" };
        println!(
            "#{id} [P{} {:.2}] {}{accepted}",
            rec.priority,
            rec.confidence_score.value(),
            rec.title
        );
        println!("    {}", rec.reasoning);
    }
    Ok(())
}

fn print_analysis(analysis: &SkillGapAnalysis, format: OutputFormat) -> Result<()> {
    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(analysis)?);
        return Ok(());
    }
    println!(
        "{} ({}) -> {}: {:.0}% ready, about {} months",
        analysis.employee_name,
        analysis.current_position,
        analysis.target_position,
        analysis.readiness_percentage,
        analysis.estimated_months
    );
    for gap in analysis.all_gaps() {
        println!(
            "  [P{}] {}: {} -> {}",
            gap.priority, gap.skill_name, gap.current_level, gap.required_level
        );
    }
    println!();
    print!("{}", analysis.learning_path);
    for milestone in &analysis.milestones {
        println!("Month {}: {}", milestone.month, milestone.title);
    }
    Ok(())
}
