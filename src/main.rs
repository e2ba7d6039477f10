//! Command-line runner for the AHP-SMART pipeline.
//!
//! Signs in, loads (or seeds) the stored criteria and ratings, computes
//! weights and the ranking, and writes the CSV export.

use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use ahp_smart::adapters::{
    CsvResultExporter, FileTableStore, GoTrueAuthProvider, InMemoryTableStore, MockAuthProvider, RestTableStore,
    SupabaseConfig,
};
use ahp_smart::application::{
    ComputeRankingHandler, ComputeWeightsHandler, ExportResultsCommand, ExportResultsHandler,
    GenerateRatingsCommand, GenerateRatingsHandler, GetDashboardSummaryHandler, LoadAlternativesHandler,
    LoadCriteriaHandler, SaveAlternativesHandler, SaveCriteriaHandler, SignInCommand, SignInHandler,
    SignOutHandler, SignUpCommand, SignUpHandler, SignUpResult,
};
use ahp_smart::config::{AppConfig, AuthBackend, LogFormat, RuntimeConfig, StoreBackend};
use ahp_smart::domain::decision::defaults::{default_criteria, DEFAULT_SUPPLIERS};
use ahp_smart::domain::decision::DecisionWorkspace;
use ahp_smart::domain::foundation::{AuthSession, DomainError};
use ahp_smart::ports::{AuthProvider, TableStore};

/// Password for the in-memory demo account when none is configured.
const DEMO_PASSWORD: &str = "ahp-smart-demo";

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.runtime);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Pipeline failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(runtime: &RuntimeConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&runtime.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    match runtime.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn Error>> {
    config.validate()?;
    info!(environment = ?config.runtime.environment, "Starting AHP-SMART");

    let store = build_store(&config);
    let auth = build_auth(&config);
    let session = sign_in(&config, auth.clone()).await?;

    let criteria_table = config.store.criteria_table.as_str();
    let alternatives_table = config.store.alternatives_table.as_str();
    let mut workspace = DecisionWorkspace::new();

    // 1. Load stored data, seeding the defaults into an empty store
    let loaded = LoadCriteriaHandler::new(store.clone(), auth.clone(), criteria_table)
        .handle(&mut workspace, Some(&session))
        .await?;
    if loaded.loaded == 0 {
        seed_defaults(&mut workspace, &store, &auth, &config, &session).await?;
    } else {
        LoadAlternativesHandler::new(store.clone(), auth.clone(), alternatives_table)
            .handle(&mut workspace, Some(&session))
            .await?;
    }

    // 2. Weights
    let view = ComputeWeightsHandler::new().handle(&mut workspace)?;
    println!("Bobot kriteria:");
    for weight in &view.weights {
        println!("  {:<14} {:.4}", weight.criterion, weight.weight);
    }
    println!("{}", view.summary);
    if !view.report.consistent {
        warn!(cr = view.report.consistency_ratio, "Pairwise judgements are inconsistent (CR > 0.10)");
    }

    // 3. Ranking
    let result = ComputeRankingHandler::new().handle(&mut workspace)?;
    println!("Peringkat:");
    for entry in result.entries() {
        println!("  {:>2}. {:<24} {:.4}", entry.rank, entry.alternative, entry.score);
    }

    // 4. Export
    let exported = ExportResultsHandler::new(Arc::new(CsvResultExporter::default()))
        .handle(
            &workspace,
            ExportResultsCommand {
                path: Some(config.export.output_path.clone()),
            },
        )
        .await?;
    println!("Hasil disimpan ke {}", exported.path.display());

    // 5. Summary and sign-out
    let summary = GetDashboardSummaryHandler::new(store, auth.clone(), criteria_table)
        .handle(&workspace, Some(&session))
        .await;
    info!(summary = %serde_json::to_string(&summary)?, "Dashboard summary");

    SignOutHandler::new(auth).handle(session).await?;
    Ok(())
}

fn build_store(config: &AppConfig) -> Arc<dyn TableStore> {
    match config.store.backend {
        StoreBackend::Memory => Arc::new(InMemoryTableStore::new()),
        StoreBackend::File => Arc::new(FileTableStore::new(&config.store.data_dir)),
        StoreBackend::Supabase => Arc::new(RestTableStore::new(supabase_config(config))),
    }
}

fn build_auth(config: &AppConfig) -> Arc<dyn AuthProvider> {
    match config.auth.backend {
        AuthBackend::Mock => Arc::new(MockAuthProvider::new()),
        AuthBackend::Supabase => Arc::new(GoTrueAuthProvider::new(supabase_config(config))),
    }
}

/// Only called after `validate()` has checked URL and key are present.
fn supabase_config(config: &AppConfig) -> SupabaseConfig {
    let url = config.store.supabase_url.clone().unwrap_or_default();
    let key = config
        .store
        .supabase_api_key
        .as_ref()
        .map(|k| k.expose_secret().clone())
        .unwrap_or_default();
    SupabaseConfig::new(url, key).with_timeout(config.store.request_timeout())
}

async fn sign_in(config: &AppConfig, auth: Arc<dyn AuthProvider>) -> Result<AuthSession, DomainError> {
    let password = config
        .auth
        .password
        .clone()
        .unwrap_or_else(|| Secret::new(DEMO_PASSWORD.to_string()));
    let sign_in = SignInHandler::new(auth.clone());
    let credentials = SignInCommand {
        email: config.auth.email.clone(),
        password: password.clone(),
    };

    if config.auth.backend == AuthBackend::Supabase {
        return sign_in.handle(credentials).await;
    }

    // The mock starts empty: register the demo account first.
    let display_name = config
        .auth
        .email
        .split('@')
        .next()
        .filter(|local| !local.trim().is_empty())
        .unwrap_or("User")
        .to_string();
    let registered = SignUpHandler::new(auth)
        .with_min_password_length(config.auth.min_password_length)
        .with_auto_login(config.auth.auto_login)
        .handle(SignUpCommand {
            email: config.auth.email.clone(),
            password: password.clone(),
            confirm_password: password,
            display_name: Some(display_name),
        })
        .await?;

    match registered {
        SignUpResult::SignedIn(session) => Ok(session),
        SignUpResult::Registered(_) | SignUpResult::ConfirmationRequired(_) => sign_in.handle(credentials).await,
    }
}

async fn seed_defaults(
    workspace: &mut DecisionWorkspace,
    store: &Arc<dyn TableStore>,
    auth: &Arc<dyn AuthProvider>,
    config: &AppConfig,
    session: &AuthSession,
) -> Result<(), DomainError> {
    info!("Store is empty, seeding default criteria and suppliers");
    workspace.set_criteria(default_criteria()?);
    GenerateRatingsHandler::new().handle(
        workspace,
        GenerateRatingsCommand::Generate {
            alternatives: DEFAULT_SUPPLIERS.iter().map(|s| s.to_string()).collect(),
        },
    )?;

    SaveCriteriaHandler::new(store.clone(), auth.clone(), config.store.criteria_table.as_str())
        .handle(workspace, Some(session))
        .await?;
    SaveAlternativesHandler::new(store.clone(), auth.clone(), config.store.alternatives_table.as_str())
        .handle(workspace, Some(session))
        .await?;
    Ok(())
}
