//! Command bodies. `main` only maps an `Err` to exit code 1.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clusterresolver_core::domain::ResolutionRequest;
use clusterresolver_core::impls::DirectoryResourceStore;
use clusterresolver_core::{
    AppBuilder, BuildError, ClusterResolver, ConfigError, Params, ResolverConfig, ResolverError,
};

use crate::cli::{Cli, Command};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Resolver(#[from] ResolverError),

    #[error("failed to encode selector: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

fn load_config(path: Option<&Path>) -> Result<ResolverConfig, ConfigError> {
    match path {
        Some(path) => ResolverConfig::load(path),
        None => Ok(ResolverConfig::default()),
    }
}

pub async fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Info => info(&config, out),
        Command::Validate { params } => validate(params.into_iter().collect(), out),
        Command::Resolve { store_dir, params } => {
            resolve(config, store_dir, params.into_iter().collect(), out).await
        }
    }
}

fn info(config: &ResolverConfig, out: &mut impl Write) -> Result<(), CliError> {
    let selector = serde_json::to_string(&config.selector)?;
    writeln!(out, "name: {}", config.name)?;
    writeln!(out, "selector: {selector}")?;
    writeln!(out, "lookup namespace: {}", config.lookup_namespace)?;
    Ok(())
}

// validation never touches the store
fn validate(params: Params, out: &mut impl Write) -> Result<(), CliError> {
    ResolutionRequest::from_params(&params)?;
    writeln!(out, "ok")?;
    Ok(())
}

async fn resolve(
    config: ResolverConfig,
    store_dir: PathBuf,
    params: Params,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let store = Arc::new(DirectoryResourceStore::new(store_dir));
    let resolver = Arc::new(ClusterResolver::new(config, store));
    let app = AppBuilder::new(resolver).build().await?;

    let resolved = app.handle(&params).await?;
    for (key, value) in resolved.annotations() {
        tracing::info!(key = %key, value = %value, "annotation");
    }

    out.write_all(resolved.data())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    const NS: &str = "tekton-cluster-scoped-resources";

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("clusterresolver").chain(args.iter().copied())).unwrap()
    }

    fn store_with_task(name: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        let tasks = dir.path().join(NS).join("tasks");
        std::fs::create_dir_all(&tasks).unwrap();
        let body = serde_json::json!({
            "apiVersion": "tekton.dev/v1beta1",
            "kind": "Task",
            "metadata": {"name": name, "namespace": NS},
            "spec": {"steps": [{"name": "clone"}]}
        });
        std::fs::write(tasks.join(format!("{name}.json")), body.to_string()).unwrap();
        dir
    }

    #[tokio::test]
    async fn resolve_writes_only_the_payload() {
        let dir = store_with_task("git-clone");
        let store_dir = dir.path().to_str().unwrap();
        let mut out = Vec::new();

        run(
            cli(&["resolve", "--store-dir", store_dir, "kind=Task", "name=git-clone"]),
            &mut out,
        )
        .await
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let v: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(v["metadata"]["name"], "git-clone");
        assert_eq!(v["spec"]["steps"][0]["name"], "clone");
    }

    #[tokio::test]
    async fn resolve_missing_resource_fails_without_output() {
        let dir = store_with_task("git-clone");
        let store_dir = dir.path().to_str().unwrap();
        let mut out = Vec::new();

        let err = run(
            cli(&["resolve", "--store-dir", store_dir, "kind=pipeline", "name=missing"]),
            &mut out,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, CliError::Resolver(ResolverError::LookupFailed { .. })));
        assert!(err.to_string().contains("\"missing\""));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn resolve_against_missing_store_dir_fails_initialization() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let mut out = Vec::new();

        let err = run(
            cli(&["resolve", "--store-dir", missing.to_str().unwrap(), "kind=task", "name=n1"]),
            &mut out,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, CliError::Resolver(ResolverError::Initialization(_))));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn validate_reports_ok_or_error() {
        let mut out = Vec::new();
        run(cli(&["validate", "kind=pipeline", "name=build"]), &mut out)
            .await
            .unwrap();
        assert_eq!(out, b"ok\n");

        let mut out = Vec::new();
        let err = run(cli(&["validate", "kind=stepaction", "name=build"]), &mut out)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Resolver(ResolverError::UnsupportedKind(ref k)) if k == "stepaction"
        ));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn info_prints_identity() {
        let mut out = Vec::new();
        run(cli(&["info"]), &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("name: clusterresolver"));
        assert!(text.contains(r#""resolution.tekton.dev/type":"clusterresolver""#));
        assert!(text.contains("lookup namespace: tekton-cluster-scoped-resources"));
    }

    #[tokio::test]
    async fn bad_config_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "lookup_namespace = \"a/b\"\n").unwrap();
        let mut out = Vec::new();

        let err = run(cli(&["info", "--config", path.to_str().unwrap()]), &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::InvalidNamespace(_))));
    }
}
