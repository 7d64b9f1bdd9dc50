mod cli;
mod config;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use assist_assistant::{Assistant, ChatMessage, ChatModel};
use assist_gemini::GeminiClient;
use assist_retrieval::RetrievalEngine;
use assist_workspace::LocalWorkspace;

use crate::cli::{Cli, Command};
use crate::config::AssistConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the answer.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AssistConfig::load(cli.config.as_deref())?;

    let output = run(cli, config).await?;
    println!("{output}");
    Ok(())
}

async fn run(cli: Cli, config: AssistConfig) -> Result<String> {
    let gemini = Arc::new(GeminiClient::new(config.gemini.clone())?);

    match cli.command {
        Command::Ask {
            workspace,
            history,
            prompt,
        } => {
            let mut messages = match history {
                Some(path) => read_history(&path)?,
                None => Vec::new(),
            };
            messages.push(ChatMessage::user(prompt));

            let mut assistant = Assistant::new(gemini.clone(), gemini.clone());
            // Without a key `complete` reports the configuration error, so
            // the workspace root is not opened.
            if workspace && ChatModel::is_available(gemini.as_ref()) {
                let engine = retrieval_engine(&cli.root, &config, gemini)?;
                assistant = assistant.with_retrieval(engine);
            }
            Ok(assistant.complete(messages, workspace).await?)
        }
        Command::Retrieve { query } => {
            let engine = retrieval_engine(&cli.root, &config, gemini)?;
            Ok(engine.retrieve_relevant(&query).await?)
        }
        Command::DescribeImage {
            image,
            prompt,
            mime_type,
        } => {
            let assistant = Assistant::new(gemini.clone(), gemini);
            Ok(assistant
                .describe_image(&prompt, &image, mime_type.as_deref())
                .await?)
        }
    }
}

fn retrieval_engine(
    root: &Path,
    config: &AssistConfig,
    gemini: Arc<GeminiClient>,
) -> Result<RetrievalEngine> {
    let workspace = LocalWorkspace::new(config.workspace.for_root(root))?;
    info!("Using workspace at {}", workspace.root().display());

    Ok(RetrievalEngine::new(
        config.retrieval.clone(),
        gemini,
        Arc::new(workspace),
    ))
}

fn read_history(path: &Path) -> Result<Vec<ChatMessage>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read history file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse history file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assist_assistant::ChatRole;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_history() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        std::fs::write(
            &path,
            r#"[{"role": "user", "text": "hi"}, {"role": "model", "text": "hello"}]"#,
        )
        .unwrap();

        let history = read_history(&path).unwrap();

        assert_eq!(
            history,
            vec![
                ChatMessage::new(ChatRole::User, "hi"),
                ChatMessage::new(ChatRole::Model, "hello"),
            ]
        );
    }

    #[tokio::test]
    async fn test_retrieve_without_key_is_configuration_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let cli = Cli::parse_from([
            "assist",
            "--root",
            temp_dir.path().to_str().unwrap(),
            "retrieve",
            "anything",
        ]);

        let err = run(cli, AssistConfig::default()).await.unwrap_err();
        let err = err
            .downcast_ref::<assist_retrieval::RetrievalError>()
            .unwrap();
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn test_ask_workspace_without_key_reports_missing_key() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing_root = temp_dir.path().join("missing");
        let cli = Cli::parse_from([
            "assist",
            "--root",
            missing_root.to_str().unwrap(),
            "ask",
            "--workspace",
            "explain main",
        ]);

        let err = run(cli, AssistConfig::default()).await.unwrap_err();
        let err = err
            .downcast_ref::<assist_assistant::AssistantError>()
            .unwrap();
        assert!(err.is_configuration());
    }
}
