use anyhow::{anyhow, Result};
use colored::Colorize;
use irops_application::context::live_context;
use irops_application::{DashboardService, Responder};
use irops_core::model::ModelId;
use irops_core::session::SessionContext;
use irops_core::source::DataOrigin;
use irops_warehouse::ConnectionCache;
use rustyline::DefaultEditor;
use std::str::FromStr;
use std::sync::Arc;

/// Runs the intelligence agent REPL.
///
/// Strictly one turn at a time: each question is answered to completion
/// before the next prompt is shown.
pub async fn run(model: &str) -> Result<()> {
    let model = ModelId::from_str(model).map_err(|_| {
        anyhow!("unknown model '{model}' (expected llama3.1-70b, llama3.1-8b, or mistral-large)")
    })?;

    let cache = Arc::new(ConnectionCache::from_env());
    let service = DashboardService::new(cache.clone());
    let responder = Responder::new(cache);

    let mut session = SessionContext::new();
    session.model = model;

    let mut rl = DefaultEditor::new()?;

    println!("{}", "=== IROPS Intelligence Agent ===".bright_magenta().bold());
    println!(
        "{}",
        format!(
            "Model: {} | '/clear' resets the conversation, '/quit' exits.",
            session.model
        )
        .bright_black()
    );
    println!();

    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "/quit" || trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed == "/clear" {
                    session.clear_transcript();
                    println!("{}", "Transcript cleared.".bright_black());
                    continue;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let context = live_context(&service, &session.filter).await;
                let reply = responder.respond(&mut session, trimmed, context).await;

                if reply.origin == DataOrigin::Fallback {
                    println!(
                        "{}",
                        "⚠ Intelligence endpoint unavailable - canned answer".yellow()
                    );
                }

                for line in reply.text.lines() {
                    println!("{}", line.bright_blue());
                }
                println!();
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
