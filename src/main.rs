//! Interactive demo: type what you would say, one command per line.
//!
//! Runs the full voice pipeline against an in-memory store, a scripted
//! recognizer and a navigator that prints where it was sent.

use std::error::Error;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use fittrack_voice::adapters::{InMemoryFitnessStore, RecordingNavigator, ScriptedRecognitionProvider};
use fittrack_voice::application::{CommandDispatcher, StartOutcome, VoiceSessionController};
use fittrack_voice::config::AppConfig;
use fittrack_voice::domain::fitness::WorkoutPlanSummary;
use fittrack_voice::domain::foundation::{PlanId, UserId};
use fittrack_voice::domain::voice::IntentMatcher;
use fittrack_voice::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config.logging);

    let store = Arc::new(
        InMemoryFitnessStore::new()
            .with_user(UserId::new("demo-athlete")?)
            .with_plans(vec![
                WorkoutPlanSummary::new(PlanId::new(), "Push Day", Some("chest".to_string())),
                WorkoutPlanSummary::new(
                    PlanId::new(),
                    "Full Body Blast",
                    Some("full_body".to_string()),
                ),
            ]),
    );
    let navigator = Arc::new(RecordingNavigator::new());
    let provider = Arc::new(ScriptedRecognitionProvider::new());

    let dispatcher = CommandDispatcher::new(
        IntentMatcher::default(),
        store.clone(),
        navigator.clone(),
        Arc::new(config.routes.clone()),
    )
    .with_verbose_errors(config.features.verbose_errors);

    let mut controller = VoiceSessionController::new(
        provider.clone(),
        Arc::new(dispatcher),
        config.recognition.options(),
    )
    .with_enabled(config.features.voice_commands_enabled);

    tracing::info!(
        language = %config.recognition.language,
        supported = controller.is_supported(),
        "Voice engine ready"
    );
    print_help(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let utterance = line.trim();
        match utterance {
            "" => continue,
            "help" => {
                print_help(&controller);
                continue;
            }
            "quit" | "exit" => break,
            _ => {}
        }

        provider.push_utterance(utterance);
        match controller.start()? {
            StartOutcome::Started => {
                controller.run_session().await;
            }
            StartOutcome::AlreadyListening => println!("(already listening)"),
            StartOutcome::Unsupported => {
                println!("Voice commands are not available");
                break;
            }
        }

        println!("{}", serde_json::to_string_pretty(&controller.status())?);
        if let Some(path) = navigator.current() {
            println!("at {}", path);
        }
    }

    let workouts = store.workouts().await;
    tracing::info!(workouts = workouts.len(), "Demo finished");
    Ok(())
}

fn print_help(controller: &VoiceSessionController) {
    let commands = controller.commands();
    if commands.is_empty() {
        return;
    }
    println!("Try saying:");
    for command in commands {
        println!("  {}", command);
    }
}
