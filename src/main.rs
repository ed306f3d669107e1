//! Application entry point — IELTS speaking coach CLI.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Read API credentials from the environment — refuse to start if either
//!    key is absent.
//! 3. Load [`AppConfig`] from disk (returns default on first run).
//! 4. Create [`tokio`] runtime (current-thread — the whole tool is a single
//!    synchronous request/response loop).
//! 5. Build the speech and analysis clients from config + credentials.
//! 6. Run the interactive loop until `quit` or end of input.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use ielts_coach::{
    analysis::{ApiAnalyzer, ResponseAnalyzer},
    audio::{list_input_devices, MAX_DURATION_SECS, MIN_DURATION_SECS},
    config::{AppConfig, Credentials},
    pipeline::{CycleOutput, RecordingPipeline},
    session::{part_title, Mode, PartPrompts, Session},
    speech::{GoogleSpeechClient, SpeechRecognizer},
};

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("IELTS speaking coach starting up");

    // 2. Credentials — both external services are mandatory.
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Set the variable and restart.");
            std::process::exit(1);
        }
    };

    // 3. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 4. Tokio runtime — one user, one cycle at a time.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create tokio runtime");

    // 5. External collaborators
    let recognizer: Arc<dyn SpeechRecognizer> = Arc::new(GoogleSpeechClient::from_config(
        &config.speech,
        credentials.speech_api_key,
    ));
    let analyzer: Arc<dyn ResponseAnalyzer> = Arc::new(ApiAnalyzer::from_config(
        &config.analysis,
        credentials.analysis_api_key,
    ));
    let pipeline = RecordingPipeline::new(recognizer, analyzer, config.audio.clone());

    // 6. Interactive loop
    run_loop(&rt, &pipeline, &config);
    Ok(())
}

// ---------------------------------------------------------------------------
// Interactive loop
// ---------------------------------------------------------------------------

fn run_loop(rt: &tokio::runtime::Runtime, pipeline: &RecordingPipeline, config: &AppConfig) {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("IELTS Speaking Practice");
    println!("Welcome! Please select a mode to begin: practice | test");

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break, // end of input
        };
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(word) => word.to_lowercase(),
            None => continue,
        };

        // Mode selection gate: nothing else works until a mode is chosen.
        if session.mode() == Mode::Unset {
            match command.as_str() {
                "practice" => session.select_mode(Mode::Practice),
                "test" => session.select_mode(Mode::Test),
                "quit" | "exit" => return,
                _ => {
                    println!("Please select a mode first: practice | test");
                    continue;
                }
            }
            println!("Current mode: {}", session.mode().label());
            show_prompts(&session);
            continue;
        }

        match command.as_str() {
            "help" => show_help(),
            "prompts" => show_prompts(&session),
            "devices" => show_devices(),
            "record" => {
                let duration = words
                    .next()
                    .and_then(|arg| arg.parse::<u32>().ok())
                    .unwrap_or(config.audio.duration_secs);
                run_recording(rt, pipeline, config, &mut session, duration);
            }
            "next" if session.mode() == Mode::Test => {
                session.advance_part();
                show_prompts(&session);
            }
            "prev" if session.mode() == Mode::Test => {
                session.retreat_part();
                show_prompts(&session);
            }
            "reset" if session.mode() == Mode::Test => {
                session.reset();
                println!("Test reset.");
                show_prompts(&session);
            }
            "next" | "prev" | "reset" => {
                println!("Part navigation is only available in test mode.");
            }
            "quit" | "exit" => return,
            other => println!("Unknown command '{other}'. Type 'help' for commands."),
        }
    }
}

fn run_recording(
    rt: &tokio::runtime::Runtime,
    pipeline: &RecordingPipeline,
    config: &AppConfig,
    session: &mut Session,
    duration: u32,
) {
    if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&duration) {
        println!(
            "Recording duration must be between {MIN_DURATION_SECS} and \
             {MAX_DURATION_SECS} seconds."
        );
        return;
    }

    let device_index = config.audio.device_index.unwrap_or(0);
    println!("Recording for {duration}s... Speak now!");

    match rt.block_on(pipeline.run_cycle(device_index, duration)) {
        Ok(output) => {
            show_analysis(&output);
            session.push_response(output.transcript, output.analysis);
        }
        Err(e) => {
            log::error!("recording cycle failed: {e}");
            println!("{e}. Please try again.");
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn show_help() {
    println!("Commands:");
    println!("  prompts        show the prompts for the current part");
    println!("  record [secs]  record an answer ({MIN_DURATION_SECS}-{MAX_DURATION_SECS}s)");
    println!("  devices        list audio input devices");
    println!("  next / prev    move between test parts (test mode)");
    println!("  reset          restart the test at part 1 (test mode)");
    println!("  quit           exit");
}

fn show_prompts(session: &Session) {
    // Practice mode works on part 1 only; test mode follows the navigation.
    println!();
    println!("{}", part_title(session.current_part()));
    match session.current_prompts() {
        PartPrompts::Questions(questions) => {
            for question in *questions {
                println!("  {question}");
            }
        }
        PartPrompts::CueCard { topic, points } => {
            println!("  {topic}");
            println!("  You should say:");
            for point in *points {
                println!("  - {point}");
            }
        }
    }
}

fn show_devices() {
    match list_input_devices() {
        Ok(devices) if devices.is_empty() => println!("No input devices found."),
        Ok(devices) => {
            println!("Available input devices:");
            for device in devices {
                let marker = if device.is_default { " (default)" } else { "" };
                println!("  [{}] {}{marker}", device.index, device.name);
            }
        }
        Err(e) => println!("Could not list devices: {e}"),
    }
}

fn show_analysis(output: &CycleOutput) {
    println!();
    println!("Your response: {}", output.transcript);
    println!();
    println!("Feedback");
    let scores = &output.analysis.scores;
    println!("  Fluency:       {}/9", scores.fluency);
    println!("  Vocabulary:    {}/9", scores.vocabulary);
    println!("  Grammar:       {}/9", scores.grammar);
    println!("  Pronunciation: {}/9", scores.pronunciation);
    println!();
    println!("  Strengths:");
    for strength in &output.analysis.feedback.strengths {
        println!("  - {strength}");
    }
    println!("  Areas for improvement:");
    for improvement in &output.analysis.feedback.improvements {
        println!("  - {improvement}");
    }
}
