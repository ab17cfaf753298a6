use clap::Parser;
use moviehit::application::{AppContext, RequestError};
use moviehit::config::{Config, LabelRule};
use moviehit::domain::movie::{DEFAULT_BUDGET, DEFAULT_RELEASE_YEAR, DEFAULT_RUNTIME};
use moviehit::domain::prediction::{HitLabel, PredictionResult};
use moviehit::infrastructure::observability::init_tracing;
use moviehit::interfaces::view_models::prediction_view_model::PredictionView;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

/// One-shot, headless movie hit prediction
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Budget in USD
    #[arg(long, default_value_t = DEFAULT_BUDGET)]
    budget: f64,

    /// Runtime in minutes
    #[arg(long, default_value_t = DEFAULT_RUNTIME)]
    runtime: f64,

    /// Release year (1900 to 2100)
    #[arg(long, default_value_t = DEFAULT_RELEASE_YEAR)]
    release_year: i32,

    /// Original language (default: "en" if offered, else the first option)
    #[arg(long)]
    language: Option<String>,

    /// Main genre (default: the first option)
    #[arg(long)]
    genre: Option<String>,

    /// Model artifact, overrides MODEL_PATH
    #[arg(long)]
    model: Option<PathBuf>,

    /// Options source, overrides OPTIONS_PATH
    #[arg(long)]
    options: Option<PathBuf>,

    /// 'threshold' or 'raw', overrides LABEL_RULE
    #[arg(long)]
    label_rule: Option<String>,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonReport {
    label: HitLabel,
    raw_label: HitLabel,
    hit_probability: Option<f64>,
    flop_probability: Option<f64>,
    confidence: Option<&'static str>,
}

impl From<&PredictionResult> for JsonReport {
    fn from(result: &PredictionResult) -> Self {
        Self {
            label: result.label,
            raw_label: result.raw_label,
            hit_probability: result.probabilities.map(|p| p.hit()),
            flop_probability: result.probabilities.map(|p| p.flop()),
            confidence: result.band().map(|band| band.message()),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing(None);

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(model) = args.model {
        config.model_path = model;
    }
    if let Some(options) = args.options {
        config.options_path = options;
    }
    if let Some(rule) = &args.label_rule {
        config.label_rule = LabelRule::from_str(rule)?;
    }

    let context = AppContext::build(&config)?;

    let mut inputs = context.default_inputs();
    inputs.budget = args.budget;
    inputs.runtime = args.runtime;
    inputs.release_year = args.release_year;
    if let Some(language) = args.language {
        inputs.original_language = language;
    }
    if let Some(genre) = args.genre {
        inputs.main_genre = genre;
    }

    let result = match context.submit(&inputs) {
        Ok(result) => result,
        Err(RequestError::Invalid(errors)) => {
            for message in errors.messages() {
                eprintln!("{}", message);
            }
            return Ok(ExitCode::from(2));
        }
        Err(RequestError::Model(e)) => return Err(e.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&JsonReport::from(&result))?);
    } else {
        print!("{}", PredictionView::from_result(&result).to_text());
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_every_flag_is_documented() {
        let command = Args::command();
        command.clone().debug_assert();

        for arg in command.get_arguments() {
            assert!(
                arg.get_help().is_some(),
                "--{} has no help text",
                arg.get_id()
            );
        }
    }

    #[test]
    fn test_defaults_match_the_form() {
        let args = Args::try_parse_from(["predict"]).unwrap();
        assert_eq!(args.budget, DEFAULT_BUDGET);
        assert_eq!(args.runtime, DEFAULT_RUNTIME);
        assert_eq!(args.release_year, DEFAULT_RELEASE_YEAR);

        let args = Args::try_parse_from(["predict", "--budget", "-5"]).unwrap();
        assert_eq!(args.budget, -5.0);
    }
}
