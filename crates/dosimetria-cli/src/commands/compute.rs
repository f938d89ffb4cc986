use dosimetria_core::{format_duration, CalculationResult, Config, SentenceDuration, SentenceInputs};
use serde::Serialize;

use super::input::SentenceArgs;

/// What `compute` and `session recompute` print.
#[derive(Serialize)]
pub struct ComputeReport {
    pub inputs: SentenceInputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CalculationResult>,
    pub final_months: f64,
    pub duration: SentenceDuration,
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(12) as i32);
    (value * factor).round() / factor
}

impl ComputeReport {
    pub fn build(inputs: SentenceInputs, config: &Config) -> Self {
        let result = inputs.compute();
        let decimals = config.display.decimals;
        let rounded = CalculationResult {
            base_months: round_to(result.base_months, decimals),
            intermediate_months: round_to(result.intermediate_months, decimals),
            final_months: round_to(result.final_months, decimals),
        };
        Self {
            inputs,
            result: config.display.show_phases.then_some(rounded),
            final_months: rounded.final_months,
            duration: format_duration(result.final_months),
        }
    }
}

pub fn run(args: SentenceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let report = ComputeReport::build(args.to_inputs(), &config);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_configured_decimals() {
        assert_eq!(round_to(102.666_666, 3), 102.667);
        assert_eq!(round_to(102.666_666, 0), 103.0);
    }

    #[test]
    fn hides_phases_when_configured() {
        let mut config = Config::default();
        config.display.show_phases = false;
        let inputs = SentenceInputs {
            min_years: 4,
            max_years: 10,
            ..Default::default()
        };
        let report = ComputeReport::build(inputs, &config);
        assert!(report.result.is_none());
        assert_eq!(report.final_months, 48.0);
        assert_eq!(report.duration.text, "4 years");
    }
}
