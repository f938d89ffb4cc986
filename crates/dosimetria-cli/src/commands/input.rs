//! Sentence input flags shared by `compute` and `session save`.

use clap::Args;
use dosimetria_core::{Circumstance, Fraction, JudicialCircumstances, SentenceInputs};

#[derive(Args, Debug, Clone)]
pub struct SentenceArgs {
    /// Statutory minimum, years part
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min_years: i64,
    /// Statutory minimum, months part
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min_months: i64,
    /// Statutory maximum, years part
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub max_years: i64,
    /// Statutory maximum, months part
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub max_months: i64,
    /// Negative judicial circumstance (repeatable or comma separated), e.g. culpability, motive
    #[arg(long = "circumstance", value_delimiter = ',')]
    pub circumstances: Vec<Circumstance>,
    /// Number of legal aggravating factors (agravantes)
    #[arg(long, default_value_t = 0)]
    pub aggravating: u32,
    /// Number of legal mitigating factors (atenuantes)
    #[arg(long, default_value_t = 0)]
    pub mitigating: u32,
    /// Increase fraction: 0, 1/6, 1/3, 1/2 or 2/3 (anything else counts as 0)
    #[arg(long, default_value = "0")]
    pub increase: String,
    /// Decrease fraction: 0, 1/6, 1/3, 1/2 or 2/3 (anything else counts as 0)
    #[arg(long, default_value = "0")]
    pub decrease: String,
}

impl SentenceArgs {
    pub fn to_inputs(&self) -> SentenceInputs {
        SentenceInputs {
            min_years: self.min_years,
            min_months: self.min_months,
            max_years: self.max_years,
            max_months: self.max_months,
            circumstances: JudicialCircumstances::from_negative(self.circumstances.iter().copied()),
            aggravating: self.aggravating,
            mitigating: self.mitigating,
            increase_fraction: Fraction::from_label(&self.increase),
            decrease_fraction: Fraction::from_label(&self.decrease),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        sentence: SentenceArgs,
    }

    #[test]
    fn negative_bounds_parse_and_clamp_to_zero() {
        let parsed = Harness::try_parse_from([
            "dosimetria-cli",
            "--min-years",
            "-1",
            "--max-months",
            "-3",
            "--max-years",
            "2",
        ])
        .unwrap();
        assert_eq!(parsed.sentence.min_years, -1);
        assert_eq!(parsed.sentence.max_months, -3);

        let range = parsed.sentence.to_inputs().range();
        assert_eq!(range.min_months, 0.0);
        assert_eq!(range.max_months, 24.0);
    }
}
