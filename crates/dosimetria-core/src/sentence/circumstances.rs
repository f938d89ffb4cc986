//! Judicial circumstances and legal aggravating/mitigating counts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The eight statutory criteria weighed when fixing the base penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Circumstance {
    Culpability,
    CriminalRecord,
    SocialConduct,
    Personality,
    Motive,
    Circumstances,
    Consequences,
    VictimBehavior,
}

impl Circumstance {
    pub const ALL: [Circumstance; 8] = [
        Circumstance::Culpability,
        Circumstance::CriminalRecord,
        Circumstance::SocialConduct,
        Circumstance::Personality,
        Circumstance::Motive,
        Circumstance::Circumstances,
        Circumstance::Consequences,
        Circumstance::VictimBehavior,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Circumstance::Culpability => "culpability",
            Circumstance::CriminalRecord => "criminal_record",
            Circumstance::SocialConduct => "social_conduct",
            Circumstance::Personality => "personality",
            Circumstance::Motive => "motive",
            Circumstance::Circumstances => "circumstances",
            Circumstance::Consequences => "consequences",
            Circumstance::VictimBehavior => "victim_behavior",
        }
    }
}

impl fmt::Display for Circumstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Circumstance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Circumstance::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| format!("unknown circumstance: {s}"))
    }
}

/// Which judicial circumstances weigh against the defendant.
///
/// Serialized as a map of circumstance name to flag. Only the number of
/// `true` flags affects the base penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JudicialCircumstances {
    pub culpability: bool,
    pub criminal_record: bool,
    pub social_conduct: bool,
    pub personality: bool,
    pub motive: bool,
    pub circumstances: bool,
    pub consequences: bool,
    pub victim_behavior: bool,
}

impl JudicialCircumstances {
    /// Build a set with exactly the given circumstances marked negative.
    pub fn from_negative<I>(negative: I) -> Self
    where
        I: IntoIterator<Item = Circumstance>,
    {
        let mut set = Self::default();
        for circumstance in negative {
            set.set(circumstance, true);
        }
        set
    }

    pub fn get(&self, circumstance: Circumstance) -> bool {
        match circumstance {
            Circumstance::Culpability => self.culpability,
            Circumstance::CriminalRecord => self.criminal_record,
            Circumstance::SocialConduct => self.social_conduct,
            Circumstance::Personality => self.personality,
            Circumstance::Motive => self.motive,
            Circumstance::Circumstances => self.circumstances,
            Circumstance::Consequences => self.consequences,
            Circumstance::VictimBehavior => self.victim_behavior,
        }
    }

    pub fn set(&mut self, circumstance: Circumstance, negative: bool) {
        let flag = match circumstance {
            Circumstance::Culpability => &mut self.culpability,
            Circumstance::CriminalRecord => &mut self.criminal_record,
            Circumstance::SocialConduct => &mut self.social_conduct,
            Circumstance::Personality => &mut self.personality,
            Circumstance::Motive => &mut self.motive,
            Circumstance::Circumstances => &mut self.circumstances,
            Circumstance::Consequences => &mut self.consequences,
            Circumstance::VictimBehavior => &mut self.victim_behavior,
        };
        *flag = negative;
    }

    /// Number of circumstances marked negative (0..=8).
    pub fn negative_count(&self) -> u32 {
        Circumstance::ALL
            .into_iter()
            .filter(|c| self.get(*c))
            .count() as u32
    }

    pub fn negative(&self) -> Vec<Circumstance> {
        Circumstance::ALL
            .into_iter()
            .filter(|c| self.get(*c))
            .collect()
    }
}

/// Counts of legal aggravating (agravantes) and mitigating (atenuantes) factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdjustmentCounts {
    pub aggravating: u32,
    pub mitigating: u32,
}

impl AdjustmentCounts {
    pub fn new(aggravating: u32, mitigating: u32) -> Self {
        Self {
            aggravating,
            mitigating,
        }
    }

    /// Aggravating minus mitigating.
    pub fn net(&self) -> i64 {
        i64::from(self.aggravating) - i64::from(self.mitigating)
    }
}
