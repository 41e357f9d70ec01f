use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::domain::{BmiBand, DietStyle, NormalizedProfile};
use super::noise::NoiseSource;

/// The closed set of cause categories, in tie-breaking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CauseOfDeath {
    Cardiovascular,
    Stroke,
    Respiratory,
    Cancer,
    Type2Diabetes,
    Liver,
    KidneyFailure,
    SeriousInfection,
    Accident,
    Neurodegenerative,
}

impl CauseOfDeath {
    pub const COUNT: usize = 10;

    pub const ALL: [CauseOfDeath; Self::COUNT] = [
        CauseOfDeath::Cardiovascular,
        CauseOfDeath::Stroke,
        CauseOfDeath::Respiratory,
        CauseOfDeath::Cancer,
        CauseOfDeath::Type2Diabetes,
        CauseOfDeath::Liver,
        CauseOfDeath::KidneyFailure,
        CauseOfDeath::SeriousInfection,
        CauseOfDeath::Accident,
        CauseOfDeath::Neurodegenerative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CauseOfDeath::Cardiovascular => "Cardiovascular disease",
            CauseOfDeath::Stroke => "Stroke",
            CauseOfDeath::Respiratory => "Respiratory disease (COPD/Asthma)",
            CauseOfDeath::Cancer => "Cancer",
            CauseOfDeath::Type2Diabetes => "Type 2 diabetes complications",
            CauseOfDeath::Liver => "Liver disease",
            CauseOfDeath::KidneyFailure => "Kidney failure",
            CauseOfDeath::SeriousInfection => "Serious infection (pneumonia/sepsis)",
            CauseOfDeath::Accident => "Accident / trauma",
            CauseOfDeath::Neurodegenerative => "Neurodegenerative disease",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cause| cause.label() == label)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CauseOfDeath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a scoreboard listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CauseScore {
    pub cause: CauseOfDeath,
    pub label: &'static str,
    pub score: f64,
}

/// Fixed-size accumulator indexed by [`CauseOfDeath`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CauseScoreboard {
    scores: [f64; CauseOfDeath::COUNT],
}

impl CauseScoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, cause: CauseOfDeath, weight: f64) {
        self.scores[cause.index()] += weight;
    }

    pub fn score(&self, cause: CauseOfDeath) -> f64 {
        self.scores[cause.index()]
    }

    /// Adds one independent jitter draw to every category, in table order.
    pub fn apply_jitter<N>(&mut self, noise: &mut N)
    where
        N: NoiseSource + ?Sized,
    {
        for score in self.scores.iter_mut() {
            *score += noise.cause_jitter();
        }
    }

    /// Highest score; exact ties go to the category declared first.
    pub fn leader(&self) -> CauseOfDeath {
        let mut best = CauseOfDeath::ALL[0];
        for cause in CauseOfDeath::ALL.into_iter().skip(1) {
            if self.score(cause) > self.score(best) {
                best = cause;
            }
        }
        best
    }

    pub fn entries(&self) -> Vec<CauseScore> {
        CauseOfDeath::ALL
            .into_iter()
            .map(|cause| CauseScore {
                cause,
                label: cause.label(),
                score: self.score(cause),
            })
            .collect()
    }

    /// Entries sorted by descending score, ties kept in table order.
    pub fn ranked(&self) -> Vec<CauseScore> {
        let mut entries = self.entries();
        entries.sort_by(|left, right| right.score.total_cmp(&left.score));
        entries
    }
}

impl Serialize for CauseScoreboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries())
    }
}

/// Weighted evidence per cause, before jitter.
pub fn score_causes(profile: &NormalizedProfile, death_age: i32) -> CauseScoreboard {
    use CauseOfDeath::*;

    let mut board = CauseScoreboard::new();

    if profile.smoker {
        board.add(Cardiovascular, 6.0);
        board.add(Respiratory, 7.0);
        board.add(Cancer, 5.0);
        board.add(Stroke, 2.0);
    }
    if profile.drinks_alcohol {
        board.add(Liver, 7.0);
        board.add(Cancer, 2.0);
        board.add(Accident, 3.0);
        if profile.is_overworked() {
            board.add(Cardiovascular, 1.0);
        }
    }
    if profile.uses_drugs {
        board.add(Accident, 6.0);
        board.add(Liver, 2.0);
        board.add(SeriousInfection, 2.0);
    }

    match profile.bmi_band() {
        Some(BmiBand::Overweight) => {
            board.add(Cardiovascular, 2.0);
            board.add(Type2Diabetes, 2.0);
        }
        Some(BmiBand::Obese) => {
            board.add(Cardiovascular, 4.0);
            board.add(Type2Diabetes, 4.0);
            board.add(Stroke, 2.0);
            board.add(KidneyFailure, 1.0);
        }
        Some(BmiBand::SeverelyObese) => {
            board.add(Cardiovascular, 6.0);
            board.add(Type2Diabetes, 6.0);
            board.add(Stroke, 3.0);
            board.add(KidneyFailure, 3.0);
        }
        Some(BmiBand::Underweight) => {
            board.add(SeriousInfection, 3.0);
            board.add(Cancer, 1.0);
        }
        Some(BmiBand::Normal) | None => {}
    }

    if profile.is_short_sleeper() {
        board.add(Cardiovascular, 2.0);
        board.add(Accident, 3.0);
        board.add(SeriousInfection, 1.0);
    }
    if profile.is_high_stress() {
        board.add(Cardiovascular, 3.0);
        board.add(Stroke, 2.0);
    }

    if profile.is_sedentary() {
        board.add(Cardiovascular, 2.0);
        board.add(Type2Diabetes, 2.0);
        if profile.skips_exercise() {
            board.add(Stroke, 1.0);
        }
    }

    match profile.diet {
        DietStyle::JunkHeavy => {
            board.add(Cardiovascular, 2.0);
            board.add(Type2Diabetes, 2.0);
            board.add(Cancer, 1.0);
        }
        DietStyle::Balanced => {
            board.add(Cancer, -1.0);
            board.add(Cardiovascular, -1.0);
        }
        DietStyle::Vegan | DietStyle::Vegetarian | DietStyle::Other => {}
    }

    if profile.is_overworked() || profile.holds_multiple_jobs() {
        board.add(Accident, 2.0);
        board.add(Cardiovascular, 2.0);
    }
    // weaker social support
    if profile.single || profile.is_low_happiness() {
        board.add(Accident, 1.0);
        board.add(SeriousInfection, 1.0);
    }

    if death_age >= 80 {
        board.add(Neurodegenerative, 6.0);
        board.add(Cancer, 2.0);
    } else if death_age <= 55 {
        board.add(Accident, 3.0);
        if profile.smoker {
            board.add(Respiratory, 1.0);
        }
    }

    board
}
