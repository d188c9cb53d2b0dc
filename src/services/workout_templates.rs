use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::{ExperienceLevel, FocusArea, Paces, RaceType};
use crate::services::pace_calculator::format_pace;

/// Workout slot kinds. The kind decides which training pace a slot renders
/// with; rest and cross-training slots carry no pace at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    EasyRun,
    TempoRun,
    Intervals,
    LongRun,
    RacePaceRun,
    HillRepeats,
    Rest,
    CrossTrain,
}

/// One day of a 7-day microcycle: a label prefix plus the literal detail
/// used when no paces are available.
#[derive(Debug, Clone, Copy)]
pub struct WorkoutSlot {
    pub kind: WorkoutKind,
    pub label: &'static str,
    pub fallback: &'static str,
}

impl WorkoutSlot {
    const fn paced(kind: WorkoutKind, label: &'static str, fallback: &'static str) -> Self {
        Self { kind, label, fallback }
    }

    const fn rest() -> Self {
        Self {
            kind: WorkoutKind::Rest,
            label: "Rest",
            fallback: "",
        }
    }

    const fn cross_train() -> Self {
        Self {
            kind: WorkoutKind::CrossTrain,
            label: "Cross-Train",
            fallback: "",
        }
    }

    /// Render the slot to its display label, substituting the formatted
    /// pace when available and the fallback literal otherwise.
    fn render(&self, paces: Option<&Paces>) -> String {
        let pace = match self.kind {
            WorkoutKind::Rest | WorkoutKind::CrossTrain | WorkoutKind::HillRepeats => {
                return self.label.to_string();
            }
            WorkoutKind::EasyRun | WorkoutKind::LongRun => paces.map(|p| p.easy),
            WorkoutKind::TempoRun => paces.map(|p| p.tempo),
            WorkoutKind::Intervals => paces.map(|p| p.interval),
            WorkoutKind::RacePaceRun => paces.map(|p| p.marathon),
        };

        match pace {
            Some(pace) => format!("{} ({})", self.label, format_pace(pace)),
            None => format!("{} ({})", self.label, self.fallback),
        }
    }
}

/// The three per-phase microcycles for one (race type, experience level)
/// pair
#[derive(Debug, Clone, Copy)]
pub struct PhaseTemplates {
    pub base: &'static [WorkoutSlot],
    pub build: &'static [WorkoutSlot],
    pub taper: &'static [WorkoutSlot],
}

/// The rendered, per-call copy the adjuster and synthesizer work on. The
/// static registry itself is never touched after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustedTemplate {
    pub base: Vec<String>,
    pub build: Vec<String>,
    pub taper: Vec<String>,
}

macro_rules! easy {
    ($fallback:literal) => {
        WorkoutSlot::paced(WorkoutKind::EasyRun, "Easy Run", $fallback)
    };
}
macro_rules! tempo {
    ($fallback:literal) => {
        WorkoutSlot::paced(WorkoutKind::TempoRun, "Tempo Run", $fallback)
    };
}
macro_rules! intervals {
    ($fallback:literal) => {
        WorkoutSlot::paced(WorkoutKind::Intervals, "Intervals", $fallback)
    };
}
macro_rules! long_run {
    ($fallback:literal) => {
        WorkoutSlot::paced(WorkoutKind::LongRun, "Long Run", $fallback)
    };
}

const REST: WorkoutSlot = WorkoutSlot::rest();
const CROSS: WorkoutSlot = WorkoutSlot::cross_train();

const MARATHON_BEGINNER: PhaseTemplates = PhaseTemplates {
    base: &[easy!("30min"), REST, easy!("45min"), REST, long_run!("60min"), REST, CROSS],
    build: &[
        easy!("40min"),
        tempo!("20min"),
        REST,
        easy!("50min"),
        long_run!("75min"),
        REST,
        CROSS,
    ],
    taper: &[easy!("30min"), REST, easy!("20min"), REST, long_run!("45min"), REST, REST],
};

const MARATHON_INTERMEDIATE: PhaseTemplates = PhaseTemplates {
    base: &[easy!("45min"), REST, easy!("60min"), REST, long_run!("90min"), REST, CROSS],
    build: &[
        easy!("50min"),
        tempo!("30min"),
        REST,
        intervals!("6x800m"),
        long_run!("120min"),
        REST,
        CROSS,
    ],
    taper: &[easy!("40min"), REST, easy!("30min"), REST, long_run!("60min"), REST, REST],
};

const MARATHON_ADVANCED: PhaseTemplates = PhaseTemplates {
    base: &[easy!("60min"), REST, easy!("75min"), REST, long_run!("120min"), REST, CROSS],
    build: &[
        easy!("60min"),
        tempo!("45min"),
        REST,
        intervals!("8x1000m"),
        long_run!("150min"),
        REST,
        WorkoutSlot::paced(WorkoutKind::RacePaceRun, "Marathon Pace Run", "60min"),
    ],
    taper: &[easy!("45min"), REST, easy!("30min"), REST, long_run!("75min"), REST, REST],
};

const HALF_BEGINNER: PhaseTemplates = PhaseTemplates {
    base: &[easy!("20min"), REST, easy!("30min"), REST, long_run!("40min"), REST, CROSS],
    build: &[
        easy!("30min"),
        tempo!("15min"),
        REST,
        easy!("40min"),
        long_run!("50min"),
        REST,
        CROSS,
    ],
    taper: &[easy!("20min"), REST, easy!("15min"), REST, long_run!("30min"), REST, REST],
};

const HALF_INTERMEDIATE: PhaseTemplates = PhaseTemplates {
    base: &[easy!("30min"), REST, easy!("45min"), REST, long_run!("60min"), REST, CROSS],
    build: &[
        easy!("40min"),
        tempo!("20min"),
        REST,
        intervals!("4x800m"),
        long_run!("75min"),
        REST,
        CROSS,
    ],
    taper: &[easy!("30min"), REST, easy!("20min"), REST, long_run!("45min"), REST, REST],
};

const HALF_ADVANCED: PhaseTemplates = PhaseTemplates {
    base: &[easy!("45min"), REST, easy!("60min"), REST, long_run!("90min"), REST, CROSS],
    build: &[
        easy!("50min"),
        tempo!("30min"),
        REST,
        intervals!("6x800m"),
        long_run!("105min"),
        REST,
        WorkoutSlot::paced(WorkoutKind::RacePaceRun, "Half Marathon Pace Run", "45min"),
    ],
    taper: &[easy!("40min"), REST, easy!("25min"), REST, long_run!("60min"), REST, REST],
};

/// Process-wide read-only template registry: one entry per
/// (race type, experience level) pair, built once and never mutated.
static TEMPLATE_REGISTRY: Lazy<HashMap<(RaceType, ExperienceLevel), PhaseTemplates>> =
    Lazy::new(|| {
        HashMap::from([
            ((RaceType::Marathon, ExperienceLevel::Beginner), MARATHON_BEGINNER),
            ((RaceType::Marathon, ExperienceLevel::Intermediate), MARATHON_INTERMEDIATE),
            ((RaceType::Marathon, ExperienceLevel::Advanced), MARATHON_ADVANCED),
            ((RaceType::HalfMarathon, ExperienceLevel::Beginner), HALF_BEGINNER),
            ((RaceType::HalfMarathon, ExperienceLevel::Intermediate), HALF_INTERMEDIATE),
            ((RaceType::HalfMarathon, ExperienceLevel::Advanced), HALF_ADVANCED),
        ])
    });

// Build-phase caps: how many entries containing the marker substring may
// exist before a trigger stops appending. These are contract values.
const LONG_RUN_CAP: usize = 2;
const INTERVALS_CAP: usize = 2;
const TEMPO_RUN_CAP: usize = 2;
const EASY_RUN_CAP: usize = 4;

fn count_containing(workouts: &[String], marker: &str) -> usize {
    workouts.iter().filter(|w| w.contains(marker)).count()
}

fn pace_or<'a>(paces: Option<&Paces>, select: impl Fn(&Paces) -> f64, fallback: &'a str) -> String {
    match paces {
        Some(p) => format_pace(select(p)),
        None => fallback.to_string(),
    }
}

/// Apply one trigger to the build-phase sequence. Each trigger re-checks
/// the current count, so repeated applications stop at the cap. Rest and
/// Cross-Train triggers have no mutation action.
fn apply_trigger(build: &mut Vec<String>, trigger: WorkoutKind, paces: Option<&Paces>) {
    match trigger {
        WorkoutKind::LongRun => {
            if count_containing(build, "Long Run") < LONG_RUN_CAP {
                build.push(format!("Long Run (Extra - {})", pace_or(paces, |p| p.easy, "75min")));
            }
        }
        WorkoutKind::Intervals => {
            if count_containing(build, "Intervals") < INTERVALS_CAP {
                build.push(format!(
                    "Intervals (Extra - {})",
                    pace_or(paces, |p| p.interval, "6x800m")
                ));
            }
        }
        WorkoutKind::TempoRun => {
            if count_containing(build, "Tempo Run") < TEMPO_RUN_CAP {
                build.push(format!(
                    "Tempo Run (Extra - {})",
                    pace_or(paces, |p| p.tempo, "30min")
                ));
            }
        }
        WorkoutKind::EasyRun => {
            if count_containing(build, "Easy Run") < EASY_RUN_CAP {
                build.push(format!("Easy Run (Extra - {})", pace_or(paces, |p| p.easy, "45min")));
            }
        }
        WorkoutKind::HillRepeats => {
            if count_containing(build, "Hill Repeats") == 0 {
                build.push("Hill Repeats (Extra)".to_string());
            }
        }
        WorkoutKind::RacePaceRun | WorkoutKind::Rest | WorkoutKind::CrossTrain => {}
    }
}

/// Workout kinds a focus area maps onto
fn focus_triggers(area: FocusArea) -> &'static [WorkoutKind] {
    match area {
        FocusArea::Speed => &[WorkoutKind::TempoRun, WorkoutKind::Intervals],
        FocusArea::Endurance => &[WorkoutKind::LongRun, WorkoutKind::EasyRun],
        FocusArea::LongRuns => &[WorkoutKind::LongRun],
        FocusArea::Hills => &[WorkoutKind::HillRepeats],
        FocusArea::Recovery => &[WorkoutKind::Rest, WorkoutKind::CrossTrain],
        FocusArea::Consistency => &[WorkoutKind::EasyRun, WorkoutKind::CrossTrain],
    }
}

/// Render the registry template for `(race_type, experience_level)` into an
/// independently owned copy and apply the focus-area adjustments to its
/// build-phase sequence.
pub fn select_and_adjust(
    race_type: RaceType,
    experience_level: ExperienceLevel,
    paces: Option<&Paces>,
    focus_areas: &[FocusArea],
) -> AdjustedTemplate {
    let templates = &TEMPLATE_REGISTRY[&(race_type, experience_level)];

    let render = |slots: &[WorkoutSlot]| slots.iter().map(|s| s.render(paces)).collect();
    let mut adjusted = AdjustedTemplate {
        base: render(templates.base),
        build: render(templates.build),
        taper: render(templates.taper),
    };

    for area in focus_areas {
        for &trigger in focus_triggers(*area) {
            apply_trigger(&mut adjusted.build, trigger, paces);
        }
    }

    adjusted
}
