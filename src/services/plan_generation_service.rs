use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ExperienceLevel, Paces, Phase, PlanError, PlanRequest, PlanWeek, RaceType};
use crate::services::pace_calculator::{calculate_paces, format_pace};
use crate::services::workout_templates::{select_and_adjust, AdjustedTemplate};

/// Fixed taper length at the end of every plan
pub const TAPER_WEEKS: u32 = 3;
/// Shortest accepted plan: the taper plus two weeks of base/build
pub const MIN_PLAN_WEEKS: u32 = TAPER_WEEKS + 2;

/// Matches the minute count embedded in a template label, e.g. `(60min)`
static DURATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d+)min\)").unwrap());

/// Generate a complete week-by-week training plan.
///
/// Pure and synchronous: derives paces from the goal time when present,
/// renders and adjusts the workout template, then synthesizes one
/// `PlanWeek` per week. The only failure is a plan shorter than
/// [`MIN_PLAN_WEEKS`].
pub fn generate_plan(request: &PlanRequest) -> Result<Vec<PlanWeek>, PlanError> {
    let paces = request
        .goal_time_seconds
        .map(|secs| calculate_paces(secs, request.race_type.distance_km(), request.experience_level));

    let template = select_and_adjust(
        request.race_type,
        request.experience_level,
        paces.as_ref(),
        &request.focus_areas,
    );

    synthesize_weeks(request, paces.as_ref(), &template)
}

/// Split the plan into phases and instantiate each week from the adjusted
/// template, applying the long-run progression in base and build weeks.
fn synthesize_weeks(
    request: &PlanRequest,
    paces: Option<&Paces>,
    template: &AdjustedTemplate,
) -> Result<Vec<PlanWeek>, PlanError> {
    let total_weeks = request.total_weeks;
    if total_weeks < MIN_PLAN_WEEKS {
        return Err(PlanError::DurationTooShort { min: MIN_PLAN_WEEKS });
    }

    // 70% of the non-taper weeks go to the build phase, the rest to base
    let build_weeks = ((total_weeks - TAPER_WEEKS) as f64 * 0.7).floor() as u32;
    let base_weeks = total_weeks - TAPER_WEEKS - build_weeks;

    let mut plan = Vec::with_capacity(total_weeks as usize);
    for week in 1..=total_weeks {
        let (phase, phase_template) = if week <= base_weeks {
            (Phase::Base, &template.base)
        } else if week <= base_weeks + build_weeks {
            (Phase::Build, &template.build)
        } else {
            (Phase::Taper, &template.taper)
        };

        let mut workouts = phase_template.clone();
        progress_long_run(
            &mut workouts,
            phase,
            week,
            base_weeks,
            request.race_type,
            request.experience_level,
            paces,
        );

        plan.push(PlanWeek {
            week,
            phase,
            workouts,
        });
    }

    Ok(plan)
}

/// Overwrite the first long-run entry of a base or build week with a
/// progressively scaled distance (paces available) or duration (fallback
/// mode). Taper weeks keep their template entry untouched.
fn progress_long_run(
    workouts: &mut [String],
    phase: Phase,
    week: u32,
    base_weeks: u32,
    race_type: RaceType,
    experience_level: ExperienceLevel,
    paces: Option<&Paces>,
) {
    if phase == Phase::Taper {
        return;
    }
    let Some(index) = workouts.iter().position(|w| w.contains("Long Run")) else {
        return;
    };

    if let Some(paces) = paces {
        let mut distance_km = long_run_distance_km(race_type, experience_level, week);
        if phase == Phase::Build {
            distance_km = distance_km.min(build_distance_cap_km(race_type, experience_level));
        }
        workouts[index] = format!(
            "Long Run ({distance_km:.1}km at {})",
            format_pace(paces.easy)
        );
    } else if let Some(captures) = DURATION_RE.captures(&workouts[index]) {
        if let Ok(minutes) = captures[1].parse::<u32>() {
            let minutes = match phase {
                // +10 minutes per elapsed base week
                Phase::Base => minutes + 10 * (week - 1),
                // +15 minutes per elapsed build week
                Phase::Build => minutes + 15 * (week - base_weeks - 1),
                Phase::Taper => minutes,
            };
            workouts[index] = format!("Long Run ({minutes}min)");
        }
    }
    // No parseable duration: leave the entry as-is
}

/// Linear weekly long-run progression in kilometers
fn long_run_distance_km(race_type: RaceType, experience_level: ExperienceLevel, week: u32) -> f64 {
    let week = f64::from(week);
    match (race_type, experience_level) {
        (RaceType::Marathon, ExperienceLevel::Beginner) => 5.0 + week * 2.0,
        (RaceType::Marathon, ExperienceLevel::Intermediate) => 8.0 + week * 2.5,
        (RaceType::Marathon, ExperienceLevel::Advanced) => 10.0 + week * 3.0,
        (RaceType::HalfMarathon, ExperienceLevel::Beginner) => 3.0 + week * 1.0,
        (RaceType::HalfMarathon, ExperienceLevel::Intermediate) => 5.0 + week * 1.5,
        (RaceType::HalfMarathon, ExperienceLevel::Advanced) => 7.0 + week * 2.0,
    }
}

/// Build-phase ceiling for the long run distance
fn build_distance_cap_km(race_type: RaceType, experience_level: ExperienceLevel) -> f64 {
    match (race_type, experience_level) {
        (RaceType::Marathon, ExperienceLevel::Beginner) => 20.0,
        (RaceType::Marathon, ExperienceLevel::Intermediate) => 28.0,
        (RaceType::Marathon, ExperienceLevel::Advanced) => 32.0,
        (RaceType::HalfMarathon, ExperienceLevel::Beginner) => 10.0,
        (RaceType::HalfMarathon, ExperienceLevel::Intermediate) => 15.0,
        (RaceType::HalfMarathon, ExperienceLevel::Advanced) => 18.0,
    }
}
