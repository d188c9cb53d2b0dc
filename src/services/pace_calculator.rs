use crate::models::{ExperienceLevel, Paces};

/// Convert an `HH:MM:SS` string to total seconds. Malformed input yields
/// `None` and the caller falls back to the template's literal durations.
pub fn parse_time_to_seconds(time: &str) -> Option<u32> {
    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() != 3 {
        return None;
    }
    let hours: u32 = parts[0].parse().ok()?;
    let minutes: u32 = parts[1].parse().ok()?;
    let seconds: u32 = parts[2].parse().ok()?;
    Some(hours * 3600 + minutes * 60 + seconds)
}

/// Format seconds-per-kilometer as `MM:SS/km`. Minutes floor, seconds
/// round to nearest.
pub fn format_pace(seconds_per_km: f64) -> String {
    let minutes = (seconds_per_km / 60.0).floor() as u32;
    let seconds = (seconds_per_km - f64::from(minutes) * 60.0).round() as u32;
    format!("{minutes:02}:{seconds:02}/km")
}

/// Derive training paces from a goal race time.
///
/// Easy/tempo/interval paces deviate from the target race pace by
/// experience-level factors; more experienced runners train closer to
/// race pace on easy days and further below it on interval days.
pub fn calculate_paces(
    race_time_seconds: u32,
    race_distance_km: f64,
    experience_level: ExperienceLevel,
) -> Paces {
    let target = f64::from(race_time_seconds) / race_distance_km;

    let (easy_factor, tempo_factor, interval_factor) = match experience_level {
        ExperienceLevel::Beginner => (1.30, 1.05, 0.95),
        ExperienceLevel::Intermediate => (1.25, 1.00, 0.90),
        ExperienceLevel::Advanced => (1.20, 0.95, 0.85),
    };

    Paces {
        marathon: target,
        easy: target * easy_factor,
        tempo: target * tempo_factor,
        interval: target * interval_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_valid_time() {
        assert_eq!(parse_time_to_seconds("01:30:00"), Some(5400));
        assert_eq!(parse_time_to_seconds("03:45:30"), Some(13530));
        assert_eq!(parse_time_to_seconds("00:00:00"), Some(0));
    }

    #[test]
    fn test_parse_malformed_time() {
        assert_eq!(parse_time_to_seconds("90:00"), None);
        assert_eq!(parse_time_to_seconds("1:2:3:4"), None);
        assert_eq!(parse_time_to_seconds("aa:bb:cc"), None);
        assert_eq!(parse_time_to_seconds(""), None);
    }

    #[test]
    fn test_format_pace_rounding() {
        assert_eq!(format_pace(300.0), "05:00/km");
        assert_eq!(format_pace(255.9), "04:16/km");
        // seconds round half up
        assert_eq!(format_pace(254.5), "04:15/km");
        assert_eq!(format_pace(254.4), "04:14/km");
        assert_eq!(format_pace(61.0), "01:01/km");
    }

    #[test]
    fn test_pace_factors_per_level() {
        // 5400s over 21.0975km is ~255.96 s/km
        let paces = calculate_paces(5400, 21.0975, ExperienceLevel::Advanced);
        assert_eq!(format_pace(paces.marathon), "04:16/km");
        assert_eq!(format_pace(paces.easy), "05:07/km");
        assert!((paces.easy - paces.marathon * 1.20).abs() < 1e-9);
        assert!((paces.tempo - paces.marathon * 0.95).abs() < 1e-9);
        assert!((paces.interval - paces.marathon * 0.85).abs() < 1e-9);

        let beginner = calculate_paces(5400, 21.0975, ExperienceLevel::Beginner);
        assert!((beginner.easy - beginner.marathon * 1.30).abs() < 1e-9);
        assert!((beginner.tempo - beginner.marathon * 1.05).abs() < 1e-9);
        assert!((beginner.interval - beginner.marathon * 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_pace_ordering() {
        // interval is the fastest tier and easy the slowest; tempo sits at
        // or just above race pace depending on level
        for level in [
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
        ] {
            for time in [5400u32, 9000, 14400, 18000] {
                let paces = calculate_paces(time, 42.195, level);
                assert!(paces.interval <= paces.tempo);
                assert!(paces.tempo <= paces.marathon * 1.05 + 1e-9);
                assert!(paces.marathon <= paces.easy);
            }
        }
    }
}
