//! Suitability scoring
//!
//! Converts window-wide forecast aggregates plus rock type and travel
//! distance into a 0-100 score and up to three human-readable reasons.

use serde::{Deserialize, Serialize};

use crate::models::HourlySeries;

/// Scoring output: the composite score and its explanation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    pub score: u8,
    pub reasons: Vec<String>,
}

/// Target temperature band for friction, derived from rock type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempBand {
    pub min: f64,
    pub max: f64,
}

fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

fn avg(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        sum(values) / values.len() as f64
    }
}

fn max(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |m, &x| if x > m { x } else { m })
}

fn is_gritstone(rock: &str) -> bool {
    // The catalog spells it "grit" and "quarried grit"
    rock.contains("grit") || rock == "sandstone"
}

/// Rock-derived temperature band. The first listed rock type decides:
/// gritstone/sandstone climbs best cool, limestone warmer, everything
/// else in between.
pub fn temp_band(rocks: &[String]) -> TempBand {
    match rocks.first() {
        Some(rock) if is_gritstone(rock) => TempBand { min: 6.0, max: 12.0 },
        Some(rock) if rock == "limestone" => TempBand {
            min: 12.0,
            max: 18.0,
        },
        _ => TempBand { min: 8.0, max: 16.0 },
    }
}

/// Friction fraction: 1 inside the band, degrading linearly to 0 over a
/// 10 degree departure outside either bound.
fn friction_fraction(temp: f64, band: TempBand) -> f64 {
    if temp < band.min {
        (1.0 - (band.min - temp) / 10.0).max(0.0)
    } else if temp > band.max {
        (1.0 - (temp - band.max) / 10.0).max(0.0)
    } else {
        1.0
    }
}

/// Score a region's forecast over the full requested window.
///
/// `distance_mins` is `None` when no reference location is available, in
/// which case the distance multiplier is 1 and no distance reason is
/// emitted. `max_drive_mins` may be infinite (no limit).
pub fn score_region(
    series: &HourlySeries,
    rocks: &[String],
    distance_mins: Option<u32>,
    max_drive_mins: f64,
) -> Assessment {
    let rain = avg(&series.rain_mm);
    let pop = avg(&series.pop);
    let wind = avg(&series.wind_mph);
    let gust = max(&series.gust_mph);
    let temp = avg(&series.temp_c);
    let cloud = avg(&series.cloud_pct);

    // Dryness, 0-40
    let dryness_pct = (100.0 - (rain * 12.0 + pop * 0.6)).max(0.0);
    let dryness_score = dryness_pct / 100.0 * 40.0;

    // Wind, 0-25
    let mut wind_penalty = 0.0;
    if wind > 25.0 {
        wind_penalty += (wind - 25.0) * 0.8;
    }
    if gust > 30.0 {
        wind_penalty += (gust - 30.0) * 0.5;
    }
    let wind_score = (25.0 - wind_penalty).max(0.0);

    // Temperature, 0-20
    let band = temp_band(rocks);
    let friction = friction_fraction(temp, band);
    let temp_score = friction * 20.0;

    // Cloud cover is desirable when too warm, clear skies otherwise
    let cloud_bonus = if temp > band.max {
        (cloud / 100.0) * 10.0
    } else {
        (1.0 - cloud / 100.0) * 5.0
    };

    let base_score = (dryness_score + wind_score + temp_score + cloud_bonus).clamp(0.0, 100.0);

    let dist_multiplier = match distance_mins {
        None => 1.0,
        Some(dist) => {
            let bound = max_drive_mins.max(30.0);
            let dist = f64::from(dist);
            if dist <= bound {
                1.0
            } else {
                (1.0 - (dist - bound) / 180.0).max(0.6)
            }
        }
    };

    let score = (base_score * dist_multiplier).clamp(0.0, 100.0).round() as u8;

    let reasons = build_reasons(ReasonInputs {
        rain_sum: sum(&series.rain_mm),
        pop_max: max(&series.pop),
        wind,
        gust,
        temp,
        cloud,
        friction,
        band,
        distance_mins,
    });

    Assessment { score, reasons }
}

struct ReasonInputs {
    rain_sum: f64,
    pop_max: f64,
    wind: f64,
    gust: f64,
    temp: f64,
    cloud: f64,
    friction: f64,
    band: TempBand,
    distance_mins: Option<u32>,
}

/// One reason per category, in a fixed order, truncated to three.
fn build_reasons(inputs: ReasonInputs) -> Vec<String> {
    let mut reasons = Vec::with_capacity(5);

    // Precipitation: same thresholds as the classifier
    let precip = if inputs.pop_max >= 70.0 || inputs.rain_sum >= 4.0 {
        "Rain likely"
    } else if inputs.pop_max >= 40.0 || inputs.rain_sum >= 1.0 {
        "Showers possible"
    } else if inputs.pop_max < 20.0 && inputs.rain_sum < 0.2 {
        "Very low chance of rain"
    } else {
        "Low chance of rain"
    };
    reasons.push(precip.to_string());

    let wind_reason = if inputs.wind > 25.0 || inputs.gust > 30.0 {
        "Gusty"
    } else if inputs.wind < 8.0 && inputs.gust < 15.0 {
        "Calm winds"
    } else {
        "Light winds"
    };
    reasons.push(wind_reason.to_string());

    let temp_reason = if inputs.friction >= 0.9 {
        "Good temps for friction"
    } else if inputs.temp > inputs.band.max + 8.0 {
        "Hot"
    } else if inputs.temp > inputs.band.max {
        "Warm, seek shade"
    } else {
        "Mild"
    };
    reasons.push(temp_reason.to_string());

    if inputs.cloud < 40.0 && inputs.temp <= inputs.band.max {
        reasons.push("Some sun for drying".to_string());
    }

    if let Some(dist) = inputs.distance_mins {
        if dist <= 45 {
            reasons.push("Close by".to_string());
        } else if dist <= 90 {
            reasons.push("Within reach".to_string());
        }
    }

    reasons.truncate(3);
    reasons
}
