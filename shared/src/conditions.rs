//! Daily condition classification
//!
//! Converts an hourly series restricted to a single date into a discrete
//! sky/precipitation icon plus daily aggregates. Thresholds are a fixed
//! contract shared with the scorer and the UI icon set.

use crate::models::{DailyCondition, HourlySeries};

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

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Classify one calendar date of an hourly series.
///
/// Dates with no matching hours yield the default `cloud` icon with zero
/// aggregates rather than an error.
pub fn classify(series: &HourlySeries, date: &str) -> DailyCondition {
    let idx: Vec<usize> = series
        .hours
        .iter()
        .enumerate()
        .filter(|(_, t)| t.starts_with(date))
        .map(|(i, _)| i)
        .collect();

    if idx.is_empty() {
        return DailyCondition {
            date: date.to_string(),
            icon: "cloud".to_string(),
            temp_avg_c: 0.0,
            wind_avg_mph: 0.0,
            rain_sum_mm: 0.0,
        };
    }

    let pick = |values: &[f64]| -> Vec<f64> {
        idx.iter()
            .map(|&i| values.get(i).copied().unwrap_or(0.0))
            .collect()
    };

    let rain = pick(&series.rain_mm);
    let pop = pick(&series.pop);
    let gust = pick(&series.gust_mph);
    let cloud = pick(&series.cloud_pct);
    let temp = pick(&series.temp_c);
    let wind = pick(&series.wind_mph);

    let rain_sum = sum(&rain);
    let pop_max = max(&pop);
    let gust_max = max(&gust);
    let cloud_avg = avg(&cloud);
    let temp_avg = avg(&temp);
    let wind_avg = avg(&wind);

    let precip_likely = pop_max >= 40.0 || rain_sum >= 1.0;
    let very_wet = rain_sum >= 6.0 || (pop_max >= 80.0 && rain_sum >= 2.0);
    let thunder_risk = pop_max >= 70.0 && rain_sum >= 4.0 && gust_max >= 35.0;

    // Priority order is part of the contract: first match wins.
    let icon = if thunder_risk {
        "thunder"
    } else if temp_avg <= 1.5 && precip_likely {
        "snow"
    } else if temp_avg > 1.5 && temp_avg <= 3.0 && precip_likely {
        "sleet"
    } else if very_wet {
        "heavy-rain"
    } else if precip_likely {
        "rain"
    } else if cloud_avg < 20.0 {
        "sun"
    } else if cloud_avg < 60.0 {
        "light-cloud"
    } else if cloud_avg >= 85.0 && !precip_likely {
        "dark-cloud"
    } else {
        "cloud"
    };

    DailyCondition {
        date: date.to_string(),
        icon: icon.to_string(),
        temp_avg_c: round1(temp_avg),
        wind_avg_mph: round1(wind_avg),
        rain_sum_mm: round1(rain_sum),
    }
}

/// Classify every date of a window
pub fn classify_window(series: &HourlySeries, dates: &[String]) -> Vec<DailyCondition> {
    dates.iter().map(|d| classify(series, d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_for_date(
        date: &str,
        rain: Vec<f64>,
        pop: Vec<f64>,
        gust: Vec<f64>,
        cloud: Vec<f64>,
        temp: Vec<f64>,
    ) -> HourlySeries {
        let n = rain.len();
        HourlySeries {
            hours: (0..n).map(|h| format!("{date}T{h:02}:00")).collect(),
            rain_mm: rain,
            pop,
            wind_mph: vec![10.0; n],
            gust_mph: gust,
            temp_c: temp,
            cloud_pct: cloud,
        }
    }

    #[test]
    fn empty_series_yields_default_cloud() {
        let out = classify(&HourlySeries::default(), "2025-06-01");
        assert_eq!(out.icon, "cloud");
        assert_eq!(out.temp_avg_c, 0.0);
        assert_eq!(out.wind_avg_mph, 0.0);
        assert_eq!(out.rain_sum_mm, 0.0);
    }

    #[test]
    fn thunder_takes_priority_over_heavy_rain() {
        let s = series_for_date(
            "2025-06-01",
            vec![2.0, 2.5],
            vec![75.0, 75.0],
            vec![40.0, 36.0],
            vec![90.0, 90.0],
            vec![15.0, 16.0],
        );
        assert_eq!(classify(&s, "2025-06-01").icon, "thunder");
    }

    #[test]
    fn cold_precip_is_snow_then_sleet() {
        let cold = series_for_date(
            "2025-01-10",
            vec![1.0, 1.0],
            vec![60.0, 60.0],
            vec![10.0, 10.0],
            vec![90.0, 90.0],
            vec![1.0, 1.5],
        );
        assert_eq!(classify(&cold, "2025-01-10").icon, "snow");

        let cool = series_for_date(
            "2025-01-10",
            vec![1.0, 1.0],
            vec![60.0, 60.0],
            vec![10.0, 10.0],
            vec![90.0, 90.0],
            vec![2.0, 3.0],
        );
        assert_eq!(classify(&cool, "2025-01-10").icon, "sleet");
    }

    #[test]
    fn pop_exactly_forty_counts_as_precip_likely() {
        let s = series_for_date(
            "2025-06-01",
            vec![0.0, 0.0],
            vec![40.0, 10.0],
            vec![5.0, 5.0],
            vec![10.0, 10.0],
            vec![15.0, 15.0],
        );
        assert_eq!(classify(&s, "2025-06-01").icon, "rain");
    }

    #[test]
    fn heavy_rain_via_pop_and_accumulation() {
        let s = series_for_date(
            "2025-06-01",
            vec![1.0, 1.2],
            vec![85.0, 85.0],
            vec![10.0, 10.0],
            vec![95.0, 95.0],
            vec![14.0, 14.0],
        );
        assert_eq!(classify(&s, "2025-06-01").icon, "heavy-rain");
    }

    #[test]
    fn dry_sky_icons_follow_cloud_cover() {
        let mk = |cloud: f64| {
            series_for_date(
                "2025-06-01",
                vec![0.0; 3],
                vec![5.0; 3],
                vec![5.0; 3],
                vec![cloud; 3],
                vec![15.0; 3],
            )
        };
        assert_eq!(classify(&mk(10.0), "2025-06-01").icon, "sun");
        assert_eq!(classify(&mk(40.0), "2025-06-01").icon, "light-cloud");
        assert_eq!(classify(&mk(70.0), "2025-06-01").icon, "cloud");
        assert_eq!(classify(&mk(90.0), "2025-06-01").icon, "dark-cloud");
    }

    #[test]
    fn aggregates_round_to_one_decimal() {
        let s = series_for_date(
            "2025-06-01",
            vec![0.33, 0.33, 0.33],
            vec![10.0; 3],
            vec![5.0; 3],
            vec![10.0; 3],
            vec![11.11, 11.11, 11.11],
        );
        let out = classify(&s, "2025-06-01");
        assert_eq!(out.rain_sum_mm, 1.0);
        assert_eq!(out.temp_avg_c, 11.1);
    }

    #[test]
    fn only_hours_of_the_requested_date_are_used() {
        let mut s = series_for_date(
            "2025-06-01",
            vec![0.0, 0.0],
            vec![0.0, 0.0],
            vec![0.0, 0.0],
            vec![10.0, 10.0],
            vec![15.0, 15.0],
        );
        // An adjacent soggy day must not leak in
        s.hours.push("2025-06-02T00:00".to_string());
        s.rain_mm.push(10.0);
        s.pop.push(100.0);
        s.gust_mph.push(50.0);
        s.cloud_pct.push(100.0);
        s.temp_c.push(15.0);
        s.wind_mph.push(10.0);

        assert_eq!(classify(&s, "2025-06-01").icon, "sun");
    }
}
