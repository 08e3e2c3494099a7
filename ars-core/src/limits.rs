//! Regulatory and presentation constants shared by every chart.

/// Maximum permissible arsenic concentration in drinking water (mg/L)
/// under NOM-127-SSA1-2021.
pub const NOM127_ARSENIC_LIMIT_MG_L: f64 = 0.01;

/// First calendar year covered by the monitoring series.
pub const YEAR_MIN: i32 = 2012;

/// Last calendar year covered by the monitoring series.
pub const YEAR_MAX: i32 = 2024;

/// Histogram bin width (mg/L).
pub const HISTOGRAM_BIN_WIDTH_MG_L: f64 = 0.005;

/// Concentration domain binned by the histogram (mg/L).
pub const HISTOGRAM_DOMAIN_MG_L: (f64, f64) = (0.0, 1.0);

/// Concentration window shown on the value axis of the histogram and scatter
/// charts (mg/L).
pub const DISPLAY_WINDOW_MG_L: (f64, f64) = (0.0, 0.2);

/// Returns true if `year` lies inside `[YEAR_MIN, YEAR_MAX]`.
pub fn in_monitoring_span(year: i32) -> bool {
    (YEAR_MIN..=YEAR_MAX).contains(&year)
}
