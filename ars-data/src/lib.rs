//! Data processing for arsenic samples.
//!
//! This crate turns the loaded sample set into the numeric series each chart
//! needs: annual exceedance rates, concentration histogram bins and per-type
//! scatter points.

pub mod exceedance;

/// Fixed-width binning of concentrations for the histogram.
pub mod histogram {
    use ars_core::sample::Sample;
    use serde::Serialize;

    /// A single histogram bar covering `[start, end)`.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct HistogramBin {
        pub start: f64,
        pub end: f64,
        pub count: u32,
    }

    impl HistogramBin {
        pub fn center(&self) -> f64 {
            (self.start + self.end) / 2.0
        }
    }

    /// Count concentrations into bins of `width` over `[start, end]`.
    ///
    /// Bins are half-open except the last one, which also holds values equal
    /// to `end`. Values outside the domain and samples without a concentration
    /// are not counted. Every bin is returned, including empty ones.
    pub fn bin_concentrations(samples: &[Sample], start: f64, end: f64, width: f64) -> Vec<HistogramBin> {
        if !(width > 0.0) || !(end > start) {
            return Vec::new();
        }
        let n_bins = ((end - start) / width).round() as usize;
        if n_bins == 0 {
            return Vec::new();
        }
        let mut bins: Vec<HistogramBin> = (0..n_bins)
            .map(|i| HistogramBin {
                start: start + width * i as f64,
                end: start + width * (i + 1) as f64,
                count: 0,
            })
            .collect();

        for value in samples.iter().filter_map(|s| s.concentration()) {
            if value < start || value > end {
                continue;
            }
            let idx = (((value - start) / width).floor() as usize).min(n_bins - 1);
            bins[idx].count += 1;
        }
        bins
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn with_arsenic(values: &[Option<f64>]) -> Vec<Sample> {
            values
                .iter()
                .map(|v| Sample {
                    arsenic_mg_l: *v,
                    sample_date: None,
                    water_body_type: None,
                    year: None,
                    exceeds_threshold: None,
                })
                .collect()
        }

        #[test]
        fn test_bin_layout() {
            let bins = bin_concentrations(&[], 0.0, 1.0, 0.005);
            assert_eq!(bins.len(), 200);
            assert_eq!(bins[0].start, 0.0);
            assert_eq!(bins[0].end, 0.005);
            assert!((bins[199].end - 1.0).abs() < 1e-12);
            assert!(bins.iter().all(|b| b.count == 0));
        }

        #[test]
        fn test_bin_counts() {
            let samples = with_arsenic(&[
                Some(0.0),
                Some(0.001),
                Some(0.01),
                Some(0.02),
                Some(1.0),
                Some(1.5),
                Some(-0.1),
                None,
                Some(f64::NAN),
            ]);
            let bins = bin_concentrations(&samples, 0.0, 1.0, 0.005);
            assert_eq!(bins[0].count, 2);
            // 0.01 starts the third bin
            assert_eq!(bins[2].count, 1);
            assert_eq!(bins[4].count, 1);
            // The upper edge belongs to the last bin
            assert_eq!(bins[199].count, 1);
            let total: u32 = bins.iter().map(|b| b.count).sum();
            assert_eq!(total, 5);
        }

        #[test]
        fn test_degenerate_domain() {
            assert!(bin_concentrations(&[], 0.0, 1.0, 0.0).is_empty());
            assert!(bin_concentrations(&[], 1.0, 0.0, 0.005).is_empty());
        }

        #[test]
        fn test_width_wider_than_domain_or_nan() {
            let samples = with_arsenic(&[Some(0.5)]);
            assert!(bin_concentrations(&samples, 0.0, 1.0, 3.0).is_empty());
            assert!(bin_concentrations(&samples, 0.0, 1.0, f64::NAN).is_empty());
            assert!(bin_concentrations(&samples, f64::NAN, 1.0, 0.005).is_empty());
            // A width up to twice the domain still rounds to a single bin
            let bins = bin_concentrations(&samples, 0.0, 1.0, 1.5);
            assert_eq!(bins.len(), 1);
            assert_eq!(bins[0].count, 1);
        }

        #[test]
        fn test_center() {
            let bin = HistogramBin { start: 0.01, end: 0.015, count: 3 };
            assert!((bin.center() - 0.0125).abs() < 1e-12);
        }
    }
}

/// Concentration-over-time points split by water body type.
pub mod scatter {
    use ars_core::sample::Sample;
    use ars_core::water_body::WaterBodyType;
    use chrono::NaiveDate;
    use serde::Serialize;
    use std::collections::BTreeMap;

    /// One plotted sample.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ScatterPoint {
        pub date: NaiveDate,
        pub value: f64,
    }

    /// Group plottable samples by water body type.
    ///
    /// A sample is plottable only when concentration, date and type are all
    /// present. Points keep the order of the input within each group.
    pub fn points_by_water_body(samples: &[Sample]) -> BTreeMap<WaterBodyType, Vec<ScatterPoint>> {
        let mut groups: BTreeMap<WaterBodyType, Vec<ScatterPoint>> = BTreeMap::new();
        for sample in samples {
            let (Some(value), Some(date), Some(water_body_type)) = (
                sample.concentration(),
                sample.sample_date,
                sample.water_body_type.as_ref(),
            ) else {
                continue;
            };
            groups
                .entry(water_body_type.clone())
                .or_default()
                .push(ScatterPoint { date, value });
        }
        groups
    }

}
