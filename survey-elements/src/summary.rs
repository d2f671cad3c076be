//! Aggregated results of an opinion scale across many responses.

use std::collections::BTreeMap;

use survey_elements_types::{ElementId, ResponseDocument};

/// Summary of the answers to one opinion scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSummary {
    pub scale_range: u32,
    /// Number of valid answers.
    pub response_count: usize,
    /// `None` without answers.
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Answer count per option `1..=scale_range`; unanswered options are 0.
    pub distribution: BTreeMap<u32, usize>,
}

impl ScaleSummary {
    /// Summarize the answers to `element` across `responses`.
    ///
    /// Answers that are not whole numbers within `1..=scale_range` are skipped.
    pub fn from_responses<'a>(
        element: &ElementId,
        scale_range: u32,
        responses: impl IntoIterator<Item = &'a ResponseDocument>,
    ) -> Self {
        let mut distribution: BTreeMap<u32, usize> = (1..=scale_range).map(|i| (i, 0)).collect();
        let mut values = Vec::new();

        for document in responses {
            let Some(value) = document.get(element) else {
                continue;
            };
            let Some(option) = value
                .as_int()
                .and_then(|v| u32::try_from(v).ok())
                .filter(|v| (1..=scale_range).contains(v))
            else {
                tracing::debug!(element = %element, ?value, "skipping invalid scale answer");
                continue;
            };
            *distribution.entry(option).or_default() += 1;
            values.push(option);
        }

        values.sort_unstable();
        let response_count = values.len();
        let mean = (response_count > 0).then(|| {
            values.iter().map(|&v| f64::from(v)).sum::<f64>() / response_count as f64
        });
        let median = match response_count {
            0 => None,
            n if n % 2 == 1 => Some(f64::from(values[n / 2])),
            n => Some((f64::from(values[n / 2 - 1]) + f64::from(values[n / 2])) / 2.0),
        };

        Self {
            scale_range,
            response_count,
            mean,
            median,
            distribution,
        }
    }

    /// Bar height per option as a percentage of the most chosen option.
    pub fn bar_heights(&self) -> BTreeMap<u32, f64> {
        let max = self.distribution.values().copied().max().unwrap_or(0).max(1);
        self.distribution
            .iter()
            .map(|(&option, &count)| (option, count as f64 / max as f64 * 100.0))
            .collect()
    }
}
