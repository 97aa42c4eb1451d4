//! Static sales datasets
//!
//! Three read-only series keyed by reporting period.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DashboardError;

/// Reporting period selectable in the chart filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartPeriod {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl ChartPeriod {
    /// Get all periods in filter order
    pub fn all() -> &'static [ChartPeriod] {
        &[ChartPeriod::Monthly, ChartPeriod::Quarterly, ChartPeriod::Yearly]
    }

    /// Key used by the filter `<select>`
    pub fn key(&self) -> &'static str {
        match self {
            ChartPeriod::Monthly => "monthly",
            ChartPeriod::Quarterly => "quarterly",
            ChartPeriod::Yearly => "yearly",
        }
    }

    /// Human label for the filter option
    pub fn label(&self) -> &'static str {
        match self {
            ChartPeriod::Monthly => "Monthly",
            ChartPeriod::Quarterly => "Quarterly",
            ChartPeriod::Yearly => "Yearly",
        }
    }

    pub fn dataset(&self) -> &'static ChartDataset {
        match self {
            ChartPeriod::Monthly => &MONTHLY,
            ChartPeriod::Quarterly => &QUARTERLY,
            ChartPeriod::Yearly => &YEARLY,
        }
    }
}

impl std::fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ChartPeriod {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(ChartPeriod::Monthly),
            "quarterly" => Ok(ChartPeriod::Quarterly),
            "yearly" => Ok(ChartPeriod::Yearly),
            _ => Err(DashboardError::UnknownPeriod(s.to_string())),
        }
    }
}

/// Labels and values of one period, `labels.len() == data.len()`
#[derive(Debug, PartialEq)]
pub struct ChartDataset {
    pub labels: &'static [&'static str],
    pub data: &'static [f64],
}

impl ChartDataset {
    /// `(label, value)` pairs in order
    pub fn points(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.labels.iter().copied().zip(self.data.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }
}

static MONTHLY: ChartDataset = ChartDataset {
    labels: &["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"],
    data: &[3100.0, 4500.0, 5000.0, 6200.0, 7200.0, 6900.0, 8100.0],
};

static QUARTERLY: ChartDataset = ChartDataset {
    labels: &["Q1", "Q2", "Q3", "Q4"],
    data: &[12600.0, 18900.0, 20500.0, 17500.0],
};

static YEARLY: ChartDataset = ChartDataset {
    labels: &["2021", "2022", "2023", "2024", "2025"],
    data: &[52000.0, 68000.0, 74500.0, 81000.0, 89500.0],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_data() {
        for period in ChartPeriod::all() {
            let dataset = period.dataset();
            assert_eq!(dataset.labels.len(), dataset.data.len(), "{}", period);
            assert!(!dataset.is_empty());
        }
    }

    #[test]
    fn test_parse_period() {
        assert_eq!("monthly".parse::<ChartPeriod>().unwrap(), ChartPeriod::Monthly);
        assert_eq!(" Quarterly ".parse::<ChartPeriod>().unwrap(), ChartPeriod::Quarterly);
        assert_eq!("YEARLY".parse::<ChartPeriod>().unwrap(), ChartPeriod::Yearly);

        let err = "weekly".parse::<ChartPeriod>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown chart period: weekly");
    }

    #[test]
    fn test_yearly_values() {
        let points: Vec<_> = ChartPeriod::Yearly.dataset().points().collect();
        assert_eq!(points.first(), Some(&("2021", 52000.0)));
        assert_eq!(points.last(), Some(&("2025", 89500.0)));
        assert_eq!(ChartPeriod::Yearly.dataset().max(), 89500.0);
    }

    #[test]
    fn test_default_is_monthly() {
        assert_eq!(ChartPeriod::default(), ChartPeriod::Monthly);
        assert_eq!(ChartPeriod::Monthly.dataset().len(), 7);
    }
}
