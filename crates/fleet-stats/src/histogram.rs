//! Version Histogram

use record_cleaner::FleetRecord;
use serde::Serialize;

/// One histogram bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramEntry {
    /// Version string
    pub version: String,
    /// Records with this version
    pub count: usize,
    /// Share of all records, in percent
    pub percent: f64,
}

impl HistogramEntry {
    /// Chart label: version, then count and share with one decimal
    pub fn label(&self) -> String {
        format!("{}\n{} ({:.1}%)", self.version, self.count, self.percent)
    }
}

/// Count of records per software version
///
/// Open vocabulary; buckets keep the order in which each version was first
/// seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionHistogram {
    buckets: Vec<(String, usize)>,
}

impl VersionHistogram {
    /// Build from filtered records
    pub fn from_records(records: &[FleetRecord]) -> Self {
        Self::from_versions(records.iter().map(FleetRecord::version))
    }

    /// Build from a sequence of version strings
    pub fn from_versions<'a, I>(versions: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut histogram = Self::default();
        for version in versions {
            histogram.add(version);
        }
        histogram
    }

    fn add(&mut self, version: &str) {
        match self.buckets.iter_mut().find(|(v, _)| v == version) {
            Some((_, count)) => *count += 1,
            None => self.buckets.push((version.to_string(), 1)),
        }
    }

    /// Count for a version (0 if never seen)
    pub fn get(&self, version: &str) -> usize {
        self.buckets
            .iter()
            .find(|(v, _)| v == version)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, c)| c).sum()
    }

    /// Number of distinct versions
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no versions were counted
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// (version, count) in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.buckets.iter().map(|(v, c)| (v.as_str(), *c))
    }

    /// Share of a version in percent
    pub fn percent(&self, version: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(version) as f64 / total as f64 * 100.0
    }

    /// Buckets with their shares, in first-seen order
    pub fn entries(&self) -> Vec<HistogramEntry> {
        let total = self.total().max(1) as f64;
        self.buckets
            .iter()
            .map(|(version, count)| HistogramEntry {
                version: version.clone(),
                count: *count,
                percent: *count as f64 / total * 100.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let histogram = VersionHistogram::from_versions(["2.0.9", "0", "2.0.9", "2.0.8", "0", "2.0.9"]);
        let buckets: Vec<_> = histogram.iter().collect();
        assert_eq!(buckets, vec![("2.0.9", 3), ("0", 2), ("2.0.8", 1)]);
        assert_eq!(histogram.total(), 6);
        assert_eq!(histogram.get("1.0"), 0);
    }

    #[test]
    fn test_percent_and_label() {
        let histogram = VersionHistogram::from_versions(["2.0.8", "2.0.8", "0"]);
        assert!((histogram.percent("2.0.8") - 66.666).abs() < 0.01);

        let entries = histogram.entries();
        assert_eq!(entries[0].label(), "2.0.8\n2 (66.7%)");
        assert_eq!(entries[1].label(), "0\n1 (33.3%)");
    }

    #[test]
    fn test_empty() {
        let histogram = VersionHistogram::default();
        assert!(histogram.is_empty());
        assert_eq!(histogram.total(), 0);
        assert_eq!(histogram.percent("0"), 0.0);
        assert!(histogram.entries().is_empty());
    }
}
