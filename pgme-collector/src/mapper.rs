use crate::parser::RawRow;
use pgme_core::metric::MetricField;

/// A single labelled value ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample<'a> {
    pub metric: &'static str,
    /// `name[index]` of the reporting device.
    pub device: String,
    /// Value text exactly as the tool printed it.
    pub value: &'a str,
}

/// Composite device label, e.g. `NVIDIA H100[0]`.
pub fn device_label(row: &RawRow) -> String {
    format!("{}[{}]", row.name(), row.index())
}

/// Plain decimal / exponent notation. Sentinels such as `N/A` or
/// `[Not Supported]` fail here and are skipped.
pub fn is_numeric(value: &str) -> bool {
    value.parse::<f64>().is_ok()
}

/// Pair each numeric cell with the field at the same position.
///
/// Output order is row order, then column order. Cells beyond the table and
/// table entries beyond the row are both ignored.
pub fn map_rows<'a>(rows: &'a [RawRow], fields: &[MetricField]) -> Vec<Sample<'a>> {
    let mut samples = Vec::with_capacity(rows.len() * fields.len());
    for row in rows {
        let device = device_label(row);
        for (field, value) in fields.iter().zip(row.values()) {
            if is_numeric(value) {
                samples.push(Sample {
                    metric: field.name,
                    device: device.clone(),
                    value: value.as_str(),
                });
            }
        }
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[MetricField] = &[MetricField::new("f0", "m0"), MetricField::new("f1", "m1")];

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().copied().collect()
    }

    #[test]
    fn label_combines_name_and_index() {
        let r = row(&["NVIDIA H100", "0", "350.2", "400.0"]);
        assert_eq!(device_label(&r), "NVIDIA H100[0]");
    }

    #[test]
    fn maps_cells_positionally_and_drops_sentinels() {
        let rows = vec![row(&["A", "0", "100.5", "250"]), row(&["B", "1", "N/A", "300"])];
        let samples = map_rows(&rows, FIELDS);
        let flat: Vec<_> = samples
            .iter()
            .map(|s| (s.metric, s.device.as_str(), s.value))
            .collect();
        assert_eq!(
            flat,
            vec![
                ("m0", "A[0]", "100.5"),
                ("m1", "A[0]", "250"),
                ("m1", "B[1]", "300"),
            ]
        );
    }

    #[test]
    fn sentinel_values_never_emit_samples() {
        for sentinel in ["N/A", "[Not Supported]", "", "[Unknown Error]", "Enabled"] {
            let rows = vec![row(&["A", "0", sentinel, "1"])];
            let samples = map_rows(&rows, FIELDS);
            assert_eq!(samples.len(), 1, "sentinel {sentinel:?} leaked");
            assert_eq!(samples[0].metric, "m1");
        }
    }

    #[test]
    fn short_rows_emit_only_present_cells() {
        let rows = vec![row(&["A", "0", "7"])];
        let samples = map_rows(&rows, FIELDS);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].metric, "m0");
    }

    #[test]
    fn excess_cells_are_ignored() {
        let rows = vec![row(&["A", "0", "1", "2", "3", "4"])];
        assert_eq!(map_rows(&rows, FIELDS).len(), FIELDS.len());
    }

    #[test]
    fn identity_only_rows_emit_nothing() {
        let rows = vec![row(&["A", "0"]), row(&["lonely"])];
        assert!(map_rows(&rows, FIELDS).is_empty());
    }

    #[test]
    fn numeric_check_accepts_standard_notation() {
        for value in ["0", "-12.5", "3.", ".5", "1e3", "+4", "65536"] {
            assert!(is_numeric(value), "{value:?} should be numeric");
        }
        for value in ["N/A", "1,5", "12 W", " ", "0x10"] {
            assert!(!is_numeric(value), "{value:?} should not be numeric");
        }
    }

    #[test]
    fn values_pass_through_verbatim() {
        let rows = vec![row(&["A", "0", "100.50", "-0"])];
        let samples = map_rows(&rows, FIELDS);
        assert_eq!(samples[0].value, "100.50");
        assert_eq!(samples[1].value, "-0");
    }
}
