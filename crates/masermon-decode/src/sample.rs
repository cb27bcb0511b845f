use std::fmt;

/// Numeric value of one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Int(v) => write!(f, "{v}"),
            MetricValue::Float(v) => write!(f, "{v}"),
        }
    }
}

/// One decoded metric sample, produced per field per classified line.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub name: String,
    pub labels: Vec<(&'static str, String)>,
    pub value: MetricValue,
}

impl MetricSample {
    pub fn int(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
            value: MetricValue::Int(value),
        }
    }

    pub fn float(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
            value: MetricValue::Float(value),
        }
    }

    /// Label-only sample; the exposition value is the constant 1.
    pub fn label(name: impl Into<String>, key: &'static str, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: vec![(key, value.into())],
            value: MetricValue::Int(1),
        }
    }
}

/// Render samples as Prometheus exposition text:
/// `{prefix}_{name}{key="value", ...} value`, one line per sample.
pub fn render_exposition(prefix: &str, samples: &[MetricSample]) -> String {
    let mut out = String::new();
    for sample in samples {
        out.push_str(prefix);
        out.push('_');
        out.push_str(&sample.name);
        if !sample.labels.is_empty() {
            out.push('{');
            for (i, (key, value)) in sample.labels.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str("=\"");
                out.push_str(value);
                out.push('"');
            }
            out.push('}');
        }
        out.push(' ');
        out.push_str(&sample.value.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_values_and_labels() {
        let samples = vec![
            MetricSample::label("info", "name", "MASER001"),
            MetricSample::int("utc_time", 1_714_658_733),
            MetricSample::float("currents_p28", 123.45),
        ];
        assert_eq!(
            render_exposition("maser", &samples),
            "maser_info{name=\"MASER001\"} 1\n\
             maser_utc_time 1714658733\n\
             maser_currents_p28 123.45\n"
        );
    }

    #[test]
    fn sentinel_floats_render_without_fraction() {
        let samples = vec![MetricSample::float("heaters_rcvr", -1.0)];
        assert_eq!(
            render_exposition("maser", &samples),
            "maser_heaters_rcvr -1\n"
        );
    }

    #[test]
    fn empty_sample_list_renders_empty_file() {
        assert_eq!(render_exposition("maser", &[]), "");
    }
}
