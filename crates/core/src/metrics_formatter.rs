#![allow(clippy::format_push_string)]

use crate::metrics::MetricsRecord;

pub struct MetricsFormatter;

impl MetricsFormatter {
    /// Single-line `key=value` rendering used for the run log.
    #[must_use]
    pub fn summary(record: &MetricsRecord) -> String {
        let mut output = String::new();

        output.push_str(&format!("version={}", record.version));
        output.push_str(&format!(" rows_processed={}", record.rows_processed));
        output.push_str(&format!(" missing_prices={}", record.missing_prices));
        output.push_str(&format!(" window={}", record.window));
        output.push_str(&format!(" policy={}", record.policy.as_str()));
        output.push_str(&format!(" defined_signals={}", record.defined_signals));
        output.push_str(&format!(" long_signals={}", record.long_signals));
        output.push_str(&format!(" {}={}", record.metric, fmt_opt(record.value)));
        output.push_str(&format!(" final_signal={}", fmt_opt(record.final_signal)));
        output.push_str(&format!(" mean_close={}", fmt_opt(record.mean_close)));
        output.push_str(&format!(
            " last_rolling_mean={}",
            fmt_opt(record.last_rolling_mean)
        ));
        output.push_str(&format!(" seed={}", record.seed));

        if let Some(latency_ms) = record.latency_ms {
            output.push_str(&format!(" latency_ms={latency_ms}"));
        }

        output
    }
}

fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyKind;
    use crate::metrics::RunStatus;

    fn record() -> MetricsRecord {
        MetricsRecord {
            version: "v1".to_string(),
            rows_processed: 10,
            metric: "signal_rate".to_string(),
            value: Some(0.5),
            seed: 42,
            status: RunStatus::Success,
            window: 3,
            policy: PolicyKind::RollingMean,
            defined_signals: 8,
            long_signals: 4,
            missing_prices: 1,
            final_signal: Some(1),
            mean_close: Some(101.25),
            last_rolling_mean: Some(100.5),
            latency_ms: None,
            generated_at: None,
        }
    }

    #[test]
    fn summary_lists_fields() {
        assert_eq!(
            MetricsFormatter::summary(&record()),
            "version=v1 rows_processed=10 missing_prices=1 window=3 policy=rolling_mean \
             defined_signals=8 long_signals=4 signal_rate=0.5 final_signal=1 \
             mean_close=101.25 last_rolling_mean=100.5 seed=42"
        );
    }

    #[test]
    fn summary_marks_undefined_values() {
        let record = MetricsRecord {
            value: None,
            final_signal: None,
            last_rolling_mean: None,
            latency_ms: Some(7),
            ..record()
        };
        let summary = MetricsFormatter::summary(&record);

        assert!(summary.contains("signal_rate=n/a"));
        assert!(summary.contains("final_signal=n/a"));
        assert!(summary.contains("last_rolling_mean=n/a"));
        assert!(summary.ends_with("latency_ms=7"));
    }
}
