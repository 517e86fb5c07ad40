//! Price series loaded from the input file.

/// Ordered close prices indexed by row position. `None` marks a missing value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    values: Vec<Option<f64>>,
}

impl PriceSeries {
    /// Builds a series, treating `NaN` and infinite entries as missing.
    #[must_use]
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|v| v.filter(|x| x.is_finite()))
                .collect(),
        }
    }

    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// Mean of the present values, `None` if every value is missing or the
    /// sum overflows.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        let present: Vec<f64> = self.values.iter().flatten().copied().collect();
        if present.is_empty() {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = present.len() as f64;
        Some(present.iter().sum::<f64>() / count).filter(|mean| mean.is_finite())
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values.into_iter().map(Some).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_becomes_missing() {
        let series = PriceSeries::new(vec![Some(1.0), Some(f64::NAN), None]);
        assert_eq!(series.values(), &[Some(1.0), None, None]);
        assert_eq!(series.missing_count(), 2);
    }

    #[test]
    fn infinities_become_missing() {
        let series = PriceSeries::new(vec![Some(f64::INFINITY), Some(f64::NEG_INFINITY), Some(1.0)]);
        assert_eq!(series.values(), &[None, None, Some(1.0)]);
        assert_eq!(series.mean(), Some(1.0));
    }

    #[test]
    fn mean_skips_missing() {
        let series = PriceSeries::new(vec![Some(2.0), None, Some(4.0)]);
        assert_eq!(series.mean(), Some(3.0));
        assert_eq!(PriceSeries::new(vec![None]).mean(), None);
    }
}
