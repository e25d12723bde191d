use crate::error::DomainError;

/// Linear map from a source interval onto a target interval.
///
/// Values outside the source interval are extrapolated, never clamped, and
/// the target may be inverted (`target_min > target_max`) for a decreasing
/// mapping. Nothing is rounded here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMap {
    source_min: f64,
    source_span: f64,
    target_min: f64,
    target_span: f64,
}

impl RangeMap {
    pub fn new(
        source_min: f64,
        source_max: f64,
        target_min: f64,
        target_max: f64,
    ) -> Result<Self, DomainError> {
        let source_span = source_max - source_min;
        if source_span == 0.0 || !source_span.is_finite() {
            return Err(DomainError::DegenerateInterval {
                min: source_min,
                max: source_max,
            });
        }

        Ok(Self {
            source_min,
            source_span,
            target_min,
            target_span: target_max - target_min,
        })
    }

    pub fn apply(&self, value: f64) -> f64 {
        let scaled = (value - self.source_min) / self.source_span;
        self.target_min + scaled * self.target_span
    }

    pub fn source(&self) -> (f64, f64) {
        (self.source_min, self.source_min + self.source_span)
    }

    pub fn target(&self) -> (f64, f64) {
        (self.target_min, self.target_min + self.target_span)
    }
}

/// Maps `value` from `[source_min, source_max]` onto `[target_min, target_max]`.
pub fn translate(
    value: f64,
    source_min: f64,
    source_max: f64,
    target_min: f64,
    target_max: f64,
) -> Result<f64, DomainError> {
    RangeMap::new(source_min, source_max, target_min, target_max).map(|map| map.apply(value))
}
