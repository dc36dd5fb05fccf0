use crate::models::thermal::heatsink::core::{Evaluation, RibRange};

/// How the extreme designs of a range compare to the temperature limit.
///
/// Both thresholds sit one degree below the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Every dimension is fixed.
    AllFixed,
    /// The minimum design is already at least one degree below the limit.
    TooHighMin,
    /// The maximum design is no more than one degree below the limit.
    TooLowMax,
    /// Neither extreme decides the answer; the range must be searched.
    Ambiguous,
}

/// Result of analyzing a [`RibRange`] against a temperature limit.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    range: RibRange,
    narrowed_count: Option<u32>,
    classification: Classification,
    corners: Option<(Evaluation, Evaluation)>,
}

impl AnalysisOutcome {
    pub(super) fn all_fixed(range: RibRange) -> Self {
        Self {
            range,
            narrowed_count: None,
            classification: Classification::AllFixed,
            corners: None,
        }
    }

    pub(super) fn classified(
        range: RibRange,
        narrowed_count: Option<u32>,
        classification: Classification,
        min_corner: Evaluation,
        max_corner: Evaluation,
    ) -> Self {
        Self {
            range,
            narrowed_count,
            classification,
            corners: Some((min_corner, max_corner)),
        }
    }

    /// The range to optimize over, after any count narrowing.
    #[must_use]
    pub fn range(&self) -> &RibRange {
        &self.range
    }

    /// The lowered count upper bound, if the requested one was unrealizable.
    #[must_use]
    pub fn narrowed_count(&self) -> Option<u32> {
        self.narrowed_count
    }

    #[must_use]
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// The all-minimum design, evaluated. `None` for a fully fixed range.
    #[must_use]
    pub fn min_corner(&self) -> Option<&Evaluation> {
        self.corners.as_ref().map(|(min, _)| min)
    }

    /// The all-maximum design of the narrowed range, evaluated.
    /// `None` for a fully fixed range.
    #[must_use]
    pub fn max_corner(&self) -> Option<&Evaluation> {
        self.corners.as_ref().map(|(_, max)| max)
    }

    /// Informational note describing the count narrowing, if any.
    #[must_use]
    pub fn note(&self) -> Option<String> {
        self.narrowed_count
            .map(|count| format!("maximum realizable rib count for the given ranges: {count}"))
    }
}
