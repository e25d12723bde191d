use serde::Deserialize;

use crate::error::ConfigurationError;

/// One row of a threshold ladder: scores in `(lower, upper]` map to `level`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Bin<L> {
    pub lower: f64,
    pub upper: f64,
    pub level: L,
}

impl<L> Bin<L> {
    pub fn new(lower: f64, upper: f64, level: L) -> Self {
        Self {
            lower,
            upper,
            level,
        }
    }

    /// Left-exclusive, right-inclusive.
    pub fn contains(&self, score: f64) -> bool {
        self.lower < score && score <= self.upper
    }
}

/// An ordered, non-overlapping set of bins plus the level returned when no
/// bin matches.
///
/// Adjacent bins may share a boundary. A score sitting exactly on that
/// boundary belongs to the lower bin, the one it closes. A score equal to
/// the first bin's lower bound matches nothing and yields the default.
#[derive(Debug, Clone, PartialEq)]
pub struct BinTable<L> {
    bins: Vec<Bin<L>>,
    default: L,
}

impl<L: Copy> BinTable<L> {
    pub fn new(bins: Vec<Bin<L>>, default: L) -> Result<Self, ConfigurationError> {
        for (index, bin) in bins.iter().enumerate() {
            if !bin.lower.is_finite() || !bin.upper.is_finite() {
                return Err(ConfigurationError::NonFiniteBound {
                    index,
                    lower: bin.lower,
                    upper: bin.upper,
                });
            }
            if bin.lower >= bin.upper {
                return Err(ConfigurationError::EmptyBin {
                    index,
                    lower: bin.lower,
                    upper: bin.upper,
                });
            }

            if let Some(previous) = index.checked_sub(1).map(|i| &bins[i]) {
                if bin.lower < previous.lower {
                    return Err(ConfigurationError::Unsorted {
                        index,
                        lower: bin.lower,
                        previous_lower: previous.lower,
                    });
                }
                if bin.lower < previous.upper {
                    return Err(ConfigurationError::Overlapping {
                        index,
                        lower: bin.lower,
                        previous_upper: previous.upper,
                    });
                }
            }
        }

        Ok(Self { bins, default })
    }

    /// Index of the first bin containing `score`, scanning upward.
    pub fn classify_bin(&self, score: f64) -> Option<usize> {
        self.bins.iter().position(|bin| bin.contains(score))
    }

    pub fn classify(&self, score: f64) -> L {
        self.classify_bin(score)
            .map_or(self.default, |index| self.bins[index].level)
    }

    pub fn bins(&self) -> &[Bin<L>] {
        &self.bins
    }

    pub fn default_level(&self) -> L {
        self.default
    }
}

impl BinTable<u32> {
    /// The step ladder with one step size per row.
    pub fn four_level_steps() -> Self {
        Self {
            bins: vec![
                Bin::new(0.0, 0.1, 1),
                Bin::new(0.1, 0.4, 2),
                Bin::new(0.4, 0.7, 3),
                Bin::new(0.7, 1.0, 4),
            ],
            default: 0,
        }
    }

    /// The step ladder with rows of equal step merged: 1 up to 0.4, 2 above.
    pub fn two_level_steps() -> Self {
        Self {
            bins: vec![Bin::new(0.0, 0.4, 1), Bin::new(0.4, 1.0, 2)],
            default: 0,
        }
    }
}

/// Maps `score` to the level of the first matching bin, or the table default.
pub fn classify<L: Copy>(score: f64, bins: &BinTable<L>) -> L {
    bins.classify(score)
}
