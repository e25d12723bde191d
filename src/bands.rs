/// EEG frequency bands summed into the light signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Theta,
    Alpha,
    Beta,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Theta, Band::Alpha, Band::Beta];

    /// Frequency range in Hz.
    pub fn range_hz(self) -> (f64, f64) {
        match self {
            Band::Theta => (3.0, 6.0),
            Band::Alpha => (7.0, 13.0),
            Band::Beta => (14.0, 30.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Band::Theta => "theta",
            Band::Alpha => "alpha",
            Band::Beta => "beta",
        }
    }
}

/// Band powers for one window, as delivered by the acquisition side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BandPowers {
    pub theta: f64,
    pub alpha: f64,
    pub beta: f64,
}

impl BandPowers {
    pub fn new(theta: f64, alpha: f64, beta: f64) -> Self {
        Self { theta, alpha, beta }
    }

    pub fn get(&self, band: Band) -> f64 {
        match band {
            Band::Theta => self.theta,
            Band::Alpha => self.alpha,
            Band::Beta => self.beta,
        }
    }

    pub fn total(&self) -> f64 {
        Band::ALL.iter().map(|&band| self.get(band)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_sums_all_bands() {
        let powers = BandPowers::new(50.0, 80.0, 40.0);
        assert_eq!(powers.total(), 170.0);
    }

    #[test]
    fn test_get_matches_fields() {
        let powers = BandPowers::new(1.0, 2.0, 3.0);
        assert_eq!(powers.get(Band::Theta), 1.0);
        assert_eq!(powers.get(Band::Alpha), 2.0);
        assert_eq!(powers.get(Band::Beta), 3.0);
    }

    #[test]
    fn test_band_ranges_do_not_overlap() {
        for pair in Band::ALL.windows(2) {
            let (_, low_end) = pair[0].range_hz();
            let (high_start, _) = pair[1].range_hz();
            assert!(low_end < high_start, "{} overlaps {}", pair[0].name(), pair[1].name());
        }
    }
}
