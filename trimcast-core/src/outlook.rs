/// Coarse reading of a prediction, used to pick the advice shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    /// Negative prediction: weight gain expected.
    Gain,
    /// Between zero and the stable threshold.
    Stable,
    /// At or above the stable threshold.
    Loss,
}

impl Outlook {
    /// NaN reads as `Stable`; it compares false against both bounds.
    pub fn classify(prediction: f64, stable_threshold_kg: f64) -> Self {
        if prediction.is_nan() {
            Outlook::Stable
        } else if prediction < 0.0 {
            Outlook::Gain
        } else if prediction < stable_threshold_kg {
            Outlook::Stable
        } else {
            Outlook::Loss
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Outlook::Gain => "The model predicts you might gain weight.",
            Outlook::Stable => "The model predicts your weight will remain stable.",
            Outlook::Loss => "Great! The model predicts you will lose weight.",
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            Outlook::Gain => {
                "Suggestion: consider adding exercise sessions and trimming daily calories a little."
            }
            Outlook::Stable => {
                "Suggestion: you are holding steady; small increases in activity could tip the balance."
            }
            Outlook::Loss => "Suggestion: keep up your current routine, it is working for you.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_follow_sign_and_threshold() {
        assert_eq!(Outlook::classify(-0.01, 0.5), Outlook::Gain);
        assert_eq!(Outlook::classify(0.0, 0.5), Outlook::Stable);
        assert_eq!(Outlook::classify(0.49, 0.5), Outlook::Stable);
        assert_eq!(Outlook::classify(0.5, 0.5), Outlook::Loss);
        assert_eq!(Outlook::classify(3.0, 0.5), Outlook::Loss);
    }

    #[test]
    fn test_nan_prediction_is_stable() {
        assert_eq!(Outlook::classify(f64::NAN, 0.5), Outlook::Stable);
        assert_eq!(Outlook::classify(f64::INFINITY, 0.5), Outlook::Loss);
        assert_eq!(Outlook::classify(f64::NEG_INFINITY, 0.5), Outlook::Gain);
    }

    #[test]
    fn test_threshold_is_configurable() {
        assert_eq!(Outlook::classify(0.8, 1.0), Outlook::Stable);
        assert_eq!(Outlook::classify(0.8, 0.5), Outlook::Loss);
    }
}
