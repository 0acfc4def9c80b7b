use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Probabilities strictly above this are classified as poisonous.
pub const POISONOUS_THRESHOLD: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassLabel {
    #[serde(rename = "p")]
    Poisonous,
    #[serde(rename = "e")]
    Edible,
}

impl ClassLabel {
    pub fn from_probability(p: f64) -> Self {
        if p > POISONOUS_THRESHOLD {
            ClassLabel::Poisonous
        } else {
            ClassLabel::Edible
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ClassLabel::Poisonous => ClassLabel::Edible,
            ClassLabel::Edible => ClassLabel::Poisonous,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ClassLabel::Poisonous => "p",
            ClassLabel::Edible => "e",
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ClassLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" => Ok(ClassLabel::Poisonous),
            "e" => Ok(ClassLabel::Edible),
            other => Err(format!("unknown class label: {other}")),
        }
    }
}

/// Human verdict on a shown prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

impl Confirmation {
    /// Label to persist: the predicted one, flipped when the human disagrees.
    pub fn resolve(self, predicted: ClassLabel) -> ClassLabel {
        match self {
            Confirmation::Yes => predicted,
            Confirmation::No => predicted.flipped(),
        }
    }
}

impl FromStr for Confirmation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(Confirmation::Yes),
            "no" => Ok(Confirmation::No),
            other => Err(format!("confirmation must be \"yes\" or \"no\", got {other:?}")),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// "yes" keeps the thresholded label, "no" flips it.
        #[test]
        fn prop_confirmation_label(p in 0.0_f64..=1.0) {
            let predicted = if p > 0.5 {
                ClassLabel::Poisonous
            } else {
                ClassLabel::Edible
            };

            prop_assert_eq!(Confirmation::Yes.resolve(ClassLabel::from_probability(p)), predicted);
            prop_assert_eq!(
                Confirmation::No.resolve(ClassLabel::from_probability(p)),
                predicted.flipped()
            );
            let stored = Confirmation::No.resolve(ClassLabel::from_probability(p)).code();
            prop_assert_eq!(stored, if p > 0.5 { "e" } else { "p" });
        }
    }
}
