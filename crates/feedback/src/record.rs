use std::collections::BTreeMap;

use mushroom::{ClassLabel, MushroomSample};

/// One labelled sample waiting to be appended to the log.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackRecord {
    pub label: ClassLabel,
    pub values: BTreeMap<String, String>,
}

impl FeedbackRecord {
    /// Unchecked; the key set is validated on insert.
    pub fn new(label: ClassLabel, values: BTreeMap<String, String>) -> Self {
        Self { label, values }
    }

    pub fn from_sample(label: ClassLabel, sample: &MushroomSample) -> Self {
        let values = sample
            .iter()
            .map(|(name, code)| (name.to_string(), code.to_string()))
            .collect();
        Self { label, values }
    }

    /// Keys missing from the record and keys the schema does not know.
    pub(crate) fn schema_diff(&self) -> (Vec<String>, Vec<String>) {
        let missing = mushroom::names()
            .filter(|n| !self.values.contains_key(*n))
            .map(String::from)
            .collect();
        let unexpected = self
            .values
            .keys()
            .filter(|k| mushroom::characteristic(k).is_none())
            .cloned()
            .collect();
        (missing, unexpected)
    }
}
