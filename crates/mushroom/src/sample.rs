use std::collections::HashMap;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::{characteristic, characteristics};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("missing characteristic: {0}")]
    MissingCharacteristic(&'static str),

    #[error("unexpected field: {0}")]
    UnexpectedField(String),
}

pub type Result<T> = std::result::Result<T, SampleError>;

/// One code per characteristic, stored in schema order.
///
/// Codes are not checked against the declared code sets here; the fitted
/// encoder decides what it accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MushroomSample {
    codes: Vec<String>,
}

impl MushroomSample {
    /// Builds a sample from submitted fields, ignoring anything that is not
    /// a characteristic.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self> {
        let codes = characteristics()
            .iter()
            .map(|ch| {
                fields
                    .get(ch.name)
                    .cloned()
                    .ok_or(SampleError::MissingCharacteristic(ch.name))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { codes })
    }

    /// Like [`MushroomSample::from_fields`] but also rejects extraneous keys.
    pub fn from_fields_strict(fields: &HashMap<String, String>) -> Result<Self> {
        let sample = Self::from_fields(fields)?;
        let mut extra: Vec<&String> = fields
            .keys()
            .filter(|k| characteristic(k).is_none())
            .collect();
        extra.sort();
        if let Some(k) = extra.first() {
            return Err(SampleError::UnexpectedField((*k).clone()));
        }
        Ok(sample)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        characteristics()
            .iter()
            .position(|ch| ch.name == name)
            .map(|i| self.codes[i].as_str())
    }

    /// `(characteristic, code)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        characteristics()
            .iter()
            .zip(self.codes.iter())
            .map(|(ch, code)| (ch.name, code.as_str()))
    }
}

impl Serialize for MushroomSample {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
pub(crate) fn sample_fields() -> HashMap<String, String> {
    [
        ("cap_shape", "x"),
        ("cap_surface", "s"),
        ("cap_color", "n"),
        ("bruises", "t"),
        ("odor", "a"),
        ("gill_attachment", "f"),
        ("gill_spacing", "c"),
        ("gill_size", "n"),
        ("gill_color", "b"),
        ("stalk_shape", "e"),
        ("stalk_root", "e"),
        ("stalk_surface_above_ring", "f"),
        ("stalk_surface_below_ring", "f"),
        ("stalk_color_above_ring", "b"),
        ("stalk_color_below_ring", "b"),
        ("veil_type", "p"),
        ("veil_color", "n"),
        ("ring_number", "n"),
        ("ring_type", "p"),
        ("spore_print_color", "k"),
        ("population", "a"),
        ("habitat", "g"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
