//! Class Input - one class or an ordered list of classes
//!
//! Every mutating call on the manager accepts either shape.

use serde::{Deserialize, Serialize};

/// A single class name or an ordered sequence of class names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BodyClass {
    One(String),
    Many(Vec<String>),
}

impl BodyClass {
    /// True for an empty string or an empty sequence.
    pub fn is_empty(&self) -> bool {
        match self {
            BodyClass::One(class) => class.is_empty(),
            BodyClass::Many(classes) => classes.is_empty(),
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            BodyClass::One(class) => vec![class],
            BodyClass::Many(classes) => classes,
        }
    }
}

impl Default for BodyClass {
    fn default() -> Self {
        BodyClass::Many(Vec::new())
    }
}

impl From<&str> for BodyClass {
    fn from(class: &str) -> Self {
        BodyClass::One(class.to_string())
    }
}

impl From<String> for BodyClass {
    fn from(class: String) -> Self {
        BodyClass::One(class)
    }
}

impl From<Vec<String>> for BodyClass {
    fn from(classes: Vec<String>) -> Self {
        BodyClass::Many(classes)
    }
}

impl From<Vec<&str>> for BodyClass {
    fn from(classes: Vec<&str>) -> Self {
        BodyClass::Many(classes.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for BodyClass {
    fn from(classes: &[&str]) -> Self {
        BodyClass::Many(classes.iter().map(|c| c.to_string()).collect())
    }
}

impl From<&[String]> for BodyClass {
    fn from(classes: &[String]) -> Self {
        BodyClass::Many(classes.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for BodyClass {
    fn from(classes: [&str; N]) -> Self {
        BodyClass::Many(classes.iter().map(|c| c.to_string()).collect())
    }
}
