//! Tags that categorize tasks, and the filter built upon them

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::config::{ALL_FILTER, DEFAULT_TAGS};
use crate::error::PlannerError;

/// A named category, with the color it is displayed with
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagOption {
    pub name: String,
    pub color: String,
}

impl TagOption {
    pub fn new<N: Into<String>, C: Into<String>>(name: N, color: C) -> Self {
        Self { name: name.into(), color: color.into() }
    }
}

/// The fixed, ordered set of tags a task can be created with.
///
/// A registry is built once at startup and is never modified afterwards.
/// Tasks copy the name and color of their tag, so that they do not depend on the registry later on.
#[derive(Clone, Debug, PartialEq)]
pub struct TagRegistry {
    options: Vec<TagOption>,
}

impl TagRegistry {
    /// Build a registry.
    ///
    /// Fails if there is no tag, if two tags share the same name, if a name is blank or collides with the "show all" filter sentinel, or if a color is not a valid CSS color.
    pub fn new(options: Vec<TagOption>) -> Result<Self, PlannerError> {
        if options.is_empty() {
            return Err(PlannerError::Registry("a registry needs at least one tag".to_string()));
        }

        let mut seen = HashSet::new();
        for option in &options {
            if option.name.trim().is_empty() {
                return Err(PlannerError::Registry("tag names cannot be blank".to_string()));
            }
            if option.name == ALL_FILTER {
                return Err(PlannerError::Registry(format!("{:?} is reserved for the \"show all\" filter", ALL_FILTER)));
            }
            if seen.insert(option.name.as_str()) == false {
                return Err(PlannerError::Registry(format!("duplicate tag {:?}", option.name)));
            }
            if let Err(err) = csscolorparser::parse(&option.color) {
                return Err(PlannerError::Registry(format!("invalid color {:?} for tag {:?}: {}", option.color, option.name, err)));
            }
        }

        Ok(Self { options })
    }

    pub fn options(&self) -> &[TagOption] {
        &self.options
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagOption> {
        self.options.iter()
    }

    pub fn get(&self, name: &str) -> Option<&TagOption> {
        self.options.iter().find(|option| option.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The first tag of the registry, which is the one selected when the app starts
    pub fn first(&self) -> &TagOption {
        // A registry cannot be built empty
        &self.options[0]
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self { options: DEFAULT_TAGS.clone() }
    }
}


/// Which tasks (and events) should be displayed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagFilter {
    /// Display everything
    All,
    /// Display only the items with this tag name
    Tag(String),
}

impl TagFilter {
    /// Whether an item with the given tag passes this filter
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(name) => name == tag,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, TagFilter::All)
    }
}

impl Default for TagFilter {
    fn default() -> Self {
        TagFilter::All
    }
}

impl From<&str> for TagFilter {
    fn from(value: &str) -> Self {
        if value == ALL_FILTER {
            TagFilter::All
        } else {
            TagFilter::Tag(value.to_string())
        }
    }
}

impl Display for TagFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TagFilter::All => write!(f, "{}", ALL_FILTER),
            TagFilter::Tag(name) => write!(f, "{}", name),
        }
    }
}
