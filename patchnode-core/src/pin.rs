//! Metadata a host uses to discover nodes and wire their pins.

use std::fmt;

/// Which way data flows through a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PinDirection {
    Input,
    Output,
    /// A capability the host may inject, such as a logger. Never carries data.
    Import,
}

/// A named pin on a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
pub struct PinInfo {
    pub name: &'static str,
    pub direction: PinDirection,
    /// Human-readable slice type, e.g. `"Spread<Spread<f64>>"`.
    pub type_name: &'static str,
}

impl PinInfo {
    #[must_use]
    pub fn input(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            direction: PinDirection::Input,
            type_name,
        }
    }

    #[must_use]
    pub fn output(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            direction: PinDirection::Output,
            type_name,
        }
    }

    #[must_use]
    pub fn import(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            direction: PinDirection::Import,
            type_name,
        }
    }
}

/// Describes a node to a host: its name, category, help text, search tags,
/// and pins.
///
/// # Example
///
/// ```
/// use patchnode_core::{NodeInfo, PinDirection, PinInfo};
///
/// let info = NodeInfo::new("Count", "Spreads")
///     .with_help("Counts the slices of a spread")
///     .with_tags(&["length"])
///     .with_pin(PinInfo::input("Input", "Spread<f64>"))
///     .with_pin(PinInfo::output("Count", "i32"));
///
/// assert_eq!(info.id(), "Count (Spreads)");
/// assert_eq!(info.pin("Count").unwrap().direction, PinDirection::Output);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
pub struct NodeInfo {
    pub name: &'static str,
    pub category: &'static str,
    pub help: &'static str,
    pub tags: Vec<&'static str>,
    pub pins: Vec<PinInfo>,
}

impl NodeInfo {
    #[must_use]
    pub fn new(name: &'static str, category: &'static str) -> Self {
        Self {
            name,
            category,
            help: "",
            tags: Vec::new(),
            pins: Vec::new(),
        }
    }

    /// Returns `self` with the given help text.
    #[must_use]
    pub fn with_help(self, help: &'static str) -> Self {
        Self { help, ..self }
    }

    /// Returns `self` with the given tags appended.
    #[must_use]
    pub fn with_tags(mut self, tags: &[&'static str]) -> Self {
        self.tags.extend_from_slice(tags);
        self
    }

    /// Returns `self` with the given pin appended.
    #[must_use]
    pub fn with_pin(mut self, pin: PinInfo) -> Self {
        self.pins.push(pin);
        self
    }

    /// The unique identifier hosts use for this node, `"Name (Category)"`.
    #[must_use]
    pub fn id(&self) -> String {
        self.to_string()
    }

    /// Looks up a pin by name.
    #[must_use]
    pub fn pin(&self, name: &str) -> Option<&PinInfo> {
        self.pins.iter().find(|pin| pin.name == name)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &PinInfo> {
        self.pins_in(PinDirection::Input)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &PinInfo> {
        self.pins_in(PinDirection::Output)
    }

    fn pins_in(&self, direction: PinDirection) -> impl Iterator<Item = &PinInfo> {
        self.pins.iter().filter(move |pin| pin.direction == direction)
    }
}

impl fmt::Display for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// Implemented by nodes that can describe themselves to a host.
pub trait Describe {
    fn info() -> NodeInfo;
}
