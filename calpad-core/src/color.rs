//! The fixed event color palette and its display styles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Blue,
    Red,
    Green,
    Purple,
    Orange,
    Gray,
    Pink,
    Indigo,
}

/// Tailwind classes used by the web front-end for one palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorStyle {
    pub bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub ring: &'static str,
    pub dot: &'static str,
}

impl EventColor {
    pub const ALL: [EventColor; 8] = [
        EventColor::Blue,
        EventColor::Red,
        EventColor::Green,
        EventColor::Purple,
        EventColor::Orange,
        EventColor::Gray,
        EventColor::Pink,
        EventColor::Indigo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventColor::Blue => "blue",
            EventColor::Red => "red",
            EventColor::Green => "green",
            EventColor::Purple => "purple",
            EventColor::Orange => "orange",
            EventColor::Gray => "gray",
            EventColor::Pink => "pink",
            EventColor::Indigo => "indigo",
        }
    }

    pub fn style(&self) -> ColorStyle {
        match self {
            EventColor::Blue => ColorStyle {
                bg: "bg-blue-100",
                text: "text-blue-700",
                border: "border-blue-200",
                ring: "ring-blue-500",
                dot: "bg-blue-500",
            },
            EventColor::Red => ColorStyle {
                bg: "bg-red-100",
                text: "text-red-700",
                border: "border-red-200",
                ring: "ring-red-500",
                dot: "bg-red-500",
            },
            EventColor::Green => ColorStyle {
                bg: "bg-green-100",
                text: "text-green-700",
                border: "border-green-200",
                ring: "ring-green-500",
                dot: "bg-green-500",
            },
            EventColor::Purple => ColorStyle {
                bg: "bg-purple-100",
                text: "text-purple-700",
                border: "border-purple-200",
                ring: "ring-purple-500",
                dot: "bg-purple-500",
            },
            EventColor::Orange => ColorStyle {
                bg: "bg-orange-100",
                text: "text-orange-700",
                border: "border-orange-200",
                ring: "ring-orange-500",
                dot: "bg-orange-500",
            },
            EventColor::Gray => ColorStyle {
                bg: "bg-gray-100",
                text: "text-gray-700",
                border: "border-gray-200",
                ring: "ring-gray-500",
                dot: "bg-gray-500",
            },
            EventColor::Pink => ColorStyle {
                bg: "bg-pink-100",
                text: "text-pink-700",
                border: "border-pink-200",
                ring: "ring-pink-500",
                dot: "bg-pink-500",
            },
            EventColor::Indigo => ColorStyle {
                bg: "bg-indigo-100",
                text: "text-indigo-700",
                border: "border-indigo-200",
                ring: "ring-indigo-500",
                dot: "bg-indigo-500",
            },
        }
    }
}

impl FromStr for EventColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        EventColor::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = EventColor::ALL.iter().map(|c| c.as_str()).collect();
                format!("Unknown color '{}'. Available: {}", s, names.join(", "))
            })
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
