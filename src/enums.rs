//! Closed enumerations used by the rule tables.
//!
//! Tracking events form a closed vocabulary: a value outside the list is
//! reported, though only as an advisory since players accept custom events.

use crate::error::{ParseError, ParseErrorKind};
use crate::rules::{self, RuleSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target specification version, i.e. which rule table applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    /// Lenient legacy profile.
    #[serde(rename = "2.0")]
    Vast2,
    /// Strict profile.
    #[serde(rename = "3.0")]
    #[default]
    Vast3,
}

impl Profile {
    /// The exact `version` string a conforming root element declares.
    pub fn target_version(self) -> &'static str {
        match self {
            Profile::Vast2 => "2.0",
            Profile::Vast3 => "3.0",
        }
    }

    pub fn rule_set(self) -> &'static RuleSet {
        match self {
            Profile::Vast2 => &rules::v2::VAST_2_0,
            Profile::Vast3 => &rules::v3::VAST_3_0,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_version())
    }
}

impl FromStr for Profile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2" | "2.0" => Ok(Profile::Vast2),
            "3" | "3.0" => Ok(Profile::Vast3),
            other => Err(ParseError::new(
                ParseErrorKind::InvalidValue,
                format!("unknown profile '{}', expected '2.0' or '3.0'", other),
            )),
        }
    }
}

/// Element types the rule tables are keyed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Vast,
    Ad,
    InLine,
    Impression,
    Creatives,
    Creative,
    Linear,
    TrackingEvents,
    Tracking,
    VideoClicks,
    MediaFiles,
    MediaFile,
}

impl ElementKind {
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Vast => "VAST",
            ElementKind::Ad => "Ad",
            ElementKind::InLine => "InLine",
            ElementKind::Impression => "Impression",
            ElementKind::Creatives => "Creatives",
            ElementKind::Creative => "Creative",
            ElementKind::Linear => "Linear",
            ElementKind::TrackingEvents => "TrackingEvents",
            ElementKind::Tracking => "Tracking",
            ElementKind::VideoClicks => "VideoClicks",
            ElementKind::MediaFiles => "MediaFiles",
            ElementKind::MediaFile => "MediaFile",
        }
    }
}

/// `delivery` attribute of a MediaFile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    Progressive,
    Streaming,
}

impl Delivery {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "progressive" => Some(Delivery::Progressive),
            "streaming" => Some(Delivery::Streaming),
            _ => None,
        }
    }
}

/// Standard tracking event names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackingEvent {
    CreativeView,
    Start,
    FirstQuartile,
    Midpoint,
    ThirdQuartile,
    Complete,
    Mute,
    Unmute,
    Pause,
    Resume,
    Rewind,
    Fullscreen,
    ExitFullscreen,
    Expand,
    Collapse,
    AcceptInvitation,
    Close,
    Skip,
    Progress,
}

impl TrackingEvent {
    pub const ALL: [TrackingEvent; 19] = [
        TrackingEvent::CreativeView,
        TrackingEvent::Start,
        TrackingEvent::FirstQuartile,
        TrackingEvent::Midpoint,
        TrackingEvent::ThirdQuartile,
        TrackingEvent::Complete,
        TrackingEvent::Mute,
        TrackingEvent::Unmute,
        TrackingEvent::Pause,
        TrackingEvent::Resume,
        TrackingEvent::Rewind,
        TrackingEvent::Fullscreen,
        TrackingEvent::ExitFullscreen,
        TrackingEvent::Expand,
        TrackingEvent::Collapse,
        TrackingEvent::AcceptInvitation,
        TrackingEvent::Close,
        TrackingEvent::Skip,
        TrackingEvent::Progress,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TrackingEvent::CreativeView => "creativeView",
            TrackingEvent::Start => "start",
            TrackingEvent::FirstQuartile => "firstQuartile",
            TrackingEvent::Midpoint => "midpoint",
            TrackingEvent::ThirdQuartile => "thirdQuartile",
            TrackingEvent::Complete => "complete",
            TrackingEvent::Mute => "mute",
            TrackingEvent::Unmute => "unmute",
            TrackingEvent::Pause => "pause",
            TrackingEvent::Resume => "resume",
            TrackingEvent::Rewind => "rewind",
            TrackingEvent::Fullscreen => "fullscreen",
            TrackingEvent::ExitFullscreen => "exitFullscreen",
            TrackingEvent::Expand => "expand",
            TrackingEvent::Collapse => "collapse",
            TrackingEvent::AcceptInvitation => "acceptInvitation",
            TrackingEvent::Close => "close",
            TrackingEvent::Skip => "skip",
            TrackingEvent::Progress => "progress",
        }
    }

    /// Case-sensitive lookup in the closed list.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == name)
    }
}

impl fmt::Display for TrackingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
