use crate::progress::ProgressEvent;
use std::fmt;

/// Caption for the start/stop control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunLabel {
    Start,
    Stop,
}

impl fmt::Display for RunLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunLabel::Start => write!(f, "START"),
            RunLabel::Stop => write!(f, "STOP"),
        }
    }
}

/// Outputs the bridge computes for the presentation layer. What gets
/// rendered, never how.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiUpdate {
    SetStartEnabled(bool),
    SetRunLabel(RunLabel),
    Progress(ProgressEvent),
    /// Terminal condition; no further updates follow.
    Fatal(String),
}
