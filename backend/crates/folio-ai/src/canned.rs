//! Pre-authored descriptions, one per catalogue project type.
//!
//! Served in demo mode and when the completion API is unusable.

use folio_core::{DescriptionPair, ProjectType};

/// A fixed description for one project type key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedResponse {
    pub project_type: &'static str,
    pub short_description: &'static str,
    pub description: &'static str,
}

impl CannedResponse {
    pub fn to_pair(&self) -> DescriptionPair {
        DescriptionPair::new(self.short_description, self.description)
    }
}

pub const CANNED_RESPONSES: [CannedResponse; 4] = [
    CannedResponse {
        project_type: "web",
        short_description: "A neon-lit web platform engineered for speed, built to survive the traffic storms of the digital sprawl.",
        description: "This full-stack web build jacks straight into the grid, pairing a responsive interface with a hardened API layer for students who need more than a template.\n\n\
Under the chrome it runs a component-driven frontend, typed server routes and a tuned database, shipped through automated builds.\n\n\
The payoff: pages that load in a blink, an interface that works on any deck, and a codebase ready for the next upgrade.",
    },
    CannedResponse {
        project_type: "ml",
        short_description: "A self-learning neural construct that mines raw data streams for patterns no human netrunner could spot.",
        description: "This machine learning project trains a model to read the noise of the data stream and turn it into sharp, testable predictions.\n\n\
The pipeline covers cleaning, feature engineering, training and evaluation, with every experiment tracked so results can be reproduced on demand.\n\n\
The outcome is a model with documented metrics, clear visualizations and a write-up that explains exactly why the machine decides what it decides.",
    },
    CannedResponse {
        project_type: "data",
        short_description: "A data-mining rig that cracks open messy datasets and turns them into glowing, decision-ready intel.",
        description: "This data analysis project dives into the raw feed, separating signal from static to answer the questions that matter.\n\n\
It combines careful cleaning, statistical testing and interactive dashboards, all scripted in notebooks that anyone can rerun from scratch.\n\n\
The result is a set of clear findings backed by charts and numbers, packaged in a report sharp enough to impress any professor in the megacorp.",
    },
    CannedResponse {
        project_type: "auto",
        short_description: "An automation daemon that takes over the grind, running repetitive tasks on autopilot while you stay jacked in.",
        description: "This automation project deploys a tireless script-bot that handles the repetitive work humans should never have to touch.\n\n\
It chains scheduled jobs, API integrations and robust error handling into a workflow that logs every action and recovers when the network glitches.\n\n\
The result is hours of manual effort reclaimed each week, fewer mistakes, and a system that keeps humming long after the lights go out.",
    },
];

/// Entry served when demo mode meets an unknown project type (`web`)
const DEFAULT_ENTRY: usize = 0;

fn lookup(key: &str) -> Option<&'static CannedResponse> {
    CANNED_RESPONSES
        .iter()
        .find(|entry| entry.project_type == key)
}

/// Canned entry for a catalogue type, None for anything else
pub fn canned_for(project_type: &ProjectType) -> Option<DescriptionPair> {
    lookup(project_type.as_str()).map(CannedResponse::to_pair)
}

/// Canned entry for the type, or the `web` entry when the type is unknown
pub fn canned_or_default(project_type: &ProjectType) -> DescriptionPair {
    lookup(project_type.as_str())
        .unwrap_or(&CANNED_RESPONSES[DEFAULT_ENTRY])
        .to_pair()
}
