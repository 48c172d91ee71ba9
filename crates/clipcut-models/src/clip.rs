//! Clip proposal models.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Structural role of a proposed clip within the source video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClipRole {
    /// Opening hook of a long video
    Opening,
    /// Central segment of a long video
    Middle,
    /// Final payoff of a long video
    Closing,
    /// Single best segment of a medium video
    BestMoment,
    /// Near-complete reuse of a short video
    FullVideo,
}

impl ClipRole {
    /// Tag shown at the start of the proposal title.
    pub fn title_tag(&self) -> &'static str {
        match self {
            ClipRole::Opening => "Abertura",
            ClipRole::Middle => "Momento Principal",
            ClipRole::Closing => "Conclusão",
            ClipRole::BestMoment => "Melhor Momento",
            ClipRole::FullVideo => "Vídeo Completo",
        }
    }

    /// Fixed explanation of the clip's narrative role.
    pub fn description(&self) -> &'static str {
        match self {
            ClipRole::Opening => "Momento inicial do vídeo, geralmente contém o hook principal",
            ClipRole::Middle => "Parte central do vídeo com conteúdo principal",
            ClipRole::Closing => "Momento final com conclusão ou revelação",
            ClipRole::BestMoment => "Trecho mais interessante do vídeo",
            ClipRole::FullVideo => "Vídeo já é curto, usar quase completo",
        }
    }

    /// Heuristic confidence label for the role.
    pub fn viral_potential(&self) -> ViralPotential {
        match self {
            ClipRole::Opening | ClipRole::Closing | ClipRole::BestMoment => ViralPotential::High,
            ClipRole::Middle | ClipRole::FullVideo => ViralPotential::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClipRole::Opening => "opening",
            ClipRole::Middle => "middle",
            ClipRole::Closing => "closing",
            ClipRole::BestMoment => "best_moment",
            ClipRole::FullVideo => "full_video",
        }
    }
}

impl fmt::Display for ClipRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rule-based viral potential label. Not a measured score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ViralPotential {
    #[serde(rename = "Alto")]
    High,
    #[serde(rename = "Médio")]
    Medium,
}

impl ViralPotential {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViralPotential::High => "Alto",
            ViralPotential::Medium => "Médio",
        }
    }
}

impl fmt::Display for ViralPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One suggested short segment of the source video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClipProposal {
    /// Position within the returned list (1-indexed)
    pub id: u32,

    /// Start offset in seconds
    pub start_time: i64,

    /// End offset in seconds (exclusive)
    pub end_time: i64,

    /// Display title: "<tag> - <title excerpt>..."
    pub title: String,

    /// Explanation of the clip's narrative role
    pub description: String,

    /// Heuristic confidence label
    pub viral_potential: ViralPotential,

    /// Narration script for the editor
    pub suggested_script: String,

    /// Structural role the proposal was built for
    pub role: ClipRole,
}

impl ClipProposal {
    /// Create a proposal for a role. `id` and `suggested_script` are
    /// filled in once the whole list has been planned.
    pub fn new(role: ClipRole, start_time: i64, end_time: i64, title: impl Into<String>) -> Self {
        Self {
            id: 0,
            start_time,
            end_time,
            title: title.into(),
            description: role.description().to_string(),
            viral_potential: role.viral_potential(),
            suggested_script: String::new(),
            role,
        }
    }
}
