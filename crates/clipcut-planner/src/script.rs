//! Narration script selection.

use clipcut_models::{truncate_chars, ClipProposal, ClipRole, VideoInfo};

/// Maximum title characters interpolated into a script.
pub const SCRIPT_TITLE_CHARS: usize = 50;

/// Fixed narration templates. Only the first interpolates the title;
/// `{title}` marks where it goes.
pub const NARRATION_TEMPLATES: [&str; 5] = [
    "Você não vai acreditar no que aconteceu neste vídeo! {title}...",
    "Isso vai mudar completamente sua perspectiva sobre...",
    "O que você está prestes a ver é absolutamente incrível!",
    "Prepare-se para ficar chocado com esta descoberta!",
    "Isso é algo que 99% das pessoas não sabem!",
];

/// Index into [`NARRATION_TEMPLATES`] for a clip role.
///
/// Single-segment roles share the generic template.
pub fn template_index(role: ClipRole) -> usize {
    match role {
        ClipRole::Opening => 0,
        ClipRole::Middle => 1,
        ClipRole::Closing => 2,
        ClipRole::BestMoment | ClipRole::FullVideo => 3,
    }
}

/// Pick the narration script for a proposal.
pub fn pick_script(proposal: &ClipProposal, video: &VideoInfo) -> String {
    let template = NARRATION_TEMPLATES[template_index(proposal.role)];
    template.replace("{title}", truncate_chars(&video.title, SCRIPT_TITLE_CHARS))
}
