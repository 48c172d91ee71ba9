//! Duration-banded cut planning.
//!
//! Maps a video's duration to one of three strategies:
//! - long videos (> 5 min) get opening, middle and closing cuts
//! - medium videos (2–5 min) get a single fixed "best moment" cut
//! - short videos reuse almost the whole video
//!
//! Non-positive durations produce no suggestions.

use clipcut_models::{truncate_chars, ClipProposal, ClipRole, VideoInfo};
use tracing::debug;

use crate::script::pick_script;

/// Videos longer than this get three cuts.
pub const LONG_FORM_MIN_SECS: i64 = 300;

/// Videos longer than this (and not long-form) get one best-moment cut.
pub const MEDIUM_FORM_MIN_SECS: i64 = 120;

/// Maximum title characters embedded in a proposal title.
pub const TITLE_EXCERPT_CHARS: usize = 30;

/// Planning strategy selected from the duration band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutStrategy {
    LongForm,
    MediumForm,
    ShortForm,
    Empty,
}

impl CutStrategy {
    /// Select the strategy for a duration in seconds.
    pub fn for_duration(duration: i64) -> Self {
        if duration <= 0 {
            CutStrategy::Empty
        } else if duration > LONG_FORM_MIN_SECS {
            CutStrategy::LongForm
        } else if duration > MEDIUM_FORM_MIN_SECS {
            CutStrategy::MediumForm
        } else {
            CutStrategy::ShortForm
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CutStrategy::LongForm => "long_form",
            CutStrategy::MediumForm => "medium_form",
            CutStrategy::ShortForm => "short_form",
            CutStrategy::Empty => "empty",
        }
    }
}

/// Plan suggested clips for a video.
pub fn plan(video: &VideoInfo) -> Vec<ClipProposal> {
    let duration = video.duration;
    let strategy = CutStrategy::for_duration(duration);

    let ranges: Vec<(ClipRole, i64, i64)> = match strategy {
        CutStrategy::LongForm => {
            // duration > 0 here, so truncating division is floor division.
            let mid = duration / 2;
            vec![
                (ClipRole::Opening, 0, 45),
                (ClipRole::Middle, mid - 30, mid + 30),
                (ClipRole::Closing, duration - 60, duration - 15),
            ]
        }
        CutStrategy::MediumForm => vec![(ClipRole::BestMoment, 15, 75)],
        CutStrategy::ShortForm => vec![(ClipRole::FullVideo, 0, (duration - 5).min(60))],
        CutStrategy::Empty => Vec::new(),
    };

    let excerpt = truncate_chars(&video.title, TITLE_EXCERPT_CHARS);

    let proposals: Vec<ClipProposal> = ranges
        .into_iter()
        .zip(1u32..)
        .map(|((role, start, end), id)| {
            let title = format!("{} - {}...", role.title_tag(), excerpt);
            let mut clip = ClipProposal::new(role, start, end, title);
            clip.id = id;
            clip.suggested_script = pick_script(&clip, video);
            clip
        })
        .collect();

    debug!(
        duration = duration,
        strategy = ?strategy,
        count = proposals.len(),
        "Planned clip suggestions"
    );

    proposals
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipcut_models::ViralPotential;

    fn ranges(clips: &[ClipProposal]) -> Vec<(i64, i64)> {
        clips.iter().map(|c| (c.start_time, c.end_time)).collect()
    }

    #[test]
    fn test_strategy_bands() {
        assert_eq!(CutStrategy::for_duration(-10), CutStrategy::Empty);
        assert_eq!(CutStrategy::for_duration(0), CutStrategy::Empty);
        assert_eq!(CutStrategy::for_duration(1), CutStrategy::ShortForm);
        assert_eq!(CutStrategy::for_duration(120), CutStrategy::ShortForm);
        assert_eq!(CutStrategy::for_duration(121), CutStrategy::MediumForm);
        assert_eq!(CutStrategy::for_duration(300), CutStrategy::MediumForm);
        assert_eq!(CutStrategy::for_duration(301), CutStrategy::LongForm);
    }

    #[test]
    fn test_non_positive_duration_is_empty() {
        for duration in [0, -1, -500, i64::MIN] {
            assert!(plan(&VideoInfo::new("Anything", duration)).is_empty());
        }
    }

    #[test]
    fn test_long_form_three_cuts() {
        let video = VideoInfo::new("Amazing Discovery Video", 400);
        let clips = plan(&video);

        assert_eq!(clips.len(), 3);
        assert_eq!(clips.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(ranges(&clips), vec![(0, 45), (170, 230), (340, 385)]);
        assert_eq!(
            clips.iter().map(|c| c.role).collect::<Vec<_>>(),
            vec![ClipRole::Opening, ClipRole::Middle, ClipRole::Closing]
        );
        assert_eq!(clips[0].title, "Abertura - Amazing Discovery Video...");
        assert_eq!(clips[1].title, "Momento Principal - Amazing Discovery Video...");
        assert_eq!(clips[2].title, "Conclusão - Amazing Discovery Video...");
        assert_eq!(clips[0].viral_potential, ViralPotential::High);
        assert_eq!(clips[1].viral_potential, ViralPotential::Medium);
        assert_eq!(clips[2].viral_potential, ViralPotential::High);
        assert_eq!(
            clips[0].suggested_script,
            "Você não vai acreditar no que aconteceu neste vídeo! Amazing Discovery Video..."
        );
        assert_eq!(
            clips[1].suggested_script,
            "Isso vai mudar completamente sua perspectiva sobre..."
        );
    }

    #[test]
    fn test_long_form_middle_uses_floor_half() {
        let clips = plan(&VideoInfo::new("Odd", 401));
        assert_eq!((clips[1].start_time, clips[1].end_time), (170, 230));
        assert_eq!((clips[2].start_time, clips[2].end_time), (341, 386));
    }

    #[test]
    fn test_long_form_just_above_threshold() {
        let clips = plan(&VideoInfo::new("Edge", 301));
        assert_eq!(ranges(&clips), vec![(0, 45), (120, 180), (241, 286)]);

        for duration in 301..=400 {
            let clips = plan(&VideoInfo::new("Edge", duration));
            assert!(clips.iter().all(|c| c.start_time >= 0 && c.start_time < c.end_time));
            assert!(clips[1].end_time <= clips[2].start_time);
        }
    }

    #[test]
    fn test_medium_form_single_best_moment() {
        let video = VideoInfo::new("Short Tutorial", 200);
        let clips = plan(&video);

        assert_eq!(clips.len(), 1);
        let clip = &clips[0];
        assert_eq!(clip.id, 1);
        assert_eq!((clip.start_time, clip.end_time), (15, 75));
        assert_eq!(clip.title, "Melhor Momento - Short Tutorial...");
        assert_eq!(clip.viral_potential, ViralPotential::High);
        assert_eq!(
            clip.suggested_script,
            "Prepare-se para ficar chocado com esta descoberta!"
        );
        assert!(!clip.suggested_script.contains("Short Tutorial"));
    }

    #[test]
    fn test_medium_form_band_edges() {
        for duration in [121, 300] {
            let clips = plan(&VideoInfo::new("Edge", duration));
            assert_eq!(ranges(&clips), vec![(15, 75)]);
        }
    }

    #[test]
    fn test_short_form_near_full_reuse() {
        let clips = plan(&VideoInfo::new("Quick Tip", 30));
        assert_eq!(clips.len(), 1);
        assert_eq!((clips[0].start_time, clips[0].end_time), (0, 25));
        assert_eq!(clips[0].title, "Vídeo Completo - Quick Tip...");
        assert_eq!(clips[0].viral_potential, ViralPotential::Medium);
        assert_eq!(
            clips[0].suggested_script,
            "Prepare-se para ficar chocado com esta descoberta!"
        );
    }

    #[test]
    fn test_short_form_caps_at_sixty_seconds() {
        for duration in [65, 90, 120] {
            let clips = plan(&VideoInfo::new("Cap", duration));
            assert_eq!(ranges(&clips), vec![(0, 60)]);
        }
        let clips = plan(&VideoInfo::new("Cap", 64));
        assert_eq!(ranges(&clips), vec![(0, 59)]);
    }

    #[test]
    fn test_short_form_tiny_duration_is_not_clamped() {
        let clips = plan(&VideoInfo::new("Tiny", 3));
        assert_eq!(ranges(&clips), vec![(0, -2)]);
    }

    #[test]
    fn test_title_excerpt_is_thirty_chars() {
        let title = "Uma aventura incrível através das montanhas do Brasil";
        let clips = plan(&VideoInfo::new(title, 200));
        assert_eq!(
            clips[0].title,
            format!("Melhor Momento - {}...", truncate_chars(title, 30))
        );
        assert_eq!(truncate_chars(title, 30).chars().count(), 30);
    }

    #[test]
    fn test_empty_title() {
        let clips = plan(&VideoInfo::new("", 30));
        assert_eq!(clips[0].title, "Vídeo Completo - ...");
    }

    #[test]
    fn test_plan_is_idempotent() {
        let video = VideoInfo::new("Same Every Time", 1234);
        assert_eq!(plan(&video), plan(&video));
    }

    #[test]
    fn test_count_is_zero_one_or_three() {
        for duration in (-5..=700).step_by(7) {
            let count = plan(&VideoInfo::new("Count", duration)).len();
            let expected = match CutStrategy::for_duration(duration) {
                CutStrategy::Empty => 0,
                CutStrategy::LongForm => 3,
                _ => 1,
            };
            assert_eq!(count, expected, "duration {}", duration);
        }
    }
}
