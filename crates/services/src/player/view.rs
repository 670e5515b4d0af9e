use journey_core::model::{GapFill, Milestone};

use super::session::{InteractionStatus, JourneyPlayer};

/// Placeholder glyph rendered in a gap-fill blank before the reveal.
pub const BLANK_PLACEHOLDER: &str = "____";

/// Aggregated view of player progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub slide_index: usize,
    pub total_slides: usize,
    pub milestone: Option<Milestone>,
    pub status: InteractionStatus,
    pub is_closed: bool,
}

impl JourneyPlayer {
    /// Snapshot of the player for progress-indicator display.
    #[must_use]
    pub fn view(&self) -> PlayerView {
        PlayerView {
            slide_index: match self.state() {
                super::PlayerState::AtSlide(i) => i,
                super::PlayerState::Closed { .. } => self.slides().len(),
            },
            total_slides: self.slides().len(),
            milestone: self.current_slide().map(|s| s.milestone),
            status: self.status(),
            is_closed: self.is_closed(),
        }
    }
}

/// Renders a gap-fill as one line, blanks either masked or substituted with
/// their positional answers.
#[must_use]
pub fn render_gap(gap: &GapFill, revealed: bool) -> String {
    let mut line = String::new();
    for (i, part) in gap.text_parts.iter().enumerate() {
        line.push_str(part);
        if i < gap.answers.len() {
            if revealed {
                line.push_str(&gap.answers[i]);
            } else {
                line.push_str(BLANK_PLACEHOLDER);
            }
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap() -> GapFill {
        GapFill {
            text_parts: vec![
                "Executives receive ".to_string(),
                " packages; the ".to_string(),
                " is excessive.".to_string(),
            ],
            answers: vec!["Remuneration".to_string(), "Disparity".to_string()],
        }
    }

    #[test]
    fn masked_gap_shows_placeholders() {
        assert_eq!(
            render_gap(&gap(), false),
            "Executives receive ____ packages; the ____ is excessive."
        );
    }

    #[test]
    fn revealed_gap_substitutes_positionally() {
        assert_eq!(
            render_gap(&gap(), true),
            "Executives receive Remuneration packages; the Disparity is excessive."
        );
    }
}
