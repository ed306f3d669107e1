//! The [`Session`] state machine: mode selection, part navigation, reset.
//!
//! Held by the presentation layer and mutated only through its methods, so
//! the navigation invariants (`current_part` stays in `[1, 3]`, mode is set
//! at most once) cannot be violated from outside.

use crate::analysis::AnalysisResult;

use super::prompts::{prompts_for, PartPrompts};

/// Lowest test part (Introduction and Interview).
pub const PART_MIN: u8 = 1;
/// Highest test part (Discussion).
pub const PART_MAX: u8 = 3;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Which flavour of session the user picked on the welcome screen.
///
/// The selection is one-way: once `Practice` or `Test` is chosen there is no
/// path back to `Unset` short of restarting the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No mode chosen yet — the welcome screen is showing.
    Unset,
    /// Free practice on part 1 prompts only.
    Practice,
    /// Full simulated test with part 1/2/3 navigation.
    Test,
}

impl Mode {
    /// Short human-readable label for the status line.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Unset => "not selected",
            Mode::Practice => "Practice",
            Mode::Test => "Test",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Unset
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// One completed recording cycle: the part it answered, what was said, and
/// how it scored.
#[derive(Debug, Clone)]
pub struct Response {
    /// Test part this response answered (1–3).
    pub part: u8,
    /// Transcript returned by the speech service.
    pub transcript: String,
    /// Scores and feedback returned by the analyzer.
    pub analysis: AnalysisResult,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// In-memory state for a single practice run.
///
/// Created once at program start with `mode = Unset`, `current_part = 1` and
/// no responses. All transitions are user-triggered.
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    current_part: u8,
    responses: Vec<Response>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session: no mode, part 1, empty history.
    pub fn new() -> Self {
        Self {
            mode: Mode::Unset,
            current_part: PART_MIN,
            responses: Vec::new(),
        }
    }

    /// Currently selected mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current test part, always in `[PART_MIN, PART_MAX]`.
    pub fn current_part(&self) -> u8 {
        self.current_part
    }

    /// Responses recorded so far, oldest first.
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Select a mode. Silently ignored if a mode was already chosen —
    /// the first selection wins for the lifetime of the process.
    pub fn select_mode(&mut self, mode: Mode) {
        if self.mode != Mode::Unset || mode == Mode::Unset {
            return;
        }
        self.mode = mode;
    }

    /// Move to the next part, clamped at [`PART_MAX`].
    pub fn advance_part(&mut self) {
        if self.current_part < PART_MAX {
            self.current_part += 1;
        }
    }

    /// Move to the previous part, clamped at [`PART_MIN`].
    pub fn retreat_part(&mut self) {
        if self.current_part > PART_MIN {
            self.current_part -= 1;
        }
    }

    /// Record a completed cycle against the current part.
    pub fn push_response(&mut self, transcript: String, analysis: AnalysisResult) {
        self.responses.push(Response {
            part: self.current_part,
            transcript,
            analysis,
        });
    }

    /// Restart the test: back to part 1, history cleared. The selected mode
    /// is intentionally kept — there is no path back to the welcome screen.
    pub fn reset(&mut self) {
        self.current_part = PART_MIN;
        self.responses.clear();
    }

    /// Prompts for the current part. Pure read of the static question bank.
    pub fn current_prompts(&self) -> &'static PartPrompts {
        prompts_for(self.current_part())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisResult, Feedback, Scores};

    fn sample_analysis() -> AnalysisResult {
        AnalysisResult {
            scores: Scores {
                fluency: 7,
                vocabulary: 6,
                grammar: 8,
                pronunciation: 7,
            },
            feedback: Feedback {
                strengths: vec!["clear".into()],
                improvements: vec!["pace".into()],
            },
        }
    }

    // ---- construction ---

    #[test]
    fn new_session_starts_unset_at_part_one() {
        let session = Session::new();
        assert_eq!(session.mode(), Mode::Unset);
        assert_eq!(session.current_part(), 1);
        assert!(session.responses().is_empty());
    }

    // ---- select_mode ---

    #[test]
    fn first_mode_selection_wins() {
        let mut session = Session::new();
        session.select_mode(Mode::Test);
        assert_eq!(session.mode(), Mode::Test);

        // Second selection is a silent no-op.
        session.select_mode(Mode::Practice);
        assert_eq!(session.mode(), Mode::Test);
    }

    #[test]
    fn selecting_unset_is_a_no_op() {
        let mut session = Session::new();
        session.select_mode(Mode::Unset);
        assert_eq!(session.mode(), Mode::Unset);

        session.select_mode(Mode::Practice);
        session.select_mode(Mode::Unset);
        assert_eq!(session.mode(), Mode::Practice);
    }

    // ---- part navigation ---

    #[test]
    fn advance_clamps_at_part_three() {
        let mut session = Session::new();
        for _ in 0..10 {
            session.advance_part();
        }
        assert_eq!(session.current_part(), 3);
    }

    #[test]
    fn retreat_clamps_at_part_one() {
        let mut session = Session::new();
        for _ in 0..10 {
            session.retreat_part();
        }
        assert_eq!(session.current_part(), 1);
    }

    #[test]
    fn part_never_leaves_valid_range() {
        let mut session = Session::new();
        // Arbitrary interleaving of moves must keep the part in [1, 3].
        for i in 0..100 {
            if i % 3 == 0 {
                session.retreat_part();
            } else {
                session.advance_part();
            }
            assert!((1..=3).contains(&session.current_part()));
        }
    }

    // ---- reset ---

    #[test]
    fn reset_keeps_mode_but_rewinds_part_and_history() {
        let mut session = Session::new();
        session.select_mode(Mode::Test);
        session.advance_part();
        session.advance_part();
        session.push_response("a place I like".into(), sample_analysis());
        assert_eq!(session.current_part(), 3);

        session.reset();

        assert_eq!(session.mode(), Mode::Test);
        assert_eq!(session.current_part(), 1);
        assert!(session.responses().is_empty());
    }

    // ---- responses ---

    #[test]
    fn push_response_tags_the_current_part() {
        let mut session = Session::new();
        session.select_mode(Mode::Test);
        session.advance_part();
        session.push_response("my answer".into(), sample_analysis());

        let responses = session.responses();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].part, 2);
        assert_eq!(responses[0].transcript, "my answer");
    }

    // ---- prompts ---

    #[test]
    fn current_prompts_follow_the_part() {
        let mut session = Session::new();
        assert!(matches!(
            session.current_prompts(),
            PartPrompts::Questions(_)
        ));

        session.advance_part();
        assert!(matches!(
            session.current_prompts(),
            PartPrompts::CueCard { .. }
        ));
    }
}
