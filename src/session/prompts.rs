//! The static IELTS question bank.
//!
//! Parts 1 and 3 are plain question lists; part 2 is a cue card with a topic
//! and bullet points the candidate should cover during the long turn.

// ---------------------------------------------------------------------------
// Question bank
// ---------------------------------------------------------------------------

const PART_1_QUESTIONS: &[&str] = &[
    "What is your name?",
    "Where are you from?",
    "Do you work or study?",
    "What do you like about your job/studies?",
];

const PART_2_TOPIC: &str = "Describe a place you like to visit.";

const PART_2_POINTS: &[&str] = &[
    "Where it is",
    "When you go there",
    "What you do there",
    "Why you like it",
];

const PART_3_QUESTIONS: &[&str] = &[
    "What makes a place worth visiting?",
    "How has tourism changed in recent years?",
    "What are the benefits and drawbacks of tourism?",
];

// ---------------------------------------------------------------------------
// PartPrompts
// ---------------------------------------------------------------------------

/// Prompts for one test part.
#[derive(Debug, PartialEq, Eq)]
pub enum PartPrompts {
    /// A list of questions the examiner asks (parts 1 and 3).
    Questions(&'static [&'static str]),
    /// A cue card: a topic plus the points to cover (part 2).
    CueCard {
        topic: &'static str,
        points: &'static [&'static str],
    },
}

static PART_1: PartPrompts = PartPrompts::Questions(PART_1_QUESTIONS);
static PART_2: PartPrompts = PartPrompts::CueCard {
    topic: PART_2_TOPIC,
    points: PART_2_POINTS,
};
static PART_3: PartPrompts = PartPrompts::Questions(PART_3_QUESTIONS);

/// Prompts for `part`. Parts outside `[1, 3]` fall back to part 1, matching
/// the session controller's clamping.
pub fn prompts_for(part: u8) -> &'static PartPrompts {
    match part {
        2 => &PART_2,
        3 => &PART_3,
        _ => &PART_1,
    }
}

/// Heading shown above the prompts for `part`.
pub fn part_title(part: u8) -> &'static str {
    match part {
        2 => "Part 2: Long Turn",
        3 => "Part 3: Discussion",
        _ => "Part 1: Introduction and Interview",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
