//! WCAG 2.x success criteria catalog.
//!
//! The table is fixed domain data: a read-only, process-wide slice in
//! declaration order. Lookups are linear; the catalog is small enough that an
//! index would not pay for itself.

/// A single WCAG success criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    /// Dotted numeric identifier (e.g. `1.4.3`).
    pub id: &'static str,
    /// Human-readable title.
    pub title: &'static str,
}

const fn c(id: &'static str, title: &'static str) -> Criterion {
    Criterion { id, title }
}

/// All known criteria, in declaration order.
pub static CRITERIA: &[Criterion] = &[
    c("1.1.1", "Non-text Content"),
    c("1.2.1", "Audio-only and Video-only (Prerecorded)"),
    c("1.2.2", "Captions (Prerecorded)"),
    c("1.2.3", "Audio Description or Media Alternative (Prerecorded)"),
    c("1.2.4", "Captions (Live)"),
    c("1.2.5", "Audio Description (Prerecorded)"),
    c("1.3.1", "Info and Relationships"),
    c("1.3.2", "Meaningful Sequence"),
    c("1.3.3", "Sensory Characteristics"),
    c("1.3.4", "Orientation"),
    c("1.3.5", "Identify Input Purpose"),
    c("1.3.6", "Identify Purpose"),
    c("1.4.1", "Use of Color"),
    c("1.4.2", "Audio Control"),
    c("1.4.3", "Contrast (Minimum)"),
    c("1.4.4", "Resize Text"),
    c("1.4.5", "Images of Text"),
    c("1.4.6", "Contrast (Enhanced)"),
    c("1.4.7", "Low or No Background Audio"),
    c("1.4.8", "Visual Presentation"),
    c("1.4.9", "Images of Text (No Exception)"),
    c("1.4.10", "Reflow"),
    c("1.4.11", "Non-text Contrast"),
    c("1.4.12", "Text Spacing"),
    c("1.4.13", "Content on Hover or Focus"),
    c("2.1.1", "Keyboard"),
    c("2.1.2", "No Keyboard Trap"),
    c("2.1.3", "Keyboard (No Exception)"),
    c("2.1.4", "Character Key Shortcuts"),
    c("2.2.1", "Timing Adjustable"),
    c("2.2.2", "Pause, Stop, Hide"),
    c("2.2.3", "No Timing"),
    c("2.2.4", "Interruptions"),
    c("2.2.5", "Re-authenticating"),
    c("2.2.6", "Timeouts"),
    c("2.3.1", "Three Flashes or Below Threshold"),
    c("2.3.2", "Three Flashes"),
    c("2.3.3", "Animation from Interactions"),
    c("2.4.1", "Bypass Blocks"),
    c("2.4.2", "Page Titled"),
    c("2.4.3", "Focus Order"),
    c("2.4.4", "Link Purpose (In Context)"),
    c("2.4.5", "Multiple Ways"),
    c("2.4.6", "Headings and Labels"),
    c("2.4.7", "Focus Visible"),
    c("2.4.8", "Location"),
    c("2.4.9", "Link Purpose (Link Only)"),
    c("2.4.10", "Section Headings"),
    c("2.5.1", "Pointer Gestures"),
    c("2.5.2", "Pointer Cancellation"),
    c("2.5.3", "Label in Name"),
    c("2.5.4", "Motion Actuation"),
    c("2.5.5", "Target Size"),
    c("2.5.6", "Concurrent Input Mechanisms"),
    c("3.1.1", "Language of Page"),
    c("3.1.2", "Language of Parts"),
    c("3.1.3", "Unusual Words"),
    c("3.1.4", "Abbreviations"),
    c("3.1.5", "Reading Level"),
    c("3.1.6", "Pronunciation"),
    c("3.2.1", "On Focus"),
    c("3.2.2", "On Input"),
    c("3.2.3", "Consistent Navigation"),
    c("3.2.4", "Consistent Identification"),
    c("3.2.5", "Change on Request"),
    c("3.3.1", "Error Identification"),
    c("3.3.2", "Labels or Instructions"),
    c("3.3.3", "Error Suggestion"),
    c("3.3.4", "Error Prevention (Legal, Financial, Data)"),
    c("3.3.5", "Help"),
    c("3.3.6", "Error Prevention (All)"),
    c("4.1.1", "Parsing"),
    c("4.1.2", "Name, Role, Value"),
    c("4.1.3", "Status Messages"),
];

/// Returns the title for `id`, if it is a known criterion.
#[must_use]
pub fn lookup(id: &str) -> Option<&'static str> {
    CRITERIA.iter().find(|c| c.id == id).map(|c| c.title)
}

/// Position of `id` in declaration order, used to break report ties.
#[must_use]
pub fn position(id: &str) -> Option<usize> {
    CRITERIA.iter().position(|c| c.id == id)
}

/// Case-insensitive substring search over criterion titles.
///
/// Results keep declaration order. An empty needle matches everything.
pub fn search(text: &str) -> impl Iterator<Item = &'static Criterion> {
    let needle = text.to_lowercase();
    CRITERIA
        .iter()
        .filter(move |c| c.title.to_lowercase().contains(&needle))
}
