use super::*;

fn type_all(tw: &mut Typewriter) -> usize {
    let mut steps = 0;
    while tw.advance() {
        steps += 1;
    }
    steps
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn reveals_one_character_per_step() {
    let mut tw = Typewriter::new("CNC");
    assert_eq!(tw.revealed_text(), "");
    assert!(tw.advance());
    assert_eq!(tw.revealed_text(), "C");
    assert!(tw.advance());
    assert_eq!(tw.revealed_text(), "CN");
}

#[test]
fn completes_after_len_steps_and_stops() {
    let mut tw = Typewriter::new("CNC MACHINING");
    assert_eq!(type_all(&mut tw), 13);
    assert!(tw.is_complete());
    assert!(!tw.advance());
    assert_eq!(tw.revealed_text(), "CNC MACHINING");
}

#[test]
fn counts_characters_not_bytes() {
    let mut tw = Typewriter::new("±0.001");
    assert_eq!(type_all(&mut tw), 6);
    assert_eq!(tw.revealed_text(), "±0.001");
}

#[test]
fn empty_text_is_complete_immediately() {
    let mut tw = Typewriter::new("");
    assert!(tw.is_complete());
    assert!(!tw.advance());
}

// =============================================================
// Deferred start
// =============================================================

#[test]
fn deferred_waits_for_start() {
    let mut tw = Typewriter::deferred("Who Are You?");
    assert!(!tw.is_started());
    assert!(!tw.advance());
    assert!(tw.start());
    assert!(!tw.start(), "start fires only once");
    assert!(tw.advance());
}

#[test]
fn scroll_trigger_needs_half_visible() {
    let mut tw = Typewriter::deferred("Who Are You?");
    assert!(!tw.start_if_visible(0.2));
    assert!(!tw.is_started());
    assert!(tw.start_if_visible(0.5));
    assert!(!tw.start_if_visible(1.0));
}

// =============================================================
// Caret
// =============================================================

#[test]
fn caret_blinks() {
    let mut tw = Typewriter::new("abc");
    assert!(tw.caret_visible());
    tw.blink();
    assert!(!tw.caret_visible());
    tw.blink();
    assert!(tw.caret_visible());
}

#[test]
fn always_caret_survives_completion() {
    let mut tw = Typewriter::new("ab");
    type_all(&mut tw);
    assert!(tw.caret_visible());
}

#[test]
fn deferred_caret_hides_on_completion() {
    let mut tw = Typewriter::deferred("ab");
    tw.start();
    assert!(tw.caret_visible());
    type_all(&mut tw);
    assert!(!tw.caret_visible());
}

// =============================================================
// Highlight segments
// =============================================================

#[test]
fn segments_without_highlight_is_plain() {
    let mut tw = Typewriter::new("ON STEROIDS");
    type_all(&mut tw);
    let seg = tw.segments(None);
    assert_eq!(seg.before, "ON STEROIDS");
    assert_eq!(seg.highlight, None);
}

#[test]
fn highlight_appears_only_once_fully_typed() {
    let mut tw = Typewriter::new("ON STEROIDS!");
    for _ in 0..8 {
        tw.advance();
    }
    let partial = tw.segments(Some("STEROIDS"));
    assert_eq!(partial.before, "ON STER");
    assert_eq!(partial.highlight, None);

    type_all(&mut tw);
    let full = tw.segments(Some("STEROIDS"));
    assert_eq!(full.before, "ON ");
    assert_eq!(full.highlight.as_deref(), Some("STEROIDS"));
    assert_eq!(full.after, "!");
}

#[test]
fn empty_highlight_is_ignored() {
    let mut tw = Typewriter::new("abc");
    type_all(&mut tw);
    assert_eq!(tw.segments(Some("")).highlight, None);
}
