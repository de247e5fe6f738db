//! Animation and scheduling integration tests — driven with synthetic
//! instants, no sleeping.

use std::time::{Duration, Instant};

use assert_approx_eq::assert_approx_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use glint::animate::{
    scramble_line, Phase, RevealAnimator, Tick, TypingAnimator, DEFAULT_REVEAL, SCRAMBLE_CHARS,
};
use glint::lexer::TokenClass;
use glint::schedule::{Debouncer, Retokenizer};

const MS: Duration = Duration::from_millis(1);

const HERO: [&str; 3] = [
    "/* super tiny syntax highlighter */",
    "import { highlight } from 'sugar-high'",
    "const code = highlight('const text = 1')",
];

#[test]
fn reveal_completes_after_duration() {
    let t0 = Instant::now();
    let mut reveal = RevealAnimator::new(HERO, DEFAULT_REVEAL, 11);
    reveal.activate(false, t0);
    reveal.activate(true, t0);

    let mut ready = 0;
    for step in 0..=20u32 {
        if reveal.frame(t0 + step * 50 * MS) == Tick::Ready {
            ready += 1;
        }
    }
    assert_eq!(ready, 1);
    assert_eq!(reveal.phase(), Phase::Settled);
    assert_approx_eq!(reveal.progress(), 1.0);
    assert_eq!(reveal.display(), reveal.source());
}

#[test]
fn reveal_frames_keep_spaces_and_revealed_prefix() {
    let t0 = Instant::now();
    let mut reveal = RevealAnimator::new(HERO, DEFAULT_REVEAL, 5);
    reveal.activate(true, t0);
    for step in 0..14u32 {
        let now = t0 + step * 50 * MS;
        reveal.frame(now);
        let progress = reveal.progress();
        for (source, shown) in reveal.source().iter().zip(reveal.display()) {
            let len = source.chars().count();
            let revealed = (len as f64 * progress).floor() as usize;
            for (i, (a, b)) in source.chars().zip(shown.chars()).enumerate() {
                if a == ' ' || i < revealed {
                    assert_eq!(a, b);
                } else {
                    assert!(SCRAMBLE_CHARS.contains(b));
                }
            }
        }
    }
}

#[test]
fn reveal_is_reproducible_per_seed() {
    let t0 = Instant::now();
    let run = |seed| {
        let mut reveal = RevealAnimator::new(HERO, DEFAULT_REVEAL, seed);
        reveal.activate(true, t0);
        reveal.frame(t0 + 200 * MS);
        reveal.display().to_vec()
    };
    assert_eq!(run(1), run(1));
    assert_ne!(run(1), run(2));
}

#[test]
fn overlay_exposes_three_layers() {
    let t0 = Instant::now();
    let mut reveal = RevealAnimator::new(HERO, DEFAULT_REVEAL, 0);
    reveal.activate(false, t0);
    let overlay = reveal.overlay_lines();
    assert_eq!(overlay.len(), 3);
    assert_eq!(overlay[2].original, HERO[2]);
    assert_ne!(overlay[2].display, HERO[2]);
    assert_eq!(overlay[2].tokens[0].class, TokenClass::Keyword);
    assert!(!overlay[2].colored);
}

#[test]
fn scramble_of_spaces_only() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(scramble_line("   ", 0, &mut rng), "   ");
}

#[test]
fn typing_reaches_target_and_signals_once() {
    let t0 = Instant::now();
    let target = "export default function App() {}";
    let mut typing = TypingAnimator::new(target, 1000 * MS);
    typing.start(t0);

    let mut ready = 0;
    let mut last_len = 0;
    for step in 0..=40u32 {
        if typing.poll(t0 + step * 30 * MS) == Tick::Ready {
            ready += 1;
        }
        assert!(typing.text().len() >= last_len);
        assert!(target.starts_with(typing.text()));
        last_len = typing.text().len();
    }
    assert_eq!(ready, 1);
    assert_eq!(typing.text(), target);
}

#[test]
fn debounce_coalesces_bursts() {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(200 * MS);
    let mut released = Vec::new();
    for i in 0..10u32 {
        let now = t0 + i * 50 * MS;
        debouncer.on_change(i, now);
        released.extend(debouncer.poll(now));
    }
    assert!(released.is_empty());
    released.extend(debouncer.poll(t0 + 650 * MS));
    assert_eq!(released, vec![9]);
}

#[test]
fn retokenizer_tokenizes_last_text_once() {
    let t0 = Instant::now();
    let mut retokenizer = Retokenizer::new("", 200 * MS);
    let edits = ["c", "co", "con", "cons", "const"];
    for (i, text) in edits.iter().enumerate() {
        retokenizer.on_buffer_change(*text, t0 + i as u32 * 10 * MS);
    }
    let mut runs = 0;
    for step in 0..50u32 {
        if retokenizer.poll(t0 + step * 10 * MS) {
            runs += 1;
        }
    }
    assert_eq!(runs, 1);
    assert_eq!(retokenizer.text(), "const");
    assert_eq!(retokenizer.tokens()[0].class, TokenClass::Keyword);
}
