//! # Typewriter Text Cycler
//!
//! Types a list of phrases one character at a time, holds each complete phrase
//! for a pause, deletes it at double speed, then moves on to the next phrase.
//!
//! ## State Machine
//!
//! ```text
//!            speed per char              pause
//!   ""  ─────────────────────▶  full  ──────────▶  deleting
//!   ▲                                                  │
//!   │        at once, advance to (index + 1) % len     │ speed/2 per char
//!   └──────────────────────────────────────────── ""  ◀┘
//! ```
//!
//! Each step is a one-shot timer rescheduled from the previous deadline, so
//! [`Typewriter::advance`] can be called at any cadence and still lands on the
//! same sequence of states.

use std::time::Duration;

/// Default time to type one character.
pub const DEFAULT_SPEED: Duration = Duration::from_millis(85);

/// Default time a fully-typed phrase stays on screen.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(2000);

/// Length of one full cursor blink cycle (visible half, hidden half).
pub const CURSOR_PERIOD: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    speed: Duration,
    pause: Duration,
    /// Number of characters of the active phrase currently shown.
    shown: usize,
    index: usize,
    deleting: bool,
    next_step_at: Duration,
}

impl Typewriter {
    /// Create a typewriter mounted at time zero.
    ///
    /// `phrases` must not be empty; an empty list never displays anything.
    pub fn new(phrases: Vec<String>, speed: Duration, pause: Duration) -> Self {
        let mut typewriter = Self {
            phrases,
            speed,
            pause,
            shown: 0,
            index: 0,
            deleting: false,
            next_step_at: Duration::ZERO,
        };
        // An empty first phrase is already complete and starts on its pause
        typewriter.next_step_at = typewriter.current_delay();
        typewriter
    }

    /// Run every step whose deadline is at or before `now` (time since mount).
    pub fn advance(&mut self, now: Duration) {
        if self.phrases.is_empty() {
            return;
        }
        while self.next_step_at <= now {
            self.step();
            let delay = self.current_delay();
            if delay.is_zero() {
                // A zero speed would never let time move forward
                break;
            }
            self.next_step_at += delay;
        }
    }

    // One timer firing.
    fn step(&mut self) {
        let len = self.active_len();
        if !self.deleting && self.shown == len {
            self.deleting = true;
        } else if self.deleting {
            self.shown = self.shown.saturating_sub(1);
        } else {
            self.shown += 1;
        }
        // Emptied: move on right away, the next phrase types after `speed`
        if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.phrases.len();
        }
    }

    // Delay before the next firing, chosen by the state we are now in.
    fn current_delay(&self) -> Duration {
        if !self.deleting && self.shown == self.active_len() {
            self.pause
        } else if self.deleting {
            self.speed / 2
        } else {
            self.speed
        }
    }

    fn active_len(&self) -> usize {
        self.phrases
            .get(self.index)
            .map_or(0, |phrase| phrase.chars().count())
    }

    /// The text currently on screen: always a prefix of the active phrase.
    pub fn display(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return "";
        };
        match phrase.char_indices().nth(self.shown) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    pub fn active_index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

/// Whether the cursor next to the typed text is lit at `now`.
///
/// The cursor blinks on its own clock, independent of typing state.
pub fn cursor_visible(now: Duration) -> bool {
    let period = CURSOR_PERIOD.as_millis();
    now.as_millis() % period < period / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn roles() -> Vec<String> {
        vec!["Copywriter.".to_string(), "Strategist.".to_string()]
    }

    #[test]
    fn test_starts_empty() {
        let tw = Typewriter::new(roles(), DEFAULT_SPEED, DEFAULT_PAUSE);
        assert_eq!(tw.display(), "");
        assert_eq!(tw.active_index(), 0);
        assert!(!tw.is_deleting());
    }

    #[test]
    fn test_types_one_char_per_speed() {
        let mut tw = Typewriter::new(roles(), ms(85), ms(2000));
        tw.advance(ms(84));
        assert_eq!(tw.display(), "");
        tw.advance(ms(85));
        assert_eq!(tw.display(), "C");
        tw.advance(ms(85 * 4));
        assert_eq!(tw.display(), "Copy");
    }

    #[test]
    fn test_holds_full_phrase_for_pause() {
        let mut tw = Typewriter::new(roles(), ms(85), ms(2000));
        // 11 characters typed at 935ms
        tw.advance(ms(935));
        assert_eq!(tw.display(), "Copywriter.");
        tw.advance(ms(935 + 1999));
        assert_eq!(tw.display(), "Copywriter.");
        assert!(!tw.is_deleting());
        tw.advance(ms(935 + 2000));
        assert!(tw.is_deleting());
        assert_eq!(tw.display(), "Copywriter.");
    }

    #[test]
    fn test_deletes_at_half_speed() {
        let mut tw = Typewriter::new(roles(), ms(100), ms(1000));
        // typed at 1100, deleting from 2100, one char every 50ms
        tw.advance(ms(2100 + 50));
        assert_eq!(tw.display(), "Copywriter");
        tw.advance(ms(2100 + 50 * 4));
        assert_eq!(tw.display(), "Copywri");
    }

    #[test]
    fn test_advances_to_next_phrase() {
        let mut tw = Typewriter::new(roles(), ms(85), ms(2000));
        // typed 935, pause ends 2935, emptied and switched 3402.5
        tw.advance(ms(3402));
        assert_eq!(tw.active_index(), 0);
        assert_eq!(tw.display(), "C");
        tw.advance(ms(3403));
        assert_eq!(tw.active_index(), 1);
        assert_eq!(tw.display(), "");
        assert!(!tw.is_deleting());
        // first character one full `speed` later, at 3487.5
        tw.advance(ms(3487));
        assert_eq!(tw.display(), "");
        tw.advance(ms(3488));
        assert_eq!(tw.display(), "S");
        tw.advance(ms(4338));
        assert_eq!(tw.display(), "Strategist.");
    }

    #[test]
    fn test_wraps_back_to_first_phrase() {
        let mut tw = Typewriter::new(roles(), ms(10), ms(100));
        // one full cycle per phrase: 110 + 100 + 55 = 265ms
        tw.advance(ms(529));
        assert_eq!(tw.active_index(), 1);
        tw.advance(ms(530));
        assert_eq!(tw.active_index(), 0);
    }

    #[test]
    fn test_single_phrase_cycles_onto_itself() {
        let mut tw = Typewriter::new(vec!["Hi".to_string()], ms(10), ms(50));
        tw.advance(ms(20));
        assert_eq!(tw.display(), "Hi");
        tw.advance(ms(20 + 50 + 10));
        assert_eq!(tw.display(), "");
        tw.advance(ms(200));
        assert_eq!(tw.active_index(), 0);
        assert!(tw.display().len() <= 2);
    }

    #[test]
    fn test_multibyte_phrases_slice_on_char_boundaries() {
        let mut tw = Typewriter::new(vec!["Café ✍️".to_string()], ms(10), ms(50));
        tw.advance(ms(40));
        assert_eq!(tw.display(), "Café");
    }

    #[test]
    fn test_coarse_and_fine_ticks_agree() {
        let mut fine = Typewriter::new(roles(), ms(85), ms(2000));
        let mut coarse = fine.clone();
        for t in (0..=6000).step_by(16) {
            fine.advance(ms(t));
        }
        coarse.advance(ms(6000));
        assert_eq!(fine.display(), coarse.display());
        assert_eq!(fine.active_index(), coarse.active_index());
    }

    #[test]
    fn test_empty_phrase_is_skipped_after_pause() {
        let mut tw = Typewriter::new(
            vec![String::new(), "Hi".to_string()],
            ms(10),
            ms(50),
        );
        // "" is complete on mount, held for the pause, then skipped
        tw.advance(ms(49));
        assert_eq!(tw.active_index(), 0);
        tw.advance(ms(50));
        assert_eq!(tw.active_index(), 1);
        assert_eq!(tw.display(), "");
        tw.advance(ms(60));
        assert_eq!(tw.display(), "H");
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut tw = Typewriter::new(Vec::new(), ms(85), ms(2000));
        tw.advance(ms(10_000));
        assert_eq!(tw.display(), "");
    }

    #[test]
    fn test_cursor_blinks_once_per_second() {
        assert!(cursor_visible(ms(0)));
        assert!(cursor_visible(ms(499)));
        assert!(!cursor_visible(ms(500)));
        assert!(!cursor_visible(ms(999)));
        assert!(cursor_visible(ms(1000)));
    }
}
