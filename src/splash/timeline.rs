use std::time::Duration;

/// Timeline positions are kept in thousandths of a time unit so that
/// staggered offsets compare exactly.
pub const MILLIS_PER_UNIT: u64 = 1000;

pub const PANEL_COUNT: usize = 5;
pub const PANEL_STAGGER_MILLIS: u64 = 200;

pub const ROTATION_DURATION: f64 = 1.0;
pub const REVEAL_DURATION: f64 = 1.0;
pub const PANEL_FADE_DURATION: f64 = 0.35;
pub const COMPOSITION_FADE_DURATION: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplashTransition {
    /// Turn the mark to `degrees`, eased over one unit.
    Rotate { degrees: f64 },
    /// Mount the logotype and sweep its reveal mask open.
    RevealLogotype,
    FadePanel(usize),
    FadeComposition,
    /// Clear the host's active flag.
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub offset_millis: u64,
    pub transition: SplashTransition,
}

impl Cue {
    const fn at(offset_millis: u64, transition: SplashTransition) -> Self {
        Self {
            offset_millis,
            transition,
        }
    }

    pub fn offset_units(&self) -> f64 {
        self.offset_millis as f64 / MILLIS_PER_UNIT as f64
    }
}

/// Opening sequence, ordered by offset. Cues sharing an offset fire in list
/// order.
pub fn opening_timeline() -> Vec<Cue> {
    let mut cues = vec![
        Cue::at(0, SplashTransition::Rotate { degrees: -90.0 }),
        Cue::at(1000, SplashTransition::Rotate { degrees: 180.0 }),
        Cue::at(2000, SplashTransition::RevealLogotype),
        Cue::at(3000, SplashTransition::FadeComposition),
    ];
    cues.extend((0..PANEL_COUNT).map(|i| {
        Cue::at(
            3000 + i as u64 * PANEL_STAGGER_MILLIS,
            SplashTransition::FadePanel(i),
        )
    }));
    cues.push(Cue::at(4000, SplashTransition::Finish));
    cues.sort_by_key(|cue| cue.offset_millis);
    cues
}

/// Elapsed wall time expressed in thousandths of `unit`.
pub fn elapsed_millis(elapsed: Duration, unit: Duration) -> u64 {
    let unit = unit.as_nanos().max(1);
    (elapsed.as_nanos() * MILLIS_PER_UNIT as u128 / unit) as u64
}
