use std::time::Duration;

use tracing::{debug, trace};

use super::{
    ActiveFlag,
    animation::{Animation, Curve},
    timeline::{
        COMPOSITION_FADE_DURATION, Cue, MILLIS_PER_UNIT, PANEL_COUNT, PANEL_FADE_DURATION,
        REVEAL_DURATION, ROTATION_DURATION, SplashTransition, elapsed_millis, opening_timeline,
    },
};

/// Presentation values of the splash at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplashFrame {
    pub rotation_angle: f64,
    /// `None` until the logotype is mounted.
    pub text_reveal_progress: Option<f64>,
    pub fade_opacity: f64,
    pub panel_opacities: [f64; PANEL_COUNT],
}

#[derive(Debug, Clone)]
struct SplashState {
    rotation: Animation,
    reveal: Option<Animation>,
    fade: Animation,
    panels: [Animation; PANEL_COUNT],
}

impl Default for SplashState {
    fn default() -> Self {
        Self {
            rotation: Animation::still(0.0),
            reveal: None,
            fade: Animation::still(1.0),
            panels: [Animation::still(1.0); PANEL_COUNT],
        }
    }
}

pub struct SplashSequencer {
    cues: Vec<Cue>,
    next_cue: usize,
    unit: Duration,
    now: f64,
    state: SplashState,
    active: ActiveFlag,
}

impl SplashSequencer {
    pub fn new(active: ActiveFlag, unit: Duration) -> Self {
        Self::with_timeline(active, unit, opening_timeline())
    }

    pub fn with_timeline(active: ActiveFlag, unit: Duration, mut cues: Vec<Cue>) -> Self {
        cues.sort_by_key(|cue| cue.offset_millis);
        Self {
            cues,
            next_cue: 0,
            unit,
            now: 0.0,
            state: SplashState::default(),
            active,
        }
    }

    /// Moves the sequence to `elapsed` since start and fires every cue that
    /// has come due, in order, exactly once. Returns the fired transitions.
    /// Going backwards in time fires nothing.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<SplashTransition> {
        let now_millis = elapsed_millis(elapsed, self.unit);
        let now = now_millis as f64 / MILLIS_PER_UNIT as f64;
        if now > self.now {
            self.now = now;
        }

        let mut fired = Vec::new();
        while let Some(cue) = self.cues.get(self.next_cue).copied() {
            if cue.offset_millis > now_millis {
                break;
            }
            self.next_cue += 1;
            self.apply(cue);
            fired.push(cue.transition);
        }
        fired
    }

    fn apply(&mut self, cue: Cue) {
        let at = cue.offset_units();
        trace!("Splash cue {:?} at {:.3}", cue.transition, at);

        match cue.transition {
            SplashTransition::Rotate { degrees } => {
                self.state
                    .rotation
                    .retarget(degrees, at, ROTATION_DURATION, Curve::EaseInOut);
            }
            SplashTransition::RevealLogotype => {
                let mut reveal = Animation::still(0.0);
                reveal.retarget(1.0, at, REVEAL_DURATION, Curve::Linear);
                self.state.reveal = Some(reveal);
            }
            SplashTransition::FadePanel(index) => {
                if let Some(panel) = self.state.panels.get_mut(index) {
                    panel.retarget(0.0, at, PANEL_FADE_DURATION, Curve::EaseInOut);
                }
            }
            SplashTransition::FadeComposition => {
                self.state
                    .fade
                    .retarget(0.0, at, COMPOSITION_FADE_DURATION, Curve::EaseInOut);
            }
            SplashTransition::Finish => {
                if self.active.deactivate() {
                    debug!("Splash finished");
                }
            }
        }
    }

    /// Animated values at the last advanced instant.
    pub fn frame(&self) -> SplashFrame {
        let t = self.now;
        SplashFrame {
            rotation_angle: self.state.rotation.sample(t),
            text_reveal_progress: self.state.reveal.map(|r| r.sample(t)),
            fade_opacity: self.state.fade.sample(t),
            panel_opacities: self.state.panels.map(|p| p.sample(t)),
        }
    }

    /// Values every running animation is heading to.
    pub fn targets(&self) -> SplashFrame {
        SplashFrame {
            rotation_angle: self.state.rotation.target(),
            text_reveal_progress: self.state.reveal.map(|r| r.target()),
            fade_opacity: self.state.fade.target(),
            panel_opacities: self.state.panels.map(|p| p.target()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_active()
    }

    pub fn is_finished(&self) -> bool {
        self.next_cue >= self.cues.len()
    }
}
