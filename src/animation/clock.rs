/// Playback state of the clock. There is no terminal state; a clock runs
/// for the lifetime of the owning scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClockState {
    Stopped,
    Running,
}

/// Process-wide time source driving all animated nodes.
///
/// The render loop advances the clock once per frame and reads its time
/// once, so every node observes the same query time within a tick. With
/// looping enabled the time wraps back to zero at the configured period;
/// otherwise it clamps there, leaving all timelines on their clamp-after
/// branch.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    state: ClockState,
    time: f32,
    looping: bool,
    period: f32,
}

impl AnimationClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ClockState::Stopped,
            time: 0.0,
            looping: false,
            period: 0.0,
        }
    }

    /// Starts playback from zero.
    pub fn start(&mut self) {
        self.state = ClockState::Running;
        self.time = 0.0;
        log::debug!("animation clock started (loop: {})", self.looping);
    }

    /// Configures looping. A `period <= 0` disables both the wrap and the
    /// end clamp, letting the clock run unbounded.
    pub fn set_loop(&mut self, enabled: bool, period: f32) {
        self.looping = enabled;
        self.period = period;
    }

    /// Advances elapsed time by `dt` seconds. No-op while stopped.
    pub fn advance(&mut self, dt: f32) {
        if self.state == ClockState::Stopped {
            return;
        }
        self.time += dt;
        if self.period > 0.0 {
            if self.looping {
                if self.time >= self.period {
                    self.time %= self.period;
                }
            } else if self.time > self.period {
                self.time = self.period;
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}
