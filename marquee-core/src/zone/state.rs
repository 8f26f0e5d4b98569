//! Zone animation states
//!
//! An animation is two phases. Entering starts at `Initialise` and finishes
//! at `Pause`; exiting starts at `Pause` and finishes at `End`. The states in
//! between are used by the effects to sequence their frames.

/// Animation state of a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FsmState {
    /// Animation requested, nothing drawn yet
    Initialise,
    /// Fetching the first character
    GetFirstChar,
    /// Fetching the next character
    GetNextChar,
    /// Drawing character columns
    PutChar,
    /// Drawing blank columns after the text
    PutFiller,
    /// Entering finished, text is on display
    Pause,
    /// Animation complete
    #[default]
    End,
}

impl FsmState {
    /// Check if the zone has nothing left to do
    pub fn is_idle(&self) -> bool {
        matches!(self, FsmState::End)
    }

    /// Check if an effect is between its first and last frame
    pub fn is_running(&self) -> bool {
        matches!(
            self,
            FsmState::GetFirstChar
                | FsmState::GetNextChar
                | FsmState::PutChar
                | FsmState::PutFiller
        )
    }
}

/// Which half of the animation is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Motion {
    /// Text is arriving (entry effect)
    #[default]
    Entering,
    /// Text is leaving (exit effect)
    Exiting,
}

impl Motion {
    /// Motion after a step that left the zone in `state`
    ///
    /// Entering switches to exiting once the pause is reached, never back.
    pub fn after(self, state: FsmState) -> Self {
        match (self, state) {
            (Motion::Entering, FsmState::Pause) => Motion::Exiting,
            (motion, _) => motion,
        }
    }
}
