/* SPDX-License-Identifier: GPL-2.0-only */
#![cfg_attr(not(test), no_std)]

use core::fmt;
use log::{debug, info};

/// The boot state machine of the first boot stage. The stage is separated
/// into discrete states that run on the boot processor alone, one after the
/// other. Each state is bracketed by an entry and an exit record:
///
/// ```text
///      Enter State
///           +
///           |
///           V
///   +-----------------+
///   | Entry record    |
///   +-----------------+
///   | State Actions   |
///   +-----------------+
///   | Exit record     |
///   +-------+---------+
///           |
///           V
///       Next State
/// ```
///
/// Below is the flow from top to bottom:
///
/// ```text
///        start
///          |
///    BS_EARLY_SETUP
///          |
///    BS_ARCH_SETUP
///          |
///    BS_PLATFORM_SETUP
///          |
///    BS_EXIT_PREP
///          |
///    BS_DONE
///          |
///    next image run
/// ```
///
/// Brief description of states:
///   BS_EARLY_SETUP - watchdog, console, trusted memory layout, coherency
///   BS_ARCH_SETUP - translation tables and MMU enable
///   BS_PLATFORM_SETUP - IO backends, firmware config, system counter
///   BS_EXIT_PREP - watchdog disarm, secondary release
///   BS_DONE - nothing left to do in this stage
///
/// There are no back edges and no state may be skipped.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum BootState {
    EarlySetup,
    ArchSetup,
    PlatformSetup,
    ExitPrep,
    Done,
}

impl BootState {
    /// The only state allowed to follow `self`.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::EarlySetup => Some(Self::ArchSetup),
            Self::ArchSetup => Some(Self::PlatformSetup),
            Self::PlatformSetup => Some(Self::ExitPrep),
            Self::ExitPrep => Some(Self::Done),
            Self::Done => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::EarlySetup => "BS_EARLY_SETUP",
            Self::ArchSetup => "BS_ARCH_SETUP",
            Self::PlatformSetup => "BS_PLATFORM_SETUP",
            Self::ExitPrep => "BS_EXIT_PREP",
            Self::Done => "BS_DONE",
        }
    }
}

impl fmt::Display for BootState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The BootStateSequence describes when a record is made. It is made
/// either before a state is entered or when a state is exited.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BootStateSequence {
    OnEntry,
    OnExit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BootStateError {
    /// Attempted transition is not the single forward edge out of `from`
    OutOfOrder { from: Option<BootState>, to: BootState },
    /// A state was exited that is not the current one
    NotActive(BootState),
}

impl fmt::Display for BootStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfOrder { from: Some(from), to } => {
                write!(f, "illegal transition {from} -> {to}")
            }
            Self::OutOfOrder { from: None, to } => {
                write!(f, "boot must start in BS_EARLY_SETUP, not {to}")
            }
            Self::NotActive(s) => write!(f, "{s} is not the active state"),
        }
    }
}

/// Tracks progress through [`BootState`] and refuses anything but the
/// linear order. The tracker is owned by the stage sequencer, only the boot
/// processor touches it.
#[derive(Debug, Default)]
pub struct StateTracker {
    current: Option<BootState>,
    exited: bool,
}

impl StateTracker {
    pub const fn new() -> Self {
        Self {
            current: None,
            exited: false,
        }
    }

    pub fn current(&self) -> Option<BootState> {
        self.current
    }

    /// Enter `to`. The previous state, if any, must have been exited and
    /// `to` must be its direct successor.
    pub fn enter(&mut self, to: BootState) -> Result<(), BootStateError> {
        let allowed = match self.current {
            None => to == BootState::EarlySetup,
            Some(from) => self.exited && from.next() == Some(to),
        };
        if !allowed {
            return Err(BootStateError::OutOfOrder {
                from: self.current,
                to,
            });
        }
        self.current = Some(to);
        self.exited = false;
        record(to, BootStateSequence::OnEntry);
        Ok(())
    }

    /// Leave `state`, which must be the active one.
    pub fn exit(&mut self, state: BootState) -> Result<(), BootStateError> {
        if self.current != Some(state) || self.exited {
            return Err(BootStateError::NotActive(state));
        }
        self.exited = true;
        record(state, BootStateSequence::OnExit);
        Ok(())
    }

    /// Enter `state`, run `f`, exit `state`. The state is left active when
    /// `f` fails so diagnostics can name where boot stopped.
    pub fn run<T, E>(
        &mut self,
        state: BootState,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<BootStateError>,
    {
        self.enter(state)?;
        let ret = f()?;
        self.exit(state)?;
        Ok(ret)
    }

    pub fn is_done(&self) -> bool {
        self.current == Some(BootState::Done)
    }
}

fn record(state: BootState, seq: BootStateSequence) {
    match seq {
        BootStateSequence::OnEntry => info!("{state}: enter"),
        BootStateSequence::OnExit => debug!("{state}: exit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum TestErr {
        State(BootStateError),
        Body,
    }

    impl From<BootStateError> for TestErr {
        fn from(e: BootStateError) -> Self {
            Self::State(e)
        }
    }

    #[test]
    fn linear_walk() {
        let mut t = StateTracker::new();
        let mut s = BootState::EarlySetup;
        loop {
            t.enter(s).unwrap();
            t.exit(s).unwrap();
            match s.next() {
                Some(n) => s = n,
                None => break,
            }
        }
        assert!(t.is_done());
    }

    #[test]
    fn must_start_early() {
        let mut t = StateTracker::new();
        assert_eq!(
            t.enter(BootState::ArchSetup),
            Err(BootStateError::OutOfOrder {
                from: None,
                to: BootState::ArchSetup
            })
        );
    }

    #[test]
    fn no_skip_no_back_edge() {
        let mut t = StateTracker::new();
        t.enter(BootState::EarlySetup).unwrap();
        t.exit(BootState::EarlySetup).unwrap();
        assert!(t.enter(BootState::PlatformSetup).is_err());
        assert!(t.enter(BootState::EarlySetup).is_err());
        t.enter(BootState::ArchSetup).unwrap();
        assert_eq!(t.current(), Some(BootState::ArchSetup));
    }

    #[test]
    fn enter_requires_exit() {
        let mut t = StateTracker::new();
        t.enter(BootState::EarlySetup).unwrap();
        assert!(t.enter(BootState::ArchSetup).is_err());
        assert_eq!(
            t.exit(BootState::ArchSetup),
            Err(BootStateError::NotActive(BootState::ArchSetup))
        );
    }

    #[test]
    fn failed_body_keeps_state_active() {
        let mut t = StateTracker::new();
        let r: Result<(), TestErr> = t.run(BootState::EarlySetup, || Err(TestErr::Body));
        assert_eq!(r, Err(TestErr::Body));
        assert_eq!(t.current(), Some(BootState::EarlySetup));
        assert!(t.enter(BootState::ArchSetup).is_err());
    }

    #[test]
    fn run_returns_body_value() {
        let mut t = StateTracker::new();
        let r: Result<u32, TestErr> = t.run(BootState::EarlySetup, || Ok(7));
        assert_eq!(r, Ok(7));
        assert_eq!(t.current(), Some(BootState::EarlySetup));
    }
}
