//! Game-variation selection through the console's select switch.
//!
//! Games keep their current variation in a RAM byte that advances
//! cyclically on each select press. Switching is a small state machine:
//!
//! - **Settling**: idle frames so a pending title transition finishes
//!   before the mode byte is trusted.
//! - **Polling**: read the mode byte; if it is not the target, pulse
//!   select and read again.
//! - **Confirmed**: soft-reset once to start the chosen variation.
//!
//! Polling is capped. A target the game never reaches fails with
//! [`ModeError::NoConvergence`] instead of looping forever.

use tracing::debug;

use crate::core::action::Action;
use crate::core::control::Environment;
use crate::core::game::Mode;

/// Select presses attempted before giving up.
pub const DEFAULT_MAX_PRESSES: u32 = 256;

/// Errors raised while switching game variation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    /// The title does not offer `mode`. Nothing was sent to the emulator.
    Unsupported { mode: Mode, available: Vec<Mode> },

    /// The mode byte never matched after `presses` select pulses.
    NoConvergence { target: Mode, presses: u32 },
}

impl std::fmt::Display for ModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported { mode, available } => {
                write!(f, "mode {mode} is not available (modes: {available:?})")
            }
            Self::NoConvergence { target, presses } => write!(
                f,
                "mode {target} not reached after {presses} select presses"
            ),
        }
    }
}

impl std::error::Error for ModeError {}

/// How a public mode number maps onto the raw mode byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeEncoding {
    /// The byte holds the mode number itself.
    Raw,
    /// The byte counts every variation, public modes are every `n`th one
    /// (the skipped values are multi-player variants).
    Stride(u8),
    /// The byte holds the mode number plus a constant.
    Bias(u8),
}

impl ModeEncoding {
    pub fn encode(self, mode: Mode) -> u8 {
        match self {
            ModeEncoding::Raw => mode,
            ModeEncoding::Stride(n) => mode.wrapping_mul(n),
            ModeEncoding::Bias(n) => mode.wrapping_add(n),
        }
    }
}

/// Static description of a title's variation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeTable {
    /// Public mode numbers, in select-cycle order.
    pub modes: &'static [Mode],
    /// RAM address of the mode byte.
    pub addr: u16,
    pub encoding: ModeEncoding,
    /// Extra byte that must hold a given value before the mode counts as
    /// reached (e.g., a player-count flag sharing the select cycle).
    pub guard: Option<(u16, u8)>,
    /// No-op frames sent before the first read.
    pub settle_frames: u32,
    /// Frames to hold select per press.
    pub select_frames: u32,
}

/// Phase of a running mode switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Settling,
    Polling { presses: u32 },
    Confirmed { presses: u32 },
}

/// One run of the settle/poll/confirm loop against an emulator.
#[derive(Debug)]
pub struct ModeSwitch<'a> {
    table: &'a ModeTable,
    max_presses: u32,
}

impl<'a> ModeSwitch<'a> {
    pub fn new(table: &'a ModeTable) -> Self {
        Self {
            table,
            max_presses: DEFAULT_MAX_PRESSES,
        }
    }

    pub fn with_max_presses(mut self, max_presses: u32) -> Self {
        self.max_presses = max_presses;
        self
    }

    /// Reject modes the table does not list. Sends nothing.
    pub fn validate(&self, target: Mode) -> Result<(), ModeError> {
        if self.table.modes.contains(&target) {
            Ok(())
        } else {
            Err(ModeError::Unsupported {
                mode: target,
                available: self.table.modes.to_vec(),
            })
        }
    }

    fn reached(&self, raw_target: u8, env: &dyn Environment) -> bool {
        env.read_byte(self.table.addr) == raw_target
            && self
                .table
                .guard
                .is_none_or(|(addr, value)| env.read_byte(addr) == value)
    }

    /// Bring the emulator into `target` and soft-reset it.
    ///
    /// Returns the number of select presses that were needed.
    pub fn run(&self, target: Mode, env: &mut dyn Environment) -> Result<u32, ModeError> {
        self.validate(target)?;
        let raw_target = self.table.encoding.encode(target);

        let mut phase = Phase::Settling;
        loop {
            phase = match phase {
                Phase::Settling => {
                    debug!(
                        mode = target,
                        frames = self.table.settle_frames,
                        "mode switch: settling"
                    );
                    for _ in 0..self.table.settle_frames {
                        env.act(Action::NOOP_A, Action::NOOP_B);
                    }
                    Phase::Polling { presses: 0 }
                }
                Phase::Polling { presses } => {
                    if self.reached(raw_target, env) {
                        Phase::Confirmed { presses }
                    } else if presses >= self.max_presses {
                        return Err(ModeError::NoConvergence { target, presses });
                    } else {
                        env.press_select(self.table.select_frames);
                        Phase::Polling {
                            presses: presses + 1,
                        }
                    }
                }
                Phase::Confirmed { presses } => {
                    debug!(mode = target, presses, "mode switch: confirmed");
                    env.soft_reset();
                    return Ok(presses);
                }
            };
        }
    }
}
