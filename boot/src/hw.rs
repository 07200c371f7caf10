//! One-shot, ordered hardware bring-up.
//!
//! The order of [`SEQUENCE`] is the contract: the console comes up first so
//! every later step can log, and the interrupt controller is reset before
//! the single periodic source is unmasked. Steps report nothing back; a
//! board that cannot complete one carries on in whatever state it reached.

use heapless::Vec;
use spin::{Mutex, Once};

/// Power domains a board can switch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerDomains(u32);

impl PowerDomains {
    pub const FPU: Self = Self(1 << 0);
    pub const CONSOLE: Self = Self(1 << 1);
    pub const TIMER: Self = Self(1 << 2);
    pub const IRQ: Self = Self(1 << 3);
    pub const ALL: Self = Self(Self::FPU.0 | Self::CONSOLE.0 | Self::TIMER.0 | Self::IRQ.0);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Interrupt sources; the discriminant is the bit position in `sie`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum IrqSource {
    Software = 1,
    /// Periodic frame-rate tick, driven by the supervisor timer.
    VBlank = 5,
    External = 9,
}

impl IrqSource {
    pub const ALL: [IrqSource; 3] = [IrqSource::Software, IrqSource::VBlank, IrqSource::External];

    #[inline]
    pub const fn bit(self) -> usize {
        1 << self as u8
    }
}

/// The only source bring-up ever enables.
pub const PERIODIC_IRQ: IrqSource = IrqSource::VBlank;

/// Set of enabled interrupt sources.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IrqMask(usize);

impl IrqMask {
    pub const NONE: Self = Self(0);

    pub const fn bits(self) -> usize {
        self.0
    }

    pub const fn with(self, source: IrqSource) -> Self {
        Self(self.0 | source.bit())
    }

    pub const fn contains(self, source: IrqSource) -> bool {
        self.0 & source.bit() != 0
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }
}

/// Bring-up steps, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Console,
    Power,
    IrqController,
    IrqEnable,
}

pub const SEQUENCE: [Step; 4] = [Step::Console, Step::Power, Step::IrqController, Step::IrqEnable];

/// Hardware hooks a target provides for bring-up.
pub trait Board {
    /// Minimal text console. Nothing may log before this returns.
    fn console_init(&mut self);
    fn power_on(&mut self, domains: PowerDomains);
    /// Reset the interrupt controller with every source masked.
    fn irq_init(&mut self);
    fn irq_enable(&mut self, source: IrqSource);
    fn enabled_irqs(&self) -> IrqMask;

    /// Diagnostic hook, called after each completed step.
    fn step_done(&mut self, _step: Step) {}
}

/// Run every step of [`SEQUENCE`] on `board`, unguarded.
pub fn run_sequence<B: Board + ?Sized>(board: &mut B, mut done: impl FnMut(Step)) {
    for step in SEQUENCE {
        match step {
            Step::Console => board.console_init(),
            Step::Power => board.power_on(PowerDomains::ALL),
            Step::IrqController => board.irq_init(),
            Step::IrqEnable => board.irq_enable(PERIODIC_IRQ),
        }
        done(step);
        board.step_done(step);
    }
}

/// At-most-once guard around the bring-up sequence.
pub struct BringUp {
    once: Once<()>,
    completed: Mutex<Vec<Step, 4>>,
}

impl BringUp {
    pub const fn new() -> Self {
        BringUp {
            once: Once::new(),
            completed: Mutex::new(Vec::new()),
        }
    }

    /// Run the sequence if it has not run yet. Returns `true` if this call
    /// performed it; later calls touch no hardware and return `false`.
    pub fn run<B: Board + ?Sized>(&self, board: &mut B) -> bool {
        let mut ran = false;
        self.once.call_once(|| {
            run_sequence(board, |step| {
                let _ = self.completed.lock().push(step);
            });
            ran = true;
        });
        ran
    }

    pub fn is_complete(&self) -> bool {
        self.once.is_completed()
    }

    /// Steps finished so far, in order.
    pub fn completed(&self) -> Vec<Step, 4> {
        self.completed.lock().clone()
    }
}

impl Default for BringUp {
    fn default() -> Self {
        Self::new()
    }
}
