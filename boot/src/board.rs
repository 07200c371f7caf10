// boot/src/board.rs
use boot_lib::config::BootArgs;
use boot_lib::hw::{Board, BringUp, IrqMask, IrqSource, PowerDomains, Step, PERIODIC_IRQ, SEQUENCE};
use boot_lib::level::{self, LogLevel};

use crate::uart::Uart;
use crate::{plic, power, timer, trap};

/// Build-time boot arguments, see `build.rs`.
const BOOT_ARGS: &str = match option_env!("BOOT_ARGS") {
    Some(s) => s,
    None => "",
};

pub fn boot_args() -> BootArgs {
    let mut args = BootArgs::parse(BOOT_ARGS);
    if cfg!(feature = "verbose") {
        args.log_level = LogLevel::Trace;
    }
    args
}

/// QEMU `virt`, running in S-mode under OpenSBI.
pub struct QemuVirt {
    hart_id: usize,
    args: BootArgs,
    uart: Uart,
}

impl QemuVirt {
    pub fn new(hart_id: usize) -> Self {
        let args = boot_args();
        level::set_log_level(args.log_level);
        QemuVirt {
            hart_id,
            args,
            uart: Uart::new(),
        }
    }

    /// Log what bring-up left behind.
    pub fn report(&self, hw: &BringUp) {
        let irqs = self.enabled_irqs();
        kinfo!(
            "hart {}: {} of {} bring-up steps done, sie={:#x}, vblank {} Hz, log {:?}",
            self.hart_id,
            hw.completed().len(),
            SEQUENCE.len(),
            irqs.bits(),
            self.args.vblank_hz,
            level::get_log_level(),
        );
        if !hw.is_complete() {
            kwarn!("bring-up did not finish");
        }
        if irqs.count() != 1 || !irqs.contains(PERIODIC_IRQ) {
            kwarn!("expected only the vblank interrupt enabled");
        }
    }
}

impl Board for QemuVirt {
    fn console_init(&mut self) {
        self.uart.init();
        kdebug!("console: 16550 at {:#x}", boot_lib::virt::UART0_BASE);
    }

    fn power_on(&mut self, domains: PowerDomains) {
        power::on(domains);
    }

    fn irq_init(&mut self) {
        trap::init();
        plic::init(self.hart_id);
    }

    fn irq_enable(&mut self, source: IrqSource) {
        if source == IrqSource::VBlank {
            timer::init(self.args.vblank_hz);
        }
        trap::enable(source);
    }

    fn enabled_irqs(&self) -> IrqMask {
        trap::enabled()
    }

    fn step_done(&mut self, step: Step) {
        kdebug!("bring-up: {:?} done", step);
    }
}
