// boot/src/trap.rs
use riscv::register::{scause, sie, sstatus, stvec};

use boot_lib::hw::{IrqMask, IrqSource};
use boot_lib::trapframe::TrapFrame;

pub use scause::{Interrupt, Trap};

extern "C" {
    fn __trap_entry();
}

/// Install the trap vector and trap stack with every S-mode source masked.
pub fn init() {
    crate::stack::init_trap_stack();
    unsafe {
        sstatus::clear_sie();
        sie::clear_ssoft();
        sie::clear_stimer();
        sie::clear_sext();
        stvec::write(__trap_entry as usize, stvec::TrapMode::Direct);
    }
}

/// Unmask one source and open the global S-mode interrupt gate.
pub fn enable(source: IrqSource) {
    unsafe {
        match source {
            IrqSource::Software => sie::set_ssoft(),
            IrqSource::VBlank => sie::set_stimer(),
            IrqSource::External => sie::set_sext(),
        }
        sstatus::set_sie();
    }
}

pub fn enabled() -> IrqMask {
    let bits = sie::read().bits();
    IrqSource::ALL
        .into_iter()
        .filter(|source| bits & source.bit() != 0)
        .fold(IrqMask::NONE, IrqMask::with)
}

#[no_mangle]
extern "C" fn rust_trap(_tf: &mut TrapFrame) {
    let sc = scause::read().cause();
    match sc {
        Trap::Interrupt(Interrupt::SupervisorTimer) => {
            crate::timer::on_vblank();
        }
        other => {
            // Nothing else is enabled during boot; report and park.
            kerror!(
                "unexpected trap scause={:?} sepc=0x{:016x}",
                other,
                riscv::register::sepc::read(),
            );
            crate::reset::idle()
        }
    }
}
