use core::fmt;

use boot_lib::cooked::{self, CharSink};
use boot_lib::virt::UART0_BASE;

/* 16550 registers (byte offsets) */
const RBR_THR_DLL: usize = 0x00; // Rx Buffer / Tx Holding / Div Latch Low
const IER: usize = 0x01; // Interrupt Enable
const FCR: usize = 0x02; // FIFO Control (write)
const LCR: usize = 0x03; // Line Control
const LSR: usize = 0x05; // Line Status Register

/* FCR bits */
const FCR_ENABLE: u8 = 1 << 0;
const FCR_CLEAR_RX: u8 = 1 << 1;
const FCR_CLEAR_TX: u8 = 1 << 2;

/* LCR: 8 data bits, no parity, 1 stop bit */
const LCR_8N1: u8 = 0x03;

/* LSR bits */
const LSR_TX_IDLE: u8 = 1 << 5; // THR empty

#[inline(always)]
fn mmio8(addr: usize) -> *mut u8 {
    addr as *mut u8
}

pub struct Uart;

impl Uart {
    pub const fn new() -> Self {
        Uart
    }

    /// Put the UART in a known state: interrupts masked, FIFOs on, 8N1.
    /// The baud divisor is left as firmware programmed it.
    pub fn init(&mut self) {
        unsafe {
            core::ptr::write_volatile(mmio8(UART0_BASE + IER), 0);
            core::ptr::write_volatile(mmio8(UART0_BASE + LCR), LCR_8N1);
            core::ptr::write_volatile(
                mmio8(UART0_BASE + FCR),
                FCR_ENABLE | FCR_CLEAR_RX | FCR_CLEAR_TX,
            );
        }
    }

    #[inline(always)]
    fn lsr(&self) -> u8 {
        unsafe { core::ptr::read_volatile(mmio8(UART0_BASE + LSR)) }
    }

    #[inline(always)]
    pub fn write_byte(&mut self, byte: u8) {
        // Wait until TX holding register is empty
        while (self.lsr() & LSR_TX_IDLE) == 0 {}
        unsafe { core::ptr::write_volatile(mmio8(UART0_BASE + RBR_THR_DLL), byte) }
    }
}

impl CharSink for Uart {
    #[inline(always)]
    fn put_char(&mut self, c: u8) {
        self.write_byte(c);
    }
}

impl fmt::Write for Uart {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        cooked::write_cooked(self, s.as_bytes());
        Ok(())
    }
}
