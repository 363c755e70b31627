use crate::word;

use super::opcodes::Src;
use super::{Bus, Cpu};

impl Cpu {
    /// Fetch one immediate byte at PC and advance PC.
    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.pc);
        self.increment_pc(1);
        value
    }

    /// Fetch a little-endian 16-bit immediate at PC and advance PC by two.
    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let value = bus.read16(self.regs.pc);
        self.increment_pc(2);
        value
    }

    /// Resolve an 8-bit ALU operand: a register, the byte at (HL), or an
    /// immediate fetched at PC.
    #[inline]
    pub(super) fn read_operand<B: Bus>(&mut self, bus: &mut B, src: Src) -> u8 {
        match src {
            Src::Reg(r) => self.regs.read8(r),
            Src::HlInd => bus.read8(self.regs.hl()),
            Src::Imm => self.fetch8(bus),
        }
    }

    #[inline]
    pub(super) fn push16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let (hi, lo) = word::split(value);
        // Stack grows downward; memory[SP] = low, memory[SP+1] = high.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        word::join(hi, lo)
    }
}
