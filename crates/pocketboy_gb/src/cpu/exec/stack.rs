use crate::cpu::{Bus, Cpu, Pair};

impl Cpu {
    /// PUSH rr: high byte at SP-1, low byte at SP-2.
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, pair: Pair) {
        let value = self.regs.read16(pair);
        self.push16(bus, value);
    }

    /// POP rr: low byte from SP, high byte from SP+1.
    ///
    /// POP AF goes through the pair write, which keeps the low nibble of F
    /// zero regardless of what was on the stack.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, pair: Pair) {
        let value = self.pop16(bus);
        self.regs.write16(pair, value);
    }
}
