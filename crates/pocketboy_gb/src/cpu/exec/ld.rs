use crate::cpu::{Bus, Cpu, Pair, Reg8};

impl Cpu {
    pub(super) fn exec_ld_r_n<B: Bus>(&mut self, bus: &mut B, r: Reg8) {
        let value = self.fetch8(bus);
        self.regs.write8(r, value);
    }

    pub(super) fn exec_ld_r_r(&mut self, dst: Reg8, src: Reg8) {
        let value = self.regs.read8(src);
        self.regs.write8(dst, value);
    }

    pub(super) fn exec_ld_r_hl<B: Bus>(&mut self, bus: &mut B, r: Reg8) {
        let value = bus.read8(self.regs.hl());
        self.regs.write8(r, value);
    }

    pub(super) fn exec_ld_hl_r<B: Bus>(&mut self, bus: &mut B, r: Reg8) {
        bus.write8(self.regs.hl(), self.regs.read8(r));
    }

    pub(super) fn exec_ld_r_pair<B: Bus>(&mut self, bus: &mut B, r: Reg8, pair: Pair) {
        let addr = self.regs.read16(pair);
        let value = bus.read8(addr);
        self.regs.write8(r, value);
    }

    pub(super) fn exec_ld_pair_r<B: Bus>(&mut self, bus: &mut B, pair: Pair, r: Reg8) {
        let addr = self.regs.read16(pair);
        bus.write8(addr, self.regs.read8(r));
    }

    /// LD A,(nn): load through a 16-bit immediate address.
    pub(super) fn exec_ld_a_nn<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        self.regs.a = bus.read8(addr);
    }

    pub(super) fn exec_ld_nn_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        bus.write8(addr, self.regs.a);
    }

    pub(super) fn exec_ld_hl_n<B: Bus>(&mut self, bus: &mut B) {
        let value = self.fetch8(bus);
        bus.write8(self.regs.hl(), value);
    }

    /// LD A,(0xFF00+C): high-page read addressed by C.
    pub(super) fn exec_ld_a_high_c<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00u16.wrapping_add(self.regs.c as u16);
        self.regs.a = bus.read8(addr);
    }

    pub(super) fn exec_ld_high_c_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00u16.wrapping_add(self.regs.c as u16);
        bus.write8(addr, self.regs.a);
    }

    /// LDH A,(n): fetch the offset byte at PC, then read 0xFF00+offset.
    pub(super) fn exec_ldh_a_n<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus) as u16;
        self.regs.a = bus.read8(0xFF00u16.wrapping_add(offset));
    }

    pub(super) fn exec_ldh_n_a<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus) as u16;
        bus.write8(0xFF00u16.wrapping_add(offset), self.regs.a);
    }

    /// LDD A,(HL): load, then decrement HL (L borrows into H on underflow).
    pub(super) fn exec_ldd_a_hl<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.regs.hl();
        self.regs.a = bus.read8(addr);
        self.regs.set_hl(addr.wrapping_sub(1));
    }

    pub(super) fn exec_ldd_hl_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.regs.hl();
        bus.write8(addr, self.regs.a);
        self.regs.set_hl(addr.wrapping_sub(1));
    }

    /// LDI A,(HL): load, then increment HL (L carries into H on wrap).
    pub(super) fn exec_ldi_a_hl<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.regs.hl();
        self.regs.a = bus.read8(addr);
        self.regs.set_hl(addr.wrapping_add(1));
    }

    pub(super) fn exec_ldi_hl_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.regs.hl();
        bus.write8(addr, self.regs.a);
        self.regs.set_hl(addr.wrapping_add(1));
    }
}
