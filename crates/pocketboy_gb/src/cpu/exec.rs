mod ld;
mod ld16;
mod stack;
mod system;

use super::opcodes::Op;
use super::{Bus, Cpu};

impl Cpu {
    /// Execute the semantic operation behind one decoded opcode.
    ///
    /// Operand fetches advance PC; cycle billing is handled by `step` from
    /// the decode table.
    pub(super) fn exec_op<B: Bus>(&mut self, bus: &mut B, op: Op) {
        match op {
            Op::Nop => {}
            Op::Halt => self.exec_halt(),
            Op::Di => self.exec_di(),
            Op::Ei => self.exec_ei(),

            Op::LdRN(r) => self.exec_ld_r_n(bus, r),
            Op::LdRR(dst, src) => self.exec_ld_r_r(dst, src),
            Op::LdRHl(r) => self.exec_ld_r_hl(bus, r),
            Op::LdHlR(r) => self.exec_ld_hl_r(bus, r),
            Op::LdRPair(r, pair) => self.exec_ld_r_pair(bus, r, pair),
            Op::LdPairR(pair, r) => self.exec_ld_pair_r(bus, pair, r),
            Op::LdANn => self.exec_ld_a_nn(bus),
            Op::LdNnA => self.exec_ld_nn_a(bus),
            Op::LdHlN => self.exec_ld_hl_n(bus),
            Op::LdAHighC => self.exec_ld_a_high_c(bus),
            Op::LdHighCA => self.exec_ld_high_c_a(bus),
            Op::LdhAN => self.exec_ldh_a_n(bus),
            Op::LdhNA => self.exec_ldh_n_a(bus),
            Op::LddAHl => self.exec_ldd_a_hl(bus),
            Op::LddHlA => self.exec_ldd_hl_a(bus),
            Op::LdiAHl => self.exec_ldi_a_hl(bus),
            Op::LdiHlA => self.exec_ldi_hl_a(bus),

            Op::LdPairNn(pair) => self.exec_ld_pair_nn(bus, pair),
            Op::LdSpNn => self.exec_ld_sp_nn(bus),
            Op::LdSpHl => self.exec_ld_sp_hl(),
            Op::LdNnSp => self.exec_ld_nn_sp(bus),
            Op::LdHlSpN => self.exec_ld_hl_sp_n(bus),

            Op::Push(pair) => self.exec_push(bus, pair),
            Op::Pop(pair) => self.exec_pop(bus, pair),

            Op::Add(src) => {
                let value = self.read_operand(bus, src);
                self.alu_add(value, false);
            }
            Op::Adc(src) => {
                let value = self.read_operand(bus, src);
                self.alu_add(value, true);
            }
            Op::Sub(src) => {
                let value = self.read_operand(bus, src);
                self.alu_sub(value);
            }
            Op::And(src) => {
                let value = self.read_operand(bus, src);
                self.alu_and(value);
            }
            Op::Or(src) => {
                let value = self.read_operand(bus, src);
                self.alu_or(value);
            }
            Op::Xor(src) => {
                let value = self.read_operand(bus, src);
                self.alu_xor(value);
            }
        }
    }
}
