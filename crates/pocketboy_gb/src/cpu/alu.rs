use super::{Cpu, Flag};

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true). All four
    /// flags are cleared up front so a stale bit from the previous
    /// instruction can never survive into this one.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = if use_carry && self.get_flag(Flag::C) {
            1u8
        } else {
            0
        };

        let result = a.wrapping_add(value).wrapping_add(carry_in);
        self.regs.a = result;

        // Flags: Z N H C. Carry is judged on the wrapped result, half-carry
        // on the low nibbles with the carry-in folded into the operand.
        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, result < a);
        self.set_flag(
            Flag::H,
            ((a & 0x0F) + (value.wrapping_add(carry_in) & 0x0F)) & 0x10 != 0,
        );
    }

    /// Core 8-bit SUB operation on A.
    pub(super) fn alu_sub(&mut self, value: u8) {
        let a = self.regs.a;
        let result = a.wrapping_sub(value);
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::C, result > a);
        self.set_flag(Flag::H, (a & 0x0F).wrapping_sub(value & 0x0F) & 0x10 != 0);
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, true);
        // N and C are already cleared.
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }
}
