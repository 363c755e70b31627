use super::regs::{Pair, Reg8};

/// Operand source for the 8-bit ALU families.
#[derive(Clone, Copy, Debug)]
pub(super) enum Src {
    Reg(Reg8),
    HlInd,
    Imm,
}

/// Semantic operation behind an opcode, decoded ahead of time.
///
/// Operands are carried as `Reg8`/`Pair` values rather than references into
/// the register file, so the decode table is plain data and the executor is
/// free of aliasing.
#[derive(Clone, Copy, Debug)]
pub(super) enum Op {
    // Control misc.
    Nop,
    Halt,
    Di,
    Ei,
    // 8-bit loads.
    LdRN(Reg8),
    LdRR(Reg8, Reg8),
    LdRHl(Reg8),
    LdHlR(Reg8),
    LdRPair(Reg8, Pair),
    LdPairR(Pair, Reg8),
    LdANn,
    LdNnA,
    LdHlN,
    LdAHighC,
    LdHighCA,
    LdhAN,
    LdhNA,
    LddAHl,
    LddHlA,
    LdiAHl,
    LdiHlA,
    // 16-bit loads.
    LdPairNn(Pair),
    LdSpNn,
    LdSpHl,
    LdNnSp,
    LdHlSpN,
    // Stack.
    Push(Pair),
    Pop(Pair),
    // 8-bit arithmetic and logic on A.
    Add(Src),
    Adc(Src),
    Sub(Src),
    And(Src),
    Or(Src),
    Xor(Src),
}

/// Descriptor for one implemented opcode: trace mnemonic, semantic
/// operation, and fixed cycle cost in machine cycles / T-states.
#[derive(Clone, Copy, Debug)]
pub(super) struct OpDesc {
    pub mnemonic: &'static str,
    pub op: Op,
    pub m: u16,
    pub t: u16,
}

/// One slot of the 256-way decode table.
#[derive(Clone, Copy, Debug)]
pub(super) enum Entry {
    /// Implemented instruction.
    Op(OpDesc),
    /// Documented opcode without semantics yet (SBC, rotates, INC/DEC, CP,
    /// jumps/calls/returns, the CB-prefixed page, ...). Fatal on encounter,
    /// never a silent no-op.
    Todo(&'static str),
    /// No documented instruction behind this byte. The hardware hard-locks
    /// on these (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD).
    Hole,
}

/// Decode table indexed by opcode byte.
pub(super) static OPCODES: [Entry; 256] = build();

const fn op(mnemonic: &'static str, op: Op, m: u16, t: u16) -> Entry {
    Entry::Op(OpDesc { mnemonic, op, m, t })
}

const fn build() -> [Entry; 256] {
    use Op::*;
    use Pair::*;
    use Reg8::*;
    use Src::*;

    let mut table = [Entry::Hole; 256];

    // Control misc.
    table[0x00] = op("NOP", Nop, 1, 4);
    table[0x76] = op("HALT", Halt, 1, 4);
    table[0xF3] = op("DI", Di, 1, 4);
    table[0xFB] = op("EI", Ei, 1, 4);

    // AND A, op
    table[0xA7] = op("AND A,A", And(Reg(A)), 1, 4);
    table[0xA0] = op("AND A,B", And(Reg(B)), 1, 4);
    table[0xA1] = op("AND A,C", And(Reg(C)), 1, 4);
    table[0xA2] = op("AND A,D", And(Reg(D)), 1, 4);
    table[0xA3] = op("AND A,E", And(Reg(E)), 1, 4);
    table[0xA4] = op("AND A,H", And(Reg(H)), 1, 4);
    table[0xA5] = op("AND A,L", And(Reg(L)), 1, 4);
    table[0xA6] = op("AND A,(HL)", And(HlInd), 2, 8);
    table[0xE6] = op("AND A,n", And(Imm), 2, 8);

    // OR A, op
    table[0xB7] = op("OR A,A", Or(Reg(A)), 1, 4);
    table[0xB0] = op("OR A,B", Or(Reg(B)), 1, 4);
    table[0xB1] = op("OR A,C", Or(Reg(C)), 1, 4);
    table[0xB2] = op("OR A,D", Or(Reg(D)), 1, 4);
    table[0xB3] = op("OR A,E", Or(Reg(E)), 1, 4);
    table[0xB4] = op("OR A,H", Or(Reg(H)), 1, 4);
    table[0xB5] = op("OR A,L", Or(Reg(L)), 1, 4);
    table[0xB6] = op("OR A,(HL)", Or(HlInd), 2, 8);
    table[0xF6] = op("OR A,n", Or(Imm), 2, 8);

    // XOR A, op
    table[0xAF] = op("XOR A,A", Xor(Reg(A)), 1, 4);
    table[0xA8] = op("XOR A,B", Xor(Reg(B)), 1, 4);
    table[0xA9] = op("XOR A,C", Xor(Reg(C)), 1, 4);
    table[0xAA] = op("XOR A,D", Xor(Reg(D)), 1, 4);
    table[0xAB] = op("XOR A,E", Xor(Reg(E)), 1, 4);
    table[0xAC] = op("XOR A,H", Xor(Reg(H)), 1, 4);
    table[0xAD] = op("XOR A,L", Xor(Reg(L)), 1, 4);
    table[0xAE] = op("XOR A,(HL)", Xor(HlInd), 2, 8);
    table[0xEE] = op("XOR A,n", Xor(Imm), 2, 8);

    // ADD A, op
    table[0x87] = op("ADD A,A", Add(Reg(A)), 1, 4);
    table[0x80] = op("ADD A,B", Add(Reg(B)), 1, 4);
    table[0x81] = op("ADD A,C", Add(Reg(C)), 1, 4);
    table[0x82] = op("ADD A,D", Add(Reg(D)), 1, 4);
    table[0x83] = op("ADD A,E", Add(Reg(E)), 1, 4);
    table[0x84] = op("ADD A,H", Add(Reg(H)), 1, 4);
    table[0x85] = op("ADD A,L", Add(Reg(L)), 1, 4);
    table[0x86] = op("ADD A,(HL)", Add(HlInd), 2, 8);
    table[0xC6] = op("ADD A,n", Add(Imm), 2, 8);

    // ADC A, op
    table[0x8F] = op("ADC A,A", Adc(Reg(A)), 1, 4);
    table[0x88] = op("ADC A,B", Adc(Reg(B)), 1, 4);
    table[0x89] = op("ADC A,C", Adc(Reg(C)), 1, 4);
    table[0x8A] = op("ADC A,D", Adc(Reg(D)), 1, 4);
    table[0x8B] = op("ADC A,E", Adc(Reg(E)), 1, 4);
    table[0x8C] = op("ADC A,H", Adc(Reg(H)), 1, 4);
    table[0x8D] = op("ADC A,L", Adc(Reg(L)), 1, 4);
    table[0x8E] = op("ADC A,(HL)", Adc(HlInd), 2, 8);
    table[0xCE] = op("ADC A,n", Adc(Imm), 2, 8);

    // SUB A, op
    table[0x97] = op("SUB A,A", Sub(Reg(A)), 1, 4);
    table[0x90] = op("SUB A,B", Sub(Reg(B)), 1, 4);
    table[0x91] = op("SUB A,C", Sub(Reg(C)), 1, 4);
    table[0x92] = op("SUB A,D", Sub(Reg(D)), 1, 4);
    table[0x93] = op("SUB A,E", Sub(Reg(E)), 1, 4);
    table[0x94] = op("SUB A,H", Sub(Reg(H)), 1, 4);
    table[0x95] = op("SUB A,L", Sub(Reg(L)), 1, 4);
    table[0x96] = op("SUB A,(HL)", Sub(HlInd), 2, 8);
    table[0xD6] = op("SUB A,n", Sub(Imm), 2, 8);

    // PUSH / POP
    table[0xF5] = op("PUSH AF", Push(AF), 3, 12);
    table[0xC5] = op("PUSH BC", Push(BC), 3, 12);
    table[0xD5] = op("PUSH DE", Push(DE), 3, 12);
    table[0xE5] = op("PUSH HL", Push(HL), 3, 12);
    table[0xF1] = op("POP AF", Pop(AF), 3, 12);
    table[0xC1] = op("POP BC", Pop(BC), 3, 12);
    table[0xD1] = op("POP DE", Pop(DE), 3, 12);
    table[0xE1] = op("POP HL", Pop(HL), 3, 12);

    // LD r, n
    table[0x3E] = op("LD A,n", LdRN(A), 2, 8);
    table[0x06] = op("LD B,n", LdRN(B), 2, 8);
    table[0x0E] = op("LD C,n", LdRN(C), 2, 8);
    table[0x16] = op("LD D,n", LdRN(D), 2, 8);
    table[0x1E] = op("LD E,n", LdRN(E), 2, 8);
    table[0x26] = op("LD H,n", LdRN(H), 2, 8);
    table[0x2E] = op("LD L,n", LdRN(L), 2, 8);

    // LD r, r'
    table[0x7F] = op("LD A,A", LdRR(A, A), 1, 4);
    table[0x78] = op("LD A,B", LdRR(A, B), 1, 4);
    table[0x79] = op("LD A,C", LdRR(A, C), 1, 4);
    table[0x7A] = op("LD A,D", LdRR(A, D), 1, 4);
    table[0x7B] = op("LD A,E", LdRR(A, E), 1, 4);
    table[0x7C] = op("LD A,H", LdRR(A, H), 1, 4);
    table[0x7D] = op("LD A,L", LdRR(A, L), 1, 4);
    table[0x47] = op("LD B,A", LdRR(B, A), 1, 4);
    table[0x40] = op("LD B,B", LdRR(B, B), 1, 4);
    table[0x41] = op("LD B,C", LdRR(B, C), 1, 4);
    table[0x42] = op("LD B,D", LdRR(B, D), 1, 4);
    table[0x43] = op("LD B,E", LdRR(B, E), 1, 4);
    table[0x44] = op("LD B,H", LdRR(B, H), 1, 4);
    table[0x45] = op("LD B,L", LdRR(B, L), 1, 4);
    table[0x4F] = op("LD C,A", LdRR(C, A), 1, 4);
    table[0x48] = op("LD C,B", LdRR(C, B), 1, 4);
    table[0x49] = op("LD C,C", LdRR(C, C), 1, 4);
    table[0x4A] = op("LD C,D", LdRR(C, D), 1, 4);
    table[0x4B] = op("LD C,E", LdRR(C, E), 1, 4);
    table[0x4C] = op("LD C,H", LdRR(C, H), 1, 4);
    table[0x4D] = op("LD C,L", LdRR(C, L), 1, 4);
    table[0x57] = op("LD D,A", LdRR(D, A), 1, 4);
    table[0x50] = op("LD D,B", LdRR(D, B), 1, 4);
    table[0x51] = op("LD D,C", LdRR(D, C), 1, 4);
    table[0x52] = op("LD D,D", LdRR(D, D), 1, 4);
    table[0x53] = op("LD D,E", LdRR(D, E), 1, 4);
    table[0x54] = op("LD D,H", LdRR(D, H), 1, 4);
    table[0x55] = op("LD D,L", LdRR(D, L), 1, 4);
    table[0x5F] = op("LD E,A", LdRR(E, A), 1, 4);
    table[0x58] = op("LD E,B", LdRR(E, B), 1, 4);
    table[0x59] = op("LD E,C", LdRR(E, C), 1, 4);
    table[0x5A] = op("LD E,D", LdRR(E, D), 1, 4);
    table[0x5B] = op("LD E,E", LdRR(E, E), 1, 4);
    table[0x5C] = op("LD E,H", LdRR(E, H), 1, 4);
    table[0x5D] = op("LD E,L", LdRR(E, L), 1, 4);
    table[0x67] = op("LD H,A", LdRR(H, A), 1, 4);
    table[0x60] = op("LD H,B", LdRR(H, B), 1, 4);
    table[0x61] = op("LD H,C", LdRR(H, C), 1, 4);
    table[0x62] = op("LD H,D", LdRR(H, D), 1, 4);
    table[0x63] = op("LD H,E", LdRR(H, E), 1, 4);
    table[0x64] = op("LD H,H", LdRR(H, H), 1, 4);
    table[0x65] = op("LD H,L", LdRR(H, L), 1, 4);
    table[0x6F] = op("LD L,A", LdRR(L, A), 1, 4);
    table[0x68] = op("LD L,B", LdRR(L, B), 1, 4);
    table[0x69] = op("LD L,C", LdRR(L, C), 1, 4);
    table[0x6A] = op("LD L,D", LdRR(L, D), 1, 4);
    table[0x6B] = op("LD L,E", LdRR(L, E), 1, 4);
    table[0x6C] = op("LD L,H", LdRR(L, H), 1, 4);
    table[0x6D] = op("LD L,L", LdRR(L, L), 1, 4);

    // LD r, (HL)
    table[0x7E] = op("LD A,(HL)", LdRHl(A), 2, 8);
    table[0x46] = op("LD B,(HL)", LdRHl(B), 2, 8);
    table[0x4E] = op("LD C,(HL)", LdRHl(C), 2, 8);
    table[0x56] = op("LD D,(HL)", LdRHl(D), 2, 8);
    table[0x5E] = op("LD E,(HL)", LdRHl(E), 2, 8);
    table[0x66] = op("LD H,(HL)", LdRHl(H), 2, 8);
    table[0x6E] = op("LD L,(HL)", LdRHl(L), 2, 8);

    // LD (HL), r
    table[0x77] = op("LD (HL),A", LdHlR(A), 2, 8);
    table[0x70] = op("LD (HL),B", LdHlR(B), 2, 8);
    table[0x71] = op("LD (HL),C", LdHlR(C), 2, 8);
    table[0x72] = op("LD (HL),D", LdHlR(D), 2, 8);
    table[0x73] = op("LD (HL),E", LdHlR(E), 2, 8);
    table[0x74] = op("LD (HL),H", LdHlR(H), 2, 8);
    table[0x75] = op("LD (HL),L", LdHlR(L), 2, 8);

    // Loads through BC/DE and absolute addresses.
    table[0x0A] = op("LD A,(BC)", LdRPair(A, BC), 2, 8);
    table[0x1A] = op("LD A,(DE)", LdRPair(A, DE), 2, 8);
    table[0x02] = op("LD (BC),A", LdPairR(BC, A), 2, 8);
    table[0x12] = op("LD (DE),A", LdPairR(DE, A), 2, 8);
    table[0xFA] = op("LD A,(nn)", LdANn, 4, 16);
    table[0xEA] = op("LD (nn),A", LdNnA, 4, 16);

    // LD (HL), n
    table[0x36] = op("LD (HL),n", LdHlN, 3, 12);

    // High-page loads.
    table[0xF2] = op("LD A,(C)", LdAHighC, 2, 8);
    table[0xE2] = op("LD (C),A", LdHighCA, 2, 8);
    table[0xF0] = op("LDH A,(n)", LdhAN, 3, 12);
    table[0xE0] = op("LDH (n),A", LdhNA, 3, 12);

    // Post-decrement / post-increment HL loads.
    table[0x3A] = op("LDD A,(HL)", LddAHl, 2, 8);
    table[0x32] = op("LDD (HL),A", LddHlA, 2, 8);
    table[0x2A] = op("LDI A,(HL)", LdiAHl, 2, 8);
    table[0x22] = op("LDI (HL),A", LdiHlA, 2, 8);

    // 16-bit loads.
    table[0x01] = op("LD BC,nn", LdPairNn(BC), 3, 12);
    table[0x11] = op("LD DE,nn", LdPairNn(DE), 3, 12);
    table[0x21] = op("LD HL,nn", LdPairNn(HL), 3, 12);
    table[0x31] = op("LD SP,nn", LdSpNn, 3, 12);
    table[0xF9] = op("LD SP,HL", LdSpHl, 2, 8);
    table[0x08] = op("LD (nn),SP", LdNnSp, 5, 20);
    table[0xF8] = op("LDHL SP,n", LdHlSpN, 3, 12);

    // Documented opcodes the core defers. Encountering one is fatal (see
    // `Cpu::step`) so missing semantics are loud rather than silent.
    table[0x03] = Entry::Todo("INC BC");
    table[0x04] = Entry::Todo("INC B");
    table[0x05] = Entry::Todo("DEC B");
    table[0x07] = Entry::Todo("RLCA");
    table[0x09] = Entry::Todo("ADD HL,BC");
    table[0x0B] = Entry::Todo("DEC BC");
    table[0x0C] = Entry::Todo("INC C");
    table[0x0D] = Entry::Todo("DEC C");
    table[0x0F] = Entry::Todo("RRCA");
    table[0x10] = Entry::Todo("STOP");
    table[0x13] = Entry::Todo("INC DE");
    table[0x14] = Entry::Todo("INC D");
    table[0x15] = Entry::Todo("DEC D");
    table[0x17] = Entry::Todo("RLA");
    table[0x18] = Entry::Todo("JR n");
    table[0x19] = Entry::Todo("ADD HL,DE");
    table[0x1B] = Entry::Todo("DEC DE");
    table[0x1C] = Entry::Todo("INC E");
    table[0x1D] = Entry::Todo("DEC E");
    table[0x1F] = Entry::Todo("RRA");
    table[0x20] = Entry::Todo("JR NZ,n");
    table[0x23] = Entry::Todo("INC HL");
    table[0x24] = Entry::Todo("INC H");
    table[0x25] = Entry::Todo("DEC H");
    table[0x27] = Entry::Todo("DAA");
    table[0x28] = Entry::Todo("JR Z,n");
    table[0x29] = Entry::Todo("ADD HL,HL");
    table[0x2B] = Entry::Todo("DEC HL");
    table[0x2C] = Entry::Todo("INC L");
    table[0x2D] = Entry::Todo("DEC L");
    table[0x2F] = Entry::Todo("CPL");
    table[0x30] = Entry::Todo("JR NC,n");
    table[0x33] = Entry::Todo("INC SP");
    table[0x34] = Entry::Todo("INC (HL)");
    table[0x35] = Entry::Todo("DEC (HL)");
    table[0x37] = Entry::Todo("SCF");
    table[0x38] = Entry::Todo("JR C,n");
    table[0x39] = Entry::Todo("ADD HL,SP");
    table[0x3B] = Entry::Todo("DEC SP");
    table[0x3C] = Entry::Todo("INC A");
    table[0x3D] = Entry::Todo("DEC A");
    table[0x3F] = Entry::Todo("CCF");
    table[0x9F] = Entry::Todo("SBC A,A");
    table[0x98] = Entry::Todo("SBC A,B");
    table[0x99] = Entry::Todo("SBC A,C");
    table[0x9A] = Entry::Todo("SBC A,D");
    table[0x9B] = Entry::Todo("SBC A,E");
    table[0x9C] = Entry::Todo("SBC A,H");
    table[0x9D] = Entry::Todo("SBC A,L");
    table[0x9E] = Entry::Todo("SBC A,(HL)");
    table[0xDE] = Entry::Todo("SBC A,n");
    table[0xBF] = Entry::Todo("CP A,A");
    table[0xB8] = Entry::Todo("CP A,B");
    table[0xB9] = Entry::Todo("CP A,C");
    table[0xBA] = Entry::Todo("CP A,D");
    table[0xBB] = Entry::Todo("CP A,E");
    table[0xBC] = Entry::Todo("CP A,H");
    table[0xBD] = Entry::Todo("CP A,L");
    table[0xBE] = Entry::Todo("CP A,(HL)");
    table[0xFE] = Entry::Todo("CP A,n");
    table[0xC0] = Entry::Todo("RET NZ");
    table[0xC2] = Entry::Todo("JP NZ,nn");
    table[0xC3] = Entry::Todo("JP nn");
    table[0xC4] = Entry::Todo("CALL NZ,nn");
    table[0xC7] = Entry::Todo("RST 00");
    table[0xC8] = Entry::Todo("RET Z");
    table[0xC9] = Entry::Todo("RET");
    table[0xCA] = Entry::Todo("JP Z,nn");
    table[0xCB] = Entry::Todo("CB prefix");
    table[0xCC] = Entry::Todo("CALL Z,nn");
    table[0xCD] = Entry::Todo("CALL nn");
    table[0xCF] = Entry::Todo("RST 08");
    table[0xD0] = Entry::Todo("RET NC");
    table[0xD2] = Entry::Todo("JP NC,nn");
    table[0xD4] = Entry::Todo("CALL NC,nn");
    table[0xD7] = Entry::Todo("RST 10");
    table[0xD8] = Entry::Todo("RET C");
    table[0xD9] = Entry::Todo("RETI");
    table[0xDA] = Entry::Todo("JP C,nn");
    table[0xDC] = Entry::Todo("CALL C,nn");
    table[0xDF] = Entry::Todo("RST 18");
    table[0xE7] = Entry::Todo("RST 20");
    table[0xE8] = Entry::Todo("ADD SP,n");
    table[0xE9] = Entry::Todo("JP (HL)");
    table[0xEF] = Entry::Todo("RST 28");
    table[0xF7] = Entry::Todo("RST 30");
    table[0xFF] = Entry::Todo("RST 38");

    table
}
