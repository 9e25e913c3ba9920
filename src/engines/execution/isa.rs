use rand::Rng;

/// The closed instruction set. Every opcode is one byte wide; `Load`,
/// `Store`, `Jmp`, `Jz`, `Jnz` and `Write` consume one operand byte from
/// the instruction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    Push = 0,
    Add = 1,
    Sub = 2,
    Mul = 3,
    Div = 4,
    Load = 5,
    Store = 6,
    Jmp = 7,
    Jz = 8,
    Jnz = 9,
    CmpEq = 10,
    CmpNe = 11,
    CmpGt = 12,
    CmpLt = 13,
    Write = 14,
    Halt = 15,
}

/// Number of opcodes in the instruction set. `Halt` carries the highest
/// encoding, so `0..OPCODE_COUNT - 1` is the non-halting range.
pub const OPCODE_COUNT: u8 = 16;

impl Opcode {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Opcode::Push),
            1 => Some(Opcode::Add),
            2 => Some(Opcode::Sub),
            3 => Some(Opcode::Mul),
            4 => Some(Opcode::Div),
            5 => Some(Opcode::Load),
            6 => Some(Opcode::Store),
            7 => Some(Opcode::Jmp),
            8 => Some(Opcode::Jz),
            9 => Some(Opcode::Jnz),
            10 => Some(Opcode::CmpEq),
            11 => Some(Opcode::CmpNe),
            12 => Some(Opcode::CmpGt),
            13 => Some(Opcode::CmpLt),
            14 => Some(Opcode::Write),
            15 => Some(Opcode::Halt),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Whether the opcode consumes a trailing operand byte.
    pub fn has_operand(self) -> bool {
        matches!(
            self,
            Opcode::Load | Opcode::Store | Opcode::Jmp | Opcode::Jz | Opcode::Jnz | Opcode::Write
        )
    }
}

/// Uniform draw over the full instruction set, `Halt` included.
pub fn random_opcode<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(0..OPCODE_COUNT)
}

/// Uniform draw excluding `Halt`, used when filling fresh genomes.
pub fn random_non_halt_opcode<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(0..OPCODE_COUNT - 1)
}
