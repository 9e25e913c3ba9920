use crate::config::MachineConfig;
use crate::engines::execution::isa::Opcode;
use rand::Rng;

/// The virtual machine a candidate program runs on: a bounded operand
/// stack, a read/write input vector and a write-only output vector.
///
/// The machine is deliberately fail-soft. A stack underflow, a full stack,
/// a zero divisor — each degrades the offending instruction to a no-op
/// instead of signalling an error, so malformed programs score poorly
/// rather than abort the search. Operand bytes are consumed even when the
/// guarded operation is skipped, so the program counter moves identically
/// whether or not the guard passed.
pub struct Machine {
    stack: Vec<i64>,
    stack_capacity: usize,
    initial_inputs: Vec<i64>,
    inputs: Vec<i64>,
    outputs: Vec<i64>,
}

impl Machine {
    pub fn new(config: &MachineConfig) -> Self {
        Self {
            stack: Vec::with_capacity(config.stack_capacity),
            stack_capacity: config.stack_capacity,
            initial_inputs: config.inputs.clone(),
            inputs: config.inputs.clone(),
            outputs: vec![0; config.output_size],
        }
    }

    pub fn outputs(&self) -> &[i64] {
        &self.outputs
    }

    /// Run one candidate program to completion.
    ///
    /// Every call starts from a clean machine: the stack is emptied, the
    /// outputs are zeroed and the inputs are reloaded from their configured
    /// initial values, so back-to-back runs of the same program produce
    /// identical outputs. Execution stops at the first `Halt`, at the end
    /// of the instruction stream, or when an operand-carrying opcode in the
    /// final slot has no operand byte left to read. Jump offsets only ever
    /// move the counter forward; a target past the end of the stream fails
    /// the fetch-loop bound and acts as an implicit halt.
    pub fn execute<R: Rng>(&mut self, code: &[u8], rng: &mut R) {
        self.reset();

        let mut pc = 0usize;
        while pc < code.len() {
            let Some(op) = Opcode::from_byte(code[pc]) else {
                pc += 1;
                continue;
            };
            pc += 1;

            match op {
                Opcode::Halt => break,
                Opcode::Push => {
                    let value = rng.gen_range(0..10);
                    self.push(value);
                }
                Opcode::Add => self.binary(|a, b| a.wrapping_add(b)),
                Opcode::Sub => self.binary(|a, b| a.wrapping_sub(b)),
                Opcode::Mul => self.binary(|a, b| a.wrapping_mul(b)),
                Opcode::Div => {
                    if self.has_operands(2) && self.stack[self.stack.len() - 1] != 0 {
                        self.binary(|a, b| a.wrapping_div(b));
                    }
                }
                Opcode::CmpEq => self.binary(|a, b| (a == b) as i64),
                Opcode::CmpNe => self.binary(|a, b| (a != b) as i64),
                Opcode::CmpGt => self.binary(|a, b| (a > b) as i64),
                Opcode::CmpLt => self.binary(|a, b| (a < b) as i64),
                Opcode::Load => {
                    let Some(operand) = Self::fetch_operand(code, &mut pc) else {
                        break;
                    };
                    let slot = operand as usize % self.inputs.len();
                    self.push(self.inputs[slot]);
                }
                Opcode::Store => {
                    let Some(operand) = Self::fetch_operand(code, &mut pc) else {
                        break;
                    };
                    let slot = operand as usize % self.inputs.len();
                    if let Some(value) = self.pop() {
                        self.inputs[slot] = value;
                    }
                }
                Opcode::Write => {
                    let Some(operand) = Self::fetch_operand(code, &mut pc) else {
                        break;
                    };
                    let slot = operand as usize % self.outputs.len();
                    if let Some(value) = self.pop() {
                        self.outputs[slot] = value;
                    }
                }
                Opcode::Jmp => {
                    let Some(offset) = Self::fetch_operand(code, &mut pc) else {
                        break;
                    };
                    pc = pc.saturating_add(offset as usize);
                }
                Opcode::Jz => {
                    let Some(offset) = Self::fetch_operand(code, &mut pc) else {
                        break;
                    };
                    if self.pop() == Some(0) {
                        pc = pc.saturating_add(offset as usize);
                    }
                }
                Opcode::Jnz => {
                    let Some(offset) = Self::fetch_operand(code, &mut pc) else {
                        break;
                    };
                    if matches!(self.pop(), Some(v) if v != 0) {
                        pc = pc.saturating_add(offset as usize);
                    }
                }
            }
        }
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.inputs.copy_from_slice(&self.initial_inputs);
        self.outputs.fill(0);
    }

    /// Read the operand byte following the current opcode and advance past
    /// it. `None` means the opcode sat in the final slot.
    fn fetch_operand(code: &[u8], pc: &mut usize) -> Option<u8> {
        let operand = *code.get(*pc)?;
        *pc += 1;
        Some(operand)
    }

    /// Underflow guard for stack-consuming operations.
    fn has_operands(&self, count: usize) -> bool {
        self.stack.len() >= count
    }

    /// Push with the overflow guard: a full stack drops the value silently.
    fn push(&mut self, value: i64) {
        if self.stack.len() < self.stack_capacity {
            self.stack.push(value);
        }
    }

    /// Pop with the underflow guard: an empty stack yields `None` and the
    /// caller degrades to a no-op.
    fn pop(&mut self) -> Option<i64> {
        self.stack.pop()
    }

    /// Apply a binary operation to the top two stack values, or do nothing
    /// if fewer than two are available.
    fn binary<F: Fn(i64, i64) -> i64>(&mut self, f: F) {
        if !self.has_operands(2) {
            return;
        }
        let b = self.stack.pop().unwrap();
        let a = self.stack.pop().unwrap();
        self.stack.push(f(a, b));
    }
}
