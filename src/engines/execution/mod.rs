pub mod isa;
pub mod machine;

pub use isa::{Opcode, OPCODE_COUNT};
pub use machine::Machine;
