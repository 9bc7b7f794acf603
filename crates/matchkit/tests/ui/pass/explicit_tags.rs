//! `#[tag = N]` overrides and continued numbering.

use matchkit::TaggedRecord;

#[derive(TaggedRecord)]
enum Opcode {
    #[tag = 16]
    Load(u32),
    Store(u32),
    #[tag = 32]
    Halt,
}

fn main() {
    assert_eq!(Opcode::LOAD, 16);
    assert_eq!(Opcode::STORE, 17);
    assert_eq!(Opcode::HALT, 32);
    assert_eq!(Opcode::Store(1).tag(), 17);
    assert!(Opcode::Halt.is_variant(Opcode::HALT));
    let _ = Opcode::Load(0);
}
