//! Executor semantics over hand-encoded word sequences.

use emulator_core::{
    encode_itype, encode_rtype, run, step, Fault, Funct, Opcode, Register, RegisterFile,
};
use proptest as _;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

fn load_pair(value: i64) -> [u16; 2] {
    // lui/ori halves of a 12-bit load, the li pseudo-op's expansion.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (high, low) = (((value >> 6) & 0x3F) as u8, (value & 0x3F) as u8);
    [
        encode_itype(Opcode::Lui, Register::S0, Register::R1, high),
        encode_itype(Opcode::Ori, Register::R1, Register::R1, low),
    ]
}

#[test]
fn lui_then_ori_assembles_a_twelve_bit_value() {
    let mut registers = RegisterFile::new();
    run(&mut registers, &load_pair(0b101010_010101)).expect("load pair executes");
    assert_eq!(registers.get(Register::R1), 0b101010_010101);
}

#[test]
fn lui_discards_the_previous_register_value() {
    let mut registers = RegisterFile::new();
    registers.set(Register::R1, 0xFFF);
    run(
        &mut registers,
        &[encode_itype(Opcode::Lui, Register::S0, Register::R1, 0)],
    )
    .expect("lui executes");
    assert_eq!(registers.get(Register::R1), 0);
}

#[rstest]
#[case(Funct::Srl)]
#[case(Funct::Mult)]
fn reserved_functs_fault_with_their_mnemonic(#[case] funct: Funct) {
    let mut registers = RegisterFile::new();
    let result = step(
        &mut registers,
        encode_rtype(Register::R1, Register::R2, Register::R3, funct),
    );
    assert_eq!(
        result,
        Err(Fault::Unimplemented {
            mnemonic: funct.mnemonic()
        })
    );
}

#[rstest]
#[case(Opcode::Lw)]
#[case(Opcode::Sw)]
#[case(Opcode::Andi)]
#[case(Opcode::Addi)]
#[case(Opcode::Li)]
fn reserved_opcodes_fault_with_their_mnemonic(#[case] opcode: Opcode) {
    let mut registers = RegisterFile::new();
    let result = step(
        &mut registers,
        encode_itype(opcode, Register::S0, Register::R1, 5),
    );
    assert_eq!(
        result,
        Err(Fault::Unimplemented {
            mnemonic: opcode.mnemonic()
        })
    );
}

#[rstest]
#[case(0x8)]
#[case(0xB)]
#[case(0xF)]
fn unmapped_opcodes_halt_before_later_words(#[case] opcode_bits: u16) {
    let mut program = vec![opcode_bits << 12];
    program.extend(load_pair(42));

    let mut registers = RegisterFile::new();
    let result = run(&mut registers, &program);

    #[allow(clippy::cast_possible_truncation)]
    let expected = Fault::UnknownOpcode {
        code: opcode_bits as u8,
    };
    assert_eq!(result, Err(expected));
    assert_eq!(registers, RegisterFile::new(), "no word after the fault ran");
}

#[test]
fn multiply_scenario_with_preloaded_double_operand() {
    // Load 10 and 3, stage r3 = 6, multiply into r3.
    let program = [
        encode_itype(Opcode::Lui, Register::S0, Register::R1, 0),
        encode_itype(Opcode::Ori, Register::R1, Register::R1, 10),
        encode_itype(Opcode::Lui, Register::S0, Register::R2, 0),
        encode_itype(Opcode::Ori, Register::R2, Register::R2, 3),
        encode_itype(Opcode::Lui, Register::S0, Register::R3, 0),
        encode_itype(Opcode::Ori, Register::R3, Register::R3, 6),
        encode_rtype(Register::R3, Register::R1, Register::R2, Funct::Bth),
    ];

    let mut registers = RegisterFile::new();
    run(&mut registers, &program).expect("program executes");

    assert_eq!(registers.get(Register::R3), 30);
    assert_eq!(registers.get(Register::R1), 10);
    assert_eq!(registers.get(Register::R2), 3);
}

#[test]
fn shift_chain_keeps_wide_values() {
    let program = [
        encode_itype(Opcode::Lui, Register::S0, Register::R1, 0),
        encode_itype(Opcode::Ori, Register::R1, Register::R1, 1),
        encode_itype(Opcode::Lui, Register::S0, Register::R2, 0),
        encode_itype(Opcode::Ori, Register::R2, Register::R2, 20),
        encode_rtype(Register::R4, Register::R1, Register::R2, Funct::Sll),
    ];

    let mut registers = RegisterFile::new();
    run(&mut registers, &program).expect("program executes");
    assert_eq!(registers.get(Register::R4), 1 << 20);
}
