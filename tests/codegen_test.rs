//! Operation lowering tests.

use tapegen::{
    compile, demo_program, lower, CellWidth, EmitContext, EmitError, MachineConfig, Op, Program,
};

#[test]
fn test_demo_program_code() {
    let program = compile(&demo_program(), MachineConfig::default()).unwrap();
    assert_eq!(
        program.to_string(),
        "[-]++++++++++>[-]++++++++++++++++++++[<+>-]<[>+<-]>"
    );
    assert!(program.is_balanced());
    assert_eq!(program.net_displacement(), 1);
}

#[test]
fn test_demo_program_stats() {
    let mut ctx = EmitContext::new();
    lower(&mut ctx, &demo_program()).unwrap();

    let stats = ctx.stats();
    assert_eq!(stats.variables_declared, 2);
    assert_eq!(stats.loops, 4);
    assert_eq!(stats.pointer_moves, 7);
    assert_eq!(stats.peak_cells, 2);
}

#[test]
fn test_block_body_code() {
    let ops = vec![
        Op::declare("acc"),
        Op::block([
            Op::declare("t"),
            Op::add(3, "t"),
            Op::move_value("t", "acc"),
        ]),
        Op::block([Op::declare("u"), Op::read("u"), Op::move_value("u", "acc")]),
        Op::print("acc"),
    ];
    let program = compile(&ops, MachineConfig::default()).unwrap();
    // `u` reuses the cell released by `t`.
    assert_eq!(program, Program::from_symbols(">+++[<+>-]< >,[<+>-]< ."));
}

#[test]
fn test_empty_sequence() {
    let program = compile(&[], MachineConfig::default()).unwrap();
    assert!(program.is_empty());
}

#[test]
fn test_error_stops_lowering() {
    let ops = vec![Op::declare("a"), Op::declare("a"), Op::add(1, "a")];
    let mut ctx = EmitContext::new();
    assert_eq!(
        lower(&mut ctx, &ops),
        Err(EmitError::DuplicateDeclaration {
            name: "a".to_owned()
        })
    );
    assert!(ctx.program().is_empty());
}

#[test]
fn test_byte_machine_wraps_large_constants() {
    let ops = vec![Op::declare("c"), Op::add(-250, "c")];
    let config = MachineConfig::new(CellWidth::bits(8).unwrap());
    let program = compile(&ops, config).unwrap();
    assert_eq!(program.to_string(), "++++++");
}
