// This test suite exercises EmitContext through the public API: the literal code emitted for
// each primitive, the error kinds for caller mistakes, and scope reclamation. The property
// test generates random sequences of primitives over a fixed set of variables and checks the
// pointer-tracking invariant after every step: the net number of right moves emitted equals
// the tracked pointer, the pointer sits on the most recently addressed variable, and the
// loop brackets stay balanced.

//! Emission context integration tests.

use proptest::prelude::*;
use tapegen::{
    CellWidth, ConfigError, EmitContext, EmitError, Instruction, MachineConfig, Segment,
    SegmentHandle,
};
use tapegen::tape::MAX_CELL_BITS;

const NAMES: [&str; 4] = ["w", "x", "y", "z"];

fn context_with(names: &[&str]) -> EmitContext {
    let mut ctx = EmitContext::new();
    for name in names {
        ctx.new_var(name).unwrap();
    }
    ctx
}

#[test]
fn test_fresh_context() {
    let ctx = EmitContext::new();
    assert_eq!(ctx.pointer(), 0);
    assert!(ctx.program().is_empty());
    assert_eq!(ctx.scope_depth(), 1);
    assert_eq!(ctx.config().cell_width, CellWidth::Unbounded);
}

#[test]
fn test_variables_get_consecutive_cells() {
    let ctx = context_with(&NAMES);
    for (address, name) in NAMES.iter().enumerate() {
        assert_eq!(ctx.address_of(name), Ok(address));
    }
    assert_eq!(ctx.allocator().high_water(), 4);
}

#[test]
fn test_new_var_returns_live_handle() {
    let mut ctx = EmitContext::new();
    let handle: SegmentHandle = ctx.new_var("v").unwrap();
    assert_eq!(
        ctx.allocator().segment(handle),
        Some(Segment { start: 0, end: 0 })
    );
}

#[test]
fn test_relocation_both_directions() {
    let mut ctx = context_with(&NAMES);
    ctx.zero("z").unwrap();
    ctx.add(-3, "w").unwrap();
    ctx.input("y").unwrap();

    assert_eq!(ctx.code(), ">>>[-]<<<--->>,");
    assert_eq!(ctx.pointer(), 2);
    assert_eq!(ctx.program().net_displacement(), 2);
}

#[test]
fn test_move_is_a_balanced_loop() {
    let mut ctx = context_with(&["src", "dst"]);
    ctx.move_value("dst", "src").unwrap();

    assert_eq!(ctx.code(), ">[<+>-]<");
    assert_eq!(ctx.program().count(Instruction::LoopStart), 1);
    assert!(ctx.program().is_balanced());
}

#[test]
fn test_error_kinds() {
    let mut ctx = context_with(&["a"]);

    assert_eq!(
        ctx.new_var("a").unwrap_err().to_string(),
        "Variable a already declared"
    );
    assert_eq!(
        ctx.print("b").unwrap_err(),
        EmitError::UnknownVariable {
            name: "b".to_owned()
        }
    );
    assert_eq!(ctx.pop_scope().unwrap_err().to_string(), "Pop on root scope");
    assert!(ctx.program().is_empty());
}

#[test]
fn test_scope_reclamation_reuses_address() {
    let mut ctx = context_with(&["a", "b"]);
    ctx.push_scope();
    ctx.new_var("t1").unwrap();
    ctx.new_var("t2").unwrap();
    let t1 = ctx.address_of("t1").unwrap();
    ctx.pop_scope().unwrap();

    assert_eq!(ctx.allocator().len(), 2);
    ctx.new_var("c").unwrap();
    assert_eq!(ctx.address_of("c"), Ok(t1));
}

#[test]
fn test_fixed_width_add() {
    let mut ctx = EmitContext::with_config(MachineConfig::new(CellWidth::bits(4).unwrap()));
    ctx.new_var("n").unwrap();
    ctx.add(15, "n").unwrap();
    ctx.add(-17, "n").unwrap();
    ctx.add(16, "n").unwrap();
    assert_eq!(ctx.code(), "--");
}

#[test]
fn test_out_of_range_width_never_reaches_emitter() {
    for bits in [0, MAX_CELL_BITS + 1, 48] {
        assert_eq!(
            CellWidth::bits(bits),
            Err(ConfigError::InvalidCellWidth { bits })
        );
    }

    // The narrowest width that can be built still keeps arithmetic.
    let mut ctx = EmitContext::with_config(MachineConfig::new(CellWidth::bits(1).unwrap()));
    ctx.new_var("x").unwrap();
    ctx.add(5, "x").unwrap();
    assert_eq!(ctx.code(), "+");
    assert_eq!(ctx.config().cell_width.bit_count(), Some(1));
}

#[test]
fn test_into_program_keeps_code() {
    let mut ctx = context_with(&["a"]);
    ctx.add(2, "a").unwrap();
    ctx.print("a").unwrap();
    let code = ctx.code();
    assert_eq!(ctx.into_program().to_string(), code);
}

#[derive(Debug, Clone)]
enum Step {
    Print(usize),
    Input(usize),
    Zero(usize),
    Add(i64, usize),
    Move(usize, usize),
}

fn step() -> impl Strategy<Value = Step> {
    let var = 0..NAMES.len();
    prop_oneof![
        var.clone().prop_map(Step::Print),
        var.clone().prop_map(Step::Input),
        var.clone().prop_map(Step::Zero),
        (-20i64..20, var.clone()).prop_map(|(v, d)| Step::Add(v, d)),
        (var.clone(), var).prop_map(|(f, t)| Step::Move(f, t)),
    ]
}

proptest! {
    #[test]
    fn prop_pointer_tracks_emitted_moves(steps in prop::collection::vec(step(), 0..40)) {
        let mut ctx = context_with(&NAMES);

        for step in steps {
            let last = match step {
                Step::Print(d) => { ctx.print(NAMES[d]).unwrap(); d }
                Step::Input(d) => { ctx.input(NAMES[d]).unwrap(); d }
                Step::Zero(d) => { ctx.zero(NAMES[d]).unwrap(); d }
                Step::Add(v, d) => { ctx.add(v, NAMES[d]).unwrap(); d }
                Step::Move(f, t) => {
                    ctx.move_value(NAMES[f], NAMES[t]).unwrap();
                    t
                }
            };

            prop_assert_eq!(ctx.program().net_displacement(), ctx.pointer());
            prop_assert_eq!(ctx.pointer(), ctx.address_of(NAMES[last]).unwrap() as isize);
            prop_assert!(ctx.program().is_balanced());
        }
    }
}
