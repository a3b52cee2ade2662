use tis_superoptimizer::parser::parse_program;
use tis_superoptimizer::semantics::{CheckResult, Cycle, RunError, check_detailed};
use tis_superoptimizer::{Destination, Instruction, Node, Port, Program, Register, Source, check};

fn program(text: &str) -> Program {
    parse_program(text).unwrap()
}

#[test]
fn test_copy_twice_outputs_both_values() {
    let node = Node::new()
        .set_up(Port::new(vec![3, 4]))
        .load(program("MOV UP, DOWN\nMOV UP, DOWN"));

    let halted = node.run(Cycle::Indefinitely).unwrap();

    assert_eq!(halted.down().output(), &[3, 4]);
    assert!(!halted.up().available());
}

#[test]
fn test_check_through_acc() {
    let node = Node::new().set_up(Port::new(vec![5]));

    assert!(check(&node, program("MOV UP, ACC\nMOV ACC, DOWN"), &[5], 10));
}

#[test]
fn test_check_rejects_deadlock() {
    let node = Node::new();

    let result = check_detailed(&node, program("MOV UP, DOWN"), &[], 10);

    assert!(matches!(result, CheckResult::Rejected(RunError::Deadlock { pc: 0, .. })));
    assert!(!check(&node, program("MOV UP, DOWN"), &[], 10));
}

#[test]
fn test_check_rejects_timeout() {
    let node = Node::new().set_up(Port::new(vec![1]));

    let result = check_detailed(&node, program("NOP\nNOP\nMOV UP, DOWN"), &[1], 2);

    assert_eq!(
        result,
        CheckResult::Rejected(RunError::Timeout { cycles: 2, pc: 2 })
    );
}

#[test]
fn test_check_ignores_unread_input() {
    let node = Node::new().set_up(Port::new(vec![0, 1, 2, 3]));
    let sum_first_pair = program("MOV UP, ACC\nADD UP\nMOV ACC, DOWN");

    assert!(check(&node, sum_first_pair.clone(), &[1], 10));
    assert_eq!(
        check_detailed(&node, sum_first_pair, &[1, 5], 10),
        CheckResult::WrongOutput { actual: vec![1] }
    );
}

#[test]
fn test_check_starts_from_given_registers() {
    let node = Node::with(2, 0);
    let program = Program::new(vec![Instruction::MOV(
        Source::Register(Register::ACC),
        Destination::Port,
    )]);

    assert!(check(&node, program, &[2], 10));
}
