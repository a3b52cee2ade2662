use proptest::prelude::*;
use tis_superoptimizer::parser::parse_program;
use tis_superoptimizer::{Destination, Instruction, Node, Port, Program, Register, Source};

fn source() -> impl Strategy<Value = Source> {
    prop_oneof![
        Just(Source::Port),
        Just(Source::Register(Register::NIL)),
        Just(Source::Register(Register::ACC)),
        any::<i32>().prop_map(Source::Literal),
    ]
}

fn destination() -> impl Strategy<Value = Destination> {
    prop_oneof![
        Just(Destination::Port),
        Just(Destination::Register(Register::NIL)),
        Just(Destination::Register(Register::ACC)),
    ]
}

fn instruction() -> impl Strategy<Value = Instruction> {
    prop_oneof![
        Just(Instruction::NOP),
        Just(Instruction::SWP),
        Just(Instruction::SAV),
        (source(), destination()).prop_map(|(s, d)| Instruction::MOV(s, d)),
        source().prop_map(Instruction::ADD),
        source().prop_map(Instruction::SUB),
    ]
}

proptest! {
    #[test]
    fn empty_port_cannot_be_read(output in prop::collection::vec(any::<i32>(), 0..8)) {
        let port = Port::with(vec![], output);

        prop_assert!(!port.available());
        prop_assert!(port.read().is_none());
    }

    #[test]
    fn write_appends_to_output(
        input in prop::collection::vec(any::<i32>(), 0..8),
        output in prop::collection::vec(any::<i32>(), 0..8),
        value in any::<i32>(),
    ) {
        let port = Port::with(input.clone(), output.clone());

        let written = port.write(value);

        let mut expected = output;
        expected.push(value);
        prop_assert_eq!(written.output(), &expected[..]);
        prop_assert_eq!(written.input(), input);
    }

    #[test]
    fn read_takes_the_front_value(input in prop::collection::vec(any::<i32>(), 1..8)) {
        let (rest, value) = Port::new(input.clone()).read().unwrap();

        prop_assert_eq!(value, input[0]);
        prop_assert_eq!(rest.input(), input[1..].to_vec());
    }

    #[test]
    fn nil_reads_zero(acc in any::<i32>(), bac in any::<i32>()) {
        let node = Node::with(acc, bac);

        let moved = node
            .execute(Instruction::MOV(Source::Register(Register::NIL), Destination::Register(Register::ACC)))
            .unwrap();
        let added = node.execute(Instruction::ADD(Source::Register(Register::NIL))).unwrap();

        prop_assert_eq!(moved.acc(), 0);
        prop_assert_eq!(added.acc(), acc);
    }

    #[test]
    fn nop_only_advances_pc(
        acc in any::<i32>(),
        bac in any::<i32>(),
        input in prop::collection::vec(any::<i32>(), 0..4),
    ) {
        let node = Node::with(acc, bac).set_up(Port::new(input));

        let next = node.execute(Instruction::NOP).unwrap();

        prop_assert_eq!(next.pc(), node.pc() + 1);
        prop_assert_eq!(next.acc(), node.acc());
        prop_assert_eq!(next.bac(), node.bac());
        prop_assert_eq!(next.up(), node.up());
        prop_assert_eq!(next.down(), node.down());
    }

    #[test]
    fn add_saturates(acc in any::<i32>(), value in any::<i32>()) {
        let node = Node::with(acc, 0);

        let added = node.execute(Instruction::ADD(Source::Literal(value))).unwrap();
        let subtracted = node.execute(Instruction::SUB(Source::Literal(value))).unwrap();

        prop_assert_eq!(added.acc(), acc.saturating_add(value));
        prop_assert_eq!(subtracted.acc(), acc.saturating_sub(value));
    }

    #[test]
    fn printed_programs_parse_back(instructions in prop::collection::vec(instruction(), 0..6)) {
        let program = Program::new(instructions);

        prop_assert_eq!(parse_program(&program.to_string()), Ok(program));
    }
}
