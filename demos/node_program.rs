use tis_superoptimizer::semantics::Cycle;
use tis_superoptimizer::{Destination, Instruction, Node, Port, Program, Register, Source};

fn main() {
    let input = 37;
    let program = Program::new(vec![
        Instruction::MOV(Source::Port, Destination::Register(Register::ACC)),
        Instruction::ADD(Source::Register(Register::ACC)),
        Instruction::MOV(Source::Register(Register::ACC), Destination::Port),
    ]);
    let node = Node::new().set_up(Port::new(vec![input])).load(program);

    match node.run(Cycle::Indefinitely) {
        Ok(halted) => println!("2 times {} equals {:?}", input, halted.down().output()),
        Err(e) => eprintln!("Error: {}", e),
    }
}
