use tis_superoptimizer::{Destination, Instruction, Node, Register, Source};

fn main() {
    let doubled = Node::new()
        .execute(Instruction::MOV(
            Source::Literal(1),
            Destination::Register(Register::ACC),
        ))
        .and_then(|node| node.execute(Instruction::ADD(Source::Register(Register::ACC))));

    match doubled {
        Ok(node) => println!("2 times 1 equals {}", node.acc()),
        Err(e) => eprintln!("Error: {}", e),
    }
}
