use tis_superoptimizer::{Config, Node, Port, optimize};

fn main() {
    let node = Node::new().set_up(Port::new(vec![0, 1, 2, 3]));
    let expected = [0, 0, 0];

    match optimize(&node, &expected, &Config::new(10, 3)) {
        Some(program) => println!("{}", program),
        None => println!("Could not find a program within the bounds"),
    }
}
