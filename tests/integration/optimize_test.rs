use tis_superoptimizer::search::{
    EnumerativeSearch, ParallelConfig, SearchAlgorithm, run_parallel_search,
};
use tis_superoptimizer::semantics::CostMetric;
use tis_superoptimizer::{Config, Destination, Instruction, Node, Port, Problem, Program, Source, check, optimize};

#[test]
fn test_optimize_copy() {
    let node = Node::new().set_up(Port::new(vec![7]));

    let program = optimize(&node, &[7], &Config::new(10, 1));

    assert_eq!(
        program,
        Some(Program::new(vec![Instruction::MOV(Source::Port, Destination::Port)]))
    );
}

#[test]
fn test_optimize_length_zero_not_found() {
    let node = Node::new().set_up(Port::new(vec![7]));

    assert_eq!(optimize(&node, &[7], &Config::new(10, 0)), None);
}

#[test]
fn test_optimize_result_passes_check() {
    let node = Node::new().set_up(Port::new(vec![0, 1, 2, 3]));
    let expected = [0, 0, 0];

    let program = optimize(&node, &expected, &Config::new(10, 3)).unwrap();

    assert_eq!(program.len(), 3);
    assert!(check(&node, program, &expected, 10));
}

#[test]
fn test_optimize_programs_do_not_wrap_around() {
    // One write per instruction at most, and execution stops after the last one
    let node = Node::new().set_up(Port::new(vec![0, 1, 2, 3]));
    let expected = [0, 0, 0, 0];

    assert_eq!(optimize(&node, &expected, &Config::new(10, 3)), None);
    let config = Config::new(10, 4).with_prune_redundant(true);
    let program = optimize(&node, &expected, &config).unwrap();
    assert_eq!(program.len(), 4);
}

#[test]
fn test_optimize_ignores_node_state() {
    let clean = Node::new().set_up(Port::new(vec![5]));
    let dirty = Node::with(9, 4)
        .set_up(Port::new(vec![5]))
        .set_down(Port::with(vec![], vec![1, 2]));
    let config = Config::new(10, 2);

    assert_eq!(
        optimize(&dirty, &[-5], &config),
        optimize(&clean, &[-5], &config)
    );
}

#[test]
fn test_parallel_agrees_with_enumerative() {
    let problem = Problem::new(vec![21], vec![42]);
    let config = problem.config().with_prune_redundant(true);

    let sequential = EnumerativeSearch::new().search(&problem.node(), &problem.output, &config);
    let parallel = run_parallel_search(
        &problem.node(),
        &problem.output,
        &config,
        &ParallelConfig::default().with_workers(3),
    );

    assert!(sequential.is_found());
    assert_eq!(parallel.result.program, sequential.program);
}

#[test]
fn test_search_reports_cost() {
    let node = Node::new().set_up(Port::new(vec![7]));
    let config = Config::new(10, 1).with_cost_metric(CostMetric::Content);

    let result = EnumerativeSearch::new().search(&node, &[7], &config);

    // MOV costs 1, plus 1 for each port operand
    assert_eq!(result.statistics.best_cost_found, Some(3));
}
