use rdcalc::{
    RuntimeError,
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::evaluator::{
        core::Visitor, counter::NodeCounter, postfix::PostfixPrinter, rpn::evaluate_rpn,
        stack::StackEvaluator, tree::TreeEvaluator,
    },
    parse,
    util::num::approx_eq,
};

const SAMPLES: &[&str] = &["1",
                           "2+3*4",
                           "(2+3)*4",
                           "1-2-3",
                           "8/4/2",
                           "-6",
                           "+6",
                           "-(2+3)*4",
                           "2*-3--4",
                           "((1+2)*(3-4))/(5+6)",
                           "1/0",
                           "0/0",
                           "-1/0+7",
                           "10/3*3",
                           "1+2+3+4+5*6*7/8-9-10"];

/// Small deterministic generator so the cross-checks cover many shapes.
struct Generator(u64);

impl Generator {
    fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn expression(&mut self, budget: u32) -> String {
        let choice = if budget == 0 { 0 } else { self.next_u64() % 5 };
        match choice {
            0 => (self.next_u64() % 100).to_string(),
            1 => format!("({})", self.expression(budget - 1)),
            2 => {
                let sign = if self.next_u64() % 2 == 0 { "-" } else { "+" };
                format!("{sign}{}", self.expression(budget - 1))
            },
            _ => {
                let op = ["+", "-", "*", "/"][usize::try_from(self.next_u64() % 4).unwrap()];
                format!("{}{op}{}", self.expression(budget - 1), self.expression(budget - 1))
            },
        }
    }
}

fn corpus() -> Vec<String> {
    let mut generator = Generator(0x2545_f491_4f6c_dd1d);
    let mut sources: Vec<String> = SAMPLES.iter().map(ToString::to_string).collect();
    sources.extend((0..300).map(|_| generator.expression(6)));
    sources
}

#[test]
fn tree_and_stack_agree() {
    for src in corpus() {
        let expr = parse(&src).unwrap_or_else(|e| panic!("{src} failed: {e}"));
        let tree = TreeEvaluator::evaluate(&expr);
        let stack = StackEvaluator::evaluate(&expr).unwrap();
        assert!(approx_eq(tree, stack), "{src}: tree {tree} != stack {stack}");
    }
}

#[test]
fn stack_holds_exactly_one_value_after_traversal() {
    for src in corpus() {
        let expr = parse(&src).unwrap();
        let mut evaluator = StackEvaluator::new();
        expr.accept(&mut evaluator).unwrap();
        assert_eq!(evaluator.depth(), 1, "{src}");
    }
}

#[test]
fn postfix_length_matches_node_count() {
    for src in corpus() {
        let expr = parse(&src).unwrap();
        let count = NodeCounter::count(&expr);

        let mut printer = PostfixPrinter::new();
        expr.accept(&mut printer);
        assert_eq!(printer.tokens().len(), count.leaves + count.operators, "{src}");
    }
}

#[test]
fn postfix_replays_to_stack_result() {
    for src in corpus() {
        let expr = parse(&src).unwrap();
        let postfix = PostfixPrinter::render(&expr);
        let replayed = evaluate_rpn(&postfix).unwrap_or_else(|e| panic!("{postfix}: {e}"));
        let stack = StackEvaluator::evaluate(&expr).unwrap();
        assert!(approx_eq(replayed, stack), "{src}: rpn {replayed} != stack {stack}");
    }
}

#[test]
fn postfix_output() {
    let render = |src: &str| PostfixPrinter::render(&parse(src).unwrap());
    assert_eq!(render("2+3*4"), "2 3 4 * +");
    assert_eq!(render("(2+3)*4"), "2 3 + 4 *");
    assert_eq!(render("1-2-3"), "1 2 3 - -");
    assert_eq!(render("-6"), "6 neg");
    assert_eq!(render("+6"), "6 pos");
    assert_eq!(render("7"), "7");
}

#[test]
fn quirk_results() {
    for (src, expected) in [("1-2-3", 2.0), ("8/4/2", 4.0), ("2+3*4", 14.0), ("(2+3)*4", 20.0)] {
        let expr = parse(src).unwrap();
        assert!(approx_eq(TreeEvaluator::evaluate(&expr), expected), "{src}");
        assert!(approx_eq(StackEvaluator::evaluate(&expr).unwrap(), expected), "{src}");
    }
}

#[test]
fn evaluators_work_on_hand_built_trees() {
    let expr = Expr::binary(BinaryOperator::Sub,
                            Expr::constant(10.0),
                            Expr::unary(UnaryOperator::Minus, Expr::constant(5.0)));
    assert!(approx_eq(TreeEvaluator::evaluate(&expr), 15.0));
    assert!(approx_eq(StackEvaluator::evaluate(&expr).unwrap(), 15.0));
    assert_eq!(PostfixPrinter::render(&expr), "10 5 neg -");
}

#[test]
fn unfinished_stack_is_reported() {
    let evaluator = StackEvaluator::new();
    assert_eq!(evaluator.finish(),
               Err(RuntimeError::StackImbalance { depth: 0 }));

    let mut evaluator = StackEvaluator::new();
    evaluator.visit_constant(1.0).unwrap();
    evaluator.visit_constant(2.0).unwrap();
    assert_eq!(evaluator.finish(),
               Err(RuntimeError::StackImbalance { depth: 2 }));
}

#[test]
fn malformed_rpn_is_rejected() {
    assert_eq!(evaluate_rpn("1 +"),
               Err(RuntimeError::StackUnderflow { operator:  "+".to_string(),
                                                  needed:    2,
                                                  available: 1, }));
    assert_eq!(evaluate_rpn("neg"),
               Err(RuntimeError::StackUnderflow { operator:  "neg".to_string(),
                                                  needed:    1,
                                                  available: 0, }));
    assert_eq!(evaluate_rpn("1 2"),
               Err(RuntimeError::StackImbalance { depth: 2 }));
    assert_eq!(evaluate_rpn("1 x +"),
               Err(RuntimeError::UnknownRpnToken { token: "x".to_string(),
                                                   index: 1, }));
    assert_eq!(evaluate_rpn(""), Err(RuntimeError::StackImbalance { depth: 0 }));
}

/// A strategy defined outside the crate, to show the AST needs no changes.
struct MaxLiteral;

impl Visitor for MaxLiteral {
    type Output = f64;

    fn visit_constant(&mut self, value: f64) -> f64 {
        value
    }

    fn visit_binary(&mut self, _op: BinaryOperator, left: &Expr, right: &Expr) -> f64 {
        left.accept(self).max(right.accept(self))
    }

    fn visit_unary(&mut self, _op: UnaryOperator, operand: &Expr) -> f64 {
        operand.accept(self)
    }
}

#[test]
fn external_strategies_plug_in() {
    let expr = parse("3*(17-2)/-9").unwrap();
    assert!(approx_eq(expr.accept(&mut MaxLiteral), 17.0));
}
