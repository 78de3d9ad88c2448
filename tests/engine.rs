use rand::{rngs::StdRng, SeedableRng};
use sheet_dice::expr::*;
use sheet_dice::roll::{
    Eval, MultiDieRollResult, PlainStringifier, RollContext, RollResult, SequenceRoller,
};
use sheet_dice::{evaluate, evaluate_with, summarize, Int, Named};
use vec1::vec1;

fn sample_expressions() -> Vec<Expression> {
    vec![
        constant(-4),
        d20(),
        multi_die_roll(12, 3),
        sum([]),
        sum([d20(), constant(4).named("Strength Modifier")]).named("Strength Roll"),
        sum([
            sum([d8(), sum([d6(), constant(2)])]),
            multi_die_roll(6, 2),
            sum([]),
            constant(-1),
        ]),
    ]
}

fn assert_isomorphic(expr: &Expression, result: &RollResult) {
    assert_eq!(expr.name(), result.name());
    match (expr, result) {
        (Expression::Constant(e), RollResult::Constant(r)) => assert_eq!(e.value, r.value),
        (Expression::DieRoll(e), RollResult::DieRoll(r)) => {
            assert_eq!(e.die, r.die);
            assert!((1..=e.die).contains(&r.value));
        }
        (Expression::MultiDieRoll(e), RollResult::MultiDieRoll(r)) => {
            assert_eq!(e.die, r.die);
            assert_eq!(r.die_results.len() as Int, e.num_die);
            assert!(r.die_results.iter().all(|x| (1..=e.die).contains(x)));
            assert_eq!(r.value, r.die_results.iter().sum::<Int>());
        }
        (Expression::Sum(e), RollResult::Sum(r)) => {
            assert_eq!(e.children.len(), r.children.len());
            assert_eq!(r.value, r.children.iter().map(Eval::value).sum::<Int>());
            for (e, r) in e.children.iter().zip(&r.children) {
                assert_isomorphic(e, r);
            }
        }
        (e, r) => panic!("{:?} evaluated to {:?}", e, r),
    }
}

#[test]
fn evaluation_mirrors_expression() {
    let mut rng = StdRng::seed_from_u64(2024);
    for expr in sample_expressions() {
        for _ in 0..100 {
            let result = evaluate_with(&expr, &mut rng);
            assert_isomorphic(&expr, &result);
        }
        assert_isomorphic(&expr, &evaluate(&expr));
    }
}

#[test]
fn constants_ignore_the_roller() {
    for seed in 0..10 {
        let result = evaluate_with(&constant(13), StdRng::seed_from_u64(seed));
        assert_eq!(result.value(), 13);
    }
}

#[test]
fn forced_multi_die_roll() {
    let result = evaluate_with(&multi_die_roll(6, 2), SequenceRoller::new(vec1![3, 5]));
    assert_eq!(
        result,
        RollResult::MultiDieRoll(MultiDieRollResult {
            value: 8,
            die: 6,
            die_results: vec![3, 5],
            name: None,
        })
    );
}

#[test]
fn shared_expression_evaluates_independently() {
    let expr = sum([d20(), multi_die_roll(6, 2)]);
    let mut ctx = RollContext::new(SequenceRoller::new(vec1![1, 2, 3, 4, 5, 6]));
    let first = ctx.eval(&expr);
    let second = ctx.eval(&expr);
    assert_eq!(first.value(), 1 + 2 + 3);
    assert_eq!(second.value(), 4 + 5 + 6);
    assert_eq!(ctx.rolls(), 6);
}

#[test]
fn expressions_are_shareable_across_threads() {
    let expr = std::sync::Arc::new(sum([d20(), multi_die_roll(8, 2), constant(3)]));
    let handles: Vec<_> = (0..4)
        .map(|seed| {
            let expr = expr.clone();
            std::thread::spawn(move || {
                evaluate_with(&expr, StdRng::seed_from_u64(seed)).value()
            })
        })
        .collect();
    for handle in handles {
        let value = handle.join().unwrap();
        assert!((6..=39).contains(&value));
    }
}

#[test]
fn summaries() {
    assert_eq!(summarize(&sum([d6(), multi_die_roll(6, 2)])), "3d6");
    assert_eq!(summarize(&sum([constant(5), constant(-8)])), "-3");
    assert_eq!(summarize(&sum([d6(), d20()])), "d20 + d6");
    assert_eq!(summarize(&sum([d20(), d6()])), "d20 + d6");
    assert_eq!(
        summarize(&sum([
            d20(),
            constant(4).named("Strength Modifier"),
            constant(3).named("Proficiency Bonus"),
        ])),
        "d20 + 7"
    );

    let (a, b, c) = (d4(), constant(-2), multi_die_roll(10, 2));
    assert_eq!(
        summarize(&sum([sum([a.clone(), b.clone()]), c.clone()])),
        summarize(&sum([a, b, c]))
    );
}

#[test]
fn summary_does_not_roll() {
    let expr = sum([d20(), multi_die_roll(6, 4)]);
    let before = summarize(&expr);
    for _ in 0..10 {
        assert_eq!(summarize(&expr), before);
    }
}

#[test]
fn rendering_a_roll() {
    let expr = sum([d20(), constant(4).named("Strength Modifier")]).named("Strength Roll");
    let result = evaluate_with(&expr, SequenceRoller::new(vec1![12]));
    assert_eq!(
        PlainStringifier::new().stringify(&result),
        "  Roll d20 \u{2192} 12\n  Strength Modifier = 4\nStrength Roll = 12 + 4 = 16"
    );
}
