use super::*;

#[test]
fn top_level_is_enabled() {
    let stack = ConditionStack::new(4);
    assert!(stack.enabled());
    assert_eq!(stack.depth(), 0);
}

#[test]
fn push_false_disables_until_pop() {
    let mut stack = ConditionStack::new(4);
    stack.push(false).unwrap();
    assert!(!stack.enabled());
    stack.push(true).unwrap();
    assert!(!stack.enabled(), "a dead outer level wins");
    assert!(stack.pop().unwrap());
    assert!(!stack.pop().unwrap());
    assert!(stack.enabled());
}

#[test]
fn if_else_takes_exactly_one_branch() {
    // if false then .. else .. end
    let mut stack = ConditionStack::new(4);
    stack.push(false).unwrap();
    assert!(!stack.enabled());
    assert!(stack.elseif(true).unwrap());
    assert!(stack.enabled());
    stack.pop().unwrap();
    assert_eq!(stack.depth(), 0);
}

#[test]
fn taken_branch_blocks_later_ones() {
    // if true then .. elseif true then .. else .. end
    let mut stack = ConditionStack::new(4);
    stack.push(true).unwrap();
    assert!(stack.enabled());

    assert!(!stack.test_elseif().unwrap());
    assert!(!stack.enabled(), "the elseif condition is not evaluated");
    assert!(!stack.elseif(true).unwrap());
    assert!(!stack.enabled());

    assert!(!stack.elseif(true).unwrap());
    assert!(!stack.enabled());
    stack.pop().unwrap();
}

#[test]
fn first_true_elseif_fires() {
    // if false then .. elseif false then .. elseif true then .. else .. end
    let mut stack = ConditionStack::new(4);
    stack.push(false).unwrap();

    assert!(stack.test_elseif().unwrap());
    assert!(stack.enabled());
    assert!(!stack.elseif(false).unwrap());

    assert!(stack.test_elseif().unwrap());
    assert!(stack.elseif(true).unwrap());
    assert!(stack.enabled());

    assert!(!stack.elseif(true).unwrap());
    assert!(!stack.enabled());
    stack.pop().unwrap();
}

#[test]
fn nested_if_inside_dead_branch_stays_dead() {
    let mut stack = ConditionStack::new(4);
    stack.push(false).unwrap();
    // the inner condition is never evaluated, so it counts as false
    stack.push(false).unwrap();
    stack.elseif(true).unwrap();
    assert!(!stack.enabled());
    stack.pop().unwrap();
    stack.pop().unwrap();
    assert!(stack.enabled());
}

#[test]
fn overflow_is_fatal() {
    let mut stack = ConditionStack::new(2);
    stack.push(true).unwrap();
    stack.push(true).unwrap();
    assert_eq!(
        stack.push(true),
        Err(FatalError::NestingTooDeep { max_depth: 2 })
    );
    assert_eq!(stack.depth(), 2);
}

#[test]
fn settled_level_runs_no_later_branch() {
    // if <failed> then .. elseif true then .. else .. end
    let mut stack = ConditionStack::new(4);
    stack.push(false).unwrap();
    stack.settle().unwrap();
    assert!(!stack.enabled());

    assert!(!stack.test_elseif().unwrap());
    assert!(!stack.elseif(true).unwrap());
    assert!(!stack.elseif(true).unwrap(), "else stays dead");
    assert!(!stack.pop().unwrap());
    assert!(stack.enabled());
}

#[test]
fn underflow_is_fatal() {
    let mut stack = ConditionStack::new(2);
    assert_eq!(stack.pop(), Err(FatalError::UnbalancedConditions));
    assert_eq!(stack.test_elseif(), Err(FatalError::MissingCondition));
    assert_eq!(stack.elseif(true), Err(FatalError::MissingCondition));
    assert_eq!(stack.settle(), Err(FatalError::MissingCondition));
}

#[test]
fn truncate_unwinds_to_depth() {
    let mut stack = ConditionStack::new(8);
    stack.push(true).unwrap();
    stack.push(false).unwrap();
    stack.push(false).unwrap();
    stack.truncate(1);
    assert_eq!(stack.depth(), 1);
    assert!(stack.enabled());
    stack.truncate(5);
    assert_eq!(stack.depth(), 1);
}
