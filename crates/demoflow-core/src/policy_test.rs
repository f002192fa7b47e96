use super::*;

#[test]
fn test_threshold_follows_days_back() {
    assert_eq!(RandomValidationPolicy::new(8).threshold(), 2);
    assert_eq!(RandomValidationPolicy::new(30).threshold(), 8);
    assert_eq!(RandomValidationPolicy::new(4).threshold(), 1);
}

#[test]
fn test_zero_threshold_always_takes_validation() {
    // days_back = 1 rounds to a zero threshold: the only possible draw is 0
    let mut policy = RandomValidationPolicy::new(1);
    for run_index in 1..20 {
        assert!(policy.include_validation(run_index));
    }
}

#[test]
fn test_seeded_policy_is_reproducible() {
    let mut a = RandomValidationPolicy::with_seed(8, 42);
    let mut b = RandomValidationPolicy::with_seed(8, 42);

    let draws_a: Vec<bool> = (1..50).map(|i| a.include_validation(i)).collect();
    let draws_b: Vec<bool> = (1..50).map(|i| b.include_validation(i)).collect();

    assert_eq!(draws_a, draws_b);
}

#[test]
fn test_policy_takes_both_branches_eventually() {
    let mut policy = RandomValidationPolicy::with_seed(8, 7);

    let draws: Vec<bool> = (1..200).map(|i| policy.include_validation(i)).collect();
    assert!(draws.iter().any(|&d| d));
    assert!(draws.iter().any(|&d| !d));
}

#[test]
fn test_closures_are_policies() {
    let mut always = |_: u32| true;
    let mut never = |_: u32| false;
    let mut odd_days = |run_index: u32| run_index % 2 == 1;

    assert!(ValidationPolicy::include_validation(&mut always, 1));
    assert!(!ValidationPolicy::include_validation(&mut never, 1));
    assert!(ValidationPolicy::include_validation(&mut odd_days, 3));
    assert!(!ValidationPolicy::include_validation(&mut odd_days, 4));
}
