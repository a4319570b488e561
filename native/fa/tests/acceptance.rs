//! End-to-end scenarios against the public DFA API.

use fa::{DFA, DfaDescription, DfaError, State};

/// States {A, B}, alphabet {0, 1}: accepts strings with an odd number of 1s.
fn odd_ones() -> DFA {
    let mut dfa = DFA::new();
    assert!(dfa.add_state("A").is_ok());
    assert!(dfa.add_state("B").is_ok());
    dfa.add_sigma('0');
    dfa.add_sigma('1');
    assert!(dfa.set_start("A").is_ok());
    assert!(dfa.set_final("B").is_ok());
    assert!(dfa.add_transition("A", "A", '0').is_ok());
    assert!(dfa.add_transition("A", "B", '1').is_ok());
    assert!(dfa.add_transition("B", "B", '0').is_ok());
    assert!(dfa.add_transition("B", "A", '1').is_ok());
    dfa
}

#[test]
fn odd_ones_acceptance() {
    let mut dfa = odd_ones();
    assert!(dfa.accepts("1"));
    assert!(!dfa.accepts("11"));
    assert!(!dfa.accepts("0"));
    assert!(!dfa.accepts("e"));
    assert!(dfa.accepts("10101"));

    assert!(dfa.set_final("A").is_ok());
    assert!(dfa.accepts("e"));
}

#[test]
fn odd_ones_rendering() {
    let expected = concat!(
        "Q = { A B }\n",
        "Sigma = { 0 1 }\n",
        "delta =\n",
        "\t0\t1\t\n",
        "A\tA\tB\t\n",
        "B\tB\tA\t\n",
        "q0 = A\n",
        "F = { B }\n",
    );
    assert_eq!(odd_ones().to_string(), expected);
}

#[test]
fn swapped_odd_ones() {
    let dfa = odd_ones();
    let swapped = dfa.swap('0', '1').unwrap();

    let edges: Vec<(&str, char, &str)> = swapped
        .transitions()
        .map(|(src, symbol, dst)| (src.name(), symbol, dst.name()))
        .collect();
    assert_eq!(
        edges,
        vec![("A", '1', "A"), ("A", '0', "B"), ("B", '1', "B"), ("B", '0', "A")]
    );
    assert_eq!(swapped.accepts("1"), dfa.accepts("0"));
    assert_eq!(swapped.accepts("0"), dfa.accepts("1"));

    // Rows stay in alphabet order, so the destinations trade columns.
    let expected = concat!(
        "Q = { A B }\n",
        "Sigma = { 0 1 }\n",
        "delta =\n",
        "\t0\t1\t\n",
        "A\tB\tA\t\n",
        "B\tA\tB\t\n",
        "q0 = A\n",
        "F = { B }\n",
    );
    assert_eq!(swapped.to_string(), expected);
}

#[test]
fn swap_twice_restores_rendering() {
    let dfa = odd_ones();
    let twice = dfa.swap('0', '1').unwrap().swap('0', '1').unwrap();
    assert_eq!(twice.to_string(), dfa.to_string());
}

#[test]
fn swap_with_unknown_symbol() {
    let dfa = odd_ones();
    assert!(matches!(dfa.swap('0', '2'), Err(DfaError::UnknownSymbol('2'))));
    assert_eq!(dfa.to_string(), odd_ones().to_string());
}

#[test]
fn duplicate_state_is_rejected() {
    let mut dfa = DFA::new();
    assert!(dfa.add_state("q").is_ok());
    assert!(dfa.add_state("q").is_err());
    assert_eq!(dfa.num_states(), 1);
}

#[test]
fn lookups() {
    let dfa = odd_ones();
    assert_eq!(dfa.get_state("B").map(State::name), Some("B"));
    assert!(dfa.get_state("Z").is_none());
    assert_eq!(dfa.start_state().map(State::name), Some("A"));
    assert_eq!(
        dfa.final_states().map(State::name).collect::<Vec<_>>(),
        vec!["B"]
    );
    assert!(!dfa.is_empty());
}

#[test]
fn transitions_added_after_queries() {
    let mut dfa = DFA::new();
    dfa.add_sigma('a');
    dfa.add_state("s").unwrap();
    dfa.set_start("s").unwrap();
    dfa.set_final("s").unwrap();
    assert!(!dfa.accepts("a"));

    dfa.add_transition("s", "s", 'a').unwrap();
    assert!(dfa.accepts("a"));
    assert!(dfa.accepts("aaaa"));
}

#[test]
fn literal_e_is_always_epsilon() {
    // "e" is decided on the start state even when 'e' is a real symbol.
    let mut dfa = DFA::new();
    dfa.add_sigma('e');
    dfa.add_state("s").unwrap();
    dfa.add_state("t").unwrap();
    dfa.set_start("s").unwrap();
    dfa.set_final("t").unwrap();
    dfa.add_transition("s", "t", 'e').unwrap();

    assert!(!dfa.accepts("e"));
    assert!(!dfa.is_final("s"));
    assert_eq!(dfa.transition("s", 'e').map(State::name), Some("t"));
}

#[test]
fn description_round_trip_preserves_swap_behavior() {
    let dfa = odd_ones();
    let rebuilt = DfaDescription::from(&dfa).build().unwrap();
    assert_eq!(
        rebuilt.swap('0', '1').unwrap().to_string(),
        dfa.swap('0', '1').unwrap().to_string()
    );
}
