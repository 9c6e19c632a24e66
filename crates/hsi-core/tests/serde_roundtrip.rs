use hsi_core::errors::{ErrorInfo, HsiError};
use hsi_core::Compartment;

#[test]
fn errors_round_trip_json() {
    let err = HsiError::Config(
        ErrorInfo::new("stub-count-indivisible", "degree sum not divisible by arity")
            .with_context("total_stubs", 17)
            .with_context("arity", 3)
            .with_hint("adjust the degree sequence"),
    );

    let json = serde_json::to_string_pretty(&err).expect("serialize");
    let decoded: HsiError = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, err);
    assert_eq!(decoded.info().code, "stub-count-indivisible");
}

#[test]
fn compartments_round_trip_json() {
    for state in [Compartment::Susceptible, Compartment::Infected] {
        let json = serde_json::to_string(&state).expect("serialize");
        let decoded: Compartment = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, state);
    }
    assert!(Compartment::Infected.is_infected());
    assert!(!Compartment::Susceptible.is_infected());
}
