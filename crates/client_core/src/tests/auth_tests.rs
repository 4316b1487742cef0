use super::*;

fn gate(username: &str, password: &str) -> CredentialGate {
    CredentialGate {
        username: username.to_string(),
        password: password.to_string(),
        ..CredentialGate::default()
    }
}

#[test]
fn accepts_only_the_exact_pair() {
    let mut accepted = gate(DEMO_USERNAME, DEMO_PASSWORD);
    assert_eq!(accepted.submit(), LoginOutcome::Accepted);
    assert!(!accepted.show_error());

    let rejected_pairs = [
        ("", ""),
        (DEMO_USERNAME, ""),
        ("", DEMO_PASSWORD),
        ("DEMO@coralmango.com", DEMO_PASSWORD),
        (DEMO_USERNAME, "Demo123"),
        (" demo@coralmango.com", DEMO_PASSWORD),
        (DEMO_USERNAME, "demo123 "),
        (DEMO_PASSWORD, DEMO_USERNAME),
    ];
    for (username, password) in rejected_pairs {
        let mut gate = gate(username, password);
        assert_eq!(
            gate.submit(),
            LoginOutcome::Rejected,
            "{username:?}/{password:?} must be rejected"
        );
        assert!(gate.show_error());
    }
}

#[test]
fn error_flag_survives_typing_until_next_submit() {
    let mut gate = gate("someone", "wrong");
    gate.submit();
    assert!(gate.show_error());

    gate.username = DEMO_USERNAME.to_string();
    gate.password.clear();
    assert!(gate.show_error());

    gate.password = DEMO_PASSWORD.to_string();
    assert_eq!(gate.submit(), LoginOutcome::Accepted);
}

#[test]
fn authentication_is_one_way() {
    let mut state = AuthState::default();
    assert!(!state.is_authenticated());

    assert!(state.authenticate());
    assert!(state.is_authenticated());

    assert!(!state.authenticate());
    assert!(state.is_authenticated());
}
