use super::*;
use crate::testing::{args, MockSession};

fn session() -> Arc<dyn Session> {
    MockSession::new("bot1")
}

fn router() -> CommandRouter {
    CommandRouter::new("ASFU")
        .command(Arity::Bare, &["ASFUTILS", "ASFU"], AccessLevel::FamilySharing, |_| async {
            Ok("ASF Utils 0.1.0".to_string())
        })
        .command(Arity::Bare, &["STATUS"], AccessLevel::Master, |inv| async move {
            Ok(format!("status of {}", inv.session.name()))
        })
        .command(Arity::WithArgs, &["STATUS"], AccessLevel::Master, |inv| async move {
            Ok(format!("status of {}", inv.args_text(",")))
        })
}

async fn run(router: &CommandRouter, access: AccessLevel, argv: &[&str]) -> Option<String> {
    let argv = args(argv);
    let command = argv.first().cloned().unwrap_or_default();
    let fut = router.route(session(), access, &command, &argv).unwrap();
    match fut {
        Some(fut) => Some(fut.await.unwrap()),
        None => None,
    }
}

#[test]
fn test_arity_of() {
    assert!(matches!(Arity::of(&[]), Err(PluginError::EmptyArguments)));
    assert_eq!(Arity::of(&args(&["A"])).unwrap(), Arity::Bare);
    assert_eq!(Arity::of(&args(&["A", "b", "c"])).unwrap(), Arity::WithArgs);
}

#[test]
fn test_normalize() {
    let router = router();
    assert_eq!(router.normalize("asfutils"), "ASFUTILS");
    assert_eq!(router.normalize("asfu.asfutils"), "ASFUTILS");
    assert_eq!(router.normalize("ASFU.Status"), "STATUS");
    assert_eq!(router.normalize("other.status"), "OTHER.STATUS");
}

#[test]
fn test_zero_arguments_is_contract_error() {
    let router = router();
    for command in ["", "ASFUTILS", "unknown"] {
        let result = router.route(session(), AccessLevel::Owner, command, &[]);
        assert!(matches!(result, Err(PluginError::EmptyArguments)));
    }
}

#[tokio::test]
async fn test_case_insensitive_match() {
    let router = router();
    assert_eq!(
        run(&router, AccessLevel::FamilySharing, &["asfutils"]).await.as_deref(),
        Some("ASF Utils 0.1.0")
    );
    assert_eq!(
        run(&router, AccessLevel::FamilySharing, &["Asfu"]).await.as_deref(),
        Some("ASF Utils 0.1.0")
    );
}

#[tokio::test]
async fn test_namespace_prefix_is_equivalent() {
    let router = router();
    let plain = run(&router, AccessLevel::Operator, &["ASFUTILS"]).await;
    let prefixed = run(&router, AccessLevel::Operator, &["ASFU.ASFUTILS"]).await;
    assert!(plain.is_some());
    assert_eq!(plain, prefixed);
}

#[tokio::test]
async fn test_insufficient_access_is_unrecognized() {
    let router = router();
    assert!(run(&router, AccessLevel::Guest, &["ASFUTILS"]).await.is_none());
    assert!(run(&router, AccessLevel::Operator, &["STATUS"]).await.is_none());
}

#[tokio::test]
async fn test_unknown_command_returns_none() {
    let router = router();
    assert!(run(&router, AccessLevel::Owner, &["NOPE"]).await.is_none());
    assert!(run(&router, AccessLevel::Owner, &["ASFU.NOPE"]).await.is_none());
}

#[tokio::test]
async fn test_arity_selects_row() {
    let router = router();
    assert_eq!(
        run(&router, AccessLevel::Master, &["status"]).await.as_deref(),
        Some("status of bot1")
    );
    assert_eq!(
        run(&router, AccessLevel::Master, &["status", "a", "b"]).await.as_deref(),
        Some("status of a,b")
    );
    // ASFUTILS has no WithArgs row.
    assert!(run(&router, AccessLevel::Owner, &["asfutils", "extra"]).await.is_none());
}

#[tokio::test]
async fn test_first_sufficient_row_wins() {
    let router = CommandRouter::new("X")
        .command(Arity::Bare, &["PING"], AccessLevel::Owner, |_| async { Ok("owner".to_string()) })
        .command(Arity::Bare, &["PING"], AccessLevel::Guest, |_| async { Ok("guest".to_string()) });

    assert_eq!(run(&router, AccessLevel::Owner, &["ping"]).await.as_deref(), Some("owner"));
    assert_eq!(run(&router, AccessLevel::Operator, &["ping"]).await.as_deref(), Some("guest"));
}

#[tokio::test]
async fn test_invocation_carries_normalized_name() {
    let router = CommandRouter::new("ASFU").command(
        Arity::Bare,
        &["ECHO"],
        AccessLevel::Guest,
        |inv| async move { Ok(format!("{}|{}", inv.command, inv.args[0])) },
    );
    assert_eq!(
        run(&router, AccessLevel::Guest, &["asfu.echo"]).await.as_deref(),
        Some("ECHO|asfu.echo")
    );
}

#[test]
fn test_len_and_register() {
    let mut router = CommandRouter::new("ASFU");
    assert!(router.is_empty());
    router.register(CommandSpec::new(Arity::Bare, &["a"], AccessLevel::Guest, |_| async {
        Ok(String::new())
    }));
    assert_eq!(router.len(), 1);
}
