//! Built-in command handlers.

use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;

use asfutils_protocols::{AccessLevel, PluginManifest, Session, SessionRegistry};

use crate::langs;
use crate::response::format_static;
use crate::router::{Arity, CommandRouter};

/// Namespace operators may put in front of any command, as in `ASFU.ASFUTILS`.
pub const COMMAND_PREFIX: &str = "ASFU";

/// The router with every built-in command registered.
#[cfg_attr(not(feature = "debug-commands"), allow(unused_variables))]
pub fn builtin_router(manifest: &PluginManifest, sessions: Arc<dyn SessionRegistry>) -> CommandRouter {
    let info = manifest.to_string();

    let router = CommandRouter::new(COMMAND_PREFIX).command(
        Arity::Bare,
        &["ASFUTILS", "ASFU"],
        AccessLevel::FamilySharing,
        move |_| {
            let info = info.clone();
            async move { Ok(info) }
        },
    );

    #[cfg(feature = "debug-commands")]
    let router = debug::register(router, sessions);

    router
}

/// Run `respond` for every session matching `names` concurrently.
///
/// Empty replies are dropped and the rest joined by newlines. When nothing
/// matches, the reply says so.
pub async fn for_each_session<F, Fut>(
    sessions: &dyn SessionRegistry,
    names: &str,
    respond: F,
) -> String
where
    F: Fn(Arc<dyn Session>) -> Fut,
    Fut: Future<Output = String>,
{
    let matched = sessions.find(names);
    if matched.is_empty() {
        return format_static(&langs::bot_not_found(names));
    }

    join_all(matched.into_iter().map(respond))
        .await
        .into_iter()
        .filter(|reply| !reply.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(feature = "debug-commands")]
mod debug {
    use super::*;
    use asfutils_protocols::PluginError;

    use crate::response::format_bot;

    pub(super) fn register(router: CommandRouter, sessions: Arc<dyn SessionRegistry>) -> CommandRouter {
        router
            .command(Arity::Bare, &["TEST"], AccessLevel::Master, |inv| async move {
                Ok(respond_test(inv.session).await)
            })
            .command(Arity::WithArgs, &["TEST"], AccessLevel::Master, move |inv| {
                let sessions = sessions.clone();
                async move {
                    let names = inv.args_text(",");
                    if names.is_empty() {
                        return Err(PluginError::CommandFailed("bot names required".to_string()));
                    }
                    Ok(for_each_session(sessions.as_ref(), &names, respond_test).await)
                }
            })
    }

    async fn respond_test(session: Arc<dyn Session>) -> String {
        format_bot(session.name(), "test")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::format_bot;
    use crate::testing::{args, MockRegistry, MockSession};

    fn registry() -> Arc<MockRegistry> {
        MockRegistry::with(vec![
            MockSession::new("bot1"),
            MockSession::new("bot2"),
            MockSession::new("bot3"),
        ])
    }

    #[tokio::test]
    async fn test_info_command() {
        let manifest = PluginManifest::new("ASFUtils", "ASF Utils", "9.9.9");
        let router = builtin_router(&manifest, registry());
        let fut = router
            .route(MockSession::new("bot1"), AccessLevel::FamilySharing, "ASFU", &args(&["ASFU"]))
            .unwrap()
            .unwrap();
        assert_eq!(fut.await.unwrap(), "ASF Utils 9.9.9");
    }

    #[tokio::test]
    async fn test_for_each_session_joins_replies() {
        let registry = registry();
        let reply = for_each_session(&*registry, "bot1,bot3", |s| async move {
            format_bot(s.name(), "ok")
        })
        .await;
        assert_eq!(reply, "<bot1> ok\n<bot3> ok");
    }

    #[tokio::test]
    async fn test_for_each_session_drops_empty() {
        let registry = registry();
        let reply = for_each_session(&*registry, "bot1,bot2", |s| async move {
            if s.name() == "bot1" {
                String::new()
            } else {
                format_bot(s.name(), "ok")
            }
        })
        .await;
        assert_eq!(reply, "<bot2> ok");
    }

    #[tokio::test]
    async fn test_for_each_session_not_found() {
        let registry = registry();
        let reply = for_each_session(&*registry, "nobody", |_| async { String::new() }).await;
        assert_eq!(reply, "<ASFE> Could not find any bot named nobody!");
    }

    #[cfg(feature = "debug-commands")]
    #[tokio::test]
    async fn test_debug_test_command() {
        let manifest = PluginManifest::new("ASFUtils", "ASF Utils", "0.1.0");
        let router = builtin_router(&manifest, registry());

        let fut = router
            .route(MockSession::new("bot1"), AccessLevel::Master, "TEST", &args(&["TEST"]))
            .unwrap()
            .unwrap();
        assert_eq!(fut.await.unwrap(), "<bot1> test");

        let fut = router
            .route(
                MockSession::new("bot1"),
                AccessLevel::Owner,
                "test",
                &args(&["test", "bot2", "bot3"]),
            )
            .unwrap()
            .unwrap();
        assert_eq!(fut.await.unwrap(), "<bot2> test\n<bot3> test");

        let denied = router
            .route(MockSession::new("bot1"), AccessLevel::Operator, "TEST", &args(&["TEST"]))
            .unwrap();
        assert!(denied.is_none());
    }
}
