//! Table-driven command routing.
//!
//! Commands are looked up by `(arity, normalized name)` and gated by a minimum
//! access level. A caller below that level gets the same `None` as for an
//! unknown command, so low-privilege callers cannot enumerate commands.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

use asfutils_protocols::{AccessLevel, PluginError, Session};

/// A routed, not yet started, command handler.
pub type CommandFuture = BoxFuture<'static, Result<String, PluginError>>;

type Handler = Arc<dyn Fn(CommandInvocation) -> CommandFuture + Send + Sync>;

/// Call shape of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Only the command token.
    Bare,
    /// Command token plus at least one argument.
    WithArgs,
}

impl Arity {
    /// Classify an argument list whose first entry is the command token.
    pub fn of(args: &[String]) -> Result<Self, PluginError> {
        match args.len() {
            0 => Err(PluginError::EmptyArguments),
            1 => Ok(Arity::Bare),
            _ => Ok(Arity::WithArgs),
        }
    }
}

/// Everything a handler gets to work with.
#[derive(Clone)]
pub struct CommandInvocation {
    pub session: Arc<dyn Session>,
    pub access: AccessLevel,
    /// Normalized command name.
    pub command: String,
    /// Raw arguments, `args[0]` being the command token as typed.
    pub args: Vec<String>,
}

impl CommandInvocation {
    /// Arguments after the command token joined with `separator`.
    pub fn args_text(&self, separator: &str) -> String {
        self.args.iter().skip(1).map(String::as_str).collect::<Vec<_>>().join(separator)
    }
}

/// One row of the command table.
pub struct CommandSpec {
    pub arity: Arity,
    pub names: Vec<String>,
    pub min_access: AccessLevel,
    handler: Handler,
}

impl CommandSpec {
    pub fn new<F, Fut>(arity: Arity, names: &[&str], min_access: AccessLevel, handler: F) -> Self
    where
        F: Fn(CommandInvocation) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, PluginError>> + Send + 'static,
    {
        Self {
            arity,
            names: names.iter().map(|n| n.to_uppercase()).collect(),
            min_access,
            handler: Arc::new(move |inv| handler(inv).boxed()),
        }
    }

    fn matches(&self, arity: Arity, command: &str, access: AccessLevel) -> bool {
        self.arity == arity && access >= self.min_access && self.names.iter().any(|n| n == command)
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("arity", &self.arity)
            .field("names", &self.names)
            .field("min_access", &self.min_access)
            .finish_non_exhaustive()
    }
}

/// Ordered command table with an optional namespace prefix.
pub struct CommandRouter {
    /// Uppercased `"<NAMESPACE>."`.
    namespace: String,
    commands: Vec<CommandSpec>,
}

impl CommandRouter {
    /// Create an empty router whose commands may be written `<namespace>.<name>`.
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: format!("{}.", namespace.to_uppercase()),
            commands: Vec::new(),
        }
    }

    /// Add a command; earlier rows win on overlap.
    pub fn command<F, Fut>(
        mut self,
        arity: Arity,
        names: &[&str],
        min_access: AccessLevel,
        handler: F,
    ) -> Self
    where
        F: Fn(CommandInvocation) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, PluginError>> + Send + 'static,
    {
        self.commands.push(CommandSpec::new(arity, names, min_access, handler));
        self
    }

    /// Add a prebuilt row.
    pub fn register(&mut self, spec: CommandSpec) {
        self.commands.push(spec);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Uppercase the token and drop the namespace prefix, if any.
    pub fn normalize(&self, token: &str) -> String {
        let upper = token.to_uppercase();
        match upper.strip_prefix(&self.namespace) {
            Some(rest) => rest.to_string(),
            None => upper,
        }
    }

    /// Resolve a command to its handler.
    ///
    /// The exact uppercased token is tried first, then the token with the
    /// namespace prefix stripped. `Ok(None)` covers both unknown commands and
    /// commands the caller lacks access to.
    pub fn route(
        &self,
        session: Arc<dyn Session>,
        access: AccessLevel,
        command: &str,
        args: &[String],
    ) -> Result<Option<CommandFuture>, PluginError> {
        let arity = Arity::of(args)?;

        let exact = command.to_uppercase();
        let stripped = self.normalize(command);

        let found = self
            .lookup(arity, &exact, access)
            .map(|spec| (spec, exact.clone()))
            .or_else(|| {
                self.lookup(arity, &stripped, access)
                    .map(|spec| (spec, stripped.clone()))
            });

        Ok(found.map(|(spec, name)| {
            (spec.handler)(CommandInvocation {
                session,
                access,
                command: name,
                args: args.to_vec(),
            })
        }))
    }

    fn lookup(&self, arity: Arity, command: &str, access: AccessLevel) -> Option<&CommandSpec> {
        self.commands.iter().find(|spec| spec.matches(arity, command, access))
    }
}

impl fmt::Debug for CommandRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRouter")
            .field("namespace", &self.namespace)
            .field("commands", &self.commands)
            .finish()
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
