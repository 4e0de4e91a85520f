//! Dispatch, argument validation, and the help walk.

use ember_platform::{CriticalGuard, MessageSink, PriorityGuard, Scheduler};
use ember_types::{ConsoleConfig, EmberError};

use crate::registry::{CommandRegistry, Handler};
use crate::tokenizer::{TokenSet, find_tokens};

/// Names printed per help output line, bounding single-write size on the
/// output channel.
const HELP_GROUP: usize = 5;

/// The command interpreter.
///
/// Owns the registry and borrows its collaborators. Registration is meant
/// for the initialization phase; afterward the registry is read-only and
/// `parse_line`/`help` need no further synchronization. A handler may run
/// arbitrarily long -- the interpreter imposes no timeout or cancellation,
/// so a misbehaving handler starves the console task.
pub struct Interpreter<'a> {
    config: ConsoleConfig,
    registry: CommandRegistry,
    sched: &'a dyn Scheduler,
    sink: &'a dyn MessageSink,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with an empty registry.
    pub fn new(
        config: ConsoleConfig,
        sched: &'a dyn Scheduler,
        sink: &'a dyn MessageSink,
    ) -> Self {
        Self {
            config,
            registry: CommandRegistry::new(),
            sched,
            sink,
        }
    }

    // -- Registration surface, one function per signature --

    /// Register a command taking no arguments.
    pub fn add_command_noargs(&mut self, name: &str, handler: impl FnMut() + 'static) {
        self.add_command(name, Handler::NoArgs(Box::new(handler)));
    }

    /// Register a command taking one boolean (`0|off|false` / `1|on|true`).
    pub fn add_command_boolean(&mut self, name: &str, handler: impl FnMut(bool) + 'static) {
        self.add_command(name, Handler::Boolean(Box::new(handler)));
    }

    /// Register a command taking one alphabetic character.
    pub fn add_command_char(&mut self, name: &str, handler: impl FnMut(char) + 'static) {
        self.add_command(name, Handler::Char(Box::new(handler)));
    }

    /// Register a command taking one signed integer.
    pub fn add_command_int(&mut self, name: &str, handler: impl FnMut(i32) + 'static) {
        self.add_command(name, Handler::Int(Box::new(handler)));
    }

    /// Register a command taking a character and an integer.
    pub fn add_command_char_int(&mut self, name: &str, handler: impl FnMut(char, i32) + 'static) {
        self.add_command(name, Handler::CharInt(Box::new(handler)));
    }

    /// Register a command taking one quoted string.
    pub fn add_command_string(&mut self, name: &str, handler: impl FnMut(&str) + 'static) {
        self.add_command(name, Handler::Str(Box::new(handler)));
    }

    /// Register a command taking a character and a quoted string.
    pub fn add_command_char_string(
        &mut self,
        name: &str,
        handler: impl FnMut(char, &str) + 'static,
    ) {
        self.add_command(name, Handler::CharStr(Box::new(handler)));
    }

    /// Register a command taking an integer and a quoted string.
    pub fn add_command_int_string(
        &mut self,
        name: &str,
        handler: impl FnMut(i32, &str) + 'static,
    ) {
        self.add_command(name, Handler::IntStr(Box::new(handler)));
    }

    fn add_command(&mut self, name: &str, handler: Handler) {
        log::debug!("registering {} command '{name}'", handler.kind());
        // Only the list append runs under the critical section. The name is
        // published afterward; a reader that observes the placeholder skips
        // the entry.
        let slot = {
            let _cs = CriticalGuard::enter(self.sched);
            self.registry.link_placeholder(handler)
        };
        self.registry.publish_name(slot, name);
    }

    // -- Runtime surface --

    /// Process one input line: tokenize, match the first token against the
    /// registry, validate arguments, and run the handler.
    ///
    /// Emits at most one diagnostic and runs at most one handler. A blank
    /// line, or any line while the registry is empty, is a silent no-op.
    pub fn parse_line(&mut self, line: &str) {
        if self.registry.is_empty() {
            return;
        }
        let tokens = find_tokens(line, self.config.quote_delimiter, self.config.max_row_length);
        let Some(name) = tokens.get(0) else {
            return;
        };
        let delimiter = self.config.quote_delimiter;
        match self.registry.find_mut(name) {
            Some(descriptor) => {
                if let Err(e) = invoke(descriptor.handler_mut(), &tokens, delimiter) {
                    self.sink.write_line(&e.to_string());
                }
            },
            None => {
                log::debug!("no descriptor matches '{name}'");
                self.sink.write_line(&EmberError::UnknownCommand.to_string());
            },
        }
    }

    /// List registered command names, five per line, in registration order.
    ///
    /// Runs at the configured elevated priority to avoid interleaving with
    /// other console output, and pauses between groups to pace the output
    /// channel. Descriptors still carrying the placeholder name are skipped.
    pub fn help(&self) {
        self.sink.write_line(">>");
        if self.registry.is_empty() {
            return;
        }
        let _prio = PriorityGuard::raise(self.sched, self.config.help_priority);
        let mut group: Vec<&str> = Vec::with_capacity(HELP_GROUP);
        for descriptor in self.registry.iter() {
            if descriptor.is_placeholder() {
                continue;
            }
            group.push(descriptor.name());
            if group.len() == HELP_GROUP {
                self.sink.write_line(&format!("cmd> {}", group.join(" ")));
                group.clear();
                self.sched.delay_ms(self.config.help_group_delay_ms);
            }
        }
        if !group.is_empty() {
            self.sink.write_line(&format!("cmd> {}", group.join(" ")));
        }
    }
}

// ---------------------------------------------------------------------------
// Argument validation
// ---------------------------------------------------------------------------

/// Validate tokens against the handler's signature and run it.
///
/// The token count must match the signature's arity exactly before any
/// value is inspected. Parameters are then checked left to right; the first
/// failure reports its 1-based position and the handler does not run.
fn invoke(handler: &mut Handler, tokens: &TokenSet<'_>, delimiter: char) -> Result<(), EmberError> {
    if tokens.count() != handler.arity() {
        return Err(EmberError::BadParameterCount);
    }
    match handler {
        Handler::NoArgs(h) => h(),
        Handler::Boolean(h) => {
            h(parse_boolean(param(tokens, 1)).ok_or(EmberError::ParameterParse(1))?);
        },
        Handler::Char(h) => {
            h(parse_letter(param(tokens, 1)).ok_or(EmberError::ParameterParse(1))?);
        },
        Handler::Int(h) => {
            h(parse_integer(param(tokens, 1)).ok_or(EmberError::ParameterParse(1))?);
        },
        Handler::CharInt(h) => {
            let c = parse_letter(param(tokens, 1)).ok_or(EmberError::ParameterParse(1))?;
            let n = parse_integer(param(tokens, 2)).ok_or(EmberError::ParameterParse(2))?;
            h(c, n);
        },
        Handler::Str(h) => {
            h(parse_quoted(param(tokens, 1), delimiter).ok_or(EmberError::ParameterParse(1))?);
        },
        Handler::CharStr(h) => {
            let c = parse_letter(param(tokens, 1)).ok_or(EmberError::ParameterParse(1))?;
            let s = parse_quoted(param(tokens, 2), delimiter).ok_or(EmberError::ParameterParse(2))?;
            h(c, s);
        },
        Handler::IntStr(h) => {
            let n = parse_integer(param(tokens, 1)).ok_or(EmberError::ParameterParse(1))?;
            let s = parse_quoted(param(tokens, 2), delimiter).ok_or(EmberError::ParameterParse(2))?;
            h(n, s);
        },
    }
    Ok(())
}

/// Stored token at `position`; the arity check guarantees presence, and an
/// empty fallback fails every parameter check anyway.
fn param<'t>(tokens: &TokenSet<'t>, position: usize) -> &'t str {
    tokens.get(position).unwrap_or("")
}

/// Case-sensitive boolean words.
fn parse_boolean(token: &str) -> Option<bool> {
    match token {
        "0" | "off" | "false" => Some(false),
        "1" | "on" | "true" => Some(true),
        _ => None,
    }
}

/// Exactly one alphabetic character.
fn parse_letter(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(c),
        _ => None,
    }
}

/// Optional leading sign followed by one or more decimal digits; anything
/// else (including an `i32` overflow) is a parse failure.
fn parse_integer(token: &str) -> Option<i32> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Strip the surrounding quote delimiters. A token of exactly two
/// delimiters yields the empty string.
fn parse_quoted(token: &str, delimiter: char) -> Option<&str> {
    let width = delimiter.len_utf8();
    if token.len() < 2 * width || !token.starts_with(delimiter) || !token.ends_with(delimiter) {
        return None;
    }
    Some(&token[width..token.len() - width])
}
