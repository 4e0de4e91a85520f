//! Command descriptors and the append-only registry.

/// Strongly-typed handler for one of the eight command signatures.
///
/// Each variant holds a callable of that signature's concrete shape, so
/// dispatch is a match rather than a cast. `FnMut` lets handlers mutate
/// captured state (device registers, counters).
pub enum Handler {
    /// `name`
    NoArgs(Box<dyn FnMut()>),
    /// `name <0|off|false|1|on|true>`
    Boolean(Box<dyn FnMut(bool)>),
    /// `name <letter>`
    Char(Box<dyn FnMut(char)>),
    /// `name <integer>`
    Int(Box<dyn FnMut(i32)>),
    /// `name <letter> <integer>`
    CharInt(Box<dyn FnMut(char, i32)>),
    /// `name "<text>"`
    Str(Box<dyn FnMut(&str)>),
    /// `name <letter> "<text>"`
    CharStr(Box<dyn FnMut(char, &str)>),
    /// `name <integer> "<text>"`
    IntStr(Box<dyn FnMut(i32, &str)>),
}

impl Handler {
    /// Required token count, command name included.
    pub fn arity(&self) -> usize {
        match self {
            Self::NoArgs(_) => 1,
            Self::Boolean(_) | Self::Char(_) | Self::Int(_) | Self::Str(_) => 2,
            Self::CharInt(_) | Self::CharStr(_) | Self::IntStr(_) => 3,
        }
    }

    /// Signature name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoArgs(_) => "noargs",
            Self::Boolean(_) => "boolean",
            Self::Char(_) => "char",
            Self::Int(_) => "int",
            Self::CharInt(_) => "char_int",
            Self::Str(_) => "string",
            Self::CharStr(_) => "char_string",
            Self::IntStr(_) => "int_string",
        }
    }
}

/// A registry entry pairing a command name with its typed handler.
///
/// Descriptors are created with the placeholder empty name and receive
/// their real name only after being linked; the placeholder never matches
/// a typed command and is skipped by help.
pub struct CommandDescriptor {
    name: String,
    handler: Handler,
}

impl CommandDescriptor {
    /// The command name (empty while still under construction).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` while the real name has not been published yet.
    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty()
    }

    pub fn handler_mut(&mut self) -> &mut Handler {
        &mut self.handler
    }
}

/// Append-only collection of command descriptors.
///
/// Entries are never removed or renamed after publication. Lookup is a
/// linear first-match scan in registration order, so a duplicate name makes
/// the later entry unreachable; keeping names unique is the registrant's
/// responsibility.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Link a descriptor carrying the placeholder name, returning its slot.
    ///
    /// This is the only mutation that must run under the scheduler's
    /// critical section; the caller publishes the name afterward.
    pub fn link_placeholder(&mut self, handler: Handler) -> usize {
        self.commands.push(CommandDescriptor {
            name: String::new(),
            handler,
        });
        self.commands.len() - 1
    }

    /// Publish the real name of a previously linked descriptor.
    pub fn publish_name(&mut self, slot: usize, name: &str) {
        if let Some(descriptor) = self.commands.get_mut(slot) {
            descriptor.name = name.to_string();
        }
    }

    /// First descriptor whose name equals `name` (case-sensitive).
    pub fn find_mut(&mut self, name: &str) -> Option<&mut CommandDescriptor> {
        self.commands.iter_mut().find(|d| d.name == name)
    }

    /// Walk descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter()
    }
}
