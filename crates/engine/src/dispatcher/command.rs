//! Command table and argument parsing.
//!
//! Every command name maps to one [`CommandKind`] carrying its minimum
//! permission tier and usage hint; [`CommandKind::parse_args`] turns raw
//! argument tokens into a validated [`Command`]. Keeping the tier in one
//! table (instead of per-handler checks) is what guarantees authorization
//! and menu composition can never disagree.

use glossa_core::{CallerId, Term, Tier};

/// A command name resolved against the command table, before argument
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Start,
    Add,
    Search,
    WordList,
    Menu,
    Verify,
    RemoveWord,
    RemoveMeaning,
    AddAdmin,
    RemoveAdmin,
    AdminList,
}

/// A fully parsed command with validated arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Greeting and quick help.
    Start,
    /// Submit a candidate meaning under a word.
    Add { word: Term, meaning: String },
    /// Look up a word and its meanings.
    Search { word: Term },
    /// List all words.
    WordList,
    /// Show the command menu for the caller's tier.
    Menu,
    /// Mark a meaning as verified.
    Verify { word: Term, meaning: String },
    /// Remove a word and all its meanings.
    RemoveWord { word: Term },
    /// Remove a specific meaning.
    RemoveMeaning { word: Term, meaning: String },
    /// Grant admin privilege.
    AddAdmin { target: CallerId },
    /// Revoke admin privilege.
    RemoveAdmin { target: CallerId },
    /// List all admins.
    AdminList,
}

/// Why a command's arguments were rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentRejection {
    /// Too few tokens for the command's argument shape.
    Missing {
        /// Usage hint for the command.
        usage: &'static str,
    },
    /// A token was present but malformed.
    Invalid {
        /// What was wrong with the token.
        detail: String,
    },
}

impl CommandKind {
    /// Resolve a command name against the command table.
    ///
    /// A single leading slash is tolerated, so transports may pass the
    /// command token verbatim.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix('/').unwrap_or(name);
        match name {
            "start" => Some(Self::Start),
            "add" => Some(Self::Add),
            "search" => Some(Self::Search),
            "word_list" => Some(Self::WordList),
            "menu" => Some(Self::Menu),
            "verify" => Some(Self::Verify),
            "remove_word" => Some(Self::RemoveWord),
            "remove_meaning" => Some(Self::RemoveMeaning),
            "add_admin" => Some(Self::AddAdmin),
            "remove_admin" => Some(Self::RemoveAdmin),
            "admin_list" => Some(Self::AdminList),
            _ => None,
        }
    }

    /// The canonical name of this command.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Add => "add",
            Self::Search => "search",
            Self::WordList => "word_list",
            Self::Menu => "menu",
            Self::Verify => "verify",
            Self::RemoveWord => "remove_word",
            Self::RemoveMeaning => "remove_meaning",
            Self::AddAdmin => "add_admin",
            Self::RemoveAdmin => "remove_admin",
            Self::AdminList => "admin_list",
        }
    }

    /// The minimum tier a caller needs to run this command.
    #[must_use]
    pub const fn required_tier(self) -> Tier {
        match self {
            Self::Start | Self::Add | Self::Search | Self::Menu => Tier::User,
            Self::WordList | Self::Verify | Self::RemoveWord | Self::RemoveMeaning => Tier::Admin,
            Self::AddAdmin | Self::RemoveAdmin | Self::AdminList => Tier::Operator,
        }
    }

    /// Usage hint for this command.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Start => "/start",
            Self::Add => "/add <word> <meaning...>",
            Self::Search => "/search <word>",
            Self::WordList => "/word_list",
            Self::Menu => "/menu",
            Self::Verify => "/verify <word> <meaning...>",
            Self::RemoveWord => "/remove_word <word>",
            Self::RemoveMeaning => "/remove_meaning <word> <meaning...>",
            Self::AddAdmin => "/add_admin <caller-id>",
            Self::RemoveAdmin => "/remove_admin <caller-id>",
            Self::AdminList => "/admin_list",
        }
    }

    /// Validate argument tokens and build the parsed [`Command`].
    ///
    /// Free-text meaning fields join the remaining tokens with single
    /// spaces; there is no upper bound on their count. Extra tokens after
    /// a no-argument command are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentRejection::Missing`] when too few tokens are
    /// supplied and [`ArgumentRejection::Invalid`] when a token is present
    /// but malformed (unparsable caller id, empty word).
    pub fn parse_args(self, args: &[&str]) -> Result<Command, ArgumentRejection> {
        match self {
            Self::Start => Ok(Command::Start),
            Self::WordList => Ok(Command::WordList),
            Self::Menu => Ok(Command::Menu),
            Self::AdminList => Ok(Command::AdminList),
            Self::Add => {
                let (word, meaning) = self.word_and_text(args)?;
                Ok(Command::Add { word, meaning })
            }
            Self::Verify => {
                let (word, meaning) = self.word_and_text(args)?;
                Ok(Command::Verify { word, meaning })
            }
            Self::RemoveMeaning => {
                let (word, meaning) = self.word_and_text(args)?;
                Ok(Command::RemoveMeaning { word, meaning })
            }
            Self::Search => Ok(Command::Search {
                word: self.word(args)?,
            }),
            Self::RemoveWord => Ok(Command::RemoveWord {
                word: self.word(args)?,
            }),
            Self::AddAdmin => Ok(Command::AddAdmin {
                target: self.caller_id(args)?,
            }),
            Self::RemoveAdmin => Ok(Command::RemoveAdmin {
                target: self.caller_id(args)?,
            }),
        }
    }

    /// Parse a single word argument.
    fn word(self, args: &[&str]) -> Result<Term, ArgumentRejection> {
        let token = args.first().ok_or(ArgumentRejection::Missing {
            usage: self.usage(),
        })?;

        Term::parse(token).map_err(|e| ArgumentRejection::Invalid {
            detail: e.to_string(),
        })
    }

    /// Parse a word argument followed by free text joined from the
    /// remaining tokens.
    fn word_and_text(self, args: &[&str]) -> Result<(Term, String), ArgumentRejection> {
        let (head, rest) = args.split_first().ok_or(ArgumentRejection::Missing {
            usage: self.usage(),
        })?;

        let word = Term::parse(head).map_err(|e| ArgumentRejection::Invalid {
            detail: e.to_string(),
        })?;

        let text = rest.join(" ");
        let text = text.trim();
        if text.is_empty() {
            return Err(ArgumentRejection::Missing {
                usage: self.usage(),
            });
        }

        Ok((word, text.to_owned()))
    }

    /// Parse a caller identity argument.
    fn caller_id(self, args: &[&str]) -> Result<CallerId, ArgumentRejection> {
        let token = args.first().ok_or(ArgumentRejection::Missing {
            usage: self.usage(),
        })?;

        token.parse().map_err(
            |e: glossa_core::CallerIdError| ArgumentRejection::Invalid {
                detail: e.to_string(),
            },
        )
    }
}
