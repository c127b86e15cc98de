//! Tier-dependent menu composition.
//!
//! Pure presentation over the same tier classification authorization uses;
//! both go through [`Dispatcher::resolve_tier`](super::Dispatcher::resolve_tier),
//! so the menu can never advertise a command its reader is not allowed to run.

use glossa_core::Tier;

const BASE_SECTION: &str = "\
Commands:
/start - Greeting and quick help
/menu - Show this command menu
/add <word> <meaning...> - Submit a word and a candidate meaning
/search <word> - Look up a word and its meanings";

const ADMIN_SECTION: &str = "\
Admin commands:
/word_list - List all words
/verify <word> <meaning...> - Mark a meaning as verified
/remove_word <word> - Remove a word and all its meanings
/remove_meaning <word> <meaning...> - Remove a specific meaning";

const OPERATOR_SECTION: &str = "\
Operator commands:
/add_admin <caller-id> - Grant admin privilege
/remove_admin <caller-id> - Revoke admin privilege
/admin_list - List all admins";

/// Compose the command menu visible to a caller of the given tier.
#[must_use]
pub fn compose(tier: Tier) -> String {
    let mut sections = vec![BASE_SECTION];

    if tier >= Tier::Admin {
        sections.push(ADMIN_SECTION);
    }

    if tier >= Tier::Operator {
        sections.push(OPERATOR_SECTION);
    }

    sections.join("\n\n")
}
