//! Composite profile built from every non-advice topic.

use crate::session::Session;
use crate::topic::TopicKind;

/// Separator between topic sections in the composite profile.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Builds the composite profile consumed by the advice topic.
///
/// Topics are visited in declared order, the advice topic itself and topics
/// with an empty contribution are skipped, and each remaining topic is
/// rendered as `"{identifier}:\n{contribution}"`.
///
/// An empty string means "not enough data yet", never a valid profile.
pub fn aggregate(session: &Session) -> String {
    TopicKind::ALL
        .into_iter()
        .filter(|kind| !kind.is_advice())
        .filter_map(|kind| {
            let contribution = session.contribution(kind);
            (!contribution.is_empty()).then(|| format!("{}:\n{}", kind.title(), contribution))
        })
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}

/// True when at least one non-advice topic has contributed.
pub fn has_profile(session: &Session) -> bool {
    TopicKind::ALL
        .into_iter()
        .filter(|kind| !kind.is_advice())
        .any(|kind| !session.contribution(kind).is_empty())
}
