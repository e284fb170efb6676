//! Callback-token codec for stateless menu navigation.
//!
//! A token is the literal prefix `btn` followed by colon-separated node-id
//! segments, e.g. `btn:5:12`. The whole root-to-node path rides inside the
//! inline keyboard's callback data, so the bot holds no session state
//! between presses. The reserved segment `back` resets navigation to the
//! root menu no matter where it appears.
//!
//! Tokens grow by one segment per selection and are never compacted; the
//! transport's callback-payload size limit (64 bytes at Telegram) is the
//! effective depth bound.

use super::model::ButtonId;

/// Leading literal every token starts with.
pub const TOKEN_PREFIX: &str = "btn";

/// Reserved segment meaning "return to the root menu".
pub const BACK_SEGMENT: &str = "back";

const SEPARATOR: char = ':';

/// Decoded navigation state carried by a callback token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    /// The reserved `back` segment was present; show the root menu.
    Back,
    /// Ordered segments from root to the selected node. Empty means the
    /// root menu. Segments stay raw strings here: resolving them against
    /// real nodes is the traversal's job, not the codec's.
    Segments(Vec<String>),
}

/// Appends a freshly selected node id to an existing token.
pub fn encode(token: &str, id: ButtonId) -> String {
    format!("{token}{SEPARATOR}{id}")
}

/// Token of the root menu.
pub fn root_token() -> String {
    TOKEN_PREFIX.to_string()
}

/// Token carried by the persistent back button.
pub fn back_token() -> String {
    format!("{TOKEN_PREFIX}{SEPARATOR}{BACK_SEGMENT}")
}

/// Splits a token on the separator, drops the leading prefix literal and
/// returns the remaining segments in original order.
pub fn decode(token: &str) -> Path {
    let segments: Vec<String> = token.split(SEPARATOR).skip(1).map(str::to_string).collect();
    if segments.iter().any(|segment| segment == BACK_SEGMENT) {
        Path::Back
    } else {
        Path::Segments(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_prefix_decodes_to_empty_path() {
        assert_eq!(decode("btn"), Path::Segments(Vec::new()));
    }

    #[test]
    fn segments_keep_their_order() {
        assert_eq!(
            decode("btn:5:12"),
            Path::Segments(vec!["5".to_string(), "12".to_string()])
        );
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let ids: [ButtonId; 3] = [5, 12, 7];
        let token = ids.iter().fold(root_token(), |token, id| encode(&token, *id));
        assert_eq!(token, "btn:5:12:7");

        let expected: Vec<String> = ids.iter().map(ToString::to_string).collect();
        assert_eq!(decode(&token), Path::Segments(expected));
    }

    #[test]
    fn back_anywhere_wins_over_everything_else() {
        assert_eq!(decode("btn:back"), Path::Back);
        assert_eq!(decode("btn:1:back"), Path::Back);
        assert_eq!(decode("btn:back:7"), Path::Back);
    }

    #[test]
    fn malformed_segments_survive_decoding() {
        // Validation happens during traversal, never here.
        assert_eq!(
            decode("btn:abc:"),
            Path::Segments(vec!["abc".to_string(), String::new()])
        );
    }

    #[test]
    fn back_token_is_back() {
        assert_eq!(decode(&back_token()), Path::Back);
    }
}
