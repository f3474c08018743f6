//! Search page markup adapter
//!
//! Each pronunciation on a search page is an element whose id starts with
//! `play_` and whose `onclick` handler looks like
//! `Play(786,'OTgzNjI5NC8zOS8...','...',false,...);return false;`.
//! The second argument is the base64-encoded path of the mp3 below the
//! audio host's `/mp3/` directory.
//!
//! This is an undocumented convention of a third-party page and may change
//! at any time.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use scraper::{Html, Selector};
use thiserror::Error;

/// Matches both the `span` and the `div` generations of the markup
const MARKER_SELECTOR: &str = r#"[id^="play_"]"#;

const HANDLER_ATTR: &str = "onclick";

const CALL_PREFIX: &str = "Play(";

/// Markup extraction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("no element with an id starting with 'play_'")]
    MissingMarker,

    #[error("marker element has no onclick handler")]
    MissingHandler,

    #[error("no audio path argument in handler `{0}`")]
    MissingArgument(String),

    #[error("audio path is not valid base64: {0}")]
    InvalidBase64(String),

    #[error("decoded audio path is not valid UTF-8")]
    InvalidUtf8,
}

impl MarkupError {
    /// The page simply has no pronunciation, as opposed to an unexpected layout
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::MissingMarker | Self::MissingHandler)
    }
}

/// Find the first pronunciation on a search page and return its decoded
/// audio path, e.g. `9836294/39/9836294_39_142499.mp3`.
pub fn extract_audio_path(html: &str) -> Result<String, MarkupError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(MARKER_SELECTOR).expect("marker selector is valid CSS");

    let marker = document
        .select(&selector)
        .next()
        .ok_or(MarkupError::MissingMarker)?;

    let handler = marker
        .value()
        .attr(HANDLER_ATTR)
        .ok_or(MarkupError::MissingHandler)?;

    decode_audio_path(audio_path_argument(handler)?)
}

/// Pull the encoded audio path (second call argument) out of a handler
pub fn audio_path_argument(handler: &str) -> Result<&str, MarkupError> {
    let call = handler.split(';').next().unwrap_or_default().trim();
    let args = call.strip_prefix(CALL_PREFIX).unwrap_or(call);
    let args = args.strip_suffix(')').unwrap_or(args);

    args.split(',')
        .nth(1)
        .map(|arg| arg.trim().trim_matches(|c| c == '\'' || c == '"'))
        .filter(|arg| !arg.is_empty())
        .ok_or_else(|| MarkupError::MissingArgument(handler.to_string()))
}

/// Decode a base64 audio path argument
pub fn decode_audio_path(encoded: &str) -> Result<String, MarkupError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| MarkupError::InvalidBase64(e.to_string()))?;

    String::from_utf8(bytes).map_err(|_| MarkupError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HANDLER: &str = "Play(786,'OTgzNjI5NC8zOS85ODM2Mjk0XzM5XzE0MjQ5OS5tcDM=','OTgzNjI5NC8zOS85ODM2Mjk0XzM5XzE0MjQ5OS5vZ2c=',false,'','','h');return false;";

    fn page(body: &str) -> String {
        format!("<!DOCTYPE html><html><head><title>hello</title></head><body>{}</body></html>", body)
    }

    #[test]
    fn extracts_from_div_marker() {
        let html = page(&format!(
            r#"<ul><li><div class="play" id="play_9836294" onclick="{}"></div></li></ul>"#,
            HANDLER
        ));

        assert_eq!(
            extract_audio_path(&html).unwrap(),
            "9836294/39/9836294_39_142499.mp3"
        );
    }

    #[test]
    fn extracts_from_span_marker() {
        let html = page(&format!(r#"<span id="play_1" onclick="{}">play</span>"#, HANDLER));
        assert_eq!(
            extract_audio_path(&html).unwrap(),
            "9836294/39/9836294_39_142499.mp3"
        );
    }

    #[test]
    fn uses_first_marker() {
        let html = page(
            r#"<div id="play_1" onclick="Play(1,'dGVzdC9oZWxsby5tcDM=','');"></div>
               <div id="play_2" onclick="Play(2,'dGVzdC9oZWxsb19lbi5tcDM=','');"></div>"#,
        );
        assert_eq!(extract_audio_path(&html).unwrap(), "test/hello.mp3");
    }

    #[test]
    fn ignores_unrelated_ids() {
        let html = page(r#"<div id="player" onclick="Play(1,'dGVzdC9oZWxsby5tcDM=');"></div>"#);
        assert_eq!(extract_audio_path(&html), Err(MarkupError::MissingMarker));
    }

    #[test]
    fn missing_marker() {
        let err = extract_audio_path(&page("<p>No results</p>")).unwrap_err();
        assert_eq!(err, MarkupError::MissingMarker);
        assert!(err.is_absent());
    }

    #[test]
    fn missing_handler() {
        let err = extract_audio_path(&page(r#"<div id="play_1"></div>"#)).unwrap_err();
        assert_eq!(err, MarkupError::MissingHandler);
        assert!(err.is_absent());
    }

    #[test]
    fn argument_is_second_call_argument() {
        assert_eq!(
            audio_path_argument(HANDLER).unwrap(),
            "OTgzNjI5NC8zOS85ODM2Mjk0XzM5XzE0MjQ5OS5tcDM="
        );
        assert_eq!(audio_path_argument(r#"Play(1, "abc=" )"#).unwrap(), "abc=");
    }

    #[test]
    fn handler_without_arguments() {
        let err = audio_path_argument("Play(786);return false;").unwrap_err();
        assert!(matches!(err, MarkupError::MissingArgument(_)));
        assert!(!err.is_absent());
    }

    #[test]
    fn invalid_base64() {
        let html = page(r#"<div id="play_1" onclick="Play(1,'not base64!');"></div>"#);
        assert!(matches!(
            extract_audio_path(&html),
            Err(MarkupError::InvalidBase64(_))
        ));
    }

    #[test]
    fn invalid_utf8() {
        assert_eq!(decode_audio_path("//79"), Err(MarkupError::InvalidUtf8));
    }
}
