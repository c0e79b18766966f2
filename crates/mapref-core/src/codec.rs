use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode base64 on a best-effort basis. This never fails.
///
/// URL-safe characters are accepted, anything outside the alphabet is
/// skipped and a dangling final character is ignored. Garbage in gives
/// garbage out; callers detect that when interpreting the bytes.
pub fn decode_lenient(input: &str) -> Vec<u8> {
    let mut cleaned: String = input
        .chars()
        .filter_map(|ch| match ch {
            '-' => Some('+'),
            '_' => Some('/'),
            'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '/' => Some(ch),
            _ => None,
        })
        .collect();

    if cleaned.len() % 4 == 1 {
        cleaned.pop();
    }

    LENIENT.decode(&cleaned).unwrap_or_else(|e| {
        tracing::debug!("Discarding undecodable base64 payload: {}", e);
        Vec::new()
    })
}

pub fn encode(input: &[u8]) -> String {
    STANDARD.encode(input)
}
