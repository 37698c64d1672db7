//! 레거시 바이트 디코딩
//!
//! 레거시 글꼴 텍스트는 windows-1252 바이트로 저장되어 있습니다.
//! 바이트 하나가 코드 유닛(char) 하나로 대응합니다.

use encoding_rs::WINDOWS_1252;

/// windows-1252 바이트를 레거시 코드 유닛 문자열로 디코딩
///
/// windows-1252는 모든 바이트 값을 정의하므로 실패하지 않습니다.
pub fn decode_legacy_bytes(bytes: &[u8]) -> String {
    let (text, had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    if had_errors {
        log::warn!("windows-1252 디코딩 중 대체 문자 발생");
    }
    text.into_owned()
}
