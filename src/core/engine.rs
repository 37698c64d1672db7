//! 음역 엔진: 레거시 코드 유닛 -> 토큰 스트림

use super::compiler::CompiledTable;
use super::rule::RuleRole;
use super::token::{ReorderKind, Token, TokenStream};
use crate::diagnostics::{DiagnosticKind, Finding};

/// 레거시 텍스트를 왼쪽에서 오른쪽으로 훑어 토큰 스트림 생성
///
/// - 각 위치에서 가장 긴 규칙을 적용하고 그 길이만큼 전진
/// - 규칙이 없으면 해당 코드 유닛 하나를 그대로 `Text`로 내보내고
///   `UnmatchedGlyph` 진단을 남긴 뒤 한 칸 전진
///
/// 입력을 조용히 버리는 경우는 없습니다:
/// `matched_units + 미일치 진단 수 == input_len`
pub fn run(table: &CompiledTable, input: &str) -> TokenStream {
    let chars: Vec<char> = input.chars().collect();
    let mut stream = TokenStream {
        input_len: chars.len(),
        ..Default::default()
    };

    let mut pos = 0;
    while pos < chars.len() {
        match table.longest_match(&chars, pos) {
            Some(m) => {
                let token = match m.role {
                    RuleRole::Substitution => Token::text(m.replacement),
                    RuleRole::LeftReorderMarker => Token::PendingReorder {
                        kind: ReorderKind::LeftVowelSign,
                        payload: m.replacement.to_string(),
                        offset: pos,
                    },
                    RuleRole::RephMarker => Token::PendingReorder {
                        kind: ReorderKind::Reph,
                        payload: m.replacement.to_string(),
                        offset: pos,
                    },
                };
                stream.tokens.push(token);
                stream.matched_units += m.len;
                pos += m.len;
            }
            None => {
                let glyph = chars[pos];
                stream.tokens.push(Token::Text(glyph.to_string()));
                stream
                    .findings
                    .push(Finding::new(pos, DiagnosticKind::UnmatchedGlyph { glyph }));
                pos += 1;
            }
        }
    }

    stream
}
