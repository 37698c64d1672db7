//! 재배치 패스: 왼쪽 모음 기호(ि) 이동, 레프(र्) 이동
//!
//! 두 패스 모두 토큰 목록 위에서만 동작하며, 변환 단위(필드) 경계를 넘지 않습니다.
//! 대상을 찾지 못한 마커는 버리고 `MalformedReorder` 진단을 남깁니다.

use super::devanagari::{consonant_cluster_len, is_word_boundary};
use super::token::{ReorderKind, Token, TokenStream};
use crate::diagnostics::{DiagnosticKind, Finding};

/// 토큰 내 삽입 위치 (토큰 인덱스, 문자 인덱스)
type InsertPoint = (usize, usize);

/// 왼쪽 모음 기호 마커를 다음 텍스트 토큰의 선두 자음 뒤로 옮김
///
/// `cluster_aware`가 true이면 선두 자음 클러스터(반자/결합 자음 포함, 토큰 경계를 넘을 수 있음)
/// 전체 뒤에 삽입합니다. 단일 자음이면 첫 문자 바로 뒤와 같습니다.
/// false이면 항상 다음 텍스트 토큰의 첫 문자 바로 뒤에 삽입합니다.
pub fn apply_prematra(stream: &mut TokenStream, cluster_aware: bool) {
    let mut i = 0;
    while i < stream.tokens.len() {
        let is_marker = matches!(
            stream.tokens[i],
            Token::PendingReorder {
                kind: ReorderKind::LeftVowelSign,
                ..
            }
        );
        if !is_marker {
            i += 1;
            continue;
        }

        let Token::PendingReorder {
            payload, offset, ..
        } = stream.tokens.remove(i)
        else {
            continue;
        };

        match prematra_target(&stream.tokens, i, cluster_aware) {
            Some((tok, at)) => insert_at(&mut stream.tokens, tok, at, &payload),
            None => {
                log::debug!("대상 없는 모음 기호 마커: offset {}", offset);
                stream.findings.push(Finding::new(
                    offset,
                    DiagnosticKind::MalformedReorder {
                        reorder: ReorderKind::LeftVowelSign,
                    },
                ));
            }
        }
        // 제거한 자리에 다음 토큰이 당겨졌으므로 i는 그대로
    }
}

/// `from` 이후 첫 텍스트 토큰에서 모음 기호를 넣을 위치 계산
///
/// 그 토큰이 단어 경계 문자로 시작하면 None.
fn prematra_target(tokens: &[Token], from: usize, cluster_aware: bool) -> Option<InsertPoint> {
    let first = (from..tokens.len())
        .find(|&j| tokens[j].as_text().is_some_and(|s| !s.is_empty()))?;

    // 바로 뒤가 단어 경계면 붙을 글자가 없음
    let lead = tokens[first].as_text()?.chars().next()?;
    if is_word_boundary(lead) {
        return None;
    }

    if !cluster_aware {
        return Some((first, 1));
    }

    // 연속된 텍스트 토큰을 단어 경계까지 이어 붙여 클러스터를 계산
    let mut chars = Vec::new();
    let mut owners = Vec::new();
    'collect: for (j, token) in tokens.iter().enumerate().skip(first) {
        let Some(text) = token.as_text() else {
            break;
        };
        for (k, c) in text.chars().enumerate() {
            if is_word_boundary(c) {
                break 'collect;
            }
            chars.push(c);
            owners.push((j, k));
        }
    }

    match consonant_cluster_len(&chars) {
        // 선두가 자음이 아니면 첫 문자 뒤
        0 => Some((first, 1)),
        len => {
            let (tok, k) = owners[len - 1];
            Some((tok, k + 1))
        }
    }
}

/// 레프 마커를 바로 앞 텍스트 런(단어 경계 이후)의 시작 위치로 옮김
pub fn apply_reph(stream: &mut TokenStream) {
    let mut i = 0;
    while i < stream.tokens.len() {
        let is_marker = matches!(
            stream.tokens[i],
            Token::PendingReorder {
                kind: ReorderKind::Reph,
                ..
            }
        );
        if !is_marker {
            i += 1;
            continue;
        }

        let Token::PendingReorder {
            payload, offset, ..
        } = stream.tokens.remove(i)
        else {
            continue;
        };

        match reph_target(&stream.tokens, i) {
            Some((tok, at)) => {
                insert_at(&mut stream.tokens, tok, at, &payload);
            }
            None => {
                log::debug!("대상 없는 레프 마커: offset {}", offset);
                stream.findings.push(Finding::new(
                    offset,
                    DiagnosticKind::MalformedReorder {
                        reorder: ReorderKind::Reph,
                    },
                ));
            }
        }
    }
}

/// `end` 이전 텍스트 런의 시작 위치 계산
///
/// 뒤에서부터 훑어 단어 경계 문자나 남은 마커를 만나면 그 직후가 런의 시작입니다.
/// 런이 비어 있으면 None.
fn reph_target(tokens: &[Token], end: usize) -> Option<InsertPoint> {
    let mut start: Option<InsertPoint> = None;

    for j in (0..end).rev() {
        let Some(text) = tokens[j].as_text() else {
            break;
        };
        let chars: Vec<char> = text.chars().collect();
        for k in (0..chars.len()).rev() {
            if is_word_boundary(chars[k]) {
                // 경계 직후가 런의 시작 (같은 토큰 안에 런 문자가 있을 때만)
                if k + 1 < chars.len() {
                    start = Some((j, k + 1));
                }
                return start;
            }
            start = Some((j, k));
        }
    }

    start
}

/// 텍스트 토큰의 문자 인덱스 위치에 payload 삽입
fn insert_at(tokens: &mut [Token], tok: usize, at: usize, payload: &str) {
    if let Some(Token::Text(text)) = tokens.get_mut(tok) {
        let byte = text
            .char_indices()
            .nth(at)
            .map(|(b, _)| b)
            .unwrap_or(text.len());
        text.insert_str(byte, payload);
    }
}
