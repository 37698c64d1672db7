//! 정리/정규화 패스
//!
//! 교정이 끝난 문자열에 한 번 적용하는 고정 순서 재작성 목록입니다.
//! 다시 적용해도 결과가 바뀌지 않습니다.

use crate::core::devanagari::VISARGA;
use crate::diagnostics::{DiagnosticKind, Finding};

/// 정리 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupRule {
    /// 레거시 대체 문자를 유니코드 구두점으로
    Map { from: char, to: char },
    /// 대상 표기법에서 쓰지 않는 문자 제거 (진단 기록)
    Remove(char),
}

/// 정리 패스
#[derive(Debug, Clone)]
pub struct Cleanup {
    rules: Vec<CleanupRule>,
}

impl Default for Cleanup {
    fn default() -> Self {
        Self::standard()
    }
}

impl Cleanup {
    /// 기본 규칙
    ///
    /// - `]` (구절 구분자) -> `,`
    /// - `&` (반복 표시) -> `-`
    /// - 비사르가, `_`, `±`, `›` 제거
    pub fn standard() -> Self {
        Self {
            rules: vec![
                CleanupRule::Map { from: ']', to: ',' },
                CleanupRule::Map { from: '&', to: '-' },
                CleanupRule::Remove(VISARGA),
                CleanupRule::Remove('_'),
                CleanupRule::Remove('±'),
                CleanupRule::Remove('›'),
            ],
        }
    }

    /// 사용자 규칙으로 생성
    ///
    /// 매핑 결과가 다른 규칙의 대상이면 멱등성이 깨지므로 그런 규칙은 버립니다.
    pub fn new(rules: Vec<CleanupRule>) -> Self {
        let sources: Vec<char> = rules
            .iter()
            .map(|r| match *r {
                CleanupRule::Map { from, .. } => from,
                CleanupRule::Remove(c) => c,
            })
            .collect();

        let rules = rules
            .into_iter()
            .filter(|r| match *r {
                CleanupRule::Map { to, .. } if sources.contains(&to) => {
                    log::warn!("정리 규칙 무시 (결과가 다른 규칙의 대상): {:?}", r);
                    false
                }
                _ => true,
            })
            .collect();

        Self { rules }
    }

    /// 정리 적용
    ///
    /// 제거된 문자는 `RemovedCharacter` 진단으로 기록합니다 (offset: 입력 문자 위치).
    pub fn apply(&self, text: &str, findings: &mut Vec<Finding>) -> String {
        let mut mapped = String::with_capacity(text.len());

        for (offset, c) in text.chars().enumerate() {
            match self.rule_for(c) {
                Some(CleanupRule::Map { to, .. }) => mapped.push(to),
                Some(CleanupRule::Remove(ch)) => {
                    findings.push(Finding::new(offset, DiagnosticKind::RemovedCharacter { ch }));
                }
                None => mapped.push(c),
            }
        }

        collapse_whitespace(&mapped)
    }

    fn rule_for(&self, c: char) -> Option<CleanupRule> {
        self.rules.iter().copied().find(|r| match *r {
            CleanupRule::Map { from, .. } => from == c,
            CleanupRule::Remove(ch) => ch == c,
        })
    }
}

/// 줄 안의 연속 공백을 하나로 줄이고 줄 앞뒤 공백 및 전체 앞뒤 공백 제거
///
/// 빈 줄(연 구분)은 유지합니다. `\r`은 공백으로 취급합니다.
fn collapse_whitespace(text: &str) -> String {
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            line.split([' ', '\t', '\r'])
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    lines.join("\n").trim().to_string()
}
