//! 어휘 교정 계층
//!
//! 기계적 규칙으로 풀 수 없는 잔여 오류를 단어/부분 문자열 치환으로 교정합니다.
//!
//! - 정규식이 아닌 정확한 부분 문자열 치환
//! - 한 패스는 왼쪽에서 오른쪽으로 훑음
//! - 같은 위치에서는 먼저 선언된 항목이 우선, 패스 안에서 치환된 구간은 다시 보지 않음
//! - 치환 결과와 뒤따르는 텍스트가 이어져 새 `wrong`이 생길 수 있으므로
//!   결과가 바뀌지 않을 때까지 패스를 반복 (멱등성)
//! - 어떤 항목의 `correct`에도 다른 항목의 `wrong`이 들어 있으면 안 됨 (무한 반복 방지)

mod table;

use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, CorrectionError};

/// 고정점까지 반복할 최대 패스 수
const MAX_PASSES: usize = 8;

pub use table::{default_corrections, reference_corrections};

/// 교정 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionEntry {
    pub wrong: String,
    pub correct: String,
}

impl CorrectionEntry {
    pub fn new(wrong: impl Into<String>, correct: impl Into<String>) -> Self {
        Self {
            wrong: wrong.into(),
            correct: correct.into(),
        }
    }
}

/// 컴파일된 교정기 (불변, 스레드 간 공유)
#[derive(Debug, Clone)]
pub struct Corrector {
    entries: Vec<CorrectionEntry>,
    matcher: AhoCorasick,
}

impl Corrector {
    /// 교정 목록 검증 및 매처 생성
    pub fn new(entries: Vec<CorrectionEntry>) -> Result<Self, CorrectionError> {
        if let Some(index) = entries.iter().position(|e| e.wrong.is_empty()) {
            return Err(CorrectionError::EmptyWrongForm { index });
        }

        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(entries.iter().map(|e| e.wrong.as_str()))
            .map_err(|e| CorrectionError::Automaton(e.to_string()))?;

        // 순환 검사: 결과 문자열 안에 어떤 wrong이라도 있으면 두 번째 적용에서 또 바뀜
        for entry in &entries {
            if let Some(m) = matcher.find(entry.correct.as_str()) {
                return Err(CorrectionError::Cycle {
                    wrong: entries[m.pattern().as_usize()].wrong.clone(),
                    via: entry.correct.clone(),
                });
            }
        }

        Ok(Self { entries, matcher })
    }

    /// 내장 교정 테이블
    pub fn defaults() -> Result<Self, CorrectionError> {
        Self::new(default_corrections())
    }

    /// 성경 참조 필드 전용 내장 테이블
    pub fn reference_defaults() -> Result<Self, CorrectionError> {
        Self::new(reference_corrections())
    }

    /// JSON 파일에서 교정 테이블 로드
    ///
    /// # 형식
    /// ```json
    /// [ { "wrong": "सृशिट", "correct": "सृष्टि" } ]
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON 문자열에서 교정 테이블 생성
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let entries: Vec<CorrectionEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries)?)
    }

    /// 교정 적용 (결과가 더 이상 바뀌지 않을 때까지)
    pub fn correct(&self, text: &str) -> String {
        if self.entries.is_empty() {
            return text.to_string();
        }

        let mut current = self.correct_pass(text);
        for _ in 1..MAX_PASSES {
            let next = self.correct_pass(&current);
            if next == current {
                return current;
            }
            current = next;
        }

        log::warn!("교정이 {}회 안에 수렴하지 않음: {:?}", MAX_PASSES, text);
        current
    }

    /// 한 번의 왼쪽 -> 오른쪽 패스
    fn correct_pass(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.matcher.replace_all_with(text, &mut out, |m, _, dst| {
            dst.push_str(&self.entries[m.pattern().as_usize()].correct);
            true
        });
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CorrectionEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrector(pairs: &[(&str, &str)]) -> Corrector {
        Corrector::new(
            pairs
                .iter()
                .map(|&(w, c)| CorrectionEntry::new(w, c))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_basic_replacement() {
        let c = corrector(&[("सृशिट", "सृष्टि")]);
        assert_eq!(c.correct("यह सृशिट है"), "यह सृष्टि है");
    }

    #[test]
    fn test_already_correct_unchanged() {
        let c = corrector(&[("सृशिट", "सृष्टि")]);
        assert_eq!(c.correct("सृष्टि"), "सृष्टि");
    }

    #[test]
    fn test_earliest_declared_wins_at_same_position() {
        let c = corrector(&[("सृशिटकत्तर्ा", "सृष्टिकर्ता"), ("सृशिट", "सृष्टि")]);
        assert_eq!(c.correct("सृशिटकत्तर्ा"), "सृष्टिकर्ता");

        let c = corrector(&[("सृशिट", "सृष्टि"), ("सृशिटकत्तर्ा", "सृष्टिकर्ता")]);
        assert_eq!(c.correct("सृशिटकत्तर्ा"), "सृष्टिकत्तर्ा");
    }

    #[test]
    fn test_replaced_span_not_rescanned() {
        // "ab" -> "x" 이후 "bc"는 이미 소비된 b를 다시 보지 않음
        let c = corrector(&[("ab", "x"), ("bc", "y")]);
        assert_eq!(c.correct("abc"), "xc");
    }

    #[test]
    fn test_idempotent() {
        let c = Corrector::defaults().unwrap();
        for text in ["पि्रय भाई", "स्िथर रहो", "बन्ध्ु और ध्ीरज", "कत्तर्ा", ""] {
            let once = c.correct(text);
            assert_eq!(c.correct(&once), once, "입력: {:?}", text);
        }
    }

    #[test]
    fn test_match_formed_across_replacement_edge() {
        // स्ि -> सि 뒤에 ा가 이어지면 िा가 새로 생김
        let c = Corrector::defaults().unwrap();
        let once = c.correct("स्िा");
        assert_eq!(once, "सिया");
        assert_eq!(c.correct(&once), once);

        let once = c.correct("स्िथर्ा");
        assert_eq!(once, "स्थिरा");
        assert_eq!(c.correct(&once), once);
    }

    #[test]
    fn test_idempotent_across_edges_small_table() {
        let c = corrector(&[("xa", "y"), ("yb", "z")]);
        assert_eq!(c.correct("xab"), "z");
        assert_eq!(c.correct("yb"), "z");
        assert_eq!(c.correct(&c.correct("xab")), "z");
    }

    #[test]
    fn test_cycle_rejected() {
        let err = Corrector::new(vec![
            CorrectionEntry::new("ab", "cd"),
            CorrectionEntry::new("c", "ab"),
        ])
        .unwrap_err();
        assert!(matches!(err, CorrectionError::Cycle { .. }));
    }

    #[test]
    fn test_self_cycle_rejected() {
        assert!(Corrector::new(vec![CorrectionEntry::new("ा", "ाा")]).is_err());
    }

    #[test]
    fn test_empty_wrong_rejected() {
        let err = Corrector::new(vec![CorrectionEntry::new("", "x")]).unwrap_err();
        assert_eq!(err, CorrectionError::EmptyWrongForm { index: 0 });
    }

    #[test]
    fn test_empty_table_is_identity() {
        let c = Corrector::new(Vec::new()).unwrap();
        assert!(c.is_empty());
        assert_eq!(c.correct("कुछ भी"), "कुछ भी");
    }

    #[test]
    fn test_default_tables_valid() {
        assert!(Corrector::defaults().unwrap().len() > 50);
        assert!(!Corrector::reference_defaults().unwrap().is_empty());
    }

    #[test]
    fn test_from_json() {
        let c = Corrector::from_json(r#"[{"wrong": "ध्न", "correct": "धन"}]"#).unwrap();
        assert_eq!(c.entries()[0].correct, "धन");
        assert_eq!(c.correct("ध्न्य"), "धन्य");

        assert!(matches!(
            Corrector::from_json(r#"[{"wrong": "a", "correct": "a"}]"#),
            Err(ConfigError::Correction(CorrectionError::Cycle { .. }))
        ));
    }
}
