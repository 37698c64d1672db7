//! 레거시 글리프 규칙 정의 및 외부 테이블 로드

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// 규칙의 구조적 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleRole {
    /// 단순 치환
    Substitution,
    /// 다음 자음 뒤로 옮겨야 하는 왼쪽 모음 기호 (ि)
    LeftReorderMarker,
    /// 앞 클러스터 앞으로 옮겨야 하는 레프 (र्)
    RephMarker,
}

/// 레거시 코드 유닛 시퀀스 -> 유니코드 치환 규칙
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphRule {
    /// 레거시 코드 유닛 (char 단위)
    pub pattern: String,
    /// 유니코드 치환 결과
    pub replacement: String,
    /// 역할 (생략 시 단순 치환)
    #[serde(default = "default_role")]
    pub role: RuleRole,
}

fn default_role() -> RuleRole {
    RuleRole::Substitution
}

impl GlyphRule {
    /// 단순 치환 규칙
    pub fn substitution(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self::new(pattern, replacement, RuleRole::Substitution)
    }

    /// 왼쪽 모음 기호 마커 규칙
    pub fn left_reorder(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self::new(pattern, replacement, RuleRole::LeftReorderMarker)
    }

    /// 레프 마커 규칙
    pub fn reph(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self::new(pattern, replacement, RuleRole::RephMarker)
    }

    pub fn new(
        pattern: impl Into<String>,
        replacement: impl Into<String>,
        role: RuleRole,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            role,
        }
    }

    /// 패턴 길이 (코드 유닛 수)
    pub fn pattern_len(&self) -> usize {
        self.pattern.chars().count()
    }
}

/// JSON 문자열에서 규칙 목록 파싱
///
/// # 형식
/// ```json
/// [
///   { "pattern": "d", "replacement": "क" },
///   { "pattern": "f", "replacement": "ि", "role": "left_reorder_marker" }
/// ]
/// ```
pub fn rules_from_json(json: &str) -> Result<Vec<GlyphRule>, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// 파일에서 규칙 목록 로드
pub fn load_rules(path: impl AsRef<Path>) -> Result<Vec<GlyphRule>, ConfigError> {
    let content = fs::read_to_string(path)?;
    rules_from_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let r = GlyphRule::substitution("d", "क");
        assert_eq!(r.role, RuleRole::Substitution);
        assert_eq!(r.pattern_len(), 1);

        let r = GlyphRule::left_reorder("f", "ि");
        assert_eq!(r.role, RuleRole::LeftReorderMarker);

        let r = GlyphRule::reph("Z", "र्");
        assert_eq!(r.role, RuleRole::RephMarker);
    }

    #[test]
    fn test_pattern_len_counts_chars() {
        // 비ASCII 레거시 문자도 1 유닛
        assert_eq!(GlyphRule::substitution("HkÙkkZ", "भर्ता").pattern_len(), 6);
    }

    #[test]
    fn test_rules_from_json() {
        let json = r#"[
            {"pattern": "d", "replacement": "क"},
            {"pattern": "f", "replacement": "ि", "role": "left_reorder_marker"},
            {"pattern": "Z", "replacement": "र्", "role": "reph_marker"}
        ]"#;
        let rules = rules_from_json(json).unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].role, RuleRole::Substitution);
        assert_eq!(rules[1].role, RuleRole::LeftReorderMarker);
        assert_eq!(rules[2].role, RuleRole::RephMarker);
    }

    #[test]
    fn test_rules_from_json_invalid() {
        assert!(matches!(
            rules_from_json(r#"[{"pattern": "d"}]"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_rules_missing_file() {
        assert!(matches!(
            load_rules("/nonexistent/rules.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
