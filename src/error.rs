//! 설정/테이블 로드 에러 정의
//!
//! 코퍼스 데이터는 절대 에러를 만들지 않습니다 (진단 이벤트로 보고).
//! 여기 정의된 에러는 모두 시작 시점의 설정 오류입니다.

use std::fmt;

/// 규칙 테이블 컴파일 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// 빈 패턴 (index: 테이블 내 규칙 위치)
    EmptyPattern { index: usize },
    /// 같은 패턴에 서로 다른 치환/역할
    ConflictingRule { pattern: String },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::EmptyPattern { index } => write!(f, "빈 패턴 규칙: #{}", index),
            RuleError::ConflictingRule { pattern } => {
                write!(f, "같은 패턴에 서로 다른 규칙: {:?}", pattern)
            }
        }
    }
}

impl std::error::Error for RuleError {}

/// 교정 테이블 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectionError {
    /// 빈 wrong 문자열
    EmptyWrongForm { index: usize },
    /// correct 안에 다른(또는 자신의) wrong이 포함됨 -> 멱등성 위반
    Cycle { wrong: String, via: String },
    /// 매칭 오토마타 생성 실패
    Automaton(String),
}

impl fmt::Display for CorrectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrectionError::EmptyWrongForm { index } => {
                write!(f, "빈 교정 항목: #{}", index)
            }
            CorrectionError::Cycle { wrong, via } => {
                write!(f, "교정 순환: {:?} 결과 안에 {:?} 포함", via, wrong)
            }
            CorrectionError::Automaton(s) => write!(f, "교정 매처 생성 실패: {}", s),
        }
    }
}

impl std::error::Error for CorrectionError {}

/// 설정 파일 로드 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기 실패
    Io(std::io::Error),
    /// JSON 파싱 실패
    Parse(String),
    /// 규칙 테이블 오류
    Rule(RuleError),
    /// 교정 테이블 오류
    Correction(CorrectionError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 읽기 오류: {}", e),
            ConfigError::Parse(s) => write!(f, "JSON 파싱 오류: {}", s),
            ConfigError::Rule(e) => write!(f, "규칙 테이블 오류: {}", e),
            ConfigError::Correction(e) => write!(f, "교정 테이블 오류: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Rule(e) => Some(e),
            ConfigError::Correction(e) => Some(e),
            ConfigError::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

impl From<RuleError> for ConfigError {
    fn from(e: RuleError) -> Self {
        ConfigError::Rule(e)
    }
}

impl From<CorrectionError> for ConfigError {
    fn from(e: CorrectionError) -> Self {
        ConfigError::Correction(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = RuleError::EmptyPattern { index: 3 };
        assert!(e.to_string().contains("#3"));

        let e = CorrectionError::Cycle {
            wrong: "ab".into(),
            via: "xaby".into(),
        };
        assert!(e.to_string().contains("xaby"));
    }

    #[test]
    fn test_from_conversions() {
        let e: ConfigError = RuleError::ConflictingRule { pattern: "d".into() }.into();
        assert!(matches!(e, ConfigError::Rule(_)));

        let parse = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let e: ConfigError = parse.into();
        assert!(matches!(e, ConfigError::Parse(_)));
    }
}
