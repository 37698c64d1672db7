//! 엔진 중간 표현: 토큰 스트림

use serde::{Deserialize, Serialize};

use crate::diagnostics::Finding;

/// 재배치 대기 마커 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderKind {
    /// 왼쪽 모음 기호 (ि): 다음 자음 클러스터 뒤로 이동
    LeftVowelSign,
    /// 레프 (र्): 앞 클러스터 시작 위치로 이동
    Reph,
}

/// 토큰
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// 확정된 유니코드 텍스트
    Text(String),
    /// 재배치 대기 마커 (offset: 입력 내 코드 유닛 위치)
    PendingReorder {
        kind: ReorderKind,
        payload: String,
        offset: usize,
    },
}

impl Token {
    pub fn text(s: impl Into<String>) -> Self {
        Token::Text(s.into())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text(s) => Some(s),
            Token::PendingReorder { .. } => None,
        }
    }
}

/// 한 변환 단위의 토큰 스트림
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
    /// 규칙에 일치해 소비된 코드 유닛 수
    pub matched_units: usize,
    /// 입력 길이 (코드 유닛 수)
    pub input_len: usize,
    /// 단계별 진단 (offset 기준)
    pub findings: Vec<Finding>,
}

impl TokenStream {
    /// 남아 있는 재배치 마커 수
    pub fn pending_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.is_text()).count()
    }

    /// 텍스트 토큰을 이어 붙여 문자열로 평탄화
    ///
    /// 남은 마커는 무시합니다 (재배치 단계 이후에는 남지 않음).
    pub fn flatten(&self) -> String {
        self.tokens.iter().filter_map(Token::as_text).collect()
    }
}
