//! 변환 진단 이벤트 및 집계
//!
//! 엔진은 진단을 만들기만 하고 소비하지 않습니다.
//! 집계(`DiagnosticSummary`)는 배치 도구가 사람 검수 대상을 고르는 데 씁니다.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::core::token::ReorderKind;

/// 진단 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// 규칙 없음: 코드 유닛을 그대로 통과시킴
    UnmatchedGlyph { glyph: char },
    /// 대상 없는 재배치 마커: 마커를 버림
    MalformedReorder { reorder: ReorderKind },
    /// 정리 단계에서 제거된 문자 (비사르가 등)
    RemovedCharacter { ch: char },
}

impl DiagnosticKind {
    /// 집계용 이름
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticKind::UnmatchedGlyph { .. } => "unmatched_glyph",
            DiagnosticKind::MalformedReorder { .. } => "malformed_reorder",
            DiagnosticKind::RemovedCharacter { .. } => "removed_character",
        }
    }
}

/// 단계 내부 진단 (변환 단위 정보 없음)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    /// 코드 유닛(char) 위치
    pub offset: usize,
    pub kind: DiagnosticKind,
}

impl Finding {
    pub fn new(offset: usize, kind: DiagnosticKind) -> Self {
        Self { offset, kind }
    }
}

/// 외부 보고용 진단 이벤트
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    pub unit_id: String,
    pub field: String,
    pub offset: usize,
    pub kind: DiagnosticKind,
}

impl DiagnosticEvent {
    pub fn from_finding(unit_id: &str, field: &str, finding: Finding) -> Self {
        Self {
            unit_id: unit_id.to_string(),
            field: field.to_string(),
            offset: finding.offset,
            kind: finding.kind,
        }
    }
}

/// 진단 집계
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticSummary {
    /// 변환한 단위 수
    pub units: usize,
    /// 종류별 건수
    pub by_kind: BTreeMap<String, usize>,
    /// 미일치 글리프별 건수
    pub unmatched_glyphs: BTreeMap<char, usize>,
    /// 제거된 문자별 건수
    pub removed_characters: BTreeMap<char, usize>,
    /// 재배치 실패가 있어 사람 검수가 필요한 (unit_id, field)
    pub needs_audit: BTreeSet<(String, String)>,
}

impl DiagnosticSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 변환 단위 하나의 진단 반영
    pub fn record_unit(&mut self, events: &[DiagnosticEvent]) {
        self.units += 1;
        for event in events {
            self.record(event);
        }
    }

    fn record(&mut self, event: &DiagnosticEvent) {
        *self.by_kind.entry(event.kind.name().to_string()).or_insert(0) += 1;

        match event.kind {
            DiagnosticKind::UnmatchedGlyph { glyph } => {
                *self.unmatched_glyphs.entry(glyph).or_insert(0) += 1;
                self.needs_audit
                    .insert((event.unit_id.clone(), event.field.clone()));
            }
            DiagnosticKind::MalformedReorder { .. } => {
                self.needs_audit
                    .insert((event.unit_id.clone(), event.field.clone()));
            }
            DiagnosticKind::RemovedCharacter { ch } => {
                *self.removed_characters.entry(ch).or_insert(0) += 1;
            }
        }
    }

    /// 전체 진단 건수
    pub fn total(&self) -> usize {
        self.by_kind.values().sum()
    }

    /// 종류별 건수 (없으면 0)
    pub fn count(&self, kind_name: &str) -> usize {
        self.by_kind.get(kind_name).copied().unwrap_or(0)
    }
}
