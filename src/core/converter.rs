//! 레거시 -> 유니코드 통합 변환 파이프라인
//!
//! 변환 단위 하나의 상태 전이:
//! `Raw -> Tokenized -> PreReordered -> RephReordered -> Corrected -> Cleaned`
//!
//! 어떤 단계도 치명적으로 실패하지 않습니다. 문제는 진단 이벤트로만 남깁니다.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, LazyLock};

use super::codepage::decode_legacy_bytes;
use super::compiler::{compile, CompiledTable};
use super::engine;
use super::reorder::{apply_prematra, apply_reph};
use super::rule::load_rules;
use super::rule_table::default_rules;
use super::token::TokenStream;
use crate::cleanup::Cleanup;
use crate::config::ConverterConfig;
use crate::correction::Corrector;
use crate::diagnostics::{DiagnosticEvent, Finding};
use crate::error::ConfigError;

/// 변환 단위 (레코드 하나의 텍스트 필드 하나)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionUnit {
    pub unit_id: String,
    pub field: String,
    /// 레거시 코드 유닛 텍스트
    pub text: String,
}

impl ConversionUnit {
    pub fn new(
        unit_id: impl Into<String>,
        field: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            unit_id: unit_id.into(),
            field: field.into(),
            text: text.into(),
        }
    }
}

/// 변환 결과
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutput {
    pub text: String,
    pub diagnostics: Vec<DiagnosticEvent>,
}

/// 변환 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Raw,
    Tokenized,
    PreReordered,
    RephReordered,
    Corrected,
    Cleaned,
}

/// 협조적 취소 플래그 (단계 경계에서만 확인)
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// 변환기
///
/// 컴파일된 규칙 테이블과 교정 테이블을 읽기 전용으로 들고 있으므로
/// 여러 스레드에서 `&Converter`로 동시에 호출할 수 있습니다.
#[derive(Debug, Clone)]
pub struct Converter {
    table: CompiledTable,
    corrector: Corrector,
    reference_corrector: Option<Corrector>,
    reference_fields: Vec<String>,
    cleanup: Cleanup,
    cluster_aware_prematra: bool,
}

/// 내장 테이블로 만든 프로세스 전역 변환기
static DEFAULT_CONVERTER: LazyLock<Converter> = LazyLock::new(|| {
    Converter::with_defaults().expect("내장 규칙/교정 테이블은 항상 유효해야 함")
});

impl Converter {
    /// 컴파일된 테이블과 교정기로 생성 (참조 교정 없음, 기본 정리 규칙)
    pub fn new(table: CompiledTable, corrector: Corrector) -> Self {
        Self {
            table,
            corrector,
            reference_corrector: None,
            reference_fields: Vec::new(),
            cleanup: Cleanup::standard(),
            cluster_aware_prematra: true,
        }
    }

    /// 내장 테이블로 생성
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::from_config(&ConverterConfig::default())
    }

    /// 설정으로 생성 (외부 테이블 경로가 있으면 로드)
    pub fn from_config(config: &ConverterConfig) -> Result<Self, ConfigError> {
        let rules = match &config.rules_path {
            Some(path) => load_rules(path)?,
            None => default_rules(),
        };
        let table = compile(&rules)?;

        let corrector = match &config.corrections_path {
            Some(path) => Corrector::load(path)?,
            None => Corrector::defaults()?,
        };

        Ok(Self::new(table, corrector)
            .with_reference_corrector(Corrector::reference_defaults()?, &config.reference_fields)
            .with_cluster_aware_prematra(config.cluster_aware_prematra))
    }

    /// 프로세스 전역 기본 변환기
    pub fn global() -> &'static Converter {
        &DEFAULT_CONVERTER
    }

    /// 특정 필드에만 추가로 적용할 교정기 설정
    pub fn with_reference_corrector(mut self, corrector: Corrector, fields: &[String]) -> Self {
        self.reference_corrector = Some(corrector);
        self.reference_fields = fields.to_vec();
        self
    }

    pub fn with_cleanup(mut self, cleanup: Cleanup) -> Self {
        self.cleanup = cleanup;
        self
    }

    pub fn with_cluster_aware_prematra(mut self, enabled: bool) -> Self {
        self.cluster_aware_prematra = enabled;
        self
    }

    pub fn table(&self) -> &CompiledTable {
        &self.table
    }

    pub fn corrector(&self) -> &Corrector {
        &self.corrector
    }

    /// 변환 단위 하나 변환
    pub fn convert(&self, unit: &ConversionUnit) -> ConversionOutput {
        self.run(unit, None).unwrap_or_default()
    }

    /// 취소 가능한 변환 (취소되면 None)
    pub fn convert_cancellable(
        &self,
        unit: &ConversionUnit,
        cancel: &CancelToken,
    ) -> Option<ConversionOutput> {
        self.run(unit, Some(cancel))
    }

    /// 문자열만 변환 (진단 버림)
    pub fn convert_text(&self, input: &str) -> String {
        self.convert(&ConversionUnit::new("", "", input)).text
    }

    /// windows-1252 바이트 입력 변환
    pub fn convert_bytes(&self, bytes: &[u8]) -> String {
        self.convert_text(&decode_legacy_bytes(bytes))
    }

    /// 토큰화 + 재배치까지만 수행
    pub fn reorder(&self, input: &str) -> TokenStream {
        let mut stream = engine::run(&self.table, input);
        apply_prematra(&mut stream, self.cluster_aware_prematra);
        apply_reph(&mut stream);
        stream
    }

    fn run(&self, unit: &ConversionUnit, cancel: Option<&CancelToken>) -> Option<ConversionOutput> {
        let cancelled = |stage: Stage| {
            let hit = cancel.is_some_and(CancelToken::is_cancelled);
            if hit {
                log::debug!("[{}:{}] {:?} 단계에서 취소됨", unit.unit_id, unit.field, stage);
            }
            hit
        };

        if cancelled(Stage::Raw) {
            return None;
        }

        let mut stream = engine::run(&self.table, &unit.text);
        if cancelled(Stage::Tokenized) {
            return None;
        }

        apply_prematra(&mut stream, self.cluster_aware_prematra);
        if cancelled(Stage::PreReordered) {
            return None;
        }

        apply_reph(&mut stream);
        if cancelled(Stage::RephReordered) {
            return None;
        }

        let mut text = self.corrector.correct(&stream.flatten());
        if let Some(reference) = &self.reference_corrector {
            if self.reference_fields.iter().any(|f| f == &unit.field) {
                text = reference.correct(&text);
            }
        }
        if cancelled(Stage::Corrected) {
            return None;
        }

        let mut findings: Vec<Finding> = stream.findings;
        let text = self.cleanup.apply(&text, &mut findings);
        log::debug!(
            "[{}:{}] {:?}: 진단 {}건",
            unit.unit_id,
            unit.field,
            Stage::Cleaned,
            findings.len()
        );

        let diagnostics = findings
            .into_iter()
            .map(|f| DiagnosticEvent::from_finding(&unit.unit_id, &unit.field, f))
            .collect();

        Some(ConversionOutput { text, diagnostics })
    }
}

/// 내장 테이블로 레거시 문자열을 유니코드로 변환
/// 변환할 수 없는 코드 유닛은 그대로 유지
pub fn convert(input: &str) -> String {
    Converter::global().convert_text(input)
}
