//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 변환기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConverterConfig {
    /// 외부 규칙 테이블 경로 (없으면 내장 테이블)
    #[serde(default)]
    pub rules_path: Option<PathBuf>,
    /// 외부 교정 테이블 경로 (없으면 내장 테이블)
    #[serde(default)]
    pub corrections_path: Option<PathBuf>,
    /// 배치 변환 대상 필드
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
    /// 참조 교정을 추가로 적용할 필드
    #[serde(default = "default_reference_fields")]
    pub reference_fields: Vec<String>,
    /// 배치 워커 스레드 수 (0이면 CPU 수)
    #[serde(default)]
    pub workers: usize,
    /// 모음 기호(ि)를 자음 클러스터 전체 뒤에 둘지 여부
    #[serde(default = "default_cluster_aware_prematra")]
    pub cluster_aware_prematra: bool,
}

fn default_fields() -> Vec<String> {
    ["title", "lyrics", "category", "reference"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_reference_fields() -> Vec<String> {
    vec!["reference".to_string()]
}

fn default_cluster_aware_prematra() -> bool {
    true
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            corrections_path: None,
            fields: default_fields(),
            reference_fields: default_reference_fields(),
            workers: 0,
            cluster_aware_prematra: default_cluster_aware_prematra(),
        }
    }
}

impl ConverterConfig {
    /// 실제 사용할 워커 수
    pub fn effective_workers(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: impl AsRef<Path>) -> ConverterConfig {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            ConverterConfig::default()
        }),
        Err(e) => {
            log::warn!("설정 파일 읽기 실패, 기본값 사용 ({}): {}", path.display(), e);
            ConverterConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(path: impl AsRef<Path>, config: &ConverterConfig) -> Result<(), String> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
        }
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
