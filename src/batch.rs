//! 배치 변환
//!
//! 변환기 하나를 여러 워커 스레드가 공유합니다. 결과는 입력 순서대로 돌려줍니다.
//! 취소되면 아직 처리하지 않은 단위는 `None`으로 남습니다.

use serde_json::{Map, Value};
use std::sync::mpsc;
use std::thread;

use crate::core::converter::{CancelToken, ConversionOutput, ConversionUnit, Converter};
use crate::diagnostics::{DiagnosticEvent, DiagnosticSummary};

/// 변환 단위 목록을 워커 스레드로 나눠 변환
pub fn convert_all(
    converter: &Converter,
    units: &[ConversionUnit],
    workers: usize,
    cancel: &CancelToken,
) -> Vec<Option<ConversionOutput>> {
    let mut results: Vec<Option<ConversionOutput>> = vec![None; units.len()];
    if units.is_empty() {
        return results;
    }

    let workers = workers.clamp(1, units.len());
    let chunk_size = units.len().div_ceil(workers);
    log::info!("배치 변환 시작: 단위 {}개, 워커 {}개", units.len(), workers);

    // 워커 -> 수집 채널 (입력 인덱스, 결과)
    let (tx, rx) = mpsc::channel::<(usize, ConversionOutput)>();

    thread::scope(|scope| {
        for (chunk_index, chunk) in units.chunks(chunk_size).enumerate() {
            let tx = tx.clone();
            scope.spawn(move || {
                let base = chunk_index * chunk_size;
                for (i, unit) in chunk.iter().enumerate() {
                    let Some(output) = converter.convert_cancellable(unit, cancel) else {
                        break;
                    };
                    if tx.send((base + i, output)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx);

        for (index, output) in rx {
            results[index] = Some(output);
        }
    });

    let done = results.iter().filter(|r| r.is_some()).count();
    log::info!("배치 변환 종료: {}/{} 완료", done, units.len());
    results
}

/// 레코드 식별자 (`id` 필드, 없으면 배열 인덱스)
fn record_id(record: &Map<String, Value>, index: usize) -> String {
    match record.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => index.to_string(),
    }
}

/// JSON 레코드 배열에서 변환 단위 추출
///
/// 설정된 필드 중 문자열 값만 대상입니다.
pub fn units_from_records(records: &[Value], fields: &[String]) -> Vec<ConversionUnit> {
    let mut units = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let Some(object) = record.as_object() else {
            log::warn!("객체가 아닌 레코드 무시: index {}", index);
            continue;
        };
        let id = record_id(object, index);
        for field in fields {
            if let Some(Value::String(text)) = object.get(field) {
                units.push(ConversionUnit::new(id.clone(), field.clone(), text.clone()));
            }
        }
    }
    units
}

/// 배치 결과
#[derive(Debug, Default)]
pub struct BatchReport {
    pub records: Vec<Value>,
    pub diagnostics: Vec<DiagnosticEvent>,
    pub summary: DiagnosticSummary,
    /// 취소로 변환되지 않은 단위 수
    pub skipped: usize,
}

/// 레코드 배열 변환
///
/// 설정된 필드는 변환 결과로 바꾸고 나머지 필드는 그대로 복사합니다.
pub fn convert_records(
    converter: &Converter,
    records: &[Value],
    fields: &[String],
    workers: usize,
    cancel: &CancelToken,
) -> BatchReport {
    let units = units_from_records(records, fields);
    let outputs = convert_all(converter, &units, workers, cancel);

    let mut report = BatchReport {
        records: records.to_vec(),
        ..Default::default()
    };

    // units_from_records와 같은 순서로 다시 훑어 결과를 되돌려 놓음
    let mut results = units.iter().zip(outputs);
    for (index, record) in report.records.iter_mut().enumerate() {
        let Some(object) = record.as_object_mut() else {
            continue;
        };
        let id = record_id(object, index);
        for field in fields {
            if !matches!(object.get(field), Some(Value::String(_))) {
                continue;
            }
            let Some((unit, output)) = results.next() else {
                break;
            };
            debug_assert!(unit.unit_id == id && &unit.field == field);
            match output {
                Some(output) => {
                    report.summary.record_unit(&output.diagnostics);
                    object.insert(field.clone(), Value::String(output.text));
                    report.diagnostics.extend(output.diagnostics);
                }
                None => report.skipped += 1,
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn converter() -> &'static Converter {
        Converter::global()
    }

    fn units(n: usize) -> Vec<ConversionUnit> {
        (0..n)
            .map(|i| ConversionUnit::new(i.to_string(), "title", if i % 2 == 0 { "dk" } else { "fd" }))
            .collect()
    }

    #[test]
    fn test_results_in_input_order() {
        let units = units(37);
        let results = convert_all(converter(), &units, 4, &CancelToken::new());
        assert_eq!(results.len(), 37);
        for (i, r) in results.iter().enumerate() {
            let expected = if i % 2 == 0 { "का" } else { "कि" };
            assert_eq!(r.as_ref().map(|o| o.text.as_str()), Some(expected));
        }
    }

    #[test]
    fn test_same_result_regardless_of_workers() {
        let units = units(20);
        let one = convert_all(converter(), &units, 1, &CancelToken::new());
        let many = convert_all(converter(), &units, 8, &CancelToken::new());
        assert_eq!(one, many);
    }

    #[test]
    fn test_empty_batch() {
        assert!(convert_all(converter(), &[], 4, &CancelToken::new()).is_empty());
    }

    #[test]
    fn test_cancelled_batch_leaves_none() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let results = convert_all(converter(), &units(5), 2, &cancel);
        assert!(results.iter().all(|r| r.is_none()));
    }

    #[test]
    fn test_units_from_records() {
        let records = vec![
            json!({"id": 7, "title": "dk", "number": 3, "lyrics": null}),
            json!("not an object"),
            json!({"title": "fd", "reference": "x"}),
        ];
        let fields = vec!["title".to_string(), "reference".to_string()];
        let units = units_from_records(&records, &fields);
        assert_eq!(units.len(), 3);
        assert_eq!(units[0], ConversionUnit::new("7", "title", "dk"));
        assert_eq!(units[1].unit_id, "2");
        assert_eq!(units[2].field, "reference");
    }

    #[test]
    fn test_convert_records_copies_other_fields() {
        let records = vec![json!({"id": "s1", "title": "dk", "number": 12})];
        let report = convert_records(
            converter(),
            &records,
            &["title".to_string()],
            2,
            &CancelToken::new(),
        );
        assert_eq!(report.records[0]["title"], "का");
        assert_eq!(report.records[0]["number"], 12);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.summary.units, 1);
    }
}
