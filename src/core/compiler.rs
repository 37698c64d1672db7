//! 규칙 테이블 -> 최장 일치 트라이 컴파일러

use std::collections::HashMap;

use super::rule::{GlyphRule, RuleRole};
use crate::error::RuleError;

/// 트라이 노드의 종단 정보
#[derive(Debug, Clone)]
struct Terminal {
    replacement: String,
    role: RuleRole,
}

#[derive(Debug, Default, Clone)]
struct Node {
    children: HashMap<char, usize>,
    terminal: Option<Terminal>,
}

/// 최장 일치 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    /// 일치한 코드 유닛 수
    pub len: usize,
    pub replacement: &'a str,
    pub role: RuleRole,
}

/// 컴파일된 규칙 테이블 (불변)
///
/// 컴파일 이후에는 규칙을 추가/삭제할 수 없습니다.
/// 여러 스레드에서 읽기 전용으로 공유됩니다.
#[derive(Debug, Clone)]
pub struct CompiledTable {
    /// 0번이 루트
    nodes: Vec<Node>,
    rule_count: usize,
}

/// 규칙 목록을 트라이로 컴파일
///
/// 실패 조건:
/// - 빈 패턴
/// - 같은 패턴에 다른 치환 또는 다른 역할
///
/// 완전히 같은 규칙의 중복은 한 번으로 취급합니다.
pub fn compile(rules: &[GlyphRule]) -> Result<CompiledTable, RuleError> {
    let mut nodes = vec![Node::default()];
    let mut rule_count = 0;

    for (index, rule) in rules.iter().enumerate() {
        if rule.pattern.is_empty() {
            return Err(RuleError::EmptyPattern { index });
        }

        let mut current = 0;
        for ch in rule.pattern.chars() {
            let existing = nodes[current].children.get(&ch).copied();
            current = match existing {
                Some(next) => next,
                None => {
                    let next = nodes.len();
                    nodes.push(Node::default());
                    nodes[current].children.insert(ch, next);
                    next
                }
            };
        }

        if let Some(existing) = &nodes[current].terminal {
            if existing.replacement != rule.replacement || existing.role != rule.role {
                return Err(RuleError::ConflictingRule {
                    pattern: rule.pattern.clone(),
                });
            }
            continue;
        }

        nodes[current].terminal = Some(Terminal {
            replacement: rule.replacement.clone(),
            role: rule.role,
        });
        rule_count += 1;
    }

    log::info!(
        "규칙 테이블 컴파일 완료: 규칙 {}개, 노드 {}개",
        rule_count,
        nodes.len()
    );

    Ok(CompiledTable { nodes, rule_count })
}

impl CompiledTable {
    /// `start` 위치에서 시작하는 가장 긴 규칙 찾기 (maximal munch)
    ///
    /// 트라이를 입력이 허용하는 만큼 따라가며 가장 깊은 종단 노드를 기억합니다.
    pub fn longest_match(&self, input: &[char], start: usize) -> Option<RuleMatch<'_>> {
        let mut current = 0;
        let mut best = None;

        for (offset, ch) in input.iter().enumerate().skip(start) {
            match self.nodes[current].children.get(ch) {
                Some(&next) => current = next,
                None => break,
            }
            if let Some(term) = &self.nodes[current].terminal {
                best = Some(RuleMatch {
                    len: offset - start + 1,
                    replacement: &term.replacement,
                    role: term.role,
                });
            }
        }

        best
    }

    /// 고유 규칙 수
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    /// 트라이 노드 수 (루트 포함)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_compile_counts() {
        let table = compile(&[
            GlyphRule::substitution("d", "क"),
            GlyphRule::substitution("dk", "का"),
        ])
        .unwrap();
        assert_eq!(table.rule_count(), 2);
        // 루트 + d + k
        assert_eq!(table.node_count(), 3);
    }

    #[test]
    fn test_longest_match_prefers_longer() {
        let table = compile(&[
            GlyphRule::substitution("v", "अ"),
            GlyphRule::substitution("vk", "आ"),
            GlyphRule::substitution("vks", "ओ"),
        ])
        .unwrap();

        let input = chars("vksv");
        let m = table.longest_match(&input, 0).unwrap();
        assert_eq!(m.len, 3);
        assert_eq!(m.replacement, "ओ");

        let m = table.longest_match(&input, 3).unwrap();
        assert_eq!(m.len, 1);
        assert_eq!(m.replacement, "अ");
    }

    #[test]
    fn test_longest_match_falls_back_to_shorter() {
        // "vks"만 있고 "vk"는 규칙이 아닐 때, "vkx"는 "v"로 떨어짐
        let table = compile(&[
            GlyphRule::substitution("v", "अ"),
            GlyphRule::substitution("vks", "ओ"),
        ])
        .unwrap();
        let m = table.longest_match(&chars("vkx"), 0).unwrap();
        assert_eq!(m.len, 1);
        assert_eq!(m.replacement, "अ");
    }

    #[test]
    fn test_no_match() {
        let table = compile(&[GlyphRule::substitution("d", "क")]).unwrap();
        assert!(table.longest_match(&chars("x"), 0).is_none());
        assert!(table.longest_match(&chars("d"), 1).is_none());
    }

    #[test]
    fn test_role_preserved() {
        let table = compile(&[GlyphRule::reph("Z", "र्")]).unwrap();
        let m = table.longest_match(&chars("Z"), 0).unwrap();
        assert_eq!(m.role, RuleRole::RephMarker);
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let err = compile(&[
            GlyphRule::substitution("d", "क"),
            GlyphRule::substitution("", "x"),
        ])
        .unwrap_err();
        assert_eq!(err, RuleError::EmptyPattern { index: 1 });
    }

    #[test]
    fn test_conflicting_replacement_rejected() {
        let err = compile(&[
            GlyphRule::substitution(";", "य"),
            GlyphRule::substitution(";", "।"),
        ])
        .unwrap_err();
        assert_eq!(err, RuleError::ConflictingRule { pattern: ";".into() });
    }

    #[test]
    fn test_conflicting_role_rejected() {
        assert!(compile(&[
            GlyphRule::substitution("f", "ि"),
            GlyphRule::left_reorder("f", "ि"),
        ])
        .is_err());
    }

    #[test]
    fn test_identical_duplicate_accepted() {
        let table = compile(&[
            GlyphRule::substitution("Ø", "क्र"),
            GlyphRule::substitution("Ø", "क्र"),
        ])
        .unwrap();
        assert_eq!(table.rule_count(), 1);
    }

    #[test]
    fn test_default_table_compiles() {
        let table = compile(&crate::core::rule_table::default_rules()).unwrap();
        assert!(table.rule_count() > 150);
    }
}
