//! 데바나가리 유니코드 문자 분류 유틸리티

/// 비라마 (हलन्त, U+094D)
pub const VIRAMA: char = '\u{094D}';
/// 누크타 (U+093C)
pub const NUKTA: char = '\u{093C}';
/// 비사르가 (U+0903)
pub const VISARGA: char = '\u{0903}';
/// 단다 (U+0964)
pub const DANDA: char = '\u{0964}';
/// 더블 단다 (U+0965)
pub const DOUBLE_DANDA: char = '\u{0965}';

/// 자음 영역 시작 (क)
const CONSONANT_FIRST: u32 = 0x0915;
/// 자음 영역 끝 (ह)
const CONSONANT_LAST: u32 = 0x0939;
/// 누크타 결합 자음 영역 (क़ ~ य़)
const NUKTA_CONSONANT_FIRST: u32 = 0x0958;
const NUKTA_CONSONANT_LAST: u32 = 0x095F;

/// 기본 자음(क~ह) 또는 누크타 결합 자음인지 확인
pub fn is_consonant(c: char) -> bool {
    let cp = c as u32;
    (CONSONANT_FIRST..=CONSONANT_LAST).contains(&cp)
        || (NUKTA_CONSONANT_FIRST..=NUKTA_CONSONANT_LAST).contains(&cp)
}

/// 단어 경계 문자인지 확인
///
/// 공백/줄바꿈, 단다, 일반 구두점, 레거시 구분자 대체 문자(`]`, `&`)
pub fn is_word_boundary(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            DANDA
                | DOUBLE_DANDA
                | ','
                | '.'
                | '!'
                | '?'
                | ';'
                | ':'
                | '-'
                | '"'
                | '\''
                | '('
                | ')'
                | '['
                | ']'
                | '&'
                | '\u{2018}'
                | '\u{2019}'
                | '\u{201C}'
                | '\u{201D}'
        )
}

/// 자음 클러스터 길이 계산
///
/// 자음 [+누크타] (+비라마 +자음 [+누크타])* 형태를 소비하고 소비한 문자 수를 반환합니다.
/// 시퀀스가 비라마로 끝나면(반자) 비라마까지 포함합니다.
/// 첫 문자가 자음이 아니면 0.
pub fn consonant_cluster_len(chars: &[char]) -> usize {
    if !chars.first().copied().is_some_and(is_consonant) {
        return 0;
    }

    let mut i = 1;
    loop {
        if chars.get(i) == Some(&NUKTA) {
            i += 1;
        }
        match (chars.get(i), chars.get(i + 1)) {
            (Some(&VIRAMA), Some(&next)) if is_consonant(next) => i += 2,
            (Some(&VIRAMA), None) => return i + 1,
            _ => return i,
        }
    }
}
