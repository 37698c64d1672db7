//! 내장 KrutiDev 계열 레거시 글리프 테이블
//!
//! 패턴 순서는 의미가 없습니다. 최장 일치는 트라이가 보장합니다.
//! 누크타 결합 자음은 분해형(자음 + U+093C)으로 기록합니다.

use super::rule::GlyphRule;

/// 왼쪽 모음 기호 마커 (ि는 글리프상 자음 앞에 옴)
const LEFT_REORDER_MARKERS: &[(&str, &str)] = &[("f", "ि")];

/// 레프 마커 (글리프상 클러스터 뒤에 옴)
const REPH_MARKERS: &[(&str, &str)] = &[("Z", "र्")];

/// 단어 단위 통째 규칙: 일반 규칙 조합으로는 틀리게 나오는 시퀀스
const WHOLE_PATTERNS: &[(&str, &str)] = &[
    ("/eZ", "धर्म"),
    ("HkÙkkZ", "भर्ता"),
    ("vf/i", "अधिप"),
    ("f/i", "धिप"),
    ("f=k", "त्रि"),
    ("nzZ", "र्द्र"),
];

/// 독립 모음
const VOWELS: &[(&str, &str)] = &[
    ("v‚", "ऑ"),
    ("vkse", "ॐ"),
    ("vks", "ओ"),
    ("vkS", "औ"),
    ("vk", "आ"),
    ("v", "अ"),
    ("b±", "ईं"),
    ("bZ", "ई"),
    ("b", "इ"),
    ("mZ", "ऊ"),
    ("m", "उ"),
    ("Å", "ऊ"),
    (",s", "ऐ"),
    (",", "ए"),
    ("_", "ऋ"),
];

/// 합자 글리프 (결합 자음)
const CONJUNCTS: &[(&str, &str)] = &[
    ("«", "त्र्"),
    ("»", "त्र"),
    ("=", "त्र"),
    ("Ùk", "त्त"),
    ("Ù", "त्त्"),
    ("–", "दृ"),
    ("—", "कृ"),
    ("Ñ", "कृ"),
    ("é", "न्न"),
    ("™", "न्न्"),
    ("à", "ह्न"),
    ("á", "ह्य"),
    ("â", "हृ"),
    ("ã", "ह्म"),
    ("ºz", "ह्र"),
    ("º", "ह्"),
    ("í", "द्द"),
    ("Ì", "द्द"),
    ("{k", "क्ष"),
    ("{", "क्ष्"),
    ("Nî", "छ्य"),
    ("Vî", "ट्य"),
    ("Bî", "ठ्य"),
    ("Mî", "ड्य"),
    ("<î", "ढ्य"),
    ("|", "द्य"),
    ("K", "ज्ञ"),
    ("}", "द्व"),
    ("J", "श्र"),
    ("Vª", "ट्र"),
    ("Mª", "ड्र"),
    ("<ª", "ढ्र"),
    ("Nª", "छ्र"),
    ("Ø", "क्र"),
    ("Ý", "फ्र"),
    ("æ", "द्र"),
    ("ç", "प्र"),
    ("Á", "प्र"),
    ("xz", "ग्र"),
    ("#", "रु"),
    (":", "रू"),
    ("š", "क्त"),
    ("ä", "क्त"),
    ("ð", "द्ध"),
    (")", "द्ध"),
    ("ô", "क्क"),
    ("ê", "ट्ट"),
    ("Í", "ट्ट"),
    ("ë", "ट्ठ"),
    ("Î", "ट्ठ"),
    ("ì", "ड्ड"),
    ("Ï", "ड्ड"),
    ("ï", "ड्ढ"),
    ("Ô", "ड्ढ"),
    ("Ö", "झ्"),
    ("÷", "झ्"),
    ("Ó", "्य"),
    ("î", "्य"),
    ("z", "्र"),
    ("~j", "्र"),
    ("~", "्"),
];

/// 자음 (반자 + `k` 조합 포함)
const CONSONANTS: &[(&str, &str)] = &[
    ("d", "क"),
    ("Dk", "क"),
    ("D", "क्"),
    ("[k", "ख"),
    ("[", "ख्"),
    ("[+k", "ख\u{093C}"),
    ("[+", "ख\u{093C}्"),
    ("x", "ग"),
    ("Xk", "ग"),
    ("X", "ग्"),
    ("Ä", "घ"),
    ("?k", "घ"),
    ("?", "घ्"),
    ("³", "ङ"),
    ("p", "च"),
    ("Pk", "च"),
    ("P", "च्"),
    ("N", "छ"),
    ("t", "ज"),
    ("Tk", "ज"),
    ("T", "ज्"),
    ("T+", "ज\u{093C}्"),
    (">", "झ"),
    ("¥", "ञ"),
    ("V", "ट"),
    ("B", "ठ"),
    ("M", "ड"),
    ("<", "ढ"),
    (".k", "ण"),
    (".", "ण"),
    ("r", "त"),
    ("R", "त्"),
    ("Fk", "थ"),
    ("F", "थ्"),
    ("n", "द"),
    ("/k", "ध"),
    ("èk", "ध"),
    ("/", "ध्"),
    ("è", "ध्"),
    ("Ë", "ध्"),
    ("u", "न"),
    ("Uk", "न"),
    ("U", "न्"),
    ("i", "प"),
    ("Ik", "प"),
    ("I", "प्"),
    ("Q", "फ"),
    ("Q+Z", "फ\u{093C}्"),
    ("¶", "फ्"),
    ("c", "ब"),
    ("Ck", "ब"),
    ("C", "ब्"),
    ("Hk", "भ"),
    ("H", "भ्"),
    ("Ò", "भ"),
    ("e", "म"),
    ("Ek", "म"),
    ("E", "म्"),
    (";", "य"),
    ("¸", "य्"),
    ("j", "र"),
    ("y", "ल"),
    ("Y", "ळ"),
    ("o", "व"),
    ("Ok", "व"),
    ("O", "व्"),
    ("'k", "श"),
    ("'", "श्"),
    ("Ü", "श"),
    ("\"k", "ष"),
    ("\"", "ष्"),
    ("l", "स"),
    ("Lk", "स"),
    ("L", "स्"),
    ("g", "ह"),
    ("+", "\u{093C}"),
];

/// 종속 모음 기호 및 기타 기호
const SIGNS: &[(&str, &str)] = &[
    ("k", "ा"),
    ("ks", "ो"),
    ("kS", "ौ"),
    ("s", "े"),
    ("S", "ै"),
    ("h", "ी"),
    ("È", "ीं"),
    ("q", "ु"),
    ("w", "ू"),
    ("`", "ृ"),
    ("a", "ं"),
    ("aa", "ं"),
    ("¡", "ँ"),
    ("%", "ः"),
    ("W", "ॅ"),
    ("•", "ऽ"),
    ("·", "ऽ"),
    ("∙", "ऽ"),
    ("A", "।"),
    ("AA", "॥"),
];

/// 숫자 및 인용부호
const DIGITS_AND_QUOTES: &[(&str, &str)] = &[
    ("å", "०"),
    ("ƒ", "१"),
    ("„", "२"),
    ("…", "३"),
    ("†", "४"),
    ("‡", "५"),
    ("ˆ", "६"),
    ("‰", "७"),
    ("Š", "८"),
    ("‹", "९"),
    ("‘", "\""),
    ("’", "\""),
    ("“", "'"),
    ("”", "'"),
    ("^", "‘"),
    ("*", "’"),
    ("ß", "“"),
    ("Þ", "”"),
];

/// 레거시 글꼴에서도 그대로 렌더링되는 문자 (진단 없이 통과)
///
/// `]`, `&`는 구분자 대체 문자로 정리 단계에서 변환됩니다.
const IDENTITY: &[&str] = &[
    " ", "\t", "\n", "\r", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "!", "-", "]",
    "&", "$",
];

/// 내장 규칙 테이블 생성
pub fn default_rules() -> Vec<GlyphRule> {
    let substitution_groups = [
        WHOLE_PATTERNS,
        VOWELS,
        CONJUNCTS,
        CONSONANTS,
        SIGNS,
        DIGITS_AND_QUOTES,
    ];

    let mut rules: Vec<GlyphRule> = substitution_groups
        .iter()
        .flat_map(|group| group.iter())
        .map(|&(p, r)| GlyphRule::substitution(p, r))
        .collect();

    rules.extend(IDENTITY.iter().map(|&c| GlyphRule::substitution(c, c)));
    rules.extend(
        LEFT_REORDER_MARKERS
            .iter()
            .map(|&(p, r)| GlyphRule::left_reorder(p, r)),
    );
    rules.extend(REPH_MARKERS.iter().map(|&(p, r)| GlyphRule::reph(p, r)));
    rules
}
