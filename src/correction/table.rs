//! 내장 교정 테이블
//!
//! 코퍼스 검수에서 모은 잔여 오류 목록입니다. 선언 순서가 곧 우선순위입니다.

use super::CorrectionEntry;

/// 단어 단위 교정 (긴 항목을 짧은 항목보다 먼저 둠)
const WORD_FIXES: &[(&str, &str)] = &[
    ("भत्तर्ा", "भर्ता"),
    ("भत्तर्", "भर्त"),
    ("अध्िप", "अधिप"),
    ("ख्िा्रस्त", "क्रिस्त"),
    ("ख्रीस्त", "क्रिस्त"),
    ("कृिस्त", "क्रिस्त"),
    ("धर्मर्ात्मा", "धर्मात्मा"),
    ("ध्म्मर्ात्मा", "धर्मात्मा"),
    ("अधर्मर्", "अधर्म"),
    ("पि्रये", "प्रिये"),
    ("पि्रयों", "प्रियों"),
    ("पि्रय", "प्रिय"),
    ("पि्रत", "प्रित"),
    ("बन्ध्ु", "बन्धु"),
    ("बन्ध्", "बन्ध"),
    ("ध्ीरज", "धीरज"),
    ("ध्ीर", "धीर"),
    ("स्िथर", "स्थिर"),
    ("स्िधर", "स्थिर"),
    ("अध्ीन", "अधीन"),
    ("अध्िकार", "अधिकार"),
    ("सृशिटकत्तर्ा", "सृष्टिकर्ता"),
    ("जगकत्तर्ा", "जगत्कर्ता"),
    ("कत्तर्ा", "कर्ता"),
    ("जगभतर्ा", "जगभर्ता"),
    ("सृशिट", "सृष्टि"),
    ("सृशट", "सृष्टि"),
    ("जगत्त्रणी", "जगत्राणी"),
    ("सिध््द", "सिद्ध"),
    ("विपत्त्िा", "विपत्ति"),
    ("सम्पत्त्िा", "सम्पत्ति"),
    ("निधर््न", "निर्धन"),
    ("निदि्रत", "निद्रित"),
    ("स्रपा", "स्राप"),
    ("कोरेरेरस", "कोरस"),
    ("मं›ल", "मंगल"),
    ("रात्रिा", "रात्रि"),
    ("अन्ध्ेरा", "अंधेरा"),
    ("अन्िध्यारा", "अंधियारा"),
    ("मुक्ितदाता", "मुक्तिदाता"),
    ("तृप्ित", "तृप्ति"),
    ("पूब्र्ब", "पूर्व"),
    ("ब्र्ब", "र्व"),
    ("स्वगो±", "स्वर्गों"),
    ("आधर", "आधार"),
    ("ध्न्य", "धन्य"),
    ("ध्न", "धन"),
    ("पवत्रि", "पवित्र"),
    ("प््रेारित", "प्रेरित"),
    ("प््रे", "प्रे"),
    ("काय्र्य", "कार्य"),
    ("ध्म्र्म", "धर्म"),
    ("त्रिाएक", "त्रिएक"),
    ("िा", "िया"),
];

/// 비라마가 모음 기호 앞에 잘못 남은 경우
const MATRA_ALIGNMENT_FIXES: &[(&str, &str)] = &[
    ("क्ि", "कि"),
    ("ख्ि", "खि"),
    ("ग्ि", "गि"),
    ("घ्ि", "घि"),
    ("त्ि", "ति"),
    ("थ्ि", "थि"),
    ("ध्ि", "धि"),
    ("ध्ी", "धी"),
    ("ध्ु", "धु"),
    ("ध्ू", "धू"),
    ("ध्े", "धे"),
    ("ध्ै", "धै"),
    ("न्ि", "नि"),
    ("प्ि", "पि"),
    ("भ्ि", "भि"),
    ("भ्ु", "भु"),
    ("म्ि", "मि"),
    ("र्ा", "रा"),
    ("र्ि", "रि"),
    ("र्ी", "री"),
    ("र्ु", "रु"),
    ("र्ो", "रो"),
    ("श्ि", "शि"),
    ("ष्ि", "षि"),
    ("स्ि", "सि"),
    ("स्ा", "सा"),
];

/// 성경 참조 필드 전용 교정
const REFERENCE_FIXES: &[(&str, &str)] = &[
    ("प््रा: वा:", "प्रकाशितवाक्य"),
    ("प््राए वाए", "प्रकाशितवाक्य"),
    ("इब्रा:", "इब्रानियों"),
    ("इब्राए", "इब्रानियों"),
    ("एट", "प्रेरितों"),
    ("फिलिप्पि", "फिलिप्पी"),
    ("कॉरिन्थियों", "कुरिन्थियों"),
    ("कॉरिन्थ", "कुरिन्थियों"),
    ("ए", ":"),
    ("$", ":"),
    ("-", ":"),
];

fn entries(groups: &[&[(&str, &str)]]) -> Vec<CorrectionEntry> {
    groups
        .iter()
        .flat_map(|group| group.iter())
        .map(|&(w, c)| CorrectionEntry::new(w, c))
        .collect()
}

/// 내장 교정 목록 (단어 교정 -> 모음 기호 정렬 교정 순)
pub fn default_corrections() -> Vec<CorrectionEntry> {
    entries(&[WORD_FIXES, MATRA_ALIGNMENT_FIXES])
}

/// 참조 필드 교정 목록
pub fn reference_corrections() -> Vec<CorrectionEntry> {
    entries(&[REFERENCE_FIXES])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_wrong_forms() {
        let mut all = default_corrections();
        let total = all.len();
        all.sort_by(|a, b| a.wrong.cmp(&b.wrong));
        all.dedup_by(|a, b| a.wrong == b.wrong);
        assert_eq!(all.len(), total);
    }

    #[test]
    fn test_longer_priya_forms_first() {
        let all = default_corrections();
        let pos = |w: &str| all.iter().position(|e| e.wrong == w).unwrap();
        assert!(pos("पि्रये") < pos("पि्रय"));
        assert!(pos("पि्रयों") < pos("पि्रय"));
    }

    #[test]
    fn test_reference_table_order() {
        // 책 이름이 단일 문자 교정보다 먼저 선언되어야 함
        let refs = reference_corrections();
        let book = refs.iter().position(|e| e.wrong == "इब्राए").unwrap();
        let single = refs.iter().position(|e| e.wrong == "ए").unwrap();
        assert!(book < single);
    }
}
