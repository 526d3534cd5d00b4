/*!
Static study tips and pictures for each personality type.
*/

use log::debug;

use crate::config::*;

pub const HEADER_IMAGE: &str =
    "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?auto=format&q=75&w=800";

/// Shown three times when no type is selected.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1515879218367-8466d910aaa4?auto=format&q=75&w=800";

pub const CHECKLIST: [&str; 5] = [
    "오늘의 학습 목표 설정",
    "핵심 개념 15분 이해",
    "문제 풀이 15분",
    "오답 노트 정리",
    "복습/요약 5분",
];

pub const FOOTER: &str = "🎧 좋아하는 배경음악으로 몰입도를 높여보세요 — 25분 집중 후 5분 휴식!";

const GALLERY_KEYWORDS: [&str; 5] = ["study", "books", "focus", "study desk", "notebook"];
const GALLERY_BASE: &str = "https://source.unsplash.com/collection/9581285/800x600?";
const GALLERY_SIZE: usize = 3;

// Indexed by CategoryCode::index()
static PROFILES: [CategoryProfile; 16] = [
    CategoryProfile {
        title: "전략적 학습자: 장기 계획 + 핵심 원리",
        tips: [
            "학습 목표를 세부 단계로 분해해 로드맵을 만들기",
            "핵심 원리와 모델을 먼저 이해하고 예제로 확장하기",
            "조용한 환경에서 집중해서 문제를 풀기",
        ],
        image: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "분석가형: 개념 탐구 + 실험",
        tips: [
            "개념의 '왜'를 깊게 파고들기",
            "작은 실험(코드, 문제 풀이)으로 직접 해보기",
            "혼자서 생각을 정리할 종이와 다이어그램 활용",
        ],
        image: "https://images.unsplash.com/photo-1519744792095-2f2205e87b6f?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "리더형: 목표 중심 + 효율화",
        tips: [
            "주간/월간 학습 목표를 정하고 진행 상황 트래킹",
            "타인과의 스터디로 생산성을 높이기",
            "시간 블록을 만들어 집중 시간 확보",
        ],
        image: "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "발명가형: 토론 + 다양한 접근",
        tips: [
            "아이디어를 많이 시도하고 실패에서 배우기",
            "스터디나 디스코스에 참여해 토론하기",
            "문제를 다른 관점으로 재구성해보기",
        ],
        image: "https://images.unsplash.com/photo-1532619675605-1b9a7d8d85c4?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "통찰형: 의미 중심 + 계획적인 휴식",
        tips: [
            "학습 내용을 '나의 이야기'로 연결해 의미화하기",
            "짧은 휴식과 리플렉션 시간을 필수로 넣기",
            "시각적 노트(마인드맵)로 정리하기",
        ],
        image: "https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "중재자형: 창의적 + 유연한 학습",
        tips: [
            "흥미를 느끼는 주제부터 시작해 동기 부여하기",
            "작은 목표를 세워 성공 경험을 쌓기",
            "감성적 연결(음악, 그림)으로 기억 강화",
        ],
        image: "https://images.unsplash.com/photo-1526318472351-c75fcf070ee4?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "코치형: 협력 + 피드백",
        tips: [
            "스터디 그룹에서 가르치고 피드백 받기",
            "타인의 관점에서 설명해보기(페어티칭)",
            "계획표에 다른 사람과의 약속을 넣어 책임감을 높이기",
        ],
        image: "https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "활동가형: 흥미 + 다양한 자극",
        tips: [
            "프로젝트 기반 학습으로 손으로 만들어보기",
            "다양한 자료(영상, 팟캐스트, 퀴즈)로 변주 주기",
            "시간을 짧게 끊어 집중하는 포모도로 활용",
        ],
        image: "https://images.unsplash.com/photo-1503341455253-b2e723bb3dbb?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "현실주의자: 규칙적 + 꼼꼼",
        tips: [
            "체계적 복습 스케줄(예: 1일, 7일, 30일 복습) 만들기",
            "구체적 체크리스트로 진도 관리",
            "한 번에 하나씩 마무리하는 습관 들이기",
        ],
        image: "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "수호자형: 꾸준함 + 세심함",
        tips: [
            "안정된 환경에서 규칙적으로 공부하기",
            "노트 정리와 예습·복습의 철저한 실행",
            "작은 보상으로 동기 유지하기",
        ],
        image: "https://images.unsplash.com/photo-1529333166437-7750a6dd5a70?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "관리자형: 목표 달성 + 관리",
        tips: [
            "우선순위를 정해 중요한 것부터 해결",
            "성과 측정(퀴즈, 자가점검)으로 효율 확인",
            "팀 프로젝트에서 리더 역할 맡아 실행력 발휘",
        ],
        image: "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "사교가형: 협력 + 규율",
        tips: [
            "친구와 스터디 약속 잡아 꾸준히 참석",
            "교사·동료와의 피드백을 적극 활용",
            "시각적 플래너로 하루를 조직하기",
        ],
        image: "https://images.unsplash.com/photo-1554774853-b4a4f62d1f22?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "장인형: 실습 + 즉흥성",
        tips: [
            "실습 중심으로 '해보며 배우기'를 선호",
            "도전적인 문제를 단계별로 분해해 해결",
            "빠른 피드백(자체 테스트)으로 개선",
        ],
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "모험가형: 감각적 + 느긋",
        tips: [
            "시각적 자료와 감성적 동기(좋아하는 배경음악) 활용",
            "완벽보다 성취 경험을 우선시하기",
            "짧은 세션으로 규칙적 학습 유지",
        ],
        image: "https://images.unsplash.com/photo-1504198453319-5ce911bafcde?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "촉진자형: 액션 + 경쟁",
        tips: [
            "실제 문제 중심 학습으로 흥미 유지",
            "짧은 시간 안에 해내는 챌린지 형식 도입",
            "스피드 퀴즈로 복습 습관화",
        ],
        image: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?auto=format&q=75&w=1200",
    },
    CategoryProfile {
        title: "연예인형: 활기 + 체험",
        tips: [
            "프로젝트·발표 중심으로 활동형 학습 선호",
            "시각 자료나 이야기로 내용을 꾸미기",
            "친구와 함께하는 실습으로 동기 유지",
        ],
        image: "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?auto=format&q=75&w=1200",
    },
];

pub fn profile(code: CategoryCode) -> &'static CategoryProfile {
    &PROFILES[code.index()]
}

/// Resolves the selection made by a user.
///
/// `None`, an empty string and the [`PLACEHOLDER`] all mean that nothing
/// was selected. Any other value must be one of the 16 codes, exactly.
pub fn lookup(
    choice: Option<&str>,
) -> Result<(CategoryCode, &'static CategoryProfile), LookupError> {
    let s = match choice {
        None => return Err(LookupError::NotSelected),
        Some(s) if s.is_empty() || s == PLACEHOLDER => return Err(LookupError::NotSelected),
        Some(s) => s,
    };
    let code: CategoryCode = s.parse()?;
    debug!("lookup: {:?} -> {:?}", s, code);
    Ok((code, profile(code)))
}

/// The inspiration gallery: the profile picture followed by a few related pictures.
///
/// The related pictures are "random" in the sense that they are hard to guess, but
/// the same seed always returns the same gallery.
pub fn gallery(code: CategoryCode, seed: u32) -> Vec<String> {
    let mut keyed: Vec<(String, &str)> = GALLERY_KEYWORDS
        .iter()
        .map(|k| (sha256::digest(format!("{:08}{}{}", seed, code, k)), *k))
        .collect();
    keyed.sort();
    debug!("gallery: {} seed {}: {:?}", code, seed, keyed);

    let mut res = vec![profile(code).image.to_string()];
    res.extend(
        keyed
            .iter()
            .take(GALLERY_SIZE)
            .map(|(_, k)| format!("{}{}", GALLERY_BASE, k.replace(' ', "%20"))),
    );
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_type_has_a_full_profile() {
        for code in CategoryCode::ALL {
            let p = profile(code);
            assert!(!p.title.is_empty(), "{}", code);
            assert!(!p.image.is_empty(), "{}", code);
            assert_eq!(p.tips.len(), 3);
            assert!(p.tips.iter().all(|t| !t.is_empty()), "{}", code);
        }
    }

    #[test]
    fn lookup_known_codes() {
        for code in CategoryCode::ALL {
            let (c, p) = lookup(Some(code.as_str())).unwrap();
            assert_eq!(c, code);
            assert_eq!(p, profile(code));
        }
        let (_, p) = lookup(Some("ISTJ")).unwrap();
        assert_eq!(p.title, "현실주의자: 규칙적 + 꼼꼼");
    }

    #[test]
    fn lookup_nothing_selected() {
        assert_eq!(lookup(None), Err(LookupError::NotSelected));
        assert_eq!(lookup(Some("")), Err(LookupError::NotSelected));
        assert_eq!(lookup(Some(PLACEHOLDER)), Err(LookupError::NotSelected));
    }

    #[test]
    fn lookup_unknown_codes() {
        for s in ["INTX", "intj", "ABCD", " INTJ", "INTJP"] {
            assert_eq!(
                lookup(Some(s)),
                Err(LookupError::UnknownCategory(s.to_string()))
            );
        }
    }

    #[test]
    fn gallery_is_stable() {
        let g1 = gallery(CategoryCode::ENFP, 7);
        let g2 = gallery(CategoryCode::ENFP, 7);
        assert_eq!(g1, g2);
        assert_eq!(g1.len(), 4);
        assert_eq!(g1[0], profile(CategoryCode::ENFP).image);
        let related: HashSet<&String> = g1[1..].iter().collect();
        assert_eq!(related.len(), 3);
        assert!(g1[1..].iter().all(|u| u.starts_with(GALLERY_BASE)));
        assert!(g1.iter().all(|u| !u.contains(' ')));
    }
}
