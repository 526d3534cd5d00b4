// The 30 minute study plan.

use log::debug;

use crate::config::*;

/// Extra minutes given to the main step of a plan when the difficulty is hard.
pub const HARD_EXTRA_MINUTES: u32 = 5;

pub const DEFAULT_TOPIC: &str = "수학 - 이차방정식";

/// The coarse grouping of the types that selects the plan template.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum PlanGroup {
    /// INTJ, ENTJ, ISTJ, ESTJ
    Structured,
    /// INFP, ENFP, ISFP, ESFP
    Exploratory,
    Balanced,
}

impl PlanGroup {
    pub fn of(code: CategoryCode) -> PlanGroup {
        use CategoryCode::*;
        match code {
            INTJ | ENTJ | ISTJ | ESTJ => PlanGroup::Structured,
            INFP | ENFP | ISFP | ESFP => PlanGroup::Exploratory,
            _ => PlanGroup::Balanced,
        }
    }

    fn template(&self) -> [(&'static str, u32); 4] {
        match self {
            PlanGroup::Structured => [
                ("목표 설정", 5),
                ("핵심 개념 학습", 15),
                ("문제 풀이", 8),
                ("복습·요약", 2),
            ],
            PlanGroup::Exploratory => [
                ("흥미 유발 (짧은 영상)", 5),
                ("핵심 활동", 15),
                ("창의적 정리", 6),
                ("짧은 복습", 4),
            ],
            PlanGroup::Balanced => [
                ("개념 정리", 6),
                ("실습/문제풀이", 18),
                ("오답 정리", 4),
                ("자기평가", 2),
            ],
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct PlanStep {
    pub label: &'static str,
    pub duration_minutes: u32,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct StudyPlan {
    pub code: CategoryCode,
    pub topic: String,
    pub difficulty: Difficulty,
    pub group: PlanGroup,
    pub steps: [PlanStep; 4],
}

impl StudyPlan {
    pub fn total_minutes(&self) -> u32 {
        self.steps.iter().map(|s| s.duration_minutes).sum()
    }
}

/// Builds the plan for a type, adjusted for the difficulty.
///
/// A hard difficulty lengthens the second (main) step by [`HARD_EXTRA_MINUTES`],
/// whatever the template.
pub fn make_plan(code: CategoryCode, topic: &str, difficulty: Difficulty) -> StudyPlan {
    let group = PlanGroup::of(code);
    let mut steps: [PlanStep; 4] = group.template().map(|(label, duration_minutes)| PlanStep {
        label,
        duration_minutes,
    });
    if difficulty == Difficulty::Hard {
        steps[1].duration_minutes += HARD_EXTRA_MINUTES;
    }
    let topic = match topic.trim() {
        "" => DEFAULT_TOPIC.to_string(),
        t => t.to_string(),
    };
    debug!(
        "make_plan: {} group {:?} difficulty {:?}: {:?}",
        code, group, difficulty, steps
    );
    StudyPlan {
        code,
        topic,
        difficulty,
        group,
        steps,
    }
}
