// The text shown to the user.

use serde_json::{json, Value as JSValue};
use snafu::prelude::*;

use std::fmt::{self, Write};

use mbti_study::plan::StudyPlan;
use mbti_study::profiles::{CHECKLIST, FOOTER, HEADER_IMAGE, PLACEHOLDER_IMAGE};
use mbti_study::*;

use crate::pages::*;

/// The width of the longest bar of the chart.
const CHART_WIDTH: usize = 40;

const TITLE: &str = "📚 MBTI Study Buddy — 내 유형에 딱 맞는 공부법";

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum OutputFormat {
    Chart,
    Markdown,
    Json,
}

impl OutputFormat {
    /// Chart when nothing is specified.
    pub fn parse(s: Option<&str>) -> AppResult<OutputFormat> {
        match s.map(|x| x.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("chart") => Ok(OutputFormat::Chart),
            Some("markdown") | Some("md") => Ok(OutputFormat::Markdown),
            Some("json") => Ok(OutputFormat::Json),
            Some(_) => UnknownFormatSnafu {
                format: s.unwrap_or_default(),
            }
            .fail(),
        }
    }
}

/// What the tips page shows for a selected type.
#[derive(Debug, Clone)]
pub struct TipsView {
    pub code: CategoryCode,
    pub profile: &'static CategoryProfile,
    /// Empty when the gallery is turned off.
    pub gallery: Vec<String>,
    pub plan: Option<StudyPlan>,
    pub confetti: bool,
    pub checklist: bool,
}

fn write_header(out: &mut String) -> fmt::Result {
    writeln!(out, "{}", TITLE)?;
    writeln!(
        out,
        "MBTI를 선택하면 당신에게 가장 잘 맞는 공부법과 실용 팁, 영감 이미지들을 한 번에 보여줍니다."
    )?;
    writeln!(out, "[image] {}", HEADER_IMAGE)?;
    writeln!(out)
}

fn write_plan(out: &mut String, plan: &StudyPlan, confetti: bool) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out, "### 오늘의 30분 집중 플랜 ✨")?;
    writeln!(
        out,
        "{} 맞춤 {}분 플랜 — {}",
        plan.code,
        plan.total_minutes(),
        plan.topic
    )?;
    writeln!(out, "난이도: {}", plan.difficulty.label())?;
    for step in plan.steps.iter() {
        writeln!(out, "- {} {}분", step.label, step.duration_minutes)?;
    }
    if confetti {
        writeln!(out, "🎉🎉🎉 플랜 완성! 🎉🎉🎉")?;
    }
    Ok(())
}

fn write_tips(out: &mut String, view: &TipsView) -> fmt::Result {
    write_header(out)?;

    writeln!(out, "## {} — {}", view.code, view.profile.title)?;
    writeln!(out, "당신의 성향에 최적화된 실전 공부 팁")?;
    for (i, tip) in view.profile.tips.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, tip)?;
    }
    writeln!(out, "[image: {} vibe] {}", view.code, view.profile.image)?;

    if !view.gallery.is_empty() {
        writeln!(out)?;
        writeln!(out, "### 영감 이미지 갤러리")?;
        for url in view.gallery.iter() {
            writeln!(out, "[image] {}", url)?;
        }
    }

    if let Some(plan) = &view.plan {
        write_plan(out, plan, view.confetti)?;
    }

    if view.checklist {
        writeln!(out)?;
        writeln!(out, "---")?;
        writeln!(out, "### 간단 체크리스트 (프린트 가능)")?;
        for item in CHECKLIST.iter() {
            writeln!(out, "- [ ] {}", item)?;
        }
    }

    writeln!(out)?;
    write!(out, "{}", FOOTER)
}

pub fn render_tips(view: &TipsView) -> AppResult<String> {
    let mut out = String::new();
    write_tips(&mut out, view).context(RenderingSnafu {})?;
    Ok(out)
}

fn write_nothing_selected(out: &mut String) -> fmt::Result {
    write_header(out)?;
    writeln!(
        out,
        "ℹ️ --type 으로 MBTI 유형을 선택해 주세요. 예시로 골라볼까요? 😄 (예: --type INTJ)"
    )?;
    for _ in 0..3 {
        writeln!(out, "[image] {}", PLACEHOLDER_IMAGE)?;
    }
    Ok(())
}

pub fn render_nothing_selected() -> AppResult<String> {
    let mut out = String::new();
    write_nothing_selected(&mut out).context(RenderingSnafu {})?;
    Ok(out)
}

pub fn ranking_summary_js(result: &RankingResult, source_name: &str) -> JSValue {
    let results: Vec<JSValue> = result
        .entries
        .iter()
        .enumerate()
        .map(|(idx, e)| {
            json!({
                "rank": idx + 1,
                "country": e.country,
                "value": e.raw_value,
                "total": e.total,
                "ratio": e.ratio,
            })
        })
        .collect();
    json!({
        "type": result.code.as_str(),
        "source": source_name,
        "rowsConsidered": result.rows_considered,
        "excluded": result.degenerate,
        "results": results,
    })
}

fn percent(ratio: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, ratio * 100.0)
}

fn write_chart(out: &mut String, result: &RankingResult, source_name: &str) -> fmt::Result {
    writeln!(
        out,
        "{} 비율 상위 {}개 국가",
        result.code,
        result.entries.len()
    )?;
    writeln!(out, "(source: {})", source_name)?;

    let top_ratio = result.entries.first().map(|e| e.ratio).unwrap_or(0.0);
    let name_width = result
        .entries
        .iter()
        .map(|e| e.country.chars().count())
        .max()
        .unwrap_or(0);
    for (idx, e) in result.entries.iter().enumerate() {
        let bar_len = if top_ratio > 0.0 {
            ((e.ratio / top_ratio) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        let padding = name_width - e.country.chars().count();
        writeln!(
            out,
            "{:>2}. {}{} |{} {}",
            idx + 1,
            e.country,
            " ".repeat(padding),
            "█".repeat(bar_len),
            percent(e.ratio, 1)
        )?;
    }

    if !result.degenerate.is_empty() {
        writeln!(
            out,
            "Excluded (no data for any type): {}",
            result.degenerate.join(", ")
        )?;
    }
    Ok(())
}

pub fn render_chart(result: &RankingResult, source_name: &str) -> AppResult<String> {
    let mut out = String::new();
    write_chart(&mut out, result, source_name).context(RenderingSnafu {})?;
    Ok(out)
}

// A pipe in a cell would end it.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

fn write_markdown(out: &mut String, result: &RankingResult) -> fmt::Result {
    writeln!(out, "| # | Country | {} | Total | Ratio |", result.code)?;
    writeln!(out, "|---|---|---:|---:|---:|")?;
    for (idx, e) in result.entries.iter().enumerate() {
        writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            idx + 1,
            escape_cell(&e.country),
            e.raw_value,
            e.total,
            percent(e.ratio, 2)
        )?;
    }
    Ok(())
}

pub fn render_markdown(result: &RankingResult) -> AppResult<String> {
    let mut out = String::new();
    write_markdown(&mut out, result).context(RenderingSnafu {})?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> RankingResult {
        RankingResult {
            code: CategoryCode::INTJ,
            entries: vec![
                RankingEntry {
                    country: "B".to_string(),
                    raw_value: 50.0,
                    total: 100.0,
                    ratio: 0.5,
                },
                RankingEntry {
                    country: "Atlantide".to_string(),
                    raw_value: 10.0,
                    total: 100.0,
                    ratio: 0.1,
                },
            ],
            rows_considered: 3,
            degenerate: vec!["Nowhere".to_string()],
        }
    }

    #[test]
    fn output_formats() {
        assert_eq!(OutputFormat::parse(None).unwrap(), OutputFormat::Chart);
        assert_eq!(
            OutputFormat::parse(Some("Markdown")).unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(OutputFormat::parse(Some("json")).unwrap(), OutputFormat::Json);
        assert!(matches!(
            OutputFormat::parse(Some("svg")),
            Err(AppError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn chart() {
        let text = render_chart(&result(), "data.csv").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "INTJ 비율 상위 2개 국가");
        assert_eq!(
            lines[2],
            format!(" 1. B         |{} 50.0%", "█".repeat(40))
        );
        assert_eq!(lines[3], format!(" 2. Atlantide |{} 10.0%", "█".repeat(8)));
        assert!(lines[4].contains("Nowhere"));
    }

    #[test]
    fn markdown() {
        let text = render_markdown(&result()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "| # | Country | INTJ | Total | Ratio |");
        assert_eq!(lines[2], "| 1 | B | 50 | 100 | 50.00% |");
        assert_eq!(lines[3], "| 2 | Atlantide | 10 | 100 | 10.00% |");
    }

    #[test]
    fn markdown_pipe_in_country() {
        let mut res = result();
        res.entries[0].country = "Trinidad | Tobago".to_string();
        let text = render_markdown(&res).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "| 1 | Trinidad \\| Tobago | 50 | 100 | 50.00% |");
    }

    #[test]
    fn summary() {
        let js = ranking_summary_js(&result(), "data.csv");
        assert_eq!(js["type"], json!("INTJ"));
        assert_eq!(js["rowsConsidered"], json!(3));
        assert_eq!(js["excluded"], json!(["Nowhere"]));
        assert_eq!(js["results"][1]["rank"], json!(2));
        assert_eq!(js["results"][1]["ratio"], json!(0.1));
    }

    #[test]
    fn tips_without_extras() {
        let text = render_tips(&TipsView {
            code: CategoryCode::ISFP,
            profile: profile(CategoryCode::ISFP),
            gallery: vec![],
            plan: None,
            confetti: true,
            checklist: false,
        })
        .unwrap();
        assert!(text.starts_with(TITLE));
        assert!(text.ends_with(FOOTER));
        assert!(!text.contains("갤러리"));
        assert!(!text.contains("🎉"));
        assert!(!text.contains("- [ ]"));
    }

    #[test]
    fn confetti_with_plan() {
        let plan = make_plan(CategoryCode::ISFP, "미술", Difficulty::Easy);
        let view = TipsView {
            code: CategoryCode::ISFP,
            profile: profile(CategoryCode::ISFP),
            gallery: vec![],
            plan: Some(plan),
            confetti: true,
            checklist: false,
        };
        let text = render_tips(&view).unwrap();
        assert!(text.contains("ISFP 맞춤 30분 플랜 — 미술"));
        assert!(text.contains("- 흥미 유발 (짧은 영상) 5분"));
        assert!(text.contains("난이도: 쉬움"));
        assert!(text.contains("🎉"));
        let text = render_tips(&TipsView {
            confetti: false,
            ..view
        })
        .unwrap();
        assert!(!text.contains("🎉"));
    }
}
