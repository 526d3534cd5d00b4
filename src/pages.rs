use log::{debug, info, warn};

use mbti_study::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::{Args, Command, RankArgs, TipsArgs};
use crate::pages::config_reader::*;
use crate::pages::sources::*;

mod config_reader;
mod io_common;
mod io_csv;
mod io_xlsx;
mod render;
mod sources;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AppError {
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("The spreadsheet {path} has no data"))]
    EmptyExcel { path: String },
    #[snafu(display("The spreadsheet {path} has no worksheet named {name:?}"))]
    MissingWorksheet { path: String, name: String },
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading line {lineno} of the CSV file"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error reading JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error writing to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Unknown input type {provider:?} (expected csv or xlsx)"))]
    UnknownProvider { provider: String },
    #[snafu(display("Unknown output format {format:?} (expected chart, markdown or json)"))]
    UnknownFormat { format: String },
    #[snafu(display("Unknown difficulty {value:?} (expected 쉬움, 보통, 어려움, easy, normal or hard)"))]
    InvalidDifficulty { value: String },

    #[snafu(display("No data available. Looked for {looked_at}; upload a file with --upload"))]
    MissingData { looked_at: String },

    #[snafu(display("{source}"))]
    Lookup { source: LookupError },
    #[snafu(display("{source}"))]
    Ranking { source: RankingError },

    #[snafu(display("Error formatting the output"))]
    Rendering { source: std::fmt::Error },

    #[snafu(display("The ranking is different from the reference {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

impl AppError {
    /// Informational errors are not failures: they tell the user what is missing.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            AppError::MissingData { .. }
                | AppError::Lookup {
                    source: LookupError::NotSelected
                }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type BAppResult<T> = Result<T, Box<AppError>>;

/// Everything the ranking page computes for one request.
#[derive(Debug, Clone)]
pub struct RankingPage {
    pub result: RankingResult,
    /// The name of the file the data came from
    pub source_name: String,
    pub summary: JSValue,
    pub rendered: String,
}

/// Runs the tips page. Returns the text to show.
pub fn tips_page(args: &TipsArgs, config: &StudyConfig) -> AppResult<String> {
    let (code, profile) = match lookup(args.type_code.as_deref()) {
        Err(LookupError::NotSelected) => {
            info!("tips_page: no type selected");
            return render::render_nothing_selected();
        }
        x => x.context(LookupSnafu {})?,
    };
    info!("tips_page: {} -> {:?}", code, profile.title);

    let effects = config.effects.clone().unwrap_or_default();
    let show_gallery = !args.no_gallery && effects.gallery.unwrap_or(true);
    let confetti = !args.no_confetti && effects.confetti.unwrap_or(true);

    let pictures = if show_gallery {
        gallery(code, args.seed.or(config.gallery_seed).unwrap_or(0))
    } else {
        vec![]
    };

    let plan = if args.plan {
        let difficulty = parse_difficulty(
            args.difficulty
                .as_deref()
                .or(config.default_difficulty.as_deref()),
        )?;
        let topic = args
            .topic
            .as_deref()
            .or(config.default_topic.as_deref())
            .unwrap_or(mbti_study::plan::DEFAULT_TOPIC);
        Some(make_plan(code, topic, difficulty))
    } else {
        None
    };
    debug!("tips_page: plan: {:?}", plan);

    render::render_tips(&render::TipsView {
        code,
        profile,
        gallery: pictures,
        plan,
        confetti,
        checklist: args.checklist,
    })
}

fn parse_difficulty(s: Option<&str>) -> AppResult<Difficulty> {
    match s {
        None => Ok(Difficulty::default()),
        Some(x) => x
            .parse::<Difficulty>()
            .ok()
            .context(InvalidDifficultySnafu { value: x }),
    }
}

/// Runs the ranking page: finds the data, ranks the countries and renders the result.
///
/// Nothing is read or computed when no data source is available.
pub fn rank_page(args: &RankArgs, config: &StudyConfig, root: &Path) -> AppResult<RankingPage> {
    let (code, _) = lookup(args.type_code.as_deref()).context(LookupSnafu {})?;
    let format = render::OutputFormat::parse(
        args.format
            .as_deref()
            .or(config.output_format.as_deref()),
    )?;
    let rules = RankingRules {
        top_k: args
            .top
            .or(config.top_k)
            .unwrap_or(RankingRules::DEFAULT_RULES.top_k),
    };

    let candidates = source_candidates(args, config, root)?;
    let source = first_available(&candidates)?;
    info!(
        "rank_page: using {:?} source {:?}",
        source.origin, source.path
    );

    let table = source.read_table().map_err(|e| *e)?;
    debug!(
        "rank_page: headers {:?}, {} rows",
        table.headers,
        table.rows.len()
    );
    let result = rank_countries(&table, code, &rules).context(RankingSnafu {})?;
    if !result.degenerate.is_empty() {
        warn!(
            "rank_page: {} countries without data: {:?}",
            result.degenerate.len(),
            result.degenerate
        );
    }

    let source_name = io_common::simplify_file_name(&source.path);
    let summary = render::ranking_summary_js(&result, &source_name);
    let rendered = match format {
        render::OutputFormat::Chart => render::render_chart(&result, &source_name)?,
        render::OutputFormat::Markdown => render::render_markdown(&result)?,
        render::OutputFormat::Json => {
            serde_json::to_string_pretty(&summary).context(ParsingJsonSnafu {})?
        }
    };
    Ok(RankingPage {
        result,
        source_name,
        summary,
        rendered,
    })
}

pub fn run_ranking(args: &RankArgs, config: &StudyConfig, root: &Path) -> AppResult<()> {
    let page = rank_page(args, config, root)?;

    match args.out.as_deref() {
        None | Some("stdout") => println!("{}", page.rendered),
        Some(p) => {
            fs::write(p, &page.rendered).context(WritingOutputSnafu { path: p })?;
            info!("run_ranking: wrote {}", p);
        }
    }

    // The reference ranking, if provided for comparison
    if let Some(reference_p) = args.reference.as_deref() {
        check_reference(&page.summary, reference_p)?;
    }
    Ok(())
}

fn check_reference(summary: &JSValue, reference_p: &str) -> AppResult<()> {
    let contents =
        fs::read_to_string(reference_p).context(OpeningJsonSnafu { path: reference_p })?;
    let reference: JSValue = serde_json::from_str(&contents).context(ParsingJsonSnafu {})?;
    let pretty_ref = serde_json::to_string_pretty(&reference).context(ParsingJsonSnafu {})?;
    let pretty = serde_json::to_string_pretty(summary).context(ParsingJsonSnafu {})?;
    if pretty_ref != pretty {
        warn!("Found differences with the reference {}", reference_p);
        print_diff(pretty_ref.as_str(), pretty.as_str(), "\n");
        return ReferenceMismatchSnafu { path: reference_p }.fail();
    }
    info!("check_reference: the ranking matches {}", reference_p);
    Ok(())
}

/// Entry point for all the commands.
pub fn run(args: &Args) -> AppResult<()> {
    let (config, root) = match args.config.as_deref() {
        Some(p) => read_config(p)?,
        None => (StudyConfig::default(), PathBuf::new()),
    };
    debug!("run: config: {:?} root: {:?}", config, root);

    match &args.command {
        Command::Tips(tips_args) => {
            let text = tips_page(tips_args, &config)?;
            println!("{}", text);
            Ok(())
        }
        Command::Rank(rank_args) => run_ranking(rank_args, &config, &root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_dir() -> PathBuf {
        [env!("CARGO_MANIFEST_DIR"), "tests", "data"].iter().collect()
    }

    fn tips_args(code: Option<&str>) -> TipsArgs {
        TipsArgs {
            type_code: code.map(|s| s.to_string()),
            topic: None,
            difficulty: None,
            plan: false,
            checklist: false,
            no_gallery: false,
            no_confetti: false,
            seed: None,
        }
    }

    fn rank_args(code: &str) -> RankArgs {
        RankArgs {
            type_code: Some(code.to_string()),
            data: None,
            upload: None,
            input_type: None,
            excel_worksheet_name: None,
            top: None,
            format: Some("json".to_string()),
            out: None,
            reference: None,
        }
    }

    fn countries(result: &RankingResult) -> Vec<String> {
        result.entries.iter().map(|e| e.country.clone()).collect()
    }

    #[test]
    fn tips_for_a_type() {
        let text = tips_page(&tips_args(Some("INTP")), &StudyConfig::default()).unwrap();
        assert!(text.contains("INTP — 분석가형: 개념 탐구 + 실험"));
        assert!(text.contains("1. 개념의 '왜'를 깊게 파고들기"));
        assert!(text.contains("3. 혼자서 생각을 정리할 종이와 다이어그램 활용"));
        assert!(text.contains("영감 이미지 갤러리"));
        assert!(!text.contains("플랜"));
    }

    #[test]
    fn tips_with_plan() {
        let mut args = tips_args(Some("ENTJ"));
        args.plan = true;
        args.difficulty = Some("어려움".to_string());
        args.topic = Some("물리".to_string());
        args.no_gallery = true;
        args.checklist = true;
        let text = tips_page(&args, &StudyConfig::default()).unwrap();
        assert!(text.contains("ENTJ 맞춤 35분 플랜 — 물리"));
        assert!(text.contains("- 핵심 개념 학습 20분"));
        assert!(text.contains("- [ ] 오답 노트 정리"));
        assert!(!text.contains("영감 이미지 갤러리"));
    }

    #[test]
    fn tips_nothing_selected() {
        let text = tips_page(&tips_args(None), &StudyConfig::default()).unwrap();
        assert!(text.contains(mbti_study::profiles::PLACEHOLDER_IMAGE));
        let text = tips_page(&tips_args(Some("선택하세요")), &StudyConfig::default()).unwrap();
        assert!(text.contains(mbti_study::profiles::PLACEHOLDER_IMAGE));
    }

    #[test]
    fn tips_unknown_type() {
        let res = tips_page(&tips_args(Some("INXJ")), &StudyConfig::default());
        assert!(matches!(
            res,
            Err(AppError::Lookup {
                source: LookupError::UnknownCategory(_)
            })
        ));
        assert!(!res.unwrap_err().is_informational());
    }

    #[test]
    fn tips_bad_difficulty() {
        let mut args = tips_args(Some("ENTJ"));
        args.plan = true;
        args.difficulty = Some("impossible".to_string());
        let res = tips_page(&args, &StudyConfig::default());
        assert!(matches!(res, Err(AppError::InvalidDifficulty { .. })));
    }

    #[test]
    fn rank_bundled_csv() {
        let mut args = rank_args("INTJ");
        args.data = Some(test_dir().join("two_countries.csv").display().to_string());
        let page = rank_page(&args, &StudyConfig::default(), Path::new("")).unwrap();
        assert_eq!(countries(&page.result), vec!["B", "A"]);
        assert_eq!(page.result.entries[0].ratio, 0.5);
        assert_eq!(page.result.entries[1].ratio, 0.1);
        assert_eq!(page.source_name, "two_countries.csv");
        assert_eq!(page.summary["results"][0]["country"], json!("B"));
        assert_eq!(page.summary["results"][1]["rank"], json!(2));
    }

    #[test]
    fn rank_prefers_bundled_over_upload() {
        let mut args = rank_args("INTJ");
        args.data = Some(test_dir().join("two_countries.csv").display().to_string());
        args.upload = Some(test_dir().join("countries.csv").display().to_string());
        let page = rank_page(&args, &StudyConfig::default(), Path::new("")).unwrap();
        assert_eq!(page.source_name, "two_countries.csv");
    }

    #[test]
    fn rank_falls_back_to_upload() {
        let mut args = rank_args("ENFP");
        args.data = Some(test_dir().join("does_not_exist.csv").display().to_string());
        args.upload = Some(test_dir().join("countries.csv").display().to_string());
        let page = rank_page(&args, &StudyConfig::default(), Path::new("")).unwrap();
        assert_eq!(page.source_name, "countries.csv");
        assert_eq!(page.result.entries.len(), 10);
        assert_eq!(page.result.degenerate, vec!["Atlantis".to_string()]);
        for w in page.result.entries.windows(2) {
            assert!(w[0].ratio >= w[1].ratio);
        }
    }

    #[test]
    fn rank_missing_data() {
        let mut args = rank_args("INTJ");
        args.data = Some(test_dir().join("does_not_exist.csv").display().to_string());
        let res = rank_page(&args, &StudyConfig::default(), Path::new(""));
        let err = res.unwrap_err();
        assert!(matches!(err, AppError::MissingData { .. }));
        assert!(err.is_informational());
    }

    #[test]
    fn rank_unknown_column() {
        let mut args = rank_args("ESTP");
        args.data = Some(test_dir().join("partial_columns.csv").display().to_string());
        let res = rank_page(&args, &StudyConfig::default(), Path::new(""));
        assert!(matches!(
            res,
            Err(AppError::Ranking {
                source: RankingError::MissingCategoryColumn {
                    code: CategoryCode::ESTP
                }
            })
        ));
        let mut args = rank_args("INTJJ");
        args.data = Some(test_dir().join("partial_columns.csv").display().to_string());
        let res = rank_page(&args, &StudyConfig::default(), Path::new(""));
        assert!(matches!(
            res,
            Err(AppError::Lookup {
                source: LookupError::UnknownCategory(_)
            })
        ));
    }

    #[test]
    fn rank_korean_headers() {
        let mut args = rank_args("INFP");
        args.data = Some(test_dir().join("partial_columns.csv").display().to_string());
        let page = rank_page(&args, &StudyConfig::default(), Path::new("")).unwrap();
        assert_eq!(countries(&page.result), vec!["대한민국", "일본"]);
    }

    #[test]
    fn rank_no_country_column() {
        let mut args = rank_args("INTJ");
        args.data = Some(test_dir().join("no_country.csv").display().to_string());
        let res = rank_page(&args, &StudyConfig::default(), Path::new(""));
        assert!(matches!(
            res,
            Err(AppError::Ranking {
                source: RankingError::MissingCountryColumn { .. }
            })
        ));
    }

    #[test]
    fn rank_empty_data() {
        let mut args = rank_args("INTJ");
        args.data = Some(test_dir().join("headers_only.csv").display().to_string());
        let res = rank_page(&args, &StudyConfig::default(), Path::new(""));
        let err = res.unwrap_err();
        assert!(matches!(
            err,
            AppError::Ranking {
                source: RankingError::NoRows
            }
        ));
        assert!(!err.is_informational());

        let mut args = rank_args("INTJ");
        args.data = Some(test_dir().join("all_zero.csv").display().to_string());
        let res = rank_page(&args, &StudyConfig::default(), Path::new(""));
        match res {
            Err(AppError::Ranking {
                source: RankingError::NoValidRows { excluded },
            }) => assert_eq!(excluded, vec!["A".to_string(), "B".to_string()]),
            x => panic!("unexpected result: {:?}", x.map(|p| p.rendered)),
        }
    }

    #[test]
    fn rank_xlsx() {
        let mut args = rank_args("INTJ");
        args.upload = Some(test_dir().join("two_countries.xlsx").display().to_string());
        args.data = Some(test_dir().join("does_not_exist.csv").display().to_string());
        let page = rank_page(&args, &StudyConfig::default(), Path::new("")).unwrap();
        assert_eq!(countries(&page.result), vec!["B", "A"]);
    }

    #[test]
    fn rank_with_config() {
        let (config, root) = read_config(
            test_dir()
                .join("studybuddy_config.json")
                .display()
                .to_string()
                .as_str(),
        )
        .unwrap();
        let mut args = rank_args("INTJ");
        args.format = None;
        let page = rank_page(&args, &config, &root).unwrap();
        assert_eq!(page.source_name, "countries.csv");
        assert_eq!(page.result.entries.len(), 5);
        assert!(page.rendered.starts_with("| # |"));
    }

    #[test]
    fn rank_matches_reference() {
        let mut args = rank_args("INTJ");
        args.data = Some(test_dir().join("two_countries.csv").display().to_string());
        let page = rank_page(&args, &StudyConfig::default(), Path::new("")).unwrap();
        let reference = test_dir().join("two_countries_intj_expected.json");
        check_reference(&page.summary, reference.display().to_string().as_str()).unwrap();

        let mut args = rank_args("INTP");
        args.data = Some(test_dir().join("two_countries.csv").display().to_string());
        let page = rank_page(&args, &StudyConfig::default(), Path::new("")).unwrap();
        let res = check_reference(&page.summary, reference.display().to_string().as_str());
        assert!(matches!(res, Err(AppError::ReferenceMismatch { .. })));
    }
}
