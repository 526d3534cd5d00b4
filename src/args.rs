use clap::{Parser, Subcommand};

/// Study tips for your personality type, and which countries have the most people of each type.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON configuration file. For more information about the file format,
    /// read the documentation of the `mbti_study::manual` module.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Shows the study tips of a personality type.
    Tips(TipsArgs),
    /// Ranks the countries by the share of a personality type.
    Rank(RankArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct TipsArgs {
    /// (one of the 16 types, e.g. INTJ, or empty) The personality type. Without it, nothing is selected.
    #[clap(short = 't', long = "type", value_parser)]
    pub type_code: Option<String>,

    /// (text) The topic or subject to focus on today.
    #[clap(long, value_parser)]
    pub topic: Option<String>,

    /// (쉬움, 보통, 어려움 or easy, normal, hard) The difficulty of the plan.
    #[clap(short, long, value_parser)]
    pub difficulty: Option<String>,

    /// If passed, generates the 30 minute study plan.
    #[clap(long, takes_value = false)]
    pub plan: bool,

    /// If passed, shows the printable checklist.
    #[clap(long, takes_value = false)]
    pub checklist: bool,

    /// If passed, does not show the inspiration gallery.
    #[clap(long, takes_value = false)]
    pub no_gallery: bool,

    /// If passed, does not celebrate the creation of a plan.
    #[clap(long, takes_value = false)]
    pub no_confetti: bool,

    /// (number) Changes the pictures picked for the gallery.
    #[clap(long, value_parser)]
    pub seed: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct RankArgs {
    /// (one of the 16 types, e.g. INTJ) The personality type to rank the countries by.
    #[clap(short = 't', long = "type", value_parser)]
    pub type_code: Option<String>,

    /// (file path) The bundled data file. It is used if it exists. This overrides the data sources
    /// of the configuration file.
    #[clap(long, value_parser)]
    pub data: Option<String>,

    /// (file path) The file to use when the bundled data file does not exist.
    #[clap(short, long, value_parser)]
    pub upload: Option<String>,

    /// (csv or xlsx) The type of the input. If not specified, it is guessed from the file extension.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (default: the first worksheet) When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (number, default 10) How many countries to show.
    #[clap(long, value_parser)]
    pub top: Option<usize>,

    /// (chart, markdown or json, default chart) How to present the ranking.
    #[clap(short, long, value_parser)]
    pub format: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the ranking will be written to the given location
    /// instead of the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing a ranking in JSON format. If provided, studybuddy will
    /// check that the computed ranking matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,
}
