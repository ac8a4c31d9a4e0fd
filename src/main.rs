use anyhow::Context;
use clap::{Parser, Subcommand};
use codediff::artifacts::compare::engine::compare;
use codediff::artifacts::compare::row::RowFilter;
use codediff::artifacts::core::{PagerWriter, should_page};
use codediff::artifacts::normalize::policy::{NormalizationPolicy, SensitivityMode};
use codediff::commands::compare::{OutputFormat, RenderOptions, Renderer};
use minus::Pager;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "codediff",
    version = "0.1.0",
    about = "Structural side-by-side comparison of two submissions",
    long_about = "Aligns two source files line by line and classifies every row as exact, \
    structural (equal after normalization), left only, right only or mismatch. \
    Lines from an optional template are marked so they can be told apart from student code.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "compare",
        about = "Compare two submissions",
        long_about = "Compares submission A (left) with submission B (right). \
        The normalization preset is chosen with --mode, replaced by --policy if given, \
        and individual --ignore-* flags switch further toggles on."
    )]
    Compare {
        #[arg(index = 1, help = "The left submission")]
        a: PathBuf,
        #[arg(index = 2, help = "The right submission")]
        b: PathBuf,
        #[arg(short, long, help = "Boilerplate handed out with the assignment")]
        template: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = SensitivityMode::Smart)]
        mode: SensitivityMode,
        #[arg(short, long, help = "TOML file with normalization toggles")]
        policy: Option<PathBuf>,
        #[arg(long)]
        ignore_comments: bool,
        #[arg(long)]
        ignore_variable_names: bool,
        #[arg(long)]
        ignore_function_names: bool,
        #[arg(long)]
        ignore_type_names: bool,
        #[arg(long)]
        ignore_string_literals: bool,
        #[arg(long)]
        ignore_numeric_literals: bool,
        #[arg(long)]
        ignore_preprocessor: bool,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
        #[arg(
            long,
            default_value = "ESLRM",
            help = "Row kinds to show: E(xact), S(tructural), L(eft only), R(ight only), M(ismatch)"
        )]
        filter: String,
        #[arg(long, help = "Do not dim template lines")]
        no_dim_template: bool,
        #[arg(long, help = "Do not colour row kinds and changed words")]
        no_highlight: bool,
        #[arg(short, long, help = "Print row counts after the rows")]
        summary: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            a,
            b,
            template,
            mode,
            policy,
            ignore_comments,
            ignore_variable_names,
            ignore_function_names,
            ignore_type_names,
            ignore_string_literals,
            ignore_numeric_literals,
            ignore_preprocessor,
            format,
            filter,
            no_dim_template,
            no_highlight,
            summary,
        } => {
            let mut policy = match policy {
                Some(path) => NormalizationPolicy::load(&path)?,
                None => mode.policy(),
            };
            policy.ignore_comments |= ignore_comments;
            policy.ignore_variable_names |= ignore_variable_names;
            policy.ignore_function_names |= ignore_function_names;
            policy.ignore_type_names |= ignore_type_names;
            policy.ignore_string_literals |= ignore_string_literals;
            policy.ignore_numeric_literals |= ignore_numeric_literals;
            policy.ignore_preprocessor |= ignore_preprocessor;
            log::debug!("normalization policy: {policy:?}");

            let filter = RowFilter::try_parse(&filter)
                .with_context(|| format!("invalid row filter '{filter}', expected letters from ESLRM"))?;

            let code_a = read_source(&a)?;
            let code_b = read_source(&b)?;
            let template = match template {
                Some(path) => read_source(&path)?,
                None => String::new(),
            };

            let rows = compare(&code_a, &code_b, &template, &policy);
            let renderer = Renderer::new(RenderOptions::new(
                format,
                filter,
                !no_dim_template,
                !no_highlight,
                summary,
            ));

            if format == OutputFormat::Pretty && should_page() {
                let pager = Pager::new();
                let mut writer = PagerWriter::new(pager.clone());
                renderer.render(&rows, &mut writer)?;
                minus::page_all(pager)?;
            } else {
                let stdout = std::io::stdout();
                let mut writer = stdout.lock();
                renderer.render(&rows, &mut writer)?;
            }
        }
    }

    Ok(())
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
