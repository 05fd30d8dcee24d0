use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use stepdiff::areas::workbench::Workbench;
use stepdiff::artifacts::codec::manifest::Manifest;
use stepdiff::artifacts::core::Output;
use stepdiff::artifacts::diff::{DEFAULT_MAX_LINES, DiffOptions, OutputFormat};
use stepdiff::artifacts::submission::record::SourceKind;
use stepdiff::commands::porcelain::compare::ComparePicks;
use stepdiff::commands::porcelain::submit::SourcePaths;

#[derive(Parser)]
#[command(
    name = "stepdiff",
    version,
    author,
    about = "Compare step-by-step lesson code against the sample",
    long_about = "This tool compares a learner's code with the sample solution of a lesson step, \
    splits and assembles multi-file JavaScript blobs, \
    and browses or writes the submission documents exported by the playground.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "STEPDIFF_MAX_LINES",
        default_value_t = DEFAULT_MAX_LINES,
        help = "Skip diffs whose combined line count exceeds this limit"
    )]
    max_lines: usize,
    #[arg(long, global = true, value_enum, default_value_t, help = "How to render diff rows")]
    format: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "NO_PAGER",
        value_parser = FalseyValueParser::new(),
        help = "Never page the output"
    )]
    no_pager: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default)]
struct ManifestArgs {
    #[arg(
        long,
        value_name = "NAMES",
        conflicts_with = "manifest_file",
        help = "Comma separated list of the step's JavaScript files"
    )]
    manifest: Option<String>,
    #[arg(long, value_name = "PATH", help = "Read the file list from a manifest.json")]
    manifest_file: Option<PathBuf>,
}

impl ManifestArgs {
    fn resolve(&self) -> Result<Manifest> {
        match (&self.manifest, &self.manifest_file) {
            (Some(list), _) => Ok(Manifest::parse_list(list)),
            (None, Some(path)) => Manifest::load(path),
            (None, None) => Ok(Manifest::empty()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the line differences between two source files",
        long_about = "This command compares two source files line by line. \
        With a manifest or a file name both files are read as combined JavaScript blobs \
        and only the selected file is compared."
    )]
    Diff {
        #[arg(index = 1, help = "The original file, usually the sample")]
        before: PathBuf,
        #[arg(index = 2, help = "The changed file, usually the learner's code")]
        after: PathBuf,
        #[command(flatten)]
        manifest: ManifestArgs,
        #[arg(long, help = "Compare only this file of the combined blobs")]
        file: Option<String>,
    },
    #[command(
        name = "split",
        about = "Split a combined JavaScript blob into its files",
        long_about = "This command splits a blob made of `// --- file: name ---` sections. \
        It lists the files found, or writes them into a directory when --out is given."
    )]
    Split {
        #[arg(index = 1, help = "The combined blob")]
        combined: PathBuf,
        #[command(flatten)]
        manifest: ManifestArgs,
        #[arg(long, help = "Write the files into this directory")]
        out: Option<PathBuf>,
    },
    #[command(
        name = "assemble",
        about = "Combine a directory of JavaScript files into one blob",
        long_about = "This command reads the files listed by the manifest from a directory \
        and prints them as one combined blob. Missing files are taken as empty."
    )]
    Assemble {
        #[arg(index = 1, help = "The directory holding the files")]
        dir: PathBuf,
        #[command(flatten)]
        manifest: ManifestArgs,
    },
    #[command(
        name = "view",
        about = "List the submissions found in export and submit documents",
        long_about = "This command reads export and submit documents, from files or recursively \
        from directories, and lists every step with its submissions, oldest first."
    )]
    View {
        #[arg(index = 1, required = true, help = "Documents or directories to read")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "compare",
        about = "Diff two submissions of one step",
        long_about = "This command compares two submissions of a step. \
        By default the oldest submission is compared against the newest."
    )]
    Compare {
        #[arg(index = 1, required = true, help = "Documents or directories to read")]
        paths: Vec<PathBuf>,
        #[arg(long, help = "The step to compare, e.g. step3")]
        step: String,
        #[arg(long, value_enum, default_value_t, help = "Which source to compare")]
        kind: SourceKind,
        #[arg(long, help = "Compare only this JavaScript file")]
        file: Option<String>,
        #[arg(long, help = "1-based index of the older submission, as listed by view")]
        old: Option<usize>,
        #[arg(long, help = "1-based index of the newer submission, as listed by view")]
        new: Option<usize>,
        #[command(flatten)]
        manifest: ManifestArgs,
    },
    #[command(
        name = "submit",
        about = "Write a submit document for one step",
        long_about = "This command packs the HTML, CSS and JavaScript of a step into a submit \
        document named after the learner and today's date."
    )]
    Submit {
        #[arg(long, help = "The step being submitted, e.g. step3")]
        step: String,
        #[arg(long, help = "The HTML source")]
        html: Option<PathBuf>,
        #[arg(long, help = "The CSS source")]
        css: Option<PathBuf>,
        #[arg(long, help = "The JavaScript source")]
        js: Option<PathBuf>,
        #[arg(long, default_value = "", help = "The learner's name, used in the file name")]
        name: String,
        #[arg(long, default_value = ".", help = "Where to write the document")]
        out: PathBuf,
    },
    #[command(
        name = "export",
        about = "Write the latest submission of every step to one document",
        long_about = "This command reads export and submit documents and writes the newest \
        submission of each step into a single export document."
    )]
    Export {
        #[arg(index = 1, required = true, help = "Documents or directories to read")]
        paths: Vec<PathBuf>,
        #[arg(long, default_value = "", help = "The learner's name, used in the file name")]
        name: String,
        #[arg(long, default_value = ".", help = "Where to write the document")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = DiffOptions::new(cli.max_lines, cli.format);
    let output = Output::select(!cli.no_pager);
    let workbench = Workbench::new(output.writer(), options);

    match &cli.command {
        Commands::Diff {
            before,
            after,
            manifest,
            file,
        } => workbench.diff(before, after, &manifest.resolve()?, file.as_deref())?,
        Commands::Split {
            combined,
            manifest,
            out,
        } => workbench.split(combined, &manifest.resolve()?, out.as_deref())?,
        Commands::Assemble { dir, manifest } => workbench.assemble(dir, &manifest.resolve()?)?,
        Commands::View { paths } => workbench.view(paths)?,
        Commands::Compare {
            paths,
            step,
            kind,
            file,
            old,
            new,
            manifest,
        } => {
            let picks = ComparePicks::new(*kind, file.as_deref(), *old, *new);
            workbench.compare(paths, step, &picks, &manifest.resolve()?)?
        }
        Commands::Submit {
            step,
            html,
            css,
            js,
            name,
            out,
        } => {
            let sources = SourcePaths::new(html.clone(), css.clone(), js.clone());
            workbench.submit(step, &sources, name, out)?
        }
        Commands::Export { paths, name, out } => workbench.export(paths, name, out)?,
    }

    // the pager only shows once every writer handle is gone
    drop(workbench);
    output.finish()
}
