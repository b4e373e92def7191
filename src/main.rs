use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use courser::catalog::Catalog;
use courser::config::{OutputMode, load_config};
use courser::query::{self, CourseQuery, SortKey};
use courser::render;
use courser::state::SearchSession;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Filter by university name (case-insensitive substring)
    #[arg(long, default_value = "")]
    university: String,

    /// Filter by course area (case-insensitive substring)
    #[arg(long, default_value = "")]
    area: String,

    /// Filter by course name (typo-tolerant)
    #[arg(long, default_value = "")]
    course: String,

    /// Filter by exact degree type
    #[arg(long, default_value = "")]
    degree: String,

    /// Sort results
    #[arg(long, value_enum)]
    sort: Option<SortArg>,

    /// Path to the course dataset (CSV); overrides the config file
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Emit results as JSON instead of text cards
    #[arg(long)]
    json: bool,

    /// Start an interactive prompt instead of a one-shot search
    #[arg(short, long)]
    interactive: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    University,
    Degree,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::University => SortKey::University,
            SortArg::Degree => SortKey::DegreeType,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // 1. Load config and resolve the dataset path
    let config = load_config().context("failed to read config file")?;
    let output = if args.json {
        OutputMode::Json
    } else {
        config.general.output
    };
    let Some(dataset) = args.dataset.clone().or_else(|| config.general.dataset.clone())
    else {
        bail!("no dataset given: pass --dataset <PATH> or set general.dataset in config.toml");
    };

    // 2. Load the catalog; any failure degrades to one static message
    let catalog = match Catalog::load(&dataset) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("dataset load failed: {}", err);
            eprintln!("unable to load course data");
            std::process::exit(1);
        }
    };

    // 3. Run
    if args.interactive {
        run_interactive(catalog)
    } else {
        run_once(catalog, &args, output)
    }
}

fn run_once(catalog: Catalog, args: &Args, output: OutputMode) -> Result<()> {
    let query = CourseQuery {
        university: args.university.clone(),
        area: args.area.clone(),
        course_name: args.course.clone(),
        degree_type: args.degree.clone(),
        sort: args.sort.map(SortKey::from),
    };
    let outcome = query::search(&catalog, &query);

    let mut out = io::stdout().lock();
    match output {
        OutputMode::Json => render::render_json(&mut out, &catalog, &outcome),
        OutputMode::Text => render::render_text(&mut out, &catalog, &outcome),
    }
    .context("failed to write results")
}

const HELP: &str = "\
commands:
  university [TEXT]   filter by university name (empty clears)
  area [TEXT]         filter by course area (empty clears)
  course [TEXT]       filter by course name, typo-tolerant (empty clears)
  degree [TEXT]       filter by exact degree type (empty clears)
  sort <university|degree|none>
  reset               clear every filter and the sort
  degrees             list distinct degree types
  universities        list distinct university names
  help                show this message
  quit                exit";

fn run_interactive(catalog: Catalog) -> Result<()> {
    let mut session = SearchSession::new(catalog);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    render::render_text(&mut out, session.catalog(), session.outcome())?;
    writeln!(out)?;
    writeln!(out, "Type 'help' for the list of commands.")?;

    let mut line = String::new();
    loop {
        write!(out, "\n> ")?;
        out.flush()?;
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        let (command, value) = match input.split_once(char::is_whitespace) {
            Some((command, value)) => (command, value.trim()),
            None => (input, ""),
        };

        match command {
            "" => continue,
            "university" => session.set_university(value),
            "area" => session.set_area(value),
            "course" => session.set_course_name(value),
            "degree" => session.set_degree_type(value),
            "sort" => match value {
                "university" => session.set_sort(Some(SortKey::University)),
                "degree" => session.set_sort(Some(SortKey::DegreeType)),
                "" | "none" => session.set_sort(None),
                other => {
                    writeln!(out, "unknown sort key '{other}' (university, degree or none)")?;
                    continue;
                }
            },
            "reset" => session.reset(),
            "degrees" => {
                for degree in session.catalog().degree_types() {
                    writeln!(out, "{degree}")?;
                }
                continue;
            }
            "universities" => {
                for university in session.catalog().university_names() {
                    writeln!(out, "{university}")?;
                }
                continue;
            }
            "help" => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            "quit" | "exit" => break,
            other => {
                writeln!(out, "unknown command '{other}', type 'help'")?;
                continue;
            }
        }
        render::render_text(&mut out, session.catalog(), session.outcome())?;
    }
    Ok(())
}
