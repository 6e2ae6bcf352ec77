use clap::Parser;
use polars::prelude::{AnyValue, DataFrame};
use project_model::export::{DEFAULT_RESOURCE_FIELDS, DEFAULT_TASK_FIELDS};
use project_model::{
    Calendar, FieldError, Project, ProjectReader, ReaderConfig, Result, Task, UnreadableDates,
    WEEKDAYS, logging, resources_frame_with, tasks_frame_with,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "project-query")]
#[command(about = "Summarise a converted project record set")]
struct Args {
    /// Record set written by the converter, as JSON
    file: PathBuf,

    /// IANA zone for timestamps without an offset
    #[arg(short, long, default_value = "UTC")]
    zone: String,

    /// Keep going when a task's parent chain loops
    #[arg(long)]
    lenient: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn cell(av: &AnyValue) -> String {
    match av {
        AnyValue::Null => String::new(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::Float64(v) => v.to_string(),
        AnyValue::Boolean(v) => v.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        _ => av.to_string(),
    }
}

fn render_df_as_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let col_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        rows.push(
            columns
                .iter()
                .map(|col| col.get(row_idx).map(|av| cell(&av)).unwrap_or_default())
                .collect(),
        );
    }

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.len()).collect();
    for row in &rows {
        for (ci, s) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(s.len());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let line = |cells: &[String]| {
        let mut out = String::from("|");
        for (ci, s) in cells.iter().enumerate() {
            out.push(' ');
            out.push_str(s);
            out.push_str(&" ".repeat(widths[ci].saturating_sub(s.len()) + 1));
            out.push('|');
        }
        out
    };

    let mut out = format!("{sep}\n{}\n{sep}\n", line(&col_names));
    for row in &rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn task_label(task: &Task) -> String {
    task.name()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("(task {})", task.unique_id()))
}

/// Unreadable dates print as `?` and are listed at the end of the report.
fn list_properties(project: &Project) {
    let props = project.properties();
    let fmt = |date: std::result::Result<Option<chrono::DateTime<chrono_tz::Tz>>, FieldError>| {
        match date {
            Ok(Some(d)) => d.format("%Y-%m-%d %H:%M").to_string(),
            Ok(None) => "-".into(),
            Err(_) => "?".into(),
        }
    };
    println!(
        "Project: {} (Start={} Finish={} Zone={})",
        props.project_title().or(props.name()).unwrap_or("-"),
        fmt(props.start_date()),
        fmt(props.finish_date()),
        project.zone()
    );
    println!();
}

fn list_hierarchy(project: &Project, task: &Task, indent: usize) {
    println!("{}Task: {}", "   ".repeat(indent), task_label(task));
    for child in task.child_tasks(project) {
        list_hierarchy(project, child, indent + 1);
    }
}

fn list_assignments(project: &Project) {
    for task in project.tasks() {
        let mut assignments = task.assignments(project).peekable();
        if assignments.peek().is_none() {
            continue;
        }
        println!("Assignments for task {}:", task_label(task));
        for assignment in assignments {
            let resource = assignment
                .resource(project)
                .and_then(|r| r.name())
                .unwrap_or("(unassigned)");
            println!("   {resource}");
        }
    }
    for resource in project.resources() {
        let mut assignments = resource.assignments(project).peekable();
        if assignments.peek().is_none() {
            continue;
        }
        println!(
            "Assignments for resource {}:",
            resource.name().unwrap_or("(unnamed)")
        );
        for assignment in assignments {
            let task = assignment
                .task(project)
                .map(task_label)
                .unwrap_or_else(|| "(missing task)".into());
            println!("   {task}");
        }
    }
    println!();
}

fn list_predecessors(project: &Project) {
    for task in project.tasks() {
        if task.predecessors().is_empty() {
            continue;
        }
        println!("{} predecessors:", task_label(task));
        for relation in task.predecessors() {
            let name = relation
                .predecessor_task(project)
                .map(task_label)
                .unwrap_or_else(|| format!("(missing {})", relation.predecessor_task_unique_id()));
            println!(
                "   Task: {name} Type: {} Lag: {}",
                relation.relation_type(),
                relation.lag()
            );
        }
    }
    println!();
}

fn list_calendar(project: &Project, calendar: &Calendar) {
    let base = calendar
        .base_calendar(project)
        .map(|base| format!(" (base {})", base.name()))
        .unwrap_or_default();
    println!("Calendar: {}{base}", calendar.name());
    let working: Vec<String> = WEEKDAYS
        .iter()
        .filter(|&&day| calendar.is_working_day(project, day))
        .map(|day| day.to_string())
        .collect();
    println!("   Working days: {}", working.join(" "));
    for exception in calendar.exceptions() {
        let range = match (exception.recurrence(), exception.from_date(), exception.to_date()) {
            (Some(recurrence), _, _) => match recurrence.dates() {
                Ok(dates) => format!("recurring, {} dates", dates.len()),
                Err(_) => "(bad dates)".into(),
            },
            (None, Ok(Some(from)), Ok(Some(to))) => format!("{from}..{to}"),
            _ => "(bad dates)".into(),
        };
        println!(
            "   Exception {} {range}: {}",
            exception.name().unwrap_or(""),
            exception.day_type()
        );
    }
}

fn query(args: &Args) -> Result<()> {
    let config = ReaderConfig::default()
        .with_zone_name(&args.zone)?
        .with_reject_parent_cycles(!args.lenient);
    let project = ProjectReader::new(config).read_path(&args.file)?;

    list_properties(&project);

    println!("Resources:");
    print!(
        "{}",
        render_df_as_text_table(&resources_frame_with(
            &project,
            DEFAULT_RESOURCE_FIELDS,
            UnreadableDates::Null
        )?)
    );
    println!();

    println!("Tasks:");
    print!(
        "{}",
        render_df_as_text_table(&tasks_frame_with(
            &project,
            DEFAULT_TASK_FIELDS,
            UnreadableDates::Null
        )?)
    );
    println!();

    println!("Hierarchy:");
    for task in project.root_tasks() {
        list_hierarchy(&project, task, 0);
    }
    println!();

    list_assignments(&project);
    list_predecessors(&project);

    for calendar in project.calendars() {
        list_calendar(&project, calendar);
    }

    let errors = project.date_errors();
    if !errors.is_empty() {
        println!();
        println!("Unreadable dates: {}", errors.len());
        for error in &errors {
            println!("   {error}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match query(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
