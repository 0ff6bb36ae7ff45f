use std::path::PathBuf;

use console::style;
use miette::Result;
use msgen::answers::parse_data_pair;
use msgen::render::{compare_with_existing, FileChange};
use msgen::GenerateOptions;

pub struct NewArgs {
    pub output: Option<String>,
    pub data: Vec<String>,
    pub defaults: bool,
    pub answers: Option<PathBuf>,
    pub save_answers: Option<PathBuf>,
    pub templates: Option<PathBuf>,
    pub dry_run: bool,
    pub contents: bool,
}

pub fn run(args: NewArgs) -> Result<()> {
    let data_pairs = args
        .data
        .iter()
        .map(|kv| parse_data_pair(kv))
        .collect::<msgen::error::Result<Vec<_>>>()?;

    let options = GenerateOptions {
        output: args.output,
        data: data_pairs,
        defaults: args.defaults,
        answers: args.answers,
        save_answers: args.save_answers,
        templates: args.templates,
    };

    if !args.dry_run {
        msgen::generate(options)?;
        return Ok(());
    }

    let plan = msgen::plan_generation(options)?;

    let rendered_count = plan.render_plan.files.iter().filter(|f| !f.is_copy).count();
    let copied_count = plan.render_plan.files.len() - rendered_count;

    println!(
        "\n{} Dry run: files that would be generated in {}:",
        style("==>").cyan().bold(),
        style(plan.output_dir.display()).cyan()
    );

    for file in &plan.render_plan.files {
        let change = compare_with_existing(file, &plan.output_dir)?;
        let action = match (&change, file.is_copy) {
            (FileChange::Create, true) => style("copy     ").green(),
            (FileChange::Create, false) => style("create   ").green(),
            (FileChange::Unchanged, _) => style("unchanged").dim(),
            (FileChange::Modify(_) | FileChange::ModifyBinary, _) => style("overwrite").yellow(),
        };
        println!("  {} {}", action, file.relative_path.display());

        if args.contents {
            print_contents(&file.content, &change);
        }
    }

    println!(
        "\nSummary: {} rendered, {} copied (from {})",
        rendered_count, copied_count, plan.source
    );

    if let Some(path) = &plan.save_answers {
        println!("Answers would be saved to {}", style(path.display()).cyan());
    }

    println!(
        "\n{} Dry run, no files written.",
        style("\u{2139}").blue().bold()
    );

    Ok(())
}

fn print_contents(content: &[u8], change: &FileChange) {
    println!("  {}", style("──────").dim());
    match change {
        FileChange::Unchanged => {}
        FileChange::Modify(diff) => {
            for line in diff.lines() {
                let styled = match line.chars().next() {
                    Some('+') => style(line).green(),
                    Some('-') => style(line).red(),
                    _ => style(line),
                };
                println!("  {styled}");
            }
        }
        FileChange::ModifyBinary => {
            println!(
                "  {}",
                style(format!("[binary content, {} bytes]", content.len())).dim()
            );
        }
        FileChange::Create => {
            for line in String::from_utf8_lossy(content).lines() {
                println!("  {line}");
            }
        }
    }
    println!("  {}", style("──────").dim());
    println!();
}
