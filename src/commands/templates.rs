use std::path::PathBuf;

use console::style;
use miette::Result;

use msgen::config::load_settings;
use msgen::render::all_templates;
use msgen::template::TemplateSource;

pub fn run(templates: Option<PathBuf>) -> Result<()> {
    let settings = load_settings()?;
    let source = TemplateSource::from_option(templates.as_deref().or(settings.templates.as_deref()));

    println!(
        "{} {}",
        style("Templates from").bold(),
        style(&source).cyan()
    );

    let names = all_templates();
    let missing = source.missing(names.iter().copied());

    for name in &names {
        if missing.contains(name) {
            println!("  {} {}", style("✗").red(), name);
        } else {
            println!("  {} {}", style("✓").green(), name);
        }
    }

    if !missing.is_empty() {
        println!(
            "\n{} {} of {} template(s) missing",
            style("✗").red().bold(),
            missing.len(),
            names.len()
        );
        std::process::exit(1);
    }

    println!("\n{} All templates present", style("✓").green().bold());
    Ok(())
}
