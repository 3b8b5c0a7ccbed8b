use clap::Parser;
use gpa_core::*;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "gpa")]
#[command(version, about = "Transcript GPA analysis and retake planning", long_about = None)]
struct Cli {
    /// Path to the course results file (one CODE,CREDITS,GRADE per line)
    results: PathBuf,

    /// Emit the analysis as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Override the config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    gpa_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let table = get_default_table();
    let errors = table.validate();
    if !errors.is_empty() {
        eprintln!("Grade table validation errors:");
        for error in errors {
            eprintln!("  - {error}");
        }
        return Err(Error::Config("invalid grade table".into()));
    }

    let transcript = parse_results_file(&cli.results)?;
    let report = analyze(&transcript, table, config.projection.retake_grade)?;

    if cli.json {
        let full = AnalysisReport::new(cli.results.display().to_string(), &transcript, report);
        println!("{}", serde_json::to_string_pretty(&full)?);
    } else {
        display_report(&report, &config);
    }

    Ok(())
}

fn display_report(report: &GpaReport, config: &Config) {
    println!();
    println!("Current GPA: {:.2}", report.current_gpa);

    if !report.must_retake.is_empty() {
        println!();
        println!("MUST RETAKE (failing or withheld):");
        println!("----------------------------------------");
        for course in &report.must_retake {
            println!(
                "- {} (Current: {}, Credits: {})",
                course.code, course.grade, course.credits
            );
        }
    }

    if !report.recommended.is_empty() {
        println!();
        println!("RECOMMENDED TO RETAKE (D-range grades):");
        println!("----------------------------------------");
        for rec in report
            .recommended
            .iter()
            .take(config.display.max_recommendations)
        {
            println!(
                "- {} (Current: {}, Credits: {})",
                rec.record.code, rec.record.grade, rec.record.credits
            );
            println!(
                "  Potential GPA: {:.2} (+{:.2})",
                rec.projected_gpa,
                rec.projected_gpa - report.current_gpa
            );
        }

        let hidden = report
            .recommended
            .len()
            .saturating_sub(config.display.max_recommendations);
        if hidden > 0 {
            println!("  ... and {hidden} more");
        }
    }

    println!();
    println!(
        "Projected GPA after mandatory retakes: {:.2} (+{:.2})",
        report.projected_after_mandatory,
        report.projected_after_mandatory - report.current_gpa
    );
    println!(
        "Projected GPA after all retakes:       {:.2} (+{:.2})",
        report.projected_after_all,
        report.projected_after_all - report.current_gpa
    );
    println!();
}
