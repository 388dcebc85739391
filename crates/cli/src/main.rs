use clap::{Parser, Subcommand};
use mrd_core::{recommendations, valid_subgroups, valid_time_points, DisplayBlock, DisplayTable};
use mrd_types::RiskCategory;

#[derive(Parser)]
#[command(name = "mrd")]
#[command(about = "AML MRD monitoring recommendation lookup")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List ELN risk categories
    Risks,
    /// List molecular subgroups for a risk category
    Subgroups {
        /// Risk category id (favorable, intermediate, adverse)
        risk: String,
    },
    /// List valid assessment time points for a subgroup
    TimePoints {
        /// Subgroup id (e.g. NPM1mut_wo_FLT3ITD)
        subgroup: String,
    },
    /// Show the monitoring recommendation for a full selection
    Recommend {
        /// Risk category id
        risk: String,
        /// Subgroup id
        subgroup: String,
        /// Time point id (e.g. cycles_2)
        time_point: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let catalog = mrd_dataset::catalog();

    match cli.command {
        Some(Commands::Risks) => {
            for risk in RiskCategory::ALL {
                println!("{}  {}", risk.id(), risk.label());
            }
        }
        Some(Commands::Subgroups { risk }) => {
            let subgroups = valid_subgroups(catalog, &risk);
            if subgroups.is_empty() {
                eprintln!("No subgroups for risk category {risk:?}");
            } else {
                for subgroup in subgroups {
                    println!("{}  {}", subgroup.id, subgroup.label);
                }
            }
        }
        Some(Commands::TimePoints { subgroup }) => {
            let time_points = valid_time_points(catalog, &subgroup);
            if time_points.is_empty() {
                eprintln!("No time points for subgroup {subgroup:?}");
            } else {
                for time_point in time_points {
                    println!("{}  {}", time_point.id(), time_point.label());
                }
            }
        }
        Some(Commands::Recommend {
            risk,
            subgroup,
            time_point,
        }) => {
            let rec = recommendations(&risk, &subgroup, &time_point);
            if rec.is_empty() {
                println!("No recommendation for this combination.");
                return;
            }
            if let Some(guidance) = &rec.guidance {
                println!("{}", guidance.heading);
                println!("  {}", guidance.body);
                println!();
            }
            for block in &rec.blocks {
                match block {
                    DisplayBlock::Advisory { text } => {
                        println!("ADVISORY: {text}");
                        println!();
                    }
                    DisplayBlock::Table(table) => print_table(table),
                }
            }
        }
        None => {
            println!("Use 'mrd --help' for commands");
        }
    }
}

fn print_table(table: &DisplayTable) {
    println!("== {}", table.title);
    println!("Timepoint: {}", table.time_point_label);
    println!("Recommended assay: {}", table.assay);
    println!("Recommended tissue: {}", table.tissue);
    println!("[{}]", table.column_header);
    for row in &table.rows {
        let tissue = match (&row.tissue, table.tissue_column) {
            (Some(t), true) => format!("{t}: "),
            _ => String::new(),
        };
        println!(
            "  {}{} | {} | {} ({})",
            tissue, row.threshold, row.definition, row.response, row.tier
        );
    }
    for footnote in &table.footnotes {
        println!("  [{}] {}", footnote.marker, footnote.text);
    }
    println!();
}
