use crate::cli::commands::pipeline_config;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::run_pipeline;
use crate::errors::AppResult;
use crate::export::report_sheets;
use crate::ingest::read_csv;
use crate::utils::formatting::bold;
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        input,
        totals,
        threshold,
        exclude,
    } = cmd
    {
        let pipeline_cfg = pipeline_config(cfg, *threshold, exclude);

        let table = read_csv(Path::new(input))?;
        let report = run_pipeline(table, &pipeline_cfg)?;

        let sheets = report_sheets(&report);
        let wanted: &[usize] = if *totals { &[1, 2, 3] } else { &[0] };

        for &i in wanted {
            let sheet = &sheets[i];
            println!("\n{}", bold(sheet.name));

            if sheet.rows.is_empty() {
                println!("(no rows)");
                continue;
            }

            let mut out = Table::new(sheet.headers.clone());
            for row in &sheet.rows {
                out.add_row(row.clone());
            }
            print!("{}", out.render());
        }
    }
    Ok(())
}
