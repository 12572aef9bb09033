use crate::infra::build_generator;
use clap::{ArgGroup, Args};
use fantasy_salary::config::AppConfig;
use fantasy_salary::error::AppError;
use fantasy_salary::telemetry;
use fantasy_salary::workflows::salary::{validate_match_url, PlayerSalary};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["match_url", "html_file"])
))]
pub(crate) struct GenerateArgs {
    /// Scorecard page to fetch (must reference the configured source domain)
    #[arg(long)]
    pub(crate) match_url: Option<String>,
    /// Previously saved scorecard HTML to parse instead of fetching
    #[arg(long)]
    pub(crate) html_file: Option<PathBuf>,
    /// Print the raw JSON payload instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let GenerateArgs {
        match_url,
        html_file,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init_stderr(&config.telemetry, config.environment)?;
    let generator = build_generator(&config.salary)?;

    let salaries = match (match_url, html_file) {
        (Some(url), _) => {
            let url = validate_match_url(Some(&url), &config.salary.source_domain)?;
            generator.generate(&url).await?
        }
        (None, Some(path)) => {
            let html = std::fs::read_to_string(path)?;
            generator.generate_from_html(&html)?
        }
        (None, None) => {
            return Err(AppError::InvalidRequest(
                "either --match-url or --html-file is required".to_string(),
            ))
        }
    };

    if json {
        let payload =
            serde_json::to_string_pretty(&salaries).map_err(|err| AppError::Io(err.into()))?;
        println!("{payload}");
    } else {
        print!("{}", render_salary_table(&salaries));
    }

    Ok(())
}

pub(crate) fn render_salary_table(salaries: &[PlayerSalary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Player salaries ({} players)", salaries.len());

    for salary in salaries {
        let line = match salary {
            PlayerSalary::Valued {
                player_id,
                player_name,
                base_salary,
                performance: Some(performance),
                final_salary,
            } => format!(
                "- {player_name} [{player_id}]: {base_salary:.0} -> {final_salary:.0} ({} runs off {} balls, {}x4, {}x6, SR {:.2})",
                performance.runs,
                performance.balls,
                performance.fours,
                performance.sixes,
                performance.strike_rate
            ),
            PlayerSalary::Valued {
                player_id,
                player_name,
                base_salary,
                performance: None,
                ..
            } => format!("- {player_name} [{player_id}]: {base_salary:.0} (did not bat)"),
            PlayerSalary::Failed {
                player_id,
                player_name,
                error,
            } => format!("- {player_name} [{player_id}]: error: {error}"),
        };
        let _ = writeln!(out, "{line}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fantasy_salary::workflows::salary::BattingPerformance;

    #[test]
    fn table_covers_each_outcome() {
        let salaries = vec![
            PlayerSalary::Valued {
                player_id: "player1".to_string(),
                player_name: "Virat Kohli".to_string(),
                base_salary: 50_000.0,
                performance: Some(BattingPerformance {
                    name: "Kohli".to_string(),
                    runs: 112,
                    balls: 98,
                    fours: 10,
                    sixes: 4,
                    strike_rate: 114.28,
                }),
                final_salary: 67_100.0,
            },
            PlayerSalary::Valued {
                player_id: "player3".to_string(),
                player_name: "Jasprit Bumrah".to_string(),
                base_salary: 45_000.0,
                performance: None,
                final_salary: 45_000.0,
            },
            PlayerSalary::Failed {
                player_id: "player4".to_string(),
                player_name: "Pat Cummins".to_string(),
                error: "scoring config has no weight for 'runs'".to_string(),
            },
        ];

        let table = render_salary_table(&salaries);
        assert!(table.starts_with("Player salaries (3 players)"));
        assert!(table.contains("Virat Kohli [player1]: 50000 -> 67100 (112 runs off 98 balls"));
        assert!(table.contains("Jasprit Bumrah [player3]: 45000 (did not bat)"));
        assert!(table.contains("Pat Cummins [player4]: error: scoring config has no weight"));
    }
}
