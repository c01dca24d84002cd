use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::onboard::{
    DbSubmitter, OnboardingFlow, contractor_wizard, load_answers, run_answers, run_interactive,
};
use crate::core::wizard::{TaxStep, Wizard, WizardStep};
use crate::db::pool::DbPool;
use crate::db::queries::list_submissions;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::table::{Column, Table};
use std::io;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Onboard {
        flow,
        answers,
        interactive,
        list,
    } = cmd
    {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        if *list {
            return print_submissions(&pool, *flow, cfg);
        }

        match flow {
            OnboardingFlow::Contractor => {
                drive(contractor_wizard(cfg), &mut pool, answers.as_deref(), *interactive)
            }
            OnboardingFlow::Tax => drive(Wizard::<TaxStep>::new(), &mut pool, answers.as_deref(), *interactive),
        }?;
    }
    Ok(())
}

fn drive<S: WizardStep>(
    mut wizard: Wizard<S>,
    pool: &mut DbPool,
    answers: Option<&str>,
    interactive: bool,
) -> AppResult<()> {
    let mut submitter = DbSubmitter::new(pool);

    if let Some(file) = answers {
        let values = load_answers(Path::new(file))?;
        run_answers(&mut wizard, &values, &mut submitter)?;
        return Ok(());
    }

    if interactive {
        info(format!(
            "Onboarding '{}': press enter to keep a value, '<' to go back.",
            S::FLOW
        ));
        let stdin = io::stdin();
        let outcome = run_interactive(&mut wizard, &mut stdin.lock(), &mut io::stdout(), &mut submitter)?;
        if outcome.is_none() {
            warning("Input ended: nothing was submitted.");
        }
        return Ok(());
    }

    info("Nothing to do: use --answers FILE, --interactive or --list.");
    Ok(())
}

fn print_submissions(pool: &DbPool, flow: OnboardingFlow, cfg: &Config) -> AppResult<()> {
    let rows = list_submissions(&pool.conn, Some(flow.as_str()))?;

    if rows.is_empty() {
        println!("⚠️  No '{}' submissions found.", flow.as_str());
        return Ok(());
    }

    let sep = cfg.separator_char.chars().next().unwrap_or('-');
    let mut table = Table::new(
        vec![
            Column::numeric("ID", 3),
            Column::new("FLOW", 10),
            Column::new("STATUS", 8),
            Column::new("CREATED", 25),
            Column::new("NAME", 20),
        ],
        sep,
    );

    for s in &rows {
        let field = |k: &str| s.payload.get(k).and_then(|v| v.as_str()).unwrap_or("");
        let name = match (field("first_name"), field("last_name"), field("account_holder_name")) {
            ("", "", holder) => holder.to_string(),
            (first, last, _) => format!("{first} {last}").trim().to_string(),
        };

        table.add_row(vec![
            s.id.to_string(),
            s.flow.clone(),
            s.status.clone(),
            s.created_at.clone(),
            name,
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
