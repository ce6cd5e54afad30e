use tracing::info;

use crate::cli::commands::ReplayArgs;
use crate::cli::output::{StateJson, format_summary, format_tree};
use crate::io::script::{self, ScriptError};
use crate::model::{Config, DeletePolicy, SequentialIds};
use crate::ops::Outcome;
use crate::state::{Action, Session};

/// A step that did not apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// 1-based position in the script
    pub step: usize,
    pub kind: &'static str,
    pub outcome: Outcome,
}

pub struct ReplayReport {
    pub session: Session,
    pub skipped: Vec<Skipped>,
}

/// Run `actions` against a fresh session. Ids are sequential so the output
/// is reproducible.
pub fn replay_actions(actions: Vec<Action>, delete_policy: DeletePolicy) -> ReplayReport {
    let mut session = Session::new(Box::new(SequentialIds::new()), delete_policy);
    let mut skipped = Vec::new();
    for (i, action) in actions.into_iter().enumerate() {
        let kind = action.kind();
        let outcome = session.dispatch(action);
        if !outcome.is_applied() {
            skipped.push(Skipped {
                step: i + 1,
                kind,
                outcome,
            });
        }
    }
    ReplayReport { session, skipped }
}

pub fn cmd_replay(args: &ReplayArgs, config: &Config) -> Result<(), ScriptError> {
    let actions = script::read_script(&args.script)?;
    let total = actions.len();
    let report = replay_actions(actions, config.behavior.on_category_delete);

    for s in &report.skipped {
        eprintln!("warning: step {} ({}): {}", s.step, s.kind, s.outcome);
    }
    let state = report.session.state();
    info!(
        steps = total,
        skipped = report.skipped.len(),
        summary = %format_summary(state),
        "replay finished"
    );

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&StateJson::from_state(state))?
        );
    } else {
        print!("{}", format_tree(state));
    }
    Ok(())
}
