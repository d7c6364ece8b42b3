use crate::cli::OptimizeArgs;
use crate::config::{CliOverrides, PartialAppConfig};
use crate::error::Result;
use crate::output::{self, LayoutReport};
use crate::utils::input;
use crate::utils::progress::SearchProgressBar;
use tracing::{info, warn};
use wordmap::engine::progress::{ProgressReporter, StopSignal};
use wordmap::engine::search::{Termination, permutation_budget};
use wordmap::workflows;

pub async fn run(args: OptimizeArgs) -> Result<()> {
    let partial_config = PartialAppConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&CliOverrides::from(&args))?;

    let words = input::collect_words(&args.source)?;
    let words = input::apply_dictionary(words, final_config.dictionary.as_ref())?;

    let budget = permutation_budget(words.len(), final_config.optimization.max_permutations);
    eprintln!(
        "Searching up to {} word order(s) for {} word(s)... (Ctrl-C to stop early)",
        budget,
        words.len()
    );

    let stop = StopSignal::new();
    let signal_task = {
        let stop = stop.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received; finishing with the best layout so far.");
                stop.request_stop();
            }
        })
    };

    let progress_bar = if args.no_progress {
        SearchProgressBar::hidden()
    } else {
        SearchProgressBar::new()
    };
    let reporter =
        ProgressReporter::with_callback(progress_bar.get_callback()).with_stop_signal(stop);

    info!("Invoking the layout optimization workflow...");
    let result = tokio::task::block_in_place(|| {
        workflows::layout::optimize_layout(&words, &final_config.optimization, &reporter)
    });
    signal_task.abort();
    let result = result?;

    match result.termination {
        Termination::Exhausted => {}
        Termination::CapReached => eprintln!(
            "Note: stopped at the cap of {} word orders; a better layout may exist.",
            result.permutations_tried
        ),
        Termination::Stopped => eprintln!(
            "Note: interrupted after {} word orders; showing the best layout found.",
            result.permutations_tried
        ),
    }
    eprintln!(
        "Best layout: {} (input order: {}).",
        result.score, result.baseline
    );

    let report = LayoutReport::from_optimization(&result);
    output::write_layout(
        result.blocks(),
        &report,
        final_config.format,
        args.output.output.as_deref(),
    )?;
    Ok(())
}
