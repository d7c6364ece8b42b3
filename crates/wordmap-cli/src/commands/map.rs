use crate::cli::MapArgs;
use crate::config::{CliOverrides, PartialAppConfig};
use crate::error::Result;
use crate::output::{self, LayoutReport};
use crate::utils::input;
use tracing::info;
use wordmap::workflows;

pub async fn run(args: MapArgs) -> Result<()> {
    let partial_config = PartialAppConfig::load(args.config.as_deref())?;
    let final_config = partial_config.merge_with_cli(&CliOverrides::from(&args))?;

    let words = input::collect_words(&args.source)?;
    let words = input::apply_dictionary(words, final_config.dictionary.as_ref())?;

    info!("Mapping {} word(s) in input order.", words.len());
    let blocks = workflows::layout::map_words(&words);

    let report = LayoutReport::from_blocks(&words, &blocks);
    output::write_layout(
        &blocks,
        &report,
        final_config.format,
        args.output.output.as_deref(),
    )?;

    info!("Layout uses {}.", report.score);
    Ok(())
}
