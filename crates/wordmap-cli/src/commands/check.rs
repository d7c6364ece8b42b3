use crate::cli::CheckArgs;
use crate::config::{CliOverrides, PartialAppConfig};
use crate::error::{CliError, Result};
use crate::utils::input;
use tracing::info;
use wordmap::core::io::dictionary::DictionaryTrie;

pub async fn run(args: CheckArgs) -> Result<()> {
    let partial_config = PartialAppConfig::load(args.config.as_deref())?;
    let final_config = partial_config.merge_with_cli(&CliOverrides::from(&args))?;
    let dictionary = final_config.dictionary.ok_or_else(|| {
        CliError::Argument(
            "No dictionary given. Pass --dictionary or set dictionary.path in the config file."
                .to_string(),
        )
    })?;

    let words = input::collect_words(&args.source)?;
    info!("Loading dictionary from {:?}", &dictionary.path);
    let trie = DictionaryTrie::load_cached(&dictionary.path)?;
    info!("Dictionary holds {} word(s).", trie.len());

    for word in &words {
        let mark = if trie.contains_word(word) { "✓" } else { "✗" };
        println!("{} {}", mark, word);
    }

    let (known, unknown) = input::partition_known(&words, trie);
    println!(
        "{} of {} word(s) found in the dictionary.",
        known.len(),
        words.len()
    );
    if !unknown.is_empty() {
        println!("Missing: {}", unknown.join(", "));
    }
    Ok(())
}
