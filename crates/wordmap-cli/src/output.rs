use crate::cli::OutputFormat;
use crate::error::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;
use wordmap::core::io::render::TextGrid;
use wordmap::core::io::traits::LayoutWriter;
use wordmap::core::models::block::{Block, BlockSummary};
use wordmap::engine::search::Termination;
use wordmap::engine::state::LayoutScore;
use wordmap::workflows::layout::OptimizationResult;

#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub baseline: LayoutScore,
    pub permutations_tried: u64,
    pub termination: Termination,
    pub permutation: Vec<usize>,
}

/// JSON document describing a finished layout.
#[derive(Debug, Serialize)]
pub struct LayoutReport<'a> {
    pub words: &'a [String],
    pub score: LayoutScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchReport>,
    pub blocks: Vec<BlockSummary>,
}

impl<'a> LayoutReport<'a> {
    pub fn from_blocks(words: &'a [String], blocks: &[Block]) -> Self {
        Self {
            words,
            score: LayoutScore {
                block_count: blocks.len(),
                total_area: blocks.iter().map(Block::bounding_area).sum(),
            },
            search: None,
            blocks: blocks.iter().map(Block::summary).collect(),
        }
    }

    pub fn from_optimization(result: &'a OptimizationResult) -> Self {
        Self {
            words: result.ordered_words(),
            score: result.score,
            search: Some(SearchReport {
                baseline: result.baseline,
                permutations_tried: result.permutations_tried,
                termination: result.termination,
                permutation: result.permutation.clone(),
            }),
            blocks: result.summaries(),
        }
    }
}

pub fn write_layout(
    blocks: &[Block],
    report: &LayoutReport,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    match output {
        Some(path) => {
            info!("Writing {:?} layout to {:?}", format, path);
            let mut writer = BufWriter::new(File::create(path)?);
            write_formatted(blocks, report, format, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_formatted(blocks, report, format, &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn write_formatted(
    blocks: &[Block],
    report: &LayoutReport,
    format: OutputFormat,
    writer: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => TextGrid::write_to(blocks, writer)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
