//! Extraction pipeline
//!
//! One sequential pass: line source -> triple parser -> relation filter.

use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use wdp_core::{AppConfig, Result};
use wdp_parser::{open_dump, read_lines, ParseOutcome, TripleParser};

use crate::{ExtractStats, RelationFiles, RelationSink};

/// Route every parsed line to the sink, in input order
///
/// Malformed lines are logged and counted; read and write errors abort the
/// pass. `progress_interval` of 0 disables progress logging.
pub fn extract<I, S>(
    lines: I,
    parser: &TripleParser,
    sink: &mut S,
    progress_interval: u64,
) -> Result<ExtractStats>
where
    I: IntoIterator<Item = Result<String>>,
    S: RelationSink,
{
    let mut stats = ExtractStats::default();

    for line in lines {
        let line = line?;
        stats.lines_read += 1;

        match parser.parse_line(&line) {
            ParseOutcome::Triple(triple) => {
                stats.triples_parsed += 1;
                if let Some(relation) = triple.relation() {
                    sink.write(relation, &triple.subject, &triple.object)?;
                    stats.record(relation);
                }
            }
            ParseOutcome::Malformed(parts) => {
                stats.malformed_lines += 1;
                warn!(line = stats.lines_read, ?parts, "Skipping malformed triple line");
            }
        }

        if progress_interval > 0 && stats.lines_read % progress_interval == 0 {
            info!(
                lines = stats.lines_read,
                written = stats.triples_written,
                malformed = stats.malformed_lines,
                "Extraction progress"
            );
        }
    }

    Ok(stats)
}

/// Extract person relations from a compressed dump into the output directory
///
/// Output files are opened before the dump, so a bad output directory
/// fails without reading any input.
pub fn run(config: &AppConfig, input: &Path) -> Result<ExtractStats> {
    let started = Instant::now();
    let mut files = RelationFiles::from_config(&config.output)?;
    info!(
        "Extracting person relations from {} into {}",
        input.display(),
        files.dir().display()
    );

    let reader = open_dump(input)?;
    let parser = TripleParser::from_config(&config.parser);

    let mut stats = extract(
        read_lines(reader),
        &parser,
        &mut files,
        config.pipeline.progress_interval,
    )?;
    files.finish()?;

    stats.elapsed_ms = started.elapsed().as_millis() as u64;

    info!(
        lines = stats.lines_read,
        parsed = stats.triples_parsed,
        malformed = stats.malformed_lines,
        written = stats.triples_written,
        elapsed_ms = stats.elapsed_ms,
        "Extraction completed"
    );
    for (relation, count) in &stats.per_relation {
        info!(relation = relation.name(), count, "Relation written");
    }

    Ok(stats)
}
