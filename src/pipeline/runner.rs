use super::archive::WorkArchive;
use super::indexer::{file_lines, map_line, ReduceKey};
use super::metadata::{MetadataCatalog, WorkMetadata};
use crate::parser::play::{titlecase, EPILOG};
use crate::store::memory::IndexStore;

use anyhow::{Context, Result};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tokio::task::JoinSet;
use uuid::Uuid;

/// Tuning knobs for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of parallel shards for the index stage's map and reduce
    /// phases. The metadata stage parallelizes per file regardless.
    pub shards: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { shards: 16 }
    }
}

/// Counters reported after a successful run.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub files: usize,
    pub degraded_files: usize,
    pub lines_mapped: usize,
    pub reduce_keys: usize,
}

/// Orchestrates the two map-reduce stages against one archive.
pub struct IndexPipeline {
    store: Arc<IndexStore>,
    config: PipelineConfig,
}

impl IndexPipeline {
    pub fn new(store: Arc<IndexStore>, config: PipelineConfig) -> Self {
        Self { store, config }
    }

    /// Runs the full pipeline: metadata stage, barrier, index stage.
    ///
    /// Counts accumulate on top of whatever the store already holds;
    /// callers wanting a rebuild must clear the store first.
    pub async fn build(&self, archive: &dyn WorkArchive) -> Result<PipelineReport> {
        let run_id = Uuid::new_v4();
        tracing::info!("Starting index pipeline run {}", run_id);

        let entries = archive
            .entries()
            .context("failed to enumerate work archive")?;
        tracing::info!("Archive contains {} files", entries.len());

        let mut report = PipelineReport {
            files: entries.len(),
            ..Default::default()
        };

        // Stage 1: per-file metadata extraction. Embarrassingly parallel,
        // no shared state across files.
        let mut metadata_tasks = JoinSet::new();
        for entry in &entries {
            let file_index = entry.index;
            let name = entry.name.clone();
            let text = entry.contents.clone();
            metadata_tasks
                .spawn(async move { (file_index, WorkMetadata::extract(&name, &text)) });
        }

        let mut catalog = MetadataCatalog::new();
        while let Some(joined) = metadata_tasks.join_next().await {
            let (file_index, metadata) = joined.context("metadata task panicked")?;
            if metadata.title.is_empty() {
                report.degraded_files += 1;
            }
            catalog.insert(file_index, metadata);
        }
        // Barrier: every Stage-2 mapper reads the complete catalog, so
        // nothing below starts until all Stage-1 tasks have joined.
        let catalog = Arc::new(catalog);
        tracing::info!("Metadata stage complete, {} files cataloged", catalog.len());

        // Stage 2 map: shard lines across parallel tasks, each resolving
        // characters through the shared read-only catalog.
        let mut work_items: Vec<(usize, usize, String)> = Vec::new();
        for entry in &entries {
            for (offset, line) in file_lines(&entry.contents) {
                if !line.trim().is_empty() {
                    work_items.push((entry.index, offset, line.to_string()));
                }
            }
        }
        report.lines_mapped = work_items.len();

        let shards = self.config.shards.max(1);
        let chunk_size = work_items.len().div_ceil(shards).max(1);
        let mut map_tasks = JoinSet::new();
        for chunk in work_items.chunks(chunk_size) {
            let chunk = chunk.to_vec();
            let catalog = catalog.clone();
            map_tasks.spawn(async move {
                let mut emissions = Vec::new();
                for (file_index, offset, line) in chunk {
                    match map_line(&catalog, file_index, offset, &line) {
                        Some(pairs) => emissions.extend(pairs),
                        None => {
                            tracing::error!(
                                "No metadata for file index {}, skipping line at offset {}",
                                file_index,
                                offset
                            );
                        }
                    }
                }
                emissions
            });
        }

        let mut grouped: HashMap<ReduceKey, Vec<String>> = HashMap::new();
        while let Some(joined) = map_tasks.join_next().await {
            for (key, line) in joined.context("map task panicked")? {
                grouped.entry(key).or_default().push(line);
            }
        }
        report.reduce_keys = grouped.len();
        tracing::info!("Map phase emitted {} reduce keys", grouped.len());

        // Stage 2 reduce: partition keys by hash so each shard owns a
        // disjoint key range, then upsert into the store.
        let mut partitions: Vec<Vec<(ReduceKey, Vec<String>)>> = vec![Vec::new(); shards];
        for (key, lines) in grouped {
            let partition = partition_for(&key, shards);
            partitions[partition].push((key, lines));
        }

        let mut reduce_tasks = JoinSet::new();
        for partition in partitions {
            let store = self.store.clone();
            reduce_tasks.spawn(async move {
                for (key, lines) in partition {
                    let character = if key.character == EPILOG {
                        EPILOG.to_string()
                    } else {
                        titlecase(&key.character)
                    };
                    store.apply_reduction(&key.word, &key.work, &character, &lines);
                }
            });
        }
        while let Some(joined) = reduce_tasks.join_next().await {
            joined.context("reduce task panicked")?;
        }

        tracing::info!(
            "Index pipeline run {} finished: {} files ({} degraded), {} lines, {} keys",
            run_id,
            report.files,
            report.degraded_files,
            report.lines_mapped,
            report.reduce_keys
        );
        Ok(report)
    }
}

fn partition_for(key: &ReduceKey, shards: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    (hasher.finish() as usize) % shards
}
